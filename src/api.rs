// API client module: a small blocking HTTP client that talks to the
// chucknorris.io jokes service. Every call is one GET, one JSON body and
// either a value or an `ApiError`; nothing is retried or cached.

use crate::error::ApiError;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.chucknorris.io";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings used to build an [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// When false, proxy environment variables are ignored.
    pub use_system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: DEFAULT_TIMEOUT,
            use_system_proxy: true,
        }
    }
}

/// Stateless client holding a reqwest blocking client and the base URL
/// of the jokes service.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Body of `/jokes/random`, and of each search hit. The service sends
/// more fields (id, url, icon_url, ...) but only `value` is used.
#[derive(Deserialize, Debug)]
struct JokePayload {
    value: String,
}

/// Body of `/jokes/search`.
#[derive(Deserialize, Debug)]
struct SearchPayload {
    #[serde(default)]
    result: Vec<JokePayload>,
}

impl ApiClient {
    pub fn with_config(config: ClientConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder().timeout(config.timeout);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(|e| ApiError::Client(e.to_string()))?;
        Ok(ApiClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one random joke, optionally restricted to `category`.
    /// An unknown category comes back from the service as 404 and is
    /// reported as `ApiError::NotFound`.
    pub fn fetch_random_joke(&self, category: Option<&str>) -> Result<String, ApiError> {
        let joke: JokePayload = match category {
            Some(c) if c.trim().is_empty() => {
                return Err(ApiError::InvalidInput("Category cannot be empty.".into()));
            }
            Some(c) => self.get_json("/jokes/random", &[("category", c)])?,
            None => self.get_json("/jokes/random", &[])?,
        };
        Ok(joke.value)
    }

    /// Fetch the category labels, in the order the service returns them.
    pub fn fetch_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/jokes/categories", &[])
    }

    /// Search jokes containing `query`. The query is validated before any
    /// request is made, and an empty hit list is an error.
    pub fn search_jokes(&self, query: &str) -> Result<Vec<String>, ApiError> {
        if query.trim().is_empty() {
            return Err(ApiError::InvalidInput("Search query cannot be empty.".into()));
        }

        let data: SearchPayload = self.get_json("/jokes/search", &[("query", query)])?;
        let jokes: Vec<String> = data.result.into_iter().map(|j| j.value).collect();

        if jokes.is_empty() {
            return Err(ApiError::NoResults {
                query: query.to_string(),
            });
        }
        Ok(jokes)
    }

    /// GET `endpoint` with `params`, check the status and decode the body.
    fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, ?params, "sending request");

        let res = self
            .client
            .get(&url)
            .query(params)
            .send()
            .map_err(|e| {
                warn!(%url, error = %e, "request failed");
                ApiError::from(e)
            })?;

        let status = res.status();
        debug!(%url, status = status.as_u16(), "received response");

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            warn!(%url, status = status.as_u16(), "unexpected status");
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = res.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
