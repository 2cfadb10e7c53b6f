// Error types for the API client. Every failure the client can hit is
// turned into an `ApiError` so the command layer can print a single line
// and exit cleanly instead of surfacing a raw transport error.

use thiserror::Error;

/// Errors returned by [`crate::api::ApiClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Host unreachable, connection refused or any other transport error.
    #[error("Connection error: could not reach the API ({0})")]
    Connection(String),

    #[error("The request timed out")]
    Timeout,

    /// The service answered 404, usually an unknown category.
    #[error("Resource not found or invalid request")]
    NotFound,

    /// Any other non-success status.
    #[error("HTTP error {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The body was not valid JSON or lacked an expected field.
    #[error("Could not decode API response: {0}")]
    Decode(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("No jokes found for query: '{query}'")]
    NoResults { query: String },
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connection,
    NotFound,
    HttpStatus,
    Decode,
    InvalidInput,
    NoResults,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Client(_) | ApiError::Connection(_) | ApiError::Timeout => {
                ErrorKind::Connection
            }
            ApiError::NotFound => ErrorKind::NotFound,
            ApiError::HttpStatus { .. } => ErrorKind::HttpStatus,
            ApiError::Decode(_) => ErrorKind::Decode,
            ApiError::InvalidInput(_) => ErrorKind::InvalidInput,
            ApiError::NoResults { .. } => ErrorKind::NoResults,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::Client(err.to_string())
        } else {
            ApiError::Connection(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
