//! Loopback HTTP server used by the integration tests.
//!
//! Serves one canned response to every request and records each request
//! line, so tests can check both what the client decoded and what it asked
//! for. The server runs on its own tokio runtime because the client under
//! test is blocking. Test URLs always use `127.0.0.1` with an explicit port.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

use chuck_cli::{ApiClient, ClientConfig};

pub struct MockServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    // Dropping the runtime stops the server.
    _runtime: Runtime,
}

impl MockServer {
    /// Answer every request with `status` and a JSON `body`.
    pub fn start(status: u16, body: &str) -> Self {
        Self::serve(status, body, None)
    }

    /// Accept requests but hold the response far longer than any client
    /// timeout used in the tests.
    pub fn silent() -> Self {
        Self::serve(200, "{}", Some(Duration::from_secs(60)))
    }

    fn serve(status: u16, body: &str, delay: Option<Duration>) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let listener = runtime.block_on(TcpListener::bind("127.0.0.1:0")).unwrap();
        let addr = listener.local_addr().unwrap();

        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        let status = StatusCode::from_u16(status).unwrap();
        let body = Bytes::from(body.to_string());

        runtime.spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else { continue };
                let log = Arc::clone(&log);
                let body = body.clone();

                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        let log = Arc::clone(&log);
                        let body = body.clone();
                        async move {
                            let line =
                                format!("{} {} {:?}", req.method(), req.uri(), req.version());
                            log.lock().unwrap().push(line);
                            if let Some(delay) = delay {
                                tokio::time::sleep(delay).await;
                            }
                            Response::builder()
                                .status(status)
                                .header("Content-Type", "application/json")
                                .body(Full::new(body))
                        }
                    });

                    // Clients that time out drop the connection mid-request.
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        MockServer {
            addr,
            requests,
            _runtime: runtime,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request lines received so far, e.g. `GET /jokes/categories HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// A base URL nothing is listening on.
pub fn closed_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn client_for(base_url: &str, timeout: Duration) -> ApiClient {
    ApiClient::with_config(ClientConfig {
        base_url: base_url.to_string(),
        timeout,
        use_system_proxy: false,
    })
    .unwrap()
}
