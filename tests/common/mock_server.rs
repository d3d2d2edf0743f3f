//! Mock Deezer server for testing the HTTP client.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::IntoResponse;
use musiclib::clients::DeezerClient;
use musiclib::config::ConfigBuilder;
use parking_lot::Mutex;
use reqwest::Url;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub query: Option<String>,
}

impl CapturedRequest {
    /// Decoded query pairs, in order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let url = Url::parse(&format!("http://mock/?{}", self.query.as_deref().unwrap_or("")))
            .expect("valid query");
        url.query_pairs().into_owned().collect()
    }
}

/// A mock response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"message": "mock failure"}"#.to_string(),
        }
    }
}

#[derive(Clone)]
struct MockState {
    routes: Arc<HashMap<String, MockResponse>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockServer {
    pub base_url: Url,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    task: JoinHandle<()>,
}

impl MockServer {
    /// Serve `routes` (keyed by request path) on a free local port.
    pub async fn start(routes: &[(&str, MockResponse)]) -> Self {
        Self::start_under("", routes).await
    }

    /// Like `start`, but the client base URL carries `prefix` as a path.
    pub async fn start_under(prefix: &str, routes: &[(&str, MockResponse)]) -> Self {
        let state = MockState {
            routes: Arc::new(
                routes
                    .iter()
                    .map(|(path, response)| (path.to_string(), response.clone()))
                    .collect(),
            ),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = state.requests.clone();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(serve).with_state(state);
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        MockServer {
            base_url: Url::parse(&format!("http://{addr}{prefix}")).unwrap(),
            requests,
            task,
        }
    }

    pub fn client(&self) -> DeezerClient {
        let config = ConfigBuilder::new()
            .base_url(self.base_url.as_str())
            .user_agent("musiclib-tests")
            .build()
            .unwrap();
        DeezerClient::from_config(&config).unwrap()
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve(State(state): State<MockState>, uri: Uri) -> impl IntoResponse {
    state.requests.lock().push(CapturedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
    });

    let (status, body) = match state.routes.get(uri.path()) {
        Some(response) => (
            StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            response.body.clone(),
        ),
        None => (StatusCode::NOT_FOUND, r#"{"message": "not mocked"}"#.to_string()),
    };
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

/// Base URL of a local port nothing listens on.
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
