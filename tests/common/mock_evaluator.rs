//! Mock evaluation service for integration tests.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A scripted response the mock returns for one request.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl MockResponse {
    /// 200 with `{"result": value}`.
    pub fn result(value: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: serde_json::json!({ "result": value }),
        }
    }

    /// 200 with an empty JSON object (no result field).
    pub fn empty() -> Self {
        Self {
            status: 200,
            body: serde_json::json!({}),
        }
    }

    /// Failure status with an error body.
    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: serde_json::json!({ "error": message }),
        }
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// In-process evaluation service.
pub struct MockEvaluator {
    pub addr: SocketAddr,
    state: MockState,
}

impl MockEvaluator {
    /// Start the mock on an ephemeral port.
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let app = Router::new()
            .route("/", post(handle))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock evaluator");
        let addr = listener.local_addr().expect("mock evaluator addr");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Queue the response for the next request.
    pub async fn enqueue(&self, response: MockResponse) {
        self.state.responses.lock().await.push_back(response);
    }

    /// Request bodies received so far, in order.
    pub async fn captured_requests(&self) -> Vec<serde_json::Value> {
        self.state.requests.lock().await.clone()
    }
}

async fn handle(
    State(state): State<MockState>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    state.requests.lock().await.push(body);

    let response = state
        .responses
        .lock()
        .await
        .pop_front()
        .unwrap_or_else(|| MockResponse::result(serde_json::json!(1)));

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK);
    (status, Json(response.body))
}
