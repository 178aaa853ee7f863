use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use grid_prompt_gateway::{
    backend::{Dispatcher, GenerateClient},
    config::BackendConfig,
    server::{handlers::AppState, router},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::MockServer;

pub const COMPLETION_PATH: &str = "/generate";
pub const CHAT_PATH: &str = "/chat";

/// Backend configuration pointing both endpoints at a stub server.
pub fn stub_backend_config(server: &MockServer) -> BackendConfig {
    BackendConfig {
        generate_endpoint: Some(format!("{}{}", server.uri(), COMPLETION_PATH)),
        generate_endpoint_chat: Some(format!("{}{}", server.uri(), CHAT_PATH)),
        timeout_secs: 5,
        max_seq_len: None,
    }
}

/// Router wired to the real HTTP client.
pub fn create_http_app(config: &BackendConfig) -> Router {
    let dispatcher = Dispatcher::from_config(config).expect("valid backend config");
    router(AppState { dispatcher })
}

/// Router wired to an in-process client.
pub fn create_app_with_client(client: Arc<dyn GenerateClient>) -> Router {
    router(AppState {
        dispatcher: Dispatcher::new(client),
    })
}

pub fn json_post(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

/// Sends one request and returns the status with the decoded JSON body.
pub async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
