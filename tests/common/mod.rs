#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use search_optimizer::connector::api::http::{build_app, serve};
use search_optimizer::{OpenAiCompletionClient, OptimizeSearchUseCase};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "sk-test-key";

/// Completion response body with the given candidate texts, in order.
pub fn completion_body(texts: &[&str]) -> Value {
    let choices: Vec<Value> = texts
        .iter()
        .enumerate()
        .map(|(index, text)| json!({ "text": text, "index": index, "finish_reason": "length" }))
        .collect();
    json!({
        "id": "cmpl-test",
        "object": "text_completion",
        "model": "text-davinci-003",
        "choices": choices,
    })
}

pub async fn mount_completion(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/v1/completions"))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn provider_use_case(server: &MockServer, api_key: &str) -> OptimizeSearchUseCase {
    let client = OpenAiCompletionClient::new(api_key, server.uri(), Duration::from_secs(5));
    OptimizeSearchUseCase::new(Arc::new(client)).with_timeout(Duration::from_secs(5))
}

/// Serve the relay on an ephemeral port; returns its base URL. The server
/// lives until the test runtime shuts down.
pub async fn spawn_relay(use_case: OptimizeSearchUseCase) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind relay");
    let address = listener.local_addr().expect("relay address");
    let app = build_app(use_case);
    tokio::spawn(serve(listener, app, std::future::pending()));
    format!("http://{address}")
}

pub async fn post_query(relay: &str, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{relay}/search-optimization"))
        .json(&body)
        .send()
        .await
        .expect("relay request")
}

/// Bodies of every request the mock server has seen, parsed as JSON.
pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).expect("json body"))
        .collect()
}
