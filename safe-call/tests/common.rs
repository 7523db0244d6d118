//! Shared helpers for safe-call integration tests

#![allow(dead_code)]

use safe_call::{HttpTransport, SafeCaller, TransportConfig};
use serde_json::Value;
use std::net::TcpListener;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Transport settings pointing at `base_url` with a short timeout
pub fn create_transport_config(base_url: &str) -> TransportConfig {
    let mut config = TransportConfig::new(base_url);
    config.timeout_seconds = Some(2);
    config
}

pub fn create_caller(base_url: &str) -> SafeCaller<HttpTransport> {
    let transport = HttpTransport::new(&create_transport_config(base_url)).unwrap();
    SafeCaller::new(transport)
}

/// Serve `template` for `GET route` on a fresh mock server
pub async fn serve_get(route: &str, template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

pub fn json_reply(status: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

pub fn text_reply(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_string(body)
}

/// A local address with nothing listening on it
pub fn closed_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", address)
}
