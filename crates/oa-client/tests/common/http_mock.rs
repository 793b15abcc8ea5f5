//! HTTP mock server helpers for testing outbound HTTP calls.
//!
//! This module provides a thin wrapper around `wiremock` for declarative
//! HTTP stubbing of the OpenAustralia API.
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_external_api_call() {
//!     let server = MockHttpServer::start().await;
//!
//!     server
//!         .expect_get("/api/getComments")
//!         .with_query_param("key", "test-key")
//!         .respond_with_json(json!([]))
//!         .mount()
//!         .await;
//!
//!     // Point the client at server.api_url()
//! }
//! ```
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_json(value)` or `.respond_with_body(string)`
//! - **Error response**: `.respond_with_status(500)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(30))`
//! - **Request verification**: `.expect_times(1)` then `server.verify().await`

use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// A running stub server.
pub struct MockHttpServer {
    server: MockServer,
}

impl MockHttpServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// API root mirroring the public service layout (`<root>/api`).
    pub fn api_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    pub fn expect_get(&self, request_path: &str) -> StubBuilder<'_> {
        StubBuilder::new(&self.server, "GET", request_path)
    }

    /// Panics if any mounted `expect_times` expectation was not met.
    pub async fn verify(&self) {
        self.server.verify().await;
    }

    /// Every request the server received, oldest first.
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

/// Builder for a single stubbed endpoint.
pub struct StubBuilder<'a> {
    server: &'a MockServer,
    method: &'static str,
    path: String,
    query: Vec<(String, String)>,
    status: u16,
    json_body: Option<Value>,
    raw_body: Option<String>,
    delay: Option<Duration>,
    times: Option<u64>,
}

impl<'a> StubBuilder<'a> {
    fn new(server: &'a MockServer, method: &'static str, request_path: &str) -> Self {
        Self {
            server,
            method,
            path: request_path.to_string(),
            query: Vec::new(),
            status: 200,
            json_body: None,
            raw_body: None,
            delay: None,
            times: None,
        }
    }

    /// Only match requests carrying this query parameter.
    pub fn with_query_param(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.json_body = Some(body);
        self
    }

    pub fn respond_with_body(mut self, body: &str) -> Self {
        self.raw_body = Some(body.to_string());
        self
    }

    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn expect_times(mut self, times: u64) -> Self {
        self.times = Some(times);
        self
    }

    pub async fn mount(self) {
        let mut builder = Mock::given(method(self.method)).and(path(self.path.as_str()));
        for (name, value) in &self.query {
            builder = builder.and(query_param(name.as_str(), value.as_str()));
        }

        let mut template = ResponseTemplate::new(self.status);
        if let Some(body) = &self.json_body {
            template = template.set_body_json(body);
        }
        if let Some(body) = &self.raw_body {
            template = template.set_body_string(body.as_str());
        }
        if let Some(delay) = self.delay {
            template = template.set_delay(delay);
        }

        let mut mock = builder.respond_with(template);
        if let Some(times) = self.times {
            mock = mock.expect(times);
        }

        mock.mount(self.server).await;
    }
}
