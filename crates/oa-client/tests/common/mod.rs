//! Common test utilities for integration tests.
//!
//! - [`http_mock::MockHttpServer`] - wiremock-backed stub of the OpenAustralia API

pub mod http_mock;
