//! Client binding for the OpenAustralia parliamentary data API.
//!
//! # Architecture
//!
//! The crate uses a trait-based design for testability:
//!
//! - [`OpenAustraliaApi`] - Trait defining the API operations
//! - [`HttpOpenAustraliaClient`] - Real HTTP implementation using reqwest
//! - [`mock::MockOpenAustraliaClient`] - Recording mock (behind the `test-utils` feature)
//!
//! Each operation maps to one fixed method name on the service (see
//! [`Endpoint`]) and returns the decoded JSON body as [`Records`].
//!
//! # Testing Patterns
//!
//! ## Unit Tests (Mock Implementation)
//!
//! ```ignore
//! use oa_client::mock::MockOpenAustraliaClient;
//!
//! let mock = MockOpenAustraliaClient::new();
//! mock.push_records(json!([]));
//!
//! my_command.run(&mock).await?;
//! assert_eq!(mock.last_call().unwrap().endpoint, Endpoint::Senators);
//! ```
//!
//! ## Integration Tests (HTTP Stubbing)
//!
//! ```ignore
//! let server = MockHttpServer::start().await;
//!
//! server
//!     .expect_get("/api/getSenators")
//!     .with_query_param("key", "test-key")
//!     .respond_with_json(json!([{ "name": "Penny Wong" }]))
//!     .mount()
//!     .await;
//!
//! let client = HttpOpenAustraliaClient::with_base_url(server.api_url(), "test-key");
//! let senators = client.get_senators(None).await.unwrap();
//! ```

#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

mod client;
mod types;

pub use client::{HttpOpenAustraliaClient, OpenAustraliaApi, OpenAustraliaError, DEFAULT_BASE_URL};
pub use types::{DebateType, Endpoint, ParseDebateTypeError, QueryParams, Records};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
