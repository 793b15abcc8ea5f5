//! OpenAustralia API client.
//!
//! Every operation is a single GET against `<base_url>/<method name>` with
//! the API key and the operation's parameters in the query string. The
//! response body is returned as decoded JSON without any transformation.
//!
//! # Example
//!
//! ```ignore
//! use oa_client::{HttpOpenAustraliaClient, OpenAustraliaApi};
//!
//! let client = HttpOpenAustraliaClient::new("my-api-key");
//! let senators = client.get_senators(Some("NSW")).await?;
//! println!("{senators:#}");
//! ```

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use super::types::{DebateType, Endpoint, QueryParams, Records};

/// Root of the public API.
pub const DEFAULT_BASE_URL: &str = "https://www.openaustralia.org/api";

/// Errors that can occur when calling the OpenAustralia API.
#[derive(Debug, Error)]
pub enum OpenAustraliaError {
    /// Transport failure or non-success HTTP status, as reported by reqwest
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl OpenAustraliaError {
    /// HTTP status code, when the failure came from a non-success response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }
}

/// Operations offered by the OpenAustralia API.
///
/// Implementors only provide [`call`](Self::call); each named operation
/// builds its parameters and delegates to it.
#[async_trait]
pub trait OpenAustraliaApi: Send + Sync {
    /// Issue one request for `endpoint` with `params`.
    ///
    /// # Errors
    /// Returns [`OpenAustraliaError::Request`] on transport failure or a
    /// non-success status, and [`OpenAustraliaError::Decode`] when the body
    /// is not valid JSON.
    async fn call(
        &self,
        endpoint: Endpoint,
        params: QueryParams,
    ) -> Result<Records, OpenAustraliaError>;

    /// Electoral divisions, optionally limited to those covering `postcode`.
    async fn get_divisions(&self, postcode: Option<&str>) -> Result<Records, OpenAustraliaError> {
        self.call(
            Endpoint::Divisions,
            QueryParams::new().with_opt("postcode", postcode),
        )
        .await
    }

    /// A single member of the House of Representatives.
    async fn get_representative(&self, person_id: u64) -> Result<Records, OpenAustraliaError> {
        self.call(
            Endpoint::Representative,
            QueryParams::new().with("person_id", person_id),
        )
        .await
    }

    /// Members of the House of Representatives, optionally by `postcode`.
    async fn get_representatives(
        &self,
        postcode: Option<&str>,
    ) -> Result<Records, OpenAustraliaError> {
        self.call(
            Endpoint::Representatives,
            QueryParams::new().with_opt("postcode", postcode),
        )
        .await
    }

    /// A single senator.
    async fn get_senator(&self, person_id: u64) -> Result<Records, OpenAustraliaError> {
        self.call(
            Endpoint::Senator,
            QueryParams::new().with("person_id", person_id),
        )
        .await
    }

    /// Senators, optionally limited to one `state`.
    async fn get_senators(&self, state: Option<&str>) -> Result<Records, OpenAustraliaError> {
        self.call(
            Endpoint::Senators,
            QueryParams::new().with_opt("state", state),
        )
        .await
    }

    /// Debates in one house, optionally matching `search`.
    async fn get_debates(
        &self,
        debate_type: DebateType,
        search: Option<&str>,
    ) -> Result<Records, OpenAustraliaError> {
        self.call(
            Endpoint::Debates,
            QueryParams::new()
                .with("type", debate_type.as_str())
                .with_opt("search", search),
        )
        .await
    }

    /// Hansard entries across both houses, optionally matching `search`.
    async fn get_hansard(&self, search: Option<&str>) -> Result<Records, OpenAustraliaError> {
        self.call(
            Endpoint::Hansard,
            QueryParams::new().with_opt("search", search),
        )
        .await
    }

    /// Comments left on the site.
    async fn get_comments(&self) -> Result<Records, OpenAustraliaError> {
        self.call(Endpoint::Comments, QueryParams::new()).await
    }
}

/// HTTP-based implementation of [`OpenAustraliaApi`].
#[derive(Clone)]
pub struct HttpOpenAustraliaClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpOpenAustraliaClient {
    /// Create a client against [`DEFAULT_BASE_URL`].
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a client against another API root (a mirror or a stub server).
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Create a client with a custom `reqwest::Client` (timeouts, proxies).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint, without the query string.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.name())
    }
}

impl fmt::Debug for HttpOpenAustraliaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpOpenAustraliaClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl OpenAustraliaApi for HttpOpenAustraliaClient {
    async fn call(
        &self,
        endpoint: Endpoint,
        params: QueryParams,
    ) -> Result<Records, OpenAustraliaError> {
        let url = self.endpoint_url(endpoint);

        tracing::debug!(
            %endpoint,
            params = ?params.names().collect::<Vec<_>>(),
            "sending OpenAustralia request"
        );

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params.as_pairs())
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let records: Records = serde_json::from_slice(&body)?;

        tracing::debug!(%endpoint, bytes = body.len(), "received OpenAustralia response");
        Ok(records)
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{Endpoint, OpenAustraliaApi, OpenAustraliaError, QueryParams, Records};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// One call observed by [`MockOpenAustraliaClient`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedCall {
        pub endpoint: Endpoint,
        pub params: QueryParams,
    }

    /// Mock implementation of `OpenAustraliaApi` for unit tests.
    ///
    /// Queue responses with `push_result`/`push_records` and inspect
    /// what was requested with `calls()`. An empty queue answers an empty
    /// JSON array.
    pub struct MockOpenAustraliaClient {
        results: Mutex<VecDeque<Result<Records, OpenAustraliaError>>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl MockOpenAustraliaClient {
        pub fn new() -> Self {
            Self {
                results: Mutex::new(VecDeque::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Queue the result for the next call.
        pub fn push_result(&self, result: Result<Records, OpenAustraliaError>) {
            self.results.lock().unwrap().push_back(result);
        }

        /// Queue a successful response for the next call.
        pub fn push_records(&self, records: Records) {
            self.push_result(Ok(records));
        }

        /// All calls made so far, oldest first.
        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn last_call(&self) -> Option<RecordedCall> {
            self.calls.lock().unwrap().last().cloned()
        }
    }

    impl Default for MockOpenAustraliaClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl OpenAustraliaApi for MockOpenAustraliaClient {
        async fn call(
            &self,
            endpoint: Endpoint,
            params: QueryParams,
        ) -> Result<Records, OpenAustraliaError> {
            self.calls
                .lock()
                .unwrap()
                .push(RecordedCall { endpoint, params });

            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Records::Array(Vec::new())))
        }
    }
}
