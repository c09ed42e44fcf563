//! In-memory transport for tests.
//!
//! Enable with the `test-util` feature:
//!
//! ```toml
//! [dev-dependencies]
//! stripe-sdk = { workspace = true, features = ["test-util"] }
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StripeError;
use crate::transport::{ApiRequest, Transport};

#[derive(Default)]
struct MockState {
    responses: VecDeque<Result<Value, StripeError>>,
    requests: Vec<ApiRequest>,
}

/// Transport that records every request and replays queued responses in order.
///
/// Clones share state, so a test can keep one handle for assertions and give
/// another to the client. A request with nothing queued fails with
/// [`StripeError::Transport`].
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a successful response body.
    pub fn push_json(&self, body: Value) {
        self.state().responses.push_back(Ok(body));
    }

    /// Queue a failure.
    pub fn push_error(&self, error: StripeError) {
        self.state().responses.push_back(Err(error));
    }

    /// Every request sent so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state().requests.clone()
    }

    #[must_use]
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.state().requests.last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, StripeError> {
        let mut state = self.state();
        tracing::debug!(method = %request.method, url = %request.url, "mock transport received request");
        state.requests.push(request);
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(StripeError::Transport("no mock response queued".into())))
    }
}
