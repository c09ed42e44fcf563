//! The transport contract.
//!
//! Every request the library issues goes through [`Transport::send`]. The
//! HTTP implementation lives in `stripe-http`; tests use the in-memory
//! transport from the `testing` module.

use std::fmt;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::StripeError;
use crate::options::RequestOptions;
use crate::params::encode_query;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    Get,
    Post,
    Delete,
}

impl ApiMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }

    /// Whether parameters travel in the query string rather than the body.
    #[must_use]
    pub fn uses_query_string(self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved API call handed to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: ApiMethod,
    /// Absolute URL without query string
    pub url: String,
    /// Encoded parameters; `None` when the parameter object was empty
    pub params: Option<Map<String, Value>>,
    pub options: RequestOptions,
}

impl ApiRequest {
    /// URL including the query string for GET and DELETE requests.
    #[must_use]
    pub fn url_with_query(&self) -> String {
        match &self.params {
            Some(params) if self.method.uses_query_string() && !params.is_empty() => {
                format!("{}?{}", self.url, encode_query(params))
            }
            _ => self.url.clone(),
        }
    }
}

/// Sends one request and returns the decoded JSON response body.
///
/// Implementations report non-2xx responses as [`StripeError::Api`] and
/// must be safe to share across tasks.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value, StripeError>;
}
