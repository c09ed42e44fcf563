//! Request URL construction.
//!
//! A request URL is the API base followed by a resource path. Identifiers
//! embedded in the path are percent-encoded so that characters such as `/`
//! or spaces cannot change the path structure. Identifiers that a URL parser
//! would treat as dot segments (`.`, `..`, `%2e`, ...) are refused before
//! anything is sent.

use std::fmt;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::error::StripeError;

/// Base URL used when neither the client nor [`set_api_base`] overrides it.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// Version prefix shared by every resource path.
const API_VERSION_PREFIX: &str = "/v1";

static API_BASE: LazyLock<ArcSwap<String>> =
    LazyLock::new(|| ArcSwap::from_pointee(DEFAULT_API_BASE.to_owned()));

/// Current process-wide API base.
///
/// Read on every request, so a change made with [`set_api_base`] applies to
/// all requests issued afterwards.
#[must_use]
pub fn api_base() -> Arc<String> {
    API_BASE.load_full()
}

/// Replace the process-wide API base, e.g. to point at a local mock server.
pub fn set_api_base(base: impl Into<String>) {
    let base = base.into();
    tracing::debug!(api_base = %base, "Stripe API base changed");
    API_BASE.store(Arc::new(base));
}

/// Restore the process-wide API base to [`DEFAULT_API_BASE`].
pub fn reset_api_base() {
    set_api_base(DEFAULT_API_BASE);
}

/// Percent-encode an identifier for use as a single path segment.
///
/// Unreserved characters (`A-Z a-z 0-9 - . _ ~`) pass through; everything
/// else is encoded. Spaces become `%20` and `/` becomes `%2F`.
#[must_use]
pub fn encode_id(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Whether `id` would be read as `.` or `..` by a URL parser.
///
/// `.` is unreserved and survives [`encode_id`] unchanged, and WHATWG
/// parsing also treats `%2e` as a dot, so both spellings count.
fn is_dot_segment(id: &str) -> bool {
    let decoded = id.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

/// Path of a resource or collection relative to the API base.
///
/// ```
/// use stripe_sdk::ApiPath;
///
/// let path = ApiPath::collection("customers")
///     .id("cus 1")
///     .segment("balance_transactions");
/// assert_eq!(path.as_str(), "/v1/customers/cus%201/balance_transactions");
/// assert!(path.validate().is_ok());
///
/// assert!(ApiPath::collection("coupons").id("..").validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiPath {
    path: String,
    rejected_id: Option<String>,
}

impl ApiPath {
    /// Top-level collection such as `/v1/coupons`.
    #[must_use]
    pub fn collection(resource: &str) -> Self {
        Self {
            path: format!("{API_VERSION_PREFIX}/{resource}"),
            rejected_id: None,
        }
    }

    /// Append an identifier, percent-encoded.
    ///
    /// A dot-segment id is remembered and reported by [`validate`](Self::validate).
    #[must_use]
    pub fn id(mut self, id: &str) -> Self {
        if self.rejected_id.is_none() && is_dot_segment(id) {
            self.rejected_id = Some(id.to_owned());
        }
        self.path.push('/');
        self.path.push_str(&encode_id(id));
        self
    }

    /// Append a literal path segment such as a nested collection name.
    #[must_use]
    pub fn segment(mut self, segment: &str) -> Self {
        self.path.push('/');
        self.path.push_str(segment);
        self
    }

    /// Check that every id in the path stays a single path segment.
    ///
    /// # Errors
    /// Returns [`StripeError::InvalidParams`] when an id is `.`, `..` or a
    /// percent-encoded spelling of either.
    pub fn validate(&self) -> Result<(), StripeError> {
        match &self.rejected_id {
            Some(id) => Err(StripeError::InvalidParams {
                key: "id".to_owned(),
                reason: format!("'{id}' is a dot segment and would change the request path"),
            }),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Join this path onto `base`, tolerating a trailing slash on the base.
    #[must_use]
    pub fn resolve(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
