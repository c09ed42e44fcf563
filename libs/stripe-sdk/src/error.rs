use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Maximum number of body bytes quoted in an error message when the
/// response carries no parseable `error` object.
const ERROR_BODY_PREVIEW_LIMIT: usize = 512;

/// Category of an error reported by the Stripe API.
///
/// Derived from the HTTP status and the `error.type` field of the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ApiErrorKind {
    /// Malformed request or unknown resource (400, 404)
    InvalidRequest,
    /// Missing or invalid API key (401)
    Authentication,
    /// Key lacks permission for the resource (403)
    Permission,
    /// Payment method was declined (402)
    Card,
    /// Too many requests (429)
    RateLimit,
    /// Idempotency key reused with different parameters
    Idempotency,
    /// Any other failure reported by Stripe
    Api,
}

impl ApiErrorKind {
    /// Classify a failed response.
    #[must_use]
    pub fn classify(status: u16, error_type: Option<&str>) -> Self {
        if error_type == Some("idempotency_error") {
            return Self::Idempotency;
        }
        match status {
            400 | 404 => Self::InvalidRequest,
            401 => Self::Authentication,
            402 => Self::Card,
            403 => Self::Permission,
            429 => Self::RateLimit,
            _ => Self::Api,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Authentication => "authentication",
            Self::Permission => "permission",
            Self::Card => "card",
            Self::RateLimit => "rate_limit",
            Self::Idempotency => "idempotency",
            Self::Api => "api",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error reported by the Stripe API in a non-2xx response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Stripe {kind} error (HTTP {status}): {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: u16,
    /// Machine-readable code such as `resource_missing`
    pub code: Option<String>,
    pub message: String,
    /// Parameter the error relates to, if any
    pub param: Option<String>,
    /// Issuer decline code for card errors
    pub decline_code: Option<String>,
    /// Value of the `Request-Id` response header
    pub request_id: Option<String>,
}

/// Errors produced by the Stripe client.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StripeError {
    /// Stripe answered with a non-2xx status
    #[error(transparent)]
    Api(Box<ApiError>),

    /// Network or connection failure
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request did not complete in time
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Response body exceeded the configured size limit
    #[error("Response body too large: limit {limit} bytes, got {actual} bytes")]
    BodyTooLarge { limit: usize, actual: usize },

    /// URL could not be parsed
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// URL scheme rejected by the transport security setting
    #[error("URL scheme '{scheme}' not allowed: {reason}")]
    InvalidScheme { scheme: String, reason: String },

    /// Response body could not be decoded, or parameters could not be encoded
    #[error("JSON processing failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// Parameters could not be turned into a request payload
    #[error("Invalid parameters at '{key}': {reason}")]
    InvalidParams { key: String, reason: String },

    /// Neither the transport nor the request options carry an API key
    #[error("No API key provided: configure one on the transport or pass it in RequestOptions")]
    MissingApiKey,

    /// Configuration could not be loaded or is inconsistent
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl StripeError {
    /// Build an error from a non-2xx response.
    ///
    /// Reads Stripe's `{"error": {...}}` envelope when present and falls back
    /// to a preview of the raw body otherwise.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8], request_id: Option<String>) -> Self {
        let envelope = serde_json::from_slice::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error)
            .unwrap_or_default();

        let message = envelope.message.unwrap_or_else(|| {
            let end = body.len().min(ERROR_BODY_PREVIEW_LIMIT);
            String::from_utf8_lossy(&body[..end]).into_owned()
        });

        Self::Api(Box::new(ApiError {
            kind: ApiErrorKind::classify(status, envelope.error_type.as_deref()),
            status,
            code: envelope.code,
            message,
            param: envelope.param,
            decline_code: envelope.decline_code,
            request_id,
        }))
    }

    /// Returns the API error details when Stripe rejected the request.
    #[must_use]
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        self.as_api_error().map(|err| err.kind)
    }

    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.as_api_error().and_then(|err| err.request_id.as_deref())
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<String>,
    message: Option<String>,
    param: Option<String>,
    decline_code: Option<String>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn classify_by_status() {
        assert_eq!(ApiErrorKind::classify(400, None), ApiErrorKind::InvalidRequest);
        assert_eq!(ApiErrorKind::classify(404, None), ApiErrorKind::InvalidRequest);
        assert_eq!(ApiErrorKind::classify(401, None), ApiErrorKind::Authentication);
        assert_eq!(ApiErrorKind::classify(402, Some("card_error")), ApiErrorKind::Card);
        assert_eq!(ApiErrorKind::classify(403, None), ApiErrorKind::Permission);
        assert_eq!(ApiErrorKind::classify(429, None), ApiErrorKind::RateLimit);
        assert_eq!(ApiErrorKind::classify(500, None), ApiErrorKind::Api);
    }

    #[test]
    fn idempotency_type_wins_over_status() {
        assert_eq!(
            ApiErrorKind::classify(400, Some("idempotency_error")),
            ApiErrorKind::Idempotency
        );
    }

    #[test]
    fn from_response_reads_error_envelope() {
        let body = br#"{"error":{"type":"invalid_request_error","code":"resource_missing","message":"No such coupon: 'nope'","param":"id"}}"#;
        let err = StripeError::from_response(404, body, Some("req_123".to_owned()));

        let api = err.as_api_error().unwrap();
        assert_eq!(api.kind, ApiErrorKind::InvalidRequest);
        assert_eq!(api.code.as_deref(), Some("resource_missing"));
        assert_eq!(api.message, "No such coupon: 'nope'");
        assert_eq!(api.param.as_deref(), Some("id"));
        assert_eq!(err.request_id(), Some("req_123"));
        assert_eq!(
            err.to_string(),
            "Stripe invalid_request error (HTTP 404): No such coupon: 'nope'"
        );
    }

    #[test]
    fn from_response_falls_back_to_body_preview() {
        let err = StripeError::from_response(502, b"Bad Gateway", None);

        let api = err.as_api_error().unwrap();
        assert_eq!(api.kind, ApiErrorKind::Api);
        assert_eq!(api.message, "Bad Gateway");
        assert!(api.code.is_none());
    }

    #[test]
    fn from_response_truncates_long_bodies() {
        let body = vec![b'x'; ERROR_BODY_PREVIEW_LIMIT * 2];
        let err = StripeError::from_response(500, &body, None);
        assert_eq!(err.as_api_error().unwrap().message.len(), ERROR_BODY_PREVIEW_LIMIT);
    }

    #[test]
    fn non_api_errors_have_no_kind() {
        let err = StripeError::Timeout(Duration::from_secs(1));
        assert!(err.api_kind().is_none());
        assert!(err.request_id().is_none());
    }
}
