use std::time::Duration;

use stripe_sdk::{DEFAULT_USER_AGENT, SecretString, StripeConfig};

/// Header carrying the client-chosen idempotency key
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Header naming the connected account a request acts on
pub const STRIPE_ACCOUNT_HEADER: &str = "Stripe-Account";

/// Header pinning the API version
pub const STRIPE_VERSION_HEADER: &str = "Stripe-Version";

/// Response header with the server-assigned request id
pub const REQUEST_ID_HEADER: &str = "request-id";

/// Transport security mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportSecurity {
    /// Require TLS for all connections (HTTPS only)
    #[default]
    TlsOnly,
    /// Allow plain HTTP (for testing with mock servers only)
    ///
    /// **WARNING**: exposes the API key to anyone on the network path.
    AllowInsecureHttp,
}

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Default API key; a key in `RequestOptions` takes precedence
    pub api_key: Option<SecretString>,

    /// Default `Stripe-Version`; a version in `RequestOptions` takes precedence
    pub api_version: Option<String>,

    /// Total time allowed for one request (default: 80s)
    pub request_timeout: Duration,

    /// Time allowed to establish a connection (default: 30s)
    pub connect_timeout: Duration,

    /// User-Agent header value
    pub user_agent: String,

    /// Largest response body accepted, in bytes (default: 16 MiB)
    pub max_body_size: usize,

    /// Transport security mode (default: `TlsOnly`)
    pub transport: TransportSecurity,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self::from(&StripeConfig::default())
    }
}

impl From<&StripeConfig> for HttpTransportConfig {
    fn from(config: &StripeConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_version: config.api_version.clone(),
            request_timeout: config.request_timeout,
            connect_timeout: config.connect_timeout,
            user_agent: config.user_agent.clone(),
            max_body_size: config.max_body_size,
            transport: if config.allow_insecure_http {
                TransportSecurity::AllowInsecureHttp
            } else {
                TransportSecurity::TlsOnly
            },
        }
    }
}
