use std::sync::Arc;
use std::time::Duration;

use stripe_sdk::{SecretString, StripeConfig, StripeError};

use crate::config::{HttpTransportConfig, TransportSecurity};
use crate::transport::HttpTransport;

/// Builder for [`HttpTransport`]
#[derive(Debug, Clone, Default)]
pub struct HttpTransportBuilder {
    config: HttpTransportConfig,
}

impl HttpTransportBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    #[must_use]
    pub fn with_config(config: HttpTransportConfig) -> Self {
        Self { config }
    }

    /// Take every transport setting from a loaded [`StripeConfig`]
    #[must_use]
    pub fn with_stripe_config(mut self, config: &StripeConfig) -> Self {
        self.config = HttpTransportConfig::from(config);
        self
    }

    /// Default API key for requests that carry none
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<SecretString>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Default `Stripe-Version` header
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = Some(version.into());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Largest response body accepted, in bytes
    #[must_use]
    pub fn max_body_size(mut self, size: usize) -> Self {
        self.config.max_body_size = size;
        self
    }

    #[must_use]
    pub fn transport(mut self, transport: TransportSecurity) -> Self {
        self.config.transport = transport;
        self
    }

    /// Allow plain HTTP for testing with mock servers
    ///
    /// **WARNING**: never use in production. The API key travels in clear text.
    #[must_use]
    pub fn allow_insecure_http(mut self) -> Self {
        tracing::warn!(
            target: "stripe_http::security",
            "allow_insecure_http() called - HTTP traffic will NOT be encrypted"
        );
        self.config.transport = TransportSecurity::AllowInsecureHttp;
        self
    }

    /// Build the transport
    ///
    /// # Errors
    /// Returns [`StripeError::Config`] for a zero timeout or body limit and
    /// [`StripeError::Transport`] if the TLS backend cannot be initialized.
    pub fn build(self) -> Result<HttpTransport, StripeError> {
        if self.config.request_timeout.is_zero() || self.config.connect_timeout.is_zero() {
            return Err(StripeError::Config("timeouts must be greater than zero".to_owned()));
        }
        if self.config.max_body_size == 0 {
            return Err(StripeError::Config("max_body_size must be greater than zero".to_owned()));
        }

        let client = reqwest::Client::builder()
            .timeout(self.config.request_timeout)
            .connect_timeout(self.config.connect_timeout)
            .user_agent(self.config.user_agent.clone())
            .build()
            .map_err(|e| StripeError::Transport(Box::new(e)))?;

        tracing::debug!(
            transport = ?self.config.transport,
            timeout_ms = self.config.request_timeout.as_millis(),
            "Stripe HTTP transport built"
        );

        Ok(HttpTransport::from_parts(client, Arc::new(self.config)))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn setters_update_config() {
        let builder = HttpTransportBuilder::new()
            .api_key("sk_test_builder")
            .api_version("2020-08-27")
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(2))
            .user_agent("my-app/1.0")
            .max_body_size(4096)
            .allow_insecure_http();

        let config = &builder.config;
        assert_eq!(config.api_key.as_ref().map(SecretString::expose), Some("sk_test_builder"));
        assert_eq!(config.api_version.as_deref(), Some("2020-08-27"));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.user_agent, "my-app/1.0");
        assert_eq!(config.max_body_size, 4096);
        assert_eq!(config.transport, TransportSecurity::AllowInsecureHttp);
    }

    #[test]
    fn build_succeeds_with_defaults() {
        assert!(HttpTransportBuilder::new().build().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = HttpTransportBuilder::new()
            .timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert!(matches!(err, StripeError::Config(_)));
    }

    #[test]
    fn stripe_config_is_applied() {
        let stripe = StripeConfig {
            api_version: Some("2019-12-03".to_owned()),
            max_body_size: 10,
            ..StripeConfig::default()
        };
        let builder = HttpTransportBuilder::new().with_stripe_config(&stripe);
        assert_eq!(builder.config.api_version.as_deref(), Some("2019-12-03"));
        assert_eq!(builder.config.max_body_size, 10);
    }
}
