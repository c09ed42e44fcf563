//! Client configuration.
//!
//! Settings are extracted with `figment`, so they can come from YAML files,
//! environment variables, or code. [`StripeConfig::from_env`] reads the
//! `STRIPE_*` variables:
//!
//! | Variable                     | Field                 |
//! |------------------------------|-----------------------|
//! | `STRIPE_API_KEY`             | `api_key`             |
//! | `STRIPE_API_BASE`            | `api_base`            |
//! | `STRIPE_API_VERSION`         | `api_version`         |
//! | `STRIPE_REQUEST_TIMEOUT`     | `request_timeout`     |
//! | `STRIPE_CONNECT_TIMEOUT`     | `connect_timeout`     |
//! | `STRIPE_MAX_BODY_SIZE`       | `max_body_size`       |
//! | `STRIPE_USER_AGENT`          | `user_agent`          |
//! | `STRIPE_ALLOW_INSECURE_HTTP` | `allow_insecure_http` |
//!
//! Durations use humantime syntax such as `30s` or `1m 20s`.

use std::time::Duration;

use figment::Figment;
use figment::providers::Env;
use serde::{Deserialize, Deserializer, de};

use crate::error::StripeError;
use crate::secret::SecretString;

/// Default User-Agent string for API requests
pub const DEFAULT_USER_AGENT: &str = concat!("stripe-rust/", env!("CARGO_PKG_VERSION"));

/// Environment variable prefix read by [`StripeConfig::from_env`]
pub const ENV_PREFIX: &str = "STRIPE_";

const ENV_KEYS: [&str; 8] = [
    "api_key",
    "api_base",
    "api_version",
    "request_timeout",
    "connect_timeout",
    "max_body_size",
    "user_agent",
    "allow_insecure_http",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StripeConfig {
    /// Secret key used when a request carries no key of its own
    pub api_key: Option<SecretString>,

    /// Base URL override; the process-wide base applies when unset
    pub api_base: Option<String>,

    /// Value sent as `Stripe-Version` unless a request pins another
    pub api_version: Option<String>,

    /// Total time allowed for one request (default: 80s)
    #[serde(deserialize_with = "deserialize_duration")]
    pub request_timeout: Duration,

    /// Time allowed to establish a connection (default: 30s)
    #[serde(deserialize_with = "deserialize_duration")]
    pub connect_timeout: Duration,

    /// Largest response body accepted, in bytes (default: 16 MiB)
    pub max_body_size: usize,

    pub user_agent: String,

    /// Permit plain `http://` URLs; intended for local mock servers only
    pub allow_insecure_http: bool,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: None,
            api_version: None,
            request_timeout: Duration::from_secs(80),
            connect_timeout: Duration::from_secs(30),
            max_body_size: 16 * 1024 * 1024,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            allow_insecure_http: false,
        }
    }
}

impl StripeConfig {
    /// Extract the configuration from an existing figment.
    ///
    /// # Errors
    /// Returns [`StripeError::Config`] when a value has the wrong type or an
    /// unknown key is present.
    pub fn from_figment(figment: &Figment) -> Result<Self, StripeError> {
        let config: Self = figment
            .extract()
            .map_err(|e| StripeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `STRIPE_*` environment variables over the defaults.
    ///
    /// # Errors
    /// See [`from_figment`](Self::from_figment).
    pub fn from_env() -> Result<Self, StripeError> {
        Self::from_figment(&Figment::new().merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS)))
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    /// Returns [`StripeError::Config`] for a zero timeout or body limit.
    pub fn validate(&self) -> Result<(), StripeError> {
        if self.request_timeout.is_zero() {
            return Err(StripeError::Config("request_timeout must be greater than zero".to_owned()));
        }
        if self.connect_timeout.is_zero() {
            return Err(StripeError::Config("connect_timeout must be greater than zero".to_owned()));
        }
        if self.max_body_size == 0 {
            return Err(StripeError::Config("max_body_size must be greater than zero".to_owned()));
        }
        Ok(())
    }
}

fn deserialize_duration<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    let raw = String::deserialize(deserializer)?;
    humantime::parse_duration(&raw).map_err(de::Error::custom)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use figment::providers::{Format, Yaml};

    #[test]
    fn defaults() {
        let config = StripeConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.request_timeout, Duration::from_secs(80));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert_eq!(config.max_body_size, 16 * 1024 * 1024);
        assert!(config.user_agent.starts_with("stripe-rust/"));
        assert!(!config.allow_insecure_http);
    }

    #[test]
    fn from_yaml() {
        let figment = Figment::new().merge(Yaml::string(
            r"
api_key: sk_test_yaml
api_version: '2020-08-27'
request_timeout: 1m 5s
max_body_size: 1024
",
        ));
        let config = StripeConfig::from_figment(&figment).unwrap();

        assert_eq!(config.api_key.as_ref().map(SecretString::expose), Some("sk_test_yaml"));
        assert_eq!(config.api_version.as_deref(), Some("2020-08-27"));
        assert_eq!(config.request_timeout, Duration::from_secs(65));
        assert_eq!(config.max_body_size, 1024);
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let figment = Figment::new().merge(Yaml::string("retries: 3"));
        let err = StripeConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(err, StripeError::Config(_)), "unexpected error: {err}");
    }

    #[test]
    fn bad_duration_is_rejected() {
        let figment = Figment::new().merge(Yaml::string("request_timeout: soon"));
        assert!(StripeConfig::from_figment(&figment).is_err());
    }

    #[test]
    fn zero_body_limit_is_rejected() {
        let figment = Figment::new().merge(Yaml::string("max_body_size: 0"));
        assert!(StripeConfig::from_figment(&figment).is_err());
    }

    #[test]
    fn from_env_reads_prefixed_variables() {
        temp_env::with_vars(
            [
                ("STRIPE_API_KEY", Some("sk_test_env")),
                ("STRIPE_API_BASE", Some("http://localhost:12111")),
                ("STRIPE_REQUEST_TIMEOUT", Some("15s")),
                ("STRIPE_ALLOW_INSECURE_HTTP", Some("true")),
                ("STRIPE_WEBHOOK_SECRET", Some("whsec_ignored")),
            ],
            || {
                let config = StripeConfig::from_env().unwrap();
                assert_eq!(config.api_key.as_ref().map(SecretString::expose), Some("sk_test_env"));
                assert_eq!(config.api_base.as_deref(), Some("http://localhost:12111"));
                assert_eq!(config.request_timeout, Duration::from_secs(15));
                assert!(config.allow_insecure_http);
            },
        );
    }
}
