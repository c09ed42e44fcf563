//! Per-request overrides.

use std::time::Duration;

use crate::secret::SecretString;

/// Options that apply to a single API call.
///
/// Every field is optional. Unset fields fall back to what the transport was
/// configured with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    api_key: Option<SecretString>,
    idempotency_key: Option<String>,
    stripe_account: Option<String>,
    stripe_version: Option<String>,
    timeout: Option<Duration>,
}

impl RequestOptions {
    #[must_use]
    pub fn builder() -> RequestOptionsBuilder {
        RequestOptionsBuilder::default()
    }

    #[must_use]
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref()
    }

    #[must_use]
    pub fn idempotency_key(&self) -> Option<&str> {
        self.idempotency_key.as_deref()
    }

    /// Connected account the request is made on behalf of (`Stripe-Account`).
    #[must_use]
    pub fn stripe_account(&self) -> Option<&str> {
        self.stripe_account.as_deref()
    }

    /// API version pinned for this request (`Stripe-Version`).
    #[must_use]
    pub fn stripe_version(&self) -> Option<&str> {
        self.stripe_version.as_deref()
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Builder for [`RequestOptions`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptionsBuilder {
    inner: RequestOptions,
}

impl RequestOptionsBuilder {
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<SecretString>) -> Self {
        self.inner.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.inner.idempotency_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn stripe_account(mut self, account: impl Into<String>) -> Self {
        self.inner.stripe_account = Some(account.into());
        self
    }

    #[must_use]
    pub fn stripe_version(mut self, version: impl Into<String>) -> Self {
        self.inner.stripe_version = Some(version.into());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn build(self) -> RequestOptions {
        self.inner
    }
}
