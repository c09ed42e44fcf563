use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use stripe_sdk::params::encode_query;
use stripe_sdk::{ApiMethod, ApiRequest, SecretString, StripeClient, StripeConfig, StripeError, Transport};
use tracing::{Instrument, info_span, instrument};

use crate::builder::HttpTransportBuilder;
use crate::config::{
    HttpTransportConfig, IDEMPOTENCY_KEY_HEADER, STRIPE_ACCOUNT_HEADER, STRIPE_VERSION_HEADER,
};
use crate::response::{map_reqwest_error, read_limited_body, request_id};
use crate::security::validate_url;

/// `reqwest`-backed [`Transport`].
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: Arc<HttpTransportConfig>,
}

impl HttpTransport {
    #[must_use]
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }

    pub(crate) fn from_parts(client: reqwest::Client, config: Arc<HttpTransportConfig>) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    /// Build a [`StripeClient`] over an HTTP transport configured from `config`.
    ///
    /// `config.api_base`, when set, pins the client's base URL.
    ///
    /// # Errors
    /// Same as [`HttpTransportBuilder::build`].
    pub fn client_from_config(config: &StripeConfig) -> Result<StripeClient, StripeError> {
        let transport = Self::builder().with_stripe_config(config).build()?;
        let client = StripeClient::new(transport);
        Ok(match &config.api_base {
            Some(base) => client.with_api_base(base.clone()),
            None => client,
        })
    }

    fn api_key<'a>(&'a self, request: &'a ApiRequest) -> Result<&'a SecretString, StripeError> {
        request
            .options
            .api_key()
            .or(self.config.api_key.as_ref())
            .ok_or(StripeError::MissingApiKey)
    }

    fn build_request(&self, request: &ApiRequest) -> Result<reqwest::RequestBuilder, StripeError> {
        let mut url = validate_url(&request.url, self.config.transport)?;
        let params = request.params.as_ref().filter(|params| !params.is_empty());

        if request.method.uses_query_string()
            && let Some(params) = params
        {
            url.set_query(Some(&encode_query(params)));
        }

        let method = match request.method {
            ApiMethod::Get => reqwest::Method::GET,
            ApiMethod::Post => reqwest::Method::POST,
            ApiMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, url)
            .bearer_auth(self.api_key(request)?.expose())
            .header(ACCEPT, "application/json");

        if request.method == ApiMethod::Post
            && let Some(params) = params
        {
            builder = builder.json(params);
        }

        let options = &request.options;
        if let Some(key) = options.idempotency_key() {
            builder = builder.header(IDEMPOTENCY_KEY_HEADER, key);
        }
        if let Some(account) = options.stripe_account() {
            builder = builder.header(STRIPE_ACCOUNT_HEADER, account);
        }
        if let Some(version) = options.stripe_version().or(self.config.api_version.as_deref()) {
            builder = builder.header(STRIPE_VERSION_HEADER, version);
        }
        if let Some(timeout) = options.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(builder)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip_all, fields(
        method = %request.method,
        url = %request.url,
        request_id
    ))]
    async fn send(&self, request: ApiRequest) -> Result<Value, StripeError> {
        let start = Instant::now();
        let timeout = request.options.timeout().unwrap_or(self.config.request_timeout);
        let builder = self.build_request(&request)?;

        let response = builder
            .send()
            .instrument(info_span!("http_request"))
            .await
            .map_err(|e| map_reqwest_error(e, timeout))?;

        let status = response.status();
        let request_id = request_id(&response);
        if let Some(id) = &request_id {
            tracing::Span::current().record("request_id", id.as_str());
        }

        let body = read_limited_body(response, self.config.max_body_size, timeout).await?;

        // Duration in ms is always small enough for u64 in practice
        #[allow(clippy::cast_possible_truncation)]
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            status = status.as_u16(),
            duration_ms,
            body_size = body.len(),
            "Stripe API request completed"
        );

        if !status.is_success() {
            let err = StripeError::from_response(status.as_u16(), &body, request_id);
            tracing::warn!(error = %err, "Stripe API returned an error");
            return Err(err);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
