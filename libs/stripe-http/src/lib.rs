#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! HTTP transport for the Stripe API client
//!
//! Implements [`stripe_sdk::Transport`] on top of `reqwest` with:
//! - TLS via rustls (HTTPS only by default)
//! - Bearer authentication from the transport config or per-request options
//! - `Idempotency-Key`, `Stripe-Account` and `Stripe-Version` headers
//! - Per-request and connect timeouts
//! - A response body size limit
//! - Mapping of Stripe error envelopes to [`stripe_sdk::StripeError::Api`]
//!
//! Retries are not performed; callers decide whether and when to resend.
//!
//! # Example
//!
//! ```ignore
//! use stripe_http::HttpTransport;
//! use stripe_sdk::{StripeClient, StripeConfig};
//!
//! let config = StripeConfig::from_env()?;
//! let transport = HttpTransport::builder().with_stripe_config(&config).build()?;
//! let client = StripeClient::new(transport);
//! ```

mod builder;
mod config;
mod response;
mod security;
mod transport;

pub use builder::HttpTransportBuilder;
pub use config::{
    HttpTransportConfig, IDEMPOTENCY_KEY_HEADER, REQUEST_ID_HEADER, STRIPE_ACCOUNT_HEADER,
    STRIPE_VERSION_HEADER, TransportSecurity,
};
pub use transport::HttpTransport;
