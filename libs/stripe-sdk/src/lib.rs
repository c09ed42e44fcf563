#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! # `stripe-sdk` - core building blocks of the Stripe API client
//!
//! This crate holds everything the generated resource modules share:
//!
//! - **Request parameters** (`params` module) - builder traits for `expand`
//!   and extra parameters, and the JSON/query encoding of parameter objects
//! - **Expandable references** (`expandable` module) - a field that is either
//!   an id or the full embedded object
//! - **List envelopes and auto-paging** (`list`, `pager` modules)
//! - **URL construction** (`url` module) - percent-encoded ids and the
//!   process-wide API base
//! - **Transport contract** (`transport`, `client` modules) - the single
//!   seam through which every request leaves the library
//! - **Configuration** (`config` module) - figment-backed settings
//!
//! ## Example
//!
//! ```rust,ignore
//! use stripe_sdk::{RequestOptions, StripeClient};
//! use stripe_http::HttpTransport;
//!
//! let transport = HttpTransport::builder().api_key("sk_test_123").build()?;
//! let client = StripeClient::new(transport);
//!
//! let options = RequestOptions::builder()
//!     .idempotency_key("create-coupon-42")
//!     .build();
//! let coupon = Coupon::create(&client, &params, Some(&options)).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod expandable;
pub mod list;
pub mod options;
pub mod pager;
pub mod params;
pub mod secret;
pub mod transport;
pub mod url;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use client::StripeClient;
pub use config::{DEFAULT_USER_AGENT, StripeConfig};
pub use error::{ApiError, ApiErrorKind, StripeError};
pub use expandable::{Expandable, Object};
pub use list::List;
pub use options::{RequestOptions, RequestOptionsBuilder};
pub use pager::{ListPager, PagesPager};
pub use params::{ApiRequestParams, ExpandBuilder, ExtraParams, ExtraParamsBuilder};
pub use secret::SecretString;
pub use transport::{ApiMethod, ApiRequest, Transport};
pub use url::{ApiPath, DEFAULT_API_BASE, api_base, encode_id, set_api_base};
