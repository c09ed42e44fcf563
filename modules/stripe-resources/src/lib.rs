#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Typed Stripe API resources.
//!
//! Each resource is a plain data struct mirroring the JSON object, with
//! associated async functions for its operations. Every operation takes a
//! [`StripeClient`](stripe_sdk::StripeClient), the ids in its path, a
//! parameter struct and optional per-request options.
//!
//! ```no_run
//! use stripe_resources::prelude::*;
//! use stripe_resources::{Coupon, CouponCreateParams, CouponDuration};
//! use stripe_sdk::StripeClient;
//!
//! # async fn run(client: StripeClient) -> Result<(), stripe_sdk::StripeError> {
//! let params = CouponCreateParams::builder()
//!     .amount_off(500)
//!     .currency("usd")
//!     .duration(CouponDuration::Once)
//!     .put_metadata("campaign", "spring")
//!     .build();
//! let coupon = Coupon::create(&client, &params, None).await?;
//! assert!(coupon.valid.unwrap_or(true));
//! # Ok(())
//! # }
//! ```

pub mod capability;
pub mod common;
pub mod coupon;
pub mod customer_balance_transaction;
pub mod invoice_item;
pub mod models;

pub use capability::{
    Capability, CapabilityListParams, CapabilityListParamsBuilder, CapabilityRequirements,
    CapabilityRetrieveParams, CapabilityRetrieveParamsBuilder, CapabilityStatus,
    CapabilityUpdateParams, CapabilityUpdateParamsBuilder,
};
pub use common::{
    CreatedFilter, Metadata, MetadataBuilder, PeriodParams, PeriodParamsBuilder, RangeQuery,
    RangeQueryBuilder,
};
pub use coupon::{
    Coupon, CouponCreateParams, CouponCreateParamsBuilder, CouponDeleteParams,
    CouponDeleteParamsBuilder, CouponDuration, CouponListParams, CouponListParamsBuilder,
    CouponRetrieveParams, CouponRetrieveParamsBuilder, CouponUpdateParams,
    CouponUpdateParamsBuilder,
};
pub use customer_balance_transaction::{
    BalanceTransactionType, CustomerBalanceTransaction, CustomerBalanceTransactionCreateParams,
    CustomerBalanceTransactionCreateParamsBuilder, CustomerBalanceTransactionListParams,
    CustomerBalanceTransactionListParamsBuilder, CustomerBalanceTransactionRetrieveParams,
    CustomerBalanceTransactionRetrieveParamsBuilder,
};
pub use invoice_item::{
    InvoiceItem, InvoiceItemCreateParams, InvoiceItemCreateParamsBuilder,
    InvoiceItemDeleteParams, InvoiceItemDeleteParamsBuilder, InvoiceItemListParams,
    InvoiceItemListParamsBuilder, InvoiceItemRetrieveParams, InvoiceItemRetrieveParamsBuilder,
    InvoiceItemUpdateParams, InvoiceItemUpdateParamsBuilder,
};
pub use models::{
    Account, Customer, Invoice, InvoiceStatus, Period, Plan, PlanInterval, Subscription,
    SubscriptionStatus, TaxRate,
};

/// Builder traits needed to call `add_expand`, `put_extra_param` and
/// `put_metadata` on parameter builders.
pub mod prelude {
    pub use crate::common::MetadataBuilder;
    pub use stripe_sdk::{ExpandBuilder, ExtraParamsBuilder};
}
