//! Invoice items: one-off charges or credits added to a customer's next
//! invoice, or to a specific draft invoice.

mod params;

pub use params::{
    InvoiceItemCreateParams, InvoiceItemCreateParamsBuilder, InvoiceItemDeleteParams,
    InvoiceItemDeleteParamsBuilder, InvoiceItemListParams, InvoiceItemListParamsBuilder,
    InvoiceItemRetrieveParams, InvoiceItemRetrieveParamsBuilder, InvoiceItemUpdateParams,
    InvoiceItemUpdateParamsBuilder,
};

use futures_core::Stream;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stripe_sdk::{
    ApiMethod, ApiPath, ApiRequestParams, Expandable, List, Object, RequestOptions, StripeClient,
    StripeError,
};
use tracing::instrument;

use crate::common::Metadata;
use crate::models::{Customer, Invoice, Period, Plan, Subscription, TaxRate};

const COLLECTION: &str = "invoiceitems";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: String,
    pub object: Option<String>,
    /// Amount in the smallest currency unit; `unit_amount * quantity`
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub customer: Option<Expandable<Customer>>,
    /// Unix timestamp of creation
    pub date: Option<i64>,
    pub deleted: Option<bool>,
    pub description: Option<String>,
    /// Whether coupons apply to this item
    pub discountable: Option<bool>,
    /// Unset while the item is pending
    pub invoice: Option<Expandable<Invoice>>,
    pub livemode: Option<bool>,
    pub metadata: Option<Metadata>,
    pub period: Option<Period>,
    /// Present for items generated by a subscription
    pub plan: Option<Plan>,
    pub proration: Option<bool>,
    pub quantity: Option<i64>,
    pub subscription: Option<Expandable<Subscription>>,
    pub subscription_item: Option<String>,
    pub tax_rates: Option<Vec<TaxRate>>,
    pub unified_proration: Option<bool>,
    pub unit_amount: Option<i64>,
    pub unit_amount_decimal: Option<Decimal>,
}

impl Object for InvoiceItem {
    const OBJECT_NAME: &'static str = "invoiceitem";

    fn id(&self) -> &str {
        &self.id
    }
}

impl InvoiceItem {
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted.unwrap_or(false)
    }

    #[must_use]
    pub fn customer_id(&self) -> Option<&str> {
        self.customer.as_ref().map(Expandable::id)
    }

    #[must_use]
    pub fn invoice_id(&self) -> Option<&str> {
        self.invoice.as_ref().map(Expandable::id)
    }

    #[must_use]
    pub fn subscription_id(&self) -> Option<&str> {
        self.subscription.as_ref().map(Expandable::id)
    }

    fn collection_path() -> ApiPath {
        ApiPath::collection(COLLECTION)
    }

    /// Returns one page of invoice items, most recent first.
    ///
    /// # Errors
    /// Propagates transport and API errors unchanged.
    #[instrument(skip_all)]
    pub async fn list(
        client: &StripeClient,
        params: &InvoiceItemListParams,
        options: Option<&RequestOptions>,
    ) -> Result<List<Self>, StripeError> {
        client
            .request_collection(&Self::collection_path(), params.to_params()?, options)
            .await
    }

    /// Streams every invoice item matching `params`.
    ///
    /// # Errors
    /// Fails up front only if `params` cannot be encoded.
    pub fn list_auto_paging(
        client: &StripeClient,
        params: &InvoiceItemListParams,
        options: Option<&RequestOptions>,
    ) -> Result<impl Stream<Item = Result<Self, StripeError>> + Send + use<>, StripeError> {
        Ok(client.auto_paging(Self::collection_path(), params.to_params()?, options))
    }

    /// # Errors
    /// Propagates transport and API errors unchanged.
    #[instrument(skip_all)]
    pub async fn create(
        client: &StripeClient,
        params: &InvoiceItemCreateParams,
        options: Option<&RequestOptions>,
    ) -> Result<Self, StripeError> {
        client
            .request(ApiMethod::Post, &Self::collection_path(), params.to_params()?, options)
            .await
    }

    /// # Errors
    /// Propagates transport and API errors unchanged.
    #[instrument(skip(client, params, options))]
    pub async fn retrieve(
        client: &StripeClient,
        id: &str,
        params: &InvoiceItemRetrieveParams,
        options: Option<&RequestOptions>,
    ) -> Result<Self, StripeError> {
        client
            .request(ApiMethod::Get, &Self::collection_path().id(id), params.to_params()?, options)
            .await
    }

    /// # Errors
    /// Propagates transport and API errors unchanged.
    #[instrument(skip(client, params, options))]
    pub async fn update(
        client: &StripeClient,
        id: &str,
        params: &InvoiceItemUpdateParams,
        options: Option<&RequestOptions>,
    ) -> Result<Self, StripeError> {
        client
            .request(ApiMethod::Post, &Self::collection_path().id(id), params.to_params()?, options)
            .await
    }

    /// Deletes an item that is not attached to a finalized invoice.
    ///
    /// # Errors
    /// Propagates transport and API errors unchanged.
    #[instrument(skip(client, params, options))]
    pub async fn delete(
        client: &StripeClient,
        id: &str,
        params: &InvoiceItemDeleteParams,
        options: Option<&RequestOptions>,
    ) -> Result<Self, StripeError> {
        client
            .request(
                ApiMethod::Delete,
                &Self::collection_path().id(id),
                params.to_params()?,
                options,
            )
            .await
    }
}
