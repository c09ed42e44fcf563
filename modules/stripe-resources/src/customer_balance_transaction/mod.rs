//! Entries of a customer's credit balance ledger.
//!
//! Transactions live under their customer, so every operation takes the
//! customer id in addition to its parameters. They cannot be deleted.

mod params;

pub use params::{
    CustomerBalanceTransactionCreateParams, CustomerBalanceTransactionCreateParamsBuilder,
    CustomerBalanceTransactionListParams, CustomerBalanceTransactionListParamsBuilder,
    CustomerBalanceTransactionRetrieveParams, CustomerBalanceTransactionRetrieveParamsBuilder,
};

use futures_core::Stream;
use serde::{Deserialize, Serialize};
use stripe_sdk::{
    ApiMethod, ApiPath, ApiRequestParams, Expandable, List, Object, RequestOptions, StripeClient,
    StripeError,
};
use tracing::instrument;

use crate::common::Metadata;
use crate::models::{Customer, Invoice};

/// What caused the balance to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceTransactionType {
    Adjustment,
    AppliedToInvoice,
    CreditNote,
    Initial,
    InvoiceTooLarge,
    InvoiceTooSmall,
    Migration,
    UnappliedFromInvoice,
    UnspentReceiverCredit,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerBalanceTransaction {
    pub id: String,
    pub object: Option<String>,
    /// Negative when crediting the customer
    pub amount: Option<i64>,
    pub created: Option<i64>,
    /// Id of the credit note that created this transaction, if any
    pub credit_note: Option<String>,
    pub currency: Option<String>,
    pub customer: Option<Expandable<Customer>>,
    pub description: Option<String>,
    /// Customer balance after this transaction was applied
    pub ending_balance: Option<i64>,
    pub invoice: Option<Expandable<Invoice>>,
    pub livemode: Option<bool>,
    pub metadata: Option<Metadata>,
    #[serde(rename = "type")]
    pub kind: Option<BalanceTransactionType>,
}

impl Object for CustomerBalanceTransaction {
    const OBJECT_NAME: &'static str = "customer_balance_transaction";

    fn id(&self) -> &str {
        &self.id
    }
}

impl CustomerBalanceTransaction {
    #[must_use]
    pub fn customer_id(&self) -> Option<&str> {
        self.customer.as_ref().map(Expandable::id)
    }

    fn collection_path(customer: &str) -> ApiPath {
        ApiPath::collection("customers")
            .id(customer)
            .segment("balance_transactions")
    }

    /// # Errors
    /// Propagates transport and API errors unchanged.
    #[instrument(skip(client, params, options))]
    pub async fn list(
        client: &StripeClient,
        customer: &str,
        params: &CustomerBalanceTransactionListParams,
        options: Option<&RequestOptions>,
    ) -> Result<List<Self>, StripeError> {
        client
            .request_collection(&Self::collection_path(customer), params.to_params()?, options)
            .await
    }

    /// Streams the customer's whole ledger.
    ///
    /// # Errors
    /// Fails up front only if `params` cannot be encoded.
    pub fn list_auto_paging(
        client: &StripeClient,
        customer: &str,
        params: &CustomerBalanceTransactionListParams,
        options: Option<&RequestOptions>,
    ) -> Result<impl Stream<Item = Result<Self, StripeError>> + Send + use<>, StripeError> {
        Ok(client.auto_paging(Self::collection_path(customer), params.to_params()?, options))
    }

    /// Adjusts the customer's balance. Transactions are immutable once created.
    ///
    /// # Errors
    /// Propagates transport and API errors unchanged.
    #[instrument(skip(client, params, options))]
    pub async fn create(
        client: &StripeClient,
        customer: &str,
        params: &CustomerBalanceTransactionCreateParams,
        options: Option<&RequestOptions>,
    ) -> Result<Self, StripeError> {
        client
            .request(
                ApiMethod::Post,
                &Self::collection_path(customer),
                params.to_params()?,
                options,
            )
            .await
    }

    /// # Errors
    /// Propagates transport and API errors unchanged.
    #[instrument(skip(client, params, options))]
    pub async fn retrieve(
        client: &StripeClient,
        customer: &str,
        id: &str,
        params: &CustomerBalanceTransactionRetrieveParams,
        options: Option<&RequestOptions>,
    ) -> Result<Self, StripeError> {
        client
            .request(
                ApiMethod::Get,
                &Self::collection_path(customer).id(id),
                params.to_params()?,
                options,
            )
            .await
    }
}
