use serde::Serialize;
use stripe_sdk::{ApiRequestParams, ExpandBuilder, ExtraParams, ExtraParamsBuilder};

use crate::common::{Metadata, MetadataBuilder};

/// Parameters for
/// [`CustomerBalanceTransaction::create`](super::CustomerBalanceTransaction::create).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerBalanceTransactionCreateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl ApiRequestParams for CustomerBalanceTransactionCreateParams {}

impl CustomerBalanceTransactionCreateParams {
    #[must_use]
    pub fn builder() -> CustomerBalanceTransactionCreateParamsBuilder {
        CustomerBalanceTransactionCreateParamsBuilder::default()
    }

    #[must_use]
    pub fn amount(&self) -> Option<i64> {
        self.amount
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustomerBalanceTransactionCreateParamsBuilder {
    inner: CustomerBalanceTransactionCreateParams,
}

impl CustomerBalanceTransactionCreateParamsBuilder {
    /// Negative amounts credit the customer, positive amounts debit them.
    #[must_use]
    pub fn amount(mut self, amount: i64) -> Self {
        self.inner.amount = Some(amount);
        self
    }

    /// Must match the customer's currency once one is set.
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.inner.currency = Some(currency.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn build(self) -> CustomerBalanceTransactionCreateParams {
        self.inner
    }
}

impl MetadataBuilder for CustomerBalanceTransactionCreateParamsBuilder {
    fn metadata_mut(&mut self) -> &mut Option<Metadata> {
        &mut self.inner.metadata
    }
}

impl ExpandBuilder for CustomerBalanceTransactionCreateParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for CustomerBalanceTransactionCreateParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerBalanceTransactionListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    ending_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    starting_after: Option<String>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl ApiRequestParams for CustomerBalanceTransactionListParams {}

impl CustomerBalanceTransactionListParams {
    #[must_use]
    pub fn builder() -> CustomerBalanceTransactionListParamsBuilder {
        CustomerBalanceTransactionListParamsBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustomerBalanceTransactionListParamsBuilder {
    inner: CustomerBalanceTransactionListParams,
}

impl CustomerBalanceTransactionListParamsBuilder {
    #[must_use]
    pub fn ending_before(mut self, id: impl Into<String>) -> Self {
        self.inner.ending_before = Some(id.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.inner.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn starting_after(mut self, id: impl Into<String>) -> Self {
        self.inner.starting_after = Some(id.into());
        self
    }

    #[must_use]
    pub fn build(self) -> CustomerBalanceTransactionListParams {
        self.inner
    }
}

impl ExpandBuilder for CustomerBalanceTransactionListParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for CustomerBalanceTransactionListParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerBalanceTransactionRetrieveParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<Vec<String>>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl ApiRequestParams for CustomerBalanceTransactionRetrieveParams {}

impl CustomerBalanceTransactionRetrieveParams {
    #[must_use]
    pub fn builder() -> CustomerBalanceTransactionRetrieveParamsBuilder {
        CustomerBalanceTransactionRetrieveParamsBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustomerBalanceTransactionRetrieveParamsBuilder {
    inner: CustomerBalanceTransactionRetrieveParams,
}

impl CustomerBalanceTransactionRetrieveParamsBuilder {
    #[must_use]
    pub fn build(self) -> CustomerBalanceTransactionRetrieveParams {
        self.inner
    }
}

impl ExpandBuilder for CustomerBalanceTransactionRetrieveParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for CustomerBalanceTransactionRetrieveParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}
