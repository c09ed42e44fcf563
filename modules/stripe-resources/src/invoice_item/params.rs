use rust_decimal::Decimal;
use serde::Serialize;
use stripe_sdk::{ApiRequestParams, ExpandBuilder, ExtraParams, ExtraParamsBuilder};

use crate::common::{CreatedFilter, Metadata, MetadataBuilder, PeriodParams};

/// Parameters for [`InvoiceItem::create`](super::InvoiceItem::create).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceItemCreateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    discountable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invoice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period: Option<PeriodParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subscription: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tax_rates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit_amount_decimal: Option<Decimal>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl ApiRequestParams for InvoiceItemCreateParams {}

impl InvoiceItemCreateParams {
    #[must_use]
    pub fn builder() -> InvoiceItemCreateParamsBuilder {
        InvoiceItemCreateParamsBuilder::default()
    }

    #[must_use]
    pub fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    #[must_use]
    pub fn tax_rates(&self) -> Option<&[String]> {
        self.tax_rates.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InvoiceItemCreateParamsBuilder {
    inner: InvoiceItemCreateParams,
}

impl InvoiceItemCreateParamsBuilder {
    /// Amount in the smallest currency unit. Negative for a credit.
    #[must_use]
    pub fn amount(mut self, amount: i64) -> Self {
        self.inner.amount = Some(amount);
        self
    }

    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.inner.currency = Some(currency.into());
        self
    }

    /// Customer to bill.
    #[must_use]
    pub fn customer(mut self, customer: impl Into<String>) -> Self {
        self.inner.customer = Some(customer.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn discountable(mut self, discountable: bool) -> Self {
        self.inner.discountable = Some(discountable);
        self
    }

    /// Draft invoice to attach the item to. Without it the item stays
    /// pending until the next invoice for the customer.
    #[must_use]
    pub fn invoice(mut self, invoice: impl Into<String>) -> Self {
        self.inner.invoice = Some(invoice.into());
        self
    }

    #[must_use]
    pub fn period(mut self, period: PeriodParams) -> Self {
        self.inner.period = Some(period);
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.inner.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn subscription(mut self, subscription: impl Into<String>) -> Self {
        self.inner.subscription = Some(subscription.into());
        self
    }

    #[must_use]
    pub fn add_tax_rate(mut self, tax_rate: impl Into<String>) -> Self {
        self.inner
            .tax_rates
            .get_or_insert_with(Vec::new)
            .push(tax_rate.into());
        self
    }

    #[must_use]
    pub fn add_all_tax_rate<I, S>(mut self, tax_rates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner
            .tax_rates
            .get_or_insert_with(Vec::new)
            .extend(tax_rates.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn unit_amount(mut self, unit_amount: i64) -> Self {
        self.inner.unit_amount = Some(unit_amount);
        self
    }

    /// Like `unit_amount` with up to twelve decimal places. Set at most one of the two.
    #[must_use]
    pub fn unit_amount_decimal(mut self, unit_amount: Decimal) -> Self {
        self.inner.unit_amount_decimal = Some(unit_amount);
        self
    }

    #[must_use]
    pub fn build(self) -> InvoiceItemCreateParams {
        self.inner
    }
}

impl MetadataBuilder for InvoiceItemCreateParamsBuilder {
    fn metadata_mut(&mut self) -> &mut Option<Metadata> {
        &mut self.inner.metadata
    }
}

impl ExpandBuilder for InvoiceItemCreateParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for InvoiceItemCreateParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}

/// Parameters for [`InvoiceItem::list`](super::InvoiceItem::list).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceItemListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<CreatedFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ending_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invoice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    starting_after: Option<String>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl ApiRequestParams for InvoiceItemListParams {}

impl InvoiceItemListParams {
    #[must_use]
    pub fn builder() -> InvoiceItemListParamsBuilder {
        InvoiceItemListParamsBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InvoiceItemListParamsBuilder {
    inner: InvoiceItemListParams,
}

impl InvoiceItemListParamsBuilder {
    #[must_use]
    pub fn created(mut self, created: impl Into<CreatedFilter>) -> Self {
        self.inner.created = Some(created.into());
        self
    }

    #[must_use]
    pub fn customer(mut self, customer: impl Into<String>) -> Self {
        self.inner.customer = Some(customer.into());
        self
    }

    #[must_use]
    pub fn ending_before(mut self, id: impl Into<String>) -> Self {
        self.inner.ending_before = Some(id.into());
        self
    }

    #[must_use]
    pub fn invoice(mut self, invoice: impl Into<String>) -> Self {
        self.inner.invoice = Some(invoice.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.inner.limit = Some(limit);
        self
    }

    /// Only items not yet attached to an invoice when `true`.
    #[must_use]
    pub fn pending(mut self, pending: bool) -> Self {
        self.inner.pending = Some(pending);
        self
    }

    #[must_use]
    pub fn starting_after(mut self, id: impl Into<String>) -> Self {
        self.inner.starting_after = Some(id.into());
        self
    }

    #[must_use]
    pub fn build(self) -> InvoiceItemListParams {
        self.inner
    }
}

impl ExpandBuilder for InvoiceItemListParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for InvoiceItemListParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}

/// Parameters for [`InvoiceItem::retrieve`](super::InvoiceItem::retrieve).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceItemRetrieveParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<Vec<String>>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl ApiRequestParams for InvoiceItemRetrieveParams {}

impl InvoiceItemRetrieveParams {
    #[must_use]
    pub fn builder() -> InvoiceItemRetrieveParamsBuilder {
        InvoiceItemRetrieveParamsBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InvoiceItemRetrieveParamsBuilder {
    inner: InvoiceItemRetrieveParams,
}

impl InvoiceItemRetrieveParamsBuilder {
    #[must_use]
    pub fn build(self) -> InvoiceItemRetrieveParams {
        self.inner
    }
}

impl ExpandBuilder for InvoiceItemRetrieveParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for InvoiceItemRetrieveParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}

/// Parameters for [`InvoiceItem::delete`](super::InvoiceItem::delete).
///
/// Sent in the query string. Only `expand` and extra parameters apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceItemDeleteParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<Vec<String>>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl ApiRequestParams for InvoiceItemDeleteParams {}

impl InvoiceItemDeleteParams {
    #[must_use]
    pub fn builder() -> InvoiceItemDeleteParamsBuilder {
        InvoiceItemDeleteParamsBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InvoiceItemDeleteParamsBuilder {
    inner: InvoiceItemDeleteParams,
}

impl InvoiceItemDeleteParamsBuilder {
    #[must_use]
    pub fn build(self) -> InvoiceItemDeleteParams {
        self.inner
    }
}

impl ExpandBuilder for InvoiceItemDeleteParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for InvoiceItemDeleteParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}

/// Parameters for [`InvoiceItem::update`](super::InvoiceItem::update).
///
/// Items already attached to a finalized invoice cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceItemUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    discountable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period: Option<PeriodParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tax_rates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit_amount_decimal: Option<Decimal>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl ApiRequestParams for InvoiceItemUpdateParams {}

impl InvoiceItemUpdateParams {
    #[must_use]
    pub fn builder() -> InvoiceItemUpdateParamsBuilder {
        InvoiceItemUpdateParamsBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InvoiceItemUpdateParamsBuilder {
    inner: InvoiceItemUpdateParams,
}

impl InvoiceItemUpdateParamsBuilder {
    #[must_use]
    pub fn amount(mut self, amount: i64) -> Self {
        self.inner.amount = Some(amount);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn discountable(mut self, discountable: bool) -> Self {
        self.inner.discountable = Some(discountable);
        self
    }

    #[must_use]
    pub fn period(mut self, period: PeriodParams) -> Self {
        self.inner.period = Some(period);
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.inner.quantity = Some(quantity);
        self
    }

    /// Replaces the item's tax rates with the accumulated list.
    #[must_use]
    pub fn add_tax_rate(mut self, tax_rate: impl Into<String>) -> Self {
        self.inner
            .tax_rates
            .get_or_insert_with(Vec::new)
            .push(tax_rate.into());
        self
    }

    #[must_use]
    pub fn add_all_tax_rate<I, S>(mut self, tax_rates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner
            .tax_rates
            .get_or_insert_with(Vec::new)
            .extend(tax_rates.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn unit_amount(mut self, unit_amount: i64) -> Self {
        self.inner.unit_amount = Some(unit_amount);
        self
    }

    #[must_use]
    pub fn unit_amount_decimal(mut self, unit_amount: Decimal) -> Self {
        self.inner.unit_amount_decimal = Some(unit_amount);
        self
    }

    #[must_use]
    pub fn build(self) -> InvoiceItemUpdateParams {
        self.inner
    }
}

impl MetadataBuilder for InvoiceItemUpdateParamsBuilder {
    fn metadata_mut(&mut self) -> &mut Option<Metadata> {
        &mut self.inner.metadata
    }
}

impl ExpandBuilder for InvoiceItemUpdateParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for InvoiceItemUpdateParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}
