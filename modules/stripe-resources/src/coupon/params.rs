use rust_decimal::Decimal;
use serde::Serialize;
use stripe_sdk::{ApiRequestParams, ExpandBuilder, ExtraParams, ExtraParamsBuilder};

use super::CouponDuration;
use crate::common::{CreatedFilter, Metadata, MetadataBuilder};

/// Parameters for [`Coupon::create`](super::Coupon::create).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CouponCreateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    amount_off: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<CouponDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_in_months: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_redemptions: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    percent_off: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redeem_by: Option<i64>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl ApiRequestParams for CouponCreateParams {}

impl CouponCreateParams {
    #[must_use]
    pub fn builder() -> CouponCreateParamsBuilder {
        CouponCreateParamsBuilder::default()
    }

    #[must_use]
    pub fn amount_off(&self) -> Option<i64> {
        self.amount_off
    }

    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    #[must_use]
    pub fn duration(&self) -> Option<CouponDuration> {
        self.duration
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    #[must_use]
    pub fn percent_off(&self) -> Option<Decimal> {
        self.percent_off
    }
}

#[derive(Debug, Clone, Default)]
pub struct CouponCreateParamsBuilder {
    inner: CouponCreateParams,
}

impl CouponCreateParamsBuilder {
    /// Amount in the smallest currency unit taken off the subtotal.
    #[must_use]
    pub fn amount_off(mut self, amount_off: i64) -> Self {
        self.inner.amount_off = Some(amount_off);
        self
    }

    /// Three-letter ISO code of `amount_off`. Required when `amount_off` is set.
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.inner.currency = Some(currency.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: CouponDuration) -> Self {
        self.inner.duration = Some(duration);
        self
    }

    /// Number of months a `repeating` coupon applies for.
    #[must_use]
    pub fn duration_in_months(mut self, months: i64) -> Self {
        self.inner.duration_in_months = Some(months);
        self
    }

    /// Caller-chosen id, also used as the coupon code. Generated when unset.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn max_redemptions(mut self, max: i64) -> Self {
        self.inner.max_redemptions = Some(max);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    /// Percentage between 0 and 100 taken off the subtotal.
    #[must_use]
    pub fn percent_off(mut self, percent_off: Decimal) -> Self {
        self.inner.percent_off = Some(percent_off);
        self
    }

    /// Unix timestamp after which the coupon can no longer be redeemed.
    #[must_use]
    pub fn redeem_by(mut self, redeem_by: i64) -> Self {
        self.inner.redeem_by = Some(redeem_by);
        self
    }

    #[must_use]
    pub fn build(self) -> CouponCreateParams {
        self.inner
    }
}

impl MetadataBuilder for CouponCreateParamsBuilder {
    fn metadata_mut(&mut self) -> &mut Option<Metadata> {
        &mut self.inner.metadata
    }
}

impl ExpandBuilder for CouponCreateParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for CouponCreateParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}

/// Parameters for [`Coupon::list`](super::Coupon::list).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CouponListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<CreatedFilter>,
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

impl ApiRequestParams for CouponListParams {}

impl CouponListParams {
    #[must_use]
    pub fn builder() -> CouponListParamsBuilder {
        CouponListParamsBuilder::default()
    }

    #[must_use]
    pub fn limit(&self) -> Option<i64> {
        self.limit
    }
}

#[derive(Debug, Clone, Default)]
pub struct CouponListParamsBuilder {
    inner: CouponListParams,
}

impl CouponListParamsBuilder {
    #[must_use]
    pub fn created(mut self, created: impl Into<CreatedFilter>) -> Self {
        self.inner.created = Some(created.into());
        self
    }

    /// Cursor: return objects listed before this id.
    #[must_use]
    pub fn ending_before(mut self, id: impl Into<String>) -> Self {
        self.inner.ending_before = Some(id.into());
        self
    }

    /// Page size, between 1 and 100.
    #[must_use]
    pub fn limit(mut self, limit: i64) -> Self {
        self.inner.limit = Some(limit);
        self
    }

    /// Cursor: return objects listed after this id.
    #[must_use]
    pub fn starting_after(mut self, id: impl Into<String>) -> Self {
        self.inner.starting_after = Some(id.into());
        self
    }

    #[must_use]
    pub fn build(self) -> CouponListParams {
        self.inner
    }
}

impl ExpandBuilder for CouponListParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for CouponListParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}

/// Parameters for [`Coupon::retrieve`](super::Coupon::retrieve).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CouponRetrieveParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<Vec<String>>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl ApiRequestParams for CouponRetrieveParams {}

impl CouponRetrieveParams {
    #[must_use]
    pub fn builder() -> CouponRetrieveParamsBuilder {
        CouponRetrieveParamsBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CouponRetrieveParamsBuilder {
    inner: CouponRetrieveParams,
}

impl CouponRetrieveParamsBuilder {
    #[must_use]
    pub fn build(self) -> CouponRetrieveParams {
        self.inner
    }
}

impl ExpandBuilder for CouponRetrieveParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for CouponRetrieveParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}

/// Parameters for [`Coupon::delete`](super::Coupon::delete).
///
/// Sent in the query string. Only `expand` and extra parameters apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CouponDeleteParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<Vec<String>>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl ApiRequestParams for CouponDeleteParams {}

impl CouponDeleteParams {
    #[must_use]
    pub fn builder() -> CouponDeleteParamsBuilder {
        CouponDeleteParamsBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CouponDeleteParamsBuilder {
    inner: CouponDeleteParams,
}

impl CouponDeleteParamsBuilder {
    #[must_use]
    pub fn build(self) -> CouponDeleteParams {
        self.inner
    }
}

impl ExpandBuilder for CouponDeleteParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for CouponDeleteParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}

/// Parameters for [`Coupon::update`](super::Coupon::update).
///
/// Only the name and metadata of a coupon can change after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CouponUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl ApiRequestParams for CouponUpdateParams {}

impl CouponUpdateParams {
    #[must_use]
    pub fn builder() -> CouponUpdateParamsBuilder {
        CouponUpdateParamsBuilder::default()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CouponUpdateParamsBuilder {
    inner: CouponUpdateParams,
}

impl CouponUpdateParamsBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn build(self) -> CouponUpdateParams {
        self.inner
    }
}

impl MetadataBuilder for CouponUpdateParamsBuilder {
    fn metadata_mut(&mut self) -> &mut Option<Metadata> {
        &mut self.inner.metadata
    }
}

impl ExpandBuilder for CouponUpdateParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for CouponUpdateParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn single_field_serializes_alone() {
        let params = CouponCreateParams::builder().name("Spring").build();
        assert_eq!(Value::Object(params.to_params().unwrap()), json!({"name": "Spring"}));
    }

    #[test]
    fn single_field_plus_extra_params() {
        let params = CouponUpdateParams::builder()
            .name("Renamed")
            .put_extra_param("applies_to", json!({"products": ["prod_1"]}))
            .build();
        assert_eq!(
            Value::Object(params.to_params().unwrap()),
            json!({"name": "Renamed", "applies_to": {"products": ["prod_1"]}})
        );
    }

    #[test]
    fn metadata_last_put_wins() {
        let params = CouponCreateParams::builder()
            .put_metadata("campaign", "spring")
            .put_all_metadata([("campaign", "summer"), ("region", "eu")])
            .build();
        let metadata = params.metadata().unwrap();
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata["campaign"], "summer");
        assert_eq!(metadata["region"], "eu");
    }

    #[test]
    fn create_params_full_payload() {
        let params = CouponCreateParams::builder()
            .id("SPRING25")
            .percent_off(Decimal::new(25, 0))
            .duration(CouponDuration::Repeating)
            .duration_in_months(3)
            .max_redemptions(100)
            .redeem_by(1_700_000_000)
            .add_expand("applies_to")
            .build();

        let encoded = Value::Object(params.to_params().unwrap());
        assert_eq!(encoded["id"], "SPRING25");
        assert_eq!(encoded["duration"], "repeating");
        assert_eq!(encoded["duration_in_months"], 3);
        assert_eq!(encoded["max_redemptions"], 100);
        assert_eq!(encoded["redeem_by"], 1_700_000_000);
        assert_eq!(encoded["expand"], json!(["applies_to"]));
        assert!(encoded.get("amount_off").is_none());
        assert_eq!(params.percent_off(), Some(Decimal::new(25, 0)));
    }

    #[test]
    fn list_params_with_created_range() {
        let params = CouponListParams::builder()
            .limit(3)
            .created(crate::RangeQuery::builder().gt(10).build())
            .build();
        assert_eq!(
            Value::Object(params.to_params().unwrap()),
            json!({"limit": 3, "created": {"gt": 10}})
        );
    }

    #[test]
    fn extra_param_shadowing_field_fails_to_encode() {
        let params = CouponUpdateParams::builder()
            .name("Real")
            .put_extra_param("name", "Shadow")
            .build();
        assert!(params.to_params().is_err());
    }
}
