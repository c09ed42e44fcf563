//! Coupons: reusable discounts applied to invoices and subscriptions.

mod params;

pub use params::{
    CouponCreateParams, CouponCreateParamsBuilder, CouponDeleteParams, CouponDeleteParamsBuilder,
    CouponListParams, CouponListParamsBuilder, CouponRetrieveParams, CouponRetrieveParamsBuilder,
    CouponUpdateParams, CouponUpdateParamsBuilder,
};

use futures_core::Stream;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stripe_sdk::{
    ApiMethod, ApiPath, ApiRequestParams, List, Object, RequestOptions, StripeClient, StripeError,
};
use tracing::instrument;

use crate::common::Metadata;

const COLLECTION: &str = "coupons";

/// How long a coupon stays applied once redeemed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponDuration {
    Forever,
    Once,
    Repeating,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: String,
    pub object: Option<String>,
    /// Amount in the smallest currency unit taken off the subtotal
    pub amount_off: Option<i64>,
    pub created: Option<i64>,
    pub currency: Option<String>,
    pub deleted: Option<bool>,
    pub duration: Option<CouponDuration>,
    /// Set when `duration` is `repeating`
    pub duration_in_months: Option<i64>,
    pub livemode: Option<bool>,
    pub max_redemptions: Option<i64>,
    pub metadata: Option<Metadata>,
    pub name: Option<String>,
    pub percent_off: Option<Decimal>,
    pub redeem_by: Option<i64>,
    pub times_redeemed: Option<i64>,
    /// Whether the coupon can still be applied
    pub valid: Option<bool>,
}

impl Object for Coupon {
    const OBJECT_NAME: &'static str = "coupon";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Coupon {
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted.unwrap_or(false)
    }

    fn collection_path() -> ApiPath {
        ApiPath::collection(COLLECTION)
    }

    /// Returns one page of coupons.
    ///
    /// # Errors
    /// Propagates transport and API errors unchanged.
    #[instrument(skip_all)]
    pub async fn list(
        client: &StripeClient,
        params: &CouponListParams,
        options: Option<&RequestOptions>,
    ) -> Result<List<Self>, StripeError> {
        client
            .request_collection(&Self::collection_path(), params.to_params()?, options)
            .await
    }

    /// Streams every coupon matching `params`, fetching pages as needed.
    ///
    /// # Errors
    /// Fails up front only if `params` cannot be encoded; request failures
    /// are yielded by the stream.
    pub fn list_auto_paging(
        client: &StripeClient,
        params: &CouponListParams,
        options: Option<&RequestOptions>,
    ) -> Result<impl Stream<Item = Result<Self, StripeError>> + Send + use<>, StripeError> {
        Ok(client.auto_paging(Self::collection_path(), params.to_params()?, options))
    }

    /// # Errors
    /// Propagates transport and API errors unchanged.
    #[instrument(skip_all)]
    pub async fn create(
        client: &StripeClient,
        params: &CouponCreateParams,
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
        params: &CouponRetrieveParams,
        options: Option<&RequestOptions>,
    ) -> Result<Self, StripeError> {
        client
            .request(ApiMethod::Get, &Self::collection_path().id(id), params.to_params()?, options)
            .await
    }

    /// Updates name or metadata. Unset fields are left untouched.
    ///
    /// # Errors
    /// Propagates transport and API errors unchanged.
    #[instrument(skip(client, params, options))]
    pub async fn update(
        client: &StripeClient,
        id: &str,
        params: &CouponUpdateParams,
        options: Option<&RequestOptions>,
    ) -> Result<Self, StripeError> {
        client
            .request(ApiMethod::Post, &Self::collection_path().id(id), params.to_params()?, options)
            .await
    }

    /// Deletes the coupon. Customers already using it keep their discount.
    ///
    /// Returns a stub with `deleted` set.
    ///
    /// # Errors
    /// Propagates transport and API errors unchanged.
    #[instrument(skip(client, params, options))]
    pub async fn delete(
        client: &StripeClient,
        id: &str,
        params: &CouponDeleteParams,
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

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::common::MetadataBuilder;
    use futures_util::TryStreamExt;
    use serde_json::json;
    use stripe_sdk::testing::MockTransport;
    use stripe_sdk::{ExpandBuilder, ExtraParamsBuilder};

    fn client(mock: &MockTransport) -> StripeClient {
        StripeClient::new(mock.clone()).with_api_base("https://api.stripe.test")
    }

    fn coupon_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "object": "coupon",
            "amount_off": null,
            "created": 1_600_000_000,
            "duration": "once",
            "livemode": false,
            "metadata": {},
            "percent_off": 25.0,
            "times_redeemed": 0,
            "valid": true
        })
    }

    #[tokio::test]
    async fn list_without_params_uses_bare_collection_path() {
        let mock = MockTransport::new();
        mock.push_json(json!({"object": "list", "data": [coupon_json("co_1")], "has_more": false, "url": "/v1/coupons"}));

        let page = Coupon::list(&client(&mock), &CouponListParams::default(), None)
            .await
            .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].duration, Some(CouponDuration::Once));

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.method, ApiMethod::Get);
        assert_eq!(sent.url_with_query(), "https://api.stripe.test/v1/coupons");
    }

    #[tokio::test]
    async fn list_with_filter_sends_it() {
        let mock = MockTransport::new();
        mock.push_json(json!({"object": "list", "data": [], "has_more": false, "url": "/v1/coupons"}));

        let params = CouponListParams::builder().limit(3).build();
        Coupon::list(&client(&mock), &params, None).await.unwrap();

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.url_with_query(), "https://api.stripe.test/v1/coupons?limit=3");
    }

    #[tokio::test]
    async fn create_posts_only_set_fields() {
        let mock = MockTransport::new();
        mock.push_json(coupon_json("SPRING25"));

        let params = CouponCreateParams::builder()
            .id("SPRING25")
            .duration(CouponDuration::Once)
            .build();
        let coupon = Coupon::create(&client(&mock), &params, None).await.unwrap();
        assert_eq!(coupon.id, "SPRING25");
        assert_eq!(coupon.percent_off, Some(Decimal::new(25, 0)));

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.method, ApiMethod::Post);
        assert_eq!(sent.url, "https://api.stripe.test/v1/coupons");
        assert_eq!(
            serde_json::Value::Object(sent.params.unwrap()),
            json!({"id": "SPRING25", "duration": "once"})
        );
    }

    #[tokio::test]
    async fn retrieve_encodes_id_and_expands() {
        let mock = MockTransport::new();
        mock.push_json(coupon_json("25% off/now"));

        let params = CouponRetrieveParams::builder().add_expand("applies_to").build();
        let coupon = Coupon::retrieve(&client(&mock), "25% off/now", &params, None)
            .await
            .unwrap();
        assert_eq!(coupon.id(), "25% off/now");

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.url, "https://api.stripe.test/v1/coupons/25%25%20off%2Fnow");
        assert_eq!(
            sent.url_with_query(),
            "https://api.stripe.test/v1/coupons/25%25%20off%2Fnow?expand%5B0%5D=applies_to"
        );
    }

    #[tokio::test]
    async fn update_posts_to_item_path() {
        let mock = MockTransport::new();
        mock.push_json(json!({"id": "co_1", "name": "Renamed"}));

        let params = CouponUpdateParams::builder()
            .name("Renamed")
            .put_metadata("campaign", "fall")
            .build();
        let options = RequestOptions::builder().idempotency_key("rename-co_1").build();
        let coupon = Coupon::update(&client(&mock), "co_1", &params, Some(&options))
            .await
            .unwrap();
        assert_eq!(coupon.name.as_deref(), Some("Renamed"));

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.method, ApiMethod::Post);
        assert_eq!(sent.url, "https://api.stripe.test/v1/coupons/co_1");
        assert_eq!(sent.options.idempotency_key(), Some("rename-co_1"));
        assert_eq!(
            serde_json::Value::Object(sent.params.unwrap()),
            json!({"name": "Renamed", "metadata": {"campaign": "fall"}})
        );
    }

    #[tokio::test]
    async fn delete_returns_deleted_stub() {
        let mock = MockTransport::new();
        mock.push_json(json!({"id": "co_1", "object": "coupon", "deleted": true}));

        let coupon = Coupon::delete(&client(&mock), "co_1", &CouponDeleteParams::default(), None)
            .await
            .unwrap();
        assert_eq!(coupon.id, "co_1");
        assert_eq!(coupon.deleted, Some(true));
        assert!(coupon.is_deleted());

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.method, ApiMethod::Delete);
        assert!(sent.params.is_none());
    }

    #[tokio::test]
    async fn delete_forwards_expand_and_extra_params() {
        let mock = MockTransport::new();
        mock.push_json(json!({"id": "co_2", "object": "coupon", "deleted": true}));

        let params = CouponDeleteParams::builder()
            .add_expand("applies_to")
            .put_extra_param("reason", "retired")
            .build();
        Coupon::delete(&client(&mock), "co_2", &params, None).await.unwrap();

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.method, ApiMethod::Delete);
        assert_eq!(
            serde_json::Value::Object(sent.params.unwrap()),
            json!({"expand": ["applies_to"], "reason": "retired"})
        );
    }

    #[tokio::test]
    async fn encoding_error_is_reported_before_sending() {
        let mock = MockTransport::new();
        let params = CouponUpdateParams::builder()
            .name("Real")
            .put_extra_param("name", "Shadow")
            .build();

        let err = Coupon::update(&client(&mock), "co_1", &params, None)
            .await
            .unwrap_err();
        assert!(matches!(err, StripeError::InvalidParams { .. }), "unexpected error: {err}");
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn auto_paging_walks_every_page() {
        let mock = MockTransport::new();
        mock.push_json(json!({"object": "list", "data": [coupon_json("co_1"), coupon_json("co_2")], "has_more": true, "url": "/v1/coupons"}));
        mock.push_json(json!({"object": "list", "data": [coupon_json("co_3")], "has_more": false, "url": "/v1/coupons"}));

        let params = CouponListParams::builder().limit(2).build();
        let coupons: Vec<Coupon> = Coupon::list_auto_paging(&client(&mock), &params, None)
            .unwrap()
            .try_collect()
            .await
            .unwrap();
        let ids: Vec<&str> = coupons.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["co_1", "co_2", "co_3"]);

        let requests = mock.requests();
        assert_eq!(
            requests[1].url_with_query(),
            "https://api.stripe.test/v1/coupons?limit=2&starting_after=co_2"
        );
    }
}
