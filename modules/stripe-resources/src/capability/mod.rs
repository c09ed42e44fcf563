//! Capabilities of a connected account, such as `card_payments` or
//! `transfers`. The capability name doubles as its id.

mod params;

pub use params::{
    CapabilityListParams, CapabilityListParamsBuilder, CapabilityRetrieveParams,
    CapabilityRetrieveParamsBuilder, CapabilityUpdateParams, CapabilityUpdateParamsBuilder,
};

use serde::{Deserialize, Serialize};
use stripe_sdk::{
    ApiMethod, ApiPath, ApiRequestParams, Expandable, List, Object, RequestOptions, StripeClient,
    StripeError,
};
use tracing::instrument;

use crate::models::Account;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityStatus {
    Active,
    Disabled,
    Inactive,
    Pending,
    Unrequested,
    #[serde(other)]
    Unknown,
}

/// Information still needed before the capability can become active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRequirements {
    pub current_deadline: Option<i64>,
    pub currently_due: Option<Vec<String>>,
    pub disabled_reason: Option<String>,
    pub eventually_due: Option<Vec<String>>,
    pub past_due: Option<Vec<String>>,
    pub pending_verification: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    pub id: String,
    pub object: Option<String>,
    pub account: Option<Expandable<Account>>,
    pub requested: Option<bool>,
    /// Unix timestamp of the request, if requested
    pub requested_at: Option<i64>,
    pub requirements: Option<CapabilityRequirements>,
    pub status: Option<CapabilityStatus>,
}

impl Object for Capability {
    const OBJECT_NAME: &'static str = "capability";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Capability {
    #[must_use]
    pub fn account_id(&self) -> Option<&str> {
        self.account.as_ref().map(Expandable::id)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Some(CapabilityStatus::Active)
    }

    fn collection_path(account: &str) -> ApiPath {
        ApiPath::collection("accounts")
            .id(account)
            .segment("capabilities")
    }

    /// Returns every capability of the account. The list is not paginated.
    ///
    /// # Errors
    /// Propagates transport and API errors unchanged.
    #[instrument(skip(client, params, options))]
    pub async fn list(
        client: &StripeClient,
        account: &str,
        params: &CapabilityListParams,
        options: Option<&RequestOptions>,
    ) -> Result<List<Self>, StripeError> {
        client
            .request_collection(&Self::collection_path(account), params.to_params()?, options)
            .await
    }

    /// # Errors
    /// Propagates transport and API errors unchanged.
    #[instrument(skip(client, params, options))]
    pub async fn retrieve(
        client: &StripeClient,
        account: &str,
        id: &str,
        params: &CapabilityRetrieveParams,
        options: Option<&RequestOptions>,
    ) -> Result<Self, StripeError> {
        client
            .request(
                ApiMethod::Get,
                &Self::collection_path(account).id(id),
                params.to_params()?,
                options,
            )
            .await
    }

    /// Requests or unrequests the capability.
    ///
    /// # Errors
    /// Propagates transport and API errors unchanged.
    #[instrument(skip(client, params, options))]
    pub async fn update(
        client: &StripeClient,
        account: &str,
        id: &str,
        params: &CapabilityUpdateParams,
        options: Option<&RequestOptions>,
    ) -> Result<Self, StripeError> {
        client
            .request(
                ApiMethod::Post,
                &Self::collection_path(account).id(id),
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
    use serde_json::json;
    use stripe_sdk::testing::MockTransport;
    use stripe_sdk::ExpandBuilder;

    fn client(mock: &MockTransport) -> StripeClient {
        StripeClient::new(mock.clone()).with_api_base("https://api.stripe.test")
    }

    fn capability_json() -> serde_json::Value {
        json!({
            "id": "card_payments",
            "object": "capability",
            "account": "acct_1",
            "requested": true,
            "requested_at": 1_600_000_000,
            "requirements": {
                "current_deadline": null,
                "currently_due": ["business_profile.url"],
                "disabled_reason": null,
                "eventually_due": [],
                "past_due": [],
                "pending_verification": []
            },
            "status": "pending"
        })
    }

    #[tokio::test]
    async fn update_posts_requested_flag() {
        let mock = MockTransport::new();
        mock.push_json(capability_json());

        let params = CapabilityUpdateParams::builder().requested(true).build();
        let options = RequestOptions::builder().stripe_account("acct_platform").build();
        let capability =
            Capability::update(&client(&mock), "acct_1", "card_payments", &params, Some(&options))
                .await
                .unwrap();
        assert_eq!(capability.status, Some(CapabilityStatus::Pending));
        assert!(!capability.is_active());
        assert_eq!(capability.account_id(), Some("acct_1"));
        assert_eq!(
            capability.requirements.unwrap().currently_due.unwrap(),
            ["business_profile.url"]
        );

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.method, ApiMethod::Post);
        assert_eq!(sent.url, "https://api.stripe.test/v1/accounts/acct_1/capabilities/card_payments");
        assert_eq!(sent.options.stripe_account(), Some("acct_platform"));
        assert_eq!(serde_json::Value::Object(sent.params.unwrap()), json!({"requested": true}));
    }

    #[tokio::test]
    async fn retrieve_with_expanded_account() {
        let mock = MockTransport::new();
        let mut body = capability_json();
        body["account"] = json!({"id": "acct_1", "object": "account", "country": "US"});
        body["status"] = json!("active");
        mock.push_json(body);

        let params = CapabilityRetrieveParams::builder().add_expand("account").build();
        let capability =
            Capability::retrieve(&client(&mock), "acct_1", "card_payments", &params, None)
                .await
                .unwrap();
        assert!(capability.is_active());
        let account = capability.account.unwrap();
        assert_eq!(account.id(), "acct_1");
        assert_eq!(account.as_object().and_then(|a| a.country.as_deref()), Some("US"));

        assert_eq!(
            mock.last_request().unwrap().url_with_query(),
            "https://api.stripe.test/v1/accounts/acct_1/capabilities/card_payments?expand%5B0%5D=account"
        );
    }

    #[tokio::test]
    async fn list_uses_bare_nested_path() {
        let mock = MockTransport::new();
        mock.push_json(json!({
            "object": "list",
            "data": [capability_json()],
            "has_more": false,
            "url": "/v1/accounts/acct_1/capabilities"
        }));

        let page = Capability::list(&client(&mock), "acct_1", &CapabilityListParams::default(), None)
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(
            mock.last_request().unwrap().url_with_query(),
            "https://api.stripe.test/v1/accounts/acct_1/capabilities"
        );
    }
}
