use std::fmt;
use std::sync::Arc;

use futures_core::Stream;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::error::StripeError;
use crate::expandable::Object;
use crate::list::List;
use crate::options::RequestOptions;
use crate::pager::ListPager;
use crate::transport::{ApiMethod, ApiRequest, Transport};
use crate::url::{self, ApiPath};

/// Handle used by every resource operation.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct StripeClient {
    transport: Arc<dyn Transport>,
    api_base: Option<Arc<str>>,
}

impl fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl StripeClient {
    #[must_use]
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::from_arc(Arc::new(transport))
    }

    #[must_use]
    pub fn from_arc(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            api_base: None,
        }
    }

    /// Pin this client to a base URL instead of the process-wide one.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(Arc::from(api_base.into()));
        self
    }

    /// Base URL requests will use right now.
    #[must_use]
    pub fn api_base(&self) -> String {
        match &self.api_base {
            Some(base) => base.to_string(),
            None => url::api_base().as_ref().clone(),
        }
    }

    #[must_use]
    pub fn url(&self, path: &ApiPath) -> String {
        path.resolve(&self.api_base())
    }

    /// Send one request and decode the response into `T`.
    ///
    /// An empty `params` map is sent as no parameters at all.
    ///
    /// # Errors
    /// Returns [`StripeError::InvalidParams`] without sending anything when
    /// `path` carries a dot-segment id. Otherwise returns whatever the
    /// transport reports, or [`StripeError::Decode`] when the body does not
    /// match `T`.
    #[instrument(skip_all, fields(method = %method, path = %path))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: ApiMethod,
        path: &ApiPath,
        params: Map<String, Value>,
        options: Option<&RequestOptions>,
    ) -> Result<T, StripeError> {
        path.validate()?;
        let request = ApiRequest {
            method,
            url: self.url(path),
            params: (!params.is_empty()).then_some(params),
            options: options.cloned().unwrap_or_default(),
        };
        tracing::debug!(url = %request.url, "sending Stripe API request");

        let body = self.transport.send(request).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Fetch one page of a collection.
    ///
    /// # Errors
    /// Same as [`request`](Self::request).
    pub async fn request_collection<T: DeserializeOwned>(
        &self,
        path: &ApiPath,
        params: Map<String, Value>,
        options: Option<&RequestOptions>,
    ) -> Result<List<T>, StripeError> {
        self.request(ApiMethod::Get, path, params, options).await
    }

    /// Stream every item of a collection, fetching pages on demand.
    pub fn auto_paging<T>(
        &self,
        path: ApiPath,
        params: Map<String, Value>,
        options: Option<&RequestOptions>,
    ) -> impl Stream<Item = Result<T, StripeError>> + Send + use<T>
    where
        T: DeserializeOwned + Object + Send + 'static,
    {
        let client = self.clone();
        let options = options.cloned();
        ListPager::new(params, move |page_params| {
            let client = client.clone();
            let path = path.clone();
            let options = options.clone();
            async move {
                client
                    .request_collection(&path, page_params, options.as_ref())
                    .await
            }
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use futures_util::TryStreamExt;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Thing {
        id: String,
        size: Option<i64>,
    }

    impl Object for Thing {
        const OBJECT_NAME: &'static str = "thing";

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn client(mock: &MockTransport) -> StripeClient {
        StripeClient::new(mock.clone()).with_api_base("https://stripe.test")
    }

    #[tokio::test]
    async fn request_decodes_body_and_records_call() {
        let mock = MockTransport::new();
        mock.push_json(json!({"id": "th_1", "size": 3}));

        let path = ApiPath::collection("things").id("th_1");
        let thing: Thing = client(&mock)
            .request(ApiMethod::Get, &path, Map::new(), None)
            .await
            .unwrap();
        assert_eq!(thing.id, "th_1");
        assert_eq!(thing.size, Some(3));

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.method, ApiMethod::Get);
        assert_eq!(sent.url, "https://stripe.test/v1/things/th_1");
        assert!(sent.params.is_none());
        assert_eq!(sent.options, RequestOptions::default());
    }

    #[tokio::test]
    async fn request_passes_options_through() {
        let mock = MockTransport::new();
        mock.push_json(json!({"id": "th_2"}));

        let options = RequestOptions::builder().idempotency_key("k1").build();
        let _: Thing = client(&mock)
            .request(
                ApiMethod::Post,
                &ApiPath::collection("things"),
                json!({"size": 1}).as_object().unwrap().clone(),
                Some(&options),
            )
            .await
            .unwrap();

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.options.idempotency_key(), Some("k1"));
        assert_eq!(sent.params.unwrap().get("size"), Some(&json!(1)));
    }

    #[tokio::test]
    async fn decode_mismatch_is_reported() {
        let mock = MockTransport::new();
        mock.push_json(json!({"size": "large"}));

        let err = client(&mock)
            .request::<Thing>(ApiMethod::Get, &ApiPath::collection("things"), Map::new(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, StripeError::Decode(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn transport_error_propagates() {
        let mock = MockTransport::new();
        mock.push_error(StripeError::from_response(401, b"{}", None));

        let err = client(&mock)
            .request::<Thing>(ApiMethod::Get, &ApiPath::collection("things"), Map::new(), None)
            .await
            .unwrap_err();
        assert_eq!(err.api_kind(), Some(crate::ApiErrorKind::Authentication));
    }

    #[tokio::test]
    async fn dot_segment_id_is_refused_before_sending() {
        let mock = MockTransport::new();
        mock.push_json(json!({"id": "th_1"}));

        for id in ["..", "%2e%2e"] {
            let path = ApiPath::collection("things").id(id).segment("children");
            let err = client(&mock)
                .request::<Thing>(ApiMethod::Get, &path, Map::new(), None)
                .await
                .unwrap_err();
            assert!(matches!(err, StripeError::InvalidParams { .. }), "unexpected error: {err}");
        }
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn auto_paging_follows_cursor() {
        let mock = MockTransport::new();
        mock.push_json(json!({"object": "list", "data": [{"id": "a"}, {"id": "b"}], "has_more": true, "url": "/v1/things"}));
        mock.push_json(json!({"object": "list", "data": [{"id": "c"}], "has_more": false, "url": "/v1/things"}));

        let things: Vec<Thing> = client(&mock)
            .auto_paging(ApiPath::collection("things"), Map::new(), None)
            .try_collect()
            .await
            .unwrap();
        let ids: Vec<&str> = things.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].params.is_none());
        assert_eq!(
            requests[1].params.as_ref().and_then(|p| p.get("starting_after")),
            Some(&json!("b"))
        );
    }

    #[test]
    fn client_base_overrides_process_base() {
        let client = StripeClient::new(MockTransport::new()).with_api_base("http://localhost:12111");
        assert_eq!(
            client.url(&ApiPath::collection("coupons")),
            "http://localhost:12111/v1/coupons"
        );
    }
}
