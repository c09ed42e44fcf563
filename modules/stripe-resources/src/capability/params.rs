use serde::Serialize;
use stripe_sdk::{ApiRequestParams, ExpandBuilder, ExtraParams, ExtraParamsBuilder};

/// Parameters for [`Capability::update`](super::Capability::update).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CapabilityUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    requested: Option<bool>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl ApiRequestParams for CapabilityUpdateParams {}

impl CapabilityUpdateParams {
    #[must_use]
    pub fn builder() -> CapabilityUpdateParamsBuilder {
        CapabilityUpdateParamsBuilder::default()
    }

    #[must_use]
    pub fn requested(&self) -> Option<bool> {
        self.requested
    }

    #[must_use]
    pub fn expand(&self) -> Option<&[String]> {
        self.expand.as_deref()
    }

    #[must_use]
    pub fn extra_params(&self) -> Option<&ExtraParams> {
        self.extra_params.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CapabilityUpdateParamsBuilder {
    inner: CapabilityUpdateParams,
}

impl CapabilityUpdateParamsBuilder {
    /// `true` requests the capability if it is not already requested. It may
    /// stay inactive until its requirements are met.
    #[must_use]
    pub fn requested(mut self, requested: bool) -> Self {
        self.inner.requested = Some(requested);
        self
    }

    #[must_use]
    pub fn build(self) -> CapabilityUpdateParams {
        self.inner
    }
}

impl ExpandBuilder for CapabilityUpdateParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for CapabilityUpdateParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CapabilityListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<Vec<String>>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl ApiRequestParams for CapabilityListParams {}

impl CapabilityListParams {
    #[must_use]
    pub fn builder() -> CapabilityListParamsBuilder {
        CapabilityListParamsBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CapabilityListParamsBuilder {
    inner: CapabilityListParams,
}

impl CapabilityListParamsBuilder {
    #[must_use]
    pub fn build(self) -> CapabilityListParams {
        self.inner
    }
}

impl ExpandBuilder for CapabilityListParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for CapabilityListParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CapabilityRetrieveParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    expand: Option<Vec<String>>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl ApiRequestParams for CapabilityRetrieveParams {}

impl CapabilityRetrieveParams {
    #[must_use]
    pub fn builder() -> CapabilityRetrieveParamsBuilder {
        CapabilityRetrieveParamsBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CapabilityRetrieveParamsBuilder {
    inner: CapabilityRetrieveParams,
}

impl CapabilityRetrieveParamsBuilder {
    #[must_use]
    pub fn build(self) -> CapabilityRetrieveParams {
        self.inner
    }
}

impl ExpandBuilder for CapabilityRetrieveParamsBuilder {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>> {
        &mut self.inner.expand
    }
}

impl ExtraParamsBuilder for CapabilityRetrieveParamsBuilder {
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
    fn expand_accumulates_in_call_order() {
        let params = CapabilityUpdateParams::builder()
            .add_expand("account")
            .add_all_expand(["requirements", "future_requirements"])
            .add_expand("account")
            .build();
        assert_eq!(
            params.expand().unwrap(),
            ["account", "requirements", "future_requirements", "account"]
        );
    }

    #[test]
    fn extra_params_last_put_wins() {
        let params = CapabilityUpdateParams::builder()
            .put_extra_param("reason", "first")
            .put_all_extra_param([("reason", "second"), ("source", "dashboard")])
            .build();
        let extra = params.extra_params().unwrap();
        assert_eq!(extra.len(), 2);
        assert_eq!(extra.get("reason"), Some(&json!("second")));
    }

    #[test]
    fn requested_alone_serializes_alone() {
        let params = CapabilityUpdateParams::builder().requested(true).build();
        assert_eq!(params.requested(), Some(true));
        assert_eq!(
            Value::Object(params.to_params().unwrap()),
            json!({"requested": true})
        );
    }

    #[test]
    fn requested_plus_extra_params_are_siblings() {
        let params = CapabilityUpdateParams::builder()
            .requested(false)
            .put_extra_param("tos_acceptance", json!({"date": 1}))
            .build();
        assert_eq!(
            Value::Object(params.to_params().unwrap()),
            json!({"requested": false, "tos_acceptance": {"date": 1}})
        );
    }
}
