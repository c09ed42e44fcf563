//! Parameter types shared by several resources.

use std::collections::HashMap;

use serde::Serialize;
use stripe_sdk::{ExtraParams, ExtraParamsBuilder};

/// Free-form key/value pairs attached to an object.
pub type Metadata = HashMap<String, String>;

/// Builder support for a `metadata` map.
///
/// The map is created on first put; a later put for the same key wins.
pub trait MetadataBuilder: Sized {
    fn metadata_mut(&mut self) -> &mut Option<Metadata>;

    #[must_use]
    fn put_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata_mut()
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    fn put_all_metadata<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata_mut()
            .get_or_insert_with(Metadata::new)
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

/// Bounds on an integer field such as a creation timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RangeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    gt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gte: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lt: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lte: Option<i64>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl RangeQuery {
    #[must_use]
    pub fn builder() -> RangeQueryBuilder {
        RangeQueryBuilder::default()
    }

    #[must_use]
    pub fn gt(&self) -> Option<i64> {
        self.gt
    }

    #[must_use]
    pub fn gte(&self) -> Option<i64> {
        self.gte
    }

    #[must_use]
    pub fn lt(&self) -> Option<i64> {
        self.lt
    }

    #[must_use]
    pub fn lte(&self) -> Option<i64> {
        self.lte
    }
}

#[derive(Debug, Clone, Default)]
pub struct RangeQueryBuilder {
    inner: RangeQuery,
}

impl RangeQueryBuilder {
    /// Strictly greater than.
    #[must_use]
    pub fn gt(mut self, value: i64) -> Self {
        self.inner.gt = Some(value);
        self
    }

    /// Greater than or equal.
    #[must_use]
    pub fn gte(mut self, value: i64) -> Self {
        self.inner.gte = Some(value);
        self
    }

    /// Strictly less than.
    #[must_use]
    pub fn lt(mut self, value: i64) -> Self {
        self.inner.lt = Some(value);
        self
    }

    /// Less than or equal.
    #[must_use]
    pub fn lte(mut self, value: i64) -> Self {
        self.inner.lte = Some(value);
        self
    }

    #[must_use]
    pub fn build(self) -> RangeQuery {
        self.inner
    }
}

impl ExtraParamsBuilder for RangeQueryBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}

/// Filter on `created`: an exact timestamp or a range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CreatedFilter {
    Timestamp(i64),
    Range(RangeQuery),
}

impl From<i64> for CreatedFilter {
    fn from(timestamp: i64) -> Self {
        Self::Timestamp(timestamp)
    }
}

impl From<RangeQuery> for CreatedFilter {
    fn from(range: RangeQuery) -> Self {
        Self::Range(range)
    }
}

/// Service period of an invoice item, as Unix timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeriodParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<i64>,
    #[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]
    extra_params: Option<ExtraParams>,
}

impl PeriodParams {
    #[must_use]
    pub fn builder() -> PeriodParamsBuilder {
        PeriodParamsBuilder::default()
    }

    #[must_use]
    pub fn start(&self) -> Option<i64> {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Option<i64> {
        self.end
    }
}

#[derive(Debug, Clone, Default)]
pub struct PeriodParamsBuilder {
    inner: PeriodParams,
}

impl PeriodParamsBuilder {
    #[must_use]
    pub fn start(mut self, start: i64) -> Self {
        self.inner.start = Some(start);
        self
    }

    #[must_use]
    pub fn end(mut self, end: i64) -> Self {
        self.inner.end = Some(end);
        self
    }

    #[must_use]
    pub fn build(self) -> PeriodParams {
        self.inner
    }
}

impl ExtraParamsBuilder for PeriodParamsBuilder {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams> {
        &mut self.inner.extra_params
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn range_serializes_only_set_bounds() {
        let range = RangeQuery::builder().gte(100).lt(200).build();
        assert_eq!(serde_json::to_value(&range).unwrap(), json!({"gte": 100, "lt": 200}));
        assert_eq!(range.gte(), Some(100));
        assert!(range.gt().is_none());
    }

    #[test]
    fn created_filter_is_untagged() {
        let exact = CreatedFilter::from(1_600_000_000);
        assert_eq!(serde_json::to_value(&exact).unwrap(), json!(1_600_000_000));

        let range = CreatedFilter::from(RangeQuery::builder().lte(5).build());
        assert_eq!(serde_json::to_value(&range).unwrap(), json!({"lte": 5}));
    }

    #[test]
    fn period_keeps_extra_params_under_sentinel() {
        let period = PeriodParams::builder()
            .start(1)
            .end(2)
            .put_extra_param("anchor", "now")
            .build();
        assert_eq!(
            serde_json::to_value(&period).unwrap(),
            json!({"start": 1, "end": 2, "$extra_params": {"anchor": "now"}})
        );
    }
}
