//! Request parameter objects.
//!
//! Every operation takes an immutable parameter struct produced by a
//! builder. Parameter structs derive `Serialize`, skip unset fields, and
//! carry two common pieces of state:
//!
//! - `expand`: names of fields the server should return as full objects
//! - `extra_params`: keys the typed API does not know about, sent verbatim
//!
//! Extra parameters are serialized under the [`EXTRA_PARAMS_KEY`] sentinel
//! and lifted into the enclosing object by [`ApiRequestParams::to_params`].

mod extra;
mod query;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::StripeError;

pub use extra::ExtraParams;
pub use query::encode_query;

/// Field name extra parameters serialize under.
///
/// Parameter structs declare their extra parameters as
/// `#[serde(rename = "$extra_params", skip_serializing_if = "Option::is_none")]`.
pub const EXTRA_PARAMS_KEY: &str = "$extra_params";

/// A parameter object that can be turned into a request payload.
pub trait ApiRequestParams: Serialize {
    /// Encode into a JSON object with extra parameters merged in.
    ///
    /// # Errors
    /// Returns [`StripeError::InvalidParams`] when an extra parameter uses the
    /// same key as a declared field at the same nesting level, or when the
    /// struct does not serialize to an object.
    fn to_params(&self) -> Result<Map<String, Value>, StripeError> {
        match merge_extra_params(serde_json::to_value(self)?)? {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(Map::new()),
            _ => Err(StripeError::InvalidParams {
                key: String::new(),
                reason: "parameters must serialize to a JSON object".to_owned(),
            }),
        }
    }
}

/// Recursively lift `$extra_params` entries into their parent objects.
fn merge_extra_params(value: Value) -> Result<Value, StripeError> {
    match value {
        Value::Object(map) => {
            let mut merged = Map::with_capacity(map.len());
            let mut extras = None;
            for (key, value) in map {
                if key == EXTRA_PARAMS_KEY {
                    extras = Some(value);
                } else {
                    merged.insert(key, merge_extra_params(value)?);
                }
            }

            if let Some(Value::Object(extras)) = extras {
                for (key, value) in extras {
                    if merged.contains_key(&key) {
                        return Err(StripeError::InvalidParams {
                            key,
                            reason: "extra parameter collides with a declared field".to_owned(),
                        });
                    }
                    merged.insert(key, value);
                }
            }
            Ok(Value::Object(merged))
        }
        Value::Array(items) => items
            .into_iter()
            .map(merge_extra_params)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Ok(other),
    }
}

/// Builder support for the `expand` list.
///
/// Implementors only expose the underlying storage. The list is created on
/// first use, so a builder that never expands anything sends no `expand` key.
pub trait ExpandBuilder: Sized {
    fn expand_mut(&mut self) -> &mut Option<Vec<String>>;

    /// Add one element to the `expand` list.
    #[must_use]
    fn add_expand(mut self, element: impl Into<String>) -> Self {
        self.expand_mut()
            .get_or_insert_with(Vec::new)
            .push(element.into());
        self
    }

    /// Add every element to the `expand` list, keeping order.
    #[must_use]
    fn add_all_expand<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand_mut()
            .get_or_insert_with(Vec::new)
            .extend(elements.into_iter().map(Into::into));
        self
    }
}

/// Builder support for extra parameters.
///
/// A later put for the same key replaces the earlier value.
pub trait ExtraParamsBuilder: Sized {
    fn extra_params_mut(&mut self) -> &mut Option<ExtraParams>;

    #[must_use]
    fn put_extra_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_params_mut()
            .get_or_insert_with(ExtraParams::default)
            .insert(key, value);
        self
    }

    #[must_use]
    fn put_all_extra_param<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.extra_params_mut()
            .get_or_insert_with(ExtraParams::default)
            .extend(entries);
        self
    }
}
