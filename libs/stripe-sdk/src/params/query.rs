use serde_json::{Map, Value};
use url::form_urlencoded;

/// Encode parameters as a form query string using bracket notation.
///
/// Nested objects become `parent[child]=value` and arrays become
/// `parent[0]=value`. Nulls are omitted.
#[must_use]
pub fn encode_query(params: &Map<String, Value>) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten_into(key.clone(), value, &mut pairs);
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

fn flatten_into(prefix: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => pairs.push((prefix, flag.to_string())),
        Value::Number(number) => pairs.push((prefix, number.to_string())),
        Value::String(text) => pairs.push((prefix, text.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(format!("{prefix}[{index}]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten_into(format!("{prefix}[{key}]"), item, pairs);
            }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode(value: &Value) -> String {
        encode_query(value.as_object().unwrap())
    }

    #[test]
    fn scalars() {
        assert_eq!(
            encode(&json!({"customer": "cus_1", "limit": 10, "pending": true})),
            "customer=cus_1&limit=10&pending=true"
        );
    }

    #[test]
    fn nested_objects_use_brackets() {
        assert_eq!(
            encode(&json!({"created": {"gte": 100, "lt": 200}})),
            "created%5Bgte%5D=100&created%5Blt%5D=200"
        );
    }

    #[test]
    fn arrays_are_indexed() {
        assert_eq!(
            encode(&json!({"expand": ["data.customer", "data.invoice"]})),
            "expand%5B0%5D=data.customer&expand%5B1%5D=data.invoice"
        );
    }

    #[test]
    fn values_are_form_encoded_and_nulls_skipped() {
        assert_eq!(
            encode(&json!({"starting_after": "co 1&2", "ending_before": null})),
            "starting_after=co+1%262"
        );
    }

    #[test]
    fn empty_map_encodes_to_empty_string() {
        assert_eq!(encode_query(&Map::new()), "");
    }
}
