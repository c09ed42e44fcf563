use serde::{Deserialize, Serialize};

use crate::expandable::Object;

fn list_object_name() -> String {
    "list".to_owned()
}

/// One page of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    #[serde(default = "list_object_name")]
    pub object: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Whether more items exist after this page
    #[serde(default)]
    pub has_more: bool,
    /// Collection path this page was fetched from
    #[serde(default)]
    pub url: String,
}

impl<T> List<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Object> List<T> {
    /// Cursor for the next page when paging forward.
    #[must_use]
    pub fn starting_after_cursor(&self) -> Option<&str> {
        self.data.last().map(Object::id)
    }

    /// Cursor for the next page when paging backward.
    #[must_use]
    pub fn ending_before_cursor(&self) -> Option<&str> {
        self.data.first().map(Object::id)
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Item {
        id: String,
    }

    impl Object for Item {
        const OBJECT_NAME: &'static str = "item";

        fn id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn deserializes_envelope() {
        let list: List<Item> = serde_json::from_value(json!({
            "object": "list",
            "data": [{"id": "a"}, {"id": "b"}],
            "has_more": true,
            "url": "/v1/items"
        }))
        .unwrap();

        assert_eq!(list.len(), 2);
        assert!(list.has_more);
        assert_eq!(list.url, "/v1/items");
        assert_eq!(list.starting_after_cursor(), Some("b"));
        assert_eq!(list.ending_before_cursor(), Some("a"));
    }

    #[test]
    fn missing_fields_default() {
        let list: List<Item> = serde_json::from_value(json!({})).unwrap();
        assert_eq!(list.object, "list");
        assert!(list.is_empty());
        assert!(!list.has_more);
        assert!(list.starting_after_cursor().is_none());
    }
}
