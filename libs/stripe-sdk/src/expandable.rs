//! Fields that hold either an id or the full referenced object.
//!
//! The server returns a bare id string unless the field was named in the
//! request's `expand` list, in which case the embedded object is returned.

use serde::{Deserialize, Serialize};

/// A top-level API object with a stable identifier.
pub trait Object {
    /// Value of the `object` field the API uses for this type.
    const OBJECT_NAME: &'static str;

    fn id(&self) -> &str;
}

/// Reference to another object, expanded or not.
///
/// Deserializes from a JSON string into [`Expandable::Id`] and from a JSON
/// object into [`Expandable::Object`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(String),
    Object(Box<T>),
}

impl<T: Object> Expandable<T> {
    /// Id of the referenced object, whether or not it was expanded.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Object(object) => object.id(),
        }
    }
}

impl<T> Expandable<T> {
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// The embedded object, or `None` when only the id is known.
    #[must_use]
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(object),
        }
    }

    #[must_use]
    pub fn into_object(self) -> Option<T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(*object),
        }
    }

    /// Point the reference at `id`.
    ///
    /// Any embedded object is dropped, even if its id equals `id`.
    pub fn set_id(&mut self, id: impl Into<String>) {
        *self = Self::Id(id.into());
    }

    /// Store an expanded object; its id becomes the reference id.
    pub fn set_object(&mut self, object: T) {
        *self = Self::Object(Box::new(object));
    }
}

impl<T> From<String> for Expandable<T> {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl<T> From<&str> for Expandable<T> {
    fn from(id: &str) -> Self {
        Self::Id(id.to_owned())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Widget {
        id: String,
        color: Option<String>,
    }

    impl Object for Widget {
        const OBJECT_NAME: &'static str = "widget";

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn widget(id: &str) -> Widget {
        Widget {
            id: id.to_owned(),
            color: Some("red".to_owned()),
        }
    }

    #[test]
    fn deserializes_bare_id() {
        let field: Expandable<Widget> = serde_json::from_value(json!("wid_1")).unwrap();
        assert_eq!(field.id(), "wid_1");
        assert!(!field.is_expanded());
        assert!(field.as_object().is_none());
    }

    #[test]
    fn deserializes_embedded_object() {
        let field: Expandable<Widget> =
            serde_json::from_value(json!({"id": "wid_2", "color": "blue"})).unwrap();
        assert_eq!(field.id(), "wid_2");
        assert_eq!(field.as_object().and_then(|w| w.color.as_deref()), Some("blue"));
    }

    #[test]
    fn serializes_back_to_wire_shape() {
        let id: Expandable<Widget> = Expandable::from("wid_3");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("wid_3"));

        let object = Expandable::Object(Box::new(widget("wid_4")));
        assert_eq!(
            serde_json::to_value(&object).unwrap(),
            json!({"id": "wid_4", "color": "red"})
        );
    }

    #[test]
    fn set_object_makes_object_id_authoritative() {
        let mut field: Expandable<Widget> = Expandable::from("old");
        field.set_object(widget("new"));
        assert_eq!(field.id(), "new");
        assert_eq!(field.as_object(), Some(&widget("new")));
    }

    #[test]
    fn set_id_discards_expansion() {
        let mut field = Expandable::Object(Box::new(widget("wid_5")));
        field.set_id("wid_6");
        assert_eq!(field.id(), "wid_6");
        assert!(field.as_object().is_none());

        let mut same = Expandable::Object(Box::new(widget("wid_7")));
        same.set_id("wid_7");
        assert!(!same.is_expanded());
    }

    #[test]
    fn into_object_moves_embedded_value() {
        let field = Expandable::Object(Box::new(widget("wid_8")));
        assert_eq!(field.into_object(), Some(widget("wid_8")));
    }
}
