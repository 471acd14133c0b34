//! Configuration object threaded through every augmenter

use serde_derive::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::{AugmentError, AugmentResult};
use crate::functional::kind::{Classify, Kind};

/// Caller-owned key-value mapping handed by reference to each augmenter.
///
/// The core only ever reads it; callers build it up front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(Map<String, JsonValue>);

impl Props {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builds props from an arbitrary JSON value, which must be an object.
    ///
    /// # Examples
    ///
    /// ```
    /// let props = Props::from_value(json!({ "props": "test" })).unwrap();
    /// assert_eq!(props.get_str("props"), Some("test"));
    /// assert!(Props::from_value(json!([1, 2])).is_err());
    /// ```
    pub fn from_value(value: JsonValue) -> AugmentResult<Self> {
        match value {
            JsonValue::Object(map) => Ok(Self(map)),
            other => Err(AugmentError::Type {
                invoked: other.kind(),
                expected: Kind::Object,
            }),
        }
    }

    /// Adds or replaces `key` and returns the updated props.
    pub fn with(mut self, key: &str, value: impl Into<JsonValue>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(JsonValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, JsonValue> {
        &self.0
    }

    pub fn to_value(&self) -> JsonValue {
        JsonValue::Object(self.0.clone())
    }
}

impl From<Map<String, JsonValue>> for Props {
    fn from(map: Map<String, JsonValue>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_rejects_non_objects() {
        let err = Props::from_value(json!("nope")).unwrap_err();
        assert_eq!(
            err,
            AugmentError::Type {
                invoked: Kind::String,
                expected: Kind::Object,
            }
        );
    }

    #[test]
    fn builder_and_accessors() {
        let props = Props::new().with("props", "test").with("depth", 2);
        assert_eq!(props.len(), 2);
        assert_eq!(props.get_str("props"), Some("test"));
        assert_eq!(props.get("depth"), Some(&json!(2)));
        assert!(!props.contains_key("missing"));
    }

    #[test]
    fn serializes_as_plain_object() {
        let props = Props::new().with("props", "test");
        let encoded = serde_json::to_string(&props).unwrap();
        assert_eq!(encoded, r#"{"props":"test"}"#);
        let decoded: Props = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, props);
    }
}
