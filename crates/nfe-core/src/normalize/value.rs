//! Tagged value tree shared by the raw and normalized forms.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from element or attribute name to value.
pub type Map = IndexMap<String, Value>;

/// A node of the key-value form of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Leaf text.
    Text(String),
    /// Repeated sibling elements, in document order.
    List(Vec<Value>),
    /// Element with attributes and/or children.
    Map(Map),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Entry of a map value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// True if `key` appears in this value or any nested value.
    pub fn contains_key_deep(&self, key: &str) -> bool {
        match self {
            Value::Text(_) => false,
            Value::List(items) => items.iter().any(|v| v.contains_key_deep(key)),
            Value::Map(map) => {
                map.contains_key(key) || map.values().any(|v| v.contains_key_deep(key))
            }
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_shape() {
        let mut ide = Map::new();
        ide.insert("cUF".to_string(), "35".into());
        let mut root = Map::new();
        root.insert("ide".to_string(), ide.into());
        root.insert("obs".to_string(), vec![Value::from("a"), Value::from("b")].into());

        let json = serde_json::to_string(&Value::Map(root.clone())).unwrap();
        assert_eq!(json, r#"{"ide":{"cUF":"35"},"obs":["a","b"]}"#);

        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Value::Map(root));
    }

    #[test]
    fn test_contains_key_deep() {
        let value: Value =
            serde_json::from_str(r#"{"a":[{"b":{"@attributes":{"x":"1"}}}]}"#).unwrap();

        assert!(value.contains_key_deep("@attributes"));
        assert!(!value.contains_key_deep("y"));
    }
}
