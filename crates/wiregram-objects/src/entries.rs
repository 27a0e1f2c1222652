//! Backing entries: the ordered key-value store underlying every object.
//!
//! This is explicit composition over a minimal ordered map, not an inherited
//! collection surface: only the operations the mapping layer actually uses
//! are exposed (get/set/contains/iterate/len plus JSON round-tripping).

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::object::ResponseObject;

/// A stored value in the backing entries.
///
/// Relation mapping rewrites `Map` children into `Object` nodes one level
/// deep; everything else stays `Value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A raw scalar or sequence, untouched by relation mapping.
    Value(Value),
    /// A JSON object; its children may themselves have been mapped.
    Map(Entries),
    /// A typed wrapper produced by relation mapping.
    Object(ResponseObject),
}

impl Node {
    /// Convert a decoded JSON value into a node. Objects become [`Entries`]
    /// recursively so that relation mapping can rewrite their children.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Node::Map(Entries::from_json_map(map)),
            other => Node::Value(other),
        }
    }

    /// The raw JSON for this node. Mapped objects reserialize to the entries
    /// they were built from.
    pub fn to_value(&self) -> Value {
        match self {
            Node::Value(value) => value.clone(),
            Node::Map(entries) => entries.to_value(),
            Node::Object(object) => object.to_value(),
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// Borrow the raw value if this node was never converted to a map or
    /// mapped to an object.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Node::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Entries> {
        match self {
            Node::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ResponseObject> {
        match self {
            Node::Object(object) => Some(object),
            _ => None,
        }
    }
}

/// Ordered `String -> Node` map backing every [`ResponseObject`].
///
/// [`ResponseObject`]: crate::object::ResponseObject
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Entries {
    inner: IndexMap<String, Node>,
}

impl Entries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build entries from a decoded payload.
    ///
    /// Collection-cast semantics: objects keep their keys, arrays key
    /// elements by decimal index, `null` is empty, and any other scalar
    /// lands under `"0"`. Total: never fails.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::from_json_map(map),
            Value::Array(items) => Self {
                inner: items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), Node::from_value(item)))
                    .collect(),
            },
            Value::Null => Self::new(),
            scalar => Self {
                inner: IndexMap::from([("0".to_string(), Node::Value(scalar))]),
            },
        }
    }

    pub(crate) fn from_json_map(map: serde_json::Map<String, Value>) -> Self {
        Self {
            inner: map
                .into_iter()
                .map(|(key, value)| (key, Node::from_value(value)))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.inner.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.inner.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, node: Node) -> Option<Node> {
        self.inner.insert(key.into(), node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.inner.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Node)> {
        self.inner.iter_mut()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.inner.keys()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Reserialize to JSON, preserving insertion order. Index-keyed entries
    /// built from arrays come back as objects; arrays and maps unify once
    /// they are entries.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.inner
                .iter()
                .map(|(key, node)| (key.clone(), node.to_value()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_payload_keeps_keys_and_order() {
        let entries = Entries::from_value(json!({"b": 1, "a": 2, "c": 3}));
        let keys: Vec<_> = entries.keys().cloned().collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn array_payload_keys_by_index() {
        let entries = Entries::from_value(json!([{"update_id": 1}, {"update_id": 2}]));
        assert_eq!(entries.len(), 2);
        assert!(entries.get("0").unwrap().as_map().is_some());
        assert_eq!(
            entries.get("1").unwrap().to_value(),
            json!({"update_id": 2})
        );
    }

    #[test]
    fn null_payload_is_empty() {
        assert!(Entries::from_value(Value::Null).is_empty());
    }

    #[test]
    fn scalar_payload_lands_under_zero() {
        let entries = Entries::from_value(json!(42));
        assert_eq!(entries.get("0").unwrap().as_value(), Some(&json!(42)));
    }

    #[test]
    fn nested_objects_become_maps_all_the_way_down() {
        let entries = Entries::from_value(json!({"chat": {"id": 1, "photo": {"big": "x"}}}));
        let chat = entries.get("chat").unwrap().as_map().unwrap();
        assert!(chat.get("photo").unwrap().as_map().is_some());
    }

    #[test]
    fn to_value_round_trips_objects() {
        let raw = json!({"id": 9, "tags": ["a", "b"], "chat": {"id": 1}});
        assert_eq!(Entries::from_value(raw.clone()).to_value(), raw);
    }

    #[test]
    fn serialize_matches_to_value() {
        let entries = Entries::from_value(json!({"id": 9, "chat": {"id": 1}}));
        let serialized = serde_json::to_value(&entries).unwrap();
        assert_eq!(serialized, entries.to_value());
    }
}
