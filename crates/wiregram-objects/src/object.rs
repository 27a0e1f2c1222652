//! Generic response-object machinery.
//!
//! A [`ResponseObject`] decorates a decoded payload: construction extracts
//! the `result` envelope payload, then runs one relation-mapping pass that
//! rewrites declared sub-fields into typed objects. Each concrete entity
//! type declares a static [`ObjectSchema`]; a single shared routine consumes
//! the tables.

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::trace;

use crate::entries::{Entries, Node};
use crate::envelope;
use crate::error::ObjectError;

/// Static schema descriptor for one entity type: its name and the table of
/// fields that map to other entity types.
#[derive(Debug)]
pub struct ObjectSchema {
    pub name: &'static str,
    pub relations: &'static [Relation],
}

impl ObjectSchema {
    pub const fn new(name: &'static str, relations: &'static [Relation]) -> Self {
        Self { name, relations }
    }

    /// Look up the declared wrapper schema for a field, if any.
    pub fn relation(&self, field: &str) -> Option<&'static ObjectSchema> {
        self.relations
            .iter()
            .find(|relation| relation.field == field)
            .map(|relation| relation.target)
    }

    /// Schema identity. Tables are statics, so pointer equality is exact.
    pub fn is(&'static self, other: &'static ObjectSchema) -> bool {
        std::ptr::eq(self, other)
    }
}

/// One row of a relation table: `field` values are wrapped with `target`.
#[derive(Debug)]
pub struct Relation {
    pub field: &'static str,
    pub target: &'static ObjectSchema,
}

impl Relation {
    pub const fn new(field: &'static str, target: &'static ObjectSchema) -> Self {
        Self { field, target }
    }
}

/// Outcome of a field lookup: either raw JSON or a typed object.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Value(Value),
    Object(ResponseObject),
}

impl Field {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Field::Value(value) => Some(value),
            Field::Object(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(Value::as_str)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_value().and_then(Value::as_i64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_value().and_then(Value::as_f64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_value().and_then(Value::as_bool)
    }

    pub fn as_object(&self) -> Option<&ResponseObject> {
        match self {
            Field::Object(object) => Some(object),
            Field::Value(_) => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Field::Object(_))
    }

    pub fn into_object(self) -> Option<ResponseObject> {
        match self {
            Field::Object(object) => Some(object),
            Field::Value(_) => None,
        }
    }

    /// The raw JSON either way; objects reserialize to their entries.
    pub fn into_value(self) -> Value {
        match self {
            Field::Value(value) => value,
            Field::Object(object) => object.to_value(),
        }
    }
}

/// A typed decoration over a decoded API payload.
///
/// Construction is total: absent keys simply yield absent entries. The one
/// mutation (the relation-mapping pass) happens before the instance escapes;
/// the object is read-only afterwards.
#[derive(Debug, Clone)]
pub struct ResponseObject {
    schema: &'static ObjectSchema,
    entries: Entries,
}

impl ResponseObject {
    /// Build from a raw payload: a full `{"ok": ..., "result": ...}`
    /// envelope or a bare entity.
    pub fn new(schema: &'static ObjectSchema, data: Value) -> Self {
        Self::from_entries(schema, Entries::from_value(envelope::unwrap_result(data)))
    }

    /// Build from already-converted entries, running the relation-mapping
    /// pass. Idempotent: sub-values that are already objects are left alone.
    pub fn from_entries(schema: &'static ObjectSchema, mut entries: Entries) -> Self {
        map_relations(&mut entries, schema);
        Self { schema, entries }
    }

    /// Parse a JSON string and build the object from it.
    pub fn from_json(schema: &'static ObjectSchema, json: &str) -> anyhow::Result<Self> {
        let data: Value = serde_json::from_str(json)
            .with_context(|| format!("invalid JSON payload for {}", schema.name))?;
        Ok(Self::new(schema, data))
    }

    /// Equivalent of [`envelope::unwrap_result`], kept on the object for
    /// symmetry with the raw accessors.
    pub fn raw_result(data: Value) -> Value {
        envelope::unwrap_result(data)
    }

    pub fn schema(&self) -> &'static ObjectSchema {
        self.schema
    }

    /// The full backing entries, as-is: no further wrapping.
    pub fn raw_response(&self) -> &Entries {
        &self.entries
    }

    /// Reserialize the backing entries to JSON.
    pub fn to_value(&self) -> Value {
        self.entries.to_value()
    }

    /// The envelope success flag as stored in the backing entries, `false`
    /// when absent. Note that unwrapping a successful envelope removes the
    /// flag along with the rest of the envelope; callers holding the raw
    /// payload can use [`envelope::is_ok`] instead.
    pub fn status(&self) -> bool {
        self.entries
            .get(envelope::OK)
            .and_then(Node::as_value)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Failure-envelope description, when present.
    pub fn description(&self) -> Option<&str> {
        self.entries
            .get(envelope::DESCRIPTION)
            .and_then(Node::as_value)
            .and_then(Value::as_str)
    }

    /// Failure-envelope error code, when present.
    pub fn error_code(&self) -> Option<i64> {
        self.entries
            .get(envelope::ERROR_CODE)
            .and_then(Node::as_value)
            .and_then(Value::as_i64)
    }

    /// Permissive lookup. A raw sub-map is wrapped in a new instance of this
    /// object's **own** schema, not the declared relation target; that quirk
    /// is deliberate and distinct from [`field`](Self::field).
    pub fn get(&self, key: &str) -> Option<Field> {
        self.entries.get(key).map(|node| self.wrap_same(node))
    }

    /// Permissive lookup with an explicit default value.
    pub fn get_or(&self, key: &str, default: Value) -> Field {
        self.get(key).unwrap_or(Field::Value(default))
    }

    /// Permissive lookup with a default producer, invoked only on absence.
    pub fn get_or_else<F>(&self, key: &str, default: F) -> Field
    where
        F: FnOnce() -> Value,
    {
        self.get(key).unwrap_or_else(|| Field::Value(default()))
    }

    /// Strict lookup: the one failing access path.
    ///
    /// Absent or falsy values produce [`ObjectError::UndefinedField`]. A
    /// field declared in the relation table is wrapped with the **declared**
    /// target schema; anything else comes back as the permissive lookup
    /// would return it.
    pub fn field(&self, name: &str) -> Result<Field, ObjectError> {
        let node = self
            .entries
            .get(name)
            .ok_or_else(|| ObjectError::undefined(self.schema.name, name))?;
        if let Node::Value(value) = node {
            if is_falsy(value) {
                return Err(ObjectError::undefined(self.schema.name, name));
            }
        }
        if let Some(target) = self.schema.relation(name) {
            return Ok(Field::Object(ResponseObject::new(target, node.to_value())));
        }
        Ok(self.wrap_same(node))
    }

    /// Strict string accessor.
    pub fn str_field(&self, name: &str) -> Result<String, ObjectError> {
        match self.field(name)? {
            Field::Value(Value::String(text)) => Ok(text),
            _ => Err(ObjectError::unexpected(self.schema.name, name, "a string")),
        }
    }

    /// Strict integer accessor.
    pub fn i64_field(&self, name: &str) -> Result<i64, ObjectError> {
        self.field(name)?
            .as_i64()
            .ok_or_else(|| ObjectError::unexpected(self.schema.name, name, "an integer"))
    }

    /// Strict float accessor.
    pub fn f64_field(&self, name: &str) -> Result<f64, ObjectError> {
        self.field(name)?
            .as_f64()
            .ok_or_else(|| ObjectError::unexpected(self.schema.name, name, "a number"))
    }

    /// Strict unix-timestamp accessor.
    pub fn timestamp_field(&self, name: &str) -> Result<DateTime<Utc>, ObjectError> {
        let seconds = self.i64_field(name)?;
        DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| ObjectError::unexpected(self.schema.name, name, "a unix timestamp"))
    }

    /// Strict object accessor.
    pub fn object_field(&self, name: &str) -> Result<ResponseObject, ObjectError> {
        self.field(name)?
            .into_object()
            .ok_or_else(|| ObjectError::unexpected(self.schema.name, name, "an object"))
    }

    /// Strict sequence accessor. Bypasses relation wrapping so callers can
    /// map the elements themselves; an empty sequence counts as falsy.
    pub fn list_field(&self, name: &str) -> Result<Vec<Value>, ObjectError> {
        let node = self
            .entries
            .get(name)
            .ok_or_else(|| ObjectError::undefined(self.schema.name, name))?;
        match node.to_value() {
            Value::Array(items) if items.is_empty() => {
                Err(ObjectError::undefined(self.schema.name, name))
            }
            Value::Array(items) => Ok(items),
            _ => Err(ObjectError::unexpected(self.schema.name, name, "a sequence")),
        }
    }

    /// Permissive boolean flag: `true` only when the stored value is `true`.
    pub fn flag(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .and_then(Node::as_value)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    fn wrap_same(&self, node: &Node) -> Field {
        match node {
            // Raw sub-maps go through the full constructor with this
            // object's own schema (permissive-path quirk, see `field`).
            Node::Map(map) => Field::Object(ResponseObject::new(self.schema, map.to_value())),
            Node::Object(object) => Field::Object(object.clone()),
            Node::Value(value) => Field::Value(value.clone()),
        }
    }
}

impl PartialEq for ResponseObject {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema) && self.entries == other.entries
    }
}

impl Serialize for ResponseObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// The shared relation-mapping routine.
///
/// For every top-level entry that is a map (not already an object), and for
/// every `(field, target)` row in the table: a sub-value stored under
/// `field` that is not already an object is replaced in place by a new
/// object built from it. Exactly one level deep; grandchildren are never
/// visited. An empty table is a no-op.
fn map_relations(entries: &mut Entries, schema: &'static ObjectSchema) {
    if schema.relations.is_empty() {
        return;
    }
    for (key, node) in entries.iter_mut() {
        let Node::Map(child) = node else { continue };
        for relation in schema.relations {
            let Some(sub) = child.get_mut(relation.field) else {
                continue;
            };
            if sub.is_object() {
                continue;
            }
            trace!(
                object = schema.name,
                entry = %key,
                field = relation.field,
                target = relation.target.name,
                "mapping relation"
            );
            let raw = sub.to_value();
            *sub = Node::Object(ResponseObject::new(relation.target, raw));
        }
    }
}

/// Falsiness for the strict lookup path: null, false, numeric zero, empty
/// string, empty sequence. Raw maps are wrapped into objects before the
/// check and therefore never count as falsy.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}
