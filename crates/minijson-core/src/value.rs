//! The JSON value tree and its typed accessors.
//!
//! [`Value`] is a tagged union covering every JSON value. Containers own
//! their children by value, so a tree is finite, acyclic, and dropped
//! recursively with its root. Objects are backed by a `BTreeMap`, which
//! gives unique keys, last-write-wins insertion, and lexicographic
//! key-sorted iteration — the serializer depends on that ordering for
//! deterministic output.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{AccessError, ParseError};

/// One JSON value: a leaf scalar or a container of further values.
///
/// Integers and floats are separate variants; the typed accessors never
/// coerce between them (`as_int` on a `Float` is `None` and vice versa).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// UTF-8 text stored verbatim; escape sequences are not interpreted
    /// anywhere in this crate.
    String(String),
    Array(Vec<Value>),
    /// Key-sorted map; duplicate inserts overwrite (last write wins).
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Name of the active variant, used in error payloads and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Non-mutating key lookup. Returns `None` when the receiver is not an
    /// object or the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Auto-vivifying key access: returns the value for `key`, inserting a
    /// `Null` entry first if the key is absent.
    ///
    /// This is the mutating counterpart of [`Value::get`] and fails with
    /// [`AccessError::TypeMismatch`] when the receiver is not an object.
    pub fn get_or_insert(&mut self, key: &str) -> Result<&mut Value, AccessError> {
        match self {
            Value::Object(map) => Ok(map.entry(key.to_string()).or_insert(Value::Null)),
            other => Err(AccessError::TypeMismatch {
                expected: "object",
                found: other.kind(),
            }),
        }
    }

    /// Positional access returning a copy of element `index`.
    ///
    /// Fails with [`AccessError::TypeMismatch`] on non-arrays and
    /// [`AccessError::IndexOutOfRange`] when `index >= len`.
    pub fn at(&self, index: usize) -> Result<Value, AccessError> {
        match self {
            Value::Array(items) => items
                .get(index)
                .cloned()
                .ok_or(AccessError::IndexOutOfRange {
                    index,
                    len: items.len(),
                }),
            other => Err(AccessError::TypeMismatch {
                expected: "array",
                found: other.kind(),
            }),
        }
    }

    /// Appends `value` when the receiver is an array; silently does nothing
    /// on every other variant. The permissive no-op is part of the model's
    /// contract, not an error path.
    pub fn push(&mut self, value: Value) {
        if let Value::Array(items) = self {
            items.push(value);
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

/// Renders the compact serialization.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serializer::serialize(self))
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}
