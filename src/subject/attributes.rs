//! Subject attribute bag.
//!
//! Card subjects carry an open-ended bag of host-defined fields -
//! suit, value, type, flags, marker settings, and so on. This module
//! doesn't interpret any of them; descriptors read the fields they care
//! about through computed attributes.
//!
//! ## AttributeValue Types
//!
//! - `Int`: Numbers (value, rank, sort order)
//! - `Bool`: Flags (drawn, revealed)
//! - `Text`: Strings (suit, type, color codes)
//! - `List`: Ordered collections of any of these
//! - `Map`: Nested bags (flags, marker settings)

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key for accessing subject attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Value of a subject attribute.
///
/// Supports nesting via `Map` so hosts can hand over structured flag
/// bags without flattening them first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Integer value (card value, rank).
    Int(i64),
    /// Boolean flag (drawn, revealed).
    Bool(bool),
    /// Text value (suit name, color code).
    Text(String),
    /// Ordered list of values.
    List(Vec<AttributeValue>),
    /// Nested attribute bag (flags, marker settings).
    Map(Attributes),
}

impl AttributeValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as list reference if this is a List value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::List(v) => Some(v),
            _ => None,
        }
    }

    /// Get as nested bag reference if this is a Map value.
    #[must_use]
    pub fn as_map(&self) -> Option<&Attributes> {
        match self {
            AttributeValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

// Convenient From implementations
impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(v as i64)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<Vec<AttributeValue>> for AttributeValue {
    fn from(v: Vec<AttributeValue>) -> Self {
        AttributeValue::List(v)
    }
}

impl From<Attributes> for AttributeValue {
    fn from(v: Attributes) -> Self {
        AttributeValue::Map(v)
    }
}

/// Collection of attributes.
pub type Attributes = FxHashMap<AttributeKey, AttributeValue>;
