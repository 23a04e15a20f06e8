//! Core value model.
//!
//! Everything the crate touches is a [`Value`]: source collections, mapped
//! elements, accumulators, and computed results. The two collection shapes
//! ([`Value::Seq`] and [`Value::Record`]) enumerate their entries in a stable
//! order via [`Value::entries`], which is the iteration the map/reduce
//! machinery in [`crate::processing`] is built on.

use crate::error::CollectError;
use std::fmt;

/// A dynamically shaped value.
///
/// Scalars follow the usual JSON-like set. `Seq` is an ordered sequence and
/// `Record` is a string-keyed mapping whose insertion order is preserved, so
/// repeated runs over the same record enumerate identically.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Missing/empty value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
    /// Ordered sequence of values.
    Seq(Vec<Value>),
    /// String-keyed mapping in insertion order.
    Record(Vec<(String, Value)>),
}

impl Value {
    /// Build a [`Value::Seq`] from anything convertible to values.
    pub fn seq<T, I>(items: I) -> Self
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Build a [`Value::Record`] from `(key, value)` pairs, keeping order.
    pub fn record<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Record(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// True for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The boolean payload, if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if this is a [`Value::Int64`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// The numeric payload as a float. Integers promote losslessly enough
    /// for the magnitudes this crate deals in.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            Value::Int64(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// The string payload, if this is a [`Value::Utf8`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The sequence payload, if this is a [`Value::Seq`].
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// The record payload, if this is a [`Value::Record`].
    pub fn as_record(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Record(pairs) => Some(pairs.as_slice()),
            _ => None,
        }
    }

    /// Look up a record entry by key (first match in insertion order).
    ///
    /// Returns `None` for non-record values and missing keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Record(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// A short name for the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int64(_) => "int64",
            Value::Float64(_) => "float64",
            Value::Utf8(_) => "utf8",
            Value::Seq(_) => "seq",
            Value::Record(_) => "record",
        }
    }

    /// Enumerate this value's entries in order as `(key, value)` pairs.
    ///
    /// Sequences yield index keys, records yield name keys in insertion
    /// order, and everything else yields nothing. Only [`Value::Seq`] is
    /// sequence-shaped; scalars are not treated as one-element collections.
    pub fn entries(&self) -> Entries<'_> {
        let inner = match self {
            Value::Seq(items) => EntriesInner::Seq(items.iter().enumerate()),
            Value::Record(pairs) => EntriesInner::Record(pairs.iter()),
            _ => EntriesInner::Empty,
        };
        Entries { inner }
    }

    /// Number of entries [`Self::entries`] will yield.
    pub fn entry_count(&self) -> usize {
        match self {
            Value::Seq(items) => items.len(),
            Value::Record(pairs) => pairs.len(),
            _ => 0,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int64(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Utf8(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Utf8(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }
}

impl TryFrom<Value> for i64 {
    type Error = CollectError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_i64().ok_or(CollectError::Type {
            expected: "int64",
            found: value.type_name(),
        })
    }
}

impl TryFrom<Value> for f64 {
    type Error = CollectError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_f64().ok_or(CollectError::Type {
            expected: "float64",
            found: value.type_name(),
        })
    }
}

impl TryFrom<Value> for bool {
    type Error = CollectError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or(CollectError::Type {
            expected: "bool",
            found: value.type_name(),
        })
    }
}

impl TryFrom<Value> for String {
    type Error = CollectError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Utf8(s) => Ok(s),
            other => Err(CollectError::Type {
                expected: "utf8",
                found: other.type_name(),
            }),
        }
    }
}

/// The position of one entry within a collection: an index for sequences, a
/// name for records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// Zero-based position in a sequence.
    Index(usize),
    /// Entry name in a record.
    Name(&'a str),
}

impl Key<'_> {
    /// The index, if this is a sequence key.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    /// The name, if this is a record key.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }

    /// The key as a [`Value`]: indices become [`Value::Int64`], names become
    /// [`Value::Utf8`].
    pub fn to_value(&self) -> Value {
        match self {
            Key::Index(i) => Value::Int64(*i as i64),
            Key::Name(name) => Value::Utf8((*name).to_string()),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// Ordered iterator over a collection-shaped value's entries.
///
/// Created by [`Value::entries`].
pub struct Entries<'a> {
    inner: EntriesInner<'a>,
}

enum EntriesInner<'a> {
    Empty,
    Seq(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Record(std::slice::Iter<'a, (String, Value)>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Key<'a>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            EntriesInner::Empty => None,
            EntriesInner::Seq(iter) => iter.next().map(|(i, v)| (Key::Index(i), v)),
            EntriesInner::Record(iter) => iter.next().map(|(k, v)| (Key::Name(k.as_str()), v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            EntriesInner::Empty => (0, Some(0)),
            EntriesInner::Seq(iter) => iter.size_hint(),
            EntriesInner::Record(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Entries<'_> {}
