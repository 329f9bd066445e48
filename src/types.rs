//! Core value model for heterogeneous sequences.
//!
//! Most operations in [`crate::processing`] are generic over the element type, so a plain
//! `&[i64]` or `&[String]` works as-is. When a sequence has to hold elements of *different* types,
//! use `&[Value]`: a small closed set of tagged variants, each belonging to one [`Category`].

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Coarse runtime classification of a value.
///
/// Two values are only ever compared by [`crate::processing::is_exist`] when they share a
/// category. Integer widths collapse into [`Category::Int`] / [`Category::UInt`]; signed and
/// unsigned stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Absence of a value.
    Null,
    /// Signed integer of any width.
    Int,
    /// Unsigned integer of any width.
    UInt,
    /// Floating point number of any width.
    Float,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
    /// Nested sequence.
    List,
    /// Named-field aggregate.
    Record,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Null => "null",
            Category::Int => "int",
            Category::UInt => "uint",
            Category::Float => "float",
            Category::Bool => "bool",
            Category::Utf8 => "utf8",
            Category::List => "list",
            Category::Record => "record",
        };
        f.write_str(name)
    }
}

/// A single dynamically-typed element.
///
/// `Value` is an owned tree: lists and records own their children, so cyclic values cannot be
/// built and structural equality always terminates.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing value.
    Null,
    /// Signed integer.
    Int64(i64),
    /// Unsigned integer.
    UInt64(u64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
    /// Nested sequence of values.
    List(Vec<Value>),
    /// Named-field aggregate.
    Record(Record),
}

impl Value {
    /// The [`Category`] this value belongs to.
    pub fn category(&self) -> Category {
        match self {
            Value::Null => Category::Null,
            Value::Int64(_) => Category::Int,
            Value::UInt64(_) => Category::UInt,
            Value::Float64(_) => Category::Float,
            Value::Bool(_) => Category::Bool,
            Value::Utf8(_) => Category::Utf8,
            Value::List(_) => Category::List,
            Value::Record(_) => Category::Record,
        }
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the items of a [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Borrow the text of a [`Value::Utf8`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Borrow the fields of a [`Value::Record`].
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }
}

macro_rules! value_from {
    ($variant:ident as $target:ty => $($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )+
    };
}

value_from!(Int64 as i64 => i8, i16, i32, i64, isize);
value_from!(UInt64 as u64 => u8, u16, u32, u64, usize);
value_from!(Float64 as f64 => f32, f64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Utf8(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Utf8(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    /// JSON numbers map to the narrowest matching category: `i64`, then `u64`, then `f64`.
    /// Object keys keep their document order.
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int64(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt64(u)
                } else {
                    Value::Float64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Utf8(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Record(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Int64(v) => serializer.serialize_i64(*v),
            Value::UInt64(v) => serializer.serialize_u64(*v),
            Value::Float64(v) => serializer.serialize_f64(*v),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Utf8(s) => serializer.serialize_str(s),
            Value::List(items) => items.serialize(serializer),
            Value::Record(r) => r.serialize(serializer),
        }
    }
}

/// An ordered, named-field aggregate.
///
/// Field order is insertion order and is significant: it is the column order used by
/// [`crate::export`] and part of structural equality.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field, keeping its original position when it already exists.
    ///
    /// Returns the previous value, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((name, value));
                None
            }
        }
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
