use std::collections::BTreeMap;

use crate::error::{TypeError, TypeResult};
use crate::number::Number;

/// A runtime field value as read from, or written to, a domain object.
///
/// Domain types expose their fields through this tree instead of reflection.
/// It mirrors the declared shape of a field; the mapper pairs it with the
/// field's type class to produce an [`AttributeValue`](crate::AttributeValue).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Number(Number),
    Bool(bool),
    Binary(Vec<u8>),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Set(Vec<Value>),
    /// Field values of a nested bean.
    Record(Record),
}

impl Value {
    /// Human-readable name of this variant, used in mismatch errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Binary(_) => "binary",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Set(_) => "set",
            Self::Record(_) => "record",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// A number value from a finite `f64`.
    pub fn float(value: f64) -> TypeResult<Self> {
        Number::from_f64(value).map(Self::Number)
    }

    /// A number value from a finite `f32`.
    pub fn float32(value: f32) -> TypeResult<Self> {
        Number::from_f32(value).map(Self::Number)
    }

    pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Binary(bytes.into())
    }

    /// An ordered list value.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// A set value. Element uniqueness is the caller's concern.
    pub fn set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Set(items.into_iter().map(Into::into).collect())
    }

    /// A string-keyed map value.
    pub fn map<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// `None` for [`Value::Null`], the value otherwise.
    pub fn into_option(self) -> Option<Self> {
        match self {
            Self::Null => None,
            other => Some(other),
        }
    }

    /// Convert to `Option<T>`, mapping null to `None`.
    pub fn into_optional<T>(self) -> TypeResult<Option<T>>
    where
        T: TryFrom<Value, Error = TypeError>,
    {
        self.into_option().map(T::try_from).transpose()
    }

    /// Convert a list value element-wise.
    pub fn into_list<T>(self) -> TypeResult<Vec<T>>
    where
        T: TryFrom<Value, Error = TypeError>,
    {
        match self {
            Self::List(items) => items.into_iter().map(T::try_from).collect(),
            other => Err(TypeError::mismatch("list", other.kind_name())),
        }
    }

    /// Convert a set value element-wise into any collection.
    pub fn into_set<T, C>(self) -> TypeResult<C>
    where
        T: TryFrom<Value, Error = TypeError>,
        C: FromIterator<T>,
    {
        match self {
            Self::Set(items) => items.into_iter().map(T::try_from).collect(),
            other => Err(TypeError::mismatch("set", other.kind_name())),
        }
    }

    /// Convert a map value entry-wise into any collection.
    pub fn into_map<T, C>(self) -> TypeResult<C>
    where
        T: TryFrom<Value, Error = TypeError>,
        C: FromIterator<(String, T)>,
    {
        match self {
            Self::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| Ok((k, T::try_from(v)?)))
                .collect(),
            other => Err(TypeError::mismatch("map", other.kind_name())),
        }
    }

    pub fn into_record(self) -> TypeResult<Record> {
        match self {
            Self::Record(record) => Ok(record),
            other => Err(TypeError::mismatch("record", other.kind_name())),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl TryFrom<Value> for String {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(TypeError::mismatch("string", other.kind_name())),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(TypeError::mismatch("boolean", other.kind_name())),
        }
    }
}

impl TryFrom<Value> for Number {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(TypeError::mismatch("number", other.kind_name())),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Binary(bytes) => Ok(bytes),
            other => Err(TypeError::mismatch("binary", other.kind_name())),
        }
    }
}

impl TryFrom<Value> for Record {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.into_record()
    }
}

macro_rules! numeric_value {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = TypeError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    Number::try_from(value)?.to::<$ty>()
                }
            }
        )*
    };
}

macro_rules! integer_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

integer_value!(i8, i16, i32, i64, u16, u32, u64);
numeric_value!(i8, i16, i32, i64, u16, u32, u64, f32, f64);

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// The field values of a nested bean, keyed by source field name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any previous one.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Remove and return a field value.
    pub fn take(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
