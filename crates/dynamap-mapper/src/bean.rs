//! Bean traits: how the mapper reads from and constructs domain objects.
//!
//! Every mapped type implements [`Bean`]. Reading goes through
//! [`Bean::read_field`]; construction goes through the type's
//! [`Assembler`], which is either [`InPlace`] (default-construct, then set
//! each field) for mutable records or a builder for immutable ones.

use std::fmt;

use dynamap_schema::Described;
use dynamap_types::{Record, TypeError, Value};

use crate::error::MapperResult;

/// How a bean type is constructed when decoding an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Construction {
    /// Default-constructed, then mutated field by field.
    Mutable,
    /// Accumulated in a builder and frozen on finish.
    Immutable,
}

/// A domain type the mapper can read and construct.
pub trait Bean: Described + Sized {
    /// Accumulator used to construct a new instance.
    type Assembler: Assembler<Output = Self>;

    /// Read a field by its source name.
    fn read_field(&self, field: &str) -> MapperResult<Value>;

    /// Open a fresh assembler.
    fn assembler() -> Self::Assembler;
}

/// Accumulates decoded field values and produces a bean.
pub trait Assembler {
    type Output;

    /// Which construction strategy this assembler implements.
    const CONSTRUCTION: Construction;

    /// Set one field by its source name.
    fn set_field(&mut self, field: &str, value: Value) -> MapperResult<()>;

    /// Validate and produce the finished bean.
    fn finish(self) -> MapperResult<Self::Output>;
}

/// A mutable record: default-constructible, with a setter per field.
pub trait MutableBean: Default {
    fn write_field(&mut self, field: &str, value: Value) -> MapperResult<()>;
}

/// Assembler for mutable records: a default instance mutated in place.
pub struct InPlace<T>(T);

impl<T: MutableBean> InPlace<T> {
    pub fn new() -> Self {
        Self(T::default())
    }
}

impl<T: MutableBean> Default for InPlace<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MutableBean> Assembler for InPlace<T> {
    type Output = T;

    const CONSTRUCTION: Construction = Construction::Mutable;

    fn set_field(&mut self, field: &str, value: Value) -> MapperResult<()> {
        self.0.write_field(field, value)
    }

    fn finish(self) -> MapperResult<T> {
        Ok(self.0)
    }
}

impl<T: fmt::Debug> fmt::Debug for InPlace<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InPlace").field(&self.0).finish()
    }
}

// ---------------------------------------------------------------------------
// Nested beans
// ---------------------------------------------------------------------------

/// Capture a nested bean's mapped fields as a [`Value::Record`].
///
/// Domain types call this from [`Bean::read_field`] for fields that hold
/// another bean. Ignored fields of the nested type are left out. The field
/// list comes from the type's description; validating it is left to the
/// cache of whichever codec encodes the record.
pub fn to_record<T: Bean>(bean: &T) -> MapperResult<Value> {
    let mut record = Record::new();
    for field in T::describe().fields.iter().filter(|f| !f.ignored) {
        record.insert(field.name, bean.read_field(field.name)?);
    }
    Ok(Value::Record(record))
}

/// Construct a nested bean from a [`Value::Record`].
pub fn from_record<T: Bean>(value: Value) -> MapperResult<T> {
    let record = value.into_record()?;
    let mut assembler = T::assembler();
    for (field, value) in record {
        assembler.set_field(&field, value)?;
    }
    assembler.finish()
}

/// Capture a sequence of nested beans as a [`Value::List`] of records.
pub fn to_record_list<'b, T, I>(beans: I) -> MapperResult<Value>
where
    T: Bean + 'b,
    I: IntoIterator<Item = &'b T>,
{
    Ok(Value::List(
        beans.into_iter().map(to_record).collect::<MapperResult<_>>()?,
    ))
}

/// Capture string-keyed nested beans as a [`Value::Map`] of records.
pub fn to_record_map<'b, T, I>(entries: I) -> MapperResult<Value>
where
    T: Bean + 'b,
    I: IntoIterator<Item = (&'b String, &'b T)>,
{
    Ok(Value::Map(
        entries
            .into_iter()
            .map(|(k, v)| Ok((k.clone(), to_record(v)?)))
            .collect::<MapperResult<_>>()?,
    ))
}

/// Construct nested beans from a [`Value::List`] of records.
pub fn from_record_list<T, C>(value: Value) -> MapperResult<C>
where
    T: Bean,
    C: FromIterator<T>,
{
    match value {
        Value::List(items) => items.into_iter().map(from_record).collect(),
        other => Err(TypeError::mismatch("list", other.kind_name()).into()),
    }
}

/// Construct string-keyed nested beans from a [`Value::Map`] of records.
pub fn from_record_map<T, C>(value: Value) -> MapperResult<C>
where
    T: Bean,
    C: FromIterator<(String, T)>,
{
    match value {
        Value::Map(entries) => entries
            .into_iter()
            .map(|(k, v)| Ok((k, from_record(v)?)))
            .collect(),
        other => Err(TypeError::mismatch("map", other.kind_name()).into()),
    }
}
