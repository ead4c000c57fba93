use dynamap_schema::{ScalarKind, SchemaCache, SetKind, TypeClass, MAX_DEPTH};
use dynamap_types::{AttributeValue, Number, Value};

use crate::adapter;
use crate::error::{CodecError, MapperResult};

/// Converts single field values to and from attribute values, dispatching on
/// the field's [`TypeClass`].
///
/// There is no coercion across kinds: a value must have the shape its class
/// declares. Null converts to the store's null attribute for every class.
/// Lists, maps and nested beans count towards the depth limit; top-level
/// fields sit at depth 1.
#[derive(Clone, Copy, Debug)]
pub struct ValueCodec<'a> {
    cache: &'a SchemaCache,
    max_depth: usize,
    ignore_nulls: bool,
}

impl<'a> ValueCodec<'a> {
    /// A codec resolving nested types through `cache`, with the default
    /// depth limit.
    pub fn new(cache: &'a SchemaCache) -> Self {
        Self {
            cache,
            max_depth: MAX_DEPTH,
            ignore_nulls: false,
        }
    }

    /// Lower the depth limit. Values above [`MAX_DEPTH`] are clamped.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH);
        self
    }

    /// Omit null bean fields instead of writing null attributes.
    pub fn with_ignore_nulls(mut self, ignore_nulls: bool) -> Self {
        self.ignore_nulls = ignore_nulls;
        self
    }

    pub fn cache(&self) -> &'a SchemaCache {
        self.cache
    }

    pub fn ignore_nulls(&self) -> bool {
        self.ignore_nulls
    }

    /// Encode a top-level field value.
    pub fn encode(&self, value: &Value, class: &TypeClass) -> MapperResult<AttributeValue> {
        self.encode_at(value, class, 1)
    }

    /// Decode a top-level attribute value.
    pub fn decode(&self, attribute: &AttributeValue, class: &TypeClass) -> MapperResult<Value> {
        self.decode_at(attribute, class, 1)
    }

    fn check_depth(&self, class: &TypeClass, depth: usize) -> Result<(), CodecError> {
        if class.is_document() && depth > self.max_depth {
            return Err(CodecError::StructureTooDeep {
                max_depth: self.max_depth,
            });
        }
        Ok(())
    }

    pub(crate) fn encode_at(
        &self,
        value: &Value,
        class: &TypeClass,
        depth: usize,
    ) -> MapperResult<AttributeValue> {
        if value.is_null() {
            return Ok(AttributeValue::Null);
        }
        self.check_depth(class, depth)?;

        let encoded = match (class, value) {
            (TypeClass::Scalar(ScalarKind::String), Value::String(s)) => AttributeValue::S(s.clone()),
            (TypeClass::Scalar(ScalarKind::Number), Value::Number(n)) => AttributeValue::N(n.clone()),
            (TypeClass::Scalar(ScalarKind::Boolean), Value::Bool(b)) => AttributeValue::Bool(*b),
            (TypeClass::Scalar(ScalarKind::Binary), Value::Binary(b)) => AttributeValue::B(b.clone()),
            (TypeClass::List(elem), Value::List(items)) => AttributeValue::L(
                items
                    .iter()
                    .map(|item| self.encode_at(item, elem, depth + 1))
                    .collect::<MapperResult<_>>()?,
            ),
            (TypeClass::Map(elem), Value::Map(entries)) => AttributeValue::M(
                entries
                    .iter()
                    .map(|(k, v)| Ok((k.clone(), self.encode_at(v, elem, depth + 1)?)))
                    .collect::<MapperResult<_>>()?,
            ),
            (TypeClass::Set(kind), Value::Set(items)) => encode_set(*kind, items)?,
            (TypeClass::Nested(type_ref), Value::Record(record)) => {
                let schema = self.cache.resolve(type_ref)?;
                AttributeValue::M(adapter::encode_fields(self, &schema, depth + 1, |field| {
                    Ok(record.get(field).cloned().unwrap_or(Value::Null))
                })?)
            }
            (class, value) => return Err(CodecError::mismatch(class, value.kind_name()).into()),
        };
        Ok(encoded)
    }

    pub(crate) fn decode_at(
        &self,
        attribute: &AttributeValue,
        class: &TypeClass,
        depth: usize,
    ) -> MapperResult<Value> {
        if attribute.is_null() {
            return Ok(Value::Null);
        }
        self.check_depth(class, depth)?;

        let decoded = match (class, attribute) {
            (TypeClass::Scalar(ScalarKind::String), AttributeValue::S(s)) => Value::String(s.clone()),
            (TypeClass::Scalar(ScalarKind::Number), AttributeValue::N(n)) => Value::Number(n.clone()),
            (TypeClass::Scalar(ScalarKind::Boolean), AttributeValue::Bool(b)) => Value::Bool(*b),
            (TypeClass::Scalar(ScalarKind::Binary), AttributeValue::B(b)) => Value::Binary(b.clone()),
            (TypeClass::List(elem), AttributeValue::L(items)) => Value::List(
                items
                    .iter()
                    .map(|item| self.decode_at(item, elem, depth + 1))
                    .collect::<MapperResult<_>>()?,
            ),
            (TypeClass::Map(elem), AttributeValue::M(entries)) => Value::Map(
                entries
                    .iter()
                    .map(|(k, v)| Ok((k.clone(), self.decode_at(v, elem, depth + 1)?)))
                    .collect::<MapperResult<_>>()?,
            ),
            (TypeClass::Set(SetKind::String), AttributeValue::Ss(items)) => {
                Value::Set(items.iter().cloned().map(Value::String).collect())
            }
            (TypeClass::Set(SetKind::Number), AttributeValue::Ns(items)) => {
                Value::Set(items.iter().cloned().map(Value::Number).collect())
            }
            (TypeClass::Set(SetKind::Binary), AttributeValue::Bs(items)) => {
                Value::Set(items.iter().cloned().map(Value::Binary).collect())
            }
            (TypeClass::Nested(type_ref), AttributeValue::M(entries)) => {
                let schema = self.cache.resolve(type_ref)?;
                Value::Record(
                    adapter::decode_fields(self, entries, &schema, depth + 1)?
                        .into_iter()
                        .map(|(field, value)| (field.to_string(), value))
                        .collect(),
                )
            }
            (class, attribute) => {
                return Err(CodecError::mismatch(class, attribute.type_name()).into())
            }
        };
        Ok(decoded)
    }
}

fn encode_set(kind: SetKind, items: &[Value]) -> Result<AttributeValue, CodecError> {
    let element = |item: &Value| CodecError::mismatch(format!("{kind:?}Set element"), item.kind_name());
    Ok(match kind {
        SetKind::String => AttributeValue::Ss(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(element(other)),
                })
                .collect::<Result<_, _>>()?,
        ),
        SetKind::Number => AttributeValue::Ns(
            items
                .iter()
                .map(|item| match item {
                    Value::Number(n) => Ok(n.clone()),
                    other => Err(element(other)),
                })
                .collect::<Result<Vec<Number>, _>>()?,
        ),
        SetKind::Binary => AttributeValue::Bs(
            items
                .iter()
                .map(|item| match item {
                    Value::Binary(b) => Ok(b.clone()),
                    other => Err(element(other)),
                })
                .collect::<Result<_, _>>()?,
        ),
    })
}
