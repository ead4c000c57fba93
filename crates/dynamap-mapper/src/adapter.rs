use dynamap_schema::SchemaDescriptor;
use dynamap_types::{Item, Value};
use tracing::trace;

use crate::bean::{Assembler, Bean, Construction};
use crate::codec::ValueCodec;
use crate::error::{BuilderError, CodecError, MapperResult};

/// Converts whole beans to and from items, one schema field at a time.
///
/// Ignored fields are skipped in both directions. Both operations are pure
/// functions of their inputs and the (already built) descriptor.
#[derive(Clone, Copy, Debug)]
pub struct BeanAdapter<'a> {
    codec: ValueCodec<'a>,
}

impl<'a> BeanAdapter<'a> {
    pub fn new(codec: ValueCodec<'a>) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &ValueCodec<'a> {
        &self.codec
    }

    /// Read every mapped field of `bean` and encode it under its attribute
    /// name.
    pub fn to_attributes<T: Bean>(&self, bean: &T, schema: &SchemaDescriptor) -> MapperResult<Item> {
        let item = encode_fields(&self.codec, schema, 1, |field| bean.read_field(field))?;
        trace!(type_name = schema.type_name(), attributes = item.len(), "bean encoded");
        Ok(item)
    }

    /// Construct a new bean from an item.
    ///
    /// Mutable beans start from their default and absent attributes leave
    /// fields untouched. Immutable beans additionally require every key
    /// attribute to be present before the builder is even opened.
    pub fn from_attributes<T: Bean>(&self, item: &Item, schema: &SchemaDescriptor) -> MapperResult<T> {
        if <T::Assembler as Assembler>::CONSTRUCTION == Construction::Immutable {
            for key in schema.key_fields() {
                if item.get(key.attribute_name).map_or(true, |a| a.is_null()) {
                    return Err(BuilderError::MissingRequiredKey {
                        type_name: schema.type_name().to_string(),
                        attribute: key.attribute_name.to_string(),
                    }
                    .into());
                }
            }
        }

        let fields = decode_fields(&self.codec, item, schema, 1)?;
        let mut assembler = T::assembler();
        for (field, value) in fields {
            assembler.set_field(field, value)?;
        }
        let bean = assembler.finish()?;
        trace!(type_name = schema.type_name(), "bean decoded");
        Ok(bean)
    }
}

/// Encode the mapped fields of one bean (top-level or nested) at `depth`.
pub(crate) fn encode_fields<F>(
    codec: &ValueCodec<'_>,
    schema: &SchemaDescriptor,
    depth: usize,
    read: F,
) -> MapperResult<Item>
where
    F: Fn(&str) -> MapperResult<Value>,
{
    let mut item = Item::new();
    for field in schema.mapped_fields() {
        let value = read(field.source_name)?;
        if value.is_null() {
            if !field.nullable {
                return Err(CodecError::mismatch(
                    format!("non-null {} for '{}'", field.type_class, field.source_name),
                    "null",
                )
                .into());
            }
            if codec.ignore_nulls() {
                continue;
            }
        }
        let attribute = codec.encode_at(&value, &field.type_class, depth)?;
        item.insert(field.attribute_name.to_string(), attribute);
    }
    Ok(item)
}

/// Decode the present, mapped attributes of one bean at `depth`.
///
/// Attributes the schema does not know, or maps to an ignored field, are
/// skipped. A null attribute for a primitive field is treated as absent.
pub(crate) fn decode_fields(
    codec: &ValueCodec<'_>,
    item: &Item,
    schema: &SchemaDescriptor,
    depth: usize,
) -> MapperResult<Vec<(&'static str, Value)>> {
    let mut fields = Vec::with_capacity(item.len());
    for field in schema.mapped_fields() {
        let Some(attribute) = item.get(field.attribute_name) else {
            continue;
        };
        if attribute.is_null() && !field.nullable {
            continue;
        }
        let value = codec.decode_at(attribute, &field.type_class, depth)?;
        fields.push((field.source_name, value));
    }
    Ok(fields)
}
