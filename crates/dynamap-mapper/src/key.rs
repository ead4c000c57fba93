use std::fmt;

use dynamap_schema::{FieldDescriptor, ScalarKind, SchemaDescriptor, SchemaError, TypeClass};
use dynamap_types::{AttributeValue, Item};

use crate::error::{MapperError, MapperResult};

/// The primary key of an item: a partition value and an optional sort value.
///
/// Both parts are store-level attribute values, held in normalized form so
/// that `5` and `5.0` name the same item. A key is only meaningful against
/// the schema it was taken from; [`Key::to_item`] and [`Key::from_item`]
/// check it against one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    partition: AttributeValue,
    sort: Option<AttributeValue>,
}

impl Key {
    /// A key with only a partition value.
    pub fn new(partition: impl Into<AttributeValue>) -> Self {
        Self {
            partition: partition.into().normalized(),
            sort: None,
        }
    }

    /// Add (or replace) the sort value.
    pub fn with_sort(mut self, sort: impl Into<AttributeValue>) -> Self {
        self.sort = Some(sort.into().normalized());
        self
    }

    pub fn partition(&self) -> &AttributeValue {
        &self.partition
    }

    pub fn sort(&self) -> Option<&AttributeValue> {
        self.sort.as_ref()
    }

    /// Extract the key attributes of `item` under `schema`.
    pub fn from_item(item: &Item, schema: &SchemaDescriptor) -> MapperResult<Self> {
        let partition_field = partition_field(schema)?;
        let partition = key_attribute(item, schema, partition_field)?;
        let sort = match schema.sort_key() {
            Some(field) => Some(key_attribute(item, schema, field)?),
            None => None,
        };
        Ok(Self { partition, sort })
    }

    /// The key as an item holding only the key attributes.
    pub fn to_item(&self, schema: &SchemaDescriptor) -> MapperResult<Item> {
        let partition_field = partition_field(schema)?;
        check_kind(schema, partition_field, &self.partition)?;

        let mut item = Item::new();
        item.insert(
            partition_field.attribute_name.to_string(),
            self.partition.clone(),
        );
        match (schema.sort_key(), &self.sort) {
            (Some(field), Some(sort)) => {
                check_kind(schema, field, sort)?;
                item.insert(field.attribute_name.to_string(), sort.clone());
            }
            (Some(field), None) => {
                return Err(MapperError::key_mismatch(
                    schema.type_name(),
                    format!("sort key '{}' is required", field.attribute_name),
                ));
            }
            (None, Some(_)) => {
                return Err(MapperError::key_mismatch(
                    schema.type_name(),
                    "type has no sort key",
                ));
            }
            (None, None) => {}
        }
        Ok(item)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(&self.partition))?;
        if let Some(sort) = &self.sort {
            write!(f, "/{}", render(sort))?;
        }
        Ok(())
    }
}

fn render(attribute: &AttributeValue) -> String {
    match attribute {
        AttributeValue::S(s) => s.clone(),
        AttributeValue::N(n) => n.to_string(),
        AttributeValue::B(b) => format!("<{} bytes>", b.len()),
        other => format!("<{}>", other.type_name()),
    }
}

fn partition_field(schema: &SchemaDescriptor) -> MapperResult<&FieldDescriptor> {
    schema.partition_key().ok_or_else(|| {
        SchemaError::MissingPartitionKey {
            type_name: schema.type_name().to_string(),
        }
        .into()
    })
}

fn key_attribute(
    item: &Item,
    schema: &SchemaDescriptor,
    field: &FieldDescriptor,
) -> MapperResult<AttributeValue> {
    match item.get(field.attribute_name) {
        Some(attribute) if !attribute.is_null() => {
            check_kind(schema, field, attribute)?;
            Ok(attribute.normalized())
        }
        _ => Err(MapperError::key_mismatch(
            schema.type_name(),
            format!("key attribute '{}' is missing", field.attribute_name),
        )),
    }
}

fn check_kind(
    schema: &SchemaDescriptor,
    field: &FieldDescriptor,
    attribute: &AttributeValue,
) -> MapperResult<()> {
    let matches = matches!(
        (&field.type_class, attribute),
        (TypeClass::Scalar(ScalarKind::String), AttributeValue::S(_))
            | (TypeClass::Scalar(ScalarKind::Number), AttributeValue::N(_))
            | (TypeClass::Scalar(ScalarKind::Binary), AttributeValue::B(_))
    );
    if matches {
        Ok(())
    } else {
        Err(MapperError::key_mismatch(
            schema.type_name(),
            format!(
                "'{}' expects {}, got {}",
                field.attribute_name,
                field.type_class,
                attribute.type_name()
            ),
        ))
    }
}
