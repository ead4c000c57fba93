//! Domain types used across the mapper's tests.
//!
//! `MutableRecord` is a plain mutable record with a composite key.
//! `ComplexItem` is an immutable item built through a builder, covering every
//! scalar, document and set family plus an ignored field changed through a
//! `with_*` copy.

use std::collections::{HashMap, HashSet};

use dynamap_schema::{DeclaredType, Described, FieldSpec, TypeDescription};
use dynamap_types::Value;
use proptest::prelude::*;

use crate::bean::{
    from_record, from_record_list, from_record_map, to_record, to_record_list, to_record_map,
    Assembler, Bean, Construction, InPlace, MutableBean,
};
use crate::error::{BuilderError, MapperError, MapperResult};

// ---------------------------------------------------------------------------
// MutableRecord
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MutableRecord {
    pub partition_key: Option<String>,
    pub sort_key: i32,
    pub string_attribute: Option<String>,
}

impl Described for MutableRecord {
    fn describe() -> TypeDescription {
        TypeDescription::item("MutableRecord")
            .field(FieldSpec::new("partitionKey", DeclaredType::String).partition_key())
            .field(FieldSpec::new("sortKey", DeclaredType::I32).sort_key().primitive())
            .field(FieldSpec::new("stringAttribute", DeclaredType::String))
    }
}

impl Bean for MutableRecord {
    type Assembler = InPlace<Self>;

    fn read_field(&self, field: &str) -> MapperResult<Value> {
        Ok(match field {
            "partitionKey" => Value::from(self.partition_key.clone()),
            "sortKey" => Value::from(self.sort_key),
            "stringAttribute" => Value::from(self.string_attribute.clone()),
            other => return Err(MapperError::unknown_field("MutableRecord", other)),
        })
    }

    fn assembler() -> Self::Assembler {
        InPlace::new()
    }
}

impl MutableBean for MutableRecord {
    fn write_field(&mut self, field: &str, value: Value) -> MapperResult<()> {
        match field {
            "partitionKey" => self.partition_key = value.into_optional()?,
            "sortKey" => self.sort_key = i32::try_from(value)?,
            "stringAttribute" => self.string_attribute = value.into_optional()?,
            other => return Err(MapperError::unknown_field("MutableRecord", other)),
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Nested (mutable document)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Nested {
    pub name: Option<String>,
    pub count: i32,
}

impl Described for Nested {
    fn describe() -> TypeDescription {
        TypeDescription::document("Nested")
            .field(FieldSpec::new("name", DeclaredType::String))
            .field(FieldSpec::new("count", DeclaredType::I32).primitive())
    }
}

impl Bean for Nested {
    type Assembler = InPlace<Self>;

    fn read_field(&self, field: &str) -> MapperResult<Value> {
        Ok(match field {
            "name" => Value::from(self.name.clone()),
            "count" => Value::from(self.count),
            other => return Err(MapperError::unknown_field("Nested", other)),
        })
    }

    fn assembler() -> Self::Assembler {
        InPlace::new()
    }
}

impl MutableBean for Nested {
    fn write_field(&mut self, field: &str, value: Value) -> MapperResult<()> {
        match field {
            "name" => self.name = value.into_optional()?,
            "count" => self.count = i32::try_from(value)?,
            other => return Err(MapperError::unknown_field("Nested", other)),
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// NestedFrozen (immutable document)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct NestedFrozen {
    label: String,
    weight: f64,
}

impl NestedFrozen {
    pub fn builder() -> NestedFrozenBuilder {
        NestedFrozenBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct NestedFrozenBuilder {
    label: Option<String>,
    weight: Option<f64>,
}

impl NestedFrozenBuilder {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn build(self) -> Result<NestedFrozen, BuilderError> {
        Ok(NestedFrozen {
            label: self
                .label
                .ok_or_else(|| BuilderError::missing_field("NestedFrozen", "label"))?,
            weight: self.weight.unwrap_or_default(),
        })
    }
}

impl Described for NestedFrozen {
    fn describe() -> TypeDescription {
        TypeDescription::document("NestedFrozen")
            .field(FieldSpec::new("label", DeclaredType::String))
            .field(FieldSpec::new("weight", DeclaredType::F64).primitive())
    }
}

impl Bean for NestedFrozen {
    type Assembler = NestedFrozenBuilder;

    fn read_field(&self, field: &str) -> MapperResult<Value> {
        Ok(match field {
            "label" => Value::from(self.label.as_str()),
            "weight" => Value::float(self.weight)?,
            other => return Err(MapperError::unknown_field("NestedFrozen", other)),
        })
    }

    fn assembler() -> Self::Assembler {
        NestedFrozen::builder()
    }
}

impl Assembler for NestedFrozenBuilder {
    type Output = NestedFrozen;

    const CONSTRUCTION: Construction = Construction::Immutable;

    fn set_field(&mut self, field: &str, value: Value) -> MapperResult<()> {
        match field {
            "label" => self.label = value.into_optional()?,
            "weight" => self.weight = Some(f64::try_from(value)?),
            other => return Err(MapperError::unknown_field("NestedFrozen", other)),
        }
        Ok(())
    }

    fn finish(self) -> MapperResult<NestedFrozen> {
        Ok(self.build()?)
    }
}

// ---------------------------------------------------------------------------
// TreeNode (recursive document)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeNode {
    pub label: Option<String>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// A single chain of `depth` nodes.
    pub fn chain(depth: usize) -> Self {
        let mut node = TreeNode {
            label: Some("leaf".into()),
            children: Vec::new(),
        };
        for level in 1..depth {
            node = TreeNode {
                label: Some(format!("level-{level}")),
                children: vec![node],
            };
        }
        node
    }
}

impl Described for TreeNode {
    fn describe() -> TypeDescription {
        TypeDescription::document("TreeNode")
            .field(FieldSpec::new("label", DeclaredType::String))
            .field(FieldSpec::new(
                "children",
                DeclaredType::list(DeclaredType::bean::<TreeNode>()),
            ))
    }
}

impl Bean for TreeNode {
    type Assembler = InPlace<Self>;

    fn read_field(&self, field: &str) -> MapperResult<Value> {
        Ok(match field {
            "label" => Value::from(self.label.clone()),
            "children" => to_record_list(&self.children)?,
            other => return Err(MapperError::unknown_field("TreeNode", other)),
        })
    }

    fn assembler() -> Self::Assembler {
        InPlace::new()
    }
}

impl MutableBean for TreeNode {
    fn write_field(&mut self, field: &str, value: Value) -> MapperResult<()> {
        match field {
            "label" => self.label = value.into_optional()?,
            "children" => {
                self.children = match value.into_option() {
                    Some(list) => from_record_list::<TreeNode, _>(list)?,
                    None => Vec::new(),
                }
            }
            other => return Err(MapperError::unknown_field("TreeNode", other)),
        }
        Ok(())
    }
}

/// An item holding a [`TreeNode`] under its key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Forest {
    pub id: Option<String>,
    pub root: Option<TreeNode>,
}

impl Described for Forest {
    fn describe() -> TypeDescription {
        TypeDescription::item("Forest")
            .field(FieldSpec::new("id", DeclaredType::String).partition_key())
            .field(FieldSpec::new("root", DeclaredType::bean::<TreeNode>()))
    }
}

impl Bean for Forest {
    type Assembler = InPlace<Self>;

    fn read_field(&self, field: &str) -> MapperResult<Value> {
        Ok(match field {
            "id" => Value::from(self.id.clone()),
            "root" => match &self.root {
                Some(root) => to_record(root)?,
                None => Value::Null,
            },
            other => return Err(MapperError::unknown_field("Forest", other)),
        })
    }

    fn assembler() -> Self::Assembler {
        InPlace::new()
    }
}

impl MutableBean for Forest {
    fn write_field(&mut self, field: &str, value: Value) -> MapperResult<()> {
        match field {
            "id" => self.id = value.into_optional()?,
            "root" => self.root = value.into_option().map(from_record).transpose()?,
            other => return Err(MapperError::unknown_field("Forest", other)),
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Badge / BadgeHolder (only ever mapped through a local cache)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Badge {
    pub label: Option<String>,
}

impl Described for Badge {
    fn describe() -> TypeDescription {
        TypeDescription::document("Badge").field(FieldSpec::new("label", DeclaredType::String))
    }
}

impl Bean for Badge {
    type Assembler = InPlace<Self>;

    fn read_field(&self, field: &str) -> MapperResult<Value> {
        match field {
            "label" => Ok(Value::from(self.label.clone())),
            other => Err(MapperError::unknown_field("Badge", other)),
        }
    }

    fn assembler() -> Self::Assembler {
        InPlace::new()
    }
}

impl MutableBean for Badge {
    fn write_field(&mut self, field: &str, value: Value) -> MapperResult<()> {
        match field {
            "label" => self.label = value.into_optional()?,
            other => return Err(MapperError::unknown_field("Badge", other)),
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BadgeHolder {
    pub id: Option<String>,
    pub badge: Option<Badge>,
}

impl Described for BadgeHolder {
    fn describe() -> TypeDescription {
        TypeDescription::item("BadgeHolder")
            .field(FieldSpec::new("id", DeclaredType::String).partition_key())
            .field(FieldSpec::new("badge", DeclaredType::bean::<Badge>()))
    }
}

impl Bean for BadgeHolder {
    type Assembler = InPlace<Self>;

    fn read_field(&self, field: &str) -> MapperResult<Value> {
        Ok(match field {
            "id" => Value::from(self.id.clone()),
            "badge" => match &self.badge {
                Some(badge) => to_record(badge)?,
                None => Value::Null,
            },
            other => return Err(MapperError::unknown_field("BadgeHolder", other)),
        })
    }

    fn assembler() -> Self::Assembler {
        InPlace::new()
    }
}

impl MutableBean for BadgeHolder {
    fn write_field(&mut self, field: &str, value: Value) -> MapperResult<()> {
        match field {
            "id" => self.id = value.into_optional()?,
            "badge" => self.badge = value.into_option().map(from_record).transpose()?,
            other => return Err(MapperError::unknown_field("BadgeHolder", other)),
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ComplexItem (immutable item)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct ComplexItem {
    partition_key: String,
    sort_key: i32,
    string_attribute: Option<String>,
    boolean_attribute: Option<bool>,
    boolean_primitive_attribute: bool,
    int_attribute: Option<i32>,
    long_attribute: Option<i64>,
    float_attribute: Option<f32>,
    double_attribute: Option<f64>,
    short_attribute: Option<i16>,
    byte_attribute: Option<Vec<u8>>,
    string_list: Option<Vec<String>>,
    string_string_map: Option<HashMap<String, String>>,
    nested_list: Option<Vec<Nested>>,
    nested_map: Option<HashMap<String, Nested>>,
    nested_frozen_list: Option<Vec<NestedFrozen>>,
    string_set: Option<HashSet<String>>,
    field_using_with: Option<String>,
}

impl ComplexItem {
    pub fn builder() -> ComplexItemBuilder {
        ComplexItemBuilder::default()
    }

    pub fn partition_key(&self) -> &str {
        &self.partition_key
    }

    pub fn sort_key(&self) -> i32 {
        self.sort_key
    }

    pub fn field_using_with(&self) -> Option<&str> {
        self.field_using_with.as_deref()
    }

    /// A copy with only the ignored field changed.
    pub fn with_field_using_with(&self, value: Option<String>) -> Self {
        Self {
            field_using_with: value,
            ..self.clone()
        }
    }

    /// A fully populated item.
    pub fn sample() -> Self {
        Self::builder()
            .partition_key("complex".into())
            .sort_key(7)
            .string_attribute("text".into())
            .boolean_attribute(true)
            .boolean_primitive_attribute(true)
            .int_attribute(-42)
            .long_attribute(1 << 40)
            .float_attribute(1.5)
            .double_attribute(0.1)
            .short_attribute(12)
            .byte_attribute(vec![0, 1, 255])
            .string_list(vec!["b".into(), "a".into()])
            .string_string_map(HashMap::from([("k".to_string(), "v".to_string())]))
            .nested_list(vec![
                Nested {
                    name: Some("first".into()),
                    count: 1,
                },
                Nested {
                    name: None,
                    count: 2,
                },
            ])
            .nested_map(HashMap::from([(
                "only".to_string(),
                Nested {
                    name: Some("mapped".into()),
                    count: 3,
                },
            )]))
            .nested_frozen_list(vec![NestedFrozen::builder()
                .label("frozen")
                .weight(9.75)
                .build()
                .expect("label is set")])
            .string_set(HashSet::from(["x".to_string(), "y".to_string()]))
            .build()
            .expect("keys are set")
    }
}

impl Described for ComplexItem {
    fn describe() -> TypeDescription {
        TypeDescription::item("ComplexItem")
            .field(FieldSpec::new("partitionKey", DeclaredType::String).partition_key())
            .field(FieldSpec::new("sortKey", DeclaredType::I32).sort_key().primitive())
            .field(FieldSpec::new("stringAttribute", DeclaredType::String))
            .field(FieldSpec::new("booleanAttribute", DeclaredType::Bool))
            .field(FieldSpec::new("booleanPrimitiveAttribute", DeclaredType::Bool).primitive())
            .field(FieldSpec::new("intAttribute", DeclaredType::I32))
            .field(FieldSpec::new("longAttribute", DeclaredType::I64))
            .field(FieldSpec::new("floatAttribute", DeclaredType::F32))
            .field(FieldSpec::new("doubleAttribute", DeclaredType::F64))
            .field(FieldSpec::new("shortAttribute", DeclaredType::I16))
            .field(FieldSpec::new("byteAttribute", DeclaredType::Bytes))
            .field(FieldSpec::new("stringList", DeclaredType::list(DeclaredType::String)))
            .field(FieldSpec::new("stringStringMap", DeclaredType::map(DeclaredType::String)))
            .field(FieldSpec::new(
                "nestedList",
                DeclaredType::list(DeclaredType::bean::<Nested>()),
            ))
            .field(FieldSpec::new(
                "nestedMap",
                DeclaredType::map(DeclaredType::bean::<Nested>()),
            ))
            .field(FieldSpec::new(
                "nestedFrozenList",
                DeclaredType::list(DeclaredType::bean::<NestedFrozen>()),
            ))
            .field(FieldSpec::new("stringSet", DeclaredType::set(DeclaredType::String)))
            .field(FieldSpec::new("fieldUsingWith", DeclaredType::String).ignored())
    }
}

impl Bean for ComplexItem {
    type Assembler = ComplexItemBuilder;

    fn read_field(&self, field: &str) -> MapperResult<Value> {
        Ok(match field {
            "partitionKey" => Value::from(self.partition_key.as_str()),
            "sortKey" => Value::from(self.sort_key),
            "stringAttribute" => Value::from(self.string_attribute.clone()),
            "booleanAttribute" => Value::from(self.boolean_attribute),
            "booleanPrimitiveAttribute" => Value::from(self.boolean_primitive_attribute),
            "intAttribute" => Value::from(self.int_attribute),
            "longAttribute" => Value::from(self.long_attribute),
            "floatAttribute" => match self.float_attribute {
                Some(f) => Value::float32(f)?,
                None => Value::Null,
            },
            "doubleAttribute" => match self.double_attribute {
                Some(d) => Value::float(d)?,
                None => Value::Null,
            },
            "shortAttribute" => Value::from(self.short_attribute),
            "byteAttribute" => Value::from(self.byte_attribute.clone().map(Value::Binary)),
            "stringList" => Value::from(self.string_list.clone().map(Value::list)),
            "stringStringMap" => Value::from(self.string_string_map.clone().map(Value::map)),
            "nestedList" => match &self.nested_list {
                Some(list) => to_record_list(list)?,
                None => Value::Null,
            },
            "nestedMap" => match &self.nested_map {
                Some(map) => to_record_map(map)?,
                None => Value::Null,
            },
            "nestedFrozenList" => match &self.nested_frozen_list {
                Some(list) => to_record_list(list)?,
                None => Value::Null,
            },
            "stringSet" => Value::from(self.string_set.clone().map(Value::set)),
            "fieldUsingWith" => Value::from(self.field_using_with.clone()),
            other => return Err(MapperError::unknown_field("ComplexItem", other)),
        })
    }

    fn assembler() -> Self::Assembler {
        ComplexItem::builder()
    }
}

#[derive(Debug, Default)]
pub struct ComplexItemBuilder {
    partition_key: Option<String>,
    sort_key: Option<i32>,
    string_attribute: Option<String>,
    boolean_attribute: Option<bool>,
    boolean_primitive_attribute: bool,
    int_attribute: Option<i32>,
    long_attribute: Option<i64>,
    float_attribute: Option<f32>,
    double_attribute: Option<f64>,
    short_attribute: Option<i16>,
    byte_attribute: Option<Vec<u8>>,
    string_list: Option<Vec<String>>,
    string_string_map: Option<HashMap<String, String>>,
    nested_list: Option<Vec<Nested>>,
    nested_map: Option<HashMap<String, Nested>>,
    nested_frozen_list: Option<Vec<NestedFrozen>>,
    string_set: Option<HashSet<String>>,
    field_using_with: Option<String>,
}

macro_rules! builder_setters {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $name(mut self, value: $ty) -> Self {
                self.$name = Some(value);
                self
            }
        )*
    };
}

impl ComplexItemBuilder {
    builder_setters! {
        partition_key: String,
        sort_key: i32,
        string_attribute: String,
        boolean_attribute: bool,
        int_attribute: i32,
        long_attribute: i64,
        float_attribute: f32,
        double_attribute: f64,
        short_attribute: i16,
        byte_attribute: Vec<u8>,
        string_list: Vec<String>,
        string_string_map: HashMap<String, String>,
        nested_list: Vec<Nested>,
        nested_map: HashMap<String, Nested>,
        nested_frozen_list: Vec<NestedFrozen>,
        string_set: HashSet<String>,
        field_using_with: String,
    }

    pub fn boolean_primitive_attribute(mut self, value: bool) -> Self {
        self.boolean_primitive_attribute = value;
        self
    }

    pub fn build(self) -> Result<ComplexItem, BuilderError> {
        Ok(ComplexItem {
            partition_key: self
                .partition_key
                .ok_or_else(|| BuilderError::missing_field("ComplexItem", "partitionKey"))?,
            sort_key: self
                .sort_key
                .ok_or_else(|| BuilderError::missing_field("ComplexItem", "sortKey"))?,
            string_attribute: self.string_attribute,
            boolean_attribute: self.boolean_attribute,
            boolean_primitive_attribute: self.boolean_primitive_attribute,
            int_attribute: self.int_attribute,
            long_attribute: self.long_attribute,
            float_attribute: self.float_attribute,
            double_attribute: self.double_attribute,
            short_attribute: self.short_attribute,
            byte_attribute: self.byte_attribute,
            string_list: self.string_list,
            string_string_map: self.string_string_map,
            nested_list: self.nested_list,
            nested_map: self.nested_map,
            nested_frozen_list: self.nested_frozen_list,
            string_set: self.string_set,
            field_using_with: self.field_using_with,
        })
    }
}

impl Assembler for ComplexItemBuilder {
    type Output = ComplexItem;

    const CONSTRUCTION: Construction = Construction::Immutable;

    fn set_field(&mut self, field: &str, value: Value) -> MapperResult<()> {
        match field {
            "partitionKey" => self.partition_key = value.into_optional()?,
            "sortKey" => self.sort_key = value.into_optional()?,
            "stringAttribute" => self.string_attribute = value.into_optional()?,
            "booleanAttribute" => self.boolean_attribute = value.into_optional()?,
            "booleanPrimitiveAttribute" => self.boolean_primitive_attribute = bool::try_from(value)?,
            "intAttribute" => self.int_attribute = value.into_optional()?,
            "longAttribute" => self.long_attribute = value.into_optional()?,
            "floatAttribute" => self.float_attribute = value.into_optional()?,
            "doubleAttribute" => self.double_attribute = value.into_optional()?,
            "shortAttribute" => self.short_attribute = value.into_optional()?,
            "byteAttribute" => self.byte_attribute = value.into_optional()?,
            "stringList" => {
                self.string_list = value.into_option().map(Value::into_list).transpose()?
            }
            "stringStringMap" => {
                self.string_string_map = value
                    .into_option()
                    .map(Value::into_map::<String, HashMap<_, _>>)
                    .transpose()?
            }
            "nestedList" => {
                self.nested_list = value
                    .into_option()
                    .map(from_record_list::<Nested, Vec<_>>)
                    .transpose()?
            }
            "nestedMap" => {
                self.nested_map = value
                    .into_option()
                    .map(from_record_map::<Nested, HashMap<_, _>>)
                    .transpose()?
            }
            "nestedFrozenList" => {
                self.nested_frozen_list = value
                    .into_option()
                    .map(from_record_list::<NestedFrozen, Vec<_>>)
                    .transpose()?
            }
            "stringSet" => {
                self.string_set = value
                    .into_option()
                    .map(Value::into_set::<String, HashSet<_>>)
                    .transpose()?
            }
            "fieldUsingWith" => self.field_using_with = value.into_optional()?,
            other => return Err(MapperError::unknown_field("ComplexItem", other)),
        }
        Ok(())
    }

    fn finish(self) -> MapperResult<ComplexItem> {
        Ok(self.build()?)
    }
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

pub fn arb_mutable_record() -> impl Strategy<Value = MutableRecord> {
    (
        proptest::option::of("[a-z0-9]{1,16}"),
        any::<i32>(),
        proptest::option::of(".{0,24}"),
    )
        .prop_map(|(partition_key, sort_key, string_attribute)| MutableRecord {
            partition_key,
            sort_key,
            string_attribute,
        })
}

fn arb_nested() -> impl Strategy<Value = Nested> {
    (proptest::option::of("[a-z]{0,8}"), any::<i32>())
        .prop_map(|(name, count)| Nested { name, count })
}

fn arb_nested_frozen() -> impl Strategy<Value = NestedFrozen> {
    ("[a-z]{1,8}", -1.0e6f64..1.0e6).prop_map(|(label, weight)| NestedFrozen { label, weight })
}

pub fn arb_complex_item() -> impl Strategy<Value = ComplexItem> {
    let keys_and_scalars = (
        "[a-z0-9]{1,16}",
        any::<i32>(),
        proptest::option::of(".{0,16}"),
        proptest::option::of(any::<bool>()),
        any::<bool>(),
        proptest::option::of(any::<i32>()),
        proptest::option::of(any::<i64>()),
        proptest::option::of(-1.0e6f32..1.0e6),
        proptest::option::of(-1.0e12f64..1.0e12),
        proptest::option::of(any::<i16>()),
        proptest::option::of(proptest::collection::vec(any::<u8>(), 0..16)),
    );
    let documents = (
        proptest::option::of(proptest::collection::vec("[a-z]{0,6}", 0..4)),
        proptest::option::of(proptest::collection::hash_map("[a-z]{1,6}", "[a-z]{0,6}", 0..4)),
        proptest::option::of(proptest::collection::vec(arb_nested(), 0..3)),
        proptest::option::of(proptest::collection::hash_map("[a-z]{1,6}", arb_nested(), 0..3)),
        proptest::option::of(proptest::collection::vec(arb_nested_frozen(), 0..3)),
        proptest::option::of(proptest::collection::hash_set("[a-z]{1,6}", 1..4)),
    );
    (keys_and_scalars, documents).prop_map(
        |(
            (pk, sk, string, boolean, boolean_primitive, int, long, float, double, short, bytes),
            (list, map, nested_list, nested_map, nested_frozen_list, set),
        )| ComplexItem {
            partition_key: pk,
            sort_key: sk,
            string_attribute: string,
            boolean_attribute: boolean,
            boolean_primitive_attribute: boolean_primitive,
            int_attribute: int,
            long_attribute: long,
            float_attribute: float,
            double_attribute: double,
            short_attribute: short,
            byte_attribute: bytes,
            string_list: list,
            string_string_map: map,
            nested_list,
            nested_map,
            nested_frozen_list,
            string_set: set,
            field_using_with: None,
        },
    )
}
