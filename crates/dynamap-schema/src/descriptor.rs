use std::collections::HashSet;
use std::fmt;

use crate::declared::{BeanKind, DeclaredType, FieldSpec, TypeDescription, TypeRef};
use crate::error::{SchemaError, SchemaResult};

/// Maximum nesting depth of document values (lists, maps, nested beans).
pub const MAX_DEPTH: usize = 32;

/// The kind of a single scalar attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Number,
    Boolean,
    Binary,
}

/// The element kind of a scalar set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetKind {
    String,
    Number,
    Binary,
}

/// How a field's value is represented in the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeClass {
    Scalar(ScalarKind),
    List(Box<TypeClass>),
    /// String-keyed map; the payload is the value class.
    Map(Box<TypeClass>),
    Set(SetKind),
    Nested(TypeRef),
}

impl TypeClass {
    /// Returns `true` for list, map and nested classes, the ones that count
    /// towards the depth limit.
    pub fn is_document(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_) | Self::Nested(_))
    }

    /// Classify a declared type. `None` if it has no attribute representation.
    pub fn classify(declared: &DeclaredType) -> Option<Self> {
        Some(match declared {
            DeclaredType::String => Self::Scalar(ScalarKind::String),
            DeclaredType::Bool => Self::Scalar(ScalarKind::Boolean),
            DeclaredType::I8
            | DeclaredType::I16
            | DeclaredType::I32
            | DeclaredType::I64
            | DeclaredType::U16
            | DeclaredType::U32
            | DeclaredType::U64
            | DeclaredType::F32
            | DeclaredType::F64
            | DeclaredType::Decimal => Self::Scalar(ScalarKind::Number),
            DeclaredType::Bytes => Self::Scalar(ScalarKind::Binary),
            DeclaredType::List(elem) => Self::List(Box::new(Self::classify(elem)?)),
            DeclaredType::Map { key, value } => match key.as_ref() {
                DeclaredType::String => Self::Map(Box::new(Self::classify(value)?)),
                _ => return None,
            },
            DeclaredType::Set(elem) => match Self::classify(elem)? {
                Self::Scalar(ScalarKind::String) => Self::Set(SetKind::String),
                Self::Scalar(ScalarKind::Number) => Self::Set(SetKind::Number),
                Self::Scalar(ScalarKind::Binary) => Self::Set(SetKind::Binary),
                _ => return None,
            },
            DeclaredType::Bean(type_ref) => Self::Nested(*type_ref),
            DeclaredType::Char | DeclaredType::Other(_) => return None,
        })
    }
}

impl TypeClass {
    /// Collect the nested bean types this class refers to, at any depth.
    fn collect_nested(&self, out: &mut Vec<TypeRef>) {
        match self {
            Self::List(elem) | Self::Map(elem) => elem.collect_nested(out),
            Self::Nested(type_ref) => {
                if !out.contains(type_ref) {
                    out.push(*type_ref);
                }
            }
            Self::Scalar(_) | Self::Set(_) => {}
        }
    }
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind:?}"),
            Self::List(elem) => write!(f, "List<{elem}>"),
            Self::Map(value) => write!(f, "Map<String, {value}>"),
            Self::Set(kind) => write!(f, "{kind:?}Set"),
            Self::Nested(type_ref) => write!(f, "Nested<{}>", type_ref.type_name()),
        }
    }
}

/// The key role a field plays in an item's identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyRole {
    None,
    Partition,
    Sort,
}

/// Compiled metadata for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub source_name: &'static str,
    pub attribute_name: &'static str,
    pub type_class: TypeClass,
    pub key_role: KeyRole,
    pub ignored: bool,
    pub nullable: bool,
}

impl FieldDescriptor {
    pub fn is_key(&self) -> bool {
        self.key_role != KeyRole::None
    }
}

// ---------------------------------------------------------------------------
// SchemaDescriptor
// ---------------------------------------------------------------------------

/// Compiled, immutable metadata describing how a domain type maps to an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaDescriptor {
    type_name: String,
    kind: BeanKind,
    fields: Vec<FieldDescriptor>,
    partition_key: Option<usize>,
    sort_key: Option<usize>,
}

impl SchemaDescriptor {
    /// Validate a type description and compile it.
    ///
    /// Fails if an item type does not have exactly one partition key, if
    /// more than one sort key is declared, if a field type cannot be
    /// classified, if an ignored field carries a key role, or if two fields
    /// share an attribute name.
    pub fn build(description: TypeDescription) -> SchemaResult<Self> {
        let TypeDescription {
            type_name,
            kind,
            fields: specs,
        } = description;

        let mut fields = Vec::with_capacity(specs.len());
        let mut partition_key: Option<usize> = None;
        let mut sort_key: Option<usize> = None;
        let mut attribute_names = HashSet::with_capacity(specs.len());

        for (index, spec) in specs.into_iter().enumerate() {
            let field = compile_field(&type_name, spec)?;

            match field.key_role {
                KeyRole::Partition => {
                    if let Some(first) = partition_key {
                        return Err(SchemaError::DuplicatePartitionKey {
                            type_name,
                            first: fields_name(&fields, first),
                            second: field.source_name.to_string(),
                        });
                    }
                    partition_key = Some(index);
                }
                KeyRole::Sort => {
                    if let Some(first) = sort_key {
                        return Err(SchemaError::DuplicateSortKey {
                            type_name,
                            first: fields_name(&fields, first),
                            second: field.source_name.to_string(),
                        });
                    }
                    sort_key = Some(index);
                }
                KeyRole::None => {}
            }

            if !field.ignored && !attribute_names.insert(field.attribute_name) {
                return Err(SchemaError::DuplicateAttributeName {
                    type_name,
                    attribute: field.attribute_name.to_string(),
                });
            }

            fields.push(field);
        }

        if kind == BeanKind::Item && partition_key.is_none() {
            return Err(SchemaError::MissingPartitionKey { type_name });
        }

        Ok(Self {
            type_name,
            kind,
            fields,
            partition_key,
            sort_key,
        })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn kind(&self) -> BeanKind {
        self.kind
    }

    /// All fields in declaration order, ignored ones included.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Fields that take part in mapping (everything not ignored).
    pub fn mapped_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !f.ignored)
    }

    /// Look up a field by its source name.
    pub fn field(&self, source_name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.source_name == source_name)
    }

    /// Look up a mapped field by its store attribute name.
    pub fn field_for_attribute(&self, attribute_name: &str) -> Option<&FieldDescriptor> {
        self.mapped_fields()
            .find(|f| f.attribute_name == attribute_name)
    }

    pub fn partition_key(&self) -> Option<&FieldDescriptor> {
        self.partition_key.map(|i| &self.fields[i])
    }

    pub fn sort_key(&self) -> Option<&FieldDescriptor> {
        self.sort_key.map(|i| &self.fields[i])
    }

    /// Nested bean types referenced by mapped fields, directly or inside
    /// lists and maps, in declaration order.
    pub fn nested_types(&self) -> Vec<TypeRef> {
        let mut out = Vec::new();
        for field in self.mapped_fields() {
            field.type_class.collect_nested(&mut out);
        }
        out
    }

    /// The key fields: partition first, then sort if declared.
    pub fn key_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.partition_key().into_iter().chain(self.sort_key())
    }
}

fn fields_name(fields: &[FieldDescriptor], index: usize) -> String {
    fields[index].source_name.to_string()
}

fn compile_field(type_name: &str, spec: FieldSpec) -> SchemaResult<FieldDescriptor> {
    let key_role = match (spec.partition_key, spec.sort_key) {
        (false, false) => KeyRole::None,
        (true, false) => KeyRole::Partition,
        (false, true) => KeyRole::Sort,
        (true, true) => {
            return Err(SchemaError::InvalidKeyType {
                type_name: type_name.to_string(),
                field: spec.name.to_string(),
            })
        }
    };

    if spec.ignored && key_role != KeyRole::None {
        return Err(SchemaError::IgnoredKeyField {
            type_name: type_name.to_string(),
            field: spec.name.to_string(),
        });
    }

    let type_class =
        TypeClass::classify(&spec.declared).ok_or_else(|| SchemaError::UnsupportedType {
            type_name: type_name.to_string(),
            field: spec.name.to_string(),
            declared: spec.declared.to_string(),
        })?;

    if key_role != KeyRole::None
        && !matches!(
            type_class,
            TypeClass::Scalar(ScalarKind::String | ScalarKind::Number | ScalarKind::Binary)
        )
    {
        return Err(SchemaError::InvalidKeyType {
            type_name: type_name.to_string(),
            field: spec.name.to_string(),
        });
    }

    Ok(FieldDescriptor {
        source_name: spec.name,
        attribute_name: spec.attribute_name.unwrap_or(spec.name),
        type_class,
        key_role,
        ignored: spec.ignored,
        nullable: spec.nullable,
    })
}
