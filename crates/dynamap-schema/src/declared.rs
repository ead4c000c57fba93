//! Type descriptions: the already-introspected shape of a domain type.
//!
//! Nothing here performs reflection. A domain type lists its fields once, in
//! [`Described::describe`], and the descriptor builder consumes that table.

use std::any::TypeId;
use std::fmt;

/// Implemented by every type the mapper can describe.
pub trait Described: 'static {
    /// The static field table for this type.
    fn describe() -> TypeDescription;
}

// ---------------------------------------------------------------------------
// TypeRef
// ---------------------------------------------------------------------------

/// A lazily resolved reference to another described type.
///
/// Nested bean fields hold a `TypeRef` instead of the nested descriptor
/// itself, which is what allows a type to contain itself (a tree node with a
/// list of child nodes).
#[derive(Clone, Copy)]
pub struct TypeRef {
    type_id: TypeId,
    type_name: &'static str,
    describe: fn() -> TypeDescription,
}

impl TypeRef {
    pub fn of<T: Described>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            describe: T::describe,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Produce the referenced type's description.
    pub fn describe(&self) -> TypeDescription {
        (self.describe)()
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TypeRef {}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({})", self.type_name)
    }
}

// ---------------------------------------------------------------------------
// DeclaredType
// ---------------------------------------------------------------------------

/// The declared Rust type of a field, before classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeclaredType {
    String,
    Char,
    Bool,
    I8,
    I16,
    I32,
    I64,
    U16,
    U32,
    U64,
    F32,
    F64,
    /// An arbitrary-precision decimal kept as text.
    Decimal,
    Bytes,
    List(Box<DeclaredType>),
    Set(Box<DeclaredType>),
    Map {
        key: Box<DeclaredType>,
        value: Box<DeclaredType>,
    },
    Bean(TypeRef),
    /// Any other type, by name. Never storable.
    Other(&'static str),
}

impl DeclaredType {
    pub fn list(element: DeclaredType) -> Self {
        Self::List(Box::new(element))
    }

    pub fn set(element: DeclaredType) -> Self {
        Self::Set(Box::new(element))
    }

    /// A string-keyed map.
    pub fn map(value: DeclaredType) -> Self {
        Self::map_keyed(DeclaredType::String, value)
    }

    /// A map with an explicit key type. Only string keys are storable.
    pub fn map_keyed(key: DeclaredType, value: DeclaredType) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn bean<T: Described>() -> Self {
        Self::Bean(TypeRef::of::<T>())
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("String"),
            Self::Char => f.write_str("char"),
            Self::Bool => f.write_str("bool"),
            Self::I8 => f.write_str("i8"),
            Self::I16 => f.write_str("i16"),
            Self::I32 => f.write_str("i32"),
            Self::I64 => f.write_str("i64"),
            Self::U16 => f.write_str("u16"),
            Self::U32 => f.write_str("u32"),
            Self::U64 => f.write_str("u64"),
            Self::F32 => f.write_str("f32"),
            Self::F64 => f.write_str("f64"),
            Self::Decimal => f.write_str("Decimal"),
            Self::Bytes => f.write_str("Vec<u8>"),
            Self::List(elem) => write!(f, "Vec<{elem}>"),
            Self::Set(elem) => write!(f, "Set<{elem}>"),
            Self::Map { key, value } => write!(f, "Map<{key}, {value}>"),
            Self::Bean(r) => f.write_str(r.type_name()),
            Self::Other(name) => f.write_str(name),
        }
    }
}

// ---------------------------------------------------------------------------
// FieldSpec / TypeDescription
// ---------------------------------------------------------------------------

/// One field of a type description, with its mapping metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub declared: DeclaredType,
    pub partition_key: bool,
    pub sort_key: bool,
    pub ignored: bool,
    /// Store attribute name, when it differs from the field name.
    pub attribute_name: Option<&'static str>,
    /// `false` for primitive fields that always hold a value.
    pub nullable: bool,
}

impl FieldSpec {
    pub fn new(name: &'static str, declared: DeclaredType) -> Self {
        Self {
            name,
            declared,
            partition_key: false,
            sort_key: false,
            ignored: false,
            attribute_name: None,
            nullable: true,
        }
    }

    pub fn partition_key(mut self) -> Self {
        self.partition_key = true;
        self
    }

    pub fn sort_key(mut self) -> Self {
        self.sort_key = true;
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    pub fn attribute_name(mut self, name: &'static str) -> Self {
        self.attribute_name = Some(name);
        self
    }

    /// Mark the field as a primitive that is never null.
    pub fn primitive(mut self) -> Self {
        self.nullable = false;
        self
    }
}

/// Whether a described type is stored as a top-level item or only nested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BeanKind {
    /// A top-level item; must declare a partition key.
    Item,
    /// A nested document; keys are optional.
    Document,
}

/// The ordered field table of a domain type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDescription {
    pub type_name: String,
    pub kind: BeanKind,
    pub fields: Vec<FieldSpec>,
}

impl TypeDescription {
    pub fn item(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            kind: BeanKind::Item,
            fields: Vec::new(),
        }
    }

    pub fn document(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            kind: BeanKind::Document,
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }
}
