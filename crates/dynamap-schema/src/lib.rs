//! Schema descriptors for dynamap.
//!
//! A domain type hands the mapper a [`TypeDescription`]: its fields, their
//! declared types and their key/ignore metadata. This crate validates that
//! description and compiles it into an immutable [`SchemaDescriptor`], which
//! the [`SchemaCache`] builds once per type and shares for the life of the
//! process.
//!
//! # Design Rules
//!
//! 1. An item type has exactly one partition key and at most one sort key.
//! 2. Every declared type classifies into a [`TypeClass`] or the build fails.
//! 3. Descriptors are immutable after construction; concurrent reads are free.
//! 4. A failed build is never cached.
//! 5. Nested bean types are referenced lazily, so recursive types are legal.

pub mod cache;
pub mod declared;
pub mod descriptor;
pub mod error;

pub use cache::SchemaCache;
pub use declared::{BeanKind, DeclaredType, Described, FieldSpec, TypeDescription, TypeRef};
pub use descriptor::{
    FieldDescriptor, KeyRole, ScalarKind, SchemaDescriptor, SetKind, TypeClass, MAX_DEPTH,
};
pub use error::{SchemaError, SchemaResult};
