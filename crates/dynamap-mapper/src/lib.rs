//! Bean-to-item mapping for dynamap.
//!
//! This crate turns domain objects ("beans") into store items and back,
//! driven by the [`SchemaDescriptor`](dynamap_schema::SchemaDescriptor) of
//! each type. Mutable records are default-constructed and filled field by
//! field; immutable records are accumulated in a builder and frozen once every
//! field has been seen.
//!
//! # Key Types
//!
//! - [`ItemMapper`] -- facade: encode, decode and key extraction
//! - [`ValueCodec`] -- single field value to attribute value and back
//! - [`BeanAdapter`] -- whole bean to item and back
//! - [`Bean`] / [`Assembler`] -- how a type is read and constructed
//! - [`Key`] -- partition value plus optional sort value
//! - [`InMemoryTable`] -- `HashMap`-backed table for tests and embedding
//! - [`MapperConfig`] -- null handling and depth limit
//!
//! # Design Rules
//!
//! 1. No coercion: a value must have exactly the shape its field declares.
//! 2. Ignored fields are never written and never read.
//! 3. Nesting deeper than the configured limit (at most 32) is an error.
//! 4. An immutable bean is never built from an item missing a key attribute.
//! 5. Any field failure aborts the whole object; nothing is partially mapped.

pub mod adapter;
pub mod bean;
pub mod codec;
pub mod config;
pub mod error;
pub mod key;
pub mod mapper;
pub mod table;

#[cfg(test)]
mod fixtures;

pub use adapter::BeanAdapter;
pub use bean::{
    from_record, from_record_list, from_record_map, to_record, to_record_list, to_record_map,
    Assembler, Bean, Construction, InPlace, MutableBean,
};
pub use codec::ValueCodec;
pub use config::MapperConfig;
pub use error::{BuilderError, CodecError, MapperError, MapperResult};
pub use key::Key;
pub use mapper::ItemMapper;
pub use table::InMemoryTable;
