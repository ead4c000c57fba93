//! Foundation types for dynamap.
//!
//! This crate provides the store-side and domain-side value representations
//! shared by every other dynamap crate.
//!
//! # Key Types
//!
//! - [`AttributeValue`] -- Tagged store-level value (string, number, set, ...)
//! - [`Item`] -- One full record: attribute name to [`AttributeValue`]
//! - [`Number`] -- Decimal-precise number kept in its textual form
//! - [`Value`] -- Runtime field value read from / written to a domain object
//! - [`Record`] -- Field values of a nested bean, keyed by source field name
//! - [`SdkItem`] -- The DynamoDB client's item, reached via [`item_to_sdk`] / [`item_from_sdk`]

pub mod attribute;
pub mod error;
pub mod json;
pub mod number;
pub mod sdk;
pub mod value;
pub mod wire;

pub use attribute::{AttributeValue, Item};
pub use error::{TypeError, TypeResult};
pub use number::Number;
pub use sdk::{item_from_sdk, item_to_sdk, SdkItem};
pub use value::{Record, Value};
