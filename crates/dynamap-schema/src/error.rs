use thiserror::Error;

/// Errors raised while building a schema descriptor.
///
/// All of them are fatal for the type being described: nothing is cached.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// An item type declares no partition key.
    #[error("{type_name}: no partition key declared")]
    MissingPartitionKey { type_name: String },

    /// More than one field is marked as the partition key.
    #[error("{type_name}: partition key declared on both '{first}' and '{second}'")]
    DuplicatePartitionKey {
        type_name: String,
        first: String,
        second: String,
    },

    /// More than one field is marked as the sort key.
    #[error("{type_name}: sort key declared on both '{first}' and '{second}'")]
    DuplicateSortKey {
        type_name: String,
        first: String,
        second: String,
    },

    /// A field's declared type has no attribute representation.
    #[error("{type_name}.{field}: unsupported type {declared}")]
    UnsupportedType {
        type_name: String,
        field: String,
        declared: String,
    },

    /// A key field is not a string, number, or binary scalar.
    #[error("{type_name}.{field}: key attributes must be string, number, or binary")]
    InvalidKeyType { type_name: String, field: String },

    /// A field is both ignored and carries a key role.
    #[error("{type_name}.{field}: an ignored field cannot be a key")]
    IgnoredKeyField { type_name: String, field: String },

    /// Two fields map to the same store attribute name.
    #[error("{type_name}: attribute name '{attribute}' used by more than one field")]
    DuplicateAttributeName { type_name: String, attribute: String },
}

/// Result alias for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
