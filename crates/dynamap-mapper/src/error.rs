use dynamap_schema::SchemaError;
use dynamap_types::TypeError;

/// Errors raised while converting a single field value.
///
/// Either one aborts the mapping of the whole object.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The value or attribute does not have the shape the field declares.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// A document nests deeper than the configured limit.
    #[error("structure nested deeper than {max_depth} levels")]
    StructureTooDeep { max_depth: usize },
}

impl CodecError {
    pub fn mismatch(expected: impl ToString, found: impl ToString) -> Self {
        Self::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

/// Errors raised when finalizing an immutable bean.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// A key attribute is absent from the input item.
    #[error("{type_name}: required key attribute '{attribute}' is missing")]
    MissingRequiredKey { type_name: String, attribute: String },

    /// A mandatory field was never set on the builder.
    #[error("{type_name}: required field '{field}' was not set")]
    MissingField { type_name: String, field: String },
}

impl BuilderError {
    pub fn missing_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }
}

/// Errors from mapping operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum MapperError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Builder(#[from] BuilderError),

    #[error(transparent)]
    Type(#[from] TypeError),

    /// A bean was asked for a field it does not have.
    #[error("{type_name} has no field '{field}'")]
    UnknownField { type_name: String, field: String },

    /// A key does not fit the schema it is used with.
    #[error("key does not match {type_name}: {reason}")]
    KeyMismatch { type_name: String, reason: String },

    /// The mapper configuration is invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl MapperError {
    pub fn unknown_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    pub(crate) fn key_mismatch(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::KeyMismatch {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias for mapping operations.
pub type MapperResult<T> = Result<T, MapperError>;
