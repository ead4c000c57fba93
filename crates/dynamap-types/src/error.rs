use thiserror::Error;

/// Errors produced by value conversions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("type mismatch: expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("value out of range for {target}: {value}")]
    OutOfRange { target: &'static str, value: String },

    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl TypeError {
    /// Shorthand for a [`TypeError::Mismatch`].
    pub fn mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::Mismatch { expected, found }
    }
}

/// Result alias for type conversions.
pub type TypeResult<T> = Result<T, TypeError>;
