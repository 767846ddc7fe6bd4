use thiserror::Error;

use crate::value::ValueKind;

/// Errors produced when interpreting or constructing a [`crate::Value`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A strict accessor was invoked on the empty value.
    #[error("value holds no data")]
    Empty,

    /// The value holds a different kind than the one requested.
    #[error("value cannot be interpreted as {expected}: actual kind is {actual}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },

    /// The dynamic constructor was given a payload outside the supported kinds.
    #[error("unsupported payload: {0}")]
    UnsupportedPayload(String),

    /// A string-sequence payload contained a null element.
    #[error("string sequence element {index} is null")]
    NullElement { index: usize },
}

/// Errors produced when constructing a [`crate::Property`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// The property name was empty or whitespace-only.
    #[error("invalid property name: {name:?}")]
    InvalidName { name: String },

    /// The property value failed validation.
    #[error(transparent)]
    Value(#[from] ValueError),
}
