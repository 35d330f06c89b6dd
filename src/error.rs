use thiserror::Error;

use crate::form::FieldKind;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Field #{index} has no name")]
    MissingName { index: usize },

    #[error("Field '{name}' has no label")]
    MissingLabel { name: String },

    #[error("Duplicate field name: {0}")]
    DuplicateName(String),

    #[error("Field '{name}' holds a value that does not fit kind {kind:?}")]
    ValueMismatch { name: String, kind: FieldKind },

    #[error("Field '{name}' has invalid constraints: {reason}")]
    InvalidConstraints { name: String, reason: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, FormError>;
