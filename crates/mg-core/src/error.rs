use thiserror::Error;

use crate::value::ValueKind;

#[derive(Error, Debug)]
pub enum GrouperError {
    #[error("min_run_size must be at least 1, got {min_run_size}")]
    InvalidArgument { min_run_size: usize },
    #[error("Unsupported element type: {value}")]
    UnsupportedType { value: String },
    #[error("Type mismatch at index {index}: expected {expected}, got {value}")]
    TypeMismatch {
        index: usize,
        value: String,
        expected: ValueKind,
    },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl GrouperError {
    /// Stable machine-readable code for host surfaces.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::UnsupportedType { .. } => "unsupported_type",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::Json(_) => "invalid_json",
        }
    }
}

pub type Result<T> = std::result::Result<T, GrouperError>;
