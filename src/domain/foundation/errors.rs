//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur while coercing submitted fields into domain values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    MissingField { field: String },

    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' has unsupported value '{value}' (expected {expected})")]
    InvalidChoice {
        field: String,
        value: String,
        expected: &'static str,
    },
}

impl ValidationError {
    /// Creates a missing field validation error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        ValidationError::MissingField { field: field.into() }
    }

    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid choice validation error.
    pub fn invalid_choice(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        ValidationError::InvalidChoice {
            field: field.into(),
            value: value.into(),
            expected,
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::InvalidChoice { field, .. } => field,
        }
    }

    /// Machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingField { .. } => ErrorCode::MissingField,
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::InvalidChoice { .. } => ErrorCode::InvalidChoice,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    MissingField,
    EmptyField,
    OutOfRange,
    InvalidFormat,
    InvalidChoice,

    // Inference errors
    ModelUnavailable,
    InferenceFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidChoice => "INVALID_CHOICE",
            ErrorCode::ModelUnavailable => "MODEL_UNAVAILABLE",
            ErrorCode::InferenceFailed => "INFERENCE_FAILED",
        };
        write!(f, "{}", s)
    }
}
