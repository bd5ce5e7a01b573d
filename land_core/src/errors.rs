//! # Error Types
//!
//! Structured error types for land_core. The conversion engine itself is
//! total over positive finite inputs and never fails; every error here comes
//! from the boundary around it (input validation, history and settings
//! persistence).
//!
//! ## Example
//!
//! ```rust
//! use land_core::errors::{LandError, LandResult};
//!
//! fn validate_length(length: f64) -> LandResult<()> {
//!     if length <= 0.0 {
//!         return Err(LandError::InvalidInput {
//!             field: "length".to_string(),
//!             value: length.to_string(),
//!             reason: "Length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for land_core operations
pub type LandResult<T> = Result<T, LandError>;

/// Structured error type for land_core operations.
///
/// `MissingField` and `InvalidInput` are the two conditions a caller must
/// surface to the user before any arithmetic runs. The remaining variants
/// belong to the persistence layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum LandError {
    /// A field is non-numeric, zero, negative or not finite
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field was left empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A unit name could not be recognised
    #[error("Unknown unit: {name}")]
    UnknownUnit { name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Another process is writing the same data file
    #[error("File locked: '{path}' is being written by another process")]
    FileLocked { path: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl LandError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        LandError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        LandError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(name: impl Into<String>) -> Self {
        LandError::UnknownUnit { name: name.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        LandError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>) -> Self {
        LandError::FileLocked { path: path.into() }
    }

    /// True for the two input-validation conditions raised before calculation
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            LandError::InvalidInput { .. } | LandError::MissingField { .. }
        )
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LandError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            LandError::InvalidInput { .. } => "INVALID_INPUT",
            LandError::MissingField { .. } => "MISSING_FIELD",
            LandError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            LandError::FileError { .. } => "FILE_ERROR",
            LandError::FileLocked { .. } => "FILE_LOCKED",
            LandError::SerializationError { .. } => "SERIALIZATION_ERROR",
            LandError::VersionMismatch { .. } => "VERSION_MISMATCH",
            LandError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for LandError {
    fn from(e: serde_json::Error) -> Self {
        LandError::SerializationError {
            reason: e.to_string(),
        }
    }
}
