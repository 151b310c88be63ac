//! # Error Types
//!
//! Structured error types for calc_core. Geometry failures carry the values
//! that caused them so a caller can tell the user exactly what to correct
//! (e.g. "thickness must be less than inradius r = 1.00 mm") instead of
//! showing a meaningless weight.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_thickness(thickness_mm: f64) -> CalcResult<()> {
//!     if thickness_mm <= 0.0 {
//!         return Err(CalcError::non_positive("thickness", thickness_mm));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_thickness(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and storage operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A dimension, the thickness or the density is zero, negative or not finite
    #[error("Invalid input for '{field}': {value} - must be a positive number")]
    NonPositiveInput { field: String, value: f64 },

    /// The wall consumes the whole section (an inner dimension went negative)
    #[error("Degenerate {shape} section: inner {dimension} would be {value:.3} mm - reduce the wall thickness")]
    DegenerateSection {
        shape: String,
        dimension: String,
        value: f64,
    },

    /// The three sides cannot form a triangle
    #[error("Invalid triangle: sides {a} / {b} / {c} mm violate the triangle inequality")]
    InvalidTriangle { a: f64, b: f64, c: f64 },

    /// Wall thickness reaches the incircle of a scalene triangle
    #[error("Thickness {thickness} mm must be less than inradius r = {inradius:.3} mm")]
    ThicknessExceedsInradius { thickness: f64, inradius: f64 },

    /// Dimensions are so large that a derived quantity overflowed
    #[error("{shape} section too large: {quantity} is not a finite number - check the units of the dimensions")]
    NonFiniteResult { shape: String, quantity: String },

    /// Saved record lookup failed
    #[error("No saved {shape} calculation at index {index}")]
    RecordNotFound { shape: String, index: usize },

    /// Settings file could not be read or parsed
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a NonPositiveInput error
    pub fn non_positive(field: impl Into<String>, value: f64) -> Self {
        CalcError::NonPositiveInput {
            field: field.into(),
            value,
        }
    }

    /// Create a DegenerateSection error
    pub fn degenerate(shape: impl Into<String>, dimension: impl Into<String>, value: f64) -> Self {
        CalcError::DegenerateSection {
            shape: shape.into(),
            dimension: dimension.into(),
            value,
        }
    }

    /// Create a NonFiniteResult error
    pub fn non_finite(shape: impl Into<String>, quantity: impl Into<String>) -> Self {
        CalcError::NonFiniteResult {
            shape: shape.into(),
            quantity: quantity.into(),
        }
    }

    /// Create a ConfigError
    pub fn config(reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>, locked_at: impl Into<String>) -> Self {
        CalcError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// True for failures the user fixes by re-entering dimensions
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::NonPositiveInput { .. }
                | CalcError::DegenerateSection { .. }
                | CalcError::InvalidTriangle { .. }
                | CalcError::ThicknessExceedsInradius { .. }
                | CalcError::NonFiniteResult { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::NonPositiveInput { .. } => "NON_POSITIVE_INPUT",
            CalcError::DegenerateSection { .. } => "DEGENERATE_SECTION",
            CalcError::InvalidTriangle { .. } => "INVALID_TRIANGLE",
            CalcError::ThicknessExceedsInradius { .. } => "THICKNESS_EXCEEDS_INRADIUS",
            CalcError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
            CalcError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::FileLocked { .. } => "FILE_LOCKED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}
