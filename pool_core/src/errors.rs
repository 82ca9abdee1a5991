//! # Error Types
//!
//! Structured error types for pool_core. Each variant carries enough context
//! to identify the offending input field, so callers can surface a precise
//! message instead of a silent NaN or zero.
//!
//! ## Example
//!
//! ```rust
//! use pool_core::errors::{CalcError, CalcResult};
//!
//! fn validate_depth(depth_ft: f64) -> CalcResult<()> {
//!     if depth_ft <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "depth",
//!             depth_ft.to_string(),
//!             "Depth must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pool_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Unit and shape errors are fatal to the calculation that raised them: the
/// engine never fabricates a numeric result after either. Missing factor
/// selections are NOT errors; they degrade to a documented default and are
/// flagged in the returned factor trace (see [`crate::scoring`]).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Unit tag not recognized for the dimension it was supplied to
    #[error("Unknown {dimension} unit: '{unit}'")]
    UnknownUnit { unit: String, dimension: String },

    /// Shape tag with no matching area/volume formula
    #[error("Unknown pool shape: '{shape}'")]
    UnknownShape { shape: String },

    /// An input value is invalid (out of range, non-positive, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

impl CalcError {
    /// Create an UnknownUnit error
    pub fn unknown_unit(unit: impl Into<String>, dimension: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            unit: unit.into(),
            dimension: dimension.into(),
        }
    }

    /// Create an UnknownShape error
    pub fn unknown_shape(shape: impl Into<String>) -> Self {
        CalcError::UnknownShape {
            shape: shape.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::UnknownShape { .. } => "UNKNOWN_SHAPE",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("depth", "-1.5", "Depth must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::unknown_unit("furlongs", "length").error_code(),
            "UNKNOWN_UNIT"
        );
        assert_eq!(
            CalcError::unknown_shape("triangle").error_code(),
            "UNKNOWN_SHAPE"
        );
        assert_eq!(CalcError::missing_field("depth").error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_error_message_names_offender() {
        let error = CalcError::unknown_unit("furlongs", "length");
        assert!(error.to_string().contains("furlongs"));
    }
}
