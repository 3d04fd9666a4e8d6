//! # Error Types
//!
//! Structured error types for joint_core. Every failure mode of the
//! closed-form formulas (zero denominators, degenerate frustum geometry,
//! half-built fasteners) is reported as a typed error rather than a silent
//! NaN or panic.
//!
//! ## Example
//!
//! ```rust
//! use joint_core::errors::{CalcError, CalcResult};
//!
//! fn validate_area(area_in2: f64) -> CalcResult<()> {
//!     if area_in2 <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "area_in2",
//!             area_in2.to_string(),
//!             "Stress area must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for joint_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant carries enough context to tell which quantity or field
/// caused the failure, enabling programmatic handling by consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-physical, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field was never supplied (e.g. a bolt built without grip)
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Geometry is degenerate for the stiffness frustum formula
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    /// A denominator evaluated to zero
    #[error("Division by zero while computing {quantity}")]
    DivisionByZero { quantity: String },

    /// Inputs are individually valid but the combination is non-physical
    #[error("Calculation failed: {calculation} - {reason}")]
    CalculationFailed { calculation: String, reason: String },
}

impl CalcError {
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

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(quantity: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            quantity: quantity.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation: calculation.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error =
            CalcError::invalid_input("grip_in", "-1.0", "Grip length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::missing_field("grip_in").error_code(),
            "MISSING_FIELD"
        );
        assert_eq!(
            CalcError::division_by_zero("stress area").error_code(),
            "DIVISION_BY_ZERO"
        );
        assert_eq!(
            CalcError::invalid_geometry("log argument not positive").error_code(),
            "INVALID_GEOMETRY"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::division_by_zero("stiffness constant");
        assert_eq!(
            error.to_string(),
            "Division by zero while computing stiffness constant"
        );
    }
}
