//! # Error Types
//!
//! Structured error types for rcbeam_core. A [`ComputationError`] means the
//! check could not be carried out at all (unknown bar designation, degenerate
//! geometry producing a non-finite value, unreadable JSON). A failing design
//! criterion is *not* an error: it is reported as data in the result.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::errors::{CalcResult, ComputationError};
//!
//! fn checked_ratio(quantity: &str, num: f64, den: f64) -> CalcResult<f64> {
//!     let value = num / den;
//!     if !value.is_finite() {
//!         return Err(ComputationError::non_finite(quantity, value));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(checked_ratio("Rn", 1.0, 0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rcbeam_core operations
pub type CalcResult<T> = Result<T, ComputationError>;

/// Structural failure of a computation.
///
/// The `Display` text is the message shown to the user; consumers should
/// surface it unchanged.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ComputationError {
    /// Main-bar designation is not in the bar catalog
    #[error("Unknown bar designation '{designation}' (expected one of DB12, DB16, DB20, DB25, DB32)")]
    UnknownBarDesignation { designation: String },

    /// Stirrup designation is not in the stirrup catalog
    #[error("Unknown stirrup designation '{designation}' (expected one of RB6, RB9, DB12)")]
    UnknownStirrupDesignation { designation: String },

    /// An intermediate quantity evaluated to NaN or infinity
    #[error("Non-finite value for {quantity}: {value} - check section geometry and material strengths")]
    NonFiniteValue { quantity: String, value: String },

    /// An input value cannot be used at all
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl ComputationError {
    /// Create an UnknownBarDesignation error
    pub fn unknown_bar(designation: impl Into<String>) -> Self {
        ComputationError::UnknownBarDesignation {
            designation: designation.into(),
        }
    }

    /// Create an UnknownStirrupDesignation error
    pub fn unknown_stirrup(designation: impl Into<String>) -> Self {
        ComputationError::UnknownStirrupDesignation {
            designation: designation.into(),
        }
    }

    /// Create a NonFiniteValue error
    pub fn non_finite(quantity: impl Into<String>, value: f64) -> Self {
        ComputationError::NonFiniteValue {
            quantity: quantity.into(),
            value: value.to_string(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ComputationError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        ComputationError::Serialization {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ComputationError::UnknownBarDesignation { .. } => "UNKNOWN_BAR_DESIGNATION",
            ComputationError::UnknownStirrupDesignation { .. } => "UNKNOWN_STIRRUP_DESIGNATION",
            ComputationError::NonFiniteValue { .. } => "NON_FINITE_VALUE",
            ComputationError::InvalidInput { .. } => "INVALID_INPUT",
            ComputationError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for ComputationError {
    fn from(err: serde_json::Error) -> Self {
        ComputationError::serialization(err.to_string())
    }
}

/// Return `value` unchanged if finite, otherwise a [`ComputationError::NonFiniteValue`].
pub fn ensure_finite(quantity: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComputationError::non_finite(quantity, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ComputationError::unknown_bar("DB14");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("UnknownBarDesignation"));
        let roundtrip: ComputationError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ComputationError::unknown_bar("x").error_code(), "UNKNOWN_BAR_DESIGNATION");
        assert_eq!(ComputationError::unknown_stirrup("x").error_code(), "UNKNOWN_STIRRUP_DESIGNATION");
        assert_eq!(ComputationError::non_finite("a", f64::NAN).error_code(), "NON_FINITE_VALUE");
    }

    #[test]
    fn test_message_names_the_designation() {
        let msg = ComputationError::unknown_stirrup("RB8").to_string();
        assert!(msg.contains("RB8"));
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("x", 2.5).unwrap(), 2.5);
        assert!(ensure_finite("x", f64::INFINITY).is_err());
        assert!(ensure_finite("x", f64::NAN).is_err());
    }
}
