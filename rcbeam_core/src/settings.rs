//! # Design Settings
//!
//! Configuration shared by every evaluation: the design-code label and the
//! strength-reduction factors. Defaults are the ACI 318 Strength Design
//! values (φb = 0.90 flexure, φs = 0.75 shear); they are overridable so the
//! engine can be checked against other editions.
//!
//! ## JSON Example
//!
//! ```json
//! { "code": "ACI 318 SDM", "phi_b": 0.90, "phi_s": 0.75 }
//! ```
//!
//! Missing fields fall back to their defaults:
//!
//! ```rust
//! use rcbeam_core::settings::DesignSettings;
//!
//! let s = DesignSettings::from_json(r#"{ "phi_s": 0.85 }"#).unwrap();
//! assert_eq!(s.phi_b, 0.90);
//! assert_eq!(s.phi_s, 0.85);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, ComputationError};

/// Default flexure strength-reduction factor
pub const DEFAULT_PHI_B: f64 = 0.90;

/// Default shear strength-reduction factor
pub const DEFAULT_PHI_S: f64 = 0.75;

/// Default design code label
pub const DEFAULT_CODE: &str = "ACI 318 SDM";

/// Engine-wide design settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Design code label shown in reports
    pub code: String,

    /// Flexure strength-reduction factor φb
    pub phi_b: f64,

    /// Shear strength-reduction factor φs
    pub phi_s: f64,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            code: DEFAULT_CODE.to_string(),
            phi_b: DEFAULT_PHI_B,
            phi_s: DEFAULT_PHI_S,
        }
    }
}

impl DesignSettings {
    /// Parse settings from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: DesignSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Override the flexure strength-reduction factor
    pub fn with_phi_b(mut self, phi_b: f64) -> Self {
        self.phi_b = phi_b;
        self
    }

    /// Override the shear strength-reduction factor
    pub fn with_phi_s(mut self, phi_s: f64) -> Self {
        self.phi_s = phi_s;
        self
    }

    /// Reject strength-reduction factors outside (0, 1].
    pub fn validate(&self) -> CalcResult<()> {
        for (field, phi) in [("phi_b", self.phi_b), ("phi_s", self.phi_s)] {
            if !(phi > 0.0 && phi <= 1.0) {
                return Err(ComputationError::invalid_input(
                    field,
                    phi.to_string(),
                    "strength-reduction factor must be in (0, 1]",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = DesignSettings::default();
        assert_eq!(s.code, "ACI 318 SDM");
        assert_eq!(s.phi_b, 0.90);
        assert_eq!(s.phi_s, 0.75);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let s = DesignSettings::default().with_phi_b(0.85).with_phi_s(0.6);
        assert_eq!(s.phi_b, 0.85);
        assert_eq!(s.phi_s, 0.6);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let err = DesignSettings::default().with_phi_b(0.0).validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        assert!(DesignSettings::default().with_phi_s(1.2).validate().is_err());
        assert!(DesignSettings::default().with_phi_s(f64::NAN).validate().is_err());
        assert!(DesignSettings::default().with_phi_s(1.0).validate().is_ok());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(DesignSettings::from_json("not json").is_err());
        assert!(DesignSettings::from_json(r#"{"phi_b": -1}"#).is_err());
        assert_eq!(DesignSettings::from_json("{}").unwrap(), DesignSettings::default());
    }
}
