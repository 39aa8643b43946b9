//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `evaluate(&input) -> CalcResult<*Result>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`rc_beam`] - Rectangular reinforced-concrete beam, flexure and shear (ACI 318 SDM)
//!
//! [`calc_log`] holds the ordered derivation log every calculation produces.

pub mod calc_log;
pub mod rc_beam;

use serde::{Deserialize, Serialize};

pub use calc_log::{CalcLog, LogEntry, Phase};
pub use rc_beam::{
    evaluate, evaluate_report, BeamDesignInput, BeamDesignResult, CheckRow, Criterion, Demand,
    DesignReport, Diagnostic, RatioStatus, Remediation, SectionBehavior, SectionGeometry, SteelRow,
    Verdicts,
};

/// Enum wrapper for all calculation types.
///
/// Serializes with a `"type"` discriminator so calculation requests can be
/// exchanged as JSON:
///
/// ```rust
/// use rcbeam_core::calculations::CalculationItem;
/// use rcbeam_core::BeamDesignInput;
///
/// let item = CalculationItem::RcBeam(BeamDesignInput::default().with_label("B-1"));
/// let json = serde_json::to_string(&item).unwrap();
/// assert!(json.starts_with(r#"{"type":"RcBeam""#));
/// assert_eq!(item.label(), "B-1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Reinforced-concrete beam check
    RcBeam(BeamDesignInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::RcBeam(b) => &b.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::RcBeam(_) => "RcBeam",
        }
    }

    /// Run the calculation for presentation
    pub fn run(&self) -> DesignReport {
        match self {
            CalculationItem::RcBeam(input) => evaluate_report(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_round_trip() {
        let item = CalculationItem::RcBeam(BeamDesignInput::default());
        let json = serde_json::to_string(&item).unwrap();
        let back: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.calc_type(), "RcBeam");
        assert!(back.run().design_ok);
    }
}
