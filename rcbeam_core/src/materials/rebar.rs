//! Reinforcing Bar Catalog
//!
//! Fixed lookup tables for the deformed main bars and the stirrup bars that a
//! beam check may reference. Areas are the nominal cross-sectional areas in
//! cm² used by Thai/ASEAN practice (TIS 24 deformed bars, TIS 20 round bars).
//!
//! | Main bar | Area (cm²) |   | Stirrup | Area (cm²) |
//! |----------|-----------:|---|---------|-----------:|
//! | DB12     | 1.13       |   | RB6     | 0.283      |
//! | DB16     | 2.01       |   | RB9     | 0.636      |
//! | DB20     | 3.14       |   | DB12    | 1.131      |
//! | DB25     | 4.91       |   |         |            |
//! | DB32     | 8.04       |   |         |            |
//!
//! The tables are not editable. Designations travel through JSON as their
//! string form (`"DB16"`); an unknown designation is a
//! [`ComputationError`](crate::errors::ComputationError).
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::materials::rebar::{BarSize, StirrupSize};
//!
//! let bar: BarSize = "DB16".parse().unwrap();
//! assert_eq!(bar.area_cm2(), 2.01);
//!
//! let stirrup: StirrupSize = "RB6".parse().unwrap();
//! assert_eq!(stirrup.area_cm2(), 0.283);
//!
//! assert!("DB14".parse::<BarSize>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcResult, ComputationError};

// ============================================================================
// Main (longitudinal) bars
// ============================================================================

/// Deformed main bar designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum BarSize {
    /// 12 mm deformed bar
    Db12,
    /// 16 mm deformed bar
    #[default]
    Db16,
    /// 20 mm deformed bar
    Db20,
    /// 25 mm deformed bar
    Db25,
    /// 32 mm deformed bar
    Db32,
}

impl BarSize {
    /// All catalog sizes, smallest first
    pub const ALL: [BarSize; 5] = [
        BarSize::Db12,
        BarSize::Db16,
        BarSize::Db20,
        BarSize::Db25,
        BarSize::Db32,
    ];

    /// Nominal cross-sectional area of one bar (cm²)
    pub fn area_cm2(&self) -> f64 {
        match self {
            BarSize::Db12 => 1.13,
            BarSize::Db16 => 2.01,
            BarSize::Db20 => 3.14,
            BarSize::Db25 => 4.91,
            BarSize::Db32 => 8.04,
        }
    }

    /// Nominal diameter (mm)
    pub fn diameter_mm(&self) -> u32 {
        match self {
            BarSize::Db12 => 12,
            BarSize::Db16 => 16,
            BarSize::Db20 => 20,
            BarSize::Db25 => 25,
            BarSize::Db32 => 32,
        }
    }

    /// Catalog designation (e.g., "DB16")
    pub fn designation(&self) -> &'static str {
        match self {
            BarSize::Db12 => "DB12",
            BarSize::Db16 => "DB16",
            BarSize::Db20 => "DB20",
            BarSize::Db25 => "DB25",
            BarSize::Db32 => "DB32",
        }
    }
}

impl FromStr for BarSize {
    type Err = ComputationError;

    /// Accepts "DB16", "db16" or a bare diameter "16".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let upper = trimmed.to_uppercase();
        let digits = upper.strip_prefix("DB").unwrap_or(&upper);
        match digits {
            "12" => Ok(BarSize::Db12),
            "16" => Ok(BarSize::Db16),
            "20" => Ok(BarSize::Db20),
            "25" => Ok(BarSize::Db25),
            "32" => Ok(BarSize::Db32),
            _ => Err(ComputationError::unknown_bar(trimmed)),
        }
    }
}

impl TryFrom<String> for BarSize {
    type Error = ComputationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for BarSize {
    type Error = ComputationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BarSize> for String {
    fn from(size: BarSize) -> Self {
        size.designation().to_string()
    }
}

impl std::fmt::Display for BarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation())
    }
}

// ============================================================================
// Stirrup bars
// ============================================================================

/// Stirrup (transverse) bar designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum StirrupSize {
    /// 6 mm round bar
    #[default]
    Rb6,
    /// 9 mm round bar
    Rb9,
    /// 12 mm deformed bar
    Db12,
}

impl StirrupSize {
    /// All stirrup sizes, smallest first
    pub const ALL: [StirrupSize; 3] = [StirrupSize::Rb6, StirrupSize::Rb9, StirrupSize::Db12];

    /// Cross-sectional area of one leg (cm²)
    pub fn area_cm2(&self) -> f64 {
        match self {
            StirrupSize::Rb6 => 0.283,
            StirrupSize::Rb9 => 0.636,
            StirrupSize::Db12 => 1.131,
        }
    }

    /// Nominal diameter (mm)
    pub fn diameter_mm(&self) -> u32 {
        match self {
            StirrupSize::Rb6 => 6,
            StirrupSize::Rb9 => 9,
            StirrupSize::Db12 => 12,
        }
    }

    /// Catalog designation (e.g., "RB6")
    pub fn designation(&self) -> &'static str {
        match self {
            StirrupSize::Rb6 => "RB6",
            StirrupSize::Rb9 => "RB9",
            StirrupSize::Db12 => "DB12",
        }
    }
}

impl FromStr for StirrupSize {
    type Err = ComputationError;

    /// Accepts "RB6", "RB9", "DB12" (any case) or a bare diameter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "RB6" | "6" => Ok(StirrupSize::Rb6),
            "RB9" | "9" => Ok(StirrupSize::Rb9),
            "DB12" | "12" => Ok(StirrupSize::Db12),
            _ => Err(ComputationError::unknown_stirrup(trimmed)),
        }
    }
}

impl TryFrom<String> for StirrupSize {
    type Error = ComputationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for StirrupSize {
    type Error = ComputationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StirrupSize> for String {
    fn from(size: StirrupSize) -> Self {
        size.designation().to_string()
    }
}

impl std::fmt::Display for StirrupSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation())
    }
}

// ============================================================================
// String-keyed lookup
// ============================================================================

/// Area of one main bar by designation (cm²)
pub fn bar_area_cm2(designation: &str) -> CalcResult<f64> {
    designation.parse::<BarSize>().map(|b| b.area_cm2())
}

/// Area of one stirrup leg by designation (cm²)
pub fn stirrup_area_cm2(designation: &str) -> CalcResult<f64> {
    designation.parse::<StirrupSize>().map(|s| s.area_cm2())
}

// ============================================================================
// Selections
// ============================================================================

/// A group of identical longitudinal bars (bar size × count).
///
/// ## JSON Example
///
/// ```json
/// { "size": "DB16", "count": 3 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementSelection {
    /// Bar designation
    pub size: BarSize,
    /// Number of bars
    pub count: u32,
}

impl ReinforcementSelection {
    pub fn new(size: BarSize, count: u32) -> Self {
        Self { size, count }
    }

    /// Total steel area = bar area × count (cm²)
    pub fn area_cm2(&self) -> f64 {
        self.size.area_cm2() * f64::from(self.count)
    }

    /// Label such as "3-DB16"
    pub fn label(&self) -> String {
        format!("{}-{}", self.count, self.size)
    }
}

/// Stirrup layout: bar size, number of legs and longitudinal spacing.
///
/// ## JSON Example
///
/// ```json
/// { "size": "RB6", "legs": 2, "spacing_cm": 15.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StirrupSelection {
    /// Stirrup bar designation
    pub size: StirrupSize,
    /// Number of vertical legs crossing the section
    pub legs: u32,
    /// Center-to-center spacing along the beam (cm)
    pub spacing_cm: f64,
}

impl StirrupSelection {
    pub fn new(size: StirrupSize, legs: u32, spacing_cm: f64) -> Self {
        Self { size, legs, spacing_cm }
    }

    /// Shear reinforcement area per spacing, Av = leg area × legs (cm²)
    pub fn av_cm2(&self) -> f64 {
        self.size.area_cm2() * f64::from(self.legs)
    }

    /// Label such as "RB6 2 legs @ 15 cm"
    pub fn label(&self) -> String {
        format!("{} {} legs @ {} cm", self.size, self.legs, self.spacing_cm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_areas() {
        assert_eq!(BarSize::Db12.area_cm2(), 1.13);
        assert_eq!(BarSize::Db16.area_cm2(), 2.01);
        assert_eq!(BarSize::Db20.area_cm2(), 3.14);
        assert_eq!(BarSize::Db25.area_cm2(), 4.91);
        assert_eq!(BarSize::Db32.area_cm2(), 8.04);
    }

    #[test]
    fn test_stirrup_areas() {
        assert_eq!(StirrupSize::Rb6.area_cm2(), 0.283);
        assert_eq!(StirrupSize::Rb9.area_cm2(), 0.636);
        assert_eq!(StirrupSize::Db12.area_cm2(), 1.131);
    }

    #[test]
    fn test_bar_parsing() {
        assert_eq!("DB16".parse::<BarSize>().unwrap(), BarSize::Db16);
        assert_eq!("db25".parse::<BarSize>().unwrap(), BarSize::Db25);
        assert_eq!(" 32 ".parse::<BarSize>().unwrap(), BarSize::Db32);
        assert_eq!(BarSize::try_from("20").unwrap(), BarSize::Db20);
        assert_eq!(StirrupSize::try_from("rb9").unwrap(), StirrupSize::Rb9);
        for size in BarSize::ALL {
            assert_eq!(size.designation().parse::<BarSize>().unwrap(), size);
        }
    }

    #[test]
    fn test_unknown_bar() {
        let err = "DB14".parse::<BarSize>().unwrap_err();
        assert_eq!(err, ComputationError::unknown_bar("DB14"));
        assert!(bar_area_cm2("RB6").is_err());
    }

    #[test]
    fn test_unknown_stirrup() {
        let err = "RB12".parse::<StirrupSize>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_STIRRUP_DESIGNATION");
        assert!(stirrup_area_cm2("DB16").is_err());
    }

    #[test]
    fn test_db12_differs_between_catalogs() {
        assert_eq!(bar_area_cm2("DB12").unwrap(), 1.13);
        assert_eq!(stirrup_area_cm2("DB12").unwrap(), 1.131);
    }

    #[test]
    fn test_serialization_uses_designation() {
        let sel = ReinforcementSelection::new(BarSize::Db20, 4);
        let json = serde_json::to_string(&sel).unwrap();
        assert_eq!(json, r#"{"size":"DB20","count":4}"#);
        let roundtrip: ReinforcementSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(sel, roundtrip);
    }

    #[test]
    fn test_deserialize_unknown_designation() {
        let err = serde_json::from_str::<ReinforcementSelection>(r#"{"size":"DB14","count":2}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Unknown bar designation 'DB14'"));
    }

    #[test]
    fn test_selection_areas() {
        let tension = ReinforcementSelection::new(BarSize::Db16, 3);
        assert!((tension.area_cm2() - 6.03).abs() < 1e-9);
        assert_eq!(tension.label(), "3-DB16");

        let stirrup = StirrupSelection::new(StirrupSize::Rb6, 2, 15.0);
        assert!((stirrup.av_cm2() - 0.566).abs() < 1e-9);
    }
}
