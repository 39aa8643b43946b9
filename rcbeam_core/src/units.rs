//! # Unit Types
//!
//! Type-safe wrappers for the fixed kilogram–centimeter convention used by
//! the design check. These are plain `f64` newtypes that serialize as bare
//! numbers.
//!
//! ## Units
//!
//! - Length: centimeters (cm), millimeters (mm)
//! - Force: kilogram-force (kg), newtons (N), with 1 kg = 9.81 N
//! - Moment: kg-m, kg-cm, N-mm
//! - Stress: kg/cm², N/mm² (MPa)
//! - Area: cm²
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::units::{Centimeters, KgM, Millimeters, NMm};
//!
//! let d = Centimeters(46.0);
//! let d_mm: Millimeters = d.into();
//! assert_eq!(d_mm.0, 460.0);
//!
//! let mu: NMm = KgM(5500.0).into();
//! assert!((mu.0 - 53_955_000.0).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Gravitational conversion from kilogram-force to newtons
pub const NEWTONS_PER_KG: f64 = 9.81;

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Centimeters> for Millimeters {
    fn from(cm: Centimeters) -> Self {
        Millimeters(cm.0 * 10.0)
    }
}

impl From<Millimeters> for Centimeters {
    fn from(mm: Millimeters) -> Self {
        Centimeters(mm.0 / 10.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilogram-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

impl From<Kilograms> for Newtons {
    fn from(kg: Kilograms) -> Self {
        Newtons(kg.0 * NEWTONS_PER_KG)
    }
}

impl From<Newtons> for Kilograms {
    fn from(n: Newtons) -> Self {
        Kilograms(n.0 / NEWTONS_PER_KG)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilogram-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgM(pub f64);

/// Moment in kilogram-centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgCm(pub f64);

/// Moment in newton-millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NMm(pub f64);

impl From<KgM> for KgCm {
    fn from(kgm: KgM) -> Self {
        KgCm(kgm.0 * 100.0)
    }
}

impl From<KgCm> for KgM {
    fn from(kgcm: KgCm) -> Self {
        KgM(kgcm.0 / 100.0)
    }
}

impl From<KgM> for NMm {
    fn from(kgm: KgM) -> Self {
        NMm(kgm.0 * NEWTONS_PER_KG * 1000.0)
    }
}

impl From<NMm> for KgM {
    fn from(nmm: NMm) -> Self {
        KgM(nmm.0 / (NEWTONS_PER_KG * 1000.0))
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in kilograms per square centimeter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerSqCm(pub f64);

/// Stress in newtons per square millimeter (MPa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NPerSqMm(pub f64);

impl From<KgPerSqCm> for NPerSqMm {
    fn from(s: KgPerSqCm) -> Self {
        NPerSqMm(s.0 * NEWTONS_PER_KG / 100.0)
    }
}

impl From<NPerSqMm> for KgPerSqCm {
    fn from(s: NPerSqMm) -> Self {
        KgPerSqCm(s.0 * 100.0 / NEWTONS_PER_KG)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqCm(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Centimeters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Newtons);
impl_arithmetic!(KgM);
impl_arithmetic!(KgCm);
impl_arithmetic!(NMm);
impl_arithmetic!(KgPerSqCm);
impl_arithmetic!(NPerSqMm);
impl_arithmetic!(SqCm);
