//! # Materials
//!
//! Concrete and reinforcing-steel definitions for the beam check.
//!
//! - [`MaterialProperties`]: specified strengths f'c and fy (kg/cm²) with the
//!   derived stress-block factor and reinforcement ratio bounds
//! - [`rebar`]: the fixed main-bar and stirrup catalogs
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::materials::{MaterialProperties, BarSize};
//!
//! let mat = MaterialProperties::new(240.0, 4000.0);
//! assert_eq!(mat.beta1(), 0.85);
//! assert!(mat.rho_min() < mat.rho_max());
//!
//! let area = BarSize::Db20.area_cm2();
//! println!("DB20 = {} cm²", area);
//! ```

pub mod rebar;

pub use rebar::{
    bar_area_cm2, stirrup_area_cm2, BarSize, ReinforcementSelection, StirrupSelection, StirrupSize,
};

use serde::{Deserialize, Serialize};

use crate::equations::flexure;

/// Specified material strengths.
///
/// ## JSON Example
///
/// ```json
/// { "fc_kgcm2": 240.0, "fy_kgcm2": 4000.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Concrete compressive strength f'c (kg/cm²)
    pub fc_kgcm2: f64,
    /// Steel yield strength fy (kg/cm²)
    pub fy_kgcm2: f64,
}

impl MaterialProperties {
    pub fn new(fc_kgcm2: f64, fy_kgcm2: f64) -> Self {
        Self { fc_kgcm2, fy_kgcm2 }
    }

    /// Stress-block depth factor β1
    pub fn beta1(&self) -> f64 {
        flexure::beta1(self.fc_kgcm2)
    }

    /// Minimum tension reinforcement ratio
    pub fn rho_min(&self) -> f64 {
        flexure::rho_min(self.fc_kgcm2, self.fy_kgcm2)
    }

    /// Maximum tension reinforcement ratio (singly-reinforced)
    pub fn rho_max(&self) -> f64 {
        flexure::rho_max(self.fc_kgcm2, self.fy_kgcm2, self.beta1())
    }
}

impl Default for MaterialProperties {
    /// f'c = 240 ksc concrete with SD40 steel
    fn default() -> Self {
        Self::new(240.0, 4000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let mat = MaterialProperties::default();
        assert_eq!(mat.fc_kgcm2, 240.0);
        assert_eq!(mat.fy_kgcm2, 4000.0);
    }

    #[test]
    fn test_high_strength_beta1() {
        let mat = MaterialProperties::new(420.0, 5000.0);
        // 0.85 - 0.05 * 140/70 = 0.75
        assert!((mat.beta1() - 0.75).abs() < 1e-12);
        assert!(mat.rho_min() < mat.rho_max());
    }

    #[test]
    fn test_material_json() {
        let mat: MaterialProperties =
            serde_json::from_str(r#"{"fc_kgcm2": 280.0, "fy_kgcm2": 3000.0}"#).unwrap();
        assert_eq!(mat, MaterialProperties::new(280.0, 3000.0));
    }
}
