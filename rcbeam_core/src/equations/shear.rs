//! # Shear Formulas (ACI 318 Strength Design)
//!
//! Concrete shear capacity and stirrup detailing limits, kilogram–centimeter
//! units. Stirrup contribution Vs is not part of the check: only φVc is
//! compared against Vu, and stirrups are checked for spacing alone.
//!
//! ## References
//!
//! - ACI 318-19 Table 22.5.5.1: Vc = 0.53√f'c·b·d (kg/cm² form)
//! - ACI 318-19 Table 9.7.6.2.2: Maximum stirrup spacing

/// Absolute cap on stirrup spacing (cm)
pub const MAX_STIRRUP_SPACING_CAP_CM: f64 = 60.0;

/// Nominal concrete shear capacity (kg)
///
/// # Formula
/// Vc = 0.53 · √f'c · b · d
///
/// # Example
/// ```rust
/// use rcbeam_core::equations::shear::concrete_shear_capacity;
///
/// let vc = concrete_shear_capacity(240.0, 30.0, 46.0);
/// assert!((vc - 11_331.0).abs() < 1.0);
/// ```
#[inline]
pub fn concrete_shear_capacity(fc: f64, b: f64, d: f64) -> f64 {
    0.53 * fc.sqrt() * b * d
}

/// Maximum permitted stirrup spacing (cm)
///
/// # Formula
/// s_max = min(d/2, 60)
#[inline]
pub fn max_stirrup_spacing(d: f64) -> f64 {
    (d / 2.0).min(MAX_STIRRUP_SPACING_CAP_CM)
}

/// Shear reinforcement area per spacing (cm²)
///
/// # Formula
/// Av = A_leg · n_legs
#[inline]
pub fn stirrup_area(leg_area_cm2: f64, legs: u32) -> f64 {
    leg_area_cm2 * f64::from(legs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vc() {
        let vc = concrete_shear_capacity(240.0, 30.0, 46.0);
        assert!((vc - 0.53 * 240f64.sqrt() * 30.0 * 46.0).abs() < 1e-9);
    }

    #[test]
    fn test_max_spacing() {
        assert_eq!(max_stirrup_spacing(46.0), 23.0);
        assert_eq!(max_stirrup_spacing(150.0), 60.0);
        assert_eq!(max_stirrup_spacing(120.0), 60.0);
    }

    #[test]
    fn test_stirrup_area() {
        assert!((stirrup_area(0.283, 2) - 0.566).abs() < 1e-12);
        assert_eq!(stirrup_area(0.636, 0), 0.0);
    }
}
