//! # Flexure Formulas (ACI 318 Strength Design)
//!
//! Closed-form formulas for rectangular reinforced-concrete sections in
//! bending. All inputs follow the kilogram–centimeter convention unless the
//! function name says otherwise.
//!
//! ## Notation
//!
//! - `fc` = Specified concrete compressive strength f'c (kg/cm²)
//! - `fy` = Specified steel yield strength (kg/cm²)
//! - `b` = Section width (cm)
//! - `d` = Effective depth to tension steel centroid (cm)
//! - `a` = Depth of the equivalent rectangular stress block (cm)
//! - `ρ` = Tension reinforcement ratio As/(b·d)
//!
//! ## Simplifications
//!
//! - `ρ_required = Rn / fy` is a linear single-reinforced approximation, not
//!   the quadratic flexure solution.
//! - `ρ_max` is the singly-reinforced bound; it is not raised when
//!   compression steel is present.
//! - Tension and compression steel moments are computed independently and
//!   summed (`a` ignores As').
//!
//! ## References
//!
//! - ACI 318-19 Section 22.2.2.4.3: β1 for equivalent stress block
//! - ACI 318-19 Section 9.6.1.2: Minimum flexural reinforcement
//! - ACI 318-19 Section 21.2: Strength reduction factors

/// f'c at or below which β1 stays at 0.85 (kg/cm²)
pub const BETA1_FC_THRESHOLD: f64 = 280.0;

/// Lower bound for β1
pub const BETA1_MIN: f64 = 0.65;

/// Stress-block depth factor β1
///
/// # Formula
/// β1 = 0.85 for f'c ≤ 280 kg/cm²
/// β1 = max(0.65, 0.85 − 0.05·(f'c − 280)/70) otherwise
///
/// # Example
/// ```rust
/// use rcbeam_core::equations::flexure::beta1;
///
/// assert_eq!(beta1(240.0), 0.85);
/// assert!((beta1(350.0) - 0.80).abs() < 1e-12);
/// assert_eq!(beta1(1000.0), 0.65);
/// ```
#[inline]
pub fn beta1(fc: f64) -> f64 {
    if fc <= BETA1_FC_THRESHOLD {
        0.85
    } else {
        (0.85 - 0.05 * (fc - BETA1_FC_THRESHOLD) / 70.0).max(BETA1_MIN)
    }
}

/// Minimum tension reinforcement ratio
///
/// # Formula
/// ρ_min = max(1.4/fy, 0.8·√f'c/fy)
///
/// # Example
/// ```rust
/// use rcbeam_core::equations::flexure::rho_min;
///
/// let rho = rho_min(240.0, 4000.0);
/// assert!((rho - 0.0031).abs() < 1e-4);
/// ```
#[inline]
pub fn rho_min(fc: f64, fy: f64) -> f64 {
    (1.4 / fy).max(0.8 * fc.sqrt() / fy)
}

/// Maximum tension reinforcement ratio for a singly-reinforced section
///
/// # Formula
/// ρ_max = 0.75 · (0.85·f'c/fy) · (β1/(1 + β1))
#[inline]
pub fn rho_max(fc: f64, fy: f64, beta1: f64) -> f64 {
    0.75 * (0.85 * fc / fy) * (beta1 / (1.0 + beta1))
}

/// Nominal resistance coefficient Rn (N/mm²)
///
/// # Formula
/// Rn = Mu / (φb · b · d²)
///
/// # Arguments
/// * `mu_nmm` - Factored moment (N-mm)
/// * `phi_b` - Flexure strength-reduction factor
/// * `b_mm` - Width (mm)
/// * `d_mm` - Effective depth (mm)
#[inline]
pub fn nominal_resistance_coefficient(mu_nmm: f64, phi_b: f64, b_mm: f64, d_mm: f64) -> f64 {
    mu_nmm / (phi_b * b_mm * d_mm.powi(2))
}

/// Required reinforcement ratio, single-reinforced linear approximation
///
/// # Formula
/// ρ = Rn / fy
#[inline]
pub fn rho_from_rn(rn: f64, fy: f64) -> f64 {
    rn / fy
}

/// Steel area for a reinforcement ratio (cm²)
///
/// # Formula
/// As = ρ · b · d
#[inline]
pub fn steel_area_from_ratio(rho: f64, b: f64, d: f64) -> f64 {
    rho * b * d
}

/// Depth of the equivalent rectangular stress block (cm)
///
/// Compression steel is not subtracted from the tension force.
///
/// # Formula
/// a = As · fy / (0.85 · f'c · b)
///
/// # Example
/// ```rust
/// use rcbeam_core::equations::flexure::stress_block_depth;
///
/// // 3-DB16 (6.03 cm²), fy = 4000, f'c = 240, b = 30 cm
/// let a = stress_block_depth(6.03, 4000.0, 240.0, 30.0);
/// assert!((a - 3.94).abs() < 0.01);
/// ```
#[inline]
pub fn stress_block_depth(as_cm2: f64, fy: f64, fc: f64, b: f64) -> f64 {
    (as_cm2 * fy) / (0.85 * fc * b)
}

/// Stress-block depth limit separating under- from over-reinforced sections (cm)
///
/// # Formula
/// a_max = 0.75 · d
#[inline]
pub fn max_stress_block_depth(d: f64) -> f64 {
    0.75 * d
}

/// Nominal moment carried by the tension steel couple (kg-cm)
///
/// # Formula
/// Mn,t = As · fy · (d − a/2)
#[inline]
pub fn tension_moment_kgcm(as_cm2: f64, fy: f64, d: f64, a: f64) -> f64 {
    as_cm2 * fy * (d - a / 2.0)
}

/// Nominal moment carried by the compression steel couple (kg-cm)
///
/// # Formula
/// Mn,c = As' · fy · (d − d')
#[inline]
pub fn compression_moment_kgcm(as_prime_cm2: f64, fy: f64, d: f64, d_prime: f64) -> f64 {
    as_prime_cm2 * fy * (d - d_prime)
}

/// Smallest number of bars whose total area reaches `as_required_cm2`
///
/// # Formula
/// n = ⌈As,req / A_bar⌉
///
/// # Example
/// ```rust
/// use rcbeam_core::equations::flexure::bars_required;
///
/// assert_eq!(bars_required(4.28, 2.01), 3);
/// assert_eq!(bars_required(4.0, 2.01), 2);
/// ```
#[inline]
pub fn bars_required(as_required_cm2: f64, bar_area_cm2: f64) -> u32 {
    let n = (as_required_cm2 / bar_area_cm2).ceil();
    if n.is_finite() && n > 0.0 {
        n as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beta1_branches() {
        assert_eq!(beta1(150.0), 0.85);
        assert_eq!(beta1(280.0), 0.85);
        // 0.85 - 0.05 * 70/70
        assert!((beta1(350.0) - 0.80).abs() < 1e-12);
        // 0.85 - 0.05 * 280/70 = 0.65 exactly at 560
        assert!((beta1(560.0) - 0.65).abs() < 1e-12);
        assert_eq!(beta1(800.0), 0.65);
    }

    #[test]
    fn test_rho_min_governing_term() {
        // fc = 240: 0.8*sqrt(240)/4000 = 0.003098 > 1.4/4000 = 0.00035
        let rho = rho_min(240.0, 4000.0);
        assert!((rho - 0.8 * 240f64.sqrt() / 4000.0).abs() < 1e-15);
    }

    #[test]
    fn test_rho_max_value() {
        // 0.75 * (0.85*240/4000) * (0.85/1.85) = 0.017574
        let rho = rho_max(240.0, 4000.0, 0.85);
        assert!((rho - 0.017574).abs() < 1e-5);
    }

    #[test]
    fn test_rn_and_rho() {
        // Mu = 5500 kg-m = 53,955,000 N-mm; b = 300 mm; d = 460 mm
        let rn = nominal_resistance_coefficient(53_955_000.0, 0.9, 300.0, 460.0);
        assert!((rn - 0.9444).abs() < 1e-3);
        let rho = rho_from_rn(rn, 4000.0);
        assert!((rho - 0.000236).abs() < 1e-6);
    }

    #[test]
    fn test_moments() {
        let a = stress_block_depth(6.03, 4000.0, 240.0, 30.0);
        let mn_t = tension_moment_kgcm(6.03, 4000.0, 46.0, a);
        assert!((mn_t - 6.03 * 4000.0 * (46.0 - a / 2.0)).abs() < 1e-6);
        assert!((compression_moment_kgcm(4.02, 4000.0, 46.0, 4.0) - 675_360.0).abs() < 1e-6);
    }

    #[test]
    fn test_bars_required_edge_cases() {
        assert_eq!(bars_required(0.0, 2.01), 0);
        assert_eq!(bars_required(2.02, 2.01), 2);
        assert_eq!(bars_required(1.0, 0.0), 0);
    }
}
