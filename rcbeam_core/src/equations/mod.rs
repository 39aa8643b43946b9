//! # Design Equations
//!
//! Every closed-form formula used by the beam check, in one place so each can
//! be verified against ACI 318 on its own.
//!
//! ## Modules
//!
//! - [`flexure`] - β1, ratio bounds, required steel, stress block, moment couples
//! - [`shear`] - Concrete shear capacity and stirrup limits
//! - [`registry`] - Equation metadata, usage tracking and reference generation
//!
//! ## Units
//!
//! - Strengths f'c, fy: kg/cm²
//! - Lengths: cm (mm only where the function name says so)
//! - Forces: kg; moments: kg-cm or kg-m as named
//!
//! ## References
//!
//! - ACI 318-19: Building Code Requirements for Structural Concrete

pub mod flexure;
pub mod registry;
pub mod shear;

pub use flexure::{
    bars_required,
    beta1,
    compression_moment_kgcm,
    max_stress_block_depth,
    nominal_resistance_coefficient,
    rho_from_rn,
    rho_max,
    rho_min,
    steel_area_from_ratio,
    stress_block_depth,
    tension_moment_kgcm,
};

pub use shear::{concrete_shear_capacity, max_stirrup_spacing, stirrup_area};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
