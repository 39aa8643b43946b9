//! # rcbeam_core - Reinforced-Concrete Beam Check Engine
//!
//! `rcbeam_core` checks a rectangular reinforced-concrete beam section against
//! the ACI 318 Strength Design Method for flexure and shear, in the fixed
//! kilogram–centimeter convention. All inputs and outputs are
//! JSON-serializable so any presenter (CLI, web form, report generator) can
//! drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure function from input to result, safe to call from any thread
//! - **Failure is data**: a failing criterion is reported, never raised
//! - **Auditable**: every evaluation carries an ordered derivation log and
//!   the list of equations it applied
//!
//! ## Quick Start
//!
//! ```rust
//! use rcbeam_core::{evaluate, BeamDesignInput};
//!
//! let result = evaluate(&BeamDesignInput::default()).unwrap();
//! for row in result.check_rows() {
//!     println!("{:32} {:>14} {:>14} {}", row.label, row.provided, row.required, row.passed);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The beam check and its calculation log
//! - [`equations`] - Closed-form ACI 318 formulas and the equation registry
//! - [`materials`] - Material strengths and the rebar catalogs
//! - [`settings`] - Strength-reduction factors and code label
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::rc_beam::{
    evaluate, evaluate_report, BeamDesignInput, BeamDesignResult, Criterion, Demand, DesignReport,
    SectionGeometry,
};
pub use errors::{CalcResult, ComputationError};
pub use materials::{BarSize, MaterialProperties, ReinforcementSelection, StirrupSelection, StirrupSize};
pub use settings::DesignSettings;
