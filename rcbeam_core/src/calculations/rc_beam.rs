//! # Reinforced-Concrete Beam Check (ACI 318 Strength Design)
//!
//! Checks a rectangular reinforced-concrete section for flexure and shear
//! and reports capacities, per-criterion verdicts, remediation guidance and
//! an ordered derivation log.
//!
//! ## Assumptions
//!
//! - Rectangular section, kilogram–centimeter units throughout
//! - Required steel from the linear approximation ρ = Rn/fy
//! - ρ_max is the singly-reinforced bound, not raised for compression steel
//! - Compression steel adds an independent As'·fy·(d − d') couple
//! - Shear capacity is concrete only; stirrups are checked for spacing alone
//!
//! A failing criterion is data in the result. Only a structural failure of
//! the computation (non-finite intermediate, invalid settings) is an error.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::calculations::rc_beam::{evaluate, BeamDesignInput, Criterion};
//! use rcbeam_core::materials::{BarSize, ReinforcementSelection};
//!
//! // 30×50 cm, f'c = 240, fy = 4000, Mu = 5500 kg-m, Vu = 3257 kg, 3-DB16
//! let input = BeamDesignInput::default();
//! let result = evaluate(&input).unwrap();
//! assert!(result.design_ok);
//! println!("φMn = {:.0} kg-m", result.phi_mn_kgm);
//!
//! // One bar is not enough
//! let light = input.with_tension(ReinforcementSelection::new(BarSize::Db16, 1));
//! let result = evaluate(&light).unwrap();
//! assert!(!result.design_ok);
//! assert!(result.failed_criteria().contains(&Criterion::TensionSteel));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::calc_log::{CalcLog, Phase};
use crate::equations::registry::{Equation, EquationTracker};
use crate::equations::{flexure, shear};
use crate::errors::{ensure_finite, CalcResult, ComputationError};
use crate::materials::{BarSize, MaterialProperties, ReinforcementSelection, StirrupSelection, StirrupSize};
use crate::settings::DesignSettings;
use crate::units::{Centimeters, KgCm, KgM, Millimeters, NMm};

/// Depth to compression steel centroid when none is given (cm)
pub const DEFAULT_D_PRIME_CM: f64 = 4.0;

/// Section enlargement factor suggested when ρ exceeds ρ_max
pub const ENLARGEMENT_FACTOR: f64 = 1.2;

// ============================================================================
// Input
// ============================================================================

/// Rectangular section dimensions (cm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Width b
    pub b_cm: f64,
    /// Overall height h
    pub h_cm: f64,
    /// Cover to the tension steel centroid
    pub cover_cm: f64,
    /// Effective depth d
    pub d_cm: f64,
    /// Depth to the compression steel centroid d'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d_prime_cm: Option<f64>,
}

impl SectionGeometry {
    /// Section with `d = h − cover`
    pub fn new(b_cm: f64, h_cm: f64, cover_cm: f64) -> Self {
        Self {
            b_cm,
            h_cm,
            cover_cm,
            d_cm: h_cm - cover_cm,
            d_prime_cm: None,
        }
    }

    /// Override the effective depth
    pub fn with_effective_depth(mut self, d_cm: f64) -> Self {
        self.d_cm = d_cm;
        self
    }

    pub fn with_d_prime(mut self, d_prime_cm: f64) -> Self {
        self.d_prime_cm = Some(d_prime_cm);
        self
    }

    /// d', falling back to [`DEFAULT_D_PRIME_CM`]
    pub fn d_prime(&self) -> f64 {
        self.d_prime_cm.unwrap_or(DEFAULT_D_PRIME_CM)
    }
}

/// Factored loads the section must resist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Demand {
    /// Factored moment Mu (kg-m)
    pub mu_kgm: f64,
    /// Factored shear Vu (kg)
    pub vu_kg: f64,
}

impl Demand {
    pub fn new(mu_kgm: f64, vu_kg: f64) -> Self {
        Self { mu_kgm, vu_kg }
    }
}

/// Everything the check needs.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "material": { "fc_kgcm2": 240.0, "fy_kgcm2": 4000.0 },
///   "section": { "b_cm": 30.0, "h_cm": 50.0, "cover_cm": 4.0, "d_cm": 46.0 },
///   "demand": { "mu_kgm": 5500.0, "vu_kg": 3257.0 },
///   "tension": { "size": "DB16", "count": 3 },
///   "has_compression_steel": true,
///   "compression": { "size": "DB16", "count": 2 },
///   "stirrups": { "size": "RB6", "legs": 2, "spacing_cm": 15.0 },
///   "settings": { "phi_b": 0.90, "phi_s": 0.75 }
/// }
/// ```
///
/// `label`, `has_compression_steel`, `compression` and `settings` may be
/// omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDesignInput {
    /// User label (e.g., "B-1")
    #[serde(default)]
    pub label: String,

    pub material: MaterialProperties,

    pub section: SectionGeometry,

    pub demand: Demand,

    /// Tension steel
    pub tension: ReinforcementSelection,

    /// Whether compression steel is part of the design
    #[serde(default)]
    pub has_compression_steel: bool,

    /// Compression steel, used only when `has_compression_steel` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression: Option<ReinforcementSelection>,

    pub stirrups: StirrupSelection,

    /// Strength-reduction factors and code label
    #[serde(default)]
    pub settings: DesignSettings,
}

impl Default for BeamDesignInput {
    /// 30×50 cm beam, f'c = 240, fy = 4000, Mu = 5500 kg-m, Vu = 3257 kg,
    /// 3-DB16 tension steel, RB6 2 legs @ 15 cm
    fn default() -> Self {
        BeamDesignInput {
            label: String::new(),
            material: MaterialProperties::default(),
            section: SectionGeometry::new(30.0, 50.0, 4.0),
            demand: Demand::new(5500.0, 3257.0),
            tension: ReinforcementSelection::new(BarSize::Db16, 3),
            has_compression_steel: false,
            compression: None,
            stirrups: StirrupSelection::new(StirrupSize::Rb6, 2, 15.0),
            settings: DesignSettings::default(),
        }
    }
}

impl BeamDesignInput {
    /// Parse from JSON
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_material(mut self, material: MaterialProperties) -> Self {
        self.material = material;
        self
    }

    pub fn with_section(mut self, section: SectionGeometry) -> Self {
        self.section = section;
        self
    }

    pub fn with_demand(mut self, demand: Demand) -> Self {
        self.demand = demand;
        self
    }

    pub fn with_tension(mut self, tension: ReinforcementSelection) -> Self {
        self.tension = tension;
        self
    }

    /// Enable compression steel
    pub fn with_compression(mut self, compression: ReinforcementSelection) -> Self {
        self.has_compression_steel = true;
        self.compression = Some(compression);
        self
    }

    pub fn with_stirrups(mut self, stirrups: StirrupSelection) -> Self {
        self.stirrups = stirrups;
        self
    }

    pub fn with_settings(mut self, settings: DesignSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Compression steel that actually contributes: enabled with at least one bar
    pub fn effective_compression(&self) -> Option<ReinforcementSelection> {
        if !self.has_compression_steel {
            return None;
        }
        self.compression.filter(|c| c.count > 0)
    }

    /// Reject settings out of range and inputs that are not numbers.
    pub fn validate(&self) -> CalcResult<()> {
        self.settings.validate()?;

        let fields = [
            ("fc", self.material.fc_kgcm2),
            ("fy", self.material.fy_kgcm2),
            ("b", self.section.b_cm),
            ("h", self.section.h_cm),
            ("cover", self.section.cover_cm),
            ("d", self.section.d_cm),
            ("d_prime", self.section.d_prime()),
            ("Mu", self.demand.mu_kgm),
            ("Vu", self.demand.vu_kg),
            ("stirrup spacing", self.stirrups.spacing_cm),
        ];
        for (field, value) in fields {
            ensure_finite(field, value)?;
        }
        Ok(())
    }
}

// ============================================================================
// Verdicts and diagnostics
// ============================================================================

/// Where the required ratio landed relative to the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioStatus {
    WithinBounds,
    /// Raised to ρ_min
    ClampedToMin,
    /// Above ρ_max (not clamped)
    ExceedsMax,
}

impl RatioStatus {
    pub fn describe(&self) -> &'static str {
        match self {
            RatioStatus::WithinBounds => "OK",
            RatioStatus::ClampedToMin => "use rho_min since rho < rho_min",
            RatioStatus::ExceedsMax => "exceeds rho_max - compression steel required",
        }
    }
}

/// Stress-block comparison against 0.75·d. Informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionBehavior {
    UnderReinforced,
    OverReinforced,
}

impl std::fmt::Display for SectionBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionBehavior::UnderReinforced => f.write_str("Under-reinforced"),
            SectionBehavior::OverReinforced => f.write_str("Over-reinforced"),
        }
    }
}

/// The five independent acceptance criteria, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criterion {
    Moment,
    Shear,
    TensionSteel,
    StirrupSpacing,
    RatioBound,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Moment,
        Criterion::Shear,
        Criterion::TensionSteel,
        Criterion::StirrupSpacing,
        Criterion::RatioBound,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Criterion::Moment => "Moment",
            Criterion::Shear => "Shear",
            Criterion::TensionSteel => "Tension steel",
            Criterion::StirrupSpacing => "Stirrup spacing",
            Criterion::RatioBound => "Reinforcement ratio",
        }
    }

    /// Row label with the comparison being made
    pub fn check_label(&self) -> &'static str {
        match self {
            Criterion::Moment => "Moment (φMn ≥ Mu)",
            Criterion::Shear => "Shear (φVc ≥ Vu)",
            Criterion::TensionSteel => "Tension steel (As ≥ As,req)",
            Criterion::StirrupSpacing => "Stirrups (spacing ≤ max)",
            Criterion::RatioBound => "Steel ratio (ρ ≤ ρmax)",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-criterion pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdicts {
    /// φMn ≥ Mu
    pub moment: bool,
    /// φVc ≥ Vu
    pub shear: bool,
    /// As,provided ≥ As,required
    pub tension_steel: bool,
    /// spacing ≤ s_max
    pub stirrup_spacing: bool,
    /// ρ (before the ρ_min clamp) ≤ ρ_max
    pub rho_bound: bool,
}

impl Verdicts {
    pub fn get(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Moment => self.moment,
            Criterion::Shear => self.shear,
            Criterion::TensionSteel => self.tension_steel,
            Criterion::StirrupSpacing => self.stirrup_spacing,
            Criterion::RatioBound => self.rho_bound,
        }
    }

    pub fn all_pass(&self) -> bool {
        Criterion::ALL.iter().all(|c| self.get(*c))
    }

    /// Failing criteria in reporting order
    pub fn failed(&self) -> Vec<Criterion> {
        Criterion::ALL.iter().copied().filter(|c| !self.get(*c)).collect()
    }
}

/// Explanation of one failing criterion. `required` is the demand or limit
/// the `provided` value was compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub criterion: Criterion,
    pub message: String,
    pub provided: f64,
    pub required: f64,
}

/// Concrete fix for a failing criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Remediation {
    /// Larger section, 1.2 × b and 1.2 × h rounded down
    EnlargeSection { b_cm: u32, h_cm: u32 },
    AddCompressionSteel,
    /// Minimum count of the selected bar size that reaches As,required
    IncreaseTensionBars { size: BarSize, count: u32 },
    ReduceStirrupSpacing { max_spacing_cm: f64 },
}

impl Remediation {
    pub fn describe(&self) -> String {
        match self {
            Remediation::EnlargeSection { b_cm, h_cm } => {
                format!("Enlarge the section (suggested b×h = {}×{} cm)", b_cm, h_cm)
            }
            Remediation::AddCompressionSteel => "Add compression steel".to_string(),
            Remediation::IncreaseTensionBars { size, count } => {
                format!("Increase tension steel to {} bars {}", count, size)
            }
            Remediation::ReduceStirrupSpacing { max_spacing_cm } => {
                format!("Reduce stirrup spacing to {:.0} cm or less", max_spacing_cm)
            }
        }
    }
}

// ============================================================================
// Result
// ============================================================================

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDesignResult {
    pub label: String,

    // --- Demand and selections echoed for presentation ---
    pub demand: Demand,
    pub tension: ReinforcementSelection,
    /// Compression steel that contributed, if any
    pub compression: Option<ReinforcementSelection>,
    pub stirrups: StirrupSelection,

    // --- Material factors and ratio bounds ---
    pub beta1: f64,
    pub rho_min: f64,
    pub rho_max: f64,

    // --- Required steel ---
    /// Rn = Mu/(φb·b·d²) (N/mm²)
    pub rn_nmm2: f64,
    /// ρ = Rn/fy before the ρ_min clamp; the basis of the ratio-bound check
    pub rho_demand: f64,
    /// ρ after the ρ_min clamp
    pub rho_required: f64,
    pub ratio_status: RatioStatus,
    pub as_required_cm2: f64,

    // --- Provided steel ---
    pub as_provided_cm2: f64,
    /// As' (zero without effective compression steel)
    pub as_prime_cm2: f64,
    pub d_prime_cm: f64,

    // --- Flexure ---
    /// Stress-block depth a (cm)
    pub a_cm: f64,
    /// 0.75·d (cm)
    pub a_max_cm: f64,
    pub section_behavior: SectionBehavior,
    pub mn_tension_kgcm: f64,
    pub mn_compression_kgcm: f64,
    pub mn_kgm: f64,
    pub phi_mn_kgm: f64,

    // --- Shear and stirrups ---
    pub vc_kg: f64,
    pub phi_vc_kg: f64,
    pub av_cm2: f64,
    pub max_stirrup_spacing_cm: f64,

    // --- Outcome ---
    pub verdicts: Verdicts,
    /// AND of all five verdicts
    pub design_ok: bool,
    pub diagnostics: Vec<Diagnostic>,
    pub remediations: Vec<Remediation>,

    /// Ordered derivation log
    pub log: CalcLog,

    /// Equations applied, in order
    pub equations: EquationTracker,
}

/// One row of the five-criterion summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRow {
    pub criterion: Criterion,
    pub label: String,
    pub provided: String,
    pub required: String,
    pub passed: bool,
}

/// One row of the reinforcement summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelRow {
    /// "Tension", "Compression" or "Stirrups"
    pub kind: String,
    /// Designation and count, `None` when not used
    pub designation: Option<String>,
    pub area_cm2: Option<f64>,
    pub status: String,
}

impl BeamDesignResult {
    /// Failing criteria in reporting order
    pub fn failed_criteria(&self) -> Vec<Criterion> {
        self.verdicts.failed()
    }

    /// First failing criterion, if any
    pub fn governing_criterion(&self) -> Option<Criterion> {
        self.failed_criteria().into_iter().next()
    }

    /// Five-row summary: what was provided, what it was compared against, pass/fail
    pub fn check_rows(&self) -> Vec<CheckRow> {
        Criterion::ALL
            .iter()
            .map(|&criterion| {
                let (provided, required) = match criterion {
                    Criterion::Moment => (
                        format!("{} kg-m", grouped(self.phi_mn_kgm)),
                        format!("{} kg-m", grouped(self.demand.mu_kgm)),
                    ),
                    Criterion::Shear => (
                        format!("{} kg", grouped(self.phi_vc_kg)),
                        format!("{} kg", grouped(self.demand.vu_kg)),
                    ),
                    Criterion::TensionSteel => (
                        format!("{:.2} cm²", self.as_provided_cm2),
                        format!("{:.2} cm²", self.as_required_cm2),
                    ),
                    Criterion::StirrupSpacing => (
                        format!("{} cm", self.stirrups.spacing_cm),
                        format!("{:.0} cm", self.max_stirrup_spacing_cm),
                    ),
                    Criterion::RatioBound => {
                        (format!("{:.4}", self.rho_demand), format!("{:.4}", self.rho_max))
                    }
                };
                CheckRow {
                    criterion,
                    label: criterion.check_label().to_string(),
                    provided,
                    required,
                    passed: self.verdicts.get(criterion),
                }
            })
            .collect()
    }

    /// Tension, compression and stirrup rows
    pub fn steel_summary(&self) -> Vec<SteelRow> {
        let adequacy = |ok: bool| (if ok { "Adequate" } else { "Inadequate" }).to_string();

        let compression = match self.compression {
            Some(sel) => SteelRow {
                kind: "Compression".to_string(),
                designation: Some(sel.label()),
                area_cm2: Some(self.as_prime_cm2),
                status: "As selected".to_string(),
            },
            None => SteelRow {
                kind: "Compression".to_string(),
                designation: None,
                area_cm2: None,
                status: "-".to_string(),
            },
        };

        vec![
            SteelRow {
                kind: "Tension".to_string(),
                designation: Some(self.tension.label()),
                area_cm2: Some(self.as_provided_cm2),
                status: adequacy(self.verdicts.tension_steel),
            },
            compression,
            SteelRow {
                kind: "Stirrups".to_string(),
                designation: Some(self.stirrups.label()),
                area_cm2: Some(self.av_cm2),
                status: adequacy(self.verdicts.stirrup_spacing),
            },
        ]
    }

    /// Unique equations applied, in first-use order
    pub fn equations_used(&self) -> Vec<Equation> {
        self.equations.unique_equations()
    }
}

/// Presentation wrapper that always carries a log, even when the
/// computation itself failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    pub design_ok: bool,
    pub log: CalcLog,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<BeamDesignResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ComputationError>,
}

impl DesignReport {
    fn from_result(result: BeamDesignResult) -> Self {
        DesignReport {
            design_ok: result.design_ok,
            log: result.log.clone(),
            result: Some(result),
            error: None,
        }
    }

    fn from_error(error: ComputationError, mut log: CalcLog) -> Self {
        log.step(format!("ERROR: {}", error));
        DesignReport {
            design_ok: false,
            log,
            result: None,
            error: Some(error),
        }
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Run the beam check.
///
/// All five criteria are always evaluated; failures are reported in the
/// result. Returns `Err` only when the computation cannot be carried out
/// (e.g., `b = 0` makes Rn non-finite).
pub fn evaluate(input: &BeamDesignInput) -> CalcResult<BeamDesignResult> {
    let mut log = CalcLog::new();
    run(input, &mut log).inspect_err(log_abort)
}

/// Run the beam check for presentation. Never fails: a computation error
/// yields `design_ok = false`, no result, the error, and the partial log
/// ending with the error line.
///
/// ```rust
/// use rcbeam_core::calculations::rc_beam::{evaluate_report, BeamDesignInput, SectionGeometry};
///
/// let input = BeamDesignInput::default().with_section(SectionGeometry::new(0.0, 50.0, 4.0));
/// let report = evaluate_report(&input);
/// assert!(!report.design_ok);
/// assert!(report.error.is_some());
/// assert!(report.log.lines().last().unwrap().starts_with("ERROR:"));
/// ```
pub fn evaluate_report(input: &BeamDesignInput) -> DesignReport {
    let mut log = CalcLog::new();
    match run(input, &mut log) {
        Ok(result) => DesignReport::from_result(result),
        Err(error) => {
            log_abort(&error);
            DesignReport::from_error(error, log)
        }
    }
}

fn log_abort(error: &ComputationError) {
    warn!(code = error.error_code(), %error, "beam evaluation aborted");
}

fn run(input: &BeamDesignInput, log: &mut CalcLog) -> CalcResult<BeamDesignResult> {
    input.validate()?;

    let mut tracker = EquationTracker::new();
    let settings = &input.settings;
    let (phi_b, phi_s) = (settings.phi_b, settings.phi_s);
    let fc = input.material.fc_kgcm2;
    let fy = input.material.fy_kgcm2;
    let section = &input.section;
    let (b, h, d) = (section.b_cm, section.h_cm, section.d_cm);
    let Demand { mu_kgm: mu, vu_kg: vu } = input.demand;

    // === Inputs ===
    log.begin(Phase::Inputs);
    log.step(format!("Design code: {}", settings.code));
    log.step(format!("Materials: f'c = {} kg/cm², fy = {} kg/cm²", fc, fy));
    log.step(format!("Section: b = {} cm, h = {} cm, d = {} cm", b, h, d));
    log.step(format!("Demand: Mu = {} kg-m, Vu = {} kg", grouped(mu), grouped(vu)));

    let beta1 = ensure_finite("beta1", flexure::beta1(fc))?;
    tracker.record(Equation::Beta1, format!("f'c = {}", fc));
    log.step(format!("β1 = {:.3}", beta1));

    // === Ratio bounds ===
    log.begin(Phase::RatioBounds);
    let rho_min = ensure_finite("rho_min", flexure::rho_min(fc, fy))?;
    let rho_max = ensure_finite("rho_max", flexure::rho_max(fc, fy, beta1))?;
    tracker.record(Equation::RhoMin, "ratio bounds");
    tracker.record(Equation::RhoMax, "ratio bounds");
    log.step(format!("rho_min = max(1.4/fy, 0.8√f'c/fy) = {:.4}", rho_min));
    log.step(format!("rho_max = 0.75 × 0.85 f'c/fy × β1/(1+β1) = {:.4}", rho_max));
    debug!(beta1, rho_min, rho_max, "ratio bounds");

    // === Required steel ===
    log.begin(Phase::RequiredSteel);
    let mu_nmm = NMm::from(KgM(mu)).value();
    let b_mm = Millimeters::from(Centimeters(b)).value();
    let d_mm = Millimeters::from(Centimeters(d)).value();
    tracker.record(Equation::MomentUnitConversion, "Mu");
    log.step(format!("Unit conversion: Mu = {} kg-m = {} N-mm", grouped(mu), grouped(mu_nmm)));

    let rn = ensure_finite("Rn", flexure::nominal_resistance_coefficient(mu_nmm, phi_b, b_mm, d_mm))?;
    tracker.record(Equation::NominalResistanceCoefficient, "required steel");
    log.step(format!(
        "Rn = Mu/(φ b d²) = {}/({}×{}×{}²) = {:.2} N/mm²",
        grouped(mu_nmm),
        phi_b,
        b_mm,
        d_mm,
        rn
    ));

    let rho_demand = ensure_finite("rho_required", flexure::rho_from_rn(rn, fy))?;
    tracker.record(Equation::RequiredRatio, "required steel");
    log.step(format!("rho_required = Rn/fy = {:.2}/{} = {:.6}", rn, fy, rho_demand));

    let mut as_required = ensure_finite("As_required", flexure::steel_area_from_ratio(rho_demand, b, d))?;
    tracker.record(Equation::RequiredSteelArea, "rho_required");
    log.step(format!("As,required = {:.2} cm²", as_required));

    let (ratio_status, rho_required) = if rho_demand < rho_min {
        as_required = flexure::steel_area_from_ratio(rho_min, b, d);
        tracker.record(Equation::RequiredSteelArea, "rho_min");
        log.step(format!("rho_required = {:.6} < rho_min = {:.4}", rho_demand, rho_min));
        log.step(format!("Use rho = rho_min = {:.4}", rho_min));
        log.step(format!(
            "As,required = rho_min b d = {:.4}×{}×{} = {:.2} cm²",
            rho_min, b, d, as_required
        ));
        (RatioStatus::ClampedToMin, rho_min)
    } else if rho_demand > rho_max {
        (RatioStatus::ExceedsMax, rho_demand)
    } else {
        (RatioStatus::WithinBounds, rho_demand)
    };
    log.step(format!(
        "Check: rho_min = {:.4} ≤ rho = {:.4} ≤ rho_max = {:.4} → {}",
        rho_min,
        rho_required,
        rho_max,
        ratio_status.describe()
    ));
    debug!(rn, rho_demand, rho_required, ?ratio_status, as_required, "required steel");

    // === Tension steel ===
    log.begin(Phase::TensionSteel);
    let as_provided = input.tension.area_cm2();
    let tension_ok = as_provided >= as_required;
    log.step(format!("Selected: {} bars {}", input.tension.count, input.tension.size));
    log.step(format!("As,provided = {:.2} cm²", as_provided));
    log.step(format!(
        "Check: As,provided = {:.2} {} As,required = {:.2} cm² → {}",
        as_provided,
        if tension_ok { "≥" } else { "<" },
        as_required,
        pass_text(tension_ok)
    ));

    // === Compression steel ===
    let compression = input.effective_compression();
    let d_prime = section.d_prime();
    let as_prime = match compression {
        Some(sel) => {
            log.begin(Phase::CompressionSteel);
            log.step(format!("Selected: {} bars {}", sel.count, sel.size));
            log.step(format!("As' = {:.2} cm², d' = {} cm", sel.area_cm2(), d_prime));
            sel.area_cm2()
        }
        None => 0.0,
    };

    // === Moment capacity ===
    log.begin(Phase::MomentCapacity);
    let a = ensure_finite("a", flexure::stress_block_depth(as_provided, fy, fc, b))?;
    tracker.record(Equation::StressBlockDepth, input.tension.label());
    log.step(format!(
        "a = As fy/(0.85 f'c b) = {:.3}×{}/(0.85×{}×{}) = {:.2} cm",
        as_provided, fy, fc, b, a
    ));

    let a_max = flexure::max_stress_block_depth(d);
    let section_behavior = if a <= a_max {
        SectionBehavior::UnderReinforced
    } else {
        SectionBehavior::OverReinforced
    };
    tracker.record(Equation::StressBlockLimit, "section behavior");
    log.step(format!(
        "Check a = {:.2} cm {} 0.75d = {:.2} cm → {}",
        a,
        if a <= a_max { "≤" } else { ">" },
        a_max,
        section_behavior
    ));

    let mn_tension = ensure_finite("Mn_tension", flexure::tension_moment_kgcm(as_provided, fy, d, a))?;
    tracker.record(Equation::TensionSteelMoment, input.tension.label());
    log.step(format!(
        "Mn,tension = As fy (d - a/2) = {:.3}×{}×({}-{:.2}/2) = {} kg-cm",
        as_provided,
        fy,
        d,
        a,
        grouped(mn_tension)
    ));

    let mn_compression = if compression.is_some() {
        let m = ensure_finite("Mn_compression", flexure::compression_moment_kgcm(as_prime, fy, d, d_prime))?;
        tracker.record(Equation::CompressionSteelMoment, "compression steel");
        log.step(format!(
            "Mn,compression = As' fy (d - d') = {:.2}×{}×({}-{}) = {} kg-cm",
            as_prime,
            fy,
            d,
            d_prime,
            grouped(m)
        ));
        m
    } else {
        0.0
    };

    let mn_total_kgcm = mn_tension + mn_compression;
    let mn = ensure_finite("Mn", KgM::from(KgCm(mn_total_kgcm)).value())?;
    let phi_mn = phi_b * mn;
    let moment_ok = phi_mn >= mu;
    tracker.record(Equation::DesignMoment, "moment check");
    log.step(format!(
        "Mn,total = {} + {} = {} kg-cm",
        grouped(mn_tension),
        grouped(mn_compression),
        grouped(mn_total_kgcm)
    ));
    log.step(format!("Mn = {}/100 = {} kg-m", grouped(mn_total_kgcm), grouped(mn)));
    log.step(format!("φMn = {}×{} = {} kg-m", phi_b, grouped(mn), grouped(phi_mn)));
    log.step(format!(
        "Check: φMn = {} {} Mu = {} kg-m → {}",
        grouped(phi_mn),
        if moment_ok { "≥" } else { "<" },
        grouped(mu),
        pass_text(moment_ok)
    ));
    debug!(a, ?section_behavior, mn_tension, mn_compression, mn, phi_mn, "moment capacity");

    // === Shear capacity ===
    log.begin(Phase::ShearCapacity);
    let vc = ensure_finite("Vc", shear::concrete_shear_capacity(fc, b, d))?;
    let phi_vc = phi_s * vc;
    let shear_ok = phi_vc >= vu;
    tracker.record(Equation::ConcreteShearCapacity, "shear check");
    log.step(format!("Vc = 0.53√f'c b d = 0.53√{}×{}×{} = {} kg", fc, b, d, grouped(vc)));
    log.step(format!("φVc = {}×{} = {} kg", phi_s, grouped(vc), grouped(phi_vc)));
    log.step(format!(
        "Check: φVc = {} {} Vu = {} kg → {}",
        grouped(phi_vc),
        if shear_ok { "≥" } else { "<" },
        grouped(vu),
        pass_text(shear_ok)
    ));
    debug!(vc, phi_vc, "shear capacity");

    // === Stirrups ===
    log.begin(Phase::Stirrups);
    let stirrups = input.stirrups;
    let av = shear::stirrup_area(stirrups.size.area_cm2(), stirrups.legs);
    let s_max = shear::max_stirrup_spacing(d);
    let stirrup_ok = stirrups.spacing_cm <= s_max;
    tracker.record(Equation::StirrupArea, stirrups.label());
    tracker.record(Equation::MaxStirrupSpacing, "stirrup spacing");
    log.step(format!("Selected: {} with {} legs", stirrups.size, stirrups.legs));
    log.step(format!("Av = {:.3} cm²", av));
    log.step(format!("Spacing = {} cm", stirrups.spacing_cm));
    log.step(format!("Maximum spacing = min(d/2, 60) = {:.0} cm", s_max));
    log.step(format!(
        "Check: {} {} {:.0} cm → {}",
        stirrups.spacing_cm,
        if stirrup_ok { "≤" } else { ">" },
        s_max,
        pass_text(stirrup_ok)
    ));

    // === Summary ===
    let verdicts = Verdicts {
        moment: moment_ok,
        shear: shear_ok,
        tension_steel: tension_ok,
        stirrup_spacing: stirrup_ok,
        rho_bound: rho_demand <= rho_max,
    };
    let design_ok = verdicts.all_pass();

    log.begin(Phase::Summary);
    let mut diagnostics = Vec::new();
    let mut remediations = Vec::new();

    for criterion in verdicts.failed() {
        let diagnostic = match criterion {
            Criterion::Moment => Diagnostic {
                criterion,
                message: format!("Moment: φMn = {} < Mu = {} kg-m", grouped(phi_mn), grouped(mu)),
                provided: phi_mn,
                required: mu,
            },
            Criterion::Shear => Diagnostic {
                criterion,
                message: format!("Shear: φVc = {} < Vu = {} kg", grouped(phi_vc), grouped(vu)),
                provided: phi_vc,
                required: vu,
            },
            Criterion::TensionSteel => Diagnostic {
                criterion,
                message: format!(
                    "Tension steel insufficient: As = {:.2} < {:.2} cm² (short {:.2} cm²)",
                    as_provided,
                    as_required,
                    as_required - as_provided
                ),
                provided: as_provided,
                required: as_required,
            },
            Criterion::StirrupSpacing => Diagnostic {
                criterion,
                message: format!("Stirrups: spacing {} > {:.0} cm", stirrups.spacing_cm, s_max),
                provided: stirrups.spacing_cm,
                required: s_max,
            },
            Criterion::RatioBound => Diagnostic {
                criterion,
                message: format!(
                    "rho exceeds limit: rho = {:.4} > rho_max = {:.4} ({:.1}% over)",
                    rho_demand,
                    rho_max,
                    (rho_demand / rho_max - 1.0) * 100.0
                ),
                provided: rho_demand,
                required: rho_max,
            },
        };
        diagnostics.push(diagnostic);
    }

    if !verdicts.rho_bound {
        remediations.push(Remediation::EnlargeSection {
            b_cm: floor_cm(ENLARGEMENT_FACTOR * b),
            h_cm: floor_cm(ENLARGEMENT_FACTOR * h),
        });
        remediations.push(Remediation::AddCompressionSteel);
    }
    if !verdicts.tension_steel {
        let count = flexure::bars_required(as_required, input.tension.size.area_cm2());
        tracker.record(Equation::BarsRequired, "tension remediation");
        remediations.push(Remediation::IncreaseTensionBars {
            size: input.tension.size,
            count,
        });
    }
    if !verdicts.stirrup_spacing {
        remediations.push(Remediation::ReduceStirrupSpacing { max_spacing_cm: s_max });
    }

    if diagnostics.is_empty() {
        log.step("All checks pass");
    } else {
        log.step("Problems found:");
        for diagnostic in &diagnostics {
            log.step(format!("  ✗ {}", diagnostic.message));
        }
        if !remediations.is_empty() {
            log.step("Suggested fixes:");
            for (i, remedy) in remediations.iter().enumerate() {
                log.step(format!("  {}. {}", i + 1, remedy.describe()));
            }
        }
    }
    log.step(format!("Design: {}", if design_ok { "OK" } else { "NOT OK" }));
    debug!(?verdicts, design_ok, "beam evaluation complete");

    Ok(BeamDesignResult {
        label: input.label.clone(),
        demand: input.demand,
        tension: input.tension,
        compression,
        stirrups,
        beta1,
        rho_min,
        rho_max,
        rn_nmm2: rn,
        rho_demand,
        rho_required,
        ratio_status,
        as_required_cm2: as_required,
        as_provided_cm2: as_provided,
        as_prime_cm2: as_prime,
        d_prime_cm: d_prime,
        a_cm: a,
        a_max_cm: a_max,
        section_behavior,
        mn_tension_kgcm: mn_tension,
        mn_compression_kgcm: mn_compression,
        mn_kgm: mn,
        phi_mn_kgm: phi_mn,
        vc_kg: vc,
        phi_vc_kg: phi_vc,
        av_cm2: av,
        max_stirrup_spacing_cm: s_max,
        verdicts,
        design_ok,
        diagnostics,
        remediations,
        log: std::mem::take(log),
        equations: tracker,
    })
}

fn pass_text(ok: bool) -> &'static str {
    if ok {
        "PASS"
    } else {
        "FAIL"
    }
}

/// Whole centimeters, rounded down; zero for negative or non-finite values
fn floor_cm(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u32
    } else {
        0
    }
}

/// Round to an integer and group thousands with commas
fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
