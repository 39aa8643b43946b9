//! # Equation Registry
//!
//! Central registry of every formula the beam check applies. Each equation
//! carries metadata (code reference, plain-text formula, variables and
//! known simplifications) so reports can cite what was used.
//!
//! ## Usage
//!
//! ```rust
//! use rcbeam_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::StressBlockDepth, "Tension steel 3-DB16");
//!
//! let meta = Equation::StressBlockDepth.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! assert_eq!(tracker.unique_equations(), vec![Equation::StressBlockDepth]);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a structural engineering code or standard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// ACI 318 - Building Code Requirements for Structural Concrete
    ACI318 {
        year: u16,
        section: &'static str,
    },
    /// Unit conversion or arithmetic bookkeeping
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::ACI318 { year, section } => {
                format!("ACI 318-{} Section {}", year % 100, section)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::ACI318 { .. } => "ACI 318",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

const ACI_YEAR: u16 = 2019;

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Stress-block factor and other material-derived factors
    MaterialFactors,
    /// Reinforcement ratio limits
    ReinforcementLimits,
    /// Required steel from factored moment
    RequiredSteel,
    /// Nominal and design moment capacity
    Flexure,
    /// Concrete shear capacity
    Shear,
    /// Stirrup detailing
    Detailing,
    /// Pass/fail comparisons and remediation
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::MaterialFactors => "Material Factors",
            EquationCategory::ReinforcementLimits => "Reinforcement Limits",
            EquationCategory::RequiredSteel => "Required Steel",
            EquationCategory::Flexure => "Flexure",
            EquationCategory::Shear => "Shear",
            EquationCategory::Detailing => "Detailing",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order for the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::MaterialFactors => 1,
            EquationCategory::ReinforcementLimits => 2,
            EquationCategory::RequiredSteel => 3,
            EquationCategory::Flexure => 4,
            EquationCategory::Shear => 5,
            EquationCategory::Detailing => 6,
            EquationCategory::DesignChecks => 7,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "fc", "As")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "kg/cm²", "cm")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one formula.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All formulas applied by the beam check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// β1 clamped linear de-rating
    Beta1,
    /// ρ_min = max(1.4/fy, 0.8√f'c/fy)
    RhoMin,
    /// ρ_max = 0.75(0.85f'c/fy)(β1/(1+β1))
    RhoMax,
    /// Mu (kg-m) → N-mm
    MomentUnitConversion,
    /// Rn = Mu/(φb·b·d²)
    NominalResistanceCoefficient,
    /// ρ = Rn/fy
    RequiredRatio,
    /// As = ρ·b·d
    RequiredSteelArea,
    /// a = As·fy/(0.85f'c·b)
    StressBlockDepth,
    /// a ≤ 0.75d
    StressBlockLimit,
    /// Mn,t = As·fy(d − a/2)
    TensionSteelMoment,
    /// Mn,c = As'·fy(d − d')
    CompressionSteelMoment,
    /// Mn = (Mn,t + Mn,c)/100, φMn
    DesignMoment,
    /// Vc = 0.53√f'c·b·d, φVc
    ConcreteShearCapacity,
    /// Av = A_leg·legs
    StirrupArea,
    /// s_max = min(d/2, 60)
    MaxStirrupSpacing,
    /// n = ⌈As,req/A_bar⌉
    BarsRequired,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::Beta1 => EquationMetadata {
                name: "Stress-Block Depth Factor",
                description: "Ratio of equivalent stress-block depth to neutral-axis depth",
                formula_plain: "beta1 = 0.85 if f'c <= 280, else max(0.65, 0.85 - 0.05(f'c - 280)/70)",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "22.2.2.4.3" },
                variables: vec![
                    Variable::new("beta1", "Stress-block depth factor", "-"),
                    Variable::new("f'c", "Concrete compressive strength", "kg/cm²"),
                ],
                assumptions: vec!["Never below 0.65"],
                category: EquationCategory::MaterialFactors,
                source_module: "equations/flexure.rs",
                source_function: "beta1",
            },

            Equation::RhoMin => EquationMetadata {
                name: "Minimum Reinforcement Ratio",
                description: "Lower bound on tension steel ratio",
                formula_plain: "rho_min = max(1.4/fy, 0.8*sqrt(f'c)/fy)",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "9.6.1.2" },
                variables: vec![
                    Variable::new("rho_min", "Minimum tension steel ratio", "-"),
                    Variable::new("fy", "Steel yield strength", "kg/cm²"),
                ],
                assumptions: vec!["Required ratio below this is raised to rho_min"],
                category: EquationCategory::ReinforcementLimits,
                source_module: "equations/flexure.rs",
                source_function: "rho_min",
            },

            Equation::RhoMax => EquationMetadata {
                name: "Maximum Reinforcement Ratio",
                description: "Upper bound on tension steel ratio for a singly-reinforced section",
                formula_plain: "rho_max = 0.75 * (0.85 f'c/fy) * (beta1/(1 + beta1))",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "9.3.3.1" },
                variables: vec![
                    Variable::new("rho_max", "Maximum tension steel ratio", "-"),
                    Variable::new("beta1", "Stress-block depth factor", "-"),
                ],
                assumptions: vec![
                    "Not increased when compression steel is provided (known simplification)",
                    "Compared against the required ratio before the rho_min clamp",
                ],
                category: EquationCategory::ReinforcementLimits,
                source_module: "equations/flexure.rs",
                source_function: "rho_max",
            },

            Equation::MomentUnitConversion => EquationMetadata {
                name: "Moment Unit Conversion",
                description: "Factored moment from kg-m to N-mm",
                formula_plain: "Mu[N-mm] = Mu[kg-m] * 9.81 * 1000",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("Mu", "Factored moment", "kg-m, N-mm")],
                assumptions: vec!["g = 9.81 m/s²"],
                category: EquationCategory::RequiredSteel,
                source_module: "units.rs",
                source_function: "From<KgM> for NMm",
            },

            Equation::NominalResistanceCoefficient => EquationMetadata {
                name: "Nominal Resistance Coefficient",
                description: "Moment demand normalized by section size",
                formula_plain: "Rn = Mu / (phi_b * b * d^2)",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "22.2" },
                variables: vec![
                    Variable::new("Rn", "Nominal resistance coefficient", "N/mm²"),
                    Variable::new("phi_b", "Flexure strength-reduction factor", "-"),
                    Variable::new("b", "Section width", "mm"),
                    Variable::new("d", "Effective depth", "mm"),
                ],
                assumptions: vec!["b and d converted from cm to mm"],
                category: EquationCategory::RequiredSteel,
                source_module: "equations/flexure.rs",
                source_function: "nominal_resistance_coefficient",
            },

            Equation::RequiredRatio => EquationMetadata {
                name: "Required Reinforcement Ratio",
                description: "Tension steel ratio needed for the factored moment",
                formula_plain: "rho_required = Rn / fy",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("rho_required", "Required tension steel ratio", "-"),
                    Variable::new("Rn", "Nominal resistance coefficient", "N/mm²"),
                ],
                assumptions: vec!["Linear single-reinforced approximation, not the quadratic flexure solution"],
                category: EquationCategory::RequiredSteel,
                source_module: "equations/flexure.rs",
                source_function: "rho_from_rn",
            },

            Equation::RequiredSteelArea => EquationMetadata {
                name: "Required Steel Area",
                description: "Tension steel area for the governing ratio",
                formula_plain: "As_required = rho * b * d",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("As_required", "Required tension steel area", "cm²"),
                    Variable::new("b", "Section width", "cm"),
                    Variable::new("d", "Effective depth", "cm"),
                ],
                assumptions: vec!["rho is the clamped ratio when rho_required < rho_min"],
                category: EquationCategory::RequiredSteel,
                source_module: "equations/flexure.rs",
                source_function: "steel_area_from_ratio",
            },

            Equation::StressBlockDepth => EquationMetadata {
                name: "Stress-Block Depth",
                description: "Depth of the equivalent rectangular compression block",
                formula_plain: "a = As * fy / (0.85 * f'c * b)",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "22.2.2.4.1" },
                variables: vec![
                    Variable::new("a", "Stress-block depth", "cm"),
                    Variable::new("As", "Provided tension steel area", "cm²"),
                ],
                assumptions: vec!["Tension steel yields", "Compression steel area is not subtracted"],
                category: EquationCategory::Flexure,
                source_module: "equations/flexure.rs",
                source_function: "stress_block_depth",
            },

            Equation::StressBlockLimit => EquationMetadata {
                name: "Under-Reinforced Limit",
                description: "Stress-block depth limit for an under-reinforced section",
                formula_plain: "a <= 0.75 * d",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("d", "Effective depth", "cm")],
                assumptions: vec!["Informational; does not affect the overall verdict"],
                category: EquationCategory::Flexure,
                source_module: "equations/flexure.rs",
                source_function: "max_stress_block_depth",
            },

            Equation::TensionSteelMoment => EquationMetadata {
                name: "Tension Steel Moment",
                description: "Nominal moment from the tension steel and concrete block couple",
                formula_plain: "Mn_tension = As * fy * (d - a/2)",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "22.2" },
                variables: vec![Variable::new("Mn_tension", "Tension couple moment", "kg-cm")],
                assumptions: vec!["Rectangular section", "Tension steel yields"],
                category: EquationCategory::Flexure,
                source_module: "equations/flexure.rs",
                source_function: "tension_moment_kgcm",
            },

            Equation::CompressionSteelMoment => EquationMetadata {
                name: "Compression Steel Moment",
                description: "Nominal moment from the compression steel couple",
                formula_plain: "Mn_compression = As' * fy * (d - d')",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("As'", "Compression steel area", "cm²"),
                    Variable::new("d'", "Depth to compression steel centroid", "cm"),
                ],
                assumptions: vec![
                    "Compression steel assumed to yield",
                    "Added to the tension couple independently (not the textbook doubly-reinforced derivation)",
                ],
                category: EquationCategory::Flexure,
                source_module: "equations/flexure.rs",
                source_function: "compression_moment_kgcm",
            },

            Equation::DesignMoment => EquationMetadata {
                name: "Design Moment Strength",
                description: "Nominal moment in kg-m and its reduced design value",
                formula_plain: "Mn = (Mn_tension + Mn_compression) / 100; phi_Mn = phi_b * Mn >= Mu",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "21.2.1" },
                variables: vec![
                    Variable::new("Mn", "Nominal moment strength", "kg-m"),
                    Variable::new("phi_b", "Flexure strength-reduction factor (0.90)", "-"),
                ],
                assumptions: vec!["Tension-controlled section"],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/rc_beam.rs",
                source_function: "evaluate",
            },

            Equation::ConcreteShearCapacity => EquationMetadata {
                name: "Concrete Shear Capacity",
                description: "Nominal shear carried by concrete and its reduced design value",
                formula_plain: "Vc = 0.53 * sqrt(f'c) * b * d; phi_Vc = phi_s * Vc >= Vu",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "22.5.5.1" },
                variables: vec![
                    Variable::new("Vc", "Nominal concrete shear strength", "kg"),
                    Variable::new("phi_s", "Shear strength-reduction factor (0.75)", "-"),
                ],
                assumptions: vec![
                    "Normal-weight concrete",
                    "Stirrup contribution Vs is not included in the check",
                ],
                category: EquationCategory::Shear,
                source_module: "equations/shear.rs",
                source_function: "concrete_shear_capacity",
            },

            Equation::StirrupArea => EquationMetadata {
                name: "Stirrup Area",
                description: "Shear reinforcement area crossing one spacing",
                formula_plain: "Av = A_leg * legs",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("Av", "Shear reinforcement area", "cm²")],
                assumptions: vec!["Reported only; not compared with a required Av"],
                category: EquationCategory::Detailing,
                source_module: "equations/shear.rs",
                source_function: "stirrup_area",
            },

            Equation::MaxStirrupSpacing => EquationMetadata {
                name: "Maximum Stirrup Spacing",
                description: "Largest permitted stirrup spacing",
                formula_plain: "s_max = min(d/2, 60 cm)",
                reference: CodeReference::ACI318 { year: ACI_YEAR, section: "9.7.6.2.2" },
                variables: vec![Variable::new("s_max", "Maximum stirrup spacing", "cm")],
                assumptions: vec!["Non-prestressed member"],
                category: EquationCategory::Detailing,
                source_module: "equations/shear.rs",
                source_function: "max_stirrup_spacing",
            },

            Equation::BarsRequired => EquationMetadata {
                name: "Bars Required",
                description: "Minimum count of the selected bar size to reach the required area",
                formula_plain: "n = ceil(As_required / A_bar)",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("A_bar", "Area of one bar", "cm²")],
                assumptions: vec!["Same bar size as the current selection"],
                category: EquationCategory::DesignChecks,
                source_module: "equations/flexure.rs",
                source_function: "bars_required",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in document order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![
            MaterialFactors,
            ReinforcementLimits,
            RequiredSteel,
            Flexure,
            Shear,
            Detailing,
            DesignChecks,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::Beta1,
    Equation::RhoMin,
    Equation::RhoMax,
    Equation::MomentUnitConversion,
    Equation::NominalResistanceCoefficient,
    Equation::RequiredRatio,
    Equation::RequiredSteelArea,
    Equation::StressBlockDepth,
    Equation::StressBlockLimit,
    Equation::TensionSteelMoment,
    Equation::CompressionSteelMoment,
    Equation::DesignMoment,
    Equation::ConcreteShearCapacity,
    Equation::StirrupArea,
    Equation::MaxStirrupSpacing,
    Equation::BarsRequired,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where/why it was used (e.g., "Tension steel 3-DB16")
    pub context: String,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used, in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group usages by equation
    pub fn by_equation(&self) -> HashMap<Equation, Vec<&EquationUsage>> {
        let mut map: HashMap<Equation, Vec<&EquationUsage>> = HashMap::new();
        for usage in &self.usages {
            map.entry(usage.equation).or_default().push(usage);
        }
        map
    }

    /// Group unique equations by category, categories in document order
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the full equation reference as markdown.
///
/// ```rust
/// use rcbeam_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("RC Beam Check Equations Reference"));
/// assert!(markdown.contains("Reinforcement Limits"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# RC Beam Check Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Every formula applied by the reinforced-concrete beam check (ACI 318 Strength
Design Method). Units are kilograms and centimeters unless noted.

---

"#,
    );

    for category in Equation::all_categories() {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str(&format!(
                "**Source:** `{}` → `{}`\n\n",
                meta.source_module, meta.source_function
            ));
        }

        output.push_str("---\n\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "{:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "{:?} has no formula", eq);
            assert!(!meta.source_module.is_empty(), "{:?} has no source module", eq);
        }
    }

    #[test]
    fn test_code_reference_citation() {
        let r = CodeReference::ACI318 { year: 2019, section: "22.5.5.1" };
        assert_eq!(r.citation(), "ACI 318-19 Section 22.5.5.1");
        assert_eq!(r.short_form(), "ACI 318");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::RhoMin, "bounds");
        tracker.record(Equation::RhoMax, "bounds");
        tracker.record(Equation::RhoMin, "clamp");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(tracker.unique_equations(), vec![Equation::RhoMin, Equation::RhoMax]);
        assert_eq!(tracker.by_equation()[&Equation::RhoMin].len(), 2);
    }

    #[test]
    fn test_by_category_sorted() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::ConcreteShearCapacity, "shear");
        tracker.record(Equation::Beta1, "inputs");

        let cats: Vec<_> = tracker.by_category().into_iter().map(|(c, _)| c).collect();
        assert_eq!(cats, vec![EquationCategory::MaterialFactors, EquationCategory::Shear]);
    }

    #[test]
    fn test_every_category_populated() {
        for cat in Equation::all_categories() {
            assert!(!Equation::in_category(cat).is_empty(), "{:?} empty", cat);
        }
    }

    #[test]
    fn test_markdown_lists_simplifications() {
        let md = generate_equations_markdown();
        assert!(md.contains("Stirrup contribution Vs is not included"));
        assert!(md.contains("Not increased when compression steel is provided"));
        for eq in ALL_EQUATIONS {
            assert!(md.contains(eq.metadata().name));
        }
    }
}
