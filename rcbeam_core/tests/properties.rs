//! Property-based tests for the beam check using proptest.
//!
//! Covers: ratio bounds over realistic materials, the ρ_min clamp,
//! monotonicity in tension bar count, and the overall verdict.

use proptest::prelude::*;
use rcbeam_core::calculations::rc_beam::RatioStatus;
use rcbeam_core::equations::flexure;
use rcbeam_core::{
    evaluate, BarSize, BeamDesignInput, Demand, MaterialProperties, ReinforcementSelection,
    SectionGeometry, StirrupSelection, StirrupSize,
};

fn bar_size() -> impl Strategy<Value = BarSize> {
    prop::sample::select(BarSize::ALL.to_vec())
}

fn stirrup_size() -> impl Strategy<Value = StirrupSize> {
    prop::sample::select(StirrupSize::ALL.to_vec())
}

/// Inputs within the ranges a design form accepts
fn realistic_input() -> impl Strategy<Value = BeamDesignInput> {
    (
        (150.0f64..500.0, 2400.0f64..4200.0),
        (20.0f64..100.0, 30.0f64..150.0, 2.0f64..8.0),
        (1000.0f64..50_000.0, 1000.0f64..20_000.0),
        (bar_size(), 1u32..10),
        (stirrup_size(), 2u32..6, 5.0f64..30.0),
    )
        .prop_map(|((fc, fy), (b, h, cover), (mu, vu), (bar, count), (st, legs, s))| {
            BeamDesignInput::default()
                .with_material(MaterialProperties::new(fc, fy))
                .with_section(SectionGeometry::new(b, h, cover))
                .with_demand(Demand::new(mu, vu))
                .with_tension(ReinforcementSelection::new(bar, count))
                .with_stirrups(StirrupSelection::new(st, legs, s))
        })
}

// ── Ratio Bounds ─────────────────────────────────────────────────────

proptest! {
    /// ρ_min never exceeds ρ_max for construction-grade materials.
    #[test]
    fn rho_min_below_rho_max(fc in 150.0f64..500.0, fy in 2400.0f64..4200.0) {
        let b1 = flexure::beta1(fc);
        prop_assert!(flexure::rho_min(fc, fy) <= flexure::rho_max(fc, fy, b1));
    }

    /// β1 stays within [0.65, 0.85].
    #[test]
    fn beta1_bounded(fc in 1.0f64..2000.0) {
        let b1 = flexure::beta1(fc);
        prop_assert!((0.65..=0.85).contains(&b1));
    }
}

// ── Engine Invariants ────────────────────────────────────────────────

proptest! {
    /// Realistic inputs always evaluate.
    #[test]
    fn realistic_inputs_evaluate(input in realistic_input()) {
        prop_assert!(evaluate(&input).is_ok());
    }

    /// The overall verdict is exactly the AND of the five criteria.
    #[test]
    fn design_ok_iff_all_verdicts(input in realistic_input()) {
        let r = evaluate(&input).unwrap();
        let v = r.verdicts;
        prop_assert_eq!(
            r.design_ok,
            v.moment && v.shear && v.tension_steel && v.stirrup_spacing && v.rho_bound
        );
        prop_assert_eq!(r.design_ok, r.failed_criteria().is_empty());
        prop_assert_eq!(r.diagnostics.len(), r.failed_criteria().len());
    }

    /// When ρ is raised to ρ_min, both ρ and As,required are exact.
    #[test]
    fn clamp_is_idempotent(input in realistic_input()) {
        let r = evaluate(&input).unwrap();
        if r.rho_demand < r.rho_min {
            let (b, d) = (input.section.b_cm, input.section.d_cm);
            prop_assert_eq!(r.ratio_status, RatioStatus::ClampedToMin);
            prop_assert_eq!(r.rho_required, r.rho_min);
            prop_assert_eq!(r.as_required_cm2, r.rho_min * b * d);
        } else {
            prop_assert_eq!(r.rho_required, r.rho_demand);
        }
    }

    /// Adding a bar never reduces As, a or (while a ≤ d) Mn.
    #[test]
    fn more_bars_never_weaker(input in realistic_input()) {
        let lo = evaluate(&input).unwrap();
        let mut more = input.tension;
        more.count += 1;
        let hi = evaluate(&input.clone().with_tension(more)).unwrap();

        prop_assert!(hi.as_provided_cm2 >= lo.as_provided_cm2);
        prop_assert!(hi.a_cm >= lo.a_cm);
        if hi.a_cm <= input.section.d_cm {
            prop_assert!(hi.mn_kgm >= lo.mn_kgm - 1e-9 * lo.mn_kgm.abs());
        }
    }

    /// Compression steel only ever adds moment capacity.
    #[test]
    fn compression_steel_adds_moment(input in realistic_input(), bar in bar_size(), count in 1u32..6) {
        let base = evaluate(&input).unwrap();
        let with = evaluate(&input.clone().with_compression(ReinforcementSelection::new(bar, count))).unwrap();
        prop_assert!(with.mn_kgm >= base.mn_kgm);
        prop_assert_eq!(with.a_cm, base.a_cm);
    }
}
