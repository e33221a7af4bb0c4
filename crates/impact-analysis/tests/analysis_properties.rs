//! Property tests for the calculator and radar.

use impact_analysis::{compute_impact, cost_severity};
use proptest::prelude::*;

proptest! {
    #[test]
    fn erosion_is_extra_cost_over_contract_value(
        cv in 1.0f64..1e9,
        margin in 0.0f64..100.0,
        extra in 0.0f64..1e9,
    ) {
        let m = compute_impact(cv, margin, extra);
        let expected = extra / cv * 100.0;
        prop_assert!((m.erosion_points - expected).abs() <= 1e-6 * expected.max(1.0));
        prop_assert_eq!(m.final_value, cv + extra);
        prop_assert!(m.margin_after <= m.margin_before + 1e-9);
    }

    #[test]
    fn cost_severity_stays_in_range(
        extra in 0.0f64..1e12,
        cv in 0.0f64..1e9,
        fraction in 0.001f64..1.0,
    ) {
        let s = cost_severity(extra, cv, fraction).value();
        prop_assert!((0.0..=10.0).contains(&s));
    }

    #[test]
    fn cost_severity_is_monotonic_in_extra_cost(
        a in 0.0f64..1e7,
        b in 0.0f64..1e7,
        cv in 1.0f64..1e8,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(cost_severity(lo, cv, 0.1) <= cost_severity(hi, cv, 0.1));
    }
}
