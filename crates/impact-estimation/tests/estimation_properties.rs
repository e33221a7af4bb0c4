use impact_core::models::ThreePointEstimate;
use impact_estimation::{monte_carlo_with_seed, percentile, pert};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pert_expected_is_exact(
        o in -1.0e9f64..1.0e9,
        m in -1.0e9f64..1.0e9,
        p in -1.0e9f64..1.0e9,
    ) {
        let r = pert(&ThreePointEstimate::new(o, m, p));
        prop_assert_eq!(r.expected, (o + 4.0 * m + p) / 6.0);
        prop_assert_eq!(r.std_dev, (p - o) / 6.0);
    }

    #[test]
    fn degenerate_support_returns_mode_for_any_n(
        p in -1.0e6f64..1.0e6,
        gap in 0.0f64..1.0e6,
        m in -1.0e6f64..1.0e6,
        n in 0usize..5_000,
        seed in any::<u64>(),
    ) {
        let r = monte_carlo_with_seed(&ThreePointEstimate::new(p + gap, m, p), n, seed);
        prop_assert_eq!(r.mean, m);
        prop_assert_eq!(r.p95, m);
    }

    #[test]
    fn statistics_stay_inside_support(
        o in -1.0e6f64..1.0e6,
        width in 1.0f64..1.0e6,
        mode_frac in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let p = o + width;
        let m = o + width * mode_frac;
        let r = monte_carlo_with_seed(&ThreePointEstimate::new(o, m, p), 200, seed);
        let eps = 1e-6 * width.max(o.abs());
        prop_assert!(r.mean >= o - eps && r.mean <= p + eps);
        prop_assert!(r.p95 >= o - eps && r.p95 <= p + eps);
    }

    #[test]
    fn percentile_is_bounded_by_extremes(mut data in prop::collection::vec(-1.0e6f64..1.0e6, 1..200), q in 0.0f64..=100.0) {
        data.sort_by(|a, b| a.total_cmp(b));
        let v = percentile(&data, q);
        prop_assert!(v >= data[0] && v <= data[data.len() - 1]);
    }
}
