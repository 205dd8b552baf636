use proptest::prelude::*;
use tally_core::config::NumericConfig;
use tally_core::Distribution;
use tally_distributions::{add_with, scale, AnyDistribution, LogLogistic, PointDistribution, ZERO};

/// Coarse resolution keeps numeric sums cheap inside proptest loops.
fn coarse() -> NumericConfig {
    NumericConfig {
        convolution_atoms: Some(32),
        tabulation_knots: Some(64),
        ..Default::default()
    }
}

fn arb_log_logistic() -> impl Strategy<Value = AnyDistribution> {
    (0.1f64..1000.0, 1.01f64..20.0).prop_map(|(low, ratio)| {
        LogLogistic::fit(0.1, low, 0.75, low * ratio).unwrap().into()
    })
}

fn arb_point() -> impl Strategy<Value = AnyDistribution> {
    prop::collection::vec((0.0f64..1000.0, 0.01f64..1.0), 1..6).prop_map(|masses| {
        let total: f64 = masses.iter().map(|m| m.1).sum();
        PointDistribution::new(masses.into_iter().map(|(v, w)| (v, w / total)))
            .unwrap()
            .into()
    })
}

fn arb_leaf() -> impl Strategy<Value = AnyDistribution> {
    prop_oneof![Just(ZERO), arb_point(), arb_log_logistic()]
}

fn arb_distribution() -> impl Strategy<Value = AnyDistribution> {
    prop_oneof![
        arb_leaf(),
        (arb_leaf(), arb_leaf()).prop_map(|(a, b)| add_with(&a, &b, &coarse())),
    ]
}

proptest! {
    #[test]
    fn cdf_is_zero_below_origin(d in arb_distribution(), x in -1e6f64..-1e-9) {
        prop_assert_eq!(d.cdf(x), 0.0);
        prop_assert_eq!(d.pdf(x), 0.0);
    }

    #[test]
    fn cdf_is_monotone(d in arb_distribution(), a in 0.0f64..5000.0, b in 0.0f64..5000.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(d.cdf(lo) <= d.cdf(hi), "cdf({}) > cdf({})", lo, hi);
        prop_assert!(d.pdf(lo) >= 0.0);
    }

    #[test]
    fn cdf_approaches_one(d in arb_distribution()) {
        prop_assert!(d.cdf(1e15) > 0.999, "cdf(1e15) = {}", d.cdf(1e15));
    }

    #[test]
    fn quantile_inverts_continuous_cdf(d in arb_log_logistic(), p in 0.001f64..0.999) {
        let x = d.quantile(p).unwrap();
        prop_assert!((d.cdf(x) - p).abs() < 1e-9);
    }

    #[test]
    fn scaling_scales_quantiles(
        d in arb_distribution(),
        factor in 0.01f64..100.0,
        p in 0.01f64..0.99,
    ) {
        let scaled = scale(&d, factor).unwrap();
        let expected = factor * d.quantile(p).unwrap();
        let actual = scaled.quantile(p).unwrap();
        prop_assert!((actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
            "{} vs {}", actual, expected);
    }

    #[test]
    fn adding_zero_changes_nothing(d in arb_distribution(), p in 0.01f64..0.99) {
        let sum = add_with(&d, &ZERO, &coarse());
        prop_assert_eq!(sum.quantile(p).unwrap(), d.quantile(p).unwrap());
        prop_assert_eq!(sum.cdf(p * 100.0), d.cdf(p * 100.0));
    }

    #[test]
    fn add_commutes(a in arb_leaf(), b in arb_leaf()) {
        prop_assert_eq!(add_with(&a, &b, &coarse()), add_with(&b, &a, &coarse()));
    }
}
