//! Property tests for classification.
//!
//! These tests check the invariants that hold for every viewport, not just
//! the catalogued ones: rotation invariance, monotonic categories and tiers,
//! and that configuration validation accepts exactly the ascending positive
//! thresholds.

use device_breakpoints_test::prelude::*;
use proptest::prelude::*;
use proptest::strategy::Strategy;

fn side() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.0..4000.0f64,
        // Land exactly on the default thresholds now and then.
        prop::sample::select(vec![300.0, 600.0, 720.0, 900.0, 1024.0, 1366.0]),
    ]
}

fn any_config() -> impl Strategy<Value = BreakpointConfiguration> {
    (1.0..500.0f64, 1.0..500.0f64, 1.0..1000.0f64, any::<bool>()).prop_map(
        |(watch, mobile_gap, tablet_gap, strict)| {
            let strategy = if strict {
                device_breakpoints::Strategy::from(StrictTablet::default())
            } else {
                device_breakpoints::Strategy::Standard
            };
            BreakpointConfiguration::new(
                watch,
                watch + mobile_gap,
                watch + mobile_gap + tablet_gap,
                TabletSizeThresholds::DEFAULT,
                strategy,
            )
            .expect("ascending positive thresholds are valid")
        },
    )
}

proptest! {
    #[test]
    fn standard_is_rotation_invariant(width in side(), height in side()) {
        let config = BreakpointConfiguration::default();
        prop_assert_eq!(config.classify((width, height)), config.classify((height, width)));
    }

    #[test]
    fn category_never_shrinks_as_shortest_side_grows(
        config in any_config(),
        a in side(),
        b in side(),
    ) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        // Portrait keeps StrictTablet on its rotation invariant path.
        let longest = large + 1.0;
        let smaller = config.classify_kind((small, longest));
        let larger = config.classify_kind((large, longest));
        prop_assert!(smaller <= larger, "{smaller:?} > {larger:?} for {small} < {large}");
    }

    #[test]
    fn tier_never_shrinks_as_shortest_side_grows(a in side(), b in side()) {
        let tiers = TabletSizeThresholds::DEFAULT;
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(tiers.classify(small) <= tiers.classify(large));
    }

    #[test]
    fn width_only_matches_a_square_viewport(width in side()) {
        let config = BreakpointConfiguration::default();
        prop_assert_eq!(config.classify_from_width(width), config.classify((width, width)));
    }

    #[test]
    fn tablets_always_carry_a_tier(config in any_config(), width in side(), height in side()) {
        let device = config.classify((width, height));
        prop_assert_eq!(device.is_tablet(), device.tablet_size().is_some());
    }

    #[test]
    fn strict_tablet_only_promotes_landscape_tablets(width in side(), height in side()) {
        let standard = BreakpointConfiguration::default();
        let strict = standard.with_strategy(StrictTablet::default());
        let expected = standard.classify((width, height));
        let actual = strict.classify((width, height));
        if actual != expected {
            prop_assert!(expected.is_tablet());
            prop_assert_eq!(actual, DeviceType::LargeScreen);
            prop_assert!(width >= height);
            prop_assert!(width >= StrictTablet::DEFAULT_THRESHOLD);
        }
    }

    #[test]
    fn ascending_positive_thresholds_are_accepted(
        watch in 0.001..1000.0f64,
        mobile_gap in 0.001..1000.0f64,
        tablet_gap in 0.001..1000.0f64,
    ) {
        let mobile = watch + mobile_gap;
        let tablet = mobile + tablet_gap;
        let config = BreakpointConfiguration::new(
            watch,
            mobile,
            tablet,
            TabletSizeThresholds::DEFAULT,
            device_breakpoints::Standard,
        );
        prop_assert!(config.is_ok());
    }

    #[test]
    fn watch_at_or_above_mobile_is_rejected(mobile in 1.0..1000.0f64, excess in 0.0..1000.0f64) {
        let config = BreakpointConfiguration::new(
            mobile + excess,
            mobile,
            5000.0,
            TabletSizeThresholds::DEFAULT,
            device_breakpoints::Standard,
        );
        prop_assert!(config.is_err());
    }

    #[test]
    fn non_positive_thresholds_are_rejected(value in -1000.0..=0.0f64, slot in 0usize..3) {
        let mut thresholds = [300.0, 600.0, 1024.0];
        thresholds[slot] = value;
        let config = BreakpointConfiguration::new(
            thresholds[0],
            thresholds[1],
            thresholds[2],
            TabletSizeThresholds::DEFAULT,
            device_breakpoints::Standard,
        );
        prop_assert!(config.is_err());
    }
}

#[test]
fn test_nan_viewports_are_deterministic() {
    let config = BreakpointConfiguration::default();
    let strict = config.with_strategy(StrictTablet::default());
    for viewport in [(f64::NAN, f64::NAN), (f64::NAN, 0.0), (f64::NAN, 700.0)] {
        assert_eq!(config.classify(viewport), config.classify(viewport));
        assert_eq!(config.classify(viewport), strict.classify(viewport));
    }
    assert_eq!(config.classify((f64::NAN, f64::NAN)), DeviceType::LargeScreen);
    assert_eq!(config.classify((f64::NAN, 700.0)).kind(), DeviceKind::Tablet);
    assert_eq!(config.classify((-20.0, 500.0)), DeviceType::Watch);
}
