//! Tests for plugging a user-defined strategy into a configuration.

use device_breakpoints::strategy::classify_side;
use device_breakpoints_test::prelude::*;

/// Classifies by width only, the way CSS media queries do.
#[derive(Debug, Clone, Copy, PartialEq)]
struct WidthOnly;

impl ClassificationStrategy for WidthOnly {
    fn classify<S>(&self, size: Size, config: &BreakpointConfiguration<S>) -> DeviceType {
        classify_side(size.width, config)
    }

    fn classify_from_width<S>(
        &self,
        width: f64,
        config: &BreakpointConfiguration<S>,
    ) -> DeviceType {
        classify_side(width, config)
    }
}

#[test]
fn test_custom_strategy_decides_classification() {
    let config = BreakpointConfiguration::default().with_strategy(WidthOnly);
    ClassificationTable::new(&config)
        .expect(devices::IPHONE_15, DeviceType::Mobile)
        .expect(
            devices::IPHONE_15.landscape(),
            DeviceType::Tablet(Some(TabletSize::Medium)),
        )
        .expect(devices::IPAD_PRO_11.landscape(), DeviceType::LargeScreen)
        .assert();
}

#[test]
fn test_custom_strategy_keeps_thresholds_and_validation() {
    let config = BreakpointConfiguration::material().with_strategy(WidthOnly);
    assert_eq!(config.tablet_max(), 840.0);
    assert_eq!(config.strategy(), &WidthOnly);

    assert!(
        config
            .with_overrides(BreakpointOverrides::new().mobile_max(900.0))
            .is_err()
    );
    let narrower = config
        .with_overrides(BreakpointOverrides::new().strategy(WidthOnly).tablet_max(1200.0))
        .unwrap();
    assert_eq!(narrower.classify((1000.0, 300.0)).kind(), DeviceKind::Tablet);
}

#[test]
fn test_custom_strategy_validates_at_construction() {
    let config = BreakpointConfiguration::new(
        200.0,
        500.0,
        900.0,
        TabletSizeThresholds::COMPACT,
        WidthOnly,
    )
    .unwrap();
    assert_eq!(config.classify((600.0, 100.0)).kind(), DeviceKind::Tablet);
    assert!(
        BreakpointConfiguration::new(500.0, 200.0, 900.0, TabletSizeThresholds::COMPACT, WidthOnly)
            .is_err()
    );
}
