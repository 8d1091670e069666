//! # Device breakpoints
//! Classifies a viewport into a device category (watch, mobile, tablet or
//! large screen) and, for tablets, a size tier (small, medium or large).
//!
//! The crate is the decision engine only. A UI layer measures its window or
//! view, calls [`BreakpointConfiguration::classify`], and picks a layout from
//! the resulting [`DeviceType`]. Nothing here is stateful: every call is a
//! handful of float comparisons, and configurations are plain `Copy` values
//! that can be shared freely between threads.
//!
//! ## Example
//! ```rust
//! use device_breakpoints::prelude::*;
//!
//! let config = BreakpointConfiguration::default();
//!
//! assert_eq!(config.classify((393.0, 852.0)), DeviceType::Mobile);
//! assert_eq!(
//!     config.classify((834.0, 1194.0)),
//!     DeviceType::Tablet(Some(TabletSize::Medium))
//! );
//! assert_eq!(config.classify((1920.0, 1080.0)), DeviceType::LargeScreen);
//! ```
//!
//! ## Thresholds
//!
//! Classification compares the shortest side of the viewport against three
//! thresholds, `watch_max < mobile_max < tablet_max`. Each one is the exclusive
//! upper bound of its category, so a viewport whose shortest side is exactly
//! `mobile_max` is already a tablet. Using the shortest side means a phone held
//! sideways is still a phone.
//!
//! Tablets are split again by [`TabletSizeThresholds`], with the same
//! exclusive-upper-bound rule.
//!
//! Presets:
//!
//! | preset                               | watch | mobile | tablet | tablet tiers |
//! |--------------------------------------|-------|--------|--------|--------------|
//! | [`BreakpointConfiguration::DEFAULT`]  | 300   | 600    | 1024   | 720 / 900    |
//! | [`BreakpointConfiguration::MATERIAL`] | 300   | 600    | 840    | 680 / 840    |
//!
//! Custom thresholds go through [`BreakpointConfiguration::new`] or
//! [`BreakpointConfiguration::with_overrides`], both of which validate and
//! return a [`ConfigurationError`] on bad input. Every threshold must be a
//! finite number greater than zero. With the `serde` feature
//! (enabled by default) configurations can also be loaded from any serde
//! format; invalid documents fail to deserialize.
//!
//! ## Strategies
//!
//! The comparison itself is a [`ClassificationStrategy`]. [`Standard`] is the
//! rotation independent rule above. [`StrictTablet`] additionally treats a
//! landscape viewport whose longest side reaches a threshold (1366 by default)
//! as a large screen, so a desktop window resized to 1400x800 is not mistaken
//! for a tablet:
//!
//! ```rust
//! use device_breakpoints::prelude::*;
//!
//! let standard = BreakpointConfiguration::default();
//! let strict = standard.with_strategy(StrictTablet::default());
//!
//! assert!(standard.classify((1400.0, 800.0)).is_tablet());
//! assert!(strict.classify((1400.0, 800.0)).is_large_screen());
//! assert!(strict.classify((1194.0, 834.0)).is_tablet());
//! ```
//!
//! ## Degenerate input
//!
//! Classification never fails. Zero and negative sides are watches. A NaN side
//! is ignored if the other side is a number; if both are NaN the viewport is a
//! large screen.

mod config;
mod device;
mod error;
pub mod measurement;
pub mod responsive;
pub mod strategy;
mod tablet;

pub use config::{BreakpointConfiguration, BreakpointOverrides};
pub use device::{DeviceCases, DeviceKind, DeviceType, ParseDeviceKindError};
pub use error::ConfigurationError;
pub use peniko::kurbo;
pub use responsive::{DeviceSet, range};
pub use strategy::{ClassificationStrategy, Standard, StrictTablet, Strategy};
pub use tablet::{TabletSize, TabletSizeThresholds};

pub mod prelude {
    pub use crate::kurbo::Size;
    pub use crate::measurement::{Orientation, SizeExt};
    pub use crate::{
        BreakpointConfiguration, BreakpointOverrides, ClassificationStrategy, DeviceKind,
        DeviceSet, DeviceType, StrictTablet, Strategy, TabletSize, TabletSizeThresholds,
    };
}
