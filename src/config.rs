//! Breakpoint thresholds and the strategy that interprets them.

use peniko::kurbo::Size;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::device::{DeviceKind, DeviceType};
use crate::error::{self, ConfigurationError};
use crate::strategy::{ClassificationStrategy, Strategy};
use crate::tablet::TabletSizeThresholds;

/// Validated device-category thresholds plus a classification strategy.
///
/// Each threshold is the exclusive upper bound of its category, compared
/// against the shortest side of a viewport:
///
/// | shortest side                   | category        |
/// |---------------------------------|-----------------|
/// | `< watch_max`                   | `Watch`         |
/// | `watch_max ..< mobile_max`      | `Mobile`        |
/// | `mobile_max ..< tablet_max`     | `Tablet(tier)`  |
/// | `>= tablet_max`                 | `LargeScreen`   |
///
/// Construction checks `0 < watch_max < mobile_max < tablet_max`, so a
/// configuration that exists is always consistent. The strategy type defaults
/// to [`Strategy`]; any other [`ClassificationStrategy`] can be plugged in with
/// [`with_strategy`](Self::with_strategy).
///
/// ```rust
/// use device_breakpoints::{BreakpointConfiguration, BreakpointOverrides, DeviceType};
///
/// let config = BreakpointConfiguration::default()
///     .with_overrides(BreakpointOverrides::new().mobile_max(400.0))
///     .unwrap();
/// assert_eq!(config.classify_from_width(399.0), DeviceType::Mobile);
/// assert!(config.classify_from_width(400.0).is_tablet());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        rename_all = "camelCase",
        try_from = "RawBreakpointConfiguration<S>",
        bound(
            serialize = "S: Serialize",
            deserialize = "S: Deserialize<'de> + Default"
        )
    )
)]
pub struct BreakpointConfiguration<S = Strategy> {
    watch_max: f64,
    mobile_max: f64,
    tablet_max: f64,
    tablet_tiers: TabletSizeThresholds,
    strategy: S,
}

impl BreakpointConfiguration {
    /// 300 / 600 / 1024 with the default tablet tiers.
    pub const DEFAULT: BreakpointConfiguration = BreakpointConfiguration {
        watch_max: 300.0,
        mobile_max: 600.0,
        tablet_max: 1024.0,
        tablet_tiers: TabletSizeThresholds::DEFAULT,
        strategy: Strategy::Standard,
    };

    /// 300 / 600 / 840 with compact tablet tiers, after the Material window
    /// size classes.
    pub const MATERIAL: BreakpointConfiguration = BreakpointConfiguration {
        watch_max: 300.0,
        mobile_max: 600.0,
        tablet_max: 840.0,
        tablet_tiers: TabletSizeThresholds::COMPACT,
        strategy: Strategy::Standard,
    };

    pub fn material() -> Self {
        Self::MATERIAL
    }
}

impl Default for BreakpointConfiguration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<S> BreakpointConfiguration<S> {
    pub fn new(
        watch_max: f64,
        mobile_max: f64,
        tablet_max: f64,
        tablet_tiers: TabletSizeThresholds,
        strategy: S,
    ) -> Result<Self, ConfigurationError> {
        error::positive("watchMax", watch_max)?;
        error::positive("mobileMax", mobile_max)?;
        error::positive("tabletMax", tablet_max)?;
        error::ascending(("watchMax", watch_max), ("mobileMax", mobile_max))?;
        error::ascending(("mobileMax", mobile_max), ("tabletMax", tablet_max))?;
        Ok(Self {
            watch_max,
            mobile_max,
            tablet_max,
            tablet_tiers,
            strategy,
        })
    }

    pub fn watch_max(&self) -> f64 {
        self.watch_max
    }

    pub fn mobile_max(&self) -> f64 {
        self.mobile_max
    }

    pub fn tablet_max(&self) -> f64 {
        self.tablet_max
    }

    pub fn tablet_tiers(&self) -> &TabletSizeThresholds {
        &self.tablet_tiers
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// The same thresholds interpreted by another strategy.
    pub fn with_strategy<T>(&self, strategy: T) -> BreakpointConfiguration<T> {
        BreakpointConfiguration {
            watch_max: self.watch_max,
            mobile_max: self.mobile_max,
            tablet_max: self.tablet_max,
            tablet_tiers: self.tablet_tiers,
            strategy,
        }
    }
}

impl<S: Clone> BreakpointConfiguration<S> {
    /// A copy with the given fields replaced, validated like [`new`](Self::new).
    pub fn with_overrides(
        &self,
        overrides: BreakpointOverrides<S>,
    ) -> Result<Self, ConfigurationError> {
        let BreakpointOverrides {
            watch_max,
            mobile_max,
            tablet_max,
            tablet_tiers,
            strategy,
        } = overrides;
        Self::new(
            watch_max.unwrap_or(self.watch_max),
            mobile_max.unwrap_or(self.mobile_max),
            tablet_max.unwrap_or(self.tablet_max),
            tablet_tiers.unwrap_or(self.tablet_tiers),
            strategy.unwrap_or_else(|| self.strategy.clone()),
        )
    }
}

impl<S: ClassificationStrategy> BreakpointConfiguration<S> {
    pub fn classify(&self, size: impl Into<Size>) -> DeviceType {
        let size = size.into();
        let device = self.strategy.classify(size, self);
        tracing::trace!(
            width = size.width,
            height = size.height,
            %device,
            tier = ?device.tablet_size(),
            "classified viewport"
        );
        device
    }

    /// Classifies using the width alone, as if it were the shortest side.
    pub fn classify_from_width(&self, width: f64) -> DeviceType {
        let device = self.strategy.classify_from_width(width, self);
        tracing::trace!(width, %device, tier = ?device.tablet_size(), "classified width");
        device
    }

    pub fn classify_kind(&self, size: impl Into<Size>) -> DeviceKind {
        self.classify(size).kind()
    }
}

/// Fields to replace in [`BreakpointConfiguration::with_overrides`].
///
/// `None` keeps the existing value.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointOverrides<S = Strategy> {
    pub watch_max: Option<f64>,
    pub mobile_max: Option<f64>,
    pub tablet_max: Option<f64>,
    pub tablet_tiers: Option<TabletSizeThresholds>,
    pub strategy: Option<S>,
}

impl<S> Default for BreakpointOverrides<S> {
    fn default() -> Self {
        Self {
            watch_max: None,
            mobile_max: None,
            tablet_max: None,
            tablet_tiers: None,
            strategy: None,
        }
    }
}

impl<S> BreakpointOverrides<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn watch_max(mut self, watch_max: f64) -> Self {
        self.watch_max = Some(watch_max);
        self
    }

    pub fn mobile_max(mut self, mobile_max: f64) -> Self {
        self.mobile_max = Some(mobile_max);
        self
    }

    pub fn tablet_max(mut self, tablet_max: f64) -> Self {
        self.tablet_max = Some(tablet_max);
        self
    }

    pub fn tablet_tiers(mut self, tablet_tiers: TabletSizeThresholds) -> Self {
        self.tablet_tiers = Some(tablet_tiers);
        self
    }

    pub fn strategy(mut self, strategy: impl Into<S>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawBreakpointConfiguration<S> {
    watch_max: f64,
    mobile_max: f64,
    tablet_max: f64,
    tablet_tiers: TabletSizeThresholds,
    strategy: S,
}

#[cfg(feature = "serde")]
impl<S: Default> Default for RawBreakpointConfiguration<S> {
    fn default() -> Self {
        let defaults = BreakpointConfiguration::<Strategy>::DEFAULT;
        Self {
            watch_max: defaults.watch_max,
            mobile_max: defaults.mobile_max,
            tablet_max: defaults.tablet_max,
            tablet_tiers: defaults.tablet_tiers,
            strategy: S::default(),
        }
    }
}

#[cfg(feature = "serde")]
impl<S> TryFrom<RawBreakpointConfiguration<S>> for BreakpointConfiguration<S> {
    type Error = ConfigurationError;

    fn try_from(raw: RawBreakpointConfiguration<S>) -> Result<Self, Self::Error> {
        Self::new(
            raw.watch_max,
            raw.mobile_max,
            raw.tablet_max,
            raw.tablet_tiers,
            raw.strategy,
        )
    }
}
