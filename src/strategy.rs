//! Classification algorithms.
//!
//! A [`BreakpointConfiguration`] holds its thresholds and hands them to a
//! [`ClassificationStrategy`], which decides what a viewport is. Two
//! strategies ship with the crate:
//!
//! - [`Standard`] compares the shortest side against the thresholds, so a
//!   device keeps its category when rotated.
//! - [`StrictTablet`] does the same, except that a landscape viewport with a
//!   tablet-range shortest side and a very long longest side is treated as a
//!   large screen. A 1400x800 desktop window is not a tablet.
//!
//! [`Strategy`] is the closed set of the two, and is what configurations use
//! unless they are given a strategy type of their own.

use peniko::kurbo::Size;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::BreakpointConfiguration;
use crate::device::DeviceType;
use crate::error::{self, ConfigurationError};
use crate::measurement::SizeExt;

pub trait ClassificationStrategy {
    /// Classifies a full viewport.
    fn classify<S>(&self, size: Size, config: &BreakpointConfiguration<S>) -> DeviceType;

    /// Classifies when only the width is known, treating it as the shortest side.
    fn classify_from_width<S>(&self, width: f64, config: &BreakpointConfiguration<S>)
    -> DeviceType;
}

/// The four-way comparison shared by every strategy.
///
/// Thresholds are exclusive upper bounds. A NaN side fails every comparison and
/// lands on [`DeviceType::LargeScreen`].
pub fn classify_side<S>(side: f64, config: &BreakpointConfiguration<S>) -> DeviceType {
    if side < config.watch_max() {
        DeviceType::Watch
    } else if side < config.mobile_max() {
        DeviceType::Mobile
    } else if side < config.tablet_max() {
        DeviceType::Tablet(Some(config.tablet_tiers().classify(side)))
    } else {
        DeviceType::LargeScreen
    }
}

/// Orientation-independent classification by shortest side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Standard;

impl ClassificationStrategy for Standard {
    fn classify<S>(&self, size: Size, config: &BreakpointConfiguration<S>) -> DeviceType {
        classify_side(size.shortest_side(), config)
    }

    fn classify_from_width<S>(
        &self,
        width: f64,
        config: &BreakpointConfiguration<S>,
    ) -> DeviceType {
        classify_side(width, config)
    }
}

/// Classifies wide landscape windows in the tablet range as large screens.
///
/// Portrait viewports are never affected: a tablet held upright has a short
/// longest side compared to common laptop widths.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", try_from = "RawStrictTablet")
)]
pub struct StrictTablet {
    landscape_longest_side_threshold: f64,
}

impl StrictTablet {
    pub const DEFAULT_THRESHOLD: f64 = 1366.0;

    /// Fails unless `landscape_longest_side_threshold > 0`.
    pub fn new(landscape_longest_side_threshold: f64) -> Result<Self, ConfigurationError> {
        error::positive(
            "landscapeLongestSideThreshold",
            landscape_longest_side_threshold,
        )?;
        Ok(Self {
            landscape_longest_side_threshold,
        })
    }

    pub fn landscape_longest_side_threshold(&self) -> f64 {
        self.landscape_longest_side_threshold
    }
}

impl Default for StrictTablet {
    fn default() -> Self {
        Self {
            landscape_longest_side_threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

impl ClassificationStrategy for StrictTablet {
    fn classify<S>(&self, size: Size, config: &BreakpointConfiguration<S>) -> DeviceType {
        let shortest = size.shortest_side();
        let tablet_range = shortest >= config.mobile_max() && shortest < config.tablet_max();
        if tablet_range
            && size.is_landscape()
            && size.longest_side() >= self.landscape_longest_side_threshold
        {
            return DeviceType::LargeScreen;
        }
        classify_side(shortest, config)
    }

    // Without a height there is no orientation, so the landscape override
    // never applies.
    fn classify_from_width<S>(
        &self,
        width: f64,
        config: &BreakpointConfiguration<S>,
    ) -> DeviceType {
        classify_side(width, config)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawStrictTablet {
    landscape_longest_side_threshold: f64,
}

#[cfg(feature = "serde")]
impl Default for RawStrictTablet {
    fn default() -> Self {
        Self {
            landscape_longest_side_threshold: StrictTablet::DEFAULT_THRESHOLD,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawStrictTablet> for StrictTablet {
    type Error = ConfigurationError;

    fn try_from(raw: RawStrictTablet) -> Result<Self, Self::Error> {
        Self::new(raw.landscape_longest_side_threshold)
    }
}

/// The strategies that ship with this crate.
///
/// Two values are equal when they are the same variant and, for
/// `StrictTablet`, have the same threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Strategy {
    #[default]
    Standard,
    StrictTablet(StrictTablet),
}

impl From<Standard> for Strategy {
    fn from(_: Standard) -> Self {
        Strategy::Standard
    }
}

impl From<StrictTablet> for Strategy {
    fn from(strict: StrictTablet) -> Self {
        Strategy::StrictTablet(strict)
    }
}

impl ClassificationStrategy for Strategy {
    fn classify<S>(&self, size: Size, config: &BreakpointConfiguration<S>) -> DeviceType {
        match self {
            Strategy::Standard => Standard.classify(size, config),
            Strategy::StrictTablet(strict) => strict.classify(size, config),
        }
    }

    fn classify_from_width<S>(
        &self,
        width: f64,
        config: &BreakpointConfiguration<S>,
    ) -> DeviceType {
        match self {
            Strategy::Standard => Standard.classify_from_width(width, config),
            Strategy::StrictTablet(strict) => strict.classify_from_width(width, config),
        }
    }
}
