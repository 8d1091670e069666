//! Size tiers within the tablet category.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{self, ConfigurationError};

/// The size tier of a tablet, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TabletSize {
    Small,
    Medium,
    Large,
}

impl TabletSize {
    pub const ALL: [TabletSize; 3] = [TabletSize::Small, TabletSize::Medium, TabletSize::Large];

    pub fn name(self) -> &'static str {
        match self {
            TabletSize::Small => "small",
            TabletSize::Medium => "medium",
            TabletSize::Large => "large",
        }
    }

    pub fn is_small(self) -> bool {
        self == TabletSize::Small
    }

    pub fn is_medium(self) -> bool {
        self == TabletSize::Medium
    }

    pub fn is_large(self) -> bool {
        self == TabletSize::Large
    }

    /// Runs exactly one of the handlers, chosen by tier.
    pub fn when<T>(
        self,
        small: impl FnOnce() -> T,
        medium: impl FnOnce() -> T,
        large: impl FnOnce() -> T,
    ) -> T {
        match self {
            TabletSize::Small => small(),
            TabletSize::Medium => medium(),
            TabletSize::Large => large(),
        }
    }
}

impl std::fmt::Display for TabletSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Shortest-side thresholds splitting tablets into [`TabletSize`] tiers.
///
/// Both values are exclusive upper bounds: a shortest side equal to
/// `small_max` is already [`TabletSize::Medium`], and one equal to
/// `medium_max` is [`TabletSize::Large`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", try_from = "RawTabletSizeThresholds")
)]
pub struct TabletSizeThresholds {
    small_max: f64,
    medium_max: f64,
}

impl Default for TabletSizeThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TabletSizeThresholds {
    pub const DEFAULT: TabletSizeThresholds = TabletSizeThresholds {
        small_max: 720.0,
        medium_max: 900.0,
    };

    /// Tighter tiers, matching the Material window size classes.
    pub const COMPACT: TabletSizeThresholds = TabletSizeThresholds {
        small_max: 680.0,
        medium_max: 840.0,
    };

    pub const WIDE: TabletSizeThresholds = TabletSizeThresholds {
        small_max: 768.0,
        medium_max: 960.0,
    };

    /// Fails unless `0 < small_max < medium_max`.
    pub fn new(small_max: f64, medium_max: f64) -> Result<Self, ConfigurationError> {
        error::positive("smallMax", small_max)?;
        error::positive("mediumMax", medium_max)?;
        error::ascending(("smallMax", small_max), ("mediumMax", medium_max))?;
        Ok(Self {
            small_max,
            medium_max,
        })
    }

    pub fn small_max(&self) -> f64 {
        self.small_max
    }

    pub fn medium_max(&self) -> f64 {
        self.medium_max
    }

    /// Picks the tier for a tablet with the given shortest side.
    ///
    /// Total over all inputs: zero and negative sides are
    /// [`TabletSize::Small`], NaN falls through to [`TabletSize::Large`].
    pub fn classify(&self, shortest_side: f64) -> TabletSize {
        if shortest_side < self.small_max {
            TabletSize::Small
        } else if shortest_side < self.medium_max {
            TabletSize::Medium
        } else {
            TabletSize::Large
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawTabletSizeThresholds {
    small_max: f64,
    medium_max: f64,
}

#[cfg(feature = "serde")]
impl Default for RawTabletSizeThresholds {
    fn default() -> Self {
        let TabletSizeThresholds {
            small_max,
            medium_max,
        } = TabletSizeThresholds::DEFAULT;
        Self {
            small_max,
            medium_max,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawTabletSizeThresholds> for TabletSizeThresholds {
    type Error = ConfigurationError;

    fn try_from(raw: RawTabletSizeThresholds) -> Result<Self, Self::Error> {
        Self::new(raw.small_max, raw.medium_max)
    }
}
