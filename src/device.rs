//! The result of classifying a viewport.
//!
//! [`DeviceType`] carries the tablet tier when there is one, [`DeviceKind`] is
//! the bare category. Both are plain values: a layout reads them, and derives
//! new ones whenever the viewport or the configuration changes.
//!
//! Layout code usually branches on the category. Matching directly works, and
//! so do the helpers, which read a little better inline:
//!
//! ```rust
//! use device_breakpoints::BreakpointConfiguration;
//!
//! let device = BreakpointConfiguration::default().classify((834.0, 1194.0));
//!
//! // Every category handled.
//! let columns = device.when(|| 1, || 1, || 2, || 4);
//! assert_eq!(columns, 2);
//!
//! // Only the interesting ones, with a fallback.
//! let gutter = device
//!     .cases()
//!     .tablet_sized(|tier| if tier.is_some_and(|t| t.is_large()) { 24.0 } else { 16.0 })
//!     .large_screen(|| 32.0)
//!     .or(8.0);
//! assert_eq!(gutter, 16.0);
//! ```

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tablet::TabletSize;

/// A device category without its tier, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum DeviceKind {
    Watch,
    Mobile,
    Tablet,
    LargeScreen,
}

impl DeviceKind {
    pub const ALL: [DeviceKind; 4] = [
        DeviceKind::Watch,
        DeviceKind::Mobile,
        DeviceKind::Tablet,
        DeviceKind::LargeScreen,
    ];

    /// The canonical name: `watch`, `mobile`, `tablet` or `largeScreen`.
    pub fn name(self) -> &'static str {
        match self {
            DeviceKind::Watch => "watch",
            DeviceKind::Mobile => "mobile",
            DeviceKind::Tablet => "tablet",
            DeviceKind::LargeScreen => "largeScreen",
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device kind `{0}`")]
pub struct ParseDeviceKindError(String);

impl FromStr for DeviceKind {
    type Err = ParseDeviceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeviceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseDeviceKindError(s.to_string()))
    }
}

/// The category a viewport was classified into.
///
/// A `Tablet` carries its [`TabletSize`] when the classifier computed one.
/// `Tablet(None)` is a tablet built by hand without tiering, and is a
/// different value from any sized tablet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum DeviceType {
    Watch,
    Mobile,
    Tablet(Option<TabletSize>),
    LargeScreen,
}

impl From<DeviceType> for DeviceKind {
    fn from(device: DeviceType) -> Self {
        device.kind()
    }
}

impl DeviceType {
    pub fn kind(self) -> DeviceKind {
        match self {
            DeviceType::Watch => DeviceKind::Watch,
            DeviceType::Mobile => DeviceKind::Mobile,
            DeviceType::Tablet(_) => DeviceKind::Tablet,
            DeviceType::LargeScreen => DeviceKind::LargeScreen,
        }
    }

    /// The tier of a classified tablet. `None` for every other category.
    pub fn tablet_size(self) -> Option<TabletSize> {
        match self {
            DeviceType::Tablet(size) => size,
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        self.kind().name()
    }

    pub fn is_watch(self) -> bool {
        matches!(self, DeviceType::Watch)
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, DeviceType::Mobile)
    }

    pub fn is_tablet(self) -> bool {
        matches!(self, DeviceType::Tablet(_))
    }

    pub fn is_large_screen(self) -> bool {
        matches!(self, DeviceType::LargeScreen)
    }

    /// Watch or mobile.
    pub fn is_compact(self) -> bool {
        matches!(self, DeviceType::Watch | DeviceType::Mobile)
    }

    /// Tablet or large screen.
    pub fn is_expanded(self) -> bool {
        matches!(self, DeviceType::Tablet(_) | DeviceType::LargeScreen)
    }

    pub fn supports_hover(self) -> bool {
        self.is_large_screen()
    }

    pub fn prefers_touch_input(self) -> bool {
        !self.is_large_screen()
    }

    /// Runs exactly one of the handlers, chosen by category.
    pub fn when<T>(
        self,
        watch: impl FnOnce() -> T,
        mobile: impl FnOnce() -> T,
        tablet: impl FnOnce() -> T,
        large_screen: impl FnOnce() -> T,
    ) -> T {
        match self {
            DeviceType::Watch => watch(),
            DeviceType::Mobile => mobile(),
            DeviceType::Tablet(_) => tablet(),
            DeviceType::LargeScreen => large_screen(),
        }
    }

    /// Like [`when`](Self::when), but the tablet handler receives the tier.
    pub fn map<T>(
        self,
        watch: impl FnOnce() -> T,
        mobile: impl FnOnce() -> T,
        tablet: impl FnOnce(Option<TabletSize>) -> T,
        large_screen: impl FnOnce() -> T,
    ) -> T {
        match self {
            DeviceType::Watch => watch(),
            DeviceType::Mobile => mobile(),
            DeviceType::Tablet(size) => tablet(size),
            DeviceType::LargeScreen => large_screen(),
        }
    }

    /// Starts a match where unhandled categories fall back to a default.
    ///
    /// Only the handler of the matching arm runs. See [`DeviceCases`].
    pub fn cases<T>(self) -> DeviceCases<T> {
        DeviceCases {
            device: self,
            value: None,
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A partial match over a [`DeviceType`], finished with a fallback.
///
/// Created by [`DeviceType::cases`]. Arms may be given in any order and any of
/// them may be left out; the first arm matching the device wins.
#[must_use = "a match has no result until `or`, `or_else` or `resolve` is called"]
pub struct DeviceCases<T> {
    device: DeviceType,
    value: Option<T>,
}

impl<T> DeviceCases<T> {
    fn arm(mut self, kind: DeviceKind, f: impl FnOnce(Option<TabletSize>) -> T) -> Self {
        if self.value.is_none() && self.device.kind() == kind {
            self.value = Some(f(self.device.tablet_size()));
        }
        self
    }

    pub fn watch(self, f: impl FnOnce() -> T) -> Self {
        self.arm(DeviceKind::Watch, |_| f())
    }

    pub fn mobile(self, f: impl FnOnce() -> T) -> Self {
        self.arm(DeviceKind::Mobile, |_| f())
    }

    pub fn tablet(self, f: impl FnOnce() -> T) -> Self {
        self.arm(DeviceKind::Tablet, |_| f())
    }

    pub fn tablet_sized(self, f: impl FnOnce(Option<TabletSize>) -> T) -> Self {
        self.arm(DeviceKind::Tablet, f)
    }

    pub fn large_screen(self, f: impl FnOnce() -> T) -> Self {
        self.arm(DeviceKind::LargeScreen, |_| f())
    }

    /// The value of the matching arm, if any arm matched.
    pub fn resolve(self) -> Option<T> {
        self.value
    }

    pub fn or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    pub fn or_else(self, default: impl FnOnce() -> T) -> T {
        self.value.unwrap_or_else(default)
    }
}
