//! Sets of device kinds, for styling or laying out several categories at once.
//!
//! ```rust
//! use device_breakpoints::{BreakpointConfiguration, DeviceKind, DeviceSet, range};
//!
//! let handheld = range(..=DeviceKind::Tablet);
//! assert_eq!(handheld, DeviceSet::WATCH | DeviceSet::MOBILE | DeviceSet::TABLET);
//! assert_eq!(DeviceSet::not(handheld), DeviceSet::LARGE_SCREEN);
//!
//! let config = BreakpointConfiguration::default();
//! assert!(handheld.matches(config.classify((393.0, 852.0))));
//! assert!(!handheld.matches(config.classify((1920.0, 1080.0))));
//! ```

use std::ops::{BitOr, RangeBounds};

use bitflags::bitflags;

use crate::device::{DeviceKind, DeviceType};

bitflags! {
  #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
  struct KindFlags: u8 {
    const WATCH = 1;
    const MOBILE = 2;
    const TABLET = 4;
    const LARGE_SCREEN = 8;
  }
}

impl From<DeviceKind> for KindFlags {
    fn from(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::Watch => KindFlags::WATCH,
            DeviceKind::Mobile => KindFlags::MOBILE,
            DeviceKind::Tablet => KindFlags::TABLET,
            DeviceKind::LargeScreen => KindFlags::LARGE_SCREEN,
        }
    }
}

/// Every kind within `range`, in rank order.
///
/// `range(DeviceKind::Mobile..)` is mobile, tablet and large screen.
pub fn range<R: RangeBounds<DeviceKind>>(range: R) -> DeviceSet {
    DeviceKind::ALL
        .into_iter()
        .filter(|kind| range.contains(kind))
        .fold(DeviceSet::NONE, |set, kind| set | DeviceSet::from(kind))
}

/// A set of [`DeviceKind`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct DeviceSet {
    flags: KindFlags,
}

impl DeviceSet {
    pub const NONE: DeviceSet = DeviceSet::new(KindFlags::empty());
    pub const WATCH: DeviceSet = DeviceSet::new(KindFlags::WATCH);
    pub const MOBILE: DeviceSet = DeviceSet::new(KindFlags::MOBILE);
    pub const TABLET: DeviceSet = DeviceSet::new(KindFlags::TABLET);
    pub const LARGE_SCREEN: DeviceSet = DeviceSet::new(KindFlags::LARGE_SCREEN);
    pub const ALL: DeviceSet = DeviceSet::new(KindFlags::all());

    /// Watch and mobile, see [`DeviceType::is_compact`].
    pub const COMPACT: DeviceSet = DeviceSet::new(KindFlags::WATCH.union(KindFlags::MOBILE));
    /// Tablet and large screen, see [`DeviceType::is_expanded`].
    pub const EXPANDED: DeviceSet =
        DeviceSet::new(KindFlags::TABLET.union(KindFlags::LARGE_SCREEN));

    const fn new(flags: KindFlags) -> Self {
        Self { flags }
    }

    pub const fn not(set: DeviceSet) -> Self {
        let flags = KindFlags::all().difference(set.flags);
        Self { flags }
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn contains(&self, kind: DeviceKind) -> bool {
        self.flags.contains(kind.into())
    }

    pub fn matches(&self, device: DeviceType) -> bool {
        self.contains(device.kind())
    }

    pub fn kinds(&self) -> impl Iterator<Item = DeviceKind> + use<> {
        let set = *self;
        DeviceKind::ALL
            .into_iter()
            .filter(move |kind| set.contains(*kind))
    }
}

impl From<DeviceKind> for DeviceSet {
    fn from(kind: DeviceKind) -> Self {
        Self::new(kind.into())
    }
}

impl BitOr for DeviceSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(self.flags | rhs.flags)
    }
}

impl FromIterator<DeviceKind> for DeviceSet {
    fn from_iter<I: IntoIterator<Item = DeviceKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(DeviceSet::NONE, |set, kind| set | DeviceSet::from(kind))
    }
}
