//! Viewport measurements.
//!
//! A measurement is a plain [`Size`] in device-independent units. The
//! classifier only ever looks at the derived values provided by [`SizeExt`],
//! which is what makes the result independent of how the device is held.

use peniko::kurbo::Size;

/// Which way a viewport is held.
///
/// A square viewport counts as landscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Derived values the classifier reads from a [`Size`].
pub trait SizeExt {
    /// `min(width, height)`.
    fn shortest_side(&self) -> f64;

    /// `max(width, height)`.
    fn longest_side(&self) -> f64;

    /// `width >= height`.
    fn is_landscape(&self) -> bool;

    fn orientation(&self) -> Orientation {
        if self.is_landscape() {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

impl SizeExt for Size {
    // `f64::min`/`f64::max` ignore a single NaN operand, so a viewport with one
    // unknown dimension is classified by the other one.
    fn shortest_side(&self) -> f64 {
        self.width.min(self.height)
    }

    fn longest_side(&self) -> f64 {
        self.width.max(self.height)
    }

    fn is_landscape(&self) -> bool {
        self.width >= self.height
    }
}
