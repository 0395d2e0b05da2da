#![forbid(unsafe_code)]

//! Sizing policy for blocks that stretch to whatever they are given.

use neon_core::geometry::Size;

/// Default size of a flexible block with no constraints.
pub const FLEXIBLE_DEFAULT: Size = Size::new(1, 1);

/// Measure a block that fills any constraint it receives.
///
/// Each given constraint is taken as-is; each missing one falls back to
/// `default`. A zero constraint yields [`Size::ZERO`].
#[must_use]
pub fn measure_flexible(default: Size, width: Option<usize>, height: Option<usize>) -> Size {
    match (width, height) {
        (None, None) => default,
        (Some(0), _) | (_, Some(0)) => Size::ZERO,
        (Some(width), None) => default.with_width(width),
        (None, Some(height)) => default.with_height(height),
        (Some(width), Some(height)) => Size::new(width, height),
    }
}
