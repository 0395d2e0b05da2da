#![forbid(unsafe_code)]

//! Progress bar drawn with eighth-block glyphs.

use neon_core::geometry::Size;
use neon_layout::{Block, LayoutCx};
use neon_render::{Canvas, Pixel};

use crate::error::WidgetError;
use crate::separator::line_length;

/// Partial-cell glyphs, from one eighth to a full cell.
pub const BLOCK_CHARS: [char; 8] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

const UNITS_PER_CELL: usize = BLOCK_CHARS.len();

/// A one-line bar filled left to right in eighths of a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    progress: f64,
}

impl ProgressBar {
    pub const DEFAULT_WIDTH: usize = 10;

    /// A bar at `progress`, which must lie in `0.0..=1.0`.
    pub fn new(progress: f64) -> Result<Self, WidgetError> {
        if progress.is_nan() {
            return Err(WidgetError::ProgressNotANumber);
        }
        if progress < 0.0 {
            return Err(WidgetError::NegativeProgress(progress));
        }
        if progress > 1.0 {
            return Err(WidgetError::ProgressAboveOne(progress));
        }
        Ok(Self { progress })
    }

    #[inline]
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    /// Filled eighths out of `width * 8`.
    fn filled_units(&self, width: usize) -> usize {
        let available = width.saturating_mul(UNITS_PER_CELL);
        // progress is within [0, 1], so the product fits in usize.
        (self.progress * available as f64).floor() as usize
    }
}

impl Block for ProgressBar {
    fn raw_measure(&self, _cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        Size::new(line_length(Self::DEFAULT_WIDTH, width, height), 1)
    }

    fn raw_render(&self, _cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        let filled = self.filled_units(granted.width);
        let full = filled / UNITS_PER_CELL;
        let partial = filled % UNITS_PER_CELL;
        Canvas::of(granted, |x, _| {
            if x < full {
                Pixel::from(BLOCK_CHARS[UNITS_PER_CELL - 1])
            } else if x == full && partial > 0 {
                Pixel::from(BLOCK_CHARS[partial - 1])
            } else {
                Pixel::SPACE
            }
        })
    }
}
