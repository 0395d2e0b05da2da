#![forbid(unsafe_code)]

//! Horizontal and vertical rules.

use neon_core::geometry::Size;
use neon_layout::{Block, LayoutCx};
use neon_render::{Canvas, Pixel};

/// Length of a one-cell-thick line along its own axis.
///
/// A given main constraint is taken as the length; otherwise `default` is
/// used. The cross constraint only matters when it is zero.
pub(crate) fn line_length(default: usize, main: Option<usize>, cross: Option<usize>) -> usize {
    match (main, cross) {
        (Some(0), _) | (_, Some(0)) => 0,
        (Some(length), _) => length,
        (None, _) => default,
    }
}

/// A `─` line separating the children of a column. Stretches horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HorizontalSeparator;

impl HorizontalSeparator {
    pub const DEFAULT_WIDTH: usize = 3;
    pub const GLYPH: char = '─';
}

impl Block for HorizontalSeparator {
    fn raw_measure(&self, _cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        Size::new(line_length(Self::DEFAULT_WIDTH, width, height), 1)
    }

    fn raw_render(&self, _cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        Canvas::filled(granted, Pixel::from(Self::GLYPH))
    }
}

/// A `│` line separating the children of a row. Stretches vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerticalSeparator;

impl VerticalSeparator {
    pub const DEFAULT_HEIGHT: usize = 3;
    pub const GLYPH: char = '│';
}

impl Block for VerticalSeparator {
    fn raw_measure(&self, _cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        Size::new(1, line_length(Self::DEFAULT_HEIGHT, height, width))
    }

    fn raw_render(&self, _cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        Canvas::filled(granted, Pixel::from(Self::GLYPH))
    }
}
