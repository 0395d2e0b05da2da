#![forbid(unsafe_code)]

//! Blank flexible blocks.

use neon_core::geometry::Size;
use neon_layout::{Block, FLEXIBLE_DEFAULT, LayoutCx, measure_flexible};
use neon_render::{Canvas, Pixel};

/// Soaks up spare room in a row or column.
///
/// Several spaces in one stack share the spare room evenly, so a space on
/// each side of a child centers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlexibleSpace;

impl Block for FlexibleSpace {
    fn raw_measure(&self, _cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        measure_flexible(FLEXIBLE_DEFAULT, width, height)
    }

    fn raw_render(&self, _cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        Canvas::filled(granted, Pixel::SPACE)
    }
}

/// An opaque blank area of any size, usually resized or styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rectangle;

impl Block for Rectangle {
    fn raw_measure(&self, _cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        measure_flexible(FLEXIBLE_DEFAULT, width, height)
    }

    fn raw_render(&self, _cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        Canvas::filled(granted, Pixel::SPACE)
    }
}
