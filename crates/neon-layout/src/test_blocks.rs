//! Minimal leaf blocks for unit tests.

use neon_core::geometry::Size;
use neon_render::{Canvas, Pixel};

use crate::block::{Block, LayoutCx};
use crate::flexible::{FLEXIBLE_DEFAULT, measure_flexible};

/// Stretches to any size, filled with one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill(pub char);

impl Block for Fill {
    fn raw_measure(&self, _cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        measure_flexible(FLEXIBLE_DEFAULT, width, height)
    }

    fn raw_render(&self, _cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        Canvas::filled(granted, Pixel::from(self.0))
    }
}

/// Ignores its constraints and always draws 3x3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Oversized;

impl Block for Oversized {
    fn raw_measure(&self, _cx: &LayoutCx<'_>, _width: Option<usize>, _height: Option<usize>) -> Size {
        Size::square(3)
    }

    fn raw_render(&self, _cx: &LayoutCx<'_>, _granted: Size) -> Canvas {
        Canvas::filled(Size::square(3), Pixel::from('#'))
    }
}

/// Reports a width of zero and a height of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroWidth;

impl Block for ZeroWidth {
    fn raw_measure(&self, _cx: &LayoutCx<'_>, _width: Option<usize>, _height: Option<usize>) -> Size {
        Size::new(0, 1)
    }

    fn raw_render(&self, _cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        Canvas::filled(granted, Pixel::SPACE)
    }
}

/// Row-major wrapped text, truncated with an ellipsis when it does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text(pub &'static str);

impl Block for Text {
    fn raw_measure(&self, _cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        let len = self.0.chars().count();
        if len == 0 || width == Some(0) || height == Some(0) {
            return Size::ZERO;
        }
        match width {
            Some(w) if w < len => {
                let rows = len.div_ceil(w);
                Size::new(w, height.map_or(rows, |h| rows.min(h)))
            }
            _ => Size::new(len, 1),
        }
    }

    fn raw_render(&self, _cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        let chars: Vec<char> = self.0.chars().collect();
        let area = granted.area();
        let fits = area >= chars.len();
        Canvas::of(granted, |x, y| {
            let i = y * granted.width + x;
            if !fits && i == area - 1 {
                Pixel::from('…')
            } else {
                Pixel::from(chars.get(i).copied().unwrap_or(' '))
            }
        })
    }
}
