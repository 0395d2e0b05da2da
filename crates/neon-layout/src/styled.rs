#![forbid(unsafe_code)]

//! Block-level styling: restyles every opaque pixel a child renders.

use neon_core::geometry::{Rect, Size};
use neon_render::{Canvas, Pixel};
use neon_style::{Color, StyleFlags, StyledChar, Stylize};

use crate::block::{Block, Container, LayoutCx};

/// One styling step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleOp {
    /// Text color; pixels that already have one keep it.
    Foreground(Color),
    /// Background color; pixels that already have one keep it.
    Background(Color),
    /// Attribute flags, added to whatever the pixel carries.
    Flags(StyleFlags),
}

impl StyleOp {
    /// Apply the step to one character.
    #[must_use]
    pub fn apply(self, ch: StyledChar) -> StyledChar {
        match self {
            Self::Foreground(color) => ch.foreground(color),
            Self::Background(color) => ch.background(color),
            Self::Flags(flags) => ch.with_flags(flags),
        }
    }

    /// Apply the step to one pixel. Transparent pixels stay transparent.
    #[must_use]
    pub fn apply_to_pixel(self, pixel: &Pixel) -> Pixel {
        match pixel {
            Pixel::Transparent => Pixel::Transparent,
            Pixel::Styled(ch) => Pixel::Styled(self.apply(*ch)),
        }
    }
}

/// A block whose render is passed through a [`StyleOp`].
///
/// Sizing is the child's, unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styled<B> {
    inner: B,
    op: StyleOp,
}

impl<B> Styled<B> {
    pub const fn new(inner: B, op: StyleOp) -> Self {
        Self { inner, op }
    }

    pub const fn op(&self) -> StyleOp {
        self.op
    }

    pub const fn inner(&self) -> &B {
        &self.inner
    }

    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: Block> Block for Styled<B> {
    #[inline]
    fn raw_measure(&self, cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        self.inner.measure_with(cx, width, height)
    }

    fn raw_render(&self, cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        let op = self.op;
        self.inner
            .render_with(cx, granted)
            .map(|pixel| op.apply_to_pixel(pixel))
    }
}

impl<B: Block> Container for Styled<B> {
    fn children(&self) -> Vec<&dyn Block> {
        vec![&self.inner as &dyn Block]
    }

    fn child_rects(&self, cx: &LayoutCx<'_>, granted: Size) -> Vec<Rect> {
        vec![Rect::from_size(self.measure_with(
            cx,
            Some(granted.width),
            Some(granted.height),
        ))]
    }
}
