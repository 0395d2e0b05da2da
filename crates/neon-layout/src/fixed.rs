#![forbid(unsafe_code)]

//! Wrappers pinning a block's width, height, or both.
//!
//! The pinned value is passed to the child as its constraint and then
//! written over the child's answer, whatever the caller's constraint was.

use neon_core::geometry::{Rect, Size};
use neon_render::Canvas;

use crate::block::{Block, Container, LayoutCx};

/// The single child rectangle of every fixed wrapper.
fn child_rect(child: &dyn Block, cx: &LayoutCx<'_>, granted: Size) -> Vec<Rect> {
    vec![Rect::from_size(child.measure_with(
        cx,
        Some(granted.width),
        Some(granted.height),
    ))]
}

/// Always exactly `width` columns wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedWidth<B> {
    inner: B,
    width: usize,
}

impl<B> FixedWidth<B> {
    pub const fn new(inner: B, width: usize) -> Self {
        Self { inner, width }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: Block> Block for FixedWidth<B> {
    fn raw_measure(&self, cx: &LayoutCx<'_>, _width: Option<usize>, height: Option<usize>) -> Size {
        self.inner
            .measure_with(cx, Some(self.width), height)
            .with_width(self.width)
    }

    fn raw_render(&self, cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        self.compose(cx, granted)
    }
}

impl<B: Block> Container for FixedWidth<B> {
    fn children(&self) -> Vec<&dyn Block> {
        vec![&self.inner as &dyn Block]
    }

    fn child_rects(&self, cx: &LayoutCx<'_>, granted: Size) -> Vec<Rect> {
        child_rect(&self.inner, cx, granted)
    }
}

/// Always exactly `height` rows tall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHeight<B> {
    inner: B,
    height: usize,
}

impl<B> FixedHeight<B> {
    pub const fn new(inner: B, height: usize) -> Self {
        Self { inner, height }
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: Block> Block for FixedHeight<B> {
    fn raw_measure(&self, cx: &LayoutCx<'_>, width: Option<usize>, _height: Option<usize>) -> Size {
        self.inner
            .measure_with(cx, width, Some(self.height))
            .with_height(self.height)
    }

    fn raw_render(&self, cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        self.compose(cx, granted)
    }
}

impl<B: Block> Container for FixedHeight<B> {
    fn children(&self) -> Vec<&dyn Block> {
        vec![&self.inner as &dyn Block]
    }

    fn child_rects(&self, cx: &LayoutCx<'_>, granted: Size) -> Vec<Rect> {
        child_rect(&self.inner, cx, granted)
    }
}

/// Always exactly `size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSize<B> {
    inner: B,
    size: Size,
}

impl<B> FixedSize<B> {
    pub const fn new(inner: B, size: Size) -> Self {
        Self { inner, size }
    }

    pub const fn size(&self) -> Size {
        self.size
    }

    pub const fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: Block> Block for FixedSize<B> {
    fn raw_measure(&self, cx: &LayoutCx<'_>, _width: Option<usize>, _height: Option<usize>) -> Size {
        self.inner
            .measure_with(cx, Some(self.size.width), Some(self.size.height))
            .with_width(self.size.width)
            .with_height(self.size.height)
    }

    fn raw_render(&self, cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        self.compose(cx, granted)
    }
}

impl<B: Block> Container for FixedSize<B> {
    fn children(&self) -> Vec<&dyn Block> {
        vec![&self.inner as &dyn Block]
    }

    fn child_rects(&self, cx: &LayoutCx<'_>, granted: Size) -> Vec<Rect> {
        child_rect(&self.inner, cx, granted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockExt;
    use crate::test_blocks::Text;

    fn lines(canvas: &Canvas) -> Vec<String> {
        canvas.to_string().lines().map(str::to_owned).collect()
    }

    #[test]
    fn fixed_width_overrides_width() {
        let block = FixedWidth::new(Text("123"), 2);
        assert_eq!(block.unconstrained_size(), Size::new(2, 2));
        for w in [0, 2, 4] {
            assert_eq!(block.measure(Some(w), None), Size::new(2, 2));
        }
        assert_eq!(block.measure(None, Some(0)), Size::ZERO);
        assert_eq!(block.measure(Some(4), Some(1)), Size::new(2, 1));
        assert_eq!(block.measure(Some(4), Some(4)), Size::new(2, 2));
        assert_eq!(lines(&block.rendered()), vec!["12", "3 "]);
    }

    #[test]
    fn fixed_height_overrides_height() {
        let block = FixedHeight::new(Text("123"), 3);
        assert_eq!(block.unconstrained_size(), Size::new(3, 3));
        assert_eq!(block.measure(Some(2), None), Size::new(2, 3));
        assert_eq!(block.measure(Some(0), Some(4)), Size::ZERO);
        assert_eq!(block.measure(None, Some(1)), Size::new(3, 3));
        assert_eq!(lines(&block.render(Size::new(2, 3))), vec!["12", "3 ", "  "]);
    }

    #[test]
    fn fixed_size_ignores_constraints() {
        let block = FixedSize::new(Text("12345"), Size::new(2, 2));
        assert_eq!(block.unconstrained_size(), Size::new(2, 2));
        assert_eq!(block.measure(Some(9), Some(9)), Size::new(2, 2));
        assert_eq!(lines(&block.rendered()), vec!["12", "3…"]);
    }

    #[test]
    fn fixed_value_wins_over_child_answer() {
        let block = FixedSize::new(Text("1"), Size::new(3, 2));
        assert_eq!(block.unconstrained_size(), Size::new(3, 2));
        assert_eq!(lines(&block.rendered()), vec!["1  ", "   "]);
    }

    #[test]
    fn resized_picks_the_matching_wrapper() {
        assert_eq!(Text("123").resized(Some(2), None).unconstrained_size(), Size::new(2, 2));
        assert_eq!(Text("123").resized(None, Some(3)).unconstrained_size(), Size::new(3, 3));
        assert_eq!(Text("123").resized(Some(1), Some(1)).unconstrained_size(), Size::new(1, 1));
        assert_eq!(Text("123").resized(None, None).unconstrained_size(), Size::new(3, 1));
    }
}
