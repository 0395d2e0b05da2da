#![forbid(unsafe_code)]

//! Padding wrapper.
//!
//! Shrinks the constraints passed to the child by the padding, then grows the
//! child's answer back. When a constraint cannot even hold the padding, the
//! block reports the constraint itself on that axis and only the padding on
//! the other; the child gets no room and is not drawn.

use neon_core::geometry::{Point, Rect, Sides, Size};
use neon_render::Canvas;

use crate::block::{Block, Container, LayoutCx};

/// A block wrapped in blank space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Padded<B> {
    inner: B,
    sides: Sides,
}

impl<B> Padded<B> {
    pub const fn new(inner: B, sides: Sides) -> Self {
        Self { inner, sides }
    }

    /// Replace the padding (builder-style).
    #[must_use]
    pub const fn with_sides(mut self, sides: Sides) -> Self {
        self.sides = sides;
        self
    }

    pub const fn sides(&self) -> Sides {
        self.sides
    }

    pub const fn inner(&self) -> &B {
        &self.inner
    }

    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: Block> Block for Padded<B> {
    fn raw_measure(&self, cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        let ph = self.sides.horizontal_sum();
        let pv = self.sides.vertical_sum();
        let grow = |size: Size| size.grown_by(ph, pv);

        match (width, height) {
            (None, None) => grow(self.inner.unconstrained_size_with(cx)),
            (Some(w), None) => {
                if w == 0 {
                    Size::ZERO
                } else if w <= ph {
                    Size::new(w, pv)
                } else {
                    grow(self.inner.measure_with(cx, Some(w - ph), None))
                }
            }
            (None, Some(h)) => {
                if h == 0 {
                    Size::ZERO
                } else if h <= pv {
                    Size::new(ph, h)
                } else {
                    grow(self.inner.measure_with(cx, None, Some(h - pv)))
                }
            }
            (Some(w), Some(h)) => {
                if w == 0 || h == 0 {
                    return Size::ZERO;
                }
                match (w >= ph, h >= pv) {
                    (false, true) => Size::new(w, pv),
                    (true, false) => Size::new(ph, h),
                    (false, false) => Size::new(w, h),
                    (true, true) => grow(self.inner.measure_with(cx, Some(w - ph), Some(h - pv))),
                }
            }
        }
    }

    fn raw_render(&self, cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        self.compose(cx, granted)
    }
}

impl<B: Block> Container for Padded<B> {
    fn children(&self) -> Vec<&dyn Block> {
        vec![&self.inner as &dyn Block]
    }

    fn child_rects(&self, cx: &LayoutCx<'_>, granted: Size) -> Vec<Rect> {
        let ph = self.sides.horizontal_sum();
        let pv = self.sides.vertical_sum();
        if ph > granted.width || pv > granted.height {
            return vec![Rect::ZERO];
        }
        let content = self.inner.measure_with(
            cx,
            Some(granted.width - ph),
            Some(granted.height - pv),
        );
        let origin = Point::new(
            i64::try_from(self.sides.left).unwrap_or(i64::MAX),
            i64::try_from(self.sides.top).unwrap_or(i64::MAX),
        );
        vec![Rect::new(origin, content)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockExt;
    use crate::test_blocks::{Fill, Text};

    fn padded_text() -> Padded<Text> {
        Text("123").padded(1)
    }

    fn lines(canvas: &Canvas) -> Vec<String> {
        canvas.to_string().lines().map(str::to_owned).collect()
    }

    // --- Measurement ---

    #[test]
    fn unconstrained_adds_padding() {
        assert_eq!(padded_text().unconstrained_size(), Size::new(5, 3));
        assert_eq!(Text("123").padded_left(2).unconstrained_size(), Size::new(5, 1));
    }

    #[test]
    fn width_only_table() {
        let expected = [
            (0, Size::ZERO),
            (1, Size::new(1, 2)),
            (2, Size::new(2, 2)),
            (3, Size::new(3, 5)),
            (4, Size::new(4, 4)),
            (5, Size::new(5, 3)),
            (9, Size::new(5, 3)),
        ];
        for (w, size) in expected {
            assert_eq!(padded_text().measure(Some(w), None), size, "width {w}");
        }
    }

    #[test]
    fn height_only_table() {
        let expected = [
            (0, Size::ZERO),
            (1, Size::new(2, 1)),
            (2, Size::new(2, 2)),
            (3, Size::new(5, 3)),
            (9, Size::new(5, 3)),
        ];
        for (h, size) in expected {
            assert_eq!(padded_text().measure(None, Some(h)), size, "height {h}");
        }
    }

    #[test]
    fn both_constraints_table() {
        for w in 0..10 {
            for h in 0..10 {
                let expected = if w == 0 || h == 0 {
                    Size::ZERO
                } else if w <= 2 || h <= 2 {
                    Size::new(w.min(2), h.min(2))
                } else if w == 3 {
                    Size::new(3, h.min(5))
                } else if w == 4 {
                    Size::new(4, h.min(4))
                } else {
                    Size::new(5, 3)
                };
                assert_eq!(padded_text().measure(Some(w), Some(h)), expected, "{w}x{h}");
            }
        }
    }

    #[test]
    fn zero_padding_is_transparent_to_flexibility() {
        assert!(Fill('x').padded(0).is_flexible_in_x_axis(None));
        assert!(Fill('x').padded(0).is_flexible_in_y_axis(None));
    }

    // --- Placement and rendering ---

    #[test]
    fn content_is_offset_by_left_and_top() {
        let block = Text("ab").padded_left(2).padded_top(1);
        let rects = block.child_rects(&LayoutCx::uncached(), Size::new(4, 2));
        assert_eq!(rects, vec![Rect::new(Point::new(0, 1), Size::new(4, 1))]);
        let inner = block.inner().child_rects(&LayoutCx::uncached(), Size::new(4, 1));
        assert_eq!(inner, vec![Rect::new(Point::new(2, 0), Size::new(2, 1))]);
    }

    #[test]
    fn too_small_grant_yields_zero_rect() {
        let rects = padded_text().child_rects(&LayoutCx::uncached(), Size::new(1, 5));
        assert_eq!(rects, vec![Rect::ZERO]);
    }

    #[test]
    fn renders_blank_gutter() {
        assert_eq!(lines(&padded_text().rendered()), vec!["     ", " 123 ", "     "]);
        assert_eq!(lines(&padded_text().render(Size::new(4, 3))), vec!["    ", " 1… ", "    "]);
        assert_eq!(
            lines(&padded_text().render(Size::new(3, 5))),
            vec!["   ", " 1 ", " 2 ", " 3 ", "   "]
        );
    }

    #[test]
    fn tiny_grant_renders_only_padding() {
        assert_eq!(lines(&padded_text().render(Size::new(2, 2))), vec!["  ", "  "]);
    }

    #[test]
    fn builders_replace_sides() {
        let block = Text("x").padded(1).with_sides(Sides::horizontal(3));
        assert_eq!(block.sides(), Sides::new(0, 3, 0, 3));
        assert_eq!(block.into_inner(), Text("x"));
    }
}
