#![forbid(unsafe_code)]

//! Borders around blocks.
//!
//! A [`Framed`] block is three layers composited in order: the content
//! padded by one cell, the border drawn over that padding, and an optional
//! title centered on the top edge.

use neon_core::geometry::{Point, Rect, Size};
use neon_render::{Canvas, Pixel};
use neon_style::{Color, StyledChar, Stylize};

use crate::block::{Block, BlockExt, Container, LayoutCx};
use crate::flexible::{FLEXIBLE_DEFAULT, measure_flexible};
use crate::padded::Padded;

/// Box-drawing glyphs for a frame: four corners, five junctions and the
/// horizontal and vertical lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameStyle {
    pub top_left: char,
    pub top_mid: char,
    pub top_right: char,
    pub left_mid: char,
    pub center: char,
    pub right_mid: char,
    pub bottom_left: char,
    pub bottom_mid: char,
    pub bottom_right: char,
    pub horizontal_line: char,
    pub vertical_line: char,
}

impl FrameStyle {
    pub const REGULAR: Self = Self::from_glyphs(['┌', '┬', '┐', '├', '┼', '┤', '└', '┴', '┘', '─', '│']);
    pub const BOLD: Self = Self::from_glyphs(['┏', '┳', '┓', '┣', '╋', '┫', '┗', '┻', '┛', '━', '┃']);
    pub const DOUBLE: Self = Self::from_glyphs(['╔', '╦', '╗', '╠', '╬', '╣', '╚', '╩', '╝', '═', '║']);
    pub const ROUNDED: Self = Self::from_glyphs(['╭', '┬', '╮', '├', '┼', '┤', '╰', '┴', '╯', '─', '│']);

    /// Glyphs in reading order: the 3x3 grid of corners and junctions, then
    /// the horizontal and vertical lines.
    pub const fn from_glyphs(glyphs: [char; 11]) -> Self {
        let [
            top_left,
            top_mid,
            top_right,
            left_mid,
            center,
            right_mid,
            bottom_left,
            bottom_mid,
            bottom_right,
            horizontal_line,
            vertical_line,
        ] = glyphs;
        Self {
            top_left,
            top_mid,
            top_right,
            left_mid,
            center,
            right_mid,
            bottom_left,
            bottom_mid,
            bottom_right,
            horizontal_line,
            vertical_line,
        }
    }

    /// Glyph at `(x, y)` of a border of size `size`, or `None` inside it.
    fn glyph_at(&self, x: usize, y: usize, size: Size) -> Option<char> {
        let last_x = size.width.saturating_sub(1);
        let last_y = size.height.saturating_sub(1);
        match (x, y) {
            (0, 0) => Some(self.top_left),
            (x, 0) if x == last_x => Some(self.top_right),
            (0, y) if y == last_y => Some(self.bottom_left),
            (x, y) if x == last_x && y == last_y => Some(self.bottom_right),
            (_, y) if y == 0 || y == last_y => Some(self.horizontal_line),
            (x, _) if x == 0 || x == last_x => Some(self.vertical_line),
            _ => None,
        }
    }
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self::REGULAR
    }
}

/// The border layer: stretches to any size, transparent inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameBorder {
    style: FrameStyle,
    color: Option<Color>,
}

impl FrameBorder {
    pub const fn new(style: FrameStyle) -> Self {
        Self { style, color: None }
    }

    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl Block for FrameBorder {
    fn raw_measure(&self, _cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        measure_flexible(FLEXIBLE_DEFAULT, width, height)
    }

    fn raw_render(&self, _cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        Canvas::of(granted, |x, y| match self.style.glyph_at(x, y, granted) {
            None => Pixel::Transparent,
            Some(glyph) => {
                let ch = StyledChar::new(glyph);
                Pixel::Styled(match self.color {
                    Some(color) => ch.foreground(color),
                    None => ch,
                })
            }
        })
    }
}

/// A block surrounded by a one-cell border, with an optional title.
#[derive(Debug)]
pub struct Framed<B> {
    content: Padded<B>,
    border: FrameBorder,
    title: Option<Padded<Box<dyn Block>>>,
}

impl<B: Block + 'static> Framed<B> {
    pub fn new(inner: B) -> Self {
        Self {
            content: inner.padded(1),
            border: FrameBorder::default(),
            title: None,
        }
    }

    /// Show `title` on the top edge, with a space on either side.
    #[must_use]
    pub fn title(mut self, title: impl Block + 'static) -> Self {
        self.title = Some(title.boxed().padded_horizontally(1));
        self
    }

    #[must_use]
    pub fn style(mut self, style: FrameStyle) -> Self {
        self.border.style = style;
        self
    }

    /// Color the border only; content and title keep their own styles.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.border.color = Some(color);
        self
    }

    pub fn frame_style(&self) -> FrameStyle {
        self.border.style
    }

    pub fn inner(&self) -> &B {
        self.content.inner()
    }
}

impl<B: Block> Block for Framed<B> {
    fn raw_measure(&self, cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        if width.is_some_and(|w| w < 2) || height.is_some_and(|h| h < 2) {
            return Size::ZERO;
        }
        self.content.measure_with(cx, width, height)
    }

    fn raw_render(&self, cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        self.compose(cx, granted)
    }
}

impl<B: Block> Container for Framed<B> {
    fn children(&self) -> Vec<&dyn Block> {
        let mut children: Vec<&dyn Block> = vec![&self.content as &dyn Block, &self.border];
        if let Some(title) = &self.title {
            children.push(title);
        }
        children
    }

    fn child_rects(&self, cx: &LayoutCx<'_>, granted: Size) -> Vec<Rect> {
        let (w, h) = (Some(granted.width), Some(granted.height));
        let content = self.content.measure_with(cx, w, h);
        let frame = self.border.measure_with(cx, w, h);
        let mut rects = vec![Rect::from_size(content), Rect::from_size(frame)];

        if let Some(title) = &self.title
            && content.width > 2
            && content.height > 2
        {
            let size = title.measure_with(cx, Some(content.width - 2), Some(1));
            let x = (frame.width / 2).saturating_sub(size.width / 2);
            let origin = Point::new(i64::try_from(x).unwrap_or(i64::MAX), 0);
            rects.push(Rect::new(origin, size));
        }
        rects
    }
}
