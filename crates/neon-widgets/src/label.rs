#![forbid(unsafe_code)]

//! Single-run text that wraps when narrowed.

use neon_core::geometry::Size;
use neon_layout::{Block, LayoutCx};
use neon_render::Canvas;
use neon_style::{StyledChar, StyledText};

use crate::wrap::{lay_out, rows_needed, styled_chars};

/// Text measured at its full length on one line.
///
/// Narrower widths wrap it character by character; a height limit on top
/// of that truncates it with an ellipsis. Empty text measures as zero.
///
/// ```ignore
/// let label = Label::new("12345");
/// assert_eq!(label.measure(Some(2), None), Size::new(2, 3));
/// assert_eq!(label.render(Size::new(2, 2)).to_string(), "12\n3…");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    content: StyledText,
    chars: Vec<StyledChar>,
}

impl Label {
    pub fn new(content: impl Into<StyledText>) -> Self {
        let content = content.into();
        let chars = styled_chars(&content);
        Self { content, chars }
    }

    pub fn content(&self) -> &StyledText {
        &self.content
    }

    /// Number of characters, one per cell.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Block for Label {
    fn raw_measure(&self, _cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        let len = self.len();
        if len == 0 || width == Some(0) || height == Some(0) {
            return Size::ZERO;
        }
        match width {
            Some(w) if w <= len => {
                let rows = rows_needed(len, w);
                Size::new(w, height.map_or(rows, |h| rows.min(h)))
            }
            _ => Size::new(len, 1),
        }
    }

    fn raw_render(&self, _cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        lay_out(&self.chars, granted)
    }
}

impl From<&str> for Label {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Label {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl From<StyledText> for Label {
    fn from(content: StyledText) -> Self {
        Self::new(content)
    }
}
