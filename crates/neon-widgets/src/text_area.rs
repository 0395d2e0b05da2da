#![forbid(unsafe_code)]

//! Text that fills whatever width it is given.

use neon_core::geometry::Size;
use neon_layout::{Block, LayoutCx};
use neon_render::Canvas;
use neon_style::{StyledChar, StyledText};

use crate::error::WidgetError;
use crate::wrap::{lay_out, rows_needed, styled_chars};

/// Wrapped text that takes every column offered.
///
/// Unlike [`Label`](crate::Label), a text area with a width constraint
/// always reports that width, so it stretches inside rows. Empty text still
/// occupies one line. An optional line limit caps the height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArea {
    content: StyledText,
    chars: Vec<StyledChar>,
    max_lines: Option<usize>,
}

impl TextArea {
    /// Width of an empty text area with no width constraint.
    pub const DEFAULT_WIDTH: usize = 4;

    pub fn new(content: impl Into<StyledText>) -> Self {
        let content = content.into();
        let chars = styled_chars(&content);
        Self {
            content,
            chars,
            max_lines: None,
        }
    }

    /// A text area never taller than `max_lines`.
    pub fn with_max_lines(
        content: impl Into<StyledText>,
        max_lines: usize,
    ) -> Result<Self, WidgetError> {
        if max_lines == 0 {
            return Err(WidgetError::ZeroMaxLines);
        }
        Ok(Self {
            max_lines: Some(max_lines),
            ..Self::new(content)
        })
    }

    pub fn content(&self) -> &StyledText {
        &self.content
    }

    pub const fn max_lines(&self) -> Option<usize> {
        self.max_lines
    }
}

impl Block for TextArea {
    fn raw_measure(&self, _cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        let height = match (height, self.max_lines) {
            (Some(h), Some(max)) => Some(h.min(max)),
            (None, max) => max,
            (h, None) => h,
        };
        let len = self.chars.len();

        match (width, height) {
            (Some(0), _) | (_, Some(0)) => Size::ZERO,
            (None, _) if len == 0 => Size::new(Self::DEFAULT_WIDTH, 1),
            (None, _) => Size::new(len, 1),
            (Some(w), _) if len == 0 => Size::new(w, 1),
            (Some(w), None) => Size::new(w, rows_needed(len, w)),
            (Some(w), Some(h)) => Size::new(w, rows_needed(len, w).min(h)),
        }
    }

    fn raw_render(&self, _cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        lay_out(&self.chars, granted)
    }
}
