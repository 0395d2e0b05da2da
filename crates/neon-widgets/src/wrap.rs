#![forbid(unsafe_code)]

//! Character wrapping shared by [`Label`](crate::Label) and
//! [`TextArea`](crate::TextArea).
//!
//! Text is laid out row-major, one `char` per cell, with no regard for word
//! boundaries. When the area is too small, the last visible cell becomes an
//! ellipsis.

use neon_core::geometry::Size;
use neon_render::{Canvas, Pixel};
use neon_style::{StyledChar, StyledText};

/// Shown in place of the last visible character of truncated text.
pub(crate) const ELLIPSIS: char = '…';

/// Flatten styled text into per-cell characters.
pub(crate) fn styled_chars(text: &StyledText) -> Vec<StyledChar> {
    text.spans()
        .iter()
        .flat_map(|span| {
            span.content
                .chars()
                .map(move |ch| StyledChar::styled(ch, span.style))
        })
        .collect()
}

/// Rows needed to show `len` characters `width` per row.
#[inline]
pub(crate) const fn rows_needed(len: usize, width: usize) -> usize {
    len.div_ceil(width)
}

/// Draw `chars` into a canvas of `granted`, truncating with an ellipsis.
pub(crate) fn lay_out(chars: &[StyledChar], granted: Size) -> Canvas {
    let area = granted.area();
    let truncated = area < chars.len();
    Canvas::of(granted, |x, y| {
        let i = y.saturating_mul(granted.width).saturating_add(x);
        if truncated && i + 1 == area {
            return Pixel::from(ELLIPSIS);
        }
        chars.get(i).map_or(Pixel::SPACE, |ch| Pixel::Styled(*ch))
    })
}
