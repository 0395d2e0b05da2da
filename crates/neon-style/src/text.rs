#![forbid(unsafe_code)]

//! Styled runs of text.
//!
//! A *run* is anything that occupies a known number of terminal cells and can
//! write itself, escape sequences included, into an output string. The layout
//! engine only ever needs those two capabilities, captured by [`StyledRun`].

use core::fmt;

use smallvec::{SmallVec, smallvec};

use crate::color::Color;
use crate::style::{Style, StyleFlags};

/// A piece of text that knows its display width and how to render itself.
pub trait StyledRun {
    /// Number of terminal cells the run occupies. One `char` is one cell.
    fn display_width(&self) -> usize;

    /// Append the rendered run, escape sequences included, to `out`.
    fn write_to(&self, out: &mut String);

    /// Render the run into a fresh string.
    fn to_ansi(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

/// Fluent styling shared by every styled value.
///
/// Implementors only provide [`Stylize::map_style`]; every other method is a
/// thin wrapper over it.
pub trait Stylize: Sized {
    /// Apply `f` to every style carried by `self`.
    #[must_use]
    fn map_style(self, f: impl Fn(Style) -> Style) -> Self;

    /// Color the text. An existing foreground color is kept.
    #[must_use]
    fn foreground(self, color: Color) -> Self {
        self.map_style(|style| style.foreground(color))
    }

    /// Color the background. An existing background color is kept.
    #[must_use]
    fn background(self, color: Color) -> Self {
        self.map_style(|style| style.background(color))
    }

    /// Add attribute flags.
    #[must_use]
    fn with_flags(self, flags: StyleFlags) -> Self {
        self.map_style(|style| style.add(flags))
    }

    #[must_use]
    fn bold(self) -> Self {
        self.with_flags(StyleFlags::BOLD)
    }

    #[must_use]
    fn light(self) -> Self {
        self.with_flags(StyleFlags::DIM)
    }

    #[must_use]
    fn italic(self) -> Self {
        self.with_flags(StyleFlags::ITALIC)
    }

    #[must_use]
    fn underlined(self) -> Self {
        self.with_flags(StyleFlags::UNDERLINE)
    }

    #[must_use]
    fn blinking(self) -> Self {
        self.with_flags(StyleFlags::BLINK)
    }

    #[must_use]
    fn inverted(self) -> Self {
        self.with_flags(StyleFlags::REVERSE)
    }

    #[must_use]
    fn hidden(self) -> Self {
        self.with_flags(StyleFlags::HIDDEN)
    }

    #[must_use]
    fn crossed_out(self) -> Self {
        self.with_flags(StyleFlags::STRIKETHROUGH)
    }

    #[must_use]
    fn doubly_underlined(self) -> Self {
        self.with_flags(StyleFlags::DOUBLE_UNDERLINE)
    }

    #[must_use]
    fn framed(self) -> Self {
        self.with_flags(StyleFlags::FRAMED)
    }

    #[must_use]
    fn overlined(self) -> Self {
        self.with_flags(StyleFlags::OVERLINE)
    }
}

/// A single character with a style: the content of one canvas cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyledChar {
    pub ch: char,
    pub style: Style,
}

impl StyledChar {
    /// An unstyled character.
    #[inline]
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            style: Style::EMPTY,
        }
    }

    /// A character with an explicit style.
    #[inline]
    pub const fn styled(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl StyledRun for StyledChar {
    #[inline]
    fn display_width(&self) -> usize {
        1
    }

    fn write_to(&self, out: &mut String) {
        let mut buf = [0u8; 4];
        self.style.write_styled(self.ch.encode_utf8(&mut buf), out);
    }
}

impl Stylize for StyledChar {
    fn map_style(mut self, f: impl Fn(Style) -> Style) -> Self {
        self.style = f(self.style);
        self
    }
}

impl From<char> for StyledChar {
    fn from(ch: char) -> Self {
        Self::new(ch)
    }
}

impl fmt::Display for StyledChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ansi())
    }
}

/// One uniformly styled piece of a [`StyledText`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub content: String,
    pub style: Style,
}

/// A sequence of styled spans.
///
/// Styling a `StyledText` styles every span in it, including padding spans
/// added earlier, but never padding added later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StyledText {
    spans: SmallVec<[Span; 1]>,
}

impl StyledText {
    /// Wrap plain text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            spans: smallvec![Span {
                content: content.into(),
                style: Style::EMPTY,
            }],
        }
    }

    /// Join several runs, keeping each one's style.
    pub fn concat(parts: impl IntoIterator<Item = StyledText>) -> Self {
        Self {
            spans: parts.into_iter().flat_map(|part| part.spans).collect(),
        }
    }

    /// Unstyled text content, escape sequences excluded.
    pub fn content(&self) -> String {
        self.spans.iter().map(|span| span.content.as_str()).collect()
    }

    /// The spans making up this text.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Check if the text has no characters.
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|span| span.content.is_empty())
    }

    /// Add `num_spaces` unstyled spaces on the left.
    #[must_use]
    pub fn padded_left(mut self, num_spaces: usize) -> Self {
        if num_spaces > 0 {
            self.spans.insert(0, Span::spaces(num_spaces));
        }
        self
    }

    /// Add `num_spaces` unstyled spaces on the right.
    #[must_use]
    pub fn padded_right(mut self, num_spaces: usize) -> Self {
        if num_spaces > 0 {
            self.spans.push(Span::spaces(num_spaces));
        }
        self
    }

    /// Add `num_spaces` unstyled spaces on both sides.
    #[must_use]
    pub fn padded(self, num_spaces: usize) -> Self {
        self.padded_left(num_spaces).padded_right(num_spaces)
    }

    /// The only character of a width-1 run, with its style.
    ///
    /// Returns `None` unless the run is exactly one cell wide.
    pub fn single_char(&self) -> Option<StyledChar> {
        if self.display_width() != 1 {
            return None;
        }
        self.spans.iter().find_map(|span| {
            span.content
                .chars()
                .next()
                .map(|ch| StyledChar::styled(ch, span.style))
        })
    }
}

impl Span {
    fn spaces(count: usize) -> Self {
        Self {
            content: " ".repeat(count),
            style: Style::EMPTY,
        }
    }
}

impl StyledRun for StyledText {
    fn display_width(&self) -> usize {
        self.spans
            .iter()
            .map(|span| span.content.chars().count())
            .sum()
    }

    fn write_to(&self, out: &mut String) {
        for span in &self.spans {
            span.style.write_styled(&span.content, out);
        }
    }
}

impl Stylize for StyledText {
    fn map_style(mut self, f: impl Fn(Style) -> Style) -> Self {
        for span in &mut self.spans {
            span.style = f(span.style);
        }
        self
    }
}

impl From<&str> for StyledText {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for StyledText {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl From<StyledChar> for StyledText {
    fn from(ch: StyledChar) -> Self {
        Self {
            spans: smallvec![Span {
                content: ch.ch.to_string(),
                style: ch.style,
            }],
        }
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ansi())
    }
}
