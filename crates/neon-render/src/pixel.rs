#![forbid(unsafe_code)]

//! Canvas pixels.
//!
//! A pixel is either [`Pixel::Transparent`] or exactly one styled character.
//! Transparency only matters while compositing: when a canvas is overlaid on
//! another with [`Canvas::replace`](crate::canvas::Canvas::replace), the
//! pixel underneath shows through. Printed on its own, a transparent pixel is
//! a space.

use core::fmt;

use neon_style::{StyledChar, StyledRun, StyledText};

/// Errors raised when converting a value into a [`Pixel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelError {
    /// The source spans a number of cells other than one.
    NotSingleCharacter(usize),
}

impl fmt::Display for PixelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSingleCharacter(count) => write!(
                f,
                "Only a styled run with exactly 1 character can be used as a pixel, \
                 but {count} were provided"
            ),
        }
    }
}

impl std::error::Error for PixelError {}

/// One cell of a [`Canvas`](crate::canvas::Canvas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pixel {
    /// Shows whatever lies underneath; prints as a space.
    #[default]
    Transparent,
    /// A single visible character.
    Styled(StyledChar),
}

impl Pixel {
    /// An opaque, unstyled space.
    pub const SPACE: Self = Self::Styled(StyledChar::new(' '));

    /// Check if the pixel is transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }

    /// The styled character, if the pixel is opaque.
    #[inline]
    pub const fn styled_char(&self) -> Option<StyledChar> {
        match self {
            Self::Transparent => None,
            Self::Styled(ch) => Some(*ch),
        }
    }
}

impl StyledRun for Pixel {
    #[inline]
    fn display_width(&self) -> usize {
        1
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Self::Transparent => out.push(' '),
            Self::Styled(ch) => ch.write_to(out),
        }
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ansi())
    }
}

impl From<char> for Pixel {
    fn from(ch: char) -> Self {
        Self::Styled(StyledChar::new(ch))
    }
}

impl From<StyledChar> for Pixel {
    fn from(ch: StyledChar) -> Self {
        Self::Styled(ch)
    }
}

impl TryFrom<&StyledText> for Pixel {
    type Error = PixelError;

    fn try_from(text: &StyledText) -> Result<Self, Self::Error> {
        text.single_char()
            .map(Self::Styled)
            .ok_or(PixelError::NotSingleCharacter(text.display_width()))
    }
}

impl TryFrom<StyledText> for Pixel {
    type Error = PixelError;

    fn try_from(text: StyledText) -> Result<Self, Self::Error> {
        Self::try_from(&text)
    }
}

impl TryFrom<&str> for Pixel {
    type Error = PixelError;

    fn try_from(content: &str) -> Result<Self, Self::Error> {
        let mut chars = content.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(Self::from(ch)),
            _ => Err(PixelError::NotSingleCharacter(content.chars().count())),
        }
    }
}

impl TryFrom<String> for Pixel {
    type Error = PixelError;

    fn try_from(content: String) -> Result<Self, Self::Error> {
        Self::try_from(content.as_str())
    }
}
