#![forbid(unsafe_code)]

//! Text styles: attribute flags plus optional colors.

use core::fmt::Write as _;

use smallvec::SmallVec;

use crate::color::Color;

bitflags::bitflags! {
    /// Text attribute flags, one per SGR attribute the engine emits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u16 {
        /// Bold / increased intensity.
        const BOLD             = 1 << 0;
        /// Dim / decreased intensity.
        const DIM              = 1 << 1;
        /// Italic text.
        const ITALIC           = 1 << 2;
        /// Underlined text.
        const UNDERLINE        = 1 << 3;
        /// Blinking text.
        const BLINK            = 1 << 4;
        /// Reverse video (swap fg/bg).
        const REVERSE          = 1 << 5;
        /// Hidden / invisible text.
        const HIDDEN           = 1 << 6;
        /// Strikethrough text.
        const STRIKETHROUGH    = 1 << 7;
        /// Double underline.
        const DOUBLE_UNDERLINE = 1 << 8;
        /// Framed text.
        const FRAMED           = 1 << 9;
        /// Overlined text.
        const OVERLINE         = 1 << 10;
    }
}

/// SGR code for each flag, in the order the codes are emitted.
const FLAG_CODES: [(StyleFlags, u16); 11] = [
    (StyleFlags::BOLD, 1),
    (StyleFlags::DIM, 2),
    (StyleFlags::ITALIC, 3),
    (StyleFlags::UNDERLINE, 4),
    (StyleFlags::BLINK, 5),
    (StyleFlags::REVERSE, 7),
    (StyleFlags::HIDDEN, 8),
    (StyleFlags::STRIKETHROUGH, 9),
    (StyleFlags::DOUBLE_UNDERLINE, 21),
    (StyleFlags::FRAMED, 51),
    (StyleFlags::OVERLINE, 53),
];

/// Style applied to a run of text.
///
/// Colors follow "first applied wins": once a channel has a color, later
/// calls to [`Style::foreground`] / [`Style::background`] leave it alone.
/// This matches nested styling, where an inner run keeps its own color when
/// an outer block recolors everything around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: StyleFlags,
}

impl Style {
    /// The empty style.
    pub const EMPTY: Self = Self {
        fg: None,
        bg: None,
        attrs: StyleFlags::empty(),
    };

    /// Create an empty style.
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Check if the style changes nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// Set the foreground color unless one is already set.
    #[must_use]
    pub fn foreground(mut self, color: Color) -> Self {
        self.fg.get_or_insert(color);
        self
    }

    /// Set the background color unless one is already set.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.bg.get_or_insert(color);
        self
    }

    /// Add attribute flags.
    #[must_use]
    pub fn add(mut self, flags: StyleFlags) -> Self {
        self.attrs |= flags;
        self
    }

    /// SGR parameters: attributes in flag order, then foreground, then
    /// background.
    pub fn sgr_codes(&self) -> SmallVec<[u16; 16]> {
        let mut codes: SmallVec<[u16; 16]> = FLAG_CODES
            .iter()
            .filter(|(flag, _)| self.attrs.contains(*flag))
            .map(|(_, code)| *code)
            .collect();
        if let Some(fg) = self.fg {
            codes.extend(fg.foreground_codes());
        }
        if let Some(bg) = self.bg {
            codes.extend(bg.background_codes());
        }
        codes
    }

    /// Append `content` to `out`, wrapped in this style's escape sequence.
    ///
    /// An empty style writes the content unchanged.
    pub fn write_styled(&self, content: &str, out: &mut String) {
        let codes = self.sgr_codes();
        if codes.is_empty() {
            out.push_str(content);
            return;
        }
        out.push_str("\x1b[");
        for (i, code) in codes.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{code}");
        }
        out.push('m');
        out.push_str(content);
        out.push_str("\x1b[m");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styled(style: Style, content: &str) -> String {
        let mut out = String::new();
        style.write_styled(content, &mut out);
        out
    }

    #[test]
    fn empty_style_writes_plain_content() {
        assert!(Style::new().is_empty());
        assert_eq!(styled(Style::new(), "abc"), "abc");
    }

    #[test]
    fn attribute_codes_follow_flag_order() {
        let style = Style::new().add(StyleFlags::UNDERLINE | StyleFlags::BOLD | StyleFlags::OVERLINE);
        assert_eq!(style.sgr_codes().as_slice(), &[1, 4, 53]);
        let all = Style::new().add(StyleFlags::all());
        assert_eq!(
            all.sgr_codes().as_slice(),
            &[1, 2, 3, 4, 5, 7, 8, 9, 21, 51, 53]
        );
    }

    #[test]
    fn colors_follow_attributes() {
        let style = Style::new()
            .background(Color::rgb(1, 2, 3))
            .foreground(Color::RED)
            .add(StyleFlags::BOLD);
        assert_eq!(style.sgr_codes().as_slice(), &[1, 31, 48, 2, 1, 2, 3]);
        assert_eq!(styled(style, "x"), "\x1b[1;31;48;2;1;2;3mx\x1b[m");
    }

    #[test]
    fn first_color_wins() {
        let style = Style::new().foreground(Color::RED).foreground(Color::BLUE);
        assert_eq!(style.fg, Some(Color::RED));
        let style = Style::new().background(Color::GREEN).background(Color::BLUE);
        assert_eq!(style.bg, Some(Color::GREEN));
    }
}
