#![forbid(unsafe_code)]

//! Color types and their SGR (Select Graphic Rendition) parameters.

use core::fmt;

use smallvec::{SmallVec, smallvec};

/// Errors raised when building a color from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// A hex color did not start with `#`.
    MissingHash(String),
    /// A hex color had a digit count other than 3 or 6.
    InvalidHexLength(String),
    /// A hex color contained a non-hex digit.
    InvalidHexDigit(String),
    /// A model component was outside its range.
    OutOfRange {
        name: &'static str,
        value: u16,
        max: u16,
    },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash(input) => write!(
                f,
                "A color in hexadecimal format should start with the # sign, but '{input}' does not!"
            ),
            Self::InvalidHexLength(digits) => write!(
                f,
                "A hex code for 24-bit color must be 3-character or 6-character long, \
                 excluding the # sign at the beginning, but '{digits}' is {}-character long!",
                digits.chars().count()
            ),
            Self::InvalidHexDigit(digits) => {
                write!(f, "'{digits}' is not a valid hexadecimal color value!")
            }
            Self::OutOfRange { name, value, max } => write!(
                f,
                "{name} = {value} is out of its required range (0, {max})"
            ),
        }
    }
}

impl std::error::Error for ColorError {}

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB`.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let Some(digits) = input.strip_prefix('#') else {
            return Err(ColorError::MissingHash(input.to_owned()));
        };
        let expanded: String = match digits.chars().count() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_owned(),
            _ => return Err(ColorError::InvalidHexLength(digits.to_owned())),
        };
        let channel = |range: core::ops::Range<usize>| {
            expanded
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorError::InvalidHexDigit(digits.to_owned()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Convert from the HSL model: hue in degrees (0–360), saturation and
    /// lightness in percent (0–100).
    pub fn from_hsl(hue: u16, saturation: u8, lightness: u8) -> Result<Self, ColorError> {
        check_model_ranges(hue, saturation, "lightness", lightness)?;
        let h = f64::from(hue) / 360.0;
        let s = f64::from(saturation) / 100.0;
        let l = f64::from(lightness) / 100.0;
        if s == 0.0 {
            return Ok(Self::from_unit(l, l, l));
        }
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        Ok(Self::from_unit(
            hls_channel(m1, m2, h + 1.0 / 3.0),
            hls_channel(m1, m2, h),
            hls_channel(m1, m2, h - 1.0 / 3.0),
        ))
    }

    /// Convert from the HSV model: hue in degrees (0–360), saturation and
    /// value in percent (0–100).
    pub fn from_hsv(hue: u16, saturation: u8, value: u8) -> Result<Self, ColorError> {
        check_model_ranges(hue, saturation, "value", value)?;
        let h = f64::from(hue) / 360.0;
        let s = f64::from(saturation) / 100.0;
        let v = f64::from(value) / 100.0;
        if s == 0.0 {
            return Ok(Self::from_unit(v, v, v));
        }
        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match (sector as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Ok(Self::from_unit(r, g, b))
    }

    fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let channel = |c: f64| (c * 255.0).round_ties_even().clamp(0.0, 255.0) as u8;
        Self::new(channel(r), channel(g), channel(b))
    }
}

fn check_model_ranges(
    hue: u16,
    saturation: u8,
    third_name: &'static str,
    third: u8,
) -> Result<(), ColorError> {
    if hue > 360 {
        return Err(ColorError::OutOfRange {
            name: "hue",
            value: hue,
            max: 360,
        });
    }
    if saturation > 100 {
        return Err(ColorError::OutOfRange {
            name: "saturation",
            value: u16::from(saturation),
            max: 100,
        });
    }
    if third > 100 {
        return Err(ColorError::OutOfRange {
            name: third_name,
            value: u16::from(third),
            max: 100,
        });
    }
    Ok(())
}

fn hls_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

/// ANSI 16-color indices (0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ansi16 {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl Ansi16 {
    /// Return the raw ANSI index (0–15).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Convert a `u8` index to an `Ansi16` variant, returning `None` if out of range.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Black),
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Yellow),
            4 => Some(Self::Blue),
            5 => Some(Self::Magenta),
            6 => Some(Self::Cyan),
            7 => Some(Self::White),
            8 => Some(Self::BrightBlack),
            9 => Some(Self::BrightRed),
            10 => Some(Self::BrightGreen),
            11 => Some(Self::BrightYellow),
            12 => Some(Self::BrightBlue),
            13 => Some(Self::BrightMagenta),
            14 => Some(Self::BrightCyan),
            15 => Some(Self::BrightWhite),
            _ => None,
        }
    }

    /// SGR foreground code: 30–37 for the base colors, 90–97 for bright ones.
    #[must_use]
    pub const fn foreground_code(self) -> u16 {
        let index = self as u16;
        if index < 8 { 30 + index } else { 90 + index - 8 }
    }
}

/// A color at one of the fidelity levels a terminal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// True-color RGB value.
    Rgb(Rgb),
    /// 256-color palette index.
    Ansi256(u8),
    /// Standard 16-color ANSI value.
    Ansi16(Ansi16),
}

impl Color {
    pub const BLACK: Self = Self::Ansi16(Ansi16::Black);
    pub const RED: Self = Self::Ansi16(Ansi16::Red);
    pub const GREEN: Self = Self::Ansi16(Ansi16::Green);
    pub const YELLOW: Self = Self::Ansi16(Ansi16::Yellow);
    pub const BLUE: Self = Self::Ansi16(Ansi16::Blue);
    pub const MAGENTA: Self = Self::Ansi16(Ansi16::Magenta);
    pub const CYAN: Self = Self::Ansi16(Ansi16::Cyan);
    pub const WHITE: Self = Self::Ansi16(Ansi16::White);
    pub const BRIGHT_BLACK: Self = Self::Ansi16(Ansi16::BrightBlack);
    pub const BRIGHT_RED: Self = Self::Ansi16(Ansi16::BrightRed);
    pub const BRIGHT_GREEN: Self = Self::Ansi16(Ansi16::BrightGreen);
    pub const BRIGHT_YELLOW: Self = Self::Ansi16(Ansi16::BrightYellow);
    pub const BRIGHT_BLUE: Self = Self::Ansi16(Ansi16::BrightBlue);
    pub const BRIGHT_MAGENTA: Self = Self::Ansi16(Ansi16::BrightMagenta);
    pub const BRIGHT_CYAN: Self = Self::Ansi16(Ansi16::BrightCyan);
    pub const BRIGHT_WHITE: Self = Self::Ansi16(Ansi16::BrightWhite);

    /// Create a true-color RGB value.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// Parse a `#RGB` / `#RRGGBB` true color.
    pub fn hex(input: &str) -> Result<Self, ColorError> {
        Rgb::from_hex(input).map(Self::Rgb)
    }

    /// SGR parameters that select this color as the foreground.
    #[must_use]
    pub fn foreground_codes(self) -> SmallVec<[u16; 5]> {
        match self {
            Self::Ansi16(color) => smallvec![color.foreground_code()],
            Self::Ansi256(index) => smallvec![38, 5, u16::from(index)],
            Self::Rgb(rgb) => smallvec![38, 2, u16::from(rgb.r), u16::from(rgb.g), u16::from(rgb.b)],
        }
    }

    /// SGR parameters that select this color as the background.
    ///
    /// The leading code is the foreground code plus 10; arguments are kept.
    #[must_use]
    pub fn background_codes(self) -> SmallVec<[u16; 5]> {
        let mut codes = self.foreground_codes();
        if let Some(first) = codes.first_mut() {
            *first += 10;
        }
        codes
    }
}

impl From<Ansi16> for Color {
    fn from(color: Ansi16) -> Self {
        Self::Ansi16(color)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}
