#![forbid(unsafe_code)]

//! Style system: colors, text attributes, and styled runs of text.
//!
//! The layout engine treats styled text as opaque: it only asks a run for its
//! display width and for its rendered form. Everything about escape codes
//! lives here.

pub mod color;
pub mod style;
pub mod text;

pub use color::{Ansi16, Color, ColorError, Rgb};
pub use style::{Style, StyleFlags};
pub use text::{Span, StyledChar, StyledRun, StyledText, Stylize};
