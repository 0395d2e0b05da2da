#![forbid(unsafe_code)]

//! Neon public facade crate.
//!
//! Re-exports the block protocol, the structural blocks and the leaf
//! widgets from the internal crates, and folds their error types into one
//! [`Error`]. Most code only needs the [`prelude`]:
//!
//! ```ignore
//! use neon::prelude::*;
//!
//! let card = Column::default()
//!     .child(Label::new("Build").bold())
//!     .child(ProgressBar::new(0.5)?)
//!     .framed()
//!     .title(Label::new("CI"));
//! println!("{}", card.render(Size::new(14, 4)));
//! println!("{}", card.display()); // at its natural size
//! ```

use std::fmt;

// --- Geometry re-exports ---------------------------------------------------

pub use neon_core::geometry::{GeometryError, Point, Rect, Sides, Size};

// --- Style re-exports ------------------------------------------------------

pub use neon_style::{
    Ansi16, Color, ColorError, Rgb, Style, StyleFlags, StyledChar, StyledRun, StyledText, Stylize,
};

// --- Render re-exports -----------------------------------------------------

pub use neon_render::{Anchor, Canvas, CanvasError, Pixel, PixelError};

// --- Layout re-exports -----------------------------------------------------

pub use neon_layout::{
    Alignment, Block, BlockExt, BlockId, CacheStats, Column, Container, DisplayBlock, FixedHeight,
    FixedSize, FixedWidth, FrameBorder, FrameStyle, Framed, INFINITY, Keyed, LayoutCx,
    MeasureCache, Padded, Row, Styled,
};

// --- Widget re-exports -----------------------------------------------------

pub use neon_widgets::{
    FlexibleSpace, HorizontalSeparator, Label, ProgressBar, Rectangle, TextArea,
    VerticalSeparator, WidgetError,
};

// --- Errors ---------------------------------------------------------------

/// Any error raised while building blocks or their content.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Negative dimensions.
    Geometry(GeometryError),
    /// Malformed color input.
    Color(ColorError),
    /// Content that does not fit a single cell.
    Pixel(PixelError),
    /// Canvases that cannot be joined.
    Canvas(CanvasError),
    /// Invalid widget parameters.
    Widget(WidgetError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(err) => write!(f, "{err}"),
            Self::Color(err) => write!(f, "{err}"),
            Self::Pixel(err) => write!(f, "{err}"),
            Self::Canvas(err) => write!(f, "{err}"),
            Self::Widget(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(err) => Some(err),
            Self::Color(err) => Some(err),
            Self::Pixel(err) => Some(err),
            Self::Canvas(err) => Some(err),
            Self::Widget(err) => Some(err),
        }
    }
}

impl From<GeometryError> for Error {
    fn from(err: GeometryError) -> Self {
        Self::Geometry(err)
    }
}

impl From<ColorError> for Error {
    fn from(err: ColorError) -> Self {
        Self::Color(err)
    }
}

impl From<PixelError> for Error {
    fn from(err: PixelError) -> Self {
        Self::Pixel(err)
    }
}

impl From<CanvasError> for Error {
    fn from(err: CanvasError) -> Self {
        Self::Canvas(err)
    }
}

impl From<WidgetError> for Error {
    fn from(err: WidgetError) -> Self {
        Self::Widget(err)
    }
}

/// Standard result type for neon APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, Block, BlockExt, Canvas, Color, Column, Error, FlexibleSpace, FrameStyle,
        HorizontalSeparator, Label, LayoutCx, MeasureCache, Pixel, ProgressBar, Rectangle,
        Result, Row, Sides, Size, StyledText, Stylize, TextArea, VerticalSeparator,
    };

    pub use crate::{core, layout, render, style, widgets};
}

pub use neon_core as core;
pub use neon_layout as layout;
pub use neon_render as render;
pub use neon_style as style;
pub use neon_widgets as widgets;
