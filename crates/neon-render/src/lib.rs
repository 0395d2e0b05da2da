#![forbid(unsafe_code)]

//! Render: pixels and the immutable canvases blocks draw into.

pub mod canvas;
pub mod pixel;

pub use canvas::{Anchor, Canvas, CanvasError};
pub use pixel::{Pixel, PixelError};
