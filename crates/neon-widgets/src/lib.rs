#![forbid(unsafe_code)]

//! Leaf blocks.
//!
//! - [`Label`] - one line of text, wrapped character by character when
//!   narrowed
//! - [`TextArea`] - wrapped text that takes every column it is offered
//! - [`HorizontalSeparator`] / [`VerticalSeparator`] - rules between stacked
//!   children
//! - [`ProgressBar`] - a bar drawn in eighths of a cell
//! - [`FlexibleSpace`] / [`Rectangle`] - blank flexible space
//!
//! Everything here implements [`neon_layout::Block`], so the fluent
//! wrappers of [`neon_layout::BlockExt`] apply.

pub mod error;
pub mod label;
pub mod progress;
pub mod separator;
pub mod spacer;
pub mod text_area;
mod wrap;

pub use error::WidgetError;
pub use label::Label;
pub use progress::{BLOCK_CHARS, ProgressBar};
pub use separator::{HorizontalSeparator, VerticalSeparator};
pub use spacer::{FlexibleSpace, Rectangle};
pub use text_area::TextArea;
