#![forbid(unsafe_code)]

//! Block layout.
//!
//! Everything drawn by neon is a [`Block`]: a node that can measure itself
//! under optional width and height constraints and render a [`Canvas`] of a
//! granted size. This crate provides the protocol and the structural blocks:
//!
//! - [`Row`] / [`Column`] - stack children along one axis, sharing spare
//!   room between flexible children
//! - [`Padded`] - blank space around a child
//! - [`Framed`] - a box-drawing border with an optional title
//! - [`FixedWidth`] / [`FixedHeight`] / [`FixedSize`] - pin a dimension
//! - [`Styled`] - restyle everything a child draws
//! - [`Keyed`] - give a child an identity so its measurements are cached
//!
//! Leaf blocks (labels, text areas, separators, progress bars) live in
//! `neon-widgets`.
//!
//! [`Canvas`]: neon_render::Canvas

pub mod block;
pub mod distributor;
pub mod fixed;
pub mod flexible;
pub mod framed;
pub mod keyed;
pub mod measure_cache;
pub mod padded;
pub mod stack;
pub mod styled;
#[cfg(test)]
mod test_blocks;

pub use block::{Block, BlockExt, Container, DisplayBlock, INFINITY, LayoutCx};
pub use distributor::ItemsDistributor;
pub use fixed::{FixedHeight, FixedSize, FixedWidth};
pub use flexible::{FLEXIBLE_DEFAULT, measure_flexible};
pub use framed::{FrameBorder, FrameStyle, Framed};
pub use keyed::Keyed;
pub use measure_cache::{BlockId, CacheStats, MeasureCache};
pub use neon_core::geometry::{Point, Rect, Sides, Size};
pub use padded::Padded;
pub use stack::{Alignment, Column, Row};
pub use styled::{StyleOp, Styled};
