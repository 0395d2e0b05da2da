#![forbid(unsafe_code)]

//! Stable identity for memoized measurement.

use neon_core::geometry::Size;
use neon_render::Canvas;

use crate::block::{Block, LayoutCx};
use crate::measure_cache::BlockId;

/// A block that takes part in measurement caching.
///
/// Each `Keyed` gets its own [`BlockId`] when built, so two blocks with the
/// same key never share cache entries. Clones keep the id of their source.
/// The key names the block in logs and debugging output.
#[derive(Debug, Clone)]
pub struct Keyed<B> {
    inner: B,
    key: String,
    id: BlockId,
}

impl<B> Keyed<B> {
    pub fn new(inner: B, key: impl Into<String>) -> Self {
        Self {
            inner,
            key: key.into(),
            id: BlockId::unique(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Cache identity of this block.
    #[inline]
    pub const fn id(&self) -> BlockId {
        self.id
    }

    pub const fn inner(&self) -> &B {
        &self.inner
    }

    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: Block> Block for Keyed<B> {
    #[inline]
    fn raw_measure(&self, cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        self.inner.measure_with(cx, width, height)
    }

    #[inline]
    fn raw_render(&self, cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        self.inner.render_with(cx, granted)
    }

    fn block_id(&self) -> Option<BlockId> {
        Some(self.id)
    }
}

/// Equal when key and content match; ids are not compared.
impl<B: PartialEq> PartialEq for Keyed<B> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.inner == other.inner
    }
}

impl<B: Eq> Eq for Keyed<B> {}
