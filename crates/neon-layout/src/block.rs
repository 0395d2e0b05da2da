#![forbid(unsafe_code)]

//! The block protocol.
//!
//! A [`Block`] answers two questions:
//!
//! 1. **How big do you want to be?** [`Block::measure`] takes an optional
//!    maximum width and an optional maximum height and returns a [`Size`]
//!    that never exceeds a given constraint. Absent constraints mean "use
//!    as much as you need".
//! 2. **Draw yourself at this size.** [`Block::render`] returns a
//!    [`Canvas`] of exactly the granted size.
//!
//! Implementors provide [`Block::raw_measure`] and [`Block::raw_render`];
//! the provided wrappers add the guarantees callers rely on:
//!
//! - any measurement with a zero dimension is reported as [`Size::ZERO`];
//! - a render of the wrong size is logged and cropped or padded (top-left
//!   anchored, transparent filler) to the granted size;
//! - measurements of blocks with a [`BlockId`] go through the
//!   [`MeasureCache`] lent to the [`LayoutCx`], if any.
//!
//! # Layout context
//!
//! Every call takes a [`LayoutCx`]. The plain [`Block::measure`] and
//! [`Block::render`] build an uncached one; composite blocks forward the
//! context they received to their children via the `_with` variants.
//!
//! ```ignore
//! let mut cache = MeasureCache::default();
//! let cx = LayoutCx::cached(&mut cache);
//! let size = root.measure_with(&cx, Some(80), None);
//! let canvas = root.render_with(&cx, size);
//! ```

use core::cell::RefCell;
use core::fmt;

use neon_core::geometry::{Rect, Sides, Size};
use neon_render::{Anchor, Canvas, Pixel};
use neon_style::{Color, StyleFlags};

use crate::fixed::{FixedHeight, FixedSize, FixedWidth};
use crate::framed::Framed;
use crate::keyed::Keyed;
use crate::measure_cache::{BlockId, MeasureCache};
use crate::padded::Padded;
use crate::styled::{StyleOp, Styled};

/// The "unbounded" constraint used by flexibility checks.
pub const INFINITY: usize = usize::MAX;

/// Call-scoped state threaded through a measure or render pass.
#[derive(Debug, Default)]
pub struct LayoutCx<'a> {
    cache: Option<RefCell<&'a mut MeasureCache>>,
}

impl<'a> LayoutCx<'a> {
    /// A context without memoization.
    #[inline]
    pub const fn uncached() -> Self {
        Self { cache: None }
    }

    /// A context memoizing measurements of identified blocks in `cache`.
    #[inline]
    pub fn cached(cache: &'a mut MeasureCache) -> Self {
        Self {
            cache: Some(RefCell::new(cache)),
        }
    }

    #[inline]
    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// Memoize `compute` under `(block_id, width, height)`.
    ///
    /// The cache is only borrowed around the lookup and the store, so
    /// `compute` may measure nested identified blocks.
    fn measure_identified(
        &self,
        block_id: BlockId,
        width: Option<usize>,
        height: Option<usize>,
        compute: impl FnOnce() -> Size,
    ) -> Size {
        let Some(cache) = &self.cache else {
            return compute();
        };
        let hit = cache.borrow_mut().get(block_id, width, height);
        if let Some(size) = hit {
            return size;
        }
        let size = compute();
        cache.borrow_mut().insert(block_id, width, height, size);
        size
    }
}

/// A node of the layout tree.
pub trait Block: fmt::Debug + Send + Sync {
    /// Preferred size under the given constraints.
    ///
    /// Must handle all four combinations:
    ///
    /// - neither constraint: the size showing all content unwrapped;
    /// - width only: the smallest height showing all content within `width`;
    /// - height only: the smallest width showing all content within `height`;
    /// - both: a size within both, degrading content (wrapping, truncating
    ///   with an ellipsis, clipping) when it does not fit.
    fn raw_measure(&self, cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>)
    -> Size;

    /// Draw the block at `granted`. Should return a canvas of that size.
    fn raw_render(&self, cx: &LayoutCx<'_>, granted: Size) -> Canvas;

    /// Identity used to memoize measurements. `None` opts out of caching.
    fn block_id(&self) -> Option<BlockId> {
        None
    }

    /// Short type name used in diagnostics.
    fn block_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// [`Block::measure`] within an existing layout pass.
    fn measure_with(&self, cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        let size = match self.block_id() {
            Some(id) => {
                cx.measure_identified(id, width, height, || self.raw_measure(cx, width, height))
            }
            None => self.raw_measure(cx, width, height),
        };
        size.normalized()
    }

    /// Preferred size; a zero width or height collapses to [`Size::ZERO`].
    fn measure(&self, width: Option<usize>, height: Option<usize>) -> Size {
        self.measure_with(&LayoutCx::uncached(), width, height)
    }

    fn unconstrained_size_with(&self, cx: &LayoutCx<'_>) -> Size {
        self.measure_with(cx, None, None)
    }

    #[inline]
    fn unconstrained_size(&self) -> Size {
        self.measure(None, None)
    }

    /// Whether the block shrinks to nothing and grows without bound along x.
    fn is_flexible_in_x_axis_with(&self, cx: &LayoutCx<'_>, height: Option<usize>) -> bool {
        self.measure_with(cx, Some(0), height).width == 0
            && self.measure_with(cx, Some(INFINITY), height).width >= INFINITY
    }

    fn is_flexible_in_x_axis(&self, height: Option<usize>) -> bool {
        self.is_flexible_in_x_axis_with(&LayoutCx::uncached(), height)
    }

    /// Whether the block shrinks to nothing and grows without bound along y.
    fn is_flexible_in_y_axis_with(&self, cx: &LayoutCx<'_>, width: Option<usize>) -> bool {
        self.measure_with(cx, width, Some(0)).height == 0
            && self.measure_with(cx, width, Some(INFINITY)).height >= INFINITY
    }

    fn is_flexible_in_y_axis(&self, width: Option<usize>) -> bool {
        self.is_flexible_in_y_axis_with(&LayoutCx::uncached(), width)
    }

    /// [`Block::render`] within an existing layout pass.
    fn render_with(&self, cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "block_render",
            block = self.block_name(),
            w = granted.width,
            h = granted.height
        )
        .entered();

        let canvas = self.raw_render(cx, granted);
        let expected = Canvas::size_for(granted);
        if canvas.size() == expected {
            return canvas;
        }
        neon_core::warn!(
            "{} did not provide a render matching the granted size. \
             Granted size: {} != rendered size: {}.",
            self.block_name(),
            granted,
            canvas.size()
        );
        canvas.crop_or_pad_to(expected, Anchor::TopLeft, || Pixel::Transparent)
    }

    /// Canvas of exactly `granted`; a zero height yields the empty canvas.
    fn render(&self, granted: Size) -> Canvas {
        self.render_with(&LayoutCx::uncached(), granted)
    }

    /// Render at the unconstrained size.
    fn rendered(&self) -> Canvas {
        self.render(self.unconstrained_size())
    }

    /// Render at the size measured under the given constraints.
    fn rendered_within(&self, width: Option<usize>, height: Option<usize>) -> Canvas {
        self.render(self.measure(width, height))
    }
}

impl<B: Block + ?Sized> Block for Box<B> {
    #[inline]
    fn raw_measure(&self, cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        (**self).raw_measure(cx, width, height)
    }

    #[inline]
    fn raw_render(&self, cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        (**self).raw_render(cx, granted)
    }

    #[inline]
    fn block_id(&self) -> Option<BlockId> {
        (**self).block_id()
    }

    #[inline]
    fn block_name(&self) -> &'static str {
        (**self).block_name()
    }
}

/// `neon_layout::padded::Padded<neon_widgets::Label>` becomes `Padded`.
fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// A block made of child blocks placed at rectangles.
///
/// [`Container::compose`] renders every child at its rectangle's size and
/// overlays the results, in child order, onto an opaque blank canvas.
/// Transparent child pixels let earlier children show through.
pub trait Container: Block {
    /// Direct children, in compositing order.
    fn children(&self) -> Vec<&dyn Block>;

    /// Where each child goes within `granted`. May be shorter than
    /// [`Container::children`]; children without a rectangle are skipped.
    fn child_rects(&self, cx: &LayoutCx<'_>, granted: Size) -> Vec<Rect>;

    fn compose(&self, cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        let rects = self.child_rects(cx, granted);
        let base = Canvas::filled(granted, Pixel::SPACE);
        self.children()
            .into_iter()
            .zip(rects)
            .fold(base, |canvas, (child, rect)| {
                let render = child.render_with(cx, rect.size);
                canvas.replace(rect.top_left, rect.size, &render)
            })
    }
}

/// Prints a block rendered at its unconstrained size.
#[derive(Debug, Clone, Copy)]
pub struct DisplayBlock<'a, B: ?Sized>(&'a B);

impl<B: Block + ?Sized> fmt::Display for DisplayBlock<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.rendered(), f)
    }
}

impl fmt::Display for dyn Block + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rendered(), f)
    }
}

/// Fluent wrappers available on every block.
///
/// Each method consumes the block and returns a new block owning it.
pub trait BlockExt: Block + Sized + 'static {
    /// Pad by `num_spaces` on every side.
    fn padded(self, num_spaces: usize) -> Padded<Self> {
        Padded::new(self, Sides::all(num_spaces))
    }

    fn padded_horizontally(self, num_spaces: usize) -> Padded<Self> {
        Padded::new(self, Sides::horizontal(num_spaces))
    }

    fn padded_vertically(self, num_spaces: usize) -> Padded<Self> {
        Padded::new(self, Sides::vertical(num_spaces))
    }

    fn padded_top(self, num_spaces: usize) -> Padded<Self> {
        Padded::new(self, Sides::new(num_spaces, 0, 0, 0))
    }

    fn padded_right(self, num_spaces: usize) -> Padded<Self> {
        Padded::new(self, Sides::new(0, num_spaces, 0, 0))
    }

    fn padded_bottom(self, num_spaces: usize) -> Padded<Self> {
        Padded::new(self, Sides::new(0, 0, num_spaces, 0))
    }

    fn padded_left(self, num_spaces: usize) -> Padded<Self> {
        Padded::new(self, Sides::new(0, 0, 0, num_spaces))
    }

    /// Surround with a border; see [`Framed`] for title, style and color.
    fn framed(self) -> Framed<Self> {
        Framed::new(self)
    }

    /// Force the width, the height, or both. With neither, the block is
    /// returned unchanged.
    fn resized(self, width: Option<usize>, height: Option<usize>) -> Box<dyn Block> {
        match (width, height) {
            (None, None) => Box::new(self),
            (Some(width), None) => Box::new(FixedWidth::new(self, width)),
            (None, Some(height)) => Box::new(FixedHeight::new(self, height)),
            (Some(width), Some(height)) => Box::new(FixedSize::new(self, Size::new(width, height))),
        }
    }

    /// Give the block a stable identity so its measurements can be cached.
    fn keyed(self, key: impl Into<String>) -> Keyed<Self> {
        Keyed::new(self, key)
    }

    fn boxed(self) -> Box<dyn Block> {
        Box::new(self)
    }

    /// Borrow as something printable: `println!("{}", block.display())`.
    fn display(&self) -> DisplayBlock<'_, Self> {
        DisplayBlock(self)
    }

    fn foreground(self, color: Color) -> Styled<Self> {
        Styled::new(self, StyleOp::Foreground(color))
    }

    fn background(self, color: Color) -> Styled<Self> {
        Styled::new(self, StyleOp::Background(color))
    }

    fn bold(self) -> Styled<Self> {
        Styled::new(self, StyleOp::Flags(StyleFlags::BOLD))
    }

    fn light(self) -> Styled<Self> {
        Styled::new(self, StyleOp::Flags(StyleFlags::DIM))
    }

    fn italic(self) -> Styled<Self> {
        Styled::new(self, StyleOp::Flags(StyleFlags::ITALIC))
    }

    fn underlined(self) -> Styled<Self> {
        Styled::new(self, StyleOp::Flags(StyleFlags::UNDERLINE))
    }

    fn blinking(self) -> Styled<Self> {
        Styled::new(self, StyleOp::Flags(StyleFlags::BLINK))
    }

    fn inverted(self) -> Styled<Self> {
        Styled::new(self, StyleOp::Flags(StyleFlags::REVERSE))
    }

    fn hidden(self) -> Styled<Self> {
        Styled::new(self, StyleOp::Flags(StyleFlags::HIDDEN))
    }

    fn crossed_out(self) -> Styled<Self> {
        Styled::new(self, StyleOp::Flags(StyleFlags::STRIKETHROUGH))
    }
}

impl<B: Block + 'static> BlockExt for B {}
