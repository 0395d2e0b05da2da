#![forbid(unsafe_code)]

//! Row and Column: sequential placement along one axis.
//!
//! Both containers follow the same algorithm, mirrored:
//!
//! 1. Children are split into *flexible* and *inflexible* ones by measuring
//!    flexibility along the main axis with the cross constraint fixed.
//! 2. Without a main-axis constraint only the inflexible children are
//!    measured (unconstrained, or under the cross constraint). Flexible
//!    children contribute nothing.
//! 3. With a main-axis constraint, inflexible children are measured in
//!    order against the remaining main-axis budget. Once the budget is
//!    spent, later children get [`Size::ZERO`]. Whatever is left is split
//!    evenly among the flexible children with [`ItemsDistributor`], each
//!    taking the largest cross size seen so far.
//!
//! The container measures as the sum along the main axis and the maximum
//! along the cross axis. Placement re-runs step 3 at the granted size and
//! lays the children end to end, aligned on the cross axis.

use neon_core::geometry::{Point, Rect, Size};
use neon_render::Canvas;

use crate::block::{Block, Container, LayoutCx};
use crate::distributor::ItemsDistributor;

/// Cross-axis placement of children narrower than the widest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

impl Alignment {
    /// Offset of a child of length `len` within `max_len`.
    #[inline]
    fn offset(self, max_len: usize, len: usize) -> i64 {
        match self {
            Self::Start => 0,
            Self::Center => (max_len / 2) as i64 - (len / 2) as i64,
            Self::End => max_len as i64 - len as i64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    #[inline]
    fn main(self, size: Size) -> usize {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    #[inline]
    fn cross(self, size: Size) -> usize {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    #[inline]
    fn size(self, main: usize, cross: usize) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    #[inline]
    fn point(self, main: i64, cross: i64) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    /// `(main, cross)` constraints from `(width, height)`.
    #[inline]
    fn split(self, width: Option<usize>, height: Option<usize>) -> (Option<usize>, Option<usize>) {
        match self {
            Self::Horizontal => (width, height),
            Self::Vertical => (height, width),
        }
    }

    /// `(width, height)` constraints from `(main, cross)`.
    #[inline]
    fn join(self, main: Option<usize>, cross: Option<usize>) -> (Option<usize>, Option<usize>) {
        match self {
            Self::Horizontal => (main, cross),
            Self::Vertical => (cross, main),
        }
    }

    fn is_flexible(self, child: &dyn Block, cx: &LayoutCx<'_>, cross: Option<usize>) -> bool {
        match self {
            Self::Horizontal => child.is_flexible_in_x_axis_with(cx, cross),
            Self::Vertical => child.is_flexible_in_y_axis_with(cx, cross),
        }
    }
}

/// Sizes of `children` along `axis` under the given constraints.
///
/// Without a main-axis constraint the result only covers the inflexible
/// children; otherwise it has one entry per child.
fn measure_each(
    axis: Axis,
    children: &[Box<dyn Block>],
    cx: &LayoutCx<'_>,
    width: Option<usize>,
    height: Option<usize>,
) -> Vec<Size> {
    if children.is_empty() {
        return Vec::new();
    }

    let (main, cross) = axis.split(width, height);
    let flexible: Vec<bool> = children
        .iter()
        .map(|child| axis.is_flexible(child.as_ref(), cx, cross))
        .collect();
    let inflexible = || {
        children
            .iter()
            .zip(&flexible)
            .filter(|&(_, &flexible)| !flexible)
            .map(|(child, _)| child)
    };

    let Some(main) = main else {
        return match cross {
            None => inflexible()
                .map(|child| child.unconstrained_size_with(cx))
                .collect(),
            Some(_) => inflexible()
                .map(|child| child.measure_with(cx, width, height))
                .collect(),
        };
    };

    let mut sizes = vec![Size::ZERO; children.len()];
    let mut remaining = main;
    for (i, child) in children.iter().enumerate() {
        if flexible[i] {
            continue;
        }
        if remaining == 0 {
            break;
        }
        let (w, h) = axis.join(Some(remaining), cross);
        let size = child.measure_with(cx, w, h);
        sizes[i] = size;
        remaining = remaining.saturating_sub(axis.main(size));
    }

    let num_flexible = flexible.iter().filter(|&&f| f).count();
    if remaining == 0 || num_flexible == 0 {
        return sizes;
    }

    let max_cross = sizes.iter().map(|&s| axis.cross(s)).max().unwrap_or(0);
    let distributor = ItemsDistributor::new(remaining, num_flexible);
    let flexible_slots = sizes
        .iter_mut()
        .zip(&flexible)
        .filter(|&(_, &flexible)| flexible)
        .map(|(size, _)| size);
    for (slot, share) in flexible_slots.zip(distributor.shares()) {
        *slot = axis.size(share, max_cross);
    }
    sizes
}

fn measure_stack(
    axis: Axis,
    children: &[Box<dyn Block>],
    cx: &LayoutCx<'_>,
    width: Option<usize>,
    height: Option<usize>,
) -> Size {
    let sizes = measure_each(axis, children, cx, width, height);
    let main = sizes
        .iter()
        .fold(0usize, |acc, &s| acc.saturating_add(axis.main(s)));
    let cross = sizes.iter().map(|&s| axis.cross(s)).max().unwrap_or(0);
    axis.size(main, cross)
}

fn stack_rects(
    axis: Axis,
    alignment: Alignment,
    children: &[Box<dyn Block>],
    cx: &LayoutCx<'_>,
    granted: Size,
) -> Vec<Rect> {
    if children.is_empty() {
        return Vec::new();
    }
    let sizes = measure_each(
        axis,
        children,
        cx,
        Some(granted.width),
        Some(granted.height),
    );
    let max_cross = sizes.iter().map(|&s| axis.cross(s)).max().unwrap_or(0);
    let mut cursor: i64 = 0;
    sizes
        .into_iter()
        .map(|size| {
            let cross = alignment.offset(max_cross, axis.cross(size));
            let rect = Rect::new(axis.point(cursor, cross), size);
            cursor = cursor.saturating_add(i64::try_from(axis.main(size)).unwrap_or(i64::MAX));
            rect
        })
        .collect()
}

macro_rules! stack_block {
    ($(#[$meta:meta])* $name:ident, $axis:expr) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name {
            children: Vec<Box<dyn Block>>,
            alignment: Alignment,
        }

        impl $name {
            /// Container of `children`, start-aligned.
            pub fn new(children: impl IntoIterator<Item = Box<dyn Block>>) -> Self {
                Self {
                    children: children.into_iter().collect(),
                    alignment: Alignment::Start,
                }
            }

            /// Append a child (builder-style).
            #[must_use]
            pub fn child(mut self, child: impl Block + 'static) -> Self {
                self.children.push(Box::new(child));
                self
            }

            /// Set the cross-axis alignment (builder-style).
            #[must_use]
            pub const fn alignment(mut self, alignment: Alignment) -> Self {
                self.alignment = alignment;
                self
            }

            pub const fn current_alignment(&self) -> Alignment {
                self.alignment
            }

            pub fn len(&self) -> usize {
                self.children.len()
            }

            pub fn is_empty(&self) -> bool {
                self.children.is_empty()
            }

            /// Per-child sizes; see the module docs for which children appear.
            pub fn measure_each(
                &self,
                cx: &LayoutCx<'_>,
                width: Option<usize>,
                height: Option<usize>,
            ) -> Vec<Size> {
                measure_each($axis, &self.children, cx, width, height)
            }
        }

        impl Block for $name {
            fn raw_measure(
                &self,
                cx: &LayoutCx<'_>,
                width: Option<usize>,
                height: Option<usize>,
            ) -> Size {
                measure_stack($axis, &self.children, cx, width, height)
            }

            fn raw_render(&self, cx: &LayoutCx<'_>, granted: Size) -> Canvas {
                self.compose(cx, granted)
            }
        }

        impl Container for $name {
            fn children(&self) -> Vec<&dyn Block> {
                self.children.iter().map(|child| child.as_ref()).collect()
            }

            fn child_rects(&self, cx: &LayoutCx<'_>, granted: Size) -> Vec<Rect> {
                stack_rects($axis, self.alignment, &self.children, cx, granted)
            }
        }
    };
}

stack_block!(
    /// Children placed left to right.
    Row,
    Axis::Horizontal
);

stack_block!(
    /// Children placed top to bottom.
    Column,
    Axis::Vertical
);
