#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Sizes are measured in terminal cells. Coordinates are signed so that a
//! [`Point`] can double as a relative offset (anchored cropping may place
//! content at negative positions).

use core::cmp::Ordering;
use core::fmt;

/// Errors raised when constructing geometry from signed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A width below zero was requested.
    NegativeWidth(i64),
    /// A height below zero was requested.
    NegativeHeight(i64),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeWidth(width) => write!(
                f,
                "The width of a size must be non-negative, and not {width}!"
            ),
            Self::NegativeHeight(height) => write!(
                f,
                "The height of a size must be non-negative, and not {height}!"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// A position in cell coordinates, or an offset between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: i64,
    /// Vertical coordinate, growing downwards.
    pub y: i64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Translate the point.
    #[inline]
    #[must_use]
    pub const fn moved_by(self, x_delta: i64, y_delta: i64) -> Self {
        Self::new(self.x.saturating_add(x_delta), self.y.saturating_add(y_delta))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A width and a height in cells.
///
/// Comparison is component-wise: `a < b` only when both components of `a`
/// are strictly smaller. Sizes that are larger along one axis and smaller
/// along the other are unordered, so `Size` implements [`PartialOrd`] but not
/// `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self::new(0, 0);

    /// The largest representable size, used as "unbounded".
    pub const MAX: Self = Self::new(usize::MAX, usize::MAX);

    /// Create a new size.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Create a size from signed components, rejecting negatives.
    pub fn try_new(width: i64, height: i64) -> Result<Self, GeometryError> {
        let width = usize::try_from(width).map_err(|_| GeometryError::NegativeWidth(width))?;
        let height = usize::try_from(height).map_err(|_| GeometryError::NegativeHeight(height))?;
        Ok(Self::new(width, height))
    }

    /// A square of side `length`.
    #[inline]
    pub const fn square(length: usize) -> Self {
        Self::new(length, length)
    }

    /// Number of cells covered. Saturates at `usize::MAX`.
    #[inline]
    pub const fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Check if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Collapse degenerate sizes: anything zero-wide or zero-tall becomes
    /// [`Size::ZERO`].
    #[inline]
    #[must_use]
    pub const fn normalized(self) -> Self {
        if self.is_empty() { Self::ZERO } else { self }
    }

    /// Check if this size fits inside `other` along both axes.
    #[inline]
    pub const fn can_fit_within(&self, other: Size) -> bool {
        self.width <= other.width && self.height <= other.height
    }

    /// Same size with a different width.
    #[inline]
    #[must_use]
    pub const fn with_width(self, width: usize) -> Self {
        Self::new(width, self.height)
    }

    /// Same size with a different height.
    #[inline]
    #[must_use]
    pub const fn with_height(self, height: usize) -> Self {
        Self::new(self.width, height)
    }

    /// Grow by non-negative deltas, saturating at `usize::MAX`.
    #[inline]
    #[must_use]
    pub const fn grown_by(self, width_delta: usize, height_delta: usize) -> Self {
        Self::new(
            self.width.saturating_add(width_delta),
            self.height.saturating_add(height_delta),
        )
    }

    /// Apply signed deltas, failing if either component would go negative.
    pub fn increased_by(self, width_delta: i64, height_delta: i64) -> Result<Self, GeometryError> {
        let width = apply_delta(self.width, width_delta).ok_or(GeometryError::NegativeWidth(
            signed(self.width).saturating_add(width_delta),
        ))?;
        let height = apply_delta(self.height, height_delta).ok_or(
            GeometryError::NegativeHeight(signed(self.height).saturating_add(height_delta)),
        )?;
        Ok(Self::new(width, height))
    }
}

fn signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn apply_delta(value: usize, delta: i64) -> Option<usize> {
    if delta >= 0 {
        Some(value.saturating_add(delta.unsigned_abs() as usize))
    } else {
        value.checked_sub(delta.unsigned_abs() as usize)
    }
}

impl PartialOrd for Size {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (
            self.width.cmp(&other.width),
            self.height.cmp(&other.height),
        ) {
            (Ordering::Equal, Ordering::Equal) => Some(Ordering::Equal),
            (Ordering::Less, Ordering::Less) => Some(Ordering::Less),
            (Ordering::Greater, Ordering::Greater) => Some(Ordering::Greater),
            _ => None,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(usize, usize)> for Size {
    fn from((width, height): (usize, usize)) -> Self {
        Self::new(width, height)
    }
}

/// An axis-aligned rectangle: a top-left corner plus a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub top_left: Point,
    pub size: Size,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(Point::ORIGIN, Size::ZERO);

    /// Create a new rectangle.
    #[inline]
    pub const fn new(top_left: Point, size: Size) -> Self {
        Self { top_left, size }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(Point::ORIGIN, size)
    }

    /// Left edge (inclusive).
    #[inline]
    pub const fn x(&self) -> i64 {
        self.top_left.x
    }

    /// Top edge (inclusive).
    #[inline]
    pub const fn y(&self) -> i64 {
        self.top_left.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> i64 {
        self.top_left.x.saturating_add(signed(self.size.width))
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> i64 {
        self.top_left.y.saturating_add(signed(self.size.height))
    }

    /// Corner at `(right, top)`.
    #[inline]
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top_left.y)
    }

    /// Corner at `(left, bottom)`.
    #[inline]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.top_left.x, self.bottom())
    }

    /// Corner at `(right, bottom)`.
    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Translate the rectangle, keeping its size.
    #[inline]
    #[must_use]
    pub const fn moved_by(self, x_delta: i64, y_delta: i64) -> Self {
        Self::new(self.top_left.moved_by(x_delta, y_delta), self.size)
    }

    /// Compute the overlap with another rectangle.
    ///
    /// Returns `None` when the rectangles are disjoint or merely share an
    /// edge. The returned rectangle is expressed relative to `self`'s top-left
    /// corner.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x().max(other.x());
        let top = self.y().max(other.y());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left >= right || top >= bottom {
            return None;
        }

        let size = Size::new(
            usize::try_from(right - left).ok()?,
            usize::try_from(bottom - top).ok()?,
        );
        Some(Rect::new(
            Point::new(left - self.x(), top - self.y()),
            size,
        ))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.top_left, self.size)
    }
}

/// Per-side amounts for padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Sides {
    /// Create new sides with specific values.
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create new sides with equal values.
    pub const fn all(val: usize) -> Self {
        Self::new(val, val, val, val)
    }

    /// Create new sides with horizontal values only.
    pub const fn horizontal(val: usize) -> Self {
        Self::new(0, val, 0, val)
    }

    /// Create new sides with vertical values only.
    pub const fn vertical(val: usize) -> Self {
        Self::new(val, 0, val, 0)
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> usize {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> usize {
        self.top.saturating_add(self.bottom)
    }
}

impl From<usize> for Sides {
    fn from(val: usize) -> Self {
        Self::all(val)
    }
}

impl From<(usize, usize)> for Sides {
    fn from((vertical, horizontal): (usize, usize)) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}
