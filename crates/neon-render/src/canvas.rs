#![forbid(unsafe_code)]

//! Immutable pixel grids.
//!
//! Every operation builds a fresh [`Canvas`]; nothing is edited in place.
//! A canvas with no rows has size `0x0`, so building one of zero height
//! yields the empty canvas. A zero width keeps its (empty) rows.

use core::fmt;

use neon_core::geometry::{Point, Rect, Size};
use neon_style::StyledRun;

use crate::pixel::Pixel;

/// Errors raised by canvas composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    /// Horizontal concatenation of canvases with different heights.
    HeightMismatch,
    /// Vertical concatenation of canvases with different widths.
    WidthMismatch,
    /// Rows of different lengths were supplied to [`Canvas::from_pixels`].
    RaggedRows,
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeightMismatch => f.write_str(
                "The canvases being concatenated horizontally do not have the same height!",
            ),
            Self::WidthMismatch => f.write_str(
                "The canvases being concatenated vertically do not have the same width!",
            ),
            Self::RaggedRows => f.write_str("Every row of a canvas must have the same length!"),
        }
    }
}

impl std::error::Error for CanvasError {}

/// Reference point used to place old content inside a resized canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopMid,
    TopRight,
    MidLeft,
    Center,
    MidRight,
    BottomLeft,
    BottomMid,
    BottomRight,
}

/// Where the old content starts along one axis of the new canvas.
#[derive(Clone, Copy)]
enum AxisPlacement {
    Start,
    Mid,
    End,
}

impl AxisPlacement {
    fn offset(self, new_len: usize, old_len: usize) -> i64 {
        let new_len = to_i64(new_len);
        let old_len = to_i64(old_len);
        match self {
            Self::Start => 0,
            Self::Mid => new_len / 2 - old_len / 2,
            Self::End => new_len - old_len,
        }
    }
}

impl Anchor {
    /// All nine anchors, row by row.
    pub const ALL: [Anchor; 9] = [
        Self::TopLeft,
        Self::TopMid,
        Self::TopRight,
        Self::MidLeft,
        Self::Center,
        Self::MidRight,
        Self::BottomLeft,
        Self::BottomMid,
        Self::BottomRight,
    ];

    fn placements(self) -> (AxisPlacement, AxisPlacement) {
        use AxisPlacement::{End, Mid, Start};
        match self {
            Self::TopLeft => (Start, Start),
            Self::TopMid => (Mid, Start),
            Self::TopRight => (End, Start),
            Self::MidLeft => (Start, Mid),
            Self::Center => (Mid, Mid),
            Self::MidRight => (End, Mid),
            Self::BottomLeft => (Start, End),
            Self::BottomMid => (Mid, End),
            Self::BottomRight => (End, End),
        }
    }

    /// Offset of content of size `old` inside a canvas of size `new`.
    ///
    /// Mid offsets floor each half separately, so they may differ by one from
    /// `(new - old) / 2`. Offsets are negative when the content is cropped.
    pub fn offset(self, new: Size, old: Size) -> Point {
        let (x, y) = self.placements();
        Point::new(
            x.offset(new.width, old.width),
            y.offset(new.height, old.height),
        )
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// An immutable, rectangular, row-major grid of [`Pixel`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Canvas {
    rows: Vec<Vec<Pixel>>,
}

impl Canvas {
    /// The canvas with no rows.
    #[inline]
    pub const fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Size reported by a canvas built at `size`.
    ///
    /// A grid without rows has no width either, so any zero height becomes
    /// [`Size::ZERO`]. A zero width keeps its rows.
    #[inline]
    pub const fn size_for(size: Size) -> Size {
        if size.height == 0 { Size::ZERO } else { size }
    }

    /// Build a canvas by evaluating `factory(x, y)` for every cell, row by row.
    ///
    /// A zero width still yields `size.height` (empty) rows.
    pub fn of(size: Size, mut factory: impl FnMut(usize, usize) -> Pixel) -> Self {
        let rows = (0..size.height)
            .map(|y| (0..size.width).map(|x| factory(x, y)).collect())
            .collect();
        Self { rows }
    }

    /// A canvas with every cell set to `pixel`.
    pub fn filled(size: Size, pixel: Pixel) -> Self {
        Self::of(size, |_, _| pixel)
    }

    /// Wrap an existing grid. Rows must all have the same length, which may
    /// be zero.
    pub fn from_pixels(rows: Vec<Vec<Pixel>>) -> Result<Self, CanvasError> {
        let Some(first) = rows.first() else {
            return Ok(Self::empty());
        };
        let width = first.len();
        if rows.iter().any(|row| row.len() != width) {
            return Err(CanvasError::RaggedRows);
        }
        Ok(Self { rows })
    }

    /// Size inferred from the grid shape.
    #[inline]
    pub fn size(&self) -> Size {
        match self.rows.first() {
            Some(row) => Size::new(row.len(), self.rows.len()),
            None => Size::ZERO,
        }
    }

    /// The rows of the grid.
    #[inline]
    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> Option<&Pixel> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    /// Pixel at signed coordinates, or `None` outside the canvas.
    fn at_signed(&self, x: i64, y: i64) -> Option<&Pixel> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.at(x, y)
    }

    /// Transform every pixel.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(&Pixel) -> Pixel) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(&mut f).collect())
                .collect(),
        }
    }

    /// Transform every pixel, with its coordinates.
    #[must_use]
    pub fn map_with_index(&self, mut f: impl FnMut(usize, usize, &Pixel) -> Pixel) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .enumerate()
                .map(|(y, row)| {
                    row.iter()
                        .enumerate()
                        .map(|(x, pixel)| f(x, y, pixel))
                        .collect()
                })
                .collect(),
        }
    }

    /// Join canvases side by side. All inputs must share a height.
    pub fn concatenate_horizontally(
        canvases: impl IntoIterator<Item = Canvas>,
    ) -> Result<Self, CanvasError> {
        let mut canvases = canvases.into_iter();
        let Some(first) = canvases.next() else {
            return Ok(Self::empty());
        };
        let height = first.size().height;
        let mut rows = first.rows;
        for canvas in canvases {
            if canvas.size().height != height {
                return Err(CanvasError::HeightMismatch);
            }
            for (row, extra) in rows.iter_mut().zip(canvas.rows) {
                row.extend(extra);
            }
        }
        Ok(Self { rows })
    }

    /// Stack canvases top to bottom. All inputs must share a width.
    pub fn concatenate_vertically(
        canvases: impl IntoIterator<Item = Canvas>,
    ) -> Result<Self, CanvasError> {
        let mut canvases = canvases.into_iter();
        let Some(first) = canvases.next() else {
            return Ok(Self::empty());
        };
        let width = first.size().width;
        let mut rows = first.rows;
        for canvas in canvases {
            if canvas.size().width != width {
                return Err(CanvasError::WidthMismatch);
            }
            rows.extend(canvas.rows);
        }
        Ok(Self { rows })
    }

    /// Resize to `new_size`, positioning the current content by `anchor`.
    ///
    /// Cells covered by the (translated) old content copy it; all others are
    /// produced by `filler`.
    #[must_use]
    pub fn crop_or_pad_to(
        &self,
        new_size: Size,
        anchor: Anchor,
        mut filler: impl FnMut() -> Pixel,
    ) -> Self {
        let old_size = self.size();
        if new_size == old_size {
            return self.clone();
        }
        if new_size.width < old_size.width || new_size.height < old_size.height {
            neon_core::debug!(
                old = %old_size,
                new = %new_size,
                anchor = ?anchor,
                "cropping canvas"
            );
        }
        let origin = anchor.offset(new_size, old_size);
        Self::of(new_size, |x, y| {
            let source_x = to_i64(x) - origin.x;
            let source_y = to_i64(y) - origin.y;
            match self.at_signed(source_x, source_y) {
                Some(pixel) => *pixel,
                None => filler(),
            }
        })
    }

    /// Cut out (or extend to) `rect`, expressed in this canvas' coordinates.
    ///
    /// The result has `rect.size`; cells falling outside this canvas come
    /// from `filler`.
    #[must_use]
    pub fn crop_or_pad_to_rect(&self, rect: Rect, mut filler: impl FnMut() -> Pixel) -> Self {
        Self::of(rect.size, |x, y| {
            match self.at_signed(to_i64(x) + rect.x(), to_i64(y) + rect.y()) {
                Some(pixel) => *pixel,
                None => filler(),
            }
        })
    }

    /// Overlay `new` onto this canvas at `start`, clipped to `size` and to
    /// this canvas' bounds.
    ///
    /// Transparent pixels in `new` let the current pixel show through.
    #[must_use]
    pub fn replace(&self, start: Point, size: Size, new: &Canvas) -> Self {
        let own = self.size();
        let right = start.x.saturating_add(to_i64(size.width)).min(to_i64(own.width));
        let bottom = start.y.saturating_add(to_i64(size.height)).min(to_i64(own.height));
        self.map_with_index(|x, y, pixel| {
            let (x, y) = (to_i64(x), to_i64(y));
            if x < start.x || x >= right || y < start.y || y >= bottom {
                return *pixel;
            }
            match new.at_signed(x - start.x, y - start.y) {
                Some(overlay) if !overlay.is_transparent() => *overlay,
                _ => *pixel,
            }
        })
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for pixel in row {
                pixel.write_to(&mut out);
            }
        }
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lines: &[&str]) -> Canvas {
        Canvas::from_pixels(
            lines
                .iter()
                .map(|line| line.chars().map(Pixel::from).collect())
                .collect(),
        )
        .expect("rectangular grid")
    }

    /// Render with `.` standing in for transparent pixels.
    fn lines(canvas: &Canvas) -> Vec<String> {
        canvas
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|p| p.styled_char().map_or('.', |c| c.ch))
                    .collect()
            })
            .collect()
    }

    // --- Construction ---

    #[test]
    fn empty_canvas_has_zero_size() {
        assert_eq!(Canvas::empty().size(), Size::ZERO);
        assert!(Canvas::empty().rows().is_empty());
    }

    #[test]
    fn of_evaluates_factory_row_major() {
        let canvas = Canvas::of(Size::new(3, 2), |x, y| {
            char::from_digit((x + y * 3) as u32, 10).map_or(Pixel::Transparent, Pixel::from)
        });
        assert_eq!(canvas.size(), Size::new(3, 2));
        assert_eq!(lines(&canvas), vec!["012", "345"]);
    }

    #[test]
    fn of_zero_width_keeps_rows() {
        let narrow = Canvas::of(Size::new(0, 3), |_, _| Pixel::SPACE);
        assert_eq!(narrow.size(), Size::new(0, 3));
        assert_eq!(narrow.rows().len(), 3);
        assert_eq!(narrow.to_string(), "\n\n");
    }

    #[test]
    fn of_zero_height_is_empty() {
        assert_eq!(Canvas::of(Size::new(3, 0), |_, _| Pixel::SPACE), Canvas::empty());
        assert_eq!(Canvas::size_for(Size::new(3, 0)), Size::ZERO);
        assert_eq!(Canvas::size_for(Size::new(0, 3)), Size::new(0, 3));
    }

    #[test]
    fn zero_width_canvases_concatenate_by_height() {
        let narrow = Canvas::of(Size::new(0, 2), |_, _| Pixel::SPACE);
        let joined = Canvas::concatenate_horizontally([narrow, grid(&["ab", "cd"])]);
        assert_eq!(joined.map(|c| c.size()), Ok(Size::new(2, 2)));
    }

    #[test]
    fn from_pixels_accepts_empty_rows() {
        let canvas = Canvas::from_pixels(vec![Vec::new(), Vec::new()]);
        assert_eq!(canvas.map(|c| c.size()), Ok(Size::new(0, 2)));
    }

    #[test]
    fn from_pixels_infers_size() {
        let canvas = grid(&["ab", "cd", "ef"]);
        assert_eq!(canvas.size(), Size::new(2, 3));
        assert_eq!(canvas.at(1, 2), Some(&Pixel::from('f')));
        assert_eq!(canvas.at(2, 0), None);
    }

    #[test]
    fn from_pixels_rejects_ragged_rows() {
        let rows = vec![vec![Pixel::SPACE, Pixel::SPACE], vec![Pixel::SPACE]];
        assert_eq!(Canvas::from_pixels(rows), Err(CanvasError::RaggedRows));
    }

    // --- Mapping ---

    #[test]
    fn map_preserves_size() {
        let canvas = grid(&["abc", "def"]);
        let upper = canvas.map(|p| match p.styled_char() {
            Some(c) => Pixel::from(c.ch.to_ascii_uppercase()),
            None => *p,
        });
        assert_eq!(lines(&upper), vec!["ABC", "DEF"]);
    }

    #[test]
    fn map_with_index_sees_coordinates() {
        let canvas = grid(&["abc", "def"]);
        let indexed = canvas.map_with_index(|x, y, _| {
            char::from_digit((x + y * 3) as u32, 10).map_or(Pixel::Transparent, Pixel::from)
        });
        assert_eq!(lines(&indexed), vec!["012", "345"]);
    }

    // --- Concatenation ---

    #[test]
    fn concatenation_joins_grids() {
        let a = grid(&["012", "345"]);
        let b = grid(&["abc", "def"]);
        let c = grid(&["AB", "CD", "EF", "GH"]);

        let stacked = Canvas::concatenate_vertically([a, b]).unwrap();
        assert_eq!(stacked.size(), Size::new(3, 4));

        let joined = Canvas::concatenate_horizontally([c, stacked]).unwrap();
        assert_eq!(lines(&joined), vec!["AB012", "CD345", "EFabc", "GHdef"]);
    }

    #[test]
    fn concatenation_mismatch_is_an_error() {
        let a = grid(&["012", "345"]);
        let c = grid(&["AB", "CD", "EF", "GH"]);
        let vertical = Canvas::concatenate_vertically([a.clone(), c.clone()]).unwrap_err();
        assert_eq!(vertical, CanvasError::WidthMismatch);
        assert_eq!(
            vertical.to_string(),
            "The canvases being concatenated vertically do not have the same width!"
        );
        let horizontal = Canvas::concatenate_horizontally([a, c]).unwrap_err();
        assert_eq!(
            horizontal.to_string(),
            "The canvases being concatenated horizontally do not have the same height!"
        );
    }

    #[test]
    fn concatenating_nothing_is_empty() {
        assert_eq!(Canvas::concatenate_horizontally([]), Ok(Canvas::empty()));
        assert_eq!(Canvas::concatenate_vertically([]), Ok(Canvas::empty()));
    }

    // --- Cropping and padding ---

    #[test]
    fn crop_to_same_size_is_identity() {
        let canvas = grid(&["ABCDE", "FGHIJ", "KLMNO", "PQRST"]);
        let same = canvas.crop_or_pad_to(Size::new(5, 4), Anchor::TopLeft, || Pixel::Transparent);
        assert_eq!(same, canvas);
    }

    #[test]
    fn crop_with_every_anchor() {
        let canvas = grid(&["ABCDE", "FGHIJ", "KLMNO", "PQRST"]);
        let expected = [
            (Anchor::TopLeft, ["ABC", "FGH"]),
            (Anchor::TopMid, ["BCD", "GHI"]),
            (Anchor::TopRight, ["CDE", "HIJ"]),
            (Anchor::MidLeft, ["FGH", "KLM"]),
            (Anchor::Center, ["GHI", "LMN"]),
            (Anchor::MidRight, ["HIJ", "MNO"]),
            (Anchor::BottomLeft, ["KLM", "PQR"]),
            (Anchor::BottomMid, ["LMN", "QRS"]),
            (Anchor::BottomRight, ["MNO", "RST"]),
        ];
        for (anchor, rows) in expected {
            let cropped = canvas.crop_or_pad_to(Size::new(3, 2), anchor, || Pixel::Transparent);
            assert_eq!(lines(&cropped), rows, "anchor {anchor:?}");
        }
    }

    #[test]
    fn pad_with_every_anchor() {
        let canvas = grid(&["ABC", "DEF"]);
        let expected = [
            (Anchor::TopLeft, ["ABC..", "DEF..", ".....", "....."]),
            (Anchor::TopMid, [".ABC.", ".DEF.", ".....", "....."]),
            (Anchor::TopRight, ["..ABC", "..DEF", ".....", "....."]),
            (Anchor::MidLeft, [".....", "ABC..", "DEF..", "....."]),
            (Anchor::Center, [".....", ".ABC.", ".DEF.", "....."]),
            (Anchor::MidRight, [".....", "..ABC", "..DEF", "....."]),
            (Anchor::BottomLeft, [".....", ".....", "ABC..", "DEF.."]),
            (Anchor::BottomMid, [".....", ".....", ".ABC.", ".DEF."]),
            (Anchor::BottomRight, [".....", ".....", "..ABC", "..DEF"]),
        ];
        for (anchor, rows) in expected {
            let padded = canvas.crop_or_pad_to(Size::new(5, 4), anchor, || Pixel::Transparent);
            assert_eq!(lines(&padded), rows, "anchor {anchor:?}");
        }
    }

    #[test]
    fn pad_uses_filler() {
        let canvas = grid(&["A"]);
        let padded = canvas.crop_or_pad_to(Size::new(2, 1), Anchor::TopLeft, || Pixel::from('*'));
        assert_eq!(lines(&padded), vec!["A*"]);
    }

    #[test]
    fn crop_or_pad_to_rect_reads_offset_region() {
        let canvas = grid(&["ABCDE", "FGHIJ", "KLMNO"]);
        let rect = Rect::new(Point::new(3, 1), Size::new(3, 3));
        let region = canvas.crop_or_pad_to_rect(rect, || Pixel::Transparent);
        assert_eq!(lines(&region), vec!["IJ.", "NO.", "..."]);

        let before = Rect::new(Point::new(-1, -1), Size::new(2, 2));
        let region = canvas.crop_or_pad_to_rect(before, || Pixel::from('#'));
        assert_eq!(lines(&region), vec!["##", "#A"]);
    }

    // --- Overlay ---

    #[test]
    fn replace_lets_transparent_pixels_show_through() {
        let base = grid(&["abcd", "efgh", "ijkl"]);
        let overlay = Canvas::from_pixels(vec![
            vec![Pixel::from('X'), Pixel::Transparent],
            vec![Pixel::Transparent, Pixel::from('Y')],
        ])
        .unwrap();
        let result = base.replace(Point::new(1, 1), Size::new(2, 2), &overlay);
        assert_eq!(lines(&result), vec!["abcd", "eXgh", "ijYl"]);
    }

    #[test]
    fn replace_clips_to_base_bounds() {
        let base = grid(&["ab", "cd"]);
        let overlay = grid(&["XYZ", "UVW", "RST"]);
        let result = base.replace(Point::new(1, 0), Size::new(3, 3), &overlay);
        assert_eq!(lines(&result), vec!["aX", "cU"]);
    }

    #[test]
    fn replace_with_empty_size_is_noop() {
        let base = grid(&["ab"]);
        let result = base.replace(Point::ORIGIN, Size::ZERO, &Canvas::empty());
        assert_eq!(result, base);
    }

    // --- Display ---

    #[test]
    fn display_joins_rows_with_newlines() {
        let canvas = Canvas::from_pixels(vec![
            vec![Pixel::from('0'), Pixel::Transparent, Pixel::from('2')],
            vec![Pixel::from('3'), Pixel::from('4'), Pixel::from('5')],
        ])
        .unwrap();
        assert_eq!(canvas.to_string(), "0 2\n345");
        assert_eq!(Canvas::empty().to_string(), "");
    }
}
