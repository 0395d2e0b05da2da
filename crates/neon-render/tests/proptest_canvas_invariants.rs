//! Property tests for canvas composition.
//!
//! 1. `crop_or_pad_to` always yields the requested (normalized) size.
//! 2. Cropping then padding back with the same anchor keeps the overlap.
//! 3. `replace` never changes the size, and transparent overlays are no-ops.
//! 4. Concatenation sums the joined axis.

use neon_core::geometry::{Point, Size};
use neon_render::{Anchor, Canvas, Pixel};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn size_strategy(max: usize) -> impl Strategy<Value = Size> {
    (0..=max, 0..=max).prop_map(|(w, h)| Size::new(w, h))
}

fn anchor_strategy() -> impl Strategy<Value = Anchor> {
    (0usize..9).prop_map(|i| Anchor::ALL[i])
}

fn lettered(size: Size) -> Canvas {
    Canvas::of(size, |x, y| {
        let index = (x + y * size.width) % 26;
        Pixel::from(char::from(b'a' + index as u8))
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Resize hits the target size
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn crop_or_pad_yields_target_size(
        old in size_strategy(12),
        new in size_strategy(12),
        anchor in anchor_strategy(),
    ) {
        let canvas = lettered(old);
        let resized = canvas.crop_or_pad_to(new, anchor, || Pixel::Transparent);
        prop_assert_eq!(resized.size(), Canvas::size_for(new));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Pad then crop with the same anchor is lossless
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pad_then_crop_restores_original(
        old in size_strategy(8),
        extra_w in 0usize..6,
        extra_h in 0usize..6,
        anchor in anchor_strategy(),
    ) {
        let canvas = lettered(old);
        prop_assume!(!old.is_empty());
        let padded = canvas.crop_or_pad_to(old.grown_by(extra_w, extra_h), anchor, || Pixel::SPACE);
        let back = padded.crop_or_pad_to(old, anchor, || Pixel::SPACE);
        prop_assert_eq!(back, canvas);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Overlay invariants
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn replace_keeps_size(
        base in size_strategy(10),
        overlay in size_strategy(10),
        x in -4i64..12,
        y in -4i64..12,
    ) {
        let canvas = lettered(base);
        let top = Canvas::filled(overlay, Pixel::from('#'));
        let result = canvas.replace(Point::new(x, y), overlay, &top);
        prop_assert_eq!(result.size(), canvas.size());
    }

    #[test]
    fn transparent_overlay_is_noop(
        base in size_strategy(10),
        overlay in size_strategy(10),
        x in 0i64..10,
        y in 0i64..10,
    ) {
        let canvas = lettered(base);
        let top = Canvas::filled(overlay, Pixel::Transparent);
        prop_assert_eq!(canvas.replace(Point::new(x, y), overlay, &top), canvas);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Concatenation sizes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn horizontal_concatenation_sums_widths(
        height in 1usize..6,
        widths in prop::collection::vec(0usize..6, 1..5),
    ) {
        let parts: Vec<Canvas> = widths.iter().map(|&w| lettered(Size::new(w, height))).collect();
        let joined = Canvas::concatenate_horizontally(parts).expect("equal heights");
        prop_assert_eq!(joined.size(), Size::new(widths.iter().sum(), height));
    }

    #[test]
    fn vertical_concatenation_sums_heights(
        width in 1usize..6,
        heights in prop::collection::vec(1usize..6, 1..5),
    ) {
        let parts: Vec<Canvas> = heights.iter().map(|&h| lettered(Size::new(width, h))).collect();
        let joined = Canvas::concatenate_vertically(parts).expect("equal widths");
        prop_assert_eq!(joined.size(), Size::new(width, heights.iter().sum()));
    }
}
