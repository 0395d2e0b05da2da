//! Property-based invariant tests for the structural layout pieces.
//!
//! 1. Distributed shares sum to the item count and differ by at most one.
//! 2. The measurement cache never exceeds its capacity.
//! 3. A cached lookup returns the last stored size.
//! 4. Padding never measures outside the given constraints.

use neon_layout::{
    Block, BlockExt, BlockId, ItemsDistributor, LayoutCx, MeasureCache, Size, measure_flexible,
};
use neon_render::{Canvas, Pixel};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Flexible leaf filled with dots.
#[derive(Debug)]
struct Dots;

impl Block for Dots {
    fn raw_measure(&self, _cx: &LayoutCx<'_>, width: Option<usize>, height: Option<usize>) -> Size {
        measure_flexible(Size::new(1, 1), width, height)
    }

    fn raw_render(&self, _cx: &LayoutCx<'_>, granted: Size) -> Canvas {
        Canvas::filled(granted, Pixel::from('.'))
    }
}

fn constraint() -> impl Strategy<Value = Option<usize>> {
    prop::option::of(0usize..=40)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Even distribution
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn shares_sum_and_balance(items in 0usize..=1_000, recipients in 1usize..=50) {
        let shares: Vec<usize> = ItemsDistributor::new(items, recipients).shares().collect();
        prop_assert_eq!(shares.len(), recipients);
        prop_assert_eq!(shares.iter().sum::<usize>(), items);
        let max = shares.iter().copied().max().unwrap_or(0);
        let min = shares.iter().copied().min().unwrap_or(0);
        prop_assert!(max - min <= 1);
        prop_assert!(shares.windows(2).all(|w| w[0] >= w[1]));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Cache capacity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cache_respects_capacity(
        capacity in 0usize..=16,
        keys in prop::collection::vec((0u64..32, constraint(), constraint()), 0..64),
    ) {
        let mut cache = MeasureCache::new(capacity);
        for (id, w, h) in keys {
            cache.insert(BlockId(id), w, h, Size::new(1, 1));
            prop_assert!(cache.len() <= capacity);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Last write wins
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cache_returns_last_insert(
        id in any::<u64>(),
        w in constraint(),
        h in constraint(),
        first in (0usize..100, 0usize..100),
        second in (0usize..100, 0usize..100),
    ) {
        let mut cache = MeasureCache::new(4);
        cache.insert(BlockId(id), w, h, Size::new(first.0, first.1));
        cache.insert(BlockId(id), w, h, Size::new(second.0, second.1));
        prop_assert_eq!(cache.get(BlockId(id), w, h), Some(Size::new(second.0, second.1)));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Padding stays within constraints
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn padded_measure_within_constraints(
        pad in 0usize..=4,
        w in constraint(),
        h in constraint(),
    ) {
        let size = Dots.padded(pad).measure(w, h);
        if let Some(w) = w {
            prop_assert!(size.width <= w);
        }
        if let Some(h) = h {
            prop_assert!(size.height <= h);
        }
    }

    #[test]
    fn padded_render_matches_grant(pad in 0usize..=4, w in 0usize..=12, h in 0usize..=12) {
        let granted = Size::new(w, h);
        prop_assert_eq!(Dots.padded(pad).render(granted).size(), Canvas::size_for(granted));
    }
}
