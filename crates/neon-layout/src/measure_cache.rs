#![forbid(unsafe_code)]

//! Memoization of block measurements.
//!
//! A [`MeasureCache`] maps `(block id, width constraint, height constraint)`
//! to the [`Size`] the block reported. Row and Column measure every child's
//! flexibility before distributing space, so a deep tree measures the same
//! subtree under the same constraints many times per pass; the cache turns
//! those repeats into lookups.
//!
//! Only blocks reporting a [`BlockId`] take part (see
//! [`Keyed`](crate::keyed::Keyed)). Ids are explicit values, never addresses.
//! A keyed block draws a fresh id when it is built, so distinct blocks never
//! share entries even under the same key; only clones of one block do.
//!
//! # Invalidation
//!
//! - [`MeasureCache::invalidate_all`] bumps a generation counter; older
//!   entries become misses. O(1).
//! - [`MeasureCache::invalidate_block`] drops the entries of one block.
//! - [`MeasureCache::clear`] frees every entry.
//!
//! Call one of these before reusing a cache for a structurally different
//! tree that recycles the same keys.
//!
//! # Eviction
//!
//! At capacity the least frequently used entry is evicted.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use neon_core::geometry::Size;

/// Stable identity of a block for caching purposes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BlockId(pub u64);

impl BlockId {
    /// Identity derived from a user-chosen string key.
    #[inline]
    pub fn from_key(key: &str) -> Self {
        Self::from_hash(&key)
    }

    /// A fresh identity. Two calls never return the same id.
    pub fn unique() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Identity derived from any hashable content.
    #[inline]
    pub fn from_hash<T: Hash + ?Sized>(value: &T) -> Self {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        Self(hasher.finish())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
struct CacheKey {
    block_id: BlockId,
    width: Option<usize>,
    height: Option<usize>,
}

#[derive(Clone, Debug)]
struct CacheEntry {
    size: Size,
    generation: u64,
    /// Access count for LFU eviction.
    access_count: u32,
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of entries currently in the cache.
    pub entries: usize,
    /// Total cache hits since creation or last reset.
    pub hits: u64,
    /// Total cache misses since creation or last reset.
    pub misses: u64,
    /// Hit rate as a fraction (0.0 to 1.0).
    pub hit_rate: f64,
}

/// Bounded cache of block measurements.
///
/// Owned by the caller and lent to a layout pass through
/// [`LayoutCx::cached`](crate::block::LayoutCx::cached).
#[derive(Debug)]
pub struct MeasureCache {
    entries: HashMap<CacheKey, CacheEntry>,
    generation: u64,
    max_entries: usize,
    hits: u64,
    misses: u64,
}

impl MeasureCache {
    /// Default capacity used by [`MeasureCache::default`].
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Create a cache holding at most `max_entries` measurements.
    #[inline]
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(max_entries),
            generation: 0,
            max_entries,
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a measurement, counting a hit or a miss.
    pub fn get(
        &mut self,
        block_id: BlockId,
        width: Option<usize>,
        height: Option<usize>,
    ) -> Option<Size> {
        let key = CacheKey {
            block_id,
            width,
            height,
        };
        if let Some(entry) = self.entries.get_mut(&key)
            && entry.generation == self.generation
        {
            self.hits += 1;
            entry.access_count = entry.access_count.saturating_add(1);
            return Some(entry.size);
        }
        self.misses += 1;
        None
    }

    /// Store a measurement, evicting the least used entry when full.
    pub fn insert(
        &mut self,
        block_id: BlockId,
        width: Option<usize>,
        height: Option<usize>,
        size: Size,
    ) {
        if self.max_entries == 0 {
            return;
        }
        let key = CacheKey {
            block_id,
            width,
            height,
        };
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_lfu();
        }
        self.entries.insert(
            key,
            CacheEntry {
                size,
                generation: self.generation,
                access_count: 1,
            },
        );
    }

    /// Return the cached measurement or compute and store a new one.
    pub fn get_or_compute<F>(
        &mut self,
        block_id: BlockId,
        width: Option<usize>,
        height: Option<usize>,
        compute: F,
    ) -> Size
    where
        F: FnOnce() -> Size,
    {
        if let Some(size) = self.get(block_id, width, height) {
            return size;
        }
        let size = compute();
        self.insert(block_id, width, height, size);
        size
    }

    /// Make every entry stale. Entries are recomputed on next access.
    #[inline]
    pub fn invalidate_all(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Drop every entry belonging to `block_id`.
    pub fn invalidate_block(&mut self, block_id: BlockId) {
        self.entries.retain(|k, _| k.block_id != block_id);
    }

    /// Current hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        let total = self.hits + self.misses;
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
            hit_rate: if total > 0 {
                self.hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }

    #[inline]
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// Remove all entries, freeing their memory.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    fn evict_lfu(&mut self) {
        if let Some(key) = self
            .entries
            .iter()
            .min_by_key(|(_, e)| (e.generation == self.generation, e.access_count))
            .map(|(k, _)| *k)
        {
            self.entries.remove(&key);
        }
    }
}

impl Default for MeasureCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
