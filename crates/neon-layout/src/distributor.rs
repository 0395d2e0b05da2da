#![forbid(unsafe_code)]

//! Even integer split of leftover space.

/// Splits `num_items` units among `num_recipients` as evenly as possible.
///
/// Every recipient gets `num_items / num_recipients`; the first
/// `num_items % num_recipients` recipients get one more. With no recipients
/// every share is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemsDistributor {
    num_recipients: usize,
    avg: usize,
    rem: usize,
}

impl ItemsDistributor {
    #[must_use]
    pub const fn new(num_items: usize, num_recipients: usize) -> Self {
        if num_recipients == 0 {
            return Self {
                num_recipients,
                avg: 0,
                rem: 0,
            };
        }
        Self {
            num_recipients,
            avg: num_items / num_recipients,
            rem: num_items % num_recipients,
        }
    }

    /// Share of the recipient at index `i`.
    #[inline]
    #[must_use]
    pub const fn num_items_for_recipient(&self, i: usize) -> usize {
        if i < self.rem { self.avg + 1 } else { self.avg }
    }

    /// Every recipient's share, in order.
    pub fn shares(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_recipients).map(|i| self.num_items_for_recipient(i))
    }
}
