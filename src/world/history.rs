//! Coin history - the undo stack for coin pickups.

use super::geometry::Bounded;

/// Default capacity, one slot per coin a level can hold.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Bounded LIFO of coin indices in the order they were collected.
///
/// Pushing onto a full history drops the value. Popping an empty history
/// returns `None` and changes nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinHistory {
    indices: Bounded<usize>,
}

impl Default for CoinHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl CoinHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Bounded::with_capacity(capacity),
        }
    }

    /// Record a pickup. Returns false if the history was full and the index was lost.
    pub fn push(&mut self, index: usize) -> bool {
        self.indices.push(index)
    }

    /// Take back the most recent pickup, if any.
    pub fn pop(&mut self) -> Option<usize> {
        self.indices.pop()
    }

    pub fn peek(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.indices.is_full()
    }

    /// Recorded indices, oldest first.
    pub fn as_slice(&self) -> &[usize] {
        self.indices.as_slice()
    }
}
