//! Recency tracking for resident items.
//!
//! [`RecencyTracker`] pairs a [`RecencyList`] (front = most recently used,
//! back = least recently used) with an `FxHashMap` from item id to the list
//! node's `SlotId`. The map gives O(1) membership and a direct positional
//! handle, so promotion is O(1) regardless of where the item sits:
//!
//! ```text
//!   index (FxHashMap<K, SlotId>)          order (RecencyList<K>)
//!   ┌─────┬────────┐
//!   │  K  │ SlotId │──────────►  head ─► [MRU] ◄──► ... ◄──► [LRU] ◄─ tail
//!   └─────┴────────┘
//! ```
//!
//! Invariant: the map's key set always equals the set of ids in the list,
//! and the list length never exceeds the configured capacity.
//!
//! | Operation     | Complexity | Description                          |
//! |---------------|------------|--------------------------------------|
//! | `is_resident` | O(1)       | Membership via the index map         |
//! | `touch`       | O(1)       | Promote to front, or insert at front |
//! | `evict_lru`   | O(1)       | Remove and return the back element   |

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::{RecencyList, SlotId};
use crate::error::EmptyTrackerError;

/// Ordered set of resident item ids, most recently used first.
#[derive(Debug)]
pub struct RecencyTracker<K>
where
    K: Copy + Eq + Hash,
{
    order: RecencyList<K>,
    index: FxHashMap<K, SlotId>,
    capacity: usize,
}

impl<K> RecencyTracker<K>
where
    K: Copy + Eq + Hash,
{
    /// Creates an empty tracker for at most `capacity` resident items.
    pub fn new(capacity: usize) -> Self {
        Self {
            order: RecencyList::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            capacity,
        }
    }

    /// Returns `true` if `id` is currently resident.
    #[inline]
    pub fn is_resident(&self, id: &K) -> bool {
        self.index.contains_key(id)
    }

    /// Marks `id` as most recently used.
    ///
    /// If `id` is resident it is promoted to the front, preserving the
    /// relative order of all other elements. Otherwise it is inserted at the
    /// front. On a miss at capacity the caller must have already called
    /// [`evict_lru`](Self::evict_lru); this is the simulator's sequencing
    /// obligation, checked here with a debug assertion.
    ///
    /// # Example
    ///
    /// ```
    /// use framesim::tracker::RecencyTracker;
    ///
    /// let mut tracker: RecencyTracker<u64> = RecencyTracker::new(3);
    /// tracker.touch(1);
    /// tracker.touch(2);
    /// tracker.touch(1); // promote: 2 is now least recently used
    ///
    /// assert_eq!(tracker.evict_lru(), Ok(2));
    /// ```
    pub fn touch(&mut self, id: K) {
        if let Some(&slot) = self.index.get(&id) {
            self.order.move_to_front(slot);
        } else {
            debug_assert!(
                self.order.len() < self.capacity,
                "touch inserted past capacity without prior eviction"
            );
            let slot = self.order.push_front(id);
            self.index.insert(id, slot);
        }
    }

    /// Removes and returns the least recently used id.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTrackerError`] if no items are resident.
    pub fn evict_lru(&mut self) -> Result<K, EmptyTrackerError> {
        let id = self.order.pop_back().ok_or(EmptyTrackerError)?;
        self.index.remove(&id);
        Ok(id)
    }

    /// Current resident count, always `<= capacity`.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Maximum number of resident items.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates resident ids from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.order.debug_validate_invariants();
        assert!(self.order.len() <= self.capacity);
        assert_eq!(self.order.len(), self.index.len());
        for id in self.order.iter() {
            assert!(self.index.contains_key(id), "list id missing from index");
        }
    }
}
