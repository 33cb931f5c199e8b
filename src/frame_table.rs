//! Fixed-capacity frame table mirroring which physical slot holds which item.
//!
//! The table does not drive eviction decisions; it reflects them. The
//! multiset of occupied slot contents always equals the contents of the
//! recency tracker, but slot order is physical placement order, not recency
//! order.
//!
//! Placement scans strictly left to right by slot index. That tie-break is
//! not required by LRU itself; it is a documented contract so that traces
//! are reproducible run to run.

use crate::error::PlacementError;

/// Fixed-length sequence of frame slots, each empty or holding one item id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable<K> {
    slots: Vec<Option<K>>,
}

impl<K> FrameTable<K>
where
    K: Copy + Eq,
{
    /// Creates a table with `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Places `new_id` into the first matching slot, scanning left to right.
    ///
    /// With `Some(victim)`, the first slot holding the victim is replaced;
    /// with `None`, the first empty slot is filled. Returns the index where
    /// placement occurred.
    ///
    /// # Errors
    ///
    /// [`PlacementError::VictimNotFound`] if a victim was supplied but no
    /// slot holds it; [`PlacementError::NoEmptySlot`] if no victim was
    /// supplied and every slot is occupied. Both indicate a broken
    /// tracker/table invariant, not a user-visible condition.
    pub fn place(&mut self, new_id: K, victim: Option<K>) -> Result<usize, PlacementError> {
        match victim {
            Some(victim) => {
                for (idx, slot) in self.slots.iter_mut().enumerate() {
                    if *slot == Some(victim) {
                        *slot = Some(new_id);
                        return Ok(idx);
                    }
                }
                Err(PlacementError::VictimNotFound)
            },
            None => {
                for (idx, slot) in self.slots.iter_mut().enumerate() {
                    if slot.is_none() {
                        *slot = Some(new_id);
                        return Ok(idx);
                    }
                }
                Err(PlacementError::NoEmptySlot)
            },
        }
    }

    /// Returns the slot contents in physical order; `None` marks an empty slot.
    pub fn snapshot(&self) -> Vec<Option<K>> {
        self.slots.clone()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
