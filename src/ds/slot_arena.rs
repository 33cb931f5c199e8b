//! Slab-style arena with stable index handles.
//!
//! Nodes are stored in a `Vec<Option<T>>`; removed slots go onto a free list
//! and are reused by later inserts. A `SlotId` stays valid until the value it
//! refers to is removed, which makes it safe to keep ids in side tables (the
//! recency tracker's position index) without any pointer-invalidation hazard.

/// Stable handle to a value stored in a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Option<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty arena with space reserved for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value` and returns its handle, reusing a freed slot if one exists.
    pub fn insert(&mut self, value: T) -> SlotId {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(value);
                idx
            },
            None => {
                self.slots.push(Some(value));
                self.slots.len() - 1
            },
        };
        self.len += 1;
        SlotId(idx)
    }

    /// Removes and returns the value behind `id`, freeing its slot for reuse.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let value = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    /// Returns `true` if `id` refers to a live value.
    pub fn contains(&self, id: SlotId) -> bool {
        matches!(self.slots.get(id.0), Some(Some(_)))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over live entries in slot-index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|value| (SlotId(idx), value)))
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get() {
        let mut arena = SlotArena::new();
        let a = arena.insert(1u32);
        let b = arena.insert(2u32);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&1));
        assert_eq!(arena.get(b), Some(&2));
    }

    #[test]
    fn remove_frees_slot_for_reuse() {
        let mut arena = SlotArena::new();
        let a = arena.insert("a");
        let _b = arena.insert("b");

        assert_eq!(arena.remove(a), Some("a"));
        assert!(!arena.contains(a));
        assert_eq!(arena.len(), 1);

        let c = arena.insert("c");
        assert_eq!(c.index(), a.index());
        assert_eq!(arena.get(c), Some(&"c"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn remove_twice_returns_none() {
        let mut arena = SlotArena::new();
        let a = arena.insert(7);
        assert_eq!(arena.remove(a), Some(7));
        assert_eq!(arena.remove(a), None);
    }

    #[test]
    fn iter_yields_live_entries_in_index_order() {
        let mut arena = SlotArena::new();
        let a = arena.insert(10);
        let b = arena.insert(20);
        let c = arena.insert(30);
        arena.remove(b);

        let entries: Vec<_> = arena.iter().collect();
        assert_eq!(entries, vec![(a, &10), (c, &30)]);
    }
}
