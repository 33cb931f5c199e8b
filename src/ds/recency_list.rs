//! Doubly-linked recency list backed by [`SlotArena`].
//!
//! Nodes live in the arena and are linked by `SlotId`, so moving a node to
//! the front or popping the back is O(1) without raw pointers.
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_1   │ { value: A, prev: None, next: Some(id_2) }  │
//!   │ id_2   │ { value: B, prev: Some(id_1), next: id_3 }  │
//!   │ id_3   │ { value: C, prev: Some(id_2), next: None }  │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail
//!   (MRU)                                      (LRU)
//! ```
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Front-to-back ordered list with O(1) promote and O(1) back removal.
#[derive(Debug)]
pub struct RecencyList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> RecencyList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the value at the front (most recent position).
    pub fn front(&self) -> Option<&T> {
        self.head
            .and_then(|id| self.arena.get(id).map(|node| &node.value))
    }

    /// Returns the value at the back (least recent position).
    pub fn back(&self) -> Option<&T> {
        self.tail
            .and_then(|id| self.arena.get(id).map(|node| &node.value))
    }

    /// Inserts a new node at the front and returns its handle.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => {
                if let Some(node) = self.arena.get_mut(old_head) {
                    node.prev = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        id
    }

    /// Removes and returns the back value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.detach(id);
        self.arena.remove(id).map(|node| node.value)
    }

    /// Moves an existing node to the front, preserving the relative order of
    /// all other nodes. Returns `false` if `id` is not present.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if self.head == Some(id) {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Iterates values from front (most recent) to back (least recent).
    pub fn iter(&self) -> RecencyListIter<'_, T> {
        RecencyListIter {
            list: self,
            current: self.head,
        }
    }

    fn detach(&mut self, id: SlotId) {
        let (prev, next) = match self.arena.get(id) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.arena.get_mut(prev_id) {
                    prev_node.next = next;
                }
            },
            None => self.head = next,
        }

        match next {
            Some(next_id) => {
                if let Some(next_node) = self.arena.get_mut(next_id) {
                    next_node.prev = prev;
                }
            },
            None => self.tail = prev,
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }
    }

    fn attach_front(&mut self, id: SlotId) {
        let old_head = self.head;
        match self.arena.get_mut(id) {
            Some(node) => {
                node.prev = None;
                node.next = old_head;
            },
            None => return,
        }
        match old_head {
            Some(old_head) => {
                if let Some(head_node) = self.arena.get_mut(old_head) {
                    head_node.prev = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len(), 0);
            return;
        }

        let mut count = 0usize;
        let mut current = self.head;
        let mut prev = None;

        while let Some(id) = current {
            let node = self.arena.get(id).expect("linked node missing from arena");
            assert_eq!(node.prev, prev);
            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len(), "cycle detected in recency list");
        }

        assert_eq!(prev, self.tail);
        assert_eq!(count, self.len());
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RecencyListIter<'a, T> {
    list: &'a RecencyList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for RecencyListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(list: &RecencyList<u32>) -> Vec<u32> {
        list.iter().copied().collect()
    }

    #[test]
    fn push_front_orders_most_recent_first() {
        let mut list = RecencyList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        assert_eq!(contents(&list), vec![3, 2, 1]);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.back(), Some(&1));
        list.debug_validate_invariants();
    }

    #[test]
    fn pop_back_removes_least_recent() {
        let mut list = RecencyList::new();
        list.push_front(1);
        list.push_front(2);

        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        list.debug_validate_invariants();
    }

    #[test]
    fn move_to_front_preserves_relative_order_of_others() {
        let mut list = RecencyList::new();
        let _c = list.push_front(3);
        let b = list.push_front(2);
        let _a = list.push_front(1);
        // front-to-back: [1, 2, 3]

        assert!(list.move_to_front(b));
        assert_eq!(contents(&list), vec![2, 1, 3]);
        list.debug_validate_invariants();
    }

    #[test]
    fn move_to_front_of_head_is_noop() {
        let mut list = RecencyList::new();
        list.push_front(1);
        let head = list.push_front(2);

        assert!(list.move_to_front(head));
        assert_eq!(contents(&list), vec![2, 1]);
    }

    #[test]
    fn move_to_front_of_tail_updates_tail() {
        let mut list = RecencyList::new();
        let tail = list.push_front(1);
        list.push_front(2);
        list.push_front(3);

        assert!(list.move_to_front(tail));
        assert_eq!(contents(&list), vec![1, 3, 2]);
        assert_eq!(list.back(), Some(&2));
        list.debug_validate_invariants();
    }

    #[test]
    fn move_to_front_of_removed_node_returns_false() {
        let mut list = RecencyList::new();
        let a = list.push_front(1);
        list.pop_back();

        assert!(!list.move_to_front(a));
        assert!(list.is_empty());
    }

    #[test]
    fn single_element_list() {
        let mut list = RecencyList::new();
        let a = list.push_front(42);

        assert_eq!(list.front(), list.back());
        assert!(list.move_to_front(a));
        assert_eq!(list.pop_back(), Some(42));
        list.debug_validate_invariants();
    }
}
