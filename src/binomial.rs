//! Binomial Heap implementation
//!
//! A binomial heap is a collection of binomial trees with:
//! - O(log n) insert, extract-min, decrease-key and delete
//! - O(log n + log m) root-list work for union
//!
//! # Algorithm Overview
//!
//! The heap keeps a **root list**: a singly linked chain of binomial tree roots
//! in strictly increasing degree order, so at most one tree of each degree
//! exists (analogous to the binary representation of n).
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes and height k
//!
//! **Key Operations**:
//! - **Union**: merge both root lists by degree, then consolidate equal degrees
//! - **Insert**: union with a one-node heap
//! - **Extract-min**: scan the roots, unlink the minimum, reverse its children into
//!   a root list and union it back
//! - **Decrease-key**: bubble up by swapping node contents with the parent
//! - **Delete**: decrease to negative infinity, then extract-min
//!
//! All invariants are restored before each public call returns; there is no
//! lazy consolidation.
//!
//! # Storage
//!
//! Nodes live in a per-heap `SlotMap` arena and link to each other by key.
//! Callers hold [`BinomialHandle`]s, which follow an element as bubbling moves it
//! between nodes and as `union` moves it between arenas.

use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::rc::Rc;

use slotmap::SecondaryMap;

use crate::handle::{BinomialHandle, HandleSlot, HeapId};
use crate::node::{link, Arena, Node, NodeKey, Priority};
use crate::roots::{merge_roots, reverse_roots};
use crate::traits::{DecreaseKeyHeap, Heap, HeapError};

/// Binomial Heap
///
/// A min-heap of `(key, value)` pairs ordered by `K`.
///
/// # Example
///
/// ```rust
/// use rust_binomial_heap::binomial::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// let handle = heap.insert(5, "item");
/// heap.insert(3, "other");
/// heap.decrease(&handle, 1).unwrap();
/// assert_eq!(heap.min(), Some(&"item"));
/// assert_eq!(heap.extract_min(), Some("item"));
/// assert!(!handle.is_live());
/// ```
pub struct BinomialHeap<K, V> {
    /// Every live node; removed nodes are dropped from the arena immediately
    nodes: Arena<K, V>,
    /// First root of the root list (lowest degree)
    head: Option<NodeKey>,
    /// Identity stamped onto every handle this arena owns
    id: HeapId,
}

impl<K, V> BinomialHeap<K, V> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        BinomialHeap {
            nodes: Arena::with_key(),
            head: None,
            id: HeapId::fresh(),
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Degrees of the roots, in root-list order
    ///
    /// Between operations this is strictly increasing and mirrors the set bits
    /// of `len()`.
    pub fn root_degrees(&self) -> Vec<usize> {
        let mut degrees = Vec::new();
        let mut cur = self.head;
        while let Some(key) = cur {
            degrees.push(self.nodes[key].degree);
            cur = self.nodes[key].next;
        }
        degrees
    }

    /// Drains the heap in ascending key order, yielding values
    ///
    /// The iterator is lazy and destructive: each `next` performs one
    /// extract-min. Dropping it early leaves the remaining elements in place.
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain { heap: self }
    }

    /// Like [`drain`](Self::drain), but yields `(key, value)` pairs
    pub fn drain_entries(&mut self) -> DrainEntries<'_, K, V> {
        DrainEntries { heap: self }
    }
}

impl<K: Ord, V> BinomialHeap<K, V> {
    /// Inserts a new element into the heap
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**: build a one-node B₀ tree and union it into the root list.
    /// Like incrementing a binary counter, the consolidation pass links as
    /// many equal-degree trees as there are trailing occupied degrees.
    pub fn insert(&mut self, key: K, value: V) -> BinomialHandle<K, V> {
        let id = self.id;
        let node = self
            .nodes
            .insert_with_key(|k| Node::singleton(key, value, HandleSlot::new(k, id)));
        let handle = BinomialHandle::new(Rc::clone(&self.nodes[node].handle));

        self.union_roots(Some(node));
        self.check_invariants();
        handle
    }

    /// Absorbs every element of `other` into this heap
    ///
    /// **Time Complexity**: O(min(n, m)) per call to move the smaller heap's
    /// nodes into the larger heap's arena, plus O(log n + log m) for the
    /// root-list merge and consolidation. An element only migrates when its
    /// side is the smaller, so it moves at most O(log N) times over its
    /// lifetime.
    ///
    /// The receiver's roots always enter the degree merge as the first list,
    /// even when the arenas are swapped, so equal-key ties do not depend on size.
    ///
    /// Handles issued by `other` remain valid and now refer into `self`.
    pub fn union(&mut self, mut other: Self) {
        let swapped = other.len() > self.len();
        if swapped {
            mem::swap(self, &mut other);
        }
        let adopted = self.adopt(other);
        let (first, second) = if swapped {
            (adopted, self.head)
        } else {
            (self.head, adopted)
        };
        self.head = self.merge_and_consolidate(first, second);
        self.check_invariants();
    }

    /// Returns the value with the smallest key, or `None` if the heap is empty
    ///
    /// **Time Complexity**: O(log n), roots are scanned.
    pub fn min(&self) -> Option<&V> {
        self.peek().map(|(_, v)| v)
    }

    /// Returns the smallest key and its value without removing them
    pub fn peek(&self) -> Option<(&K, &V)> {
        let (min, _) = self.find_min()?;
        let node = &self.nodes[min];
        node.key.as_key().map(|k| (k, &node.value))
    }

    /// Removes the element with the smallest key and returns its value
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**:
    /// 1. Scan the root list for the minimum root and its predecessor
    /// 2. Unlink it from the root list
    /// 3. Its children (degrees k-1, ..., 0, newest first) are reversed into an
    ///    ascending root list
    /// 4. Union that list back into the heap
    /// 5. Invalidate the element's handle
    pub fn extract_min(&mut self) -> Option<V> {
        self.remove_min().map(|node| node.value)
    }

    /// Removes the element with the smallest key and returns `(key, value)`
    pub fn pop_min(&mut self) -> Option<(K, V)> {
        self.remove_min().and_then(Node::into_entry)
    }

    /// Lowers the key of the element designated by `handle`
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// `new_key` may equal the current key. The node's contents (key, value and
    /// handle back-pointer) are swapped with its parent while the parent is
    /// larger; the tree shape never changes.
    ///
    /// # Errors
    /// - `HeapError::KeyIncreased` if `new_key` is greater than the current key
    /// - `HeapError::InvalidHandle` if the element was already removed
    /// - `HeapError::ForeignHandle` if the handle belongs to another heap
    pub fn decrease(&mut self, handle: &BinomialHandle<K, V>, new_key: K) -> Result<(), HeapError> {
        let node = self.resolve(handle)?;

        if let Priority::Key(current) = &self.nodes[node].key {
            if new_key > *current {
                log::debug!("rejected decrease: new key is greater than current key");
                return Err(HeapError::KeyIncreased);
            }
        }

        self.nodes[node].key = Priority::Key(new_key);
        self.bubble_up(node);
        self.check_invariants();
        Ok(())
    }

    /// Removes the element designated by `handle` and returns it
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// The element's key is set aside and replaced by negative infinity, which
    /// bubbles the element to its tree's root and makes it the global minimum;
    /// extract-min then removes it.
    pub fn delete(&mut self, handle: &BinomialHandle<K, V>) -> Result<(K, V), HeapError> {
        let node = self.resolve(handle)?;

        let key = match mem::replace(&mut self.nodes[node].key, Priority::NegInfinity) {
            Priority::Key(k) => k,
            Priority::NegInfinity => return Err(HeapError::CorruptHandle),
        };
        self.bubble_up(node);

        let removed = self.remove_min().ok_or(HeapError::CorruptHandle)?;
        debug_assert!(Rc::ptr_eq(&removed.handle, &handle.slot));
        log::trace!("deleted element, {} remaining", self.len());
        Ok((key, removed.value))
    }

    /// Looks up the element designated by `handle`
    pub fn get(&self, handle: &BinomialHandle<K, V>) -> Result<(&K, &V), HeapError> {
        let node = &self.nodes[self.resolve(handle)?];
        node.key
            .as_key()
            .map(|k| (k, &node.value))
            .ok_or(HeapError::CorruptHandle)
    }

    /// Returns true if `handle` designates a live element of this heap
    pub fn contains(&self, handle: &BinomialHandle<K, V>) -> bool {
        self.resolve(handle).is_ok()
    }

    /// Verifies every structural invariant
    ///
    /// Checks:
    /// - root degrees strictly increase and roots have no parent
    /// - each node's degree equals its child count, children read newest first
    ///   have degrees d-1, ..., 0, and each child points back to its parent
    /// - heap order: no child key is smaller than its parent's
    /// - each node's handle points back at the node, carries this heap's id
    ///   and is marked live
    /// - the number of reachable nodes equals `len()`
    pub fn verify_internal_structure(&self) -> bool {
        let mut reachable = 0;
        let mut prev_degree = None;
        let mut cur = self.head;

        while let Some(root) = cur {
            let node = match self.nodes.get(root) {
                Some(node) => node,
                None => return false,
            };
            if node.parent.is_some() {
                return false;
            }
            if prev_degree.is_some_and(|d| d >= node.degree) {
                return false;
            }
            prev_degree = Some(node.degree);
            if !self.verify_tree(root, &mut reachable) {
                return false;
            }
            cur = node.next;
        }

        reachable == self.nodes.len()
    }

    fn verify_tree(&self, key: NodeKey, reachable: &mut usize) -> bool {
        let node = &self.nodes[key];
        *reachable += 1;

        let slot = &node.handle;
        if slot.node() != key || slot.heap() != self.id || !slot.in_tree() {
            return false;
        }

        let mut expected = node.degree;
        let mut child = node.child;
        while let Some(c) = child {
            let child_node = match self.nodes.get(c) {
                Some(n) => n,
                None => return false,
            };
            if expected == 0 {
                return false;
            }
            expected -= 1;
            if child_node.degree != expected
                || child_node.parent != Some(key)
                || child_node.key < node.key
            {
                return false;
            }
            if !self.verify_tree(c, reachable) {
                return false;
            }
            child = child_node.next;
        }

        expected == 0
    }

    /// Maps a handle to the node currently holding its element
    fn resolve(&self, handle: &BinomialHandle<K, V>) -> Result<NodeKey, HeapError> {
        let slot = &handle.slot;
        let result = if !slot.in_tree() {
            Err(HeapError::InvalidHandle)
        } else if slot.heap() != self.id {
            Err(HeapError::ForeignHandle)
        } else {
            let key = slot.node();
            match self.nodes.get(key) {
                Some(node) if Rc::ptr_eq(&node.handle, slot) => Ok(key),
                _ => Err(HeapError::CorruptHandle),
            }
        };

        if let Err(err) = &result {
            log::debug!("rejected handle: {}", err);
        }
        result
    }

    /// Finds the minimum root and its predecessor in the root list
    ///
    /// On equal keys the earliest root wins.
    fn find_min(&self) -> Option<(NodeKey, Option<NodeKey>)> {
        let mut best = self.head?;
        let mut best_prev = None;
        let mut prev = best;
        let mut cur = self.nodes[best].next;

        while let Some(key) = cur {
            if self.nodes[key].key < self.nodes[best].key {
                best = key;
                best_prev = Some(prev);
            }
            prev = key;
            cur = self.nodes[key].next;
        }

        Some((best, best_prev))
    }

    /// Unlinks the minimum root, promotes its children and frees its slot
    fn remove_min(&mut self) -> Option<Node<K, V>> {
        let (min, prev) = self.find_min()?;

        let after = self.nodes[min].next;
        match prev {
            Some(p) => self.nodes[p].next = after,
            None => self.head = after,
        }

        let children = self.nodes[min].child.take();
        let promoted = reverse_roots(&mut self.nodes, children);
        self.union_roots(promoted);

        let node = self.nodes.remove(min)?;
        node.handle.invalidate();
        self.check_invariants();
        Some(node)
    }

    /// Merges a detached root list into ours and consolidates equal degrees
    fn union_roots(&mut self, incoming: Option<NodeKey>) {
        self.head = self.merge_and_consolidate(self.head, incoming);
    }

    /// Merges two root lists, `first` being the receiving side, then consolidates
    ///
    /// An empty side leaves the other list untouched.
    fn merge_and_consolidate(
        &mut self,
        first: Option<NodeKey>,
        second: Option<NodeKey>,
    ) -> Option<NodeKey> {
        match (first, second) {
            (rest, None) | (None, rest) => rest,
            _ => {
                let merged = merge_roots(&mut self.nodes, first, second);
                self.consolidate(merged)
            }
        }
    }

    /// Links equal-degree roots until each degree appears at most once
    ///
    /// **Time Complexity**: O(number of roots)
    ///
    /// **Algorithm**: one left-to-right pass with a trailing `prev` and a cursor
    /// `x`. When `x` and its successor differ in degree, or three roots in a row
    /// share a degree, the cursor advances (the first of three is left alone
    /// so that the carry produced by the other two lands next to it in order).
    /// Otherwise the two roots are linked: the smaller key becomes the parent,
    /// and on equal keys `x` (the earlier root) stays on top.
    fn consolidate(&mut self, head: Option<NodeKey>) -> Option<NodeKey> {
        let mut head = head;
        let mut prev: Option<NodeKey> = None;
        let mut x = head?;

        while let Some(next) = self.nodes[x].next {
            let degree = self.nodes[x].degree;
            let next_node = &self.nodes[next];
            let run_of_three = next_node
                .next
                .is_some_and(|after| self.nodes[after].degree == degree);

            if next_node.degree != degree || run_of_three {
                prev = Some(x);
                x = next;
            } else if self.nodes[x].key <= next_node.key {
                self.nodes[x].next = self.nodes[next].next;
                link(&mut self.nodes, x, next);
            } else {
                match prev {
                    Some(p) => self.nodes[p].next = Some(next),
                    None => head = Some(next),
                }
                link(&mut self.nodes, next, x);
                x = next;
            }
        }

        head
    }

    /// Restores heap order above `node` by swapping contents with the parent
    fn bubble_up(&mut self, node: NodeKey) {
        let mut current = node;

        while let Some(parent) = self.nodes[current].parent {
            if self.nodes[current].key >= self.nodes[parent].key {
                break;
            }
            self.swap_contents(current, parent);
            current = parent;
        }
    }

    /// Exchanges key, value and handle between two nodes, keeping the links
    ///
    /// Both handle slots are re-pointed in the same step so handle and node
    /// never disagree once this returns.
    fn swap_contents(&mut self, a: NodeKey, b: NodeKey) {
        if let Some([x, y]) = self.nodes.get_disjoint_mut([a, b]) {
            mem::swap(&mut x.key, &mut y.key);
            mem::swap(&mut x.value, &mut y.value);
            mem::swap(&mut x.handle, &mut y.handle);
            x.handle.set_node(a);
            y.handle.set_node(b);
        }
    }

    /// Moves every node of `other` into this arena
    ///
    /// Links are remapped to the new keys and each moved handle is re-pointed
    /// and restamped with this heap's id. Returns `other`'s root list, now
    /// addressed in this arena.
    fn adopt(&mut self, mut other: Self) -> Option<NodeKey> {
        if other.nodes.is_empty() {
            return None;
        }
        log::trace!(
            "migrating {} nodes into arena holding {}",
            other.nodes.len(),
            self.nodes.len()
        );

        let mut moved: SecondaryMap<NodeKey, NodeKey> = SecondaryMap::with_capacity(other.nodes.len());
        let mut placed = Vec::with_capacity(other.nodes.len());
        for (old, node) in other.nodes.drain() {
            let new = self.nodes.insert(node);
            moved.insert(old, new);
            placed.push(new);
        }

        let remap = |key: Option<NodeKey>| key.and_then(|k| moved.get(k).copied());
        for new in placed {
            let node = &mut self.nodes[new];
            node.parent = remap(node.parent);
            node.child = remap(node.child);
            node.next = remap(node.next);
            node.handle.set_node(new);
            node.handle.set_heap(self.id);
        }

        remap(other.head.take())
    }

    #[inline]
    fn check_invariants(&self) {
        #[cfg(feature = "debug-invariants")]
        debug_assert!(
            self.verify_internal_structure(),
            "binomial heap invariants violated"
        );
    }
}

impl<K: Ord + Clone> BinomialHeap<K, K> {
    /// Builds a heap from key-only entries; each value is a copy of its key
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter().map(|k| (k.clone(), k)).collect()
    }

    /// Inserts a key that also serves as its own value
    pub fn insert_key(&mut self, key: K) -> BinomialHandle<K, K> {
        self.insert(key.clone(), key)
    }
}

impl<K, V> Default for BinomialHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for BinomialHeap<K, V> {
    fn drop(&mut self) {
        // Elements still stored here become unreachable with the heap
        for (_, node) in self.nodes.iter() {
            node.handle.invalidate();
        }
    }
}

impl<K, V> fmt::Debug for BinomialHeap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialHeap")
            .field("len", &self.len())
            .field("root_degrees", &self.root_degrees())
            .finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BinomialHeap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut heap = BinomialHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<K: Ord, V> Extend<(K, V)> for BinomialHeap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> IntoIterator for BinomialHeap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { heap: self }
    }
}

impl<K: Ord, V> Heap<V, K> for BinomialHeap<K, V> {
    fn new() -> Self {
        BinomialHeap::new()
    }

    fn is_empty(&self) -> bool {
        BinomialHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinomialHeap::len(self)
    }

    fn push(&mut self, priority: K, item: V) {
        self.insert(priority, item);
    }

    fn peek(&self) -> Option<(&K, &V)> {
        BinomialHeap::peek(self)
    }

    fn pop(&mut self) -> Option<(K, V)> {
        self.pop_min()
    }

    fn merge(&mut self, other: Self) {
        self.union(other)
    }
}

impl<K: Ord, V> DecreaseKeyHeap<V, K> for BinomialHeap<K, V> {
    type Handle = BinomialHandle<K, V>;

    fn push_with_handle(&mut self, priority: K, item: V) -> Self::Handle {
        self.insert(priority, item)
    }

    fn decrease_key(&mut self, handle: &Self::Handle, new_priority: K) -> Result<(), HeapError> {
        self.decrease(handle, new_priority)
    }

    fn delete(&mut self, handle: &Self::Handle) -> Result<(K, V), HeapError> {
        BinomialHeap::delete(self, handle)
    }
}

/// Destructive ascending iterator over values, see [`BinomialHeap::drain`]
pub struct Drain<'a, K, V> {
    heap: &'a mut BinomialHeap<K, V>,
}

impl<K: Ord, V> Iterator for Drain<'_, K, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.heap.extract_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<K: Ord, V> ExactSizeIterator for Drain<'_, K, V> {}

impl<K: Ord, V> FusedIterator for Drain<'_, K, V> {}

/// Destructive ascending iterator over entries, see [`BinomialHeap::drain_entries`]
pub struct DrainEntries<'a, K, V> {
    heap: &'a mut BinomialHeap<K, V>,
}

impl<K: Ord, V> Iterator for DrainEntries<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.heap.pop_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<K: Ord, V> ExactSizeIterator for DrainEntries<'_, K, V> {}

impl<K: Ord, V> FusedIterator for DrainEntries<'_, K, V> {}

/// Owning ascending iterator over entries
pub struct IntoIter<K, V> {
    heap: BinomialHeap<K, V>,
}

impl<K: Ord, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.heap.pop_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<K: Ord, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K: Ord, V> FusedIterator for IntoIter<K, V> {}
