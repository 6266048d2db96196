//! Common traits for mergeable heaps
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: push/peek/pop/merge over (key, value) entries, smallest key first
//! - [`DecreaseKeyHeap`]: adds handle-returning insertion, `decrease_key` and
//!   handle-based `delete`
//!
//! Both are implemented by [`BinomialHeap`](crate::binomial::BinomialHeap), which
//! also exposes the same operations as inherent methods.

use std::fmt;

/// Error type for handle-based heap operations
///
/// Every variant describes caller misuse. The heap is left untouched when one
/// of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The new key is greater than the element's current key
    KeyIncreased,
    /// The handle's element was already extracted or deleted
    InvalidHandle,
    /// The handle was issued by (or merged into) a different heap
    ForeignHandle,
    /// The handle and the node it designates do not point back at each other
    CorruptHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::KeyIncreased => {
                write!(f, "new key is greater than the current key")
            }
            HeapError::InvalidHandle => {
                write!(f, "handle is no longer valid (element was removed)")
            }
            HeapError::ForeignHandle => {
                write!(f, "handle belongs to a different heap")
            }
            HeapError::CorruptHandle => {
                write!(f, "handle and node back-pointers disagree")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an element in the heap, used for decrease_key and delete
///
/// Handles compare by identity: two handles are equal only if they were
/// cloned from the same insertion.
pub trait Handle: Clone + PartialEq + Eq {}

/// Base trait for mergeable heap/priority queue data structures
///
/// Entries are (key, value) pairs ordered by key alone; the smallest key is
/// served first and values never take part in comparisons.
///
/// # Example
///
/// ```rust
/// use rust_binomial_heap::Heap;
/// use rust_binomial_heap::binomial::BinomialHeap;
///
/// let mut heap: BinomialHeap<i32, &str> = Heap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(Heap::pop(&mut heap), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n) worst case for the binomial heap.
    fn push(&mut self, priority: P, item: T);

    /// Borrows the entry with the smallest key, or `None` when empty
    ///
    /// The binomial heap keeps no cached minimum, so this walks the O(log n)
    /// roots. Among equal keys the first such root wins.
    ///
    /// ```rust
    /// use rust_binomial_heap::{BinomialHeap, Heap};
    ///
    /// let mut heap: BinomialHeap<u8, char> = Heap::new();
    /// assert_eq!(heap.peek(), None);
    /// heap.push(4, 'd');
    /// heap.push(2, 'b');
    /// assert_eq!(heap.peek(), Some((&2, &'b')));
    /// assert_eq!(heap.len(), 2);
    /// ```
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    fn pop(&mut self) -> Option<(P, T)>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}

/// Extended heap trait with handle-based operations
///
/// # Example
///
/// ```rust
/// use rust_binomial_heap::{DecreaseKeyHeap, Heap};
/// use rust_binomial_heap::binomial::BinomialHeap;
///
/// let mut heap: BinomialHeap<i32, &str> = Heap::new();
/// let handle = heap.push_with_handle(10, "item");
/// heap.decrease_key(&handle, 5).unwrap();
/// assert_eq!(heap.peek(), Some((&5, &"item")));
/// ```
pub trait DecreaseKeyHeap<T, P: Ord>: Heap<T, P> {
    /// The handle type for this heap
    type Handle: Handle;

    /// Inserts an element with the given priority, returning a handle
    fn push_with_handle(&mut self, priority: P, item: T) -> Self::Handle;

    /// Lowers the priority of the element identified by the handle
    ///
    /// # Errors
    /// - `HeapError::KeyIncreased` if `new_priority` is greater than the current priority
    /// - `HeapError::InvalidHandle` if the element was already removed
    /// - `HeapError::ForeignHandle` if the handle was issued by another heap
    fn decrease_key(&mut self, handle: &Self::Handle, new_priority: P) -> Result<(), HeapError>;

    /// Removes the element identified by the handle and returns it
    ///
    /// # Errors
    /// Same handle errors as [`decrease_key`](Self::decrease_key).
    fn delete(&mut self, handle: &Self::Handle) -> Result<(P, T), HeapError>;
}
