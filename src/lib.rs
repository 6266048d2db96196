//! Mergeable Binomial Heap for Rust
//!
//! This crate provides a binomial heap (min-priority queue) whose elements can
//! be addressed after insertion through stable handles:
//!
//! - **Insert**: O(log n), returns a [`BinomialHandle`]
//! - **Union**: destructively absorbs another heap; handles from either side stay valid
//! - **Min / Extract-min**: O(log n) scan of the root list
//! - **Decrease-key**: O(log n) bubble-up by content swap
//! - **Delete**: O(log n) via an internal negative-infinity key
//!
//! # Example
//!
//! ```rust
//! use rust_binomial_heap::BinomialHeap;
//!
//! let mut a = BinomialHeap::new();
//! a.insert(3, "a");
//! let b_handle = a.insert(1, "b");
//!
//! let mut other = BinomialHeap::new();
//! other.insert(2, "c");
//! a.union(other);
//!
//! a.decrease(&b_handle, 0).unwrap();
//! assert_eq!(a.drain().collect::<Vec<_>>(), vec!["b", "c", "a"]);
//! ```

pub mod binomial;
pub mod handle;
mod node;
mod roots;
pub mod traits;

// Re-export the main types for convenience
pub use binomial::BinomialHeap;
pub use handle::BinomialHandle;
pub use traits::{DecreaseKeyHeap, Heap, HeapError};
