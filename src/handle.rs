//! Stable element handles
//!
//! Decrease-key restores heap order by swapping node *contents* with the
//! parent rather than moving subtrees, so the physical node holding an element
//! changes over time. A [`BinomialHandle`] therefore does not name a node
//! directly: it shares a [`HandleSlot`] with the node, and the heap rewrites the
//! slot's node key whenever the element moves (swap during bubbling, arena
//! migration during union).
//!
//! The node in turn holds the same `Rc<HandleSlot>`, so handle and node always
//! point at each other.

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::node::NodeKey;
use crate::traits::Handle;

static NEXT_HEAP_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of a heap's node arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct HeapId(u64);

impl HeapId {
    pub(crate) fn fresh() -> Self {
        HeapId(NEXT_HEAP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// State shared between a node and every clone of its handle
pub(crate) struct HandleSlot {
    node: Cell<NodeKey>,
    heap: Cell<HeapId>,
    in_tree: Cell<bool>,
}

impl HandleSlot {
    pub(crate) fn new(node: NodeKey, heap: HeapId) -> Rc<Self> {
        Rc::new(HandleSlot {
            node: Cell::new(node),
            heap: Cell::new(heap),
            in_tree: Cell::new(true),
        })
    }

    pub(crate) fn node(&self) -> NodeKey {
        self.node.get()
    }

    pub(crate) fn set_node(&self, node: NodeKey) {
        self.node.set(node);
    }

    pub(crate) fn heap(&self) -> HeapId {
        self.heap.get()
    }

    pub(crate) fn set_heap(&self, heap: HeapId) {
        self.heap.set(heap);
    }

    pub(crate) fn in_tree(&self) -> bool {
        self.in_tree.get()
    }

    pub(crate) fn invalidate(&self) {
        self.in_tree.set(false);
    }
}

/// Handle to an element in a [`BinomialHeap`](crate::binomial::BinomialHeap)
///
/// Returned by `insert`; stays valid across decrease-key bubbling and across
/// `union` into another heap. Once the element is extracted or deleted the
/// handle is dead and every operation taking it returns an error.
pub struct BinomialHandle<K, V> {
    pub(crate) slot: Rc<HandleSlot>,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> BinomialHandle<K, V> {
    pub(crate) fn new(slot: Rc<HandleSlot>) -> Self {
        BinomialHandle {
            slot,
            _marker: PhantomData,
        }
    }

    /// Returns true while the element is still stored in some heap
    pub fn is_live(&self) -> bool {
        self.slot.in_tree()
    }
}

impl<K, V> Clone for BinomialHandle<K, V> {
    fn clone(&self) -> Self {
        BinomialHandle::new(Rc::clone(&self.slot))
    }
}

impl<K, V> PartialEq for BinomialHandle<K, V> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<K, V> Eq for BinomialHandle<K, V> {}

impl<K, V> fmt::Debug for BinomialHandle<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialHandle")
            .field("live", &self.slot.in_tree())
            .finish()
    }
}

impl<K, V> Handle for BinomialHandle<K, V> {}
