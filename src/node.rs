//! Arena nodes for the binomial heap
//!
//! Every element lives in a [`Node`] stored in a per-heap `SlotMap`. A node is
//! simultaneously one element and the root of the binomial subtree it anchors.
//! Structural links are arena keys rather than pointers:
//!
//! - `parent`: owning node, `None` while the node is a root
//! - `child`: most recently linked child; children form a chain through `next`
//! - `next`: next sibling in whichever list the node belongs to (child chain or root list)
//!
//! A degree-`d` node has children of degrees `d-1, d-2, ..., 0` when read along
//! its child chain, because `link` always pushes the newest child at the head.

use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

use crate::handle::HandleSlot;

new_key_type! {
    /// Arena key addressing a node inside one heap's storage
    pub struct NodeKey;
}

/// Node storage for one heap
pub(crate) type Arena<K, V> = SlotMap<NodeKey, Node<K, V>>;

/// Key as stored in the tree
///
/// `NegInfinity` orders below every real key. It is only written by
/// `delete`, which lowers the target to `NegInfinity` so it bubbles to a root
/// and becomes the global minimum without `K` needing an artificial bound.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Priority<K> {
    NegInfinity,
    Key(K),
}

impl<K> Priority<K> {
    pub(crate) fn as_key(&self) -> Option<&K> {
        match self {
            Priority::Key(k) => Some(k),
            Priority::NegInfinity => None,
        }
    }

    pub(crate) fn into_key(self) -> Option<K> {
        match self {
            Priority::Key(k) => Some(k),
            Priority::NegInfinity => None,
        }
    }
}

pub(crate) struct Node<K, V> {
    pub(crate) key: Priority<K>,
    pub(crate) value: V,
    /// Number of children
    pub(crate) degree: usize,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) child: Option<NodeKey>,
    pub(crate) next: Option<NodeKey>,
    /// Handle currently designating this node's element
    pub(crate) handle: Rc<HandleSlot>,
}

impl<K, V> Node<K, V> {
    /// A fresh degree-0 tree, not yet in any list
    pub(crate) fn singleton(key: K, value: V, handle: Rc<HandleSlot>) -> Self {
        Node {
            key: Priority::Key(key),
            value,
            degree: 0,
            parent: None,
            child: None,
            next: None,
            handle,
        }
    }

    /// The stored (key, value) pair; `None` while the key is `NegInfinity`
    pub(crate) fn into_entry(self) -> Option<(K, V)> {
        let value = self.value;
        self.key.into_key().map(|k| (k, value))
    }
}

/// Makes `child` the newest subtree of `parent`
///
/// **Time Complexity**: O(1)
///
/// The caller is responsible for removing `child` from the root list first;
/// `child.next` is overwritten with `parent`'s previous first child.
pub(crate) fn link<K, V>(arena: &mut Arena<K, V>, parent: NodeKey, child: NodeKey) {
    let old_first = arena[parent].child;
    {
        let c = &mut arena[child];
        c.parent = Some(parent);
        c.next = old_first;
    }
    let p = &mut arena[parent];
    p.child = Some(child);
    p.degree += 1;
}
