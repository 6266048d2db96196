//! Root-list primitives
//!
//! A root list is a singly linked chain through `Node::next`, kept in
//! non-decreasing degree order. Both helpers here are stateless and only
//! rewrite `next` (and `parent` for [`reverse_roots`]); consolidation of
//! equal degrees happens in the heap.

use crate::node::{Arena, NodeKey};

/// Merges two degree-sorted root lists into one degree-sorted list
///
/// **Time Complexity**: O(number of roots)
///
/// Equal degrees are not combined. When the two heads have the same degree,
/// the one from `b` is emitted first; the relative order within each input is
/// preserved.
pub(crate) fn merge_roots<K, V>(
    arena: &mut Arena<K, V>,
    mut a: Option<NodeKey>,
    mut b: Option<NodeKey>,
) -> Option<NodeKey> {
    let mut head = None;
    let mut tail: Option<NodeKey> = None;

    loop {
        let taken = match (a, b) {
            (Some(x), Some(y)) => {
                if arena[x].degree < arena[y].degree {
                    a = arena[x].next;
                    x
                } else {
                    b = arena[y].next;
                    y
                }
            }
            (rest, None) | (None, rest) => {
                match tail {
                    Some(t) => arena[t].next = rest,
                    None => head = rest,
                }
                return head;
            }
        };

        match tail {
            Some(t) => arena[t].next = Some(taken),
            None => head = Some(taken),
        }
        tail = Some(taken);
    }
}

/// Reverses a detached child chain and clears every parent link
///
/// **Time Complexity**: O(number of children)
///
/// Children are stored newest (highest degree) first; reversing yields the
/// ascending degree order a root list needs.
pub(crate) fn reverse_roots<K, V>(arena: &mut Arena<K, V>, head: Option<NodeKey>) -> Option<NodeKey> {
    let mut reversed = None;
    let mut cur = head;

    while let Some(key) = cur {
        let node = &mut arena[key];
        cur = node.next;
        node.next = reversed;
        node.parent = None;
        reversed = Some(key);
    }

    reversed
}
