//! Arena-backed doubly-linked list shared by every container in the crate.
//!
//! Nodes live in a [`slab::Slab`] owned by the list and embed their own
//! prev/next [`Link`]s through the [`Linked`] trait. The list itself only
//! tracks head, tail, and length. Handles stay stable until the node is
//! removed, which is what lets the keyed queue index nodes directly.

use slab::Slab;

use crate::link::Link;

/// Trait for node types that can participate in a [`List`].
///
/// Implementors embed prev/next links directly in their struct.
pub(crate) trait Linked {
    /// Returns the next node's link, or `Link::NONE` if this is the tail.
    fn next(&self) -> Link;

    /// Returns the previous node's link, or `Link::NONE` if this is the head.
    fn prev(&self) -> Link;

    /// Sets the next node's link.
    fn set_next(&mut self, link: Link);

    /// Sets the previous node's link.
    fn set_prev(&mut self, link: Link);
}

/// A doubly-linked list that owns its node arena.
#[derive(Debug, Clone)]
pub(crate) struct List<N> {
    nodes: Slab<N>,
    head: Link,
    tail: Link,
    len: usize,
}

impl<N: Linked> Default for List<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Linked> List<N> {
    /// Creates an empty list.
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: Link::NONE,
            tail: Link::NONE,
            len: 0,
        }
    }

    /// Creates an empty list whose arena holds `capacity` nodes before
    /// reallocating.
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: Link::NONE,
            tail: Link::NONE,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node's link, or `Link::NONE` if empty.
    #[inline]
    pub(crate) fn head(&self) -> Link {
        self.head
    }

    /// Returns the tail node's link, or `Link::NONE` if empty.
    #[inline]
    pub(crate) fn tail(&self) -> Link {
        self.tail
    }

    /// Returns the node behind `link`, or `None` for the sentinel or a
    /// vacant slot.
    #[inline]
    pub(crate) fn get(&self, link: Link) -> Option<&N> {
        link.slot().and_then(|slot| self.nodes.get(slot))
    }

    /// Returns `true` if `link` refers to a node currently in this list.
    #[inline]
    pub(crate) fn contains(&self, link: Link) -> bool {
        link.slot().is_some_and(|slot| self.nodes.contains(slot))
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Links `node` at the back of the list and returns its handle.
    pub(crate) fn push_back(&mut self, node: N) -> Link {
        let tail = self.tail;
        let link = self.alloc(node);
        self.node_mut(link).set_prev(tail);

        if tail.is_some() {
            self.node_mut(tail).set_next(link);
        } else {
            self.head = link;
        }

        self.tail = link;
        self.len += 1;
        link
    }

    /// Links `node` at the front of the list and returns its handle.
    pub(crate) fn push_front(&mut self, node: N) -> Link {
        let head = self.head;
        let link = self.alloc(node);
        self.node_mut(link).set_next(head);

        if head.is_some() {
            self.node_mut(head).set_prev(link);
        } else {
            self.tail = link;
        }

        self.head = link;
        self.len += 1;
        link
    }

    /// Links `node` immediately ahead of `before` and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not a node of this list.
    pub(crate) fn insert_before(&mut self, before: Link, node: N) -> Link {
        let prev = self.node(before).prev();
        let link = self.alloc(node);

        {
            let node = self.node_mut(link);
            node.set_next(before);
            node.set_prev(prev);
        }

        self.node_mut(before).set_prev(link);

        if prev.is_some() {
            self.node_mut(prev).set_next(link);
        } else {
            self.head = link;
        }

        self.len += 1;
        link
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Unlinks and returns the back node, or `None` if the list is empty.
    pub(crate) fn pop_back(&mut self) -> Option<N> {
        let slot = self.tail.slot()?;
        let mut node = self.nodes.remove(slot);

        if self.len == 1 {
            self.head = Link::NONE;
            self.tail = Link::NONE;
        } else {
            let prev = node.prev();
            self.node_mut(prev).set_next(Link::NONE);
            self.tail = prev;
        }

        self.len -= 1;
        node.set_prev(Link::NONE);
        Some(node)
    }

    /// Unlinks and returns the front node, or `None` if the list is empty.
    pub(crate) fn pop_front(&mut self) -> Option<N> {
        let slot = self.head.slot()?;
        let mut node = self.nodes.remove(slot);

        if self.len == 1 {
            self.head = Link::NONE;
            self.tail = Link::NONE;
        } else {
            let next = node.next();
            self.node_mut(next).set_prev(Link::NONE);
            self.head = next;
        }

        self.len -= 1;
        node.set_next(Link::NONE);
        Some(node)
    }

    /// Unlinks and returns the node behind `link`.
    ///
    /// O(1): the node carries its own neighbours, so nothing is scanned.
    /// Returns `None` if `link` is the sentinel or no longer occupied.
    pub(crate) fn remove(&mut self, link: Link) -> Option<N> {
        let slot = link.slot()?;
        if !self.nodes.contains(slot) {
            return None;
        }

        let mut node = self.nodes.remove(slot);
        let prev = node.prev();
        let next = node.next();

        if prev.is_some() {
            self.node_mut(prev).set_next(next);
        } else {
            self.head = next;
        }

        if next.is_some() {
            self.node_mut(next).set_prev(prev);
        } else {
            self.tail = prev;
        }

        node.set_prev(Link::NONE);
        node.set_next(Link::NONE);
        self.len -= 1;
        Some(node)
    }

    /// Removes every node and releases the arena slots.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.head = Link::NONE;
        self.tail = Link::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Returns the first node, walking from the head, for which `pred`
    /// holds. Returns `Link::NONE` once the walk passes the tail.
    pub(crate) fn find(&self, mut pred: impl FnMut(&N) -> bool) -> Link {
        let mut link = self.head;
        while let Some(slot) = link.slot() {
            let node = &self.nodes[slot];
            if pred(node) {
                return link;
            }
            link = node.next();
        }
        Link::NONE
    }

    /// Iterates nodes from head to tail.
    #[inline]
    pub(crate) fn iter(&self) -> Iter<'_, N> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    #[inline]
    fn alloc(&mut self, mut node: N) -> Link {
        node.set_prev(Link::NONE);
        node.set_next(Link::NONE);
        Link::from_slot(self.nodes.insert(node))
    }

    #[inline]
    fn node(&self, link: Link) -> &N {
        let slot = link.slot().expect("dereferenced sentinel link");
        &self.nodes[slot]
    }

    #[inline]
    fn node_mut(&mut self, link: Link) -> &mut N {
        let slot = link.slot().expect("dereferenced sentinel link");
        &mut self.nodes[slot]
    }

    /// Walks the chain in both directions and checks every linkage invariant.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.len, self.nodes.len(), "arena holds unlinked nodes");

        match self.len {
            0 => {
                assert!(self.head.is_none());
                assert!(self.tail.is_none());
            }
            1 => {
                assert!(self.head.is_some());
                assert_eq!(self.head, self.tail);
            }
            _ => assert_ne!(self.head, self.tail),
        }

        if let Some(head) = self.get(self.head) {
            assert!(head.prev().is_none(), "head has a prev link");
        }
        if let Some(tail) = self.get(self.tail) {
            assert!(tail.next().is_none(), "tail has a next link");
        }

        let mut steps = 0;
        let mut prev = Link::NONE;
        let mut link = self.head;
        while link.is_some() {
            let node = self.node(link);
            assert_eq!(node.prev(), prev, "prev link does not point back");
            prev = link;
            link = node.next();
            steps += 1;
            assert!(steps <= self.len, "chain longer than len");
        }
        assert_eq!(steps, self.len);
        assert_eq!(prev, self.tail);
    }
}

/// Owning iterator that drains a list from head to tail.
#[derive(Debug)]
pub(crate) struct IntoIter<N>(pub(crate) List<N>);

impl<N: Linked> Iterator for IntoIter<N> {
    type Item = N;

    #[inline]
    fn next(&mut self) -> Option<N> {
        self.0.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<N: Linked> DoubleEndedIterator for IntoIter<N> {
    #[inline]
    fn next_back(&mut self) -> Option<N> {
        self.0.pop_back()
    }
}

impl<N: Linked> ExactSizeIterator for IntoIter<N> {}

/// Borrowing iterator over list nodes, head to tail.
#[derive(Debug)]
pub(crate) struct Iter<'a, N> {
    nodes: &'a Slab<N>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<N> Clone for Iter<'_, N> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, N: Linked> Iterator for Iter<'a, N> {
    type Item = &'a N;

    #[inline]
    fn next(&mut self) -> Option<&'a N> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front.slot()?];
        self.front = node.next();
        self.remaining -= 1;
        Some(node)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, N: Linked> DoubleEndedIterator for Iter<'a, N> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a N> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back.slot()?];
        self.back = node.prev();
        self.remaining -= 1;
        Some(node)
    }
}

impl<N: Linked> ExactSizeIterator for Iter<'_, N> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Node {
        value: u64,
        prev: Link,
        next: Link,
    }

    impl Node {
        fn new(value: u64) -> Self {
            Self {
                value,
                prev: Link::NONE,
                next: Link::NONE,
            }
        }
    }

    impl Linked for Node {
        fn next(&self) -> Link {
            self.next
        }
        fn prev(&self) -> Link {
            self.prev
        }
        fn set_next(&mut self, link: Link) {
            self.next = link;
        }
        fn set_prev(&mut self, link: Link) {
            self.prev = link;
        }
    }

    fn values(list: &List<Node>) -> Vec<u64> {
        list.iter().map(|node| node.value).collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list: List<Node> = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.head().is_none());
        assert!(list.tail().is_none());
        list.assert_consistent();
    }

    #[test]
    fn push_back_single() {
        let mut list = List::new();
        let a = list.push_back(Node::new(1));

        assert_eq!(list.len(), 1);
        assert_eq!(list.head(), a);
        assert_eq!(list.tail(), a);
        assert_eq!(list.get(a).map(|n| n.value), Some(1));
        list.assert_consistent();
    }

    #[test]
    fn push_back_and_front() {
        let mut list = List::new();
        list.push_back(Node::new(2));
        list.push_front(Node::new(1));
        list.push_back(Node::new(3));

        assert_eq!(values(&list), vec![1, 2, 3]);
        list.assert_consistent();
    }

    #[test]
    fn insert_before_head_and_middle() {
        let mut list = List::new();
        let a = list.push_back(Node::new(1));
        let c = list.push_back(Node::new(3));

        list.insert_before(c, Node::new(2));
        list.assert_consistent();
        list.insert_before(a, Node::new(0));
        list.assert_consistent();

        assert_eq!(values(&list), vec![0, 1, 2, 3]);
        assert_eq!(list.get(list.head()).map(|n| n.value), Some(0));
    }

    #[test]
    fn pop_back_walks_to_empty() {
        let mut list = List::new();
        for i in 1..=3 {
            list.push_back(Node::new(i));
        }

        assert_eq!(list.pop_back().map(|n| n.value), Some(3));
        list.assert_consistent();
        assert_eq!(list.pop_back().map(|n| n.value), Some(2));
        list.assert_consistent();
        assert_eq!(list.pop_back().map(|n| n.value), Some(1));
        list.assert_consistent();
        assert!(list.pop_back().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn pop_front_walks_to_empty() {
        let mut list = List::new();
        for i in 1..=3 {
            list.push_back(Node::new(i));
        }

        assert_eq!(list.pop_front().map(|n| n.value), Some(1));
        list.assert_consistent();
        assert_eq!(list.pop_front().map(|n| n.value), Some(2));
        list.assert_consistent();
        assert_eq!(list.pop_front().map(|n| n.value), Some(3));
        list.assert_consistent();
        assert!(list.pop_front().is_none());
    }

    #[test]
    fn popped_nodes_have_cleared_links() {
        let mut list = List::new();
        list.push_back(Node::new(1));
        list.push_back(Node::new(2));

        let node = list.pop_front().unwrap();
        assert!(node.prev.is_none());
        assert!(node.next.is_none());
    }

    #[test]
    fn remove_middle_and_endpoints() {
        let mut list = List::new();
        let a = list.push_back(Node::new(1));
        let b = list.push_back(Node::new(2));
        let c = list.push_back(Node::new(3));
        let d = list.push_back(Node::new(4));

        assert_eq!(list.remove(b).map(|n| n.value), Some(2));
        list.assert_consistent();
        assert_eq!(values(&list), vec![1, 3, 4]);

        assert_eq!(list.remove(a).map(|n| n.value), Some(1));
        list.assert_consistent();
        assert_eq!(list.head(), c);

        assert_eq!(list.remove(d).map(|n| n.value), Some(4));
        list.assert_consistent();
        assert_eq!(list.tail(), c);

        assert_eq!(list.remove(c).map(|n| n.value), Some(3));
        list.assert_consistent();
        assert!(list.is_empty());
    }

    #[test]
    fn remove_stale_link_is_none() {
        let mut list = List::new();
        let a = list.push_back(Node::new(1));
        list.push_back(Node::new(2));

        assert!(list.remove(a).is_some());
        assert!(list.remove(a).is_none());
        assert!(list.remove(Link::NONE).is_none());
        assert!(!list.contains(a));
        assert_eq!(list.len(), 1);
        list.assert_consistent();
    }

    #[test]
    fn find_stops_at_tail() {
        let mut list = List::new();
        list.push_back(Node::new(1));
        let b = list.push_back(Node::new(5));
        list.push_back(Node::new(9));

        assert_eq!(list.find(|n| n.value >= 4), b);
        assert!(list.find(|n| n.value > 100).is_none());

        let empty: List<Node> = List::new();
        assert!(empty.find(|_| true).is_none());
    }

    #[test]
    fn iter_double_ended() {
        let mut list = List::new();
        for i in 1..=5 {
            list.push_back(Node::new(i));
        }

        let mut iter = list.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next().map(|n| n.value), Some(1));
        assert_eq!(iter.next_back().map(|n| n.value), Some(5));
        assert_eq!(iter.next().map(|n| n.value), Some(2));
        assert_eq!(iter.next_back().map(|n| n.value), Some(4));
        assert_eq!(iter.next().map(|n| n.value), Some(3));
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());

        let rev: Vec<_> = list.iter().rev().map(|n| n.value).collect();
        assert_eq!(rev, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn into_iter_drains_in_order() {
        let mut list = List::new();
        for i in 1..=3 {
            list.push_back(Node::new(i));
        }

        let drained: Vec<_> = IntoIter(list).map(|n| n.value).collect();
        assert_eq!(drained, vec![1, 2, 3]);
    }

    #[test]
    fn clear_releases_slots() {
        let mut list = List::with_capacity(8);
        for i in 0..4 {
            list.push_back(Node::new(i));
        }

        list.clear();
        list.assert_consistent();
        assert!(list.is_empty());

        let a = list.push_back(Node::new(10));
        assert_eq!(list.head(), a);
        list.assert_consistent();
    }

    #[test]
    fn slot_reuse_after_remove() {
        let mut list = List::new();
        let a = list.push_back(Node::new(1));
        list.push_back(Node::new(2));

        list.remove(a);
        let c = list.push_front(Node::new(3));

        // slab hands back the freed slot
        assert_eq!(c, a);
        assert_eq!(values(&list), vec![3, 2]);
        list.assert_consistent();
    }
}
