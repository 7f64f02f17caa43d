//! Priority queue kept as a sorted linked list.
//!
//! Nodes are ordered by ascending priority from head to tail, so the minimum
//! sits at the head and the maximum at the tail. Insertion scans from the
//! head and is O(n); removal from either end is O(1).
//!
//! # Ties
//!
//! A new value is linked ahead of the first node whose priority is `>=` its
//! own, i.e. before every existing value of equal priority. Among equal
//! priorities:
//!
//! - [`get_max`](PriorityQueue::get_max) returns the earliest-inserted value.
//! - [`get_min`](PriorityQueue::get_min) returns the latest-inserted value.
//!
//! ```
//! use nexus_ordered::PriorityQueue;
//!
//! let mut pq = PriorityQueue::new();
//! pq.add(1, "first");
//! pq.add(1, "second");
//! pq.add(0, "low");
//! pq.add(9, "high");
//!
//! assert_eq!(pq.get_max(), Some("high"));
//! assert_eq!(pq.get_max(), Some("first"));
//! assert_eq!(pq.get_min(), Some("low"));
//! assert_eq!(pq.get_min(), Some("second"));
//! assert_eq!(pq.get_min(), None);
//! ```

use crate::link::Link;
use crate::list::{self, Linked, List};

#[derive(Debug, Clone)]
struct Node<T, P> {
    value: T,
    priority: P,
    prev: Link,
    next: Link,
}

impl<T, P> Node<T, P> {
    #[inline]
    fn new(priority: P, value: T) -> Self {
        Self {
            value,
            priority,
            prev: Link::NONE,
            next: Link::NONE,
        }
    }
}

impl<T, P> Linked for Node<T, P> {
    #[inline]
    fn next(&self) -> Link {
        self.next
    }

    #[inline]
    fn prev(&self) -> Link {
        self.prev
    }

    #[inline]
    fn set_next(&mut self, link: Link) {
        self.next = link;
    }

    #[inline]
    fn set_prev(&mut self, link: Link) {
        self.prev = link;
    }
}

/// A priority queue with stable handling of equal priorities.
///
/// `P` is any numeric-like type ordered by [`PartialOrd`]; it defaults to
/// `i64`. A priority that compares as unordered with everything (e.g.
/// `f64::NAN`) is never `>=` an existing priority, so it is appended at the
/// tail when inserted.
#[derive(Clone)]
pub struct PriorityQueue<T, P = i64> {
    list: List<Node<T, P>>,
}

impl<T, P> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> PriorityQueue<T, P> {
    /// Creates an empty priority queue.
    #[inline]
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// Creates an empty priority queue with room for `capacity` values
    /// before the node arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: List::with_capacity(capacity),
        }
    }

    /// Returns the number of values in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the queue holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Removes and returns the value with the highest priority.
    ///
    /// Among equal maxima this is the earliest-inserted value.
    /// Returns `None` if the queue is empty.
    #[inline]
    pub fn get_max(&mut self) -> Option<T> {
        self.list.pop_back().map(|node| node.value)
    }

    /// Removes and returns the value with the lowest priority.
    ///
    /// Among equal minima this is the latest-inserted value.
    /// Returns `None` if the queue is empty.
    #[inline]
    pub fn get_min(&mut self) -> Option<T> {
        self.list.pop_front().map(|node| node.value)
    }

    /// Same as [`get_max`](Self::get_max): removes from the tail.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.get_max()
    }

    /// Same as [`get_min`](Self::get_min): removes from the head.
    #[inline]
    pub fn shift(&mut self) -> Option<T> {
        self.get_min()
    }

    /// Returns the highest-priority entry without removing it.
    #[inline]
    pub fn peek_max(&self) -> Option<(&P, &T)> {
        self.list
            .get(self.list.tail())
            .map(|node| (&node.priority, &node.value))
    }

    /// Returns the lowest-priority entry without removing it.
    #[inline]
    pub fn peek_min(&self) -> Option<(&P, &T)> {
        self.list
            .get(self.list.head())
            .map(|node| (&node.priority, &node.value))
    }

    /// Iterates `(priority, value)` pairs in ascending priority order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Removes every value.
    #[inline]
    pub fn clear(&mut self) {
        self.list.clear();
    }

    #[inline]
    pub(crate) fn get(&self, link: Link) -> Option<&T> {
        self.list.get(link).map(|node| &node.value)
    }

    #[inline]
    pub(crate) fn priority(&self, link: Link) -> Option<&P> {
        self.list.get(link).map(|node| &node.priority)
    }

    /// Unlinks the value behind `link` in O(1).
    #[inline]
    pub(crate) fn remove(&mut self, link: Link) -> Option<T> {
        self.list.remove(link).map(|node| node.value)
    }

    #[inline]
    pub(crate) fn contains(&self, link: Link) -> bool {
        self.list.contains(link)
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self)
    where
        P: PartialOrd + core::fmt::Debug,
    {
        self.list.assert_consistent();
        let priorities: Vec<_> = self.list.iter().map(|node| &node.priority).collect();
        for pair in priorities.windows(2) {
            assert!(
                !(pair[0] > pair[1]),
                "priorities out of order: {:?} before {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

impl<T, P: PartialOrd> PriorityQueue<T, P> {
    /// Inserts `value` in priority order and returns the new length.
    ///
    /// The value goes ahead of every existing value of equal priority.
    pub fn add(&mut self, priority: P, value: T) -> usize {
        self.insert(priority, value);
        self.list.len()
    }

    /// Alias of [`add`](Self::add) with the arguments swapped.
    ///
    /// Position is decided by `priority`, not by the method name.
    #[inline]
    pub fn push(&mut self, value: T, priority: P) -> usize {
        self.add(priority, value)
    }

    /// Alias of [`add`](Self::add) with the arguments swapped.
    ///
    /// Position is decided by `priority`, not by the method name.
    #[inline]
    pub fn unshift(&mut self, value: T, priority: P) -> usize {
        self.add(priority, value)
    }

    /// Ordered insert returning the new node's handle.
    pub(crate) fn insert(&mut self, priority: P, value: T) -> Link {
        let before = self.list.find(|node| node.priority >= priority);
        let node = Node::new(priority, value);

        if before.is_some() {
            self.list.insert_before(before, node)
        } else {
            self.list.push_back(node)
        }
    }
}

impl<T: core::fmt::Debug, P: core::fmt::Debug> core::fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, P: PartialOrd> Extend<(P, T)> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (priority, value) in iter {
            self.add(priority, value);
        }
    }
}

impl<T, P: PartialOrd> FromIterator<(P, T)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}

impl<'a, T, P> IntoIterator for &'a PriorityQueue<T, P> {
    type Item = (&'a P, &'a T);
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Iter<'a, T, P> {
        self.iter()
    }
}

/// Iterator over `(priority, value)` pairs of a [`PriorityQueue`], lowest
/// priority first.
pub struct Iter<'a, T, P> {
    inner: list::Iter<'a, Node<T, P>>,
}

impl<'a, T, P> Iterator for Iter<'a, T, P> {
    type Item = (&'a P, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| (&node.priority, &node.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, P> DoubleEndedIterator for Iter<'_, T, P> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|node| (&node.priority, &node.value))
    }
}

impl<T, P> ExactSizeIterator for Iter<'_, T, P> {}
