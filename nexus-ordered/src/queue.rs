//! Double-ended queue over an arena-backed linked list.
//!
//! `push`/`pop` work at the tail and `unshift`/`shift` at the head, all O(1).
//! Reading from an empty queue returns `None` rather than failing.
//!
//! # Example
//!
//! ```
//! use nexus_ordered::Queue;
//!
//! let mut queue = Queue::new();
//! assert_eq!(queue.push(1), 1);
//! assert_eq!(queue.push(2), 2);
//! assert_eq!(queue.unshift(0), 3);
//!
//! assert_eq!(queue.front(), Some(&0));
//! assert_eq!(queue.back(), Some(&2));
//!
//! assert_eq!(queue.pop(), Some(2));
//! assert_eq!(queue.shift(), Some(0));
//! assert_eq!(queue.shift(), Some(1));
//! assert_eq!(queue.shift(), None);
//! ```

use crate::link::Link;
use crate::list::{self, Linked, List};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Link,
    next: Link,
}

impl<T> Node<T> {
    #[inline]
    fn new(value: T) -> Self {
        Self {
            value,
            prev: Link::NONE,
            next: Link::NONE,
        }
    }
}

impl<T> Linked for Node<T> {
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

/// A doubly-linked FIFO/LIFO queue.
///
/// Values are stored head to tail. Used from one end it behaves as a stack;
/// `push` + `shift` (or `unshift` + `pop`) gives FIFO order.
#[derive(Clone)]
pub struct Queue<T> {
    list: List<Node<T>>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// Creates an empty queue with room for `capacity` values before the
    /// node arena reallocates.
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

    /// Appends a value at the tail and returns the new length.
    #[inline]
    pub fn push(&mut self, value: T) -> usize {
        self.list.push_back(Node::new(value));
        self.list.len()
    }

    /// Removes and returns the tail value, or `None` if the queue is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_back().map(|node| node.value)
    }

    /// Inserts a value at the head and returns the new length.
    #[inline]
    pub fn unshift(&mut self, value: T) -> usize {
        self.list.push_front(Node::new(value));
        self.list.len()
    }

    /// Removes and returns the head value, or `None` if the queue is empty.
    #[inline]
    pub fn shift(&mut self) -> Option<T> {
        self.list.pop_front().map(|node| node.value)
    }

    /// Returns a reference to the head value.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.list.get(self.list.head()).map(|node| &node.value)
    }

    /// Returns a reference to the tail value.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.list.get(self.list.tail()).map(|node| &node.value)
    }

    /// Iterates values from head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Removes every value.
    #[inline]
    pub fn clear(&mut self) {
        self.list.clear();
    }

    #[cfg(test)]
    fn assert_consistent(&self) {
        self.list.assert_consistent();
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: list::IntoIter(self.list),
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Borrowing iterator over a [`Queue`], head to tail.
pub struct Iter<'a, T> {
    inner: list::Iter<'a, Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|node| &node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|node| &node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`Queue`], head to tail.
pub struct IntoIter<T> {
    inner: list::IntoIter<Node<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|node| node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(|node| node.value)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
