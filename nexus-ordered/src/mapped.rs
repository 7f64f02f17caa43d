//! Priority queue with O(1) lookup and removal by key.
//!
//! Layers a key -> node index over [`PriorityQueue`]. Because nodes live in
//! an arena with stable handles, the index points straight at a node and
//! [`remove_by_id`](MappedPriorityQueue::remove_by_id) unlinks it without
//! walking the list.
//!
//! # Example
//!
//! ```
//! use nexus_ordered::{Keyed, MappedPriorityQueue};
//!
//! #[derive(Debug, PartialEq)]
//! struct Job {
//!     id: String,
//!     cost: u32,
//! }
//!
//! impl Keyed for Job {
//!     type Key = String;
//!     fn key(&self) -> &String {
//!         &self.id
//!     }
//! }
//!
//! let mut jobs = MappedPriorityQueue::new();
//! jobs.add(2, Job { id: "build".into(), cost: 30 }).unwrap();
//! jobs.add(1, Job { id: "lint".into(), cost: 5 }).unwrap();
//! jobs.add(3, Job { id: "deploy".into(), cost: 60 }).unwrap();
//!
//! // Keys are unique
//! assert!(jobs.add(9, Job { id: "lint".into(), cost: 0 }).is_err());
//!
//! assert!(jobs.has("build"));
//! assert_eq!(jobs.get_by_id("build").map(|j| j.cost), Some(30));
//!
//! // O(1) removal from the middle
//! assert_eq!(jobs.remove_by_id("build").map(|j| j.cost), Some(30));
//! assert!(!jobs.has("build"));
//!
//! assert_eq!(jobs.get_max().map(|j| j.id), Some("deploy".to_string()));
//! assert_eq!(jobs.get_min().map(|j| j.id), Some("lint".to_string()));
//! assert!(jobs.is_empty());
//! ```

use core::borrow::Borrow;
use core::hash::Hash;

use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::link::Link;
use crate::priority::{self, PriorityQueue};
use crate::DuplicateKey;

/// Payloads that expose an identifier for keyed lookup.
///
/// The key must stay the same while the value is in a queue.
pub trait Keyed {
    /// Identifier type.
    type Key: Hash + Eq + Clone;

    /// Returns this value's identifier.
    fn key(&self) -> &Self::Key;
}

/// A [`PriorityQueue`] whose values can be found and removed by key.
///
/// Ordering and tie-breaking are exactly those of [`PriorityQueue`]. The
/// index holds precisely the keys of the values currently queued.
pub struct MappedPriorityQueue<T: Keyed, P = i64> {
    queue: PriorityQueue<T, P>,
    index: HashMap<T::Key, Link>,
}

impl<T: Keyed, P> Default for MappedPriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed + Clone, P: Clone> Clone for MappedPriorityQueue<T, P> {
    fn clone(&self) -> Self {
        // Slab clones keep slot numbers, so the index stays valid.
        Self {
            queue: self.queue.clone(),
            index: self.index.clone(),
        }
    }
}

impl<T: Keyed, P> MappedPriorityQueue<T, P> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` values before either
    /// the node arena or the key index reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: PriorityQueue::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of values in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if the queue holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Removes and returns the highest-priority value and drops its key.
    ///
    /// Returns `None` if the queue is empty.
    pub fn get_max(&mut self) -> Option<T> {
        let value = self.queue.get_max()?;
        self.unindex(&value);
        Some(value)
    }

    /// Removes and returns the lowest-priority value and drops its key.
    ///
    /// Returns `None` if the queue is empty.
    pub fn get_min(&mut self) -> Option<T> {
        let value = self.queue.get_min()?;
        self.unindex(&value);
        Some(value)
    }

    /// Same as [`get_max`](Self::get_max).
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.get_max()
    }

    /// Same as [`get_min`](Self::get_min).
    #[inline]
    pub fn shift(&mut self) -> Option<T> {
        self.get_min()
    }

    /// Returns the highest-priority entry without removing it.
    #[inline]
    pub fn peek_max(&self) -> Option<(&P, &T)> {
        self.queue.peek_max()
    }

    /// Returns the lowest-priority entry without removing it.
    #[inline]
    pub fn peek_min(&self) -> Option<(&P, &T)> {
        self.queue.peek_min()
    }

    /// Returns `true` if a value with this key is queued. O(1).
    #[inline]
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns the value queued under `key`, or `None` if absent. O(1).
    #[inline]
    pub fn get_by_id<Q>(&self, key: &Q) -> Option<&T>
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).and_then(|&link| self.queue.get(link))
    }

    /// Returns the priority of the value queued under `key`.
    #[inline]
    pub fn priority_of<Q>(&self, key: &Q) -> Option<&P>
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).and_then(|&link| self.queue.priority(link))
    }

    /// Unlinks and returns the value queued under `key`. O(1).
    ///
    /// Returns `None` without touching the queue if the key is absent.
    pub fn remove_by_id<Q>(&mut self, key: &Q) -> Option<T>
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(link) = self.index.remove(key) else {
            trace!(len = self.queue.len(), "remove_by_id: key not queued");
            return None;
        };

        let value = self.queue.remove(link);
        if value.is_none() {
            trace!(?link, "remove_by_id: indexed node was not linked");
        }
        debug_assert!(value.is_some(), "key index pointed at an unlinked node");
        value
    }

    /// Iterates `(priority, value)` pairs in ascending priority order.
    #[inline]
    pub fn iter(&self) -> priority::Iter<'_, T, P> {
        self.queue.iter()
    }

    /// Removes every value and key.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.index.clear();
    }

    fn unindex(&mut self, value: &T) {
        let link = self.index.remove(value.key());
        debug_assert!(
            link.is_some_and(|link| !self.queue.contains(link)),
            "removed value was not indexed"
        );
    }

    #[cfg(test)]
    fn assert_consistent(&self)
    where
        P: PartialOrd + core::fmt::Debug,
    {
        self.queue.assert_consistent();
        assert_eq!(self.index.len(), self.queue.len());
        for (key, &link) in &self.index {
            let value = self.queue.get(link).expect("index points at a vacant slot");
            assert!(value.key() == key, "index points at the wrong node");
        }
    }
}

impl<T: Keyed, P: PartialOrd> MappedPriorityQueue<T, P> {
    /// Inserts `value` in priority order and indexes it by key.
    ///
    /// Returns the new length.
    ///
    /// # Errors
    ///
    /// Returns `Err(DuplicateKey(value))` if a value with the same key is
    /// already queued. The queue is left unchanged.
    pub fn add(&mut self, priority: P, value: T) -> Result<usize, DuplicateKey<T>> {
        if self.index.contains_key(value.key()) {
            debug!(len = self.queue.len(), "add: rejected duplicate key");
            return Err(DuplicateKey(value));
        }

        let key = value.key().clone();
        let link = self.queue.insert(priority, value);
        self.index.insert(key, link);
        Ok(self.queue.len())
    }
}

impl<T, P> core::fmt::Debug for MappedPriorityQueue<T, P>
where
    T: Keyed + core::fmt::Debug,
    P: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T: Keyed, P> IntoIterator for &'a MappedPriorityQueue<T, P> {
    type Item = (&'a P, &'a T);
    type IntoIter = priority::Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
