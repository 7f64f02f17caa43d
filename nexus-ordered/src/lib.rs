//! Ordered linked containers over a node arena.
//!
//! Three containers share one doubly-linked list whose nodes live in a
//! [`slab::Slab`] and link to each other by handle instead of by pointer:
//!
//! ```text
//! List (arena + head/tail/len)
//!     │
//!     ├── Queue                 - push/pop at the tail, unshift/shift at the head
//!     │
//!     └── PriorityQueue         - ascending priority head -> tail
//!             │
//!             └── MappedPriorityQueue - plus key -> node index
//! ```
//!
//! | Structure | Insert | Remove ends | Lookup / remove by key |
//! |-----------|--------|-------------|------------------------|
//! | [`Queue`] | O(1) | O(1) | - |
//! | [`PriorityQueue`] | O(n) scan | O(1) | - |
//! | [`MappedPriorityQueue`] | O(n) scan | O(1) | O(1) |
//!
//! Reading from an empty container returns `None`; a missing key returns
//! `None`/`false`. The only fallible operation is
//! [`MappedPriorityQueue::add`], which rejects a key that is already queued
//! with [`DuplicateKey`].
//!
//! # Quick Start
//!
//! ```
//! use nexus_ordered::{PriorityQueue, Queue};
//!
//! let mut queue = Queue::new();
//! queue.push("a");
//! queue.push("b");
//! assert_eq!(queue.shift(), Some("a"));
//!
//! let mut pq = PriorityQueue::new();
//! pq.add(5, "urgent");
//! pq.add(1, "later");
//! assert_eq!(pq.get_max(), Some("urgent"));
//! assert_eq!(pq.get_min(), Some("later"));
//! ```
//!
//! # Logging
//!
//! Rejected inserts and missed removals emit [`tracing`] events at `debug`
//! and `trace` level. No subscriber is installed by this crate.

#![warn(missing_docs)]

pub mod error;
mod link;
mod list;
pub mod mapped;
pub mod priority;
pub mod queue;

pub use error::DuplicateKey;
pub use mapped::{Keyed, MappedPriorityQueue};
pub use priority::PriorityQueue;
pub use queue::Queue;
