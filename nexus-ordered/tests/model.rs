//! Randomized operation sequences checked against simple reference models.

use std::cmp::Reverse;
use std::collections::VecDeque;

use nexus_ordered::{Keyed, MappedPriorityQueue, PriorityQueue, Queue};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SEEDS: [u64; 4] = [1, 7, 42, 12345];
const OPS: usize = 2_000;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    id: u32,
    seq: u64,
}

impl Keyed for Entry {
    type Key = u32;
    fn key(&self) -> &u32 {
        &self.id
    }
}

/// Reference ordering: ascending priority, newest first among equals.
#[derive(Default)]
struct SortedModel {
    entries: Vec<(i64, u64, u32)>,
}

impl SortedModel {
    fn insert(&mut self, priority: i64, seq: u64, id: u32) {
        self.entries.push((priority, seq, id));
        self.entries
            .sort_by_key(|&(priority, seq, _)| (priority, Reverse(seq)));
    }

    fn pop_max(&mut self) -> Option<u64> {
        self.entries.pop().map(|(_, seq, _)| seq)
    }

    fn pop_min(&mut self) -> Option<u64> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0).1)
        }
    }

    fn remove_id(&mut self, id: u32) -> Option<u64> {
        let pos = self.entries.iter().position(|&(_, _, e)| e == id)?;
        Some(self.entries.remove(pos).1)
    }

    fn has(&self, id: u32) -> bool {
        self.entries.iter().any(|&(_, _, e)| e == id)
    }

    fn seqs(&self) -> Vec<u64> {
        self.entries.iter().map(|&(_, seq, _)| seq).collect()
    }
}

#[test]
fn queue_matches_vecdeque() {
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut queue = Queue::new();
        let mut model = VecDeque::new();

        for i in 0..OPS as u64 {
            match rng.gen_range(0..4) {
                0 => assert_eq!(queue.push(i), {
                    model.push_back(i);
                    model.len()
                }),
                1 => assert_eq!(queue.unshift(i), {
                    model.push_front(i);
                    model.len()
                }),
                2 => assert_eq!(queue.pop(), model.pop_back()),
                _ => assert_eq!(queue.shift(), model.pop_front()),
            }

            assert_eq!(queue.len(), model.len());
            assert_eq!(queue.front(), model.front());
            assert_eq!(queue.back(), model.back());
        }

        let remaining: Vec<_> = queue.into_iter().collect();
        let expected: Vec<_> = model.into_iter().collect();
        assert_eq!(remaining, expected);
    }
}

#[test]
fn priority_queue_matches_sorted_model() {
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut pq: PriorityQueue<u64> = PriorityQueue::new();
        let mut model = SortedModel::default();

        for seq in 0..OPS as u64 {
            match rng.gen_range(0..5) {
                0..=2 => {
                    // Narrow range so ties are common.
                    let priority = rng.gen_range(-3..=3);
                    let len = if rng.gen_bool(0.5) {
                        pq.push(seq, priority)
                    } else {
                        pq.add(priority, seq)
                    };
                    model.insert(priority, seq, 0);
                    assert_eq!(len, model.entries.len());
                }
                3 => assert_eq!(pq.get_max(), model.pop_max()),
                _ => assert_eq!(pq.get_min(), model.pop_min()),
            }

            assert_eq!(pq.len(), model.entries.len());
        }

        let order: Vec<_> = pq.iter().map(|(_, &seq)| seq).collect();
        assert_eq!(order, model.seqs());

        let priorities: Vec<_> = pq.iter().map(|(&p, _)| p).collect();
        assert!(priorities.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn get_max_is_non_increasing() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut pq = PriorityQueue::new();
    for i in 0..500u32 {
        pq.add(rng.gen_range(0..50i64), i);
    }

    let mut last = i64::MAX;
    while let Some((&priority, _)) = pq.peek_max() {
        assert!(priority <= last);
        last = priority;
        pq.get_max();
    }
    assert!(pq.is_empty());
}

#[test]
fn mapped_queue_matches_sorted_model() {
    for seed in SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut queue: MappedPriorityQueue<Entry> = MappedPriorityQueue::new();
        let mut model = SortedModel::default();

        for seq in 0..OPS as u64 {
            let id = rng.gen_range(0..64u32);
            match rng.gen_range(0..6) {
                0..=2 => {
                    let priority = rng.gen_range(-3..=3);
                    let result = queue.add(priority, Entry { id, seq });
                    if model.has(id) {
                        let rejected = result.expect_err("duplicate key accepted");
                        assert_eq!(rejected.into_inner().seq, seq);
                    } else {
                        model.insert(priority, seq, id);
                        assert_eq!(result, Ok(model.entries.len()));
                    }
                }
                3 => assert_eq!(queue.pop().map(|e| e.seq), model.pop_max()),
                4 => assert_eq!(queue.shift().map(|e| e.seq), model.pop_min()),
                _ => {
                    let before = queue.len();
                    let removed = queue.remove_by_id(&id).map(|e| e.seq);
                    let expected = model.remove_id(id);
                    assert_eq!(removed, expected);
                    if expected.is_none() {
                        assert_eq!(queue.len(), before);
                    }
                }
            }

            assert_eq!(queue.len(), model.entries.len());
            assert_eq!(queue.has(&id), model.has(id));
            assert_eq!(queue.get_by_id(&id).is_some(), model.has(id));
        }

        for &(priority, seq, id) in &model.entries {
            assert_eq!(queue.get_by_id(&id).map(|e| e.seq), Some(seq));
            assert_eq!(queue.priority_of(&id), Some(&priority));
        }

        let order: Vec<_> = queue.iter().map(|(_, e)| e.seq).collect();
        assert_eq!(order, model.seqs());
    }
}
