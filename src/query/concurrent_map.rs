use std::collections::HashMap;

use parking_lot::Mutex;

use crate::core::types::DocId;

/// Lock-striped accumulator keyed by [`DocId`], the concurrency primitive
/// the parallel query/match/remove paths share instead of a single global
/// lock: `N` independent buckets, each an ordinary map behind its own
/// mutex, with a key routed to `bucket = key % N`.
///
/// `drain` is the only place all buckets are ever touched together, and it
/// always acquires them in index order, so no two operations ever hold two
/// bucket locks at once and no deadlock ordering discipline beyond "smallest
/// index first" is needed.
pub struct ConcurrentAccumulator {
    buckets: Vec<Mutex<HashMap<DocId, f64>>>,
}

impl ConcurrentAccumulator {
    pub fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        ConcurrentAccumulator {
            buckets: (0..shard_count).map(|_| Mutex::new(HashMap::new())).collect(),
        }
    }

    fn bucket_for(&self, key: DocId) -> usize {
        (key.value() as usize) % self.buckets.len()
    }

    /// Adds `delta` to `key`'s accumulated score, creating the entry on
    /// first touch. The only mutating operation on the accumulation pass.
    pub fn add(&self, key: DocId, delta: f64) {
        let mut bucket = self.buckets[self.bucket_for(key)].lock();
        *bucket.entry(key).or_insert(0.0) += delta;
    }

    /// Removes `key` unconditionally, regardless of its current score.
    /// Used by the minus-term exclusion pass, which runs only after the
    /// accumulation pass has fully joined.
    pub fn erase(&self, key: DocId) {
        let mut bucket = self.buckets[self.bucket_for(key)].lock();
        bucket.remove(&key);
    }

    /// Acquires every bucket in index order and merges them into one
    /// ordinary map. Called once, after all fan-out has joined.
    pub fn drain(self) -> HashMap<DocId, f64> {
        let mut merged = HashMap::new();
        for bucket in &self.buckets {
            merged.extend(bucket.lock().iter().map(|(&k, &v)| (k, v)));
        }
        merged
    }
}
