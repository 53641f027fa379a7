//! Bounded in-memory history of accepted samples.
//!
//! The history buffer and the "latest" sample live behind one mutex. Latest is
//! read from the buffer tail inside the same critical section, so the two can
//! never disagree.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::models::Sample;

// ---

/// Number of samples retained when no override is configured.
pub const DEFAULT_HISTORY_MAX: usize = 300;

/// Point-in-time copy of the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub latest: Option<Sample>,
    /// Oldest first.
    pub history: Vec<Sample>,
}

/// Fixed-capacity FIFO of scored samples.
#[derive(Debug)]
pub struct HistoryStore {
    capacity: usize,
    samples: Mutex<VecDeque<Sample>>,
}

impl HistoryStore {
    /// Create an empty store. A zero capacity is raised to one so that the
    /// latest sample is always retained.
    pub fn new(capacity: usize) -> Self {
        // ---
        let capacity = capacity.max(1);
        HistoryStore {
            capacity,
            samples: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Insert at the tail, evicting from the head once capacity is exceeded.
    pub fn append(&self, sample: Sample) {
        // ---
        let mut samples = self.samples.lock();
        samples.push_back(sample);
        while samples.len() > self.capacity {
            samples.pop_front();
        }
    }

    /// Latest sample plus an ordered copy of the history.
    pub fn snapshot(&self) -> Snapshot {
        // ---
        let samples = self.samples.lock();
        Snapshot {
            latest: samples.back().cloned(),
            history: samples.iter().cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        HistoryStore::new(DEFAULT_HISTORY_MAX)
    }
}
