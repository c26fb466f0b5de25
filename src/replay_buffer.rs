//! Bounded FIFO experience replay.

use ndarray::Array1;
use rand::seq::index::sample as sample_indices;
use rand::thread_rng;
use std::collections::VecDeque;

/// A single observed transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Experience {
    pub state: Array1<f32>,
    pub action: usize,
    pub reward: f32,
    pub next_state: Array1<f32>,
    pub done: bool,
}

/// Capacity-bounded buffer: once full, adding evicts the oldest entry.
/// No priorities, no recency weighting.
#[derive(Clone)]
pub struct ReplayBuffer {
    buffer: VecDeque<Experience>,
    capacity: usize,
}

impl ReplayBuffer {
    pub fn new(capacity: usize) -> Self {
        ReplayBuffer {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn add(&mut self, experience: Experience) {
        if self.buffer.len() == self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(experience);
    }

    /// Uniform sample without replacement. Returns fewer than `batch_size`
    /// references when the buffer holds fewer entries.
    pub fn sample(&self, batch_size: usize) -> Vec<&Experience> {
        let mut rng = thread_rng();
        let count = batch_size.min(self.buffer.len());
        sample_indices(&mut rng, self.buffer.len(), count)
            .into_iter()
            .map(|i| &self.buffer[i])
            .collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
