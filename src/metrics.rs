//! Training metric histories.
//!
//! Bounded deques of the quantities worth watching during a run, with a
//! JSON export for offline inspection. Recording is always optional
//! observability; nothing here feeds back into learning.

use std::collections::VecDeque;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MetricsTracker {
    history_size: usize,

    pub episode_returns: VecDeque<f32>,
    pub episode_lengths: VecDeque<usize>,
    pub losses: VecDeque<f32>,
    pub epsilons: VecDeque<f32>,
    pub eval_returns: VecDeque<f32>,
    pub mse_values: VecDeque<f32>,
}

impl MetricsTracker {
    pub fn new(history_size: usize) -> Self {
        MetricsTracker {
            history_size,
            episode_returns: VecDeque::with_capacity(history_size),
            episode_lengths: VecDeque::with_capacity(history_size),
            losses: VecDeque::with_capacity(history_size),
            epsilons: VecDeque::with_capacity(history_size),
            eval_returns: VecDeque::with_capacity(history_size),
            mse_values: VecDeque::with_capacity(history_size),
        }
    }

    pub fn record_episode(&mut self, episode_return: f32, length: usize, epsilon: f32) {
        push_bounded(&mut self.episode_returns, episode_return, self.history_size);
        push_bounded(&mut self.episode_lengths, length, self.history_size);
        push_bounded(&mut self.epsilons, epsilon, self.history_size);
    }

    pub fn record_loss(&mut self, loss: f32) {
        push_bounded(&mut self.losses, loss, self.history_size);
    }

    pub fn record_eval_return(&mut self, eval_return: f32) {
        push_bounded(&mut self.eval_returns, eval_return, self.history_size);
    }

    pub fn record_mse(&mut self, mse: f32) {
        push_bounded(&mut self.mse_values, mse, self.history_size);
    }

    /// Mean of the most recent `n` episode returns, if any were recorded.
    pub fn mean_recent_return(&self, n: usize) -> Option<f32> {
        mean_recent(&self.episode_returns, n)
    }

    /// Mean of the most recent `n` losses, if any were recorded.
    pub fn mean_recent_loss(&self, n: usize) -> Option<f32> {
        mean_recent(&self.losses, n)
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new(100_000)
    }
}

fn push_bounded<T>(history: &mut VecDeque<T>, value: T, limit: usize) {
    if history.len() >= limit {
        history.pop_front();
    }
    history.push_back(value);
}

fn mean_recent(history: &VecDeque<f32>, n: usize) -> Option<f32> {
    if history.is_empty() {
        return None;
    }
    let take = n.min(history.len());
    let sum: f32 = history.iter().rev().take(take).sum();
    Some(sum / take as f32)
}
