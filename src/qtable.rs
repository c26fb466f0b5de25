//! Action-value tables for the Easy21 state space.
//!
//! The reference table the Sarsa(lambda) study compares against is a sparse
//! mapping with explicit default-on-miss semantics: looking up a state that
//! was never written yields zeros, and lookups never insert anything.
//! Loading from disk is explicit and caller-invoked.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::env::Easy21State;
use crate::error::Result;

/// Greedy action per state, materialized for reporting.
pub type GreedyPolicy = HashMap<Easy21State, usize>;

/// Sparse map from state to one value per action.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionValueTable {
    values: HashMap<Easy21State, Vec<f32>>,
    num_actions: usize,
}

impl ActionValueTable {
    pub fn new(num_actions: usize) -> Self {
        ActionValueTable {
            values: HashMap::new(),
            num_actions,
        }
    }

    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    /// Value for a state/action pair; 0.0 for states never written.
    pub fn value(&self, state: Easy21State, action: usize) -> f32 {
        self.values
            .get(&state)
            .and_then(|v| v.get(action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Per-action values for a state; all zeros for states never written.
    pub fn values(&self, state: Easy21State) -> Vec<f32> {
        self.values
            .get(&state)
            .cloned()
            .unwrap_or_else(|| vec![0.0; self.num_actions])
    }

    pub fn set(&mut self, state: Easy21State, action: usize, value: f32) {
        let num_actions = self.num_actions;
        self.values
            .entry(state)
            .or_insert_with(|| vec![0.0; num_actions])[action] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Easy21State, &Vec<f32>)> {
        self.values.iter()
    }

    pub fn states(&self) -> impl Iterator<Item = &Easy21State> {
        self.values.keys()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = bincode::serialize(self)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        let table: Self = bincode::deserialize(&data)?;
        Ok(table)
    }
}
