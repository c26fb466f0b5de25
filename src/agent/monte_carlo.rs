use std::collections::HashMap;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::env::easy21::{Easy21State, NUM_ACTIONS};
use crate::env::Environment;
use crate::error::Result;
use crate::qtable::ActionValueTable;

/// Tabular GLIE Monte-Carlo control for Easy21.
///
/// Exploration decays per state as `epsilon_t = n0 / (n0 + N(s))` and the
/// step size per pair as `1 / N(s, a)`, the standard Easy21-assignment
/// setup. Undiscounted returns. The resulting table serves as the
/// baseline the Sarsa(lambda) study measures its error against.
pub struct MonteCarloAgent {
    n0: f32,
    state_counts: HashMap<Easy21State, u32>,
    pair_counts: HashMap<(Easy21State, usize), u32>,
    q: ActionValueTable,
    rng: ThreadRng,
}

impl MonteCarloAgent {
    pub fn new(n0: f32) -> Self {
        MonteCarloAgent {
            n0,
            state_counts: HashMap::new(),
            pair_counts: HashMap::new(),
            q: ActionValueTable::new(NUM_ACTIONS),
            rng: rand::thread_rng(),
        }
    }

    fn select_action(&mut self, state: Easy21State) -> usize {
        let visits = self.state_counts.get(&state).copied().unwrap_or(0);
        let epsilon = self.n0 / (self.n0 + visits as f32);
        if self.rng.gen::<f32>() < epsilon {
            self.rng.gen_range(0..NUM_ACTIONS)
        } else {
            let mut best = 0;
            let mut best_value = self.q.value(state, 0);
            for action in 1..NUM_ACTIONS {
                let value = self.q.value(state, action);
                if value > best_value {
                    best = action;
                    best_value = value;
                }
            }
            best
        }
    }

    /// Generate one episode, then do an every-visit update of all pairs
    /// along it towards their observed return.
    pub fn learn_episode<E>(&mut self, env: &mut E) -> Result<()>
    where
        E: Environment<State = Easy21State>,
    {
        let mut visited: Vec<(Easy21State, usize)> = Vec::new();
        let mut rewards: Vec<f32> = Vec::new();

        let mut state = env.reset();
        loop {
            let action = self.select_action(state);
            visited.push((state, action));
            let (next_state, reward, done) = env.step(action)?;
            rewards.push(reward);
            if done {
                break;
            }
            state = next_state;
        }

        // Undiscounted return from each step onwards.
        let mut g = 0.0;
        let mut returns = vec![0.0; rewards.len()];
        for t in (0..rewards.len()).rev() {
            g += rewards[t];
            returns[t] = g;
        }

        for (t, &(state, action)) in visited.iter().enumerate() {
            *self.state_counts.entry(state).or_insert(0) += 1;
            let count = self.pair_counts.entry((state, action)).or_insert(0);
            *count += 1;
            let old = self.q.value(state, action);
            let step = 1.0 / *count as f32;
            self.q.set(state, action, old + step * (returns[t] - old));
        }

        Ok(())
    }

    pub fn learn<E>(&mut self, env: &mut E, num_episodes: usize) -> Result<()>
    where
        E: Environment<State = Easy21State>,
    {
        for episode in 1..=num_episodes {
            self.learn_episode(env)?;
            if episode % 100_000 == 0 {
                println!("monte-carlo episode {episode}");
            }
        }
        Ok(())
    }

    pub fn action_values(&self) -> &ActionValueTable {
        &self.q
    }

    pub fn into_action_values(self) -> ActionValueTable {
        self.q
    }
}
