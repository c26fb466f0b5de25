//! Environment contracts and simulators.
//!
//! The two learners consume two deliberately different step contracts, and
//! they are kept separate here: the DQN side uses the four-flag gym shape
//! ([`GymEnv`], terminated/truncated reported independently), the Sarsa side
//! the plain three-tuple shape ([`Environment`]).

pub mod cartpole;
pub mod easy21;

pub use cartpole::CartPole;
pub use easy21::{Easy21, Easy21State};

use ndarray::Array1;

use crate::error::Result;

/// Result of one step of a [`GymEnv`].
#[derive(Clone, Debug)]
pub struct Step {
    pub observation: Array1<f32>,
    pub reward: f32,
    /// The episode ended inside the MDP (a terminal state was reached).
    pub terminated: bool,
    /// The episode was cut off from outside (step limit).
    pub truncated: bool,
}

impl Step {
    pub fn is_over(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Gym-style environment with dense float observations.
pub trait GymEnv {
    fn reset(&mut self) -> Array1<f32>;
    fn step(&mut self, action: usize) -> Result<Step>;
    fn observation_dim(&self) -> usize;
    fn num_actions(&self) -> usize;
}

/// Environment with a typed state and a (state, reward, done) step result.
pub trait Environment {
    type State: Copy;

    fn reset(&mut self) -> Self::State;
    fn step(&mut self, action: usize) -> Result<(Self::State, f32, bool)>;
    fn num_actions(&self) -> usize;
}
