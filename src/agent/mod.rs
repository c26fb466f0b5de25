//! # Learning Agents
//!
//! Three agents, each built around a different value representation:
//!
//! - [`DqnAgent`]: a Deep Q-Network over dense float observations, with a
//!   lagged target network and a bounded replay buffer it owns exclusively.
//! - [`SarsaLambdaAgent`]: backward-view Sarsa(lambda) with linear function
//!   approximation over 18 coarse-coding tiles of the Easy21 state.
//! - [`MonteCarloAgent`]: tabular GLIE Monte-Carlo control, used to build
//!   the reference table the Sarsa study measures its error against.
//!
//! The DQN and Sarsa agents deliberately handle exploration differently:
//! DQN epsilon follows a decaying [`crate::schedule::EpsilonSchedule`],
//! while the Sarsa agent keeps a constant epsilon for the whole run.

mod dqn;
mod monte_carlo;
mod sarsa_lambda;

pub use dqn::{DqnAgent, DqnConfig};
pub use monte_carlo::MonteCarloAgent;
pub use sarsa_lambda::{SarsaLambdaAgent, NUM_FEATURES};
