//! # Chiron - Educational Reinforcement Learning in Rust
//!
//! Chiron implements two classic value-based learners end to end, with no
//! shared learning infrastructure between them:
//!
//! - A **Deep Q-Network (DQN)** agent for the cart-pole control problem:
//!   an MLP action-value function with a periodically synced target copy,
//!   epsilon-greedy exploration on a decaying schedule, and a bounded FIFO
//!   replay buffer feeding minibatch TD updates.
//! - A **Sarsa(lambda)** agent with linear function approximation for the
//!   Easy21 card game: 18 overlapping coarse-coding tiles over the
//!   (dealer, player) state, one weight column per action, and backward-view
//!   eligibility-trace updates at every step.
//!
//! The Sarsa side ships an evaluation harness that tracks mean-squared error
//! against a Monte-Carlo reference table, episode by episode and across a
//! sweep of lambda values.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chiron::agent::{DqnAgent, DqnConfig};
//! use chiron::env::CartPole;
//! use chiron::training::{self, TrainingConfig};
//!
//! let mut agent = DqnAgent::new(DqnConfig::default()).unwrap();
//! let mut env = CartPole::new();
//! let mut eval_env = CartPole::new();
//! let metrics = training::train(
//!     &mut agent,
//!     &mut env,
//!     &mut eval_env,
//!     &TrainingConfig::default(),
//! ).unwrap();
//! println!("mean return: {:?}", metrics.mean_recent_return(100));
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation functions used by the value network
//! - [`agent`] - The DQN, Sarsa(lambda) and Monte-Carlo agents
//! - [`env`] - Environment contracts and the cart-pole / Easy21 simulators
//! - [`error`] - Error types and result handling
//! - [`metrics`] - Training metric histories and JSON export
//! - [`network`] - The feed-forward value network
//! - [`optimizer`] - SGD and Adam
//! - [`qtable`] - Action-value tables with default-on-miss lookup
//! - [`replay_buffer`] - Bounded FIFO experience replay
//! - [`schedule`] - Exploration-rate decay schedules
//! - [`training`] - The DQN episode loop with periodic greedy evaluation
//! - [`visualization`] - Text plots for returns, losses and MSE curves

pub mod activations;
pub mod agent;
pub mod env;
pub mod error;
pub mod metrics;
pub mod network;
pub mod optimizer;
pub mod qtable;
pub mod replay_buffer;
pub mod schedule;
pub mod training;
pub mod visualization;

#[cfg(test)]
mod tests;
