//! Exploration-rate schedules.
//!
//! The DQN agent re-reads its schedule once per episode; all variants are
//! non-increasing in the episode index and never drop below their floor.

use serde::{Deserialize, Serialize};

/// Epsilon as a function of the episode index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum EpsilonSchedule {
    /// Fixed epsilon for the whole run.
    Constant { epsilon: f32 },

    /// epsilon = end + (start - end) * rate^episode, with rate in (0, 1].
    ExponentialDecay { start: f32, end: f32, rate: f32 },

    /// Linear interpolation from `start` to `end` over `decay_episodes`,
    /// then flat at `end`.
    LinearDecay {
        start: f32,
        end: f32,
        decay_episodes: usize,
    },
}

impl EpsilonSchedule {
    /// Epsilon for the given episode, clamped to [0, 1].
    pub fn value(&self, episode: usize) -> f32 {
        let epsilon = match self {
            EpsilonSchedule::Constant { epsilon } => *epsilon,

            EpsilonSchedule::ExponentialDecay { start, end, rate } => {
                end + (start - end) * rate.powi(episode as i32)
            }

            EpsilonSchedule::LinearDecay { start, end, decay_episodes } => {
                if episode >= *decay_episodes {
                    *end
                } else {
                    let progress = episode as f32 / *decay_episodes as f32;
                    start * (1.0 - progress) + end * progress
                }
            }
        };
        epsilon.clamp(0.0, 1.0)
    }
}

impl Default for EpsilonSchedule {
    fn default() -> Self {
        EpsilonSchedule::ExponentialDecay {
            start: 1.0,
            end: 0.01,
            rate: 0.995,
        }
    }
}
