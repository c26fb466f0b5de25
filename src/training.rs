//! The DQN episode loop.
//!
//! Per episode: act, step, store, update, decay epsilon, until the
//! environment reports termination or truncation. On fixed episode cadences
//! the target network is re-synced and a greedy evaluation episode runs
//! (no exploration, no storage, no learning).

use crate::agent::DqnAgent;
use crate::env::GymEnv;
use crate::error::Result;
use crate::metrics::MetricsTracker;

#[derive(Clone, Debug)]
pub struct TrainingConfig {
    pub episodes: usize,
    /// Overwrite the target network every this many episodes.
    pub target_sync_freq: usize,
    /// Run a greedy evaluation episode every this many episodes.
    pub eval_freq: usize,
    /// Print progress every this many episodes.
    pub log_freq: usize,
    /// Hard cap on steps per episode, over and above env truncation.
    pub max_steps_per_episode: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            episodes: 500,
            target_sync_freq: 10,
            eval_freq: 100,
            log_freq: 50,
            max_steps_per_episode: 1000,
        }
    }
}

/// Train `agent` on `env` for the configured number of episodes.
///
/// Evaluation episodes run on a separate environment instance so they never
/// disturb the training environment's state.
pub fn train<E: GymEnv>(
    agent: &mut DqnAgent,
    env: &mut E,
    eval_env: &mut E,
    config: &TrainingConfig,
) -> Result<MetricsTracker> {
    let mut metrics = MetricsTracker::default();

    for episode in 1..=config.episodes {
        let mut observation = env.reset();
        let mut episode_return = 0.0;
        let mut episode_length = 0;
        let mut episode_losses = Vec::new();

        loop {
            let action = agent.act(observation.view())?;
            let step = env.step(action)?;

            episode_return += step.reward;
            episode_length += 1;

            agent.store_transition(
                observation,
                action,
                step.reward,
                step.observation.clone(),
                step.is_over(),
            );
            if let Some(loss) = agent.update_q_values()? {
                episode_losses.push(loss);
                metrics.record_loss(loss);
            }
            agent.decay_epsilon(episode);

            let done = step.is_over();
            observation = step.observation;

            if done || episode_length >= config.max_steps_per_episode {
                break;
            }
        }

        metrics.record_episode(episode_return, episode_length, agent.epsilon);

        if episode % config.log_freq == 0 {
            match episode_losses.last() {
                Some(loss) => println!(
                    "episode {:>5}  return {:>7.1}  loss {:.5}  epsilon {:.3}",
                    episode, episode_return, loss, agent.epsilon
                ),
                None => println!(
                    "episode {:>5}  return {:>7.1}  epsilon {:.3}",
                    episode, episode_return, agent.epsilon
                ),
            }
        }

        if episode % config.target_sync_freq == 0 {
            agent.update_target_network();
        }

        if episode % config.eval_freq == 0 {
            let (eval_return, eval_length) =
                evaluate(agent, eval_env, config.max_steps_per_episode)?;
            metrics.record_eval_return(eval_return);
            println!(
                "eval after episode {}: return {:.1} over {} steps",
                episode, eval_return, eval_length
            );
        }
    }

    Ok(metrics)
}

/// One greedy episode: no exploration, no storage, no updates.
pub fn evaluate<E: GymEnv>(
    agent: &mut DqnAgent,
    env: &mut E,
    max_steps: usize,
) -> Result<(f32, usize)> {
    let mut observation = env.reset();
    let mut episode_return = 0.0;
    let mut episode_length = 0;

    loop {
        let action = agent.greedy_action(observation.view())?;
        let step = env.step(action)?;
        episode_return += step.reward;
        episode_length += 1;
        let done = step.is_over();
        observation = step.observation;

        if done || episode_length >= max_steps {
            return Ok((episode_return, episode_length));
        }
    }
}
