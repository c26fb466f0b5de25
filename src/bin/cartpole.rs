//! Train a DQN agent to balance the cart-pole.

use chiron::agent::{DqnAgent, DqnConfig};
use chiron::env::CartPole;
use chiron::error::Result;
use chiron::optimizer::OptimizerKind;
use chiron::schedule::EpsilonSchedule;
use chiron::training::{self, TrainingConfig};
use chiron::visualization::plot_series;

fn main() -> Result<()> {
    println!("cart-pole DQN\n");

    let config = DqnConfig {
        observation_dim: 4,
        num_actions: 2,
        hidden_width: 64,
        hidden_layers: 2,
        buffer_capacity: 10_000,
        batch_size: 32,
        gamma: 0.99,
        learning_rate: 0.001,
        optimizer: OptimizerKind::Adam,
        epsilon_schedule: EpsilonSchedule::ExponentialDecay {
            start: 1.0,
            end: 0.01,
            rate: 0.995,
        },
    };
    let mut agent = DqnAgent::new(config)?;

    let mut env = CartPole::new();
    let mut eval_env = CartPole::new();
    let training_config = TrainingConfig {
        episodes: 500,
        target_sync_freq: 10,
        eval_freq: 100,
        log_freq: 50,
        max_steps_per_episode: 500,
    };

    let metrics = training::train(&mut agent, &mut env, &mut eval_env, &training_config)?;

    let returns: Vec<f32> = metrics.episode_returns.iter().copied().collect();
    println!("\n{}", plot_series(&returns, "episode returns", 72, 16));

    let losses: Vec<f32> = metrics.losses.iter().copied().collect();
    println!("{}", plot_series(&losses, "training loss", 72, 16));

    if let Some(mean) = metrics.mean_recent_return(100) {
        println!("mean return over final 100 episodes: {:.1}", mean);
    }

    Ok(())
}
