//! Sarsa(lambda) approximation-error study on Easy21.
//!
//! Usage: `easy21 [BASELINE_TABLE]`
//!
//! With a path, the Monte-Carlo baseline table is loaded from it; without
//! one, a fresh baseline is computed (and written to
//! `easy21_baseline.bin` for reuse). Then two studies run: MSE per episode
//! for lambda 0 and 1, and final MSE across lambda 0.0..=1.0.

use chiron::agent::{MonteCarloAgent, SarsaLambdaAgent};
use chiron::env::Easy21;
use chiron::error::Result;
use chiron::qtable::ActionValueTable;
use chiron::visualization::{plot_lambda_sweep, plot_series};

const BASELINE_EPISODES: usize = 500_000;
const MSE_EPISODES: usize = 10_000;
const SWEEP_EPISODES: usize = 1_000;

fn main() -> Result<()> {
    let q_star = match std::env::args().nth(1) {
        Some(path) => {
            println!("loading baseline table from {path}");
            ActionValueTable::load(&path)?
        }
        None => {
            println!("no baseline table given; running Monte-Carlo control ({BASELINE_EPISODES} episodes)");
            let mut mc = MonteCarloAgent::new(100.0);
            let mut env = Easy21::new();
            mc.learn(&mut env, BASELINE_EPISODES)?;
            let table = mc.into_action_values();
            table.save("easy21_baseline.bin")?;
            println!("baseline written to easy21_baseline.bin");
            table
        }
    };

    // MSE per episode for the two extreme lambdas.
    for lambda in [0.0, 1.0] {
        println!("\nSarsa(lambda = {lambda}) for {MSE_EPISODES} episodes");
        let mut agent = SarsaLambdaAgent::with_lambda(lambda);
        let mut env = Easy21::new();
        let (_, mse_values) = agent.learn_with_mse(&mut env, MSE_EPISODES, &q_star)?;
        println!(
            "{}",
            plot_series(
                &mse_values,
                &format!("MSE vs episodes, lambda = {lambda}"),
                72,
                16,
            )
        );
    }

    // Final MSE across the lambda range.
    let mut points = Vec::new();
    for i in 0..=10 {
        let lambda = i as f32 / 10.0;
        let mut agent = SarsaLambdaAgent::with_lambda(lambda);
        let mut env = Easy21::new();
        agent.learn(&mut env, SWEEP_EPISODES)?;
        points.push((lambda, agent.compute_mse(&q_star)));
    }
    println!(
        "\n{}",
        plot_lambda_sweep(&points, "final MSE per lambda", 48)
    );

    Ok(())
}
