use ndarray::{Array1, Array2, ArrayView2};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::env::easy21::{Easy21State, NUM_ACTIONS};
use crate::env::Environment;
use crate::error::Result;
use crate::qtable::{ActionValueTable, GreedyPolicy};

/// Number of coarse-coding tiles.
pub const NUM_FEATURES: usize = 18;

/// Inclusive (low, high) tile bounds. The tiles overlap, so several features
/// can fire for one state; the encoding is not one-hot.
const DEALER_TILES: [(i32, i32); 3] = [(1, 4), (4, 7), (7, 10)];
const PLAYER_TILES: [(i32, i32); 6] = [(1, 6), (4, 9), (7, 12), (10, 15), (13, 18), (16, 21)];

/// Sarsa(lambda) with linear function approximation for Easy21.
///
/// One weight column per action over the 18-tile coarse coding of the
/// (dealer, player) state. Weights persist across the whole run; the
/// eligibility trace is zeroed at the start of every episode, decayed by
/// `lambda * gamma` each step, and accumulates the current feature vector
/// into the column of the action just taken. Epsilon is constant for the
/// whole run - unlike the DQN agent it is never decayed, following the
/// Easy21 assignment setup.
pub struct SarsaLambdaAgent {
    pub gamma: f32,
    pub lambda: f32,
    pub epsilon: f32,
    pub alpha: f32,

    /// 18 x 2 weight matrix; `q(s, a)` is `features(s) . weights[:, a]`.
    pub weights: Array2<f32>,

    trace: Array2<f32>,
    rng: ThreadRng,
}

impl SarsaLambdaAgent {
    pub fn new(gamma: f32, lambda: f32, epsilon: f32, alpha: f32) -> Self {
        SarsaLambdaAgent {
            gamma,
            lambda,
            epsilon,
            alpha,
            weights: Array2::zeros((NUM_FEATURES, NUM_ACTIONS)),
            trace: Array2::zeros((NUM_FEATURES, NUM_ACTIONS)),
            rng: rand::thread_rng(),
        }
    }

    /// Defaults from the Easy21 assignment: undiscounted, epsilon 0.05,
    /// alpha 0.01.
    pub fn with_lambda(lambda: f32) -> Self {
        Self::new(1.0, lambda, 0.05, 0.01)
    }

    /// Binary coarse-coding features for a state. Pure and total: every
    /// in-range state activates at least one tile.
    pub fn feature_vector(state: Easy21State) -> Array1<f32> {
        let mut features = Array1::zeros(NUM_FEATURES);
        for (d, &(d_low, d_high)) in DEALER_TILES.iter().enumerate() {
            if !(d_low..=d_high).contains(&state.dealer) {
                continue;
            }
            for (p, &(p_low, p_high)) in PLAYER_TILES.iter().enumerate() {
                if (p_low..=p_high).contains(&state.player) {
                    features[d * PLAYER_TILES.len() + p] = 1.0;
                }
            }
        }
        features
    }

    /// Dot product of the state's features with the action's weight column.
    pub fn q_value(&self, state: Easy21State, action: usize) -> f32 {
        Self::feature_vector(state).dot(&self.weights.column(action))
    }

    /// Epsilon-greedy over [`SarsaLambdaAgent::q_value`]; ties resolve to
    /// the lowest action index.
    pub fn select_action(&mut self, state: Easy21State) -> usize {
        if self.rng.gen::<f32>() < self.epsilon {
            self.rng.gen_range(0..NUM_ACTIONS)
        } else {
            self.greedy_action(state)
        }
    }

    fn greedy_action(&self, state: Easy21State) -> usize {
        let mut best = 0;
        let mut best_value = self.q_value(state, 0);
        for action in 1..NUM_ACTIONS {
            let value = self.q_value(state, action);
            if value > best_value {
                best = action;
                best_value = value;
            }
        }
        best
    }

    /// Run one episode under the backward-view TD(lambda) rule.
    ///
    /// Per step: decay the trace by `lambda * gamma`, add the current
    /// feature vector into the taken action's trace column, then apply
    /// `weights += alpha * td_error * trace`. The TD-error bootstraps on
    /// `q(next_state, next_action)` for non-terminal steps and is plain
    /// `reward - q(state, action)` on the terminal one.
    pub fn learn_episode<E>(&mut self, env: &mut E) -> Result<()>
    where
        E: Environment<State = Easy21State>,
    {
        let mut state = env.reset();
        let mut action = self.select_action(state);
        let mut features = Self::feature_vector(state);
        self.trace.fill(0.0);

        loop {
            let (next_state, reward, done) = env.step(action)?;

            self.trace *= self.lambda * self.gamma;
            self.trace
                .column_mut(action)
                .zip_mut_with(&features, |t, &f| *t += f);

            if done {
                let td_error = reward - self.q_value(state, action);
                self.weights.scaled_add(self.alpha * td_error, &self.trace);
                return Ok(());
            }

            let next_action = self.select_action(next_state);
            let td_error =
                reward + self.q_value(next_state, next_action) - self.q_value(state, action);
            self.weights.scaled_add(self.alpha * td_error, &self.trace);

            state = next_state;
            action = next_action;
            features = Self::feature_vector(state);
        }
    }

    /// Run `num_episodes` of on-policy learning; returns the greedy policy
    /// derived from the final weights.
    pub fn learn<E>(&mut self, env: &mut E, num_episodes: usize) -> Result<GreedyPolicy>
    where
        E: Environment<State = Easy21State>,
    {
        for episode in 1..=num_episodes {
            self.learn_episode(env)?;
            if episode % 1000 == 0 {
                println!("episode {episode}");
            }
        }
        Ok(self.policy())
    }

    /// Like [`SarsaLambdaAgent::learn`], but records the mean-squared error
    /// against `q_star` after every episode. The error series is purely for
    /// comparison; it never feeds back into learning.
    pub fn learn_with_mse<E>(
        &mut self,
        env: &mut E,
        num_episodes: usize,
        q_star: &ActionValueTable,
    ) -> Result<(GreedyPolicy, Vec<f32>)>
    where
        E: Environment<State = Easy21State>,
    {
        let mut mse_values = Vec::with_capacity(num_episodes);
        for episode in 1..=num_episodes {
            self.learn_episode(env)?;
            mse_values.push(self.compute_mse(q_star));
            if episode % 100 == 0 {
                println!("episode {episode}");
            }
        }
        Ok((self.policy(), mse_values))
    }

    /// Mean squared difference against a reference table, averaged over
    /// every state present in the reference and every action.
    pub fn compute_mse(&self, q_star: &ActionValueTable) -> f32 {
        if q_star.is_empty() {
            return 0.0;
        }
        let mut sum = 0.0;
        for (&state, values) in q_star.iter() {
            for (action, &target) in values.iter().enumerate() {
                let diff = self.q_value(state, action) - target;
                sum += diff * diff;
            }
        }
        sum / (q_star.len() * q_star.num_actions()) as f32
    }

    /// Materialize action values over the full 10 x 21 grid.
    pub fn action_values(&self) -> ActionValueTable {
        let mut table = ActionValueTable::new(NUM_ACTIONS);
        for state in Easy21State::all() {
            for action in 0..NUM_ACTIONS {
                table.set(state, action, self.q_value(state, action));
            }
        }
        table
    }

    /// Materialize the greedy policy over the full 10 x 21 grid.
    pub fn policy(&self) -> GreedyPolicy {
        Easy21State::all()
            .map(|state| (state, self.greedy_action(state)))
            .collect()
    }

    /// Current eligibility trace (zeroed at the start of each episode).
    pub fn trace(&self) -> ArrayView2<'_, f32> {
        self.trace.view()
    }
}
