use ndarray::{Array1, Array2, ArrayView1};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::error::{ChironError, Result};
use crate::network::NeuralNetwork;
use crate::optimizer::{Adam, OptimizerKind, OptimizerWrapper, SGD};
use crate::replay_buffer::{Experience, ReplayBuffer};
use crate::schedule::EpsilonSchedule;

/// Hyperparameters for [`DqnAgent`].
#[derive(Clone, Debug)]
pub struct DqnConfig {
    pub observation_dim: usize,
    pub num_actions: usize,
    pub hidden_width: usize,
    pub hidden_layers: usize,
    pub buffer_capacity: usize,
    /// Minibatch size; also the minimum buffer fill before updates start.
    pub batch_size: usize,
    pub gamma: f32,
    pub learning_rate: f32,
    pub optimizer: OptimizerKind,
    pub epsilon_schedule: EpsilonSchedule,
}

impl Default for DqnConfig {
    fn default() -> Self {
        DqnConfig {
            observation_dim: 4,
            num_actions: 2,
            hidden_width: 128,
            hidden_layers: 4,
            buffer_capacity: 10_000,
            batch_size: 32,
            gamma: 0.99,
            learning_rate: 0.001,
            optimizer: OptimizerKind::Adam,
            epsilon_schedule: EpsilonSchedule::default(),
        }
    }
}

/// Deep Q-Network agent.
///
/// Keeps two parameter sets: the online `q_network`, mutated by every
/// gradient step, and the `target_network`, which changes only through
/// [`DqnAgent::update_target_network`] full-copy snapshots and is used to
/// compute stable update targets. The replay buffer is owned by the agent
/// and only ever touched through [`DqnAgent::store_transition`] and the
/// update step.
///
/// # Example
///
/// ```rust
/// use chiron::agent::{DqnAgent, DqnConfig};
/// use ndarray::array;
///
/// let mut agent = DqnAgent::new(DqnConfig::default()).unwrap();
/// let obs = array![0.1, -0.2, 0.3, -0.1];
/// let action = agent.act(obs.view()).unwrap();
///
/// // After an environment step:
/// let next_obs = array![0.15, -0.25, 0.35, -0.05];
/// agent.store_transition(obs, action, 1.0, next_obs, false);
///
/// // No-op until the buffer holds a full batch:
/// assert!(agent.update_q_values().unwrap().is_none());
/// ```
pub struct DqnAgent {
    /// Online network: selects actions and receives gradient updates.
    pub q_network: NeuralNetwork,

    /// Lagged snapshot of the online network; never trained directly.
    pub target_network: NeuralNetwork,

    /// Current exploration rate, refreshed from the schedule.
    pub epsilon: f32,

    schedule: EpsilonSchedule,
    buffer: ReplayBuffer,
    batch_size: usize,
    gamma: f32,
    learning_rate: f32,
    rng: ThreadRng,
}

impl DqnAgent {
    pub fn new(config: DqnConfig) -> Result<Self> {
        if config.batch_size == 0 {
            return Err(ChironError::invalid_parameter("batch_size", "must be at least 1"));
        }
        if config.buffer_capacity < config.batch_size {
            return Err(ChironError::invalid_parameter(
                "buffer_capacity",
                "must hold at least one batch",
            ));
        }
        if !(0.0..=1.0).contains(&config.gamma) {
            return Err(ChironError::invalid_parameter("gamma", "must lie in [0, 1]"));
        }

        let mut q_network = NeuralNetwork::mlp(
            config.observation_dim,
            config.hidden_width,
            config.hidden_layers,
            config.num_actions,
            OptimizerWrapper::SGD(SGD::new()),
        );
        if config.optimizer == OptimizerKind::Adam {
            q_network.optimizer = OptimizerWrapper::Adam(Adam::default_for(&q_network.layers));
        }
        let target_network = q_network.clone();
        let epsilon = config.epsilon_schedule.value(0);

        Ok(DqnAgent {
            q_network,
            target_network,
            epsilon,
            schedule: config.epsilon_schedule,
            buffer: ReplayBuffer::new(config.buffer_capacity),
            batch_size: config.batch_size,
            gamma: config.gamma,
            learning_rate: config.learning_rate,
            rng: rand::thread_rng(),
        })
    }

    /// Epsilon-greedy action selection against the online network.
    pub fn act(&mut self, observation: ArrayView1<f32>) -> Result<usize> {
        let num_actions = self.q_network.output_size();
        if self.rng.gen::<f32>() < self.epsilon {
            Ok(self.rng.gen_range(0..num_actions))
        } else {
            let q_values = self.q_network.forward(observation);
            argmax(&q_values)
        }
    }

    /// Greedy action selection (epsilon forced to zero), for evaluation.
    pub fn greedy_action(&mut self, observation: ArrayView1<f32>) -> Result<usize> {
        let q_values = self.q_network.forward(observation);
        argmax(&q_values)
    }

    /// Append a transition; the oldest entry is evicted once the buffer is
    /// at capacity.
    pub fn store_transition(
        &mut self,
        observation: Array1<f32>,
        action: usize,
        reward: f32,
        next_observation: Array1<f32>,
        done: bool,
    ) {
        self.buffer.add(Experience {
            state: observation,
            action,
            reward,
            next_state: next_observation,
            done,
        });
    }

    /// One minibatch TD update on the online network.
    ///
    /// Returns `Ok(None)` without touching either network while the buffer
    /// holds fewer transitions than a full batch. Otherwise samples uniformly
    /// without replacement, targets
    /// `reward + gamma * max_a Q_target(next_obs, a)` (just `reward` on
    /// terminal transitions), and returns the minibatch MSE loss.
    pub fn update_q_values(&mut self) -> Result<Option<f32>> {
        if self.buffer.len() < self.batch_size {
            return Ok(None);
        }

        let observation_dim = self.q_network.layers[0].weights.dim().0;
        let mut states = Array2::zeros((self.batch_size, observation_dim));
        let mut next_states = Array2::zeros((self.batch_size, observation_dim));
        let mut actions = Vec::with_capacity(self.batch_size);
        let mut rewards = Vec::with_capacity(self.batch_size);
        let mut dones = Vec::with_capacity(self.batch_size);

        for (i, experience) in self.buffer.sample(self.batch_size).iter().enumerate() {
            states.row_mut(i).assign(&experience.state);
            next_states.row_mut(i).assign(&experience.next_state);
            actions.push(experience.action);
            rewards.push(experience.reward);
            dones.push(experience.done);
        }

        let current_q = self.q_network.forward_batch(states.view());
        let next_q = self.target_network.forward_batch(next_states.view());

        let mut targets = current_q.clone();
        for i in 0..self.batch_size {
            let target = if dones[i] {
                rewards[i]
            } else {
                let max_next = next_q
                    .row(i)
                    .iter()
                    .fold(f32::NEG_INFINITY, |max, &v| max.max(v));
                rewards[i] + self.gamma * max_next
            };
            targets[[i, actions[i]]] = target;
        }

        let loss = (&current_q - &targets)
            .mapv(|d| d * d)
            .mean()
            .unwrap_or(f32::INFINITY);

        self.q_network
            .train_batch(states.view(), targets.view(), self.learning_rate);

        Ok(Some(loss))
    }

    /// Overwrite the target network with an exact copy of the online one.
    pub fn update_target_network(&mut self) {
        self.target_network = self.q_network.clone();
    }

    /// Refresh epsilon from the decay schedule for the given episode.
    pub fn decay_epsilon(&mut self, episode: usize) {
        self.epsilon = self.schedule.value(episode);
    }

    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }
}

fn argmax(values: &Array1<f32>) -> Result<usize> {
    values
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(idx, _)| idx)
        .ok_or_else(|| ChironError::NumericalError("no Q-values to maximize".to_string()))
}
