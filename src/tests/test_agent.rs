use ndarray::{array, Array1, Array2};

use crate::agent::{DqnAgent, DqnConfig};
use crate::optimizer::OptimizerKind;
use crate::schedule::EpsilonSchedule;

fn small_config() -> DqnConfig {
    DqnConfig {
        observation_dim: 2,
        num_actions: 2,
        hidden_width: 8,
        hidden_layers: 1,
        buffer_capacity: 16,
        batch_size: 4,
        gamma: 0.9,
        learning_rate: 0.01,
        optimizer: OptimizerKind::Sgd,
        epsilon_schedule: EpsilonSchedule::Constant { epsilon: 0.0 },
    }
}

fn fill_buffer(agent: &mut DqnAgent, count: usize) {
    for i in 0..count {
        let v = i as f32 / 10.0;
        agent.store_transition(array![v, -v], i % 2, 1.0, array![v + 0.1, -v - 0.1], i % 5 == 4);
    }
}

fn weight_snapshot(agent: &DqnAgent) -> Vec<Array2<f32>> {
    agent.q_network.layers.iter().map(|l| l.weights.clone()).collect()
}

fn target_snapshot(agent: &DqnAgent) -> Vec<Array2<f32>> {
    agent.target_network.layers.iter().map(|l| l.weights.clone()).collect()
}

#[test]
fn test_invalid_config_rejected() {
    let mut config = small_config();
    config.batch_size = 0;
    assert!(DqnAgent::new(config).is_err());

    let mut config = small_config();
    config.buffer_capacity = 2;
    assert!(DqnAgent::new(config).is_err());

    let mut config = small_config();
    config.gamma = 1.5;
    assert!(DqnAgent::new(config).is_err());
}

#[test]
fn test_act_returns_valid_action() {
    let mut config = small_config();
    config.epsilon_schedule = EpsilonSchedule::Constant { epsilon: 1.0 };
    let mut agent = DqnAgent::new(config).unwrap();

    let obs = array![0.1, -0.2];
    for _ in 0..50 {
        assert!(agent.act(obs.view()).unwrap() < 2);
    }
}

#[test]
fn test_act_with_zero_epsilon_matches_greedy() {
    let mut agent = DqnAgent::new(small_config()).unwrap();
    assert_eq!(agent.epsilon, 0.0);

    let obs = array![0.4, 0.6];
    let greedy = agent.greedy_action(obs.view()).unwrap();
    for _ in 0..20 {
        assert_eq!(agent.act(obs.view()).unwrap(), greedy);
    }
}

#[test]
fn test_update_is_noop_below_batch_size() {
    let mut agent = DqnAgent::new(small_config()).unwrap();
    fill_buffer(&mut agent, 3); // batch_size is 4

    let online_before = weight_snapshot(&agent);
    let target_before = target_snapshot(&agent);

    assert!(agent.update_q_values().unwrap().is_none());

    assert_eq!(weight_snapshot(&agent), online_before);
    assert_eq!(target_snapshot(&agent), target_before);
}

#[test]
fn test_update_returns_loss_once_buffer_is_full_enough() {
    let mut agent = DqnAgent::new(small_config()).unwrap();
    fill_buffer(&mut agent, 8);

    let loss = agent.update_q_values().unwrap();
    assert!(loss.is_some());
    assert!(loss.unwrap().is_finite());
}

#[test]
fn test_gradient_steps_never_touch_target_network() {
    let mut agent = DqnAgent::new(small_config()).unwrap();
    fill_buffer(&mut agent, 16);

    let target_before = target_snapshot(&agent);
    for _ in 0..10 {
        agent.update_q_values().unwrap();
    }
    assert_eq!(target_snapshot(&agent), target_before);
}

#[test]
fn test_target_sync_is_exact_copy() {
    let mut agent = DqnAgent::new(small_config()).unwrap();

    agent.q_network.layers[0].weights[[0, 0]] = 999.0;
    assert_ne!(agent.target_network.layers[0].weights[[0, 0]], 999.0);

    agent.update_target_network();
    assert_eq!(target_snapshot(&agent), weight_snapshot(&agent));

    // The copies must be independent afterwards.
    agent.q_network.layers[0].weights[[0, 0]] = -999.0;
    assert_eq!(agent.target_network.layers[0].weights[[0, 0]], 999.0);
}

#[test]
fn test_buffer_eviction_bounds_len() {
    let mut agent = DqnAgent::new(small_config()).unwrap();
    fill_buffer(&mut agent, 100);
    assert_eq!(agent.buffer_len(), 16);
}

#[test]
fn test_epsilon_decay_follows_schedule() {
    let mut config = small_config();
    config.epsilon_schedule = EpsilonSchedule::ExponentialDecay {
        start: 1.0,
        end: 0.1,
        rate: 0.9,
    };
    let mut agent = DqnAgent::new(config).unwrap();

    let mut previous = agent.epsilon;
    for episode in 1..100 {
        agent.decay_epsilon(episode);
        assert!(agent.epsilon <= previous + 1e-6);
        assert!(agent.epsilon >= 0.0);
        previous = agent.epsilon;
    }
    assert!((agent.epsilon - 0.1).abs() < 0.01);
}

#[test]
fn test_store_transition_accepts_terminal_flags() {
    let mut agent = DqnAgent::new(small_config()).unwrap();
    let obs: Array1<f32> = array![0.0, 0.0];
    agent.store_transition(obs.clone(), 0, -1.0, obs, true);
    assert_eq!(agent.buffer_len(), 1);
}
