use chiron::agent::{DqnAgent, DqnConfig, SarsaLambdaAgent};
use chiron::env::{Easy21, Easy21State};
use chiron::optimizer::OptimizerKind;
use chiron::schedule::EpsilonSchedule;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::array;

fn bench_feature_extraction(c: &mut Criterion) {
    c.bench_function("sarsa_feature_vector", |b| {
        b.iter(|| {
            SarsaLambdaAgent::feature_vector(black_box(Easy21State { dealer: 7, player: 14 }))
        })
    });
}

fn bench_q_value(c: &mut Criterion) {
    let agent = SarsaLambdaAgent::with_lambda(0.5);
    c.bench_function("sarsa_q_value", |b| {
        b.iter(|| agent.q_value(black_box(Easy21State { dealer: 7, player: 14 }), black_box(0)))
    });
}

fn bench_sarsa_episode(c: &mut Criterion) {
    c.bench_function("sarsa_learn_episode", |b| {
        let mut agent = SarsaLambdaAgent::with_lambda(0.5);
        let mut env = Easy21::seeded(42);
        b.iter(|| agent.learn_episode(&mut env).unwrap())
    });
}

fn bench_dqn_update(c: &mut Criterion) {
    let config = DqnConfig {
        observation_dim: 4,
        num_actions: 2,
        hidden_width: 64,
        hidden_layers: 2,
        buffer_capacity: 1000,
        batch_size: 32,
        gamma: 0.99,
        learning_rate: 0.001,
        optimizer: OptimizerKind::Sgd,
        epsilon_schedule: EpsilonSchedule::Constant { epsilon: 0.1 },
    };
    let mut agent = DqnAgent::new(config).unwrap();
    for i in 0..1000 {
        let v = (i % 100) as f32 / 100.0;
        agent.store_transition(
            array![v, -v, v / 2.0, -v / 2.0],
            i % 2,
            1.0,
            array![v + 0.01, -v, v / 2.0, -v / 2.0],
            i % 50 == 49,
        );
    }

    c.bench_function("dqn_update_q_values", |b| {
        b.iter(|| agent.update_q_values().unwrap())
    });
}

criterion_group!(
    benches,
    bench_feature_extraction,
    bench_q_value,
    bench_sarsa_episode,
    bench_dqn_update
);
criterion_main!(benches);
