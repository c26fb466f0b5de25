use crate::env::easy21::{HIT, STICK};
use crate::env::{CartPole, Easy21, Environment, GymEnv};

#[test]
fn test_cartpole_reset_bounds() {
    let mut env = CartPole::seeded(1);
    let obs = env.reset();
    assert_eq!(obs.len(), 4);
    for &v in obs.iter() {
        assert!(v.abs() <= 0.05);
    }
}

#[test]
fn test_cartpole_invalid_action() {
    let mut env = CartPole::seeded(1);
    env.reset();
    assert!(env.step(2).is_err());
}

#[test]
fn test_cartpole_episode_ends_within_limit() {
    let mut env = CartPole::seeded(7);
    env.reset();

    let mut steps = 0;
    loop {
        let step = env.step(steps % 2).unwrap();
        steps += 1;
        assert_eq!(step.reward, 1.0);
        assert!(!(step.terminated && step.truncated));
        if step.is_over() {
            break;
        }
        assert!(steps < 501, "episode never ended");
    }
}

#[test]
fn test_cartpole_seeding_is_deterministic() {
    let mut a = CartPole::seeded(42);
    let mut b = CartPole::seeded(42);
    assert_eq!(a.reset(), b.reset());

    for i in 0..20 {
        let step_a = a.step(i % 2).unwrap();
        let step_b = b.step(i % 2).unwrap();
        assert_eq!(step_a.observation, step_b.observation);
        if step_a.is_over() {
            break;
        }
    }
}

#[test]
fn test_easy21_reset_in_range() {
    let mut env = Easy21::seeded(3);
    for _ in 0..100 {
        let state = env.reset();
        assert!((1..=10).contains(&state.dealer));
        assert!((1..=10).contains(&state.player));
    }
}

#[test]
fn test_easy21_stick_terminates_with_bounded_reward() {
    let mut env = Easy21::seeded(5);
    for _ in 0..200 {
        env.reset();
        let (state, reward, done) = env.step(STICK).unwrap();
        assert!(done);
        assert!([-1.0, 0.0, 1.0].contains(&reward));
        // The dealer either reached 17 or went bust.
        assert!(state.dealer >= 17 || state.dealer < 1 || state.dealer > 21);
    }
}

#[test]
fn test_easy21_hit_bust_pays_minus_one() {
    let mut env = Easy21::seeded(11);
    for _ in 0..500 {
        env.reset();
        loop {
            let (state, reward, done) = env.step(HIT).unwrap();
            if done {
                // Hitting only ever ends an episode by busting.
                assert!(state.player < 1 || state.player > 21);
                assert_eq!(reward, -1.0);
                break;
            }
            assert_eq!(reward, 0.0);
            assert!((1..=21).contains(&state.player));
        }
    }
}

#[test]
fn test_easy21_invalid_action() {
    let mut env = Easy21::seeded(1);
    env.reset();
    assert!(env.step(2).is_err());
}

#[test]
fn test_easy21_seeding_is_deterministic() {
    let mut a = Easy21::seeded(9);
    let mut b = Easy21::seeded(9);
    assert_eq!(a.reset(), b.reset());
    assert_eq!(a.step(STICK).unwrap(), b.step(STICK).unwrap());
}
