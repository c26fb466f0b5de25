use crate::schedule::EpsilonSchedule;

#[test]
fn test_constant_schedule() {
    let schedule = EpsilonSchedule::Constant { epsilon: 0.05 };
    for episode in [0, 1, 100, 1_000_000] {
        assert_eq!(schedule.value(episode), 0.05);
    }
}

#[test]
fn test_exponential_decay_is_non_increasing() {
    let schedule = EpsilonSchedule::ExponentialDecay {
        start: 1.0,
        end: 0.01,
        rate: 0.99,
    };

    let mut previous = schedule.value(0);
    assert_eq!(previous, 1.0);
    for episode in 1..5000 {
        let current = schedule.value(episode);
        assert!(current <= previous + 1e-6);
        assert!(current >= 0.0);
        previous = current;
    }
    // Converges to the floor, never below it.
    assert!(schedule.value(100_000) >= 0.01 - 1e-6);
    assert!(schedule.value(100_000) < 0.011);
}

#[test]
fn test_linear_decay_endpoints() {
    let schedule = EpsilonSchedule::LinearDecay {
        start: 1.0,
        end: 0.1,
        decay_episodes: 100,
    };

    assert_eq!(schedule.value(0), 1.0);
    assert!((schedule.value(50) - 0.55).abs() < 1e-6);
    assert_eq!(schedule.value(100), 0.1);
    assert_eq!(schedule.value(10_000), 0.1);
}

#[test]
fn test_values_clamped_to_unit_interval() {
    let schedule = EpsilonSchedule::ExponentialDecay {
        start: 5.0,
        end: 0.0,
        rate: 0.5,
    };
    assert_eq!(schedule.value(0), 1.0);
    assert!(schedule.value(50) >= 0.0);
}
