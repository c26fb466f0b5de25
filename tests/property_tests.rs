use chiron::agent::{SarsaLambdaAgent, NUM_FEATURES};
use chiron::env::Easy21State;
use chiron::replay_buffer::{Experience, ReplayBuffer};
use chiron::schedule::EpsilonSchedule;
use ndarray::array;
use proptest::prelude::*;

proptest! {
    #[test]
    fn feature_vector_is_binary_and_never_empty(
        dealer in 1i32..=10,
        player in 1i32..=21,
    ) {
        let features = SarsaLambdaAgent::feature_vector(Easy21State { dealer, player });

        prop_assert_eq!(features.len(), NUM_FEATURES);
        prop_assert!(features.iter().all(|&f| f == 0.0 || f == 1.0));
        prop_assert!(features.iter().any(|&f| f == 1.0));
    }

    #[test]
    fn feature_vector_is_deterministic(
        dealer in 1i32..=10,
        player in 1i32..=21,
    ) {
        let state = Easy21State { dealer, player };
        prop_assert_eq!(
            SarsaLambdaAgent::feature_vector(state),
            SarsaLambdaAgent::feature_vector(state)
        );
    }

    #[test]
    fn exponential_schedule_is_non_increasing_and_non_negative(
        end in 0.0f32..0.5,
        spread in 0.01f32..0.5,
        rate in 0.5f32..1.0,
        episode in 0usize..2000,
    ) {
        let schedule = EpsilonSchedule::ExponentialDecay {
            start: end + spread,
            end,
            rate,
        };

        let current = schedule.value(episode);
        let next = schedule.value(episode + 1);
        prop_assert!(next <= current + 1e-6);
        prop_assert!(current >= 0.0);
        prop_assert!(current <= 1.0);
    }

    #[test]
    fn linear_schedule_is_non_increasing_and_floors(
        end in 0.0f32..0.5,
        spread in 0.01f32..0.5,
        decay_episodes in 1usize..500,
        episode in 0usize..2000,
    ) {
        let schedule = EpsilonSchedule::LinearDecay {
            start: end + spread,
            end,
            decay_episodes,
        };

        let current = schedule.value(episode);
        let next = schedule.value(episode + 1);
        prop_assert!(next <= current + 1e-6);
        prop_assert!(current >= end - 1e-6);
    }

    #[test]
    fn replay_buffer_len_never_exceeds_capacity(
        capacity in 1usize..32,
        additions in 0usize..100,
        batch in 0usize..64,
    ) {
        let mut buffer = ReplayBuffer::new(capacity);
        for i in 0..additions {
            buffer.add(Experience {
                state: array![i as f32],
                action: 0,
                reward: 0.0,
                next_state: array![i as f32 + 1.0],
                done: false,
            });
        }

        prop_assert!(buffer.len() <= capacity);
        prop_assert_eq!(buffer.len(), additions.min(capacity));
        prop_assert_eq!(buffer.sample(batch).len(), batch.min(buffer.len()));
    }
}
