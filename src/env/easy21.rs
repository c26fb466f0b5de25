//! The Easy21 card game.
//!
//! An infinite deck of cards valued 1..=10, each drawn black (added) with
//! probability 2/3 or red (subtracted) with probability 1/3. Both players
//! start with one black card. The player may hit until sticking or going
//! bust (sum outside 1..=21, reward -1). On stick the dealer draws until
//! reaching 17 or busting; a dealer bust pays +1, otherwise the higher sum
//! wins (+1 / 0 / -1). Undiscounted, rewards only at episode end.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::env::Environment;
use crate::error::{ChironError, Result};

pub const HIT: usize = 0;
pub const STICK: usize = 1;
pub const NUM_ACTIONS: usize = 2;

pub const DEALER_RANGE: std::ops::RangeInclusive<i32> = 1..=10;
pub const PLAYER_RANGE: std::ops::RangeInclusive<i32> = 1..=21;

/// Sums are i32 so bust states (below 1, above 21) are representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Easy21State {
    pub dealer: i32,
    pub player: i32,
}

pub struct Easy21 {
    state: Easy21State,
    rng: StdRng,
}

impl Easy21 {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Easy21 {
            state: Easy21State { dealer: 0, player: 0 },
            rng,
        }
    }

    /// Signed card value: black (positive) with probability 2/3.
    fn draw(&mut self) -> i32 {
        let value = self.rng.gen_range(1..=10);
        if self.rng.gen_range(0..3) < 2 {
            value
        } else {
            -value
        }
    }

    fn draw_black(&mut self) -> i32 {
        self.rng.gen_range(1..=10)
    }

    fn is_bust(sum: i32) -> bool {
        !(1..=21).contains(&sum)
    }
}

impl Default for Easy21 {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for Easy21 {
    type State = Easy21State;

    fn reset(&mut self) -> Easy21State {
        self.state = Easy21State {
            dealer: self.draw_black(),
            player: self.draw_black(),
        };
        self.state
    }

    fn step(&mut self, action: usize) -> Result<(Easy21State, f32, bool)> {
        match action {
            HIT => {
                self.state.player += self.draw();
                if Easy21::is_bust(self.state.player) {
                    Ok((self.state, -1.0, true))
                } else {
                    Ok((self.state, 0.0, false))
                }
            }
            STICK => {
                while (1..17).contains(&self.state.dealer) {
                    self.state.dealer += self.draw();
                }
                let reward = if Easy21::is_bust(self.state.dealer) {
                    1.0
                } else {
                    match self.state.player.cmp(&self.state.dealer) {
                        std::cmp::Ordering::Greater => 1.0,
                        std::cmp::Ordering::Equal => 0.0,
                        std::cmp::Ordering::Less => -1.0,
                    }
                };
                Ok((self.state, reward, true))
            }
            _ => Err(ChironError::InvalidAction {
                action,
                num_actions: NUM_ACTIONS,
            }),
        }
    }

    fn num_actions(&self) -> usize {
        NUM_ACTIONS
    }
}

impl Easy21State {
    /// All dealer/player pairs reachable before a terminal transition.
    pub fn all() -> impl Iterator<Item = Easy21State> {
        DEALER_RANGE.flat_map(|dealer| PLAYER_RANGE.map(move |player| Easy21State { dealer, player }))
    }
}
