//! Cart-pole balancing environment.
//!
//! Standard physics: a pole hinged on a cart, force applied left or right,
//! Euler integration at 0.02s. Terminates when the cart leaves the track
//! (|x| > 2.4) or the pole tips past 12 degrees; truncates at 500 steps.
//! Reward is 1 for every step taken, including the terminal one.

use ndarray::{array, Array1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::env::{GymEnv, Step};
use crate::error::{ChironError, Result};

const GRAVITY: f32 = 9.8;
const MASS_CART: f32 = 1.0;
const MASS_POLE: f32 = 0.1;
const POLE_HALF_LENGTH: f32 = 0.5;
const FORCE_MAG: f32 = 10.0;
const DT: f32 = 0.02;

const X_LIMIT: f32 = 2.4;
const THETA_LIMIT: f32 = 12.0 * std::f32::consts::PI / 180.0;
const MAX_STEPS: usize = 500;

pub struct CartPole {
    x: f32,
    x_dot: f32,
    theta: f32,
    theta_dot: f32,
    steps: usize,
    rng: StdRng,
}

impl CartPole {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        CartPole {
            x: 0.0,
            x_dot: 0.0,
            theta: 0.0,
            theta_dot: 0.0,
            steps: 0,
            rng,
        }
    }

    fn observation(&self) -> Array1<f32> {
        array![self.x, self.x_dot, self.theta, self.theta_dot]
    }
}

impl Default for CartPole {
    fn default() -> Self {
        Self::new()
    }
}

impl GymEnv for CartPole {
    fn reset(&mut self) -> Array1<f32> {
        self.x = self.rng.gen_range(-0.05..0.05);
        self.x_dot = self.rng.gen_range(-0.05..0.05);
        self.theta = self.rng.gen_range(-0.05..0.05);
        self.theta_dot = self.rng.gen_range(-0.05..0.05);
        self.steps = 0;
        self.observation()
    }

    fn step(&mut self, action: usize) -> Result<Step> {
        if action >= self.num_actions() {
            return Err(ChironError::InvalidAction {
                action,
                num_actions: self.num_actions(),
            });
        }

        let force = if action == 0 { -FORCE_MAG } else { FORCE_MAG };

        let cos_theta = self.theta.cos();
        let sin_theta = self.theta.sin();
        let total_mass = MASS_CART + MASS_POLE;
        let pole_mass_length = MASS_POLE * POLE_HALF_LENGTH;

        let temp = (force + pole_mass_length * self.theta_dot * self.theta_dot * sin_theta) / total_mass;
        let theta_acc = (GRAVITY * sin_theta - cos_theta * temp)
            / (POLE_HALF_LENGTH * (4.0 / 3.0 - MASS_POLE * cos_theta * cos_theta / total_mass));
        let x_acc = temp - pole_mass_length * theta_acc * cos_theta / total_mass;

        self.x += DT * self.x_dot;
        self.x_dot += DT * x_acc;
        self.theta += DT * self.theta_dot;
        self.theta_dot += DT * theta_acc;
        self.steps += 1;

        let terminated = self.x.abs() > X_LIMIT || self.theta.abs() > THETA_LIMIT;
        let truncated = !terminated && self.steps >= MAX_STEPS;

        Ok(Step {
            observation: self.observation(),
            reward: 1.0,
            terminated,
            truncated,
        })
    }

    fn observation_dim(&self) -> usize {
        4
    }

    fn num_actions(&self) -> usize {
        2
    }
}
