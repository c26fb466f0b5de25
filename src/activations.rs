//! Activation functions for the value network.
//!
//! The DQN value network only needs ReLU hidden layers and a linear output,
//! so that is all this module provides.

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

/// Activation function applied element-wise by a [`crate::network::Layer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    Relu,
    Linear,
}

impl Activation {
    /// Apply the activation in-place to a batch of pre-activation outputs.
    pub fn apply_batch(&self, outputs: &mut Array2<f32>) {
        match self {
            Activation::Relu => outputs.mapv_inplace(|v| v.max(0.0)),
            Activation::Linear => {}
        }
    }

    /// Derivative of the activation, evaluated at the pre-activation values.
    pub fn derivative_batch(&self, pre_activations: ArrayView2<f32>) -> Array2<f32> {
        match self {
            Activation::Relu => pre_activations.mapv(|v| if v > 0.0 { 1.0 } else { 0.0 }),
            Activation::Linear => Array2::ones(pre_activations.dim()),
        }
    }
}
