//! Gradient-descent optimizers.
//!
//! `update_weights`/`update_biases` receive the layer index so that stateful
//! optimizers (Adam) can keep per-layer moment estimates.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::network::Layer;

pub trait Optimizer {
    fn update_weights(&mut self, layer: usize, weights: &mut Array2<f32>, gradients: &Array2<f32>, learning_rate: f32);
    fn update_biases(&mut self, layer: usize, biases: &mut Array1<f32>, gradients: &Array1<f32>, learning_rate: f32);
}

/// Optimizer selection for configs, before any per-layer state exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptimizerKind {
    Sgd,
    Adam,
}

/// Enum dispatch over the available optimizers, so networks stay serializable
/// without trait objects.
#[derive(Clone, Serialize, Deserialize)]
pub enum OptimizerWrapper {
    SGD(SGD),
    Adam(Adam),
}

impl Optimizer for OptimizerWrapper {
    fn update_weights(&mut self, layer: usize, weights: &mut Array2<f32>, gradients: &Array2<f32>, learning_rate: f32) {
        match self {
            OptimizerWrapper::SGD(optimizer) => optimizer.update_weights(layer, weights, gradients, learning_rate),
            OptimizerWrapper::Adam(optimizer) => optimizer.update_weights(layer, weights, gradients, learning_rate),
        }
    }

    fn update_biases(&mut self, layer: usize, biases: &mut Array1<f32>, gradients: &Array1<f32>, learning_rate: f32) {
        match self {
            OptimizerWrapper::SGD(optimizer) => optimizer.update_biases(layer, biases, gradients, learning_rate),
            OptimizerWrapper::Adam(optimizer) => optimizer.update_biases(layer, biases, gradients, learning_rate),
        }
    }
}

/// Plain stochastic gradient descent.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SGD;

impl SGD {
    pub fn new() -> SGD {
        SGD
    }
}

impl Optimizer for SGD {
    fn update_weights(&mut self, _layer: usize, weights: &mut Array2<f32>, gradients: &Array2<f32>, learning_rate: f32) {
        weights.zip_mut_with(gradients, |w, &g| *w -= learning_rate * g);
    }

    fn update_biases(&mut self, _layer: usize, biases: &mut Array1<f32>, gradients: &Array1<f32>, learning_rate: f32) {
        biases.zip_mut_with(gradients, |b, &g| *b -= learning_rate * g);
    }
}

/// Adam with per-layer first and second moment estimates and bias correction.
#[derive(Clone, Serialize, Deserialize)]
pub struct Adam {
    pub beta1: f32,
    pub beta2: f32,
    pub epsilon: f32,
    m_weights: Vec<Array2<f32>>,
    v_weights: Vec<Array2<f32>>,
    m_biases: Vec<Array1<f32>>,
    v_biases: Vec<Array1<f32>>,
    t_weights: Vec<usize>,
    t_biases: Vec<usize>,
}

impl Adam {
    pub fn new(layers: &[Layer], beta1: f32, beta2: f32, epsilon: f32) -> Self {
        let m_weights = layers.iter().map(|l| Array2::zeros(l.weights.dim())).collect::<Vec<_>>();
        let v_weights = layers.iter().map(|l| Array2::zeros(l.weights.dim())).collect::<Vec<_>>();
        let m_biases = layers.iter().map(|l| Array1::zeros(l.biases.dim())).collect::<Vec<_>>();
        let v_biases = layers.iter().map(|l| Array1::zeros(l.biases.dim())).collect::<Vec<_>>();

        Adam {
            beta1,
            beta2,
            epsilon,
            m_weights,
            v_weights,
            m_biases,
            v_biases,
            t_weights: vec![0; layers.len()],
            t_biases: vec![0; layers.len()],
        }
    }

    pub fn default_for(layers: &[Layer]) -> Self {
        Self::new(layers, 0.9, 0.999, 1e-8)
    }
}

impl Optimizer for Adam {
    fn update_weights(&mut self, layer: usize, weights: &mut Array2<f32>, gradients: &Array2<f32>, learning_rate: f32) {
        self.t_weights[layer] += 1;
        let t = self.t_weights[layer] as i32;
        let (beta1, beta2) = (self.beta1, self.beta2);

        let m = &mut self.m_weights[layer];
        let v = &mut self.v_weights[layer];

        m.zip_mut_with(gradients, |m, &g| *m = beta1 * *m + (1.0 - beta1) * g);
        v.zip_mut_with(gradients, |v, &g| *v = beta2 * *v + (1.0 - beta2) * g * g);

        let m_hat = m.mapv(|x| x / (1.0 - beta1.powi(t)));
        let v_hat = v.mapv(|x| x / (1.0 - beta2.powi(t)));

        *weights -= &((&m_hat / (v_hat.mapv(f32::sqrt) + self.epsilon)) * learning_rate);
    }

    fn update_biases(&mut self, layer: usize, biases: &mut Array1<f32>, gradients: &Array1<f32>, learning_rate: f32) {
        self.t_biases[layer] += 1;
        let t = self.t_biases[layer] as i32;
        let (beta1, beta2) = (self.beta1, self.beta2);

        let m = &mut self.m_biases[layer];
        let v = &mut self.v_biases[layer];

        m.zip_mut_with(gradients, |m, &g| *m = beta1 * *m + (1.0 - beta1) * g);
        v.zip_mut_with(gradients, |v, &g| *v = beta2 * *v + (1.0 - beta2) * g * g);

        let m_hat = m.mapv(|x| x / (1.0 - beta1.powi(t)));
        let v_hat = v.mapv(|x| x / (1.0 - beta2.powi(t)));

        *biases -= &((&m_hat / (v_hat.mapv(f32::sqrt) + self.epsilon)) * learning_rate);
    }
}
