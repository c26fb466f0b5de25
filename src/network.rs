//! Feed-forward value network.
//!
//! A plain MLP trained with mean-squared error, sized for the action-value
//! functions in this crate: a handful of ReLU hidden layers and a linear
//! output with one unit per action.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use serde::{Deserialize, Serialize};

use crate::activations::Activation;
use crate::error::Result;
use crate::optimizer::{Optimizer, OptimizerWrapper};

/// A fully connected layer: weights, biases and an activation, plus the
/// cached inputs and pre-activation outputs of the most recent forward pass
/// (needed by backpropagation).
#[derive(Clone, Serialize, Deserialize)]
pub struct Layer {
    pub weights: Array2<f32>,
    pub biases: Array1<f32>,
    pub activation: Activation,
    pre_activations: Option<Array2<f32>>,
    inputs: Option<Array2<f32>>,
}

impl Layer {
    /// New layer with weights drawn from uniform(-0.1, 0.1) and zero biases.
    pub fn new(input_size: usize, output_size: usize, activation: Activation) -> Self {
        let weights = Array2::random((input_size, output_size), Uniform::new(-0.1, 0.1));
        let biases = Array1::zeros(output_size);
        Layer {
            weights,
            biases,
            activation,
            pre_activations: None,
            inputs: None,
        }
    }

    pub fn with_weights(mut self, weights: Array2<f32>) -> Self {
        assert_eq!(weights.dim(), self.weights.dim());
        self.weights = weights;
        self
    }

    pub fn with_biases(mut self, biases: Array1<f32>) -> Self {
        assert_eq!(biases.dim(), self.biases.dim());
        self.biases = biases;
        self
    }

    pub fn output_size(&self) -> usize {
        self.biases.len()
    }

    fn forward_batch(&mut self, inputs: ArrayView2<f32>) -> Array2<f32> {
        self.inputs = Some(inputs.to_owned());
        let mut outputs = inputs.dot(&self.weights) + &self.biases.view().insert_axis(Axis(0));
        self.pre_activations = Some(outputs.clone());
        self.activation.apply_batch(&mut outputs);
        outputs
    }

    /// Gradients of weights and biases given the error arriving at this
    /// layer's output, plus the error adjusted for the activation derivative
    /// (for propagation to the previous layer).
    fn backward_batch(&self, output_errors: ArrayView2<f32>) -> (Array2<f32>, Array2<f32>, Array1<f32>) {
        let pre_activations = self
            .pre_activations
            .as_ref()
            .expect("forward_batch must run before backward_batch");
        let inputs = self
            .inputs
            .as_ref()
            .expect("forward_batch must run before backward_batch");
        let adjusted_error = output_errors.to_owned() * &self.activation.derivative_batch(pre_activations.view());
        let weight_gradients = inputs.t().dot(&adjusted_error);
        let bias_gradients = adjusted_error.sum_axis(Axis(0));
        (adjusted_error, weight_gradients, bias_gradients)
    }
}

/// A stack of fully connected layers with an optimizer.
#[derive(Clone, Serialize, Deserialize)]
pub struct NeuralNetwork {
    pub layers: Vec<Layer>,
    pub optimizer: OptimizerWrapper,
}

impl NeuralNetwork {
    /// Build a network from explicit layer sizes and activations.
    /// `layer_sizes` has one entry per boundary, so `activations` must be one
    /// element shorter.
    pub fn new(layer_sizes: &[usize], activations: &[Activation], optimizer: OptimizerWrapper) -> Self {
        assert_eq!(layer_sizes.len() - 1, activations.len());

        let layers = layer_sizes
            .windows(2)
            .zip(activations.iter())
            .map(|(window, &activation)| Layer::new(window[0], window[1], activation))
            .collect::<Vec<_>>();

        NeuralNetwork { layers, optimizer }
    }

    /// Convenience constructor for the value-network shape used throughout
    /// this crate: `hidden_layers` ReLU layers of `hidden_width` units and a
    /// linear output.
    pub fn mlp(
        input_size: usize,
        hidden_width: usize,
        hidden_layers: usize,
        output_size: usize,
        optimizer: OptimizerWrapper,
    ) -> Self {
        let mut sizes = Vec::with_capacity(hidden_layers + 2);
        sizes.push(input_size);
        sizes.extend(std::iter::repeat(hidden_width).take(hidden_layers));
        sizes.push(output_size);

        let mut activations = vec![Activation::Relu; hidden_layers];
        activations.push(Activation::Linear);

        Self::new(&sizes, &activations, optimizer)
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map(Layer::output_size).unwrap_or(0)
    }

    /// Forward pass for a single input vector.
    pub fn forward(&mut self, input: ArrayView1<f32>) -> Array1<f32> {
        let input = input.insert_axis(Axis(0));
        let output = self.forward_batch(input);
        let width = output.shape()[1];
        output.into_shape((width,)).unwrap()
    }

    /// Forward pass for a batch of input vectors (one per row).
    pub fn forward_batch(&mut self, inputs: ArrayView2<f32>) -> Array2<f32> {
        let mut current = inputs.to_owned();
        for layer in &mut self.layers {
            current = layer.forward_batch(current.view());
        }
        current
    }

    fn backward_batch(&mut self, output_errors: ArrayView2<f32>) -> Vec<(Array2<f32>, Array1<f32>)> {
        let mut gradients = Vec::with_capacity(self.layers.len());
        let mut current_error = output_errors.to_owned();

        for i in (0..self.layers.len()).rev() {
            let layer = &self.layers[i];
            let (adjusted_error, weight_gradients, bias_gradients) =
                layer.backward_batch(current_error.view());
            gradients.push((weight_gradients, bias_gradients));
            if i != 0 {
                current_error = adjusted_error.dot(&layer.weights.t());
            }
        }

        gradients.reverse();
        gradients
    }

    /// One gradient-descent step on the mean-squared error between the
    /// network's outputs for `inputs` and the given `targets`.
    pub fn train_batch(&mut self, inputs: ArrayView2<f32>, targets: ArrayView2<f32>, learning_rate: f32) {
        let outputs = self.forward_batch(inputs);
        let output_errors = &outputs - &targets;
        let gradients = self.backward_batch(output_errors.view());

        for (i, (layer, (weight_gradients, bias_gradients))) in
            self.layers.iter_mut().zip(gradients).enumerate()
        {
            self.optimizer
                .update_weights(i, &mut layer.weights, &weight_gradients, learning_rate);
            self.optimizer
                .update_biases(i, &mut layer.biases, &bias_gradients, learning_rate);
        }
    }

    /// Serialize the network (layers and optimizer state) to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let serialized = bincode::serialize(self)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    /// Load a network previously written by [`NeuralNetwork::save`].
    pub fn load(path: &str) -> Result<Self> {
        let data = std::fs::read(path)?;
        let network: Self = bincode::deserialize(&data)?;
        Ok(network)
    }
}
