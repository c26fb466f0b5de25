use ndarray::{array, Array1, Array2};

use crate::activations::Activation;
use crate::network::Layer;
use crate::optimizer::{Adam, Optimizer, SGD};

#[test]
fn test_sgd_weight_update() {
    let mut sgd = SGD::new();
    let mut weights = array![[1.0, 2.0], [3.0, 4.0]];
    let gradients = array![[0.5, 0.5], [1.0, 1.0]];

    sgd.update_weights(0, &mut weights, &gradients, 0.1);
    assert_eq!(weights, array![[0.95, 1.95], [2.9, 3.9]]);
}

#[test]
fn test_sgd_bias_update() {
    let mut sgd = SGD::new();
    let mut biases = array![1.0, -1.0];
    let gradients = array![2.0, -2.0];

    sgd.update_biases(0, &mut biases, &gradients, 0.5);
    assert_eq!(biases, array![0.0, 0.0]);
}

#[test]
fn test_adam_first_step_is_signed_unit_step() {
    let layers = vec![Layer::new(2, 2, Activation::Linear)];
    let mut adam = Adam::default_for(&layers);

    let mut weights: Array2<f32> = Array2::zeros((2, 2));
    let gradients = array![[1.0, -3.0], [0.5, 2.0]];

    // With bias correction, the first Adam step is lr * g / (|g| + eps),
    // effectively lr * sign(g).
    adam.update_weights(0, &mut weights, &gradients, 0.01);

    for (&w, &g) in weights.iter().zip(gradients.iter()) {
        assert!((w + 0.01 * g.signum()).abs() < 1e-4, "w = {}, g = {}", w, g);
    }
}

#[test]
fn test_adam_per_layer_state_is_independent() {
    let layers = vec![
        Layer::new(2, 2, Activation::Linear),
        Layer::new(2, 2, Activation::Linear),
    ];
    let mut adam = Adam::default_for(&layers);

    let mut weights0: Array2<f32> = Array2::zeros((2, 2));
    let gradients = Array2::ones((2, 2));

    // Three updates on layer 0, none on layer 1.
    for _ in 0..3 {
        adam.update_weights(0, &mut weights0, &gradients, 0.01);
    }

    // The first update on layer 1 must still behave like a first step.
    let mut weights1: Array2<f32> = Array2::zeros((2, 2));
    adam.update_weights(1, &mut weights1, &gradients, 0.01);
    for &w in weights1.iter() {
        assert!((w + 0.01).abs() < 1e-4);
    }
}

#[test]
fn test_adam_bias_update_finite() {
    let layers = vec![Layer::new(3, 3, Activation::Linear)];
    let mut adam = Adam::default_for(&layers);

    let mut biases: Array1<f32> = Array1::zeros(3);
    let gradients = array![0.1, -0.1, 0.0];

    for _ in 0..10 {
        adam.update_biases(0, &mut biases, &gradients, 0.01);
    }
    for &b in biases.iter() {
        assert!(b.is_finite());
    }
}
