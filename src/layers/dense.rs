use rand::Rng;

use crate::{math::matrix::Matrix, activation::sigmoid::Sigmoid};

/// One non-input layer: its incoming weights plus the per-neuron state
/// produced by the last forward and backward pass.
#[derive(Debug, Clone)]
pub struct Layer{
    pub weights: Matrix,     // size × input_size, no biases
    neurons: Vec<f64>,       // σ(Σ w·x) from the last forward pass
    derivatives: Vec<f64>,   // σ' expressed through `neurons`
    errors: Vec<f64>,        // ∂L/∂(pre-activation sum) from the last backward pass
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(size: usize, input_size: usize, rng: &mut R) -> Layer {
        Layer::with_weights(Matrix::uniform(size, input_size, rng))
    }

    /// Wraps an existing `size × input_size` weight matrix.
    pub fn with_weights(weights: Matrix) -> Layer {
        let size = weights.rows;
        Layer {
            weights,
            neurons: vec![0.0; size],
            derivatives: vec![0.0; size],
            errors: vec![0.0; size],
        }
    }

    pub fn neurons(&self) -> &[f64] {
        &self.neurons
    }

    pub fn derivatives(&self) -> &[f64] {
        &self.derivatives
    }

    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Forward pass for this layer; overwrites `neurons` and `derivatives`.
    pub fn feed_from(&mut self, input: &[f64]) -> &[f64] {
        let sums = self.weights.mul_vec(input);
        for (n, sum) in sums.into_iter().enumerate() {
            let y = Sigmoid::function(sum);
            self.neurons[n] = y;
            self.derivatives[n] = Sigmoid::derivative_from_output(y);
        }
        &self.neurons
    }

    /// Output-layer error: `δ[n] = ∂L/∂a[n] · σ'[n]`.
    pub fn set_output_errors(&mut self, loss_gradient: &[f64]) {
        for (n, g) in loss_gradient.iter().enumerate() {
            self.errors[n] = g * self.derivatives[n];
        }
    }

    /// Hidden-layer error: `δ[n] = σ'[n] · Σ_m W_next[m][n] · δ_next[m]`.
    pub fn backprop_from(&mut self, next: &Layer) {
        let propagated = next.weights.transpose_mul_vec(&next.errors);
        for (n, sum) in propagated.into_iter().enumerate() {
            self.errors[n] = self.derivatives[n] * sum;
        }
    }

    /// `W[n][p] += -lr · δ[n] · inputs[p]`.
    pub fn apply_errors(&mut self, inputs: &[f64], lr: f64) {
        for (n, err) in self.errors.iter().enumerate() {
            let delta = -lr * err;
            for (w, x) in self.weights.row_mut(n).iter_mut().zip(inputs) {
                *w += delta * x;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn layer_2x2() -> Layer {
        Layer::with_weights(Matrix::from_data(vec![vec![0.5, -0.5], vec![1.0, 0.0]]))
    }

    #[test]
    fn state_is_sized_by_weight_rows() {
        let layer = Layer::with_weights(Matrix::zeros(3, 5));
        assert_eq!(layer.neurons().len(), 3);
        assert_eq!(layer.derivatives().len(), 3);
        assert_eq!(layer.errors().len(), 3);
    }

    #[test]
    fn feed_from_applies_sigmoid_to_weighted_sums() {
        let mut layer = layer_2x2();
        let out = layer.feed_from(&[1.0, 1.0]).to_vec();
        assert_relative_eq!(out[0], 0.5);
        assert_relative_eq!(out[1], Sigmoid::function(1.0));
        assert_relative_eq!(layer.derivatives()[0], 0.25);
    }

    #[test]
    fn output_errors_scale_gradient_by_derivative() {
        let mut layer = layer_2x2();
        layer.feed_from(&[1.0, 1.0]);
        layer.set_output_errors(&[2.0, 0.0]);
        assert_relative_eq!(layer.errors()[0], 0.5);
        assert_relative_eq!(layer.errors()[1], 0.0);
    }

    #[test]
    fn backprop_uses_transposed_next_weights() {
        let mut hidden = layer_2x2();
        hidden.feed_from(&[1.0, 1.0]);

        let mut output = Layer::with_weights(Matrix::from_data(vec![vec![2.0, 3.0]]));
        output.feed_from(hidden.neurons());
        output.errors = vec![1.0];

        hidden.backprop_from(&output);
        assert_relative_eq!(hidden.errors()[0], hidden.derivatives()[0] * 2.0);
        assert_relative_eq!(hidden.errors()[1], hidden.derivatives()[1] * 3.0);
    }

    #[test]
    fn apply_errors_descends_along_inputs() {
        let mut layer = layer_2x2();
        layer.errors = vec![1.0, -2.0];
        layer.apply_errors(&[1.0, 0.5], 0.1);
        assert_relative_eq!(layer.weights.get(0, 0), 0.4, epsilon = 1e-12);
        assert_relative_eq!(layer.weights.get(0, 1), -0.55, epsilon = 1e-12);
        assert_relative_eq!(layer.weights.get(1, 0), 1.2, epsilon = 1e-12);
        assert_relative_eq!(layer.weights.get(1, 1), 0.1, epsilon = 1e-12);
    }
}
