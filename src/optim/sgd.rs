use crate::layers::dense::Layer;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one gradient-descent update to a layer whose error signals are
    /// already computed. `inputs` are the activations of the preceding layer.
    pub fn step(&self, layer: &mut Layer, inputs: &[f64]) {
        layer.apply_errors(inputs, self.learning_rate);
    }
}
