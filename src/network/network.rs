use log::debug;
use rand::Rng;

use crate::{
    error::NetworkError,
    layers::dense::Layer,
    loss::mse::MseLoss,
    math::matrix::Matrix,
    network::topology::Topology,
    optim::sgd::Sgd,
};

/// A fully-connected sigmoid network without biases, trained one sample at a
/// time by backpropagation.
///
/// Layer `0` is the raw input; `layers[i]` holds the state of layer `i + 1`.
#[derive(Debug, Clone)]
pub struct Network {
    topology: Topology,
    input: Vec<f64>,
    layers: Vec<Layer>,
}

impl Network {
    /// Builds a network with every weight drawn uniformly from `[0, 1)` using
    /// `rng`. Pass a seeded generator for reproducible networks.
    pub fn new<R: Rng + ?Sized>(widths: &[usize], rng: &mut R) -> Result<Network, NetworkError> {
        Ok(Network::with_topology(Topology::try_from(widths)?, rng))
    }

    /// Same as `new` for an already validated topology.
    pub fn with_topology<R: Rng + ?Sized>(topology: Topology, rng: &mut R) -> Network {
        let layers = topology.widths()
            .windows(2)
            .map(|pair| Layer::new(pair[1], pair[0], &mut *rng))
            .collect();
        debug!("initialized network with topology {:?}", topology.widths());
        Network {
            input: vec![0.0; topology.input_width()],
            topology,
            layers,
        }
    }

    /// Builds a network from explicit weight matrices, one per non-input
    /// layer, each shaped `widths[l] × widths[l - 1]`.
    pub fn from_weights(widths: &[usize], weights: Vec<Matrix>) -> Result<Network, NetworkError> {
        let topology = Topology::try_from(widths)?;
        if weights.len() != topology.layer_count() - 1 {
            return Err(NetworkError::invalid_topology(format!(
                "expected {} weight matrices, got {}",
                topology.layer_count() - 1,
                weights.len()
            )));
        }
        for (i, (matrix, pair)) in weights.iter().zip(topology.widths().windows(2)).enumerate() {
            if matrix.rows != pair[1] || matrix.cols != pair[0] {
                return Err(NetworkError::invalid_topology(format!(
                    "layer {} weights are {}x{}, expected {}x{}",
                    i + 1,
                    matrix.rows,
                    matrix.cols,
                    pair[1],
                    pair[0]
                )));
            }
        }
        Ok(Network {
            input: vec![0.0; topology.input_width()],
            layers: weights.into_iter().map(Layer::with_weights).collect(),
            topology,
        })
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Incoming weights of layer `layer`; `None` for the input layer or an
    /// index past the output layer.
    pub fn weights(&self, layer: usize) -> Option<&Matrix> {
        self.hidden_or_output(layer).map(|l| &l.weights)
    }

    /// Activations recorded by the last forward pass. Layer `0` is the input.
    pub fn activations(&self, layer: usize) -> Option<&[f64]> {
        if layer == 0 {
            Some(self.input.as_slice())
        } else {
            self.hidden_or_output(layer).map(Layer::neurons)
        }
    }

    pub fn derivatives(&self, layer: usize) -> Option<&[f64]> {
        self.hidden_or_output(layer).map(Layer::derivatives)
    }

    pub fn errors(&self, layer: usize) -> Option<&[f64]> {
        self.hidden_or_output(layer).map(Layer::errors)
    }

    /// Owned copy of every weight matrix, ordered from layer 1 upward.
    pub fn weight_snapshot(&self) -> Vec<Matrix> {
        self.layers.iter().map(|l| l.weights.clone()).collect()
    }

    /// Forward pass. The returned vector is a copy of the output layer and is
    /// unaffected by later calls.
    pub fn predict(&mut self, input: &[f64]) -> Result<Vec<f64>, NetworkError> {
        NetworkError::check_len(self.topology.input_width(), input.len())?;
        self.forward(input);
        Ok(self.last_output().to_vec())
    }

    /// One step of online gradient descent on squared error for a single
    /// `(input, target)` pair. Both lengths are checked before any state is
    /// touched, so an error leaves the network exactly as it was.
    pub fn train(
        &mut self,
        input: &[f64],
        target: &[f64],
        learning_rate: f64,
    ) -> Result<(), NetworkError> {
        NetworkError::check_len(self.topology.input_width(), input.len())?;
        NetworkError::check_len(self.topology.output_width(), target.len())?;

        self.forward(input);
        self.backprop(target);
        self.update_weights(&Sgd::new(learning_rate));
        Ok(())
    }

    /// Squared-error loss of the current prediction for `input` against `target`.
    pub fn loss(&mut self, input: &[f64], target: &[f64]) -> Result<f64, NetworkError> {
        NetworkError::check_len(self.topology.output_width(), target.len())?;
        let output = self.predict(input)?;
        Ok(MseLoss::loss(&output, target))
    }

    fn hidden_or_output(&self, layer: usize) -> Option<&Layer> {
        layer.checked_sub(1).and_then(|i| self.layers.get(i))
    }

    /// Output layer as recorded by the last forward pass. After `train` this
    /// is the prediction the update was computed from.
    pub fn last_output(&self) -> &[f64] {
        self.layers[self.layers.len() - 1].neurons()
    }

    fn forward(&mut self, input: &[f64]) {
        self.input.copy_from_slice(input);
        for i in 0..self.layers.len() {
            let (done, rest) = self.layers.split_at_mut(i);
            let prev = done.last().map_or(self.input.as_slice(), Layer::neurons);
            rest[0].feed_from(prev);
        }
    }

    fn backprop(&mut self, target: &[f64]) {
        let last = self.layers.len() - 1;
        let gradient = MseLoss::derivative(self.layers[last].neurons(), target);
        self.layers[last].set_output_errors(&gradient);

        // Hidden layers, output side first; the input layer gets no error.
        for i in (0..last).rev() {
            let (head, tail) = self.layers.split_at_mut(i + 1);
            head[i].backprop_from(&tail[0]);
        }
    }

    fn update_weights(&mut self, optimizer: &Sgd) {
        for i in 0..self.layers.len() {
            let (done, rest) = self.layers.split_at_mut(i);
            let prev = done.last().map_or(self.input.as_slice(), Layer::neurons);
            optimizer.step(&mut rest[0], prev);
        }
    }
}
