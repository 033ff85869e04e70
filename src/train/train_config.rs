use serde::{Serialize, Deserialize};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`        — number of full passes over the training data
/// - `learning_rate` — gradient-descent step size applied per sample
/// - `log_every`     — emit an `info!` line every this many epochs; `0` disables
/// - `shuffle_seed`  — when set, sample order is shuffled each epoch by a
///                     generator seeded with this value; otherwise samples are
///                     visited in the order given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    #[serde(default)]
    pub log_every: usize,
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` that visits samples in order and never logs.
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            log_every: 0,
            shuffle_seed: None,
        }
    }
}
