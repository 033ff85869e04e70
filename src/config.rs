use serde::{Serialize, Deserialize};

use crate::network::topology::Topology;
use crate::train::train_config::TrainConfig;

/// Settings for the driver binary: which network to build, the single
/// `(input, target)` pair to fit and how long to train on it.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides. The defaults reproduce the classic demonstration: a `[2, 3, 1]`
/// network trained 1000 times on `[1, 1] -> [0]` at learning rate `0.3`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub topology: Topology,
    pub input: Vec<f64>,
    pub target: Vec<f64>,
    pub learning_rate: f64,
    pub iterations: usize,
    /// Progress is logged every this many iterations; `0` disables it.
    pub log_every: usize,
    /// Seed for weight initialization; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            topology: Topology::from_known_valid(vec![2, 3, 1]),
            input: vec![1.0, 1.0],
            target: vec![0.0],
            learning_rate: 0.3,
            iterations: 1000,
            log_every: 100,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Loop settings for fitting the configured pair, samples in order.
    pub fn train_config(&self) -> TrainConfig {
        TrainConfig {
            log_every: self.log_every,
            ..TrainConfig::new(self.iterations, self.learning_rate)
        }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `RunConfig` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<RunConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
