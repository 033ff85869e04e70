use std::time::Instant;

use log::info;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::error::NetworkError;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::{train_in_order, validate_dataset};

/// Trains `network` for `config.epochs` epochs of online gradient descent and
/// returns the statistics of every completed epoch.
///
/// # Arguments
/// - `network`      — mutable reference to the network; modified in place
/// - `train_inputs` — training samples, each of length `input_width`
/// - `train_labels` — corresponding targets, same count as `train_inputs`
/// - `config`       — epochs, learning rate, logging cadence, shuffling
///
/// # Errors
/// `EmptyDataset` if there are no samples, `DimensionMismatch` if the counts
/// disagree or any vector has the wrong length. Validation happens before the
/// first update.
pub fn train_loop(
    network: &mut Network,
    train_inputs: &[Vec<f64>],
    train_labels: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<Vec<EpochStats>, NetworkError> {
    validate_dataset(network, train_inputs, train_labels)?;

    let optimizer = Sgd::new(config.learning_rate);
    let mut order: Vec<usize> = (0..train_inputs.len()).collect();
    let mut shuffler = config.shuffle_seed.map(StdRng::seed_from_u64);
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        if let Some(rng) = shuffler.as_mut() {
            order.shuffle(rng);
        }
        let train_loss = train_in_order(network, train_inputs, train_labels, &order, &optimizer)?;

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        if config.log_every > 0 && (epoch % config.log_every == 0 || epoch == config.epochs) {
            info!("Epoch {}/{}: loss = {:.6}", epoch, config.epochs, train_loss);
        }

        history.push(stats);
    }

    Ok(history)
}
