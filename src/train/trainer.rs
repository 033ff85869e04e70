use crate::{
    error::NetworkError,
    loss::mse::MseLoss,
    network::network::Network,
    optim::sgd::Sgd,
};

/// One online pass over the samples in the order given. Returns the mean
/// loss, each sample measured on the forward pass preceding its update.
///
/// Every sample is checked before the first update, so a dimension error
/// leaves the network unchanged.
pub fn train_network(
    network: &mut Network,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
    optimizer: &Sgd,
) -> Result<f64, NetworkError> {
    validate_dataset(network, inputs, expected_outputs)?;
    let order: Vec<usize> = (0..inputs.len()).collect();
    train_in_order(network, inputs, expected_outputs, &order, optimizer)
}

/// Checks sample counts and every vector length against the topology.
pub(crate) fn validate_dataset(
    network: &Network,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
) -> Result<(), NetworkError> {
    if inputs.is_empty() {
        return Err(NetworkError::EmptyDataset);
    }
    NetworkError::check_len(inputs.len(), expected_outputs.len())?;

    let topology = network.topology();
    for (input, expected) in inputs.iter().zip(expected_outputs) {
        NetworkError::check_len(topology.input_width(), input.len())?;
        NetworkError::check_len(topology.output_width(), expected.len())?;
    }
    Ok(())
}

/// Trains on `inputs[order[i]]` for each `i`; the dataset must already be validated.
pub(crate) fn train_in_order(
    network: &mut Network,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
    order: &[usize],
    optimizer: &Sgd,
) -> Result<f64, NetworkError> {
    let mut total_loss = 0.0;

    for &idx in order {
        let expected = &expected_outputs[idx];
        network.train(&inputs[idx], expected, optimizer.learning_rate)?;
        total_loss += MseLoss::loss(network.last_output(), expected);
    }

    Ok(total_loss / order.len() as f64)
}
