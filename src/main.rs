// Reference driver: fits one (input, target) pair and prints the prediction.
// Run with:
//   cargo run                      # built-in [2, 3, 1] demo
//   cargo run -- run.json          # settings from a RunConfig JSON file
// Training progress goes through the `log` facade every `log_every`
// iterations; this binary installs no logger, so those lines only appear
// when the library is embedded in an application that does.
use std::error::Error;

use backprop_nn::{train_loop, Network, RunConfig};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::load_json(&path)?,
        None => RunConfig::default(),
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut network = Network::with_topology(config.topology.clone(), &mut rng);

    let before = network.predict(&config.input)?;

    let inputs = vec![config.input.clone()];
    let targets = vec![config.target.clone()];
    let history = train_loop(&mut network, &inputs, &targets, &config.train_config())?;

    let after = network.predict(&config.input)?;

    println!("Topology: {:?}", config.topology.widths());
    println!("Output before training: {:?}", before);
    if let Some(last) = history.last() {
        println!("Loss after {} iterations: {:.6}", last.epoch, last.train_loss);
    }
    println!("The network output for input: {:?} is:", config.input);
    println!("{:?}", after);

    Ok(())
}
