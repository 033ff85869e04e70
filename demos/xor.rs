use backprop_nn::{Network, Sgd, train_network};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> Result<(), backprop_nn::NetworkError> {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut network = Network::new(&[2, 3, 1], &mut rng)?;

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let expected_outputs = vec![
        vec![1.0],
        vec![0.0],
        vec![1.0],
        vec![0.0],
    ];

    // Without biases XOR is not fully learnable; this shows the loss falling.
    let optimizer = Sgd::new(0.5);
    let epochs = 10000;

    for epoch in 0..epochs {
        let loss = train_network(&mut network, &inputs, &expected_outputs, &optimizer)?;
        if epoch % 1000 == 0 {
            println!("Epoch {epoch}: loss = {loss:.6}");
        }
    }

    for input in &inputs {
        println!("Input: {:?} -> Output: {:.4}", input, network.predict(input)?[0]);
    }

    Ok(())
}
