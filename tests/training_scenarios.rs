use approx::assert_relative_eq;
use backprop_nn::{train_loop, MseLoss, Network, NetworkError, Topology, TrainConfig};
use rand::{rngs::StdRng, SeedableRng};

fn seeded(widths: &[usize], seed: u64) -> Network {
    Network::new(widths, &mut StdRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn single_pair_converges_towards_target() {
    let input = [1.0, 1.0];
    let target = [0.0];

    for seed in 0..10 {
        let mut network = seeded(&[2, 3, 1], seed);
        let untrained = network.predict(&input).unwrap()[0];
        let loss_before = MseLoss::loss(&[untrained], &target);

        let mut previous = untrained;
        for _ in 0..1000 {
            network.train(&input, &target, 0.3).unwrap();
            let current = network.predict(&input).unwrap()[0];
            assert!(current <= previous, "seed {seed}: output rose from {previous} to {current}");
            previous = current;
        }

        let trained = network.predict(&input).unwrap()[0];
        assert!(trained > 0.0 && trained < 0.1, "seed {seed}: trained output {trained}");
        assert!(MseLoss::loss(&[trained], &target) < 0.01 * loss_before);
    }
}

#[test]
fn train_loop_matches_repeated_train_calls() {
    let mut by_loop = seeded(&[2, 3, 1], 5);
    let mut by_hand = by_loop.clone();

    train_loop(
        &mut by_loop,
        &[vec![1.0, 1.0]],
        &[vec![0.0]],
        &TrainConfig::new(50, 0.3),
    )
    .unwrap();
    for _ in 0..50 {
        by_hand.train(&[1.0, 1.0], &[0.0], 0.3).unwrap();
    }

    assert_eq!(by_loop.weight_snapshot(), by_hand.weight_snapshot());
}

#[test]
fn wrong_input_length_fails_without_touching_weights() {
    let mut network = seeded(&[3, 4, 2], 1);
    let snapshot = network.weight_snapshot();

    let err = network.predict(&[0.1, 0.2]).unwrap_err();
    assert_eq!(err, NetworkError::DimensionMismatch { expected: 3, actual: 2 });

    let err = network.train(&[0.1, 0.2, 0.3, 0.4], &[0.0, 1.0], 0.3).unwrap_err();
    assert_eq!(err, NetworkError::DimensionMismatch { expected: 3, actual: 4 });

    assert_eq!(network.weight_snapshot(), snapshot);
}

#[test]
fn wrong_input_length_keeps_previous_activations() {
    let mut network = seeded(&[2, 2], 8);
    network.predict(&[0.25, 0.75]).unwrap();
    assert!(network.predict(&[1.0]).is_err());
    assert_eq!(network.activations(0), Some(&[0.25, 0.75][..]));
}

#[test]
fn invalid_topologies_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    for widths in [vec![], vec![3], vec![2, 0, 1], vec![0, 1]] {
        let err = Network::new(&widths, &mut rng).unwrap_err();
        assert!(
            matches!(err, NetworkError::InvalidTopology { .. }),
            "{widths:?} gave {err:?}"
        );
    }
    assert!(matches!(
        Topology::try_from(vec![2_i64, -1]),
        Err(NetworkError::InvalidTopology { .. })
    ));
}

#[test]
fn prediction_is_an_independent_copy() {
    let mut network = seeded(&[2, 3, 2], 4);
    let mut input = vec![0.5, -0.5];

    let mut first = network.predict(&input).unwrap();
    let kept = first.clone();
    first[0] = 42.0;
    input[0] = 9.0;

    assert_eq!(network.activations(0), Some(&[0.5, -0.5][..]));
    assert_eq!(network.last_output(), kept.as_slice());

    network.predict(&[1.0, 1.0]).unwrap();
    assert_ne!(network.last_output(), kept.as_slice());
}

#[test]
fn same_seed_same_training_outcome() {
    let mut a = seeded(&[2, 3, 1], 77);
    let mut b = seeded(&[2, 3, 1], 77);
    for _ in 0..100 {
        a.train(&[1.0, 0.0], &[1.0], 0.3).unwrap();
        b.train(&[1.0, 0.0], &[1.0], 0.3).unwrap();
    }
    assert_relative_eq!(
        a.predict(&[1.0, 0.0]).unwrap()[0],
        b.predict(&[1.0, 0.0]).unwrap()[0]
    );
}

#[test]
fn negative_learning_rate_ascends() {
    let mut network = seeded(&[2, 3, 1], 9);
    let before = network.loss(&[1.0, 1.0], &[0.0]).unwrap();
    network.train(&[1.0, 1.0], &[0.0], -0.01).unwrap();
    let after = network.loss(&[1.0, 1.0], &[0.0]).unwrap();
    assert!(after > before);
}
