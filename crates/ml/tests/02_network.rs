use ml::{Activation, Dense, MlError, Network};

#[test]
fn network_chains_layers() {
    let l1 = Dense::new(vec![1.0, 1.0], vec![0.0], 2, 1, Activation::Identity).unwrap();
    let l2 = Dense::new(vec![2.0, -1.0], vec![0.5, 0.0], 1, 2, Activation::Identity).unwrap();
    let net = Network::new(vec![l1, l2]).unwrap();
    assert_eq!(net.input_dim(), 2);
    assert_eq!(net.output_dim(), 2);
    assert_eq!(net.parameter_count(), 3 + 4);
    assert_eq!(net.forward(&[1.0, 2.0]).unwrap(), vec![6.5, -3.0]);
}

#[test]
fn network_rejects_mismatched_layers() {
    let l1 = Dense::new(vec![1.0; 6], vec![0.0; 3], 2, 3, Activation::Tanh).unwrap();
    let l2 = Dense::new(vec![1.0; 2], vec![0.0], 2, 1, Activation::Identity).unwrap();
    let err = Network::new(vec![l1, l2]).unwrap_err();
    assert!(matches!(err, MlError::LayerMismatch { index: 1, expected: 2, actual: 3 }));
    assert!(matches!(Network::new(Vec::new()), Err(MlError::EmptyNetwork)));
}

#[test]
fn random_networks_are_seeded() {
    let a = Network::random(&[2, 8, 1], Activation::Tanh, Activation::Sigmoid, 42).unwrap();
    let b = Network::random(&[2, 8, 1], Activation::Tanh, Activation::Sigmoid, 42).unwrap();
    let c = Network::random(&[2, 8, 1], Activation::Tanh, Activation::Sigmoid, 43).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.layers()[0].activation, Activation::Tanh);
    assert_eq!(a.layers()[1].activation, Activation::Sigmoid);

    let y = a.forward(&[5.0, 3.0]).unwrap();
    assert_eq!(y.len(), 1);
    assert!((0.0..=1.0).contains(&y[0]));
}

#[test]
fn json_round_trip_preserves_weights() {
    let net = Network::random(&[2, 4, 1], Activation::Relu, Activation::Identity, 1).unwrap();
    let json = net.to_json().unwrap();
    let back = Network::from_json(&json).unwrap();
    assert_eq!(net, back);
}

#[test]
fn json_with_bad_shapes_is_rejected() {
    let json = r#"{ "layers": [ { "w": [1.0, 2.0, 3.0], "b": [0.0], "in_dim": 2, "out_dim": 1 } ] }"#;
    let err = Network::from_json(json).unwrap_err();
    assert!(matches!(err, MlError::Json(_)));
    assert!(err.to_string().contains("weights"));
}
