use ml::{Activation, Dense, MlError};

fn close(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-12)
}

#[test]
fn dense_forward_matches_hand_computation() {
    let w = vec![1.0, 2.0,
                 -3.0, 0.5];
    let b = vec![0.1, -0.2];
    let dense = Dense::new(w, b, 2, 2, Activation::Identity).unwrap();
    let y = dense.forward(&[0.5, -1.0]).unwrap();
    let expected = vec![1.0 * 0.5 + 2.0 * -1.0 + 0.1, -3.0 * 0.5 + 0.5 * -1.0 - 0.2];
    assert!(close(&y, &expected), "{y:?}");
}

#[test]
fn activations_are_applied_per_output() {
    let dense = Dense::new(vec![1.0, -1.0], vec![0.0, 0.0], 1, 2, Activation::Relu).unwrap();
    assert_eq!(dense.forward(&[2.0]).unwrap(), vec![2.0, 0.0]);

    let dense = Dense::new(vec![0.0], vec![0.0], 1, 1, Activation::Sigmoid).unwrap();
    assert_eq!(dense.forward(&[7.0]).unwrap(), vec![0.5]);

    let dense = Dense::new(vec![1.0], vec![0.0], 1, 1, Activation::Tanh).unwrap();
    assert!(close(&dense.forward(&[1.0]).unwrap(), &[1.0f64.tanh()]));
}

#[test]
fn dense_rejects_wrong_shapes() {
    let err = Dense::new(vec![1.0; 3], vec![0.0; 2], 2, 2, Activation::Identity).unwrap_err();
    assert!(matches!(err, MlError::WeightCount { expected: 4, actual: 3, .. }));

    let err = Dense::new(vec![1.0; 4], vec![0.0], 2, 2, Activation::Identity).unwrap_err();
    assert!(matches!(err, MlError::BiasCount { expected: 2, actual: 1 }));

    let dense = Dense::new(vec![1.0; 4], vec![0.0; 2], 2, 2, Activation::Identity).unwrap();
    let err = dense.forward(&[1.0]).unwrap_err();
    assert!(matches!(err, MlError::InputArity { expected: 2, actual: 1 }));
}

#[test]
fn glorot_init_stays_in_bounds() {
    let mut rng = fastrand::Rng::with_seed(7);
    let dense = Dense::random(2, 8, Activation::Tanh, &mut rng);
    let limit = (6.0f64 / 10.0).sqrt();
    assert_eq!(dense.w.len(), 16);
    assert!(dense.w.iter().all(|w| w.abs() <= limit));
    assert!(dense.b.iter().all(|b| *b == 0.0));
}
