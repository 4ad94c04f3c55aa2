// =========================================================================
// FALSIFY-MX: primitives contract (squeeze, reshape, scaled identity)
//
// Coercion is only as correct as the three array operations it is built
// on. Each test names the invariant it tries to break.
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Squeeze preserves element count and order
#[test]
fn falsify_mx_001_squeeze_preserves_elements() {
    let data: Vec<f64> = (0..6).map(|i| i as f64).collect();
    let a = Array::new(data.clone(), &[1, 2, 1, 3, 1]).expect("valid");
    let s = a.squeeze();

    assert_eq!(s.shape(), &[2, 3], "FALSIFIED MX-001: shape={:?}", s.shape());
    assert_eq!(s.data(), data.as_slice(), "FALSIFIED MX-001: order changed");
}

/// FALSIFY-MX-002: Squeeze is idempotent
#[test]
fn falsify_mx_002_squeeze_idempotent() {
    let a = Array::new(vec![1.0; 4], &[1, 4, 1]).expect("valid");
    let once = a.squeeze();
    let twice = once.squeeze();

    assert_eq!(once, twice, "FALSIFIED MX-002: squeeze(squeeze(a)) != squeeze(a)");
}

/// FALSIFY-MX-003: Scaled identity has s on the diagonal and 0 elsewhere
#[test]
fn falsify_mx_003_scaled_identity() {
    let s = 2.5;
    let m = Matrix::eye(4).mul_scalar(s);

    for i in 0..4 {
        for j in 0..4 {
            let expected = if i == j { s } else { 0.0 };
            assert!(
                (m.get(i, j) - expected).abs() < 1e-12,
                "FALSIFIED MX-003: (sI)[{i},{j}]={}, expected {expected}",
                m.get(i, j)
            );
        }
    }
}

/// FALSIFY-MX-004: Reshape keeps row-major order and rejects other counts
#[test]
fn falsify_mx_004_reshape_order() {
    let a = Array::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let r = a.reshape(&[2, 3]).expect("6 elements");

    assert_eq!(r.shape(), &[2, 3], "FALSIFIED MX-004: shape={:?}", r.shape());
    assert_eq!(r.data(), a.data(), "FALSIFIED MX-004: order changed");
    assert!(a.reshape(&[4, 2]).is_err(), "FALSIFIED MX-004: 6 -> 4x2 accepted");
}

mod primitives_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-MX-001-prop: Squeeze never changes the data
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn falsify_mx_001_prop_squeeze_preserves_elements(
            dims in proptest::collection::vec(1..=3usize, 0..=5),
            seed in 0..500u32,
        ) {
            let len: usize = dims.iter().product();
            let data: Vec<f64> = (0..len)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
                .collect();
            let a = Array::new(data.clone(), &dims).expect("valid");
            let s = a.squeeze();

            prop_assert_eq!(s.data(), data.as_slice());
            prop_assert!(s.shape().iter().all(|&d| d != 1), "FALSIFIED MX-001-prop: unit axis kept");
            prop_assert_eq!(s.numel(), len);
        }
    }

    /// FALSIFY-MX-005-prop: Matrix -> Array -> Matrix is lossless
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_005_prop_array_roundtrip(
            rows in 1..=6usize,
            cols in 1..=6usize,
        ) {
            let data: Vec<f64> = (0..rows * cols).map(|i| i as f64).collect();
            let m = Matrix::from_vec(rows, cols, data).expect("valid");
            let back = Matrix::try_from(Array::from(m.clone())).expect("2-D");

            prop_assert_eq!(back, m);
        }
    }
}
