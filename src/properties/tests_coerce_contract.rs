// =========================================================================
// FALSIFY-CO: shape coercion contract (properties::as_matrix)
//
// Why these exist:
//   - coercion is the only place a filter attribute can change shape
//   - every accepted value must come out at exactly the declared shape
//   - the three acceptance rules must stay disjoint from the rejections
// =========================================================================

use super::*;

fn shape(rows: usize, cols: usize) -> Shape {
    Shape::new(rows, cols).expect("valid")
}

/// FALSIFY-CO-001: Exact shape passes through unchanged
#[test]
fn falsify_co_001_exact_identity() {
    let data: Vec<f64> = (0..12).map(|i| i as f64 * 0.5).collect();
    let a = Array::new(data.clone(), &[3, 4]).expect("valid");
    let m = as_matrix(shape(3, 4), a, "A", true).expect("exact");

    assert_eq!(m.as_slice(), data.as_slice(), "FALSIFIED CO-001: data changed");
}

/// FALSIFY-CO-002: Flat reshape preserves row-major order
#[test]
fn falsify_co_002_flat_reshape_order() {
    let data = vec![4.0, 3.0, 2.0, 1.0];
    let row = as_matrix(shape(1, 4), data.clone(), "x", true).expect("row");
    let col = as_matrix(shape(4, 1), data.clone(), "x", true).expect("col");

    for i in 0..4 {
        assert_eq!(row.get(0, i), data[i], "FALSIFIED CO-002: row[{i}]");
        assert_eq!(col.get(i, 0), data[i], "FALSIFIED CO-002: col[{i}]");
    }
}

/// FALSIFY-CO-003: No implicit reshape across two non-unit dimensions
#[test]
fn falsify_co_003_no_matrix_reshape() {
    let result = as_matrix(shape(3, 5), Array::zeros(&[15]).expect("small shape"), "H", true);
    assert!(
        matches!(result, Err(PropertyError::ShapeMismatch { .. })),
        "FALSIFIED CO-003: 15-vector accepted as 3x5"
    );
}

/// FALSIFY-CO-004: Scalar only becomes s*I when multiplicative
#[test]
fn falsify_co_004_scaled_identity_gated() {
    let on = as_matrix(shape(3, 3), 2.0, "R", true).expect("multiplicative");
    assert!(
        on.allclose(&Matrix::eye(3).mul_scalar(2.0), 1e-12),
        "FALSIFIED CO-004: s -> {on:?}"
    );

    let off = as_matrix(shape(3, 3), 2.0, "R", false);
    assert!(off.is_err(), "FALSIFIED CO-004: scalar accepted without multiplicative");
}

mod coerce_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// FALSIFY-CO-005-prop: Output shape always equals the target
        #[test]
        fn falsify_co_005_prop_output_shape(
            rows in 1..=5usize,
            cols in 1..=5usize,
            dims in proptest::collection::vec(1..=5usize, 0..=3),
            multiplicative in any::<bool>(),
        ) {
            let len: usize = dims.iter().product();
            let a = Array::zeros(&dims).expect("small shape");
            prop_assert_eq!(a.numel(), len);
            if let Ok(m) = as_matrix(shape(rows, cols), a, "A", multiplicative) {
                prop_assert_eq!(m.shape(), (rows, cols), "FALSIFIED CO-005-prop");
            }
        }

        /// FALSIFY-CO-006-prop: Singleton padding never changes the outcome
        #[test]
        fn falsify_co_006_prop_padding_invariant(
            rows in 1..=4usize,
            cols in 1..=4usize,
            pad_front in 0..=2usize,
            pad_back in 0..=2usize,
        ) {
            let target = shape(rows, cols);
            let data: Vec<f64> = (0..rows * cols).map(|i| i as f64).collect();
            let plain = Array::new(data.clone(), &[rows, cols]).expect("valid");

            let mut dims = vec![1; pad_front];
            dims.extend([rows, cols]);
            dims.extend(std::iter::repeat(1).take(pad_back));
            let padded = Array::new(data, &dims).expect("valid");

            let a = as_matrix(target, plain, "A", true).expect("exact after squeeze");
            let b = as_matrix(target, padded, "A", true).expect("exact after squeeze");
            prop_assert_eq!(a, b, "FALSIFIED CO-006-prop");
        }
    }
}
