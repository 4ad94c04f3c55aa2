pub(crate) use super::*;

fn shape(rows: usize, cols: usize) -> Shape {
    Shape::new(rows, cols).expect("test shape has positive dims")
}

fn zeros(dims: &[usize]) -> Array {
    Array::zeros(dims).expect("test shape is small")
}

fn assert_mismatch(result: Result<Matrix<f64>>) {
    assert!(
        matches!(result, Err(PropertyError::ShapeMismatch { .. })),
        "expected ShapeMismatch, got {result:?}"
    );
}

// ========== 1 x 1 targets ==========

#[test]
fn test_unit_from_scalar() {
    let m = as_matrix(shape(1, 1), 1234, "A", true).expect("scalar fits 1x1");
    assert_eq!(m.shape(), (1, 1));
    assert_eq!(m.get(0, 0), 1234.0);
}

#[test]
fn test_unit_from_1d() {
    let m = as_matrix(shape(1, 1), vec![3256.0], "A", true).expect("[x] fits 1x1");
    assert_eq!(m.shape(), (1, 1));
    assert_eq!(m.get(0, 0), 3256.0);
}

#[test]
fn test_unit_from_2d() {
    let m = as_matrix(shape(1, 1), vec![vec![2394876.0]], "A", true).expect("[[x]] fits 1x1");
    assert_eq!(m.get(0, 0), 2394876.0);
}

#[test]
fn test_unit_from_3d() {
    let m = as_matrix(shape(1, 1), vec![vec![vec![32786.0]]], "A", true)
        .expect("[[[x]]] fits 1x1");
    assert_eq!(m.shape(), (1, 1));
    assert_eq!(m.get(0, 0), 32786.0);
}

#[test]
fn test_unit_is_scaled_identity() {
    let m = as_matrix(shape(1, 1), 0.5, "R", true).expect("0.5 * I(1)");
    assert!(m.allclose(&Matrix::eye(1).mul_scalar(0.5), 1e-12));
}

#[test]
fn test_unit_non_multiplicative_rejects_scalar() {
    assert_mismatch(as_matrix(shape(1, 1), 0.5, "R", false));
    assert_mismatch(as_matrix(shape(1, 1), vec![7.0], "R", false));
    assert_mismatch(as_matrix(shape(1, 1), vec![vec![7.0]], "R", false));
}

// ========== vectors ==========

#[test]
fn test_vector_with_padding_axes() {
    for n in 2..5 {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        for target in [shape(1, n), shape(n, 1)] {
            let padded = Array::new(x.clone(), &[1, 1, n, 1]).expect("n elements");
            let m = as_matrix(target, padded, "A", true).expect("vector reshapes");
            assert_eq!(m.shape(), target.dims());
            assert_eq!(m.as_slice(), x.as_slice());
        }
    }
}

#[test]
fn test_vector_nested_lists() {
    let m = as_matrix(shape(1, 3), vec![vec![vec![1.0, 2.0, 3.0]]], "A", true)
        .expect("[[[a, b, c]]] fits 1x3");
    assert_eq!(m.shape(), (1, 3));
    let m = as_matrix(shape(3, 1), vec![vec![1.0], vec![2.0], vec![3.0]], "A", true)
        .expect("column fits 3x1");
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_vector_transposed_orientation_accepted() {
    // A row given for a column target reshapes: both squeeze to (n,)
    let row = Matrix::from_vec(1, 3, vec![1.0, 2.0, 3.0]).expect("1*3=3 elements");
    let m = as_matrix(shape(3, 1), row, "x", true).expect("same element count");
    assert_eq!(m.shape(), (3, 1));
}

#[test]
fn test_vector_wrong_length() {
    for n in 2..5 {
        let long: Vec<f64> = (1..n + 2).map(|i| i as f64).collect();
        let short: Vec<f64> = (1..n).map(|i| i as f64).collect();
        for target in [shape(1, n), shape(n, 1)] {
            assert_mismatch(as_matrix(target, long.clone(), "A", true));
            assert_mismatch(as_matrix(target, short.clone(), "A", true));
            assert_mismatch(as_matrix(target, vec![long.clone()], "A", true));
        }
    }
}

#[test]
fn test_vector_from_2d_rejected() {
    let (m, n) = (3, 5);
    for target in [shape(m * n, 1), shape(1, m * n)] {
        // Same element count as the vector
        assert_mismatch(as_matrix(target, zeros(&[m, n]), "A", true));
        // Columns match the vector length
        assert_mismatch(as_matrix(target, zeros(&[m * n, 2]), "A", true));
        // Rows match the vector length
        assert_mismatch(as_matrix(target, zeros(&[2, m * n]), "A", true));
    }
}

#[test]
fn test_scalar_into_long_vector_rejected() {
    assert_mismatch(as_matrix(shape(1, 4), 3.0, "A", true));
    assert_mismatch(as_matrix(shape(5, 1), 0.0, "A", true));
}

// ========== general matrices ==========

#[test]
fn test_matrix_exact() {
    let m = as_matrix(shape(3, 5), zeros(&[3, 5]), "A", true).expect("exact shape");
    assert_eq!(m.shape(), (3, 5));
}

#[test]
fn test_matrix_with_padding_axes() {
    let m = as_matrix(shape(3, 5), zeros(&[1, 3, 1, 5]), "A", true)
        .expect("unit axes squeeze away");
    assert_eq!(m.shape(), (3, 5));
}

#[test]
fn test_matrix_invalid() {
    let (m, n) = (3, 5);
    let target = shape(m, n);
    // Flat vector with as many elements as the matrix
    assert_mismatch(as_matrix(target, zeros(&[m * n]), "A", true));
    // Transposed is never matched when both dimensions exceed 1
    assert_mismatch(as_matrix(target, zeros(&[n, m]), "A", true));
    for dims in [[n, 1], [m, 1], [1, m], [1, n]] {
        assert_mismatch(as_matrix(target, zeros(&dims), "A", true));
    }
    assert_mismatch(as_matrix(target, zeros(&[n]), "A", true));
    assert_mismatch(as_matrix(target, zeros(&[m]), "A", true));
}

// ========== multiplicative mode ==========

#[test]
fn test_multiplicative_scalar() {
    let m = as_matrix(shape(4, 4), 4, "A", true).expect("scaled identity");
    assert!(m.allclose(&Matrix::eye(4).mul_scalar(4.0), 1e-12));
}

#[test]
fn test_multiplicative_vector_not_diagonal() {
    assert_mismatch(as_matrix(shape(4, 4), Array::from_slice(&[1.0; 4]), "A", true));
}

#[test]
fn test_non_multiplicative_scalar_rejected() {
    assert_mismatch(as_matrix(shape(4, 4), 4, "A", false));
    assert_mismatch(as_matrix(shape(4, 4), Array::from_slice(&[1.0; 4]), "A", false));
}

#[test]
fn test_multiplicative_non_square_rejected() {
    assert_mismatch(as_matrix(shape(3, 6), 2.0, "A", true));
}

// ========== errors ==========

#[test]
fn test_error_reports_label_and_shapes() {
    let err = as_matrix(shape(3, 5), zeros(&[5, 3]), "H", true).expect_err("transposed");
    match err {
        PropertyError::ShapeMismatch {
            label,
            expected,
            actual,
        } => {
            assert_eq!(label, "H");
            assert_eq!(expected.dims(), (3, 5));
            assert_eq!(actual, vec![5, 3]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_error_reports_squeezed_shape() {
    let err = as_matrix(shape(2, 2), zeros(&[1, 3, 1]), "P", true).expect_err("3 != 2x2");
    assert!(err.to_string().contains("(3,)"));
}

#[test]
fn test_ragged_input_propagates() {
    let err = as_matrix(shape(2, 2), vec![vec![1.0, 2.0], vec![3.0]], "P", true)
        .expect_err("ragged");
    assert!(matches!(err, PropertyError::RaggedArray { .. }));
}
