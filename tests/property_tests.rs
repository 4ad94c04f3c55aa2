//! Property-based tests using proptest.
//!
//! These tests verify the coercion rules and the validator contracts over
//! random shapes and values.

use matprop::prelude::*;
use proptest::prelude::*;

fn shape_strategy(max: usize) -> impl Strategy<Value = Shape> {
    (1..=max, 1..=max).prop_map(|(r, c)| Shape::new(r, c).expect("Test shape should be valid"))
}

fn vector_shape_strategy(max: usize) -> impl Strategy<Value = Shape> {
    (2..=max, any::<bool>()).prop_map(|(n, column)| {
        let (r, c) = if column { (n, 1) } else { (1, n) };
        Shape::new(r, c).expect("Test shape should be valid")
    })
}

fn data_for(shape: Shape) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-100.0f64..100.0, shape.numel())
}

fn identity_fn(args: &[Array]) -> matprop::Result<Array> {
    Ok(args[0].clone())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Coercion properties
    #[test]
    fn exact_shape_is_unchanged(
        (shape, data) in shape_strategy(5).prop_flat_map(|s| (Just(s), data_for(s))),
        multiplicative in any::<bool>(),
    ) {
        let (r, c) = shape.dims();
        let a = Array::new(data.clone(), &[r, c]).expect("Test data should be valid");
        // A 1x1 value squeezes to a scalar and needs the identity rule
        let multiplicative = multiplicative || shape.numel() == 1;
        let m = as_matrix(shape, a, "A", multiplicative).expect("exact shape");
        prop_assert_eq!(m.shape(), (r, c));
        prop_assert_eq!(m.as_slice(), data.as_slice());
    }

    #[test]
    fn vector_reshape_keeps_order(
        (shape, data) in vector_shape_strategy(6).prop_flat_map(|s| (Just(s), data_for(s))),
    ) {
        let m = as_matrix(shape, data.clone(), "x", false).expect("flat to vector");
        prop_assert_eq!(m.shape(), shape.dims());
        prop_assert_eq!(m.as_slice(), data.as_slice());
    }

    #[test]
    fn vector_length_must_agree(shape in vector_shape_strategy(6), extra in 1..=3usize) {
        let data = vec![0.0; shape.numel() + extra];
        prop_assert!(as_matrix(shape, data, "x", true).is_err());
    }

    #[test]
    fn scalar_becomes_scaled_identity(n in 1..=6usize, s in -100.0f64..100.0) {
        let shape = Shape::new(n, n).expect("Test shape should be valid");
        let m = as_matrix(shape, s, "Q", true).expect("multiplicative square");
        prop_assert!(m.allclose(&Matrix::eye(n).mul_scalar(s), 1e-12));
    }

    #[test]
    fn scalar_without_multiplicative_always_fails(
        shape in shape_strategy(5),
        s in -100.0f64..100.0,
    ) {
        let result = as_matrix(shape, s, "R", false);
        let is_mismatch = matches!(result, Err(PropertyError::ShapeMismatch { .. }));
        prop_assert!(is_mismatch);
    }

    #[test]
    fn scalar_on_non_square_matrix_fails(rows in 2..=5usize, cols in 2..=5usize, s in -10.0f64..10.0) {
        prop_assume!(rows != cols);
        let shape = Shape::new(rows, cols).expect("Test shape should be valid");
        prop_assert!(as_matrix(shape, s, "H", true).is_err());
    }

    #[test]
    fn flat_never_fills_two_non_unit_dims(rows in 2..=5usize, cols in 2..=5usize) {
        let shape = Shape::new(rows, cols).expect("Test shape should be valid");
        let result = as_matrix(shape, vec![1.0; rows * cols], "H", true);
        let is_shape_mismatch = matches!(result, Err(PropertyError::ShapeMismatch { .. }));
        prop_assert!(is_shape_mismatch);
    }

    #[test]
    fn transposed_matrix_is_rejected(rows in 2..=5usize, cols in 2..=5usize) {
        prop_assume!(rows != cols);
        let shape = Shape::new(rows, cols).expect("Test shape should be valid");
        let result = as_matrix(shape, Array::zeros(&[cols, rows]).expect("Test shape should be valid"), "F", true);
        prop_assert!(result.is_err());
    }

    // Validator properties
    #[test]
    fn function_validator_is_idempotent(shape in shape_strategy(5), multiplicative in any::<bool>()) {
        let v = FunctionShapeValidator::from_shape(shape).with_multiplicative(multiplicative);
        let once = v.validate(Value::function(identity_fn)).expect("callable");
        let twice = v.validate(Value::from(once)).expect("matching wrap");
        prop_assert_eq!(twice.shape(), shape);
        prop_assert_eq!(twice.multiplicative(), multiplicative);
    }

    #[test]
    fn function_validator_rejects_other_shapes(a in shape_strategy(4), b in shape_strategy(4)) {
        prop_assume!(a != b);
        let wrapped = FunctionShapeValidator::from_shape(a)
            .validate(Value::function(identity_fn))
            .expect("callable");
        let result = FunctionShapeValidator::from_shape(b).validate(Value::from(wrapped));
        let is_conflict = matches!(result, Err(PropertyError::TemplateShapeConflict { .. }));
        prop_assert!(is_conflict);
    }

    #[test]
    fn wrapped_function_output_has_declared_shape(
        (shape, data) in shape_strategy(4).prop_flat_map(|s| (Just(s), data_for(s))),
    ) {
        let (r, c) = shape.dims();
        let f = WrappedFunction::from_fn(shape, identity_fn);
        let arg = Array::new(data, &[r, c]).expect("Test data should be valid");
        prop_assert_eq!(f.call(&[arg]).expect("exact shape").shape(), (r, c));
    }

    // Storage properties
    #[test]
    fn rejected_assignment_keeps_value(n in 2..=5usize, s in -10.0f64..10.0, bad in 1..=4usize) {
        prop_assume!(bad != n);
        let mut props = PropertyMap::with_properties(["x"]);
        props.set("x", ShapeValidator::new(n, 1).expect("Test shape should be valid"))
            .expect("install");
        props.set("x", vec![s; n]).expect("right length");
        prop_assert!(props.set("x", vec![0.0; bad]).is_err());
        let kept = props.matrix("x").expect("kept");
        let expected = vec![s; n];
        prop_assert_eq!(kept.as_slice(), expected.as_slice());
    }

    #[test]
    fn unassigned_read_is_undefined(name in "[a-zA-Z][a-zA-Z0-9_]{0,8}") {
        let props = PropertyMap::with_properties([name.as_str()]);
        let undefined = matches!(props.get(&name), Err(PropertyError::PropertyUndefined { .. }));
        prop_assert!(undefined);
    }
}
