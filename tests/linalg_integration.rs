//! End-to-end workflows across the tensor, vector, and matrix surfaces.

use linrs::{LinalgError, Matrix, Tensor, Vector};

fn sequential(shape: &[usize]) -> Tensor<f64> {
    let mut t = Tensor::zeros(shape);
    let mut next = 0.0;
    for x in t.iter_mut() {
        *x = next;
        next += 1.0;
    }
    t
}

#[test]
fn permute_then_scale_workflow() {
    // 2x3x2 tensor holding 0..=11 in row-major order.
    let t = sequential(&[2, 3, 2]);
    assert_eq!(t[&[1, 2, 1]], 11.0);

    let permuted = t.permute(1, 2).unwrap();
    assert_eq!(permuted.shape(), &[2, 2, 3]);

    let scaled = &permuted * 2.0;
    for i in 0..2 {
        for j in 0..3 {
            for k in 0..2 {
                assert_eq!(scaled[&[i, k, j]], 2.0 * t[&[i, j, k]]);
            }
        }
    }
    assert_eq!(scaled[&[0, 1, 2]], 2.0 * t[&[0, 2, 1]]);
}

#[test]
fn permute_then_compound_assign() {
    let t = sequential(&[2, 3, 2]);
    let mut p = t.permute(1, 2).unwrap();
    p *= 2.0;
    p /= 2.0;
    let back = p.permute(1, 2).unwrap();
    assert_eq!(back, t);
}

#[test]
fn permutation_pipeline_over_higher_rank() {
    let t = sequential(&[2, 3, 4, 2]);
    // A chain of distinct transpositions, then the same chain reversed.
    let forward = t
        .permute(0, 3)
        .unwrap()
        .permute(1, 2)
        .unwrap();
    let back = forward.permute(1, 2).unwrap().permute(0, 3).unwrap();
    assert_eq!(back, t);
}

#[test]
fn nested_construction_round_trip() {
    let rows: Vec<_> = (0..3)
        .map(|i| {
            Tensor::from_vec(vec![i as f64, i as f64 + 0.5], &[2]).unwrap()
        })
        .collect();
    let stacked = Tensor::from_subtensors(3, &rows).unwrap();
    assert_eq!(stacked.shape(), &[3, 2]);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(&stacked.subtensor(i).unwrap(), row);
    }
}

#[test]
fn vector_geometry_pipeline() {
    let a = Vector::from_vec(vec![1.0, 0.0, 0.0]);
    let b = Vector::from_vec(vec![0.0, 2.0, 0.0]);

    let n = b.normalize();
    assert_eq!(n.as_slice(), &[0.0, 1.0, 0.0]);

    let c = a.cross(&n).unwrap();
    assert_eq!(c.as_slice(), &[0.0, 0.0, 1.0]);
    assert_eq!(a.dot(&c), 0.0);

    let halfway = a.lerp(&n, 0.5);
    assert_eq!(halfway.as_slice(), &[0.5, 0.5, 0.0]);
    assert!((halfway.length() - 0.5f64.sqrt()).abs() < 1e-12);
}

#[test]
fn vector_tensor_interop() {
    let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    let t: Tensor<f64> = v.clone().into();
    let doubled = &t * 2.0;
    let back = Vector::try_from(doubled).unwrap();
    assert_eq!(back.as_slice(), &[2.0, 4.0, 6.0]);
    assert_eq!(back.sum(), 12.0);
}

#[test]
fn matrix_inverse_round_trip_4x4() {
    let m = Matrix::from_vec(
        4,
        4,
        vec![
            4.0, 0.0, 0.0, 1.0, //
            0.0, 2.0, 1.0, 0.0, //
            0.0, 1.0, 3.0, 0.0, //
            1.0, 0.0, 0.0, 2.0,
        ],
    )
    .unwrap();
    let inv = m.inverse().unwrap();
    let product = m.matmul(&inv).unwrap();
    let eye = Matrix::<f64>::identity(4);
    for i in 0..4 {
        for j in 0..4 {
            assert!(
                (product.get(i, j) - eye.get(i, j)).abs() < 1e-12,
                "entry ({i}, {j}) = {}",
                product.get(i, j)
            );
        }
    }
}

#[test]
fn singular_matrix_reports_determinant() {
    let m = Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 1.0, 1.0]).unwrap();
    assert_eq!(m.determinant().unwrap(), 0.0);
    let err = m.inverse().unwrap_err();
    assert!(matches!(err, LinalgError::SingularMatrix { .. }));
    assert!(err.to_string().contains("singular"));
}

#[test]
fn transpose_agrees_with_permute() {
    let t = sequential(&[3, 4]);
    let m = Matrix::try_from(t.clone()).unwrap();
    assert_eq!(m.transpose().into_tensor(), t.permute(0, 1).unwrap());
}

#[test]
fn matrix_vector_solve_via_inverse() {
    // Solve m * x = rhs by applying the inverse.
    let m = Matrix::from_vec(2, 2, vec![3.0f64, 1.0, 1.0, 2.0]).unwrap();
    let rhs = Vector::from_vec(vec![9.0, 8.0]);
    let x = m.inverse().unwrap().mul_vector(&rhs).unwrap();
    let check = m.mul_vector(&x).unwrap();
    for i in 0..2 {
        assert!((check[i] - rhs[i]).abs() < 1e-12);
    }
}

#[test]
fn error_diagnostics_name_the_violation() {
    let t = Tensor::<f64>::zeros(&[2, 3]);
    let msg = t.element(&[0, 5]).unwrap_err().to_string();
    assert!(msg.contains("index 5"));
    assert!(msg.contains("axis 1"));

    let msg = t.permute(0, 0).unwrap_err().to_string();
    assert!(msg.contains("axis 0 with itself"));

    let msg = Matrix::<f64>::zeros(2, 3).determinant().unwrap_err().to_string();
    assert!(msg.contains("square"));
}
