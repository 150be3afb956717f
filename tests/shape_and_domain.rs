//! Integration tests for the shape broadcasting check and domain remapping.

use modeling_utils::math::{
    can_broadcast, poly_map_domain, poly_map_domain_scalar, try_poly_map_domain, AffineMap,
    Interval,
};
use modeling_utils::UtilsError;
use ndarray::{array, Array1};

// ---------------------------------------------------------------------------
// can_broadcast
// ---------------------------------------------------------------------------

#[test]
fn broadcast_size_one_matches_anything() {
    assert!(can_broadcast(&[3, 4], &[1, 4]));
    assert!(can_broadcast(&[3, 1], &[3, 7]));
}

#[test]
fn broadcast_mismatched_trailing_dim() {
    assert!(!can_broadcast(&[3, 4], &[3, 5]));
}

#[test]
fn broadcast_empty_shapes() {
    assert!(can_broadcast::<usize>(&[], &[]));
    assert!(can_broadcast::<usize>(&[], &[2, 3]));
    assert!(can_broadcast::<usize>(&[4], &[]));
}

#[test]
fn broadcast_aligns_from_trailing_end() {
    // compares (1, 3) with (4, 3)
    assert!(can_broadcast(&[5, 1, 3], &[4, 3]));
    assert!(!can_broadcast(&[5, 2, 3], &[4, 3]));
}

#[test]
fn broadcast_ignores_extra_leading_dims() {
    assert!(can_broadcast(&[7, 9, 3], &[3]));
    assert!(can_broadcast(&[2, 3], &[8, 8, 2, 3]));
}

#[test]
fn broadcast_zero_sized_dims_compare_literally() {
    assert!(can_broadcast(&[0usize], &[0]));
    assert!(can_broadcast(&[0usize], &[1]));
    assert!(!can_broadcast(&[0usize], &[2]));
}

#[test]
fn broadcast_accepts_signed_shapes() {
    assert!(can_broadcast(&[-1i64, 3], &[1, 3]));
    assert!(!can_broadcast(&[-1i64], &[2]));
}

// ---------------------------------------------------------------------------
// poly_map_domain
// ---------------------------------------------------------------------------

#[test]
fn map_integer_coordinates() {
    let x = array![0, 1, 2];
    let mapped = poly_map_domain(&x, (0.0, 2.0), (10.0, 20.0));
    assert_eq!(mapped, array![10.0, 15.0, 20.0]);
}

#[test]
fn map_onto_unit_window() {
    let x = array![-3.0, 0.0, 3.0];
    let mapped = poly_map_domain(&x, [-3.0, 3.0], [-1.0, 1.0]);
    for (got, want) in mapped.iter().zip([-1.0, 0.0, 1.0].iter()) {
        assert!((got - want).abs() < 1e-12, "got {}, want {}", got, want);
    }
}

#[test]
fn map_endpoints_onto_window_endpoints() {
    let cases = [
        ((0.0, 1.0), (-1.0, 1.0)),
        ((-7.5, 12.25), (0.0, 1.0)),
        ((100.0, 3.0), (2.0, -2.0)),
        ((1e-3, 2e-3), (5.0, 50.0)),
    ];
    for &((d0, d1), (w0, w1)) in cases.iter() {
        let lo = poly_map_domain_scalar(d0, (d0, d1), (w0, w1));
        let hi = poly_map_domain_scalar(d1, (d0, d1), (w0, w1));
        let tol = 1e-9 * (w0.abs() + w1.abs()).max(1.0);
        assert!((lo - w0).abs() < tol, "{} should map to {}, got {}", d0, w0, lo);
        assert!((hi - w1).abs() < tol, "{} should map to {}, got {}", d1, w1, hi);
    }
}

#[test]
fn map_preserves_shape() {
    let x = array![[0.0f32, 1.0, 2.0], [3.0, 4.0, 5.0]];
    let mapped = poly_map_domain(&x, (0.0, 5.0), (0.0, 10.0));
    assert_eq!(mapped.shape(), &[2, 3]);
    assert_eq!(mapped[(1, 2)], 10.0);
    assert_eq!(mapped[(0, 1)], 2.0);
}

#[test]
fn map_leaves_input_untouched() {
    let x = Array1::from_vec(vec![1.0, 2.0]);
    let _ = poly_map_domain(&x, (0.0, 4.0), (0.0, 1.0));
    assert_eq!(x.to_vec(), vec![1.0, 2.0]);
}

#[test]
fn map_degenerate_domain_propagates_non_finite() {
    let y = poly_map_domain_scalar(1.0, (1.0, 1.0), (0.0, 1.0));
    assert!(!y.is_finite());

    let mapped = poly_map_domain(&array![0.0, 2.0], (1.0, 1.0), (0.0, 1.0));
    assert!(mapped.iter().all(|v| !v.is_finite()));
}

#[test]
fn checked_map_rejects_degenerate_domain() {
    let err = try_poly_map_domain(&array![0.0], (2.0, 2.0), (0.0, 1.0)).unwrap_err();
    assert_eq!(err, UtilsError::DegenerateInterval { low: 2.0, high: 2.0 });
    assert!(err.to_string().contains("degenerate"));

    let ok = try_poly_map_domain(&array![1.0], (0.0, 2.0), (0.0, 1.0)).unwrap();
    assert_eq!(ok[0], 0.5);
}

#[test]
fn affine_map_coefficients() {
    let m = AffineMap::from_domain((0.0, 2.0), (10.0, 20.0));
    assert_eq!(m.scale, 5.0);
    assert_eq!(m.offset, 10.0);
    assert_eq!(m.apply(1.0), 15.0);
}

#[test]
fn affine_map_inverse_round_trips() {
    let m = AffineMap::from_domain((-4.0, 6.0), (-1.0, 1.0));
    let inv = m.inverse();
    for &x in [-4.0, -1.5, 0.0, 2.25, 6.0].iter() {
        assert!((inv.apply(m.apply(x)) - x).abs() < 1e-12);
    }
}

#[test]
fn interval_conversions() {
    let a: Interval = (1.0, 3.0).into();
    let b: Interval = [1.0, 3.0].into();
    assert_eq!(a, b);
    assert_eq!(a.width(), 2.0);
    assert!(!a.is_degenerate());
    assert!(Interval::new(4.0, 4.0).is_degenerate());
}

#[test]
fn interval_serializes_as_pair() {
    let json = serde_json::to_string(&Interval::new(0.0, 2.5)).unwrap();
    assert_eq!(json, "[0.0,2.5]");
    let back: Interval = serde_json::from_str("[-1, 1]").unwrap();
    assert_eq!(back, Interval::new(-1.0, 1.0));
}
