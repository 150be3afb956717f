//! Binomial coefficients with exact integer arithmetic.
//!
//! Results are `u128`, which holds every coefficient with `n <= 130`.
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};

use crate::error::{Result, UtilsError};

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// The number of combinations of `n` things taken `k` at a time, or `None`
/// if it does not fit in a `u128`.
///
/// Out-of-range inputs (`k > n`, `n < 0` or `k < 0`) give `Some(0)`.
pub fn checked_comb(n: i64, k: i64) -> Option<u128> {
    if k > n || n < 0 || k < 0 {
        return Some(0);
    }
    let n = n as u128;
    let k = (k as u128).min(n - k as u128);

    let mut val: u128 = 1;
    for j in 0..k {
        // val * (n - j) is divisible by j + 1; split the divisor so the
        // product never exceeds the next coefficient.
        let g = gcd(val, j + 1);
        let factor = (n - j) / ((j + 1) / g);
        val = (val / g).checked_mul(factor)?;
    }
    Some(val)
}

/// The number of combinations of `n` things taken `k` at a time.
///
/// Returns 0 when `k > n`, `n < 0` or `k < 0`.
///
/// # Panics
///
/// Panics if the coefficient exceeds `u128::MAX`, which cannot happen for
/// `n <= 130`. Use [`checked_comb`] for larger inputs.
pub fn comb(n: i64, k: i64) -> u128 {
    match checked_comb(n, k) {
        Some(v) => v,
        None => panic!("comb({}, {}) overflows u128", n, k),
    }
}

/// Elementwise [`comb`] over two arrays of the same shape.
///
/// # Arguments
///
/// * `n` - Number of things, per element.
/// * `k` - Number of elements taken, per element.
///
/// # Returns
///
/// An array of the shared shape, or `ShapeMismatch` if the shapes differ and
/// `Overflow` for the first element whose coefficient exceeds `u128`.
pub fn comb_array<S1, S2, D>(n: &ArrayBase<S1, D>, k: &ArrayBase<S2, D>) -> Result<Array<u128, D>>
where
    S1: Data<Elem = i64>,
    S2: Data<Elem = i64>,
    D: Dimension,
{
    if n.shape() != k.shape() {
        return Err(UtilsError::ShapeMismatch {
            left: n.shape().to_vec(),
            right: k.shape().to_vec(),
        });
    }

    let mut overflow = None;
    let out = Zip::from(n).and(k).map_collect(|&n, &k| match checked_comb(n, k) {
        Some(v) => v,
        None => {
            overflow.get_or_insert(UtilsError::Overflow { n, k });
            0
        }
    });

    match overflow {
        Some(err) => Err(err),
        None => Ok(out),
    }
}

/// Elementwise [`comb`] with a single `k` for every element of `n`.
pub fn comb_array_scalar_k<S, D>(n: &ArrayBase<S, D>, k: i64) -> Result<Array<u128, D>>
where
    S: Data<Elem = i64>,
    D: Dimension,
{
    let k = Array::from_elem(n.raw_dim(), k);
    comb_array(n, &k)
}
