//! Affine remapping of coordinates from a function domain into a window.
//!
//! Polynomial models are usually evaluated on a normalized window (for
//! example `[-1, 1]`) while the caller supplies coordinates in the model's
//! natural domain. `AffineMap` holds the shift and scale between the two and
//! `poly_map_domain` applies it elementwise to an array of any shape.
use ndarray::{Array, ArrayBase, Data, Dimension};
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UtilsError};

/// A `(low, high)` pair of reals. Used both for domains and windows.
///
/// `low` is not required to be smaller than `high`; a reversed interval
/// simply flips the orientation of the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Interval {
    pub low: f64,
    pub high: f64,
}

impl Interval {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Signed width `high - low`.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }
}

impl From<(f64, f64)> for Interval {
    fn from(value: (f64, f64)) -> Self {
        Interval::new(value.0, value.1)
    }
}

impl From<[f64; 2]> for Interval {
    fn from(value: [f64; 2]) -> Self {
        Interval::new(value[0], value[1])
    }
}

impl From<Interval> for [f64; 2] {
    fn from(value: Interval) -> Self {
        [value.low, value.high]
    }
}

/// The map `x -> offset + scale * x` taking a domain onto a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMap {
    pub scale: f64,
    pub offset: f64,
}

impl AffineMap {
    /// Build the map sending `domain.low` to `window.low` and `domain.high`
    /// to `window.high`.
    ///
    /// A degenerate domain is not rejected: the division by zero yields
    /// non-finite `scale`/`offset` and every mapped value follows IEEE-754
    /// rules from there. Use [`AffineMap::try_from_domain`] to get an error
    /// instead.
    pub fn from_domain(domain: impl Into<Interval>, window: impl Into<Interval>) -> Self {
        let domain = domain.into();
        let window = window.into();
        if domain.is_degenerate() {
            log::warn!(
                "degenerate domain ({}, {}); mapped values will be non-finite",
                domain.low,
                domain.high
            );
        }
        let den = domain.width();
        AffineMap {
            scale: window.width() / den,
            offset: (window.low * domain.high - window.high * domain.low) / den,
        }
    }

    /// Like [`AffineMap::from_domain`] but fails on a degenerate domain.
    pub fn try_from_domain(
        domain: impl Into<Interval>,
        window: impl Into<Interval>,
    ) -> Result<Self> {
        let domain = domain.into();
        if domain.is_degenerate() {
            return Err(UtilsError::DegenerateInterval {
                low: domain.low,
                high: domain.high,
            });
        }
        Ok(Self::from_domain(domain, window))
    }

    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        self.offset + self.scale * x
    }

    /// Map every element of `x` into a new `f64` array of the same shape.
    pub fn apply_array<A, S, D>(&self, x: &ArrayBase<S, D>) -> Array<f64, D>
    where
        A: AsPrimitive<f64>,
        S: Data<Elem = A>,
        D: Dimension,
    {
        x.mapv(|v| self.apply(v.as_()))
    }

    /// The map going back from the window to the domain.
    ///
    /// A map with zero scale (degenerate window) inverts to non-finite
    /// coefficients.
    pub fn inverse(&self) -> AffineMap {
        AffineMap {
            scale: 1.0 / self.scale,
            offset: -self.offset / self.scale,
        }
    }
}

/// Map `oldx` from `domain` into `window` by shifting and scaling.
///
/// The result is always `f64`, whatever the element type of `oldx`, and has
/// the same shape as `oldx`. The input is left untouched.
///
/// # Arguments
///
/// * `oldx` - Original coordinates, any dimensionality.
/// * `domain` - Function domain `(d0, d1)`.
/// * `window` - Interval `(w0, w1)` the domain is mapped onto.
///
/// # Returns
///
/// `offset + scale * oldx` with `scale = (w1 - w0) / (d1 - d0)` and
/// `offset = (w0 * d1 - w1 * d0) / (d1 - d0)`.
pub fn poly_map_domain<A, S, D>(
    oldx: &ArrayBase<S, D>,
    domain: impl Into<Interval>,
    window: impl Into<Interval>,
) -> Array<f64, D>
where
    A: AsPrimitive<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    AffineMap::from_domain(domain, window).apply_array(oldx)
}

/// Checked form of [`poly_map_domain`]; errors on a degenerate domain.
pub fn try_poly_map_domain<A, S, D>(
    oldx: &ArrayBase<S, D>,
    domain: impl Into<Interval>,
    window: impl Into<Interval>,
) -> Result<Array<f64, D>>
where
    A: AsPrimitive<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    Ok(AffineMap::try_from_domain(domain, window)?.apply_array(oldx))
}

pub fn poly_map_domain_scalar<A: AsPrimitive<f64>>(
    x: A,
    domain: impl Into<Interval>,
    window: impl Into<Interval>,
) -> f64 {
    AffineMap::from_domain(domain, window).apply(x.as_())
}
