//! Numeric helpers used when setting up and evaluating models.
//!
//! Shape compatibility checks, domain-to-window remapping and binomial
//! coefficients. Everything here is a pure function over plain values or
//! `ndarray` arrays.
pub mod combinatorics;
pub mod domain;
pub mod shape;

pub use combinatorics::{checked_comb, comb, comb_array, comb_array_scalar_k};
pub use domain::{
    poly_map_domain, poly_map_domain_scalar, try_poly_map_domain, AffineMap, Interval,
};
pub use shape::can_broadcast;
