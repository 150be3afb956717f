//! modeling-utils: small numeric helpers for model fitting code.
//!
//! This crate provides a shape broadcasting check, affine remapping of
//! coordinates from a function domain onto a window, exact binomial
//! coefficients, and single-line rendering of multi-dimensional arrays.
//!
//! Every function is pure: inputs are only read, outputs are freshly
//! allocated, and all of them are safe to call from many threads at once.
pub mod config;
pub mod error;
pub mod format;
pub mod math;

pub use config::PrintOptions;
pub use error::{Result, UtilsError};
pub use format::{array2string, array_repr_oneline};
pub use math::{can_broadcast, comb, poly_map_domain};
