//! Text rendering of `ndarray` arrays.
//!
//! `array2string` produces the familiar nested-bracket layout over several
//! lines; `array_repr_oneline` collapses it onto one line for log messages
//! and model reprs.
pub mod array_repr;
pub mod element;

pub use array_repr::{array2string, array_repr_oneline, array_repr_oneline_with, collapse_lines};
pub use element::ReprElement;
