use std::error::Error;
use std::fmt;

/// Error type for the fallible helpers in this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum UtilsError {
    /// A domain or window whose two ends coincide.
    DegenerateInterval { low: f64, high: f64 },
    /// Print options that cannot produce a valid rendering.
    InvalidFormat(String),
    /// Two arrays that must share a shape don't.
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },
    /// Binomial coefficient too large for `u128`.
    Overflow { n: i64, k: i64 },
}

pub type Result<T> = std::result::Result<T, UtilsError>;

impl fmt::Display for UtilsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UtilsError::DegenerateInterval { low, high } => write!(
                f,
                "degenerate interval ({}, {}): both ends must differ",
                low, high
            ),
            UtilsError::InvalidFormat(msg) => write!(f, "cannot render array: {}", msg),
            UtilsError::ShapeMismatch { left, right } => {
                write!(f, "shape mismatch: {:?} vs {:?}", left, right)
            }
            UtilsError::Overflow { n, k } => {
                write!(f, "comb({}, {}) does not fit in a u128", n, k)
            }
        }
    }
}

impl Error for UtilsError {}
