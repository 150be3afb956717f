use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, UtilsError};

/// Highest float precision that still means something for an `f64`.
pub const MAX_PRECISION: usize = 17;

/// Options controlling how arrays are turned into text.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PrintOptions {
    /// Number of decimals kept for floating point elements.
    pub precision: usize,
    /// Print values below `10^-precision` as zero and never switch to
    /// scientific notation.
    pub suppress_small: bool,
    /// Text placed between neighbouring elements.
    pub separator: String,
    /// Maximum characters per line before the innermost axis wraps.
    pub linewidth: usize,
}

impl PrintOptions {
    pub fn new(precision: usize, suppress_small: bool, separator: &str, linewidth: usize) -> Self {
        Self {
            precision,
            suppress_small,
            separator: separator.to_string(),
            linewidth,
        }
    }

    /// Comma separated with small-value suppression; the preset used for
    /// single-line representations.
    pub fn oneline() -> Self {
        Self {
            suppress_small: true,
            separator: ",".to_string(),
            ..Self::default()
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_suppress_small(mut self, suppress_small: bool) -> Self {
        self.suppress_small = suppress_small;
        self
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    pub fn with_linewidth(mut self, linewidth: usize) -> Self {
        self.linewidth = linewidth;
        self
    }

    /// Reject options that cannot produce a well-formed rendering.
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(UtilsError::InvalidFormat(
                "separator must not be empty".to_string(),
            ));
        }
        if self.separator.contains(['\n', '\r']) {
            return Err(UtilsError::InvalidFormat(format!(
                "separator {:?} contains a line break",
                self.separator
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(UtilsError::InvalidFormat(format!(
                "precision {} exceeds {}",
                self.precision, MAX_PRECISION
            )));
        }
        if self.linewidth == 0 {
            return Err(UtilsError::InvalidFormat(
                "linewidth must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            precision: 8,
            suppress_small: false,
            separator: " ".to_string(),
            linewidth: 75,
        }
    }
}

impl FromStr for PrintOptions {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(PrintOptions::default()),
            "oneline" => Ok(PrintOptions::oneline()),
            _ => Err(format!(
                "Unknown print options preset: {}. Expected `default` or `oneline`",
                s
            )),
        }
    }
}
