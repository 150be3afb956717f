//! Per-dtype rendering of array elements.
//!
//! All elements of one array are formatted together so they can share a
//! column width, the way array printers line up their output.
use crate::config::PrintOptions;

/// Element types that can be rendered by [`crate::format::array2string`].
pub trait ReprElement: Copy {
    /// Format every value in `values` to a string of identical width.
    fn format_all(values: &[Self], opts: &PrintOptions) -> Vec<String>;
}

fn right_align(words: Vec<String>) -> Vec<String> {
    let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    words
        .into_iter()
        .map(|w| format!("{:>width$}", w, width = width))
        .collect()
}

macro_rules! impl_repr_integer {
    ($($t:ty),*) => {
        $(
            impl ReprElement for $t {
                fn format_all(values: &[Self], _opts: &PrintOptions) -> Vec<String> {
                    right_align(values.iter().map(|v| v.to_string()).collect())
                }
            }
        )*
    };
}

impl_repr_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ReprElement for f64 {
    fn format_all(values: &[Self], opts: &PrintOptions) -> Vec<String> {
        format_floats(values, opts)
    }
}

impl ReprElement for f32 {
    fn format_all(values: &[Self], opts: &PrintOptions) -> Vec<String> {
        let widened: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        format_floats(&widened, opts)
    }
}

/// Drop trailing zeros of the fractional part but keep the decimal point.
fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').to_string()
    } else {
        format!("{}.", s)
    }
}

/// Whether the finite values of an array call for scientific notation.
fn use_exp_format(values: &[f64], opts: &PrintOptions) -> bool {
    let abs_non_zero = values
        .iter()
        .filter(|v| v.is_finite() && **v != 0.0)
        .map(|v| v.abs());
    let (min_val, max_val) = abs_non_zero.fold((f64::INFINITY, 0.0f64), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if max_val == 0.0 {
        return false;
    }
    max_val >= 1.0e8 || (!opts.suppress_small && (min_val < 1.0e-4 || max_val / min_val > 1000.0))
}

fn fixed_word(v: f64, opts: &PrintOptions) -> String {
    let prec = opts.precision;
    if opts.suppress_small && v.abs() < 10f64.powi(-(prec as i32)) {
        return "0.".to_string();
    }
    let word = trim_fraction(&format!("{:.*}", prec, v));
    // Rounding can leave a bare negative zero behind.
    if word == "-0." {
        "0.".to_string()
    } else {
        word
    }
}

fn exp_word(v: f64, opts: &PrintOptions) -> (String, String) {
    let raw = format!("{:.*e}", opts.precision, v);
    let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exponent),
    };
    (
        trim_fraction(mantissa),
        format!("e{}{:0>2}", sign, digits),
    )
}

/// Pad a set of `int.frac` words so decimal points line up.
fn align_points(words: &[String]) -> Vec<String> {
    let split: Vec<(&str, &str)> = words
        .iter()
        .map(|w| w.split_once('.').unwrap_or((w.as_str(), "")))
        .collect();
    let pad_left = split.iter().map(|(i, _)| i.len()).max().unwrap_or(0);
    let pad_right = split.iter().map(|(_, f)| f.len()).max().unwrap_or(0);
    split
        .iter()
        .map(|(i, f)| format!("{:>l$}.{:<r$}", i, f, l = pad_left, r = pad_right))
        .collect()
}

fn format_floats(values: &[f64], opts: &PrintOptions) -> Vec<String> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

    let formatted: Vec<String> = if use_exp_format(&finite, opts) {
        log::trace!("rendering {} floats in scientific notation", finite.len());
        let parts: Vec<(String, String)> = finite.iter().map(|&v| exp_word(v, opts)).collect();
        let mantissas: Vec<String> = parts.iter().map(|(m, _)| m.clone()).collect();
        let exp_width = parts.iter().map(|(_, e)| e.len()).max().unwrap_or(0);
        align_points(&mantissas)
            .into_iter()
            .zip(parts.iter())
            .map(|(m, (_, e))| format!("{}{:<w$}", m, e, w = exp_width))
            .collect()
    } else {
        let words: Vec<String> = finite.iter().map(|&v| fixed_word(v, opts)).collect();
        align_points(&words)
    };

    let mut formatted = formatted.into_iter();
    let words: Vec<String> = values
        .iter()
        .map(|&v| {
            if v.is_nan() {
                "nan".to_string()
            } else if v == f64::INFINITY {
                "inf".to_string()
            } else if v == f64::NEG_INFINITY {
                "-inf".to_string()
            } else {
                formatted.next().unwrap_or_default()
            }
        })
        .collect();
    right_align(words)
}
