use ndarray::{ArrayBase, Data, Dimension};

use crate::config::PrintOptions;
use crate::error::Result;
use crate::format::element::ReprElement;

/// Render `array` as nested, bracketed text.
///
/// The innermost axis is laid out on one line (wrapped at
/// `opts.linewidth`); every outer axis puts its sub-arrays on separate lines,
/// with one blank line per additional level of nesting. Elements share a
/// common width so columns line up.
///
/// # Arguments
///
/// * `array` - Array of any dimensionality.
/// * `opts` - Separator, precision and wrapping settings.
///
/// # Returns
///
/// The rendered text, or `InvalidFormat` if `opts` cannot produce a valid
/// rendering.
pub fn array2string<A, S, D>(array: &ArrayBase<S, D>, opts: &PrintOptions) -> Result<String>
where
    A: ReprElement,
    S: Data<Elem = A>,
    D: Dimension,
{
    opts.validate()?;

    let shape = array.shape();
    if !shape.is_empty() && array.is_empty() {
        return Ok("[]".to_string());
    }

    let values: Vec<A> = array.iter().copied().collect();
    let words = A::format_all(&values, opts);

    if shape.is_empty() {
        return Ok(words.into_iter().next().unwrap_or_default());
    }
    Ok(format_block(&words, shape, 0, opts))
}

fn format_block(words: &[String], shape: &[usize], depth: usize, opts: &PrintOptions) -> String {
    let indent = " ".repeat(depth + 1);

    if shape.len() == 1 {
        let sep_end = opts.separator.trim_end();
        let mut out = String::from("[");
        let mut line_len = depth + 1;
        for (i, word) in words.iter().enumerate() {
            let last = i + 1 == words.len();
            let piece_len = word.len() + if last { 1 } else { sep_end.len() };
            if i > 0 && line_len + piece_len > opts.linewidth {
                // Wrap: the separator loses its trailing whitespace at the
                // end of the line.
                out.truncate(out.trim_end().len());
                out.push('\n');
                out.push_str(&indent);
                line_len = indent.len();
            }
            out.push_str(word);
            line_len += word.len();
            if !last {
                out.push_str(&opts.separator);
                line_len += opts.separator.len();
            }
        }
        out.push(']');
        return out;
    }

    let stride: usize = shape[1..].iter().product();
    let joiner = format!(
        "{}{}{}",
        opts.separator.trim_end(),
        "\n".repeat(shape.len() - 1),
        indent
    );
    let blocks: Vec<String> = words
        .chunks(stride)
        .map(|chunk| format_block(chunk, &shape[1..], depth + 1, opts))
        .collect();
    format!("[{}]", blocks.join(&joiner))
}

/// Represent a multi-dimensional array on a single line.
///
/// The array is rendered comma separated with small values suppressed, then
/// every line is trimmed and the lines are joined with single spaces.
pub fn array_repr_oneline<A, S, D>(array: &ArrayBase<S, D>) -> Result<String>
where
    A: ReprElement,
    S: Data<Elem = A>,
    D: Dimension,
{
    array_repr_oneline_with(array, &PrintOptions::oneline())
}

/// [`array_repr_oneline`] with caller-supplied print options.
pub fn array_repr_oneline_with<A, S, D>(
    array: &ArrayBase<S, D>,
    opts: &PrintOptions,
) -> Result<String>
where
    A: ReprElement,
    S: Data<Elem = A>,
    D: Dimension,
{
    let rendered = array2string(array, opts)?;
    Ok(collapse_lines(&rendered))
}

/// Join the trimmed lines of `text` with single spaces.
pub fn collapse_lines(text: &str) -> String {
    text.lines().map(str::trim).collect::<Vec<_>>().join(" ")
}
