//! Text cell helpers.
//!
//! Every cleaning stage works on text columns, so numeric checks and
//! formatting go through these functions rather than through Polars casts.

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use sales_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(100.0), "100");
/// assert_eq!(format_numeric(-0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Parses a string as a finite `f64`.
///
/// Returns `None` for empty, blank, unparsable, `NaN` and infinite values.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Returns true for absent cells and cells holding only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Trims a value and collapses internal whitespace runs to a single space.
pub fn collapse_whitespace(value: &str) -> String {
    let mut parts = value.split_whitespace();
    let mut collapsed = String::with_capacity(value.len());
    if let Some(first) = parts.next() {
        collapsed.push_str(first);
        for part in parts {
            collapsed.push(' ');
            collapsed.push_str(part);
        }
    }
    collapsed
}
