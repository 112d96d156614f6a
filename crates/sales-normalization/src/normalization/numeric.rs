//! Explicit numeric coercion of text cells.

use polars::prelude::{Column, DataType};
use sales_common::{is_blank, parse_f64};

use crate::error::Result;

/// Outcome of reading a price or quantity cell as a number.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericCell {
    /// A finite number.
    Value(f64),
    /// Null, empty or whitespace only.
    Missing,
    /// Text that is not a finite number, kept for reporting.
    NonNumeric(String),
}

impl NumericCell {
    pub fn coerce(value: Option<&str>) -> Self {
        if is_blank(value) {
            return Self::Missing;
        }
        let text = value.unwrap_or_default();
        match parse_f64(text) {
            Some(number) => Self::Value(number),
            None => Self::NonNumeric(text.to_string()),
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(number) => Some(*number),
            _ => None,
        }
    }

    /// Strictly below zero; `-0` is not negative.
    ///
    /// Text that overflows to negative infinity (`-inf`, `-1e999`) counts as
    /// negative even though it is not a usable value.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Value(number) => *number < 0.0,
            Self::NonNumeric(text) => text
                .trim()
                .parse::<f64>()
                .is_ok_and(|number| number == f64::NEG_INFINITY),
            Self::Missing => false,
        }
    }

    /// True for cells the fill step replaces.
    pub fn needs_fill(&self) -> bool {
        !matches!(self, Self::Value(_))
    }
}

/// Coerces every cell of a column. Non-text columns are cast to text first.
pub fn coerce_column(column: &Column) -> Result<Vec<NumericCell>> {
    let text = column.cast(&DataType::String)?;
    let cells = text.str()?.iter().map(NumericCell::coerce).collect();
    Ok(cells)
}

/// Median of the finite values, or `None` when there are none.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        // Halve before adding so large prices do not overflow.
        Some(sorted[mid - 1] / 2.0 + sorted[mid] / 2.0)
    } else {
        Some(sorted[mid])
    }
}
