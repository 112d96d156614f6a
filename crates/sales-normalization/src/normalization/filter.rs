//! Removal of rows holding negative prices or quantities.

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};

use crate::error::Result;
use crate::normalization::numeric::coerce_column;
use crate::roles::{ColumnRole, columns_where};

/// Table after the row filter.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub data: DataFrame,
    pub dropped_rows: usize,
}

/// Drops every row where a price or quantity column holds a number below zero.
///
/// Missing and non-numeric cells pass; the fill step handles them. Text that
/// overflows to negative infinity is dropped like any other negative value.
pub fn drop_negative_rows(df: &DataFrame) -> Result<FilterOutcome> {
    let mut keep = vec![true; df.height()];
    for name in columns_where(df, ColumnRole::is_numeric) {
        let cells = coerce_column(df.column(&name)?)?;
        let mut negatives = 0usize;
        for (idx, cell) in cells.iter().enumerate() {
            if cell.is_negative() {
                keep[idx] = false;
                negatives += 1;
            }
        }
        if negatives > 0 {
            tracing::debug!(column = %name, negatives, "found negative values");
        }
    }

    let dropped_rows = keep.iter().filter(|kept| !**kept).count();
    if dropped_rows == 0 {
        return Ok(FilterOutcome {
            data: df.clone(),
            dropped_rows,
        });
    }
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(FilterOutcome {
        data: df.filter(&mask)?,
        dropped_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_drops_negative_price_and_quantity() {
        let df = df! {
            "price" => &[Some("-5"), Some("10"), Some("4"), Some("abc")],
            "qty" => &[Some("3"), Some("-1"), None, Some("2")],
            "prodname" => &["a", "b", "c", "d"],
        }
        .unwrap();

        let outcome = drop_negative_rows(&df).unwrap();

        assert_eq!(outcome.dropped_rows, 2);
        let products = outcome.data.column("prodname").unwrap().str().unwrap();
        let kept: Vec<Option<&str>> = products.iter().collect();
        assert_eq!(kept, vec![Some("c"), Some("d")]);
    }

    #[test]
    fn test_drops_negative_infinity() {
        let df = df! {
            "price" => &["-inf", "-1e999", "3", "inf"],
        }
        .unwrap();

        let outcome = drop_negative_rows(&df).unwrap();

        assert_eq!(outcome.dropped_rows, 2);
        let price = outcome.data.column("price").unwrap().str().unwrap();
        let kept: Vec<Option<&str>> = price.iter().collect();
        assert_eq!(kept, vec![Some("3"), Some("inf")]);
    }

    #[test]
    fn test_ignores_negative_numbers_in_other_columns() {
        let df = df! {
            "price" => &["1"],
            "discount" => &["-2"],
        }
        .unwrap();

        let outcome = drop_negative_rows(&df).unwrap();

        assert_eq!(outcome.dropped_rows, 0);
        assert_eq!(outcome.data.height(), 1);
    }
}
