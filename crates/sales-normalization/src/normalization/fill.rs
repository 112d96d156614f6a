//! Missing value filling by column role.

use polars::prelude::{DataFrame, DataType, NamedFrom, Series};
use sales_common::{format_numeric, is_blank};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::normalization::numeric::{NumericCell, median};
use crate::options::{CleaningOptions, FillPolicy, QUANTITY_FILL_VALUE};
use crate::roles::{ColumnRole, column_roles};

/// What the fill step did to one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFillSummary {
    pub column: String,
    pub role: ColumnRole,
    /// Value written into missing cells.
    pub fill_value: String,
    /// Cells that were replaced with `fill_value`.
    pub filled: usize,
    /// Replaced cells that held text rather than being empty.
    pub non_numeric: usize,
}

/// Table after the fill step.
#[derive(Debug, Clone)]
pub struct FillOutcome {
    pub data: DataFrame,
    pub columns: Vec<ColumnFillSummary>,
}

impl FillOutcome {
    pub fn filled_cells(&self) -> usize {
        self.columns.iter().map(|c| c.filled).sum()
    }
}

/// Fills missing price, quantity and date cells according to `options`.
///
/// Price and quantity cells that are not finite numbers count as missing.
/// Valid numbers keep their text, trimmed.
pub fn fill_missing_values(df: &DataFrame, options: &CleaningOptions) -> Result<FillOutcome> {
    let mut result = df.clone();
    let mut columns = Vec::new();
    for assignment in column_roles(df) {
        let name = assignment.column;
        let summary = match assignment.role {
            ColumnRole::Price | ColumnRole::Quantity => {
                let (series, summary) =
                    fill_numeric_column(df, &name, assignment.role, options)?;
                result.with_column(series)?;
                summary
            }
            ColumnRole::Date if options.fill_policy == FillPolicy::Sentinel => {
                let (series, summary) = fill_date(df, &name, &options.missing_marker)?;
                result.with_column(series)?;
                summary
            }
            _ => continue,
        };
        if summary.non_numeric > 0 {
            tracing::debug!(
                column = %summary.column,
                non_numeric = summary.non_numeric,
                "treated non-numeric values as missing"
            );
        }
        columns.push(summary);
    }
    Ok(FillOutcome {
        data: result,
        columns,
    })
}

fn price_fill_value(name: &str, cells: &[NumericCell], options: &CleaningOptions) -> String {
    match options.fill_policy {
        FillPolicy::Sentinel => options.missing_marker.clone(),
        FillPolicy::Median => {
            let values: Vec<f64> = cells.iter().filter_map(NumericCell::value).collect();
            match median(&values) {
                Some(value) => format_numeric(value),
                None => {
                    tracing::warn!(
                        column = %name,
                        marker = %options.missing_marker,
                        "no valid prices for a median, using the missing marker"
                    );
                    options.missing_marker.clone()
                }
            }
        }
    }
}

fn fill_numeric_column(
    df: &DataFrame,
    name: &str,
    role: ColumnRole,
    options: &CleaningOptions,
) -> Result<(Series, ColumnFillSummary)> {
    let text = df.column(name)?.cast(&DataType::String)?;
    let raw: Vec<Option<&str>> = text.str()?.iter().collect();
    let cells: Vec<NumericCell> = raw.iter().copied().map(NumericCell::coerce).collect();
    let fill_value = match role {
        ColumnRole::Price => price_fill_value(name, &cells, options),
        _ => QUANTITY_FILL_VALUE.to_string(),
    };

    let mut filled = 0usize;
    let mut non_numeric = 0usize;
    let values: Vec<String> = raw
        .iter()
        .zip(&cells)
        .map(|(value, cell)| match cell {
            NumericCell::Value(_) => value.unwrap_or_default().trim().to_string(),
            NumericCell::Missing => {
                filled += 1;
                fill_value.clone()
            }
            NumericCell::NonNumeric(_) => {
                filled += 1;
                non_numeric += 1;
                fill_value.clone()
            }
        })
        .collect();
    let summary = ColumnFillSummary {
        column: name.to_string(),
        role,
        fill_value,
        filled,
        non_numeric,
    };
    Ok((Series::new(name.into(), values), summary))
}

fn fill_date(df: &DataFrame, name: &str, marker: &str) -> Result<(Series, ColumnFillSummary)> {
    let text = df.column(name)?.cast(&DataType::String)?;
    let mut filled = 0usize;
    let values: Vec<String> = text
        .str()?
        .iter()
        .map(|value| {
            if is_blank(value) {
                filled += 1;
                marker.to_string()
            } else {
                value.unwrap_or_default().trim().to_string()
            }
        })
        .collect();
    let summary = ColumnFillSummary {
        column: name.to_string(),
        role: ColumnRole::Date,
        fill_value: marker.to_string(),
        filled,
        non_numeric: 0,
    };
    Ok((Series::new(name.into(), values), summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn texts(df: &DataFrame, name: &str) -> Vec<Option<String>> {
        df.column(name)
            .unwrap()
            .str()
            .unwrap()
            .iter()
            .map(|v| v.map(str::to_string))
            .collect()
    }

    fn sample() -> DataFrame {
        df! {
            "price" => &[Some("10"), None, Some("n/a"), Some(" 4.50 ")],
            "qty" => &[Some("2"), Some(""), Some("x"), None],
            "date_sold" => &[Some(" 2024-03-01 "), Some("   "), None, Some("2024-03-04")],
        }
        .unwrap()
    }

    #[test]
    fn test_sentinel_policy() {
        let outcome = fill_missing_values(&sample(), &CleaningOptions::default()).unwrap();

        let price = texts(&outcome.data, "price");
        assert_eq!(
            price,
            vec![
                Some("10".to_string()),
                Some("Missing".to_string()),
                Some("Missing".to_string()),
                Some("4.50".to_string()),
            ]
        );
        let qty = texts(&outcome.data, "qty");
        assert_eq!(
            qty,
            vec![
                Some("2".to_string()),
                Some("0".to_string()),
                Some("0".to_string()),
                Some("0".to_string()),
            ]
        );
        let dates = texts(&outcome.data, "date_sold");
        assert_eq!(
            dates,
            vec![
                Some("2024-03-01".to_string()),
                Some("Missing".to_string()),
                Some("Missing".to_string()),
                Some("2024-03-04".to_string()),
            ]
        );
        assert_eq!(outcome.filled_cells(), 7);
    }

    #[test]
    fn test_summary_counts_non_numeric() {
        let outcome = fill_missing_values(&sample(), &CleaningOptions::default()).unwrap();

        let price = outcome
            .columns
            .iter()
            .find(|c| c.column == "price")
            .unwrap();
        assert_eq!(price.filled, 2);
        assert_eq!(price.non_numeric, 1);
        assert_eq!(price.fill_value, "Missing");
    }

    #[test]
    fn test_median_policy() {
        let options = CleaningOptions::new().with_fill_policy(FillPolicy::Median);
        let outcome = fill_missing_values(&sample(), &options).unwrap();

        let price = texts(&outcome.data, "price");
        // Median of 10 and 4.5.
        assert_eq!(price[1].as_deref(), Some("7.25"));
        assert_eq!(price[2].as_deref(), Some("7.25"));

        // Dates are not touched under the median policy.
        let dates = texts(&outcome.data, "date_sold");
        assert_eq!(dates[1].as_deref(), Some("   "));
        assert_eq!(dates[2], None);
    }

    #[test]
    fn test_median_without_valid_prices_uses_marker() {
        let df = df! { "price" => &[None::<&str>, Some("free")] }.unwrap();
        let options = CleaningOptions::new()
            .with_fill_policy(FillPolicy::Median)
            .with_missing_marker("Unknown");

        let outcome = fill_missing_values(&df, &options).unwrap();

        let price = texts(&outcome.data, "price");
        assert_eq!(
            price,
            vec![Some("Unknown".to_string()), Some("Unknown".to_string())]
        );
    }

    #[test]
    fn test_median_of_huge_prices_is_a_number() {
        let df = df! { "price" => &[Some("1e308"), Some("1.7e308"), None] }.unwrap();
        let options = CleaningOptions::new().with_fill_policy(FillPolicy::Median);

        let outcome = fill_missing_values(&df, &options).unwrap();

        let price = texts(&outcome.data, "price");
        let filled = price[2].as_deref().unwrap();
        assert_ne!(filled, "inf");
        let value: f64 = filled.parse().unwrap();
        assert!(value.is_finite() && value > 1e308);
    }

    #[test]
    fn test_unclassified_columns_untouched() {
        let df = df! { "notes" => &[None::<&str>, Some(" x ")] }.unwrap();

        let outcome = fill_missing_values(&df, &CleaningOptions::default()).unwrap();

        assert!(outcome.columns.is_empty());
        assert_eq!(texts(&outcome.data, "notes"), vec![None, Some(" x ".to_string())]);
    }
}
