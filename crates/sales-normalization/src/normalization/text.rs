//! Whitespace normalization for product name and category columns.

use polars::prelude::{DataFrame, DataType, NamedFrom, Series};
use sales_common::collapse_whitespace;

use crate::error::Result;
use crate::roles::{ColumnRole, columns_where};

/// Trims product name and category cells and collapses internal whitespace.
///
/// Columns of other roles are returned unchanged. Nulls stay null.
pub fn normalize_text_fields(df: &DataFrame) -> Result<DataFrame> {
    let mut result = df.clone();
    for name in columns_where(df, ColumnRole::is_text) {
        let text = df.column(&name)?.cast(&DataType::String)?;
        let normalized: Vec<Option<String>> = text
            .str()?
            .iter()
            .map(|value| value.map(collapse_whitespace))
            .collect();
        tracing::debug!(column = %name, "normalized text whitespace");
        result.with_column(Series::new(name.as_str().into(), normalized))?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_normalizes_text_columns_only() {
        let df = df! {
            "product_name" => &[Some("  Blue   Widget "), None],
            "category" => &[Some("\tHome  &  Garden"), Some("Toys")],
            "notes" => &[Some("  keep   me "), Some("x")],
        }
        .unwrap();

        let result = normalize_text_fields(&df).unwrap();

        let product = result.column("product_name").unwrap().str().unwrap();
        assert_eq!(product.get(0), Some("Blue Widget"));
        assert_eq!(product.get(1), None);

        let category = result.column("category").unwrap().str().unwrap();
        assert_eq!(category.get(0), Some("Home & Garden"));

        let notes = result.column("notes").unwrap().str().unwrap();
        assert_eq!(notes.get(0), Some("  keep   me "));
    }

    #[test]
    fn test_numeric_product_codes_become_text() {
        let df = df! { "prodname" => &[101i64, 202] }.unwrap();

        let result = normalize_text_fields(&df).unwrap();

        let product = result.column("prodname").unwrap();
        assert_eq!(product.dtype(), &DataType::String);
        assert_eq!(product.str().unwrap().get(1), Some("202"));
    }
}
