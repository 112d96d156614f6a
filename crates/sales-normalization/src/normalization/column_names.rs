//! Column name standardization.

use std::collections::BTreeMap;

use polars::prelude::{Column, DataFrame};
use serde::{Deserialize, Serialize};

use crate::error::{NormalizationError, Result};

/// Separator written between the alphanumeric runs of a standardized name.
pub const NAME_SEPARATOR: char = '_';

/// A raw column name and its standardized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRename {
    pub original: String,
    pub standardized: String,
}

impl ColumnRename {
    pub fn is_changed(&self) -> bool {
        self.original != self.standardized
    }
}

/// Standardizes a single column name.
///
/// Lowercases, drops surrounding whitespace and any byte order mark, and
/// collapses every run of non-alphanumeric characters into one `_`. Leading
/// and trailing separators are removed. Applying it twice gives the same
/// result as applying it once.
///
/// # Example
/// ```
/// use sales_normalization::standardize_column_name;
///
/// assert_eq!(standardize_column_name(" Product Name "), "product_name");
/// assert_eq!(standardize_column_name("Unit-Price ($)"), "unit_price");
/// ```
pub fn standardize_column_name(raw: &str) -> String {
    let mut standardized = String::with_capacity(raw.len());
    let mut pending_separator = false;
    for ch in raw.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_separator && !standardized.is_empty() {
                standardized.push(NAME_SEPARATOR);
            }
            pending_separator = false;
            standardized.push(ch);
        } else {
            pending_separator = true;
        }
    }
    standardized
}

/// Standardizes a full header row.
///
/// Names that standardize to nothing become `column_<position>` (1-based).
/// Two raw names mapping to the same standardized name is an error.
pub fn standardize_column_names<S: AsRef<str>>(names: &[S]) -> Result<Vec<ColumnRename>> {
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    let mut renames = Vec::with_capacity(names.len());
    for (idx, name) in names.iter().enumerate() {
        let original = name.as_ref();
        let mut standardized = standardize_column_name(original);
        if standardized.is_empty() {
            standardized = format!("column{NAME_SEPARATOR}{}", idx + 1);
        }
        if let Some(first) = seen.get(&standardized) {
            return Err(NormalizationError::ColumnCollision {
                name: standardized,
                first: first.clone(),
                second: original.to_string(),
            });
        }
        seen.insert(standardized.clone(), original.to_string());
        renames.push(ColumnRename {
            original: original.to_string(),
            standardized,
        });
    }
    Ok(renames)
}

/// Returns a copy of `df` with standardized column names, plus the renames.
pub fn standardize_columns(df: &DataFrame) -> Result<(DataFrame, Vec<ColumnRename>)> {
    let names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    let renames = standardize_column_names(&names)?;

    let columns: Vec<Column> = df
        .get_columns()
        .iter()
        .zip(&renames)
        .map(|(column, rename)| column.clone().with_name(rename.standardized.as_str().into()))
        .collect();
    let renamed = DataFrame::new(columns)?;
    Ok((renamed, renames))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardize_basic() {
        assert_eq!(standardize_column_name(" Product Name "), "product_name");
        assert_eq!(standardize_column_name("PRICE"), "price");
        assert_eq!(standardize_column_name("Qty"), "qty");
        assert_eq!(standardize_column_name("Date Sold"), "date_sold");
    }

    #[test]
    fn test_standardize_collapses_punctuation_runs() {
        assert_eq!(standardize_column_name("unit -- price"), "unit_price");
        assert_eq!(standardize_column_name("__qty__"), "qty");
        assert_eq!(standardize_column_name("a.b/c"), "a_b_c");
    }

    #[test]
    fn test_standardize_strips_bom() {
        assert_eq!(standardize_column_name("\u{feff}Price"), "price");
    }

    #[test]
    fn test_standardize_keeps_non_ascii_letters() {
        assert_eq!(standardize_column_name("Catégorie Produit"), "catégorie_produit");
    }

    #[test]
    fn test_standardize_is_idempotent_on_examples() {
        for raw in [" Product Name ", "Unit-Price ($)", "date_sold", "  ", "ÉTAT"] {
            let once = standardize_column_name(raw);
            assert_eq!(standardize_column_name(&once), once);
        }
    }

    #[test]
    fn test_empty_names_get_positional_name() {
        let renames = standardize_column_names(&["price", "  ", "###"]).unwrap();
        let names: Vec<&str> = renames.iter().map(|r| r.standardized.as_str()).collect();
        assert_eq!(names, vec!["price", "column_2", "column_3"]);
    }

    #[test]
    fn test_collision_is_reported() {
        let err = standardize_column_names(&["Price", " price "]).unwrap_err();
        match err {
            NormalizationError::ColumnCollision {
                name,
                first,
                second,
            } => {
                assert_eq!(name, "price");
                assert_eq!(first, "Price");
                assert_eq!(second, " price ");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rename_tracks_changes() {
        let renames = standardize_column_names(&["qty", "Qty Sold"]).unwrap();
        assert!(!renames[0].is_changed());
        assert!(renames[1].is_changed());
    }
}
