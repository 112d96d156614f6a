//! Column roles inferred from standardized column names.

use std::fmt;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

/// Semantic category of a column. Decides which cleaning rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Price,
    Quantity,
    ProductName,
    Category,
    Date,
    Unclassified,
}

impl ColumnRole {
    /// Infers the role of a standardized column name.
    ///
    /// The name is split into words at every non-alphanumeric character and a
    /// role applies when one word matches exactly, so `date_sold` is a date
    /// but `updated_by` is not. First match wins: price, quantity, product
    /// name, category, date.
    pub fn infer(name: &str) -> Self {
        let name = name.to_lowercase();
        let words: Vec<&str> = name
            .split(|ch: char| !ch.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .collect();
        let has_word = |candidates: &[&str]| words.iter().any(|word| candidates.contains(word));
        if has_word(&["price"]) {
            Self::Price
        } else if has_word(&["qty", "quantity"]) {
            Self::Quantity
        } else if has_word(&["product", "prodname"]) {
            Self::ProductName
        } else if has_word(&["category"]) {
            Self::Category
        } else if has_word(&["date"]) {
            Self::Date
        } else {
            Self::Unclassified
        }
    }

    /// Price and quantity columns hold numbers that must not be negative.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Price | Self::Quantity)
    }

    /// Product name and category columns get whitespace normalization.
    pub fn is_text(self) -> bool {
        matches!(self, Self::ProductName | Self::Category)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Quantity => "quantity",
            Self::ProductName => "product_name",
            Self::Category => "category",
            Self::Date => "date",
            Self::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column name paired with its inferred role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoleAssignment {
    pub column: String,
    pub role: ColumnRole,
}

/// Infers the role of every column in frame order.
pub fn column_roles(df: &DataFrame) -> Vec<ColumnRoleAssignment> {
    df.get_column_names()
        .into_iter()
        .map(|name| ColumnRoleAssignment {
            column: name.to_string(),
            role: ColumnRole::infer(name),
        })
        .collect()
}

/// Names of the columns whose role satisfies `predicate`.
pub(crate) fn columns_where(df: &DataFrame, predicate: impl Fn(ColumnRole) -> bool) -> Vec<String> {
    column_roles(df)
        .into_iter()
        .filter(|assignment| predicate(assignment.role))
        .map(|assignment| assignment.column)
        .collect()
}
