//! Sales table cleaning crate.
//!
//! Turns a raw sales table into a cleaned one by applying a fixed sequence of
//! stateless stages. Which rule applies to a column is decided by its role,
//! inferred from the standardized column name.
//!
//! # Overview
//!
//! - **Column names**: lowercase, trimmed, punctuation runs collapsed to `_`
//! - **Text fields**: product name and category whitespace collapsed
//! - **Row filter**: rows with a negative price or quantity dropped
//! - **Missing values**: filled per role, sentinel or median policy
//!
//! # Example
//!
//! ```ignore
//! use sales_normalization::{CleaningOptions, FillPolicy, clean_table};
//!
//! let options = CleaningOptions::new().with_fill_policy(FillPolicy::Median);
//! let cleaned = clean_table(&raw_df, &options)?;
//! println!("dropped {} rows", cleaned.report.dropped_rows);
//! ```
//!
//! # Design Principles
//!
//! - **Stateless functions**: every stage borrows its input and returns a new table
//! - **Explicit coercion**: numeric cells are read into [`NumericCell`] before any
//!   fill or filter decision
//! - **No silent renames**: colliding column names are an error

mod error;
mod executor;
mod options;
mod report;
mod roles;

pub mod normalization;

// Core types
pub use options::{CleaningOptions, DEFAULT_MISSING_MARKER, FillPolicy, QUANTITY_FILL_VALUE};
pub use report::CleaningReport;
pub use roles::{ColumnRole, ColumnRoleAssignment, column_roles};

// Error type
pub use error::{NormalizationError, Result};

// Stages
pub use normalization::{
    ColumnFillSummary, ColumnRename, FillOutcome, FilterOutcome, NumericCell, drop_negative_rows,
    fill_missing_values, normalize_text_fields, standardize_column_name, standardize_column_names,
    standardize_columns,
};

// Execution
pub use executor::{CleanedTable, clean_table};
