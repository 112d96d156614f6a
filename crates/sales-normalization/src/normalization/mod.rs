//! Cleaning stages, in pipeline order.
//!
//! Each stage takes a borrowed DataFrame and returns a new one. Stages infer
//! column roles from the current column names, so they can run on their own.

pub mod column_names;
pub mod fill;
pub mod filter;
pub mod numeric;
pub mod text;

pub use column_names::{
    ColumnRename, NAME_SEPARATOR, standardize_column_name, standardize_column_names,
    standardize_columns,
};
pub use fill::{ColumnFillSummary, FillOutcome, fill_missing_values};
pub use filter::{FilterOutcome, drop_negative_rows};
pub use numeric::{NumericCell, coerce_column, median};
pub use text::normalize_text_fields;
