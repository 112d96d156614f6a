//! Cleaning pipeline execution.
//!
//! Runs the cleaning stages in a fixed order on a borrowed DataFrame:
//! column names, text fields, negative row filter, missing value fill.

use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use crate::error::Result;
use crate::normalization::{
    drop_negative_rows, fill_missing_values, normalize_text_fields, standardize_columns,
};
use crate::options::CleaningOptions;
use crate::report::CleaningReport;
use crate::roles::{ColumnRole, column_roles};

/// A cleaned table and what was done to produce it.
#[derive(Debug, Clone)]
pub struct CleanedTable {
    pub data: DataFrame,
    pub report: CleaningReport,
}

/// Cleans a raw sales table.
///
/// Rows with negative prices or quantities are dropped before missing values
/// are filled, so a filled value never causes a row to be dropped. The input
/// is not modified.
pub fn clean_table(df: &DataFrame, options: &CleaningOptions) -> Result<CleanedTable> {
    options.validate()?;
    let span = info_span!(
        "clean",
        rows = df.height(),
        columns = df.width(),
        policy = %options.fill_policy
    );
    let _guard = span.enter();
    let start = Instant::now();
    let input_rows = df.height();

    let (standardized, renames) = standardize_columns(df)?;
    for rename in renames.iter().filter(|r| r.is_changed()) {
        debug!(from = %rename.original, to = %rename.standardized, "renamed column");
    }
    let roles = column_roles(&standardized);
    for assignment in roles.iter().filter(|a| a.role != ColumnRole::Unclassified) {
        debug!(column = %assignment.column, role = %assignment.role, "inferred column role");
    }
    info!(
        columns = renames.len(),
        renamed = renames.iter().filter(|r| r.is_changed()).count(),
        "standardized column names"
    );

    let normalized = normalize_text_fields(&standardized)?;

    let filtered = drop_negative_rows(&normalized)?;
    info!(
        dropped_rows = filtered.dropped_rows,
        remaining_rows = filtered.data.height(),
        "removed rows with negative values"
    );

    let filled = fill_missing_values(&filtered.data, options)?;
    info!(filled_cells = filled.filled_cells(), "filled missing values");

    let report = CleaningReport {
        fill_policy: options.fill_policy,
        input_rows,
        output_rows: filled.data.height(),
        dropped_rows: filtered.dropped_rows,
        renames,
        roles,
        fills: filled.columns,
    };
    info!(
        input_rows,
        output_rows = report.output_rows,
        duration_ms = start.elapsed().as_millis(),
        "cleaning complete"
    );
    Ok(CleanedTable {
        data: filled.data,
        report,
    })
}
