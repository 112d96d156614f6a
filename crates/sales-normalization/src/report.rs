use serde::{Deserialize, Serialize};

use crate::normalization::{ColumnFillSummary, ColumnRename};
use crate::options::FillPolicy;
use crate::roles::ColumnRoleAssignment;

/// Summary of one cleaning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub fill_policy: FillPolicy,
    pub input_rows: usize,
    pub output_rows: usize,
    pub dropped_rows: usize,
    pub renames: Vec<ColumnRename>,
    pub roles: Vec<ColumnRoleAssignment>,
    pub fills: Vec<ColumnFillSummary>,
}

impl CleaningReport {
    pub fn renamed_columns(&self) -> usize {
        self.renames.iter().filter(|r| r.is_changed()).count()
    }

    pub fn filled_cells(&self) -> usize {
        self.fills.iter().map(|f| f.filled).sum()
    }

    pub fn non_numeric_cells(&self) -> usize {
        self.fills.iter().map(|f| f.non_numeric).sum()
    }
}
