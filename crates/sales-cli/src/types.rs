use std::path::PathBuf;

use sales_normalization::CleaningReport;

/// Outcome of one `salesclean` run.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub report: CleaningReport,
    pub report_path: Option<PathBuf>,
}
