//! CLI argument definitions for the sales data cleaner.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use sales_normalization::{CleaningOptions, DEFAULT_MISSING_MARKER, FillPolicy};

/// Input path used when none is given.
pub const DEFAULT_INPUT: &str = "data/raw/sales_data_raw.csv";

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "data/processed/sales_data_clean.csv";

#[derive(Parser)]
#[command(
    name = "salesclean",
    version,
    about = "Clean a raw sales CSV file",
    long_about = "Clean a raw sales CSV file.\n\n\
                  Standardizes column names, tidies product and category text,\n\
                  drops rows with negative prices or quantities and fills\n\
                  missing values before writing a cleaned CSV."
)]
pub struct Cli {
    #[command(flatten)]
    pub clean: CleanArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CleanArgs {
    /// Raw sales CSV to clean.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the cleaned CSV. Parent directories are created.
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// How missing prices are filled.
    #[arg(long = "fill-policy", value_enum, default_value = "sentinel")]
    pub fill_policy: FillPolicyArg,

    /// Text written into missing price and date cells.
    #[arg(long = "missing-marker", value_name = "TEXT", default_value = DEFAULT_MISSING_MARKER)]
    pub missing_marker: String,

    /// Number of cleaned rows to print before saving (0 disables).
    #[arg(long = "preview", value_name = "ROWS", default_value_t = 10)]
    pub preview: usize,

    /// Clean and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write the cleaning report as JSON to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

impl CleanArgs {
    pub fn cleaning_options(&self) -> CleaningOptions {
        CleaningOptions::new()
            .with_fill_policy(self.fill_policy.into())
            .with_missing_marker(self.missing_marker.clone())
    }
}

/// CLI fill policy choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FillPolicyArg {
    /// Missing marker for prices and dates, 0 for quantities.
    Sentinel,
    /// Median price for prices, 0 for quantities.
    Median,
}

impl From<FillPolicyArg> for FillPolicy {
    fn from(arg: FillPolicyArg) -> Self {
        match arg {
            FillPolicyArg::Sentinel => FillPolicy::Sentinel,
            FillPolicyArg::Median => FillPolicy::Median,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
