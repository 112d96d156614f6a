use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sales_ingest::read_sales_csv;
use sales_normalization::clean_table;
use sales_output::{ensure_parent_dir, write_csv};

use crate::cli::CleanArgs;
use crate::summary::print_preview;
use crate::types::CleanResult;

/// Reads, cleans and writes one sales file.
pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("run", input = %args.input.display());
    let _guard = span.enter();
    let options = args.cleaning_options();

    println!("Loading {}", args.input.display());
    let raw = read_sales_csv(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;

    println!("Cleaning {} rows", raw.height());
    let cleaned = clean_table(&raw, &options).context("clean sales table")?;

    if args.preview > 0 {
        print_preview(&cleaned.data, args.preview)?;
    }

    let output = if args.dry_run {
        info!("dry run, output not written");
        None
    } else {
        println!("Saving {}", args.output.display());
        write_csv(&cleaned.data, &args.output)?;
        Some(args.output.clone())
    };

    let report_path = match &args.report {
        Some(path) => {
            ensure_parent_dir(path)?;
            let json =
                serde_json::to_string_pretty(&cleaned.report).context("serialize report")?;
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "wrote cleaning report");
            Some(path.clone())
        }
        None => None,
    };

    Ok(CleanResult {
        input: args.input.clone(),
        output,
        report: cleaned.report,
        report_path,
    })
}
