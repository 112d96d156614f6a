//! CSV writer for cleaned tables.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{Column, CsvWriter, DataFrame, DataType, PolarsResult, SerWriter};

use crate::common::ensure_parent_dir;

/// Returns a copy of `df` with every column cast to text.
pub fn to_text_frame(df: &DataFrame) -> Result<DataFrame> {
    let columns = df
        .get_columns()
        .iter()
        .map(|column| column.cast(&DataType::String))
        .collect::<PolarsResult<Vec<Column>>>()
        .context("cast columns to text")?;
    DataFrame::new(columns).context("rebuild text frame")
}

/// Writes `df` as CSV with a header row to any writer.
pub fn write_csv_to<W: Write>(df: &DataFrame, writer: W) -> Result<()> {
    let mut text = to_text_frame(df)?;
    CsvWriter::new(writer)
        .include_header(true)
        .finish(&mut text)
        .context("serialize CSV")?;
    Ok(())
}

/// Writes `df` as CSV to `path`, creating parent directories as needed.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_csv_to(df, &mut writer).with_context(|| format!("write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote CSV"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_to_text_frame_casts_numbers() {
        let df = df! {
            "qty" => &[1i64, 2],
            "price" => &[2.5f64, 10.0],
        }
        .unwrap();

        let text = to_text_frame(&df).unwrap();

        for column in text.get_columns() {
            assert_eq!(column.dtype(), &DataType::String);
        }
        assert_eq!(text.column("qty").unwrap().str().unwrap().get(1), Some("2"));
    }

    #[test]
    fn test_write_csv_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/processed/sales_data_clean.csv");
        let df = df! { "price" => &["1"] }.unwrap();

        write_csv(&df, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "price\n1\n");
    }
}
