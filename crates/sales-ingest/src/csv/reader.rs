//! CSV file reading into an all-text DataFrame.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

use super::encoding::decode_bytes;

/// Reads a sales CSV file into a Polars DataFrame.
///
/// The first row is the header. Every column is read as `String`; empty
/// fields become nulls. Header names are kept exactly as written so the
/// cleaning pipeline sees the raw names.
pub fn read_sales_csv(path: &Path) -> Result<DataFrame> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::from_io(path, e))?;
    read_sales_csv_from_bytes(path, &bytes)
}

/// Parses raw CSV bytes as if they had been read from `path`.
///
/// `path` is only used for error messages and log fields.
pub fn read_sales_csv_from_bytes(path: &Path, bytes: &[u8]) -> Result<DataFrame> {
    let decoded = decode_bytes(bytes);
    if decoded.used_fallback() {
        tracing::warn!(
            path = %path.display(),
            encoding = decoded.encoding_name(),
            "file is not valid UTF-8, decoded with fallback encoding"
        );
    } else {
        tracing::debug!(
            path = %path.display(),
            encoding = decoded.encoding_name(),
            "decoded CSV text"
        );
    }
    if decoded.had_errors {
        tracing::warn!(
            path = %path.display(),
            "malformed byte sequences were replaced while decoding"
        );
    }

    if decoded.text.trim().is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(decoded.text.into_bytes()))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded CSV"
    );
    Ok(df)
}
