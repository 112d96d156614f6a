//! Sales data ingestion utilities.
//!
//! This crate loads raw sales CSV files into Polars DataFrames with every
//! column read as text, so that no value is reinterpreted before cleaning.
//!
//! # Features
//!
//! - **CSV Loading**: header row plus data rows, all cells kept as strings
//! - **Encoding Detection**: BOM-selected UTF-8/UTF-16, strict UTF-8, then a
//!   Windows-1252 fallback for legacy spreadsheet exports
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sales_ingest::read_sales_csv;
//!
//! let df = read_sales_csv(Path::new("data/raw/sales_data_raw.csv"))?;
//! println!("{} rows", df.height());
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{DecodedText, decode_bytes, read_sales_csv, read_sales_csv_from_bytes};
