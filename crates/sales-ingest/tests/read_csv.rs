//! Integration tests for loading sales CSV files.

use std::fs;

use sales_ingest::{IngestError, read_sales_csv, read_sales_csv_from_bytes};

fn cell(df: &polars::prelude::DataFrame, column: &str, row: usize) -> String {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .get(row)
        .unwrap_or_default()
        .to_string()
}

#[test]
fn reads_latin1_export_with_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.csv");
    fs::write(&path, b"prodname,price\nCr\xE8me br\xFBl\xE9e,4.50\n").unwrap();

    let df = read_sales_csv(&path).expect("read legacy csv");

    assert_eq!(df.height(), 1);
    assert_eq!(cell(&df, "prodname", 0), "Crème brûlée");
    assert_eq!(cell(&df, "price", 0), "4.50");
}

#[test]
fn empty_fields_read_as_nulls() {
    let df = read_sales_csv_from_bytes(
        std::path::Path::new("inline.csv"),
        b"price,qty,date_sold\n,2,\n3,,2024-01-05\n",
    )
    .unwrap();

    let price = df.column("price").unwrap();
    assert_eq!(price.null_count(), 1);
    assert_eq!(cell(&df, "price", 0), "");
    assert_eq!(cell(&df, "date_sold", 1), "2024-01-05");
}

#[test]
fn quoted_fields_keep_commas_and_spaces() {
    let df = read_sales_csv_from_bytes(
        std::path::Path::new("inline.csv"),
        b"category,price\n\"  Home, Garden \",12\n",
    )
    .unwrap();

    assert_eq!(cell(&df, "category", 0), "  Home, Garden ");
}

#[test]
fn header_only_file_yields_empty_table() {
    let df = read_sales_csv_from_bytes(std::path::Path::new("inline.csv"), b"price,qty\n")
        .unwrap();

    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 2);
}

#[test]
fn blank_file_is_rejected() {
    let result = read_sales_csv_from_bytes(std::path::Path::new("blank.csv"), b"");

    assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
}
