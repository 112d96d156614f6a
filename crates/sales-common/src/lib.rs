//! Shared utilities for the sales data cleaner crates.
//!
//! This crate provides the cell helpers used across the workspace: numeric
//! parsing and formatting, blank detection and whitespace collapsing.

pub mod cells;

// Re-export commonly used functions at crate root for convenience
pub use cells::{collapse_whitespace, format_numeric, is_blank, parse_f64};
