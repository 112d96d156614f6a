//! CSV reading utilities.

mod encoding;
mod reader;

pub use encoding::{DecodedText, decode_bytes};
pub use reader::{read_sales_csv, read_sales_csv_from_bytes};
