//! Output generation for cleaned sales tables.
//!
//! Tables are written as CSV with a header row and every cell as text.
//! Missing parent directories are created. Writes are not atomic: a failure
//! part way through leaves a partial file behind.

pub mod common;
pub mod writer;

pub use common::ensure_parent_dir;
pub use writer::{to_text_frame, write_csv, write_csv_to};
