//! Output generation for cleaned product exports.
//!
//! Exports are written as comma-separated text with every field quoted and a
//! UTF-8 byte order mark, so spreadsheet applications pick the right encoding.

mod csv_writer;
mod error;

pub use csv_writer::{
    CSV_EXTENSION, UTF8_BOM, default_output_path, with_csv_extension, write_catalog_csv,
    write_catalog_csv_to,
};
pub use error::{OutputError, Result};
