//! Product export ingestion.
//!
//! Reads a comma-separated export with a header row into a
//! [`catalog_model::Table`], recognising missing-value tokens on the way in.

pub mod csv_table;
pub mod error;

pub use csv_table::{DEFAULT_NA_TOKENS, IngestOptions, read_catalog_csv, read_catalog_csv_from};
pub use error::{IngestError, Result};
