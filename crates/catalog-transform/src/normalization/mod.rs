//! Cell-level normalization for export.
//!
//! - **description**: HTML description to plain text
//! - **entities**: lenient HTML character reference decoding
//! - **sentinel**: missing-value detection and sentinel replacement

pub mod description;
pub mod entities;
pub mod sentinel;

pub use description::clean_description;
pub use entities::decode_entities;
pub use sentinel::{apply_sentinel, is_missing_value};
