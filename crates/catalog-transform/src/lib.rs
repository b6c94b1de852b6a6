//! Product export transformation.
//!
//! - **fill**: grouped forward-fill of operator-selected columns
//! - **normalization**: description cleanup and missing-value sentinels
//! - **export**: the ordered export preparation built on both

pub mod error;
pub mod export;
pub mod fill;
pub mod normalization;

pub use error::{Result, TransformError};
pub use export::{
    clean_description_column, clear_placeholder, derive_full_title, prepare_export,
    prune_empty_columns, reorder_columns,
};
pub use fill::{count_groups, forward_fill, group_ranges};
