//! Error types for the fill and export stages.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The grouping column is absent from the table.
    #[error("the table has no '{column}' column to group by")]
    MissingParentKey { column: String },

    /// Fill was requested with an empty selection.
    #[error("no columns selected to forward-fill")]
    NoColumnsSelected,

    /// Selected columns that the table does not have.
    #[error("unknown columns selected: {}", columns.join(", "))]
    UnknownColumns { columns: Vec<String> },

    /// The grouping column itself was selected.
    #[error("the grouping column '{column}' cannot be forward-filled")]
    ParentKeySelected { column: String },
}

pub type Result<T> = std::result::Result<T, TransformError>;
