//! Outcome reports for each pipeline stage.
//!
//! Each report's `Display` is the message shown to the operator.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::selection::ColumnSelection;

/// Result of loading and validating an export file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: Vec<String>,
    /// Columns the operator may select for forward-fill.
    pub candidates: Vec<String>,
    pub default_selection: ColumnSelection,
    /// Revision of the built-in fill column list behind `default_selection`.
    pub default_columns_version: u32,
    /// Number of product groups (contiguous parent-key runs).
    pub groups: usize,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loaded {} rows ({} products, {} columns) from {}",
            self.rows,
            self.groups,
            self.columns.len(),
            self.path.display()
        )
    }
}

/// Result of the forward-fill stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillReport {
    pub parent_key: String,
    pub groups: usize,
    /// Cells filled, per selected column. Every selected column has an entry.
    pub filled: BTreeMap<String, usize>,
}

impl FillReport {
    pub fn column_count(&self) -> usize {
        self.filled.len()
    }

    pub fn total_filled(&self) -> usize {
        self.filled.values().sum()
    }
}

impl fmt::Display for FillReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Forward-filled {} columns by {}",
            self.column_count(),
            self.parent_key
        )
    }
}

/// Result of export normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    pub placeholders_cleared: usize,
    pub descriptions_cleaned: usize,
    /// Columns dropped because every cell was empty, in their former order.
    pub pruned_columns: Vec<String>,
    /// Cells replaced with the sentinel.
    pub sentinel_cells: usize,
    /// Final column order.
    pub columns: Vec<String>,
    pub rows: usize,
}

/// Result of writing the cleaned export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReport {
    pub path: PathBuf,
    pub export: ExportReport,
}

impl fmt::Display for SaveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File saved to:\n{}", self.path.display())
    }
}
