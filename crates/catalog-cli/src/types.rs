use serde::Serialize;

use catalog_model::{ColumnSelection, FillReport, LoadReport, SaveReport};
use catalog_validate::SchemaCheck;

/// Everything `clean` did, in the order it happened.
#[derive(Debug, Serialize)]
pub struct CleanResult {
    pub load: LoadReport,
    pub selection: ColumnSelection,
    pub fill: FillReport,
    pub save: SaveReport,
}

impl CleanResult {
    /// Pretty JSON printed by `clean --json`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug)]
pub struct ColumnListing {
    pub candidates: Vec<String>,
    pub default_selection: ColumnSelection,
    pub default_columns_version: u32,
}

#[derive(Debug)]
pub struct CheckResult {
    pub columns: usize,
    pub rows: usize,
    pub check: SchemaCheck,
}

impl CheckResult {
    /// Process exit code: 1 when required columns are missing.
    pub fn exit_code(&self) -> i32 {
        if self.check.is_valid() { 0 } else { 1 }
    }
}
