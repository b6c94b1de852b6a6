//! Required column checks.
//!
//! A file is accepted as a product export when every required column is
//! present in its header. Matching is exact: export headers are fixed strings.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use catalog_model::{CatalogOptions, Table};

/// Outcome of a schema check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaCheck {
    /// Required columns absent from the table.
    pub missing: BTreeSet<String>,
}

impl SchemaCheck {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

impl fmt::Display for SchemaCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("all required columns present");
        }
        let missing: Vec<&str> = self.missing.iter().map(String::as_str).collect();
        write!(f, "missing columns: {}", missing.join(", "))
    }
}

/// Check that every column in `required` exists in `columns`.
pub fn check_required_columns<S: AsRef<str>>(columns: &[String], required: &[S]) -> SchemaCheck {
    let present: BTreeSet<&str> = columns.iter().map(String::as_str).collect();
    let missing = required
        .iter()
        .map(S::as_ref)
        .filter(|name| !present.contains(name))
        .map(str::to_string)
        .collect();
    SchemaCheck { missing }
}

/// Check a table against the required columns configured in `options`.
pub fn validate_schema(table: &Table, options: &CatalogOptions) -> SchemaCheck {
    let check = check_required_columns(table.columns(), options.required_columns.as_slice());
    debug!(
        columns = table.width(),
        missing = check.missing.len(),
        "schema check"
    );
    check
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_every_missing_column() {
        let columns = vec!["Handle".to_string(), "Vendor".to_string()];
        let check = check_required_columns(&columns, &["Handle", "Title", "Image Src"]);
        assert!(!check.is_valid());
        assert_eq!(
            check.missing.iter().collect::<Vec<_>>(),
            vec!["Image Src", "Title"]
        );
        assert_eq!(check.to_string(), "missing columns: Image Src, Title");
    }

    #[test]
    fn matching_is_case_sensitive() {
        let columns = vec!["handle".to_string()];
        let check = check_required_columns(&columns, &["Handle"]);
        assert!(check.missing.contains("Handle"));
    }
}
