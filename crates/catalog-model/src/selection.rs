//! Operator-chosen set of columns to forward-fill.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::columns::{is_default_fill_column, is_metafield_column};
use crate::options::CatalogOptions;
use crate::table::Table;

/// Set of column names selected for forward-fill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSelection {
    columns: BTreeSet<String>,
}

impl ColumnSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>) -> bool {
        self.columns.insert(column.into())
    }

    pub fn remove(&mut self, column: &str) -> bool {
        self.columns.remove(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ColumnSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ColumnSelection {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// Columns an operator may choose from, in table order.
///
/// Excludes the parent key and the derived full-title column.
pub fn candidate_columns(table: &Table, options: &CatalogOptions) -> Vec<String> {
    table
        .columns()
        .iter()
        .filter(|name| **name != options.parent_key && **name != options.full_title_column)
        .cloned()
        .collect()
}

/// Pre-selection offered to the operator: known product-level columns plus
/// every metafield column that holds at least one value.
pub fn default_selection(table: &Table, options: &CatalogOptions) -> ColumnSelection {
    candidate_columns(table, options)
        .into_iter()
        .filter(|name| {
            if is_default_fill_column(name) {
                return true;
            }
            is_metafield_column(name)
                && table
                    .column_index(name)
                    .is_some_and(|idx| !table.is_column_blank(idx))
        })
        .collect()
}
