//! Grouped forward-fill.
//!
//! Exports list a product's shared fields only on its first row; the variant
//! rows that follow leave them empty. Filling walks each product group (a
//! maximal run of adjacent rows with the same parent key) and copies the last
//! non-empty value of each selected column into the empty cells below it.

use std::collections::BTreeMap;
use std::ops::Range;

use tracing::debug;

use catalog_model::{ColumnSelection, FillReport, Table, is_blank};

use crate::error::{Result, TransformError};

/// Split rows into product groups by adjacency of the key column at `key`.
///
/// Rows with an empty key never join a neighbour; each one is its own group.
pub fn group_ranges(table: &Table, key: usize) -> Vec<Range<usize>> {
    let rows = table.rows();
    let mut groups = Vec::new();
    let mut start = 0usize;
    for idx in 1..=rows.len() {
        let boundary = match (rows.get(idx), rows.get(idx - 1)) {
            (Some(current), Some(previous)) => {
                let current = current.get(key).and_then(Option::as_deref);
                let previous = previous.get(key).and_then(Option::as_deref);
                match (current, previous) {
                    (Some(a), Some(b)) => a.is_empty() || a != b,
                    _ => true,
                }
            }
            _ => true,
        };
        if boundary {
            groups.push(start..idx);
            start = idx;
        }
    }
    groups
}

/// Number of product groups under `parent_key`, or `None` when the column
/// is absent.
pub fn count_groups(table: &Table, parent_key: &str) -> Option<usize> {
    let key = table.column_index(parent_key)?;
    Some(group_ranges(table, key).len())
}

/// Resolve selected column names to indices, rejecting anything the table
/// cannot fill.
fn resolve_targets(
    table: &Table,
    parent_key: &str,
    targets: &ColumnSelection,
) -> Result<Vec<(String, usize)>> {
    if targets.is_empty() {
        return Err(TransformError::NoColumnsSelected);
    }
    if targets.contains(parent_key) {
        return Err(TransformError::ParentKeySelected {
            column: parent_key.to_string(),
        });
    }
    let mut resolved = Vec::with_capacity(targets.len());
    let mut unknown = Vec::new();
    for name in targets.iter() {
        match table.column_index(name) {
            Some(idx) => resolved.push((name.to_string(), idx)),
            None => unknown.push(name.to_string()),
        }
    }
    if !unknown.is_empty() {
        return Err(TransformError::UnknownColumns { columns: unknown });
    }
    Ok(resolved)
}

/// Forward-fill `targets` within each `parent_key` group.
///
/// Returns a filled copy; `table` is left untouched. Row order, row count and
/// the column set are preserved, and only cells of target columns change.
///
/// # Errors
///
/// Fails when `parent_key` is absent, when `targets` is empty, names the
/// parent key, or names a column the table does not have.
pub fn forward_fill(
    table: &Table,
    parent_key: &str,
    targets: &ColumnSelection,
) -> Result<(Table, FillReport)> {
    let key = table
        .column_index(parent_key)
        .ok_or_else(|| TransformError::MissingParentKey {
            column: parent_key.to_string(),
        })?;
    let targets = resolve_targets(table, parent_key, targets)?;
    let groups = group_ranges(table, key);

    let mut filled = table.clone();
    let mut counts = BTreeMap::new();
    for (name, column) in &targets {
        let mut count = 0usize;
        for group in &groups {
            let mut last: Option<String> = None;
            for row in group.clone() {
                let Some(cell) = filled.cell_mut(row, *column) else {
                    continue;
                };
                if is_blank(cell) {
                    if let Some(value) = &last {
                        *cell = Some(value.clone());
                        count += 1;
                    }
                } else {
                    last.clone_from(cell);
                }
            }
        }
        debug!(column = %name, filled = count, "forward-filled column");
        counts.insert(name.clone(), count);
    }

    let report = FillReport {
        parent_key: parent_key.to_string(),
        groups: groups.len(),
        filled: counts,
    };
    Ok((filled, report))
}
