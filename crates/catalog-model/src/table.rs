//! In-memory representation of a flat product export.
//!
//! A [`Table`] is an ordered list of named columns and an ordered list of rows.
//! Every row holds exactly one [`Cell`] per column; the constructors and
//! mutators below pad or truncate rows so that invariant cannot be broken from
//! outside the type.

use serde::{Deserialize, Serialize};

/// A nullable text value. `None` is a missing cell.
pub type Cell = Option<String>;

/// Returns true when a cell is missing or holds the empty string.
pub fn is_blank(cell: &Cell) -> bool {
    cell.as_deref().is_none_or(str::is_empty)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from rows, padding short rows with missing cells and
    /// dropping cells beyond the header width.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let mut table = Self::new(columns);
        table.rows.reserve(rows.len());
        for row in rows {
            table.push_row(row);
        }
        table
    }

    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), None);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Value of `column` in row `row`, or `None` if either is out of range or
    /// the cell is missing.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// All cells of a column in row order.
    pub fn column_values(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).and_then(|cell| cell.as_deref()))
                .collect(),
        )
    }

    /// True when every cell of the column at `idx` is blank (vacuously true
    /// for a table without rows).
    pub fn is_column_blank(&self, idx: usize) -> bool {
        self.rows
            .iter()
            .all(|row| row.get(idx).is_none_or(is_blank))
    }

    pub fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row)?.get_mut(column)
    }

    /// Mutable iterator over one column.
    pub fn column_cells_mut(&mut self, column: usize) -> impl Iterator<Item = &mut Cell> {
        self.rows.iter_mut().filter_map(move |row| row.get_mut(column))
    }

    /// Mutable iterator over every cell of the table.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.rows.iter_mut().flat_map(|row| row.iter_mut())
    }

    /// Insert a column at `index` (clamped to the current width). `values` is
    /// padded or truncated to the table height.
    pub fn insert_column(&mut self, index: usize, name: impl Into<String>, values: Vec<Cell>) {
        let index = index.min(self.columns.len());
        self.columns.insert(index, name.into());
        let mut values = values.into_iter();
        for row in &mut self.rows {
            row.insert(index, values.next().flatten());
        }
    }

    /// Remove a column by name, returning its cells.
    pub fn remove_column(&mut self, name: &str) -> Option<Vec<Cell>> {
        let idx = self.column_index(name)?;
        self.columns.remove(idx);
        Some(self.rows.iter_mut().map(|row| row.remove(idx)).collect())
    }

    /// Rearrange columns into `order`. Names not present in the table are
    /// skipped; columns not named in `order` are dropped.
    pub fn select_columns<S: AsRef<str>>(&mut self, order: &[S]) {
        let indices: Vec<usize> = order
            .iter()
            .filter_map(|name| self.column_index(name.as_ref()))
            .collect();
        self.columns = indices.iter().map(|&idx| self.columns[idx].clone()).collect();
        for row in &mut self.rows {
            let mut old = std::mem::take(row);
            *row = indices.iter().map(|&idx| old[idx].take()).collect();
        }
    }
}
