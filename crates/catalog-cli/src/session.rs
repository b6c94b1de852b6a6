//! Operator session: the single owner of the table being cleaned.
//!
//! A shell (this crate's CLI, or any interactive front end) drives a
//! [`Session`] through `load`, `fill` and `save`. Each call returns a report
//! whose `Display` is the success message, or a [`SessionError`] whose
//! `Display` is the failure message. Presentation is left to the caller.

use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{info, info_span, warn};

use catalog_ingest::{IngestError, IngestOptions, read_catalog_csv};
use catalog_model::columns::DEFAULT_FILL_COLUMNS_VERSION;
use catalog_model::{
    CatalogOptions, ColumnSelection, ExportReport, FillReport, LoadReport, SaveReport, Table,
    candidate_columns, default_selection,
};
use catalog_output::{OutputError, with_csv_extension, write_catalog_csv};
use catalog_transform::{TransformError, count_groups, forward_fill, prepare_export};
use catalog_validate::{SchemaCheck, validate_schema};

/// Failures reported back to the operator.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No export has been loaded yet.
    #[error("no data yet: load a product export first")]
    NoData,

    /// The loaded file is not a product export.
    #[error(
        "{} does not appear to be a product export ({check})",
        path.display()
    )]
    InvalidSchema { path: PathBuf, check: SchemaCheck },

    #[error("select at least one column to forward-fill")]
    NoColumnsSelected,

    #[error("the export must include a '{column}' column to group by")]
    MissingParentKey { column: String },

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Transform(TransformError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl From<TransformError> for SessionError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::NoColumnsSelected => Self::NoColumnsSelected,
            TransformError::MissingParentKey { column } => Self::MissingParentKey { column },
            other => Self::Transform(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Default)]
pub struct Session {
    options: CatalogOptions,
    ingest: IngestOptions,
    table: Option<Table>,
    source: Option<PathBuf>,
}

impl Session {
    pub fn new(options: CatalogOptions, ingest: IngestOptions) -> Self {
        Self {
            options,
            ingest,
            table: None,
            source: None,
        }
    }

    /// The current table, if one has been loaded.
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Path the current table was loaded from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn current(&self) -> Result<&Table> {
        self.table.as_ref().ok_or(SessionError::NoData)
    }

    /// Read and validate an export, replacing the current table.
    ///
    /// On failure the previously loaded table, if any, is kept.
    ///
    /// # Errors
    ///
    /// Returns an ingest error if the file cannot be read or parsed, or
    /// [`SessionError::InvalidSchema`] if required columns are missing.
    pub fn load(&mut self, path: &Path) -> Result<LoadReport> {
        let span = info_span!("load", path = %path.display());
        let _guard = span.enter();
        let start = Instant::now();

        let table = read_catalog_csv(path, &self.ingest)?;
        let check = validate_schema(&table, &self.options);
        if !check.is_valid() {
            warn!(missing = %check, "rejected input");
            return Err(SessionError::InvalidSchema {
                path: path.to_path_buf(),
                check,
            });
        }

        let report = LoadReport {
            path: path.to_path_buf(),
            rows: table.height(),
            columns: table.columns().to_vec(),
            candidates: candidate_columns(&table, &self.options),
            default_selection: default_selection(&table, &self.options),
            default_columns_version: DEFAULT_FILL_COLUMNS_VERSION,
            groups: count_groups(&table, &self.options.parent_key).unwrap_or_default(),
        };
        info!(
            rows = report.rows,
            columns = report.columns.len(),
            groups = report.groups,
            preselected = report.default_selection.len(),
            duration_ms = start.elapsed().as_millis(),
            "load complete"
        );
        self.table = Some(table);
        self.source = Some(path.to_path_buf());
        Ok(report)
    }

    /// Columns the operator may select.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoData`] before a successful `load`.
    pub fn candidates(&self) -> Result<Vec<String>> {
        Ok(candidate_columns(self.current()?, &self.options))
    }

    /// The pre-selection offered for the current table.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoData`] before a successful `load`.
    pub fn default_selection(&self) -> Result<ColumnSelection> {
        Ok(default_selection(self.current()?, &self.options))
    }

    /// Build a selection from explicit column names, or from the default
    /// selection minus `exclude` when `columns` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoData`] before a successful `load`.
    pub fn resolve_selection(
        &self,
        columns: &[String],
        exclude: &[String],
    ) -> Result<ColumnSelection> {
        if !columns.is_empty() {
            return Ok(columns.iter().cloned().collect());
        }
        let mut selection = self.default_selection()?;
        for name in exclude {
            if !selection.remove(name) {
                warn!(column = %name, "excluded column was not selected");
            }
        }
        Ok(selection)
    }

    /// Forward-fill `selection` within each product group.
    ///
    /// The current table is replaced by the filled copy only on success.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoData`] before a successful `load`,
    /// [`SessionError::NoColumnsSelected`] for an empty selection,
    /// [`SessionError::MissingParentKey`] when the grouping column is absent,
    /// or a transform error for columns the table cannot fill.
    pub fn fill(&mut self, selection: &ColumnSelection) -> Result<FillReport> {
        let table = self.current()?;
        let span = info_span!("fill", columns = selection.len());
        let _guard = span.enter();
        let start = Instant::now();

        let (filled, report) = forward_fill(table, &self.options.parent_key, selection)?;
        info!(
            groups = report.groups,
            columns = report.column_count(),
            cells = report.total_filled(),
            duration_ms = start.elapsed().as_millis(),
            "fill complete"
        );
        self.table = Some(filled);
        Ok(report)
    }

    /// The export-ready copy of the current table.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoData`] before a successful `load`.
    pub fn export_table(&self) -> Result<(Table, ExportReport)> {
        Ok(prepare_export(self.current()?, &self.options))
    }

    /// Normalize the current table and write it to `path` (`.csv` is
    /// appended when the path has no extension).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoData`] before a successful `load`, without
    /// touching the file system, or an output error if writing fails.
    pub fn save(&self, path: &Path) -> Result<SaveReport> {
        let table = self.current()?;
        let path = with_csv_extension(path);
        let span = info_span!("save", path = %path.display());
        let _guard = span.enter();
        let start = Instant::now();

        let (export, report) = prepare_export(table, &self.options);
        write_catalog_csv(&export, &path)?;
        info!(
            rows = report.rows,
            columns = report.columns.len(),
            pruned = report.pruned_columns.len(),
            sentinel_cells = report.sentinel_cells,
            duration_ms = start.elapsed().as_millis(),
            "save complete"
        );
        Ok(SaveReport {
            path,
            export: report,
        })
    }
}
