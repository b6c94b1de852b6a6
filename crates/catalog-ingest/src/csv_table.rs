use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use catalog_model::{Cell, Table};

use crate::error::{IngestError, Result};

/// Raw values read as missing cells by default, matching the NA tokens
/// common spreadsheet and dataframe tools recognise.
pub const DEFAULT_NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options controlling how raw CSV fields become cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Field values (compared exactly) read as missing cells. Empty fields
    /// are always missing.
    pub na_tokens: BTreeSet<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            na_tokens: DEFAULT_NA_TOKENS
                .iter()
                .map(|token| (*token).to_string())
                .collect(),
        }
    }
}

impl IngestOptions {
    /// Only empty fields are missing; every other value is kept verbatim.
    pub fn keep_na_tokens() -> Self {
        Self {
            na_tokens: BTreeSet::new(),
        }
    }

    fn to_cell(&self, raw: &str) -> Cell {
        if raw.is_empty() || self.na_tokens.contains(raw) {
            None
        } else {
            Some(raw.to_string())
        }
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Give every header a unique, non-empty name: blanks become `Unnamed: N`
/// and repeats get a `.1`, `.2`, ... suffix.
fn dedupe_headers<I>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for (idx, header) in headers.into_iter().enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            header
        };
        let mut name = base.clone();
        let mut suffix = 1usize;
        while seen.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(name.clone());
        unique.push(name);
    }
    unique
}

/// Read a product export from disk.
///
/// # Errors
///
/// Returns an error if the path is missing or not a regular file, the
/// content is not valid CSV, or the file has no header row.
pub fn read_catalog_csv(path: &Path, options: &IngestOptions) -> Result<Table> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if !metadata.is_file() {
        return Err(IngestError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_catalog_csv_from(file, path, options)
}

/// Read a product export from any reader. `source` is only used in errors.
///
/// # Errors
///
/// Returns an error if the content is not valid CSV, has no header row, or a
/// record is wider than the header.
pub fn read_catalog_csv_from<R: Read>(
    reader: R,
    source: &Path,
    options: &IngestOptions,
) -> Result<Table> {
    let parse_error = |e: csv::Error| IngestError::CsvParse {
        path: source.to_path_buf(),
        source: e,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record.map_err(parse_error)?,
        None => {
            return Err(IngestError::EmptyCsv {
                path: source.to_path_buf(),
            });
        }
    };
    let columns = dedupe_headers(header.iter().map(normalize_header));
    let width = columns.len();
    let mut table = Table::new(columns);

    for record in records {
        let record = record.map_err(parse_error)?;
        if record.len() > width {
            return Err(IngestError::RaggedRecord {
                path: source.to_path_buf(),
                line: record.position().map_or(0, csv::Position::line),
                found: record.len(),
                expected: width,
            });
        }
        table.push_row(record.iter().map(|value| options.to_cell(value)).collect());
    }

    debug!(
        path = %source.display(),
        rows = table.height(),
        columns = table.width(),
        "read catalog csv"
    );
    Ok(table)
}
