use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;

use catalog_model::Table;

use crate::error::{OutputError, Result};

/// Byte order mark prepended to every export.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Extension given to output paths that have none.
pub const CSV_EXTENSION: &str = "csv";

/// `<dir>/<stem>_cleaned.csv` next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export".to_string());
    input.with_file_name(format!("{stem}_cleaned.{CSV_EXTENSION}"))
}

/// Append `.csv` to a path without an extension.
pub fn with_csv_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(CSV_EXTENSION)
    }
}

/// Serialize `table` into `writer`: BOM, quoted header, quoted rows. Missing
/// cells are written as empty fields.
///
/// # Errors
///
/// Returns any I/O error raised by `writer`.
pub fn write_catalog_csv_to<W: Write>(table: &Table, mut writer: W) -> io::Result<W> {
    writer.write_all(UTF8_BOM)?;
    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    csv.write_record(table.columns())?;
    for row in table.rows() {
        csv.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }
    csv.flush()?;
    csv.into_inner().map_err(csv::IntoInnerError::into_error)
}

/// Write `table` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`OutputError::Write`] if the file cannot be created or written.
pub fn write_catalog_csv(table: &Table, path: &Path) -> Result<()> {
    let write_error = |source: io::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_error)?;
    let mut writer = write_catalog_csv_to(table, BufWriter::new(file)).map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "wrote catalog csv"
    );
    Ok(())
}
