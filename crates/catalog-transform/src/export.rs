//! Export preparation.
//!
//! Turns a filled table into its final shape, in this order:
//! 1. clear the single-variant placeholder from the first option column
//! 2. rewrite the description column as plain text
//! 3. derive the full-title column and insert it second
//! 4. drop columns that are empty in every row
//! 5. replace every missing value with the sentinel
//! 6. order columns as parent key, full title, title, then the rest

use tracing::debug;

use catalog_model::{CatalogOptions, ExportReport, Table};

use crate::normalization::{apply_sentinel, clean_description};

/// Separator between the parts of a derived full title.
pub const FULL_TITLE_SEPARATOR: &str = " - ";

/// Clear cells of `column` that hold exactly `placeholder`.
pub fn clear_placeholder(table: &mut Table, column: &str, placeholder: &str) -> usize {
    let Some(idx) = table.column_index(column) else {
        return 0;
    };
    let mut cleared = 0usize;
    for cell in table.column_cells_mut(idx) {
        if cell.as_deref() == Some(placeholder) {
            *cell = None;
            cleared += 1;
        }
    }
    cleared
}

/// Rewrite `column` as plain text. Returns how many non-empty cells were
/// processed; cells that clean down to nothing become missing.
pub fn clean_description_column(table: &mut Table, column: &str) -> usize {
    let Some(idx) = table.column_index(column) else {
        return 0;
    };
    let mut cleaned = 0usize;
    for cell in table.column_cells_mut(idx) {
        let Some(raw) = cell.as_deref() else {
            continue;
        };
        let text = clean_description(raw);
        cleaned += 1;
        *cell = if text.is_empty() { None } else { Some(text) };
    }
    cleaned
}

/// Join the non-blank parts of a title with [`FULL_TITLE_SEPARATOR`].
pub fn full_title<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    parts
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(FULL_TITLE_SEPARATOR)
}

/// Insert the derived full-title column at position 2, replacing any
/// existing column of that name. Absent source columns contribute nothing.
pub fn derive_full_title(table: &mut Table, options: &CatalogOptions) {
    table.remove_column(&options.full_title_column);
    let sources: Vec<Option<usize>> = std::iter::once(&options.title_column)
        .chain(options.option_columns.iter())
        .map(|name| table.column_index(name))
        .collect();
    let values = table
        .rows()
        .iter()
        .map(|row| {
            let title = full_title(
                sources
                    .iter()
                    .map(|idx| idx.and_then(|idx| row.get(idx)).and_then(Option::as_deref)),
            );
            if title.is_empty() { None } else { Some(title) }
        })
        .collect();
    table.insert_column(1, options.full_title_column.clone(), values);
}

/// Drop every column whose cells are all blank. Returns the dropped names.
pub fn prune_empty_columns(table: &mut Table) -> Vec<String> {
    let empty: Vec<String> = (0..table.width())
        .filter(|&idx| table.is_column_blank(idx))
        .map(|idx| table.columns()[idx].clone())
        .collect();
    for name in &empty {
        table.remove_column(name);
    }
    empty
}

/// Move the parent key, full title and title to the front, keeping the
/// relative order of every other column.
pub fn reorder_columns(table: &mut Table, options: &CatalogOptions) {
    let leading = [
        options.parent_key.as_str(),
        options.full_title_column.as_str(),
        options.title_column.as_str(),
    ];
    let mut order: Vec<String> = leading
        .iter()
        .filter(|name| table.has_column(name))
        .map(|name| (*name).to_string())
        .collect();
    order.extend(
        table
            .columns()
            .iter()
            .filter(|name| !leading.contains(&name.as_str()))
            .cloned(),
    );
    table.select_columns(&order);
}

/// Produce the export-ready copy of `table`.
pub fn prepare_export(table: &Table, options: &CatalogOptions) -> (Table, ExportReport) {
    let mut export = table.clone();

    let placeholders_cleared = options.primary_option_column().map_or(0, |column| {
        clear_placeholder(&mut export, column, &options.single_variant_placeholder)
    });
    let descriptions_cleaned = clean_description_column(&mut export, &options.description_column);
    derive_full_title(&mut export, options);
    let pruned_columns = prune_empty_columns(&mut export);
    let sentinel_cells = apply_sentinel(
        &mut export,
        &options.sentinel,
        options.missing_tokens.as_slice(),
    );
    reorder_columns(&mut export, options);

    debug!(
        placeholders_cleared,
        descriptions_cleaned,
        pruned = pruned_columns.len(),
        sentinel_cells,
        "prepared export"
    );
    let report = ExportReport {
        placeholders_cleared,
        descriptions_cleaned,
        pruned_columns,
        sentinel_cells,
        columns: export.columns().to_vec(),
        rows: export.height(),
    };
    (export, report)
}
