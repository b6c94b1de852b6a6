//! Missing-value normalization.

use catalog_model::Table;

/// True when `value` counts as missing: absent, blank or whitespace-only, or
/// exactly one of `tokens`.
pub fn is_missing_value<S: AsRef<str>>(value: Option<&str>, tokens: &[S]) -> bool {
    match value {
        None => true,
        Some(text) => text.trim().is_empty() || tokens.iter().any(|token| token.as_ref() == text),
    }
}

/// Replace every missing cell in `table` with `sentinel`. Returns the number
/// of cells rewritten. Afterwards no cell of the table is `None`.
///
/// Idempotent as long as `sentinel` itself is not missing.
pub fn apply_sentinel<S: AsRef<str>>(table: &mut Table, sentinel: &str, tokens: &[S]) -> usize {
    let mut replaced = 0usize;
    for cell in table.cells_mut() {
        if is_missing_value(cell.as_deref(), tokens) {
            if cell.as_deref() != Some(sentinel) {
                replaced += 1;
            }
            *cell = Some(sentinel.to_string());
        }
    }
    replaced
}
