use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_cli::types::{CheckResult, CleanResult, ColumnListing};

pub fn print_clean_summary(result: &CleanResult) {
    println!("{}", result.load);
    println!("{}", result.fill);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Cells filled")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (column, count) in &result.fill.filled {
        table.add_row(vec![Cell::new(column), count_cell(*count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.fill.total_filled()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let export = &result.save.export;
    let mut facts = Table::new();
    facts.set_header(vec![header_cell("Export"), header_cell("Value")]);
    apply_table_style(&mut facts);
    align_column(&mut facts, 1, CellAlignment::Right);
    facts.add_row(vec![Cell::new("Rows"), Cell::new(export.rows)]);
    facts.add_row(vec![Cell::new("Columns"), Cell::new(export.columns.len())]);
    facts.add_row(vec![
        Cell::new("Placeholders cleared"),
        count_cell(export.placeholders_cleared),
    ]);
    facts.add_row(vec![
        Cell::new("Descriptions cleaned"),
        count_cell(export.descriptions_cleaned),
    ]);
    facts.add_row(vec![
        Cell::new("Empty columns dropped"),
        count_cell(export.pruned_columns.len()),
    ]);
    facts.add_row(vec![
        Cell::new("Missing values marked"),
        count_cell(export.sentinel_cells),
    ]);
    println!("{facts}");
    if !export.pruned_columns.is_empty() {
        println!("Dropped: {}", export.pruned_columns.join(", "));
    }
    println!("{}", result.save);
}

pub fn print_columns(listing: &ColumnListing) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Default")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for column in &listing.candidates {
        let marker = if listing.default_selection.contains(column) {
            Cell::new("✓")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![Cell::new(column), marker]);
    }
    println!("{table}");
    println!(
        "{} of {} columns selected by default (fill column list v{})",
        listing.default_selection.len(),
        listing.candidates.len(),
        listing.default_columns_version
    );
}

pub fn print_check(result: &CheckResult) {
    if result.check.is_valid() {
        println!(
            "OK: {} rows, {} columns, all required columns present",
            result.rows, result.columns
        );
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Missing column")]);
    apply_table_style(&mut table);
    for column in &result.check.missing {
        table.add_row(vec![Cell::new(column).fg(Color::Red)]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Green)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
