//! End-to-end fill and export preparation on small exports.

use catalog_model::{CatalogOptions, ColumnSelection, Table};
use catalog_transform::normalization::clean_description;
use catalog_transform::{forward_fill, prepare_export};

fn cell(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn build(columns: &[&str], rows: &[&[&str]]) -> Table {
    Table::from_rows(
        columns.iter().map(|name| (*name).to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|value| cell(value)).collect())
            .collect(),
    )
}

#[test]
fn vendor_is_filled_per_handle() {
    let table = build(
        &["Handle", "Vendor"],
        &[&["p1", "Acme"], &["p1", ""], &["p1", ""], &["p2", "Globex"]],
    );
    let targets: ColumnSelection = ["Vendor"].into_iter().collect();

    let (filled, report) = forward_fill(&table, "Handle", &targets).expect("fill");

    assert_eq!(
        filled.column_values("Vendor").expect("vendor column"),
        vec![Some("Acme"), Some("Acme"), Some("Acme"), Some("Globex")]
    );
    assert_eq!(report.to_string(), "Forward-filled 1 columns by Handle");
}

#[test]
fn unselected_columns_are_not_filled() {
    let table = build(
        &["Handle", "Vendor", "Tags"],
        &[&["p1", "Acme", "summer"], &["p1", "", ""]],
    );
    let targets: ColumnSelection = ["Vendor"].into_iter().collect();

    let (filled, _) = forward_fill(&table, "Handle", &targets).expect("fill");

    assert_eq!(filled.value(1, "Vendor"), Some("Acme"));
    assert_eq!(filled.value(1, "Tags"), None);
}

#[test]
fn default_title_column_is_pruned_when_only_placeholder() {
    let table = build(
        &["Handle", "Title", "Option1 Value"],
        &[&["mug", "Mug", "Default Title"], &["cup", "Cup", "Default Title"]],
    );

    let (export, report) = prepare_export(&table, &CatalogOptions::default());

    assert_eq!(report.placeholders_cleared, 2);
    assert_eq!(report.pruned_columns, vec!["Option1 Value".to_string()]);
    assert_eq!(export.columns(), ["Handle", "Full Title", "Title"]);
    assert_eq!(export.value(0, "Full Title"), Some("Mug"));
}

#[test]
fn cleared_placeholder_becomes_sentinel_when_column_survives() {
    let table = build(
        &["Handle", "Title", "Option1 Value"],
        &[&["mug", "Mug", "Default Title"], &["shirt", "Shirt", "Red"]],
    );

    let (export, report) = prepare_export(&table, &CatalogOptions::default());

    assert!(report.pruned_columns.is_empty());
    assert_eq!(export.value(0, "Option1 Value"), Some("N/A"));
    assert_eq!(export.value(1, "Full Title"), Some("Shirt - Red"));
}

#[test]
fn description_example() {
    assert_eq!(
        clean_description("<p>Hello&nbsp;World</p><br>Line2"),
        "Hello World\nLine2"
    );
}

#[test]
fn full_export_shape() {
    let body = "<p>Soft&nbsp;cotton</p>";
    let table = build(
        &[
            "Handle",
            "Title",
            "Body (HTML)",
            "Vendor",
            "Option1 Value",
            "Option2 Value",
            "Image Src",
            "Variant SKU",
        ],
        &[
            &["p1", "Shirt", body, "Acme", "Red", "", "a.jpg", "S1"],
            &["p1", "Shirt", body, "Acme", "Blue", "", "", "S2"],
            &["p2", "Mug", "", "Globex", "Default Title", "", "b.jpg", "nan"],
        ],
    );

    let (export, report) = prepare_export(&table, &CatalogOptions::default());

    assert_eq!(
        export.columns(),
        [
            "Handle",
            "Full Title",
            "Title",
            "Body (HTML)",
            "Vendor",
            "Option1 Value",
            "Image Src",
            "Variant SKU",
        ]
    );
    assert_eq!(
        export.column_values("Full Title").expect("full title"),
        vec![Some("Shirt - Red"), Some("Shirt - Blue"), Some("Mug")]
    );
    assert_eq!(
        export.column_values("Body (HTML)").expect("body"),
        vec![Some("Soft cotton"), Some("Soft cotton"), Some("N/A")]
    );
    assert_eq!(export.value(1, "Image Src"), Some("N/A"));
    assert_eq!(export.value(2, "Option1 Value"), Some("N/A"));
    assert_eq!(export.value(2, "Variant SKU"), Some("N/A"));
    assert!(export.rows().iter().flatten().all(Option::is_some));

    assert_eq!(report.placeholders_cleared, 1);
    assert_eq!(report.descriptions_cleaned, 2);
    assert_eq!(report.pruned_columns, vec!["Option2 Value".to_string()]);
    assert_eq!(report.sentinel_cells, 4);
    assert_eq!(report.rows, 3);

    // the source table is left as it was
    assert_eq!(table.value(0, "Body (HTML)"), Some(body));
}
