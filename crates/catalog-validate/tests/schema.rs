//! Schema validation against full tables.

use catalog_model::{CatalogOptions, Table};
use catalog_validate::validate_schema;

fn table_with(columns: &[&str]) -> Table {
    Table::new(columns.iter().map(|name| (*name).to_string()).collect())
}

#[test]
fn export_with_required_columns_passes() {
    let table = table_with(&[
        "Handle",
        "Title",
        "Body (HTML)",
        "Vendor",
        "Variant SKU",
        "Image Src",
    ]);
    let check = validate_schema(&table, &CatalogOptions::default());
    assert!(check.is_valid());
}

#[test]
fn missing_image_column_is_reported() {
    let table = table_with(&["Handle", "Title", "Body (HTML)", "Vendor"]);
    let check = validate_schema(&table, &CatalogOptions::default());
    assert!(!check.is_valid());
    assert_eq!(check.missing.len(), 1);
    assert!(check.missing.contains("Image Src"));
}

#[test]
fn unrelated_file_misses_everything() {
    let table = table_with(&["id", "name", "price"]);
    let check = validate_schema(&table, &CatalogOptions::default());
    assert_eq!(check.missing.len(), 5);
}
