//! Column names of the product export format.

/// Column that groups variant rows under one product.
pub const HANDLE: &str = "Handle";
pub const TITLE: &str = "Title";
pub const BODY_HTML: &str = "Body (HTML)";
pub const VENDOR: &str = "Vendor";
pub const IMAGE_SRC: &str = "Image Src";
pub const OPTION1_VALUE: &str = "Option1 Value";
pub const OPTION2_VALUE: &str = "Option2 Value";
pub const OPTION3_VALUE: &str = "Option3 Value";

/// Derived column written on export.
pub const FULL_TITLE: &str = "Full Title";

/// Columns a file must carry to be treated as a product export.
pub const REQUIRED_COLUMNS: &[&str] = &[HANDLE, TITLE, BODY_HTML, VENDOR, IMAGE_SRC];

/// Substring (matched case-insensitively) that marks a metafield column.
pub const METAFIELD_MARKER: &str = "metafield";

/// Revision of [`DEFAULT_FILL_COLUMNS`], carried by `LoadReport`. Bump
/// whenever the list changes.
pub const DEFAULT_FILL_COLUMNS_VERSION: u32 = 1;

/// Product-level columns that only the first row of a product carries and
/// that are pre-selected for forward-fill.
pub const DEFAULT_FILL_COLUMNS: &[&str] = &[
    "Title",
    "Body (HTML)",
    "Vendor",
    "Product Category",
    "Type",
    "Tags",
    "Published",
    "Option1 Name",
    "Option2 Name",
    "Option3 Name",
    "Gift Card",
    "SEO Title",
    "SEO Description",
    "Google Shopping / Google Product Category",
    "Google Shopping / Gender",
    "Google Shopping / Age Group",
    "Google Shopping / MPN",
    "Google Shopping / Condition",
    "Google Shopping / Custom Product",
    "Included / United States",
    "Price / United States",
    "Compare At Price / United States",
    "Included / International",
    "Price / International",
    "Compare At Price / International",
    "Status",
];

/// Returns true when `name` is one of the default fill columns.
pub fn is_default_fill_column(name: &str) -> bool {
    DEFAULT_FILL_COLUMNS.contains(&name)
}

/// Returns true when `name` looks like a metafield column.
pub fn is_metafield_column(name: &str) -> bool {
    name.to_ascii_lowercase().contains(METAFIELD_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metafield_match_ignores_case() {
        assert!(is_metafield_column("Color (product.metafields.shopify.color-pattern)"));
        assert!(is_metafield_column("MetaField: custom.fabric"));
        assert!(!is_metafield_column("Variant SKU"));
    }

    #[test]
    fn default_list_has_no_duplicates() {
        let mut names: Vec<&str> = DEFAULT_FILL_COLUMNS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DEFAULT_FILL_COLUMNS.len());
        assert!(!is_default_fill_column(HANDLE));
        assert!(is_default_fill_column(VENDOR));
    }
}
