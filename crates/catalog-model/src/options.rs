//! Options describing the export format conventions a run relies on.

use serde::{Deserialize, Serialize};

use crate::columns;

/// Column names and placeholder values used by the fill and export stages.
///
/// The defaults describe the product export format; nothing in the pipeline
/// hardcodes these names outside of this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogOptions {
    /// Column whose value identifies a product group.
    pub parent_key: String,
    pub title_column: String,
    /// Free-text column holding HTML markup.
    pub description_column: String,
    /// Variant option value columns, in order. The first one carries the
    /// single-variant placeholder.
    pub option_columns: Vec<String>,
    /// Name of the derived column inserted on export.
    pub full_title_column: String,
    /// Value marking a product without real variants.
    pub single_variant_placeholder: String,
    /// Text written for every missing value in the export.
    pub sentinel: String,
    /// Cell values treated as missing during export normalization.
    pub missing_tokens: Vec<String>,
    /// Columns the schema validator requires.
    pub required_columns: Vec<String>,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            parent_key: columns::HANDLE.to_string(),
            title_column: columns::TITLE.to_string(),
            description_column: columns::BODY_HTML.to_string(),
            option_columns: vec![
                columns::OPTION1_VALUE.to_string(),
                columns::OPTION2_VALUE.to_string(),
                columns::OPTION3_VALUE.to_string(),
            ],
            full_title_column: columns::FULL_TITLE.to_string(),
            single_variant_placeholder: "Default Title".to_string(),
            sentinel: "N/A".to_string(),
            missing_tokens: vec!["nan".to_string(), "NaN".to_string(), "None".to_string()],
            required_columns: columns::REQUIRED_COLUMNS
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        }
    }
}

impl CatalogOptions {
    /// The first option value column, if any are configured.
    pub fn primary_option_column(&self) -> Option<&str> {
        self.option_columns.first().map(String::as_str)
    }
}
