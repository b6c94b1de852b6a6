//! Product catalog data model.
//!
//! Shared by every stage of the cleaning pipeline: the [`Table`] itself, the
//! column conventions of the export format, the operator's
//! [`ColumnSelection`], and the per-stage reports.

pub mod columns;
pub mod options;
pub mod report;
pub mod selection;
pub mod table;

pub use options::CatalogOptions;
pub use report::{ExportReport, FillReport, LoadReport, SaveReport};
pub use selection::{ColumnSelection, candidate_columns, default_selection};
pub use table::{Cell, Table, is_blank};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_report_message() {
        let mut report = FillReport {
            parent_key: "Handle".to_string(),
            groups: 2,
            ..FillReport::default()
        };
        report.filled.insert("Vendor".to_string(), 2);
        report.filled.insert("Tags".to_string(), 0);
        assert_eq!(report.to_string(), "Forward-filled 2 columns by Handle");
        assert_eq!(report.total_filled(), 2);
    }

    #[test]
    fn report_serializes() {
        let report = SaveReport {
            path: "out.csv".into(),
            export: ExportReport {
                pruned_columns: vec!["Option2 Value".to_string()],
                rows: 3,
                ..ExportReport::default()
            },
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: SaveReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
    }

    #[test]
    fn selection_serializes_as_list() {
        let selection: ColumnSelection = ["Vendor", "Tags"].into_iter().collect();
        let json = serde_json::to_string(&selection).expect("serialize selection");
        assert_eq!(json, r#"["Tags","Vendor"]"#);
    }
}
