use std::fs;
use std::path::{Path, PathBuf};

use catalog_cli::{Session, SessionError};
use catalog_ingest::IngestError;
use catalog_output::UTF8_BOM;

const EXPORT: &str = "\
Handle,Title,Body (HTML),Vendor,Option1 Name,Option1 Value,Image Src,Variant SKU
shirt,Shirt,<p>Soft</p>,Acme,Color,Red,a.jpg,S1
shirt,,,,,Blue,,S2
mug,Mug,,Globex,Title,Default Title,b.jpg,M1
";

fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn read_output(path: &Path) -> String {
    let bytes = fs::read(path).expect("read output");
    assert!(bytes.starts_with(UTF8_BOM));
    String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).expect("utf-8 output")
}

#[test]
fn save_without_data_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = dir.path().join("out.csv");

    let err = Session::default().save(&output).expect_err("nothing loaded");

    assert!(matches!(err, SessionError::NoData));
    assert!(!output.exists());
}

#[test]
fn load_fill_save() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path(), "products.csv", EXPORT);
    let mut session = Session::default();

    let load = session.load(&input).expect("load");
    assert_eq!(load.rows, 3);
    assert_eq!(load.groups, 2);
    assert!(!load.candidates.contains(&"Handle".to_string()));
    assert_eq!(
        load.default_selection.iter().collect::<Vec<_>>(),
        vec!["Body (HTML)", "Option1 Name", "Title", "Vendor"]
    );

    let selection = session.default_selection().expect("selection");
    let fill = session.fill(&selection).expect("fill");
    assert_eq!(fill.to_string(), "Forward-filled 4 columns by Handle");
    insta::assert_json_snapshot!(fill, @r#"
    {
      "parent_key": "Handle",
      "groups": 2,
      "filled": {
        "Body (HTML)": 1,
        "Option1 Name": 1,
        "Title": 1,
        "Vendor": 1
      }
    }
    "#);

    let save = session
        .save(&dir.path().join("products_cleaned"))
        .expect("save");
    assert_eq!(save.path, dir.path().join("products_cleaned.csv"));
    assert_eq!(save.export.placeholders_cleared, 1);
    assert_eq!(save.export.sentinel_cells, 3);
    assert!(save.export.pruned_columns.is_empty());

    let written = read_output(&save.path);
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#""Handle","Full Title","Title","Body (HTML)","Vendor","Option1 Name","Option1 Value","Image Src","Variant SKU""#,
            r#""shirt","Shirt - Red","Shirt","Soft","Acme","Color","Red","a.jpg","S1""#,
            r#""shirt","Shirt - Blue","Shirt","Soft","Acme","Color","Blue","N/A","S2""#,
            r#""mug","Mug","Mug","N/A","Globex","Title","N/A","b.jpg","M1""#,
        ]
    );
}

#[test]
fn save_can_be_repeated() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path(), "products.csv", EXPORT);
    let mut session = Session::default();
    session.load(&input).expect("load");
    let selection = session.default_selection().expect("selection");
    session.fill(&selection).expect("fill");

    let first = session.save(&dir.path().join("a.csv")).expect("first save");
    let second = session.save(&dir.path().join("b.csv")).expect("second save");

    assert_eq!(first.export, second.export);
    assert_eq!(read_output(&first.path), read_output(&second.path));
    assert_eq!(
        session.table().and_then(|table| table.value(1, "Body (HTML)")),
        Some("<p>Soft</p>")
    );
}

#[test]
fn missing_required_columns_are_listed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(
        dir.path(),
        "orders.csv",
        "Handle,Title,Body (HTML),Vendor\np1,Shirt,,Acme\n",
    );

    let err = Session::default().load(&input).expect_err("not an export");

    let SessionError::InvalidSchema { check, .. } = &err else {
        panic!("expected schema error, got {err:?}");
    };
    assert_eq!(
        check.missing.iter().collect::<Vec<_>>(),
        vec!["Image Src"]
    );
    assert!(err.to_string().ends_with("(missing columns: Image Src)"));
}

#[test]
fn failed_load_keeps_previous_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    let good = write_input(dir.path(), "products.csv", EXPORT);
    let bad = write_input(dir.path(), "orders.csv", "Name,Email\nA,a@example.com\n");
    let mut session = Session::default();
    session.load(&good).expect("load");

    assert!(session.load(&bad).is_err());
    assert!(matches!(
        session.load(&dir.path().join("absent.csv")),
        Err(SessionError::Ingest(IngestError::FileNotFound { .. }))
    ));

    assert_eq!(session.source(), Some(good.as_path()));
    assert_eq!(session.table().map(|table| table.height()), Some(3));
}

#[test]
fn empty_selection_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path(), "products.csv", EXPORT);
    let mut session = Session::default();
    session.load(&input).expect("load");

    let err = session
        .fill(&catalog_model::ColumnSelection::new())
        .expect_err("nothing selected");

    assert!(matches!(err, SessionError::NoColumnsSelected));
    assert_eq!(session.table().and_then(|table| table.value(1, "Vendor")), None);
}

#[test]
fn exclusions_trim_the_default_selection() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path(), "products.csv", EXPORT);
    let mut session = Session::default();
    session.load(&input).expect("load");

    let selection = session
        .resolve_selection(&[], &["Body (HTML)".to_string(), "Tags".to_string()])
        .expect("selection");

    assert!(!selection.contains("Body (HTML)"));
    assert_eq!(selection.len(), 3);
}
