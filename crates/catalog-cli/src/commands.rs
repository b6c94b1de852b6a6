use anyhow::{Context, Result};
use tracing::info_span;

use catalog_ingest::{IngestOptions, read_catalog_csv};
use catalog_model::{CatalogOptions, LoadReport};
use catalog_output::default_output_path;
use catalog_validate::validate_schema;

use crate::cli::{CleanArgs, InputArgs};
use crate::session::Session;
use crate::types::{CheckResult, CleanResult, ColumnListing};

fn ingest_options(args: &InputArgs) -> IngestOptions {
    if args.keep_na_tokens {
        IngestOptions::keep_na_tokens()
    } else {
        IngestOptions::default()
    }
}

fn load_session(args: &InputArgs) -> Result<(Session, LoadReport)> {
    let mut session = Session::new(CatalogOptions::default(), ingest_options(args));
    let report = session
        .load(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    Ok((session, report))
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("clean", input = %args.source.input.display());
    let _guard = span.enter();

    let (mut session, load) = load_session(&args.source)?;
    let selection = session.resolve_selection(&args.columns, &args.exclude)?;
    let fill = session.fill(&selection).context("forward-fill")?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.source.input));
    let save = session
        .save(&output)
        .with_context(|| format!("save {}", output.display()))?;
    Ok(CleanResult {
        load,
        selection,
        fill,
        save,
    })
}

pub fn run_columns(args: &InputArgs) -> Result<ColumnListing> {
    let (session, load) = load_session(args)?;
    Ok(ColumnListing {
        candidates: session.candidates()?,
        default_selection: session.default_selection()?,
        default_columns_version: load.default_columns_version,
    })
}

pub fn run_check(args: &InputArgs) -> Result<CheckResult> {
    let table = read_catalog_csv(&args.input, &ingest_options(args))
        .with_context(|| format!("read {}", args.input.display()))?;
    let check = validate_schema(&table, &CatalogOptions::default());
    Ok(CheckResult {
        columns: table.width(),
        rows: table.height(),
        check,
    })
}
