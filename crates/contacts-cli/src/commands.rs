use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use contacts_ingest::{IngestOptions, non_empty_counts, read_table_with_options, write_table};
use contacts_model::{CommentLayout, PhoneRules};
use contacts_normalization::{
    DateOptions, OverrideTable, build_comment_column, clean_phones, format_date_column,
    merge_cleaned_phones, preview_comments, preview_date_column,
};

use crate::cli::{CommentsArgs, DatesArgs, InputArgs, PhonesArgs};
use crate::types::{ColumnsResult, CommentsResult, DatesResult, PhonesResult};

pub fn run_columns(args: &InputArgs) -> Result<ColumnsResult> {
    let df = load_input(args)?;
    let columns = non_empty_counts(&df).context("count column values")?;
    Ok(ColumnsResult {
        input: args.input.clone(),
        rows: df.height(),
        columns,
    })
}

pub fn run_dates(args: &DatesArgs) -> Result<DatesResult> {
    let span = info_span!("dates", column = %args.column);
    let _guard = span.enter();

    let mut overrides = OverrideTable::from_source(args.overrides.into());
    if let Some(path) = &args.overrides_file {
        let extra = OverrideTable::from_json_file(path)
            .with_context(|| format!("load overrides {}", path.display()))?;
        info!(path = %path.display(), entries = extra.len(), "override file loaded");
        overrides.extend(extra);
    }

    let mut df = load_input(&args.input)?;

    if let Some(limit) = args.preview {
        let rows = preview_date_column(&df, &args.column, limit, &overrides)
            .with_context(|| format!("preview column {}", args.column))?;
        return Ok(DatesResult::Preview {
            column: args.column.clone(),
            rows,
        });
    }

    let options = DateOptions::new(overrides, args.on_failure.into());
    let start = Instant::now();
    let report = format_date_column(&mut df, &args.column, &options)
        .with_context(|| format!("format column {}", args.column))?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input.input, "fechas"));
    write_table(&df, &output).with_context(|| format!("write {}", output.display()))?;
    info!(
        column = %report.column,
        converted = report.converted,
        blank = report.blank,
        failed = report.failed,
        output = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "date pass complete"
    );
    Ok(DatesResult::Applied { report, output })
}

pub fn run_phones(args: &PhonesArgs) -> Result<PhonesResult> {
    let span = info_span!("phones", id_column = %args.id_column);
    let _guard = span.enter();

    let df = load_input(&args.input)?;
    let rules = PhoneRules::default()
        .with_prefixes(args.prefixes.iter().map(|prefix| prefix.trim().to_string()))
        .with_strip_leading_one(!args.keep_leading_one);

    let start = Instant::now();
    let (cleaned, report) =
        clean_phones(&df, &args.id_column, &args.phone_columns, &rules).context("clean phones")?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input.input, "telefonos"));
    write_table(&cleaned, &output).with_context(|| format!("write {}", output.display()))?;

    let merged = match args.merge {
        Some(mode) => {
            let table = merge_cleaned_phones(
                &df,
                &cleaned,
                &args.id_column,
                &args.phone_columns,
                mode.into(),
            )
            .context("merge cleaned phones")?;
            let path = args
                .merged_output
                .clone()
                .unwrap_or_else(|| default_output(&args.input.input, "fusionado"));
            write_table(&table, &path).with_context(|| format!("write {}", path.display()))?;
            Some(path)
        }
        None => None,
    };
    info!(
        remaining = report.remaining,
        output = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "phone pass complete"
    );
    Ok(PhonesResult {
        report,
        output,
        merged,
    })
}

pub fn run_comments(args: &CommentsArgs) -> Result<CommentsResult> {
    let span = info_span!("comments");
    let _guard = span.enter();

    let content = std::fs::read_to_string(&args.layout)
        .with_context(|| format!("read layout {}", args.layout.display()))?;
    let mut layout: CommentLayout = serde_json::from_str(&content)
        .with_context(|| format!("parse layout {}", args.layout.display()))?;
    if let Some(name) = &args.column_name {
        layout = layout.with_column_name(name.clone());
    }
    if layout.segments.is_empty() {
        bail!("layout {} has no segments", args.layout.display());
    }

    let mut df = load_input(&args.input)?;
    if let Some(limit) = args.preview {
        let lines = preview_comments(&df, &layout, limit).context("preview comments")?;
        return Ok(CommentsResult::Preview { lines });
    }

    let report = build_comment_column(&mut df, &layout).context("build comment column")?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input.input, "comentarios"));
    write_table(&df, &output).with_context(|| format!("write {}", output.display()))?;
    Ok(CommentsResult::Built { report, output })
}

fn load_input(args: &InputArgs) -> Result<DataFrame> {
    if !args.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character");
    }
    let options = IngestOptions::default()
        .with_separator(args.delimiter as u8)
        .with_infer_schema(args.infer_schema);
    let start = Instant::now();
    let df = read_table_with_options(&args.input, &options)
        .with_context(|| format!("read {}", args.input.display()))?;
    info!(
        input = %args.input.display(),
        rows = df.height(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "table loaded"
    );
    Ok(df)
}

/// `<dir>/<stem>_<suffix>.csv` next to `input`.
pub fn default_output(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "salida".to_string());
    input.with_file_name(format!("{stem}_{suffix}.csv"))
}
