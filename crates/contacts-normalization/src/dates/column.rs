//! Column-level date passes: preview and apply.

use polars::prelude::DataFrame;
use tracing::{debug, warn};

use contacts_common::redact_value;
use contacts_ingest::{set_string_column, token_column};
use contacts_model::{
    DateColumnReport, DateSettings, FailedValue, FailurePolicy, MAX_FAILURE_SAMPLES, Result,
};

use super::cascade::{DateDisambiguator, DateOutcome, FormattedDate};
use super::overrides::OverrideTable;

/// Options for rewriting a date column.
#[derive(Debug, Clone, Default)]
pub struct DateOptions {
    pub failure_policy: FailurePolicy,
    pub overrides: OverrideTable,
}

impl DateOptions {
    pub fn new(overrides: OverrideTable, failure_policy: FailurePolicy) -> Self {
        Self {
            failure_policy,
            overrides,
        }
    }

    /// Options from stored settings, starting from the named built-in table.
    pub fn from_settings(settings: &DateSettings) -> Self {
        Self {
            failure_policy: settings.failure_policy,
            overrides: OverrideTable::from_source(settings.overrides),
        }
    }

    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn disambiguator(&self) -> DateDisambiguator<'_> {
        DateDisambiguator::new(&self.overrides, self.failure_policy)
    }
}

/// One row of a date preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePreviewRow {
    /// Zero-based row position.
    pub row: usize,
    /// Raw cell; `None` for a missing cell.
    pub original: Option<String>,
    pub formatted: Option<String>,
    pub outcome: DateOutcome,
}

/// Formats the first `limit` rows of `column` without touching the table.
///
/// Unresolved tokens show up as `Error: <token>`.
pub fn preview_date_column(
    df: &DataFrame,
    column: &str,
    limit: usize,
    overrides: &OverrideTable,
) -> Result<Vec<DatePreviewRow>> {
    let tokens = token_column(df, column)?;
    let formatter = DateDisambiguator::new(overrides, FailurePolicy::ReturnDiagnostic);
    let rows = tokens
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(row, original)| {
            let FormattedDate { value, outcome } = formatter.format(original.as_deref());
            DatePreviewRow {
                row,
                original,
                formatted: value,
                outcome,
            }
        })
        .collect();
    Ok(rows)
}

/// Rewrites `column` in place as canonical dates and reports what happened.
///
/// Cells the cascade cannot resolve are written according to the failure
/// policy; nothing is rolled back.
pub fn format_date_column(
    df: &mut DataFrame,
    column: &str,
    options: &DateOptions,
) -> Result<DateColumnReport> {
    let tokens = token_column(df, column)?;
    let formatter = options.disambiguator();

    let mut values = Vec::with_capacity(tokens.len());
    let mut report = DateColumnReport::new(column);
    for (row, token) in tokens.iter().enumerate() {
        let formatted = formatter.format(token.as_deref());
        tally(&mut report, row, token.as_deref(), &formatted);
        values.push(formatted.value);
    }
    set_string_column(df, column, values)?;

    for failure in &report.failures {
        warn!(
            column,
            row = failure.row,
            value = redact_value(&failure.value),
            "unresolved date"
        );
    }
    debug!(
        column,
        total = report.total,
        converted = report.converted,
        blank = report.blank,
        failed = report.failed,
        calendar_invalid = report.calendar_invalid,
        "date column formatted"
    );
    Ok(report)
}

fn tally(report: &mut DateColumnReport, row: usize, raw: Option<&str>, formatted: &FormattedDate) {
    report.total += 1;
    match formatted.outcome {
        DateOutcome::Blank => report.blank += 1,
        DateOutcome::Converted(strategy) => {
            report.converted += 1;
            *report.by_strategy.entry(strategy).or_insert(0) += 1;
            if formatted.date().and_then(|date| date.to_naive_date()).is_none() {
                report.calendar_invalid += 1;
                warn!(
                    column = %report.column,
                    row,
                    value = redact_value(formatted.value_or_empty()),
                    "date does not exist on the calendar"
                );
            }
        }
        DateOutcome::Unresolved => {
            report.failed += 1;
            if report.failures.len() < MAX_FAILURE_SAMPLES {
                report.failures.push(FailedValue {
                    row,
                    value: raw.unwrap_or_default().to_string(),
                });
            }
        }
    }
}
