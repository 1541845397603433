//! Puts cleaned phone columns back into the full contact table.

use std::collections::HashMap;

use polars::prelude::DataFrame;
use tracing::{debug, info};

use contacts_ingest::{column_names, has_column, require_column, set_string_column, token_column};
use contacts_model::{ContactsError, MergeMode, Result};

/// Replaces the phone columns of `base` with the cleaned ones.
///
/// `phone_columns` are dropped from a copy of `base` first. Every column of
/// `cleaned` except `id_column` is then added, either by identifier
/// ([`MergeMode::ById`], base row order kept, first cleaned row per
/// identifier wins) or row by row ([`MergeMode::Append`]).
pub fn merge_cleaned_phones(
    base: &DataFrame,
    cleaned: &DataFrame,
    id_column: &str,
    phone_columns: &[String],
    mode: MergeMode,
) -> Result<DataFrame> {
    let mut merged = base.clone();
    for name in phone_columns {
        if has_column(&merged, name) {
            merged = merged.drop(name)?;
        }
    }

    let added: Vec<String> = column_names(cleaned)
        .into_iter()
        .filter(|name| name != id_column)
        .collect();

    match mode {
        MergeMode::ById => {
            require_column(base, id_column)?;
            require_column(cleaned, id_column)?;
            let rows = rows_for_base(base, cleaned, id_column)?;
            let matched = rows.iter().filter(|row| row.is_some()).count();
            for name in &added {
                let cells = token_column(cleaned, name)?;
                let values: Vec<Option<String>> = rows
                    .iter()
                    .map(|row| row.and_then(|idx| cells[idx].clone()))
                    .collect();
                set_string_column(&mut merged, name, values)?;
            }
            info!(
                rows = merged.height(),
                matched,
                columns = added.len(),
                "phones merged by identifier"
            );
        }
        MergeMode::Append => {
            if base.height() != cleaned.height() {
                return Err(ContactsError::RowCountMismatch {
                    base: base.height(),
                    cleaned: cleaned.height(),
                });
            }
            for name in &added {
                let series = cleaned.column(name)?.as_materialized_series().clone();
                merged.with_column(series)?;
            }
            info!(
                rows = merged.height(),
                columns = added.len(),
                "phones appended"
            );
        }
    }
    Ok(merged)
}

/// For each base row, the index of the first cleaned row with the same identifier.
fn rows_for_base(base: &DataFrame, cleaned: &DataFrame, id_column: &str) -> Result<Vec<Option<usize>>> {
    let mut first_row: HashMap<String, usize> = HashMap::new();
    for (idx, id) in token_column(cleaned, id_column)?.into_iter().enumerate() {
        if let Some(id) = id {
            first_row.entry(id.trim().to_string()).or_insert(idx);
        }
    }
    debug!(identifiers = first_row.len(), "cleaned identifiers indexed");
    Ok(token_column(base, id_column)?
        .into_iter()
        .map(|id| id.and_then(|id| first_row.get(id.trim()).copied()))
        .collect())
}
