//! Column access helpers shared by the cleanup passes.

use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use contacts_common::{any_to_string, any_to_token};
use contacts_model::{ContactsError, Result};

/// Column names in table order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Fails with [`ContactsError::MissingColumn`] unless `name` is in the table.
pub fn require_column(df: &DataFrame, name: &str) -> Result<()> {
    if has_column(df, name) {
        Ok(())
    } else {
        Err(ContactsError::MissingColumn(name.to_string()))
    }
}

/// Raw tokens of a column; `None` marks a missing cell.
pub fn token_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df
        .column(name)
        .map_err(|_| ContactsError::MissingColumn(name.to_string()))?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_token(series.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Cell text of a column, missing cells read as empty strings.
pub fn string_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let series = df
        .column(name)
        .map_err(|_| ContactsError::MissingColumn(name.to_string()))?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string(series.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Replaces (or adds) a text column; `None` values become nulls.
pub fn set_string_column(df: &mut DataFrame, name: &str, values: Vec<Option<String>>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

/// Non-empty cell count per column, in table order.
pub fn non_empty_counts(df: &DataFrame) -> Result<Vec<(String, usize)>> {
    let mut counts = Vec::with_capacity(df.width());
    for name in column_names(df) {
        let filled = string_column(df, &name)?
            .iter()
            .filter(|value| !value.trim().is_empty())
            .count();
        counts.push((name, filled));
    }
    Ok(counts)
}
