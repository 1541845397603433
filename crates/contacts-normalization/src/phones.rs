//! Phone column cleanup.
//!
//! The passes run in a fixed order over the selected phone columns:
//! normalize to bare digits, drop repeats across the whole selection, drop
//! numbers that are not valid national numbers, then pack each row's
//! surviving numbers to the left.

use std::collections::HashSet;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::info;

use contacts_common::digits_only;
use contacts_ingest::{require_column, token_column};
use contacts_model::{PhoneCleanupReport, PhoneRules, Result};

/// Phone cells laid out column by column; `grid[c][r]` is column `c`, row `r`.
type Grid = Vec<Vec<Option<String>>>;

/// Cleans the phone columns of `df`.
///
/// Returns a new table holding `id_column` followed by `phone_columns`,
/// plus the counts from each pass. The input table is not modified.
pub fn clean_phones(
    df: &DataFrame,
    id_column: &str,
    phone_columns: &[String],
    rules: &PhoneRules,
) -> Result<(DataFrame, PhoneCleanupReport)> {
    require_column(df, id_column)?;
    for name in phone_columns {
        require_column(df, name)?;
    }

    let mut report = PhoneCleanupReport {
        rows: df.height(),
        columns: phone_columns.to_vec(),
        ..PhoneCleanupReport::default()
    };

    let mut grid: Grid = Vec::with_capacity(phone_columns.len());
    for name in phone_columns {
        let cleaned = token_column(df, name)?
            .into_iter()
            .map(|token| normalize_phone(token.as_deref(), rules, &mut report.normalized))
            .collect();
        grid.push(cleaned);
    }

    dedupe_numbers(&mut grid, &mut report);
    report.invalid_removed = drop_invalid(&mut grid, rules);
    report.cells_shifted = shift_left(&mut grid, df.height());
    report.remaining = grid.iter().flatten().filter(|cell| cell.is_some()).count();

    info!(
        rows = report.rows,
        columns = phone_columns.len(),
        normalized = report.normalized,
        total = report.total_numbers,
        unique = report.unique_numbers,
        duplicates = report.duplicates_removed,
        invalid = report.invalid_removed,
        shifted = report.cells_shifted,
        remaining = report.remaining,
        "phone cleanup complete"
    );

    let mut columns: Vec<Column> = Vec::with_capacity(phone_columns.len() + 1);
    columns.push(Series::new(id_column.into(), token_column(df, id_column)?).into_column());
    for (name, cells) in phone_columns.iter().zip(grid) {
        columns.push(Series::new(name.as_str().into(), cells).into_column());
    }
    let cleaned = DataFrame::new(columns)?;
    Ok((cleaned, report))
}

/// Reduces one cell to bare digits.
///
/// Blank and digit-less cells become `None`. A leading country code `1` is
/// dropped when the rules ask for it, and counted in `stripped`.
pub fn normalize_phone(raw: Option<&str>, rules: &PhoneRules, stripped: &mut usize) -> Option<String> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    let digits = digits_only(raw);
    if digits.is_empty() {
        return None;
    }
    if rules.strip_leading_one && digits.len() > 1 && digits.starts_with('1') {
        *stripped += 1;
        return Some(digits[1..].to_string());
    }
    Some(digits)
}

/// Keeps the first occurrence of each number, column by column, top to bottom.
fn dedupe_numbers(grid: &mut Grid, report: &mut PhoneCleanupReport) {
    let mut seen: HashSet<String> = HashSet::new();
    for cells in grid.iter_mut() {
        for cell in cells.iter_mut() {
            let Some(number) = cell.as_ref() else {
                continue;
            };
            report.total_numbers += 1;
            if !seen.insert(number.clone()) {
                *cell = None;
            }
        }
    }
    report.unique_numbers = seen.len();
    report.duplicates_removed = report.total_numbers - report.unique_numbers;
}

fn drop_invalid(grid: &mut Grid, rules: &PhoneRules) -> usize {
    let mut removed = 0;
    for cell in grid.iter_mut().flatten() {
        if cell.as_deref().is_some_and(|number| !rules.accepts(number)) {
            *cell = None;
            removed += 1;
        }
    }
    removed
}

/// Moves each row's numbers into the leftmost slots, keeping their order.
/// Returns how many values changed slot.
fn shift_left(grid: &mut Grid, height: usize) -> usize {
    let mut moved = 0;
    for row in 0..height {
        let mut target = 0;
        for col in 0..grid.len() {
            let Some(number) = grid[col][row].take() else {
                continue;
            };
            if col != target {
                moved += 1;
            }
            grid[target][row] = Some(number);
            target += 1;
        }
    }
    moved
}
