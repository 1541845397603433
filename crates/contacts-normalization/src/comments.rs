//! Builds the free-text comment column from a [`CommentLayout`].

use polars::prelude::DataFrame;
use tracing::{info, warn};

use contacts_ingest::{has_column, set_string_column, token_column};
use contacts_model::{
    ColumnFormat, CommentLayout, CommentReport, CommentSegment, DOLLARS_PREFIX, PESOS_PREFIX,
    Result,
};

/// Renders one comment per row.
///
/// Returns the comments and the layout columns missing from the table,
/// which are skipped.
pub fn render_comments(df: &DataFrame, layout: &CommentLayout) -> Result<(Vec<String>, Vec<String>)> {
    let mut missing: Vec<String> = Vec::new();
    let mut sources: Vec<(&CommentSegment, Option<Vec<Option<String>>>)> =
        Vec::with_capacity(layout.segments.len());
    for segment in &layout.segments {
        match segment {
            CommentSegment::Text { .. } => sources.push((segment, None)),
            CommentSegment::Column { column, .. } => {
                if has_column(df, column) {
                    sources.push((segment, Some(token_column(df, column)?)));
                } else if !missing.contains(column) {
                    warn!(column = %column, "comment column not found, skipping");
                    missing.push(column.clone());
                }
            }
        }
    }

    let mut comments = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let mut parts: Vec<String> = Vec::with_capacity(sources.len());
        for (segment, cells) in &sources {
            let part = match (segment, cells) {
                (CommentSegment::Text { text }, _) => text.clone(),
                (
                    CommentSegment::Column {
                        format,
                        zero_as_one,
                        ..
                    },
                    Some(cells),
                ) => render_cell(cells[row].as_deref(), format, *zero_as_one),
                (CommentSegment::Column { .. }, None) => continue,
            };
            if !part.is_empty() {
                parts.push(part);
            }
        }
        comments.push(parts.join(&layout.separator));
    }
    Ok((comments, missing))
}

/// Renders one cell of a column segment. Missing and empty cells render empty.
pub fn render_cell(value: Option<&str>, format: &ColumnFormat, zero_as_one: bool) -> String {
    let Some(value) = value.filter(|value| !value.is_empty()) else {
        return String::new();
    };
    let rendered = match format {
        ColumnFormat::Plain => value.to_string(),
        ColumnFormat::Pesos => format!("{PESOS_PREFIX}{value}"),
        ColumnFormat::Dollars => format!("{DOLLARS_PREFIX}{value}"),
        ColumnFormat::Replace { replacements } => {
            replacements
                .iter()
                .filter(|replacement| !replacement.from.is_empty())
                .fold(value.to_string(), |acc, replacement| {
                    acc.replace(&replacement.from, &replacement.to)
                })
        }
    };
    if zero_as_one {
        if matches!(format, ColumnFormat::Pesos) && rendered == format!("{PESOS_PREFIX}0") {
            return format!("{PESOS_PREFIX}1");
        }
        if rendered == "0" {
            return "1".to_string();
        }
    }
    rendered
}

/// Adds (or replaces) the comment column on `df`.
pub fn build_comment_column(df: &mut DataFrame, layout: &CommentLayout) -> Result<CommentReport> {
    let (comments, missing_columns) = render_comments(df, layout)?;
    let non_empty = comments.iter().filter(|comment| !comment.is_empty()).count();
    let rows = comments.len();
    set_string_column(df, &layout.column_name, comments.into_iter().map(Some).collect())?;
    info!(
        column = %layout.column_name,
        rows,
        non_empty,
        skipped = missing_columns.len(),
        "comment column built"
    );
    Ok(CommentReport {
        column: layout.column_name.clone(),
        rows,
        non_empty,
        missing_columns,
    })
}

/// Comments for the first `limit` rows as `Fila {n}: {comment}`, `n` counted from 1.
pub fn preview_comments(df: &DataFrame, layout: &CommentLayout, limit: usize) -> Result<Vec<String>> {
    let (comments, _) = render_comments(df, layout)?;
    Ok(comments
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, comment)| format!("Fila {}: {comment}", idx + 1))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacts_model::Replacement;

    #[test]
    fn currency_prefixes() {
        assert_eq!(render_cell(Some("5000"), &ColumnFormat::Pesos, false), "RD$5000");
        assert_eq!(render_cell(Some("200"), &ColumnFormat::Dollars, false), "US$200");
        assert_eq!(render_cell(None, &ColumnFormat::Pesos, false), "");
        assert_eq!(render_cell(Some(""), &ColumnFormat::Dollars, false), "");
    }

    #[test]
    fn zero_as_one_only_for_exact_zero() {
        assert_eq!(render_cell(Some("0"), &ColumnFormat::Pesos, true), "RD$1");
        assert_eq!(render_cell(Some("0"), &ColumnFormat::Plain, true), "1");
        assert_eq!(render_cell(Some("0"), &ColumnFormat::Dollars, true), "US$0");
        assert_eq!(render_cell(Some("10"), &ColumnFormat::Pesos, true), "RD$10");
        assert_eq!(render_cell(Some("0"), &ColumnFormat::Pesos, false), "RD$0");
    }

    #[test]
    fn replacements_apply_in_order() {
        let format = ColumnFormat::Replace {
            replacements: vec![Replacement::new("A", "B"), Replacement::new("B", "C")],
        };
        assert_eq!(render_cell(Some("AB"), &format, false), "CC");
    }
}
