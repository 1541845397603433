use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use contacts_model::{CommentReport, DateColumnReport, PhoneCleanupReport};
use contacts_normalization::{DateOutcome, DatePreviewRow};

use crate::types::{ColumnsResult, CommentsResult, DatesResult, PhonesResult};

pub fn print_columns(result: &ColumnsResult) {
    println!("Input: {}", result.input.display());
    println!("Rows: {}", result.rows);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Non-empty"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (idx, (name, filled)) in result.columns.iter().enumerate() {
        table.add_row(vec![
            dim_cell(idx + 1),
            Cell::new(name),
            fill_cell(*filled, result.rows),
        ]);
    }
    println!("{table}");
}

pub fn print_dates(result: &DatesResult) {
    match result {
        DatesResult::Preview { column, rows } => print_date_preview(column, rows),
        DatesResult::Applied { report, output } => {
            println!("Output: {}", output.display());
            print_date_report(report);
        }
    }
}

fn print_date_preview(column: &str, rows: &[DatePreviewRow]) {
    println!("Preview: {column}");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Original"),
        header_cell("Formatted"),
        header_cell("Rule"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in rows {
        let original = match &row.original {
            Some(value) => Cell::new(value),
            None => dim_cell("(missing)"),
        };
        let formatted = match (&row.formatted, row.outcome) {
            (Some(value), DateOutcome::Converted(_)) => Cell::new(value).fg(Color::Green),
            (Some(value), DateOutcome::Unresolved) => Cell::new(value).fg(Color::Red),
            (Some(value), DateOutcome::Blank) => dim_cell(value),
            (None, _) => dim_cell("-"),
        };
        table.add_row(vec![
            dim_cell(row.row + 1),
            original,
            formatted,
            outcome_cell(row.outcome),
        ]);
    }
    println!("{table}");
}

fn print_date_report(report: &DateColumnReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell(&report.column)]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows"), Cell::new(report.total)]);
    table.add_row(vec![
        Cell::new("Converted"),
        Cell::new(report.converted).fg(Color::Green),
    ]);
    table.add_row(vec![Cell::new("Blank"), dim_cell(report.blank)]);
    table.add_row(vec![Cell::new("Unresolved"), count_cell(report.failed, Color::Red)]);
    table.add_row(vec![
        Cell::new("Not on calendar"),
        count_cell(report.calendar_invalid, Color::Yellow),
    ]);
    for (strategy, count) in &report.by_strategy {
        table.add_row(vec![dim_cell(format!("  {strategy}")), dim_cell(count)]);
    }
    table.add_row(vec![
        Cell::new("Success").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}%", report.success_ratio() * 100.0)).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if report.failures.is_empty() {
        return;
    }
    let mut failures = Table::new();
    failures.set_header(vec![header_cell("Row"), header_cell("Unresolved value")]);
    apply_table_style(&mut failures);
    align_column(&mut failures, 0, CellAlignment::Right);
    for failure in &report.failures {
        failures.add_row(vec![
            dim_cell(failure.row + 1),
            Cell::new(&failure.value).fg(Color::Red),
        ]);
    }
    println!();
    if report.failed > report.failures.len() {
        println!(
            "Unresolved (first {} of {}):",
            report.failures.len(),
            report.failed
        );
    } else {
        println!("Unresolved:");
    }
    println!("{failures}");
}

pub fn print_phones(result: &PhonesResult) {
    println!("Output: {}", result.output.display());
    if let Some(path) = &result.merged {
        println!("Merged: {}", path.display());
    }
    print_phone_report(&result.report);
}

fn print_phone_report(report: &PhoneCleanupReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Step"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows"), Cell::new(report.rows)]);
    table.add_row(vec![
        Cell::new("Columns"),
        Cell::new(report.columns.join(", ")),
    ]);
    table.add_row(vec![Cell::new("Leading 1 removed"), dim_cell(report.normalized)]);
    table.add_row(vec![Cell::new("Numbers found"), Cell::new(report.total_numbers)]);
    table.add_row(vec![Cell::new("Unique numbers"), Cell::new(report.unique_numbers)]);
    table.add_row(vec![
        Cell::new("Duplicates removed"),
        count_cell(report.duplicates_removed, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Invalid removed"),
        count_cell(report.invalid_removed, Color::Red),
    ]);
    table.add_row(vec![Cell::new("Values shifted"), dim_cell(report.cells_shifted)]);
    table.add_row(vec![
        Cell::new("Remaining").add_attribute(Attribute::Bold),
        Cell::new(report.remaining)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_comments(result: &CommentsResult) {
    match result {
        CommentsResult::Preview { lines } => {
            for line in lines {
                println!("{line}");
            }
        }
        CommentsResult::Built { report, output } => {
            println!("Output: {}", output.display());
            print_comment_report(report);
        }
    }
}

fn print_comment_report(report: &CommentReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell(&report.column)]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows"), Cell::new(report.rows)]);
    table.add_row(vec![Cell::new("With comment"), fill_cell(report.non_empty, report.rows)]);
    if !report.missing_columns.is_empty() {
        table.add_row(vec![
            Cell::new("Skipped columns"),
            Cell::new(report.missing_columns.join(", ")).fg(Color::Yellow),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn outcome_cell(outcome: DateOutcome) -> Cell {
    match outcome {
        DateOutcome::Converted(strategy) => Cell::new(strategy.as_str()),
        DateOutcome::Blank => dim_cell("blank"),
        DateOutcome::Unresolved => Cell::new("unresolved")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn fill_cell(filled: usize, rows: usize) -> Cell {
    if filled == 0 {
        dim_cell(filled)
    } else if filled < rows {
        Cell::new(filled).fg(Color::Yellow)
    } else {
        Cell::new(filled)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
