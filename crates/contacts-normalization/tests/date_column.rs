//! Tests for the column-level date passes.

use contacts_ingest::{read_table, token_column, write_table};
use contacts_model::{ContactsError, DateStrategy, FailurePolicy};
use contacts_normalization::dates::{
    DateOptions, DateOutcome, OverrideTable, format_date_column, preview_date_column,
};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

fn births() -> DataFrame {
    let cells: Vec<Option<String>> = [
        Some("19071999"),
        Some("9041991"),
        None,
        Some("  "),
        Some("150167"),
        Some("abc"),
        Some("2022003"),
        Some("5/7/85"),
    ]
    .iter()
    .map(|cell| cell.map(str::to_string))
    .collect();
    let id: Vec<String> = (1..=cells.len()).map(|idx| format!("{idx:03}")).collect();
    DataFrame::new(vec![
        Series::new("CEDULA".into(), id).into_column(),
        Series::new("FECHA_NAC".into(), cells).into_column(),
    ])
    .unwrap()
}

#[test]
fn apply_rewrites_column_and_folds_report() {
    let mut df = births();
    let report = format_date_column(&mut df, "FECHA_NAC", &DateOptions::default()).unwrap();

    let values = token_column(&df, "FECHA_NAC").unwrap();
    let expected: Vec<Option<String>> = [
        Some("19/07/1999"),
        Some("09/04/1991"),
        None,
        Some("  "),
        Some("15/01/1967"),
        Some("abc"),
        Some("03/01/2022"),
        Some("05/07/1985"),
    ]
    .iter()
    .map(|cell| cell.map(str::to_string))
    .collect();
    assert_eq!(values, expected);

    assert_eq!(report.column, "FECHA_NAC");
    assert_eq!(report.total, 8);
    assert_eq!(report.converted, 5);
    assert_eq!(report.blank, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.calendar_invalid, 0);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].row, 5);
    assert_eq!(report.failures[0].value, "abc");
    assert_eq!(report.by_strategy.get(&DateStrategy::Override), Some(&2));
    assert_eq!(report.by_strategy.get(&DateStrategy::DayMonthYear6), Some(&1));
    assert_eq!(report.by_strategy.get(&DateStrategy::KnownCorrection), Some(&1));
    assert_eq!(report.by_strategy.get(&DateStrategy::Delimited), Some(&1));
}

#[test]
fn impossible_calendar_dates_are_counted_but_kept() {
    let cells: Vec<Option<String>> = ["31021999", "29022000", "30/02/85", "290201"]
        .iter()
        .map(|cell| Some(cell.to_string()))
        .collect();
    let mut df = DataFrame::new(vec![
        Series::new("FECHA_NAC".into(), cells).into_column(),
    ])
    .unwrap();
    let options = DateOptions::default().with_overrides(OverrideTable::empty());
    let report = format_date_column(&mut df, "FECHA_NAC", &options).unwrap();

    assert_eq!(report.converted, 4);
    assert_eq!(report.failed, 0);
    assert_eq!(report.calendar_invalid, 3);
    assert_eq!(
        token_column(&df, "FECHA_NAC").unwrap(),
        vec![
            Some("31/02/1999".to_string()),
            Some("29/02/2000".to_string()),
            Some("30/02/1985".to_string()),
            Some("29/02/2001".to_string()),
        ]
    );
}

#[test]
fn diagnostic_policy_marks_failures() {
    let mut df = births();
    let options = DateOptions::default()
        .with_overrides(OverrideTable::empty())
        .with_failure_policy(FailurePolicy::ReturnDiagnostic);
    let report = format_date_column(&mut df, "FECHA_NAC", &options).unwrap();
    assert_eq!(
        token_column(&df, "FECHA_NAC").unwrap()[5].as_deref(),
        Some("Error: abc")
    );
    assert_eq!(report.by_strategy.get(&DateStrategy::Override), None);
    assert_eq!(report.by_strategy.get(&DateStrategy::DayMonthYear8), Some(&1));
    assert_eq!(report.by_strategy.get(&DateStrategy::DayMonthYear7), Some(&1));
}

#[test]
fn preview_leaves_table_untouched() {
    let df = births();
    let rows = preview_date_column(&df, "FECHA_NAC", 6, &OverrideTable::inline()).unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].formatted.as_deref(), Some("19/07/1999"));
    assert_eq!(rows[2].original, None);
    assert_eq!(rows[2].outcome, DateOutcome::Blank);
    assert_eq!(rows[5].formatted.as_deref(), Some("Error: abc"));
    assert_eq!(rows[5].outcome, DateOutcome::Unresolved);
    assert_eq!(
        token_column(&df, "FECHA_NAC").unwrap()[0].as_deref(),
        Some("19071999")
    );
}

#[test]
fn unknown_column_is_an_error() {
    let mut df = births();
    let err = format_date_column(&mut df, "FECHA", &DateOptions::default()).unwrap_err();
    assert!(matches!(err, ContactsError::MissingColumn(name) if name == "FECHA"));
}

#[test]
fn csv_round_trip_keeps_leading_zeros() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("clientes.csv");
    std::fs::write(&input, "CEDULA,FECHA_NAC\n001,09041991\n002,150167\n003,\n").unwrap();

    let mut df = read_table(&input).unwrap();
    let report = format_date_column(&mut df, "FECHA_NAC", &DateOptions::default()).unwrap();
    assert_eq!(report.converted, 2);

    let output = dir.path().join("out").join("clientes_fechas.csv");
    write_table(&df, &output).unwrap();
    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "CEDULA,FECHA_NAC\n001,09/04/1991\n002,15/01/1967\n003,\n"
    );
}

#[test]
fn override_file_extends_built_in_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overrides.json");
    std::fs::write(&path, r#"{"150167": "01/01/2001"}"#).unwrap();

    let mut table = OverrideTable::inline();
    table.extend(OverrideTable::from_json_file(&path).unwrap());
    assert_eq!(table.len(), 20);

    let rows = preview_date_column(&births(), "FECHA_NAC", 5, &table).unwrap();
    assert_eq!(rows[4].formatted.as_deref(), Some("01/01/2001"));
    assert_eq!(
        rows[4].outcome,
        DateOutcome::Converted(DateStrategy::Override)
    );
}

#[test]
fn override_file_with_bad_value_names_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overrides.json");
    std::fs::write(&path, r#"{"150167": "1967-01-15"}"#).unwrap();
    let err = OverrideTable::from_json_file(&path).unwrap_err();
    assert!(err.to_string().contains("150167"));
}
