//! Tests for merging cleaned phones back into the base table.

use contacts_ingest::{column_names, token_column};
use contacts_model::{ContactsError, MergeMode, PhoneRules};
use contacts_normalization::{clean_phones, merge_cleaned_phones};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

fn frame(columns: &[(&str, Vec<Option<&str>>)]) -> DataFrame {
    let columns = columns
        .iter()
        .map(|(name, cells)| {
            let cells: Vec<Option<String>> =
                cells.iter().map(|cell| cell.map(str::to_string)).collect();
            Series::new((*name).into(), cells).into_column()
        })
        .collect();
    DataFrame::new(columns).unwrap()
}

fn base() -> DataFrame {
    frame(&[
        ("CEDULA", vec![Some("001"), Some("002"), Some("003")]),
        ("NOMBRE", vec![Some("Ana"), Some("Luis"), Some("Rosa")]),
        ("TEL1", vec![None, Some("18095551234"), Some("8295551111")]),
        ("TEL2", vec![Some("8495552222"), None, Some("8295551111")]),
    ])
}

fn phone_columns() -> Vec<String> {
    vec!["TEL1".to_string(), "TEL2".to_string()]
}

fn cells(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|value| value.map(str::to_string)).collect()
}

#[test]
fn clean_then_merge_by_id() {
    let base = base();
    let (cleaned, _) = clean_phones(&base, "CEDULA", &phone_columns(), &PhoneRules::default()).unwrap();
    let merged =
        merge_cleaned_phones(&base, &cleaned, "CEDULA", &phone_columns(), MergeMode::ById).unwrap();

    assert_eq!(column_names(&merged), vec!["CEDULA", "NOMBRE", "TEL1", "TEL2"]);
    assert_eq!(
        token_column(&merged, "TEL1").unwrap(),
        cells(&[Some("8495552222"), Some("8095551234"), Some("8295551111")])
    );
    assert_eq!(token_column(&merged, "TEL2").unwrap(), cells(&[None, None, None]));
}

#[test]
fn by_id_leaves_unmatched_rows_empty() {
    let cleaned = frame(&[
        ("CEDULA", vec![Some("003"), Some("999")]),
        ("TEL1", vec![Some("8095550000"), Some("8095559999")]),
    ]);
    let merged =
        merge_cleaned_phones(&base(), &cleaned, "CEDULA", &phone_columns(), MergeMode::ById).unwrap();
    assert_eq!(merged.height(), 3);
    assert_eq!(column_names(&merged), vec!["CEDULA", "NOMBRE", "TEL1"]);
    assert_eq!(
        token_column(&merged, "TEL1").unwrap(),
        cells(&[None, None, Some("8095550000")])
    );
}

#[test]
fn by_id_keeps_first_cleaned_row_for_repeated_id() {
    let cleaned = frame(&[
        ("CEDULA", vec![Some("002"), Some(" 002 "), Some("001")]),
        ("TEL1", vec![Some("8095551234"), Some("8295550000"), Some("8495552222")]),
    ]);
    let merged =
        merge_cleaned_phones(&base(), &cleaned, "CEDULA", &phone_columns(), MergeMode::ById).unwrap();
    assert_eq!(merged.height(), 3);
    assert_eq!(
        token_column(&merged, "TEL1").unwrap(),
        cells(&[Some("8495552222"), Some("8095551234"), None])
    );
}

#[test]
fn append_places_columns_side_by_side() {
    let cleaned = frame(&[
        ("CEDULA", vec![Some("x"), Some("y"), Some("z")]),
        ("TEL1", vec![Some("1"), Some("2"), Some("3")]),
    ]);
    let merged =
        merge_cleaned_phones(&base(), &cleaned, "CEDULA", &phone_columns(), MergeMode::Append)
            .unwrap();
    assert_eq!(column_names(&merged), vec!["CEDULA", "NOMBRE", "TEL1"]);
    assert_eq!(
        token_column(&merged, "CEDULA").unwrap(),
        cells(&[Some("001"), Some("002"), Some("003")])
    );
    assert_eq!(
        token_column(&merged, "TEL1").unwrap(),
        cells(&[Some("1"), Some("2"), Some("3")])
    );
}

#[test]
fn append_rejects_row_count_mismatch() {
    let cleaned = frame(&[("CEDULA", vec![Some("001")]), ("TEL1", vec![None])]);
    let err = merge_cleaned_phones(&base(), &cleaned, "CEDULA", &phone_columns(), MergeMode::Append)
        .unwrap_err();
    assert!(matches!(
        err,
        ContactsError::RowCountMismatch {
            base: 3,
            cleaned: 1
        }
    ));
}
