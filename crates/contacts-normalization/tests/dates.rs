//! Tests for birth-date disambiguation.

use contacts_model::{DateStrategy, FailurePolicy};
use contacts_normalization::dates::{
    CanonicalDate, DateDisambiguator, DateOutcome, FormattedDate, OverrideTable,
};
use proptest::prelude::*;

fn apply(raw: &str) -> String {
    let table = OverrideTable::curated();
    DateDisambiguator::new(&table, FailurePolicy::ReturnOriginal)
        .format_str(raw)
        .value
        .unwrap()
}

fn preview(raw: &str) -> String {
    let table = OverrideTable::curated();
    DateDisambiguator::new(&table, FailurePolicy::ReturnDiagnostic)
        .format_str(raw)
        .value
        .unwrap()
}

fn strategy(raw: &str, table: &OverrideTable) -> Option<DateStrategy> {
    DateDisambiguator::new(table, FailurePolicy::ReturnOriginal)
        .format_str(raw)
        .strategy()
}

#[test]
fn eight_digits_day_first() {
    assert_eq!(apply("19071999"), "19/07/1999");
    assert_eq!(apply("01012000"), "01/01/2000");
}

#[test]
fn eight_digits_fall_back_to_year_first() {
    let empty = OverrideTable::empty();
    assert_eq!(apply("19990719"), "19/07/1999");
    assert_eq!(strategy("19990719", &empty), Some(DateStrategy::YearMonthDay8));
    assert_eq!(apply("1999-07-19"), "19/07/1999");
}

#[test]
fn eight_digits_valid_in_neither_order_fail() {
    // DDMMYYYY gives month 99, YYYYMMDD gives month 99 too.
    assert_eq!(apply("99999999"), "99999999");
    assert_eq!(apply("45/13/1990"), "45/13/1990");
}

#[test]
fn digit_count_decides_before_separators() {
    // Six digits: DDMMYY reads day 57 and fails without trying the separators.
    assert_eq!(apply("5/7/1985"), "5/7/1985");
    // Seven digits: DMMYYYY reads 1, 01, 1990.
    assert_eq!(apply("10/1/1990"), "01/01/1990");
}

#[test]
fn known_correction_wins_over_everything() {
    assert_eq!(apply("2022003"), "03/01/2022");
    assert_eq!(apply(" 2022003 "), "03/01/2022");

    let table = OverrideTable::from_pairs([("2022003", "01/01/2001")]).unwrap();
    let formatted = DateDisambiguator::new(&table, FailurePolicy::ReturnOriginal).format_str("2022003");
    assert_eq!(formatted.value.as_deref(), Some("03/01/2022"));
    assert_eq!(
        formatted.outcome,
        DateOutcome::Converted(DateStrategy::KnownCorrection)
    );
}

#[test]
fn two_digit_years_use_century_threshold() {
    assert_eq!(apply("150167"), "15/01/1967");
    assert_eq!(apply("10567"), "01/05/1967");
    assert_eq!(apply("010129"), "01/01/2029");
    assert_eq!(apply("010130"), "01/01/1930");
}

#[test]
fn seven_digits_single_day() {
    let empty = OverrideTable::empty();
    assert_eq!(apply("9041991"), "09/04/1991");
    assert_eq!(strategy("9041991", &empty), Some(DateStrategy::DayMonthYear7));
    assert_eq!(
        strategy("9041991", &OverrideTable::curated()),
        Some(DateStrategy::Override)
    );
}

#[test]
fn override_beats_the_cascade() {
    let table = OverrideTable::from_pairs([("150167", "01/01/2001")]).unwrap();
    let formatted = DateDisambiguator::new(&table, FailurePolicy::ReturnOriginal).format_str("150167");
    assert_eq!(formatted.value.as_deref(), Some("01/01/2001"));
    assert_eq!(formatted.outcome, DateOutcome::Converted(DateStrategy::Override));
}

#[test]
fn override_lookup_uses_trimmed_token() {
    let table = OverrideTable::from_pairs([("150167", "01/01/2001")]).unwrap();
    let formatted = DateDisambiguator::new(&table, FailurePolicy::ReturnOriginal).format_str(" 150167\t");
    assert_eq!(formatted.value.as_deref(), Some("01/01/2001"));
}

#[test]
fn built_in_overrides_agree_with_the_cascade() {
    let empty = OverrideTable::empty();
    for table in [OverrideTable::curated(), OverrideTable::inline()] {
        for (raw, date) in table.iter() {
            let cascade = DateDisambiguator::new(&empty, FailurePolicy::ReturnOriginal).format_str(raw);
            assert_eq!(cascade.value, Some(date.to_string()), "{raw}");
        }
    }
}

#[test]
fn delimited_forms() {
    assert_eq!(apply("5/7/85"), "05/07/1985");
    assert_eq!(apply("5-7-85"), "05/07/1985");
    assert_eq!(apply("5.7.85"), "05/07/1985");
    assert_eq!(apply("5/7/29"), "05/07/2029");
}

#[test]
fn canonical_strings_are_stable() {
    assert_eq!(apply("19/07/1999"), "19/07/1999");
    assert_eq!(apply("01/01/1900"), "01/01/1900");
    assert_eq!(apply("31/12/2030"), "31/12/2030");
}

#[test]
fn no_calendar_check() {
    assert_eq!(apply("31/02/1999"), "31/02/1999");
    let date: CanonicalDate = "31/02/1999".parse().unwrap();
    assert!(date.to_naive_date().is_none());
}

#[test]
fn years_outside_window_fail() {
    assert_eq!(apply("01011899"), "01011899");
    assert_eq!(apply("01012031"), "01012031");
}

#[test]
fn blank_and_missing() {
    let table = OverrideTable::curated();
    let formatter = DateDisambiguator::new(&table, FailurePolicy::ReturnDiagnostic);
    assert_eq!(
        formatter.format(None),
        FormattedDate {
            value: None,
            outcome: DateOutcome::Blank,
        }
    );
    let blank = formatter.format(Some("   "));
    assert_eq!(blank.value.as_deref(), Some("   "));
    assert_eq!(blank.outcome, DateOutcome::Blank);
    assert!(!blank.matched());
}

#[test]
fn failures_follow_policy() {
    assert_eq!(apply("123"), "123");
    assert_eq!(apply(" abc "), " abc ");
    assert_eq!(preview("123"), "Error: 123");
    assert_eq!(preview(" abc "), "Error: abc");
    assert_eq!(preview("45/13/1990"), "Error: 45/13/1990");
    assert_eq!(preview("1999 /07/019"), "Error: 1999 /07/019");
}

proptest! {
    #[test]
    fn valid_day_first_tokens_format_to_themselves(
        day in 1u32..=31,
        month in 1u32..=12,
        year in 1900i32..=2030,
    ) {
        let raw = format!("{day:02}{month:02}{year}");
        let expected = format!("{day:02}/{month:02}/{year}");
        prop_assert_eq!(apply(&raw), expected.clone());
        // The canonical form is a fixed point.
        prop_assert_eq!(apply(&expected), expected);
    }

    #[test]
    fn formatting_never_panics(raw in any::<String>()) {
        let table = OverrideTable::curated();
        for policy in [FailurePolicy::ReturnOriginal, FailurePolicy::ReturnDiagnostic] {
            let formatted = DateDisambiguator::new(&table, policy).format_str(&raw);
            if formatted.matched() {
                let value = formatted.value.unwrap();
                prop_assert!(value.parse::<CanonicalDate>().is_ok());
            }
        }
    }

    #[test]
    fn original_policy_returns_failures_untouched(raw in "[a-z ]{0,12}") {
        prop_assert_eq!(apply(&raw), raw);
    }
}
