//! Resolution of raw date tokens into canonical dates.
//!
//! Tokens arrive in whatever shape data entry produced: `19071999`,
//! `9041991`, `150167`, `19/07/1999`, `1999-07-19`, `5.7.85`. The cascade
//! below tries a fixed sequence of readings and keeps the first one that
//! yields a date inside the accepted window.

use contacts_common::digits_only;
use contacts_model::{DateStrategy, FailurePolicy};

use super::canonical::{CanonicalDate, expand_two_digit_year};
use super::overrides::OverrideTable;

/// Data-entry slip for `03/01/2022` seen often enough to be fixed by name.
const KNOWN_CORRECTION_RAW: &str = "2022003";
const KNOWN_CORRECTION_DAY: u32 = 3;
const KNOWN_CORRECTION_MONTH: u32 = 1;
const KNOWN_CORRECTION_YEAR: i32 = 2022;

/// Prefix written in place of an unresolved token under
/// [`FailurePolicy::ReturnDiagnostic`].
pub const DIAGNOSTIC_PREFIX: &str = "Error: ";

/// How a single token was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOutcome {
    /// Missing or whitespace-only; passed through.
    Blank,
    Converted(DateStrategy),
    /// No strategy produced a valid date.
    Unresolved,
}

/// Result of formatting one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDate {
    /// Text to store in the cell; `None` keeps the missing marker.
    pub value: Option<String>,
    pub outcome: DateOutcome,
}

impl FormattedDate {
    /// True only when a strategy produced a canonical date.
    pub fn matched(&self) -> bool {
        matches!(self.outcome, DateOutcome::Converted(_))
    }

    pub fn strategy(&self) -> Option<DateStrategy> {
        match self.outcome {
            DateOutcome::Converted(strategy) => Some(strategy),
            _ => None,
        }
    }

    /// The canonical date behind a converted value.
    pub fn date(&self) -> Option<CanonicalDate> {
        if !self.matched() {
            return None;
        }
        self.value.as_deref()?.parse().ok()
    }

    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// Formats raw tokens against one override table and failure policy.
#[derive(Debug, Clone, Copy)]
pub struct DateDisambiguator<'a> {
    overrides: &'a OverrideTable,
    policy: FailurePolicy,
}

impl<'a> DateDisambiguator<'a> {
    pub fn new(overrides: &'a OverrideTable, policy: FailurePolicy) -> Self {
        Self { overrides, policy }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Formats one cell. Never fails: unresolved tokens are handled by the
    /// failure policy.
    pub fn format(&self, raw: Option<&str>) -> FormattedDate {
        let Some(raw) = raw else {
            return FormattedDate {
                value: None,
                outcome: DateOutcome::Blank,
            };
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FormattedDate {
                value: Some(raw.to_string()),
                outcome: DateOutcome::Blank,
            };
        }
        match resolve_date(trimmed, self.overrides) {
            Some((date, strategy)) => FormattedDate {
                value: Some(date.to_string()),
                outcome: DateOutcome::Converted(strategy),
            },
            None => {
                let value = match self.policy {
                    FailurePolicy::ReturnOriginal => raw.to_string(),
                    FailurePolicy::ReturnDiagnostic => format!("{DIAGNOSTIC_PREFIX}{trimmed}"),
                };
                FormattedDate {
                    value: Some(value),
                    outcome: DateOutcome::Unresolved,
                }
            }
        }
    }

    /// Formats a present, non-missing token.
    pub fn format_str(&self, raw: &str) -> FormattedDate {
        self.format(Some(raw))
    }
}

/// Runs the cascade on a trimmed, non-empty token.
pub fn resolve_date(
    trimmed: &str,
    overrides: &OverrideTable,
) -> Option<(CanonicalDate, DateStrategy)> {
    if trimmed == KNOWN_CORRECTION_RAW {
        let date = CanonicalDate::new(
            KNOWN_CORRECTION_DAY,
            KNOWN_CORRECTION_MONTH,
            KNOWN_CORRECTION_YEAR,
        )?;
        return Some((date, DateStrategy::KnownCorrection));
    }
    if let Some(date) = overrides.get(trimmed) {
        return Some((date, DateStrategy::Override));
    }

    let digits = digits_only(trimmed);
    match digits.len() {
        8 => read_eight(&digits),
        7 => read_positional(&digits, 1, 2, 4).map(|date| (date, DateStrategy::DayMonthYear7)),
        6 => read_positional(&digits, 2, 2, 2).map(|date| (date, DateStrategy::DayMonthYear6)),
        5 => read_positional(&digits, 1, 2, 2).map(|date| (date, DateStrategy::DayMonthYear5)),
        _ => read_delimited(trimmed).map(|date| (date, DateStrategy::Delimited)),
    }
}

fn read_eight(digits: &str) -> Option<(CanonicalDate, DateStrategy)> {
    if let Some(date) = read_positional(digits, 2, 2, 4) {
        return Some((date, DateStrategy::DayMonthYear8));
    }
    let year = slot(digits, 0, 4)? as i32;
    let month = slot(digits, 4, 6)?;
    let day = slot(digits, 6, 8)?;
    CanonicalDate::new(day, month, year).map(|date| (date, DateStrategy::YearMonthDay8))
}

/// Reads day, month and year from consecutive slots of the given widths.
/// A two-digit year goes through century inference.
fn read_positional(
    digits: &str,
    day_width: usize,
    month_width: usize,
    year_width: usize,
) -> Option<CanonicalDate> {
    let month_start = day_width;
    let year_start = month_start + month_width;
    let day = slot(digits, 0, month_start)?;
    let month = slot(digits, month_start, year_start)?;
    let year = slot(digits, year_start, year_start + year_width)? as i32;
    let year = if year_width == 2 {
        expand_two_digit_year(year)
    } else {
        year
    };
    CanonicalDate::new(day, month, year)
}

fn slot(digits: &str, start: usize, end: usize) -> Option<u32> {
    digits.get(start..end)?.parse().ok()
}

fn read_delimited(trimmed: &str) -> Option<CanonicalDate> {
    if !trimmed.contains(['/', '-', '.']) {
        return None;
    }
    let normalized = trimmed.replace(['-', '.'], "/");
    let parts: Vec<&str> = normalized.split('/').collect();
    let [raw_first, second, third] = parts.as_slice() else {
        return None;
    };
    // Year-first is decided on the untrimmed part; padded parts read day-first.
    let year_first = raw_first.len() == 4 && raw_first.chars().all(|ch| ch.is_ascii_digit());
    let (first, second, third) = (raw_first.trim(), second.trim(), third.trim());
    if year_first {
        let year = i32::try_from(unsigned(first)?).ok()?;
        return CanonicalDate::new(unsigned(third)?, unsigned(second)?, year);
    }
    let day = unsigned(first)?;
    let month = unsigned(second)?;
    let mut year = i32::try_from(unsigned(third)?).ok()?;
    if year < 100 {
        year = expand_two_digit_year(year);
    }
    CanonicalDate::new(day, month, year)
}

fn unsigned(part: &str) -> Option<u32> {
    if part.is_empty() || !part.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
