//! The canonical `DD/MM/YYYY` date.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Earliest accepted year.
pub const MIN_YEAR: i32 = 1900;
/// Latest accepted year.
pub const MAX_YEAR: i32 = 2030;
/// Two-digit years at or above this value belong to the 1900s, below it to the 2000s.
pub const CENTURY_THRESHOLD: i32 = 30;

/// A business-valid date rendered as `DD/MM/YYYY`.
///
/// Day is in 1..=31, month in 1..=12 and year in 1900..=2030. The day is
/// not checked against the month, so `31/02/1999` is a valid value here;
/// [`CanonicalDate::to_naive_date`] is the calendar-checked view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CanonicalDate {
    /// Builds a date if every field is inside the accepted window.
    pub fn new(day: u32, month: u32, year: i32) -> Option<Self> {
        let valid = (1..=31).contains(&day)
            && (1..=12).contains(&month)
            && (MIN_YEAR..=MAX_YEAR).contains(&year);
        valid.then_some(Self { year, month, day })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The same date as a calendar date, if it exists on the calendar.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Expands a two-digit year with the fixed 30 threshold.
pub fn expand_two_digit_year(short: i32) -> i32 {
    if short >= CENTURY_THRESHOLD {
        1900 + short
    } else {
        2000 + short
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}

/// Parse error for [`CanonicalDate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCanonicalDateError(String);

impl fmt::Display for ParseCanonicalDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseCanonicalDateError {}

impl FromStr for CanonicalDate {
    type Err = ParseCanonicalDateError;

    /// Parses exactly `DD/MM/YYYY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(ParseCanonicalDateError(format!(
                "expected DD/MM/YYYY, got '{s}'"
            )));
        };
        if day.len() != 2 || month.len() != 2 || year.len() != 4 {
            return Err(ParseCanonicalDateError(format!(
                "expected DD/MM/YYYY, got '{s}'"
            )));
        }
        let field = |text: &str| -> Result<u32, ParseCanonicalDateError> {
            if !text.chars().all(|ch| ch.is_ascii_digit()) {
                return Err(ParseCanonicalDateError(format!(
                    "non-digit field '{text}' in '{s}'"
                )));
            }
            text.parse::<u32>()
                .map_err(|err| ParseCanonicalDateError(format!("{err} in '{s}'")))
        };
        let day = field(day)?;
        let month = field(month)?;
        let year = field(year)? as i32;
        CanonicalDate::new(day, month, year).ok_or_else(|| {
            ParseCanonicalDateError(format!("date '{s}' is outside the accepted range"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_day_and_month() {
        let date = CanonicalDate::new(3, 1, 2022).unwrap();
        assert_eq!(date.to_string(), "03/01/2022");
    }

    #[test]
    fn rejects_fields_out_of_window() {
        assert!(CanonicalDate::new(0, 1, 2000).is_none());
        assert!(CanonicalDate::new(32, 1, 2000).is_none());
        assert!(CanonicalDate::new(1, 13, 2000).is_none());
        assert!(CanonicalDate::new(1, 1, 1899).is_none());
        assert!(CanonicalDate::new(1, 1, 2031).is_none());
        assert!(CanonicalDate::new(31, 12, 2030).is_some());
        assert!(CanonicalDate::new(1, 1, 1900).is_some());
    }

    #[test]
    fn no_calendar_check_until_converted() {
        let date = CanonicalDate::new(31, 2, 1999).unwrap();
        assert_eq!(date.to_string(), "31/02/1999");
        assert!(date.to_naive_date().is_none());

        let leap = CanonicalDate::new(29, 2, 2000).unwrap();
        assert_eq!(
            leap.to_naive_date(),
            NaiveDate::from_ymd_opt(2000, 2, 29)
        );
    }

    #[test]
    fn century_threshold() {
        assert_eq!(expand_two_digit_year(67), 1967);
        assert_eq!(expand_two_digit_year(30), 1930);
        assert_eq!(expand_two_digit_year(29), 2029);
        assert_eq!(expand_two_digit_year(0), 2000);
    }

    #[test]
    fn parses_canonical_strings_only() {
        assert_eq!(
            "09/04/1991".parse::<CanonicalDate>(),
            Ok(CanonicalDate::new(9, 4, 1991).unwrap())
        );
        assert!("9/4/1991".parse::<CanonicalDate>().is_err());
        assert!("1991/04/09".parse::<CanonicalDate>().is_err());
        assert!("09/13/1991".parse::<CanonicalDate>().is_err());
        assert!("aa/04/1991".parse::<CanonicalDate>().is_err());
    }
}
