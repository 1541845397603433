//! Birth-date disambiguation.
//!
//! Raw tokens are resolved by [`DateDisambiguator`] into [`CanonicalDate`]s
//! rendered as `DD/MM/YYYY`; the column passes apply it to a whole table
//! column and fold the per-cell results into a report.

mod canonical;
mod cascade;
mod column;
mod overrides;

pub use canonical::{
    CENTURY_THRESHOLD, CanonicalDate, MAX_YEAR, MIN_YEAR, ParseCanonicalDateError,
    expand_two_digit_year,
};
pub use cascade::{DIAGNOSTIC_PREFIX, DateDisambiguator, DateOutcome, FormattedDate, resolve_date};
pub use column::{DateOptions, DatePreviewRow, format_date_column, preview_date_column};
pub use overrides::OverrideTable;
