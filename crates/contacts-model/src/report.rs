//! Per-pass reports returned by the cleanup passes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::DateStrategy;

/// Maximum number of failing values kept in a report.
pub const MAX_FAILURE_SAMPLES: usize = 20;

/// A value that a pass could not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedValue {
    /// Zero-based row position.
    pub row: usize,
    pub value: String,
}

/// Outcome of running the date pass over one column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateColumnReport {
    pub column: String,
    pub total: usize,
    pub converted: usize,
    pub blank: usize,
    pub failed: usize,
    /// Converted dates that do not exist on the calendar, such as `31/02/1999`.
    #[serde(default)]
    pub calendar_invalid: usize,
    /// Conversions per cascade step.
    pub by_strategy: BTreeMap<DateStrategy, usize>,
    /// First failing values, capped at [`MAX_FAILURE_SAMPLES`].
    pub failures: Vec<FailedValue>,
}

impl DateColumnReport {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ..Self::default()
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Share of non-blank cells that were converted.
    pub fn success_ratio(&self) -> f64 {
        let attempted = self.converted + self.failed;
        if attempted == 0 {
            1.0
        } else {
            self.converted as f64 / attempted as f64
        }
    }
}

/// Counts from the phone cleanup passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneCleanupReport {
    pub rows: usize,
    pub columns: Vec<String>,
    /// Numbers whose leading `1` was dropped.
    pub normalized: usize,
    /// Non-empty numbers before deduplication.
    pub total_numbers: usize,
    /// Distinct numbers before deduplication.
    pub unique_numbers: usize,
    /// Later occurrences cleared by deduplication.
    pub duplicates_removed: usize,
    /// Numbers cleared for bad length or prefix.
    pub invalid_removed: usize,
    /// Values moved left into empty slots.
    pub cells_shifted: usize,
    /// Valid numbers left after all passes.
    pub remaining: usize,
}

/// Outcome of building the comment column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentReport {
    pub column: String,
    pub rows: usize,
    /// Rows whose comment is non-empty.
    pub non_empty: usize,
    /// Layout columns not present in the table.
    pub missing_columns: Vec<String>,
}
