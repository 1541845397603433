//! Type-safe enumerations for contact normalization settings.
//!
//! These enums replace the string flags the cleanup passes are driven by,
//! and all of them round-trip through serde and `FromStr` so they can be
//! read from JSON settings files and command-line values alike.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a date pass returns for a token no strategy could resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Leave the cell exactly as it was read (apply mode).
    #[default]
    ReturnOriginal,
    /// Replace the cell with `Error: <trimmed value>` (preview mode).
    ReturnDiagnostic,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::ReturnOriginal => "original",
            FailurePolicy::ReturnDiagnostic => "diagnostic",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "original" | "return_original" | "passthrough" => Ok(FailurePolicy::ReturnOriginal),
            "diagnostic" | "return_diagnostic" | "error" => Ok(FailurePolicy::ReturnDiagnostic),
            other => Err(format!("Unknown failure policy: {other}")),
        }
    }
}

/// The cascade step that produced a canonical date.
///
/// Ordered by position in the cascade, so sorting a set of strategies
/// lists them in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStrategy {
    /// The one-off `2022003` data-entry correction.
    KnownCorrection,
    /// Exact match in the override table.
    Override,
    /// Eight digits read as `DDMMYYYY`.
    DayMonthYear8,
    /// Eight digits read as `YYYYMMDD` after `DDMMYYYY` was rejected.
    YearMonthDay8,
    /// Seven digits read as `DMMYYYY`.
    DayMonthYear7,
    /// Six digits read as `DDMMYY`.
    DayMonthYear6,
    /// Five digits read as `DMMYY`.
    DayMonthYear5,
    /// Three parts split on `/`, `-` or `.`.
    Delimited,
}

impl DateStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateStrategy::KnownCorrection => "known correction",
            DateStrategy::Override => "override",
            DateStrategy::DayMonthYear8 => "DDMMYYYY",
            DateStrategy::YearMonthDay8 => "YYYYMMDD",
            DateStrategy::DayMonthYear7 => "DMMYYYY",
            DateStrategy::DayMonthYear6 => "DDMMYY",
            DateStrategy::DayMonthYear5 => "DMMYY",
            DateStrategy::Delimited => "delimited",
        }
    }
}

impl fmt::Display for DateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which built-in override table a date pass starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideSource {
    /// The full table of known-bad records.
    #[default]
    Curated,
    /// The short table used by the per-column preview/apply passes.
    Inline,
    /// No built-in overrides.
    None,
}

impl FromStr for OverrideSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "curated" | "full" => Ok(OverrideSource::Curated),
            "inline" | "short" => Ok(OverrideSource::Inline),
            "none" | "empty" => Ok(OverrideSource::None),
            other => Err(format!("Unknown override table: {other}")),
        }
    }
}

/// How cleaned phone columns are put back into the base table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeMode {
    /// Left join on the identifier column.
    ById,
    /// Place the cleaned columns next to the base columns, row by row.
    Append,
}

impl FromStr for MergeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "by-id" | "id" | "join" => Ok(MergeMode::ById),
            "append" | "concat" => Ok(MergeMode::Append),
            other => Err(format!("Unknown merge mode: {other}")),
        }
    }
}
