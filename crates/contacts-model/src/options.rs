//! Configuration options for the cleanup passes.

use serde::{Deserialize, Serialize};

use crate::enums::{FailurePolicy, OverrideSource};

/// Dominican dialing prefixes accepted by default.
pub const DEFAULT_PHONE_PREFIXES: [&str; 3] = ["809", "829", "849"];

/// Digits in a valid national phone number (prefix included).
pub const PHONE_DIGITS: usize = 10;

/// Rules for the phone cleanup passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneRules {
    /// Accepted three-digit dialing prefixes.
    pub prefixes: Vec<String>,

    /// Required length of a valid number.
    pub digits: usize,

    /// Drop a leading country code `1` before validating.
    /// Default: true.
    pub strip_leading_one: bool,
}

impl Default for PhoneRules {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_PHONE_PREFIXES
                .iter()
                .map(|prefix| (*prefix).to_string())
                .collect(),
            digits: PHONE_DIGITS,
            strip_leading_one: true,
        }
    }
}

impl PhoneRules {
    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_strip_leading_one(mut self, enable: bool) -> Self {
        self.strip_leading_one = enable;
        self
    }

    /// Returns true when `digits` has the national length and an accepted prefix.
    pub fn accepts(&self, digits: &str) -> bool {
        digits.len() == self.digits
            && digits.chars().all(|ch| ch.is_ascii_digit())
            && self
                .prefixes
                .iter()
                .any(|prefix| digits.starts_with(prefix.as_str()))
    }
}

/// Settings for a date pass that can be stored alongside other run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateSettings {
    /// What to write for unresolved tokens.
    pub failure_policy: FailurePolicy,
    /// Built-in override table to start from.
    pub overrides: OverrideSource,
}
