//! Literal corrections for raw date tokens the cascade would misread.
//!
//! Lookups use the trimmed raw token exactly as it appears in the cell.

use std::collections::BTreeMap;
use std::path::Path;

use contacts_model::{ContactsError, OverrideSource, Result};

use super::canonical::CanonicalDate;

/// Immutable map from raw token to its known canonical date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: BTreeMap<String, CanonicalDate>,
}

impl OverrideTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The full table of records corrected by hand.
    pub fn curated() -> Self {
        Self::from_static(CURATED)
    }

    /// The short table used when previewing or applying a single column.
    pub fn inline() -> Self {
        Self::from_static(INLINE)
    }

    pub fn from_source(source: OverrideSource) -> Self {
        match source {
            OverrideSource::Curated => Self::curated(),
            OverrideSource::Inline => Self::inline(),
            OverrideSource::None => Self::empty(),
        }
    }

    fn from_static(pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .filter_map(|(raw, value)| {
                value
                    .parse::<CanonicalDate>()
                    .ok()
                    .map(|date| ((*raw).to_string(), date))
            })
            .collect();
        Self { entries }
    }

    /// Builds a table from `(raw, "DD/MM/YYYY")` pairs.
    ///
    /// Fails on the first value that is not a canonical date, naming its key.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut table = Self::empty();
        for (raw, value) in pairs {
            table.insert(raw, value.as_ref())?;
        }
        Ok(table)
    }

    /// Parses a JSON object such as `{"150167": "15/01/1967"}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
        Self::from_pairs(raw)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Adds or replaces one entry. The key is trimmed.
    pub fn insert(&mut self, raw: impl Into<String>, value: &str) -> Result<()> {
        let key = raw.into().trim().to_string();
        let date = value
            .parse::<CanonicalDate>()
            .map_err(|err| ContactsError::InvalidOverride {
                key: key.clone(),
                reason: err.to_string(),
            })?;
        self.entries.insert(key, date);
        Ok(())
    }

    /// Merges `other` into this table; entries from `other` win.
    pub fn extend(&mut self, other: OverrideTable) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, raw: &str) -> Option<CanonicalDate> {
        self.entries.get(raw).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, CanonicalDate)> {
        self.entries.iter().map(|(raw, date)| (raw.as_str(), *date))
    }
}

const CURATED: &[(&str, &str)] = &[
    ("19071999", "19/07/1999"),
    ("20081999", "20/08/1999"),
    ("20092002", "20/09/2002"),
    ("20071996", "20/07/1996"),
    ("19011980", "19/01/1980"),
    ("19101995", "19/10/1995"),
    ("19111993", "19/11/1993"),
    ("19071992", "19/07/1992"),
    ("20121994", "20/12/1994"),
    ("19051994", "19/05/1994"),
    ("20051992", "20/05/1992"),
    ("19101992", "19/10/1992"),
    ("19051993", "19/05/1993"),
    ("19021990", "19/02/1990"),
    ("20092000", "20/09/2000"),
    ("20061997", "20/06/1997"),
    ("20011998", "20/01/1998"),
    ("20011997", "20/01/1997"),
    ("19091986", "19/09/1986"),
    ("19091991", "19/09/1991"),
    ("20101990", "20/10/1990"),
    ("19011989", "19/01/1989"),
    ("19101988", "19/10/1988"),
    ("20071987", "20/07/1987"),
    ("20121976", "20/12/1976"),
    ("19061986", "19/06/1986"),
    ("19081985", "19/08/1985"),
    ("20051957", "20/05/1957"),
    ("20081954", "20/08/1954"),
    ("19011965", "19/01/1965"),
    ("20071973", "20/07/1973"),
    ("19081977", "19/08/1977"),
    ("19021975", "19/02/1975"),
    ("19061972", "19/06/1972"),
    ("20081989", "20/08/1989"),
    ("19051965", "19/05/1965"),
    ("19051992", "19/05/1992"),
    ("19061981", "19/06/1981"),
    ("19061988", "19/06/1988"),
    ("19121985", "19/12/1985"),
    ("19121967", "19/12/1967"),
    ("20061977", "20/06/1977"),
    ("20011968", "20/01/1968"),
    ("20091970", "20/09/1970"),
    ("20031973", "20/03/1973"),
    ("19101990", "19/10/1990"),
    ("20071954", "20/07/1954"),
    ("20061979", "20/06/1979"),
    ("20121979", "20/12/1979"),
    ("20011973", "20/01/1973"),
    ("20021991", "20/02/1991"),
    ("20091961", "20/09/1961"),
    ("19121975", "19/12/1975"),
    ("20121971", "20/12/1971"),
    ("20031994", "20/03/1994"),
    ("19101989", "19/10/1989"),
    ("19051984", "19/05/1984"),
    ("20041971", "20/04/1971"),
    ("20091987", "20/09/1987"),
    ("20071989", "20/07/1989"),
    ("20101984", "20/10/1984"),
    ("20031955", "20/03/1955"),
    ("20011958", "20/01/1958"),
    ("20041968", "20/04/1968"),
    ("20121983", "20/12/1983"),
    ("19081981", "19/08/1981"),
    ("20021963", "20/02/1963"),
    ("19061983", "19/06/1983"),
    ("19111973", "19/11/1973"),
    ("20071983", "20/07/1983"),
    ("20121975", "20/12/1975"),
    ("20041966", "20/04/1966"),
    ("20031975", "20/03/1975"),
    ("19061978", "19/06/1978"),
    ("20071991", "20/07/1991"),
    ("20081984", "20/08/1984"),
    ("19061965", "19/06/1965"),
    ("19051959", "19/05/1959"),
    ("19061976", "19/06/1976"),
    ("20111982", "20/11/1982"),
    ("20021970", "20/02/1970"),
    ("20091994", "20/09/1994"),
    ("19061985", "19/06/1985"),
    ("19021985", "19/02/1985"),
    ("19071976", "19/07/1976"),
    ("20111980", "20/11/1980"),
    ("20021980", "20/02/1980"),
    ("19011968", "19/01/1968"),
    ("20011976", "20/01/1976"),
    ("19111979", "19/11/1979"),
    ("20011980", "20/01/1980"),
    ("19111978", "19/11/1978"),
    ("20071968", "20/07/1968"),
    ("19071975", "19/07/1975"),
    ("19071963", "19/07/1963"),
    ("19021960", "19/02/1960"),
    ("20021962", "20/02/1962"),
    ("19071968", "19/07/1968"),
    ("20091960", "20/09/1960"),
    ("20101959", "20/10/1959"),
    ("20011967", "20/01/1967"),
    ("19101962", "19/10/1962"),
    ("19121955", "19/12/1955"),
    ("19071954", "19/07/1954"),
    ("20121973", "20/12/1973"),
    ("20021967", "20/02/1967"),
    ("18081973", "18/08/1973"),
    ("20021985", "20/02/1985"),
    ("9041991", "09/04/1991"),
    ("4051981", "04/05/1981"),
    ("24061982", "24/06/1982"),
    ("31072002", "31/07/2002"),
    ("27121973", "27/12/1973"),
    ("15011967", "15/01/1967"),
    ("10081988", "10/08/1988"),
];

const INLINE: &[(&str, &str)] = &[
    ("18081973", "18/08/1973"),
    ("20021985", "20/02/1985"),
    ("9041991", "09/04/1991"),
    ("4051981", "04/05/1981"),
    ("24061982", "24/06/1982"),
    ("31072002", "31/07/2002"),
    ("27121973", "27/12/1973"),
    ("15011967", "15/01/1967"),
    ("10081988", "10/08/1988"),
    ("19071999", "19/07/1999"),
    ("20081999", "20/08/1999"),
    ("20092002", "20/09/2002"),
    ("20071996", "20/07/1996"),
    ("19011980", "19/01/1980"),
    ("19101995", "19/10/1995"),
    ("19111993", "19/11/1993"),
    ("19071992", "19/07/1992"),
    ("20121994", "20/12/1994"),
    ("19051994", "19/05/1994"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_tables_load_every_entry() {
        assert_eq!(OverrideTable::curated().len(), CURATED.len());
        assert_eq!(OverrideTable::inline().len(), INLINE.len());
        assert_eq!(OverrideTable::inline().len(), 19);
        assert!(OverrideTable::empty().is_empty());
    }

    #[test]
    fn inline_is_a_subset_of_curated() {
        let curated = OverrideTable::curated();
        for (raw, date) in OverrideTable::inline().iter() {
            assert_eq!(curated.get(raw), Some(date), "{raw}");
        }
    }

    #[test]
    fn seven_digit_keys_pad_the_day() {
        let table = OverrideTable::inline();
        assert_eq!(table.get("9041991").unwrap().to_string(), "09/04/1991");
        assert_eq!(table.get("4051981").unwrap().to_string(), "04/05/1981");
    }

    #[test]
    fn invalid_value_names_the_key() {
        let err = OverrideTable::from_pairs([("150167", "1967-01-15")]).unwrap_err();
        match err {
            ContactsError::InvalidOverride { key, .. } => assert_eq!(key, "150167"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extend_prefers_new_entries() {
        let mut table = OverrideTable::inline();
        let extra = OverrideTable::from_pairs([("9041991", "01/01/2001")]).unwrap();
        table.extend(extra);
        assert_eq!(table.get("9041991").unwrap().to_string(), "01/01/2001");
        assert_eq!(table.len(), 19);
    }
}
