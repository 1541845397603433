//! CSV loading into a Polars `DataFrame`.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use serde::{Deserialize, Serialize};
use tracing::debug;

use contacts_model::{ContactsError, Result};

/// Options for loading a contact table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Let Polars infer numeric column types.
    ///
    /// Off by default: every column is read as text so that tokens such as
    /// `09041991` keep their leading zeros.
    pub infer_schema: bool,

    /// Field delimiter. Defaults to `,`.
    pub separator: u8,

    /// Trim header names and collapse inner whitespace.
    /// Defaults to true.
    pub normalize_headers: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            infer_schema: false,
            separator: b',',
            normalize_headers: true,
        }
    }
}

impl IngestOptions {
    pub fn with_infer_schema(mut self, enable: bool) -> Self {
        self.infer_schema = enable;
        self
    }

    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }
}

/// Trims a header, drops a byte-order mark and collapses inner whitespace.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Reads a CSV file with default options.
pub fn read_table(path: &Path) -> Result<DataFrame> {
    read_table_with_options(path, &IngestOptions::default())
}

pub fn read_table_with_options(path: &Path, options: &IngestOptions) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(ContactsError::Message(format!(
            "input file not found: {}",
            path.display()
        )));
    }
    let infer_schema_length = if options.infer_schema { Some(100) } else { Some(0) };
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(infer_schema_length)
        .map_parse_options(|parse| parse.with_separator(options.separator))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    if options.normalize_headers {
        let names: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(|name| normalize_header(name.as_str()))
            .collect();
        df.set_column_names(names)?;
    }

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "table loaded"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization() {
        assert_eq!(normalize_header("  TEL  1 "), "TEL 1");
        assert_eq!(normalize_header("\u{feff}CEDULA"), "CEDULA");
        assert_eq!(normalize_header("FECHA\tNAC"), "FECHA NAC");
        assert_eq!(normalize_header("   "), "");
    }
}
