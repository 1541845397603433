//! CSV output for cleaned tables.

use std::path::Path;

use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use contacts_common::any_to_string;
use contacts_model::Result;

use crate::frame::column_names;

/// Writes `df` as CSV with a header row. Null cells become empty fields.
pub fn write_table(df: &DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(column_names(df))?;
    let columns = df.get_columns();
    let mut record = Vec::with_capacity(columns.len());
    for idx in 0..df.height() {
        record.clear();
        for column in columns {
            record.push(any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "table written"
    );
    Ok(())
}
