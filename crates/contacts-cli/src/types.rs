use std::path::PathBuf;

use contacts_model::{CommentReport, DateColumnReport, PhoneCleanupReport};
use contacts_normalization::DatePreviewRow;

#[derive(Debug)]
pub struct ColumnsResult {
    pub input: PathBuf,
    pub rows: usize,
    /// Column name and non-empty cell count, in table order.
    pub columns: Vec<(String, usize)>,
}

#[derive(Debug)]
pub enum DatesResult {
    Preview {
        column: String,
        rows: Vec<DatePreviewRow>,
    },
    Applied {
        report: DateColumnReport,
        output: PathBuf,
    },
}

impl DatesResult {
    /// True when an applied pass left unresolved values behind.
    pub fn has_failures(&self) -> bool {
        match self {
            DatesResult::Preview { .. } => false,
            DatesResult::Applied { report, .. } => report.has_failures(),
        }
    }
}

#[derive(Debug)]
pub struct PhonesResult {
    pub report: PhoneCleanupReport,
    pub output: PathBuf,
    pub merged: Option<PathBuf>,
}

#[derive(Debug)]
pub enum CommentsResult {
    Preview { lines: Vec<String> },
    Built { report: CommentReport, output: PathBuf },
}
