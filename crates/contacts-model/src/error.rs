use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("column not found: {0}")]
    MissingColumn(String),
    #[error("invalid override for '{key}': {reason}")]
    InvalidOverride { key: String, reason: String },
    #[error("row count mismatch: base has {base} rows, cleaned table has {cleaned}")]
    RowCountMismatch { base: usize, cleaned: usize },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ContactsError>;
