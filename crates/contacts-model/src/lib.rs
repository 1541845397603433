pub mod comments;
pub mod enums;
pub mod error;
pub mod options;
pub mod report;

pub use comments::{
    ColumnFormat, CommentLayout, CommentSegment, DEFAULT_COMMENT_COLUMN, DOLLARS_PREFIX,
    PESOS_PREFIX, Replacement,
};
pub use enums::{DateStrategy, FailurePolicy, MergeMode, OverrideSource};
pub use error::{ContactsError, Result};
pub use options::{DEFAULT_PHONE_PREFIXES, DateSettings, PHONE_DIGITS, PhoneRules};
pub use report::{
    CommentReport, DateColumnReport, FailedValue, MAX_FAILURE_SAMPLES, PhoneCleanupReport,
};
