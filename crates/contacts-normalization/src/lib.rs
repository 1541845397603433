//! Contact table normalization.
//!
//! This crate provides the cleanup passes run over a contact table:
//!
//! - **dates**: birth-date disambiguation into `DD/MM/YYYY`
//! - **phones**: phone normalization, deduplication, validation and packing
//! - **comments**: the generated comment column
//! - **merge**: putting cleaned phone columns back into the full table

pub mod comments;
pub mod dates;
pub mod merge;
pub mod phones;

pub use comments::{build_comment_column, preview_comments, render_cell, render_comments};
pub use dates::{
    CanonicalDate, DateDisambiguator, DateOptions, DateOutcome, DatePreviewRow, FormattedDate,
    OverrideTable, format_date_column, preview_date_column, resolve_date,
};
pub use merge::merge_cleaned_phones;
pub use phones::{clean_phones, normalize_phone};
