pub mod csv_table;
pub mod frame;
pub mod writer;

pub use csv_table::{IngestOptions, normalize_header, read_table, read_table_with_options};
pub use frame::{
    column_names, has_column, non_empty_counts, require_column, set_string_column, string_column,
    token_column,
};
pub use writer::write_table;
