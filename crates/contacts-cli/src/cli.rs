//! CLI argument definitions for the contacts cleaner.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use contacts_model::{FailurePolicy, MergeMode, OverrideSource};

#[derive(Parser)]
#[command(
    name = "contacts-cleaner",
    version,
    about = "Clean contact tables: birth dates, phone numbers and comments",
    long_about = "Clean contact tables exported from spreadsheets.\n\n\
                  Rewrites ambiguous birth dates as DD/MM/YYYY, normalizes and\n\
                  deduplicates phone numbers, and builds a free-text comment column."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow cell values (dates, phone numbers) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the columns of a table with their non-empty counts.
    Columns(InputArgs),

    /// Preview or rewrite a birth-date column as DD/MM/YYYY.
    Dates(DatesArgs),

    /// Normalize, deduplicate and validate phone columns.
    Phones(PhonesArgs),

    /// Build the comment column from a layout file.
    Comments(CommentsArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Field delimiter of the input file.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// Let the reader type numeric columns instead of reading everything as text.
    #[arg(long = "infer-schema")]
    pub infer_schema: bool,
}

#[derive(Args)]
pub struct DatesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Column holding the dates.
    #[arg(long = "column", value_name = "NAME")]
    pub column: String,

    /// Show the first N formatted values instead of writing a file.
    #[arg(long = "preview", value_name = "N")]
    pub preview: Option<usize>,

    /// Output file (default: <INPUT stem>_fechas.csv next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Built-in override table to start from.
    #[arg(long = "overrides", value_enum, default_value = "curated")]
    pub overrides: OverridesArg,

    /// JSON file of extra overrides ({"raw": "DD/MM/YYYY"}), applied on top.
    #[arg(long = "overrides-file", value_name = "PATH")]
    pub overrides_file: Option<PathBuf>,

    /// What to write for values that cannot be resolved.
    #[arg(long = "on-failure", value_enum, default_value = "original")]
    pub on_failure: FailureArg,

    /// Exit with an error status when any value could not be resolved.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Args)]
pub struct PhonesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Identifier column (cedula) kept alongside the phones.
    #[arg(long = "id-column", value_name = "NAME")]
    pub id_column: String,

    /// Phone columns, in priority order.
    #[arg(
        long = "phone-columns",
        value_name = "A,B,C",
        value_delimiter = ',',
        required = true
    )]
    pub phone_columns: Vec<String>,

    /// Output file for the cleaned phones (default: <INPUT stem>_telefonos.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write the full table with the cleaned phones merged back.
    #[arg(long = "merge", value_enum)]
    pub merge: Option<MergeArg>,

    /// Output file for the merged table (default: <INPUT stem>_fusionado.csv).
    #[arg(long = "merged-output", value_name = "PATH")]
    pub merged_output: Option<PathBuf>,

    /// Accepted three-digit dialing prefixes.
    #[arg(
        long = "prefixes",
        value_name = "LIST",
        value_delimiter = ',',
        default_value = "809,829,849"
    )]
    pub prefixes: Vec<String>,

    /// Keep a leading country code 1 instead of dropping it.
    #[arg(long = "keep-leading-one")]
    pub keep_leading_one: bool,
}

#[derive(Args)]
pub struct CommentsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// JSON layout describing the comment segments.
    #[arg(long = "layout", value_name = "PATH")]
    pub layout: PathBuf,

    /// Show the first N comments instead of writing a file.
    #[arg(long = "preview", value_name = "N")]
    pub preview: Option<usize>,

    /// Output file (default: <INPUT stem>_comentarios.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Name of the generated column (overrides the layout).
    #[arg(long = "column-name", value_name = "NAME")]
    pub column_name: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OverridesArg {
    Curated,
    Inline,
    None,
}

impl From<OverridesArg> for OverrideSource {
    fn from(value: OverridesArg) -> Self {
        match value {
            OverridesArg::Curated => OverrideSource::Curated,
            OverridesArg::Inline => OverrideSource::Inline,
            OverridesArg::None => OverrideSource::None,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FailureArg {
    Original,
    Diagnostic,
}

impl From<FailureArg> for FailurePolicy {
    fn from(value: FailureArg) -> Self {
        match value {
            FailureArg::Original => FailurePolicy::ReturnOriginal,
            FailureArg::Diagnostic => FailurePolicy::ReturnDiagnostic,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MergeArg {
    ById,
    Append,
}

impl From<MergeArg> for MergeMode {
    fn from(value: MergeArg) -> Self {
        match value {
            MergeArg::ById => MergeMode::ById,
            MergeArg::Append => MergeMode::Append,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
