//! Layout of the generated comment column.
//!
//! A layout is an ordered list of segments. Each row's comment is the
//! rendered, non-empty segments joined by the separator.
//!
//! ```json
//! {
//!   "segments": [
//!     { "kind": "column", "column": "PRODUCTO" },
//!     { "kind": "column", "column": "LIMITE_RD", "format": { "type": "pesos" } },
//!     { "kind": "text", "text": "cliente preferencial" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Default name of the generated column.
pub const DEFAULT_COMMENT_COLUMN: &str = "COMENTARIOS";

/// Currency prefix for Dominican pesos.
pub const PESOS_PREFIX: &str = "RD$";

/// Currency prefix for US dollars.
pub const DOLLARS_PREFIX: &str = "US$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentLayout {
    /// Name of the output column.
    pub column_name: String,
    /// Text placed between rendered segments.
    pub separator: String,
    pub segments: Vec<CommentSegment>,
}

impl Default for CommentLayout {
    fn default() -> Self {
        Self {
            column_name: DEFAULT_COMMENT_COLUMN.to_string(),
            separator: " ".to_string(),
            segments: Vec::new(),
        }
    }
}

impl CommentLayout {
    pub fn new(segments: Vec<CommentSegment>) -> Self {
        Self {
            segments,
            ..Self::default()
        }
    }

    pub fn with_column_name(mut self, name: impl Into<String>) -> Self {
        self.column_name = name.into();
        self
    }

    /// Source columns referenced by the layout, in segment order.
    pub fn source_columns(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                CommentSegment::Column { column, .. } => Some(column.as_str()),
                CommentSegment::Text { .. } => None,
            })
            .collect()
    }
}

/// One piece of a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommentSegment {
    /// Fixed text, skipped when empty.
    Text { text: String },
    /// The row's value in `column`.
    Column {
        column: String,
        #[serde(default)]
        format: ColumnFormat,
        /// Render a zero amount as one (`0` → `1`, `RD$0` → `RD$1`).
        #[serde(default)]
        zero_as_one: bool,
    },
}

impl CommentSegment {
    pub fn text(text: impl Into<String>) -> Self {
        CommentSegment::Text { text: text.into() }
    }

    pub fn column(column: impl Into<String>, format: ColumnFormat) -> Self {
        CommentSegment::Column {
            column: column.into(),
            format,
            zero_as_one: false,
        }
    }
}

/// How a column value is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnFormat {
    #[default]
    Plain,
    /// Prefix with `RD$`.
    Pesos,
    /// Prefix with `US$`.
    Dollars,
    /// Apply substring replacements in order.
    Replace { replacements: Vec<Replacement> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
