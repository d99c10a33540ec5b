use thiserror::Error;

/// Column configuration errors.
///
/// Every variant is a caller mistake surfaced at the point where the column
/// is configured or read; nothing here is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    #[error("formatter requires an anonymous function, a string or an Htmlable (got {0})")]
    InvalidFormatter(String),

    #[error("column '{slug}' has no formatter")]
    MissingFormatter { slug: String },

    #[error("column '{slug}' renders actions, it has no cell content")]
    ActionsColumn { slug: String },

    #[error("unknown column attribute: {0}")]
    UnknownAttribute(String),

    #[error("attribute '{attribute}' expects {expected}")]
    InvalidAttribute {
        attribute: &'static str,
        expected: &'static str,
    },

    #[error("invalid column config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ColumnError>;
