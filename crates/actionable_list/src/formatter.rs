//! Cell formatters and their output.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ColumnError, Result};
use crate::html::{escape, HtmlString, Htmlable};

/// Callable formatter: receives the row data as positional arguments.
pub type ComputeFn = dyn Fn(&[Value]) -> CellOutput + Send + Sync;

/// Produces the content of one cell.
#[derive(Clone)]
pub enum Formatter {
    /// Same text for every row.
    Literal(String),
    /// Same markup for every row, produced by an [`Htmlable`].
    Rendered(Arc<dyn Htmlable + Send + Sync>),
    /// Content computed from the row data.
    Computed(Arc<ComputeFn>),
}

impl Formatter {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn rendered<H>(html: H) -> Self
    where
        H: Htmlable + Send + Sync + 'static,
    {
        Self::Rendered(Arc::new(html))
    }

    pub fn computed<F, R>(f: F) -> Self
    where
        F: Fn(&[Value]) -> R + Send + Sync + 'static,
        R: Into<CellOutput>,
    {
        Self::Computed(Arc::new(move |args: &[Value]| -> CellOutput { f(args).into() }))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Rendered(_) => "rendered",
            Self::Computed(_) => "computed",
        }
    }

    /// Resolve the content for one row.
    pub fn resolve(&self, data: &Value) -> CellOutput {
        match self {
            Self::Literal(text) => CellOutput::Text(text.clone()),
            Self::Rendered(html) => CellOutput::Html(HtmlString::new(html.to_html())),
            Self::Computed(f) => f(row_arguments(data)),
        }
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Rendered(html) => f.debug_tuple("Rendered").field(&html.to_html()).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for Formatter {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for Formatter {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

impl From<HtmlString> for Formatter {
    fn from(html: HtmlString) -> Self {
        Self::rendered(html)
    }
}

/// Dynamic values can only carry the literal shape; anything else is rejected.
impl TryFrom<Value> for Formatter {
    type Error = ColumnError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Self::Literal(text)),
            other => Err(ColumnError::InvalidFormatter(json_type_name(&other).to_string())),
        }
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Normalize row data into positional arguments.
///
/// An array is used as the argument list, `null` means no arguments and any
/// other value becomes a single argument.
pub fn row_arguments(data: &Value) -> &[Value] {
    match data {
        Value::Array(items) => items,
        Value::Null => &[],
        other => std::slice::from_ref(other),
    }
}

/// Rendered content of one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellOutput {
    /// Plain text, escaped when written as HTML.
    Text(String),
    /// Trusted markup, written as-is.
    Html(HtmlString),
}

impl CellOutput {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Html(html) => html.as_str(),
        }
    }

    pub fn is_html(&self) -> bool {
        matches!(self, Self::Html(_))
    }

    /// Markup safe to place inside a `<td>`.
    pub fn to_html(&self) -> String {
        match self {
            Self::Text(text) => escape(text),
            Self::Html(html) => html.to_html(),
        }
    }
}

impl fmt::Display for CellOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CellOutput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for CellOutput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<HtmlString> for CellOutput {
    fn from(html: HtmlString) -> Self {
        Self::Html(html)
    }
}
