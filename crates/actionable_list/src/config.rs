//! Declarative column lists loaded from TOML.
//!
//! ```toml
//! [[columns]]
//! name = "Full Name"
//! sortable_name = "name"
//! formatter = { kind = "field", field = "name" }
//!
//! [[columns]]
//! name = "Status"
//! formatter = { kind = "html", html = "<span class=\"badge\">active</span>" }
//!
//! [[columns]]
//! actions = true
//! ```

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

use crate::column::{Column, ColumnBuilder};
use crate::error::{ColumnError, Result};
use crate::formatter::Formatter;
use crate::html::HtmlString;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListConfig {
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ColumnConfig {
    #[serde(default)]
    pub name: String,
    pub slug: Option<String>,
    pub sortable_name: Option<String>,
    #[serde(default)]
    pub actions: bool,
    pub formatter: Option<FormatterConfig>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatterConfig {
    /// Fixed text.
    Text { text: String },
    /// Fixed markup, sanitized on load.
    Html { html: String },
    /// One key of the row object.
    Field {
        field: String,
        #[serde(default)]
        default: String,
    },
    /// Several keys of the row object joined with `separator`.
    Fields {
        fields: Vec<String>,
        #[serde(default = "default_separator")]
        separator: String,
    },
}

fn default_separator() -> String {
    " ".to_string()
}

/// Text of a JSON value as shown in a cell (strings without quotes, null as empty).
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn row_field<'a>(args: &'a [Value], field: &str) -> Option<&'a Value> {
    args.first()?.get(field).filter(|v| !v.is_null())
}

impl FormatterConfig {
    pub fn to_formatter(&self) -> Result<Formatter> {
        match self {
            Self::Text { text } => Ok(Formatter::literal(text.clone())),
            Self::Html { html } => Ok(Formatter::rendered(HtmlString::sanitized(html))),
            Self::Field { field, default } => {
                let field = field.clone();
                let default = default.clone();
                Ok(Formatter::computed(move |args: &[Value]| {
                    row_field(args, &field)
                        .map(value_text)
                        .unwrap_or_else(|| default.clone())
                }))
            }
            Self::Fields { fields, separator } => {
                if fields.is_empty() {
                    return Err(ColumnError::Config(
                        "'fields' formatter needs at least one field".to_string(),
                    ));
                }
                let fields = fields.clone();
                let separator = separator.clone();
                Ok(Formatter::computed(move |args: &[Value]| {
                    fields
                        .iter()
                        .filter_map(|field| row_field(args, field).map(value_text))
                        .filter(|text| !text.is_empty())
                        .collect::<Vec<_>>()
                        .join(separator.as_str())
                }))
            }
        }
    }
}

impl ColumnConfig {
    pub fn to_column(&self) -> Result<Column> {
        if self.actions {
            return Ok(ColumnBuilder::actions()
                .set_name(self.name.clone())
                .build());
        }

        let mut builder = ColumnBuilder::data(
            self.name.clone(),
            self.slug.as_deref(),
            self.sortable_name.as_deref(),
        );
        if builder.slug().is_empty() {
            return Err(ColumnError::Config(format!(
                "data column needs a name or a slug (name = {:?})",
                self.name
            )));
        }

        let formatter = self.formatter.as_ref().ok_or_else(|| {
            ColumnError::Config(format!("column '{}' has no formatter", builder.slug()))
        })?;
        builder = builder.set_formatter(formatter.to_formatter()?);

        Ok(builder.build())
    }
}

impl ListConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ColumnError::Config(e.to_string()))
    }

    /// Build every column, rejecting duplicate slugs among data columns.
    pub fn build_columns(&self) -> Result<Vec<Column>> {
        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(self.columns.len());

        for config in &self.columns {
            let column = config.to_column()?;
            if !column.has_actions() && !seen.insert(column.slug().to_string()) {
                return Err(ColumnError::Config(format!(
                    "duplicate column slug '{}'",
                    column.slug()
                )));
            }
            columns.push(column);
        }

        tracing::debug!(count = columns.len(), "built list columns");
        Ok(columns)
    }
}

/// Load a column list from a TOML file.
pub fn load_list_config(path: &Path) -> anyhow::Result<ListConfig> {
    tracing::info!("Loading column config from: {}", path.display());
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let config = ListConfig::from_toml_str(&contents)
        .with_context(|| format!("cannot parse {}", path.display()))?;
    Ok(config)
}
