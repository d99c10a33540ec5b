//! Name-based access to column fields for template code.
//!
//! Only the fields listed in [`Attribute`] are reachable. Reads go through
//! the typed getters and writes through the typed setters, so every rule of
//! [`ColumnBuilder`] (slug derivation, formatter validation) still applies.

use serde_json::Value;

use crate::column::{Column, ColumnBuilder};
use crate::error::{ColumnError, Result};
use crate::formatter::{json_type_name, Formatter};

/// Known column fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    HasActions,
    Name,
    Slug,
    SortableName,
    Formatter,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Self::HasActions,
        Self::Name,
        Self::Slug,
        Self::SortableName,
        Self::Formatter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HasActions => "hasActions",
            Self::Name => "name",
            Self::Slug => "slug",
            Self::SortableName => "sortableName",
            Self::Formatter => "formatter",
        }
    }

    /// Accepts both the camelCase and the snake_case spelling.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "hasActions" | "has_actions" => Ok(Self::HasActions),
            "name" => Ok(Self::Name),
            "slug" => Ok(Self::Slug),
            "sortableName" | "sortable_name" => Ok(Self::SortableName),
            "formatter" => Ok(Self::Formatter),
            other => Err(ColumnError::UnknownAttribute(other.to_string())),
        }
    }
}

/// Value read from or written to an attribute.
#[derive(Debug, Clone)]
pub enum AttributeValue {
    Bool(bool),
    Text(String),
    Formatter(Formatter),
    /// Unset optional field (`sortableName`, `formatter`).
    Missing,
    /// Any other dynamic value; only meaningful where it can be converted.
    Json(Value),
}

impl AttributeValue {
    /// PHP-style emptiness: `false`, `""`, `"0"` and missing values are empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bool(flag) => !flag,
            Self::Text(text) => text.is_empty() || text == "0",
            Self::Formatter(_) => false,
            Self::Missing => true,
            Self::Json(value) => match value {
                Value::Array(items) => items.is_empty(),
                Value::Number(n) => n.as_f64() == Some(0.0),
                Value::Object(_) => false,
                Value::Null | Value::Bool(_) | Value::String(_) => {
                    AttributeValue::from(value.clone()).is_empty()
                }
            },
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl From<Value> for AttributeValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Bool(flag) => Self::Bool(flag),
            Value::String(text) => Self::Text(text),
            other => Self::Json(other),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for AttributeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Formatter> for AttributeValue {
    fn from(formatter: Formatter) -> Self {
        Self::Formatter(formatter)
    }
}

fn read(
    attribute: Attribute,
    has_actions: bool,
    name: &str,
    slug: &str,
    sortable_name: Option<&str>,
    formatter: Option<&Formatter>,
) -> AttributeValue {
    match attribute {
        Attribute::HasActions => AttributeValue::Bool(has_actions),
        Attribute::Name => AttributeValue::Text(name.to_string()),
        Attribute::Slug => AttributeValue::Text(slug.to_string()),
        Attribute::SortableName => sortable_name
            .map(|s| AttributeValue::Text(s.to_string()))
            .unwrap_or(AttributeValue::Missing),
        Attribute::Formatter => formatter
            .cloned()
            .map(AttributeValue::Formatter)
            .unwrap_or(AttributeValue::Missing),
    }
}

fn text_value(attribute: Attribute, value: AttributeValue) -> Result<String> {
    match value {
        AttributeValue::Text(text) => Ok(text),
        _ => Err(ColumnError::InvalidAttribute {
            attribute: attribute.as_str(),
            expected: "a string",
        }),
    }
}

impl ColumnBuilder {
    /// Read a field by name.
    pub fn attribute(&self, name: &str) -> Result<AttributeValue> {
        let attribute = Attribute::parse(name)?;
        Ok(read(
            attribute,
            self.has_actions(),
            self.name(),
            self.slug(),
            self.sortable_name(),
            self.formatter(),
        ))
    }

    /// Whether a field is known and holds a non-empty value.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).map(|v| !v.is_empty()).unwrap_or(false)
    }

    /// Write a field by name through its setter.
    pub fn set_attribute(self, name: &str, value: impl Into<AttributeValue>) -> Result<Self> {
        let attribute = Attribute::parse(name)?;
        let value = value.into();
        tracing::trace!(attribute = attribute.as_str(), "setting column attribute");

        match attribute {
            Attribute::HasActions => match value {
                AttributeValue::Bool(flag) => Ok(self.set_has_actions(flag)),
                _ => Err(ColumnError::InvalidAttribute {
                    attribute: attribute.as_str(),
                    expected: "a boolean",
                }),
            },
            Attribute::Name => Ok(self.set_name(text_value(attribute, value)?)),
            Attribute::Slug => Ok(self.set_slug(text_value(attribute, value)?)),
            Attribute::SortableName => match value {
                AttributeValue::Missing => Ok(self.set_sortable_name(None)),
                AttributeValue::Text(text) => Ok(self.set_sortable_name(Some(text.as_str()))),
                _ => Err(ColumnError::InvalidAttribute {
                    attribute: attribute.as_str(),
                    expected: "a string or null",
                }),
            },
            Attribute::Formatter => match value {
                AttributeValue::Formatter(formatter) => Ok(self.set_formatter(formatter)),
                AttributeValue::Text(text) => Ok(self.set_formatter(text)),
                AttributeValue::Json(value) => self.try_set_formatter(value),
                AttributeValue::Bool(flag) => self.try_set_formatter(Value::Bool(flag)),
                AttributeValue::Missing => Err(ColumnError::InvalidFormatter(
                    json_type_name(&Value::Null).to_string(),
                )),
            },
        }
    }
}

impl Column {
    /// Read a field by name.
    pub fn attribute(&self, name: &str) -> Result<AttributeValue> {
        let attribute = Attribute::parse(name)?;
        Ok(read(
            attribute,
            self.has_actions(),
            self.name(),
            self.slug(),
            self.sortable_name(),
            self.formatter(),
        ))
    }

    /// Whether a field is known and holds a non-empty value.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).map(|v| !v.is_empty()).unwrap_or(false)
    }
}
