//! Column descriptors for list tables.
//!
//! A column is configured through [`ColumnBuilder`] and frozen into a
//! [`Column`] before rows are rendered. A frozen column is immutable, so the
//! same descriptor can resolve cells for many rows, on any thread.
//!
//! ```
//! use actionable_list::{Column, Formatter};
//! use serde_json::{json, Value};
//!
//! let column = Column::builder()
//!     .set_name("Age")
//!     .set_sortable_name(Some("age"))
//!     .set_formatter(Formatter::computed(|args: &[Value]| args[0]["age"].to_string()))
//!     .build();
//!
//! assert_eq!(column.slug(), "age");
//! assert_eq!(column.cell_output(&json!({"age": 42})).unwrap().as_str(), "42");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ColumnError, Result};
use crate::formatter::{CellOutput, Formatter};
use crate::slug::{slugify, SlugGenerator};

/// Header part of a column, as handed to the table that renders it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnHeader {
    pub name: String,
    pub slug: String,
    pub sortable_name: Option<String>,
    pub has_actions: bool,
}

/// What the body cells of a column contain.
#[derive(Debug, Clone)]
pub enum ColumnKind {
    /// Action controls supplied by the table; the column has no cell content.
    Actions,
    /// Content produced by the formatter for each row.
    Data { formatter: Option<Formatter> },
}

/// Mutable configuration phase of a column.
#[derive(Debug, Clone)]
pub struct ColumnBuilder {
    has_actions: bool,
    name: String,
    slug: String,
    sortable_name: Option<String>,
    formatter: Option<Formatter>,
    slug_generator: SlugGenerator,
}

impl Default for ColumnBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnBuilder {
    /// Data column with an empty name.
    pub fn new() -> Self {
        Self {
            has_actions: false,
            name: String::new(),
            slug: String::new(),
            sortable_name: None,
            formatter: None,
            slug_generator: slugify,
        }
    }

    /// Data column with a name and, optionally, an explicit slug and sort key.
    ///
    /// The slug is derived from `name` unless `slug` is given.
    pub fn data(name: impl Into<String>, slug: Option<&str>, sortable_name: Option<&str>) -> Self {
        let mut builder = Self::new().set_name(name);
        if let Some(slug) = slug {
            builder = builder.set_slug(slug);
        }
        if sortable_name.is_some() {
            builder = builder.set_sortable_name(sortable_name);
        }
        builder
    }

    /// Column holding action controls (edit / delete buttons and so on).
    pub fn actions() -> Self {
        Self::new().set_has_actions(true)
    }

    /// Replace the slug generator used by later [`set_name`](Self::set_name) calls.
    pub fn slug_generator(mut self, slug_generator: SlugGenerator) -> Self {
        self.slug_generator = slug_generator;
        self
    }

    pub fn set_has_actions(mut self, has_actions: bool) -> Self {
        self.has_actions = has_actions;
        self
    }

    /// Set the display name. The slug is derived from it while still empty.
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        if self.slug.is_empty() {
            self.slug = (self.slug_generator)(&self.name);
            tracing::trace!(name = %self.name, slug = %self.slug, "derived column slug");
        }
        self
    }

    pub fn set_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Set the key used to request sorting on this column; `None` disables sorting.
    pub fn set_sortable_name(mut self, sortable_name: Option<&str>) -> Self {
        self.sortable_name = sortable_name.map(str::to_string);
        self
    }

    pub fn set_formatter(mut self, formatter: impl Into<Formatter>) -> Self {
        self.formatter = Some(formatter.into());
        self
    }

    /// Set the formatter from a dynamic value, rejecting shapes that are not a formatter.
    pub fn try_set_formatter(self, formatter: Value) -> Result<Self> {
        let formatter = Formatter::try_from(formatter)?;
        Ok(self.set_formatter(formatter))
    }

    pub fn has_actions(&self) -> bool {
        self.has_actions
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn sortable_name(&self) -> Option<&str> {
        self.sortable_name.as_deref()
    }

    pub fn formatter(&self) -> Option<&Formatter> {
        self.formatter.as_ref()
    }

    /// Freeze the configuration. Actions columns are never sortable.
    pub fn build(self) -> Column {
        let (kind, sortable_name) = if self.has_actions {
            (ColumnKind::Actions, None)
        } else {
            (
                ColumnKind::Data {
                    formatter: self.formatter,
                },
                self.sortable_name,
            )
        };

        Column {
            header: ColumnHeader {
                name: self.name,
                slug: self.slug,
                sortable_name,
                has_actions: self.has_actions,
            },
            kind,
        }
    }
}

/// Frozen column descriptor.
#[derive(Debug, Clone)]
pub struct Column {
    header: ColumnHeader,
    kind: ColumnKind,
}

impl Column {
    pub fn builder() -> ColumnBuilder {
        ColumnBuilder::new()
    }

    pub fn header(&self) -> &ColumnHeader {
        &self.header
    }

    pub fn kind(&self) -> &ColumnKind {
        &self.kind
    }

    pub fn has_actions(&self) -> bool {
        matches!(self.kind, ColumnKind::Actions)
    }

    pub fn name(&self) -> &str {
        &self.header.name
    }

    pub fn slug(&self) -> &str {
        &self.header.slug
    }

    pub fn sortable_name(&self) -> Option<&str> {
        self.header.sortable_name.as_deref()
    }

    pub fn formatter(&self) -> Option<&Formatter> {
        match &self.kind {
            ColumnKind::Actions => None,
            ColumnKind::Data { formatter } => formatter.as_ref(),
        }
    }

    /// Resolve the content of this column's cell for one row.
    ///
    /// `data` is the row: an array is spread into the formatter's positional
    /// arguments, any other value is passed as the single argument.
    pub fn cell_output(&self, data: &Value) -> Result<CellOutput> {
        match &self.kind {
            ColumnKind::Actions => Err(ColumnError::ActionsColumn {
                slug: self.header.slug.clone(),
            }),
            ColumnKind::Data {
                formatter: Some(formatter),
            } => {
                tracing::trace!(column = %self.header.slug, formatter = formatter.kind(), "resolving cell");
                Ok(formatter.resolve(data))
            }
            ColumnKind::Data { formatter: None } => {
                tracing::warn!(column = %self.header.slug, "cell requested from column without formatter");
                Err(ColumnError::MissingFormatter {
                    slug: self.header.slug.clone(),
                })
            }
        }
    }

    /// Cell content with no row data.
    pub fn cell_output_empty(&self) -> Result<CellOutput> {
        self.cell_output(&Value::Array(Vec::new()))
    }

    /// Back to the configuration phase, e.g. to derive a variant of a shared column.
    pub fn into_builder(self) -> ColumnBuilder {
        let formatter = match self.kind {
            ColumnKind::Actions => None,
            ColumnKind::Data { formatter } => formatter,
        };

        ColumnBuilder {
            has_actions: self.header.has_actions,
            name: self.header.name,
            slug: self.header.slug,
            sortable_name: self.header.sortable_name,
            formatter,
            slug_generator: slugify,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlString;
    use serde_json::json;

    #[test]
    fn test_name_derives_slug_once() {
        let builder = ColumnBuilder::new().set_name("Created At");
        assert_eq!(builder.slug(), "created-at");

        let builder = builder.set_name("Updated At");
        assert_eq!(builder.name(), "Updated At");
        assert_eq!(builder.slug(), "created-at");
    }

    #[test]
    fn test_empty_name_leaves_slug_unset() {
        let builder = ColumnBuilder::new().set_name("").set_name("Total");
        assert_eq!(builder.slug(), "total");
    }

    #[test]
    fn test_explicit_slug_wins() {
        let before = ColumnBuilder::new().set_slug("custom").set_name("Age");
        assert_eq!(before.slug(), "custom");

        let after = ColumnBuilder::new().set_name("Age").set_slug("custom");
        assert_eq!(after.slug(), "custom");
    }

    #[test]
    fn test_data_constructor() {
        let column = ColumnBuilder::data("Full Name", None, Some("users.name")).build();
        assert_eq!(column.name(), "Full Name");
        assert_eq!(column.slug(), "full-name");
        assert_eq!(column.sortable_name(), Some("users.name"));
        assert!(!column.has_actions());

        let column = ColumnBuilder::data("Full Name", Some("name"), None).build();
        assert_eq!(column.slug(), "name");
        assert_eq!(column.sortable_name(), None);
    }

    #[test]
    fn test_actions_column_defaults() {
        let column = ColumnBuilder::actions().build();
        assert!(column.has_actions());
        assert!(column.header().has_actions);
        assert_eq!(column.name(), "");
        assert_eq!(column.slug(), "");
        assert_eq!(column.sortable_name(), None);
    }

    #[test]
    fn test_actions_column_is_not_sortable() {
        let column = ColumnBuilder::data("Tools", None, Some("tools"))
            .set_has_actions(true)
            .set_formatter("ignored")
            .build();
        assert_eq!(column.sortable_name(), None);
        assert!(column.formatter().is_none());
        assert_eq!(
            column.cell_output(&json!([1])).unwrap_err(),
            ColumnError::ActionsColumn {
                slug: "tools".to_string()
            }
        );
    }

    #[test]
    fn test_sortable_name_can_be_cleared() {
        let builder = ColumnBuilder::new().set_sortable_name(Some("age"));
        assert_eq!(builder.sortable_name(), Some("age"));

        let builder = builder.set_sortable_name(None);
        assert_eq!(builder.sortable_name(), None);

        let builder = builder.set_sortable_name(Some(""));
        assert_eq!(builder.sortable_name(), Some(""));
    }

    #[test]
    fn test_missing_formatter() {
        let column = ColumnBuilder::data("Age", None, None).build();
        assert_eq!(
            column.cell_output_empty().unwrap_err(),
            ColumnError::MissingFormatter {
                slug: "age".to_string()
            }
        );
    }

    #[test]
    fn test_rendered_formatter() {
        let column = Column::builder()
            .set_name("Badge")
            .set_formatter(HtmlString::new("<b>X</b>"))
            .build();
        let output = column.cell_output(&json!({"anything": true})).unwrap();
        assert!(output.is_html());
        assert_eq!(output.as_str(), "<b>X</b>");
    }

    #[test]
    fn test_try_set_formatter() {
        let builder = Column::builder().try_set_formatter(json!("Hello")).unwrap();
        assert!(matches!(builder.formatter(), Some(Formatter::Literal(text)) if text == "Hello"));

        let err = Column::builder().try_set_formatter(json!(42)).unwrap_err();
        assert!(matches!(err, ColumnError::InvalidFormatter(_)));
    }

    #[test]
    fn test_custom_slug_generator() {
        fn upper(name: &str) -> String {
            name.to_uppercase()
        }

        let builder = ColumnBuilder::new().slug_generator(upper).set_name("Age");
        assert_eq!(builder.slug(), "AGE");
    }

    #[test]
    fn test_into_builder_keeps_configuration() {
        let column = ColumnBuilder::data("Age", None, Some("age"))
            .set_formatter("-")
            .build();
        let column = column.into_builder().set_name("Years").build();
        assert_eq!(column.name(), "Years");
        assert_eq!(column.slug(), "age");
        assert_eq!(column.sortable_name(), Some("age"));
        assert_eq!(column.cell_output_empty().unwrap().as_str(), "-");
    }

    #[test]
    fn test_header_serializes() {
        let column = ColumnBuilder::data("Age", None, Some("age")).build();
        let value = serde_json::to_value(column.header()).unwrap();
        assert_eq!(
            value,
            json!({"name": "Age", "slug": "age", "sortable_name": "age", "has_actions": false})
        );
    }
}
