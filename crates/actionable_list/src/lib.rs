//! Column descriptors for server-rendered list tables.
//!
//! Each [`Column`] carries a header (name, slug, sort key) and a
//! [`Formatter`] that produces the content of its cell for every row.
//! Columns are configured through [`ColumnBuilder`], in code or from a TOML
//! [`config::ListConfig`], and frozen before rendering starts.

pub mod attributes;
pub mod column;
pub mod config;
pub mod error;
pub mod formatter;
pub mod html;
pub mod slug;
pub mod sort;

pub use attributes::{Attribute, AttributeValue};
pub use column::{Column, ColumnBuilder, ColumnHeader, ColumnKind};
pub use config::{load_list_config, ColumnConfig, FormatterConfig, ListConfig};
pub use error::{ColumnError, Result};
pub use formatter::{row_arguments, CellOutput, Formatter};
pub use html::{HtmlString, Htmlable};
pub use slug::slugify;
pub use sort::{SortDirection, SortState};
