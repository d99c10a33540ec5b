//! Sorting state of a list and its header indicators.

use serde::{Deserialize, Serialize};

use crate::column::Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Parse a query-string value (`asc`, `desc`, case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Field the list is currently sorted by, identified by a column's sortable name.
///
/// `field == None` means no sort was requested; `Some("")` is a real key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: Some(field.into()),
            direction,
        }
    }

    /// No sort requested.
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Clicking the current field flips the direction, another field starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field() == Some(field) {
            self.direction = self.direction.toggle();
        } else {
            self.field = Some(field.to_string());
            self.direction = SortDirection::Ascending;
        }
    }
}

impl Column {
    pub fn is_sortable(&self) -> bool {
        self.sortable_name().is_some()
    }

    pub fn is_sorted_by(&self, state: &SortState) -> bool {
        match (self.sortable_name(), state.field()) {
            (Some(sortable_name), Some(field)) => sortable_name == field,
            _ => false,
        }
    }

    /// Indicator shown next to the header text.
    pub fn sort_indicator(&self, state: &SortState) -> &'static str {
        if !self.is_sortable() {
            return "";
        }
        if self.is_sorted_by(state) {
            match state.direction {
                SortDirection::Ascending => " ▲",
                SortDirection::Descending => " ▼",
            }
        } else {
            " ⇅"
        }
    }

    /// CSS class of the indicator element.
    pub fn sort_class(&self, state: &SortState) -> &'static str {
        if self.is_sorted_by(state) {
            "table__sort-indicator table__sort-indicator--active"
        } else {
            "table__sort-indicator"
        }
    }

    /// State the list moves to when this column's header is clicked.
    pub fn next_sort(&self, state: &SortState) -> Option<SortState> {
        let field = self.sortable_name()?;
        let mut next = state.clone();
        next.toggle(field);
        Some(next)
    }
}
