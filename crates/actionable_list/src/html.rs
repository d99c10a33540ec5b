//! HTML-renderable values for cell content.
//!
//! [`Htmlable`] is the capability a formatter can expose to produce markup
//! that is emitted without escaping. [`HtmlString`] is the stock
//! implementation; [`sanitize`] runs untrusted markup through an allow-list
//! before it is wrapped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value that renders itself to an HTML fragment.
///
/// Implementations must not depend on row data: the same fragment is
/// returned for every row of the column.
pub trait Htmlable {
    fn to_html(&self) -> String;
}

/// Markup that is trusted as-is when the cell is written out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HtmlString(String);

impl HtmlString {
    /// Wrap markup the caller already trusts.
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Wrap markup from an untrusted source after sanitizing it.
    pub fn sanitized(html: &str) -> Self {
        Self(sanitize(html))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Htmlable for HtmlString {
    fn to_html(&self) -> String {
        self.0.clone()
    }
}

impl fmt::Display for HtmlString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HtmlString {
    fn from(html: &str) -> Self {
        Self::new(html)
    }
}

impl From<String> for HtmlString {
    fn from(html: String) -> Self {
        Self(html)
    }
}

/// Escape text so it can be placed inside an element or a quoted attribute.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Clean an HTML fragment for use in a table cell.
///
/// Rules:
/// - `<script>` tags and their content are removed
/// - `on*` attributes and `javascript:` URIs are removed
/// - basic inline and block tags are kept with `class` / `style` / `id` / `title`
/// - links keep `href` (ammonia adds `rel="noopener noreferrer"`)
pub fn sanitize(html: &str) -> String {
    ammonia::Builder::new()
        .tags(maplit::hashset![
            "a", "span", "div", "p", "strong", "em", "b", "i", "small", "sup", "sub",
            "code", "br", "ul", "ol", "li", "img",
        ])
        .tag_attributes(maplit::hashmap![
            "a" => maplit::hashset!["href"],
            "img" => maplit::hashset!["src", "alt", "width", "height"],
        ])
        .generic_attributes(maplit::hashset!["class", "style", "id", "title"])
        .clean(html)
        .to_string()
}
