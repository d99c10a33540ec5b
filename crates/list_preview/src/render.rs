//! Plain HTML rendering of a column list, used to preview a config.

use actionable_list::html::escape;
use actionable_list::{Column, SortState};
use serde_json::Value;

/// Markup placed in every actions cell.
const ACTIONS_MARKUP: &str = r#"<button class="btn btn-edit">Edit</button> <button class="btn btn-delete">Delete</button>"#;

fn column_class(column: &Column) -> String {
    let mut classes = Vec::new();
    if !column.slug().is_empty() {
        classes.push(format!("col-{}", column.slug()));
    }
    if column.has_actions() {
        classes.push("col-actions".to_string());
    }
    escape(&classes.join(" "))
}

fn header_cell(column: &Column, sort: &SortState) -> String {
    match column.next_sort(sort) {
        Some(next) => format!(
            r#"<th class="{}"><a href="?sort={}&amp;direction={}">{}<span class="{}">{}</span></a></th>"#,
            column_class(column),
            urlencoding::encode(next.field().unwrap_or_default()),
            next.direction.as_str(),
            escape(column.name()),
            column.sort_class(sort),
            column.sort_indicator(sort),
        ),
        None => format!(
            r#"<th class="{}">{}</th>"#,
            column_class(column),
            escape(column.name())
        ),
    }
}

fn body_cell(column: &Column, row: &Value) -> anyhow::Result<String> {
    let content = if column.has_actions() {
        ACTIONS_MARKUP.to_string()
    } else {
        column.cell_output(row)?.to_html()
    };
    Ok(format!(
        r#"<td class="{}">{}</td>"#,
        column_class(column),
        content
    ))
}

/// Render the whole table. Each row is passed to every column as-is.
pub fn render_table(columns: &[Column], rows: &[Value], sort: &SortState) -> anyhow::Result<String> {
    let mut html = String::from("<table>\n  <thead>\n    <tr>");
    for column in columns {
        html.push_str(&header_cell(column, sort));
    }
    html.push_str("</tr>\n  </thead>\n  <tbody>\n");

    for row in rows {
        html.push_str("    <tr>");
        for column in columns {
            html.push_str(&body_cell(column, row)?);
        }
        html.push_str("</tr>\n");
    }

    html.push_str("  </tbody>\n</table>\n");
    tracing::debug!(columns = columns.len(), rows = rows.len(), "rendered table");
    Ok(html)
}
