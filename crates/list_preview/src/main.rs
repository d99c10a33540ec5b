mod logging;
mod render;

use std::path::Path;

use actionable_list::{load_list_config, SortDirection, SortState};
use anyhow::Context;
use serde_json::Value;

const USAGE: &str = "usage: list_preview <columns.toml> [rows.json] [field[:asc|desc]]";

/// `field` or `field:desc`; an unknown direction falls back to ascending.
fn parse_sort(arg: &str) -> SortState {
    match arg.split_once(':') {
        Some((field, direction)) => SortState::new(
            field,
            SortDirection::parse(direction).unwrap_or_default(),
        ),
        None => SortState::new(arg, SortDirection::Ascending),
    }
}

fn load_rows(path: &Path) -> anyhow::Result<Vec<Value>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let rows: Vec<Value> = serde_json::from_str(&contents)
        .with_context(|| format!("{} must contain a JSON array of rows", path.display()))?;
    Ok(rows)
}

fn main() -> anyhow::Result<()> {
    logging::initialize()?;

    let mut args = std::env::args().skip(1);
    let config_path = args.next().context(USAGE)?;
    let rows = match args.next() {
        Some(path) => load_rows(Path::new(&path))?,
        None => Vec::new(),
    };
    let sort = args.next().map(|arg| parse_sort(&arg)).unwrap_or_else(SortState::unsorted);

    let config = load_list_config(Path::new(&config_path))?;
    let columns = config.build_columns()?;
    tracing::info!("Rendering {} columns x {} rows", columns.len(), rows.len());

    print!("{}", render::render_table(&columns, &rows, &sort)?);
    Ok(())
}
