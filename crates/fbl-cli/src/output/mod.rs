use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod feedback;
pub mod table;

use table::{Column, GridCell};

/// A response with a terminal table form.
pub trait TextView {
    fn columns(&self) -> Vec<Column>;

    fn rows(&self) -> Vec<Vec<GridCell>>;
}

/// Render a response to a string in the requested format.
///
/// Only feedback listings have an HTML form; other responses render as JSON.
pub fn render<T: Serialize + TextView>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Html => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_text(value)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + TextView>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_text<T: TextView>(value: &T) -> String {
    let rows = value.rows();
    if rows.is_empty() {
        return String::from("(no rows)");
    }
    table::render_grid(&value.columns(), &rows, table_options())
}
