//! HTML table rows.

use crate::core::error::TableResult;
use crate::core::types::Value;
use crate::format::formatter::TableFormatter;
use crate::format::registry::FormatterRegistry;
use std::fmt::Display;
use std::io::Write;

/// Register the HTML formatter.
pub fn register(registry: &mut FormatterRegistry) {
    registry.register("html", || Box::new(HtmlTableFormatter));
}

/// One `<tr>` per line: `<th>` cells for the header, `<td>` cells for rows.
///
/// Cell text is written verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlTableFormatter;

fn table_row<T: Display>(out: &mut dyn Write, tag: &str, cells: &[T]) -> TableResult<()> {
    let cells: Vec<String> = cells
        .iter()
        .map(|cell| format!("<{tag}>{cell}</{tag}>"))
        .collect();
    writeln!(out, "<tr> {} </tr>", cells.join(" "))?;
    Ok(())
}

impl TableFormatter for HtmlTableFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn headings(&self, out: &mut dyn Write, headers: &[String]) -> TableResult<()> {
        table_row(out, "th", headers)
    }

    fn row(&self, out: &mut dyn Write, row: &[Value]) -> TableResult<()> {
        table_row(out, "td", row)
    }
}
