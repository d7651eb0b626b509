//! Fixed-width text tables.

use crate::core::error::TableResult;
use crate::core::types::Value;
use crate::format::formatter::TableFormatter;
use crate::format::registry::FormatterRegistry;
use std::io::Write;

/// Default column width.
pub const COLUMN_WIDTH: usize = 10;

/// Register the text formatter.
pub fn register(registry: &mut FormatterRegistry) {
    registry.register("text", || Box::new(TextTableFormatter::new()));
}

/// Right-justified columns of equal width, separated by one space.
///
/// The header is followed by a dashed rule: one run of dashes per column,
/// each followed by a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTableFormatter {
    width: usize,
}

impl TextTableFormatter {
    /// Formatter with the default column width.
    pub fn new() -> Self {
        Self {
            width: COLUMN_WIDTH,
        }
    }

    /// Use a different column width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Column width in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    fn line(&self, cells: impl Iterator<Item = String>) -> String {
        cells
            .map(|cell| format!("{:>width$}", cell, width = self.width))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TextTableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter for TextTableFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn headings(&self, out: &mut dyn Write, headers: &[String]) -> TableResult<()> {
        writeln!(out, "{}", self.line(headers.iter().cloned()))?;
        let rule = format!("{} ", "-".repeat(self.width));
        writeln!(out, "{}", rule.repeat(headers.len()))?;
        Ok(())
    }

    fn row(&self, out: &mut dyn Write, row: &[Value]) -> TableResult<()> {
        writeln!(out, "{}", self.line(row.iter().map(Value::to_string)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_headings() {
        let mut out = Vec::new();
        TextTableFormatter::new()
            .headings(&mut out, &headers(&["name", "shares"]))
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "      name     shares\n---------- ---------- \n"
        );
    }

    #[test]
    fn test_row() {
        let mut out = Vec::new();
        TextTableFormatter::new()
            .row(
                &mut out,
                &[Value::from("GOOG"), Value::Integer(100), Value::Float(490.1)],
            )
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "      GOOG        100      490.1\n"
        );
    }

    #[test]
    fn test_long_values_are_not_truncated() {
        let mut out = Vec::new();
        TextTableFormatter::new()
            .with_width(3)
            .row(&mut out, &[Value::from("LONGNAME")])
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "LONGNAME\n");
    }
}
