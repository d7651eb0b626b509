//! Comma-separated output.

use crate::core::error::TableResult;
use crate::core::types::Value;
use crate::format::formatter::TableFormatter;
use crate::format::registry::FormatterRegistry;
use std::io::Write;

/// Register the CSV formatter.
pub fn register(registry: &mut FormatterRegistry) {
    registry.register("csv", || Box::new(CsvTableFormatter));
}

/// Comma-joined names and values, written as-is (no quoting).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvTableFormatter;

impl TableFormatter for CsvTableFormatter {
    fn name(&self) -> &str {
        "csv"
    }

    fn headings(&self, out: &mut dyn Write, headers: &[String]) -> TableResult<()> {
        writeln!(out, "{}", headers.join(","))?;
        Ok(())
    }

    fn row(&self, out: &mut dyn Write, row: &[Value]) -> TableResult<()> {
        let cells: Vec<String> = row.iter().map(Value::to_string).collect();
        writeln!(out, "{}", cells.join(","))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_row() {
        let mut out = Vec::new();
        let formatter = CsvTableFormatter;
        formatter
            .headings(
                &mut out,
                &["name".to_string(), "shares".to_string(), "price".to_string()],
            )
            .unwrap();
        formatter
            .row(
                &mut out,
                &[Value::from("GOOG"), Value::Integer(100), Value::Float(490.1)],
            )
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "name,shares,price\nGOOG,100,490.1\n"
        );
    }

    #[test]
    fn test_empty_row() {
        let mut out = Vec::new();
        CsvTableFormatter.row(&mut out, &[]).unwrap();
        assert_eq!(out, b"\n");
    }
}
