//! The table formatter interface.

use crate::core::error::TableResult;
use crate::core::types::Value;
use std::io::Write;

/// Renders a header and rows for one output shape.
///
/// Formatters hold configuration only. `headings` and `row` are independent:
/// calling either twice with the same input writes the same bytes twice.
/// `row` expects as many values as the last `headings` call had names; the
/// table printer guarantees this.
pub trait TableFormatter: Send + Sync {
    /// Short name of the output shape (`text`, `csv`, `html`).
    fn name(&self) -> &str;

    /// Write the header for `headers`.
    fn headings(&self, out: &mut dyn Write, headers: &[String]) -> TableResult<()>;

    /// Write one data row.
    fn row(&self, out: &mut dyn Write, row: &[Value]) -> TableResult<()>;
}

impl<F: TableFormatter + ?Sized> TableFormatter for Box<F> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn headings(&self, out: &mut dyn Write, headers: &[String]) -> TableResult<()> {
        (**self).headings(out, headers)
    }

    fn row(&self, out: &mut dyn Write, row: &[Value]) -> TableResult<()> {
        (**self).row(out, row)
    }
}
