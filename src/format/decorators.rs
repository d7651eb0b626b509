//! Formatter decorators.
//!
//! Each decorator wraps another formatter, changes one of the two calls, and
//! delegates the other untouched. They stack in any order and around any
//! base formatter.

use crate::core::error::{TableError, TableResult};
use crate::core::types::Value;
use crate::format::formatter::TableFormatter;
use crate::format::specifier::FormatSpec;
use std::io::Write;

/// Applies one format specifier per column to every row.
///
/// Headings pass through unchanged. Rows must have exactly one value per
/// specifier.
#[derive(Debug, Clone)]
pub struct ColumnFormatter<F> {
    inner: F,
    formats: Vec<FormatSpec>,
}

impl<F: TableFormatter> ColumnFormatter<F> {
    /// Wrap `inner`, parsing every specifier up front.
    pub fn new<S: AsRef<str>>(inner: F, formats: &[S]) -> TableResult<Self> {
        let formats = formats
            .iter()
            .map(|s| FormatSpec::parse(s.as_ref()))
            .collect::<TableResult<Vec<_>>>()?;
        Ok(Self { inner, formats })
    }

    /// Wrap `inner` with already parsed specifiers.
    pub fn from_specs(inner: F, formats: Vec<FormatSpec>) -> Self {
        Self { inner, formats }
    }

    /// Parsed specifiers, one per column.
    pub fn formats(&self) -> &[FormatSpec] {
        &self.formats
    }

    /// The wrapped formatter.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Unwrap the inner formatter.
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: TableFormatter> TableFormatter for ColumnFormatter<F> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn headings(&self, out: &mut dyn Write, headers: &[String]) -> TableResult<()> {
        self.inner.headings(out, headers)
    }

    fn row(&self, out: &mut dyn Write, row: &[Value]) -> TableResult<()> {
        if row.len() != self.formats.len() {
            return Err(TableError::ArityMismatch {
                expected: self.formats.len(),
                got: row.len(),
            });
        }
        let formatted = self
            .formats
            .iter()
            .zip(row)
            .map(|(spec, value)| spec.apply(value).map(Value::String))
            .collect::<TableResult<Vec<_>>>()?;
        self.inner.row(out, &formatted)
    }
}

/// Upper-cases every heading. Rows pass through unchanged.
#[derive(Debug, Clone)]
pub struct UpperHeaders<F> {
    inner: F,
}

impl<F: TableFormatter> UpperHeaders<F> {
    /// Wrap `inner`.
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    /// The wrapped formatter.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Unwrap the inner formatter.
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: TableFormatter> TableFormatter for UpperHeaders<F> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn headings(&self, out: &mut dyn Write, headers: &[String]) -> TableResult<()> {
        let upper: Vec<String> = headers.iter().map(|h| h.to_uppercase()).collect();
        self.inner.headings(out, &upper)
    }

    fn row(&self, out: &mut dyn Write, row: &[Value]) -> TableResult<()> {
        self.inner.row(out, row)
    }
}
