//! The table printer: pulls fields out of records and drives a formatter.

use crate::core::error::{TableError, TableResult};
use crate::core::types::Value;
use crate::format::formatter::TableFormatter;
use crate::record::instance::FieldAccess;
use std::io::Write;

/// Print `records` as a table of `fields`.
///
/// Writes the header once, then one row per record in input order. Each row
/// holds exactly one value per field and is written before the next record
/// is read. Fails with `FieldNotFound` if a record lacks one of the fields;
/// rows already written stay written. Returns the number of rows written.
pub fn print_table<R, I, S>(
    records: I,
    fields: &[S],
    formatter: &dyn TableFormatter,
    out: &mut dyn Write,
) -> TableResult<usize>
where
    R: FieldAccess,
    I: IntoIterator<Item = R>,
    S: AsRef<str>,
{
    let headers: Vec<String> = fields.iter().map(|f| f.as_ref().to_string()).collect();
    formatter.headings(out, &headers)?;

    let mut count = 0;
    for (index, record) in records.into_iter().enumerate() {
        let row = extract_row(&record, &headers, index)?;
        formatter.row(out, &row)?;
        count += 1;
    }

    log::debug!(
        "printed {} rows of [{}] as {}",
        count,
        headers.join(", "),
        formatter.name()
    );
    Ok(count)
}

/// Print a table to standard output.
pub fn print_table_stdout<R, I, S>(
    records: I,
    fields: &[S],
    formatter: &dyn TableFormatter,
) -> TableResult<usize>
where
    R: FieldAccess,
    I: IntoIterator<Item = R>,
    S: AsRef<str>,
{
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    let count = print_table(records, fields, formatter, &mut lock)?;
    lock.flush()?;
    Ok(count)
}

// One value per field, in field order.
fn extract_row<R: FieldAccess>(record: &R, fields: &[String], index: usize) -> TableResult<Vec<Value>> {
    fields
        .iter()
        .map(|name| {
            record.field(name).ok_or_else(|| TableError::FieldNotFound {
                field: name.clone(),
                record: index,
            })
        })
        .collect()
}
