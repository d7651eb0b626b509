//! CSV row reader that turns source rows into validated records.
//!
//! The first row is treated as a header and skipped. Rows that cannot be
//! converted are reported and skipped; reading carries on with the next row.
//! Only I/O and CSV syntax errors stop the reader.

use crate::core::error::{MalformedRow, ReaderError, ReaderResult, RowError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Conversion from a raw source row.
pub trait FromRow: Sized {
    /// Build a record from the row's fields, in column order.
    fn from_row(row: &[String]) -> Result<Self, RowError>;
}

/// Records read from a source plus the rows that were skipped.
#[derive(Debug, Clone)]
pub struct ReadOutcome<T> {
    /// Converted records, in source order
    pub records: Vec<T>,
    /// Rows that failed conversion, in source order
    pub skipped: Vec<MalformedRow>,
}

impl<T> ReadOutcome<T> {
    /// Whether every row converted.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// The records, or the first skipped row as an error.
    pub fn into_strict(self) -> ReaderResult<Vec<T>> {
        match self.skipped.into_iter().next() {
            Some(row) => Err(ReaderError::MalformedInputRow(row)),
            None => Ok(self.records),
        }
    }
}

/// Read records from CSV data.
pub fn read_csv_as_instances<T: FromRow, R: Read>(source: R) -> ReaderResult<ReadOutcome<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: Vec<String> = record.iter().map(str::to_string).collect();

        match T::from_row(&row) {
            Ok(instance) => records.push(instance),
            Err(error) => {
                let malformed = MalformedRow::new(line, row, error);
                log::warn!("{}", malformed);
                skipped.push(malformed);
            }
        }
    }

    log::debug!(
        "read {} records ({} rows skipped)",
        records.len(),
        skipped.len()
    );

    Ok(ReadOutcome { records, skipped })
}

/// Read records from a CSV file.
pub fn read_csv_file<T: FromRow>(path: impl AsRef<Path>) -> ReaderResult<ReadOutcome<T>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReaderError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_as_instances(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::stock::Stock;
    use std::io::Write;

    const PORTFOLIO: &str = "name,shares,price\n\
                             \"AA\",100,32.20\n\
                             \"IBM\",50,91.10\n\
                             \"CAT\",150,83.44\n";

    #[test]
    fn test_reads_all_rows_in_order() {
        let outcome: ReadOutcome<Stock> = read_csv_as_instances(PORTFOLIO.as_bytes()).unwrap();
        assert!(outcome.is_clean());
        let names: Vec<&str> = outcome.records.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["AA", "IBM", "CAT"]);
        assert_eq!(outcome.records[1].shares(), 50);
    }

    #[test]
    fn test_malformed_rows_skipped_and_reported() {
        let data = "name,shares,price\n\
                    AA,100,32.20\n\
                    MSFT,,51.23\n\
                    GE,-95,40.37\n\
                    IBM,50,91.10\n";
        let outcome: ReadOutcome<Stock> = read_csv_as_instances(data.as_bytes()).unwrap();

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[1].name(), "IBM");
        assert_eq!(outcome.skipped.len(), 2);
        assert_eq!(outcome.skipped[0].line, 3);
        assert_eq!(outcome.skipped[0].row, vec!["MSFT", "", "51.23"]);
        assert!(matches!(outcome.skipped[1].error, RowError::Validation(_)));
    }

    #[test]
    fn test_into_strict() {
        let data = "name,shares,price\nAA,x,1.0\n";
        let outcome: ReadOutcome<Stock> = read_csv_as_instances(data.as_bytes()).unwrap();
        assert!(matches!(
            outcome.into_strict(),
            Err(ReaderError::MalformedInputRow(_))
        ));

        let outcome: ReadOutcome<Stock> = read_csv_as_instances(PORTFOLIO.as_bytes()).unwrap();
        assert_eq!(outcome.into_strict().unwrap().len(), 3);
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PORTFOLIO.as_bytes()).unwrap();

        let outcome: ReadOutcome<Stock> = read_csv_file(file.path()).unwrap();
        assert_eq!(outcome.records.len(), 3);

        let missing = read_csv_file::<Stock>("/nonexistent/portfolio.csv");
        assert!(matches!(missing, Err(ReaderError::Open { .. })));
    }
}
