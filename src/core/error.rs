//! Error types for tabrec.
//!
//! Uses thiserror for structured errors with context. Errors are designed to:
//! - Carry the offending field and value so callers can report them
//! - Stay typed all the way to the caller (nothing is recovered internally)
//! - Convert into the top-level [`TabrecError`] with `?`

use crate::core::types::{Value, ValueType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for tabrec.
///
/// This enum encompasses all error categories and enables automatic
/// conversion between specific error types.
#[derive(Error, Debug)]
pub enum TabrecError {
    /// Field validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Table rendering failed
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Reading source rows failed
    #[error("Reader error: {0}")]
    Reader(#[from] ReaderError),

    /// Formatter configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O failure outside the other categories
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure
    #[error("{0}")]
    Other(String),
}

/// Broad category of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Value has the wrong type
    TypeMismatch,
    /// Numeric value is below zero
    NegativeValue,
    /// Sized value has length zero
    EmptyValue,
    /// Arithmetic result does not fit the field
    OutOfRange,
    /// Record type has no such field
    FieldNotFound,
    /// Wrong number of values for the record type
    ArityMismatch,
    /// Validator already bound to another field
    AlreadyBound,
}

/// Errors raised by validator chains and record assignment.
///
/// A failed assignment never changes the stored value.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Value has the wrong type
    #[error("Field '{field}': expected {expected}, got {} ({value})", .value.value_type())]
    TypeMismatch {
        /// Field being assigned
        field: String,
        /// Expected type, or `number`/`sized` for rules that need one
        expected: Expected,
        /// Rejected value
        value: Value,
    },

    /// Numeric value is below zero
    #[error("Field '{field}': expected >= 0, got {value}")]
    NegativeValue {
        /// Field being assigned
        field: String,
        /// Rejected value
        value: Value,
    },

    /// Sized value has length zero
    #[error("Field '{field}': must be non-empty")]
    EmptyValue {
        /// Field being assigned
        field: String,
        /// Rejected value
        value: Value,
    },

    /// Arithmetic on the current value overflowed
    #[error("Field '{field}': {operation} on {value} is out of range")]
    OutOfRange {
        /// Field being updated
        field: String,
        /// Value before the operation
        value: Value,
        /// The operation that overflowed, e.g. `sell(-1)`
        operation: String,
    },

    /// Record type has no such field
    #[error("Record type '{record}' has no field '{field}'")]
    FieldNotFound {
        /// Record type name
        record: String,
        /// Requested field
        field: String,
    },

    /// Wrong number of values for the record type
    #[error("Record type '{record}' expects {expected} values, got {got}")]
    ArityMismatch {
        /// Record type name
        record: String,
        /// Declared field count
        expected: usize,
        /// Values supplied
        got: usize,
    },

    /// Validator already bound to a different field
    #[error("Validator is already bound to field '{bound}', cannot bind to '{requested}'")]
    AlreadyBound {
        /// Field the validator is bound to
        bound: String,
        /// Field it was asked to bind to
        requested: String,
    },
}

/// What a type-checking rule expected to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "type")]
pub enum Expected {
    /// A concrete value type
    Type(ValueType),
    /// Any numeric value (integer or float)
    Number,
    /// Any value with a length (string or array)
    Sized,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Type(t) => write!(f, "{}", t),
            Expected::Number => f.write_str("number"),
            Expected::Sized => f.write_str("sized"),
        }
    }
}

/// Errors from formatter construction and table rendering.
#[derive(Error, Debug)]
pub enum TableError {
    /// No formatter is registered under the name
    #[error("Unsupported formatter '{name}' (available: {})", .available.join(", "))]
    UnsupportedFormatter {
        /// Requested format name
        name: String,
        /// Registered format names
        available: Vec<String>,
    },

    /// A record lacks a requested field
    #[error("Field '{field}' not found on record {record}")]
    FieldNotFound {
        /// Requested field
        field: String,
        /// 0-based index of the record
        record: usize,
    },

    /// Row length differs from the declared column count
    #[error("Row has {got} values but {expected} columns were declared")]
    ArityMismatch {
        /// Declared column count
        expected: usize,
        /// Values in the row
        got: usize,
    },

    /// Format specifier could not be parsed
    #[error("Invalid format specifier '{spec}': {reason}")]
    InvalidFormatSpec {
        /// Specifier as written
        spec: String,
        /// What is wrong with it
        reason: String,
    },

    /// Value cannot be rendered by the specifier
    #[error("Format specifier '{spec}' cannot render {} value {value}", .value.value_type())]
    FormatValue {
        /// Specifier as written
        spec: String,
        /// Value it cannot render
        value: Value,
    },

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a source row could not become a record.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RowError {
    /// Row has the wrong number of columns
    #[error("expected {expected} columns, got {got}")]
    Arity {
        /// Columns the record type needs
        expected: usize,
        /// Columns in the row
        got: usize,
    },

    /// A column could not be parsed
    #[error("cannot parse column '{column}' value '{raw}' as {expected}")]
    Parse {
        /// Column name
        column: String,
        /// Raw text as read
        raw: String,
        /// Type the column needed
        expected: ValueType,
    },

    /// Converted values were rejected by a validator
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

/// A source row that was skipped by the reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MalformedRow {
    /// 1-based line number in the source (the header is line 1)
    pub line: u64,
    /// Raw fields as read
    pub row: Vec<String>,
    /// Conversion or validation failure
    pub error: RowError,
}

impl fmt::Display for MalformedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot parse {:?} (line {}): {}", self.row, self.line, self.error)
    }
}

/// Errors from the row reader.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// A row failed conversion (strict reading)
    #[error("Malformed input row: {0}")]
    MalformedInputRow(MalformedRow),

    /// CSV syntax or decoding failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Source file could not be opened
    #[error("Failed to open {path}: {source}")]
    Open {
        /// File that could not be opened
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Errors while loading a formatter configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// TOML syntax or schema error
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or schema error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Path has neither a `.toml` nor a `.json` extension
    #[error("Unrecognized config file extension: {path} (expected .toml or .json)")]
    UnknownExtension {
        /// Offending path
        path: PathBuf,
    },
}

// ============================================================================
// Error Utilities
// ============================================================================

impl ValidationError {
    /// Get the category of this error.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::TypeMismatch { .. } => ValidationErrorKind::TypeMismatch,
            ValidationError::NegativeValue { .. } => ValidationErrorKind::NegativeValue,
            ValidationError::EmptyValue { .. } => ValidationErrorKind::EmptyValue,
            ValidationError::OutOfRange { .. } => ValidationErrorKind::OutOfRange,
            ValidationError::FieldNotFound { .. } => ValidationErrorKind::FieldNotFound,
            ValidationError::ArityMismatch { .. } => ValidationErrorKind::ArityMismatch,
            ValidationError::AlreadyBound { .. } => ValidationErrorKind::AlreadyBound,
        }
    }

    /// Name of the field the error concerns, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::TypeMismatch { field, .. }
            | ValidationError::NegativeValue { field, .. }
            | ValidationError::EmptyValue { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::FieldNotFound { field, .. } => Some(field),
            ValidationError::AlreadyBound { requested, .. } => Some(requested),
            ValidationError::ArityMismatch { .. } => None,
        }
    }

    /// The rejected value, for constraint failures.
    pub fn value(&self) -> Option<&Value> {
        match self {
            ValidationError::TypeMismatch { value, .. }
            | ValidationError::NegativeValue { value, .. }
            | ValidationError::EmptyValue { value, .. }
            | ValidationError::OutOfRange { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Get suggestion for fixing this error.
    pub fn suggested_fix(&self) -> Option<String> {
        match self {
            ValidationError::TypeMismatch { field, expected, .. } => {
                Some(format!("Convert '{}' to {} before assigning", field, expected))
            }
            ValidationError::NegativeValue { field, .. } => {
                Some(format!("Use a value >= 0 for '{}'", field))
            }
            ValidationError::EmptyValue { field, .. } => {
                Some(format!("Provide at least one element for '{}'", field))
            }
            _ => None,
        }
    }
}

impl MalformedRow {
    /// Create a report for a skipped row.
    pub fn new(line: u64, row: Vec<String>, error: RowError) -> Self {
        Self { line, row, error }
    }
}

/// Result type alias for tabrec operations.
pub type TabrecResult<T> = Result<T, TabrecError>;

/// Result type alias for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type alias for table rendering.
pub type TableResult<T> = Result<T, TableError>;

/// Result type alias for the row reader.
pub type ReaderResult<T> = Result<T, ReaderError>;
