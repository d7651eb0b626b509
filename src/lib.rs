//! # Tabrec - Validated records and pluggable table output
//!
//! Tabrec declares record types whose fields are checked by composable
//! validators, and prints collections of records as tables in several
//! output shapes.
//!
//! ## Features
//!
//! - **Composable validators**: Validator kinds build on each other; each
//!   kind resolves to one ordered rule chain with shared ancestors run once
//! - **Validated records**: Every construction and assignment goes through
//!   the field's chain, so a record never holds a rejected value
//! - **Table formatters**: Plain text, CSV, and HTML row markup behind one trait
//! - **Decorators**: Per-column format specifiers and upper-case headings,
//!   stackable in any order around any formatter
//! - **Registry**: Formatters looked up by name, with custom registration
//!
//! ## Quick Start
//!
//! ```rust
//! use tabrec::prelude::*;
//!
//! let portfolio = vec![
//!     Stock::new("GOOG", 100, 490.1).unwrap(),
//!     Stock::new("IBM", 50, 91.1).unwrap(),
//! ];
//!
//! let formatter = UpperHeaders::new(CsvTableFormatter);
//! let mut out = Vec::new();
//! print_table(&portfolio, &["name", "shares", "price"], &formatter, &mut out).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "NAME,SHARES,PRICE\nGOOG,100,490.1\nIBM,50,91.1\n"
//! );
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Value model and error types
//! - [`validation`]: Rules, validator kinds, and bound validators
//! - [`record`]: Record schemas, validated records, `Stock`, and the CSV reader
//! - [`format`]: Table formatters, decorators, registry, and the table printer
//!
//! ## Custom Validators
//!
//! ```rust
//! use tabrec::prelude::*;
//! use tabrec::validation::kind;
//!
//! let non_empty_text = ValidatorKind::compose("NonEmptyText", vec![kind::string(), kind::non_empty()]);
//! let validator = Validator::new(&non_empty_text);
//!
//! assert!(validator.check(Value::from("ok")).is_ok());
//! assert!(validator.check(Value::from("")).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod format;
pub mod record;
pub mod validation;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust
/// use tabrec::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::types::{Value, ValueType};

    // Errors
    pub use crate::core::error::{
        ConfigError, MalformedRow, ReaderError, RowError, TableError, TabrecError,
        ValidationError, ValidationErrorKind,
    };

    // Validation
    pub use crate::validation::{Rule, Validator, ValidatorKind};

    // Records
    pub use crate::record::{
        portfolio_cost, read_csv_as_instances, read_csv_file, FieldAccess, FromRow,
        ReadOutcome, Record, RecordSchema, Stock,
    };

    // Formatting
    pub use crate::format::{
        create_formatter, print_table, ColumnFormatter, CsvTableFormatter, FormatConfig,
        FormatSpec, FormatterRegistry, HtmlTableFormatter, TableFormatter, TextTableFormatter,
        UpperHeaders,
    };
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
