//! Table output: formatters, decorators, and the table printer.

pub mod builtin;
pub mod config;
pub mod decorators;
pub mod formatter;
pub mod printer;
pub mod registry;
pub mod specifier;

pub use builtin::{CsvTableFormatter, HtmlTableFormatter, TextTableFormatter};
pub use config::FormatConfig;
pub use decorators::{ColumnFormatter, UpperHeaders};
pub use formatter::TableFormatter;
pub use printer::{print_table, print_table_stdout};
pub use registry::{create_formatter, FormatterFactory, FormatterRegistry};
pub use specifier::FormatSpec;
