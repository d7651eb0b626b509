//! Validated records.
//!
//! A [`RecordSchema`] declares fields and their validators once; each
//! [`Record`] holds its own values and runs the schema's validators on
//! every assignment. [`Stock`] is the typed record used by the CLI.

pub mod schema;
pub mod instance;
pub mod stock;
pub mod reader;
pub mod portfolio;

pub use schema::{RecordSchema, RecordSchemaBuilder};
pub use instance::{FieldAccess, Record};
pub use stock::{stock_schema, Stock};
pub use reader::{read_csv_as_instances, read_csv_file, FromRow, ReadOutcome};
pub use portfolio::portfolio_cost;
