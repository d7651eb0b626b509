//! Core types shared by validation, records, and formatting.
//!
//! This module contains:
//! - Value types (Integer, Float, String, etc.)
//! - Error types

pub mod types;
pub mod error;

// Re-export commonly used types
pub use types::{Value, ValueType};
pub use error::{
    ConfigError, Expected, MalformedRow, ReaderError, RowError, TableError, TabrecError,
    ValidationError, ValidationErrorKind,
};
