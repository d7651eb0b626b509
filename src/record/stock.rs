//! Stock holdings: the typed record built on the validator framework.

use crate::core::error::{RowError, ValidationError, ValidationResult};
use crate::core::types::{Value, ValueType};
use crate::record::instance::{FieldAccess, Record};
use crate::record::reader::FromRow;
use crate::record::schema::RecordSchema;
use crate::validation::kind;
use std::fmt;
use std::sync::{Arc, OnceLock};

static STOCK_SCHEMA: OnceLock<Arc<RecordSchema>> = OnceLock::new();

/// The shared `Stock` record type:
/// `name: String`, `shares: PositiveInteger`, `price: PositiveFloat`.
pub fn stock_schema() -> Arc<RecordSchema> {
    STOCK_SCHEMA
        .get_or_init(|| {
            let schema = RecordSchema::builder("Stock")
                .field("name", &kind::string())
                .field("shares", &kind::positive_integer())
                .field("price", &kind::positive_float())
                .build()
                .unwrap_or_else(|e| unreachable!("fresh validators cannot be bound: {e}"));
            Arc::new(schema)
        })
        .clone()
}

/// A stock holding.
///
/// Every setter, and `sell`, goes through the same validator chain that
/// construction uses.
#[derive(Debug, Clone)]
pub struct Stock {
    record: Record,
}

impl Stock {
    /// Declared fields, in order.
    pub const FIELDS: [&'static str; 3] = ["name", "shares", "price"];

    /// Create a holding. Fails without producing a record if any field is
    /// rejected.
    pub fn new(name: impl Into<String>, shares: i64, price: f64) -> ValidationResult<Self> {
        let record = Record::new(
            stock_schema(),
            vec![
                Value::String(name.into()),
                Value::Integer(shares),
                Value::Float(price),
            ],
        )?;
        Ok(Self { record })
    }

    /// Create a holding from untyped values.
    pub fn from_values(name: Value, shares: Value, price: Value) -> ValidationResult<Self> {
        let record = Record::new(stock_schema(), vec![name, shares, price])?;
        Ok(Self { record })
    }

    /// Ticker name.
    pub fn name(&self) -> &str {
        self.record.get("name").and_then(Value::as_str).unwrap_or_default()
    }

    /// Number of shares held.
    pub fn shares(&self) -> i64 {
        self.record
            .get("shares")
            .and_then(Value::as_integer)
            .unwrap_or_default()
    }

    /// Price per share.
    pub fn price(&self) -> f64 {
        self.record
            .get("price")
            .and_then(Value::as_float)
            .unwrap_or_default()
    }

    /// `shares * price`, computed from the current values.
    pub fn cost(&self) -> f64 {
        self.shares() as f64 * self.price()
    }

    /// Rename the holding through the `name` validator.
    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        self.record.set("name", Value::String(name.into()))
    }

    /// Set the share count through the `shares` validator.
    pub fn set_shares(&mut self, shares: i64) -> ValidationResult<()> {
        self.record.set("shares", Value::Integer(shares))
    }

    /// Set the price through the `price` validator.
    pub fn set_price(&mut self, price: f64) -> ValidationResult<()> {
        self.record.set("price", Value::Float(price))
    }

    /// Assign any declared field from an untyped value.
    pub fn set(&mut self, field: &str, value: Value) -> ValidationResult<()> {
        self.record.set(field, value)
    }

    /// Sell `count` shares. Selling more than are held fails with
    /// `NegativeValue`, and a result outside the `i64` range fails with
    /// `OutOfRange`. Either way `shares` is unchanged.
    pub fn sell(&mut self, count: i64) -> ValidationResult<()> {
        let held = self.shares();
        let remaining = held
            .checked_sub(count)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "shares".to_string(),
                value: Value::Integer(held),
                operation: format!("sell({})", count),
            })?;
        self.set_shares(remaining)
    }

    /// Underlying validated record.
    pub fn record(&self) -> &Record {
        &self.record
    }
}

impl PartialEq for Stock {
    fn eq(&self, other: &Self) -> bool {
        (self.name(), self.shares(), self.price()) == (other.name(), other.shares(), other.price())
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stock('{}', {}, {})",
            self.name(),
            self.shares(),
            Value::Float(self.price())
        )
    }
}

impl FieldAccess for Stock {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "cost" => Some(Value::Float(self.cost())),
            _ => self.record.field(name),
        }
    }
}

impl FromRow for Stock {
    fn from_row(row: &[String]) -> Result<Self, RowError> {
        if row.len() != Self::FIELDS.len() {
            return Err(RowError::Arity {
                expected: Self::FIELDS.len(),
                got: row.len(),
            });
        }

        let shares = row[1].trim().parse::<i64>().map_err(|_| RowError::Parse {
            column: "shares".to_string(),
            raw: row[1].clone(),
            expected: ValueType::Integer,
        })?;
        let price = row[2].trim().parse::<f64>().map_err(|_| RowError::Parse {
            column: "price".to_string(),
            raw: row[2].clone(),
            expected: ValueType::Float,
        })?;

        Ok(Self::new(row[0].clone(), shares, price)?)
    }
}
