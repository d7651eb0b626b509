//! Record instances and attribute lookup.

use crate::core::error::{ValidationError, ValidationResult};
use crate::core::types::Value;
use crate::record::schema::RecordSchema;
use indexmap::IndexMap;
use std::sync::Arc;

/// Attribute lookup by field name.
///
/// This is what the table printer uses to pull values out of records.
pub trait FieldAccess {
    /// Value of the named field, or `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<Value>;
}

/// An instance of a [`RecordSchema`].
///
/// Values live in a per-instance map keyed by field name; the validators
/// stay on the shared schema. Every stored value has passed its field's
/// whole chain.
#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<RecordSchema>,
    values: IndexMap<String, Value>,
}

impl Record {
    /// Create a record, assigning `values` to the fields in declaration
    /// order.
    ///
    /// Either every field passes and a record is returned, or the first
    /// failure is returned and no record exists.
    pub fn new(schema: Arc<RecordSchema>, values: Vec<Value>) -> ValidationResult<Self> {
        if values.len() != schema.len() {
            return Err(ValidationError::ArityMismatch {
                record: schema.name().to_string(),
                expected: schema.len(),
                got: values.len(),
            });
        }

        let mut storage = IndexMap::with_capacity(values.len());
        for ((_, validator), value) in schema.fields().zip(values) {
            validator.assign(&mut storage, value)?;
        }

        Ok(Self {
            schema,
            values: storage,
        })
    }

    /// The record type.
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Current value of a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Assign a field through its validator chain.
    ///
    /// On failure the previous value is kept.
    pub fn set(&mut self, field: &str, value: Value) -> ValidationResult<()> {
        let validator = self.schema.require(field)?;
        validator.assign(&mut self.values, value)
    }

    /// Field values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap equality ignores insertion order.
        self.schema.name() == other.schema.name() && self.values == other.values
    }
}

impl FieldAccess for Record {
    fn field(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn field(&self, name: &str) -> Option<Value> {
        (**self).field(name)
    }
}
