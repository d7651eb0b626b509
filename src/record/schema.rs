//! Record types: an ordered set of fields, each governed by a validator.

use crate::core::error::{ValidationError, ValidationResult};
use crate::validation::kind::ValidatorKind;
use crate::validation::validator::Validator;
use indexmap::IndexMap;

/// A record type definition.
///
/// Validators are defined once per record type and shared by every
/// instance. Field order is declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    name: String,
    fields: IndexMap<String, Validator>,
}

impl RecordSchema {
    /// Start defining a record type.
    pub fn builder(name: impl Into<String>) -> RecordSchemaBuilder {
        RecordSchemaBuilder::new(name)
    }

    /// Name of the record type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record type declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validator governing `field`.
    pub fn validator(&self, field: &str) -> Option<&Validator> {
        self.fields.get(field)
    }

    /// Validator governing `field`, or `FieldNotFound`.
    pub fn require(&self, field: &str) -> ValidationResult<&Validator> {
        self.fields
            .get(field)
            .ok_or_else(|| ValidationError::FieldNotFound {
                record: self.name.clone(),
                field: field.to_string(),
            })
    }

    /// Declared fields with their validators.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Validator)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Builder for [`RecordSchema`].
///
/// Each validator is bound to its field name here, at definition time.
pub struct RecordSchemaBuilder {
    name: String,
    fields: IndexMap<String, Validator>,
    error: Option<ValidationError>,
}

impl RecordSchemaBuilder {
    /// Create a new builder for the named record type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
            error: None,
        }
    }

    /// Declare a field governed by a validator of the given kind.
    pub fn field(self, name: impl Into<String>, kind: &ValidatorKind) -> Self {
        self.validator(name, Validator::new(kind))
    }

    /// Declare a field with an existing validator.
    ///
    /// Fails at [`build`](Self::build) if the validator is already bound to a
    /// different field.
    pub fn validator(mut self, name: impl Into<String>, mut validator: Validator) -> Self {
        let name = name.into();
        if self.error.is_none() {
            match validator.bind(name.clone()) {
                Ok(()) => {
                    self.fields.insert(name, validator);
                }
                Err(e) => self.error = Some(e),
            }
        }
        self
    }

    /// Finish the definition.
    pub fn build(self) -> ValidationResult<RecordSchema> {
        if let Some(error) = self.error {
            return Err(error);
        }
        log::debug!(
            "defined record type {} with fields [{}]",
            self.name,
            self.fields.keys().cloned().collect::<Vec<_>>().join(", ")
        );
        Ok(RecordSchema {
            name: self.name,
            fields: self.fields,
        })
    }
}
