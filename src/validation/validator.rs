//! Field validators: a flattened rule chain bound to one field name.

use crate::core::error::{ValidationError, ValidationResult};
use crate::core::types::Value;
use crate::validation::kind::ValidatorKind;
use crate::validation::rule::Rule;
use indexmap::IndexMap;

const UNBOUND: &str = "<unbound>";

/// A validator kind resolved into an explicit rule chain.
///
/// The chain is computed once, at construction, and never changes. The field
/// name is attached later, when the validator is placed on a record type.
#[derive(Debug, Clone, PartialEq)]
pub struct Validator {
    kind: String,
    name: Option<String>,
    chain: Vec<Rule>,
    resolution: Vec<String>,
}

impl Validator {
    /// Resolve a kind into an unbound validator.
    pub fn new(kind: &ValidatorKind) -> Self {
        let order = kind.linearize();
        let resolution: Vec<String> = order.iter().map(|k| k.name().to_string()).collect();
        let chain: Vec<Rule> = order.iter().map(|k| k.rule()).collect();

        log::debug!(
            "resolved validator {}: {}",
            kind.name(),
            resolution.join(" -> ")
        );

        Self {
            kind: kind.name().to_string(),
            name: None,
            chain,
            resolution,
        }
    }

    /// Resolve a kind and bind it to a field name right away.
    pub fn named(kind: &ValidatorKind, name: impl Into<String>) -> Self {
        let mut validator = Self::new(kind);
        validator.name = Some(name.into());
        validator
    }

    /// Attach the validator to a field.
    ///
    /// Binding again to the same name is a no-op; binding to a different
    /// name fails.
    pub fn bind(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        match &self.name {
            Some(bound) if *bound != name => Err(ValidationError::AlreadyBound {
                bound: bound.clone(),
                requested: name,
            }),
            Some(_) => Ok(()),
            None => {
                log::debug!("bound {} validator to field '{}'", self.kind, name);
                self.name = Some(name);
                Ok(())
            }
        }
    }

    /// Field name, once bound.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name of the kind this validator was built from.
    pub fn kind_name(&self) -> &str {
        &self.kind
    }

    /// Rules in the order they run.
    pub fn chain(&self) -> &[Rule] {
        &self.chain
    }

    /// Kind names in the order their rules run.
    pub fn resolution_order(&self) -> &[String] {
        &self.resolution
    }

    /// Run every rule in order. The first failure is returned and the
    /// remaining rules are not evaluated.
    pub fn check(&self, value: Value) -> ValidationResult<Value> {
        let field = self.name().unwrap_or(UNBOUND);
        for rule in &self.chain {
            rule.check(field, &value)?;
        }
        Ok(value)
    }

    /// Check a value and store it under the bound field name.
    ///
    /// An unbound validator still checks the value but never writes into
    /// `storage`. On failure `storage` is left untouched.
    pub fn assign(
        &self,
        storage: &mut IndexMap<String, Value>,
        value: Value,
    ) -> ValidationResult<()> {
        let value = self.check(value)?;
        match &self.name {
            Some(name) => {
                storage.insert(name.clone(), value);
            }
            None => log::warn!("{} validator is unbound, value not stored", self.kind),
        }
        Ok(())
    }
}

impl From<&ValidatorKind> for Validator {
    fn from(kind: &ValidatorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{Expected, ValidationErrorKind};
    use crate::core::types::ValueType;
    use crate::validation::kind;

    #[test]
    fn test_check_returns_value_unchanged() {
        let validator = Validator::named(&kind::positive_float(), "price");
        assert_eq!(
            validator.check(Value::Float(490.1)).unwrap(),
            Value::Float(490.1)
        );
    }

    #[test]
    fn test_first_failure_wins() {
        // -1.5 is both the wrong type and negative; the type rule runs first.
        let validator = Validator::named(&kind::positive_integer(), "shares");
        let err = validator.check(Value::Float(-1.5)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                field: "shares".to_string(),
                expected: Expected::Type(ValueType::Integer),
                value: Value::Float(-1.5),
            }
        );

        let err = validator.check(Value::Integer(-1)).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::NegativeValue);
    }

    #[test]
    fn test_string_then_non_empty() {
        let validator = Validator::named(&kind::non_empty_string(), "name");
        assert!(validator.check(Value::from("GOOG")).is_ok());
        assert_eq!(
            validator.check(Value::from("")).unwrap_err().kind(),
            ValidationErrorKind::EmptyValue
        );
        assert_eq!(
            validator.check(Value::Array(vec![])).unwrap_err().kind(),
            ValidationErrorKind::TypeMismatch
        );
    }

    #[test]
    fn test_bind_once() {
        let mut validator = Validator::new(&kind::integer());
        assert_eq!(validator.name(), None);
        validator.bind("shares").unwrap();
        validator.bind("shares").unwrap();
        let err = validator.bind("price").unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::AlreadyBound);
        assert_eq!(validator.name(), Some("shares"));
    }

    #[test]
    fn test_unbound_never_writes() {
        let validator = Validator::new(&kind::integer());
        let mut storage = IndexMap::new();
        validator.assign(&mut storage, Value::Integer(3)).unwrap();
        assert!(storage.is_empty());

        let err = validator.check(Value::from("x")).unwrap_err();
        assert_eq!(err.field(), Some("<unbound>"));
    }

    #[test]
    fn test_failed_assign_leaves_storage() {
        let validator = Validator::named(&kind::positive_integer(), "shares");
        let mut storage = IndexMap::new();
        validator.assign(&mut storage, Value::Integer(100)).unwrap();
        assert!(validator.assign(&mut storage, Value::Integer(-5)).is_err());
        assert_eq!(storage.get("shares"), Some(&Value::Integer(100)));
    }

    #[test]
    fn test_resolution_order() {
        let validator = Validator::new(&kind::non_empty_string());
        assert_eq!(
            validator.resolution_order(),
            &["NonEmptyString", "String", "Typed", "NonEmpty", "Validator"]
        );
        assert_eq!(validator.chain().len(), 5);
        assert_eq!(validator.kind_name(), "NonEmptyString");
    }
}
