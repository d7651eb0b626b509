//! Single constraint checks that make up a validator chain.
//!
//! A rule knows nothing about record types or chains. It checks one value
//! for one field and either passes or reports the first problem found.

use crate::core::error::{Expected, ValidationError, ValidationResult};
use crate::core::types::{Value, ValueType};
use serde::{Deserialize, Serialize};

/// One constraint contributed by a validator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "params")]
pub enum Rule {
    /// No restriction; always passes
    PassThrough,
    /// Value must be of the given type
    Type(ValueType),
    /// Numeric value must be >= 0
    Positive,
    /// String/array length must be > 0
    NonEmpty,
}

impl Rule {
    /// Check a value against this rule.
    pub fn check(&self, field: &str, value: &Value) -> ValidationResult<()> {
        match self {
            Rule::PassThrough => {}

            Rule::Type(expected) => {
                if !expected.matches(value) {
                    return Err(ValidationError::TypeMismatch {
                        field: field.to_string(),
                        expected: Expected::Type(*expected),
                        value: value.clone(),
                    });
                }
            }

            Rule::Positive => {
                let num = value.as_number().ok_or_else(|| ValidationError::TypeMismatch {
                    field: field.to_string(),
                    expected: Expected::Number,
                    value: value.clone(),
                })?;
                if num < 0.0 {
                    return Err(ValidationError::NegativeValue {
                        field: field.to_string(),
                        value: value.clone(),
                    });
                }
            }

            Rule::NonEmpty => {
                let len = value.len().ok_or_else(|| ValidationError::TypeMismatch {
                    field: field.to_string(),
                    expected: Expected::Sized,
                    value: value.clone(),
                })?;
                if len == 0 {
                    return Err(ValidationError::EmptyValue {
                        field: field.to_string(),
                        value: value.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Get a human-readable description of this rule.
    pub fn description(&self) -> String {
        match self {
            Rule::PassThrough => "Accepts any value".to_string(),
            Rule::Type(ValueType::Any) => "Accepts any type".to_string(),
            Rule::Type(t) => format!("Must be of type {}", t),
            Rule::Positive => "Must be >= 0".to_string(),
            Rule::NonEmpty => "Cannot be empty".to_string(),
        }
    }

    /// Whether the rule can never fail.
    pub fn is_pass_through(&self) -> bool {
        matches!(self, Rule::PassThrough | Rule::Type(ValueType::Any))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_through_accepts_everything() {
        for value in [
            Value::None,
            Value::Integer(-5),
            Value::from(""),
            Value::Array(vec![]),
        ] {
            assert!(Rule::PassThrough.check("f", &value).is_ok());
            assert!(Rule::Type(ValueType::Any).check("f", &value).is_ok());
        }
    }

    #[test]
    fn test_positive() {
        assert!(Rule::Positive.check("n", &Value::Integer(0)).is_ok());
        assert!(Rule::Positive.check("n", &Value::Float(0.5)).is_ok());

        let err = Rule::Positive.check("n", &Value::Integer(-1)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeValue {
                field: "n".to_string(),
                value: Value::Integer(-1),
            }
        );

        let err = Rule::Positive.check("n", &Value::from("abc")).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TypeMismatch { expected: Expected::Number, .. }
        ));
    }

    #[test]
    fn test_non_empty() {
        assert!(Rule::NonEmpty.check("s", &Value::from("x")).is_ok());
        assert!(Rule::NonEmpty
            .check("s", &Value::Array(vec![Value::None]))
            .is_ok());
        assert!(matches!(
            Rule::NonEmpty.check("s", &Value::from("")),
            Err(ValidationError::EmptyValue { .. })
        ));
        assert!(matches!(
            Rule::NonEmpty.check("s", &Value::Integer(3)),
            Err(ValidationError::TypeMismatch { expected: Expected::Sized, .. })
        ));
    }

    #[test]
    fn test_type_rule() {
        let rule = Rule::Type(ValueType::Float);
        assert!(rule.check("price", &Value::Float(1.0)).is_ok());
        let err = rule.check("price", &Value::Integer(1)).unwrap_err();
        assert_eq!(err.field(), Some("price"));
    }
}
