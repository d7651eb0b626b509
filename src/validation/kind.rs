//! Validator kinds and their resolution order.
//!
//! A kind is a named definition: its own [`Rule`] plus an ordered list of
//! parent kinds. Composed kinds such as `PositiveInteger` have no rule of
//! their own and inherit the rules of their parents.
//!
//! Resolution order is depth-first, left to right, starting with the kind
//! itself. A kind reachable along several paths keeps only its last
//! position, so a shared ancestor runs once, after everything derived from
//! it. Kinds are identified by name.

use crate::core::types::ValueType;
use crate::validation::rule::Rule;
use std::collections::HashSet;
use std::sync::Arc;

/// Named validator definition with ordered parents.
#[derive(Debug, Clone)]
pub struct ValidatorKind {
    name: String,
    rule: Rule,
    parents: Vec<Arc<ValidatorKind>>,
}

impl ValidatorKind {
    /// Define a kind with its own rule.
    pub fn new(
        name: impl Into<String>,
        rule: Rule,
        parents: Vec<Arc<ValidatorKind>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            rule,
            parents,
        })
    }

    /// Define a kind that only combines its parents.
    pub fn compose(name: impl Into<String>, parents: Vec<Arc<ValidatorKind>>) -> Arc<Self> {
        Self::new(name, Rule::PassThrough, parents)
    }

    /// Name of this kind.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kind's own rule.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Declared parents, in order.
    pub fn parents(&self) -> &[Arc<ValidatorKind>] {
        &self.parents
    }

    /// Kinds in the order their rules run.
    pub fn linearize(&self) -> Vec<&ValidatorKind> {
        let mut visits = Vec::new();
        self.visit(&mut visits);

        let mut seen = HashSet::new();
        let mut order: Vec<&ValidatorKind> = visits
            .into_iter()
            .rev()
            .filter(|kind| seen.insert(kind.name.as_str()))
            .collect();
        order.reverse();
        order
    }

    fn visit<'a>(&'a self, visits: &mut Vec<&'a ValidatorKind>) {
        visits.push(self);
        for parent in &self.parents {
            parent.visit(visits);
        }
    }

    /// Flattened rule chain, in resolution order.
    pub fn chain(&self) -> Vec<Rule> {
        self.linearize().into_iter().map(|kind| kind.rule).collect()
    }

    /// Whether `name` is this kind or one of its ancestors.
    pub fn derives_from(&self, name: &str) -> bool {
        self.name == name || self.parents.iter().any(|p| p.derives_from(name))
    }
}

// ============================================================================
// Built-in kinds
// ============================================================================

/// Base kind: no restriction.
pub fn validator() -> Arc<ValidatorKind> {
    ValidatorKind::new("Validator", Rule::PassThrough, Vec::new())
}

/// Base for type checks. On its own it accepts any type.
pub fn typed() -> Arc<ValidatorKind> {
    typed_as("Typed", ValueType::Any)
}

fn typed_as(name: &str, expected: ValueType) -> Arc<ValidatorKind> {
    let parent = if expected == ValueType::Any {
        validator()
    } else {
        typed()
    };
    ValidatorKind::new(name, Rule::Type(expected), vec![parent])
}

/// Value must be an integer.
pub fn integer() -> Arc<ValidatorKind> {
    typed_as("Integer", ValueType::Integer)
}

/// Value must be a float.
pub fn float() -> Arc<ValidatorKind> {
    typed_as("Float", ValueType::Float)
}

/// Value must be a string.
pub fn string() -> Arc<ValidatorKind> {
    typed_as("String", ValueType::String)
}

/// Numeric value must be >= 0.
pub fn positive() -> Arc<ValidatorKind> {
    ValidatorKind::new("Positive", Rule::Positive, vec![validator()])
}

/// Length must be > 0.
pub fn non_empty() -> Arc<ValidatorKind> {
    ValidatorKind::new("NonEmpty", Rule::NonEmpty, vec![validator()])
}

/// `Integer` then `Positive`.
pub fn positive_integer() -> Arc<ValidatorKind> {
    ValidatorKind::compose("PositiveInteger", vec![integer(), positive()])
}

/// `Float` then `Positive`.
pub fn positive_float() -> Arc<ValidatorKind> {
    ValidatorKind::compose("PositiveFloat", vec![float(), positive()])
}

/// `String` then `NonEmpty`.
pub fn non_empty_string() -> Arc<ValidatorKind> {
    ValidatorKind::compose("NonEmptyString", vec![string(), non_empty()])
}
