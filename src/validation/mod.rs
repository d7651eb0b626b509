//! Field validation: rules, validator kinds, and bound validators.
//!
//! A [`ValidatorKind`] describes a constraint and the kinds it builds on.
//! A [`Validator`] is a kind resolved into an ordered rule chain and bound to
//! one field of a record type.

pub mod rule;
pub mod kind;
pub mod validator;

pub use rule::Rule;
pub use kind::ValidatorKind;
pub use validator::Validator;
