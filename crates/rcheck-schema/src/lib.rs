//! # rcheck-schema — Record Constraint Validation
//!
//! Validates a flat JSON record (field name → value) against a declarative
//! schema of presence and value constraints.
//!
//! ## Constraint Categories
//!
//! A [`Schema`] recognizes five optional keys, checked in this order:
//!
//! 1. `required` — every listed field must be present.
//! 2. `oneOf` — at least one listed field must be present.
//! 3. `eitherOr` — the two listed fields must not both be present.
//! 4. `mutuallyExclusive` — same rule as `eitherOr`, configured separately.
//! 5. `enum` — a present field's value must be one of its allowed values.
//!
//! Evaluation stops at the first violated rule. The outcome is a
//! [`ValidationResult`] carrying a [`FailureKind`] and a message; a failed
//! validation is a normal value, not an error.
//!
//! ## Crate Policy
//!
//! - No I/O, no printing. Diagnostics go through `tracing` only.
//! - [`SchemaError`] is reserved for inputs of the wrong shape at the
//!   decoding boundary. Rule violations are never `SchemaError`s.
//! - The validator is stateless: identical inputs yield identical results.

pub mod error;
pub mod options;
pub mod result;
pub mod schema;
pub mod validate;

pub use error::SchemaError;
pub use options::{EmptyOneOfPolicy, ValidatorOptions};
pub use result::{Failure, FailureKind, ValidationResult};
pub use schema::{record_from_value, EnumConstraint, FieldPair, Record, Schema};
pub use validate::{validate, Validator};
