//! # Record Validation
//!
//! Evaluates the five constraint categories of a [`Schema`] against a
//! [`Record`] in a fixed order, stopping at the first violation:
//!
//! 1. required
//! 2. oneOf
//! 3. eitherOr
//! 4. mutuallyExclusive
//! 5. enum
//!
//! Validation is a pure function of its inputs. The only side effect is a
//! `tracing` event describing the outcome.

use serde_json::Value;

use crate::error::SchemaError;
use crate::options::{EmptyOneOfPolicy, ValidatorOptions};
use crate::result::{Failure, ValidationResult};
use crate::schema::{record_from_value, Record, Schema};

/// Stateless rule evaluator.
///
/// `Validator` is `Copy + Send + Sync`; one instance can serve any number
/// of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Validate `record` against `schema`.
    pub fn validate(&self, record: &Record, schema: &Schema) -> ValidationResult {
        let result = self.check(record, schema);
        match &result {
            Err(failure) => tracing::debug!(
                kind = %failure.kind,
                fields = ?failure.fields,
                "record rejected: {}",
                failure.message
            ),
            Ok(()) => tracing::trace!(fields = record.len(), "record accepted"),
        }
        result.into()
    }

    /// Decode `record` and `schema` from JSON values, then validate.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] only when an input has the wrong shape. A
    /// record that violates the schema is `Ok(ValidationResult::Invalid(..))`.
    pub fn validate_value(
        &self,
        record: &Value,
        schema: &Value,
    ) -> Result<ValidationResult, SchemaError> {
        let schema = Schema::from_value(schema)?;
        let record = record_from_value(record.clone())?;
        Ok(self.validate(&record, &schema))
    }

    fn check(&self, record: &Record, schema: &Schema) -> Result<(), Failure> {
        check_required(record, &schema.required)?;
        self.check_one_of(record, &schema.one_of)?;

        if let Some(pair) = schema.either_or_pair() {
            if pair.both_present(record) {
                return Err(Failure::either_or(pair));
            }
        }

        if let Some(pair) = schema.mutually_exclusive_pair() {
            if pair.both_present(record) {
                return Err(Failure::mutual_exclusion(pair));
            }
        }

        for (field, allowed) in schema.enums.iter() {
            if let Some(actual) = record.get(field) {
                if !allowed.contains(actual) {
                    return Err(Failure::invalid_enum(field, allowed, actual));
                }
            }
        }

        Ok(())
    }

    fn check_one_of(&self, record: &Record, candidates: &[String]) -> Result<(), Failure> {
        if candidates.is_empty() && self.options.empty_one_of == EmptyOneOfPolicy::Vacuous {
            return Ok(());
        }
        if candidates.iter().any(|field| record.contains_key(field)) {
            Ok(())
        } else {
            Err(Failure::none_of_one_of(candidates))
        }
    }
}

fn check_required(record: &Record, required: &[String]) -> Result<(), Failure> {
    match required.iter().find(|field| !record.contains_key(*field)) {
        Some(missing) => Err(Failure::missing_required(missing)),
        None => Ok(()),
    }
}

/// Validate with default options (empty `oneOf` is no constraint).
pub fn validate(record: &Record, schema: &Schema) -> ValidationResult {
    Validator::default().validate(record, schema)
}
