//! # Validation Results
//!
//! The outcome of one validation call. A failure names the first rule that
//! was violated, the field(s) involved, and a human-readable message.
//! Messages are informational; callers branch on [`FailureKind`].

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::schema::FieldPair;

/// Which constraint category rejected the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FailureKind {
    MissingRequiredField,
    NoneOfOneOfPresent,
    EitherOrViolation,
    MutualExclusionViolation,
    InvalidEnumValue,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "MissingRequiredField",
            Self::NoneOfOneOfPresent => "NoneOfOneOfPresent",
            Self::EitherOrViolation => "EitherOrViolation",
            Self::MutualExclusionViolation => "MutualExclusionViolation",
            Self::InvalidEnumValue => "InvalidEnumValue",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first violated rule of a rejected record.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{message}")]
pub struct Failure {
    pub kind: FailureKind,
    /// Field names the rule refers to, in schema order.
    pub fields: Vec<String>,
    pub message: String,
    /// Allowed values, for [`FailureKind::InvalidEnumValue`] only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed: Vec<Value>,
    /// Offending value, for [`FailureKind::InvalidEnumValue`] only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
}

impl Failure {
    fn new(kind: FailureKind, fields: Vec<String>, message: String) -> Self {
        Self {
            kind,
            fields,
            message,
            allowed: Vec::new(),
            actual: None,
        }
    }

    pub(crate) fn missing_required(field: &str) -> Self {
        Self::new(
            FailureKind::MissingRequiredField,
            vec![field.to_string()],
            format!("Required field {field} missing"),
        )
    }

    pub(crate) fn none_of_one_of(candidates: &[String]) -> Self {
        Self::new(
            FailureKind::NoneOfOneOfPresent,
            candidates.to_vec(),
            format!(
                "None of the oneOf fields [{}] are present",
                candidates.join(", ")
            ),
        )
    }

    pub(crate) fn either_or(pair: FieldPair<'_>) -> Self {
        Self::new(
            FailureKind::EitherOrViolation,
            vec![pair.first.to_string(), pair.second.to_string()],
            format!(
                "Either or fields {} and {} both present",
                pair.first, pair.second
            ),
        )
    }

    pub(crate) fn mutual_exclusion(pair: FieldPair<'_>) -> Self {
        Self::new(
            FailureKind::MutualExclusionViolation,
            vec![pair.first.to_string(), pair.second.to_string()],
            format!(
                "Mutually exclusive fields {} and {} both present",
                pair.first, pair.second
            ),
        )
    }

    pub(crate) fn invalid_enum(field: &str, allowed: &[Value], actual: &Value) -> Self {
        let listed: Vec<String> = allowed.iter().map(display_value).collect();
        Self {
            allowed: allowed.to_vec(),
            actual: Some(actual.clone()),
            ..Self::new(
                FailureKind::InvalidEnumValue,
                vec![field.to_string()],
                format!(
                    "Field {field} has invalid value, must be one of [{}]",
                    listed.join(", ")
                ),
            )
        }
    }
}

/// Strings render bare; everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Pass/fail outcome of validating one record against one schema.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid,
    Invalid(Failure),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Valid => None,
            Self::Invalid(failure) => Some(failure),
        }
    }

    pub fn kind(&self) -> Option<FailureKind> {
        self.failure().map(|f| f.kind)
    }

    pub fn message(&self) -> Option<&str> {
        self.failure().map(|f| f.message.as_str())
    }

    /// Convert to a `Result` so a failure can be propagated with `?`.
    pub fn into_result(self) -> Result<(), Failure> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(failure) => Err(failure),
        }
    }
}

impl From<Result<(), Failure>> for ValidationResult {
    fn from(result: Result<(), Failure>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(failure) => Self::Invalid(failure),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::Invalid(failure) => write!(f, "invalid ({}): {}", failure.kind, failure.message),
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Report<'a> {
            valid: bool,
            #[serde(flatten)]
            failure: Option<&'a Failure>,
        }

        Report {
            valid: self.is_valid(),
            failure: self.failure(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_serializes_as_variant_name() {
        assert_eq!(
            serde_json::to_value(FailureKind::MutualExclusionViolation).unwrap(),
            json!("MutualExclusionViolation")
        );
        assert_eq!(FailureKind::InvalidEnumValue.to_string(), "InvalidEnumValue");
    }

    #[test]
    fn messages_follow_rule_wording() {
        assert_eq!(
            Failure::missing_required("name").message,
            "Required field name missing"
        );
        assert_eq!(
            Failure::none_of_one_of(&["home".to_string(), "cell".to_string()]).message,
            "None of the oneOf fields [home, cell] are present"
        );
        assert_eq!(
            Failure::none_of_one_of(&[]).message,
            "None of the oneOf fields [] are present"
        );
        let pair = FieldPair {
            first: "a",
            second: "b",
        };
        assert_eq!(
            Failure::either_or(pair).message,
            "Either or fields a and b both present"
        );
        assert_eq!(
            Failure::mutual_exclusion(pair).message,
            "Mutually exclusive fields a and b both present"
        );
    }

    #[test]
    fn enum_failure_carries_allowed_and_actual() {
        let failure = Failure::invalid_enum("day", &[json!("MO"), json!(2)], &json!("FR"));
        assert_eq!(failure.kind, FailureKind::InvalidEnumValue);
        assert_eq!(
            failure.message,
            "Field day has invalid value, must be one of [MO, 2]"
        );
        assert_eq!(failure.allowed, vec![json!("MO"), json!(2)]);
        assert_eq!(failure.actual, Some(json!("FR")));
    }

    #[test]
    fn valid_result_serializes_flag_only() {
        assert_eq!(
            serde_json::to_value(ValidationResult::Valid).unwrap(),
            json!({ "valid": true })
        );
    }

    #[test]
    fn invalid_result_serializes_failure_inline() {
        let result = ValidationResult::Invalid(Failure::missing_required("id"));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "valid": false,
                "kind": "MissingRequiredField",
                "fields": ["id"],
                "message": "Required field id missing"
            })
        );
    }

    #[test]
    fn into_result_round_trips_through_from() {
        let failure = Failure::missing_required("id");
        let result = ValidationResult::Invalid(failure.clone());
        assert_eq!(result.clone().into_result(), Err(failure));
        assert_eq!(
            ValidationResult::from(result.into_result()).kind(),
            Some(FailureKind::MissingRequiredField)
        );
        assert_eq!(ValidationResult::from(Ok(())), ValidationResult::Valid);
    }

    #[test]
    fn display_includes_kind_and_message() {
        let result = ValidationResult::Invalid(Failure::missing_required("id"));
        assert_eq!(
            result.to_string(),
            "invalid (MissingRequiredField): Required field id missing"
        );
        assert_eq!(ValidationResult::Valid.to_string(), "valid");
    }
}
