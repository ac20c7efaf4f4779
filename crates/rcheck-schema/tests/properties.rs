//! Property tests for the per-category validation laws.

use proptest::prelude::*;
use rcheck_schema::{validate, FailureKind, Record, Schema};
use serde_json::{json, Value};

const FIELDS: &[&str] = &["a", "b", "c", "d", "e", "f"];

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[A-Z]{1,3}".prop_map(Value::String),
    ]
}

/// Records over a small field alphabet so rules frequently collide.
fn record() -> impl Strategy<Value = Record> {
    prop::collection::vec((prop::sample::select(FIELDS), scalar()), 0..8)
        .prop_map(|entries| entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

fn field() -> impl Strategy<Value = String> {
    prop::sample::select(FIELDS).prop_map(str::to_string)
}

fn fields(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(field(), 1..=max)
}

proptest! {
    /// A schema with no recognized keys accepts every record.
    #[test]
    fn empty_schema_accepts_everything(data in record()) {
        prop_assert!(validate(&data, &Schema::new()).is_valid());
    }

    /// Missing any required field fails with MissingRequiredField.
    #[test]
    fn required_law(data in record(), required in fields(4)) {
        let schema = Schema::new().required(required.clone());
        let result = validate(&data, &schema);
        if required.iter().all(|f| data.contains_key(f)) {
            prop_assert!(result.is_valid());
        } else {
            prop_assert_eq!(result.kind(), Some(FailureKind::MissingRequiredField));
        }
    }

    /// A non-empty oneOf passes iff one of its candidates is present.
    #[test]
    fn one_of_law(data in record(), candidates in fields(4)) {
        let schema = Schema::new().one_of(candidates.clone());
        let result = validate(&data, &schema);
        if candidates.iter().any(|f| data.contains_key(f)) {
            prop_assert!(result.is_valid());
        } else {
            prop_assert_eq!(result.kind(), Some(FailureKind::NoneOfOneOfPresent));
        }
    }

    /// eitherOr fails iff both fields are present.
    #[test]
    fn either_or_law(data in record(), first in field(), second in field()) {
        let schema = Schema::new().either_or(first.clone(), second.clone());
        let result = validate(&data, &schema);
        if data.contains_key(&first) && data.contains_key(&second) {
            prop_assert_eq!(result.kind(), Some(FailureKind::EitherOrViolation));
        } else {
            prop_assert!(result.is_valid());
        }
    }

    /// mutuallyExclusive fails iff both fields are present.
    #[test]
    fn mutually_exclusive_law(data in record(), first in field(), second in field()) {
        let schema = Schema::new().mutually_exclusive(first.clone(), second.clone());
        let result = validate(&data, &schema);
        if data.contains_key(&first) && data.contains_key(&second) {
            prop_assert_eq!(result.kind(), Some(FailureKind::MutualExclusionViolation));
        } else {
            prop_assert!(result.is_valid());
        }
    }

    /// An enum-constrained field fails only when present with a value
    /// outside its allowed set.
    #[test]
    fn enum_law(
        data in record(),
        constrained in field(),
        allowed in prop::collection::vec(scalar(), 0..4),
    ) {
        let schema = Schema::new().allow(constrained.clone(), allowed.clone());
        let result = validate(&data, &schema);
        match data.get(&constrained) {
            Some(value) if !allowed.contains(value) => {
                prop_assert_eq!(result.kind(), Some(FailureKind::InvalidEnumValue));
            }
            _ => {
                prop_assert!(result.is_valid());
            }
        }
    }

    /// Validation is a pure function of its inputs.
    #[test]
    fn validation_is_idempotent(
        data in record(),
        required in fields(2),
        candidates in fields(3),
        first in field(),
        second in field(),
    ) {
        let schema = Schema::new()
            .required(required)
            .one_of(candidates)
            .either_or(first.clone(), second.clone())
            .mutually_exclusive(second, first);
        prop_assert_eq!(validate(&data, &schema), validate(&data, &schema));
    }
}
