//! # Validator Options
//!
//! Knobs that change how the validator treats degenerate schemas. Options
//! deserialize from a camelCase JSON object with every field defaulted, so
//! `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

/// How an empty (or absent) `oneOf` list is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyOneOfPolicy {
    /// An empty `oneOf` list imposes no constraint.
    #[default]
    Vacuous,
    /// An empty `oneOf` list always fails with
    /// [`FailureKind::NoneOfOneOfPresent`](crate::FailureKind::NoneOfOneOfPresent),
    /// since no field can match an empty candidate set.
    Strict,
}

/// Configuration for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorOptions {
    /// Treatment of an empty `oneOf` list.
    pub empty_one_of: EmptyOneOfPolicy,
}

impl ValidatorOptions {
    /// Options that reproduce the strict empty-`oneOf` behavior.
    pub fn strict() -> Self {
        Self {
            empty_one_of: EmptyOneOfPolicy::Strict,
        }
    }
}
