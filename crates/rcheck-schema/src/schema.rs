//! # Schema Model
//!
//! In-memory representation of a constraint schema and the record it is
//! checked against.
//!
//! Every recognized schema key is an optional container that defaults to
//! empty, so an absent key never causes a lookup failure. Keys the
//! validator does not recognize are ignored when decoding.
//!
//! ## Wire Names
//!
//! | Key | Field | Shape |
//! |---|---|---|
//! | `required` | [`Schema::required`] | list of field names |
//! | `oneOf` | [`Schema::one_of`] | list of field names |
//! | `eitherOr` | [`Schema::either_or`] | list of field names (pair) |
//! | `mutuallyExclusive` | [`Schema::mutually_exclusive`] | list of field names (pair) |
//! | `enum` | [`Schema::enums`] | object of field → list of values |

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{json_type_name, SchemaError};

/// A data record: field names mapped to arbitrary JSON values.
///
/// A field is present when its key exists, whatever its value (including
/// `null`).
pub type Record = serde_json::Map<String, Value>;

/// Take ownership of a JSON value as a [`Record`].
///
/// # Errors
///
/// Returns [`SchemaError::RecordNotObject`] if `value` is not an object.
pub fn record_from_value(value: Value) -> Result<Record, SchemaError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(SchemaError::RecordNotObject {
            found: json_type_name(&other),
        }),
    }
}

/// Two field names that must not both be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPair<'a> {
    pub first: &'a str,
    pub second: &'a str,
}

impl FieldPair<'_> {
    /// True when both fields of the pair exist in `record`.
    pub fn both_present(&self, record: &Record) -> bool {
        record.contains_key(self.first) && record.contains_key(self.second)
    }
}

/// Allowed values per field, in declaration order.
///
/// Decodes from a JSON object whose values are arrays. A repeated key
/// replaces the earlier entry in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumConstraint {
    entries: Vec<(String, Vec<Value>)>,
}

impl EnumConstraint {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Insert or replace the allowed values for `field`.
    pub fn insert(&mut self, field: impl Into<String>, allowed: Vec<Value>) {
        let field = field.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = allowed,
            None => self.entries.push((field, allowed)),
        }
    }

    /// Allowed values for `field`, if constrained.
    pub fn get(&self, field: &str) -> Option<&[Value]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, allowed)| allowed.as_slice())
    }

    /// Iterate `(field, allowed values)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.entries
            .iter()
            .map(|(name, allowed)| (name.as_str(), allowed.as_slice()))
    }
}

impl Serialize for EnumConstraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, allowed) in &self.entries {
            map.serialize_entry(field, allowed)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EnumConstraint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EnumVisitor;

        impl<'de> Visitor<'de> for EnumVisitor {
            type Value = EnumConstraint;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping field names to arrays of allowed values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut constraint = EnumConstraint::default();
                while let Some((field, allowed)) = access.next_entry::<String, Vec<Value>>()? {
                    constraint.insert(field, allowed);
                }
                Ok(constraint)
            }
        }

        deserializer.deserialize_map(EnumVisitor)
    }
}

/// Declarative presence and value constraints for a [`Record`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Fields that must all be present.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Fields of which at least one must be present.
    #[serde(default, rename = "oneOf", skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<String>,

    /// Pair of fields that must not both be present. Ignored unless it
    /// names exactly two fields.
    #[serde(default, rename = "eitherOr", skip_serializing_if = "Vec::is_empty")]
    pub either_or: Vec<String>,

    /// Pair of fields that must not both be present. Ignored unless it
    /// names exactly two fields.
    #[serde(
        default,
        rename = "mutuallyExclusive",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub mutually_exclusive: Vec<String>,

    /// Allowed values for fields, checked only when the field is present.
    #[serde(default, rename = "enum", skip_serializing_if = "EnumConstraint::is_empty")]
    pub enums: EnumConstraint,
}

impl Schema {
    /// An empty schema; every record satisfies it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a schema from an in-memory JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SchemaNotObject`] if `value` is not an object,
    /// and [`SchemaError::Malformed`] if a recognized key has the wrong
    /// shape (for example `required: "id"` instead of `required: ["id"]`).
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        if !value.is_object() {
            return Err(SchemaError::SchemaNotObject {
                found: json_type_name(value),
            });
        }
        Ok(Schema::deserialize(value)?)
    }

    /// True when no recognized key carries any rule.
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
            && self.one_of.is_empty()
            && self.either_or.is_empty()
            && self.mutually_exclusive.is_empty()
            && self.enums.is_empty()
    }

    /// The `eitherOr` pair, when exactly two names are configured.
    pub fn either_or_pair(&self) -> Option<FieldPair<'_>> {
        as_pair(&self.either_or)
    }

    /// The `mutuallyExclusive` pair, when exactly two names are configured.
    pub fn mutually_exclusive_pair(&self) -> Option<FieldPair<'_>> {
        as_pair(&self.mutually_exclusive)
    }

    pub fn required<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn one_of<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.one_of.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn either_or(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.either_or = vec![first.into(), second.into()];
        self
    }

    pub fn mutually_exclusive(
        mut self,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        self.mutually_exclusive = vec![first.into(), second.into()];
        self
    }

    /// Restrict `field` to the given values when it is present.
    pub fn allow<I, V>(mut self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.enums
            .insert(field, values.into_iter().map(Into::into).collect());
        self
    }
}

fn as_pair(names: &[String]) -> Option<FieldPair<'_>> {
    match names {
        [first, second] => Some(FieldPair { first, second }),
        _ => None,
    }
}
