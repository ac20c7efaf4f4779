//! # Boundary Errors
//!
//! Errors raised when a schema or record value does not have the shape the
//! validator expects. These are contract violations at the decoding
//! boundary; ordinary constraint mismatches are reported through
//! [`ValidationResult`](crate::ValidationResult) instead.

use thiserror::Error;

/// Error decoding a schema or record from an in-memory JSON value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The schema value is not a JSON object.
    #[error("schema must be a JSON object, found {found}")]
    SchemaNotObject {
        /// JSON type name of the value that was supplied.
        found: &'static str,
    },

    /// The record value is not a JSON object.
    #[error("record must be a JSON object, found {found}")]
    RecordNotObject {
        /// JSON type name of the value that was supplied.
        found: &'static str,
    },

    /// A recognized schema key holds a value of the wrong shape.
    #[error("malformed schema: {reason}")]
    Malformed {
        /// Decoder message naming the offending key and expected type.
        reason: String,
    },
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        SchemaError::Malformed {
            reason: e.to_string(),
        }
    }
}

/// JSON type name used in error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
