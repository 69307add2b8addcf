//! Error type for the typed get/set front end of [`crate::UrlContext`].
//!
//! None of these escape the string-keyed API: `set` reports them as `false`
//! and `get` as [`crate::Value::Null`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Key does not name a field of the record.
    #[error("unknown key: {0:?}")]
    UnknownKey(String),

    /// Value kind cannot be stored in the field.
    #[error("field {field} expects {expected}, got {got}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    /// `set` was called without any value.
    #[error("no value given for field {0}")]
    MissingValue(&'static str),

    /// A `get` argument could not be interpreted for the key.
    #[error("bad argument {arg:?} for key {key}")]
    BadArgument { key: &'static str, arg: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            StoreError::UnknownKey("nope".into()).to_string(),
            "unknown key: \"nope\""
        );
        assert_eq!(
            StoreError::TypeMismatch {
                field: "ignoreGet",
                expected: "bool",
                got: "string"
            }
            .to_string(),
            "field ignoreGet expects bool, got string"
        );
    }
}
