//! Record field names and the sanitizing `set` path.

use super::UrlContext;
use crate::error::StoreError;
use crate::sanitize;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// A stored field of [`UrlContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Site,
    Domain,
    Action,
    Callback,
    Current,
    Slugs,
    Filters,
    IgnoreGet,
    Method,
    IdFound,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Site,
        Field::Domain,
        Field::Action,
        Field::Callback,
        Field::Current,
        Field::Slugs,
        Field::Filters,
        Field::IgnoreGet,
        Field::Method,
        Field::IdFound,
    ];

    /// Key name as exposed by the record map.
    pub fn name(self) -> &'static str {
        match self {
            Field::Site => "site",
            Field::Domain => "domain",
            Field::Action => "action",
            Field::Callback => "callback",
            Field::Current => "current",
            Field::Slugs => "slugs",
            Field::Filters => "filters",
            Field::IgnoreGet => "ignoreGet",
            Field::Method => "method",
            Field::IdFound => "idFound",
        }
    }

    /// Fields that only ever take the first value passed to `set`.
    fn takes_first_only(self) -> bool {
        matches!(self, Field::IgnoreGet | Field::Filters | Field::IdFound)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive lookup (`IGNOREGET`, `ignoreget` and `ignoreGet` all match).
impl FromStr for Field {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| StoreError::UnknownKey(s.to_string()))
    }
}

impl UrlContext {
    /// Sanitizes `values` and stores them under `key`.
    ///
    /// Returns `false` when the key is unknown or the values don't fit the field.
    pub fn set(&mut self, key: &str, values: Vec<Value>) -> bool {
        let key = sanitize::sanitize_str(key);
        match key.parse::<Field>() {
            Ok(field) => match self.try_set(field, values) {
                Ok(()) => true,
                Err(err) => {
                    tracing::debug!(%field, error = %err, "set rejected");
                    false
                }
            },
            Err(err) => {
                tracing::debug!(error = %err, "set rejected");
                false
            }
        }
    }

    /// Typed form of [`UrlContext::set`].
    pub fn try_set(&mut self, field: Field, values: Vec<Value>) -> Result<(), StoreError> {
        let mut values: Vec<Value> = values.into_iter().map(sanitize::filter).collect();
        let value = if values.is_empty() {
            return Err(StoreError::MissingValue(field.name()));
        } else if values.len() == 1 || field.takes_first_only() {
            values.swap_remove(0)
        } else {
            Value::List(values)
        };

        match field {
            Field::Site => self.site = optional_string(field, value)?,
            Field::Domain => self.domain = optional_string(field, value)?,
            Field::Current => self.current = optional_string(field, value)?,
            Field::Method => self.method = optional_string(field, value)?,
            Field::Action => self.action = string(field, value)?,
            Field::Callback => self.callback = string(field, value)?,
            Field::Slugs => self.slugs = strings(field, value)?,
            Field::Filters => self.filters = strings(field, value)?,
            Field::IgnoreGet => match value {
                Value::Bool(b) => self.ignore_get = b,
                other => return Err(mismatch(field, "bool", &other)),
            },
            Field::IdFound => match value {
                Value::Int(n) => self.id_found = Some(n),
                Value::Null => self.id_found = None,
                other => return Err(mismatch(field, "int or null", &other)),
            },
        }
        Ok(())
    }

    /// `try_set` for a single value where a failure is only worth a log line.
    pub(crate) fn store(&mut self, field: Field, value: impl Into<Value>) {
        if let Err(err) = self.try_set(field, vec![value.into()]) {
            tracing::warn!(%field, error = %err, "failed to store field");
        }
    }
}

fn mismatch(field: Field, expected: &'static str, got: &Value) -> StoreError {
    StoreError::TypeMismatch {
        field: field.name(),
        expected,
        got: got.kind(),
    }
}

fn optional_string(field: Field, value: Value) -> Result<Option<String>, StoreError> {
    match value {
        Value::Str(s) => Ok(Some(s)),
        Value::Null => Ok(None),
        other => Err(mismatch(field, "string or null", &other)),
    }
}

fn string(field: Field, value: Value) -> Result<String, StoreError> {
    match value {
        Value::Str(s) => Ok(s),
        other => Err(mismatch(field, "string", &other)),
    }
}

fn strings(field: Field, value: Value) -> Result<Vec<String>, StoreError> {
    match value {
        Value::Str(s) => Ok(vec![s]),
        Value::List(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Str(s) => Ok(s),
                other => Err(mismatch(field, "list of strings", &other)),
            })
            .collect(),
        other => Err(mismatch(field, "list of strings", &other)),
    }
}
