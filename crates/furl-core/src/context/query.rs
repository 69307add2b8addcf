//! Keyed read access to the record and the extraction API.

use super::{Field, UrlContext};
use crate::error::StoreError;
use crate::extract::UrlPart;
use crate::value::Value;

/// A read request understood by [`UrlContext::query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// The whole record as a map.
    All,
    Site,
    /// `/`-prefixed slug at an index; a bare `/` without one.
    Slug(Option<usize>),
    /// All slugs, `/`-prefixed.
    Slugs,
    Current,
    /// Identifier at a slug position (last slug when `None` or 0).
    Id(Option<usize>),
    /// Path after a token, dot-joined.
    After(String),
    /// URL text after a substring.
    UrlAfter { param: String, as_array: bool },
    /// Raw record field.
    Field(Field),
}

impl Query {
    /// Interprets a string key and its arguments.
    ///
    /// Keys are case-insensitive. An empty key selects the whole record.
    /// Keys with no dedicated meaning fall back to record field names.
    pub fn parse(key: &str, args: &[&str]) -> Result<Self, StoreError> {
        let arg = |i: usize| args.get(i).copied().unwrap_or("");
        let key = key.to_ascii_lowercase();

        let query = match key.as_str() {
            "" => Query::All,
            "site" => Query::Site,
            "slug" => Query::Slug(arg(0).trim().parse().ok()),
            "slugs" => Query::Slugs,
            "current" => Query::Current,
            "id" => match arg(0) {
                "" => Query::Id(None),
                pos => Query::Id(Some(parse_index("id", pos)?)),
            },
            "after" => Query::After(arg(0).to_string()),
            "urlafter" => Query::UrlAfter {
                param: arg(0).to_string(),
                as_array: parse_flag(arg(1)),
            },
            other => Query::Field(other.parse()?),
        };
        Ok(query)
    }
}

fn parse_index(key: &'static str, arg: &str) -> Result<usize, StoreError> {
    arg.trim().parse().map_err(|_| StoreError::BadArgument {
        key,
        arg: arg.to_string(),
    })
}

fn parse_flag(arg: &str) -> bool {
    matches!(arg.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl UrlContext {
    /// Answers a typed [`Query`].
    pub fn query(&self, query: &Query) -> Value {
        match query {
            Query::All => Value::Map(self.to_map()),
            Query::Site => self.site.clone().into(),
            Query::Slug(index) => match index {
                Some(index) => self.get_slug(*index).into(),
                None => Value::from("/"),
            },
            Query::Slugs => self.get_slugs().into(),
            Query::Current => self.current.clone().into(),
            Query::Id(position) => self.get_id(*position).into(),
            Query::After(param) => self.get_after(param).into(),
            Query::UrlAfter { param, as_array } => {
                self.get_url_after(param, *as_array).map(UrlPart::into_value).into()
            }
            Query::Field(field) => self.field(*field),
        }
    }

    /// String-keyed lookup; anything it cannot answer is `Null`.
    pub fn get(&self, key: &str, args: &[&str]) -> Value {
        match Query::parse(key, args) {
            Ok(query) => self.query(&query),
            Err(err) => {
                tracing::debug!(key, error = %err, "get returned null");
                Value::Null
            }
        }
    }
}
