//! Read-only lookups over the slugs and the current URL.
//!
//! Token-based lookups share [`UrlContext::url_tokens`]: the current URL
//! split on `/`, minus the empty token left by the trailing slash. Missing
//! input is reported through the return type, never a panic.

mod id;
mod last_word;
mod numeric;
mod position;
mod slug;
mod substring;

pub use numeric::{leading_int, numeric};

use crate::context::UrlContext;
use crate::value::Value;

/// Remainder of the current URL, as text or split into segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPart {
    Text(String),
    Segments(Vec<String>),
}

impl UrlPart {
    pub fn into_value(self) -> Value {
        match self {
            UrlPart::Text(s) => Value::Str(s),
            UrlPart::Segments(v) => v.into(),
        }
    }
}

/// Splits on `/`, dropping the single empty token after a trailing slash.
pub(crate) fn split_path(s: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = s.split('/').collect();
    if tokens.len() > 1 && tokens.last() == Some(&"") {
        tokens.pop();
    }
    tokens
}

impl UrlContext {
    pub(crate) fn url_tokens(&self) -> Vec<&str> {
        match self.current.as_deref() {
            Some(current) if !current.is_empty() => split_path(current),
            _ => Vec::new(),
        }
    }
}

/// Index of the first token equal to `key`.
pub(crate) fn find_token(tokens: &[&str], key: &str) -> Option<usize> {
    tokens.iter().position(|t| *t == key)
}
