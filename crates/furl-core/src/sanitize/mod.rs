//! Input sanitization.
//!
//! Every string that ends up in a [`crate::UrlContext`] passes through one of
//! two chains:
//!
//! - [`filter`] / [`sanitize_str`] for values handed to the library
//!   (supplied base URL, `set` values, action filters)
//! - [`filter_signal`] for raw request signals (path, scheme, host, method)
//!
//! The two chains lower-case at different points and must stay separate.

mod html;
mod normalize;
mod url_safe;

pub use html::escape_html;
pub use normalize::normalize;
pub use url_safe::{is_valid_url, strip_url_strict, strip_url_unsafe};

use crate::value::Value;

/// Sanitizes a value according to its kind.
///
/// - Valid absolute URL strings: [`sanitize_url`]
/// - Other strings: [`sanitize_text`]
/// - Lists: string elements get [`sanitize_text`] (never the URL rule), others pass through
/// - `Null`, `Bool`, `Int`: unchanged
/// - Anything else: `Null`
pub fn filter(input: Value) -> Value {
    match input {
        Value::Str(s) => Value::Str(sanitize_str(&s)),
        Value::List(items) => Value::List(
            items
                .into_iter()
                .map(|item| match item {
                    Value::Str(s) => Value::Str(sanitize_text(&s)),
                    other => other,
                })
                .collect(),
        ),
        v @ (Value::Null | Value::Bool(_) | Value::Int(_)) => v,
        other => {
            tracing::trace!(kind = other.kind(), "sanitizer rejected value");
            Value::Null
        }
    }
}

/// String branch of [`filter`]: the URL rule for valid URLs, the text rule otherwise.
pub fn sanitize_str(input: &str) -> String {
    if is_valid_url(input) {
        sanitize_url(input)
    } else {
        sanitize_text(input)
    }
}

/// URL rule: strip unsafe chars, lower-case, normalize, apply the strict
/// whitelist, then turn any remaining spaces into dashes.
pub fn sanitize_url(input: &str) -> String {
    let url = strip_url_unsafe(input).to_ascii_lowercase();
    let url = strip_url_strict(&normalize(&url));
    url.replace(' ', "-")
}

/// Text rule: lower-case, normalize, then HTML-escape.
pub fn sanitize_text(input: &str) -> String {
    let text = normalize(&input.to_lowercase());
    escape_html(&text).into_owned()
}

/// Sanitizes a raw request signal.
///
/// A missing signal yields an empty string. Unlike [`filter`], lower-casing
/// happens last, after normalization and escaping.
pub fn filter_signal(raw: Option<&str>) -> String {
    let raw = raw.map(strip_url_unsafe).unwrap_or_default();

    let cleaned = if is_valid_url(&raw) {
        strip_url_unsafe(&normalize(&raw))
    } else {
        escape_html(&normalize(&raw)).into_owned()
    };

    cleaned.replace(' ', "-").to_lowercase()
}
