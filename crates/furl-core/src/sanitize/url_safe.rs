//! URL validation and URL-safe character stripping.

use url::Url;

/// Punctuation allowed in a URL-safe string, alongside ASCII letters and digits.
const URL_SAFE_PUNCT: &str = "$-_.+!*'(),{}|\\^~[]`<>#%\";/?:@&=";

/// Punctuation kept by the stricter whitelist applied to sanitized URLs.
const URL_STRICT_PUNCT: &str = "$-_.+!*();:@=&%/";

/// Schemes that are accepted without a host component.
const HOSTLESS_SCHEMES: &[&str] = &["mailto", "news", "file"];

/// Drops every character that may not appear in a URL.
pub fn strip_url_unsafe(input: &str) -> String {
    input
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || URL_SAFE_PUNCT.contains(c))
        .collect()
}

/// Drops everything outside `[A-Za-z0-9$-_.+!*();:@=&%/]`.
pub fn strip_url_strict(input: &str) -> String {
    input
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || URL_STRICT_PUNCT.contains(c))
        .collect()
}

/// Whether `input` is a syntactically valid absolute URL.
///
/// The string must consist only of URL-safe characters, parse as an absolute
/// URL, and carry a host unless its scheme is one of [`HOSTLESS_SCHEMES`].
/// Host-relative paths (`/a/b`) and `host:port` pairs are not URLs.
pub fn is_valid_url(input: &str) -> bool {
    if input.is_empty() || strip_url_unsafe(input) != input {
        return false;
    }
    let Ok(parsed) = Url::parse(input) else {
        return false;
    };
    if HOSTLESS_SCHEMES.contains(&parsed.scheme()) {
        return true;
    }
    parsed.host_str().is_some_and(|h| !h.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_urls() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com:8080/a/b?c=d#e"));
        assert!(is_valid_url("mailto:someone@example.com"));
    }

    #[test]
    fn invalid_urls() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("/blog/post-1/"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("localhost:8080"));
        assert!(!is_valid_url("https://exa mple.com"));
        assert!(!is_valid_url("https://café.com/"));
        assert!(!is_valid_url("error404"));
    }

    #[test]
    fn strip_unsafe_removes_spaces_and_unicode() {
        assert_eq!(strip_url_unsafe("a b\tc"), "abc");
        assert_eq!(strip_url_unsafe("/caf\u{e9}/?q=1"), "/caf/?q=1");
        assert_eq!(strip_url_unsafe("<a href=\"x\">"), "<ahref=\"x\">");
    }

    #[test]
    fn strict_whitelist() {
        assert_eq!(
            strip_url_strict("https://site.com/a?b=1#c,d~e\\f"),
            "https://site.com/ab=1cdef"
        );
        assert_eq!(strip_url_strict("$-_.+!*();:@=&%/"), "$-_.+!*();:@=&%/");
    }
}
