//! Slug tokenization of the current URL.

/// Splits `current` into non-empty path segments relative to `domain`.
///
/// When `ignore_get` is false the first segment is read as carrying a
/// `?query`: the result is then the query's `&`-separated pairs *instead of*
/// the path slugs (empty if there is no `?`). Path slugs after the first are
/// discarded in that mode.
pub fn tokenize(domain: &str, current: &str, ignore_get: bool) -> Vec<String> {
    let relative = match current.strip_prefix(domain) {
        Some(rest) => rest.to_string(),
        None => current.replace(domain, ""),
    };

    let slugs: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
    let Some(first) = slugs.first() else {
        return Vec::new();
    };

    if ignore_get {
        return slugs.iter().map(|s| s.to_string()).collect();
    }

    match first.split_once('?') {
        Some((_, query)) => {
            let query = query.split('?').next().unwrap_or("");
            query.split('&').map(str::to_string).collect()
        }
        None => Vec::new(),
    }
}
