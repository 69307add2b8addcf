//! Last meaningful word of the current URL.

use crate::context::UrlContext;
use url::form_urlencoded;

/// Part of `s` before the first `delim`, ignoring leading delimiters.
fn before_delim(s: &str, delim: char) -> &str {
    s.trim_start_matches(delim).split(delim).next().unwrap_or("")
}

impl UrlContext {
    /// Last path segment of the current URL.
    ///
    /// The query string is cut off unless `from_query` is set, the fragment
    /// when `ignore_hash` is set. With `from_query`, a last segment that looks
    /// like `key=value` is replaced by the value of the last query pair.
    pub fn get_last_word(&self, from_query: bool, ignore_hash: bool) -> String {
        let mut url = self.current.as_deref().unwrap_or("");
        if !from_query {
            url = before_delim(url, '?');
        }
        if ignore_hash {
            url = before_delim(url, '#');
        }

        let url = url.trim_matches('/');
        let parts: Vec<&str> = url.split('/').collect();
        let last = parts
            .iter()
            .rev()
            .take(2)
            .find(|p| !p.is_empty())
            .copied()
            .unwrap_or("");

        if from_query && last.contains('=') {
            let query = url
                .split_once('?')
                .map(|(_, q)| before_delim(q, '#'))
                .unwrap_or("");
            return form_urlencoded::parse(query.as_bytes())
                .last()
                .map(|(_, v)| v.into_owned())
                .unwrap_or_default();
        }

        last.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::context::UrlContext;

    fn with_current(current: &str) -> UrlContext {
        let mut ctx = UrlContext::default();
        ctx.current = Some(current.to_string());
        ctx
    }

    #[test]
    fn last_path_word() {
        let ctx = with_current("https://site/blog/post-9/");
        assert_eq!(ctx.get_last_word(false, true), "post-9");
    }

    #[test]
    fn query_is_stripped_by_default() {
        let ctx = with_current("https://site/search?q=rust&page=2/");
        assert_eq!(ctx.get_last_word(false, true), "search");
    }

    #[test]
    fn hash_is_stripped_unless_kept() {
        let ctx = with_current("https://site/docs/intro#setup/");
        assert_eq!(ctx.get_last_word(false, true), "intro");
        assert_eq!(ctx.get_last_word(false, false), "intro#setup");
    }

    #[test]
    fn query_value_when_requested() {
        let ctx = with_current("https://site/search?q=rust&page=2/");
        assert_eq!(ctx.get_last_word(true, true), "2");

        let ctx = with_current("https://site/search?q=a&amp;sort=new/");
        assert_eq!(ctx.get_last_word(true, true), "new");
    }

    #[test]
    fn from_query_without_pairs_keeps_word() {
        let ctx = with_current("https://site/blog/");
        assert_eq!(ctx.get_last_word(true, true), "blog");
    }

    #[test]
    fn empty_current() {
        assert_eq!(UrlContext::default().get_last_word(false, true), "");
    }
}
