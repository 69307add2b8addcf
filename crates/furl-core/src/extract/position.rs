//! Token-relative lookups: what comes before or after a path token.

use super::find_token;
use crate::context::UrlContext;

impl UrlContext {
    /// Token preceding `param` in the current URL.
    ///
    /// With a non-empty `separator`, every token before `param` is joined with
    /// it instead. `None` when `param` is absent or is the first token.
    pub fn get_before(&self, param: &str, separator: Option<&str>) -> Option<String> {
        let tokens = self.url_tokens();
        let index = find_token(&tokens, param).filter(|&i| i > 0)?;
        let before = &tokens[..index];
        match separator {
            Some(sep) if !sep.is_empty() => Some(before.join(sep)),
            _ => before.last().map(|t| t.to_string()),
        }
    }

    /// Everything after `param`, joined with `.`.
    ///
    /// `/blog/tag/a/b/c/` with `tag` gives `a.b.c`.
    pub fn get_after(&self, param: &str) -> Option<String> {
        let tokens = self.url_tokens();
        let index = find_token(&tokens, param)?;
        let rest = tokens.get(index + 1..).filter(|rest| !rest.is_empty())?;
        Some(rest.join("."))
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
    fn after_flattens_with_dots() {
        let ctx = with_current("https://site/blog/tag/a/b/c/");
        assert_eq!(ctx.get_after("tag").as_deref(), Some("a.b.c"));
        assert_eq!(ctx.get_after("b").as_deref(), Some("c"));
        assert_eq!(ctx.get_after("c"), None);
        assert_eq!(ctx.get_after("nope"), None);
    }

    #[test]
    fn before_single_token() {
        let ctx = with_current("https://site/blog/tag/a/");
        assert_eq!(ctx.get_before("tag", None).as_deref(), Some("blog"));
        assert_eq!(ctx.get_before("blog", None).as_deref(), Some("site"));
        assert_eq!(ctx.get_before("tag", Some("")).as_deref(), Some("blog"));
    }

    #[test]
    fn before_joined() {
        let ctx = with_current("https://site/blog/tag/a/");
        assert_eq!(
            ctx.get_before("tag", Some("/")).as_deref(),
            Some("https://site/blog")
        );
        assert_eq!(
            ctx.get_before("a", Some(",")).as_deref(),
            Some("https:,,site,blog,tag")
        );
    }

    #[test]
    fn before_misses() {
        let ctx = with_current("https://site/blog/");
        assert_eq!(ctx.get_before("https:", None), None);
        assert_eq!(ctx.get_before("missing", Some("/")), None);
        assert_eq!(UrlContext::default().get_before("blog", None), None);
    }
}
