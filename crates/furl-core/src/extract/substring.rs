//! Plain substring lookups on the current URL.

use super::{split_path, UrlPart};
use crate::context::UrlContext;

impl UrlContext {
    /// Current URL up to the first occurrence of `param`.
    pub fn get_url_before(&self, param: &str) -> Option<String> {
        let current = self.current.as_deref()?;
        let pos = current.find(param)?;
        Some(current[..pos].to_string())
    }

    /// Current URL after the first occurrence of `param`, skipping one
    /// separator character.
    ///
    /// With `as_array` the remainder is split into `/` segments.
    pub fn get_url_after(&self, param: &str, as_array: bool) -> Option<UrlPart> {
        let current = self.current.as_deref()?;
        let pos = current.find(param)?;
        let rest = current.get(pos + param.len() + 1..).unwrap_or("");

        if !as_array {
            return Some(UrlPart::Text(rest.to_string()));
        }
        let segments = if rest.is_empty() {
            Vec::new()
        } else {
            split_path(rest).into_iter().map(str::to_string).collect()
        };
        Some(UrlPart::Segments(segments))
    }
}

#[cfg(test)]
mod tests {
    use crate::context::UrlContext;
    use crate::extract::UrlPart;

    fn with_current(current: &str) -> UrlContext {
        let mut ctx = UrlContext::default();
        ctx.current = Some(current.to_string());
        ctx
    }

    #[test]
    fn url_before() {
        let ctx = with_current("https://site/shop/cart/");
        assert_eq!(ctx.get_url_before("cart").as_deref(), Some("https://site/shop/"));
        assert_eq!(ctx.get_url_before("sh").as_deref(), Some("https://site/"));
        assert_eq!(ctx.get_url_before("zzz"), None);
    }

    #[test]
    fn url_after_text() {
        let ctx = with_current("https://site/shop/cart/item-3/");
        assert_eq!(
            ctx.get_url_after("shop", false),
            Some(UrlPart::Text("cart/item-3/".into()))
        );
        assert_eq!(
            ctx.get_url_after("item-3", false),
            Some(UrlPart::Text(String::new()))
        );
        assert_eq!(ctx.get_url_after("nope", false), None);
    }

    #[test]
    fn url_after_segments() {
        let ctx = with_current("https://site/shop/cart/item-3/");
        assert_eq!(
            ctx.get_url_after("shop", true),
            Some(UrlPart::Segments(vec!["cart".into(), "item-3".into()]))
        );
        assert_eq!(
            ctx.get_url_after("item-3", true),
            Some(UrlPart::Segments(Vec::new()))
        );
    }

    #[test]
    fn no_current_url() {
        let ctx = UrlContext::default();
        assert_eq!(ctx.get_url_before("a"), None);
        assert_eq!(ctx.get_url_after("a", true), None);
    }
}
