//! Identifier extraction from slugs and URL tokens.
//!
//! `get_id` answers 0 when nothing is found; `find_id` answers `None`.
//! Both behaviours are relied upon and kept distinct.

use super::numeric::{leading_int, numeric};
use super::find_token;
use crate::context::UrlContext;

/// Drops everything up to the last `.` of a dot-notation key.
fn last_dot_segment(param: &str) -> &str {
    param.rsplit('.').next().unwrap_or(param)
}

/// Integer after the last `-` of a token (the whole token when there is none).
fn dash_suffix_int(token: &str) -> i64 {
    leading_int(token.rsplit('-').next().unwrap_or(token))
}

impl UrlContext {
    /// Identifier at a slug position, defaulting to the last slug.
    ///
    /// Position 0 also selects the last slug. The slug (see [`UrlContext::get_slug`]) is split on `-` and `/` and its
    /// last piece coerced to an integer. Returns 0 when there is no slug.
    pub fn get_id(&self, position: Option<usize>) -> i64 {
        let position = position
            .filter(|&p| p != 0)
            .or_else(|| self.slugs.len().checked_sub(1));
        let Some(position) = position else {
            return 0;
        };
        let slug = self.get_slug(position);
        if slug == "/" {
            return 0;
        }
        let last = slug.rsplit(|c| c == '-' || c == '/').next().unwrap_or("");
        leading_int(last)
    }

    /// Identifier carried by the last slug, if it has one.
    ///
    /// Matches a fully numeric slug (`42`) or a numeric dash suffix (`post-42`).
    pub fn find_id(&self) -> Option<i64> {
        let last = self.slugs.last()?;
        if let Some(id) = numeric(last) {
            return Some(id);
        }
        let parts: Vec<&str> = last.split('-').collect();
        match parts.as_slice() {
            [_, .., tail] => numeric(tail),
            _ => None,
        }
    }

    /// Identifier in the URL token just before `param`.
    ///
    /// Only the last segment of a dot-notation `param` is searched for.
    pub fn get_id_before(&self, param: &str) -> Option<i64> {
        let key = last_dot_segment(param);
        let tokens = self.url_tokens();
        let index = find_token(&tokens, key)?;
        let before = index.checked_sub(1).map(|i| tokens[i]).unwrap_or("");
        Some(dash_suffix_int(before))
    }

    /// Identifier in the URL token just after `param`.
    ///
    /// `None` when `param` is absent or nothing non-empty follows it.
    pub fn get_id_after(&self, param: &str) -> Option<i64> {
        let key = last_dot_segment(param);
        let tokens = self.url_tokens();
        let index = find_token(&tokens, key)?;
        let after = tokens.get(index + 1).filter(|t| !t.is_empty())?;
        Some(dash_suffix_int(after))
    }
}
