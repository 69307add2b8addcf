//! Action whitelisting.

use super::{Field, UrlContext};
use crate::sanitize;

/// Action used when the requested one is not whitelisted.
pub const DEFAULT_ACTION: &str = "error404";

/// One entry of a custom filter list: a single action or a group of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEntry {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for FilterEntry {
    fn from(s: &str) -> Self {
        FilterEntry::One(s.to_string())
    }
}

impl From<String> for FilterEntry {
    fn from(s: String) -> Self {
        FilterEntry::One(s)
    }
}

impl From<Vec<&str>> for FilterEntry {
    fn from(v: Vec<&str>) -> Self {
        FilterEntry::Many(v.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for FilterEntry {
    fn from(v: Vec<String>) -> Self {
        FilterEntry::Many(v)
    }
}

impl UrlContext {
    /// Merges `custom_filters` into the whitelist and enforces it.
    ///
    /// Entries are sanitized and appended in order, skipping ones already
    /// present; groups are flattened and their members sanitized as text. If the current action is not in the
    /// resulting whitelist it is replaced by `default_action`.
    pub fn set_action<I>(&mut self, custom_filters: I, default_action: &str)
    where
        I: IntoIterator,
        I::Item: Into<FilterEntry>,
    {
        for entry in custom_filters {
            let names = match entry.into() {
                FilterEntry::One(name) => vec![sanitize::sanitize_str(&name)],
                // Grouped entries follow the list rule: text only.
                FilterEntry::Many(names) => names
                    .iter()
                    .map(|name| sanitize::sanitize_text(name))
                    .collect(),
            };
            for name in names {
                if !self.filters.contains(&name) {
                    self.filters.push(name);
                }
            }
        }

        if !self.filters.contains(&self.action) {
            tracing::debug!(
                action = %self.action,
                fallback = default_action,
                "action not whitelisted"
            );
            self.store(Field::Action, default_action);
        }
    }
}
