//! Positional slug access.

use crate::context::UrlContext;

impl UrlContext {
    /// Slug at `index` with a leading `/`.
    ///
    /// Falls back to the whitelist entry at the same index, then to a bare `/`.
    pub fn get_slug(&self, index: usize) -> String {
        let found = self.slugs.get(index).or_else(|| self.filters.get(index));
        match found {
            Some(slug) => format!("/{slug}"),
            None => "/".to_string(),
        }
    }

    /// All slugs, each with a leading `/`.
    pub fn get_slugs(&self) -> Vec<String> {
        self.slugs.iter().map(|s| format!("/{s}")).collect()
    }
}
