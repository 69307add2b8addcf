//! Per-request URL state.
//!
//! A [`UrlContext`] is built by [`UrlContext::init`] at the start of each
//! request and passed to whoever needs the resolved action, callback or
//! slugs. Fields are private: every write goes through the sanitizer.

mod action;
mod field;
mod query;

pub use action::{FilterEntry, DEFAULT_ACTION};
pub use field::Field;
pub use query::Query;

use crate::value::Value;
use std::collections::BTreeMap;

/// Callback used when the URL has fewer than two slugs.
pub const DEFAULT_CALLBACK: &str = "init";

/// Resolved fields of the current request.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlContext {
    pub(crate) site: Option<String>,
    pub(crate) domain: Option<String>,
    pub(crate) action: String,
    pub(crate) callback: String,
    pub(crate) current: Option<String>,
    pub(crate) slugs: Vec<String>,
    pub(crate) filters: Vec<String>,
    pub(crate) ignore_get: bool,
    pub(crate) method: Option<String>,
    pub(crate) id_found: Option<i64>,
    /// Captured at init for [`UrlContext::domain`]; not a record field.
    pub(crate) server_addr: String,
}

impl Default for UrlContext {
    fn default() -> Self {
        Self {
            site: None,
            domain: None,
            action: String::new(),
            callback: DEFAULT_CALLBACK.to_string(),
            current: None,
            slugs: Vec::new(),
            filters: Vec::new(),
            ignore_get: true,
            method: None,
            id_found: None,
            server_addr: String::new(),
        }
    }
}

impl UrlContext {
    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }

    /// Canonical base URL, always ending in `/`.
    pub fn base_url(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn callback(&self) -> &str {
        &self.callback
    }

    /// Canonical current URL, always ending in `/`.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Raw slugs, without the leading `/` that [`UrlContext::get_slugs`] adds.
    pub fn slugs(&self) -> &[String] {
        &self.slugs
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn ignore_get(&self) -> bool {
        self.ignore_get
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Identifier found in the last slug when the context was initialized.
    pub fn id_found(&self) -> Option<i64> {
        self.id_found
    }

    /// Base URL, optionally with `localhost` swapped for the server address.
    ///
    /// `::1` is reported as `127.0.0.1`.
    pub fn domain(&self, return_ip: bool) -> String {
        let domain = self.domain.clone().unwrap_or_default();
        if !return_ip {
            return domain;
        }
        let ip = if self.server_addr == "::1" {
            "127.0.0.1"
        } else {
            self.server_addr.as_str()
        };
        domain.replace("localhost", ip)
    }

    /// Current value of a record field.
    pub fn field(&self, field: Field) -> Value {
        match field {
            Field::Site => self.site.clone().into(),
            Field::Domain => self.domain.clone().into(),
            Field::Action => self.action.clone().into(),
            Field::Callback => self.callback.clone().into(),
            Field::Current => self.current.clone().into(),
            Field::Slugs => self.slugs.clone().into(),
            Field::Filters => self.filters.clone().into(),
            Field::IgnoreGet => self.ignore_get.into(),
            Field::Method => self.method.clone().into(),
            Field::IdFound => self.id_found.into(),
        }
    }

    /// The whole record, keyed by field name.
    pub fn to_map(&self) -> BTreeMap<String, Value> {
        Field::ALL
            .iter()
            .map(|&f| (f.name().to_string(), self.field(f)))
            .collect()
    }
}
