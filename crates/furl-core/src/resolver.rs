//! Builds a [`UrlContext`] from request signals and an optional base URL.

use crate::context::{UrlContext, DEFAULT_CALLBACK};
use crate::sanitize::{filter_signal, sanitize_str};
use crate::signals::{RequestSignals, Signal};
use crate::slugs::tokenize;

/// `s` with trailing slashes replaced by exactly one.
fn with_trailing_slash(s: &str) -> String {
    format!("{}/", s.trim_end_matches('/'))
}

impl UrlContext {
    /// Resolves a fresh context for the current request.
    ///
    /// `base_url` is honoured only when the detected current URL starts with
    /// it; otherwise the base falls back to `scheme://host/`.
    pub fn init<S>(signals: &S, base_url: Option<&str>, ignore_get: bool) -> Self
    where
        S: RequestSignals + ?Sized,
    {
        let mut ctx = Self::default();
        ctx.resolve(signals, base_url, ignore_get);
        ctx
    }

    /// Re-resolves every request-derived field in place.
    ///
    /// The action whitelist is kept. Always returns `true`.
    pub fn resolve<S>(&mut self, signals: &S, base_url: Option<&str>, ignore_get: bool) -> bool
    where
        S: RequestSignals + ?Sized,
    {
        let supplied = base_url.map(sanitize_str).filter(|u| !u.is_empty());
        let read = |signal: Signal| filter_signal(signals.signal(signal).as_deref());
        let uri = read(Signal::RequestUri);
        let scheme = read(Signal::RequestScheme);
        let host = read(Signal::HttpHost);
        let method = read(Signal::RequestMethod);

        let current = with_trailing_slash(&format!("{scheme}://{host}{uri}"));
        let host_root = with_trailing_slash(&format!("{scheme}://{host}"));

        let domain = match supplied {
            Some(url) => {
                let base = with_trailing_slash(&url);
                if current.starts_with(&base) {
                    base
                } else {
                    tracing::debug!(
                        supplied = %base,
                        current = %current,
                        "base URL does not match request, using host root"
                    );
                    host_root
                }
            }
            None => host_root,
        };

        let slugs = tokenize(&domain, &current, ignore_get);

        self.action = slugs.first().cloned().unwrap_or_default();
        self.callback = slugs
            .get(1)
            .cloned()
            .unwrap_or_else(|| DEFAULT_CALLBACK.to_string());
        self.slugs = slugs;
        self.id_found = self.find_id();
        self.ignore_get = ignore_get;
        self.site = Some(host);
        self.domain = Some(domain);
        self.current = Some(current);
        self.method = Some(method);
        self.server_addr = read(Signal::ServerAddr);

        tracing::debug!(
            domain = ?self.domain,
            current = ?self.current,
            action = %self.action,
            callback = %self.callback,
            "url context resolved"
        );
        true
    }
}
