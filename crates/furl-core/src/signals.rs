//! Request signals: the raw strings the resolver reads from the host request.
//!
//! The core never talks to a server; it only depends on [`RequestSignals`].
//! Values are returned raw and sanitized by the resolver.

use anyhow::{Context, Result};
use std::collections::HashMap;

/// A single request input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Path plus query string, e.g. `/blog/post-1?x=2`.
    RequestUri,
    /// `http` or `https`.
    RequestScheme,
    /// Host header, possibly with a port.
    HttpHost,
    /// HTTP method.
    RequestMethod,
    /// Address of the serving interface.
    ServerAddr,
}

impl Signal {
    pub const ALL: [Signal; 5] = [
        Signal::RequestUri,
        Signal::RequestScheme,
        Signal::HttpHost,
        Signal::RequestMethod,
        Signal::ServerAddr,
    ];

    /// CGI variable name for this signal.
    pub fn cgi_name(self) -> &'static str {
        match self {
            Signal::RequestUri => "REQUEST_URI",
            Signal::RequestScheme => "REQUEST_SCHEME",
            Signal::HttpHost => "HTTP_HOST",
            Signal::RequestMethod => "REQUEST_METHOD",
            Signal::ServerAddr => "SERVER_ADDR",
        }
    }
}

/// Source of raw request signals.
pub trait RequestSignals {
    fn signal(&self, signal: Signal) -> Option<String>;
}

/// Signals captured up front as plain strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSnapshot {
    pub uri: Option<String>,
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub method: Option<String>,
    pub server_addr: Option<String>,
}

impl RequestSnapshot {
    /// Builds a snapshot from the full URL of a live request.
    ///
    /// The host keeps an explicit port; the URI is path plus `?query`.
    pub fn from_url(url: &str, method: &str) -> Result<Self> {
        let parsed =
            url::Url::parse(url).with_context(|| format!("invalid request URL: {url}"))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("request URL missing host: {url}"))?;
        let host = match parsed.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        let uri = match parsed.query() {
            Some(q) => format!("{}?{}", parsed.path(), q),
            None => parsed.path().to_string(),
        };

        Ok(Self {
            uri: Some(uri),
            scheme: Some(parsed.scheme().to_string()),
            host: Some(host),
            method: Some(method.to_string()),
            server_addr: None,
        })
    }

    pub fn with_server_addr(mut self, addr: impl Into<String>) -> Self {
        self.server_addr = Some(addr.into());
        self
    }
}

impl RequestSignals for RequestSnapshot {
    fn signal(&self, signal: Signal) -> Option<String> {
        match signal {
            Signal::RequestUri => self.uri.clone(),
            Signal::RequestScheme => self.scheme.clone(),
            Signal::HttpHost => self.host.clone(),
            Signal::RequestMethod => self.method.clone(),
            Signal::ServerAddr => self.server_addr.clone(),
        }
    }
}

/// Map keyed by CGI variable name (`REQUEST_URI`, `HTTP_HOST`, ...).
impl RequestSignals for HashMap<String, String> {
    fn signal(&self, signal: Signal) -> Option<String> {
        self.get(signal.cgi_name()).cloned()
    }
}

/// Reads signals from the process environment, CGI style.
#[derive(Debug, Clone, Copy, Default)]
pub struct CgiEnv;

impl RequestSignals for CgiEnv {
    fn signal(&self, signal: Signal) -> Option<String> {
        std::env::var(signal.cgi_name()).ok()
    }
}
