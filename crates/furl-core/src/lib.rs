//! Friendly-URL decomposition.
//!
//! [`UrlContext::init`] reads the live request through [`RequestSignals`],
//! reconciles it with an optional base URL and splits the result into slugs.
//! The context then answers lookups (slugs, identifiers, tokens before or
//! after a key) and gates the resolved action against a whitelist.
//!
//! ```
//! use furl_core::{RequestSnapshot, UrlContext, DEFAULT_ACTION};
//!
//! let request = RequestSnapshot::from_url("https://example.com/shop/item-7", "GET")?;
//! let mut ctx = UrlContext::init(&request, None, true);
//! assert_eq!(ctx.action(), "shop");
//! assert_eq!(ctx.get_id(None), 7);
//!
//! ctx.set_action(["home", "blog"], DEFAULT_ACTION);
//! assert_eq!(ctx.action(), "error404");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod logging;
mod resolver;
pub mod sanitize;
pub mod signals;
pub mod slugs;
pub mod value;

pub use context::{Field, FilterEntry, Query, UrlContext, DEFAULT_ACTION, DEFAULT_CALLBACK};
pub use error::StoreError;
pub use extract::UrlPart;
pub use signals::{CgiEnv, RequestSignals, RequestSnapshot, Signal};
pub use value::Value;
