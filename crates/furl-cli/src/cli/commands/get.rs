//! Get command: keyed lookup through the context's `get` dispatch.

use anyhow::Result;
use furl_core::{Query, UrlContext};

/// Print the value for `key` as JSON. Unknown keys and bad arguments are reported.
pub fn run_get(ctx: &UrlContext, key: &str, args: &[String]) -> Result<()> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let query = Query::parse(key, &args)?;
    let value = ctx.query(&query);
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}
