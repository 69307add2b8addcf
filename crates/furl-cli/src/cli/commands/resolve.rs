//! Resolve command: print the whole resolved record.

use anyhow::Result;
use furl_core::{Query, UrlContext};

pub fn run_resolve(ctx: &UrlContext) -> Result<()> {
    let record = ctx.query(&Query::All);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
