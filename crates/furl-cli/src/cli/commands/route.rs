//! Route command: enforce the action whitelist and print what a dispatcher would call.

use anyhow::Result;
use furl_core::UrlContext;

pub fn run_route(mut ctx: UrlContext, filters: &[String], default_action: &str) -> Result<()> {
    let requested = ctx.action().to_string();
    ctx.set_action(filters.iter().map(String::as_str), default_action);
    if ctx.action() != requested {
        tracing::info!(requested = %requested, action = %ctx.action(), "action rewritten");
    }
    println!("{} {}", ctx.action(), ctx.callback());
    Ok(())
}
