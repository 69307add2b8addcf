//! CLI for inspecting how furl decomposes a request URL.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use furl_core::config::{self, FurlConfig};
use furl_core::{CgiEnv, RequestSnapshot, UrlContext};

use commands::{run_filter, run_get, run_normalize, run_resolve, run_route};

/// Top-level CLI for furl.
#[derive(Debug, Parser)]
#[command(name = "furl")]
#[command(about = "furl: friendly-URL decomposition and sanitization", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where the request comes from and how to resolve it.
#[derive(Debug, Clone, Args)]
pub struct RequestArgs {
    /// Full URL of the request. Without it, CGI variables (REQUEST_URI, HTTP_HOST, ...) are read.
    #[arg(long, value_name = "URL")]
    pub request: Option<String>,

    /// HTTP method used with --request.
    #[arg(long, default_value = "GET")]
    pub method: String,

    /// Explicit base URL (overrides base_url from config).
    #[arg(long, value_name = "URL")]
    pub base: Option<String>,

    /// Fold query-string pairs into the slugs instead of ignoring them.
    #[arg(long)]
    pub with_query: bool,
}

impl RequestArgs {
    /// Resolves the context, CLI flags taking precedence over config.
    pub fn resolve(&self, cfg: &FurlConfig) -> Result<UrlContext> {
        let base = self.base.as_deref().or(cfg.base_url.as_deref());
        let ignore_get = cfg.ignore_get && !self.with_query;

        let ctx = match &self.request {
            Some(url) => {
                let snapshot = RequestSnapshot::from_url(url, &self.method)?;
                UrlContext::init(&snapshot, base, ignore_get)
            }
            None => UrlContext::init(&CgiEnv, base, ignore_get),
        };
        Ok(ctx)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve the request and print the full record as JSON.
    Resolve {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Look up a key (site, slug, slugs, current, id, after, urlafter or any field).
    Get {
        /// Key to look up; empty string for the whole record.
        key: String,

        /// Arguments for the key (slug index, token, as-array flag).
        args: Vec<String>,

        #[command(flatten)]
        request: RequestArgs,
    },

    /// Resolve, enforce the action whitelist, and print `action callback`.
    Route {
        /// Extra whitelisted action (repeatable); added to `filters` from config.
        #[arg(long = "allow", value_name = "ACTION")]
        allow: Vec<String>,

        /// Action used when the requested one is not whitelisted.
        #[arg(long = "default", value_name = "ACTION")]
        default_action: Option<String>,

        #[command(flatten)]
        request: RequestArgs,
    },

    /// Print the normalized form of a string.
    Normalize {
        text: String,
    },

    /// Print the sanitized form of a string.
    Filter {
        text: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.command.run()
    }

    pub fn run(self) -> Result<()> {
        match self {
            CliCommand::Resolve { request } => run_resolve(&request.resolve(&load_config()?)?),
            CliCommand::Get { key, args, request } => {
                run_get(&request.resolve(&load_config()?)?, &key, &args)
            }
            CliCommand::Route {
                allow,
                default_action,
                request,
            } => {
                let cfg = load_config()?;
                let default_action = default_action.unwrap_or_else(|| cfg.default_action.clone());
                let mut filters = cfg.filters.clone();
                filters.extend(allow);
                run_route(request.resolve(&cfg)?, &filters, &default_action)
            }
            CliCommand::Normalize { text } => run_normalize(&text),
            CliCommand::Filter { text } => run_filter(&text),
        }
    }
}

fn load_config() -> Result<FurlConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
