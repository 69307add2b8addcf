//! CLI command handlers, one file per concern.

mod get;
mod resolve;
mod route;
mod text;

pub use get::run_get;
pub use resolve::run_resolve;
pub use route::run_route;
pub use text::{run_filter, run_normalize};
