//! Normalize and filter commands: run a string through the sanitizer.

use anyhow::Result;
use furl_core::sanitize;

pub fn run_normalize(text: &str) -> Result<()> {
    println!("{}", sanitize::normalize(text));
    Ok(())
}

pub fn run_filter(text: &str) -> Result<()> {
    println!("{}", sanitize::sanitize_str(text));
    Ok(())
}
