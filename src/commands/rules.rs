//! Rules command handler

use anyhow::{Context as _, Result};

use super::Context;

/// Print the effective rule table as TOML.
pub fn handle(ctx: &Context) -> Result<()> {
    let toml_str = toml::to_string_pretty(ctx.rules()).context("Failed to serialize rules")?;
    print!("{}", toml_str);
    Ok(())
}
