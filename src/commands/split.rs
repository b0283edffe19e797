//! Split command handler

use anyhow::{Context as _, Result};

use intelcard::config::OutputFormat;
use intelcard::structuring::split_sections;

use super::{read_input, sections_text, to_json, Context};

/// Split a response at its output/rationale markers.
pub fn handle(file: &str, ctx: &Context) -> Result<()> {
    let raw = read_input(file)?;
    let sections = split_sections(&raw, ctx.rules())
        .with_context(|| format!("Could not split {}", file))?;

    match ctx.format {
        OutputFormat::Text => println!("{}", sections_text(&sections, ctx.rules())),
        OutputFormat::Json => println!("{}", to_json(&sections)?),
    }
    Ok(())
}
