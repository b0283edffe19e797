//! Card command handler

use anyhow::{Context as _, Result};

use intelcard::config::OutputFormat;
use intelcard::structuring::{extract_structured, StrategyRecord};

use super::{read_input, to_json, Context};

/// Decode an intelligence card and print it.
pub fn handle(file: &str, ctx: &Context) -> Result<()> {
    let raw = read_input(file)?;
    let record: StrategyRecord = extract_structured(&raw, ctx.rules())
        .with_context(|| format!("Could not decode intelligence card from {}", file))?;

    match ctx.format {
        OutputFormat::Text => println!("{}", record.to_markdown()),
        OutputFormat::Json => println!("{}", to_json(&record)?),
    }
    Ok(())
}
