//! Minutes command handler

use anyhow::{Context as _, Result};
use serde_json::json;

use intelcard::config::OutputFormat;
use intelcard::structuring::{extract_structured, DualTextRecord};

use super::{minutes_text, read_input, to_json, Context};
use crate::cli::MinutesPart;

/// Decode meeting minutes and print the requested version(s).
pub fn handle(file: &str, part: MinutesPart, ctx: &Context) -> Result<()> {
    let raw = read_input(file)?;
    let minutes: DualTextRecord = extract_structured(&raw, ctx.rules())
        .with_context(|| format!("Could not decode meeting minutes from {}", file))?;

    let output = match (ctx.format, part) {
        (OutputFormat::Text, MinutesPart::Email) => minutes.email,
        (OutputFormat::Text, MinutesPart::Markdown) => minutes.markdown,
        (OutputFormat::Text, MinutesPart::Both) => minutes_text(&minutes.email, &minutes.markdown),
        (OutputFormat::Json, MinutesPart::Email) => to_json(&json!({ "email": minutes.email }))?,
        (OutputFormat::Json, MinutesPart::Markdown) => {
            to_json(&json!({ "markdown": minutes.markdown }))?
        }
        (OutputFormat::Json, MinutesPart::Both) => to_json(&minutes)?,
    };
    println!("{}", output);
    Ok(())
}
