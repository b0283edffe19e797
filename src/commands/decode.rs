//! Decode command handler

use anyhow::Result;
use serde_json::json;

use intelcard::config::OutputFormat;
use intelcard::structuring::LineClassifier;

use super::{read_input, to_json, Context};

/// Classify advisory text and print its buckets or its script copy text.
pub fn handle(file: &str, copy: bool, ctx: &Context) -> Result<()> {
    let raw = read_input(file)?;
    let doc = LineClassifier::new(ctx.rules()).classify(&raw);

    if doc.is_empty() {
        tracing::warn!(file, "no advisory sections recognized");
    }

    let output = match (copy, ctx.format) {
        (true, OutputFormat::Text) => doc.script_copy_text(ctx.rules()),
        (true, OutputFormat::Json) => {
            to_json(&json!({ "script": doc.script_copy_text(ctx.rules()) }))?
        }
        (false, OutputFormat::Text) => doc.to_text(ctx.rules()),
        (false, OutputFormat::Json) => to_json(&json!({
            "subtext": doc.subtext,
            "executorFraming": doc.executor_framing,
            "consultantScript": doc.script_lines(ctx.rules()),
            "tips": doc.tips,
        }))?,
    };
    println!("{}", output);
    Ok(())
}
