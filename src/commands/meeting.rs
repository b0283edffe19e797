//! Meeting command handler

use anyhow::{bail, Result};
use serde_json::{json, Value};

use intelcard::config::OutputFormat;
use intelcard::structuring::{assemble_meeting, ExtractResult};

use super::{ensure_single_stdin, error_json, minutes_text, read_input, to_json, Context};

/// Structure both halves of a meeting analysis; fail only if both fail.
pub fn handle(internal: &str, external: &str, ctx: &Context) -> Result<()> {
    ensure_single_stdin([internal, external])?;
    let internal_raw = read_input(internal)?;
    let external_raw = read_input(external)?;
    let report = assemble_meeting(&internal_raw, &external_raw, ctx.rules());

    match ctx.format {
        OutputFormat::Text => {
            match &report.internal {
                Ok(record) => println!("{}", record.to_markdown()),
                Err(e) => eprintln!("Internal card unavailable ({}): {}", internal, e),
            }
            match &report.external {
                Ok(minutes) => {
                    if report.internal.is_ok() {
                        println!();
                    }
                    println!("{}", minutes_text(&minutes.email, &minutes.markdown));
                }
                Err(e) => eprintln!("External minutes unavailable ({}): {}", external, e),
            }
        }
        OutputFormat::Json => {
            let value = json!({
                "internal": outcome_json(&report.internal),
                "external": outcome_json(&report.external),
            });
            println!("{}", to_json(&value)?);
        }
    }

    if !report.any_success() {
        bail!("Neither the internal card nor the external minutes could be structured");
    }
    Ok(())
}

fn outcome_json<T: serde::Serialize>(outcome: &ExtractResult<T>) -> Value {
    match outcome {
        Ok(value) => json!({ "ok": value }),
        Err(e) => json!({ "error": error_json(e) }),
    }
}
