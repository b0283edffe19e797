//! Batch command handler
//!
//! Each response is structured independently on the rayon pool; results are
//! collected back into input order before printing.

use anyhow::{bail, Result};
use rayon::prelude::*;
use serde_json::json;
use tracing::debug;

use intelcard::config::OutputFormat;
use intelcard::structuring::{assemble, Artifact, ArtifactKind, ExtractError, RuleTable};

use super::{artifact_text, ensure_single_stdin, error_json, read_input, to_json, Context};

/// Outcome for a single file.
enum Outcome {
    Done(Artifact),
    Unreadable(String),
    Failed(ExtractError),
}

fn structure_file(file: &str, kind: ArtifactKind, rules: &RuleTable) -> Outcome {
    let raw = match read_input(file) {
        Ok(raw) => raw,
        Err(e) => return Outcome::Unreadable(format!("{:#}", e)),
    };
    match assemble(kind, &raw, rules) {
        Ok(artifact) => Outcome::Done(artifact),
        Err(e) => Outcome::Failed(e),
    }
}

/// Structure every file as `kind`; fail if any file fails.
pub fn handle(kind: ArtifactKind, files: &[String], ctx: &Context) -> Result<()> {
    ensure_single_stdin(files.iter().map(String::as_str))?;
    let rules = ctx.rules();
    let outcomes: Vec<Outcome> = files
        .par_iter()
        .map(|file| structure_file(file, kind, rules))
        .collect();
    debug!(count = files.len(), %kind, "batch structured");

    let failed = outcomes
        .iter()
        .filter(|o| !matches!(o, Outcome::Done(_)))
        .count();

    match ctx.format {
        OutputFormat::Text => {
            for (i, (file, outcome)) in files.iter().zip(&outcomes).enumerate() {
                if i > 0 {
                    println!();
                }
                println!("== {} ==", file);
                match outcome {
                    Outcome::Done(artifact) => println!("{}", artifact_text(artifact, rules)),
                    Outcome::Unreadable(msg) => println!("Error: {}", msg),
                    Outcome::Failed(e) => println!("Error: {}", e),
                }
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = files
                .iter()
                .zip(&outcomes)
                .map(|(file, outcome)| match outcome {
                    Outcome::Done(artifact) => json!({ "file": file, "ok": artifact }),
                    Outcome::Unreadable(msg) => json!({
                        "file": file,
                        "error": { "kind": "io", "message": msg, "path": null },
                    }),
                    Outcome::Failed(e) => json!({ "file": file, "error": error_json(e) }),
                })
                .collect();
            println!("{}", to_json(&entries)?);
        }
    }

    if failed > 0 {
        bail!("{} of {} files could not be structured", failed, files.len());
    }
    Ok(())
}
