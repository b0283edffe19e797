//! Command handlers for the intelcard CLI.
//!
//! Each submodule handles a specific CLI command.
//! The main dispatch logic remains in main.rs.

pub mod batch;
pub mod card;
pub mod decode;
pub mod meeting;
pub mod minutes;
pub mod rules;
pub mod split;

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::io::{self, Read};

use intelcard::config::OutputFormat;
use intelcard::structuring::{Artifact, ExtractError, MarkerSections, RuleTable};
use intelcard::Config;

/// Settings shared by every command.
pub struct Context {
    pub config: Config,
    pub format: OutputFormat,
}

impl Context {
    pub fn rules(&self) -> &RuleTable {
        &self.config.rules
    }
}

/// Stdin can only be consumed once per run.
pub fn ensure_single_stdin<'a>(files: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let count = files.into_iter().filter(|f| *f == "-").count();
    if count > 1 {
        bail!("stdin ('-') may be given at most once, got {}", count);
    }
    Ok(())
}

/// Read a response from a file, or from stdin when `file` is `-`.
pub fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read response from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(file).with_context(|| format!("Failed to read response file: {}", file))
    }
}

/// Pretty-print a value as JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// JSON shape of a structuring failure.
pub fn error_json(err: &ExtractError) -> Value {
    json!({
        "kind": err.kind(),
        "message": err.to_string(),
        "path": err.field_path(),
    })
}

/// Render marker sections under their labels.
pub fn sections_text(sections: &MarkerSections, rules: &RuleTable) -> String {
    format!(
        "【{}】\n{}\n\n【{}】\n{}",
        rules.markers.output, sections.output, rules.markers.rationale, sections.rationale
    )
}

/// Text rendering of any artifact.
pub fn artifact_text(artifact: &Artifact, rules: &RuleTable) -> String {
    match artifact {
        Artifact::Card(record) => record.to_markdown(),
        Artifact::Minutes(minutes) => minutes_text(&minutes.email, &minutes.markdown),
        Artifact::Split(sections) => sections_text(sections, rules),
        Artifact::Decode(doc) => doc.to_text(rules),
    }
}

/// Both minutes versions, one after the other.
pub fn minutes_text(email: &str, markdown: &str) -> String {
    format!("[email]\n{}\n\n[markdown]\n{}", email, markdown)
}
