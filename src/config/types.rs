//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::structuring::RuleTable;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    /// Classification and extraction rules
    #[serde(default)]
    pub rules: RuleTable,
}

impl Config {
    /// Check every section for unusable values.
    pub fn validate(&self) -> Result<(), String> {
        self.rules.validate()
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default rendering when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

/// How command results are printed
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text or markdown
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
