//! Uniform entry point over the three structuring strategies.
//!
//! Call sites name the artifact they expect and get back one result type with
//! one error type. Assembly is reshaping only; every decision is made by the
//! extractor, the marker splitter, or the classifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::classifier::LineClassifier;
use super::error::ExtractResult;
use super::extractor::extract_structured;
use super::markers::split_sections;
use super::rules::RuleTable;
use super::types::{ClassifiedDocument, DualTextRecord, MarkerSections, StrategyRecord};

/// The artifact a raw response is expected to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Internal strategy record (JSON)
    Card,
    /// External meeting minutes (JSON)
    Minutes,
    /// Output/rationale pair (marker-delimited text)
    Split,
    /// Four-bucket advisory document (free text)
    Decode,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Card,
        ArtifactKind::Minutes,
        ArtifactKind::Split,
        ArtifactKind::Decode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Card => "card",
            ArtifactKind::Minutes => "minutes",
            ArtifactKind::Split => "split",
            ArtifactKind::Decode => "decode",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown artifact kind '{}'. Expected one of: card, minutes, split, decode",
                    s
                )
            })
    }
}

/// A structured, render-ready result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Artifact {
    Card(StrategyRecord),
    Minutes(DualTextRecord),
    Split(MarkerSections),
    Decode(ClassifiedDocument),
}

impl Artifact {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Artifact::Card(_) => ArtifactKind::Card,
            Artifact::Minutes(_) => ArtifactKind::Minutes,
            Artifact::Split(_) => ArtifactKind::Split,
            Artifact::Decode(_) => ArtifactKind::Decode,
        }
    }
}

/// Structure one raw response as the given artifact kind.
///
/// Only `Decode` is infallible; the other kinds surface the extractor's or
/// splitter's error unchanged.
pub fn assemble(kind: ArtifactKind, raw: &str, rules: &RuleTable) -> ExtractResult<Artifact> {
    Ok(match kind {
        ArtifactKind::Card => Artifact::Card(extract_structured(raw, rules)?),
        ArtifactKind::Minutes => Artifact::Minutes(extract_structured(raw, rules)?),
        ArtifactKind::Split => Artifact::Split(split_sections(raw, rules)?),
        ArtifactKind::Decode => Artifact::Decode(LineClassifier::new(rules).classify(raw)),
    })
}

/// Both halves of a meeting analysis, each with its own outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingReport {
    pub internal: ExtractResult<StrategyRecord>,
    pub external: ExtractResult<DualTextRecord>,
}

impl MeetingReport {
    /// True when at least one artifact was structured.
    pub fn any_success(&self) -> bool {
        self.internal.is_ok() || self.external.is_ok()
    }

    /// True when both artifacts were structured.
    pub fn is_complete(&self) -> bool {
        self.internal.is_ok() && self.external.is_ok()
    }
}

/// Structure the internal card and external minutes independently.
///
/// A failure in one half is logged and kept in the report; it never
/// prevents the other half from being structured.
pub fn assemble_meeting(internal_raw: &str, external_raw: &str, rules: &RuleTable) -> MeetingReport {
    let internal = extract_structured::<StrategyRecord>(internal_raw, rules);
    if let Err(e) = &internal {
        warn!(error = %e, "internal intelligence card could not be structured");
    }

    let external = extract_structured::<DualTextRecord>(external_raw, rules);
    if let Err(e) = &external {
        warn!(error = %e, "external meeting minutes could not be structured");
    }

    MeetingReport { internal, external }
}
