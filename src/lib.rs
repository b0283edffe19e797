//! intelcard library
//!
//! Structures raw generative-model output (intelligence cards, meeting
//! minutes, marker-delimited advice and free-form advisory prose) into
//! typed, render-ready data.

pub mod config;
pub mod structuring;

pub use config::Config;
pub use structuring::{
    assemble, assemble_meeting, classify, extract_structured, split_by_markers, Artifact,
    ArtifactKind, ClassifiedDocument, DualTextRecord, ExtractError, ExtractResult,
    LineClassifier, MarkerPattern, MarkerSections, RuleTable, StrategyRecord,
};
