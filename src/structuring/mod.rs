//! Model-output structuring engine.
//!
//! Converts raw, weakly-structured text produced by a generative model into
//! typed, render-ready data. Three output shapes are handled:
//!
//! - **JSON in text**: fence stripping followed by a strict schema decode
//! - **Marker-delimited text**: two labelled sections split at their headers
//! - **Free-form advisory prose**: a line classifier that partitions text
//!   into four buckets with heuristic rerouting
//!
//! # Design Philosophy
//!
//! Every entry point is a pure function of its input string plus a read-only
//! [`RuleTable`]. There is no shared mutable state, so independent responses
//! can be structured in parallel without coordination. Imperfect JSON is
//! reported with a field path rather than repaired; free text never fails.
//!
//! # Module Structure
//!
//! - [`extractor`] - Fence stripping and strict schema decoding
//! - [`markers`] - Output/rationale marker splitting
//! - [`classifier`] - Line state machine and reroute predicates
//! - [`annotation`] - Trailing `(tag)` parser for script lines
//! - [`assembler`] - Uniform result type over all of the above
//! - [`rules`] - The replaceable rule table (keywords, markers, thresholds)

pub mod annotation;
pub mod assembler;
pub mod classifier;
pub mod error;
pub mod extractor;
pub mod markers;
mod render;
pub mod rules;
pub mod schema;
pub mod types;

// Re-export main types
pub use annotation::parse_annotated_line;
pub use assembler::{assemble, assemble_meeting, Artifact, ArtifactKind, MeetingReport};
pub use classifier::{classify, LineClassifier};
pub use error::{ExtractError, ExtractResult};
pub use extractor::{extract_structured, strip_code_fence};
pub use markers::{split_by_markers, split_sections, MarkerPattern};
pub use rules::RuleTable;
pub use schema::Schema;
pub use types::{
    ActionItem, ActionPlan, ClassifiedDocument, DecisionMaker, DualTextRecord, EngagementRole,
    Influencer, MarkerSections, PoliticalMap, RiskScan, ScriptLine, SituationType,
    StrategyRecord, Tip,
};
