//! Error taxonomy for the structuring engine.
//!
//! Only the strict components report errors:
//! - `MalformedJson` / `SchemaMismatch` come from the response extractor
//! - `MissingMarker` comes from the marker splitter
//!
//! The line classifier has no error channel; degraded input always yields a
//! (possibly empty) document.

use thiserror::Error;

/// Result type for structuring operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors from structuring a raw model response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The text is not syntactically decodable JSON.
    #[error("Response is not valid JSON: {reason}")]
    MalformedJson { reason: String },

    /// Decodable, but a required field is missing, mistyped, or outside its enum.
    #[error("Response does not match schema at `{path}`: {reason}")]
    SchemaMismatch { path: String, reason: String },

    /// A required section marker was not found anywhere in the text.
    #[error("Section marker not found: {0}")]
    MissingMarker(String),
}

impl ExtractError {
    /// Field path for schema mismatches, `None` for other variants.
    pub fn field_path(&self) -> Option<&str> {
        match self {
            ExtractError::SchemaMismatch { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Short machine-friendly kind name, used in batch and json reports.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::MalformedJson { .. } => "malformed_json",
            ExtractError::SchemaMismatch { .. } => "schema_mismatch",
            ExtractError::MissingMarker(_) => "missing_marker",
        }
    }
}
