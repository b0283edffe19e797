//! Strict decoding of JSON-in-text responses.
//!
//! Models asked for "pure JSON" still like to wrap it in a markdown code
//! fence. The extractor removes that one wrapper and then decodes strictly:
//! syntax errors become `MalformedJson`, structural problems become
//! `SchemaMismatch` with the offending field path. Nothing else is repaired.

use serde_json::Value;
use tracing::debug;

use super::error::{ExtractError, ExtractResult};
use super::rules::RuleTable;
use super::schema::{check_shape, Schema, ROOT_PATH};

/// Strip a code fence wrapped around the whole text.
///
/// The opening fence line (with any language tag, e.g. ```` ```json ````) and a
/// closing fence line are removed. Text without a leading fence is only trimmed;
/// a missing closing fence is tolerated.
pub fn strip_code_fence<'a>(raw: &'a str, fence: &str) -> &'a str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(fence) {
        text = match rest.find('\n') {
            Some(newline) => &rest[newline + 1..],
            // Single-line block: drop an inline language tag
            None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
        };

        text = text.trim_end();
        if let Some(body) = text.strip_suffix(fence) {
            text = body;
        }
    }

    text.trim()
}

/// Decode a model response into a schema-conforming record.
///
/// # Errors
///
/// - [`ExtractError::MalformedJson`] if the unwrapped text is not JSON
/// - [`ExtractError::SchemaMismatch`] if a required field is missing, has the
///   wrong shape, or holds a value outside its enum
pub fn extract_structured<T: Schema>(raw: &str, rules: &RuleTable) -> ExtractResult<T> {
    let text = strip_code_fence(raw, &rules.fence);

    let value: Value = serde_json::from_str(text).map_err(|e| ExtractError::MalformedJson {
        reason: e.to_string(),
    })?;

    check_shape(&T::SHAPE, &value, "")?;

    // The shape check covers every required field, so a failure here is rare
    // (e.g. a number too large for its target type).
    let decoded = serde_json::from_value(value).map_err(|e| ExtractError::SchemaMismatch {
        path: ROOT_PATH.to_string(),
        reason: e.to_string(),
    })?;

    debug!(schema = T::NAME, "decoded structured response");
    Ok(decoded)
}
