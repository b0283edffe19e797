//! Splitting advisory responses at explicit section markers.
//!
//! Prompt templates ask the model to answer in two labelled blocks, e.g.
//! `[最佳化產出]: ...` followed by `[戰略解析]: ...`. The splitter finds the
//! first marker, then the first second-marker after it, and returns the text
//! between and after them. Markup inside the sections is left untouched.
//!
//! # Marker Recognition
//!
//! A marker matches case-insensitively in any of these forms:
//! - `[label]` or `【label】` at the start of a line
//! - a bare `label` at the start of a line, followed by a colon or end of line
//!
//! A marker mentioned mid-sentence is ordinary text.
//!
//! A list prefix (`1.`, `-`, `#`, `**`) before the marker belongs to the
//! header, so it never leaks into the preceding section. One trailing `:` or
//! `：` after the marker is consumed.

use super::error::{ExtractError, ExtractResult};
use super::rules::RuleTable;
use super::types::MarkerSections;

/// Bracket pairs accepted around a marker label.
const BRACKETS: &[(char, char)] = &[('[', ']'), ('【', '】')];

/// A section header label to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPattern {
    label: String,
}

/// Location of a marker occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MarkerMatch {
    /// Where the preceding section stops (start of the header)
    section_end: usize,
    /// Where this marker's section begins (after the header and colon)
    content_start: usize,
}

impl MarkerPattern {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Find the first occurrence at or after byte offset `from`.
    fn find_in(&self, text: &str, from: usize) -> Option<MarkerMatch> {
        let mut line_start = from;
        for line in text[from..].split_inclusive('\n') {
            if let Some(found) = self.match_line(line, line_start) {
                return Some(found);
            }
            line_start += line.len();
        }
        None
    }

    fn match_line(&self, line: &str, offset: usize) -> Option<MarkerMatch> {
        let body = line.trim_end_matches(['\r', '\n']);
        let prefix_len = list_prefix_len(body);

        let rest = &body[prefix_len..];

        // Only a list prefix or emphasis may precede a bracketed marker
        if let Some(len) = self.match_bracketed(rest) {
            return Some(MarkerMatch {
                section_end: offset,
                content_start: offset + skip_header_tail(body, prefix_len + len),
            });
        }

        if let Some(len) = strip_prefix_ignore_case(rest, &self.label) {
            let header_end = prefix_len + len;
            let tail = body[header_end..].trim_start_matches(is_inline_markup);
            if tail.is_empty() || tail.starts_with([':', '：']) {
                return Some(MarkerMatch {
                    section_end: offset,
                    content_start: offset + skip_header_tail(body, header_end),
                });
            }
        }

        None
    }

    /// Byte length of `[label]` at the start of `s`, if present.
    fn match_bracketed(&self, s: &str) -> Option<usize> {
        let open = s.chars().next()?;
        let close = BRACKETS
            .iter()
            .find(|(o, _)| *o == open)
            .map(|(_, c)| *c)?;
        let inner = &s[open.len_utf8()..];
        let label_len = strip_prefix_ignore_case(inner.trim_start(), &self.label)?;
        let leading_ws = inner.len() - inner.trim_start().len();
        let after_label = &inner[leading_ws + label_len..];
        let after_ws = after_label.trim_start();
        if after_ws.starts_with(close) {
            let consumed = open.len_utf8()
                + leading_ws
                + label_len
                + (after_label.len() - after_ws.len())
                + close.len_utf8();
            Some(consumed)
        } else {
            None
        }
    }
}

fn is_inline_markup(c: char) -> bool {
    c == '*' || c == '_' || c == ' ' || c == '\t'
}

/// Byte offset of the first char at or after `from` that fails `pred`.
fn skip_while(s: &str, from: usize, pred: impl Fn(char) -> bool) -> usize {
    s[from..]
        .char_indices()
        .find(|(_, c)| !pred(*c))
        .map(|(i, _)| from + i)
        .unwrap_or(s.len())
}

/// Length of a leading list/heading prefix such as `  1. `, `- `, `## `, `**`.
fn list_prefix_len(line: &str) -> usize {
    let idx = skip_while(line, 0, |c| {
        c.is_whitespace() || matches!(c, '#' | '*' | '-' | '>' | '_' | '•' | '●')
    });
    let digits_end = skip_while(line, idx, |c| c.is_ascii_digit());
    let idx = if digits_end > idx {
        match line[digits_end..].chars().next() {
            Some(c) if matches!(c, '.' | '、' | ')' | '．') => digits_end + c.len_utf8(),
            _ => idx,
        }
    } else {
        idx
    };
    skip_while(line, idx, |c| c.is_whitespace() || c == '*' || c == '_')
}

/// Skip closing emphasis and one colon after a header.
fn skip_header_tail(line: &str, from: usize) -> usize {
    let idx = skip_while(line, from, is_inline_markup);
    match line[idx..].chars().next() {
        Some(c) if c == ':' || c == '：' => idx + c.len_utf8(),
        _ => from,
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte length of `prefix` at the start of `s`, compared case-insensitively.
fn strip_prefix_ignore_case(s: &str, prefix: &str) -> Option<usize> {
    if prefix.is_empty() {
        return None;
    }
    let mut chars = s.char_indices();
    for expected in prefix.chars() {
        let (_, c) = chars.next()?;
        if !chars_eq_ignore_case(c, expected) {
            return None;
        }
    }
    Some(chars.next().map(|(i, _)| i).unwrap_or(s.len()))
}

/// Split text at an output marker and a rationale marker.
///
/// - `output` is the text strictly between the first output marker and the
///   first rationale marker after it (or end of text).
/// - `rationale` is the text after that rationale marker (empty if absent).
///
/// Both sections are trimmed; their inner formatting is preserved.
///
/// # Errors
///
/// [`ExtractError::MissingMarker`] with the output marker's label when the
/// output marker does not occur at all.
pub fn split_by_markers(raw: &str, markers: [&MarkerPattern; 2]) -> ExtractResult<MarkerSections> {
    let [output_marker, rationale_marker] = markers;

    let start = output_marker
        .find_in(raw, 0)
        .ok_or_else(|| ExtractError::MissingMarker(output_marker.label().to_string()))?;

    let (output, rationale) = match rationale_marker.find_in(raw, start.content_start) {
        Some(end) => (
            &raw[start.content_start..end.section_end],
            &raw[end.content_start..],
        ),
        None => (&raw[start.content_start..], ""),
    };

    Ok(MarkerSections {
        output: output.trim().to_string(),
        rationale: rationale.trim().to_string(),
    })
}

/// Split using the output/rationale markers configured in the rule table.
pub fn split_sections(raw: &str, rules: &RuleTable) -> ExtractResult<MarkerSections> {
    let output = MarkerPattern::new(rules.markers.output.as_str());
    let rationale = MarkerPattern::new(rules.markers.rationale.as_str());
    split_by_markers(raw, [&output, &rationale])
}
