//! Trailing annotation tags on consultant dialogue lines.
//!
//! Script lines often end with a short technique label, e.g.
//! `我建議分階段進行 (專業奪回)`. This is the single parser for that
//! convention; rendering, copy text and tests all go through it.

use super::rules::RuleTable;
use super::types::ScriptLine;

/// Split a dialogue line into its script and trailing parenthetical tag.
///
/// The line must end with a closing parenthesis (half- or full-width); the
/// tag is the text after the last opening parenthesis before it, and may not
/// contain another closing parenthesis. Parentheses elsewhere in the line are
/// part of the script. A blank tag counts as no tag.
pub fn parse_annotated_line(line: &str, rules: &RuleTable) -> ScriptLine {
    let trimmed = line.trim();

    split_trailing_tag(trimmed, rules)
        .map(|(script, tag)| ScriptLine {
            script: script.to_string(),
            tag: Some(tag.to_string()),
        })
        .unwrap_or_else(|| ScriptLine {
            script: trimmed.to_string(),
            tag: None,
        })
}

fn split_trailing_tag<'a>(line: &'a str, rules: &RuleTable) -> Option<(&'a str, &'a str)> {
    let close = line.chars().next_back()?;
    if !rules.is_close_paren(close) {
        return None;
    }
    let body = &line[..line.len() - close.len_utf8()];

    let (open_idx, open) = body
        .char_indices()
        .rev()
        .find(|(_, c)| rules.is_open_paren(*c))?;
    let inner = &body[open_idx + open.len_utf8()..];

    if inner.chars().any(|c| rules.is_close_paren(c)) {
        return None;
    }
    let tag = inner.trim();
    if tag.is_empty() {
        return None;
    }

    Some((body[..open_idx].trim(), tag))
}

impl ScriptLine {
    /// Re-join the script and its tag in canonical `script (tag)` form.
    pub fn to_line(&self) -> String {
        match &self.tag {
            Some(tag) => format!("{} ({})", self.script, tag),
            None => self.script.clone(),
        }
    }
}
