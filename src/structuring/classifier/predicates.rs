//! Single-purpose line predicates used by the classifier.
//!
//! Each signal is its own function so it can be tested against literal
//! lines; [`reroute_to_tip`] combines them into the consultant-state rule.

use crate::structuring::rules::{HeadingRule, RuleTable};
use crate::structuring::types::Tip;

/// Characters that separate a title from its content.
const COLONS: [char; 2] = [':', '：'];

/// Strip markdown emphasis and heading markers from a raw line.
///
/// Removes every `**` / `__`, a leading `#` run followed by whitespace, and
/// a single pair of `*` or `_` wrapping the whole line; then trims.
pub fn clean_line(line: &str) -> String {
    let without_bold = line.replace("**", "").replace("__", "");
    let mut text = without_bold.trim();

    let hashes = text.len() - text.trim_start_matches('#').len();
    if hashes > 0 && text[hashes..].starts_with(char::is_whitespace) {
        text = text[hashes..].trim_start();
    }

    for marker in ['*', '_'] {
        if text.chars().count() > 2 && text.starts_with(marker) && text.ends_with(marker) {
            text = text[1..text.len() - 1].trim();
            break;
        }
    }

    text.to_string()
}

/// Check whether a line is an echoed meta-instruction.
pub fn is_noise(line: &str, rules: &RuleTable) -> bool {
    rules
        .noise_patterns
        .iter()
        .any(|p| !p.is_empty() && line.contains(p.as_str()))
}

/// Check whether a line is short enough to be a heading at all.
pub fn fits_heading_length(line: &str, rules: &RuleTable) -> bool {
    line.chars().count() <= rules.headings.max_chars
}

/// Check whether a line is a numbered heading for `rule`'s section.
///
/// `1.`, `1．`, `1、`, `1)` and a bare `1` are headings on their own. A number
/// followed only by whitespace (`3 個月內...`) is common in prose, so that
/// form also needs one of the section's keywords. `12` never matches `1`.
pub fn is_numbered_heading(line: &str, rule: &HeadingRule) -> bool {
    let Some(n) = rule.number else {
        return false;
    };
    let digits = n.to_string();
    let Some(rest) = line.strip_prefix(digits.as_str()) else {
        return false;
    };
    match rest.chars().next() {
        None => true,
        Some(c) if matches!(c, '.' | '．' | '、' | ')' | '）') => true,
        Some(c) if c.is_whitespace() => has_heading_keyword(rest, rule),
        Some(_) => false,
    }
}

/// Check whether a line contains any of the rule's heading keywords.
pub fn has_heading_keyword(line: &str, rule: &HeadingRule) -> bool {
    rule.keywords
        .iter()
        .any(|k| !k.is_empty() && line.contains(k.as_str()))
}

/// Check whether a line contains an analysis keyword.
pub fn has_analysis_keyword(line: &str, rules: &RuleTable) -> bool {
    rules
        .reroute
        .analysis_keywords
        .iter()
        .any(|k| !k.is_empty() && line.contains(k.as_str()))
}

/// Check whether a line is long enough for keyword-based rerouting.
pub fn exceeds_analysis_length(line: &str, rules: &RuleTable) -> bool {
    line.chars().count() > rules.reroute.analysis_min_chars
}

/// Check whether a line opens like dialogue (first person, ordinal, connective).
pub fn is_safe_opener(line: &str, rules: &RuleTable) -> bool {
    rules
        .reroute
        .safe_openers
        .iter()
        .any(|o| !o.is_empty() && line.starts_with(o.as_str()))
}

/// Split a line at its first colon (half- or full-width).
///
/// Both halves are trimmed; either may be empty.
pub fn split_at_colon(line: &str) -> Option<(&str, &str)> {
    let idx = line.find(COLONS)?;
    let colon_len = line[idx..].chars().next().map(char::len_utf8).unwrap_or(1);
    Some((line[..idx].trim(), line[idx + colon_len..].trim()))
}

/// Match the "short title, colon, more text" shape.
///
/// The title must be non-empty and shorter than `title_max_chars`
/// characters, and content must follow the colon.
pub fn short_title_split<'a>(line: &'a str, rules: &RuleTable) -> Option<(&'a str, &'a str)> {
    let (title, content) = split_at_colon(line)?;
    let title_chars = title.chars().count();
    if title_chars == 0 || title_chars >= rules.reroute.title_max_chars || content.is_empty() {
        return None;
    }
    Some((title, content))
}

/// Decide whether a consultant-section line is really analysis.
///
/// The rule is:
///
/// ```text
/// reroute = !safe_opener && ((analysis_keyword && longer_than_min) || short_title_shape)
/// ```
///
/// A rerouted line with a non-empty title before a colon becomes
/// `{title, content}`; otherwise it is wrapped under the configured
/// analysis title. Returns `None` when the line stays in the script.
pub fn reroute_to_tip(line: &str, rules: &RuleTable) -> Option<Tip> {
    if is_safe_opener(line, rules) {
        return None;
    }

    let keyword_analysis = has_analysis_keyword(line, rules) && exceeds_analysis_length(line, rules);
    let titled = short_title_split(line, rules).is_some();
    if !keyword_analysis && !titled {
        return None;
    }

    match split_at_colon(line) {
        Some((title, content)) if !title.is_empty() => Some(Tip::new(title, content)),
        _ => Some(Tip::new(rules.reroute.analysis_title.as_str(), line)),
    }
}
