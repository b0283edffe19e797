//! Line-oriented classification of free-form advisory text.
//!
//! The advisory prompt asks for three numbered sections (subtext decoding,
//! the naive executor framing to avoid, the consultant's reply) plus optional
//! technique notes, but the model answers in prose with no machine-readable
//! markers. This module partitions that prose into four buckets with an
//! explicit state machine.
//!
//! # State Machine
//!
//! States are the four buckets plus `Unset`. Each cleaned, non-blank line
//! goes through these rules in order:
//!
//! 1. **Noise**: echoed meta-instructions are dropped, state unchanged
//! 2. **Heading**: a short line naming a section switches to it and is not
//!    emitted. Numbered headings only move forward through the sections;
//!    keyword headings switch from any state
//! 3. **Reroute**: in the consultant section, analysis-looking lines go to
//!    `tips` (see [`predicates::reroute_to_tip`])
//! 4. **Tips**: `title: content` lines open a tip, other lines continue
//!    the latest tip
//! 5. Otherwise the line joins the current bucket; with no section yet it is
//!    dropped
//!
//! [`step`] is the pure transition function; [`LineClassifier::classify`]
//! folds it over the input.

pub mod predicates;

use tracing::{debug, trace};

use super::rules::{HeadingRule, RuleTable};
use super::types::{ClassifiedDocument, Tip};

/// Classifier state: the bucket currently receiving lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Unset,
    Subtext,
    ExecutorFraming,
    ConsultantScript,
    Tips,
}

impl Section {
    /// Position in the canonical section order (numbered headings only advance).
    fn order(&self) -> u8 {
        match self {
            Section::Unset => 0,
            Section::Subtext => 1,
            Section::ExecutorFraming => 2,
            Section::ConsultantScript => 3,
            Section::Tips => 4,
        }
    }
}

/// Why a line produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Empty after markup removal
    Blank,
    /// Matched a noise pattern
    Noise,
    /// Consumed as a section heading
    Heading,
    /// Arrived before any section heading
    NoSection,
}

/// Output of one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    Skipped(SkipReason),
    Subtext(String),
    ExecutorFraming(String),
    Script(String),
    /// A new tip entry
    Tip(Tip),
    /// Text to append to the latest tip (or to open a default-titled one)
    TipContinuation(String),
}

fn heading_rules(rules: &RuleTable) -> [(Section, &HeadingRule); 4] {
    [
        (Section::Subtext, &rules.headings.subtext),
        (Section::ExecutorFraming, &rules.headings.executor),
        (Section::ConsultantScript, &rules.headings.consultant),
        (Section::Tips, &rules.headings.tips),
    ]
}

/// Detect a section heading on a cleaned line.
pub fn detect_heading(state: Section, line: &str, rules: &RuleTable) -> Option<Section> {
    if !predicates::fits_heading_length(line, rules) {
        return None;
    }

    let numbered = heading_rules(rules).into_iter().find(|(section, rule)| {
        section.order() > state.order() && predicates::is_numbered_heading(line, rule)
    });
    if let Some((section, _)) = numbered {
        return Some(section);
    }

    heading_rules(rules)
        .into_iter()
        .find(|(_, rule)| predicates::has_heading_keyword(line, rule))
        .map(|(section, _)| section)
}

/// Pure transition function: `(state, raw line) -> (new state, emission)`.
pub fn step(state: Section, raw_line: &str, rules: &RuleTable) -> (Section, Emission) {
    let line = predicates::clean_line(raw_line);
    if line.is_empty() {
        return (state, Emission::Skipped(SkipReason::Blank));
    }

    if predicates::is_noise(&line, rules) {
        return (state, Emission::Skipped(SkipReason::Noise));
    }

    if let Some(next) = detect_heading(state, &line, rules) {
        return (next, Emission::Skipped(SkipReason::Heading));
    }

    let emission = match state {
        Section::Unset => Emission::Skipped(SkipReason::NoSection),
        Section::Subtext => Emission::Subtext(line),
        Section::ExecutorFraming => Emission::ExecutorFraming(line),
        Section::ConsultantScript => match predicates::reroute_to_tip(&line, rules) {
            Some(tip) => Emission::Tip(tip),
            None => Emission::Script(line),
        },
        Section::Tips => match predicates::split_at_colon(&line) {
            Some((title, content)) => Emission::Tip(Tip::new(title, content)),
            None => Emission::TipContinuation(line),
        },
    };
    (state, emission)
}

/// Folds [`step`] over every line of a response.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'a> {
    rules: &'a RuleTable,
}

impl Default for LineClassifier<'static> {
    fn default() -> Self {
        Self::new(RuleTable::builtin())
    }
}

impl<'a> LineClassifier<'a> {
    pub fn new(rules: &'a RuleTable) -> Self {
        Self { rules }
    }

    /// Partition a response into buckets. Never fails.
    pub fn classify(&self, raw: &str) -> ClassifiedDocument {
        let mut doc = ClassifiedDocument::default();
        let mut state = Section::Unset;

        for (line_no, raw_line) in raw.lines().enumerate() {
            let (next, emission) = step(state, raw_line, self.rules);
            if next != state {
                trace!(line = line_no + 1, from = ?state, to = ?next, "section change");
            }
            state = next;
            self.apply(&mut doc, emission, line_no + 1);
        }

        doc
    }

    fn apply(&self, doc: &mut ClassifiedDocument, emission: Emission, line_no: usize) {
        match emission {
            Emission::Skipped(SkipReason::Noise) => {
                debug!(line = line_no, "dropped echoed instruction");
            }
            Emission::Skipped(SkipReason::NoSection) => {
                debug!(line = line_no, "dropped line before first section");
            }
            Emission::Skipped(_) => {}
            Emission::Subtext(line) => doc.subtext.push(line),
            Emission::ExecutorFraming(line) => doc.executor_framing.push(line),
            Emission::Script(line) => doc.consultant_script.push(line),
            Emission::Tip(tip) => doc.tips.push(tip),
            Emission::TipContinuation(line) => match doc.tips.last_mut() {
                Some(last) => {
                    if !last.content.is_empty() {
                        last.content.push('\n');
                    }
                    last.content.push_str(&line);
                }
                None => doc
                    .tips
                    .push(Tip::new(self.rules.tips.default_title.as_str(), line)),
            },
        }
    }
}

/// Classify with the built-in rule table.
pub fn classify(raw: &str) -> ClassifiedDocument {
    LineClassifier::default().classify(raw)
}
