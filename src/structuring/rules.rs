//! The static rule table shared by every structuring call site.
//!
//! Heading keywords, noise patterns and the reroute vocabulary are domain
//! data tuned to Traditional-Chinese business phrasing. They live here as a
//! serde-loadable table so a deployment can swap them out from config
//! without touching the algorithms.
//!
//! ```toml
//! [rules.markers]
//! output = "最佳化產出"
//! rationale = "戰略解析"
//!
//! [rules.reroute]
//! analysis_min_chars = 15
//! title_max_chars = 12
//! ```

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Complete rule table for fence stripping, marker splitting and line classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    /// Code-fence delimiter wrapped around JSON responses
    #[serde(default = "default_fence")]
    pub fence: String,
    /// Meta-instructions the model echoes back; matching lines are dropped
    #[serde(default = "default_noise_patterns")]
    pub noise_patterns: Vec<String>,
    #[serde(default)]
    pub markers: MarkerRules,
    #[serde(default)]
    pub headings: HeadingRules,
    #[serde(default)]
    pub reroute: RerouteRules,
    #[serde(default)]
    pub tips: TipRules,
    #[serde(default)]
    pub annotation: AnnotationRules,
}

/// Labels of the two bracketed sections in advisory responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRules {
    /// Marker that opens the ready-to-use output section
    #[serde(default = "default_output_marker")]
    pub output: String,
    /// Marker that opens the rationale section
    #[serde(default = "default_rationale_marker")]
    pub rationale: String,
}

/// Heading recognition for the four classifier sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingRules {
    /// Lines longer than this (in characters) are never headings
    #[serde(default = "default_heading_max_chars")]
    pub max_chars: usize,
    #[serde(default = "default_subtext_heading")]
    pub subtext: HeadingRule,
    #[serde(default = "default_executor_heading")]
    pub executor: HeadingRule,
    #[serde(default = "default_consultant_heading")]
    pub consultant: HeadingRule,
    #[serde(default = "default_tips_heading")]
    pub tips: HeadingRule,
}

/// How one section's heading is recognized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingRule {
    /// Leading section number (`1.`, `1、`, or `1 ` followed by a keyword)
    #[serde(default)]
    pub number: Option<u32>,
    /// Keywords that open the section when found anywhere in a short line
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Vocabulary for moving analysis out of the consultant script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RerouteRules {
    #[serde(default = "default_analysis_keywords")]
    pub analysis_keywords: Vec<String>,
    /// A keyword line must be longer than this to count as analysis
    #[serde(default = "default_analysis_min_chars")]
    pub analysis_min_chars: usize,
    /// A `title: content` line needs a title shorter than this
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
    /// Openers that mark a line as dialogue no matter what follows
    #[serde(default = "default_safe_openers")]
    pub safe_openers: Vec<String>,
    /// Title given to rerouted lines without their own title
    #[serde(default = "default_analysis_title")]
    pub analysis_title: String,
}

/// Tip accumulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipRules {
    /// Title for an untitled line that arrives before any tip exists
    #[serde(default = "default_tip_title")]
    pub default_title: String,
}

/// Parenthesis characters recognized around annotation tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRules {
    #[serde(default = "default_open_parens")]
    pub open: Vec<char>,
    #[serde(default = "default_close_parens")]
    pub close: Vec<char>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_fence() -> String {
    "```".to_string()
}

fn default_output_marker() -> String {
    "最佳化產出".to_string()
}

fn default_rationale_marker() -> String {
    "戰略解析".to_string()
}

fn default_heading_max_chars() -> usize {
    24
}

fn default_subtext_heading() -> HeadingRule {
    HeadingRule {
        number: Some(1),
        keywords: strings(&["潛臺詞", "潛台詞"]),
    }
}

fn default_executor_heading() -> HeadingRule {
    HeadingRule {
        number: Some(2),
        keywords: strings(&["執行者"]),
    }
}

fn default_consultant_heading() -> HeadingRule {
    HeadingRule {
        number: Some(3),
        keywords: strings(&["顧問"]),
    }
}

fn default_tips_heading() -> HeadingRule {
    HeadingRule {
        number: None,
        keywords: strings(&["【技巧解析】", "技巧解析", "心理技巧", "專家技巧", "戰略解析", "戰略亮點"]),
    }
}

fn default_noise_patterns() -> Vec<String> {
    strings(&["請直接複製以下話術", "這段話術運用了", "以下三種技巧"])
}

fn default_analysis_keywords() -> Vec<String> {
    strings(&[
        "這段",
        "這句話",
        "運用了",
        "心理",
        "戰略",
        "背後",
        "轉移",
        "轉變",
        "核心需求",
        "專業界定",
        "確定性回饋",
    ])
}

fn default_analysis_min_chars() -> usize {
    15
}

fn default_title_max_chars() -> usize {
    12
}

fn default_safe_openers() -> Vec<String> {
    strings(&[
        "我們", "我", "第一", "第二", "第三", "1.", "2.", "3.", "針對", "關於", "為了",
    ])
}

fn default_analysis_title() -> String {
    "戰略解析".to_string()
}

fn default_tip_title() -> String {
    "戰略點撥".to_string()
}

fn default_open_parens() -> Vec<char> {
    vec!['(', '（']
}

fn default_close_parens() -> Vec<char> {
    vec![')', '）']
}

impl Default for MarkerRules {
    fn default() -> Self {
        Self {
            output: default_output_marker(),
            rationale: default_rationale_marker(),
        }
    }
}

impl Default for HeadingRules {
    fn default() -> Self {
        Self {
            max_chars: default_heading_max_chars(),
            subtext: default_subtext_heading(),
            executor: default_executor_heading(),
            consultant: default_consultant_heading(),
            tips: default_tips_heading(),
        }
    }
}

impl Default for RerouteRules {
    fn default() -> Self {
        Self {
            analysis_keywords: default_analysis_keywords(),
            analysis_min_chars: default_analysis_min_chars(),
            title_max_chars: default_title_max_chars(),
            safe_openers: default_safe_openers(),
            analysis_title: default_analysis_title(),
        }
    }
}

impl Default for TipRules {
    fn default() -> Self {
        Self {
            default_title: default_tip_title(),
        }
    }
}

impl Default for AnnotationRules {
    fn default() -> Self {
        Self {
            open: default_open_parens(),
            close: default_close_parens(),
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            fence: default_fence(),
            noise_patterns: default_noise_patterns(),
            markers: MarkerRules::default(),
            headings: HeadingRules::default(),
            reroute: RerouteRules::default(),
            tips: TipRules::default(),
            annotation: AnnotationRules::default(),
        }
    }
}

impl RuleTable {
    /// The built-in table, shared by every call site that has no override.
    pub fn builtin() -> &'static RuleTable {
        static BUILTIN: OnceLock<RuleTable> = OnceLock::new();
        BUILTIN.get_or_init(RuleTable::default)
    }

    /// Validate the table.
    ///
    /// Returns `Ok(())` if the table is usable,
    /// or an error describing the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        if self.fence.trim().is_empty() {
            return Err("rules.fence must not be empty".to_string());
        }
        if self.markers.output.trim().is_empty() {
            return Err("rules.markers.output must not be empty".to_string());
        }
        if self.markers.rationale.trim().is_empty() {
            return Err("rules.markers.rationale must not be empty".to_string());
        }
        if self.markers.output == self.markers.rationale {
            return Err("rules.markers.output and rules.markers.rationale must differ".to_string());
        }
        if self.headings.max_chars == 0 {
            return Err("rules.headings.max_chars must be > 0".to_string());
        }
        if self.reroute.title_max_chars == 0 {
            return Err("rules.reroute.title_max_chars must be > 0".to_string());
        }
        if self.annotation.open.is_empty() || self.annotation.close.is_empty() {
            return Err("rules.annotation needs at least one open and one close character".to_string());
        }
        for (name, rule) in [
            ("subtext", &self.headings.subtext),
            ("executor", &self.headings.executor),
            ("consultant", &self.headings.consultant),
            ("tips", &self.headings.tips),
        ] {
            if rule.number.is_none() && rule.keywords.is_empty() {
                return Err(format!(
                    "rules.headings.{} needs a number or at least one keyword",
                    name
                ));
            }
        }
        Ok(())
    }

    /// Check whether a character opens an annotation.
    pub fn is_open_paren(&self, c: char) -> bool {
        self.annotation.open.contains(&c)
    }

    /// Check whether a character closes an annotation.
    pub fn is_close_paren(&self, c: char) -> bool {
        self.annotation.close.contains(&c)
    }
}
