//! Render-ready data shapes produced by the structuring engine.
//!
//! All values are created fresh per response and are immutable once built.
//! JSON field names follow the camelCase schema the model is prompted with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Internal intelligence card decoded from the strategy-analysis response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRecord {
    pub project_name: String,
    pub meeting_date: String,
    pub political: PoliticalMap,
    pub risks: RiskScan,
    pub strategy: ActionPlan,
}

/// Who decides, who influences, and what kind of situation it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliticalMap {
    pub decision_maker: DecisionMaker,
    pub influencer: Influencer,
    pub situation_type: SituationType,
}

/// The budget owner on the client side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionMaker {
    pub name: String,
    pub title: String,
    /// What this person cares about most
    pub cares_about: String,
}

/// A client-side person with influence over the decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Influencer {
    pub name: String,
    pub title: String,
    /// Supportive / neutral / hostile, in the model's words
    pub attitude: String,
    pub is_ally: bool,
}

/// Which function is driving the engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SituationType {
    Marketing,
    Tech,
    Sales,
    Unknown,
}

impl SituationType {
    /// Accepted JSON values, in declaration order.
    pub const VALUES: &'static [&'static str] = &["Marketing", "Tech", "Sales", "Unknown"];

    /// Display label used on the intelligence card.
    pub fn label(&self) -> &'static str {
        match self {
            SituationType::Marketing => "行銷主導",
            SituationType::Tech => "技術主導",
            SituationType::Sales => "業務主導",
            SituationType::Unknown => "局勢未明",
        }
    }
}

impl fmt::Display for SituationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SituationType::Marketing => write!(f, "Marketing"),
            SituationType::Tech => write!(f, "Tech"),
            SituationType::Sales => write!(f, "Sales"),
            SituationType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Landmines and unspoken costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScan {
    pub landmines: String,
    pub hidden_costs: String,
}

/// Our posture and the ordered follow-up actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub role: EngagementRole,
    pub actions: Vec<ActionItem>,
}

/// Whether we act as an order-taker or as an advisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngagementRole {
    Executioner,
    Consultant,
}

impl EngagementRole {
    /// Accepted JSON values, in declaration order.
    pub const VALUES: &'static [&'static str] = &["Executioner", "Consultant"];

    /// Display label used on the intelligence card.
    pub fn label(&self) -> &'static str {
        match self {
            EngagementRole::Executioner => "執行模式",
            EngagementRole::Consultant => "顧問模式",
        }
    }
}

impl fmt::Display for EngagementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngagementRole::Executioner => write!(f, "Executioner"),
            EngagementRole::Consultant => write!(f, "Consultant"),
        }
    }
}

/// One follow-up task and who owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    pub owner: String,
}

/// External meeting minutes in two renderings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualTextRecord {
    /// Plain-text version safe to paste into an email
    pub email: String,
    /// Markdown version for the internal archive
    pub markdown: String,
}

/// Advisory response split at its two section markers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSections {
    /// Ready-to-use output
    pub output: String,
    /// Why the output is shaped the way it is
    pub rationale: String,
}

/// A strategic commentary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    /// May be empty
    pub title: String,
    pub content: String,
}

impl Tip {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A consultant dialogue line split from its trailing annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptLine {
    pub script: String,
    pub tag: Option<String>,
}

/// Free-form advisory text partitioned into its four buckets.
///
/// Every bucket keeps input order. `subtext` and `executor_framing` are
/// internal-only; `consultant_script` is safe to show the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedDocument {
    pub subtext: Vec<String>,
    pub executor_framing: Vec<String>,
    pub consultant_script: Vec<String>,
    pub tips: Vec<Tip>,
}

impl ClassifiedDocument {
    /// True when no bucket received anything.
    pub fn is_empty(&self) -> bool {
        self.subtext.is_empty()
            && self.executor_framing.is_empty()
            && self.consultant_script.is_empty()
            && self.tips.is_empty()
    }
}
