//! Text renderings of structured results.
//!
//! The intelligence card renders to the markdown document users copy into
//! their notes; a classified advisory document renders to a sectioned
//! plain-text report and to the consultant script's clipboard text.

use super::annotation::parse_annotated_line;
use super::rules::RuleTable;
use super::types::{ClassifiedDocument, ScriptLine, StrategyRecord, Tip};

/// Section headings of the plain-text advisory report.
const SUBTEXT_HEADING: &str = "【潛臺詞解碼】";
const EXECUTOR_HEADING: &str = "【執行者思維】";
const CONSULTANT_HEADING: &str = "【顧問回覆】";
const TIPS_HEADING: &str = "【戰略點撥】";

impl StrategyRecord {
    /// Render the internal intelligence card as markdown.
    pub fn to_markdown(&self) -> String {
        let dm = &self.political.decision_maker;
        let inf = &self.political.influencer;
        let ally = if inf.is_ally { "✅ 友軍" } else { "⚠️ 非友軍" };

        let actions: Vec<String> = self
            .strategy
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| format!("\n  {}. [{}] {}", i + 1, action.owner, action.task))
            .collect();

        format!(
            "# 🔒 戰略情報紀錄表 ({date})\n\
             \n\
             ## 專案定義\n\
             **專案名稱**：{project}\n\
             \n\
             ## 1. 權力與局勢 (Political Map)\n\
             - **決策者 (Budget Owner)**：{dm_name} ({dm_title})\n\
             \x20 - *焦點*：{cares}\n\
             - **關鍵影響者**：{inf_name} ({inf_title})\n\
             \x20 - *動向*：{attitude}\n\
             \x20 - *狀態*：{ally}\n\
             - **目前局勢**：{situation}\n\
             \n\
             ## 2. 風險掃描 (Risk Assessment)\n\
             - **🛑 地雷區**：{landmines}\n\
             - **📉 隱形成本**：{hidden}\n\
             \n\
             ## 3. 作戰策略 (Action Plan)\n\
             - **模式**：{mode}\n\
             - **行動清單**：{actions}",
            date = self.meeting_date,
            project = self.project_name,
            dm_name = dm.name,
            dm_title = dm.title,
            cares = dm.cares_about,
            inf_name = inf.name,
            inf_title = inf.title,
            attitude = inf.attitude,
            ally = ally,
            situation = self.political.situation_type.label(),
            landmines = self.risks.landmines,
            hidden = self.risks.hidden_costs,
            mode = self.strategy.role.label(),
            actions = actions.concat(),
        )
    }
}

impl ClassifiedDocument {
    /// Parse every consultant line into script and tag.
    pub fn script_lines(&self, rules: &RuleTable) -> Vec<ScriptLine> {
        self.consultant_script
            .iter()
            .map(|line| parse_annotated_line(line, rules))
            .collect()
    }

    /// Clipboard text for the consultant script: tags removed, one line each.
    pub fn script_copy_text(&self, rules: &RuleTable) -> String {
        self.script_lines(rules)
            .into_iter()
            .map(|line| line.script)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render all non-empty buckets as a sectioned plain-text report.
    pub fn to_text(&self, rules: &RuleTable) -> String {
        let mut sections: Vec<String> = Vec::new();

        if !self.subtext.is_empty() {
            sections.push(bullet_section(SUBTEXT_HEADING, &self.subtext));
        }
        if !self.executor_framing.is_empty() {
            sections.push(bullet_section(EXECUTOR_HEADING, &self.executor_framing));
        }
        if !self.consultant_script.is_empty() {
            let lines: Vec<String> = self
                .script_lines(rules)
                .iter()
                .map(|line| match &line.tag {
                    Some(tag) => format!("{}  〔{}〕", line.script, tag),
                    None => line.script.clone(),
                })
                .collect();
            sections.push(bullet_section(CONSULTANT_HEADING, &lines));
        }
        if !self.tips.is_empty() {
            let lines: Vec<String> = self.tips.iter().map(tip_entry).collect();
            sections.push(bullet_section(TIPS_HEADING, &lines));
        }

        sections.join("\n\n")
    }
}

fn bullet_section(heading: &str, lines: &[String]) -> String {
    let mut out = heading.to_string();
    for line in lines {
        out.push_str("\n- ");
        // Continuation lines hang under the bullet
        out.push_str(&line.replace('\n', "\n  "));
    }
    out
}

fn tip_entry(tip: &Tip) -> String {
    if tip.title.is_empty() {
        tip.content.clone()
    } else {
        format!("{}：{}", tip.title, tip.content)
    }
}
