//! Snapshot tests for rendered documents

use intelcard::structuring::{classify, extract_structured, RuleTable, StrategyRecord};

use crate::helpers::fixture;

#[test]
fn intelligence_card_markdown() {
    let record: StrategyRecord =
        extract_structured(&fixture("internal.txt"), RuleTable::builtin()).unwrap();
    insta::assert_snapshot!(record.to_markdown(), @r#"
# 🔒 戰略情報紀錄表 (2024/05/01)

## 專案定義
**專案名稱**：官網改版

## 1. 權力與局勢 (Political Map)
- **決策者 (Budget Owner)**：陳董 (董事長)
  - *焦點*：品牌形象
- **關鍵影響者**：李經理 (行銷經理)
  - *動向*：支持
  - *狀態*：✅ 友軍
- **目前局勢**：行銷主導

## 2. 風險掃描 (Risk Assessment)
- **🛑 地雷區**：不喜歡被推銷
- **📉 隱形成本**：內部審核流程長

## 3. 作戰策略 (Action Plan)
- **模式**：顧問模式
- **行動清單**：
  1. [我方] 提供三個方向提案
  2. [客戶] 確認預算區間
"#);
}

#[test]
fn advisory_text_report() {
    let doc = classify(&fixture("advice.txt"));
    insta::assert_snapshot!(doc.to_text(RuleTable::builtin()), @r#"
【潛臺詞解碼】
- 王總說「再考慮看看」，其實是擔心預算超支後要自己扛責任。
- 他真正在意的是：這個決定會不會讓他在董事會上難堪。

【執行者思維】
- 直接降價兩成，希望對方盡快簽約。

【顧問回覆】
- 王總，我理解您對預算的顧慮  〔同理鋪墊〕
- 我們可以先從第一階段開始，三個月後再評估成效  〔降低風險〕

【戰略點撥】
- 核心需求轉移：從價格轉向可控的風險
- 同理鋪墊：先承認對方的擔憂
  讓對方感覺被理解，防衛心自然降低。
- 降低風險：把大決定拆成小決定
"#);
}
