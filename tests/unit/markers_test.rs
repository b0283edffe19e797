//! Unit tests for marker section splitting

use intelcard::structuring::{
    split_by_markers, split_sections, ExtractError, MarkerPattern, RuleTable,
};

use crate::helpers::fixture;

#[test]
fn bracketed_markers_split_output_and_rationale() {
    let output = MarkerPattern::new("最佳化產出");
    let rationale = MarkerPattern::new("戰略解析");
    let raw = "[最佳化產出]: Hello\n\n[戰略解析]: Because X";
    let sections = split_by_markers(raw, [&output, &rationale]).unwrap();
    assert_eq!(sections.output, "Hello");
    assert_eq!(sections.rationale, "Because X");
}

#[test]
fn fixture_with_emphasis_and_preamble() {
    let sections = split_sections(&fixture("split.txt"), RuleTable::builtin()).unwrap();
    assert_eq!(
        sections.output,
        "陳董您好，我們建議先從品牌頁開始改版。\n第二階段再處理電商功能。"
    );
    assert_eq!(sections.rationale, "先給對方一個低風險的起點，降低決策壓力。");
}

#[test]
fn missing_output_marker_is_error() {
    let err = split_sections(&fixture("broken.txt"), RuleTable::builtin()).unwrap_err();
    assert_eq!(err, ExtractError::MissingMarker("最佳化產出".to_string()));
    assert_eq!(err.to_string(), "Section marker not found: 最佳化產出");
}

#[test]
fn missing_rationale_marker_is_not_error() {
    let sections =
        split_sections("【最佳化產出】\n只有產出，沒有解析", RuleTable::builtin()).unwrap();
    assert_eq!(sections.output, "只有產出，沒有解析");
    assert_eq!(sections.rationale, "");
}

#[test]
fn english_labels_match_case_insensitively() {
    let output = MarkerPattern::new("Output");
    let rationale = MarkerPattern::new("Rationale");
    let raw = "OUTPUT:\n- keep **this** markup\n\n## rationale\nbecause";
    let sections = split_by_markers(raw, [&output, &rationale]).unwrap();
    assert_eq!(sections.output, "- keep **this** markup");
    assert_eq!(sections.rationale, "because");
}

#[test]
fn rationale_before_output_is_ignored() {
    let raw = "[戰略解析] early\n[最佳化產出] body\n[戰略解析] late";
    let sections = split_sections(raw, RuleTable::builtin()).unwrap();
    assert_eq!(sections.output, "body");
    assert_eq!(sections.rationale, "late");
}
