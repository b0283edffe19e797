//! CLI behavior tests

use predicates::prelude::*;

use crate::helpers::{fixture_arg, intelcard};

// ============================================
// help
// ============================================

#[test]
fn help_lists_subcommands() {
    let (mut cmd, _home) = intelcard();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("QUICK START:"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("\x1b[").not());
}

// ============================================
// card / minutes
// ============================================

#[test]
fn card_prints_markdown() {
    let (mut cmd, _home) = intelcard();
    cmd.args(["card", &fixture_arg("internal.txt")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# 🔒 戰略情報紀錄表 (2024/05/01)"))
        .stdout(predicate::str::contains("  2. [客戶] 確認預算區間"));
}

#[test]
fn card_json_output() {
    let (mut cmd, _home) = intelcard();
    let output = cmd
        .args(["--format", "json", "card", &fixture_arg("internal.txt")])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["political"]["situationType"], "Marketing");
    assert_eq!(value["strategy"]["actions"][0]["owner"], "我方");
}

#[test]
fn card_missing_field_reports_path() {
    let (mut cmd, _home) = intelcard();
    cmd.args(["card", &fixture_arg("internal_missing_field.txt")])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("risks.hiddenCosts"));
}

#[test]
fn card_reads_stdin() {
    let (mut cmd, _home) = intelcard();
    let raw = std::fs::read_to_string(fixture_arg("internal.txt")).unwrap();
    cmd.args(["card", "-"])
        .write_stdin(raw)
        .assert()
        .success()
        .stdout(predicate::str::contains("**專案名稱**：官網改版"));
}

#[test]
fn minutes_email_part_only() {
    let (mut cmd, _home) = intelcard();
    cmd.args(["minutes", &fixture_arg("external.txt"), "--part", "email"])
        .assert()
        .success()
        .stdout("陳董您好，感謝今日撥冗討論。\n");
}

#[test]
fn minutes_of_prose_fails() {
    let (mut cmd, _home) = intelcard();
    cmd.args(["minutes", &fixture_arg("broken.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn missing_input_file_fails() {
    let (mut cmd, _home) = intelcard();
    cmd.args(["card", "/nonexistent/internal.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read response file"));
}

// ============================================
// split / decode
// ============================================

#[test]
fn split_json_output() {
    let (mut cmd, _home) = intelcard();
    let output = cmd
        .args(["--format", "json", "split", &fixture_arg("split.txt")])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["rationale"], "先給對方一個低風險的起點，降低決策壓力。");
}

#[test]
fn split_without_marker_fails() {
    let (mut cmd, _home) = intelcard();
    cmd.args(["split", &fixture_arg("broken.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Section marker not found: 最佳化產出"));
}

#[test]
fn decode_copy_prints_script_only() {
    let (mut cmd, _home) = intelcard();
    cmd.args(["decode", &fixture_arg("advice.txt"), "--copy"])
        .assert()
        .success()
        .stdout("王總，我理解您對預算的顧慮\n我們可以先從第一階段開始，三個月後再評估成效\n");
}

#[test]
fn decode_json_has_tags() {
    let (mut cmd, _home) = intelcard();
    let output = cmd
        .args(["decode", &fixture_arg("advice.txt"), "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["consultantScript"][1]["tag"], "降低風險");
    assert_eq!(value["tips"][0]["title"], "核心需求轉移");
}

#[test]
fn decode_verbose_logs_to_stderr() {
    let (mut cmd, _home) = intelcard();
    cmd.args(["-v", "decode", &fixture_arg("advice.txt")])
        .assert()
        .success()
        .stderr(predicate::str::contains("dropped echoed instruction"));
}

// ============================================
// meeting / batch / rules
// ============================================

#[test]
fn meeting_partial_success_exits_zero() {
    let (mut cmd, _home) = intelcard();
    cmd.args([
        "meeting",
        "--internal",
        &fixture_arg("broken.txt"),
        "--external",
        &fixture_arg("external.txt"),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("[email]"))
    .stderr(predicate::str::contains("Internal card unavailable"));
}

#[test]
fn meeting_total_failure_exits_nonzero() {
    let (mut cmd, _home) = intelcard();
    cmd.args([
        "meeting",
        "--internal",
        &fixture_arg("broken.txt"),
        "--external",
        &fixture_arg("broken.txt"),
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Neither the internal card"));
}

#[test]
fn meeting_json_marks_each_half() {
    let (mut cmd, _home) = intelcard();
    let output = cmd
        .args([
            "--format",
            "json",
            "meeting",
            "--internal",
            &fixture_arg("internal_missing_field.txt"),
            "--external",
            &fixture_arg("external.txt"),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["internal"]["error"]["path"], "risks.hiddenCosts");
    assert_eq!(value["external"]["ok"]["markdown"], "## 會議記錄\n- 確認三個提案方向");
}

#[test]
fn batch_reports_in_input_order() {
    let (mut cmd, _home) = intelcard();
    let output = cmd
        .args([
            "--format",
            "json",
            "batch",
            "--kind",
            "minutes",
            &fixture_arg("external.txt"),
            &fixture_arg("broken.txt"),
            &fixture_arg("external.txt"),
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["ok"]["kind"], "minutes");
    assert_eq!(entries[1]["error"]["kind"], "malformed_json");
    assert!(entries[2]["ok"].is_object());
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 of 3 files"));
}

#[test]
fn batch_all_decoded() {
    let (mut cmd, _home) = intelcard();
    cmd.args([
        "batch",
        "--kind",
        "decode",
        &fixture_arg("advice.txt"),
        &fixture_arg("split.txt"),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("== ").count(2));
}

#[test]
fn batch_rejects_repeated_stdin() {
    let (mut cmd, _home) = intelcard();
    cmd.args(["batch", "--kind", "decode", "-", "-"])
        .write_stdin("1. 潛臺詞解碼\n客戶在意控制感")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("stdin ('-') may be given at most once"));
}

#[test]
fn meeting_rejects_stdin_for_both_halves() {
    let (mut cmd, _home) = intelcard();
    cmd.args(["meeting", "--internal", "-", "--external", "-"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most once"));
}

#[test]
fn batch_rejects_unknown_kind() {
    let (mut cmd, _home) = intelcard();
    cmd.args(["batch", "--kind", "pdf", &fixture_arg("advice.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown artifact kind"));
}

#[test]
fn rules_prints_builtin_table() {
    let (mut cmd, _home) = intelcard();
    cmd.arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("[markers]"))
        .stdout(predicate::str::contains("最佳化產出"));
}
