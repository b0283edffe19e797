//! CLI output snapshot tests
//!
//! Tests the actual CLI binary output for reproducibility.

use std::process::Command;

use crate::helpers::fixture_arg;

/// Helper to run the intelcard CLI with an empty home and capture output
fn run_intelcard(args: &[&str]) -> (String, String, i32) {
    let home = tempfile::TempDir::new().expect("Failed to create temp home");
    let output = Command::new(env!("CARGO_BIN_EXE_intelcard"))
        .args(args)
        .env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("INTELCARD_LOG")
        .output()
        .expect("Failed to execute intelcard");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn snapshot_split_text() {
    let file = fixture_arg("split.txt");
    let (stdout, stderr, exit_code) = run_intelcard(&["split", &file]);
    assert_eq!(exit_code, 0);
    assert_eq!(stderr, "");
    insta::assert_snapshot!(stdout.trim_end(), @r#"
【最佳化產出】
陳董您好，我們建議先從品牌頁開始改版。
第二階段再處理電商功能。

【戰略解析】
先給對方一個低風險的起點，降低決策壓力。
"#);
}

#[test]
fn snapshot_minutes_both() {
    let file = fixture_arg("external.txt");
    let (stdout, _, exit_code) = run_intelcard(&["minutes", &file]);
    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r#"
[email]
陳董您好，感謝今日撥冗討論。

[markdown]
## 會議記錄
- 確認三個提案方向
"#);
}

#[test]
fn snapshot_meeting_partial() {
    let internal = fixture_arg("internal_missing_field.txt");
    let external = fixture_arg("external.txt");
    let (stdout, stderr, exit_code) = run_intelcard(&[
        "meeting",
        "--internal",
        &internal,
        "--external",
        &external,
    ]);
    assert_eq!(exit_code, 0);
    assert!(stderr.contains("Response does not match schema at `risks.hiddenCosts`"));
    insta::assert_snapshot!(stdout.trim_end(), @r#"
[email]
陳董您好，感謝今日撥冗討論。

[markdown]
## 會議記錄
- 確認三個提案方向
"#);
}
