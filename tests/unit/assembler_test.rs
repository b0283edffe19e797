//! Unit tests for artifact assembly

use intelcard::structuring::{
    assemble, assemble_meeting, Artifact, ArtifactKind, ExtractError, RuleTable,
};

use crate::helpers::fixture;

fn rules() -> &'static RuleTable {
    RuleTable::builtin()
}

#[test]
fn each_kind_yields_matching_artifact() {
    let cases = [
        (ArtifactKind::Card, "internal.txt"),
        (ArtifactKind::Minutes, "external.txt"),
        (ArtifactKind::Split, "split.txt"),
        (ArtifactKind::Decode, "advice.txt"),
    ];
    for (kind, file) in cases {
        let artifact = assemble(kind, &fixture(file), rules()).unwrap();
        assert_eq!(artifact.kind(), kind, "fixture: {}", file);
    }
}

#[test]
fn decode_of_json_is_empty_document() {
    match assemble(ArtifactKind::Decode, &fixture("internal.txt"), rules()).unwrap() {
        Artifact::Decode(doc) => assert!(doc.is_empty()),
        other => panic!("unexpected artifact {:?}", other.kind()),
    }
}

#[test]
fn meeting_reports_each_half_independently() {
    let report = assemble_meeting(&fixture("internal.txt"), &fixture("broken.txt"), rules());
    assert!(report.internal.is_ok());
    assert!(matches!(
        report.external,
        Err(ExtractError::MalformedJson { .. })
    ));
    assert!(report.any_success());
    assert!(!report.is_complete());
}

#[test]
fn meeting_schema_mismatch_is_kept() {
    let report = assemble_meeting(
        &fixture("internal_missing_field.txt"),
        &fixture("external.txt"),
        rules(),
    );
    assert_eq!(
        report.internal.unwrap_err().field_path(),
        Some("risks.hiddenCosts")
    );
    assert_eq!(report.external.unwrap().email, "陳董您好，感謝今日撥冗討論。");
}

#[test]
fn parallel_assembly_matches_sequential() {
    use rayon::prelude::*;

    let inputs: Vec<String> = ["advice.txt", "split.txt", "broken.txt", "internal.txt"]
        .iter()
        .map(|f| fixture(f))
        .collect();

    let sequential: Vec<_> = inputs
        .iter()
        .map(|raw| assemble(ArtifactKind::Decode, raw, rules()))
        .collect();
    let parallel: Vec<_> = inputs
        .par_iter()
        .map(|raw| assemble(ArtifactKind::Decode, raw, rules()))
        .collect();

    assert_eq!(sequential, parallel);
}
