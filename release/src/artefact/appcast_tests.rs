//! Unit tests for appcast schema types.

use super::*;
use rstest::{fixture, rstest};

fn record(version: &str, description: &str) -> VersionRecord {
    VersionRecord {
        version: ReleaseVersion::new(version),
        description: description.to_owned(),
        sha256: Sha256Digest::try_from("a".repeat(64)).expect("valid digest"),
        url: format!("https://example.invalid/v{version}/llm-ocr-{version}.bobplugin"),
        min_bob_version: DEFAULT_MIN_BOB_VERSION.to_owned(),
    }
}

#[fixture]
fn populated() -> Appcast {
    let mut appcast = Appcast::new(DEFAULT_IDENTIFIER);
    appcast.upsert(&record("1.0.0", "first"));
    appcast.upsert(&record("1.1.0", "second"));
    appcast
}

fn listed_versions(appcast: &Appcast) -> Vec<&str> {
    appcast
        .versions()
        .iter()
        .filter_map(|entry| entry.get("version").and_then(Value::as_str))
        .collect()
}

#[rstest]
fn upsert_places_new_version_first(mut populated: Appcast) {
    let replaced = populated.upsert(&record("1.2.0", "third"));
    assert!(replaced.is_none());
    assert_eq!(listed_versions(&populated), ["1.2.0", "1.1.0", "1.0.0"]);
}

#[rstest]
fn upsert_replaces_existing_version_and_moves_it_first(mut populated: Appcast) {
    let replaced = populated.upsert(&record("1.0.0", "rebuilt"));

    assert_eq!(
        replaced.and_then(|entry| entry.get("desc").cloned()),
        Some(Value::from("first"))
    );
    assert_eq!(listed_versions(&populated), ["1.0.0", "1.1.0"]);
    let first = populated.versions().first().expect("one record");
    assert_eq!(first["desc"], "rebuilt");
}

#[rstest]
fn find_returns_listed_entry(populated: Appcast) {
    let found = populated
        .find(&ReleaseVersion::new("1.0.0"))
        .expect("listed");
    assert_eq!(found["desc"], "first");
    assert!(populated.find(&ReleaseVersion::new("9.9.9")).is_none());
}

#[test]
fn record_entry_uses_appcast_field_names() {
    let entry = record("1.2.0", "fix bug").to_entry();
    let keys: Vec<&str> = entry.keys().map(String::as_str).collect();
    assert_eq!(keys, ["version", "desc", "sha256", "url", "minBobVersion"]);
    assert_eq!(entry["sha256"], "a".repeat(64));
}

#[test]
fn new_appcast_serialises_identifier_then_versions() {
    let text = serde_json::to_string(&Appcast::new(DEFAULT_IDENTIFIER)).expect("serialise");
    assert_eq!(text, r#"{"identifier":"henry.llm.ocr","versions":[]}"#);
}

#[test]
fn parses_document_without_versions() {
    let appcast: Appcast =
        serde_json::from_str(r#"{"identifier": "henry.llm.ocr"}"#).expect("parse");
    assert_eq!(appcast.identifier(), Some("henry.llm.ocr"));
    assert!(appcast.versions().is_empty());
}

#[test]
fn unknown_keys_survive_a_round_trip() {
    let raw = r#"{
        "homepage": "https://example.invalid",
        "identifier": "henry.llm.ocr",
        "versions": [
            {
                "channel": "stable",
                "version": "1.0.0",
                "desc": "首个版本",
                "sha256": "BBBB",
                "url": "https://example.invalid/a.bobplugin"
            }
        ]
    }"#;
    let appcast: Appcast = serde_json::from_str(raw).expect("parse");
    let value = serde_json::to_value(&appcast).expect("serialise");
    let expected: Value = serde_json::from_str(raw).expect("valid JSON");

    assert_eq!(value, expected);
    let keys: Vec<&str> = value
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["homepage", "identifier", "versions"]);
}

#[test]
fn entries_without_a_version_are_kept() {
    let raw = r#"{"identifier": "x", "versions": [{"desc": "orphan"}]}"#;
    let mut appcast: Appcast = serde_json::from_str(raw).expect("parse");
    appcast.upsert(&record("1.0.0", "first"));

    assert_eq!(appcast.versions().len(), 2);
    assert_eq!(appcast.versions()[1]["desc"], "orphan");
}

#[rstest]
#[case::versions_not_array(r#"{"identifier": "x", "versions": {}}"#)]
#[case::entry_not_object(r#"{"identifier": "x", "versions": ["1.0.0"]}"#)]
#[case::document_not_object("[]")]
fn rejects_malformed_structure(#[case] raw: &str) {
    let result: std::result::Result<Appcast, _> = serde_json::from_str(raw);
    assert!(result.is_err());
}
