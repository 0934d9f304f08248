use std::path::Path;

use atlas_data::{DataError, Dataset, FALLBACK_DESCRIPTION};

const TIMELINE: &str = r#"[
  {"id": "partition_india", "date": "1947", "text": "Partition of India", "description": "Partition."},
  {"id": "nanjing_massacre", "date": "1937", "text": "Nanjing Massacre", "description": "Nanjing."},
  {"id": "hiroshima", "date": "1945", "text": "Hiroshima", "description": "Bombing."},
  {"id": "comfort_women_wwii", "date": "1932-1945", "text": "Comfort women", "description": "WWII."}
]"#;

fn write_fixture(dir: &Path) {
    std::fs::write(
        dir.join("countries.json"),
        r#"{"Japan": {"name": "Japan", "description": "Island nation.", "capital": "Tokyo"}}"#,
    )
    .unwrap();
    std::fs::write(dir.join("country_codes.json"), r#"{"JP": "Japan", "CN": "China"}"#).unwrap();
    std::fs::write(dir.join("timeline.json"), TIMELINE).unwrap();
    std::fs::create_dir_all(dir.join("events")).unwrap();
    std::fs::write(
        dir.join("events/nanjing_massacre.json"),
        r#"{"title": "Nanjing Massacre", "date": "1937"}"#,
    )
    .unwrap();
    std::fs::write(dir.join("events/broken.json"), "{ not json").unwrap();
    std::fs::write(dir.join("events/not_utf8.json"), [0x7b, 0xff, 0xfe, 0x7d]).unwrap();
}

fn load() -> (tempfile::TempDir, Dataset) {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let dataset = Dataset::load(dir.path()).unwrap();
    (dir, dataset)
}

#[test]
fn test_known_country_returns_stored_record() {
    let (_dir, ds) = load();
    let japan = ds.country("Japan");
    assert_eq!(japan.name(), Some("Japan"));
    assert_eq!(japan.description(), Some("Island nation."));
    assert_eq!(japan.fields().get("capital").and_then(|v| v.as_str()), Some("Tokyo"));
}

#[test]
fn test_unknown_country_returns_fallback() {
    let (_dir, ds) = load();
    let atlantis = ds.country("Atlantis");
    assert_eq!(
        serde_json::to_value(&atlantis).unwrap(),
        serde_json::json!({"name": "Atlantis", "description": FALLBACK_DESCRIPTION})
    );
}

#[test]
fn test_lookup_is_case_sensitive() {
    let (_dir, ds) = load();
    assert_eq!(ds.country("japan").description(), Some(FALLBACK_DESCRIPTION));
}

#[test]
fn test_timeline_is_file_ordered_and_stable() {
    let (_dir, ds) = load();
    let ids: Vec<&str> = ds.timeline().iter().map(|e| e.id()).collect();
    assert_eq!(ids, ["partition_india", "nanjing_massacre", "hiroshima", "comfort_women_wwii"]);
    assert_eq!(ds.timeline(), ds.timeline());
}

#[test]
fn test_related_events_follow_timeline_order() {
    let (_dir, ds) = load();
    let ids: Vec<String> = ds
        .related_events("Japan")
        .iter()
        .map(|e| e.id().to_string())
        .collect();
    // The index lists comfort_women_wwii first; the timeline order wins.
    assert_eq!(ids, ["nanjing_massacre", "comfort_women_wwii"]);
}

#[test]
fn test_related_events_for_unindexed_country_is_empty() {
    let (_dir, ds) = load();
    assert!(ds.related_events("France").is_empty());
}

#[test]
fn test_related_events_skip_ids_missing_from_timeline() {
    let (_dir, ds) = load();
    // hyderabad_massacres is indexed for India but absent from this timeline.
    let ids: Vec<String> = ds
        .related_events("India")
        .iter()
        .map(|e| e.id().to_string())
        .collect();
    assert_eq!(ids, ["partition_india"]);
}

#[tokio::test]
async fn test_event_detail_reads_file() {
    let (_dir, ds) = load();
    let detail = ds.event_detail("nanjing_massacre").await.unwrap();
    assert_eq!(
        detail.fields().get("title").and_then(|v| v.as_str()),
        Some("Nanjing Massacre")
    );
}

#[tokio::test]
async fn test_event_detail_is_read_on_every_call() {
    let (dir, ds) = load();
    ds.event_detail("nanjing_massacre").await.unwrap();
    std::fs::write(
        dir.path().join("events/nanjing_massacre.json"),
        r#"{"title": "Revised"}"#,
    )
    .unwrap();
    let detail = ds.event_detail("nanjing_massacre").await.unwrap();
    assert_eq!(detail.fields().get("title").and_then(|v| v.as_str()), Some("Revised"));
}

#[tokio::test]
async fn test_event_detail_missing_file_is_not_found() {
    let (_dir, ds) = load();
    let err = ds.event_detail("does_not_exist").await.unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_event_detail_rejects_path_traversal() {
    let (_dir, ds) = load();
    let err = ds.event_detail("../countries").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_event_detail_malformed_file_is_parse_error() {
    let (_dir, ds) = load();
    let err = ds.event_detail("broken").await.unwrap_err();
    assert!(matches!(err, DataError::Parse { .. }), "unexpected error: {err}");
}

#[tokio::test]
async fn test_event_detail_invalid_utf8_is_parse_error() {
    let (_dir, ds) = load();
    let err = ds.event_detail("not_utf8").await.unwrap_err();
    assert!(matches!(err, DataError::Parse { .. }), "unexpected error: {err}");
}
