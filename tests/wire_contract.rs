//! Decodes a full aggregator response as produced on the wire and checks it
//! survives the codec and the checker unchanged.

use serde_json::Value;
use v4api::check::Checker;
use v4api::config::CheckSettings;
use v4api::{Confidence, Document, DocumentKind, SearchResponse};

const FIXTURE: &str = include_str!("fixtures/search_response.json");

fn decode_fixture() -> SearchResponse {
    match Document::decode(DocumentKind::Response, FIXTURE).unwrap() {
        Document::Response(response) => response,
        other => panic!("unexpected document {:?}", other),
    }
}

#[test]
fn test_fixture_decodes() {
    let response = decode_fixture();

    assert_eq!(response.pools.len(), 2);
    assert_eq!(response.results.len(), 2);
    assert!(response.warnings.is_empty());
    assert_eq!(response.total_hits, 2);

    let request = response.request.as_ref().unwrap();
    assert!(request.preferences.is_excluded("https://archives.example/api"));
    assert!(!request.preferences.is_excluded("https://catalog.example/api"));

    let catalog = &response.results[0];
    assert_eq!(catalog.confidence_level(), Some(Confidence::High));
    assert_eq!(catalog.confidence_index(), 2);
    assert_eq!(catalog.record_count(), 1);

    let record = &catalog.groups[0].records[0];
    let names: Vec<_> = record.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        ["id", "title", "author", "access_url", "published", "availability"]
    );
    assert!(record.fields[0].is_optional());
    assert_eq!(record.fields[3].effective_visibility(), "detailed");
    assert_eq!(record.fields[4].effective_type(), "text");
    assert_eq!(record.fields[4].ris_code, "PY");
    assert_eq!(
        record.fields[5].structured_value.as_ref().unwrap()["library"],
        "Alderman"
    );

    let failed: Vec<_> = response.failed_results().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].status_message, "pool is unavailable");
    assert!(failed[0].groups.is_empty());
}

#[test]
fn test_fixture_passes_checker() {
    let document = Document::decode(DocumentKind::Response, FIXTURE).unwrap();
    let violations = Checker::new(&CheckSettings::default(), &[]).check(&document);
    assert!(violations.is_empty(), "{:?}", violations);
}

#[test]
fn test_fixture_round_trip() {
    let response = decode_fixture();
    let encoded = v4api::codec::encode(&response).unwrap();
    let reparsed: SearchResponse = v4api::codec::decode(&encoded).unwrap();
    assert_eq!(reparsed, response);

    // Canonical form matches the fixture except for the producer's null list.
    let mut expected: Value = serde_json::from_str(FIXTURE).unwrap();
    expected["warnings"] = Value::Array(vec![]);
    let actual: Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(actual, expected);
}
