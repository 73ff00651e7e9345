//! JSON export/import tests
mod common;

use aerolist::checklist::{Checklist, ChecklistEntry, default_collection};
use aerolist::serializer::{self, ImportError};
use aerolist::Collection;
use common::{divider, item, sample_collection};
use serde_json::{Value, json};

#[test]
fn test_round_trip_sample() {
    let collection = sample_collection();
    let text = serializer::export(&collection).unwrap();
    assert_eq!(serializer::import(&text).unwrap(), collection);
}

#[test]
fn test_round_trip_edge_values() {
    let mut odd = Checklist::new(0, "");
    odd.entries = vec![
        item(0, "", ""),
        divider(u64::MAX),
        item(7, "Ünïcode \"quoted\"\nline", "FREE & CORRECT"),
        // duplicate ids are kept as-is
        item(7, "Again", "ON"),
    ];
    let collections = [
        Collection::new(),
        default_collection(),
        Collection::from(vec![odd, Checklist::new(1, "Empty")]),
    ];
    for collection in collections {
        let text = serializer::export(&collection).unwrap();
        assert_eq!(serializer::import(&text).unwrap(), collection);
    }
}

#[test]
fn test_export_shape() {
    let text = serializer::export(&sample_collection()).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value[0],
        json!({
            "id": 100,
            "title": "Before Engine Start",
            "entries": [
                {"id": 101, "target": "Preflight Inspection", "state": "COMPLETE"},
                {"id": 102, "target": "Seats & Belts", "state": "ADJUSTED & LOCKED"},
                {"id": 103, "kind": "divider"},
                {"id": 104, "target": "Circuit Breakers", "state": "CHECK IN"}
            ]
        })
    );
    // pretty-printed
    assert!(text.contains("\n  {\n    \"id\": 100,"));
}

#[test]
fn test_import_legacy_field_names() {
    let text = r#"[
      {
        "id": 1,
        "title": "Pre-flight Checklist",
        "items": [
          { "id": 1, "target": "Master Switch", "state": "ON" },
          { "id": 1712345678901, "type": "divider" }
        ]
      }
    ]"#;
    let collection = serializer::import(text).unwrap();
    let entries = &collection.checklists()[0].entries;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], item(1, "Master Switch", "ON"));
    assert_eq!(entries[1], divider(1712345678901));
}

#[test]
fn test_import_ignores_unknown_fields() {
    let text = r#"[{"id": 3, "title": "Cruise", "color": "blue",
                    "entries": [{"id": 4, "target": "Power", "state": "SET", "note": "x"}]}]"#;
    let collection = serializer::import(text).unwrap();
    let checklist = &collection.checklists()[0];
    assert_eq!(checklist.title, "Cruise");
    assert!(matches!(checklist.entries[0], ChecklistEntry::Item(_)));
}

#[test]
fn test_import_invalid_json() {
    let err = serializer::import("{ definitely not json").unwrap_err();
    assert!(matches!(err, ImportError::Parse(_)));
    assert!(err.to_string().starts_with("Invalid JSON file"));
}

#[test]
fn test_import_valid_json_wrong_shape() {
    for text in ["42", "\"text\"", "{}", "[1, 2]", r#"[{"entries": 5}]"#] {
        assert!(
            matches!(serializer::import(text), Err(ImportError::Shape(_))),
            "expected shape error for {}",
            text
        );
    }
}
