use fop_category::core::processor::{run, CommandRequest};
use fop_category::error::{AppError, AppResult};
use fop_category::model::common::CategoryId;
use fop_category::model::output::Outcome;
use fop_category::store::{CatalogStore, JsonCatalogStore};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Ids deliberately mix JSON numbers and numeric strings.
const CATALOG: &str = r#"{
    "configuration": {"PS_LANG_DEFAULT": "1", "PS_ROOT_CATEGORY": "1", "PS_HOME_CATEGORY": 2},
    "shops": [{"id": 1, "name": "Main"}],
    "languages": [{"id": 1, "iso_code": "en"}, {"id": 2, "iso_code": "fr"}],
    "categories": [
        {"id": 1, "active": 1, "name": {"1": "Root", "2": "Racine"}},
        {"id": "2", "id_parent": 1, "active": 1, "name": {"1": "Home", "2": "Accueil"}},
        {"id": 3, "id_parent": "2", "active": 1, "name": {"1": "Shoes", "2": "Chaussures"}},
        {"id": 4, "id_parent": 2, "active": "0", "name": {"1": "Hats", "2": "Chapeaux"}},
        {"id": 5, "id_parent": 2, "active": true, "name": {"1": "Bags", "2": "Sacs"}}
    ],
    "products": [
        {"id": 10, "active": 1, "categories": ["4"]},
        {"id": 11, "active": 1, "categories": [5]}
    ]
}"#;

fn catalog() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, CATALOG).unwrap();
    (dir, path)
}

fn no_prompt() -> AppResult<CategoryId> {
    panic!("prompt must not be used")
}

fn request(action: &str) -> CommandRequest {
    CommandRequest {
        action: action.into(),
        ..Default::default()
    }
}

#[test]
fn disable_empty_persists_to_the_file() {
    let (_dir, path) = catalog();
    let mut store = JsonCatalogStore::open(&path).unwrap();
    run(&mut store, &request("disable-empty"), no_prompt).unwrap();

    let reopened = JsonCatalogStore::open(&path).unwrap();
    assert!(!reopened.load_category(3, 1).unwrap().active);
    assert!(!reopened.load_category(4, 1).unwrap().active);
    assert!(reopened.load_category(5, 1).unwrap().active);
    assert_eq!(reopened.data().categories.len(), 5);
}

#[test]
fn string_ids_in_exclusions_and_config_still_match() {
    let (_dir, path) = catalog();
    let mut store = JsonCatalogStore::open(&path).unwrap();
    let mut req = request("status");
    req.exclude = vec![3];
    match run(&mut store, &req, no_prompt).unwrap().outcome {
        Outcome::Scanned { report, .. } => {
            assert!(report.to_deactivate.is_empty());
            assert_eq!(report.to_activate, vec!["Hats (4)"]);
            assert_eq!(report.stats.excluded, 3);
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn labels_follow_the_requested_language() {
    let (_dir, path) = catalog();
    let mut store = JsonCatalogStore::open(&path).unwrap();
    let mut req = request("status");
    req.lang = Some(2);
    match run(&mut store, &req, no_prompt).unwrap().outcome {
        Outcome::Scanned { report, .. } => {
            assert_eq!(report.to_deactivate, vec!["Chaussures (3)"]);
            assert_eq!(report.to_activate, vec!["Chapeaux (4)"]);
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn unconfigured_language_is_rejected() {
    let (_dir, path) = catalog();
    let mut store = JsonCatalogStore::open(&path).unwrap();
    let mut req = request("status");
    req.lang = Some(9);
    assert_eq!(
        run(&mut store, &req, no_prompt).unwrap_err(),
        AppError::UnknownLanguage(9)
    );
}

#[test]
fn toggle_writes_through() {
    let (_dir, path) = catalog();
    let mut store = JsonCatalogStore::open(&path).unwrap();
    let mut req = request("toggle");
    req.category = Some(4);
    run(&mut store, &req, no_prompt).unwrap();
    assert!(JsonCatalogStore::open(&path)
        .unwrap()
        .load_category(4, 1)
        .unwrap()
        .active);
}

#[test]
fn malformed_catalog_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, "{\"configuration\": {}}").unwrap();
    assert!(matches!(
        JsonCatalogStore::open(&path),
        Err(AppError::SerdeParse(_))
    ));
}
