//! Session persistence on disk

use std::fs;
use study_cost::models::{Accommodation, QuestionId, QuestionnaireAnswers};
use study_cost::session::{Session, SessionStore, DEFAULT_COUNTRY};
use tempfile::TempDir;

#[test]
fn test_missing_file_is_empty_session() {
    let tmp = TempDir::new().unwrap();
    let store = SessionStore::new(tmp.path().join("session.json"));

    let session = store.load().expect("missing file loads");
    assert_eq!(session, Session::default());
    assert_eq!(session.country(), DEFAULT_COUNTRY);
}

#[test]
fn test_save_creates_parent_directories() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("deeper").join("session.json");
    let store = SessionStore::new(&path);

    store.save(&Session::default()).expect("save succeeds");
    assert!(path.exists());
}

#[test]
fn test_round_trip() {
    let tmp = TempDir::new().unwrap();
    let store = SessionStore::new(tmp.path().join("session.json"));

    let mut answers = QuestionnaireAnswers::default();
    answers.set(QuestionId::Accommodation, "studio");
    answers.set(QuestionId::Intake, "summer");
    let session = Session {
        selected_country: Some("Ireland".to_string()),
        questionnaire_answers: Some(answers),
        selected_packages: vec!["visa".to_string(), "aps".to_string()],
    };

    store.save(&session).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, session);
    assert_eq!(loaded.country(), "Ireland");
    assert_eq!(loaded.answers().accommodation, Accommodation::Studio);

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("\"selectedCountry\""));
    assert!(raw.contains("\"studio\""));
}

#[test]
fn test_clear_removes_file() {
    let tmp = TempDir::new().unwrap();
    let store = SessionStore::new(tmp.path().join("session.json"));

    store.save(&Session::default()).unwrap();
    store.clear().unwrap();
    assert!(!store.path().exists());

    // Clearing twice is fine
    store.clear().unwrap();
}

#[test]
fn test_malformed_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("session.json");
    fs::write(&path, "{ selectedCountry: ").unwrap();

    assert!(SessionStore::new(&path).load().is_err());
}

#[test]
fn test_unknown_answer_codes_are_ignored() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("session.json");
    fs::write(
        &path,
        r#"{"questionnaireAnswers": {"accommodation": "castle", "mobile": "basic_plan"}}"#,
    )
    .unwrap();

    let answers = SessionStore::new(&path).load().unwrap().answers();
    assert_eq!(answers.accommodation, Accommodation::Unspecified);
    assert_eq!(answers.answered_count(), 1);
}
