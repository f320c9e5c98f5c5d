use seatplan_core::StorageError;
use seatplan_designer::{
    EditorOptions, EditorSession, FileLayoutStore, HeadlessScene, LayoutDocument, LayoutStore,
    ScriptedDialog, SeatId,
};
use tempfile::TempDir;

#[test]
fn test_file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut store = FileLayoutStore::new(dir.path().join("layouts"));
    let doc = LayoutDocument::from_json(
        r#"{"seats":[{"label":"A1","position":{"left":12.345678901234567,"top":150.0}}]}"#,
    )
    .unwrap();

    assert!(store.load("theatre-layout").unwrap().is_none());
    store.save("theatre-layout", &doc).unwrap();
    assert!(dir.path().join("layouts").join("theatre-layout.json").exists());
    assert_eq!(store.load("theatre-layout").unwrap(), Some(doc));

    assert!(store.remove("theatre-layout").unwrap());
    assert!(!store.remove("theatre-layout").unwrap());
}

#[test]
fn test_file_store_rejects_path_keys() {
    let dir = TempDir::new().unwrap();
    let store = FileLayoutStore::new(dir.path());
    assert!(matches!(
        store.path_for("../escape"),
        Err(StorageError::InvalidKey { .. })
    ));
    assert_eq!(
        store.path_for("main hall").unwrap(),
        dir.path().join("main hall.json")
    );
}

#[test]
fn test_corrupt_file_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("broken.json"), "{ nope").unwrap();
    let store = FileLayoutStore::new(dir.path());
    assert!(matches!(store.load("broken"), Err(StorageError::Json(_))));
}

#[test]
fn test_session_saves_to_directory() {
    let dir = TempDir::new().unwrap();
    let mut session = EditorSession::new(
        EditorOptions::default(),
        HeadlessScene::new(),
        ScriptedDialog::new(),
        FileLayoutStore::new(dir.path()),
    );
    session.add_row(Some("A"), Some(4));
    session.save_layout().unwrap();

    let saved = LayoutDocument::load_from_file(dir.path().join("theatre-layout.json")).unwrap();
    assert!(saved.same_seats(&session.export_layout()));
    assert_eq!(saved.metadata.unwrap().name, "theatre-layout");

    session.delete_seats(&[SeatId(1), SeatId(2)]);
    assert_eq!(session.load_layout().unwrap(), Some(4));
    assert_eq!(session.seats().len(), 4);
}

#[test]
fn test_session_file_export() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("export.json");
    let mut session = EditorSession::new(
        EditorOptions::default(),
        HeadlessScene::new(),
        ScriptedDialog::new(),
        FileLayoutStore::new(dir.path()),
    );
    session.add_single_seat();
    session.add_single_seat();
    session.save_to_file(&path).unwrap();

    let before = session.export_layout();
    session.delete_seats(&[SeatId(1)]);
    assert_eq!(session.load_from_file(&path).unwrap(), 2);
    assert_eq!(session.export_layout(), before);

    assert!(session.load_from_file(dir.path().join("missing.json")).is_err());
}

#[test]
fn test_save_failure_is_notified() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    let mut session = EditorSession::new(
        EditorOptions::default(),
        HeadlessScene::new(),
        ScriptedDialog::new(),
        FileLayoutStore::new(&blocker),
    );
    session.add_single_seat();
    assert!(session.save_layout().is_err());
    assert_eq!(session.dialog().last_title(), Some("Save Failed"));
}
