use passpad::core::document::Document;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

// ============================================================================
// Helper Functions
// ============================================================================

/// A document holding `text` with no backing path yet.
fn unsaved_document(text: &str) -> Document {
    let mut doc = Document::new();
    doc.text = text.to_string();
    doc.modified = true;
    doc
}

// ============================================================================
// Save → Open Round-Trip
// ============================================================================

#[test]
fn test_save_then_open_round_trips_exact_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    let text = "first line\n\tindented\n\nlast line, no trailing newline";

    let mut doc = unsaved_document(text);
    doc.save_as(path.clone()).unwrap();
    assert_eq!(doc.path.as_deref(), Some(path.as_path()));
    assert!(!doc.modified);

    let mut reopened = Document::new();
    reopened.open(path.clone()).unwrap();
    assert_eq!(reopened.text, text);
    assert_eq!(reopened.path.as_deref(), Some(path.as_path()));
    assert!(!reopened.modified);
}

#[test]
fn test_save_round_trips_non_ascii_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("unicode.txt");
    let text = "héllo wörld — 日本語 🗝\n";

    let mut doc = unsaved_document(text);
    doc.save_as(path.clone()).unwrap();

    let mut reopened = Document::new();
    reopened.open(path).unwrap();
    assert_eq!(reopened.text, text);
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "old content that is longer than the new").unwrap();

    let mut doc = unsaved_document("new");
    doc.save_as(path.clone()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn test_repeated_saves_reuse_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");

    let mut doc = unsaved_document("v1");
    doc.save_as(path.clone()).unwrap();

    doc.text.push_str("\nv2");
    doc.modified = true;
    doc.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "v1\nv2");
    assert_eq!(doc.path.as_deref(), Some(path.as_path()));
}

#[test]
fn test_save_leaves_no_temp_file_behind() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");

    let mut doc = unsaved_document("content");
    doc.save_as(path).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["notes.txt"]);
}

// ============================================================================
// Failure Cases
// ============================================================================

#[test]
fn test_open_nonexistent_path_leaves_document_unchanged() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.txt");

    let mut doc = Document::new();
    doc.text = "precious unsaved work".to_string();
    doc.path = Some(PathBuf::from("/tmp/previous.txt"));

    let err = doc.open(missing).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    assert_eq!(doc.text, "precious unsaved work");
    assert_eq!(doc.path.as_deref(), Some(std::path::Path::new("/tmp/previous.txt")));
}

#[test]
fn test_open_non_utf8_file_fails_and_leaves_document_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.dat");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x42]).unwrap();

    let mut doc = unsaved_document("kept");
    assert!(doc.open(path).is_err());
    assert_eq!(doc.text, "kept");
    assert!(doc.path.is_none());
}

#[test]
fn test_save_into_missing_directory_fails_but_keeps_buffer() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("notes.txt");

    let mut doc = unsaved_document("buffer survives");
    let err = doc.save_as(path.clone()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);

    assert_eq!(doc.text, "buffer survives");
    assert!(doc.modified);
    // Save-as keeps the chosen path even when the write fails, so a plain
    // save can retry once the directory exists
    assert_eq!(doc.path.as_deref(), Some(path.as_path()));
}

#[test]
fn test_save_onto_directory_path_fails_and_keeps_state() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("notes.txt");
    fs::create_dir(&target).unwrap();

    let mut doc = unsaved_document("would be lost");
    assert!(doc.save_as(target.clone()).is_err());
    assert_eq!(doc.text, "would be lost");
    assert!(doc.modified);
    assert!(target.is_dir());
}

#[test]
fn test_failed_write_never_truncates_the_previous_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");

    let mut doc = unsaved_document("first version");
    doc.save_as(path.clone()).unwrap();

    // Occupy the sibling slot the writer stages into, so the next save
    // fails before it can touch the real file
    fs::create_dir(dir.path().join("notes.tmp")).unwrap();

    doc.text = "second version".to_string();
    doc.modified = true;
    assert!(doc.save().is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "first version");
}

// ============================================================================
// New Document
// ============================================================================

#[test]
fn test_new_document_after_open_drops_path_and_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "on disk").unwrap();

    let mut doc = Document::new();
    doc.open(path.clone()).unwrap();
    assert_eq!(doc.text, "on disk");

    doc.clear();
    assert!(doc.text.is_empty());
    assert!(doc.path.is_none());
    // The file itself is untouched
    assert_eq!(fs::read_to_string(&path).unwrap(), "on disk");
}
