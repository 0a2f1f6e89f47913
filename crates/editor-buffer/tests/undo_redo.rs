use editor_buffer::{Document, DocumentConfig, EditError, HistoryState};
use pretty_assertions::assert_eq;

#[test]
fn test_undo_insert() {
    let base = "Hello world";
    let mut doc = Document::new(base);

    doc.insert(11, "!");
    assert_eq!(doc.get_text(), "Hello world!");
    doc.undo();
    assert_eq!(doc.get_text(), base);

    doc.insert(5, ", brave new");
    assert_eq!(doc.get_text(), "Hello, brave new world");
    doc.undo();
    assert_eq!(doc.get_text(), base);
}

#[test]
fn test_undo_erase() {
    let base = "abcdefg";
    let mut doc = Document::new(base);

    doc.erase(2, 4);
    assert_eq!(doc.get_text(), "abefg");
    doc.undo();
    assert_eq!(doc.get_text(), base);

    doc.erase(0, 2);
    assert_eq!(doc.get_text(), "cdefg");
    doc.undo();
    assert_eq!(doc.get_text(), base);

    doc.erase(5, 7);
    assert_eq!(doc.get_text(), "abcde");
    doc.undo();
    assert_eq!(doc.get_text(), base);
}

#[test]
fn test_undo_consecutive_inserts() {
    let mut doc = Document::new("X");

    doc.insert(1, "Y");
    assert_eq!(doc.get_text(), "XY");
    doc.insert(2, "Z");
    assert_eq!(doc.get_text(), "XYZ");

    doc.undo();
    assert_eq!(doc.get_text(), "XY");
    doc.undo();
    assert_eq!(doc.get_text(), "X");
}

#[test]
fn test_redo_after_undo_restores_post_edit_text() {
    let mut doc = Document::new("the cat sat");
    doc.erase(4, 8);
    let after = doc.get_text();
    assert_eq!(after, "the sat");

    doc.undo();
    assert_eq!(doc.get_text(), "the cat sat");
    doc.redo();
    assert_eq!(doc.get_text(), after);
}

#[test]
fn test_new_edit_invalidates_redo() {
    let mut doc = Document::new("abc");
    doc.insert(3, "d");
    doc.undo();
    assert!(doc.can_redo());

    doc.insert(0, "z");
    assert!(!doc.can_redo());
    assert!(!doc.redo());
    assert_eq!(doc.get_text(), "zabc");
    assert_eq!(doc.try_redo(), Err(EditError::NothingToRedo));
}

#[test]
fn test_replace_takes_two_undos() {
    let mut doc = Document::new("adefgh");
    doc.replace(1, 3, "BC");
    assert_eq!(doc.get_text(), "aBCfgh");
    assert_eq!(doc.undo_depth(), 2);

    doc.undo();
    assert_eq!(doc.get_text(), "afgh");
    doc.undo();
    assert_eq!(doc.get_text(), "adefgh");

    doc.redo();
    assert_eq!(doc.get_text(), "afgh");
    doc.redo();
    assert_eq!(doc.get_text(), "aBCfgh");
}

#[test]
fn test_undo_all_then_redo_all() {
    let mut doc = Document::new("start");
    doc.insert(5, " middle");
    doc.insert(12, " end");
    doc.erase(0, 6);
    doc.replace(0, 6, "MIDDLE");
    let final_text = doc.get_text();
    assert_eq!(final_text, "MIDDLE end");

    while doc.undo() {}
    assert_eq!(doc.get_text(), "start");
    assert_eq!(doc.undo_redo_state().state, HistoryState::HasRedo);

    while doc.redo() {}
    assert_eq!(doc.get_text(), final_text);
    assert_eq!(doc.undo_redo_state().state, HistoryState::HasUndo);
}

#[test]
fn test_clean_point_tracks_saved_state() {
    let mut doc = Document::new("draft");
    assert!(doc.is_clean());

    doc.insert(5, " one");
    assert!(!doc.is_clean());
    doc.mark_clean();
    assert!(doc.is_clean());

    doc.insert(9, " two");
    assert!(!doc.is_clean());
    doc.undo();
    assert!(doc.is_clean());
    doc.undo();
    assert!(!doc.is_clean());
    doc.redo();
    assert!(doc.is_clean());
}

#[test]
fn test_clear_history_keeps_text() {
    let mut doc = Document::new("abc");
    doc.insert(3, "def");
    doc.undo();
    doc.clear_history();

    assert_eq!(doc.get_text(), "abc");
    assert!(!doc.can_undo());
    assert!(!doc.can_redo());
}

#[test]
fn test_history_disabled() {
    let mut doc = Document::with_config("abc", DocumentConfig::default().with_history_limit(0));
    doc.insert(3, "d");
    assert_eq!(doc.get_text(), "abcd");
    assert!(!doc.undo());
    assert_eq!(doc.get_text(), "abcd");
}
