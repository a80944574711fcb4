//! Snapshot-based undo/redo for the editor buffer.
//!
//! Every mutating edit records the buffer and cursor as they were *before*
//! the edit. Runs of ordinary typing (and runs of single-character deletes)
//! coalesce into one entry so undo steps back a word at a time rather than a
//! keystroke at a time. Any new edit clears the redo stack.

use log::debug;

/// Upper bound on retained undo states.
const MAX_UNDO_DEPTH: usize = 100;

/// Buffer and cursor captured together, so restoring one restores both.
#[derive(Debug, Clone)]
pub(super) struct Snapshot {
    pub text: String,
    pub cursor: usize,
}

/// How an edit should group with the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum EditKind {
    /// A printable character typed in place; consecutive ones coalesce.
    InsertChar,
    /// Backspace or Delete of a single character; consecutive ones coalesce.
    DeleteChar,
    /// Anything else (newline, paste, tab, ...) starts a fresh entry.
    Break,
}

#[derive(Debug, Default)]
pub(super) struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
    last_kind: Option<EditKind>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded states, e.g. after the buffer is replaced.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
        self.last_kind = None;
    }

    /// Record the pre-edit state of an edit about to happen.
    pub fn record(&mut self, text: &str, cursor: usize, kind: EditKind) {
        let coalesce = kind != EditKind::Break && self.last_kind == Some(kind);
        if !coalesce {
            self.undo.push(Snapshot {
                text: text.to_string(),
                cursor,
            });
            if self.undo.len() > MAX_UNDO_DEPTH {
                self.undo.remove(0);
                debug!("undo stack full, dropping oldest entry");
            }
        }
        self.last_kind = Some(kind);
        self.redo.clear();
    }

    /// Step back one entry, exchanging it for the current state.
    pub fn undo(&mut self, current_text: &str, current_cursor: usize) -> Option<Snapshot> {
        let snapshot = self.undo.pop()?;
        self.redo.push(Snapshot {
            text: current_text.to_string(),
            cursor: current_cursor,
        });
        self.last_kind = None;
        Some(snapshot)
    }

    /// Step forward one entry undone earlier, exchanging it for the current
    /// state.
    pub fn redo(&mut self, current_text: &str, current_cursor: usize) -> Option<Snapshot> {
        let snapshot = self.redo.pop()?;
        self.undo.push(Snapshot {
            text: current_text.to_string(),
            cursor: current_cursor,
        });
        self.last_kind = None;
        Some(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_restores_recorded_state() {
        let mut h = History::new();
        h.record("", 0, EditKind::Break);
        let snap = h.undo("hello", 5).unwrap();
        assert_eq!(snap.text, "");
        assert_eq!(snap.cursor, 0);
    }

    #[test]
    fn undo_on_empty_history_is_none() {
        let mut h = History::new();
        assert!(h.undo("x", 1).is_none());
    }

    #[test]
    fn redo_returns_what_undo_took() {
        let mut h = History::new();
        h.record("", 0, EditKind::Break);
        h.undo("hello", 5);
        let snap = h.redo("", 0).unwrap();
        assert_eq!(snap.text, "hello");
        assert_eq!(snap.cursor, 5);
        // And undoing again goes back to the restored state
        let back = h.undo("hello", 5).unwrap();
        assert_eq!(back.text, "");
    }

    #[test]
    fn typing_run_coalesces_into_one_entry() {
        let mut h = History::new();
        // Simulate typing "abc": record before each insertion
        h.record("", 0, EditKind::InsertChar);
        h.record("a", 1, EditKind::InsertChar);
        h.record("ab", 2, EditKind::InsertChar);
        // One undo steps all the way back
        let snap = h.undo("abc", 3).unwrap();
        assert_eq!(snap.text, "");
        assert!(h.undo("", 0).is_none());
    }

    #[test]
    fn break_kind_starts_a_new_entry() {
        let mut h = History::new();
        h.record("", 0, EditKind::InsertChar);
        h.record("ab", 2, EditKind::Break); // e.g. Enter pressed
        h.record("ab\n", 3, EditKind::InsertChar);
        let first = h.undo("ab\nc", 4).unwrap();
        assert_eq!(first.text, "ab\n");
        let second = h.undo("ab\n", 3).unwrap();
        assert_eq!(second.text, "ab");
        let third = h.undo("ab", 2).unwrap();
        assert_eq!(third.text, "");
    }

    #[test]
    fn delete_runs_coalesce_separately_from_inserts() {
        let mut h = History::new();
        h.record("abc", 3, EditKind::DeleteChar);
        h.record("ab", 2, EditKind::DeleteChar);
        h.record("a", 1, EditKind::InsertChar);
        // Two entries: the delete run and the insert
        assert_eq!(h.undo("ax", 2).unwrap().text, "a");
        assert_eq!(h.undo("a", 1).unwrap().text, "abc");
        assert!(h.undo("abc", 3).is_none());
    }

    #[test]
    fn new_edit_clears_redo() {
        let mut h = History::new();
        h.record("", 0, EditKind::Break);
        h.undo("old", 3);
        h.record("", 0, EditKind::Break);
        assert!(h.redo("new", 3).is_none());
    }

    #[test]
    fn undo_after_undo_does_not_coalesce_with_prior_run() {
        let mut h = History::new();
        h.record("", 0, EditKind::InsertChar);
        h.undo("a", 1);
        // Typing again after an undo must record a fresh entry
        h.record("", 0, EditKind::InsertChar);
        assert_eq!(h.undo("b", 1).unwrap().text, "");
    }

    #[test]
    fn depth_is_bounded() {
        let mut h = History::new();
        for i in 0..150 {
            h.record(&i.to_string(), 0, EditKind::Break);
        }
        let mut depth = 0;
        let mut text = String::from("final");
        while let Some(snap) = h.undo(&text, 0) {
            text = snap.text;
            depth += 1;
        }
        assert_eq!(depth, MAX_UNDO_DEPTH);
        // The oldest surviving entry is 50, not 0
        assert_eq!(text, "50");
    }
}
