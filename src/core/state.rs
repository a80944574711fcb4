//! # Application State
//!
//! Core business state for passpad. This module contains domain state only -
//! no TUI-specific types. Presentation state (cursor, scroll, overlays) lives
//! in the `tui` module.
//!
//! ```text
//! App
//! ├── active_tab: Tab                 // which tab has focus
//! ├── generation: GenerationConfig    // length + class flags
//! ├── password: Option<String>        // last generated password
//! ├── strength: Option<Strength>      // classification of that password
//! ├── document: Document              // editor buffer + backing path
//! ├── status_note: Option<String>     // transient status override
//! └── notice: Option<Notice>          // blocking warning/error overlay
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! so no surprise mutations — with one narrow exception: the editor component
//! writes `document.text` directly while handling keystrokes, the way a text
//! widget owns its buffer, and reports the change back as an action.

use serde::{Deserialize, Serialize};

use crate::core::config::ResolvedConfig;
use crate::core::document::Document;
use crate::core::generator::GenerationConfig;
use crate::core::strength::Strength;

/// The two tabs sharing the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Generator,
    Editor,
}

impl Tab {
    /// Tab header text.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Generator => "Generator",
            Tab::Editor => "Editor",
        }
    }

    /// The other tab.
    pub fn other(&self) -> Tab {
        match self {
            Tab::Generator => Tab::Editor,
            Tab::Editor => Tab::Generator,
        }
    }
}

/// Severity of a blocking notice overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Error,
}

impl NoticeKind {
    /// Overlay title text.
    pub fn title(&self) -> &'static str {
        match self {
            NoticeKind::Warning => "Warning",
            NoticeKind::Error => "Error",
        }
    }
}

/// A blocking message the user must dismiss before continuing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

pub struct App {
    pub active_tab: Tab,
    pub generation: GenerationConfig,
    pub password: Option<String>,
    pub strength: Option<Strength>,
    pub document: Document,
    /// Transient status bar override (e.g. "Saved ..."), cleared on the next
    /// edit or document operation.
    pub status_note: Option<String>,
    /// Blocking overlay; while set, all other input is swallowed.
    pub notice: Option<Notice>,
}

impl App {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            active_tab: config.start_tab,
            generation: config.generation,
            password: None,
            strength: None,
            document: Document::new(),
            status_note: None,
            notice: None,
        }
    }

    /// Text for the status bar: the transient note if one is pending,
    /// otherwise the document's word/character line.
    pub fn status_line(&self) -> String {
        match &self.status_note {
            Some(note) => note.clone(),
            None => self.document.status_line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new(&ResolvedConfig::default());
        assert_eq!(app.active_tab, Tab::Generator);
        assert_eq!(app.generation.length, 12);
        assert!(app.password.is_none());
        assert!(app.strength.is_none());
        assert!(app.document.text.is_empty());
        assert!(app.notice.is_none());
    }

    #[test]
    fn status_note_overrides_document_status() {
        let mut app = App::new(&ResolvedConfig::default());
        assert_eq!(app.status_line(), "Words: 0 | Characters: 0");
        app.status_note = Some("Saved /tmp/x.txt".to_string());
        assert_eq!(app.status_line(), "Saved /tmp/x.txt");
        app.status_note = None;
        assert_eq!(app.status_line(), "Words: 0 | Characters: 0");
    }

    #[test]
    fn tab_other_flips() {
        assert_eq!(Tab::Generator.other(), Tab::Editor);
        assert_eq!(Tab::Editor.other(), Tab::Generator);
    }
}
