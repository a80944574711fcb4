//! The multi-line editing surface shown on the editor tab.
//!
//! The document buffer itself lives in [`Document`]; this component owns the
//! presentation state around it (cursor, scroll, undo history) and mutates
//! the buffer in place as keys arrive, reporting [`EditorEvent::Edited`]
//! upward so the app state can react. Text is soft-wrapped to the drawn
//! width, so the geometry helpers in [`text`] work in visual rows rather than
//! logical lines.

mod cursor;
mod history;
mod text;

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    text::{Line, Text},
    widgets::{Block, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use std::path::Path;

use crate::core::document::Document;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use history::{EditKind, History, Snapshot};

/// Rows moved per mouse wheel notch.
const WHEEL_SCROLL_ROWS: i32 = 3;

/// Emitted when the handler changed the document buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    Edited,
}

/// Editing state that survives between frames.
pub struct EditorState {
    cursor: CursorState,
    history: History,
    tab_width: u8,
}

impl EditorState {
    pub fn new(tab_width: u8) -> Self {
        Self {
            cursor: CursorState::new(),
            history: History::new(),
            tab_width,
        }
    }

    /// Drop cursor, scroll and undo history. Called when the buffer is
    /// replaced wholesale (new document, file opened).
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.history.clear();
    }

    /// Apply an event to the document being edited.
    ///
    /// Returns `Some(EditorEvent::Edited)` when the buffer changed and `None`
    /// for pure cursor movement or events the editor does not handle. Takes
    /// the document as a parameter rather than implementing
    /// [`crate::tui::component::EventHandler`] because edits need mutable
    /// access to state owned elsewhere.
    pub fn handle_event(&mut self, event: &TuiEvent, doc: &mut Document) -> Option<EditorEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                let kind = if c.is_whitespace() {
                    EditKind::Break
                } else {
                    EditKind::InsertChar
                };
                self.insert(doc, &c.to_string(), kind)
            }
            TuiEvent::Enter => self.insert(doc, "\n", EditKind::Break),
            TuiEvent::Tab => {
                let spaces = " ".repeat(self.tab_width as usize);
                self.insert(doc, &spaces, EditKind::Break)
            }
            TuiEvent::Paste(pasted) => self.insert(doc, pasted, EditKind::Break),

            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = text::prev_char_boundary(&doc.text, self.cursor.pos);
                self.history
                    .record(&doc.text, self.cursor.pos, EditKind::DeleteChar);
                doc.text.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                doc.modified = true;
                Some(EditorEvent::Edited)
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= doc.text.len() {
                    return None;
                }
                let next = text::next_char_boundary(&doc.text, self.cursor.pos);
                self.history
                    .record(&doc.text, self.cursor.pos, EditKind::DeleteChar);
                doc.text.drain(self.cursor.pos..next);
                doc.modified = true;
                Some(EditorEvent::Edited)
            }

            TuiEvent::Undo => {
                let snapshot = self.history.undo(&doc.text, self.cursor.pos)?;
                self.apply_snapshot(doc, snapshot)
            }
            TuiEvent::Redo => {
                let snapshot = self.history.redo(&doc.text, self.cursor.pos)?;
                self.apply_snapshot(doc, snapshot)
            }

            TuiEvent::CursorLeft => {
                self.cursor.pos = text::prev_char_boundary(&doc.text, self.cursor.pos);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor.pos = text::next_char_boundary(&doc.text, self.cursor.pos);
                None
            }
            TuiEvent::CursorWordLeft => {
                self.cursor.pos = text::prev_word_boundary(&doc.text, self.cursor.pos);
                None
            }
            TuiEvent::CursorWordRight => {
                self.cursor.pos = text::next_word_boundary(&doc.text, self.cursor.pos);
                None
            }
            TuiEvent::CursorUp => {
                self.cursor.move_rows(&doc.text, -1);
                None
            }
            TuiEvent::CursorDown => {
                self.cursor.move_rows(&doc.text, 1);
                None
            }
            TuiEvent::Home => {
                let line_start = doc.text[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                self.cursor.pos = line_start;
                None
            }
            TuiEvent::End => {
                let rest = &doc.text[self.cursor.pos..];
                self.cursor.pos += rest.find('\n').unwrap_or(rest.len());
                None
            }
            TuiEvent::PageUp => {
                self.cursor
                    .move_rows(&doc.text, -(self.cursor.last_viewport_rows as i32));
                None
            }
            TuiEvent::PageDown => {
                self.cursor
                    .move_rows(&doc.text, self.cursor.last_viewport_rows as i32);
                None
            }
            TuiEvent::ScrollUp => {
                self.cursor.move_rows(&doc.text, -WHEEL_SCROLL_ROWS);
                None
            }
            TuiEvent::ScrollDown => {
                self.cursor.move_rows(&doc.text, WHEEL_SCROLL_ROWS);
                None
            }

            _ => None,
        }
    }

    fn insert(&mut self, doc: &mut Document, s: &str, kind: EditKind) -> Option<EditorEvent> {
        self.history.record(&doc.text, self.cursor.pos, kind);
        doc.text.insert_str(self.cursor.pos, s);
        self.cursor.pos += s.len();
        doc.modified = true;
        Some(EditorEvent::Edited)
    }

    fn apply_snapshot(&mut self, doc: &mut Document, snapshot: Snapshot) -> Option<EditorEvent> {
        doc.text = snapshot.text;
        doc.modified = true;
        self.cursor.pos = snapshot.cursor;
        Some(EditorEvent::Edited)
    }
}

/// Draws the editing surface for one frame, borrowing the live editing state
/// and the document.
pub struct Editor<'a> {
    state: &'a mut EditorState,
    document: &'a Document,
    /// Whether the terminal cursor should be placed in the text. False when
    /// an overlay owns the cursor or swallows input.
    focused: bool,
}

impl<'a> Editor<'a> {
    pub fn new(state: &'a mut EditorState, document: &'a Document, focused: bool) -> Self {
        Self {
            state,
            document,
            focused,
        }
    }
}

impl Component for Editor<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.cursor.set_viewport(area);
        self.state.cursor.follow_cursor(&self.document.text);

        let title = match self.document.path.as_deref().and_then(Path::file_name) {
            Some(name) => format!(" {} ", name.to_string_lossy()),
            None => String::from(" untitled "),
        };

        let buffer = &self.document.text;
        let rows = text::layout_rows(buffer, self.state.cursor.last_inner_width);
        let viewport = self.state.cursor.last_viewport_rows as usize;
        let first = self.state.cursor.scroll_offset as usize;
        let last = (first + viewport).min(rows.len());
        let lines: Vec<Line> = rows[first..last]
            .iter()
            .map(|span| Line::raw(&buffer[span.start..span.end]))
            .collect();

        let paragraph = Paragraph::new(Text::from(lines)).block(
            Block::bordered()
                .title(title)
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(paragraph, area);

        if rows.len() > viewport {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None);
            let mut scrollbar_state = ScrollbarState::new(rows.len() - viewport)
                .position(self.state.cursor.scroll_offset as usize);
            frame.render_stateful_widget(
                scrollbar,
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        if self.focused {
            if let Some(pos) = self.state.cursor.screen_pos(buffer, area) {
                frame.set_cursor_position(pos);
            }
        }
    }
}
