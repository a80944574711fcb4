//! # Path Prompt Component
//!
//! Centered single-line overlay asking for a file path, used by both Open
//! (Ctrl+O) and Save As (Ctrl+W). Enter submits the trimmed path, Esc
//! cancels. While the prompt is up it owns all input.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PathPromptState` lives in `TuiState` while the prompt is open
//! - `PathPrompt` is created each frame with borrowed state

use std::path::{Path, PathBuf};

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// What the prompt is collecting a path for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    Open,
    SaveAs,
}

impl PromptPurpose {
    fn title(&self) -> &'static str {
        match self {
            PromptPurpose::Open => " Open file ",
            PromptPurpose::SaveAs => " Save as ",
        }
    }
}

/// Events emitted by the path prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Submit(PathBuf),
    Cancel,
}

/// Persistent state for the path prompt overlay.
pub struct PathPromptState {
    pub purpose: PromptPurpose,
    input: String,
    /// Byte offset into `input`. Always on a char boundary.
    cursor: usize,
}

impl PathPromptState {
    /// A prompt, optionally prefilled (Save As starts from the current path).
    pub fn new(purpose: PromptPurpose, initial: Option<&Path>) -> Self {
        let input = initial.map(|p| p.display().to_string()).unwrap_or_default();
        let cursor = input.len();
        Self {
            purpose,
            input,
            cursor,
        }
    }

    fn prev_boundary(&self) -> usize {
        self.input[..self.cursor]
            .chars()
            .next_back()
            .map(|c| self.cursor - c.len_utf8())
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.input[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.input.len())
    }
}

impl EventHandler for PathPromptState {
    type Event = PromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PromptEvent> {
        match event {
            TuiEvent::Escape => Some(PromptEvent::Cancel),
            TuiEvent::Enter => {
                let trimmed = self.input.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(PromptEvent::Submit(PathBuf::from(trimmed)))
                }
            }
            TuiEvent::InputChar(c) => {
                self.input.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                None
            }
            TuiEvent::Paste(pasted) => {
                // Paths never span lines; drop what bracketed paste kept
                let cleaned: String = pasted
                    .chars()
                    .filter(|c| *c != '\n' && *c != '\r')
                    .collect();
                self.input.insert_str(self.cursor, &cleaned);
                self.cursor += cleaned.len();
                None
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.input.remove(prev);
                    self.cursor = prev;
                }
                None
            }
            TuiEvent::Delete => {
                if self.cursor < self.input.len() {
                    self.input.remove(self.cursor);
                }
                None
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.input.len();
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the path prompt.
pub struct PathPrompt<'a> {
    state: &'a PathPromptState,
}

impl<'a> PathPrompt<'a> {
    pub fn new(state: &'a PathPromptState) -> Self {
        Self { state }
    }
}

impl Component for PathPrompt<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // A single input row, centered, 60% wide
        let [overlay] = Layout::horizontal([Constraint::Percentage(60)])
            .flex(Flex::Center)
            .areas(area);
        let [overlay] = Layout::vertical([Constraint::Length(3)])
            .flex(Flex::Center)
            .areas(overlay);

        frame.render_widget(Clear, overlay);

        // Border (2) + padding (2)
        let inner_width = overlay.width.saturating_sub(4) as usize;
        let (visible, cursor_col) = visible_window(&self.state.input, self.state.cursor, inner_width);

        let input = Paragraph::new(visible).block(
            Block::bordered()
                .border_style(Style::default().fg(Color::DarkGray))
                .title(self.state.purpose.title())
                .title_bottom(Line::from(" Enter Confirm  Esc Cancel ").centered())
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(input, overlay);

        frame.set_cursor_position(Position::new(
            overlay.x + 2 + cursor_col as u16,
            overlay.y + 1,
        ));
    }
}

/// Slice the input to a window that keeps the cursor visible, returning the
/// visible text and the cursor's column within it.
fn visible_window(input: &str, cursor: usize, width: usize) -> (String, usize) {
    let width = width.max(1);
    let cursor_chars = input[..cursor].chars().count();
    if cursor_chars < width {
        (input.chars().take(width).collect(), cursor_chars)
    } else {
        let skip = cursor_chars + 1 - width;
        (input.chars().skip(skip).take(width).collect(), width - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn type_str(state: &mut PathPromptState, s: &str) {
        for c in s.chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
    }

    // -- event handling ------------------------------------------------------

    #[test]
    fn typing_then_enter_submits_the_path() {
        let mut state = PathPromptState::new(PromptPurpose::Open, None);
        type_str(&mut state, "/tmp/notes.txt");
        assert_eq!(
            state.handle_event(&TuiEvent::Enter),
            Some(PromptEvent::Submit(PathBuf::from("/tmp/notes.txt")))
        );
    }

    #[test]
    fn enter_trims_surrounding_whitespace() {
        let mut state = PathPromptState::new(PromptPurpose::Open, None);
        type_str(&mut state, "  a.txt ");
        assert_eq!(
            state.handle_event(&TuiEvent::Enter),
            Some(PromptEvent::Submit(PathBuf::from("a.txt")))
        );
    }

    #[test]
    fn enter_on_empty_input_does_nothing() {
        let mut state = PathPromptState::new(PromptPurpose::Open, None);
        assert_eq!(state.handle_event(&TuiEvent::Enter), None);
        type_str(&mut state, "   ");
        assert_eq!(state.handle_event(&TuiEvent::Enter), None);
    }

    #[test]
    fn escape_cancels() {
        let mut state = PathPromptState::new(PromptPurpose::SaveAs, None);
        assert_eq!(
            state.handle_event(&TuiEvent::Escape),
            Some(PromptEvent::Cancel)
        );
    }

    #[test]
    fn save_as_prefills_current_path_with_cursor_at_end() {
        let path = PathBuf::from("/tmp/old.txt");
        let mut state = PathPromptState::new(PromptPurpose::SaveAs, Some(&path));
        type_str(&mut state, "2");
        assert_eq!(
            state.handle_event(&TuiEvent::Enter),
            Some(PromptEvent::Submit(PathBuf::from("/tmp/old.txt2")))
        );
    }

    #[test]
    fn backspace_and_arrows_edit_mid_input() {
        let mut state = PathPromptState::new(PromptPurpose::Open, None);
        type_str(&mut state, "ab.txt");
        state.handle_event(&TuiEvent::Home);
        state.handle_event(&TuiEvent::CursorRight);
        state.handle_event(&TuiEvent::Backspace);
        state.handle_event(&TuiEvent::End);
        assert_eq!(
            state.handle_event(&TuiEvent::Enter),
            Some(PromptEvent::Submit(PathBuf::from("b.txt")))
        );
    }

    #[test]
    fn delete_removes_forward() {
        let mut state = PathPromptState::new(PromptPurpose::Open, None);
        type_str(&mut state, "xab");
        state.handle_event(&TuiEvent::Home);
        state.handle_event(&TuiEvent::Delete);
        assert_eq!(
            state.handle_event(&TuiEvent::Enter),
            Some(PromptEvent::Submit(PathBuf::from("ab")))
        );
    }

    #[test]
    fn paste_strips_line_breaks() {
        let mut state = PathPromptState::new(PromptPurpose::Open, None);
        state.handle_event(&TuiEvent::Paste("/tmp/a.txt\n".to_string()));
        assert_eq!(
            state.handle_event(&TuiEvent::Enter),
            Some(PromptEvent::Submit(PathBuf::from("/tmp/a.txt")))
        );
    }

    // -- windowing -----------------------------------------------------------

    #[test]
    fn window_shows_short_input_fully() {
        let (visible, col) = visible_window("abc", 1, 10);
        assert_eq!(visible, "abc");
        assert_eq!(col, 1);
    }

    #[test]
    fn window_follows_cursor_past_the_edge() {
        let input = "0123456789";
        let (visible, col) = visible_window(input, input.len(), 5);
        assert_eq!(visible, "6789");
        assert_eq!(col, 4);
    }

    // -- rendering -----------------------------------------------------------

    #[test]
    fn renders_title_and_input() {
        let mut state = PathPromptState::new(PromptPurpose::Open, None);
        type_str(&mut state, "note.md");
        let backend = TestBackend::new(50, 9);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| PathPrompt::new(&state).render(f, f.area()))
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Open file"));
        assert!(content.contains("note.md"));
        assert!(content.contains("Esc Cancel"));
    }
}
