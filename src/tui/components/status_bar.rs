//! # Status Bar Component
//!
//! Bottom row: the document status line (word and character counts,
//! optionally prefixed by the file path, or a transient note such as
//! "Saved ...") on the left, key hints for the active tab on the right.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

/// Bottom bar. Stateless; constructed fresh each frame.
pub struct StatusBar {
    pub status: String,
    pub hints: &'static str,
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [status_area, hints_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(self.hints.len() as u16),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(format!(" {}", self.status)), status_area);
        frame.render_widget(
            Paragraph::new(Line::from(self.hints).style(Style::default().fg(Color::DarkGray))),
            hints_area,
        );
    }
}
