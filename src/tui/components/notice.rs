//! # Notice Component
//!
//! Blocking centered overlay for warnings and errors, drawn over everything
//! else. The event loop swallows the next key press to dismiss it, so the
//! overlay itself has no event handling.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Padding, Paragraph, Wrap};

use crate::core::state::{Notice, NoticeKind};
use crate::tui::component::Component;

/// Transient render wrapper for a notice.
pub struct NoticeView<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeView<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Component for NoticeView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = match self.notice.kind {
            NoticeKind::Warning => Color::Yellow,
            NoticeKind::Error => Color::Red,
        };

        let [centered] = Layout::horizontal([Constraint::Percentage(60)])
            .flex(Flex::Center)
            .areas(area);

        let text = Paragraph::new(self.notice.text.as_str())
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Center);

        // Size the overlay to the wrapped text: border (2) + padding (2)
        // horizontally, border (2) vertically
        let inner_width = centered.width.saturating_sub(4);
        let height = (text.line_count(inner_width) as u16 + 2).min(area.height);
        let [overlay] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(centered);

        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", self.notice.kind.title()))
            .title_bottom(Line::from(" Press any key ").centered())
            .padding(Padding::horizontal(1));
        frame.render_widget(text.block(block), overlay);
    }
}
