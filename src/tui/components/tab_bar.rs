//! # Tab Bar Component
//!
//! Single top row: the application name plus the two tab labels. The active
//! tab is highlighted; the editor label carries a `[+]` marker while the
//! document has unsaved changes.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::Tab;
use crate::tui::component::Component;

/// Top bar with the tab labels. Stateless; constructed fresh each frame.
pub struct TabBar {
    pub active: Tab,
    pub modified: bool,
}

impl TabBar {
    fn tab_span(&self, tab: Tab) -> Span<'static> {
        let label = if tab == Tab::Editor && self.modified {
            format!(" {} [+] ", tab.label())
        } else {
            format!(" {} ", tab.label())
        };
        let style = if tab == self.active {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(label, style)
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                " passpad ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            self.tab_span(Tab::Generator),
            Span::raw(" "),
            self.tab_span(Tab::Editor),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
