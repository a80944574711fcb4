//! Frame composition: the tab bar on top, the active tab's body, the status
//! bar at the bottom, and any overlay (path prompt, blocking notice) drawn
//! last so it sits above everything else.

use crate::core::state::{App, Tab};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Editor, GeneratorPanel, NoticeView, PathPrompt, StatusBar, TabBar};

use ratatui::Frame;
use ratatui::layout::Layout;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use ratatui::layout::Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [tab_area, body_area, status_area] = layout.areas(frame.area());

    TabBar {
        active: app.active_tab,
        modified: app.document.modified,
    }
    .render(frame, tab_area);

    // Overlays swallow input, so the body underneath loses the cursor
    let focused = tui.prompt.is_none() && app.notice.is_none();

    match app.active_tab {
        Tab::Generator => GeneratorPanel::new(
            &tui.generator,
            &app.generation,
            app.password.as_deref(),
            app.strength,
        )
        .render(frame, body_area),
        Tab::Editor => Editor::new(&mut tui.editor, &app.document, focused).render(frame, body_area),
    }

    StatusBar {
        status: app.status_line(),
        hints: hints_for(app.active_tab),
    }
    .render(frame, status_area);

    if let Some(prompt) = &tui.prompt {
        PathPrompt::new(prompt).render(frame, frame.area());
    }
    if let Some(notice) = &app.notice {
        NoticeView::new(notice).render(frame, frame.area());
    }
}

/// Key hints shown on the right of the status bar.
fn hints_for(tab: Tab) -> &'static str {
    match tab {
        Tab::Generator => "Ctrl+T Tabs  Ctrl+Q Quit ",
        Tab::Editor => "Ctrl+S Save  Ctrl+O Open  Ctrl+T Tabs  Ctrl+Q Quit ",
    }
}
