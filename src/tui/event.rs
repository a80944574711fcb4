use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    // Global intents (passed to core::update)
    SwitchTab, // Ctrl+T
    NewFile,   // Ctrl+N
    OpenFile,  // Ctrl+O
    Save,      // Ctrl+S
    SaveAs,    // Ctrl+W
    Quit,      // Ctrl+Q
    ForceQuit, // Ctrl+C

    // Editing and navigation (routed to the focused component)
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Enter,
    Tab,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorWordLeft,
    CursorWordRight,
    Home,
    End,
    PageUp,
    PageDown,
    ScrollUp,
    ScrollDown,
    Undo, // Ctrl+Z
    Redo, // Ctrl+Y
    Escape,
    Resize,
}

/// Poll for an event with timeout (blocks up to 100ms)
pub fn poll_event() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::from_millis(100))
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                // Key releases arrive when the keyboard enhancement protocol
                // is active; acting on them would double every keystroke.
                if key_event.kind == KeyEventKind::Release {
                    return None;
                }
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::SwitchTab),
                    (KeyModifiers::CONTROL, KeyCode::Char('n')) => Some(TuiEvent::NewFile),
                    (KeyModifiers::CONTROL, KeyCode::Char('o')) => Some(TuiEvent::OpenFile),
                    (KeyModifiers::CONTROL, KeyCode::Char('s')) => Some(TuiEvent::Save),
                    (KeyModifiers::CONTROL, KeyCode::Char('w')) => Some(TuiEvent::SaveAs),
                    (KeyModifiers::CONTROL, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (KeyModifiers::CONTROL, KeyCode::Char('z')) => Some(TuiEvent::Undo),
                    (KeyModifiers::CONTROL, KeyCode::Char('y')) => Some(TuiEvent::Redo),
                    (KeyModifiers::CONTROL, KeyCode::Left) => Some(TuiEvent::CursorWordLeft),
                    (KeyModifiers::CONTROL, KeyCode::Right) => Some(TuiEvent::CursorWordRight),
                    // Regular key handling
                    (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                    (_, KeyCode::Enter) => Some(TuiEvent::Enter),
                    (_, KeyCode::Tab) => Some(TuiEvent::Tab),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                    (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                    (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                    (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::Home) => Some(TuiEvent::Home),
                    (_, KeyCode::End) => Some(TuiEvent::End),
                    (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
                    (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            },
            Event::Paste(data) => Some(TuiEvent::Paste(data)),
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}
