//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! filesystem work the actions ask for (open, save) also happens here, in
//! the event loop, so the core reducer stays pure.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws when an event arrived. Between
//! events it sleeps in short polls. All pending events are drained before
//! the next draw so held-down keys do not queue a frame per repeat.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::path::PathBuf;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Notice, Tab};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    EditorEvent, EditorState, GeneratorEvent, GeneratorPanelState, PathPromptState, PromptEvent,
    PromptPurpose,
};
use crate::tui::event::{TuiEvent, poll_event, poll_event_immediate};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub generator: GeneratorPanelState,
    pub editor: EditorState,
    // Path prompt overlay (None = hidden)
    pub prompt: Option<PathPromptState>,
}

impl TuiState {
    pub fn new(tab_width: u8) -> Self {
        Self {
            generator: GeneratorPanelState::new(),
            editor: EditorState::new(tab_width),
            prompt: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Enable the Kitty keyboard protocol unconditionally (disambiguates
        // Ctrl+letter combinations). Detection via
        // supports_keyboard_enhancement() fails in WSL, but the protocol is
        // harmlessly ignored by terminals that don't support it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for text editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig, initial_file: Option<PathBuf>) -> std::io::Result<()> {
    let mut app = App::new(&config);
    let mut tui = TuiState::new(config.tab_width);

    // Open a file passed on the command line before the first frame; a
    // failure becomes the standard error overlay once the UI is up
    if let Some(path) = initial_file {
        if let Err(e) = app.document.open(path.clone()) {
            warn!("Could not open {} at startup: {}", path.display(), e);
            app.notice = Some(Notice::error(format!("Could not open file: {e}")));
        }
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event();

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of what is open
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // A blocking notice swallows the next key press to dismiss itself
            if app.notice.is_some() {
                if !matches!(event, TuiEvent::ScrollUp | TuiEvent::ScrollDown) {
                    update(&mut app, Action::DismissNotice);
                }
                continue;
            }

            // When the path prompt is open, route all events to it
            if let Some(ref mut prompt) = tui.prompt {
                if let Some(prompt_event) = prompt.handle_event(&event) {
                    match prompt_event {
                        PromptEvent::Submit(path) => {
                            let purpose = prompt.purpose;
                            tui.prompt = None;
                            finish_prompt(purpose, path, &mut app, &mut tui);
                        }
                        PromptEvent::Cancel => {
                            tui.prompt = None;
                        }
                    }
                }
                continue;
            }

            // Global keys, valid on both tabs
            match event {
                TuiEvent::Quit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                    continue;
                }
                TuiEvent::SwitchTab => {
                    update(&mut app, Action::ToggleTab);
                    continue;
                }
                TuiEvent::NewFile => {
                    update(&mut app, Action::NewDocument);
                    tui.editor.reset();
                    continue;
                }
                TuiEvent::OpenFile => {
                    let effect = update(&mut app, Action::RequestOpen);
                    run_effect(effect, &mut app, &mut tui);
                    continue;
                }
                TuiEvent::Save => {
                    let effect = update(&mut app, Action::RequestSave);
                    run_effect(effect, &mut app, &mut tui);
                    continue;
                }
                TuiEvent::SaveAs => {
                    let effect = update(&mut app, Action::RequestSaveAs);
                    run_effect(effect, &mut app, &mut tui);
                    continue;
                }
                _ => {}
            }

            // Everything else goes to the active tab
            match app.active_tab {
                Tab::Generator => {
                    if let Some(generator_event) = tui.generator.handle_event(&event) {
                        let action = match generator_event {
                            GeneratorEvent::AdjustLength(delta) => Action::AdjustLength(delta),
                            GeneratorEvent::Toggle(class) => Action::ToggleClass(class),
                            GeneratorEvent::Generate => Action::Generate,
                            GeneratorEvent::Clear => Action::ClearPassword,
                        };
                        update(&mut app, action);
                    }
                }
                Tab::Editor => {
                    if let Some(EditorEvent::Edited) =
                        tui.editor.handle_event(&event, &mut app.document)
                    {
                        update(&mut app, Action::BufferEdited);
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Execute a side effect the reducer asked for.
fn run_effect(effect: Effect, app: &mut App, tui: &mut TuiState) {
    match effect {
        Effect::None | Effect::Quit => {}
        Effect::PromptOpen => {
            tui.prompt = Some(PathPromptState::new(PromptPurpose::Open, None));
        }
        Effect::PromptSaveAs => {
            tui.prompt = Some(PathPromptState::new(
                PromptPurpose::SaveAs,
                app.document.path.as_deref(),
            ));
        }
        Effect::Save => save_document(app),
    }
}

/// Run the I/O a submitted path prompt asked for.
fn finish_prompt(purpose: PromptPurpose, path: PathBuf, app: &mut App, tui: &mut TuiState) {
    match purpose {
        PromptPurpose::Open => match app.document.open(path) {
            Ok(()) => {
                update(app, Action::Opened);
                tui.editor.reset();
            }
            Err(e) => {
                warn!("open failed: {}", e);
                app.notice = Some(Notice::error(format!("Could not open file: {e}")));
            }
        },
        PromptPurpose::SaveAs => match app.document.save_as(path) {
            Ok(()) => {
                update(app, Action::Saved);
            }
            Err(e) => {
                warn!("save as failed: {}", e);
                app.notice = Some(Notice::error(format!("Could not save file: {e}")));
            }
        },
    }
}

fn save_document(app: &mut App) {
    match app.document.save() {
        Ok(()) => {
            update(app, Action::Saved);
        }
        Err(e) => {
            warn!("save failed: {}", e);
            app.notice = Some(Notice::error(format!("Could not save file: {e}")));
        }
    }
}
