//! # Actions
//!
//! Everything that can happen in passpad becomes an `Action`.
//! User toggles a character class? That's `Action::ToggleClass`.
//! A save lands on disk? That's `Action::Saved`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` for anything that must happen outside core
//! (file I/O, opening a prompt, quitting). The TUI executes effects and
//! reports their results back as new actions.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes the flows testable without a terminal: feed actions, assert on
//! state and effects. Password generation runs inline here — it reads and
//! writes nothing outside `App`, and its failure mode (no class enabled) is
//! itself a state change, the warning notice.

use log::debug;

use crate::core::generator::{self, CharClass};
use crate::core::state::{App, Notice, Tab};
use crate::core::strength;

/// Warning shown when generation is attempted with zero classes enabled.
const NO_CLASS_WARNING: &str = "Select at least one character type";

/// Every state transition in the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Tabs
    SwitchTab(Tab),
    ToggleTab,

    // Generator tab
    ToggleClass(CharClass),
    AdjustLength(i16),
    Generate,
    ClearPassword,

    // Document lifecycle intents (Ctrl+N / Ctrl+O / Ctrl+S / Ctrl+W)
    NewDocument,
    RequestOpen,
    RequestSave,
    RequestSaveAs,

    // Results reported back by the TUI after it performed the I/O
    Opened,
    Saved,

    /// The editor mutated the buffer (typing, paste, undo, ...).
    BufferEdited,

    DismissNotice,
    Quit,
}

/// Work the TUI must perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Open the path prompt in "open file" mode.
    PromptOpen,
    /// Open the path prompt in "save as" mode.
    PromptSaveAs,
    /// Write the document to its existing path.
    Save,
}

/// The reducer: apply `action` to `app`, return the follow-up effect.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SwitchTab(tab) => {
            app.active_tab = tab;
            Effect::None
        }
        Action::ToggleTab => {
            app.active_tab = app.active_tab.other();
            Effect::None
        }

        Action::ToggleClass(class) => {
            app.generation.toggle(class);
            Effect::None
        }
        Action::AdjustLength(delta) => {
            app.generation.adjust_length(delta);
            Effect::None
        }
        Action::Generate => {
            match generator::generate(&app.generation) {
                Ok(password) => {
                    app.strength = Some(strength::classify(&password));
                    app.password = Some(password);
                }
                // Previous password stays on display; generation did not proceed.
                Err(_) => app.notice = Some(Notice::warning(NO_CLASS_WARNING)),
            }
            Effect::None
        }
        Action::ClearPassword => {
            app.password = None;
            app.strength = None;
            Effect::None
        }

        Action::NewDocument => {
            app.document.clear();
            app.status_note = None;
            app.active_tab = Tab::Editor;
            Effect::None
        }
        Action::RequestOpen => Effect::PromptOpen,
        Action::RequestSave => {
            if app.document.path.is_some() {
                Effect::Save
            } else {
                Effect::PromptSaveAs
            }
        }
        Action::RequestSaveAs => Effect::PromptSaveAs,

        Action::Opened => {
            app.status_note = None;
            app.active_tab = Tab::Editor;
            Effect::None
        }
        Action::Saved => {
            app.status_note = Some(match &app.document.path {
                Some(path) => format!("Saved {}", path.display()),
                None => "Saved".to_string(),
            });
            Effect::None
        }

        Action::BufferEdited => {
            app.status_note = None;
            Effect::None
        }

        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
