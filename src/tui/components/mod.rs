//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components built fresh each frame from app state:
//! - `TabBar`: Top row with the tab labels and the unsaved-changes marker
//! - `StatusBar`: Bottom row with the document status and key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components whose persistent state lives in `TuiState` and which emit
//! events the main loop turns into actions:
//! - `EditorState`/`Editor`: Multi-line editing surface with cursor, scroll
//!   and undo history
//! - `GeneratorPanelState`/`GeneratorPanel`: Options form for the password
//!   generator
//! - `PathPromptState`/`PathPrompt`: Modal single-line path input
//!
//! The stateful components split into a `*State` struct that survives
//! between frames and a transient wrapper created per frame with borrowed
//! state plus whatever app data the render needs. This keeps event handling
//! testable without a terminal and rendering free of hidden dependencies.
//!
//! ## Co-location of Concerns
//!
//! Each component file contains everything related to that component: state
//! types, event types, rendering logic, event handling, and tests. You can
//! read one file to understand how a component works.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── tab_bar.rs          (Top tab row)
//! ├── status_bar.rs       (Bottom status row)
//! ├── generator_panel.rs  (Password generator form)
//! ├── path_prompt.rs      (Open / Save As path input overlay)
//! ├── notice.rs           (Blocking warning / error overlay)
//! └── editor/             (Editing surface with cursor, wrap and undo)
//! ```

pub mod editor;
pub mod generator_panel;
pub mod notice;
pub mod path_prompt;
pub mod status_bar;
pub mod tab_bar;

pub use editor::{Editor, EditorEvent, EditorState};
pub use generator_panel::{GeneratorEvent, GeneratorPanel, GeneratorPanelState};
pub use notice::NoticeView;
pub use path_prompt::{PathPrompt, PathPromptState, PromptEvent, PromptPurpose};
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
