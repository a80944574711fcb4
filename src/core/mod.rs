//! # Core Application Logic
//!
//! This module contains passpad's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • generator/strength   │
//!                    │  • document file I/O    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                        ┌────────────┐
//!                        │    TUI     │
//!                        │  Adapter   │
//!                        │ (ratatui)  │
//!                        └────────────┘
//! ```
//!
//! The update reducer itself stays free of I/O; the filesystem work lives in
//! [`document`] as plain `io::Result` operations the adapter invokes when an
//! `Effect` tells it to.
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` — everything that can happen
//! - [`generator`]: Character classes and password sampling
//! - [`strength`]: The length/diversity strength heuristic
//! - [`document`]: Text buffer + backing file, load/save, word/char counts
//! - [`config`]: TOML config file loading and resolution

pub mod action;
pub mod config;
pub mod document;
pub mod generator;
pub mod state;
pub mod strength;
