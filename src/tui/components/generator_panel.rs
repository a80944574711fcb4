//! # Generator Panel Component
//!
//! The password generator tab: an options form (length plus one toggle per
//! character class), the most recent password, and a strength gauge.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `GeneratorPanelState` lives in `TuiState` and tracks the selected row
//! - `GeneratorPanel` is created each frame with borrowed state and the
//!   current generation config, password and strength from app state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Gauge, Padding, Paragraph};

use crate::core::generator::{CharClass, GenerationConfig};
use crate::core::strength::Strength;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Form rows from top to bottom: length plus one row per character class.
const ROW_COUNT: usize = 1 + CharClass::ALL.len();

/// Row index of the length stepper.
const LENGTH_ROW: usize = 0;

/// Persistent state for the generator tab.
pub struct GeneratorPanelState {
    pub selected: usize,
}

impl GeneratorPanelState {
    pub fn new() -> Self {
        Self {
            selected: LENGTH_ROW,
        }
    }

    /// The character class behind the selected row, if it is a class row.
    fn selected_class(&self) -> Option<CharClass> {
        CharClass::ALL.get(self.selected.checked_sub(1)?).copied()
    }

    /// Left/Right act on whatever the selected row controls.
    fn adjust_selected(&self, delta: i16) -> Option<GeneratorEvent> {
        if self.selected == LENGTH_ROW {
            Some(GeneratorEvent::AdjustLength(delta))
        } else {
            self.selected_class().map(GeneratorEvent::Toggle)
        }
    }
}

impl Default for GeneratorPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for GeneratorPanelState {
    type Event = GeneratorEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GeneratorEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(ROW_COUNT - 1);
                None
            }
            TuiEvent::CursorLeft => self.adjust_selected(-1),
            TuiEvent::CursorRight => self.adjust_selected(1),
            // Length can be stepped from any row
            TuiEvent::InputChar('+') | TuiEvent::InputChar('=') => {
                Some(GeneratorEvent::AdjustLength(1))
            }
            TuiEvent::InputChar('-') => Some(GeneratorEvent::AdjustLength(-1)),
            TuiEvent::InputChar(' ') => self.selected_class().map(GeneratorEvent::Toggle),
            TuiEvent::Enter | TuiEvent::InputChar('g') => Some(GeneratorEvent::Generate),
            TuiEvent::InputChar('c') => Some(GeneratorEvent::Clear),
            _ => None,
        }
    }
}

/// Events emitted by the generator panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorEvent {
    AdjustLength(i16),
    Toggle(CharClass),
    Generate,
    Clear,
}

/// Transient render wrapper for the generator tab.
pub struct GeneratorPanel<'a> {
    state: &'a GeneratorPanelState,
    config: &'a GenerationConfig,
    password: Option<&'a str>,
    strength: Option<Strength>,
}

impl<'a> GeneratorPanel<'a> {
    pub fn new(
        state: &'a GeneratorPanelState,
        config: &'a GenerationConfig,
        password: Option<&'a str>,
        strength: Option<Strength>,
    ) -> Self {
        Self {
            state,
            config,
            password,
            strength,
        }
    }

    fn form_row(&self, index: usize, label: String) -> Line<'static> {
        let style = if index == self.state.selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        Line::from(Span::styled(label, style))
    }
}

impl Component for GeneratorPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [options_area, password_area, strength_area, _] = Layout::vertical([
            Constraint::Length(ROW_COUNT as u16 + 2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        // Options form
        let mut rows: Vec<Line> = Vec::with_capacity(ROW_COUNT);
        rows.push(self.form_row(
            LENGTH_ROW,
            format!("Length       < {:>2} >", self.config.length),
        ));
        for (i, class) in CharClass::ALL.into_iter().enumerate() {
            let marker = if self.config.enabled(class) {
                "[x]"
            } else {
                "[ ]"
            };
            rows.push(self.form_row(i + 1, format!("{marker} {}", class_label(class))));
        }

        let options = Paragraph::new(Text::from(rows)).block(
            Block::bordered()
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Options ")
                .title_bottom(Line::from(" Space Toggle  Enter Generate  c Clear ").centered())
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(options, options_area);

        // Most recent password, centered for easy reading
        let password_line = match self.password {
            Some(password) => Line::from(password.to_string()),
            None => Line::from(Span::styled(
                "Press Enter to generate",
                Style::default().fg(Color::DarkGray),
            )),
        };
        let password_box = Paragraph::new(password_line.centered()).block(
            Block::bordered()
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Password "),
        );
        frame.render_widget(password_box, password_area);

        // Strength gauge: one third per step, grey N/A when nothing generated
        let (ratio, color) = match self.strength {
            Some(Strength::Weak) => (1.0 / 3.0, Color::Red),
            Some(Strength::Medium) => (2.0 / 3.0, Color::Yellow),
            Some(Strength::Strong) => (1.0, Color::Green),
            None => (0.0, Color::DarkGray),
        };
        let label = self.strength.map(|s| s.label()).unwrap_or("N/A");
        let gauge = Gauge::default()
            .block(
                Block::bordered()
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Strength "),
            )
            .gauge_style(Style::default().fg(color))
            .ratio(ratio)
            .label(label);
        frame.render_widget(gauge, strength_area);
    }
}

fn class_label(class: CharClass) -> &'static str {
    match class {
        CharClass::Upper => "Uppercase  A-Z",
        CharClass::Lower => "Lowercase  a-z",
        CharClass::Digit => "Digits     0-9",
        CharClass::Special => "Special    !@#$...",
    }
}
