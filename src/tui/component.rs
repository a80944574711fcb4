use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may hold internal
/// presentation state (cursor, scroll, selection), and render into a `Rect`.
/// The tab bar and status bar are purely props-driven; the editor and the
/// generator panel carry their own state between frames.
///
/// # Mutability
///
/// `render` takes `&mut self` so components can update internal caches
/// during the render pass — the editor records the width it was last drawn
/// at, because cursor movement needs it before the next frame.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
