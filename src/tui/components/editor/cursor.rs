//! Cursor state for the editor: a byte offset into the document buffer plus
//! the vertical scroll needed to keep it visible.
//!
//! All geometry questions (which visual row an offset sits on, which column)
//! are answered by [`super::text`]; this module layers movement and scroll
//! bookkeeping on top.

use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

use super::text::{self, CONTENT_OFFSET_X, CONTENT_OFFSET_Y, HORIZONTAL_OVERHEAD, VERTICAL_OVERHEAD};

#[derive(Debug, Default)]
pub(super) struct CursorState {
    /// Byte offset into the document buffer. Always on a char boundary.
    pub pos: usize,
    /// First visual row shown in the viewport.
    pub scroll_offset: u16,
    /// Inner text width at the last render, for movement between frames.
    pub last_inner_width: u16,
    /// Content rows available at the last render.
    pub last_viewport_rows: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget position and scroll, e.g. after the buffer is replaced.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Record the geometry of the area the editor was just drawn into.
    pub fn set_viewport(&mut self, area: Rect) {
        self.last_inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD).max(1);
        self.last_viewport_rows = area.height.saturating_sub(VERTICAL_OVERHEAD).max(1);
    }

    /// Move the cursor up (negative) or down (positive) by whole visual rows,
    /// keeping the column where possible. Returns false at the buffer edges.
    pub fn move_rows(&mut self, buffer: &str, delta: i32) -> bool {
        let rows = text::layout_rows(buffer, self.last_inner_width);
        let current = text::row_of(&rows, self.pos);
        let target = current
            .saturating_add_signed(delta as isize)
            .min(rows.len() - 1);
        if target == current {
            return false;
        }

        let col = text::col_of(buffer, rows[current], self.pos);
        let span = rows[target];
        let seg = &buffer[span.start..span.end];
        self.pos = span.start
            + seg
                .char_indices()
                .nth(col)
                .map(|(i, _)| i)
                .unwrap_or(seg.len());
        true
    }

    /// Scroll so the cursor row is inside the viewport recorded by the last
    /// render. Called every frame before drawing.
    pub fn follow_cursor(&mut self, buffer: &str) {
        let rows = text::layout_rows(buffer, self.last_inner_width);
        let total = rows.len() as u16;
        let viewport = self.last_viewport_rows;

        if total <= viewport {
            self.scroll_offset = 0;
            return;
        }

        let cursor_row = text::row_of(&rows, self.pos) as u16;
        if cursor_row < self.scroll_offset {
            self.scroll_offset = cursor_row;
        } else if cursor_row >= self.scroll_offset + viewport {
            self.scroll_offset = cursor_row - viewport + 1;
        }
        // A shrinking buffer can leave the offset past the end
        self.scroll_offset = self.scroll_offset.min(total - viewport);
    }

    /// Terminal position of the cursor inside the rendered area, if visible.
    ///
    /// The column is measured in display cells so wide characters place the
    /// cursor where the next glyph will actually land.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> Option<Position> {
        let rows = text::layout_rows(buffer, self.last_inner_width);
        let row = text::row_of(&rows, self.pos) as u16;
        if row < self.scroll_offset || row >= self.scroll_offset + self.last_viewport_rows {
            return None;
        }

        let span = rows[row as usize];
        let clamped = self.pos.clamp(span.start, span.end);
        let col = buffer[span.start..clamped].width() as u16;

        Some(Position::new(
            area.x + CONTENT_OFFSET_X + col.min(self.last_inner_width),
            area.y + CONTENT_OFFSET_Y + (row - self.scroll_offset),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(width: u16, rows: u16) -> CursorState {
        let mut c = CursorState::new();
        c.last_inner_width = width;
        c.last_viewport_rows = rows;
        c
    }

    // -- move_rows -----------------------------------------------------------

    #[test]
    fn move_down_keeps_column() {
        let buffer = "abcdef\nxyz";
        let mut c = cursor(80, 10);
        c.pos = 2;
        assert!(c.move_rows(buffer, 1));
        // column 2 of "xyz" is byte 7 + 2
        assert_eq!(c.pos, 9);
    }

    #[test]
    fn move_down_clamps_to_shorter_line() {
        let buffer = "abcdef\nx";
        let mut c = cursor(80, 10);
        c.pos = 5;
        assert!(c.move_rows(buffer, 1));
        // "x" only has 1 char; cursor lands at its end
        assert_eq!(c.pos, 8);
    }

    #[test]
    fn move_up_from_first_row_is_refused() {
        let mut c = cursor(80, 10);
        c.pos = 2;
        assert!(!c.move_rows("abcdef", -1));
        assert_eq!(c.pos, 2);
    }

    #[test]
    fn move_down_from_last_row_is_refused() {
        let mut c = cursor(80, 10);
        c.pos = 1;
        assert!(!c.move_rows("ab", 1));
    }

    #[test]
    fn move_crosses_soft_wrap() {
        // Width 5 wraps "hello world" onto two rows
        let buffer = "hello world";
        let mut c = cursor(5, 10);
        c.pos = 2;
        assert!(c.move_rows(buffer, 1));
        // Column 2 of the second row ("world" starting at byte 6)
        assert_eq!(c.pos, 8);
    }

    #[test]
    fn move_many_rows_clamps_at_end() {
        let buffer = "a\nb\nc\nd";
        let mut c = cursor(80, 2);
        c.pos = 0;
        assert!(c.move_rows(buffer, 100));
        assert_eq!(c.pos, 6);
    }

    #[test]
    fn move_counts_columns_in_chars() {
        let buffer = "éé\nab";
        let mut c = cursor(80, 10);
        c.pos = 4; // after both 'é's, column 2
        assert!(c.move_rows(buffer, 1));
        assert_eq!(c.pos, 7); // after "ab"
    }

    // -- follow_cursor -------------------------------------------------------

    #[test]
    fn scroll_stays_at_zero_when_content_fits() {
        let mut c = cursor(80, 10);
        c.pos = 3;
        c.scroll_offset = 4;
        c.follow_cursor("a\nb");
        assert_eq!(c.scroll_offset, 0);
    }

    #[test]
    fn scroll_follows_cursor_below_viewport() {
        let buffer = "a\nb\nc\nd\ne";
        let mut c = cursor(80, 2);
        c.pos = buffer.len();
        c.follow_cursor(buffer);
        // Cursor on row 4 with a 2-row viewport: rows 3..5 visible
        assert_eq!(c.scroll_offset, 3);
    }

    #[test]
    fn scroll_follows_cursor_above_viewport() {
        let buffer = "a\nb\nc\nd\ne";
        let mut c = cursor(80, 2);
        c.scroll_offset = 3;
        c.pos = 0;
        c.follow_cursor(buffer);
        assert_eq!(c.scroll_offset, 0);
    }

    #[test]
    fn scroll_clamps_after_buffer_shrinks() {
        let mut c = cursor(80, 2);
        c.scroll_offset = 8;
        c.pos = 0;
        c.follow_cursor("a\nb\nc");
        assert_eq!(c.scroll_offset, 0);
    }

    // -- screen_pos ----------------------------------------------------------

    #[test]
    fn screen_pos_offsets_past_border_and_padding() {
        let buffer = "hello";
        let mut c = cursor(76, 10);
        c.pos = 3;
        let area = Rect::new(0, 0, 80, 12);
        assert_eq!(c.screen_pos(buffer, area), Some(Position::new(5, 1)));
    }

    #[test]
    fn screen_pos_respects_scroll() {
        let buffer = "a\nb\nc\nd";
        let mut c = cursor(76, 2);
        c.pos = 4; // row 2
        c.scroll_offset = 2;
        let area = Rect::new(0, 0, 80, 4);
        assert_eq!(c.screen_pos(buffer, area), Some(Position::new(2, 1)));
    }

    #[test]
    fn screen_pos_hidden_when_scrolled_away() {
        let buffer = "a\nb\nc\nd";
        let mut c = cursor(76, 2);
        c.pos = 0;
        c.scroll_offset = 2;
        let area = Rect::new(0, 0, 80, 4);
        assert_eq!(c.screen_pos(buffer, area), None);
    }

    #[test]
    fn screen_pos_uses_display_width() {
        // "日" occupies two cells; cursor after it sits at column 2
        let buffer = "日x";
        let mut c = cursor(76, 10);
        c.pos = 3;
        let area = Rect::new(0, 0, 80, 12);
        assert_eq!(c.screen_pos(buffer, area), Some(Position::new(4, 1)));
    }
}
