//! Pure text geometry for the editor: wrap configuration, character/word
//! boundary helpers, and the mapping between byte offsets in the buffer and
//! wrapped visual rows.
//!
//! These are stateless helpers with no dependency on the editor state.

use std::borrow::Cow;

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Offset from area edge to content (border + padding)
pub(super) const CONTENT_OFFSET_X: u16 = 2;
/// Offset from area edge to the first content row (border)
pub(super) const CONTENT_OFFSET_Y: u16 = 1;

/// Build textwrap options configured for the editor's inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width.max(1) as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// The byte range of the buffer shown on one visual row.
///
/// Ranges never include the `'\n'` that ends a logical line, and whitespace
/// consumed at a wrap point falls into the gap between consecutive spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct RowSpan {
    pub start: usize,
    pub end: usize,
}

/// Lay the whole buffer out as visual rows at the given inner width.
///
/// Logical lines are split manually so every row's byte range is exact; each
/// line is then soft-wrapped with textwrap, whose segments borrow from the
/// line, letting the segment's address recover its byte offset. An empty
/// buffer still yields one empty row so the cursor always has somewhere to
/// sit.
pub(super) fn layout_rows(buffer: &str, inner_width: u16) -> Vec<RowSpan> {
    let mut rows = Vec::new();
    let mut line_start = 0;

    for line in buffer.split('\n') {
        if line.is_empty() {
            rows.push(RowSpan {
                start: line_start,
                end: line_start,
            });
        } else {
            for seg in textwrap::wrap(line, wrap_options(inner_width)) {
                let rel = match &seg {
                    Cow::Borrowed(s) if !s.is_empty() => {
                        s.as_ptr() as usize - line.as_ptr() as usize
                    }
                    // Owned or empty segments (e.g. a line of only spaces)
                    // carry no address; anchor them at the line start.
                    _ => 0,
                };
                rows.push(RowSpan {
                    start: line_start + rel,
                    end: line_start + rel + seg.len(),
                });
            }
        }
        line_start += line.len() + 1;
    }

    rows
}

/// Which row a byte offset sits on.
///
/// A position exactly at a wrap seam (row end == next row start) belongs to
/// the continuation row; a position at the end of a logical line stays on
/// that line's last row.
pub(super) fn row_of(rows: &[RowSpan], pos: usize) -> usize {
    for (i, row) in rows.iter().enumerate() {
        if pos <= row.end {
            if pos == row.end && rows.get(i + 1).is_some_and(|next| next.start == pos) {
                return i + 1;
            }
            return i;
        }
    }
    rows.len().saturating_sub(1)
}

/// Character column of a byte offset within its row (0 when the offset falls
/// into the whitespace gap before the row).
pub(super) fn col_of(buffer: &str, row: RowSpan, pos: usize) -> usize {
    if pos <= row.start {
        return 0;
    }
    let clamped = pos.min(row.end);
    buffer[row.start..clamped].chars().count()
}

/// Find the byte offset of the previous character boundary before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    let mut p = pos.min(text.len());
    while p > 0 {
        p -= 1;
        if text.is_char_boundary(p) {
            break;
        }
    }
    p
}

/// Find the byte offset of the next character boundary after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos + 1;
    while p < text.len() && !text.is_char_boundary(p) {
        p += 1;
    }
    p
}

/// Whether a character is a "word" character (alphanumeric or underscore).
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Find the byte offset of the previous word boundary before `pos`.
///
/// Skips any trailing non-word characters, then the word itself, matching
/// readline `backward-word` behavior.
pub(super) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let before = &text[..pos];
    let word_end = before.trim_end_matches(|c: char| !is_word_char(c)).len();
    before[..word_end]
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_word_char(c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

/// Find the byte offset of the next word boundary after `pos`.
///
/// Skips any leading non-word characters, then the word itself, matching
/// readline `forward-word` behavior.
pub(super) fn next_word_boundary(text: &str, pos: usize) -> usize {
    let after = &text[pos..];
    let word_start = after.len() - after.trim_start_matches(|c: char| !is_word_char(c)).len();
    after[word_start..]
        .find(|c: char| !is_word_char(c))
        .map(|i| pos + word_start + i)
        .unwrap_or(text.len())
}
