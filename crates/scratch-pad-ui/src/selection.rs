//! Selection span over the pad text, in char offsets.

use egui::text::CCursorRange;

/// A half-open span `[start, end)` of char offsets, always `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Builds a span from two ends in either order.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A caret with nothing selected.
    pub fn caret(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    pub fn from_cursor_range(range: &CCursorRange) -> Self {
        Self::new(range.primary.index, range.secondary.index)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Limits both ends to the char length of `text`.
    ///
    /// A span kept from an earlier, longer document collapses to a caret at
    /// the end of the current one.
    pub fn clamped(&self, text: &str) -> Self {
        let len = text.chars().count();
        Self::new(self.start.min(len), self.end.min(len))
    }

    /// Returns the selected part of `text`, with both ends clamped to its
    /// length.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        let start = byte_offset(text, self.start);
        let end = byte_offset(text, self.end);
        &text[start..end]
    }
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}
