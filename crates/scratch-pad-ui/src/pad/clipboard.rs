//! Clipboard operations (copy, paste, cut).
//!
//! Clipboard failures are logged and otherwise ignored; the document is
//! left untouched.

use super::ScratchPad;

impl ScratchPad {
    /// Copies the selection to the clipboard, or the whole document when
    /// nothing is selected.
    pub fn copy(&mut self) {
        let text = self.history.text();
        let selection = self.selection.clamped(text);
        let content = if selection.is_empty() {
            text
        } else {
            selection.slice(text)
        };

        match self.clipboard.write_text(content) {
            Ok(()) => tracing::debug!(chars = content.chars().count(), "Copied to clipboard"),
            Err(e) => tracing::warn!(
                clipboard = self.clipboard.name(),
                "Failed to write clipboard contents: {e}"
            ),
        }
    }

    /// Reads the clipboard and appends its text to the end of the document.
    pub fn paste(&mut self) {
        match self.clipboard.read_text() {
            Ok(text) => self.paste_text(&text),
            Err(e) => tracing::warn!(
                clipboard = self.clipboard.name(),
                "Failed to read clipboard contents: {e}"
            ),
        }
    }

    /// Appends `pasted` to the end of the document as one new snapshot.
    /// Empty text is ignored.
    pub fn paste_text(&mut self, pasted: &str) {
        if pasted.is_empty() {
            return;
        }
        let combined = format!("{}{pasted}", self.history.text());
        self.history.add(combined);
    }

    /// Replaces the document with the selected text.
    ///
    /// Does nothing when the selection is empty within the current text.
    /// The clipboard is not written.
    pub fn cut(&mut self) {
        let text = self.history.text();
        let selection = self.selection.clamped(text);
        if selection.is_empty() {
            return;
        }
        let content = selection.slice(text).to_string();
        self.history.add(content);
    }
}

#[cfg(test)]
mod tests {
    use scratch_pad_history::HistoryConfig;

    use super::*;
    use crate::clipboard::{ClipboardError, MemoryClipboard};
    use crate::selection::Selection;

    fn pad_with(clipboard: &MemoryClipboard) -> ScratchPad {
        ScratchPad::new(HistoryConfig::default(), Box::new(clipboard.clone()))
    }

    // -- Copy --

    #[test]
    fn test_copy_without_selection_copies_everything() {
        let clipboard = MemoryClipboard::new();
        let mut pad = pad_with(&clipboard);
        pad.edit("hello world");
        pad.set_selection(Selection::caret(3));

        pad.copy();
        assert_eq!(clipboard.contents(), "hello world");
    }

    #[test]
    fn test_copy_selection() {
        let clipboard = MemoryClipboard::new();
        let mut pad = pad_with(&clipboard);
        pad.edit("hello world");
        pad.set_selection(Selection::new(6, 11));

        pad.copy();
        assert_eq!(clipboard.contents(), "world");
    }

    #[test]
    fn test_copy_does_not_change_history() {
        let clipboard = MemoryClipboard::new();
        let mut pad = pad_with(&clipboard);
        pad.edit("abc");
        let before = pad.history().state().clone();

        pad.copy();
        assert_eq!(pad.history().state(), &before);
    }

    #[test]
    fn test_copy_empty_document() {
        let clipboard = MemoryClipboard::with_text("old");
        let mut pad = pad_with(&clipboard);

        pad.copy();
        assert_eq!(clipboard.contents(), "");
        assert_eq!(clipboard.write_count(), 1);
    }

    #[test]
    fn test_copy_with_unavailable_clipboard_is_swallowed() {
        let clipboard = MemoryClipboard::unavailable();
        let mut pad = pad_with(&clipboard);
        pad.edit("abc");

        pad.copy();
        assert_eq!(clipboard.write_count(), 0);
        assert_eq!(pad.text(), "abc");
    }

    #[test]
    fn test_copy_with_stale_selection_is_clamped() {
        let clipboard = MemoryClipboard::new();
        let mut pad = pad_with(&clipboard);
        pad.edit("abc");
        pad.set_selection(Selection::new(1, 40));

        pad.copy();
        assert_eq!(clipboard.contents(), "bc");
    }

    #[test]
    fn test_copy_after_undo_with_stale_selection_copies_everything() {
        let clipboard = MemoryClipboard::new();
        let mut pad = pad_with(&clipboard);
        pad.edit("hello");
        pad.edit("hello world");
        pad.set_selection(Selection::new(6, 11));
        pad.undo();

        pad.copy();
        assert_eq!(clipboard.contents(), "hello");
    }

    #[test]
    fn test_copy_after_clear_with_stale_selection() {
        let clipboard = MemoryClipboard::with_text("old");
        let mut pad = pad_with(&clipboard);
        pad.edit("abc");
        pad.set_selection(Selection::new(0, 3));
        pad.clear();

        pad.copy();
        assert_eq!(clipboard.contents(), "");
        assert_eq!(clipboard.write_count(), 1);
    }

    // -- Paste --

    #[test]
    fn test_paste_appends_to_end() {
        let clipboard = MemoryClipboard::with_text(" world");
        let mut pad = pad_with(&clipboard);
        pad.edit("hello");
        pad.set_selection(Selection::caret(0));

        pad.paste();
        assert_eq!(pad.text(), "hello world");
        assert_eq!(pad.history().state().past, vec!["hello", "hello world"]);
    }

    #[test]
    fn test_paste_into_empty_document() {
        let clipboard = MemoryClipboard::with_text("fresh");
        let mut pad = pad_with(&clipboard);

        pad.paste();
        assert_eq!(pad.text(), "fresh");
        assert!(pad.history().can_undo());
    }

    #[test]
    fn test_paste_empty_clipboard_is_noop() {
        let clipboard = MemoryClipboard::new();
        let mut pad = pad_with(&clipboard);
        pad.edit("abc");

        pad.paste();
        assert_eq!(pad.history().state().past.len(), 1);
    }

    #[test]
    fn test_paste_failure_is_swallowed() {
        let clipboard = MemoryClipboard::failing(ClipboardError::CapabilityFailure(
            "permission denied".into(),
        ));
        clipboard.set_contents("secret");
        let mut pad = pad_with(&clipboard);
        pad.edit("abc");

        pad.paste();
        assert_eq!(pad.text(), "abc");
        assert_eq!(pad.history().state().past.len(), 1);
    }

    #[test]
    fn test_paste_discards_redo_branch() {
        let clipboard = MemoryClipboard::with_text("!");
        let mut pad = pad_with(&clipboard);
        pad.edit("a");
        pad.edit("ab");
        pad.undo();

        pad.paste();
        assert_eq!(pad.text(), "a!");
        assert!(!pad.history().can_redo());
    }

    // -- Cut --

    #[test]
    fn test_cut_replaces_document_with_selection() {
        let clipboard = MemoryClipboard::new();
        let mut pad = pad_with(&clipboard);
        pad.edit("hello world");
        pad.set_selection(Selection::new(0, 5));

        pad.cut();
        assert_eq!(pad.text(), "hello");
        assert_eq!(clipboard.write_count(), 0);

        pad.undo();
        assert_eq!(pad.text(), "hello world");
    }

    #[test]
    fn test_cut_without_selection_is_noop() {
        let clipboard = MemoryClipboard::new();
        let mut pad = pad_with(&clipboard);
        pad.edit("hello");
        pad.set_selection(Selection::caret(2));

        pad.cut();
        assert_eq!(pad.text(), "hello");
        assert_eq!(pad.history().state().past.len(), 1);
    }

    #[test]
    fn test_cut_on_empty_document_is_noop() {
        let clipboard = MemoryClipboard::new();
        let mut pad = pad_with(&clipboard);
        pad.set_selection(Selection::new(0, 3));

        pad.cut();
        assert!(pad.history().present().is_none());
        assert!(!pad.history().can_undo());
    }

    #[test]
    fn test_cut_after_undo_ignores_stale_selection() {
        let clipboard = MemoryClipboard::new();
        let mut pad = pad_with(&clipboard);
        for text in ["h", "he", "hel", "hello", "hello world"] {
            pad.edit(text);
        }
        pad.set_selection(Selection::new(6, 11));
        pad.undo();

        pad.cut();
        assert_eq!(pad.text(), "hello");
        assert_eq!(pad.history().state().past, vec!["h", "he", "hel", "hello"]);
        assert!(pad.history().can_redo());
    }

    #[test]
    fn test_cut_after_clear_records_nothing() {
        let clipboard = MemoryClipboard::new();
        let mut pad = pad_with(&clipboard);
        pad.edit("abc");
        pad.set_selection(Selection::new(0, 3));
        pad.clear();

        pad.cut();
        assert!(pad.history().present().is_none());
        assert!(!pad.history().can_undo());
    }

    #[test]
    fn test_cut_partially_stale_selection_keeps_overlap() {
        let clipboard = MemoryClipboard::new();
        let mut pad = pad_with(&clipboard);
        pad.edit("abc");
        pad.edit("abcdef");
        pad.set_selection(Selection::new(1, 6));
        pad.undo();

        pad.cut();
        assert_eq!(pad.text(), "bc");
    }
}
