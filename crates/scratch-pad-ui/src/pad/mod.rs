//! The scratch pad widget: a command row over a multi-line text surface.

mod clipboard;
mod events;
mod toolbar;

use egui::{FontId, Id, TextEdit};
use scratch_pad_history::{HistoryConfig, HistoryStore};

use crate::clipboard::ClipboardCapability;
use crate::selection::Selection;

pub use events::{ClipboardSubscription, NativeClipboardEvent};

/// Default text surface height, in rows.
const DEFAULT_ROWS: usize = 10;
const DEFAULT_FONT_SIZE: f32 = 14.0;

/// A button in the pad's command row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadAction {
    Copy,
    Paste,
    Cut,
    Undo,
    Redo,
    Clear,
    Close,
}

/// Scratch pad state: document history, clipboard access and the last
/// known selection on the text surface.
pub struct ScratchPad {
    history: HistoryStore,
    clipboard: Box<dyn ClipboardCapability>,
    selection: Selection,
    subscription: Option<ClipboardSubscription>,
    editor_id: Id,
    rows: usize,
    font_size: f32,
    focus_requested: bool,
}

impl std::fmt::Debug for ScratchPad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScratchPad")
            .field("history", &self.history)
            .field("clipboard", &self.clipboard.name())
            .field("selection", &self.selection)
            .field("subscribed", &self.subscription.is_some())
            .finish()
    }
}

impl ScratchPad {
    pub fn new(config: HistoryConfig, clipboard: Box<dyn ClipboardCapability>) -> Self {
        Self {
            history: HistoryStore::new(config),
            clipboard,
            selection: Selection::default(),
            subscription: None,
            editor_id: Id::new("scratch_pad_editor"),
            rows: DEFAULT_ROWS,
            font_size: DEFAULT_FONT_SIZE,
            focus_requested: false,
        }
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows.max(1);
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// The current document text.
    pub fn text(&self) -> &str {
        self.history.text()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Records `text` as the new document, as the text surface does on
    /// every edit.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.history.add(text);
    }

    pub fn undo(&mut self) {
        self.history.undo();
    }

    pub fn redo(&mut self) {
        self.history.redo();
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Runs a command-row action. `Close` is handled by the caller's
    /// close callback and does nothing here.
    pub fn perform(&mut self, action: PadAction) {
        tracing::debug!(?action, "scratch pad action");
        match action {
            PadAction::Copy => self.copy(),
            PadAction::Paste => self.paste(),
            PadAction::Cut => self.cut(),
            PadAction::Undo => self.undo(),
            PadAction::Redo => self.redo(),
            PadAction::Clear => self.clear(),
            PadAction::Close => {}
        }
    }

    /// Renders the pad.
    ///
    /// Hidden pads render nothing and drop their clipboard subscription.
    /// `on_close` runs when the Close button is clicked.
    pub fn show(&mut self, ui: &mut egui::Ui, visible: bool, on_close: impl FnOnce()) {
        self.sync_subscription(visible);
        if !visible {
            return;
        }

        self.handle_native_clipboard_events(ui.ctx());

        let mut close_requested = false;
        ui.vertical(|ui| {
            match self.show_toolbar(ui) {
                Some(PadAction::Close) => close_requested = true,
                Some(action) => self.perform(action),
                None => {}
            }
            ui.add_space(4.0);
            self.show_editor(ui);
        });

        if close_requested {
            on_close();
        }
    }

    /// Renders the text surface bound to the present snapshot.
    fn show_editor(&mut self, ui: &mut egui::Ui) {
        let mut buffer = self.history.text().to_string();
        let output = TextEdit::multiline(&mut buffer)
            .id(self.editor_id)
            .font(FontId::monospace(self.font_size))
            .desired_rows(self.rows)
            .desired_width(f32::INFINITY)
            .show(ui);

        if let Some(range) = output.cursor_range {
            self.selection = Selection::from_cursor_range(&range);
        }

        if output.response.changed() {
            self.history.add(buffer);
        }

        if !self.focus_requested {
            output.response.request_focus();
            self.focus_requested = true;
        }
    }
}
