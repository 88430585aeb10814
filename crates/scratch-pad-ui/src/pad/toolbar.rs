//! Command row: Copy, Paste, Cut, Undo, Redo, Clear, Close.

use egui::Button;

use super::{PadAction, ScratchPad};

impl ScratchPad {
    /// Renders the command row and returns the clicked action, if any.
    ///
    /// Undo and Redo are disabled while there is nothing to undo or redo.
    pub(super) fn show_toolbar(&self, ui: &mut egui::Ui) -> Option<PadAction> {
        let can_undo = self.history.can_undo();
        let can_redo = self.history.can_redo();
        let mut clicked = None;

        ui.horizontal(|ui| {
            let buttons = [
                ("Copy", PadAction::Copy, true),
                ("Paste", PadAction::Paste, true),
                ("Cut", PadAction::Cut, true),
                ("Undo", PadAction::Undo, can_undo),
                ("Redo", PadAction::Redo, can_redo),
                ("Clear", PadAction::Clear, true),
                ("Close", PadAction::Close, true),
            ];
            for (label, action, enabled) in buttons {
                if ui.add_enabled(enabled, Button::new(label)).clicked() {
                    clicked = Some(action);
                }
            }
        });

        clicked
    }
}
