//! Native copy/paste/cut notifications from the host.
//!
//! While the pad is visible it holds a `ClipboardSubscription`, and the
//! host's clipboard events aimed at the text surface are taken out of the
//! input queue and routed to the pad's own handlers.

use super::ScratchPad;

/// Scoped registration for native clipboard events.
///
/// Acquired when the pad is shown, released when it is hidden or dropped.
#[derive(Debug)]
pub struct ClipboardSubscription {
    _private: (),
}

impl ClipboardSubscription {
    fn acquire() -> Self {
        tracing::debug!("Clipboard event subscription attached");
        Self { _private: () }
    }
}

impl Drop for ClipboardSubscription {
    fn drop(&mut self) {
        tracing::debug!("Clipboard event subscription detached");
    }
}

/// A clipboard event raised by the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeClipboardEvent {
    Copy,
    Cut,
    /// Paste events carry the clipboard text directly.
    Paste(String),
}

impl NativeClipboardEvent {
    fn from_egui(event: &egui::Event) -> Option<Self> {
        match event {
            egui::Event::Copy => Some(Self::Copy),
            egui::Event::Cut => Some(Self::Cut),
            egui::Event::Paste(text) => Some(Self::Paste(text.clone())),
            _ => None,
        }
    }
}

impl ScratchPad {
    /// Whether native clipboard events are currently routed to the pad.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Handles a native clipboard event. Returns `false` (and does nothing)
    /// when the pad holds no subscription.
    pub fn handle_native_event(&mut self, event: NativeClipboardEvent) -> bool {
        if self.subscription.is_none() {
            return false;
        }
        match event {
            NativeClipboardEvent::Copy => self.copy(),
            NativeClipboardEvent::Cut => self.cut(),
            NativeClipboardEvent::Paste(text) => self.paste_text(&text),
        }
        true
    }

    pub(super) fn sync_subscription(&mut self, visible: bool) {
        match (visible, self.subscription.is_some()) {
            (true, false) => self.subscription = Some(ClipboardSubscription::acquire()),
            (false, true) => {
                self.subscription = None;
                // Focus the surface again the next time the pad opens
                self.focus_requested = false;
            }
            _ => {}
        }
    }

    /// Takes the frame's clipboard events out of egui's input queue when the
    /// text surface has focus, so the surface doesn't apply them as well.
    pub(super) fn handle_native_clipboard_events(&mut self, ctx: &egui::Context) {
        if self.subscription.is_none() || !ctx.memory(|m| m.has_focus(self.editor_id)) {
            return;
        }

        let events = ctx.input_mut(|i| {
            let mut taken = Vec::new();
            i.events.retain(|e| match NativeClipboardEvent::from_egui(e) {
                Some(event) => {
                    taken.push(event);
                    false
                }
                None => true,
            });
            taken
        });

        for event in events {
            self.handle_native_event(event);
        }
    }
}
