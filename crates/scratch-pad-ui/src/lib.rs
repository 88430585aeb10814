//! Scratch pad widget and its hosting application.
//!
//! The widget renders a text surface bound to a `HistoryStore` plus a row of
//! Copy/Paste/Cut/Undo/Redo/Clear/Close buttons.

mod app;
pub mod clipboard;
pub mod pad;
pub mod selection;

pub use app::{ScratchPadApp, StartupArgs, ThemeMode};
pub use clipboard::{ClipboardCapability, ClipboardError, MemoryClipboard, SystemClipboard};
pub use pad::{NativeClipboardEvent, PadAction, ScratchPad};
pub use selection::Selection;
