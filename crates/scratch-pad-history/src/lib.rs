//! Linear undo/redo history for the scratch pad document.
//!
//! The history is a `past`/`present`/`future` triple of whole-document
//! snapshots. Transitions are expressed as a pure `reduce` function over
//! `HistoryState`, and `HistoryStore` owns one state for a widget instance.

pub mod config;
pub mod state;
pub mod store;

pub use config::HistoryConfig;
pub use state::{reduce, Command, HistoryState};
pub use store::HistoryStore;
