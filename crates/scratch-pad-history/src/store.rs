//! Owning history store for one scratch pad instance.
//!
//! Wraps a `HistoryState`, routes every mutation through `reduce`, and
//! enforces the optional depth limit from `HistoryConfig`.

use crate::config::HistoryConfig;
use crate::state::{reduce, Command, HistoryState};

/// Manages the undo/redo history of a single scratch pad document.
///
/// Each widget owns its own store; nothing is shared or persisted.
#[derive(Debug, Default)]
pub struct HistoryStore {
    state: HistoryState,
    config: HistoryConfig,
}

impl HistoryStore {
    /// Creates an empty store with the given configuration.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            state: HistoryState::new(),
            config,
        }
    }

    /// Creates an unbounded in-memory store.
    ///
    /// Convenience constructor for tests and simple usage.
    pub fn in_memory() -> Self {
        Self::new(HistoryConfig::unbounded())
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Applies a command and replaces the state in one step.
    pub fn dispatch(&mut self, command: Command) {
        let kind = command_name(&command);
        let is_add = matches!(command, Command::Add(_));
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, command);

        if is_add {
            self.enforce_depth();
        }

        tracing::trace!(
            command = kind,
            past = self.state.past.len(),
            future = self.state.future.len(),
            "history command applied"
        );
    }

    /// Records a new snapshot, discarding any redo branch.
    pub fn add(&mut self, text: impl Into<String>) {
        self.dispatch(Command::Add(text.into()));
    }

    /// Steps back one snapshot. No-op when nothing can be undone.
    pub fn undo(&mut self) {
        self.dispatch(Command::Undo);
    }

    /// Steps forward one snapshot. No-op when nothing can be redone.
    pub fn redo(&mut self) {
        self.dispatch(Command::Redo);
    }

    /// Resets the history to the initial empty state.
    pub fn clear(&mut self) {
        self.dispatch(Command::Clear);
    }

    /// The full history state.
    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    /// The current snapshot, `None` when the document is empty.
    pub fn present(&self) -> Option<&str> {
        self.state.present.as_deref()
    }

    /// The current text, with the empty sentinel read as `""`.
    pub fn text(&self) -> &str {
        self.state.text()
    }

    /// Whether undo is available.
    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    /// Whether redo is available.
    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    /// Evicts the oldest snapshots beyond `max_depth`.
    ///
    /// Only `past` is trimmed; the newest entry is the present snapshot and
    /// always survives.
    fn enforce_depth(&mut self) {
        let Some(max_depth) = self.config.max_depth else {
            return;
        };
        let max_depth = max_depth.max(1);
        if self.state.past.len() > max_depth {
            let excess = self.state.past.len() - max_depth;
            self.state.past.drain(..excess);
            tracing::debug!(evicted = excess, "history depth limit reached");
        }
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Clear => "clear",
        Command::Add(_) => "add",
        Command::Undo => "undo",
        Command::Redo => "redo",
    }
}
