//! History state and the pure transition function over it.

/// A command that transitions the history from one state to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resets to the initial empty state.
    Clear,
    /// Records a new snapshot and discards any pending redo branch.
    Add(String),
    /// Steps back one snapshot. No-op when there is nothing to undo.
    Undo,
    /// Steps forward one snapshot. No-op when there is nothing to redo.
    Redo,
}

/// The `past`/`present`/`future` triple of document snapshots.
///
/// `present` is `None` exactly when `past` is empty; otherwise it equals the
/// last element of `past`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryState {
    /// Snapshots available for undo, oldest first.
    pub past: Vec<String>,
    /// The current snapshot, `None` when the document is empty.
    pub present: Option<String>,
    /// Snapshots available for redo, nearest first.
    pub future: Vec<String>,
}

impl HistoryState {
    /// Creates the initial empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `Undo` would change the state.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether `Redo` would change the state.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// The current text, with the empty sentinel read as `""`.
    pub fn text(&self) -> &str {
        self.present.as_deref().unwrap_or_default()
    }

    /// Applies a command, consuming the old state.
    pub fn apply(self, command: Command) -> Self {
        reduce(self, command)
    }
}

/// Pure transition function: `(HistoryState, Command) -> HistoryState`.
///
/// Total over every state and command; out-of-range undo/redo return the
/// state unchanged.
pub fn reduce(state: HistoryState, command: Command) -> HistoryState {
    let HistoryState {
        mut past,
        present,
        mut future,
    } = state;

    match command {
        Command::Clear => HistoryState::default(),
        Command::Add(text) => {
            past.push(text.clone());
            HistoryState {
                past,
                present: Some(text),
                future: Vec::new(),
            }
        }
        Command::Undo => {
            if past.pop().is_none() {
                return HistoryState {
                    past,
                    present,
                    future,
                };
            }
            if let Some(old) = present {
                future.insert(0, old);
            }
            let present = past.last().cloned();
            HistoryState {
                past,
                present,
                future,
            }
        }
        Command::Redo => {
            if future.is_empty() {
                return HistoryState {
                    past,
                    present,
                    future,
                };
            }
            let next = future.remove(0);
            past.push(next.clone());
            HistoryState {
                past,
                present: Some(next),
                future,
            }
        }
    }
}
