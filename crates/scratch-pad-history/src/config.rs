//! Depth settings for the history store.

/// Configuration for the history store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of snapshots kept in `past`.
    ///
    /// `None` keeps every snapshot. When set, the oldest snapshots are
    /// evicted after each `Add`.
    pub max_depth: Option<usize>,
}

impl HistoryConfig {
    /// Unbounded history.
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    /// History capped at `max_depth` snapshots. A depth of zero is treated
    /// as unbounded, since the current snapshot always lives in `past`.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: (max_depth > 0).then_some(max_depth),
        }
    }
}
