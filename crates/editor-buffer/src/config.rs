//! Document configuration

/// Options for a [`crate::Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentConfig {
    /// Maximum undo depth. `None` keeps unlimited history; `Some(0)` disables recording.
    pub history_limit: Option<usize>,
    /// Merge an insert into the preceding piece when it directly continues it in the add buffer
    /// (sequential typing), instead of adding a new piece.
    pub merge_adjacent_inserts: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            history_limit: None,
            merge_adjacent_inserts: true,
        }
    }
}

impl DocumentConfig {
    /// Set the maximum undo depth.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Keep unlimited history.
    pub fn with_unlimited_history(mut self) -> Self {
        self.history_limit = None;
        self
    }

    /// Enable or disable merging of sequential inserts.
    pub fn with_merge_adjacent_inserts(mut self, enabled: bool) -> Self {
        self.merge_adjacent_inserts = enabled;
        self
    }
}
