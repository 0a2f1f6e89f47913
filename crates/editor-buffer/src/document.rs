//! Document: the undo-aware editing API
//!
//! [`Document`] couples a [`PieceTable`] with an [`UndoRedoManager`]. User edits are applied to
//! the table and then recorded; undo and redo replay recorded operations straight against the
//! table, so replayed edits are never recorded again.
//!
//! Two flavours of every edit are offered:
//!
//! - the lenient API (`insert`, `erase`, `replace`, `undo`, `redo`) clamps out-of-range indices
//!   and treats empty ranges or empty history as a no-op;
//! - the strict API (`try_insert`, `try_erase`, ...) rejects the same inputs with an
//!   [`EditError`] and otherwise behaves identically.

use std::fmt;

use tracing::debug;

use crate::config::DocumentConfig;
use crate::error::EditError;
use crate::history::{Operation, OperationKind, UndoRedoManager, UndoRedoState};
use crate::piece_table::{Location, PieceTable};
use crate::storage::Piece;

/// A mutable text document backed by a piece table, with linear undo/redo.
///
/// # Example
///
/// ```rust
/// use editor_buffer::Document;
///
/// let mut doc = Document::new("abcdef");
/// doc.insert(6, "gh");
/// doc.erase(1, 3);
/// assert_eq!(doc.get_text(), "adefgh");
///
/// doc.undo();
/// assert_eq!(doc.get_text(), "abcdefgh");
/// doc.redo();
/// assert_eq!(doc.get_text(), "adefgh");
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    table: PieceTable,
    history: UndoRedoManager,
    config: DocumentConfig,
}

impl Document {
    /// Create a document seeded with `text`.
    pub fn new(text: &str) -> Self {
        Self::with_config(text, DocumentConfig::default())
    }

    /// Create an empty document.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Create a document with explicit options.
    pub fn with_config(text: &str, config: DocumentConfig) -> Self {
        let mut table = PieceTable::new(text);
        table.set_merge_adjacent(config.merge_adjacent_inserts);
        Self {
            table,
            history: UndoRedoManager::new(config.history_limit),
            config,
        }
    }

    /// The options this document was created with.
    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// The underlying piece table.
    pub fn table(&self) -> &PieceTable {
        &self.table
    }

    /// The current piece sequence.
    pub fn pieces(&self) -> &[Piece] {
        self.table.pieces()
    }

    /// Resolve a document index to a `(piece, offset)` location.
    pub fn resolve(&self, index: usize) -> Option<Location> {
        self.table.resolve(index)
    }

    /// Total character count.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Get the entire document content.
    pub fn get_text(&self) -> String {
        self.table.get_text()
    }

    /// Get the text in `[start, end)`. Empty or inverted ranges yield an empty string.
    pub fn text_between(&self, start: usize, end: usize) -> String {
        self.table.text_between(start, end)
    }

    /// Insert `text` at `index`, clamping `index` to the end of the document.
    pub fn insert(&mut self, index: usize, text: &str) {
        if let Some(index) = self.table.insert(index, text) {
            debug!(index, len = text.chars().count(), "insert");
            self.history.push(Operation::insert(index, text));
        }
    }

    /// Erase the half-open range `[start, end)`.
    ///
    /// No-op when `start > end`; `end` is clamped to the end of the document.
    pub fn erase(&mut self, start: usize, end: usize) {
        if let Some(deleted) = self.table.erase(start, end) {
            debug!(start, len = deleted.chars().count(), "erase");
            self.history.push(Operation::erase(start, deleted));
        }
    }

    /// Replace `[start, end)` with `text`.
    ///
    /// Recorded as an erase followed by an insert; undoing a replace takes two undo calls.
    pub fn replace(&mut self, start: usize, end: usize, text: &str) {
        self.erase(start, end);
        self.insert(start, text);
    }

    /// Undo the most recent edit. Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(operation) = self.history.pop_undo() else {
            return false;
        };
        debug!(kind = ?operation.kind, start = operation.start, "undo");
        match operation.kind {
            OperationKind::Insert => {
                self.table.erase(operation.start, operation.end());
            }
            OperationKind::Erase => {
                self.table.insert(operation.start, &operation.text);
            }
        }
        self.history.push_redo(operation);
        true
    }

    /// Redo the most recently undone edit. Returns `false` when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(operation) = self.history.pop_redo() else {
            return false;
        };
        debug!(kind = ?operation.kind, start = operation.start, "redo");
        match operation.kind {
            OperationKind::Insert => {
                self.table.insert(operation.start, &operation.text);
            }
            OperationKind::Erase => {
                self.table.erase(operation.start, operation.end());
            }
        }
        self.history.push_undone(operation);
        true
    }

    /// Insert `text` at `index`, rejecting an index past the end of the document.
    pub fn try_insert(&mut self, index: usize, text: &str) -> Result<(), EditError> {
        self.check_index(index)?;
        self.insert(index, text);
        Ok(())
    }

    /// Erase `[start, end)`, rejecting inverted ranges and indices past the end.
    pub fn try_erase(&mut self, start: usize, end: usize) -> Result<(), EditError> {
        self.check_range(start, end)?;
        self.erase(start, end);
        Ok(())
    }

    /// Replace `[start, end)` with `text`, rejecting inverted ranges and indices past the end.
    pub fn try_replace(&mut self, start: usize, end: usize, text: &str) -> Result<(), EditError> {
        self.check_range(start, end)?;
        self.replace(start, end, text);
        Ok(())
    }

    /// Undo, reporting [`EditError::NothingToUndo`] when the undo stack is empty.
    pub fn try_undo(&mut self) -> Result<(), EditError> {
        if self.undo() {
            Ok(())
        } else {
            Err(EditError::NothingToUndo)
        }
    }

    /// Redo, reporting [`EditError::NothingToRedo`] when the redo stack is empty.
    pub fn try_redo(&mut self) -> Result<(), EditError> {
        if self.redo() {
            Ok(())
        } else {
            Err(EditError::NothingToRedo)
        }
    }

    /// Whether an undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo stack depth.
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Redo stack depth.
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Snapshot of the undo/redo state.
    pub fn undo_redo_state(&self) -> UndoRedoState {
        self.history.snapshot()
    }

    /// The undo/redo log.
    pub fn history(&self) -> &UndoRedoManager {
        &self.history
    }

    /// Whether the document is at its last clean point (no edits since [`mark_clean`]).
    ///
    /// [`mark_clean`]: Self::mark_clean
    pub fn is_clean(&self) -> bool {
        self.history.is_clean()
    }

    /// Mark the current state as clean, e.g. after saving.
    pub fn mark_clean(&mut self) {
        self.history.mark_clean();
    }

    /// Drop all undo/redo history without touching the text.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        let len = self.len();
        if index > len {
            return Err(EditError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    fn check_range(&self, start: usize, end: usize) -> Result<(), EditError> {
        if start > end {
            return Err(EditError::InvalidRange { start, end });
        }
        self.check_index(end)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.table, f)
    }
}
