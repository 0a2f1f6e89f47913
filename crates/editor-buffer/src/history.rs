//! Undo/redo history
//!
//! Every user edit is recorded as an [`Operation`] carrying the literal text it inserted or
//! erased, so it can be inverted without consulting the piece table. The [`UndoRedoManager`]
//! keeps two LIFO stacks; a new user edit always discards the redo stack (history is linear).

use tracing::debug;

/// Kind of a recorded edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Text was inserted
    Insert,
    /// Text was erased
    Erase,
}

/// A recorded edit.
///
/// For [`OperationKind::Erase`], `text` is the text that existed before deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// What the edit did
    pub kind: OperationKind,
    /// Absolute character index where the edit started
    pub start: usize,
    /// Number of characters inserted or erased
    pub length: usize,
    /// The inserted or erased text
    pub text: String,
}

impl Operation {
    /// Record an insertion of `text` at `start`.
    pub fn insert(start: usize, text: impl Into<String>) -> Self {
        Self::new(OperationKind::Insert, start, text.into())
    }

    /// Record an erasure of `text`, which began at `start`.
    pub fn erase(start: usize, text: impl Into<String>) -> Self {
        Self::new(OperationKind::Erase, start, text.into())
    }

    fn new(kind: OperationKind, start: usize, text: String) -> Self {
        Self {
            kind,
            start,
            length: text.chars().count(),
            text,
        }
    }

    /// Exclusive end of the affected range.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Coarse history state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    /// Both stacks are empty
    Clean,
    /// Only undo is available
    HasUndo,
    /// Only redo is available
    HasRedo,
    /// Both undo and redo are available
    HasBoth,
}

/// Snapshot of the undo/redo state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoRedoState {
    /// Can undo
    pub can_undo: bool,
    /// Can redo
    pub can_redo: bool,
    /// Undo stack depth
    pub undo_depth: usize,
    /// Redo stack depth
    pub redo_depth: usize,
    /// Coarse state
    pub state: HistoryState,
}

/// Two-stack undo/redo log.
#[derive(Debug, Clone)]
pub struct UndoRedoManager {
    undo_stack: Vec<Operation>,
    redo_stack: Vec<Operation>,
    max_undo: Option<usize>,
    /// Clean point tracking. Uses `undo_stack.len()` as the saved position in the linear history.
    /// When `redo_stack` is non-empty, `clean_index` may be greater than `undo_stack.len()`.
    clean_index: Option<usize>,
}

impl Default for UndoRedoManager {
    fn default() -> Self {
        Self::new(None)
    }
}

impl UndoRedoManager {
    /// Create a manager; `max_undo` of `None` keeps unlimited history.
    pub fn new(max_undo: Option<usize>) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_undo,
            clean_index: Some(0),
        }
    }

    /// Whether an undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether a redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undo stack depth
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Redo stack depth
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Most recent undoable operation
    pub fn last_undo(&self) -> Option<&Operation> {
        self.undo_stack.last()
    }

    /// Most recent redoable operation
    pub fn last_redo(&self) -> Option<&Operation> {
        self.redo_stack.last()
    }

    /// Whether the history is at the marked clean point.
    pub fn is_clean(&self) -> bool {
        self.clean_index == Some(self.undo_stack.len())
    }

    /// Mark the current position as clean (e.g. after the document was saved).
    pub fn mark_clean(&mut self) {
        self.clean_index = Some(self.undo_stack.len());
    }

    /// Drop all history. The current position becomes the clean point.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.clean_index = Some(0);
    }

    /// Coarse state of the two stacks.
    pub fn state(&self) -> HistoryState {
        match (self.can_undo(), self.can_redo()) {
            (false, false) => HistoryState::Clean,
            (true, false) => HistoryState::HasUndo,
            (false, true) => HistoryState::HasRedo,
            (true, true) => HistoryState::HasBoth,
        }
    }

    /// Snapshot of the current state.
    pub fn snapshot(&self) -> UndoRedoState {
        UndoRedoState {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            undo_depth: self.undo_depth(),
            redo_depth: self.redo_depth(),
            state: self.state(),
        }
    }

    /// Record a user edit. Invalidates the redo branch.
    pub fn push(&mut self, operation: Operation) {
        self.clear_redo_and_adjust_clean();

        if self.max_undo == Some(0) {
            // Nothing is retained, so the clean point can never be reached again.
            self.clean_index = None;
            return;
        }
        self.push_undo(operation);
    }

    /// Pop the most recent operation to undo.
    pub fn pop_undo(&mut self) -> Option<Operation> {
        self.undo_stack.pop()
    }

    /// Pop the most recently undone operation.
    pub fn pop_redo(&mut self) -> Option<Operation> {
        self.redo_stack.pop()
    }

    /// Push an operation that was just undone.
    pub fn push_redo(&mut self, operation: Operation) {
        self.redo_stack.push(operation);
    }

    /// Push an operation that was just redone. Unlike [`push`](Self::push) this keeps the
    /// remaining redo stack.
    pub fn push_undone(&mut self, operation: Operation) {
        self.push_undo(operation);
    }

    fn push_undo(&mut self, operation: Operation) {
        if let Some(max_undo) = self.max_undo
            && self.undo_stack.len() >= max_undo
        {
            let evicted = self.undo_stack.remove(0);
            debug!(
                kind = ?evicted.kind,
                start = evicted.start,
                "history limit reached, dropping oldest entry"
            );
            if let Some(clean_index) = self.clean_index {
                if clean_index == 0 {
                    self.clean_index = None;
                } else {
                    self.clean_index = Some(clean_index - 1);
                }
            }
        }
        self.undo_stack.push(operation);
    }

    fn clear_redo_and_adjust_clean(&mut self) {
        if self.redo_stack.is_empty() {
            return;
        }

        // If clean point is in redo area, it becomes unreachable after clearing redo.
        if let Some(clean_index) = self.clean_index
            && clean_index > self.undo_stack.len()
        {
            self.clean_index = None;
        }

        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_length_counts_chars() {
        let op = Operation::insert(3, "你好");
        assert_eq!(op.length, 2);
        assert_eq!(op.end(), 5);
        assert_eq!(op.kind, OperationKind::Insert);

        let op = Operation::erase(0, "");
        assert_eq!(op.length, 0);
    }

    #[test]
    fn test_state_transitions() {
        let mut history = UndoRedoManager::default();
        assert_eq!(history.state(), HistoryState::Clean);

        history.push(Operation::insert(0, "a"));
        history.push(Operation::insert(1, "b"));
        assert_eq!(history.state(), HistoryState::HasUndo);

        let op = history.pop_undo().unwrap();
        history.push_redo(op);
        assert_eq!(history.state(), HistoryState::HasBoth);

        let op = history.pop_undo().unwrap();
        history.push_redo(op);
        assert_eq!(history.state(), HistoryState::HasRedo);
        assert_eq!(history.last_redo(), Some(&Operation::insert(0, "a")));
    }

    #[test]
    fn test_push_clears_redo() {
        let mut history = UndoRedoManager::default();
        history.push(Operation::insert(0, "a"));
        let op = history.pop_undo().unwrap();
        history.push_redo(op);
        assert!(history.can_redo());

        history.push(Operation::insert(0, "b"));
        assert!(!history.can_redo());
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn test_push_undone_keeps_redo() {
        let mut history = UndoRedoManager::default();
        history.push(Operation::insert(0, "a"));
        history.push(Operation::insert(1, "b"));
        for _ in 0..2 {
            let op = history.pop_undo().unwrap();
            history.push_redo(op);
        }

        let op = history.pop_redo().unwrap();
        assert_eq!(op, Operation::insert(0, "a"));
        history.push_undone(op);
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 1);
    }

    #[test]
    fn test_history_limit_evicts_oldest() {
        let mut history = UndoRedoManager::new(Some(2));
        history.push(Operation::insert(0, "a"));
        history.push(Operation::insert(1, "b"));
        history.push(Operation::insert(2, "c"));

        assert_eq!(history.undo_depth(), 2);
        assert_eq!(history.pop_undo(), Some(Operation::insert(2, "c")));
        assert_eq!(history.pop_undo(), Some(Operation::insert(1, "b")));
        assert_eq!(history.pop_undo(), None);
    }

    #[test]
    fn test_zero_limit_records_nothing() {
        let mut history = UndoRedoManager::new(Some(0));
        history.push(Operation::insert(0, "a"));
        assert!(!history.can_undo());
        assert!(!history.is_clean());
    }

    #[test]
    fn test_clean_point() {
        let mut history = UndoRedoManager::default();
        assert!(history.is_clean());

        history.push(Operation::insert(0, "a"));
        assert!(!history.is_clean());
        history.mark_clean();
        assert!(history.is_clean());

        let op = history.pop_undo().unwrap();
        history.push_redo(op);
        assert!(!history.is_clean());

        let op = history.pop_redo().unwrap();
        history.push_undone(op);
        assert!(history.is_clean());
    }

    #[test]
    fn test_clean_point_lost_when_redo_cleared() {
        let mut history = UndoRedoManager::default();
        history.push(Operation::insert(0, "a"));
        history.mark_clean();

        let op = history.pop_undo().unwrap();
        history.push_redo(op);
        history.push(Operation::insert(0, "b"));

        assert!(!history.is_clean());
        let op = history.pop_undo().unwrap();
        history.push_redo(op);
        assert!(!history.is_clean());
    }

    #[test]
    fn test_clean_point_follows_eviction() {
        let mut history = UndoRedoManager::new(Some(2));
        history.push(Operation::insert(0, "a"));
        history.push(Operation::insert(1, "b"));
        history.mark_clean();
        history.push(Operation::insert(2, "c"));

        let op = history.pop_undo().unwrap();
        history.push_redo(op);
        assert!(history.is_clean());
    }

    #[test]
    fn test_clear() {
        let mut history = UndoRedoManager::default();
        history.push(Operation::insert(0, "a"));
        history.clear();
        assert_eq!(history.state(), HistoryState::Clean);
        assert!(history.is_clean());
    }
}
