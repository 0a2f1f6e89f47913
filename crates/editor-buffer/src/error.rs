use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors reported by the strict `try_*` editing API of [`crate::Document`].
pub enum EditError {
    #[error("index {index} is out of range for a document of length {len}")]
    /// An index lies past the end of the document.
    IndexOutOfRange {
        /// The offending character index.
        index: usize,
        /// Document length at the time of the call.
        len: usize,
    },

    #[error("invalid range: {start}..{end}")]
    /// The range start lies after its end.
    InvalidRange {
        /// Inclusive start character offset.
        start: usize,
        /// Exclusive end character offset.
        end: usize,
    },

    #[error("nothing to undo")]
    /// The undo stack is empty.
    NothingToUndo,

    #[error("nothing to redo")]
    /// The redo stack is empty.
    NothingToRedo,
}
