//! Piece Table
//!
//! An ordered sequence of [`Piece`]s over a [`BufferStore`]. Concatenating the text of every
//! piece in order yields the document. Edits resolve a document index to a `(piece, offset)`
//! pair, split the piece there, and splice replacement pieces into the sequence; the backing
//! text is never copied or moved.
//!
//! This layer is purely structural and keeps no history. See [`crate::Document`] for the
//! undo-aware API.

use std::fmt;

use tracing::trace;

use crate::storage::{BufferStore, BufferType, Piece};

/// A document index resolved against the piece sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Index of the piece in the sequence
    pub piece: usize,
    /// Character offset inside that piece
    pub offset: usize,
}

/// Piece Table - main storage structure
#[derive(Debug, Clone)]
pub struct PieceTable {
    buffers: BufferStore,
    pieces: Vec<Piece>,
    merge_adjacent: bool,
}

impl PieceTable {
    /// Create a new Piece Table from original text
    pub fn new(text: &str) -> Self {
        let buffers = BufferStore::new(text);
        let length = buffers.original_len();

        let pieces = if length > 0 {
            vec![Piece::new(BufferType::Original, 0, length)]
        } else {
            Vec::new()
        };

        Self {
            buffers,
            pieces,
            merge_adjacent: true,
        }
    }

    /// Create an empty Piece Table
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Enable or disable merging of sequential inserts into the preceding add-buffer piece.
    pub fn set_merge_adjacent(&mut self, enabled: bool) {
        self.merge_adjacent = enabled;
    }

    /// Total character count of the document
    pub fn len(&self) -> usize {
        self.pieces.iter().map(|p| p.length).sum()
    }

    /// Whether the document is empty
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Number of pieces in the sequence
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// The current piece sequence
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The backing buffers
    pub fn buffers(&self) -> &BufferStore {
        &self.buffers
    }

    /// Resolve a document index to the piece containing it.
    ///
    /// An index at or past the end of the document resolves to one past the end of the last
    /// piece, which is the append position. For an empty sequence only index 0 resolves, to
    /// `Location { piece: 0, offset: 0 }`.
    pub fn resolve(&self, index: usize) -> Option<Location> {
        let mut current_offset = 0;

        for (piece, p) in self.pieces.iter().enumerate() {
            if index < current_offset + p.length {
                return Some(Location {
                    piece,
                    offset: index - current_offset,
                });
            }
            current_offset += p.length;
        }

        match self.pieces.last() {
            Some(last) => Some(Location {
                piece: self.pieces.len() - 1,
                offset: last.length,
            }),
            None if index == 0 => Some(Location { piece: 0, offset: 0 }),
            None => None,
        }
    }

    /// Iterate over the document's characters
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.pieces
            .iter()
            .flat_map(|piece| self.buffers.slice(piece).iter().copied())
    }

    /// Get the entire document content
    pub fn get_text(&self) -> String {
        self.chars().collect()
    }

    /// Get the text in the half-open range `[start, end)`.
    ///
    /// Returns an empty string for an empty or inverted range, or when an endpoint cannot be
    /// resolved. An endpoint past the end of the document resolves to the end, so the range is
    /// truncated there.
    pub fn text_between(&self, start: usize, end: usize) -> String {
        if start >= end {
            return String::new();
        }
        let (Some(first), Some(last)) = (self.resolve(start), self.resolve(end)) else {
            return String::new();
        };
        if first.piece > last.piece || (first.piece == last.piece && first.offset > last.offset) {
            return String::new();
        }

        let mut result = String::new();
        if first.piece == last.piece {
            let piece = &self.pieces[first.piece];
            result.extend(
                self.buffers
                    .slice_within(piece, first.offset, last.offset - first.offset),
            );
            return result;
        }

        let head = &self.pieces[first.piece];
        result.extend(
            self.buffers
                .slice_within(head, first.offset, head.length - first.offset),
        );
        for piece in &self.pieces[first.piece + 1..last.piece] {
            result.extend(self.buffers.slice(piece));
        }
        result.extend(
            self.buffers
                .slice_within(&self.pieces[last.piece], 0, last.offset),
        );
        result
    }

    /// Insert text at a character index.
    ///
    /// The index is clamped to the document length. Returns the index actually used, or `None`
    /// when `text` is empty.
    pub fn insert(&mut self, index: usize, text: &str) -> Option<usize> {
        if text.is_empty() {
            return None;
        }

        let index = index.min(self.len());
        let location = self.resolve(index)?;
        let new_piece = self.buffers.append(text);

        if self.pieces.is_empty() {
            self.pieces.push(new_piece);
            self.debug_check();
            return Some(index);
        }

        let (left, right) = self.pieces[location.piece].split(location.offset);

        let mut replacement = Vec::with_capacity(3);
        match left.merged_with(&new_piece) {
            Some(merged) if self.merge_adjacent && !left.is_empty() => replacement.push(merged),
            _ => {
                if !left.is_empty() {
                    replacement.push(left);
                }
                replacement.push(new_piece);
            }
        }
        if !right.is_empty() {
            replacement.push(right);
        }

        trace!(
            piece = location.piece,
            offset = location.offset,
            replacement = replacement.len(),
            "insert splice"
        );
        self.pieces
            .splice(location.piece..=location.piece, replacement);
        self.debug_check();
        Some(index)
    }

    /// Delete the characters in the half-open range `[start, end)`.
    ///
    /// `end` is clamped to the document length; an empty range after clamping is a no-op.
    /// Returns the deleted text, or `None` when nothing was deleted.
    pub fn erase(&mut self, start: usize, end: usize) -> Option<String> {
        let end = end.min(self.len());
        if start >= end {
            return None;
        }

        let first = self.resolve(start)?;
        let last = self.resolve(end - 1)?;
        let last_offset = last.offset + 1;

        let deleted = self.text_between(start, end);

        let mut replacement = Vec::with_capacity(2);
        if first.piece == last.piece {
            // before | deleted | after
            let (before, rest) = self.pieces[first.piece].split(first.offset);
            let (_, after) = rest.split(last_offset - first.offset);
            if !before.is_empty() {
                replacement.push(before);
            }
            if !after.is_empty() {
                replacement.push(after);
            }
        } else {
            let (before, _) = self.pieces[first.piece].split(first.offset);
            let (_, after) = self.pieces[last.piece].split(last_offset);
            if !before.is_empty() {
                replacement.push(before);
            }
            if !after.is_empty() {
                replacement.push(after);
            }
        }

        trace!(
            first = first.piece,
            last = last.piece,
            replacement = replacement.len(),
            "erase splice"
        );
        self.pieces.splice(first.piece..=last.piece, replacement);
        self.debug_check();
        Some(deleted)
    }

    /// Check the structural invariants: every piece is non-empty and lies inside its buffer.
    pub fn is_settled(&self) -> bool {
        self.pieces
            .iter()
            .all(|p| !p.is_empty() && self.buffers.contains(p))
    }

    fn debug_check(&self) {
        debug_assert!(
            self.is_settled(),
            "piece table invariant violated: {:?}",
            self.pieces
        );
    }
}

impl Default for PieceTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for PieceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for ch in self.chars() {
            f.write_char(ch)?;
        }
        Ok(())
    }
}
