//! Buffer Store
//!
//! Holds the two backing arenas of a piece table: the read-only original text and the
//! append-only add buffer. Pieces reference ranges in these arenas by `(buffer, start, length)`
//! and never store text inline.

/// Buffer type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferType {
    /// Read-only original buffer
    Original,
    /// Append-only add buffer
    Add,
}

/// Piece structure: references a fragment in a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    /// Buffer type
    pub buffer_type: BufferType,
    /// Start position in the corresponding buffer (character offset)
    pub start: usize,
    /// Character count of the fragment
    pub length: usize,
}

impl Piece {
    /// Create a new Piece
    pub fn new(buffer_type: BufferType, start: usize, length: usize) -> Self {
        Self {
            buffer_type,
            start,
            length,
        }
    }

    /// One past the last referenced offset in the backing buffer.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Whether the piece references no characters.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Split the piece at a local offset.
    ///
    /// Returns `(left, right)` covering `[0, offset)` and `[offset, length)` of this piece's range,
    /// both pointing at the same buffer. `offset` is clamped to `[0, length]`, so either half may
    /// come back empty.
    pub fn split(&self, offset: usize) -> (Piece, Piece) {
        let offset = offset.min(self.length);
        let left = Piece::new(self.buffer_type, self.start, offset);
        let right = Piece::new(self.buffer_type, self.start + offset, self.length - offset);
        (left, right)
    }

    /// If `next` continues this piece in the same buffer, return the merged piece.
    pub(crate) fn merged_with(&self, next: &Piece) -> Option<Piece> {
        if self.buffer_type == next.buffer_type && self.end() == next.start {
            Some(Piece::new(
                self.buffer_type,
                self.start,
                self.length + next.length,
            ))
        } else {
            None
        }
    }
}

/// The two character arenas backing a piece table.
#[derive(Debug, Clone, Default)]
pub struct BufferStore {
    /// Read-only original buffer
    original: Vec<char>,
    /// Append-only add buffer
    add: Vec<char>,
}

impl BufferStore {
    /// Create a store whose original buffer holds `seed`.
    pub fn new(seed: &str) -> Self {
        Self {
            original: seed.chars().collect(),
            add: Vec::new(),
        }
    }

    /// Append text to the add buffer and return a piece covering exactly the appended range.
    ///
    /// Earlier pieces stay valid: the add buffer is never truncated or rewritten.
    pub fn append(&mut self, text: &str) -> Piece {
        let start = self.add.len();
        self.add.extend(text.chars());
        Piece::new(BufferType::Add, start, self.add.len() - start)
    }

    /// Characters referenced by `piece`.
    pub fn slice(&self, piece: &Piece) -> &[char] {
        self.slice_within(piece, 0, piece.length)
    }

    /// Characters in `[local_start, local_start + local_len)` of `piece`.
    ///
    /// The range is clamped to the piece and to the backing buffer; an empty slice is returned
    /// when nothing falls inside.
    pub fn slice_within(&self, piece: &Piece, local_start: usize, local_len: usize) -> &[char] {
        let buffer = self.buffer(piece.buffer_type);
        let local_end = local_start.saturating_add(local_len).min(piece.length);
        if local_start >= local_end {
            return &[];
        }
        let start = (piece.start + local_start).min(buffer.len());
        let end = (piece.start + local_end).min(buffer.len());
        &buffer[start..end]
    }

    /// Whether `piece` lies entirely inside its backing buffer.
    pub fn contains(&self, piece: &Piece) -> bool {
        piece.end() <= self.buffer(piece.buffer_type).len()
    }

    /// Length of the original buffer.
    pub fn original_len(&self) -> usize {
        self.original.len()
    }

    /// Length of the add buffer (for memory testing)
    pub fn add_len(&self) -> usize {
        self.add.len()
    }

    fn buffer(&self, buffer_type: BufferType) -> &[char] {
        match buffer_type {
            BufferType::Original => &self.original,
            BufferType::Add => &self.add,
        }
    }
}
