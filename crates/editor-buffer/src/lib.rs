#![warn(missing_docs)]
//! Editor Buffer - Piece Table Text Storage with Undo/Redo
//!
//! # Overview
//!
//! `editor-buffer` represents a mutable document as a sequence of pieces, each referencing a
//! run of characters in one of two backing buffers: the read-only original text and an
//! append-only add buffer. Edits split and splice pieces instead of copying the document.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Document (edits, undo/redo, strict API)    │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  History (Operation log, two stacks)        │  ← Undo/Redo
//! ├─────────────────────────────────────────────┤
//! │  Piece Table (resolve, split, splice)       │  ← Piece Index
//! ├─────────────────────────────────────────────┤
//! │  Buffer Store (original + add arenas)       │  ← Text Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use editor_buffer::Document;
//!
//! let mut doc = Document::new("12345");
//! doc.insert(1, "AB");
//! assert_eq!(doc.get_text(), "1AB2345");
//!
//! doc.erase(4, 6);
//! assert_eq!(doc.get_text(), "1AB25");
//!
//! doc.undo();
//! doc.undo();
//! assert_eq!(doc.get_text(), "12345");
//! ```
//!
//! # Indexing
//!
//! All indices and lengths count Unicode scalar values (`char`s). There is no grapheme
//! clustering: an index is a raw offset into the character arenas.
//!
//! # Module Description
//!
//! - [`storage`] - Buffer Store and pieces
//! - [`piece_table`] - Piece Index and structural edits
//! - [`history`] - Operation records and the undo/redo log
//! - [`document`] - Undo-aware editing API
//! - [`config`] - Document options
//! - [`error`] - Errors of the strict API

pub mod config;
pub mod document;
pub mod error;
pub mod history;
pub mod piece_table;
pub mod storage;

pub use config::DocumentConfig;
pub use document::Document;
pub use error::EditError;
pub use history::{HistoryState, Operation, OperationKind, UndoRedoManager, UndoRedoState};
pub use piece_table::{Location, PieceTable};
pub use storage::{BufferStore, BufferType, Piece};
