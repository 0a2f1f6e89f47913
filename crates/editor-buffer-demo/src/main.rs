//! Sample edit session for `editor-buffer`.
//!
//! Set `RUST_LOG=editor_buffer=debug` to see every recorded edit and replay.

use anyhow::Context;
use editor_buffer::Document;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let mut doc = Document::new("abcdef");
    info!(pieces = doc.pieces().len(), "document created");
    println!("Text is: {doc}");

    doc.try_insert(6, "gh").context("insert")?;
    println!("Text after insert: {doc}");

    doc.try_erase(1, 3).context("erase")?;
    println!("Text after erase: {doc}");

    doc.try_undo().context("undo")?;
    println!("Text after undo: {doc}");

    doc.try_redo().context("redo")?;
    println!("Text after redo: {doc}");

    doc.try_replace(1, 3, "BC").context("replace")?;
    println!("Text after replace: {doc}");

    let state = doc.undo_redo_state();
    info!(
        pieces = doc.pieces().len(),
        undo_depth = state.undo_depth,
        redo_depth = state.redo_depth,
        "session finished"
    );

    Ok(())
}
