// Chunk: docs/chunks/gap_buffer - Gap buffer storage with a cursor-anchored gap
// Chunk: docs/chunks/edit_history - Bounded snapshot undo/redo
// Chunk: docs/chunks/text_engine - Editing engine facade

//! etch-engine: the gap-buffer text editing engine behind etch.
//!
//! This crate owns the algorithmic core of the editor: a growable
//! character array with a movable gap at the cursor, and bounded
//! snapshot undo/redo on top of it. It performs no I/O and reads no
//! environment; the hosting front end feeds it whole strings and linear
//! character offsets and pulls whole strings back out.
//!
//! # Overview
//!
//! The main type is [`TextEngine`], which provides:
//! - Character and string insertion at the cursor position
//! - Backward (backspace) and forward (selection) deletion
//! - Cursor relocation with clamping
//! - Whole-document load and retrieval
//! - Undo/redo with keystroke coalescing and a bounded history
//!
//! [`GapBuffer`] is the storage layer underneath, usable on its own
//! when history is not wanted.
//!
//! # Example
//!
//! ```
//! use etch_engine::TextEngine;
//!
//! let mut engine = TextEngine::new();
//! engine.insert_char('H')?;
//! engine.insert_char('i')?;
//! assert_eq!(engine.content(), "Hi");
//!
//! // Move the cursor between the two characters and type again.
//! engine.set_cursor(1);
//! engine.insert_char('e')?;
//! assert_eq!(engine.content(), "Hei");
//! assert_eq!(engine.cursor(), 2);
//!
//! // Typing coalesces into word-sized undo steps.
//! engine.undo();
//! assert_eq!(engine.content(), "");
//! # Ok::<(), etch_engine::EngineError>(())
//! ```
//!
//! # Failure model
//!
//! Out-of-range cursors clamp, over-long deletes truncate, and undo or
//! redo on empty history return `false`. The one operation that can
//! fail is buffer growth: mutations that may allocate return
//! `Result<_, EngineError>`, and on failure the document is untouched.

mod error;
mod gap_buffer;
mod history;
mod text_engine;

pub use error::EngineError;
pub use gap_buffer::GapBuffer;
pub use text_engine::TextEngine;
