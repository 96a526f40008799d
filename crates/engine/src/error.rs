// Chunk: docs/chunks/engine_errors - Allocation failure surface

//! Engine error type.
//!
//! The engine has exactly one failure mode: the allocator refusing to
//! grow the buffer's backing storage. Everything else that looks like
//! misuse (out-of-range cursors, over-long deletes, undo on empty
//! history) clamps or no-ops, so allocation failure is the only error
//! callers ever see.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors surfaced by the editing engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The buffer could not allocate backing storage.
    ///
    /// `requested` is the total slot capacity the buffer was trying to
    /// reach when the allocator refused. The failed operation left
    /// text, cursor, and history untouched.
    #[error("allocating {requested} buffer slots failed")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}
