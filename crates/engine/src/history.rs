// Chunk: docs/chunks/edit_history - Bounded snapshot undo/redo

//! Snapshot history for undo/redo.
//!
//! History entries are whole-value clones of the gap buffer taken before
//! a mutating operation. The gap start doubles as the cursor, so
//! restoring a snapshot restores text, cursor, and gap geometry in one
//! assignment. Two stacks give linear history: recording a snapshot
//! invalidates the redo stack, and undo/redo shuttle states between the
//! stacks without ever duplicating or losing one.

use tracing::debug;

use crate::gap_buffer::GapBuffer;

/// Maximum number of undo snapshots retained. Recording past this
/// evicts the oldest entry. The redo stack needs no bound of its own:
/// entries only arrive via `undo`, so its depth never exceeds this.
pub(crate) const MAX_UNDO_DEPTH: usize = 50;

/// A point-in-time copy of the buffer state.
#[derive(Debug, Clone)]
struct EditSnapshot {
    buffer: GapBuffer,
}

impl EditSnapshot {
    fn capture(live: &GapBuffer) -> Self {
        Self {
            buffer: live.clone(),
        }
    }
}

/// Bounded undo/redo stacks of buffer snapshots.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<EditSnapshot>,
    redo_stack: Vec<EditSnapshot>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Records a pre-mutation snapshot of `live`.
    ///
    /// Pushes onto the undo stack, evicting the oldest entry once the
    /// depth limit is reached, and invalidates the redo stack.
    pub fn record(&mut self, live: &GapBuffer) {
        if self.undo_stack.len() == MAX_UNDO_DEPTH {
            self.undo_stack.remove(0);
            debug!(depth = MAX_UNDO_DEPTH, "undo depth limit hit, evicted oldest snapshot");
        }
        self.undo_stack.push(EditSnapshot::capture(live));
        self.redo_stack.clear();
    }

    /// Invalidates redo without recording a snapshot.
    ///
    /// Mutations whose grouping policy skipped the snapshot still fork
    /// history away from any undone states.
    pub fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }

    /// Undoes onto `live`: the current state moves to the redo stack
    /// and the most recent undo snapshot replaces it.
    ///
    /// Returns false, leaving both stacks untouched, when there is
    /// nothing to undo.
    pub fn undo(&mut self, live: &mut GapBuffer) -> bool {
        match self.undo_stack.pop() {
            Some(snapshot) => {
                self.redo_stack.push(EditSnapshot::capture(live));
                *live = snapshot.buffer;
                true
            }
            None => false,
        }
    }

    /// Redoes onto `live`: the current state moves to the undo stack
    /// and the most recent redo snapshot replaces it.
    ///
    /// Returns false, leaving both stacks untouched, when there is
    /// nothing to redo.
    pub fn redo(&mut self, live: &mut GapBuffer) -> bool {
        match self.redo_stack.pop() {
            Some(snapshot) => {
                self.undo_stack.push(EditSnapshot::capture(live));
                *live = snapshot.buffer;
                true
            }
            None => false,
        }
    }

    /// Drops all history. A freshly loaded document has no past.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
