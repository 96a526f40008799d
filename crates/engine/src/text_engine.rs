// Chunk: docs/chunks/text_engine - Editing engine facade over the gap buffer

//! The editing engine: gap buffer plus bounded undo/redo.
//!
//! [`TextEngine`] is the single owned value a caller holds per document.
//! It couples the gap buffer with snapshot history and the keystroke
//! coalescing policy: consecutive non-whitespace insertions share one
//! undo step, a run of whitespace shares one, and deletions snapshot on
//! every effective call. The caller owns display, input decoding, and
//! file I/O; the engine owns text, cursor, and history.
//!
//! All positions are linear character offsets. Newline is an ordinary
//! character; translating 2-D (row, column) coordinates to offsets is
//! the caller's job.

use std::fmt;

use tracing::{debug, trace};

use crate::error::EngineError;
use crate::gap_buffer::GapBuffer;
use crate::history::EditHistory;

#[cfg(debug_assertions)]
use crate::history::MAX_UNDO_DEPTH;

/// Marker spliced into [`TextEngine::content_with_cursor`] output.
const CURSOR_MARKER: char = '|';

/// Gap-buffer text editing engine with snapshot undo/redo.
///
/// Every mutating operation either fully applies or fully no-ops:
/// out-of-range cursors clamp, over-long deletes truncate, undo/redo on
/// empty history return false, and an allocation failure during growth
/// leaves text, cursor, and history exactly as they were.
#[derive(Debug)]
pub struct TextEngine {
    buffer: GapBuffer,
    history: EditHistory,
    /// True when the most recent insertion wrote whitespace. A new undo
    /// step starts only at the first whitespace of a run.
    last_insert_whitespace: bool,
    /// True right after an undo or redo. The next insertion must start
    /// a fresh undo step even mid-word: without a snapshot of the
    /// restored state, the next undo would skip past it to an older
    /// entry and the restored state would become unreachable.
    resumed_from_history: bool,
    /// Mutation counter for sampling debug assertions (debug builds only).
    #[cfg(debug_assertions)]
    debug_mutation_count: u64,
}

impl TextEngine {
    /// Creates an empty engine with the minimum buffer capacity.
    pub fn new() -> Self {
        Self {
            buffer: GapBuffer::new(),
            history: EditHistory::new(),
            last_insert_whitespace: false,
            resumed_from_history: false,
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }

    /// Creates an engine holding `text`, cursor at end-of-text, no
    /// history.
    pub fn from_text(text: &str) -> Result<Self, EngineError> {
        Ok(Self {
            buffer: GapBuffer::from_text(text)?,
            history: EditHistory::new(),
            last_insert_whitespace: false,
            resumed_from_history: false,
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        })
    }

    // ==================== Mutations ====================

    /// Inserts one character immediately before the cursor.
    ///
    /// Grows the buffer first so a failed allocation leaves history
    /// untouched. A snapshot is recorded only when this keystroke
    /// starts a new undo step: the first whitespace of a run, any
    /// character typed with an empty undo history, or the first
    /// character typed after an undo or redo (the restored state must
    /// be recorded before it is edited away, or undo could never reach
    /// it again). Redo is invalidated either way.
    pub fn insert_char(&mut self, ch: char) -> Result<(), EngineError> {
        self.buffer.ensure_gap(1)?;

        let starts_undo_step = self.history.undo_depth() == 0
            || self.resumed_from_history
            || (ch.is_whitespace() && !self.last_insert_whitespace);
        if starts_undo_step {
            self.history.record(&self.buffer);
        } else {
            self.history.clear_redo();
        }

        self.buffer.insert(ch)?;
        self.last_insert_whitespace = ch.is_whitespace();
        self.resumed_from_history = false;
        self.assert_engine_consistent();
        Ok(())
    }

    /// Inserts a string immediately before the cursor as one undo step.
    ///
    /// This is the paste path: however many characters arrive, a single
    /// snapshot precedes them all. Empty input is a full no-op.
    pub fn insert_str(&mut self, text: &str) -> Result<(), EngineError> {
        let count = text.chars().count();
        if count == 0 {
            return Ok(());
        }

        self.buffer.ensure_gap(count)?;
        self.history.record(&self.buffer);
        self.buffer.insert_str(text)?;
        self.last_insert_whitespace = false;
        self.resumed_from_history = false;
        self.assert_engine_consistent();
        Ok(())
    }

    /// Deletes the character immediately before the cursor (backspace).
    ///
    /// Returns the deleted character. At offset 0 this is a full no-op:
    /// no snapshot, redo preserved, `None` returned.
    pub fn delete_char(&mut self) -> Option<char> {
        if self.buffer.cursor() == 0 {
            return None;
        }

        self.history.record(&self.buffer);
        let deleted = self.buffer.delete_backward();
        self.last_insert_whitespace = false;
        self.resumed_from_history = false;
        self.assert_engine_consistent();
        deleted
    }

    /// Deletes up to `count` characters at and after the cursor
    /// (selection delete). Returns the number actually deleted.
    ///
    /// The count clamps to the characters available; a clamp to zero
    /// (cursor at end-of-text, or `count == 0`) is a full no-op with no
    /// snapshot and redo preserved.
    pub fn delete_from_cursor(&mut self, count: usize) -> usize {
        let available = self.buffer.len() - self.buffer.cursor();
        if count.min(available) == 0 {
            return 0;
        }

        self.history.record(&self.buffer);
        let taken = self.buffer.delete_forward(count);
        self.last_insert_whitespace = false;
        self.resumed_from_history = false;
        self.assert_engine_consistent();
        taken
    }

    /// Moves the cursor (and the gap) to `pos`, clamped to
    /// `[0, len]`.
    ///
    /// O(distance). Cursor motion is not undoable text change: no
    /// snapshot, redo preserved.
    pub fn set_cursor(&mut self, pos: usize) {
        let target = pos.min(self.buffer.len());
        trace!(from = self.buffer.cursor(), to = target, "cursor relocated");
        self.buffer.move_gap_to(target);
        self.last_insert_whitespace = false;
    }

    /// Replaces the entire document with `text`.
    ///
    /// The buffer is rebuilt at twice the text length (floored at the
    /// minimum capacity) with the gap at the tail and the cursor at
    /// end-of-text. Both history stacks are cleared: a loaded document
    /// has no past. On allocation failure the previous document
    /// survives untouched.
    pub fn load_content(&mut self, text: &str) -> Result<(), EngineError> {
        self.buffer = GapBuffer::from_text(text)?;
        self.history.clear();
        self.last_insert_whitespace = false;
        self.resumed_from_history = false;
        debug!(len = self.buffer.len(), "document loaded");
        self.assert_engine_consistent();
        Ok(())
    }

    /// Restores the state captured before the most recent undo step.
    ///
    /// The current state moves to the redo stack. Returns false when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.buffer);
        if undone {
            self.last_insert_whitespace = false;
            self.resumed_from_history = true;
            debug!(cursor = self.buffer.cursor(), "undo applied");
        }
        undone
    }

    /// Reapplies the state undone by the most recent `undo`.
    ///
    /// The current state moves back to the undo stack. Returns false
    /// when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.buffer);
        if redone {
            self.last_insert_whitespace = false;
            self.resumed_from_history = true;
            debug!(cursor = self.buffer.cursor(), "redo applied");
        }
        redone
    }

    // ==================== Accessors ====================

    /// Returns the cursor position in logical-text coordinates.
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Returns the logical text length in characters.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the logical text, gap excluded. O(n).
    pub fn content(&self) -> String {
        self.buffer.chars().collect()
    }

    /// Returns the logical text with a `|` marker spliced in at the
    /// cursor.
    ///
    /// Display aid for callers; the marker is not part of the stored
    /// text.
    pub fn content_with_cursor(&self) -> String {
        let cursor = self.buffer.cursor();
        let mut out = String::with_capacity(self.buffer.len() + 1);
        out.extend(self.buffer.chars().take(cursor));
        out.push(CURSOR_MARKER);
        out.extend(self.buffer.chars().skip(cursor));
        out
    }

    /// Returns an iterator over the document's characters.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.buffer.chars()
    }

    /// Returns the character at the given offset.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.buffer.char_at(pos)
    }

    /// Returns the characters in `[start, end)` as a String, clamped to
    /// the text.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.buffer.slice(start, end)
    }

    /// Returns how many undo steps are available.
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Returns how many redo steps are available.
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Returns the backing capacity in slots.
    ///
    /// Debug/test introspection for growth assertions.
    #[cfg(any(debug_assertions, test))]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    // ==================== Validation ====================

    /// Debug assertion: verifies the gap ordering invariant and that
    /// the logical length matches a fresh character count.
    ///
    /// This catches index drift between the gap arithmetic and the
    /// content actually reachable through `chars()`. Compiled out in
    /// release builds.
    ///
    /// Uses a mutation counter so the O(n) recount doesn't tank perf
    /// in tight loops — checks every 64th mutation.
    #[cfg(debug_assertions)]
    fn assert_engine_consistent(&mut self) {
        self.debug_mutation_count += 1;
        if self.debug_mutation_count % 64 != 0 {
            return;
        }
        let (gap_start, gap_end) = self.buffer.gap_bounds();
        let capacity = self.buffer.capacity();
        assert!(
            gap_start <= gap_end && gap_end <= capacity,
            "gap bounds out of order after {} mutations: [{}, {}) with capacity {}",
            self.debug_mutation_count, gap_start, gap_end, capacity,
        );
        let counted = self.buffer.chars().count();
        let expected = capacity - (gap_end - gap_start);
        assert_eq!(
            counted, expected,
            "logical length drift after {} mutations: counted {} characters, gap arithmetic says {}",
            self.debug_mutation_count, counted, expected,
        );
        assert!(
            self.history.undo_depth() <= MAX_UNDO_DEPTH,
            "undo stack exceeded its bound: {} entries",
            self.history.undo_depth(),
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_engine_consistent(&mut self) {}
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TextEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
