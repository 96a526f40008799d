// Chunk: docs/chunks/gap_buffer - Gap buffer storage with a cursor-anchored gap

//! Gap buffer implementation for efficient text editing.
//!
//! A gap buffer is a character array with a movable gap at the cursor position.
//! Insertions and deletions at the cursor are O(1); moving the cursor is O(gap_distance)
//! but amortizes well for typical editing patterns (locality of edits).

use tracing::debug;

use crate::error::EngineError;

/// Smallest backing capacity ever allocated. New buffers start at this
/// size, and loaded documents never shrink below it.
const MIN_CAPACITY: usize = 64;
const GROWTH_FACTOR: usize = 2;

/// A gap buffer for efficient text storage and manipulation.
///
/// The buffer stores characters with a "gap" - an empty region that can be moved
/// to any position. Operations at the gap position are O(1), making it ideal for
/// text editing where insertions and deletions are localized.
///
/// The gap start doubles as the cursor: it counts the characters before
/// the edit point. Cloning the buffer therefore captures text, cursor,
/// and gap geometry in one value, which is what the undo history stores.
#[derive(Debug, Clone)]
pub struct GapBuffer {
    /// The underlying storage. Contains [pre-gap content | gap | post-gap content].
    data: Vec<char>,
    /// Index where the gap starts (first unused position).
    gap_start: usize,
    /// Index where the gap ends (first used position after gap).
    gap_end: usize,
}

impl GapBuffer {
    /// Creates a new empty gap buffer.
    pub fn new() -> Self {
        let mut data = Vec::with_capacity(MIN_CAPACITY);
        data.resize(MIN_CAPACITY, '\0');
        Self {
            data,
            gap_start: 0,
            gap_end: MIN_CAPACITY,
        }
    }

    /// Creates a gap buffer holding `text`, with the gap at the tail and
    /// the cursor at end-of-text.
    ///
    /// Capacity is twice the text length, floored at the minimum
    /// capacity, so a freshly loaded document absorbs edits before the
    /// first regrowth.
    pub fn from_text(text: &str) -> Result<Self, EngineError> {
        let len = text.chars().count();
        let capacity = (len * GROWTH_FACTOR).max(MIN_CAPACITY);

        let mut data = Vec::new();
        if let Err(source) = data.try_reserve_exact(capacity) {
            return Err(EngineError::Allocation {
                requested: capacity,
                source,
            });
        }
        data.extend(text.chars());
        data.resize(capacity, '\0');

        Ok(Self {
            data,
            gap_start: len,
            gap_end: capacity,
        })
    }

    /// Returns the logical length of the buffer (excluding the gap).
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current gap size.
    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Returns the gap position, which is the cursor in logical-text
    /// coordinates (number of characters before the edit point).
    pub fn cursor(&self) -> usize {
        self.gap_start
    }

    /// Moves the gap to the specified logical position.
    ///
    /// Positions past end-of-text clamp to the text length. This is
    /// O(distance) where distance is the absolute difference between
    /// the current gap position and the target position.
    pub fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());

        if pos < self.gap_start {
            // Move gap left: shift content from [pos..gap_start] to [gap_end - shift..gap_end]
            let shift = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            // Move gap right: shift content from [gap_end..gap_end + shift] to [gap_start..]
            let shift = pos - self.gap_start;
            self.data.copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Ensures the gap holds at least `min_size` slots, doubling the
    /// capacity until it does.
    ///
    /// Growth keeps the gap where `move_gap_to` left it: the prefix
    /// stays in place and the suffix moves to the tail of the grown
    /// buffer. A failed allocation leaves the buffer untouched, so
    /// callers can treat an error as a full no-op.
    pub fn ensure_gap(&mut self, min_size: usize) -> Result<(), EngineError> {
        while self.gap_len() < min_size {
            self.grow()?;
        }
        Ok(())
    }

    /// Doubles the backing capacity.
    fn grow(&mut self) -> Result<(), EngineError> {
        let old_capacity = self.data.len();
        let new_capacity = old_capacity * GROWTH_FACTOR;
        if let Err(source) = self.data.try_reserve_exact(new_capacity - old_capacity) {
            return Err(EngineError::Allocation {
                requested: new_capacity,
                source,
            });
        }

        // Extend the backing store, then shift the post-gap content to
        // the tail (back-to-front safe via copy_within). The gap widens
        // in place: gap_start is untouched, gap_end lands at
        // new_capacity - suffix_len.
        let suffix_len = old_capacity - self.gap_end;
        self.data.resize(new_capacity, '\0');
        if suffix_len > 0 {
            self.data.copy_within(self.gap_end..old_capacity, new_capacity - suffix_len);
        }
        self.gap_end = new_capacity - suffix_len;

        debug!(old_capacity, new_capacity, "buffer capacity doubled");
        Ok(())
    }

    /// Inserts a character at the current gap position.
    ///
    /// This is O(1) amortized (may grow the buffer occasionally).
    pub fn insert(&mut self, ch: char) -> Result<(), EngineError> {
        self.ensure_gap(1)?;
        self.data[self.gap_start] = ch;
        self.gap_start += 1;
        Ok(())
    }

    /// Inserts a string at the current gap position.
    pub fn insert_str(&mut self, s: &str) -> Result<(), EngineError> {
        self.ensure_gap(s.chars().count())?;
        for ch in s.chars() {
            self.data[self.gap_start] = ch;
            self.gap_start += 1;
        }
        Ok(())
    }

    /// Deletes the character before the gap (backspace).
    ///
    /// Returns the deleted character, or None if at the beginning.
    pub fn delete_backward(&mut self) -> Option<char> {
        if self.gap_start == 0 {
            return None;
        }
        self.gap_start -= 1;
        Some(self.data[self.gap_start])
    }

    /// Deletes up to `count` characters after the gap (forward delete).
    ///
    /// The count clamps to the characters actually available; deletion
    /// on this side is pure pointer movement, no data shifting. Returns
    /// the number of characters deleted.
    pub fn delete_forward(&mut self, count: usize) -> usize {
        let available = self.data.len() - self.gap_end;
        let taken = count.min(available);
        self.gap_end += taken;
        taken
    }

    /// Returns the character at the given logical position.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.len() {
            return None;
        }
        let physical = if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len()
        };
        Some(self.data[physical])
    }

    /// Returns an iterator over all characters in the buffer.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Returns the content of a range as a String.
    ///
    /// The range is in logical coordinates and clamps to the text.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let start = start.min(self.len());
        let end = end.min(self.len());
        if start >= end {
            return String::new();
        }

        let mut result = String::with_capacity(end - start);
        for i in start..end {
            if let Some(ch) = self.char_at(i) {
                result.push(ch);
            }
        }
        result
    }

    /// Returns the backing capacity in slots.
    ///
    /// Debug/test introspection for growth assertions.
    #[cfg(any(debug_assertions, test))]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the raw gap bounds `(gap_start, gap_end)`.
    ///
    /// Debug/test introspection for invariant assertions.
    #[cfg(any(debug_assertions, test))]
    pub fn gap_bounds(&self) -> (usize, usize) {
        (self.gap_start, self.gap_end)
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_empty() {
        let buf = GapBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), MIN_CAPACITY);
    }

    #[test]
    fn test_from_text() {
        let buf = GapBuffer::from_text("hello").unwrap();
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.to_string(), "hello");
        assert_eq!(buf.cursor(), 5);
    }

    #[test]
    fn test_from_text_capacity_floor() {
        // Short texts get the minimum capacity, long texts get 2x.
        let short = GapBuffer::from_text("hi").unwrap();
        assert_eq!(short.capacity(), MIN_CAPACITY);

        let long_text = "x".repeat(100);
        let long = GapBuffer::from_text(&long_text).unwrap();
        assert_eq!(long.capacity(), 200);
    }

    #[test]
    fn test_from_text_gap_at_tail() {
        let buf = GapBuffer::from_text("abc").unwrap();
        let (gap_start, gap_end) = buf.gap_bounds();
        assert_eq!(gap_start, 3);
        assert_eq!(gap_end, buf.capacity());
    }

    #[test]
    fn test_insert() {
        let mut buf = GapBuffer::new();
        buf.insert('a').unwrap();
        buf.insert('b').unwrap();
        buf.insert('c').unwrap();
        assert_eq!(buf.to_string(), "abc");
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_insert_at_middle() {
        let mut buf = GapBuffer::from_text("ac").unwrap();
        buf.move_gap_to(1);
        buf.insert('b').unwrap();
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_insert_grows_by_doubling() {
        let mut buf = GapBuffer::new();
        for i in 0..MIN_CAPACITY {
            buf.insert(char::from_u32('a' as u32 + (i % 26) as u32).unwrap())
                .unwrap();
        }
        // Gap exhausted exactly at MIN_CAPACITY characters; the next
        // insert doubles the backing store.
        assert_eq!(buf.capacity(), MIN_CAPACITY);
        buf.insert('!').unwrap();
        assert_eq!(buf.capacity(), MIN_CAPACITY * 2);
        assert_eq!(buf.len(), MIN_CAPACITY + 1);
    }

    #[test]
    fn test_growth_preserves_content_and_gap() {
        let mut buf = GapBuffer::from_text("hello world").unwrap();
        buf.move_gap_to(5);
        let before = buf.to_string();

        buf.ensure_gap(10_000).unwrap();
        assert_eq!(buf.to_string(), before);
        assert_eq!(buf.cursor(), 5);

        // The suffix " world" sits at the tail after growth.
        let (_, gap_end) = buf.gap_bounds();
        assert_eq!(buf.capacity() - gap_end, 6);
    }

    #[test]
    fn test_delete_backward() {
        let mut buf = GapBuffer::from_text("abc").unwrap();
        buf.move_gap_to(3);
        assert_eq!(buf.delete_backward(), Some('c'));
        assert_eq!(buf.to_string(), "ab");
        assert_eq!(buf.delete_backward(), Some('b'));
        assert_eq!(buf.to_string(), "a");
    }

    #[test]
    fn test_delete_backward_at_start() {
        let mut buf = GapBuffer::from_text("abc").unwrap();
        buf.move_gap_to(0);
        assert_eq!(buf.delete_backward(), None);
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_delete_forward() {
        let mut buf = GapBuffer::from_text("abc").unwrap();
        buf.move_gap_to(0);
        assert_eq!(buf.delete_forward(1), 1);
        assert_eq!(buf.to_string(), "bc");
    }

    #[test]
    fn test_delete_forward_clamps() {
        let mut buf = GapBuffer::from_text("abcdef").unwrap();
        buf.move_gap_to(2);
        assert_eq!(buf.delete_forward(100), 4);
        assert_eq!(buf.to_string(), "ab");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_delete_forward_at_end() {
        let mut buf = GapBuffer::from_text("abc").unwrap();
        buf.move_gap_to(3);
        assert_eq!(buf.delete_forward(5), 0);
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_move_gap() {
        let mut buf = GapBuffer::from_text("abcdef").unwrap();
        assert_eq!(buf.cursor(), 6);

        buf.move_gap_to(3);
        assert_eq!(buf.cursor(), 3);
        assert_eq!(buf.to_string(), "abcdef");

        buf.move_gap_to(0);
        assert_eq!(buf.cursor(), 0);
        assert_eq!(buf.to_string(), "abcdef");

        buf.move_gap_to(6);
        assert_eq!(buf.cursor(), 6);
        assert_eq!(buf.to_string(), "abcdef");
    }

    #[test]
    fn test_move_gap_clamps_past_end() {
        let mut buf = GapBuffer::from_text("abc").unwrap();
        buf.move_gap_to(1000);
        assert_eq!(buf.cursor(), 3);
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_char_at() {
        let buf = GapBuffer::from_text("hello").unwrap();
        assert_eq!(buf.char_at(0), Some('h'));
        assert_eq!(buf.char_at(4), Some('o'));
        assert_eq!(buf.char_at(5), None);
    }

    #[test]
    fn test_char_at_with_gap_in_middle() {
        let mut buf = GapBuffer::from_text("hello").unwrap();
        buf.move_gap_to(2);
        assert_eq!(buf.char_at(0), Some('h'));
        assert_eq!(buf.char_at(1), Some('e'));
        assert_eq!(buf.char_at(2), Some('l'));
        assert_eq!(buf.char_at(3), Some('l'));
        assert_eq!(buf.char_at(4), Some('o'));
    }

    #[test]
    fn test_slice() {
        let buf = GapBuffer::from_text("hello world").unwrap();
        assert_eq!(buf.slice(0, 5), "hello");
        assert_eq!(buf.slice(6, 11), "world");
        assert_eq!(buf.slice(0, 11), "hello world");
        assert_eq!(buf.slice(8, 100), "rld");
        assert_eq!(buf.slice(4, 2), "");
    }

    #[test]
    fn test_insert_str() {
        let mut buf = GapBuffer::new();
        buf.insert_str("hello").unwrap();
        assert_eq!(buf.to_string(), "hello");
        buf.insert_str(" world").unwrap();
        assert_eq!(buf.to_string(), "hello world");
    }

    #[test]
    fn test_insert_str_larger_than_buffer() {
        let mut buf = GapBuffer::new();
        let text = "x".repeat(MIN_CAPACITY * 3);
        buf.insert_str(&text).unwrap();
        assert_eq!(buf.len(), MIN_CAPACITY * 3);
        assert_eq!(buf.to_string(), text);
    }

    #[test]
    fn test_clone_captures_gap_geometry() {
        let mut buf = GapBuffer::from_text("abcdef").unwrap();
        buf.move_gap_to(2);

        let snapshot = buf.clone();
        buf.delete_forward(2);
        buf.insert('!').unwrap();
        assert_eq!(buf.to_string(), "ab!ef");

        assert_eq!(snapshot.to_string(), "abcdef");
        assert_eq!(snapshot.cursor(), 2);
    }

    #[test]
    fn test_large_insert() {
        let mut buf = GapBuffer::new();
        for i in 0..1000 {
            buf.insert(char::from_u32('a' as u32 + (i % 26) as u32).unwrap())
                .unwrap();
        }
        assert_eq!(buf.len(), 1000);
    }
}
