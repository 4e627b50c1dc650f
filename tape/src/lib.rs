//! # Tape
//!
//! The machine's byte-addressable memory: an auto-growing array of bytes
//! with a movable pointer.
//!
//! ## Philosophy
//!
//! - **No partial states**: every operation leaves the tape valid — the
//!   pointer is covered by storage after any access, and the tape is
//!   never empty.
//! - **Wrap, don't fault**: all stored values are taken mod 256; signed
//!   inputs wrap into `[0, 255]` instead of erroring.
//! - **Reads never grow**: indexing past the end returns zero and leaves
//!   the length unchanged, so displaying the tape has no side effects.

use serde::{Deserialize, Serialize};

/// Growable byte memory with a movable pointer
///
/// Owned exclusively by one cursor per run. Blocks mutate it through the
/// step context; the presentation layer reads it via [`Tape::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tape {
    cells: Vec<u8>,
    pointer: usize,
}

/// Read-only view of the tape for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapeSnapshot {
    pub cells: Vec<u8>,
    pub pointer: usize,
}

impl Tape {
    /// Creates a tape holding a single zero byte, pointer at 0
    pub fn new() -> Self {
        Self {
            cells: vec![0],
            pointer: 0,
        }
    }

    /// Resets to a single zero byte with the pointer at 0
    pub fn reset(&mut self) {
        self.cells.clear();
        self.cells.push(0);
        self.pointer = 0;
    }

    /// Returns the current tape length in bytes
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// The tape always holds at least one byte
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the current pointer position
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Reads the byte at an index; indices past the end read as zero
    /// without growing the tape
    pub fn get(&self, index: usize) -> u8 {
        self.cells.get(index).copied().unwrap_or(0)
    }

    /// Stores a value at an index, growing the tape to cover it
    ///
    /// Gaps created by growth are zero-filled. The value is wrapped into
    /// `[0, 255]`, so negative inputs take the mod-256 residue.
    pub fn set(&mut self, index: usize, value: i64) {
        self.ensure_capacity(index);
        self.cells[index] = wrap_byte(value);
    }

    /// Reads the byte under the pointer, growing the tape to cover it
    pub fn current_value(&mut self) -> u8 {
        self.ensure_capacity(self.pointer);
        self.cells[self.pointer]
    }

    /// Stores a value under the pointer (wrapped mod 256)
    pub fn set_current_value(&mut self, value: i64) {
        self.ensure_capacity(self.pointer);
        self.cells[self.pointer] = wrap_byte(value);
    }

    /// Moves the pointer by a signed delta, clamping at 0
    ///
    /// Growth to cover the new position is deferred until the next
    /// access, so moving far to the right costs nothing until a value is
    /// read or written there.
    pub fn move_pointer(&mut self, delta: i64) {
        let target = self.pointer as i64 + delta;
        self.pointer = target.max(0) as usize;
    }

    /// Sets the pointer to an absolute index (growth deferred)
    pub fn set_pointer(&mut self, index: usize) {
        self.pointer = index;
    }

    /// Removes `count` bytes anchored at the pointer
    ///
    /// If enough room exists forward of the pointer the removal covers
    /// `pointer ..= pointer + count - 1` and the pointer stays at the
    /// removal start. Otherwise the removal anchors backward over
    /// `pointer - count + 1 ..= pointer` (clipped to 0) and the pointer
    /// lands one before the removal start, clamped at 0. Emptying the
    /// tape resets it to a single zero byte.
    pub fn pop_range(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        let len = self.cells.len();
        let (start, end, pointer_after) = if self.pointer + count <= len {
            (self.pointer, self.pointer + count, self.pointer)
        } else {
            let start = self.pointer.saturating_sub(count - 1).min(len);
            let end = (self.pointer + 1).min(len);
            (start, end, start.saturating_sub(1))
        };

        self.cells.drain(start..end);

        if self.cells.is_empty() {
            self.reset();
            return;
        }
        self.pointer = pointer_after.min(self.cells.len() - 1);
    }

    /// Captures the tape contents and pointer for display
    pub fn snapshot(&self) -> TapeSnapshot {
        TapeSnapshot {
            cells: self.cells.clone(),
            pointer: self.pointer,
        }
    }

    fn ensure_capacity(&mut self, index: usize) {
        if index >= self.cells.len() {
            self.cells.resize(index + 1, 0);
        }
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps a signed value into a byte, mod 256
fn wrap_byte(value: i64) -> u8 {
    value.rem_euclid(256) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tape_is_single_zero() {
        let tape = Tape::new();
        assert_eq!(tape.len(), 1);
        assert_eq!(tape.pointer(), 0);
        assert_eq!(tape.get(0), 0);
    }

    #[test]
    fn test_read_past_end_is_zero_without_growth() {
        let tape = Tape::new();
        assert_eq!(tape.get(100), 0);
        assert_eq!(tape.len(), 1);
    }

    #[test]
    fn test_set_grows_and_zero_fills() {
        let mut tape = Tape::new();
        tape.set(4, 7);
        assert_eq!(tape.len(), 5);
        assert_eq!(tape.get(4), 7);
        for index in 1..4 {
            assert_eq!(tape.get(index), 0);
        }
    }

    #[test]
    fn test_values_wrap_mod_256() {
        let mut tape = Tape::new();
        tape.set(0, 300);
        assert_eq!(tape.get(0), 44);
        tape.set(0, -1);
        assert_eq!(tape.get(0), 255);
        tape.set(0, 256);
        assert_eq!(tape.get(0), 0);
        tape.set(0, -300);
        assert_eq!(tape.get(0), 212);
    }

    #[test]
    fn test_pointer_never_negative() {
        let mut tape = Tape::new();
        tape.move_pointer(-5);
        assert_eq!(tape.pointer(), 0);
        tape.move_pointer(3);
        tape.move_pointer(-10);
        assert_eq!(tape.pointer(), 0);
    }

    #[test]
    fn test_pointer_growth_is_deferred() {
        let mut tape = Tape::new();
        tape.move_pointer(9);
        assert_eq!(tape.len(), 1);
        assert_eq!(tape.current_value(), 0);
        assert_eq!(tape.len(), 10);
    }

    #[test]
    fn test_current_value_round_trip() {
        let mut tape = Tape::new();
        tape.move_pointer(2);
        tape.set_current_value(200);
        assert_eq!(tape.current_value(), 200);
        assert_eq!(tape.get(2), 200);
    }

    #[test]
    fn test_pop_range_forward_anchor() {
        let mut tape = Tape::new();
        for (index, value) in [5, 6, 7, 8].iter().enumerate() {
            tape.set(index, *value);
        }
        tape.set_pointer(1);
        tape.pop_range(2);

        // Removed indices 1..=2, pointer stays at removal start
        assert_eq!(tape.snapshot().cells, vec![5, 8]);
        assert_eq!(tape.pointer(), 1);
    }

    #[test]
    fn test_pop_range_backward_anchor() {
        let mut tape = Tape::new();
        for (index, value) in [5, 6, 7, 8].iter().enumerate() {
            tape.set(index, *value);
        }
        tape.set_pointer(3);
        tape.pop_range(2);

        // 3 + 2 > 4, so removal anchors backward over indices 2..=3
        assert_eq!(tape.snapshot().cells, vec![5, 6]);
        assert_eq!(tape.pointer(), 1);
    }

    #[test]
    fn test_pop_range_backward_clips_to_zero() {
        let mut tape = Tape::new();
        for (index, value) in [1, 2, 3].iter().enumerate() {
            tape.set(index, *value);
        }
        tape.set_pointer(2);
        tape.pop_range(5);

        // Removal would cover the whole tape; reset to a single zero
        assert_eq!(tape.snapshot().cells, vec![0]);
        assert_eq!(tape.pointer(), 0);
    }

    #[test]
    fn test_pop_range_emptying_resets() {
        let mut tape = Tape::new();
        tape.set(0, 9);
        tape.pop_range(1);

        assert_eq!(tape.len(), 1);
        assert_eq!(tape.get(0), 0);
        assert_eq!(tape.pointer(), 0);
    }

    #[test]
    fn test_pop_range_zero_is_noop() {
        let mut tape = Tape::new();
        tape.set(3, 9);
        tape.set_pointer(2);
        tape.pop_range(0);

        assert_eq!(tape.len(), 4);
        assert_eq!(tape.pointer(), 2);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut tape = Tape::new();
        tape.set(1, 42);
        tape.move_pointer(1);

        let snapshot = tape.snapshot();
        assert_eq!(snapshot.cells, vec![0, 42]);
        assert_eq!(snapshot.pointer, 1);
    }

    #[test]
    fn test_reset() {
        let mut tape = Tape::new();
        tape.set(5, 9);
        tape.move_pointer(5);
        tape.reset();

        assert_eq!(tape.len(), 1);
        assert_eq!(tape.pointer(), 0);
        assert_eq!(tape.get(0), 0);
    }
}
