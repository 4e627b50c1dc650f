//! Per-run checkpoint directory
//!
//! The "last visited checkpoint" is a small registry owned by the
//! engine's run context and passed to handlers explicitly — never
//! process-wide state — so concurrent machines (and tests) cannot bleed
//! into each other.

use grid_types::Cell;
use std::collections::HashMap;

/// The most recently visited checkpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointBookmark {
    pub name: String,
    pub cell: Cell,
}

/// Registry of checkpoint names to last-known positions
///
/// Populated as the cursor passes checkpoint blocks; lifetime is one run.
/// A name visited twice keeps its most recent position.
#[derive(Debug, Clone, Default)]
pub struct CheckpointDirectory {
    positions: HashMap<String, Cell>,
    last_visited: Option<CheckpointBookmark>,
}

impl CheckpointDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a checkpoint visit
    pub fn record(&mut self, name: impl Into<String>, cell: Cell) {
        let name = name.into();
        self.positions.insert(name.clone(), cell);
        self.last_visited = Some(CheckpointBookmark { name, cell });
    }

    /// Resolves a checkpoint's position by name
    pub fn resolve(&self, name: &str) -> Option<Cell> {
        self.positions.get(name).copied()
    }

    /// Returns the most recently visited checkpoint
    pub fn last_visited(&self) -> Option<&CheckpointBookmark> {
        self.last_visited.as_ref()
    }

    /// Forgets all recorded checkpoints (new run)
    pub fn clear(&mut self) {
        self.positions.clear();
        self.last_visited = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_resolve() {
        let mut directory = CheckpointDirectory::new();
        directory.record("alpha", Cell::new(2, 3));

        assert_eq!(directory.resolve("alpha"), Some(Cell::new(2, 3)));
        assert_eq!(directory.resolve("beta"), None);
    }

    #[test]
    fn test_last_visited_tracks_most_recent() {
        let mut directory = CheckpointDirectory::new();
        assert!(directory.last_visited().is_none());

        directory.record("alpha", Cell::new(0, 0));
        directory.record("beta", Cell::new(1, 1));

        let bookmark = directory.last_visited().unwrap();
        assert_eq!(bookmark.name, "beta");
        assert_eq!(bookmark.cell, Cell::new(1, 1));
    }

    #[test]
    fn test_revisit_updates_position() {
        let mut directory = CheckpointDirectory::new();
        directory.record("alpha", Cell::new(0, 0));
        directory.record("alpha", Cell::new(5, 5));

        assert_eq!(directory.resolve("alpha"), Some(Cell::new(5, 5)));
    }

    #[test]
    fn test_clear() {
        let mut directory = CheckpointDirectory::new();
        directory.record("alpha", Cell::new(0, 0));
        directory.clear();

        assert_eq!(directory.resolve("alpha"), None);
        assert!(directory.last_visited().is_none());
    }
}
