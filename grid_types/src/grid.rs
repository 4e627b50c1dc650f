//! Grid store and the lookup boundary the engine consumes

use crate::block::Block;
use crate::cell::Cell;
use std::collections::HashMap;

/// Read-only view of the grid, queried by the engine every tick
///
/// The engine assumes the grid is frozen while a run is in progress; the
/// external editor is responsible for stopping the run before structural
/// edits.
pub trait GridLookup {
    /// Returns the block at a cell, if one is placed there
    fn block_at(&self, cell: Cell) -> Option<&Block>;

    /// Returns true when a cell holds a block
    fn is_occupied(&self, cell: Cell) -> bool {
        self.block_at(cell).is_some()
    }
}

/// Grid store mapping each cell to at most one block
#[derive(Debug, Clone, Default)]
pub struct GridMap {
    blocks: HashMap<Cell, Block>,
}

impl GridMap {
    /// Creates an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a block at its cell, returning the block it displaced
    pub fn insert(&mut self, block: Block) -> Option<Block> {
        self.blocks.insert(block.cell, block)
    }

    /// Removes the block at a cell
    pub fn remove(&mut self, cell: Cell) -> Option<Block> {
        self.blocks.remove(&cell)
    }

    /// Returns the number of placed blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true when no blocks are placed
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates over all placed blocks (serializer use; the engine never
    /// walks the grid)
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    /// Removes all blocks
    pub fn clear(&mut self) {
        self.blocks.clear();
    }
}

impl GridLookup for GridMap {
    fn block_at(&self, cell: Cell) -> Option<&Block> {
        self.blocks.get(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut grid = GridMap::new();
        let cell = Cell::new(1, 2);
        grid.insert(Block::new("wire", cell));

        assert!(grid.is_occupied(cell));
        assert_eq!(grid.block_at(cell).unwrap().block_type.as_str(), "wire");
        assert!(grid.block_at(Cell::new(0, 0)).is_none());
    }

    #[test]
    fn test_one_block_per_cell() {
        let mut grid = GridMap::new();
        let cell = Cell::new(0, 0);
        grid.insert(Block::new("wire", cell));
        let displaced = grid.insert(Block::new("director", cell));

        assert_eq!(displaced.unwrap().block_type.as_str(), "wire");
        assert_eq!(grid.len(), 1);
        assert_eq!(
            grid.block_at(cell).unwrap().block_type.as_str(),
            "director"
        );
    }

    #[test]
    fn test_remove() {
        let mut grid = GridMap::new();
        let cell = Cell::new(3, 3);
        grid.insert(Block::new("empty", cell));

        assert!(grid.remove(cell).is_some());
        assert!(grid.remove(cell).is_none());
        assert!(grid.is_empty());
    }
}
