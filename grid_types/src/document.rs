//! Persisted machine document schema
//!
//! The import/export serializer lives outside this workspace; this module
//! only pins the document shape so block params keep round-tripping as
//! plain key/value data. The engine never reads or writes documents.

use crate::block::{Block, BlockParams, BlockType};
use crate::cell::Cell;
use crate::grid::{GridLookup, GridMap};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version tag for the machine document format
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentVersion(String);

impl DocumentVersion {
    /// The current document format version
    pub const CURRENT: &'static str = "1.0.0";

    /// Creates a version tag
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// Returns the version as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the current format version
    pub fn current() -> Self {
        Self::new(Self::CURRENT)
    }
}

impl fmt::Display for DocumentVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One block entry in a machine document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Grid cell the block occupies
    pub cell: Cell,
    /// Type tag, resolved against the registry on import
    pub block_type: BlockType,
    /// Opaque per-type configuration
    #[serde(default)]
    pub params: BlockParams,
}

/// A complete exported machine
///
/// The timestamp is supplied by the caller in ISO-8601 form; this crate
/// does not read the system clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineDocument {
    /// Document format version
    pub version: DocumentVersion,
    /// Export time, ISO-8601
    pub timestamp: String,
    /// All placed blocks
    pub blocks: Vec<BlockRecord>,
}

impl MachineDocument {
    /// Captures the current grid contents as a document
    pub fn from_grid(grid: &GridMap, timestamp: impl Into<String>) -> Self {
        let mut blocks: Vec<BlockRecord> = grid
            .iter()
            .map(|block| BlockRecord {
                cell: block.cell,
                block_type: block.block_type.clone(),
                params: block.params.clone(),
            })
            .collect();
        // Deterministic export order regardless of hash iteration
        blocks.sort_by_key(|record| (record.cell.y, record.cell.x));

        Self {
            version: DocumentVersion::current(),
            timestamp: timestamp.into(),
            blocks,
        }
    }

    /// Rebuilds a grid from this document
    ///
    /// Later entries for an already-occupied cell are skipped; the number
    /// of skipped records is returned so the importer can surface it.
    pub fn populate_grid(&self) -> (GridMap, usize) {
        let mut grid = GridMap::new();
        let mut skipped = 0;
        for record in &self.blocks {
            if grid.is_occupied(record.cell) {
                skipped += 1;
                continue;
            }
            grid.insert(Block::with_params(
                record.block_type.clone(),
                record.cell,
                record.params.clone(),
            ));
        }
        (grid, skipped)
    }
}
