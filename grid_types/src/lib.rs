//! # Grid Types
//!
//! Shared vocabulary for the grid machine: cell coordinates, the
//! four-direction table, placed blocks and their opaque parameters, the
//! grid store, run identifiers, and the persisted machine document.
//!
//! ## Philosophy
//!
//! - **Strongly-typed identifiers**: cells, block types and runs are
//!   newtypes, not bare strings or tuples.
//! - **Opaque params stay opaque**: block parameters are plain key/value
//!   data that round-trip through serialization untouched; typed access
//!   is a convenience layered on top, never a schema.
//! - **The grid is data**: placement and lookup live here; what a block
//!   *does* when the cursor lands on it is defined elsewhere.

pub mod block;
pub mod cell;
pub mod document;
pub mod grid;
pub mod ids;

pub use block::{Block, BlockParams, BlockType};
pub use cell::{Cell, Direction};
pub use document::{BlockRecord, DocumentVersion, MachineDocument};
pub use grid::{GridLookup, GridMap};
pub use ids::RunId;
