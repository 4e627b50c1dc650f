//! The action union handlers answer with

use grid_types::{Cell, Direction};
use serde::{Deserialize, Serialize};

/// What the cursor should do after a block's step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepAction {
    /// Advance toward `next` on this tick
    Move { next: Cell },
    /// Advance toward `next`, then terminate the run
    MoveAndFizzle { next: Cell },
    /// Suspend ticking for `duration_ms`; on resume move to `next` if
    /// given, otherwise settle in place
    Pause {
        duration_ms: u64,
        next: Option<Cell>,
    },
    /// Terminate the run at the current cell
    FizzleInPlace,
    /// Jump the cursor to `to`, then target `next` on the following tick
    Teleport { to: Cell, next: Cell },
}

/// Presentation-only side effect requested by a handler
///
/// The grid stays read-only for the engine; effects are collected per
/// step and republished as run events for the UI to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayEffect {
    /// Rotate a block's rendered facing (the random-direction block spins
    /// itself toward the direction it chose)
    RotateBlock { cell: Cell, direction: Direction },
}
