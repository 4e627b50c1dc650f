//! The context a step handler receives

use crate::action::DisplayEffect;
use crate::checkpoint::CheckpointDirectory;
use crate::random::RandomSource;
use crate::RegistryLookup;
use grid_types::{Block, Cell, Direction, GridLookup};
use machine_logger::Logger;
use tape::Tape;

/// Everything a block may consult or mutate during one step
///
/// The grid and registry are read-only; the tape, checkpoint directory
/// and effect list are the only mutation channels. `previous` is `None`
/// exactly on the first step of a run.
pub struct StepContext<'a> {
    /// The block the cursor is standing on
    pub block: &'a Block,
    /// The cursor's current cell
    pub current: Cell,
    /// Where the cursor stood last tick, if anywhere
    pub previous: Option<Cell>,
    /// Read-only grid view
    pub grid: &'a dyn GridLookup,
    /// Handler lookup, for blocks that consult other block types
    pub registry: &'a dyn RegistryLookup,
    /// The run's byte tape
    pub tape: &'a mut Tape,
    /// Checkpoints visited so far this run
    pub checkpoints: &'a mut CheckpointDirectory,
    /// Injected randomness
    pub rng: &'a mut dyn RandomSource,
    /// Presentation-only effects requested this step
    pub effects: &'a mut Vec<DisplayEffect>,
    /// Diagnostic sink
    pub logger: &'a mut dyn Logger,
    /// Milliseconds per simulation tick (for wait blocks)
    pub tick_duration_ms: u64,
}

impl<'a> StepContext<'a> {
    /// Infers the direction the cursor arrived from
    ///
    /// `None` when there is no previous position (first step of a run) or
    /// the last transition was not exactly one unit step — a teleport
    /// landing, a diagonal, or a degenerate zero move. Blocks that
    /// propagate straight through treat `None` as a dead end.
    pub fn incoming_direction(&self) -> Option<Direction> {
        let previous = self.previous?;
        let (dx, dy) = self.current - previous;
        Direction::from_delta(dx, dy)
    }

    /// The cell one step onward in the incoming direction
    pub fn straight_through(&self) -> Option<Cell> {
        self.incoming_direction()
            .map(|direction| self.current.step(direction))
    }
}
