//! # Block Set
//!
//! The built-in block types and the registry that maps type tags to
//! their step handlers.
//!
//! ## Philosophy
//!
//! Each block type is one small handler implementing the step contract;
//! the registry is the only place that knows the full set. Hosts may
//! register additional types — an unregistered tag is not an error at
//! placement time, it simply fizzles the run when the cursor lands on it.

pub mod checkpoint;
pub mod director;
pub mod empty;
pub mod random_direction;
pub mod registry;
pub mod tape_ops;
pub mod wait;
pub mod wire;

pub use registry::{BlockRegistry, RegistryError};

/// Type tags for the built-in block set
///
/// These match the tags the document format stores, so previously
/// exported machines import unchanged.
pub mod block_types {
    pub const WIRE: &str = "wire";
    pub const DIRECTOR: &str = "director";
    pub const RANDOM_DIRECTION: &str = "randomDirection";
    pub const WAIT: &str = "wait";
    pub const CHECKPOINT: &str = "checkpoint";
    pub const RETURN_CHECKPOINT: &str = "returncheckpoint";
    pub const INCREASE: &str = "increase";
    pub const DECREASE: &str = "decrease";
    pub const NEXT: &str = "next";
    pub const PREVIOUS: &str = "previous";
    pub const POP: &str = "pop";
    pub const JUMP_TO: &str = "jumpTo";
    pub const EMPTY: &str = "empty";
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Shared scaffolding for handler unit tests

    use block_contract::{
        CheckpointDirectory, DisplayEffect, RandomSource, RegistryLookup, SeededRandom,
        StepAction, StepContext, StepError, StepHandler,
    };
    use grid_types::{Block, Cell, GridMap};
    use machine_logger::BufferLogger;
    use tape::Tape;

    pub struct NoHandlers;

    impl RegistryLookup for NoHandlers {
        fn handler(&self, _block_type: &str) -> Option<&dyn StepHandler> {
            None
        }
    }

    /// Holds everything a `StepContext` borrows
    pub struct Harness {
        pub block: Block,
        pub current: Cell,
        pub previous: Option<Cell>,
        pub grid: GridMap,
        pub registry: NoHandlers,
        pub tape: Tape,
        pub checkpoints: CheckpointDirectory,
        pub rng: Box<dyn RandomSource>,
        pub effects: Vec<DisplayEffect>,
        pub logger: BufferLogger,
        pub tick_duration_ms: u64,
    }

    impl Harness {
        pub fn new(block: Block) -> Self {
            let current = block.cell;
            Self {
                block,
                current,
                previous: None,
                grid: GridMap::new(),
                registry: NoHandlers,
                tape: Tape::new(),
                checkpoints: CheckpointDirectory::new(),
                rng: Box::new(SeededRandom::from_seed(1)),
                effects: Vec::new(),
                logger: BufferLogger::new(),
                tick_duration_ms: 50,
            }
        }

        /// Sets the previous cell so direction inference succeeds
        pub fn arriving_from(mut self, previous: Cell) -> Self {
            self.previous = Some(previous);
            self
        }

        pub fn step(&mut self, handler: &dyn StepHandler) -> Result<StepAction, StepError> {
            let mut ctx = StepContext {
                block: &self.block,
                current: self.current,
                previous: self.previous,
                grid: &self.grid,
                registry: &self.registry,
                tape: &mut self.tape,
                checkpoints: &mut self.checkpoints,
                rng: self.rng.as_mut(),
                effects: &mut self.effects,
                logger: &mut self.logger,
                tick_duration_ms: self.tick_duration_ms,
            };
            handler.step(&mut ctx)
        }
    }
}
