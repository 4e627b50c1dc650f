//! # Block Contract
//!
//! The polymorphic step contract every block type implements: the action
//! union a handler answers with, the context it receives, and the seams
//! (randomness, checkpoints, display effects) that keep handlers pure
//! with respect to everything but the tape.
//!
//! ## Philosophy
//!
//! - **Outcomes are data, not control flow**: a handler never throws to
//!   steer the cursor; it returns a [`StepAction`]. Errors are reserved
//!   for genuinely broken handlers and are caught once at the engine
//!   boundary.
//! - **No ambient authority**: handlers see exactly what the context
//!   hands them — the grid read-only, the tape mutable, an injected
//!   random source. No globals, no process-wide state.
//! - **Determinism enables thorough testing**: no randomness unless
//!   explicitly seeded.

pub mod action;
pub mod checkpoint;
pub mod context;
pub mod error;
pub mod random;

pub use action::{DisplayEffect, StepAction};
pub use checkpoint::{CheckpointBookmark, CheckpointDirectory};
pub use context::StepContext;
pub use error::StepError;
pub use random::{RandomSource, SeededRandom, SequenceRandom};

/// Per-block step logic
///
/// Invoked by the engine each tick for the block under the cursor.
/// Implementations must be deterministic given the context (randomness
/// flows through `ctx.rng`).
pub trait StepHandler {
    /// Decides the cursor's next action
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepAction, StepError>;
}

/// Handler lookup boundary the engine consumes
pub trait RegistryLookup {
    /// Returns the step handler for a block type tag, if registered
    fn handler(&self, block_type: &str) -> Option<&dyn StepHandler>;
}
