//! # Cursor Engine
//!
//! The state machine that drives a cursor across a grid of blocks: run
//! lifecycle (idle, active, paused, fizzling), per-step block
//! evaluation through the registry, pause deadlines, teleport
//! follow-ups and the run event log.
//!
//! ## Philosophy
//!
//! The engine is deterministic given its inputs. Time comes from an
//! injected [`Clock`], randomness from an injected source, and the grid
//! is read-only, so driving the same grid with a simulated clock and a
//! fixed seed replays the same run event for event. Hosts own the loop:
//! the engine exposes a single [`CursorEngine::step`] and never spawns
//! its own timers.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;

pub use clock::{Clock, SimClock, SystemClock};
pub use config::EngineConfig;
pub use engine::{CursorEngine, RunState};
pub use error::EngineError;
pub use events::{FizzleReason, RunEvent};
