//! # Machine Scenario Tests
//!
//! End-to-end runs driven through the public surface of the workspace:
//! a grid, the standard block registry and a cursor engine on a
//! simulated clock.
//!
//! ## Philosophy
//!
//! - **Whole-machine behavior**: each test lays out a small program and
//!   asserts what the run does, not how any one handler did it
//! - **Deterministic by construction**: simulated clocks and seeded or
//!   scripted randomness, so a failing scenario replays exactly
//! - **Documents are programs**: import scenarios run grids that went
//!   through the persisted document format first

pub mod documents;
pub mod runs;
pub mod timing;

/// Shared scenario scaffolding
pub mod test_helpers {
    use block_contract::SeededRandom;
    use cursor_engine::{CursorEngine, SimClock};
    use grid_types::{Block, GridMap};

    /// Builds a grid from a list of blocks
    pub fn grid_with(blocks: Vec<Block>) -> GridMap {
        let mut grid = GridMap::new();
        for block in blocks {
            grid.insert(block);
        }
        grid
    }

    /// An engine on a simulated clock with a fixed random seed
    pub fn deterministic_engine(clock: SimClock) -> CursorEngine {
        CursorEngine::new()
            .with_clock(clock)
            .with_random(SeededRandom::from_seed(42))
    }

    /// Drives the engine until the run dies or the step limit trips
    ///
    /// Returns the number of steps taken. Panics past the limit so a
    /// looping scenario fails instead of hanging.
    pub fn run_to_completion(
        engine: &mut CursorEngine,
        grid: &GridMap,
        registry: &dyn block_contract::RegistryLookup,
        limit: usize,
    ) -> usize {
        for taken in 1..=limit {
            if !engine.step(grid, registry) {
                return taken;
            }
        }
        panic!("run did not complete within {} steps", limit);
    }
}
