//! The cursor state machine
//!
//! One engine drives one cursor over a read-only grid. Each call to
//! [`CursorEngine::step`] evaluates the block under the cursor through
//! the registry, applies the action the handler returns, and records
//! the transition in the run event log. The engine never mutates the
//! grid; the tape, the checkpoint directory and the event log are the
//! only state it owns.

use crate::clock::Clock;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::events::{FizzleReason, RunEvent};
use block_contract::{
    CheckpointDirectory, DisplayEffect, RandomSource, RegistryLookup, SeededRandom, StepAction,
    StepContext,
};
use grid_types::{Cell, GridLookup, RunId};
use machine_logger::{LogEntry, LogLevel, Logger, NullLogger};
use serde::{Deserialize, Serialize};
use tape::{Tape, TapeSnapshot};

/// Lifecycle states of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// No run in progress
    Idle,
    /// The cursor is evaluating blocks
    Active,
    /// The cursor is holding in place until a deadline passes
    Paused,
    /// The run just ended; one more step settles back to `Idle` so a
    /// host has a frame to show the fizzle
    Fizzling,
}

/// A pause in flight: when to wake and where to go afterwards
#[derive(Debug, Clone, Copy)]
struct PendingPause {
    deadline_ms: u64,
    next: Option<Cell>,
}

/// Drives a cursor across a grid of blocks
///
/// The clock, randomness source and logger are injected so runs are
/// reproducible: a simulated clock plus a seeded random source yields
/// the same event log every time.
pub struct CursorEngine {
    config: EngineConfig,
    state: RunState,
    run_id: RunId,
    position: Cell,
    previous: Option<Cell>,
    tape: Tape,
    checkpoints: CheckpointDirectory,
    pause: Option<PendingPause>,
    pending_move: Option<Cell>,
    events: Vec<RunEvent>,
    clock: Box<dyn Clock>,
    rng: Box<dyn RandomSource>,
    logger: Box<dyn Logger>,
}

impl CursorEngine {
    /// Creates an idle engine with default configuration, the system
    /// clock, entropy-seeded randomness and no log sink
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            state: RunState::Idle,
            run_id: RunId::new(),
            position: Cell::new(0, 0),
            previous: None,
            tape: Tape::new(),
            checkpoints: CheckpointDirectory::new(),
            pause: None,
            pending_move: None,
            events: Vec::new(),
            clock: Box::new(crate::clock::SystemClock::new()),
            rng: Box::new(SeededRandom::from_entropy()),
            logger: Box::new(NullLogger),
        }
    }

    /// Replaces the configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the clock
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the randomness source
    pub fn with_random(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Replaces the log sink
    pub fn with_logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    /// Begins a run at the given cell
    ///
    /// Fails unless the engine is idle; a fizzling run must settle (one
    /// more step, or a `stop`) first. The tape deliberately survives
    /// from the previous run; only [`CursorEngine::reset`] clears it.
    /// The event log and checkpoint directory start fresh.
    pub fn start(&mut self, cell: Cell) -> Result<RunId, EngineError> {
        if self.state != RunState::Idle {
            return Err(EngineError::AlreadyRunning);
        }
        self.run_id = RunId::new();
        self.state = RunState::Active;
        self.position = cell;
        self.previous = None;
        self.pause = None;
        self.pending_move = None;
        self.checkpoints.clear();
        self.events.clear();
        self.logger.log(
            LogEntry::new(LogLevel::Info, "run started")
                .with_field("run_id", self.run_id.to_string())
                .with_field("cell", cell.to_string()),
        );
        let event = RunEvent::Started {
            run_id: self.run_id,
            cell,
            at_ms: self.clock.now_ms(),
        };
        self.events.push(event);
        Ok(self.run_id)
    }

    /// Stops the current run, if any
    ///
    /// Idempotent; stopping an idle engine does nothing.
    pub fn stop(&mut self) {
        if self.state == RunState::Idle {
            return;
        }
        self.state = RunState::Idle;
        self.pause = None;
        self.pending_move = None;
        self.events.push(RunEvent::Stopped {
            run_id: self.run_id,
            at_ms: self.clock.now_ms(),
        });
    }

    /// Stops the run and clears the tape, returning the cursor to the
    /// given cell
    pub fn reset(&mut self, cell: Cell) {
        self.stop();
        self.tape.reset();
        self.checkpoints.clear();
        self.position = cell;
        self.previous = None;
    }

    /// Advances the run by one step
    ///
    /// Returns `true` while the run is still alive after the step and
    /// `false` once it is not: idle engines, the step that fizzles, and
    /// the settling step out of `Fizzling`. A paused cursor returns
    /// `true` without evaluating anything until its deadline passes.
    pub fn step(&mut self, grid: &dyn GridLookup, registry: &dyn RegistryLookup) -> bool {
        match self.state {
            RunState::Idle => return false,
            RunState::Fizzling => {
                self.state = RunState::Idle;
                return false;
            }
            RunState::Paused => return self.wake_if_due(),
            RunState::Active => {}
        }

        // A teleport landing consumes its queued follow-up before the
        // landing block is evaluated.
        if let Some(next) = self.pending_move.take() {
            self.apply_move(next);
            return true;
        }

        let Some(block) = grid.block_at(self.position) else {
            self.fizzle(FizzleReason::EmptyCell);
            return false;
        };
        let Some(handler) = registry.handler(block.block_type.as_str()) else {
            self.logger.log(
                LogEntry::new(LogLevel::Warn, "no handler for block type")
                    .with_field("block_type", block.block_type.to_string())
                    .with_field("cell", self.position.to_string()),
            );
            self.fizzle(FizzleReason::UnhandledType);
            return false;
        };

        let mut effects = Vec::new();
        let result = {
            let mut ctx = StepContext {
                block,
                current: self.position,
                previous: self.previous,
                grid,
                registry,
                tape: &mut self.tape,
                checkpoints: &mut self.checkpoints,
                rng: self.rng.as_mut(),
                effects: &mut effects,
                logger: self.logger.as_mut(),
                tick_duration_ms: self.config.tick_duration_ms,
            };
            handler.step(&mut ctx)
        };
        self.publish_effects(effects);

        match result {
            Ok(action) => self.apply_action(action),
            Err(err) => {
                self.logger.log(
                    LogEntry::new(LogLevel::Error, "handler failed")
                        .with_field("block_type", block.block_type.to_string())
                        .with_field("cell", self.position.to_string())
                        .with_field("error", err.to_string()),
                );
                self.fizzle(FizzleReason::HandlerFailed);
                false
            }
        }
    }

    /// Returns true while a run is active or paused
    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Active | RunState::Paused)
    }

    /// The current lifecycle state
    pub fn run_state(&self) -> RunState {
        self.state
    }

    /// The current run's ID
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// The cursor's current cell
    pub fn position(&self) -> Cell {
        self.position
    }

    /// The cursor's previous cell, if it has moved this run
    pub fn previous_position(&self) -> Option<Cell> {
        self.previous
    }

    /// Read access to the tape
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// A point-in-time copy of the tape for display
    pub fn tape_snapshot(&self) -> TapeSnapshot {
        self.tape.snapshot()
    }

    /// Checkpoints visited so far this run
    pub fn checkpoints(&self) -> &CheckpointDirectory {
        &self.checkpoints
    }

    /// The run event log, oldest first
    pub fn events(&self) -> &[RunEvent] {
        &self.events
    }

    /// Drops all recorded events
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// The engine's configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Checks a pause deadline, resuming the run once it has passed
    fn wake_if_due(&mut self) -> bool {
        let now = self.clock.now_ms();
        let queued = match self.pause {
            Some(pause) if now < pause.deadline_ms => return true,
            Some(pause) => pause.next,
            None => None,
        };
        self.pause = None;
        self.state = RunState::Active;
        self.events.push(RunEvent::Resumed {
            run_id: self.run_id,
            cell: self.position,
            at_ms: now,
        });
        match queued {
            Some(next) => self.apply_move(next),
            // A pause with nowhere to go settles in place; the cursor
            // stays alive and re-evaluates its block next step.
            None => self.previous = Some(self.position),
        }
        true
    }

    fn apply_action(&mut self, action: StepAction) -> bool {
        match action {
            StepAction::Move { next } => {
                self.apply_move(next);
                true
            }
            StepAction::MoveAndFizzle { next } => {
                self.apply_move(next);
                self.fizzle(FizzleReason::BlockRequested);
                false
            }
            StepAction::Pause { duration_ms, next } => {
                if duration_ms == 0 {
                    self.fizzle(FizzleReason::MalformedAction);
                    return false;
                }
                let now = self.clock.now_ms();
                self.pause = Some(PendingPause {
                    deadline_ms: now + duration_ms,
                    next,
                });
                self.state = RunState::Paused;
                self.events.push(RunEvent::Paused {
                    run_id: self.run_id,
                    cell: self.position,
                    duration_ms,
                    at_ms: now,
                });
                true
            }
            StepAction::FizzleInPlace => {
                self.fizzle(FizzleReason::BlockRequested);
                false
            }
            StepAction::Teleport { to, next } => {
                self.events.push(RunEvent::Teleported {
                    run_id: self.run_id,
                    from: self.position,
                    to,
                    at_ms: self.clock.now_ms(),
                });
                // The landing has no incoming direction of its own; the
                // queued follow-up carries the cursor onward next step.
                self.previous = Some(to);
                self.position = to;
                self.pending_move = Some(next);
                true
            }
        }
    }

    fn apply_move(&mut self, next: Cell) {
        self.events.push(RunEvent::Moved {
            run_id: self.run_id,
            from: self.position,
            to: next,
            at_ms: self.clock.now_ms(),
        });
        self.previous = Some(self.position);
        self.position = next;
    }

    fn fizzle(&mut self, reason: FizzleReason) {
        self.logger.log(
            LogEntry::new(LogLevel::Warn, "run fizzled")
                .with_field("reason", reason.to_string())
                .with_field("cell", self.position.to_string()),
        );
        self.events.push(RunEvent::Fizzled {
            run_id: self.run_id,
            cell: self.position,
            reason,
            at_ms: self.clock.now_ms(),
        });
        self.previous = Some(self.position);
        self.state = RunState::Fizzling;
    }

    fn publish_effects(&mut self, effects: Vec<DisplayEffect>) {
        for effect in effects {
            match effect {
                DisplayEffect::RotateBlock { cell, direction } => {
                    self.events.push(RunEvent::BlockRotated {
                        run_id: self.run_id,
                        cell,
                        direction,
                        at_ms: self.clock.now_ms(),
                    });
                }
            }
        }
    }
}

impl Default for CursorEngine {
    fn default() -> Self {
        Self::new()
    }
}
