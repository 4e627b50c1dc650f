//! Run event log
//!
//! Every observable transition the engine makes is appended to an
//! in-memory event log, timestamped with the injected clock. The log is
//! the audit trail for a run: tests assert against it, and hosts can
//! replay it to animate what happened.

use grid_types::{Cell, Direction, RunId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FizzleReason {
    /// The cursor stood on a cell with no block
    EmptyCell,
    /// The block's type tag had no registered handler
    UnhandledType,
    /// A handler returned a structurally invalid action, such as a
    /// zero-duration pause
    MalformedAction,
    /// A handler returned an error
    HandlerFailed,
    /// A handler asked for the fizzle itself (terminal blocks, dead
    /// ends, unreachable directions)
    BlockRequested,
}

impl fmt::Display for FizzleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FizzleReason::EmptyCell => "empty-cell",
            FizzleReason::UnhandledType => "unhandled-type",
            FizzleReason::MalformedAction => "malformed-action",
            FizzleReason::HandlerFailed => "handler-failed",
            FizzleReason::BlockRequested => "block-requested",
        };
        write!(f, "{}", label)
    }
}

/// One observable engine transition
///
/// `at_ms` is the injected clock's reading when the transition was
/// recorded, so event timelines are deterministic under a simulated
/// clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEvent {
    /// A run began at the given cell
    Started {
        run_id: RunId,
        cell: Cell,
        at_ms: u64,
    },
    /// The cursor moved one cell
    Moved {
        run_id: RunId,
        from: Cell,
        to: Cell,
        at_ms: u64,
    },
    /// The cursor paused in place until the deadline passes
    Paused {
        run_id: RunId,
        cell: Cell,
        duration_ms: u64,
        at_ms: u64,
    },
    /// A pause deadline elapsed and the cursor woke
    Resumed {
        run_id: RunId,
        cell: Cell,
        at_ms: u64,
    },
    /// The cursor jumped to a non-adjacent cell
    Teleported {
        run_id: RunId,
        from: Cell,
        to: Cell,
        at_ms: u64,
    },
    /// A block asked the host to redraw itself facing a new direction
    BlockRotated {
        run_id: RunId,
        cell: Cell,
        direction: Direction,
        at_ms: u64,
    },
    /// The run ended
    Fizzled {
        run_id: RunId,
        cell: Cell,
        reason: FizzleReason,
        at_ms: u64,
    },
    /// The run was stopped from outside
    Stopped { run_id: RunId, at_ms: u64 },
}

impl RunEvent {
    /// The run this event belongs to
    pub fn run_id(&self) -> RunId {
        match self {
            RunEvent::Started { run_id, .. }
            | RunEvent::Moved { run_id, .. }
            | RunEvent::Paused { run_id, .. }
            | RunEvent::Resumed { run_id, .. }
            | RunEvent::Teleported { run_id, .. }
            | RunEvent::BlockRotated { run_id, .. }
            | RunEvent::Fizzled { run_id, .. }
            | RunEvent::Stopped { run_id, .. } => *run_id,
        }
    }
}
