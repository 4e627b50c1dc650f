//! Millisecond clock seam
//!
//! Pause deadlines are checked against an injected clock rather than the
//! wall clock directly, so tests control time explicitly and runs are
//! reproducible.

use std::cell::Cell as StdCell;
use std::rc::Rc;
use std::time::Instant;

/// Source of monotonic milliseconds
pub trait Clock {
    /// Returns elapsed milliseconds since the clock's origin
    ///
    /// Must be monotonic and non-blocking. The origin is
    /// implementation-defined; only differences are meaningful.
    fn now_ms(&self) -> u64;
}

/// Wall-clock implementation for real hosts
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock with its origin at construction time
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Simulated clock with controllable time progression
///
/// Only advances when explicitly told to. Cloning yields a handle onto
/// the same underlying time, so a test can hand one clone to the engine
/// and keep another to drive it.
///
/// # Examples
///
/// ```
/// use cursor_engine::{Clock, SimClock};
///
/// let clock = SimClock::new();
/// let handle = clock.clone();
/// assert_eq!(clock.now_ms(), 0);
///
/// handle.advance_ms(100);
/// assert_eq!(clock.now_ms(), 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    now: Rc<StdCell<u64>>,
}

impl SimClock {
    /// Creates a simulated clock starting at 0 ms
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by the given milliseconds
    pub fn advance_ms(&self, delta: u64) {
        self.now.set(self.now.get().saturating_add(delta));
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
