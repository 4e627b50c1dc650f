//! Wait: timed pause before continuing

use block_contract::{StepAction, StepContext, StepError, StepHandler};
use machine_logger::{LogEntry, LogLevel};

/// Param key for the number of ticks to wait
pub const WAIT_TICKS: &str = "waitTicks";

/// Ticks waited when the param is missing or zero
pub const DEFAULT_WAIT_TICKS: u64 = 20;

/// Suspends the cursor for `waitTicks * tick_duration_ms` milliseconds
///
/// When the incoming direction is inferable the pause carries the
/// onward cell and the cursor resumes moving once the deadline elapses.
/// When it is not, the pause carries no onward cell: the cursor settles
/// in place after the deadline and the run dangles rather than ending.
///
/// A configured `waitTicks` of zero reads as the default, not as a
/// zero-length pause.
#[derive(Debug, Default)]
pub struct Wait;

impl StepHandler for Wait {
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepAction, StepError> {
        let ticks = ctx
            .block
            .params
            .get_u64(WAIT_TICKS)
            .filter(|ticks| *ticks > 0)
            .unwrap_or(DEFAULT_WAIT_TICKS);
        let duration_ms = ticks * ctx.tick_duration_ms;

        let next = ctx.straight_through();
        if next.is_none() {
            ctx.logger.log(
                LogEntry::new(LogLevel::Warn, "wait: no continuation path after pause")
                    .with_field("cell", ctx.current.to_string())
                    .with_field("duration_ms", duration_ms.to_string()),
            );
        }

        Ok(StepAction::Pause { duration_ms, next })
    }
}
