//! Empty: terminal block

use block_contract::{StepAction, StepContext, StepError, StepHandler};
use machine_logger::{LogEntry, LogLevel};

/// Always ends the run where the cursor stands
#[derive(Debug, Default)]
pub struct Empty;

impl StepHandler for Empty {
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepAction, StepError> {
        ctx.logger.log(
            LogEntry::new(LogLevel::Info, "empty: stopping cursor")
                .with_field("cell", ctx.current.to_string()),
        );
        Ok(StepAction::FizzleInPlace)
    }
}
