//! The tape-mutating block family
//!
//! Increase/decrease adjust the byte under the pointer; next/previous
//! move the pointer; pop removes bytes; jump-to repositions the pointer
//! absolutely. All of them propagate straight through and fizzle when
//! the incoming direction cannot be inferred.

use block_contract::{StepAction, StepContext, StepError, StepHandler};
use machine_logger::{LogEntry, LogLevel};

/// Param keys for the family
pub const INCREMENT_AMOUNT: &str = "incrementAmount";
pub const DECREMENT_AMOUNT: &str = "decrementAmount";
pub const NEXT_AMOUNT: &str = "nextAmount";
pub const PREVIOUS_AMOUNT: &str = "previousAmount";
pub const POP_AMOUNT: &str = "popAmount";
pub const JUMP_INDEX: &str = "jumpIndex";
pub const IS_CLAMPED: &str = "isClamped";

/// Shared straight-through tail: the tape mutation already happened,
/// the only question is where the cursor goes next
fn propagate(ctx: &mut StepContext<'_>, label: &str) -> StepAction {
    match ctx.straight_through() {
        Some(next) => StepAction::Move { next },
        None => {
            ctx.logger.log(
                LogEntry::new(
                    LogLevel::Warn,
                    format!("{}: no valid incoming direction", label),
                )
                .with_field("cell", ctx.current.to_string()),
            );
            StepAction::FizzleInPlace
        }
    }
}

/// Adds a configurable signed amount to the byte under the pointer
/// (wrapped mod 256)
#[derive(Debug, Default)]
pub struct Increase;

impl StepHandler for Increase {
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepAction, StepError> {
        let amount = ctx.block.params.get_i64(INCREMENT_AMOUNT).unwrap_or(1);
        let value = ctx.tape.current_value() as i64 + amount;
        ctx.tape.set_current_value(value);
        Ok(propagate(ctx, "increase"))
    }
}

/// Subtracts a configurable signed amount from the byte under the
/// pointer (wrapped mod 256)
#[derive(Debug, Default)]
pub struct Decrease;

impl StepHandler for Decrease {
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepAction, StepError> {
        let amount = ctx.block.params.get_i64(DECREMENT_AMOUNT).unwrap_or(1);
        let value = ctx.tape.current_value() as i64 - amount;
        ctx.tape.set_current_value(value);
        Ok(propagate(ctx, "decrease"))
    }
}

/// Moves the pointer forward by a configurable amount
#[derive(Debug, Default)]
pub struct Next;

impl StepHandler for Next {
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepAction, StepError> {
        let amount = ctx.block.params.get_i64(NEXT_AMOUNT).unwrap_or(1);
        ctx.tape.move_pointer(amount);
        Ok(propagate(ctx, "next"))
    }
}

/// Moves the pointer backward by a configurable amount, clamping at 0
#[derive(Debug, Default)]
pub struct Previous;

impl StepHandler for Previous {
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepAction, StepError> {
        let amount = ctx.block.params.get_i64(PREVIOUS_AMOUNT).unwrap_or(1);
        ctx.tape.move_pointer(-amount);
        Ok(propagate(ctx, "previous"))
    }
}

/// Removes a configurable count of bytes anchored at the pointer
#[derive(Debug, Default)]
pub struct Pop;

impl StepHandler for Pop {
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepAction, StepError> {
        let count = ctx.block.params.get_u64(POP_AMOUNT).unwrap_or(1);
        ctx.tape.pop_range(count as usize);
        Ok(propagate(ctx, "pop"))
    }
}

/// Sets the pointer to a configured absolute index
///
/// Negative targets clip to 0. With `isClamped` (the default) the target
/// additionally clips to 255; unclamped jumps may point anywhere
/// non-negative, with tape growth deferred until the next access.
#[derive(Debug, Default)]
pub struct JumpTo;

impl StepHandler for JumpTo {
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepAction, StepError> {
        let target = ctx.block.params.get_i64(JUMP_INDEX).unwrap_or(0).max(0);
        let clamped = ctx.block.params.get_bool(IS_CLAMPED).unwrap_or(true);
        let target = if clamped { target.min(255) } else { target };
        ctx.tape.set_pointer(target as usize);
        Ok(propagate(ctx, "jumpTo"))
    }
}
