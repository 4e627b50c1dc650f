//! Director: fixed-facing redirection

use block_contract::{StepAction, StepContext, StepError, StepHandler};
use grid_types::Direction;

/// Param key for the facing index into [`Direction::ALL`]
pub const DIR_INDEX: &str = "dirIndex";

/// Sends the cursor in the block's configured facing direction
///
/// Unlike the straight-through family, a director ignores where the
/// cursor came from; it works even on the first step of a run.
#[derive(Debug, Default)]
pub struct Director;

impl StepHandler for Director {
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepAction, StepError> {
        let index = ctx.block.params.get_i64(DIR_INDEX).unwrap_or(0);
        let direction = usize::try_from(index)
            .ok()
            .and_then(Direction::from_index)
            .ok_or_else(|| {
                StepError::invalid_param(DIR_INDEX, format!("no direction at index {}", index))
            })?;

        Ok(StepAction::Move {
            next: ctx.current.step(direction),
        })
    }
}
