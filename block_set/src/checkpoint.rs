//! Checkpoint and return-to-checkpoint: bookmark-and-jump control transfer

use block_contract::{StepAction, StepContext, StepError, StepHandler};
use machine_logger::{LogEntry, LogLevel};

/// Param key naming a checkpoint block
pub const CHECKPOINT_NAME: &str = "checkpointName";

/// Param key on a return block selecting its target by name
pub const TARGET_CHECKPOINT: &str = "targetCheckpoint";

/// Name used when a checkpoint block carries none
pub const UNNAMED: &str = "unnamed";

/// Records itself in the run's checkpoint directory, then propagates
/// straight through
#[derive(Debug, Default)]
pub struct Checkpoint;

impl StepHandler for Checkpoint {
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepAction, StepError> {
        let name = ctx
            .block
            .params
            .get_str(CHECKPOINT_NAME)
            .unwrap_or(UNNAMED)
            .to_string();
        ctx.checkpoints.record(name, ctx.current);

        match ctx.straight_through() {
            Some(next) => Ok(StepAction::Move { next }),
            None => {
                ctx.logger.log(
                    LogEntry::new(LogLevel::Warn, "checkpoint: no valid incoming direction")
                        .with_field("cell", ctx.current.to_string()),
                );
                Ok(StepAction::FizzleInPlace)
            }
        }
    }
}

/// Teleports the cursor back to a checkpoint
///
/// Resolution order: the explicit `targetCheckpoint` name when set,
/// otherwise the last-visited bookmark. A target that cannot be resolved
/// is recoverable — the block warns and falls back to straight-through
/// propagation instead of fizzling. When resolved, the cursor jumps to
/// the checkpoint cell and continues in its incoming direction (or
/// re-evaluates at the checkpoint when no direction is inferable).
#[derive(Debug, Default)]
pub struct ReturnCheckpoint;

impl StepHandler for ReturnCheckpoint {
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepAction, StepError> {
        let target_name = ctx
            .block
            .params
            .get_str(TARGET_CHECKPOINT)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| {
                ctx.checkpoints
                    .last_visited()
                    .map(|bookmark| bookmark.name.clone())
            });

        let target_cell =
            target_name.as_deref().and_then(|name| ctx.checkpoints.resolve(name));

        let Some(to) = target_cell else {
            ctx.logger.log(
                LogEntry::new(
                    LogLevel::Warn,
                    "returncheckpoint: target not found, continuing straight through",
                )
                .with_field("cell", ctx.current.to_string())
                .with_field("target", target_name.unwrap_or_else(|| "<none>".into())),
            );
            return Ok(match ctx.straight_through() {
                Some(next) => StepAction::Move { next },
                None => StepAction::FizzleInPlace,
            });
        };

        let next = match ctx.incoming_direction() {
            Some(direction) => to.step(direction),
            None => to,
        };
        Ok(StepAction::Teleport { to, next })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Harness;
    use grid_types::{Block, BlockParams, Cell};

    #[test]
    fn test_checkpoint_records_and_propagates() {
        let block = Block::with_params(
            "checkpoint",
            Cell::new(2, 0),
            BlockParams::new().with(CHECKPOINT_NAME, "alpha"),
        );
        let mut harness = Harness::new(block).arriving_from(Cell::new(1, 0));

        let action = harness.step(&Checkpoint).unwrap();
        assert_eq!(
            action,
            StepAction::Move {
                next: Cell::new(3, 0)
            }
        );
        assert_eq!(harness.checkpoints.resolve("alpha"), Some(Cell::new(2, 0)));
        assert_eq!(harness.checkpoints.last_visited().unwrap().name, "alpha");
    }

    #[test]
    fn test_unnamed_checkpoint_still_records() {
        let mut harness =
            Harness::new(Block::new("checkpoint", Cell::new(0, 0))).arriving_from(Cell::new(0, 1));
        harness.step(&Checkpoint).unwrap();
        assert_eq!(harness.checkpoints.resolve(UNNAMED), Some(Cell::new(0, 0)));
    }

    #[test]
    fn test_checkpoint_fizzles_without_direction() {
        let mut harness = Harness::new(Block::new("checkpoint", Cell::new(0, 0)));
        let action = harness.step(&Checkpoint).unwrap();
        assert_eq!(action, StepAction::FizzleInPlace);
        // The visit is still recorded before the dead end is detected
        assert!(harness.checkpoints.last_visited().is_some());
    }

    #[test]
    fn test_return_teleports_to_explicit_target() {
        let block = Block::with_params(
            "returncheckpoint",
            Cell::new(5, 0),
            BlockParams::new().with(TARGET_CHECKPOINT, "alpha"),
        );
        let mut harness = Harness::new(block).arriving_from(Cell::new(4, 0));
        harness.checkpoints.record("alpha", Cell::new(1, 1));
        harness.checkpoints.record("beta", Cell::new(9, 9));

        let action = harness.step(&ReturnCheckpoint).unwrap();
        assert_eq!(
            action,
            StepAction::Teleport {
                to: Cell::new(1, 1),
                next: Cell::new(2, 1),
            }
        );
    }

    #[test]
    fn test_explicit_target_wins_over_bookmark() {
        let block = Block::with_params(
            "returncheckpoint",
            Cell::new(5, 0),
            BlockParams::new().with(TARGET_CHECKPOINT, "alpha"),
        );
        let mut harness = Harness::new(block).arriving_from(Cell::new(4, 0));
        harness.checkpoints.record("alpha", Cell::new(1, 1));
        // beta is the most recent visit, but the explicit name wins
        harness.checkpoints.record("beta", Cell::new(9, 9));

        let action = harness.step(&ReturnCheckpoint).unwrap();
        assert!(matches!(
            action,
            StepAction::Teleport { to, .. } if to == Cell::new(1, 1)
        ));
    }

    #[test]
    fn test_return_uses_bookmark_when_no_target_set() {
        let mut harness = Harness::new(Block::new("returncheckpoint", Cell::new(5, 0)))
            .arriving_from(Cell::new(4, 0));
        harness.checkpoints.record("beta", Cell::new(3, 3));

        let action = harness.step(&ReturnCheckpoint).unwrap();
        assert_eq!(
            action,
            StepAction::Teleport {
                to: Cell::new(3, 3),
                next: Cell::new(4, 3),
            }
        );
    }

    #[test]
    fn test_unresolved_target_falls_back_straight_through() {
        let block = Block::with_params(
            "returncheckpoint",
            Cell::new(5, 0),
            BlockParams::new().with(TARGET_CHECKPOINT, "ghost"),
        );
        let mut harness = Harness::new(block).arriving_from(Cell::new(4, 0));

        let action = harness.step(&ReturnCheckpoint).unwrap();
        assert_eq!(
            action,
            StepAction::Move {
                next: Cell::new(6, 0)
            }
        );
        assert_eq!(harness.logger.entries().len(), 1);
    }

    #[test]
    fn test_unresolved_target_without_direction_fizzles() {
        let mut harness = Harness::new(Block::new("returncheckpoint", Cell::new(5, 0)));
        let action = harness.step(&ReturnCheckpoint).unwrap();
        assert_eq!(action, StepAction::FizzleInPlace);
    }

    #[test]
    fn test_resolved_without_direction_lands_on_checkpoint() {
        let mut harness = Harness::new(Block::new("returncheckpoint", Cell::new(5, 0)));
        harness.checkpoints.record("alpha", Cell::new(2, 2));

        let action = harness.step(&ReturnCheckpoint).unwrap();
        assert_eq!(
            action,
            StepAction::Teleport {
                to: Cell::new(2, 2),
                next: Cell::new(2, 2),
            }
        );
    }
}
