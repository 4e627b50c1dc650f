//! Random direction: uniform choice among occupied neighbours

use block_contract::{DisplayEffect, StepAction, StepContext, StepError, StepHandler};
use grid_types::Direction;
use machine_logger::{LogEntry, LogLevel};

/// Sends the cursor toward a uniformly chosen occupied neighbour
///
/// Candidates are the four cardinal neighbours that hold a block; empty
/// cells are never chosen, so the cursor only leaves this block along a
/// path that continues. The pick flows through the injected random
/// source, and the block asks the presentation layer to rotate its
/// rendered facing toward the chosen direction.
#[derive(Debug, Default)]
pub struct RandomDirection;

impl StepHandler for RandomDirection {
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepAction, StepError> {
        let candidates: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|direction| ctx.grid.is_occupied(ctx.current.step(*direction)))
            .collect();

        if candidates.is_empty() {
            ctx.logger.log(
                LogEntry::new(LogLevel::Info, "randomDirection: no occupied neighbours")
                    .with_field("cell", ctx.current.to_string()),
            );
            return Ok(StepAction::FizzleInPlace);
        }

        let chosen = candidates[ctx.rng.pick_index(candidates.len())];
        ctx.effects.push(DisplayEffect::RotateBlock {
            cell: ctx.current,
            direction: chosen,
        });

        Ok(StepAction::Move {
            next: ctx.current.step(chosen),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Harness;
    use block_contract::SequenceRandom;
    use grid_types::{Block, Cell};

    #[test]
    fn test_fizzles_with_no_neighbours() {
        let mut harness = Harness::new(Block::new("randomDirection", Cell::new(0, 0)));
        let action = harness.step(&RandomDirection).unwrap();
        assert_eq!(action, StepAction::FizzleInPlace);
        assert!(harness.effects.is_empty());
    }

    #[test]
    fn test_only_occupied_neighbours_are_candidates() {
        let mut harness = Harness::new(Block::new("randomDirection", Cell::new(0, 0)));
        harness.grid.insert(Block::new("wire", Cell::new(1, 0)));

        // Any random word must pick the single candidate
        harness.rng = Box::new(SequenceRandom::new(vec![u32::MAX]));
        let action = harness.step(&RandomDirection).unwrap();
        assert_eq!(
            action,
            StepAction::Move {
                next: Cell::new(1, 0)
            }
        );
    }

    #[test]
    fn test_fixed_sequence_is_deterministic() {
        let mut harness = Harness::new(Block::new("randomDirection", Cell::new(0, 0)));
        harness.grid.insert(Block::new("wire", Cell::new(0, 1)));
        harness.grid.insert(Block::new("wire", Cell::new(0, -1)));

        // Candidates in facing-table order: [Up, Down]; word 1 picks Down
        harness.rng = Box::new(SequenceRandom::new(vec![1]));
        let action = harness.step(&RandomDirection).unwrap();
        assert_eq!(
            action,
            StepAction::Move {
                next: Cell::new(0, -1)
            }
        );
    }

    #[test]
    fn test_requests_facing_rotation() {
        let mut harness = Harness::new(Block::new("randomDirection", Cell::new(2, 2)));
        harness.grid.insert(Block::new("wire", Cell::new(3, 2)));
        harness.rng = Box::new(SequenceRandom::new(vec![0]));

        harness.step(&RandomDirection).unwrap();
        assert_eq!(
            harness.effects,
            vec![DisplayEffect::RotateBlock {
                cell: Cell::new(2, 2),
                direction: Direction::Right,
            }]
        );
    }
}
