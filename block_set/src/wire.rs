//! Wire: straight-through propagation

use block_contract::{StepAction, StepContext, StepError, StepHandler};
use machine_logger::{LogEntry, LogLevel};

/// Continues the cursor in the direction it arrived from
///
/// A wire entered without an inferable incoming direction (first step of
/// a run, or a degenerate transition) is a dead end and fizzles in place.
/// The `wireColor` param is presentation-only and ignored here.
#[derive(Debug, Default)]
pub struct Wire;

impl StepHandler for Wire {
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<StepAction, StepError> {
        match ctx.straight_through() {
            Some(next) => Ok(StepAction::Move { next }),
            None => {
                ctx.logger.log(
                    LogEntry::new(LogLevel::Warn, "wire: no valid incoming direction")
                        .with_field("cell", ctx.current.to_string()),
                );
                Ok(StepAction::FizzleInPlace)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Harness;
    use grid_types::{Block, Cell};

    #[test]
    fn test_wire_propagates_straight_through() {
        let mut harness =
            Harness::new(Block::new("wire", Cell::new(3, 2))).arriving_from(Cell::new(2, 2));
        let action = harness.step(&Wire).unwrap();
        assert_eq!(
            action,
            StepAction::Move {
                next: Cell::new(4, 2)
            }
        );
    }

    #[test]
    fn test_wire_fizzles_on_first_step() {
        let mut harness = Harness::new(Block::new("wire", Cell::new(0, 0)));
        let action = harness.step(&Wire).unwrap();
        assert_eq!(action, StepAction::FizzleInPlace);
        assert_eq!(harness.logger.entries().len(), 1);
    }

    #[test]
    fn test_wire_fizzles_on_diagonal_entry() {
        let mut harness =
            Harness::new(Block::new("wire", Cell::new(3, 3))).arriving_from(Cell::new(2, 2));
        let action = harness.step(&Wire).unwrap();
        assert_eq!(action, StepAction::FizzleInPlace);
    }
}
