//! Cell coordinates and the four-direction table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// One grid square, identified by an integer coordinate pair
///
/// A cell holds at most one block. The y axis grows upward, matching the
/// world coordinates the presentation layer renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    /// Creates a cell from a coordinate pair
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the cell offset by the given deltas
    pub const fn offset(&self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the neighbouring cell one step in the given direction
    pub const fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

impl Sub for Cell {
    type Output = (i64, i64);

    fn sub(self, other: Cell) -> (i64, i64) {
        (self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// One of the four cardinal grid directions
///
/// The discriminant order matches the director block's facing table:
/// index 0 is Up, proceeding clockwise. Director `dirIndex` params and
/// display rotations are defined against this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions in facing-table order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Returns the unit delta for this direction (y grows upward)
    pub const fn delta(&self) -> (i64, i64) {
        match self {
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
        }
    }

    /// Derives a direction from a delta, if it is exactly one unit step
    ///
    /// Diagonal, zero and multi-cell deltas have no direction; callers
    /// treat that as an invalid transition.
    pub fn from_delta(dx: i64, dy: i64) -> Option<Direction> {
        match (dx, dy) {
            (0, 1) => Some(Direction::Up),
            (1, 0) => Some(Direction::Right),
            (0, -1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            _ => None,
        }
    }

    /// Returns this direction's index in the facing table
    pub const fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Looks up a direction by facing-table index
    pub fn from_index(index: usize) -> Option<Direction> {
        Direction::ALL.get(index).copied()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Right => "Right",
            Direction::Down => "Down",
            Direction::Left => "Left",
        };
        write!(f, "{}", name)
    }
}
