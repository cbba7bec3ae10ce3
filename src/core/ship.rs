//! Ships and placement direction.

use alloc::string::ToString;
use core::str::FromStr;

use crate::core::common::BoardError;

/// Direction a ship extends from its origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Along `+x`.
    Horizontal,
    /// Along `+y`.
    Vertical,
}

impl Direction {
    /// Cell `offset` steps from `(x, y)` in this direction.
    pub fn step(&self, x: usize, y: usize, offset: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (x + offset, y),
            Direction::Vertical => (x, y + offset),
        }
    }
}

impl FromStr for Direction {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("horizontal") || s.eq_ignore_ascii_case("h") {
            Ok(Direction::Horizontal)
        } else if s.eq_ignore_ascii_case("vertical") || s.eq_ignore_ascii_case("v") {
            Ok(Direction::Vertical)
        } else {
            Err(BoardError::InvalidDirection(s.to_string()))
        }
    }
}

/// A ship: a fixed length and the number of hits it has taken.
///
/// Hits are not capped at the length; a ship is sunk once `hits >= length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    length: usize,
    hits: usize,
}

impl Ship {
    pub const fn new(length: usize) -> Self {
        Self { length, hits: 0 }
    }

    /// Record one hit.
    pub fn hit(&mut self) {
        self.hits += 1;
    }

    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}
