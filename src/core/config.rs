use crate::core::ship::Direction;

pub const DEFAULT_BOARD_SIZE: usize = 10;

pub const PLAYER_ONE_NAME: &str = "Player 1";
pub const PLAYER_TWO_NAME: &str = "Player 2";
pub const COMPUTER_NAME: &str = "Computer";

/// A ship of `length` placed with its first segment at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub length: usize,
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl Placement {
    pub const fn new(length: usize, x: usize, y: usize, direction: Direction) -> Self {
        Self {
            length,
            x,
            y,
            direction,
        }
    }
}

/// Fixed fleet for the first seat.
pub const PLAYER_ONE_FLEET: [Placement; 2] = [
    Placement::new(3, 1, 1, Direction::Horizontal),
    Placement::new(2, 4, 4, Direction::Vertical),
];

/// Fixed fleet for the second seat.
pub const PLAYER_TWO_FLEET: [Placement; 2] = [
    Placement::new(3, 0, 0, Direction::Horizontal),
    Placement::new(2, 3, 3, Direction::Vertical),
];
