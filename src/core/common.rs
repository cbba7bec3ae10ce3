//! Common types for the game core: attack results and error taxonomy.

use alloc::string::String;
use core::fmt;

/// Index of a ship in its board's ship list.
pub type ShipId = usize;

/// Outcome of a single attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// Attack struck a ship that stays afloat.
    Hit,
    /// Attack struck the last intact segment of a ship.
    Sunk(ShipId),
    /// Attack found no ship, including cells already resolved.
    Miss,
}

impl AttackResult {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackResult::Miss)
    }
}

/// One resolved attack: where it landed and what it found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub x: usize,
    pub y: usize,
    pub result: AttackResult,
}

/// Why a coordinate could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// Coordinate lies outside a `size`×`size` grid.
    OutOfRange { x: usize, y: usize, size: usize },
    /// Input text does not name a cell.
    NotNumeric(String),
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship would run past the edge of the grid.
    OutOfBounds,
    /// Ship would cover a cell already holding another ship.
    Overlaps { x: usize, y: usize },
    ZeroLength,
}

/// Errors returned by board and ship operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidCoordinate(CoordinateError),
    InvalidPlacement(PlacementError),
    /// Placement direction text was not recognised.
    InvalidDirection(String),
}

impl From<CoordinateError> for BoardError {
    fn from(err: CoordinateError) -> Self {
        BoardError::InvalidCoordinate(err)
    }
}

impl From<PlacementError> for BoardError {
    fn from(err: PlacementError) -> Self {
        BoardError::InvalidPlacement(err)
    }
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::OutOfRange { x, y, size } => write!(
                f,
                "({}, {}) is off the board - both values must be between 0 and {}",
                x,
                y,
                size.saturating_sub(1)
            ),
            CoordinateError::NotNumeric(input) => {
                write!(f, "'{}' is not a coordinate - enter two numbers like '3 4' or a cell like 'D5'", input)
            }
        }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement runs off the board"),
            PlacementError::Overlaps { x, y } => {
                write!(f, "Ship placement overlaps another ship at ({}, {})", x, y)
            }
            PlacementError::ZeroLength => write!(f, "Ship length must be at least 1"),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidCoordinate(e) => write!(f, "Invalid coordinate: {}", e),
            BoardError::InvalidPlacement(e) => write!(f, "Invalid placement: {}", e),
            BoardError::InvalidDirection(d) => {
                write!(f, "Invalid direction '{}' - use horizontal or vertical", d)
            }
        }
    }
}

/// Errors returned by player and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    /// Operation not allowed in the current phase of the match.
    WrongPhase,
    /// A human seat moved without naming a target.
    MissingTarget,
    /// Opponent has nothing left to hit.
    NoShipsAfloat,
    /// Automatic play requested while a human holds a seat.
    HumanSeat,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<CoordinateError> for GameError {
    fn from(err: CoordinateError) -> Self {
        GameError::Board(err.into())
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::WrongPhase => write!(f, "Operation not allowed in the current game phase"),
            GameError::MissingTarget => write!(f, "A target coordinate is required"),
            GameError::NoShipsAfloat => write!(f, "Opponent has no ships left afloat"),
            GameError::HumanSeat => write!(f, "Automatic play needs two computer players"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordinateError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
