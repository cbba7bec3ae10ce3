//! Core battleship game engine (no_std compatible)
//!
//! Pure turn-resolution logic: ships, boards and the match state machine.
//! It needs only `alloc`, `rand` and the `log` facade.

pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod ship;

// Re-export commonly used types
pub use board::{Cell, CellView, Gameboard};
pub use common::{
    AttackResult, BoardError, CoordinateError, GameError, PlacementError, ShipId, Shot,
};
pub use config::*;
pub use game::{Game, GameConfig, Phase, SeatConfig, TurnReport};
pub use ship::{Direction, Ship};
