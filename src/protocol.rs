#![cfg(feature = "std")]

//! Messages exchanged between a [`GameSession`](crate::session::GameSession)
//! and the client driving its human seats.

pub mod frame;

pub use frame::BoardFrame;

use crate::core::Shot;

/// One event of the game loop. The first two variants travel from client to
/// session, the rest from session to client.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// Fire at `(x, y)` for the seat that was asked to move.
    Attack { x: usize, y: usize },
    /// Abandon the match.
    Resign,
    /// A human seat must move; `frame` is drawn from that seat's side.
    AwaitingMove { player: String, frame: BoardFrame },
    /// A move was resolved.
    TurnResolved { player: String, shots: Vec<Shot> },
    /// The last `Attack` was refused; the same seat moves again.
    Rejected { reason: String },
    /// The match is over. `frame` is drawn from the first seat's side.
    GameOver { winner: String, frame: BoardFrame },
}
