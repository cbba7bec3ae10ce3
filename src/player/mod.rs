//! Players and move resolution
//!
//! A [`Player`] owns one [`Gameboard`] and attacks the opponent's board:
//! - Human seats fire once at a supplied coordinate
//! - Computer seats fire random shots until one lands (see [`computer`])
//!
//! The terminal front end for human seats lives in [`cli`].

use alloc::string::String;
use alloc::vec::Vec;
use log::debug;

use crate::core::{
    board::Gameboard,
    common::{GameError, Shot},
};

pub mod computer;
pub use computer::{random_move, MoveSource};

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliClient;

/// Who chooses a seat's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
pub enum PlayerKind {
    Human,
    Computer,
}

/// A named seat with its own board.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    board: Gameboard,
}

impl Player {
    /// Create a player with an empty default-size board.
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            board: Gameboard::default(),
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    pub fn computer(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Computer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }

    pub fn board(&self) -> &Gameboard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Gameboard {
        &mut self.board
    }

    /// Attack `opponent` and return every shot fired this move.
    ///
    /// Humans fire once at `target`. Computers ignore `target` and keep firing
    /// random shots until one hits, so the last shot returned is always a hit.
    /// The opponent must still have a ship afloat.
    pub fn make_move<S: MoveSource + ?Sized>(
        &self,
        opponent: &mut Gameboard,
        target: Option<(usize, usize)>,
        source: &mut S,
    ) -> Result<Vec<Shot>, GameError> {
        match self.kind {
            PlayerKind::Human => {
                let (x, y) = target.ok_or(GameError::MissingTarget)?;
                let result = opponent.receive_attack(x, y)?;
                Ok(alloc::vec![Shot { x, y, result }])
            }
            PlayerKind::Computer => {
                if opponent.all_ships_sunk() {
                    return Err(GameError::NoShipsAfloat);
                }
                let mut shots = Vec::new();
                loop {
                    let (x, y) = random_move(opponent.size(), source);
                    let result = opponent.receive_attack(x, y)?;
                    shots.push(Shot { x, y, result });
                    if result.is_hit() {
                        break;
                    }
                }
                debug!("{} fired {} shot(s) before hitting", self.name, shots.len());
                Ok(shots)
            }
        }
    }
}
