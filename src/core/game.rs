use alloc::string::String;
use alloc::vec::Vec;
use log::info;

use crate::{
    core::{
        common::{GameError, Shot},
        config::{
            Placement, COMPUTER_NAME, PLAYER_ONE_FLEET, PLAYER_ONE_NAME, PLAYER_TWO_FLEET,
            PLAYER_TWO_NAME,
        },
        ship::Ship,
    },
    player::{MoveSource, Player, PlayerKind},
};

/// Phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Boards not yet populated.
    Setup,
    Active,
    /// A board has been fully sunk.
    Over,
}

/// Name, kind and fleet for one seat.
#[derive(Debug, Clone)]
pub struct SeatConfig {
    pub name: String,
    pub kind: PlayerKind,
    pub fleet: Vec<Placement>,
}

/// Setup for a match: two seats, first seat moves first.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub seats: [SeatConfig; 2],
}

impl GameConfig {
    /// A human named `name` in the first seat against `opponent`, with the
    /// fixed fleets. The second seat is named after its kind.
    pub fn against(name: impl Into<String>, opponent: PlayerKind) -> Self {
        let opponent_name = match opponent {
            PlayerKind::Computer => COMPUTER_NAME,
            PlayerKind::Human => PLAYER_TWO_NAME,
        };
        Self {
            seats: [
                SeatConfig {
                    name: name.into(),
                    kind: PlayerKind::Human,
                    fleet: PLAYER_ONE_FLEET.to_vec(),
                },
                SeatConfig {
                    name: opponent_name.into(),
                    kind: opponent,
                    fleet: PLAYER_TWO_FLEET.to_vec(),
                },
            ],
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::against(PLAYER_ONE_NAME, PlayerKind::Computer)
    }
}

/// Everything that happened in one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Seat that moved.
    pub player: usize,
    pub shots: Vec<Shot>,
    /// Winning seat if this turn ended the match.
    pub winner: Option<usize>,
}

/// A match between two players.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    fleets: [Vec<Placement>; 2],
    current: usize,
    phase: Phase,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let [a, b] = config.seats;
        Self {
            players: [Player::new(a.name, a.kind), Player::new(b.name, b.kind)],
            fleets: [a.fleet, b.fleet],
            current: 0,
            phase: Phase::Setup,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seat index (0 or 1) whose move is next.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn player(&self, index: usize) -> &Player {
        &self.players[index]
    }

    pub fn player_mut(&mut self, index: usize) -> &mut Player {
        &mut self.players[index]
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn opponent(&self) -> &Player {
        &self.players[1 - self.current]
    }

    /// Place both fleets and start the match.
    ///
    /// Fleets are placed on copies of the boards, so a refused placement
    /// leaves both boards as they were and the game stays in `Setup`.
    pub fn setup_boards(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::WrongPhase);
        }
        let mut boards = [
            self.players[0].board().clone(),
            self.players[1].board().clone(),
        ];
        for (board, fleet) in boards.iter_mut().zip(self.fleets.iter()) {
            for p in fleet {
                board.place_ship(Ship::new(p.length), p.x, p.y, p.direction)?;
            }
        }
        for (player, board) in self.players.iter_mut().zip(boards) {
            *player.board_mut() = board;
        }
        self.phase = if self.is_game_over() {
            Phase::Over
        } else {
            Phase::Active
        };
        info!(
            "boards ready: {} vs {}",
            self.players[0].name(),
            self.players[1].name()
        );
        Ok(())
    }

    /// Hand the move to the other seat.
    pub fn switch_player(&mut self) {
        self.current = 1 - self.current;
    }

    /// Resolve one move for the current player, then pass the turn.
    ///
    /// `target` is used by human seats only. A move that fails leaves the turn
    /// with the same player.
    pub fn take_turn<S: MoveSource + ?Sized>(
        &mut self,
        target: Option<(usize, usize)>,
        source: &mut S,
    ) -> Result<TurnReport, GameError> {
        if self.phase != Phase::Active {
            return Err(GameError::WrongPhase);
        }
        let mover = self.current;
        let (left, right) = self.players.split_at_mut(1);
        let (attacker, defender) = if mover == 0 {
            (&left[0], &mut right[0])
        } else {
            (&right[0], &mut left[0])
        };
        let shots = attacker.make_move(defender.board_mut(), target, source)?;
        info!(
            "{} fired {} shot(s), {} ship(s) left afloat for {}",
            attacker.name(),
            shots.len(),
            defender.board().ships_afloat(),
            defender.name()
        );

        self.switch_player();
        let winner = if self.is_game_over() {
            self.phase = Phase::Over;
            let w = self.winner_index();
            info!("game over, {} wins", self.players[w].name());
            Some(w)
        } else {
            None
        };
        Ok(TurnReport {
            player: mover,
            shots,
            winner,
        })
    }

    /// Returns `true` once either board is fully sunk.
    pub fn is_game_over(&self) -> bool {
        self.players.iter().any(|p| p.board().all_ships_sunk())
    }

    /// Winner of a finished match.
    ///
    /// The first seat wins unless its own board is fully sunk, so a match in
    /// which both boards are sunk goes to the second seat.
    pub fn winner(&self) -> Option<&Player> {
        self.winner_seat().map(|i| &self.players[i])
    }

    /// Seat index of the winner, see [`Game::winner`].
    pub fn winner_seat(&self) -> Option<usize> {
        if self.is_game_over() {
            Some(self.winner_index())
        } else {
            None
        }
    }

    /// Run turns until the match ends. Both seats must be computers.
    pub fn play_out<S: MoveSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<Vec<TurnReport>, GameError> {
        if self.players.iter().any(|p| !p.is_computer()) {
            return Err(GameError::HumanSeat);
        }
        if self.phase != Phase::Active {
            return Err(GameError::WrongPhase);
        }
        let mut turns = Vec::new();
        while self.phase == Phase::Active {
            turns.push(self.take_turn(None, source)?);
        }
        Ok(turns)
    }

    fn winner_index(&self) -> usize {
        if self.players[0].board().all_ships_sunk() {
            1
        } else {
            0
        }
    }
}
