#![cfg(feature = "std")]

use log::{info, warn};

use crate::{
    core::{Game, Phase, TurnReport},
    player::MoveSource,
    protocol::{BoardFrame, Message},
    transport::Transport,
};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A board was fully sunk; `winner` is the winning seat.
    Finished { winner: usize },
    /// Seat `by` resigned.
    Resigned { by: usize },
}

/// Event loop that owns a [`Game`] and talks to the client of its human seats
/// over a [`Transport`]. Computer seats are resolved inside the loop.
pub struct GameSession<S> {
    game: Game,
    transport: Box<dyn Transport>,
    source: S,
}

impl<S: MoveSource + Send> GameSession<S> {
    pub fn new(game: Game, transport: Box<dyn Transport>, source: S) -> Self {
        Self {
            game,
            transport,
            source,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Drive the match to its end. Boards are set up first if needed.
    ///
    /// Refused moves are reported with [`Message::Rejected`] and the same seat
    /// is asked again; only transport failures and unexpected messages end
    /// the session with an error.
    pub async fn run(&mut self) -> anyhow::Result<SessionOutcome> {
        if self.game.phase() == Phase::Setup {
            self.game.setup_boards()?;
        }

        loop {
            if self.game.phase() == Phase::Over {
                return self.finish().await;
            }

            let seat = self.game.current();
            if self.game.current_player().is_computer() {
                let report = self.game.take_turn(None, &mut self.source)?;
                self.announce(report).await?;
                continue;
            }

            self.transport
                .send(Message::AwaitingMove {
                    player: self.game.current_player().name().to_string(),
                    frame: BoardFrame::for_seat(&self.game, seat),
                })
                .await?;

            match self.transport.recv().await? {
                Message::Attack { x, y } => match self.game.take_turn(Some((x, y)), &mut self.source) {
                    Ok(report) => self.announce(report).await?,
                    Err(e) => {
                        warn!(
                            "rejected move ({}, {}) from {}: {}",
                            x,
                            y,
                            self.game.current_player().name(),
                            e
                        );
                        self.transport
                            .send(Message::Rejected {
                                reason: e.to_string(),
                            })
                            .await?;
                    }
                },
                Message::Resign => {
                    let winner = self.game.player(1 - seat).name().to_string();
                    info!("{} resigned", self.game.current_player().name());
                    self.transport
                        .send(Message::GameOver {
                            winner,
                            frame: BoardFrame::for_seat(&self.game, 0),
                        })
                        .await?;
                    return Ok(SessionOutcome::Resigned { by: seat });
                }
                other => {
                    return Err(anyhow::anyhow!(
                        "Expected Attack or Resign, got unexpected message: {:?}",
                        other
                    ))
                }
            }
        }
    }

    async fn announce(&mut self, report: TurnReport) -> anyhow::Result<()> {
        self.transport
            .send(Message::TurnResolved {
                player: self.game.player(report.player).name().to_string(),
                shots: report.shots,
            })
            .await
    }

    async fn finish(&mut self) -> anyhow::Result<SessionOutcome> {
        let seat = self
            .game
            .winner_seat()
            .ok_or_else(|| anyhow::anyhow!("game over without a winner"))?;
        self.transport
            .send(Message::GameOver {
                winner: self.game.player(seat).name().to_string(),
                frame: BoardFrame::for_seat(&self.game, 0),
            })
            .await?;
        Ok(SessionOutcome::Finished { winner: seat })
    }
}
