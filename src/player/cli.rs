#![cfg(feature = "std")]

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    core::{BoardError, CoordinateError},
    protocol::Message,
    transport::Transport,
    ui,
};

/// Parse a target typed at the terminal.
///
/// Accepts two zero-based numbers `x y` (space or comma separated) or grid
/// notation such as `D5` (column letter, one-based row). The result must lie
/// on a `size`×`size` board.
pub fn parse_coord(input: &str, size: usize) -> Result<(usize, usize), BoardError> {
    let input = input.trim();
    let not_numeric = || BoardError::from(CoordinateError::NotNumeric(input.to_string()));

    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    let (x, y) = match parts.as_slice() {
        [x, y] => (
            x.parse::<usize>().map_err(|_| not_numeric())?,
            y.parse::<usize>().map_err(|_| not_numeric())?,
        ),
        [cell] => {
            let mut chars = cell.chars();
            let col_ch = chars.next().ok_or_else(not_numeric)?.to_ascii_uppercase();
            if !col_ch.is_ascii_uppercase() {
                return Err(not_numeric());
            }
            let row: usize = chars.as_str().parse().map_err(|_| not_numeric())?;
            if row == 0 {
                return Err(not_numeric());
            }
            ((col_ch as u8 - b'A') as usize, row - 1)
        }
        _ => return Err(not_numeric()),
    };

    if x >= size || y >= size {
        return Err(CoordinateError::OutOfRange { x, y, size }.into());
    }
    Ok((x, y))
}

/// Terminal client for the human seats of a session.
///
/// Reads targets line by line from `input` and prints boards and results to
/// stdout. End of input resigns the match.
pub struct CliClient<R> {
    transport: Box<dyn Transport>,
    input: R,
}

impl<R: AsyncBufRead + Unpin + Send> CliClient<R> {
    pub fn new(transport: Box<dyn Transport>, input: R) -> Self {
        Self { transport, input }
    }

    /// Play until the session reports the end of the match; returns the
    /// winner's name.
    pub async fn run(&mut self) -> anyhow::Result<String> {
        loop {
            match self.transport.recv().await? {
                Message::AwaitingMove { player, frame } => {
                    println!("\n════════════════ {}'s turn ════════════════", player);
                    ui::print_frame(&frame);
                    let reply = self.read_target(frame.size).await?;
                    self.transport.send(reply).await?;
                }
                Message::TurnResolved { player, shots } => {
                    for shot in &shots {
                        println!("{}", ui::describe_shot(&player, shot));
                    }
                }
                Message::Rejected { reason } => {
                    println!("✗ {}", reason);
                }
                Message::GameOver { winner, frame } => {
                    println!("\n════════════════ GAME OVER ════════════════");
                    ui::print_frame(&frame);
                    println!("\n🏆 {} wins!", winner);
                    return Ok(winner);
                }
                other => {
                    return Err(anyhow::anyhow!(
                        "unexpected message from session: {:?}",
                        other
                    ))
                }
            }
        }
    }

    async fn read_target(&mut self, size: usize) -> anyhow::Result<Message> {
        loop {
            print!("Enter target (e.g. '3 4' or 'D5', 'help', 'quit'): ");
            io::stdout().flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 {
                println!();
                return Ok(Message::Resign);
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("help") {
                ui::print_targeting_help(size);
                continue;
            }
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("resign") {
                return Ok(Message::Resign);
            }
            match parse_coord(line, size) {
                Ok((x, y)) => return Ok(Message::Attack { x, y }),
                Err(e) => println!("✗ {}", e),
            }
        }
    }
}
