#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
mod logging;
pub mod player;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
pub use player::{random_move, MoveSource, Player, PlayerKind};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use player::cli::{parse_coord, CliClient};
#[cfg(feature = "std")]
pub use protocol::{BoardFrame, Message};
#[cfg(feature = "std")]
pub use session::{GameSession, SessionOutcome};
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, Transport};
