#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use skirmish::{
    init_logging, ui, CliClient, Game, GameConfig, GameSession, InMemoryTransport, PlayerKind,
    SeatConfig, PLAYER_ONE_FLEET, PLAYER_ONE_NAME, PLAYER_TWO_FLEET,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play in the terminal against the computer or a second human.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = PLAYER_ONE_NAME)]
        name: String,
        #[arg(long, value_enum, default_value_t = PlayerKind::Computer)]
        opponent: PlayerKind,
    },
    /// Watch the computer play against itself.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            name,
            opponent,
        } => {
            let rng = make_rng(seed);
            let config = GameConfig::against(name, opponent);

            let (session_end, client_end) = InMemoryTransport::pair();
            let mut session = GameSession::new(Game::new(config), Box::new(session_end), rng);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut client = CliClient::new(Box::new(client_end), stdin);

            let (outcome, _) = tokio::try_join!(session.run(), client.run())?;
            log::info!("session ended: {:?}", outcome);
        }
        Commands::Watch { seed } => {
            let mut rng = make_rng(seed);
            let config = GameConfig {
                seats: [
                    SeatConfig {
                        name: "Computer 1".to_string(),
                        kind: PlayerKind::Computer,
                        fleet: PLAYER_ONE_FLEET.to_vec(),
                    },
                    SeatConfig {
                        name: "Computer 2".to_string(),
                        kind: PlayerKind::Computer,
                        fleet: PLAYER_TWO_FLEET.to_vec(),
                    },
                ],
            };
            let mut game = Game::new(config);
            game.setup_boards()?;
            let turns = game.play_out(&mut rng)?;
            for (n, turn) in turns.iter().enumerate() {
                let player = game.player(turn.player).name();
                println!("Turn {}:", n + 1);
                for shot in &turn.shots {
                    println!("  {}", ui::describe_shot(player, shot));
                }
            }
            let frame = skirmish::BoardFrame::for_seat(&game, 0);
            ui::print_frame(&frame);
            if let Some(winner) = game.winner() {
                println!("\n🏆 {} wins after {} turn(s)!", winner.name(), turns.len());
            }
        }
    }
    Ok(())
}
