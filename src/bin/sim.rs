use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use skirmish::{Game, GameConfig, PlayerKind, SeatConfig, PLAYER_ONE_FLEET, PLAYER_TWO_FLEET};

fn main() -> anyhow::Result<()> {
    skirmish::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let seat = |name: &str, fleet: &[skirmish::Placement]| SeatConfig {
        name: name.to_string(),
        kind: PlayerKind::Computer,
        fleet: fleet.to_vec(),
    };
    let mut game = Game::new(GameConfig {
        seats: [
            seat("player1", &PLAYER_ONE_FLEET),
            seat("player2", &PLAYER_TWO_FLEET),
        ],
    });
    game.setup_boards()?;
    let turns = game.play_out(&mut rng)?;

    let mut shots = [0usize; 2];
    for turn in &turns {
        shots[turn.player] += turn.shots.len();
    }
    let winner = game.winner().map(|p| p.name().to_string());

    let result = json!({
        "seed": seed,
        "turns": turns.len(),
        "shots": shots,
        "winner": winner,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
