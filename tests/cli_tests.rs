use rand::rngs::SmallRng;
use rand::SeedableRng;
use skirmish::{
    parse_coord, ui, BoardError, CellView, CliClient, CoordinateError, Direction, Game,
    GameConfig, GameSession, InMemoryTransport, Placement, PlayerKind, SeatConfig,
    SessionOutcome,
};

#[test]
fn test_parse_number_pairs() {
    assert_eq!(parse_coord("3 4", 10).unwrap(), (3, 4));
    assert_eq!(parse_coord("  0   9 ", 10).unwrap(), (0, 9));
    assert_eq!(parse_coord("7,2", 10).unwrap(), (7, 2));
    assert_eq!(parse_coord("7, 2", 10).unwrap(), (7, 2));
}

#[test]
fn test_parse_grid_notation() {
    assert_eq!(parse_coord("A1", 10).unwrap(), (0, 0));
    assert_eq!(parse_coord("d5", 10).unwrap(), (3, 4));
    assert_eq!(parse_coord("J10", 10).unwrap(), (9, 9));
}

#[test]
fn test_parse_rejects_non_numeric() {
    for input in ["", "x y", "-1 3", "3", "A0", "A", "1 2 3", "??"] {
        assert_eq!(
            parse_coord(input, 10).unwrap_err(),
            BoardError::InvalidCoordinate(CoordinateError::NotNumeric(input.trim().to_string())),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_parse_rejects_out_of_range() {
    assert_eq!(
        parse_coord("10 0", 10).unwrap_err(),
        BoardError::InvalidCoordinate(CoordinateError::OutOfRange { x: 10, y: 0, size: 10 })
    );
    assert_eq!(
        parse_coord("K1", 10).unwrap_err(),
        BoardError::InvalidCoordinate(CoordinateError::OutOfRange { x: 10, y: 0, size: 10 })
    );
    assert_eq!(
        parse_coord("A11", 10).unwrap_err(),
        BoardError::InvalidCoordinate(CoordinateError::OutOfRange { x: 0, y: 10, size: 10 })
    );
}

#[test]
fn test_render_grid_symbols() {
    let cells = [
        CellView::Hit,
        CellView::Miss,
        CellView::Ship,
        CellView::Empty,
    ];
    let out = ui::render_grid(&cells, 2);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1], "    ║    A B ║");
    assert_eq!(lines[3], "    ║  1 X o ║");
    assert_eq!(lines[4], "    ║  2 S . ║");
    assert_eq!(ui::coord_to_string(3, 4), "D5");
}

#[test]
fn test_render_wide_grid_uses_numbered_columns() {
    assert_eq!(ui::column_label(25), "Z");
    assert_eq!(ui::column_label(26), "27");
    assert_eq!(ui::coord_to_string(25, 0), "Z1");
    assert_eq!(ui::coord_to_string(27, 4), "27,4");

    let size = 200;
    let out = ui::render_grid(&vec![CellView::Empty; size * size], size);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), size + 4);
    assert!(lines[1].contains("  Y   Z  27  28"));
    assert!(lines[1].ends_with(" 200 ║"));
    assert!(lines[size + 2].starts_with("    ║ 200   ."));
    let width = lines[0].chars().count();
    assert!(lines.iter().all(|l| l.chars().count() == width));
}

#[tokio::test]
async fn test_cli_client_plays_a_hotseat_match() -> anyhow::Result<()> {
    let fleet = vec![Placement::new(2, 0, 0, Direction::Horizontal)];
    let game = Game::new(GameConfig {
        seats: [
            SeatConfig {
                name: "Alice".to_string(),
                kind: PlayerKind::Human,
                fleet: fleet.clone(),
            },
            SeatConfig {
                name: "Bob".to_string(),
                kind: PlayerKind::Human,
                fleet,
            },
        ],
    });
    let (session_end, client_end) = InMemoryTransport::pair();
    let mut session = GameSession::new(game, Box::new(session_end), SmallRng::seed_from_u64(1));

    let input: &[u8] = b"zz\nhelp\n0 0\n42 1\n5,5\nB1\n";
    let mut client = CliClient::new(Box::new(client_end), input);

    let (outcome, winner) = tokio::try_join!(session.run(), client.run())?;
    assert_eq!(outcome, SessionOutcome::Finished { winner: 0 });
    assert_eq!(winner, "Alice");
    Ok(())
}

#[tokio::test]
async fn test_cli_client_resigns_at_end_of_input() -> anyhow::Result<()> {
    let (session_end, client_end) = InMemoryTransport::pair();
    let mut session = GameSession::new(
        Game::new(GameConfig::default()),
        Box::new(session_end),
        SmallRng::seed_from_u64(8),
    );
    let input: &[u8] = b"";
    let mut client = CliClient::new(Box::new(client_end), input);

    let (outcome, winner) = tokio::try_join!(session.run(), client.run())?;
    assert_eq!(outcome, SessionOutcome::Resigned { by: 0 });
    assert_eq!(winner, skirmish::COMPUTER_NAME);
    Ok(())
}
