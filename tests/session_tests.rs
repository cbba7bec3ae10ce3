use rand::rngs::SmallRng;
use rand::SeedableRng;
use skirmish::{
    AttackResult, BoardFrame, CellView, Direction, Game, GameConfig, GameSession,
    InMemoryTransport, Message, Placement, PlayerKind, SeatConfig, SessionOutcome, Transport,
};

fn game(kinds: [PlayerKind; 2]) -> Game {
    let fleet = vec![Placement::new(2, 0, 0, Direction::Horizontal)];
    Game::new(GameConfig {
        seats: [
            SeatConfig {
                name: "Alice".to_string(),
                kind: kinds[0],
                fleet: fleet.clone(),
            },
            SeatConfig {
                name: "Bob".to_string(),
                kind: kinds[1],
                fleet,
            },
        ],
    })
}

fn spawn_session(
    game: Game,
    seed: u64,
) -> (
    tokio::task::JoinHandle<anyhow::Result<SessionOutcome>>,
    InMemoryTransport,
) {
    let (session_end, client_end) = InMemoryTransport::pair();
    let handle = tokio::spawn(async move {
        let mut session = GameSession::new(game, Box::new(session_end), SmallRng::seed_from_u64(seed));
        session.run().await
    });
    (handle, client_end)
}

async fn expect_awaiting(client: &mut InMemoryTransport, name: &str) -> skirmish::BoardFrame {
    match client.recv().await.unwrap() {
        Message::AwaitingMove { player, frame } => {
            assert_eq!(player, name);
            frame
        }
        other => panic!("expected AwaitingMove, got {:?}", other),
    }
}

#[test]
fn test_frame_lookups_stay_on_the_board() {
    let mut g = game([PlayerKind::Human, PlayerKind::Human]);
    g.setup_boards().unwrap();
    let frame = BoardFrame::for_seat(&g, 1);
    assert_eq!(frame.own_at(1, 0), Some(CellView::Ship));
    assert_eq!(frame.target_at(1, 0), Some(CellView::Empty));
    // (10, 0) would alias (0, 1) in the row-major vectors
    assert_eq!(frame.own_at(10, 0), None);
    assert_eq!(frame.target_at(0, 10), None);
}

#[test]
#[should_panic(expected = "seat 2 does not exist")]
fn test_frame_for_missing_seat_panics() {
    let g = game([PlayerKind::Human, PlayerKind::Human]);
    BoardFrame::for_seat(&g, 2);
}

#[tokio::test]
async fn test_hotseat_match_to_the_end() -> anyhow::Result<()> {
    let (handle, mut client) = spawn_session(game([PlayerKind::Human, PlayerKind::Human]), 1);

    let frame = expect_awaiting(&mut client, "Alice").await;
    assert_eq!(frame.size, 10);
    assert_eq!(frame.own_at(0, 0), Some(CellView::Ship));
    assert_eq!(frame.target_at(0, 0), Some(CellView::Empty));
    client.send(Message::Attack { x: 0, y: 0 }).await?;
    match client.recv().await? {
        Message::TurnResolved { player, shots } => {
            assert_eq!(player, "Alice");
            assert_eq!(shots.len(), 1);
            assert_eq!(shots[0].result, AttackResult::Hit);
        }
        other => panic!("unexpected {:?}", other),
    }

    expect_awaiting(&mut client, "Bob").await;
    client.send(Message::Attack { x: 5, y: 5 }).await?;
    assert!(matches!(client.recv().await?, Message::TurnResolved { .. }));

    let frame = expect_awaiting(&mut client, "Alice").await;
    assert_eq!(frame.target_at(0, 0), Some(CellView::Hit));
    assert_eq!(frame.own_at(5, 5), Some(CellView::Miss));
    client.send(Message::Attack { x: 1, y: 0 }).await?;
    assert!(matches!(client.recv().await?, Message::TurnResolved { .. }));

    match client.recv().await? {
        Message::GameOver { winner, frame } => {
            assert_eq!(winner, "Alice");
            assert_eq!(frame.enemy_ships_afloat, 0);
            assert_eq!(frame.ships_afloat, 1);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(handle.await??, SessionOutcome::Finished { winner: 0 });
    Ok(())
}

#[tokio::test]
async fn test_invalid_move_is_rejected_and_asked_again() -> anyhow::Result<()> {
    let (handle, mut client) = spawn_session(game([PlayerKind::Human, PlayerKind::Computer]), 3);

    expect_awaiting(&mut client, "Alice").await;
    client.send(Message::Attack { x: 10, y: 4 }).await?;
    match client.recv().await? {
        Message::Rejected { reason } => assert!(reason.contains("off the board")),
        other => panic!("unexpected {:?}", other),
    }
    expect_awaiting(&mut client, "Alice").await;
    client.send(Message::Resign).await?;

    match client.recv().await? {
        Message::GameOver { winner, .. } => assert_eq!(winner, "Bob"),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(handle.await??, SessionOutcome::Resigned { by: 0 });
    Ok(())
}

#[tokio::test]
async fn test_computer_turns_are_resolved_by_the_session() -> anyhow::Result<()> {
    let (handle, mut client) = spawn_session(game([PlayerKind::Human, PlayerKind::Computer]), 11);

    expect_awaiting(&mut client, "Alice").await;
    client.send(Message::Attack { x: 9, y: 9 }).await?;
    assert!(matches!(client.recv().await?, Message::TurnResolved { .. }));

    match client.recv().await? {
        Message::TurnResolved { player, shots } => {
            assert_eq!(player, "Bob");
            assert!(shots.last().unwrap().result.is_hit());
            assert_eq!(shots.iter().filter(|s| s.result.is_hit()).count(), 1);
        }
        other => panic!("unexpected {:?}", other),
    }

    let frame = expect_awaiting(&mut client, "Alice").await;
    let own_hits = frame.own.iter().filter(|c| **c == CellView::Hit).count();
    assert_eq!(own_hits, 1);

    drop(client);
    assert!(handle.await?.is_err());
    Ok(())
}

#[tokio::test]
async fn test_computer_only_session_needs_no_input() -> anyhow::Result<()> {
    let (handle, mut client) = spawn_session(game([PlayerKind::Computer, PlayerKind::Computer]), 5);

    let mut turns = 0;
    loop {
        match client.recv().await? {
            Message::TurnResolved { .. } => turns += 1,
            Message::GameOver { winner, .. } => {
                assert_eq!(winner, "Alice");
                break;
            }
            other => panic!("unexpected {:?}", other),
        }
    }
    // two cells each, one hit per turn
    assert_eq!(turns, 3);
    assert_eq!(handle.await??, SessionOutcome::Finished { winner: 0 });
    Ok(())
}
