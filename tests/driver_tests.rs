//! Driver tests - gravity timing and snapshot publishing through the facade

use falling_blocks::core::{GameState, ScriptedSource};
use falling_blocks::engine::{Driver, DropPolicy, Policy};
use falling_blocks::types::{GameAction, Phase, PieceKind};

fn scripted_driver(kinds: &[PieceKind]) -> Driver<ScriptedSource> {
    Driver::new(GameState::with_source(ScriptedSource::new(
        kinds.iter().copied(),
    )))
}

#[test]
fn test_gravity_speeds_up_with_level() {
    let mut driver = scripted_driver(&[PieceKind::O]);
    driver.dispatch(GameAction::Start);

    // Ten lines with O pieces across the floor.
    for _ in 0..5 {
        for dx in [-4i8, -2, 0, 2, 4] {
            let action = if dx < 0 {
                GameAction::MOVE_LEFT
            } else {
                GameAction::MOVE_RIGHT
            };
            for _ in 0..dx.unsigned_abs() {
                assert!(driver.dispatch(action));
            }
            driver.dispatch(GameAction::HardDrop);
        }
    }
    assert_eq!(driver.state().level(), 2);
    assert_eq!(driver.pieces_locked(), 25);

    assert_eq!(driver.tick(899).steps, 0);
    assert_eq!(driver.tick(1).steps, 1);
}

#[test]
fn test_long_tick_runs_every_due_step() {
    let mut driver = scripted_driver(&[PieceKind::O]);
    driver.dispatch(GameAction::Start);

    // 190 seconds is enough to lock ten O pieces on the centre stack.
    let report = driver.tick(190_000);
    assert_eq!(report.locks, 10);
    assert!(driver.state().game_over());
    assert_eq!(driver.state().phase(), Phase::GameOver);
    assert_eq!(driver.time_to_next_step(), None);

    // Nothing moves after the game ends.
    assert_eq!(driver.tick(10_000).steps, 0);
}

#[test]
fn test_drop_policy_until_game_over() {
    let mut driver = Driver::seeded(9);
    driver.dispatch(GameAction::Start);
    let mut policy = DropPolicy;

    let mut turns = 0;
    while let Some(action) = policy.choose_action(&driver.snapshot()) {
        driver.dispatch(action);
        turns += 1;
        assert!(turns < 500, "game should top out");
    }
    assert!(driver.state().game_over());
    assert_eq!(driver.pieces_locked(), turns);
}

#[tokio::test]
async fn test_watch_receiver_tracks_latest_snapshot() {
    let mut driver = scripted_driver(&[PieceKind::T]);
    let mut rx = driver.subscribe();
    assert_eq!(rx.borrow().phase, Phase::NotStarted);

    driver.dispatch(GameAction::Start);
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().phase, Phase::Running);

    driver.dispatch(GameAction::Pause);
    driver.dispatch(GameAction::Pause);
    driver.dispatch(GameAction::MOVE_RIGHT);
    rx.changed().await.unwrap();
    let latest = *rx.borrow_and_update();
    assert_eq!(latest.phase, Phase::Running);
    assert_eq!(latest.active.unwrap().x, 5);
}
