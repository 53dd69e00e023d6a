use grid_snake::config::GridSize;
use grid_snake::game::{DeathReason, GameState, GameStatus, StepOutcome};
use grid_snake::input::Direction;
use grid_snake::random::ScriptedSource;
use grid_snake::snake::Cell;

#[test]
fn stepwise_food_collection_and_wall_collision() {
    // First food at (12, 10), second at (3, 3).
    let source = ScriptedSource::for_cells(&[(12, 10), (3, 3)], 20);
    let mut state = GameState::new(source).expect("initial food");
    assert_eq!(state.food(), Cell::new(12, 10));

    assert_eq!(state.step(), Ok(StepOutcome::Moved));
    assert_eq!(state.step(), Ok(StepOutcome::Ate));
    assert_eq!(state.score(), 1);
    assert_eq!(state.snake().len(), 4);
    assert_eq!(state.snake().head(), Cell::new(12, 10));
    assert_eq!(state.food(), Cell::new(3, 3));

    assert!(state.set_direction(Direction::Up));
    for expected_y in (0..10).rev() {
        assert_eq!(state.step(), Ok(StepOutcome::Moved));
        assert_eq!(state.snake().head(), Cell::new(12, expected_y));
    }

    assert_eq!(
        state.step(),
        Ok(StepOutcome::Died(DeathReason::WallCollision))
    );
    assert_eq!(state.status(), GameStatus::GameOver);
    assert_eq!(state.snake().head(), Cell::new(12, 0));
    assert_eq!(state.snake().len(), 4);
}

#[test]
fn equal_sources_replay_identically_across_a_reset() {
    let script = vec![0.13, 0.72, 0.41, 0.05, 0.99, 0.5, 0.27];
    let mut left = GameState::new(ScriptedSource::new(script.clone())).expect("initial food");
    let mut right = GameState::new(ScriptedSource::new(script)).expect("initial food");

    let turns = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ];
    for round in 0..3 {
        for (i, turn) in turns.iter().cycle().take(24).enumerate() {
            if i % 3 == 0 {
                let _ = left.set_direction(*turn);
                let _ = right.set_direction(*turn);
            }
            assert_eq!(left.step(), right.step());
            assert_eq!(left, right, "diverged in round {round} at step {i}");
        }
        left.reset().expect("reset places food");
        right.reset().expect("reset places food");
        assert_eq!(left, right);
    }
}

#[test]
fn small_board_runs_until_walls() {
    let bounds = GridSize {
        width: 6,
        height: 4,
    };
    let mut state =
        GameState::with_bounds(bounds, ScriptedSource::constant(0.0)).expect("initial food");

    // Head starts at (3, 2) heading right; two moves reach the east wall.
    assert_eq!(state.snake().head(), Cell::new(3, 2));
    assert_eq!(state.step(), Ok(StepOutcome::Moved));
    assert_eq!(state.step(), Ok(StepOutcome::Moved));
    assert_eq!(
        state.step(),
        Ok(StepOutcome::Died(DeathReason::WallCollision))
    );
}
