use grid_snake::config::GridSize;
use grid_snake::food::place_food;
use grid_snake::game::{GameState, StepOutcome};
use grid_snake::input::Direction;
use grid_snake::random::{RandomSource, RngSource, ScriptedSource, random_index};
use grid_snake::snake::{Cell, Snake};

/// Plays `ticks` steps with pseudo-random turns drawn from `seed`, checking
/// the per-tick invariants along the way.
fn random_walk(seed: u64, ticks: usize) {
    let mut state = GameState::new_with_seed(seed).expect("initial food");
    let mut steering = RngSource::seeded(seed.wrapping_add(1));

    for _ in 0..ticks {
        if random_index(&mut steering, 3) == 0 {
            let turn = Direction::ALL[random_index(&mut steering, 4) as usize];
            let _ = state.set_direction(turn);
        }

        let len_before = state.snake().len();
        let score_before = state.score();
        let food_before = state.food();
        let next = state.snake().head().step(state.pending_direction());

        let outcome = state.step().expect("a short walk never fills the board");
        match outcome {
            StepOutcome::Moved => {
                assert_ne!(next, food_before);
                assert_eq!(state.snake().len(), len_before);
                assert_eq!(state.score(), score_before);
            }
            StepOutcome::Ate => {
                assert_eq!(state.snake().head(), food_before);
                assert_eq!(state.snake().len(), len_before + 1);
                assert_eq!(state.score(), score_before + 1);
            }
            StepOutcome::Died(_) | StepOutcome::Idle => {
                assert!(state.is_game_over());
                assert_eq!(state.snake().len(), len_before);
                assert_eq!(state.score(), score_before);
                return;
            }
        }

        assert!(!state.snake().occupies(state.food()));
        let unique: std::collections::HashSet<Cell> = state.snake().segments().copied().collect();
        assert_eq!(unique.len(), state.snake().len(), "snake overlaps itself");
    }
}

#[test]
fn random_walks_keep_invariants() {
    for seed in 0..64 {
        random_walk(seed, 400);
    }
}

#[test]
fn all_zero_source_places_food_at_origin() {
    let snake = Snake::new(Cell::new(10, 10), Direction::Right, 3);
    let mut source = ScriptedSource::constant(0.0);

    assert_eq!(
        place_food(&snake, GridSize::DEFAULT, &mut source),
        Ok(Cell::new(0, 0))
    );
}

#[test]
fn placed_food_is_always_free() {
    let mut source = RngSource::seeded(2024);
    let snake = Snake::from_segments(
        (0..20)
            .map(|x| Cell::new(x, 0))
            .chain((0..20).rev().map(|x| Cell::new(x, 1)))
            .collect(),
        Direction::Left,
    );

    for _ in 0..500 {
        let food = place_food(&snake, GridSize::DEFAULT, &mut source).expect("free cells remain");
        assert!(!snake.occupies(food));
        assert!(GridSize::DEFAULT.contains(food));
    }
}

#[test]
fn opposite_requests_never_change_the_pending_heading() {
    let mut state = GameState::new_with_seed(3).expect("initial food");

    for direction in Direction::ALL {
        let _ = state.set_direction(direction);
        let _ = state.step();
        if state.is_game_over() {
            break;
        }

        let committed = state.direction();
        let pending = state.pending_direction();
        assert!(!state.set_direction(committed.opposite()));
        assert_eq!(state.pending_direction(), pending);
    }
}

#[test]
fn seeded_source_is_in_unit_interval() {
    let mut source = RngSource::seeded(8);
    for _ in 0..100 {
        let value = source.next_unit();
        assert!((0.0..1.0).contains(&value));
    }
}
