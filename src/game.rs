use rand::rngs::StdRng;

use crate::config::{GridSize, INITIAL_SNAKE_LENGTH};
use crate::error::GameError;
use crate::food::place_food;
use crate::input::Direction;
use crate::random::{RandomSource, RngSource};
use crate::snake::{Cell, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    /// The snake filled the board and no food could be placed.
    BoardFull,
}

/// What a single call to [`GameState::step`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// Paused or game over; nothing changed.
    Idle,
    Moved,
    Ate,
    Died(DeathReason),
}

/// Complete game state for one session.
///
/// The state is only changed through [`step`](Self::step),
/// [`set_direction`](Self::set_direction), [`toggle_pause`](Self::toggle_pause)
/// and [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq)]
pub struct GameState<R = RngSource<StdRng>> {
    snake: Snake,
    food: Cell,
    score: u32,
    tick_count: u64,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    bounds: GridSize,
    source: R,
}

impl GameState<RngSource<StdRng>> {
    /// Creates a deterministic state for tests and reproducible sessions.
    ///
    /// # Errors
    ///
    /// Fails only if the initial food cannot be placed.
    pub fn new_with_seed(seed: u64) -> Result<Self, GameError> {
        Self::new(RngSource::seeded(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Creates the initial state on the standard board: a three-cell snake
    /// with its head at (10, 10) heading right, and food placed from `source`.
    ///
    /// # Errors
    ///
    /// Fails only if the initial food cannot be placed.
    pub fn new(source: R) -> Result<Self, GameError> {
        Self::with_bounds(GridSize::DEFAULT, source)
    }

    /// Like [`new`](Self::new) on a board of `bounds`, head at the center.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BoardFull`] if the board is too small to hold the
    /// initial snake and a piece of food.
    pub fn with_bounds(bounds: GridSize, mut source: R) -> Result<Self, GameError> {
        let snake = initial_snake(bounds);
        let food = place_food(&snake, bounds, &mut source)?;

        Ok(Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Playing,
            death_reason: None,
            bounds,
            source,
        })
    }

    /// Builds a state from an explicit layout, for scripted scenarios.
    #[must_use]
    pub fn with_layout(bounds: GridSize, snake: Snake, food: Cell, source: R) -> Self {
        Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Playing,
            death_reason: None,
            bounds,
            source,
        }
    }

    /// Rebuilds the initial state, keeping the random source and the bounds.
    ///
    /// # Errors
    ///
    /// Fails only if the initial food cannot be placed.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let snake = initial_snake(self.bounds);
        self.food = place_food(&snake, self.bounds, &mut self.source)?;
        self.snake = snake;
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Playing;
        self.death_reason = None;
        Ok(())
    }

    /// Advances the game by one tick.
    ///
    /// Commits the buffered heading, moves the head one cell, and ends the
    /// game on a wall or body hit. Eating food grows the snake by one and
    /// places new food; otherwise the tail follows. Paused and finished
    /// games are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BoardFull`] when the snake has just filled the
    /// board. The game is over at that point.
    pub fn step(&mut self) -> Result<StepOutcome, GameError> {
        if self.status != GameStatus::Playing {
            return Ok(StepOutcome::Idle);
        }

        self.snake.commit_direction();
        let next = self.snake.next_head();

        let collision = if !self.bounds.contains(next) {
            Some(DeathReason::WallCollision)
        } else if self.snake.hits_body(next) {
            Some(DeathReason::SelfCollision)
        } else {
            None
        };
        if let Some(reason) = collision {
            self.end(reason);
            return Ok(StepOutcome::Died(reason));
        }

        self.tick_count += 1;
        let ate = next == self.food;
        self.snake.advance(next, ate);
        if !ate {
            return Ok(StepOutcome::Moved);
        }

        self.score += 1;
        match place_food(&self.snake, self.bounds, &mut self.source) {
            Ok(food) => {
                self.food = food;
                Ok(StepOutcome::Ate)
            }
            Err(error) => {
                self.end(DeathReason::BoardFull);
                Err(error)
            }
        }
    }

    /// Buffers a heading for the next tick. Reversals of the committed heading
    /// are ignored; returns whether the request was accepted.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        let accepted = self.snake.set_direction(requested);
        if !accepted {
            log::debug!(
                "ignored reversal to {requested} while heading {}",
                self.snake.direction()
            );
        }
        accepted
    }

    /// Switches between playing and paused. Has no effect once the game is over.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            GameStatus::GameOver => GameStatus::GameOver,
        };
    }

    fn end(&mut self, reason: DeathReason) {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        log::info!(
            "game over after {} ticks: {reason:?}, score {}",
            self.tick_count,
            self.score
        );
    }
}

impl<R> GameState<R> {
    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Cell {
        self.food
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    /// The heading used by the most recent tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    /// The heading the next tick will commit.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.snake.pending_direction()
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Number of ticks that moved the snake.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

fn initial_snake(bounds: GridSize) -> Snake {
    let head = Cell::new(i32::from(bounds.width / 2), i32::from(bounds.height / 2));
    Snake::new(head, Direction::Right, INITIAL_SNAKE_LENGTH)
}
