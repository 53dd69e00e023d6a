use thiserror::Error;

/// Failures raised by the game core.
///
/// Collisions are not errors; they end the game through
/// [`GameStatus::GameOver`](crate::game::GameStatus::GameOver).
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum GameError {
    /// Every cell of the board is covered by the snake, so no food can be placed.
    #[error("no free cell left for food on the {width}x{height} board")]
    BoardFull { width: u16, height: u16 },

    #[error("unknown direction `{0}` (expected up, down, left or right)")]
    InvalidDirection(String),
}
