use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::GameError;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step `(dx, dy)`; `y` grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Whether a snake heading `self` may turn to `next`. Only a reversal is
    /// refused; keeping the heading counts as a turn.
    #[must_use]
    pub fn can_turn_to(self, next: Self) -> bool {
        next != self.opposite()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(GameError::InvalidDirection(s.to_owned())),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Reset,
    Quit,
}

impl GameInput {
    /// Maps a terminal key press to a game input.
    ///
    /// Arrows and WASD steer, space or `p` pauses, `r` or Enter resets, and
    /// `q`, Esc or Ctrl-C quit. Key releases and repeats are ignored.
    #[must_use]
    pub fn from_key_event(event: KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        match (event.modifiers, event.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Self::Quit),
            (_, KeyCode::Up) => Some(Self::Direction(Direction::Up)),
            (_, KeyCode::Down) => Some(Self::Direction(Direction::Down)),
            (_, KeyCode::Left) => Some(Self::Direction(Direction::Left)),
            (_, KeyCode::Right) => Some(Self::Direction(Direction::Right)),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                match c.to_ascii_lowercase() {
                    'w' => Some(Self::Direction(Direction::Up)),
                    's' => Some(Self::Direction(Direction::Down)),
                    'a' => Some(Self::Direction(Direction::Left)),
                    'd' => Some(Self::Direction(Direction::Right)),
                    ' ' | 'p' => Some(Self::Pause),
                    'r' => Some(Self::Reset),
                    'q' => Some(Self::Quit),
                    _ => None,
                }
            }
            (_, KeyCode::Enter) => Some(Self::Reset),
            (_, KeyCode::Esc) => Some(Self::Quit),
            _ => None,
        }
    }
}
