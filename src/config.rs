use ratatui::style::Color;
use ratatui::symbols::border;

use crate::snake::Cell;

/// Width and height of the square board, in cells.
pub const GRID_SIZE: u16 = 20;

/// Number of segments the snake starts with.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 120;

/// Smallest tick interval accepted from settings or the command line.
pub const MIN_TICK_INTERVAL_MS: u64 = 40;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// The standard `GRID_SIZE x GRID_SIZE` board.
    pub const DEFAULT: Self = Self {
        width: GRID_SIZE,
        height: GRID_SIZE,
    };

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns true when `cell` lies on the board.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < i32::from(self.width)
            && cell.y < i32::from(self.height)
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let width = i32::from(self.width);
        let height = i32::from(self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell { x, y }))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Colors applied to the board, the snake and the HUD.
#[derive(Debug)]
pub struct Theme {
    pub board: Color,
    /// Alternate board shade used for a faint checkerboard.
    pub grid: Color,
    pub snake_body: Color,
    pub snake_head: Color,
    pub food: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// The dark board with green snake and red food.
pub const THEME_CLASSIC: Theme = Theme {
    board: Color::Rgb(0x2b, 0x2b, 0x2b),
    grid: Color::Rgb(0x3a, 0x3a, 0x3a),
    snake_body: Color::Rgb(0x3b, 0xb2, 0x73),
    snake_head: Color::Rgb(0x2a, 0x8a, 0x5a),
    food: Color::Rgb(0xe3, 0x4f, 0x4f),
    border_fg: Color::Rgb(0x3a, 0x3a, 0x3a),
    border_bg: Color::Reset,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Rgb(0x3b, 0xb2, 0x73),
    menu_footer: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left and right columns: `█`
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Terminal columns used per board cell, so cells look roughly square.
pub const CELL_COLUMNS: u16 = 2;

/// Glyph painted for an empty cell or a snake segment (colored via background).
pub const GLYPH_CELL: &str = "  ";

/// Glyph painted for food.
pub const GLYPH_FOOD: &str = "●●";

#[cfg(test)]
mod tests {
    use super::{GRID_SIZE, GridSize};
    use crate::snake::Cell;

    #[test]
    fn default_grid_is_twenty_square() {
        assert_eq!(GridSize::default().total_cells(), 400);
        assert_eq!(GridSize::DEFAULT.width, GRID_SIZE);
    }

    #[test]
    fn contains_rejects_cells_past_each_edge() {
        let bounds = GridSize {
            width: 4,
            height: 3,
        };

        assert!(bounds.contains(Cell { x: 0, y: 0 }));
        assert!(bounds.contains(Cell { x: 3, y: 2 }));
        assert!(!bounds.contains(Cell { x: -1, y: 0 }));
        assert!(!bounds.contains(Cell { x: 0, y: -1 }));
        assert!(!bounds.contains(Cell { x: 4, y: 0 }));
        assert!(!bounds.contains(Cell { x: 0, y: 3 }));
    }

    #[test]
    fn cells_are_row_major() {
        let bounds = GridSize {
            width: 2,
            height: 2,
        };
        let cells: Vec<Cell> = bounds.cells().collect();

        assert_eq!(
            cells,
            vec![
                Cell { x: 0, y: 0 },
                Cell { x: 1, y: 0 },
                Cell { x: 0, y: 1 },
                Cell { x: 1, y: 1 },
            ]
        );
    }
}
