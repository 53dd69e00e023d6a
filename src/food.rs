use std::collections::HashSet;

use crate::config::GridSize;
use crate::error::GameError;
use crate::random::{RandomSource, random_index};
use crate::snake::{Cell, Snake};

/// Random draws allowed per board cell before falling back to a scan.
pub const ATTEMPTS_PER_CELL: usize = 64;

/// Picks a cell for food that the snake does not occupy.
///
/// Candidates are drawn as `(x, y)` pairs from `source` until one is free.
/// After `ATTEMPTS_PER_CELL * total_cells` rejected draws the board is
/// scanned in row-major order from the last rejected cell, wrapping around,
/// so a degenerate source cannot hang the game.
///
/// # Errors
///
/// Returns [`GameError::BoardFull`] when the snake covers every cell.
pub fn place_food<S: RandomSource + ?Sized>(
    snake: &Snake,
    bounds: GridSize,
    source: &mut S,
) -> Result<Cell, GameError> {
    let occupied: HashSet<Cell> = snake
        .segments()
        .copied()
        .filter(|cell| bounds.contains(*cell))
        .collect();

    let total = bounds.total_cells();
    if occupied.len() >= total {
        log::warn!("board full: snake covers all {total} cells");
        return Err(GameError::BoardFull {
            width: bounds.width,
            height: bounds.height,
        });
    }

    let mut last = Cell::new(0, 0);
    for _ in 0..total.saturating_mul(ATTEMPTS_PER_CELL) {
        let x = random_index(source, bounds.width);
        let y = random_index(source, bounds.height);
        let candidate = Cell::new(x, y);
        if !occupied.contains(&candidate) {
            return Ok(candidate);
        }
        last = candidate;
    }

    log::debug!(
        "food sampling exhausted its budget, scanning from ({}, {})",
        last.x,
        last.y
    );
    scan_from(last, bounds, &occupied).ok_or(GameError::BoardFull {
        width: bounds.width,
        height: bounds.height,
    })
}

fn scan_from(start: Cell, bounds: GridSize, occupied: &HashSet<Cell>) -> Option<Cell> {
    let width = usize::from(bounds.width);
    let start_index = usize::try_from(start.y).ok()? * width + usize::try_from(start.x).ok()?;
    let cells: Vec<Cell> = bounds.cells().collect();

    cells
        .iter()
        .cycle()
        .skip(start_index)
        .take(cells.len())
        .find(|cell| !occupied.contains(*cell))
        .copied()
}
