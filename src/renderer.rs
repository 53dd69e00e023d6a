use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{BORDER_HALF_BLOCK, CELL_COLUMNS, GLYPH_CELL, GLYPH_FOOD, GridSize, Theme};
use crate::game::{GameState, GameStatus};
use crate::snake::Cell;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Renders the full game frame from immutable state.
pub fn render<R>(frame: &mut Frame<'_>, state: &GameState<R>, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, theme);

    let bounds = state.bounds();
    let board_area = centered_board(play_area, bounds);
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_board(frame, inner, bounds, theme);
    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match state.status() {
        GameStatus::Paused => render_pause_menu(frame, board_area, theme),
        GameStatus::GameOver => {
            render_game_over_menu(frame, board_area, state.score(), state.death_reason(), theme);
        }
        GameStatus::Playing => {}
    }
}

/// Centers a bordered board of `bounds` cells inside `area`.
#[must_use]
pub fn centered_board(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds.width.saturating_mul(CELL_COLUMNS).saturating_add(2);
    let height = bounds.height.saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    board
}

fn render_board(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for cell in bounds.cells() {
        let Some((x, y)) = cell_to_terminal(inner, bounds, cell) else {
            continue;
        };
        let shade = if (cell.x + cell.y) % 2 == 0 {
            theme.board
        } else {
            theme.grid
        };
        buffer.set_string(x, y, GLYPH_CELL, Style::new().bg(shade));
    }
}

fn render_food<R>(frame: &mut Frame<'_>, inner: Rect, state: &GameState<R>, theme: &Theme) {
    let Some((x, y)) = cell_to_terminal(inner, state.bounds(), state.food()) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake<R>(frame: &mut Frame<'_>, inner: Rect, state: &GameState<R>, theme: &Theme) {
    let head = state.snake().head();
    let buffer = frame.buffer_mut();

    // Body first, head last so it stays visible over a collision.
    for segment in state.snake().segments().skip(1) {
        if let Some((x, y)) = cell_to_terminal(inner, state.bounds(), *segment) {
            buffer.set_string(x, y, GLYPH_CELL, Style::new().bg(theme.snake_body));
        }
    }

    if let Some((x, y)) = cell_to_terminal(inner, state.bounds(), head) {
        buffer.set_string(
            x,
            y,
            GLYPH_CELL,
            Style::new()
                .bg(theme.snake_head)
                .add_modifier(Modifier::BOLD),
        );
    }
}

/// Maps a board cell to the terminal position of its left column.
#[must_use]
pub fn cell_to_terminal(inner: Rect, bounds: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !bounds.contains(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
