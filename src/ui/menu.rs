use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::DeathReason;

/// Draws the pause popup over the board.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        title("PAUSED", theme),
        Line::from(""),
        Line::from("[Space]/[P] Resume"),
        Line::from("[R] Reset · [Q] Quit"),
    ];
    render_popup(frame, area, lines, " pause ", theme);
}

/// Draws the game-over popup with the final score and cause.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    let lines = vec![
        title("GAME OVER", theme),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(death_reason.map_or("", cause_text)),
        Line::from(""),
        Line::from("[R]/[Enter] Play Again"),
        Line::from("[Q] Quit"),
    ];
    render_popup(frame, area, lines, " game over ", theme);
}

fn cause_text(reason: DeathReason) -> &'static str {
    match reason {
        DeathReason::WallCollision => "You hit the wall",
        DeathReason::SelfCollision => "You bit yourself",
        DeathReason::BoardFull => "The board is full!",
    }
}

fn title(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::styled(
        text,
        Style::new()
            .fg(theme.menu_title)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    lines: Vec<Line<'static>>,
    block_title: &'static str,
    theme: &Theme,
) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = centered_popup(area, 30, height);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::bordered()
                .title(block_title)
                .border_style(Style::new().fg(theme.menu_footer)),
        ),
        popup,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    center
}
