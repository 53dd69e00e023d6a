use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::{GameState, GameStatus};

const SEPARATOR: &str = " │ ";
const HELP_FULL: &str = "arrows/WASD move · space pause · r reset · q quit";
const HELP_COMPACT: &str = "WASD · spc · r · q";

/// Renders the two HUD rows at the bottom of `area` and returns the space
/// left above them.
#[must_use]
pub fn render_hud<R>(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState<R>,
    theme: &Theme,
) -> Rect {
    let [play_area, score_area, help_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(state, theme)).alignment(Alignment::Center),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(help_text(usize::from(help_area.width)))
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.menu_footer)),
        help_area,
    );

    play_area
}

fn score_line<R>(state: &GameState<R>, theme: &Theme) -> Line<'static> {
    let label = Style::new().fg(theme.hud_label);
    let value = Style::new().fg(theme.hud_value);

    let mut spans = vec![
        Span::styled("Score: ", label),
        Span::styled(state.score().to_string(), value),
        Span::styled(SEPARATOR, label),
        Span::styled("Length: ", label),
        Span::styled(state.snake().len().to_string(), value),
    ];

    if let Some(status) = status_text(state.status()) {
        spans.push(Span::styled(SEPARATOR, label));
        spans.push(Span::styled(status, Style::new().fg(theme.food)));
    }

    Line::from(spans)
}

/// Status label shown next to the score; nothing while playing.
#[must_use]
pub fn status_text(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Playing => None,
        GameStatus::Paused => Some("Paused"),
        GameStatus::GameOver => Some("Game Over"),
    }
}

fn help_text(available_width: usize) -> &'static str {
    if HELP_FULL.width() <= available_width {
        HELP_FULL
    } else {
        HELP_COMPACT
    }
}
