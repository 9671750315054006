use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::{GameStatus, Snapshot};

/// Renders the one-line HUD below the board and returns the area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(hud_area);

    frame.render_widget(
        Paragraph::new(score_line(snapshot)).alignment(Alignment::Left),
        left,
    );
    frame.render_widget(
        Paragraph::new(status_line(snapshot)).alignment(Alignment::Right),
        right,
    );

    play_area
}

fn score_line(snapshot: &Snapshot) -> Line<'static> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(snapshot.score.to_string(), value),
        Span::styled("  Length ", label),
        Span::styled(snapshot.length().to_string(), value),
    ])
}

fn status_line(snapshot: &Snapshot) -> Line<'static> {
    let label = Style::default().fg(Color::DarkGray);

    Line::from(vec![
        Span::styled("Speed ", label),
        Span::styled(
            snapshot.speed_level.to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("  ", label),
        Span::styled(status_text(snapshot.status), status_style(snapshot.status)),
    ])
}

fn status_text(status: GameStatus) -> &'static str {
    match status {
        GameStatus::NotStarted => "ready",
        GameStatus::Running => "running",
        GameStatus::Paused => "paused",
        GameStatus::GameOver => "game over",
        GameStatus::Won => "board full",
    }
}

fn status_style(status: GameStatus) -> Style {
    let color = match status {
        GameStatus::Running => Color::Green,
        GameStatus::Paused => Color::Yellow,
        GameStatus::GameOver => Color::Red,
        GameStatus::Won => Color::Magenta,
        GameStatus::NotStarted => Color::DarkGray,
    };
    Style::default().fg(color)
}

#[cfg(test)]
mod tests {
    use super::status_text;
    use crate::game::GameStatus;

    #[test]
    fn every_status_has_hud_text() {
        for status in [
            GameStatus::NotStarted,
            GameStatus::Running,
            GameStatus::Paused,
            GameStatus::GameOver,
            GameStatus::Won,
        ] {
            assert!(!status_text(status).is_empty());
        }
    }
}
