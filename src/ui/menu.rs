use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::collision::Collision;
use crate::speed::SpeedLevel;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, speed: SpeedLevel) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let body = vec![
        Line::from(format!("Speed: {speed}")),
        Line::from(""),
        Line::from("[Enter] Start"),
        Line::from("[1]-[5] or [+]/[-] Speed"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" start ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Use arrows/WASD to move"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        footer_row,
    );
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 60, 35);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[P]/[Space]/[Enter] Resume"),
        Line::from("[R] Restart"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the end-of-game popup for both a collision and a full board.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_cause: Option<Collision>,
) {
    let popup = centered_popup(area, 70, 45);
    frame.render_widget(Clear, popup);

    let (title, block_title) = match death_cause {
        Some(_) => ("GAME OVER", " game over "),
        None => ("BOARD FULL", " you win "),
    };

    let lines = vec![
        Line::from(title),
        Line::from(""),
        Line::from(format!("Final score: {score}")),
        Line::from(death_cause_text(death_cause)),
        Line::from(""),
        Line::from("[Enter]/[R] Play Again"),
        Line::from("[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(block_title)),
        popup,
    );
}

fn death_cause_text(death_cause: Option<Collision>) -> &'static str {
    match death_cause {
        Some(Collision::Wall) => "Cause: hit wall",
        Some(Collision::SelfBody) => "Cause: hit yourself",
        None => "No room left for food",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
