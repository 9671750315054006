use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    BORDER_HALF_BLOCK, COLOR_BORDER, COLOR_FOOD, COLOR_SNAKE_BODY, COLOR_SNAKE_HEAD, GLYPH_FOOD,
    GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD,
};
use crate::game::{GameStatus, Snapshot};
use crate::grid::Cell;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Terminal columns used per grid cell so cells look roughly square.
const COLUMNS_PER_CELL: u16 = 2;

/// Renders the full frame from a snapshot. Never mutates the game.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(COLOR_BORDER));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, snapshot);
    render_snake(frame, inner, snapshot);

    match snapshot.status {
        GameStatus::NotStarted => render_start_menu(frame, play_area, snapshot.speed_level),
        GameStatus::Paused => render_pause_menu(frame, play_area),
        GameStatus::GameOver | GameStatus::Won => {
            render_game_over_menu(frame, play_area, snapshot.score, snapshot.death_cause);
        }
        GameStatus::Running => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot) {
    let Some(food) = snapshot.food else {
        return;
    };
    let Some((x, y)) = cell_to_terminal(inner, snapshot, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(COLOR_FOOD));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot) {
    let head_style = Style::new()
        .fg(COLOR_SNAKE_HEAD)
        .add_modifier(Modifier::BOLD);
    let body_style = Style::new().fg(COLOR_SNAKE_BODY);

    let buffer = frame.buffer_mut();
    for (index, segment) in snapshot.snake.iter().enumerate() {
        let Some((x, y)) = cell_to_terminal(inner, snapshot, *segment) else {
            continue;
        };

        let (glyph, style) = if index == 0 {
            (GLYPH_SNAKE_HEAD, head_style)
        } else {
            (GLYPH_SNAKE_BODY, body_style)
        };

        for column in 0..COLUMNS_PER_CELL {
            buffer.set_string(x + column, y, glyph, style);
        }
    }
}

/// Maps a grid cell to the left terminal column of its on-screen slot.
fn cell_to_terminal(inner: Rect, snapshot: &Snapshot, cell: Cell) -> Option<(u16, u16)> {
    let column = u16::try_from(cell.x).ok()?;
    let row = u16::try_from(cell.y).ok()?;
    if column >= snapshot.grid_width || row >= snapshot.grid_height {
        return None;
    }

    let x = inner
        .x
        .saturating_add(column.saturating_mul(COLUMNS_PER_CELL));
    let y = inner.y.saturating_add(row);
    if x.saturating_add(COLUMNS_PER_CELL) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use super::{cell_to_terminal, render};
    use crate::SimulationEngine;
    use crate::grid::{Cell, Grid};
    use crate::scheduler::ManualScheduler;
    use crate::speed::SpeedLevel;

    fn snapshot() -> crate::game::Snapshot {
        let mut engine = SimulationEngine::with_seed(
            Grid::new(30, 20),
            SpeedLevel::default(),
            ManualScheduler::new(),
            5,
        )
        .expect("default grid is large enough");
        engine.start();
        engine.snapshot()
    }

    #[test]
    fn cells_map_to_two_columns_each() {
        let inner = Rect::new(1, 1, 60, 20);

        assert_eq!(cell_to_terminal(inner, &snapshot(), Cell::new(0, 0)), Some((1, 1)));
        assert_eq!(cell_to_terminal(inner, &snapshot(), Cell::new(3, 2)), Some((7, 3)));
        assert_eq!(cell_to_terminal(inner, &snapshot(), Cell::new(-1, 2)), None);
        assert_eq!(cell_to_terminal(inner, &snapshot(), Cell::new(30, 2)), None);
    }

    #[test]
    fn cells_outside_small_terminal_are_clipped() {
        let inner = Rect::new(0, 0, 10, 5);

        assert_eq!(cell_to_terminal(inner, &snapshot(), Cell::new(5, 0)), None);
        assert_eq!(cell_to_terminal(inner, &snapshot(), Cell::new(0, 5)), None);
    }

    #[test]
    fn render_draws_snake_head() {
        let backend = TestBackend::new(64, 24);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        let snapshot = snapshot();

        terminal
            .draw(|frame| render(frame, &snapshot))
            .expect("drawing to a test backend never fails");

        // Border takes one cell; head (5,10) lands at column 1 + 10, row 1 + 10.
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(11, 11)].symbol(), "█");
    }
}
