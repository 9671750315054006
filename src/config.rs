use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;

use crate::input::Direction;

/// Logical grid dimensions in whole cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Derives a cell grid from a pixel canvas, flooring to whole cells.
    ///
    /// A zero `cell_size` yields an empty grid rather than dividing by zero.
    #[must_use]
    pub fn from_pixels(canvas_width: u32, canvas_height: u32, cell_size: u32) -> Self {
        if cell_size == 0 {
            return Self {
                width: 0,
                height: 0,
            };
        }

        let to_cells = |pixels: u32| u16::try_from(pixels / cell_size).unwrap_or(u16::MAX);
        Self {
            width: to_cells(canvas_width),
            height: to_cells(canvas_height),
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Edge length of one grid cell in pixels.
pub const CELL_SIZE_PX: u32 = 20;

/// Default canvas width in pixels (30 cells).
pub const DEFAULT_CANVAS_WIDTH_PX: u32 = 600;

/// Default canvas height in pixels (20 cells).
pub const DEFAULT_CANVAS_HEIGHT_PX: u32 = 400;

/// Score granted per food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Snake body at the start of every game, head first.
pub const INITIAL_SNAKE: [(i32, i32); 3] = [(5, 10), (4, 10), (3, 10)];

/// Heading at the start of every game.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// How long the driver loop waits for terminal input before redrawing.
pub const FRAME_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Half-block border set: solid side faces the play area.
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

pub const GLYPH_SNAKE_HEAD: &str = "█";
pub const GLYPH_SNAKE_BODY: &str = "▓";
pub const GLYPH_FOOD: &str = "●";

pub const COLOR_SNAKE_HEAD: Color = Color::Green;
pub const COLOR_SNAKE_BODY: Color = Color::LightGreen;
pub const COLOR_FOOD: Color = Color::LightRed;
pub const COLOR_BORDER: Color = Color::DarkGray;
