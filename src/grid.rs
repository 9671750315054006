use crate::config::GridSize;
use crate::input::Direction;

/// One discrete grid coordinate.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    ///
    /// Up decreases `y`; the origin is the top-left corner.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Down => Self::new(self.x, self.y + 1),
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Fixed playing field. Pure geometry, no mutable state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    size: GridSize,
}

impl Grid {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: GridSize { width, height },
        }
    }

    /// Builds the grid covering a pixel canvas, rounding down to whole cells.
    #[must_use]
    pub fn from_pixels(canvas_width: u32, canvas_height: u32, cell_size: u32) -> Self {
        Self {
            size: GridSize::from_pixels(canvas_width, canvas_height, cell_size),
        }
    }

    #[must_use]
    pub fn width(self) -> u16 {
        self.size.width
    }

    #[must_use]
    pub fn height(self) -> u16 {
        self.size.height
    }

    #[must_use]
    pub fn total_cells(self) -> usize {
        self.size.total_cells()
    }

    /// Returns true iff `0 <= x < width` and `0 <= y < height`.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < i32::from(self.size.width)
            && cell.y < i32::from(self.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Grid};
    use crate::input::Direction;

    #[test]
    fn contains_is_half_open_on_both_axes() {
        let grid = Grid::new(30, 20);

        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(29, 19)));
        assert!(!grid.contains(Cell::new(30, 5)));
        assert!(!grid.contains(Cell::new(5, 20)));
        assert!(!grid.contains(Cell::new(-1, 5)));
        assert!(!grid.contains(Cell::new(5, -1)));
    }

    #[test]
    fn grid_from_default_canvas_is_thirty_by_twenty() {
        let grid = Grid::from_pixels(600, 400, 20);

        assert_eq!(grid.width(), 30);
        assert_eq!(grid.height(), 20);
        assert_eq!(grid.total_cells(), 600);
    }

    #[test]
    fn step_offsets_one_cell() {
        let origin = Cell::new(5, 10);

        assert_eq!(origin.step(Direction::Up), Cell::new(5, 9));
        assert_eq!(origin.step(Direction::Down), Cell::new(5, 11));
        assert_eq!(origin.step(Direction::Left), Cell::new(4, 10));
        assert_eq!(origin.step(Direction::Right), Cell::new(6, 10));
    }
}
