use std::collections::VecDeque;

use crate::config::INITIAL_SNAKE;
use crate::grid::Cell;

/// Ordered snake body, head at the front and tail at the back.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates the fixed three-cell starting snake, head rightmost.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            body: INITIAL_SNAKE.iter().copied().map(Cell::from).collect(),
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty body.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
        })
    }

    /// Moves the head onto `next_head`. The tail stays in place when `grow` is set.
    pub fn advance(&mut self, next_head: Cell, grow: bool) {
        self.body.push_front(next_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        // The body is never empty: constructors reject it and `advance`
        // pushes before it pops.
        self.body[0]
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Snake;
    use crate::grid::Cell;

    #[test]
    fn initial_snake_is_three_cells_head_rightmost() {
        let snake = Snake::initial();

        let cells: Vec<Cell> = snake.segments().copied().collect();
        assert_eq!(
            cells,
            vec![Cell::new(5, 10), Cell::new(4, 10), Cell::new(3, 10)]
        );
    }

    #[test]
    fn advance_without_growth_shifts_body() {
        let mut snake = Snake::initial();

        snake.advance(Cell::new(6, 10), false);

        assert_eq!(snake.head(), Cell::new(6, 10));
        assert_eq!(snake.segments().last(), Some(&Cell::new(4, 10)));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn advance_with_growth_keeps_previous_tail() {
        let mut snake = Snake::initial();

        snake.advance(Cell::new(6, 10), true);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.segments().last(), Some(&Cell::new(3, 10)));
    }

    #[test]
    fn empty_segments_are_rejected() {
        assert!(Snake::from_segments(Vec::new()).is_none());
    }
}
