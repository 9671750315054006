use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// What a fatal move ran into.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfBody,
}

/// Checks `candidate_head` against the grid and the snake body as it is
/// before the move is applied.
///
/// Body segments are scanned from index 1 onward. When the move does not
/// grow the snake the tail vacates its cell in the same tick, so moving onto
/// the current tail is allowed.
#[must_use]
pub fn check(candidate_head: Cell, snake: &Snake, grid: Grid, grows: bool) -> Option<Collision> {
    if !grid.contains(candidate_head) {
        return Some(Collision::Wall);
    }

    let body_len = snake.len();
    let scanned = if grows { body_len } else { body_len - 1 };

    let hits_body = snake
        .segments()
        .take(scanned)
        .skip(1)
        .any(|segment| *segment == candidate_head);

    hits_body.then_some(Collision::SelfBody)
}

/// Returns true when moving the head onto `candidate_head` ends the game.
#[must_use]
pub fn is_fatal(candidate_head: Cell, snake: &Snake, grid: Grid, grows: bool) -> bool {
    check(candidate_head, snake, grid, grows).is_some()
}
