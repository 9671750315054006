use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Picks a uniformly random free cell by rejection sampling.
///
/// Returns `None` when the snake already covers every cell of the grid, in
/// which case no free cell exists and sampling would never terminate.
#[must_use]
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Cell> {
    if snake.len() >= grid.total_cells() {
        return None;
    }

    let width = i32::from(grid.width());
    let height = i32::from(grid.height());

    loop {
        let candidate = Cell::new(rng.gen_range(0..width), rng.gen_range(0..height));
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::spawn;
    use crate::grid::{Cell, Grid};
    use crate::snake::Snake;

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
        ])
        .expect("non-empty body");
        let grid = Grid::new(8, 6);

        for _ in 0..100 {
            let food = spawn(&mut rng, grid, &snake).expect("grid has free cells");
            assert!(!snake.occupies(food));
            assert!(grid.contains(food));
        }
    }

    #[test]
    fn single_free_cell_is_always_found() {
        let mut rng = StdRng::seed_from_u64(11);
        let snake = Snake::from_segments(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)])
            .expect("non-empty body");

        assert_eq!(spawn(&mut rng, Grid::new(2, 2), &snake), Some(Cell::new(0, 1)));
    }

    #[test]
    fn full_board_yields_no_food() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::from_segments(vec![
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(0, 1),
        ])
        .expect("non-empty body");

        assert_eq!(spawn(&mut rng, Grid::new(2, 2), &snake), None);
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let snake = Snake::initial();
        let grid = Grid::new(30, 20);
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            assert_eq!(spawn(&mut first, grid, &snake), spawn(&mut second, grid, &snake));
        }
    }
}
