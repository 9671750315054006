use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use grid_snake::collision::Collision;
use grid_snake::game::{GameEvent, GameState, GameStatus};
use grid_snake::grid::{Cell, Grid};
use grid_snake::input::Direction;
use grid_snake::scheduler::ManualScheduler;
use grid_snake::snake::Snake;
use grid_snake::speed::SpeedLevel;
use grid_snake::{SimulationEngine, TickOutcome};

type Engine = SimulationEngine<ManualScheduler>;

fn initial_cells() -> Vec<Cell> {
    vec![Cell::new(5, 10), Cell::new(4, 10), Cell::new(3, 10)]
}

fn engine_from(grid: Grid, state: GameState) -> Engine {
    SimulationEngine::from_state(
        grid,
        state,
        SpeedLevel::new(3),
        ManualScheduler::new(),
        StdRng::seed_from_u64(42),
    )
    .expect("state fits the grid")
}

fn running(snake: Vec<Cell>, direction: Direction, food: Cell) -> GameState {
    GameState {
        snake: Snake::from_segments(snake).expect("non-empty body"),
        food: Some(food),
        direction,
        status: GameStatus::Running,
        ..GameState::new()
    }
}

#[test]
fn scenario_a_plain_move_shifts_the_body() {
    let mut engine = engine_from(
        Grid::new(30, 20),
        running(initial_cells(), Direction::Right, Cell::new(20, 3)),
    );

    assert_eq!(engine.tick(), TickOutcome::Moved);

    let snapshot = engine.snapshot();
    assert_eq!(
        snapshot.snake,
        vec![Cell::new(6, 10), Cell::new(5, 10), Cell::new(4, 10)]
    );
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.status, GameStatus::Running);
}

#[test]
fn scenario_b_eating_grows_and_respawns_food() {
    let mut engine = engine_from(
        Grid::new(30, 20),
        running(initial_cells(), Direction::Right, Cell::new(6, 10)),
    );

    assert_eq!(engine.tick(), TickOutcome::Ate);

    let snapshot = engine.snapshot();
    assert_eq!(
        snapshot.snake,
        vec![
            Cell::new(6, 10),
            Cell::new(5, 10),
            Cell::new(4, 10),
            Cell::new(3, 10)
        ]
    );
    assert_eq!(snapshot.score, 10);
    let food = snapshot.food.expect("grid has room for new food");
    assert!(!snapshot.snake.contains(&food));
    assert_eq!(engine.take_events(), vec![GameEvent::FoodEaten { score: 10 }]);
}

#[test]
fn scenario_c_leaving_left_edge_ends_the_game() {
    let mut engine = engine_from(
        Grid::new(30, 20),
        running(
            vec![Cell::new(0, 10), Cell::new(1, 10), Cell::new(2, 10)],
            Direction::Left,
            Cell::new(20, 3),
        ),
    );

    assert_eq!(engine.tick(), TickOutcome::Collided(Collision::Wall));
    assert_eq!(engine.status(), GameStatus::GameOver);
    assert_eq!(
        engine.take_events(),
        vec![GameEvent::GameOver {
            score: 0,
            length: 3,
            cause: Collision::Wall
        }]
    );

    // Further ticks change nothing.
    assert_eq!(engine.tick(), TickOutcome::Idle);
    assert_eq!(engine.snapshot().head(), Some(Cell::new(0, 10)));
}

#[test]
fn scenario_d_restart_always_yields_initial_configuration() {
    let mut engine = engine_from(
        Grid::new(30, 20),
        GameState {
            score: 990,
            tick_count: 4_000,
            ..running(
                vec![
                    Cell::new(0, 0),
                    Cell::new(1, 0),
                    Cell::new(2, 0),
                    Cell::new(3, 0),
                    Cell::new(4, 0),
                ],
                Direction::Up,
                Cell::new(20, 3),
            )
        },
    );

    engine.tick();
    assert_eq!(engine.status(), GameStatus::GameOver);

    engine.restart();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.snake, initial_cells());
    assert_eq!(snapshot.direction, Direction::Right);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.status, GameStatus::Running);
    assert_eq!(snapshot.death_cause, None);
    assert!(!snapshot.snake.contains(&snapshot.food.expect("food placed")));
    assert_eq!(
        engine.scheduler().armed_interval(),
        Some(Duration::from_millis(150))
    );
}

#[test]
fn stepwise_food_collection_turn_and_wall_collision() {
    let mut engine = engine_from(
        Grid::new(30, 20),
        running(initial_cells(), Direction::Right, Cell::new(6, 10)),
    );

    assert_eq!(engine.tick(), TickOutcome::Ate);
    assert_eq!(engine.snapshot().length(), 4);

    engine.request_direction(Direction::Up);
    let mut eaten = 1;
    for _ in 0..10 {
        match engine.tick() {
            TickOutcome::Moved => {}
            TickOutcome::Ate => eaten += 1,
            other => panic!("unexpected outcome {other:?}"),
        }
    }
    assert_eq!(engine.snapshot().head(), Some(Cell::new(6, 0)));
    assert_eq!(engine.snapshot().score, 10 * eaten);

    assert_eq!(engine.tick(), TickOutcome::Collided(Collision::Wall));
    assert_eq!(engine.snapshot().score, 10 * eaten);
    assert_eq!(engine.status(), GameStatus::GameOver);
}

#[test]
fn filling_the_board_wins() {
    // Serpentine path over a 6x11 board; the snake covers all but the first cell.
    let grid = Grid::new(6, 11);
    let mut path = Vec::new();
    for y in 0..11 {
        if y % 2 == 0 {
            path.extend((0..6).map(|x| Cell::new(x, y)));
        } else {
            path.extend((0..6).rev().map(|x| Cell::new(x, y)));
        }
    }
    let food = path[0];
    let body = path[1..].to_vec();

    let mut engine = engine_from(grid, running(body, Direction::Left, food));

    assert_eq!(engine.tick(), TickOutcome::BoardFull);
    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.snapshot().food, None);
    assert_eq!(engine.snapshot().length(), grid.total_cells());
    assert!(!engine.scheduler().is_armed());
    assert_eq!(
        engine.take_events(),
        vec![
            GameEvent::FoodEaten { score: 10 },
            GameEvent::BoardFull {
                score: 10,
                length: 66
            }
        ]
    );
}

#[test]
fn same_seed_replays_identically() {
    let play = |seed: u64| {
        let mut engine = SimulationEngine::with_seed(
            Grid::new(30, 20),
            SpeedLevel::new(2),
            ManualScheduler::new(),
            seed,
        )
        .expect("default grid is large enough");
        engine.start();
        let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
        for step in 0..40 {
            if step % 5 == 0 {
                engine.request_direction(turns[(step / 5) % turns.len()]);
            }
            engine.tick();
        }
        engine.snapshot()
    };

    assert_eq!(play(7), play(7));
}
