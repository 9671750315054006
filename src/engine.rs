use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::collision::{self, Collision};
use crate::config::{INITIAL_SNAKE, POINTS_PER_FOOD};
use crate::food;
use crate::game::{GameEvent, GameState, GameStatus, Snapshot};
use crate::grid::{Cell, Grid};
use crate::input::{Direction, GameInput, InputQueue};
use crate::scheduler::{TickHandle, TickScheduler};
use crate::speed::{SpeedController, SpeedLevel};

/// Reasons an engine cannot be built.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum EngineError {
    #[error("a {width}x{height} grid cannot hold the starting snake plus one food cell")]
    GridTooSmall { width: u16, height: u16 },
    #[error("snake segment ({x}, {y}) lies outside the grid")]
    SnakeOutOfBounds { x: i32, y: i32 },
    #[error("food at ({x}, {y}) lies outside the grid")]
    FoodOutOfBounds { x: i32, y: i32 },
    #[error("food at ({x}, {y}) lies on the snake")]
    FoodOnSnake { x: i32, y: i32 },
}

/// What a single call to [`SimulationEngine::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed.
    Idle,
    Moved,
    Ate,
    Collided(Collision),
    BoardFull,
}

/// Owns one game and advances it one tick at a time.
///
/// Every mutation goes through `&mut self`, either in [`tick`](Self::tick) or
/// in one of the lifecycle commands. Commands that make no sense for the
/// current status are silently ignored.
#[derive(Debug)]
pub struct SimulationEngine<S: TickScheduler, R: Rng = StdRng> {
    grid: Grid,
    state: GameState,
    input: InputQueue,
    speed: SpeedController,
    scheduler: S,
    tick_handle: Option<TickHandle>,
    rng: R,
    events: Vec<GameEvent>,
}

impl<S: TickScheduler> SimulationEngine<S, StdRng> {
    /// Creates an engine whose food sequence is fully determined by `seed`.
    pub fn with_seed(
        grid: Grid,
        speed: SpeedLevel,
        scheduler: S,
        seed: u64,
    ) -> Result<Self, EngineError> {
        Self::new(grid, speed, scheduler, StdRng::seed_from_u64(seed))
    }
}

impl<S: TickScheduler, R: Rng> SimulationEngine<S, R> {
    /// Creates an engine waiting in `NotStarted`.
    pub fn new(grid: Grid, speed: SpeedLevel, scheduler: S, rng: R) -> Result<Self, EngineError> {
        Self::from_state(grid, GameState::new(), speed, scheduler, rng)
    }

    /// Creates an engine resuming from an arbitrary state.
    ///
    /// A `Running` state arms the scheduler immediately.
    pub fn from_state(
        grid: Grid,
        state: GameState,
        speed: SpeedLevel,
        scheduler: S,
        rng: R,
    ) -> Result<Self, EngineError> {
        validate_grid(grid)?;
        if let Some(outside) = state.snake.segments().find(|cell| !grid.contains(**cell)) {
            return Err(EngineError::SnakeOutOfBounds {
                x: outside.x,
                y: outside.y,
            });
        }
        if let Some(food) = state.food {
            if !grid.contains(food) {
                return Err(EngineError::FoodOutOfBounds {
                    x: food.x,
                    y: food.y,
                });
            }
            if state.snake.occupies(food) {
                return Err(EngineError::FoodOnSnake {
                    x: food.x,
                    y: food.y,
                });
            }
        }

        let mut engine = Self {
            grid,
            state,
            input: InputQueue::new(),
            speed: SpeedController::new(speed),
            scheduler,
            tick_handle: None,
            rng,
            events: Vec::new(),
        };

        if engine.state.status == GameStatus::Running {
            engine.arm();
        }

        Ok(engine)
    }

    /// Starts the first game. Ignored unless the engine is `NotStarted`.
    pub fn start(&mut self) {
        if self.state.status != GameStatus::NotStarted {
            return;
        }

        self.reset_and_run();
    }

    /// Throws away the current game and starts a fresh one from any status.
    pub fn restart(&mut self) {
        self.reset_and_run();
    }

    pub fn pause(&mut self) {
        if self.state.status != GameStatus::Running {
            return;
        }

        self.disarm();
        self.input.clear();
        self.state.status = GameStatus::Paused;
        self.events.push(GameEvent::Paused);
        log::debug!("paused at tick {}", self.state.tick_count);
    }

    pub fn resume(&mut self) {
        if self.state.status != GameStatus::Paused {
            return;
        }

        self.state.status = GameStatus::Running;
        self.arm();
        self.events.push(GameEvent::Resumed);
        log::debug!("resumed at {}", self.speed.level());
    }

    /// Pauses while running and resumes while paused.
    pub fn toggle_pause(&mut self) {
        match self.state.status {
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(),
            _ => {}
        }
    }

    /// Selects a speed level, clamping out-of-range values into `1..=5`.
    ///
    /// While running, the old cadence is cancelled and a new one armed in the
    /// same call, so no tick can fall between the two.
    pub fn set_speed_level(&mut self, level: i64) {
        self.change_speed(SpeedLevel::new(level));
    }

    /// Buffers a direction change for the next tick. Ignored unless running.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.state.status == GameStatus::Running {
            self.input.request(direction);
        }
    }

    /// Routes one front-end input to the matching command.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.request_direction(direction),
            GameInput::Confirm => match self.state.status {
                GameStatus::NotStarted => self.start(),
                GameStatus::Paused => self.resume(),
                status if status.is_finished() => self.restart(),
                _ => {}
            },
            GameInput::Pause => self.toggle_pause(),
            GameInput::Restart => self.restart(),
            GameInput::SpeedUp => self.change_speed(self.speed.level().faster()),
            GameInput::SpeedDown => self.change_speed(self.speed.level().slower()),
            GameInput::SetSpeed(level) => self.set_speed_level(i64::from(level)),
            GameInput::Quit => {}
        }
    }

    /// Advances the game by one cell.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        self.state.tick_count += 1;

        if let Some(requested) = self.input.take() {
            if !requested.is_reversal_of(self.state.direction) {
                self.state.direction = requested;
            }
        }

        let candidate = self.state.snake.head().step(self.state.direction);
        let grows = self.state.food == Some(candidate);

        if let Some(cause) = collision::check(candidate, &self.state.snake, self.grid, grows) {
            self.finish(GameStatus::GameOver);
            self.state.death_cause = Some(cause);
            self.events.push(GameEvent::GameOver {
                score: self.state.score,
                length: self.state.snake.len(),
                cause,
            });
            log::info!(
                "game over ({cause:?}) with score {} and length {}",
                self.state.score,
                self.state.snake.len()
            );
            return TickOutcome::Collided(cause);
        }

        self.state.snake.advance(candidate, grows);
        if !grows {
            return TickOutcome::Moved;
        }

        self.state.score += POINTS_PER_FOOD;
        self.events.push(GameEvent::FoodEaten {
            score: self.state.score,
        });

        self.state.food = food::spawn(&mut self.rng, self.grid, &self.state.snake);
        if self.state.food.is_none() {
            self.finish(GameStatus::Won);
            self.events.push(GameEvent::BoardFull {
                score: self.state.score,
                length: self.state.snake.len(),
            });
            log::info!("board full with score {}", self.state.score);
            return TickOutcome::BoardFull;
        }

        TickOutcome::Ate
    }

    /// Returns a read-only copy of the current game.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.state.snake.segments().copied().collect(),
            food: self.state.food,
            score: self.state.score,
            status: self.state.status,
            direction: self.state.direction,
            speed_level: self.speed.level(),
            tick_count: self.state.tick_count,
            death_cause: self.state.death_cause,
            grid_width: self.grid.width(),
            grid_height: self.grid.height(),
        }
    }

    /// Drains events emitted since the previous call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn speed_level(&self) -> SpeedLevel {
        self.speed.level()
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.input.peek()
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access for the driver that polls the scheduler for due ticks.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn change_speed(&mut self, level: SpeedLevel) {
        if !self.speed.set_level(level) {
            return;
        }

        if self.state.status == GameStatus::Running {
            self.arm();
        }

        self.events.push(GameEvent::SpeedChanged {
            level,
            interval: level.interval(),
        });
        log::debug!("speed set to {level}");
    }

    fn reset_and_run(&mut self) {
        self.disarm();
        self.input.clear();
        self.state = GameState::new();
        self.state.food = food::spawn(&mut self.rng, self.grid, &self.state.snake);
        self.state.status = GameStatus::Running;
        self.arm();
        self.events.push(GameEvent::Started);
        log::debug!("new game on {}x{} grid", self.grid.width(), self.grid.height());
    }

    fn finish(&mut self, status: GameStatus) {
        self.disarm();
        self.input.clear();
        self.state.status = status;
    }

    /// Cancels any previous cadence and arms one at the current speed.
    fn arm(&mut self) {
        self.disarm();
        self.tick_handle = Some(self.scheduler.schedule(self.speed.interval()));
    }

    fn disarm(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            self.scheduler.cancel(handle);
        }
    }
}

fn validate_grid(grid: Grid) -> Result<(), EngineError> {
    let initial_fits = INITIAL_SNAKE
        .iter()
        .all(|&cell| grid.contains(Cell::from(cell)));

    if !initial_fits || grid.total_cells() <= INITIAL_SNAKE.len() {
        return Err(EngineError::GridTooSmall {
            width: grid.width(),
            height: grid.height(),
        });
    }

    Ok(())
}
