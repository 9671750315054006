use std::time::Duration;

use crate::collision::Collision;
use crate::config::INITIAL_DIRECTION;
use crate::grid::Cell;
use crate::input::Direction;
use crate::snake::Snake;
use crate::speed::SpeedLevel;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    NotStarted,
    Running,
    Paused,
    GameOver,
    /// The snake fills the whole grid; no cell is left for food.
    Won,
}

impl GameStatus {
    /// Returns true for the statuses that end a game.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::GameOver | Self::Won)
    }
}

/// Complete mutable state of one game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Cell>,
    pub direction: Direction,
    pub score: u32,
    pub status: GameStatus,
    pub tick_count: u64,
    pub death_cause: Option<Collision>,
}

impl GameState {
    /// Creates the pre-game state: starting snake, no food, not started.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snake: Snake::initial(),
            food: None,
            direction: INITIAL_DIRECTION,
            score: 0,
            status: GameStatus::NotStarted,
            tick_count: 0,
            death_cause: None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only copy of the game handed to renderers and scoreboards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub status: GameStatus,
    pub direction: Direction,
    pub speed_level: SpeedLevel,
    pub tick_count: u64,
    pub death_cause: Option<Collision>,
    pub grid_width: u16,
    pub grid_height: u16,
}

impl Snapshot {
    #[must_use]
    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.snake.len()
    }
}

/// Notifications emitted by the engine for UI and audio collaborators.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    FoodEaten {
        score: u32,
    },
    GameOver {
        score: u32,
        length: usize,
        cause: Collision,
    },
    BoardFull {
        score: u32,
        length: usize,
    },
    SpeedChanged {
        level: SpeedLevel,
        interval: Duration,
    },
}
