//! Grid snake: a deterministic, tick-driven snake simulation.
//!
//! The simulation core (`grid`, `collision`, `food`, `snake`, `speed`,
//! `scheduler`, `game`, `engine`) never touches a terminal. The remaining
//! modules are the terminal front end that reads snapshots and feeds
//! commands back in.

pub mod collision;
pub mod config;
pub mod engine;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod keymap;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod snake;
pub mod speed;
pub mod terminal_runtime;
pub mod ui;

pub use engine::{EngineError, SimulationEngine, TickOutcome};
pub use game::{GameEvent, GameState, GameStatus, Snapshot};
pub use grid::{Cell, Grid};
pub use input::Direction;
