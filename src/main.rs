use std::io;
use std::time::Instant;

use clap::Parser;
use crossterm::event::{self, Event};
use rand::SeedableRng;
use rand::rngs::StdRng;

use grid_snake::config::FRAME_POLL_INTERVAL;
use grid_snake::game::GameEvent;
use grid_snake::input::GameInput;
use grid_snake::keymap::map_key;
use grid_snake::scheduler::IntervalScheduler;
use grid_snake::settings::{Settings, load_settings, save_settings};
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use grid_snake::SimulationEngine;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Starting speed level, 1 (slowest) to 5 (fastest). Out-of-range values are clamped.
    #[arg(long, allow_negative_numbers = true)]
    speed: Option<i64>,

    /// Seed for a reproducible food sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Canvas width in pixels.
    #[arg(long)]
    canvas_width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    canvas_height: Option<u32>,

    /// Cell edge length in pixels; the grid floors to whole cells.
    #[arg(long)]
    cell_size: Option<u32>,

    /// Do not write the chosen speed back to the settings file.
    #[arg(long = "no-save")]
    no_save: bool,
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let cli = Cli::parse();
    let settings = resolve_settings(&cli);

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let engine = SimulationEngine::new(
        settings.grid(),
        settings.speed(),
        IntervalScheduler::new(),
        rng,
    )
    .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    install_panic_hook();
    let final_speed = run(engine)?;

    if !cli.no_save {
        let updated = Settings {
            speed_level: final_speed,
            ..settings
        };
        if let Err(error) = save_settings(&updated) {
            log::warn!("failed to save settings: {error}");
        }
    }

    Ok(())
}

fn resolve_settings(cli: &Cli) -> Settings {
    let stored = load_settings().unwrap_or_else(|error| {
        log::warn!("ignoring settings file: {error}");
        Settings::default()
    });

    Settings {
        speed_level: cli
            .speed
            .map_or(stored.speed_level, |level| {
                grid_snake::speed::SpeedLevel::new(level).get()
            }),
        canvas_width: cli.canvas_width.unwrap_or(stored.canvas_width),
        canvas_height: cli.canvas_height.unwrap_or(stored.canvas_height),
        cell_size: cli.cell_size.unwrap_or(stored.cell_size),
    }
}

/// Drives the engine until the player quits. Returns the final speed level.
fn run(mut engine: SimulationEngine<IntervalScheduler, StdRng>) -> io::Result<u8> {
    let mut session = TerminalSession::enter()?;

    loop {
        session.draw(&engine.snapshot())?;

        let timeout = engine
            .scheduler()
            .time_until_due(Instant::now())
            .map_or(FRAME_POLL_INTERVAL, |due| due.min(FRAME_POLL_INTERVAL));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    Some(GameInput::Quit) => break,
                    Some(input) => engine.apply_input(input),
                    None => {}
                }
            }
        }

        if engine.scheduler_mut().take_due(Instant::now()) {
            engine.tick();
        }

        for game_event in engine.take_events() {
            log_event(game_event);
        }
    }

    Ok(engine.speed_level().get())
}

fn log_event(game_event: GameEvent) {
    match game_event {
        GameEvent::GameOver {
            score,
            length,
            cause,
        } => log::info!("final score {score}, length {length}, cause {cause:?}"),
        GameEvent::BoardFull { score, length } => {
            log::info!("board filled: score {score}, length {length}");
        }
        other => log::debug!("{other:?}"),
    }
}
