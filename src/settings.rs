use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{CELL_SIZE_PX, DEFAULT_CANVAS_HEIGHT_PX, DEFAULT_CANVAS_WIDTH_PX};
use crate::grid::Grid;
use crate::speed::{DEFAULT_SPEED_LEVEL, SpeedLevel};

const APP_DIR_NAME: &str = "grid-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Failures while reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is malformed: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("settings could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// User preferences that survive between runs.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub speed_level: u8,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub cell_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed_level: DEFAULT_SPEED_LEVEL,
            canvas_width: DEFAULT_CANVAS_WIDTH_PX,
            canvas_height: DEFAULT_CANVAS_HEIGHT_PX,
            cell_size: CELL_SIZE_PX,
        }
    }
}

impl Settings {
    /// Stored level, clamped in case the file was edited by hand.
    #[must_use]
    pub fn speed(&self) -> SpeedLevel {
        SpeedLevel::new(i64::from(self.speed_level))
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::from_pixels(self.canvas_width, self.canvas_height, self.cell_size)
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from disk.
///
/// Returns defaults when the file does not exist yet (first run).
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from_path(&settings_path())
}

/// Saves settings, creating parent directories when needed.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    save_settings_to_path(&settings_path(), settings)
}

fn load_settings_from_path(path: &Path) -> Result<Settings, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&raw).map_err(SettingsError::Parse)
}

fn save_settings_to_path(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings).map_err(SettingsError::Encode)?;
    fs::write(path, json)?;
    Ok(())
}
