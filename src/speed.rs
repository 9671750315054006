use std::fmt;
use std::time::Duration;

/// Slowest selectable level.
pub const MIN_SPEED_LEVEL: u8 = 1;

/// Fastest selectable level.
pub const MAX_SPEED_LEVEL: u8 = 5;

/// Level used when nothing else was chosen.
pub const DEFAULT_SPEED_LEVEL: u8 = 3;

/// Tick interval in milliseconds, indexed by `level - 1`.
const TICK_INTERVALS_MS: [u64; 5] = [250, 200, 150, 100, 70];

const LABELS: [&str; 5] = ["very slow", "slow", "medium", "fast", "very fast"];

/// Discrete speed setting, always within `1..=5`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    /// Clamps any integer into the valid level range.
    #[must_use]
    pub fn new(level: i64) -> Self {
        let clamped = level.clamp(i64::from(MIN_SPEED_LEVEL), i64::from(MAX_SPEED_LEVEL));
        // In range 1..=5 after clamping.
        Self(clamped as u8)
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Time between two ticks at this level.
    #[must_use]
    pub fn interval(self) -> Duration {
        Duration::from_millis(TICK_INTERVALS_MS[self.index()])
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }

    #[must_use]
    pub fn faster(self) -> Self {
        Self::new(i64::from(self.0) + 1)
    }

    #[must_use]
    pub fn slower(self) -> Self {
        Self::new(i64::from(self.0) - 1)
    }

    fn index(self) -> usize {
        usize::from(self.0 - MIN_SPEED_LEVEL)
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self(DEFAULT_SPEED_LEVEL)
    }
}

impl fmt::Display for SpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}

/// Holds the active speed level and reports when the cadence must change.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SpeedController {
    level: SpeedLevel,
}

impl SpeedController {
    #[must_use]
    pub fn new(level: SpeedLevel) -> Self {
        Self { level }
    }

    #[must_use]
    pub fn level(&self) -> SpeedLevel {
        self.level
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.level.interval()
    }

    /// Stores `level` and returns true when the cadence actually changed.
    pub fn set_level(&mut self, level: SpeedLevel) -> bool {
        if self.level == level {
            return false;
        }

        self.level = level;
        true
    }
}
