/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true when `other` is the exact reversal of `self`.
    #[must_use]
    pub fn is_reversal_of(self, other: Self) -> bool {
        self == other.opposite()
    }
}

/// High-level input events consumed by the engine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    /// Starts a fresh game, or restarts after it ended.
    Confirm,
    /// Pauses while running, resumes while paused.
    Pause,
    Restart,
    SpeedUp,
    SpeedDown,
    SetSpeed(i32),
    Quit,
}

/// Single-slot buffer for the next direction change.
///
/// Later requests overwrite earlier ones until the next tick consumes the slot.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct InputQueue {
    pending: Option<Direction>,
}

impl InputQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers `direction`, replacing anything not yet consumed.
    pub fn request(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Takes the buffered direction, leaving the slot empty.
    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    #[must_use]
    pub fn peek(&self) -> Option<Direction> {
        self.pending
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
