use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::{Direction, GameInput};

/// Maps one terminal key press to a game input.
///
/// Key releases and repeats are ignored so a held key does not flood the
/// direction buffer on terminals that report them.
#[must_use]
pub fn map_key(event: KeyEvent) -> Option<GameInput> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match event.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => {
            GameInput::Direction(Direction::Right)
        }
        KeyCode::Enter => GameInput::Confirm,
        KeyCode::Char(' ' | 'p' | 'P') => GameInput::Pause,
        KeyCode::Char('r' | 'R') => GameInput::Restart,
        KeyCode::Char('+' | '=') => GameInput::SpeedUp,
        KeyCode::Char('-' | '_') => GameInput::SpeedDown,
        KeyCode::Char('1') => GameInput::SetSpeed(1),
        KeyCode::Char('2') => GameInput::SetSpeed(2),
        KeyCode::Char('3') => GameInput::SetSpeed(3),
        KeyCode::Char('4') => GameInput::SetSpeed(4),
        KeyCode::Char('5') => GameInput::SetSpeed(5),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}
