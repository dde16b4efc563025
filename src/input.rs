//! Keyboard mapping.
//!
//! The game has one action key (jump, which doubles as "play again" on the
//! game-over screen) and a quit signal.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Jump, // Space, Up or Enter
    Quit, // Esc, q, Ctrl-C
    Other,
}

/// Map a key event. Releases and auto-repeats are ignored (`None`) so that
/// holding Space does not burn both jump charges.
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }
    Some(match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => GameInput::Jump,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::Other,
    })
}

/// Input gathered between two frames. A jump press waits for the next frame
/// and is consumed by it; extra presses in the same gap collapse into one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingInput {
    jump: bool,
    quit: bool,
}

impl PendingInput {
    pub fn record(&mut self, input: GameInput) {
        match input {
            GameInput::Jump => self.jump = true,
            GameInput::Quit => self.quit = true,
            GameInput::Other => {}
        }
    }

    /// Take the jump press for this frame, leaving none for the next.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}
