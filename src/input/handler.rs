use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, InputEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the game, which decides whether it applies
    Game(InputEvent),
    Quit,
    None,
}

/// Maps terminal key presses to game input
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char(' ') => KeyAction::Game(InputEvent::Start),

            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Game(Direction::Up.into()),
            KeyCode::Down => KeyAction::Game(Direction::Down.into()),
            KeyCode::Left => KeyAction::Game(Direction::Left.into()),
            KeyCode::Right => KeyAction::Game(Direction::Right.into()),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Game(Direction::Up.into()),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Game(Direction::Down.into()),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Game(Direction::Left.into()),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Game(Direction::Right.into()),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
