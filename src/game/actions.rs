//! Player actions and their key bindings.

use crossterm::event::KeyCode;

/// Everything the player can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Click,
    BuyUpgrade,
    Quit,
}

impl Action {
    /// Map a key press to an action. Unbound keys return `None`.
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char(' ') | KeyCode::Char('c') => Some(Action::Click),
            KeyCode::Char('u') => Some(Action::BuyUpgrade),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}
