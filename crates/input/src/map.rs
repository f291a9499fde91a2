//! Command mapping from typed lines to game actions.

use crate::types::GameAction;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("no command entered")]
    Empty,
    #[error("{0:?} is not a tile number")]
    NotANumber(String),
}

/// Map one line of input to a game action.
///
/// Accepts a tile number, `r`/`restart` or `q`/`quit` in any case, with
/// surrounding whitespace ignored. The index is not checked against a board.
pub fn parse_command(line: &str) -> Result<GameAction, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    GameAction::from_str(trimmed).ok_or_else(|| InputError::NotANumber(trimmed.to_string()))
}

/// Check if a line asks to leave the game.
pub fn should_quit(line: &str) -> bool {
    matches!(parse_command(line), Ok(GameAction::Quit))
}
