//! Player-facing text for turn results, rejected flips and game endings.

use crate::core::GameSnapshot;
use crate::types::{FlipError, GameOutcome, TurnOutcome, MATCH_POINTS, SEEN_PENALTY};

pub const PROMPT: &str = "Enter a tile number, 'r' to restart, 'q' to quit: ";

pub fn outcome_message(outcome: &TurnOutcome) -> String {
    match outcome {
        TurnOutcome::FirstFlipAccepted => "Pick a second tile.".to_string(),
        TurnOutcome::MatchFound => format!("Match found! (+{MATCH_POINTS} Points)"),
        TurnOutcome::NoMatch {
            penalty_applied: true,
        } => format!("No match. You saw this card before! (-{SEEN_PENALTY} Points). Next turn."),
        TurnOutcome::NoMatch {
            penalty_applied: false,
        } => "No match. Out of flips. Next turn.".to_string(),
        TurnOutcome::GameWon => format!(
            "Match found! (+{MATCH_POINTS} Points)\nCongratulations! You found all the matches."
        ),
        TurnOutcome::AlreadyOver => "The game is already over.".to_string(),
    }
}

pub fn flip_error_message(err: &FlipError) -> String {
    match err {
        FlipError::TileAlreadyFaceUp { .. } => "Tile already flipped. Try again.".to_string(),
        FlipError::TileIndexInvalid { len, .. } => format!(
            "Invalid tile number. Please enter a number between 0 and {}.",
            len.saturating_sub(1)
        ),
        FlipError::GameOver => "The game is over. Enter 'r' to restart or 'q' to quit.".to_string(),
    }
}

/// Closing lines for a finished game. Empty while the game is in progress.
pub fn summary_lines(snap: &GameSnapshot) -> Vec<String> {
    match snap.outcome {
        GameOutcome::InProgress => Vec::new(),
        GameOutcome::Won => vec![
            format!("Your final score: {}", snap.score),
            format!("Attempts: {}", snap.attempts),
            format!("Time elapsed: {} seconds", snap.elapsed_seconds),
        ],
        GameOutcome::TimeExpired => vec![
            "Time's up! Game over.".to_string(),
            format!("Your final score: {}", snap.score),
        ],
        GameOutcome::Quit => vec!["Quitting the game. Goodbye!".to_string()],
    }
}
