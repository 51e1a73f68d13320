//! Error types shared by the engine and its front ends.

use thiserror::Error;

/// Errors raised while playing a round or a session.
#[derive(Debug, Error)]
pub enum GameError {
    /// A draw was attempted on an empty deck
    #[error("Deck exhausted: no cards left to draw")]
    DeckExhausted,

    /// Bet outside the allowed range
    #[error("Invalid bet ${bet}: must be between ${min} and ${max}")]
    InvalidBet { bet: i64, min: u32, max: u32 },

    /// Round requested for a player with an empty bankroll
    #[error("Player has no chips left to bet")]
    OutOfChips,

    /// Input ended before the terminal got an answer
    #[error("Input closed before a response was given")]
    InputClosed,

    /// Terminal read or write failed
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A host callback (JavaScript) threw or returned garbage
    #[error("Callback failed: {0}")]
    Callback(String),

    /// Session settings rejected by validation
    #[error("Invalid configuration: {0}")]
    Config(String),
}
