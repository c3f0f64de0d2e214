//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InvalidPhase,
    /// Bet is below the table minimum.
    #[error("bet is below the table minimum of {minimum}")]
    BelowMinimum {
        /// The table minimum.
        minimum: usize,
    },
    /// Balance does not cover the bet. This ends the session.
    #[error("not enough funds to bet")]
    InsufficientFunds,
    /// The session is over until the balance is reset.
    #[error("game over: balance is below the table minimum")]
    GameOver,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No player turn is in progress.
    #[error("invalid game phase for this action")]
    InvalidPhase,
    /// The active hand is not a two-card 9, 10 or 11.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// The active hand is not a pair.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Only one split is allowed per round.
    #[error("only one split is allowed per round")]
    SplitLimitReached,
    /// Balance does not cover the extra stake.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left to draw.
    #[error("no cards left in the shoe")]
    Empty,
}

/// Errors raised by a profile store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No profile is stored for this player.
    #[error("no profile stored for this player")]
    NotFound,
    /// The store could not be reached.
    #[error("profile store unavailable")]
    Unavailable,
}
