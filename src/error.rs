//! Error types for game operations.
//!
//! Every error is a refused request: the game state is left exactly as it was.

use thiserror::Error;

/// Errors that can occur while betting or starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// A round is in progress.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The bankroll does not cover the bet.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The bet would drop below the table minimum.
    #[error("bet is below the table minimum")]
    BelowMinimum,
}

/// Errors that can occur while dealing the opening cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Betting was refused.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The deck cannot cover the opening deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Hand is not active.
    #[error("hand is not active")]
    HandNotActive,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The table already holds the maximum number of hands.
    #[error("maximum hands reached")]
    MaxHandsReached,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during dealer play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid game state for dealer play.
    #[error("invalid game state for dealer play")]
    InvalidState,
}
