//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet must be greater than 0")]
    ZeroBet,
    /// Bet exceeds the current balance.
    #[error("you don't have enough money")]
    InsufficientFunds,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// The balance is exhausted; the session must be reset.
    #[error("session is over")]
    SessionOver,
}

impl BetError {
    /// Returns whether the error is about the amount rather than the table state.
    #[must_use]
    pub const fn is_invalid_bet(self) -> bool {
        matches!(self, Self::ZeroBet | Self::InsufficientFunds)
    }
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
}

/// Errors that can occur during dealer play and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid game state for settlement.
    #[error("invalid game state for settlement")]
    InvalidState,
}

/// Errors that can occur when moving to the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The current round has not been settled.
    #[error("round has not been settled")]
    InvalidState,
    /// The balance is exhausted; the session must be reset.
    #[error("you're out of money")]
    SessionOver,
}

/// Errors produced when reading a bet typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseBetError {
    /// Nothing was entered.
    #[error("please enter a bet")]
    Empty,
    /// The text is not a whole number.
    #[error("please enter a valid number")]
    NotANumber,
    /// The amount is zero or negative.
    #[error("bet must be greater than 0")]
    NotPositive,
    /// The amount exceeds the balance.
    #[error("you don't have enough money")]
    ExceedsBalance,
}
