//! Bet entry helpers for front ends.
//!
//! These turn what the player types or clicks into a single validated amount.
//! The engine only ever sees the final `usize` passed to
//! [`Game::place_bet`](crate::Game::place_bet).

use crate::error::ParseBetError;

/// Parses a bet typed by the player.
///
/// Accepts a whole number between 1 and `balance`, surrounding whitespace
/// allowed.
///
/// # Errors
///
/// Returns an error if the text is empty, not a whole number, not positive,
/// or larger than `balance`.
///
/// # Example
///
/// ```
/// use popjack::{ParseBetError, parse_bet};
///
/// assert_eq!(parse_bet(" 50 ", 1000), Ok(50));
/// assert_eq!(parse_bet("0", 1000), Err(ParseBetError::NotPositive));
/// assert_eq!(parse_bet("5000", 1000), Err(ParseBetError::ExceedsBalance));
/// ```
pub fn parse_bet(input: &str, balance: usize) -> Result<usize, ParseBetError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseBetError::Empty);
    }

    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseBetError::NotANumber);
    }

    if negative {
        return Err(ParseBetError::NotPositive);
    }

    // All digits, so the only way to fail is overflow.
    let Ok(amount) = digits.parse::<usize>() else {
        return Err(ParseBetError::ExceedsBalance);
    };

    if amount == 0 {
        return Err(ParseBetError::NotPositive);
    }
    if amount > balance {
        return Err(ParseBetError::ExceedsBalance);
    }

    Ok(amount)
}

/// A bet being composed from chip clicks before it is committed.
///
/// Chips stack additively and never exceed the balance they were added
/// against.
///
/// ```
/// use popjack::BetSlip;
///
/// let mut slip = BetSlip::new();
/// slip.add_chip(25, 1000);
/// slip.add_chip(100, 1000);
/// assert_eq!(slip.amount(), 125);
///
/// slip.add_chip(500, 300);
/// assert_eq!(slip.amount(), 300);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BetSlip {
    amount: usize,
}

impl BetSlip {
    /// Creates an empty slip.
    #[must_use]
    pub const fn new() -> Self {
        Self { amount: 0 }
    }

    /// Returns the amount on the slip.
    #[must_use]
    pub const fn amount(&self) -> usize {
        self.amount
    }

    /// Returns whether nothing has been staked yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.amount == 0
    }

    /// Adds a chip, capping the total at `balance`.
    pub fn add_chip(&mut self, chip: usize, balance: usize) {
        self.amount = self.amount.saturating_add(chip).min(balance);
    }

    /// Stakes the whole balance.
    pub const fn all_in(&mut self, balance: usize) {
        self.amount = balance;
    }

    /// Replaces the slip with a typed amount, ignoring invalid text.
    ///
    /// Front ends keep the entry box and the slip in sync with this; the
    /// strict check happens in [`BetSlip::commit`].
    pub fn set_from_input(&mut self, input: &str, balance: usize) {
        self.amount = input.trim().parse::<usize>().unwrap_or(0).min(balance);
    }

    /// Clears the slip.
    pub const fn clear(&mut self) {
        self.amount = 0;
    }

    /// Validates the slip against `balance` and empties it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBetError::NotPositive`] for an empty slip and
    /// [`ParseBetError::ExceedsBalance`] if the balance shrank below it.
    pub const fn commit(&mut self, balance: usize) -> Result<usize, ParseBetError> {
        let amount = self.amount;
        if amount == 0 {
            return Err(ParseBetError::NotPositive);
        }
        if amount > balance {
            return Err(ParseBetError::ExceedsBalance);
        }
        self.amount = 0;
        Ok(amount)
    }
}
