//! Table configuration options.

use alloc::vec::Vec;

/// Rounding mode for the blackjack bonus on odd stakes.
///
/// Stakes are whole, so the bonus is off by exactly one half when it is not
/// exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
}

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use popjack::{RoundingMode, TableOptions};
///
/// let options = TableOptions::default()
///     .with_starting_balance(500)
///     .with_rounding_blackjack(RoundingMode::Up);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Balance at the start of a session and after a session reset.
    pub starting_balance: usize,
    /// Rounding mode for the 3:2 blackjack bonus.
    pub rounding_blackjack: RoundingMode,
    /// Quick-bet chip values offered by the front end.
    pub chips: Vec<usize>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_balance: 1000,
            rounding_blackjack: RoundingMode::Down,
            chips: alloc::vec![25, 100, 500],
        }
    }
}

impl TableOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use popjack::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use popjack::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the quick-bet chip values.
    ///
    /// # Example
    ///
    /// ```
    /// use popjack::TableOptions;
    ///
    /// let options = TableOptions::default().with_chips(&[5, 10, 50]);
    /// assert_eq!(options.chips, vec![5, 10, 50]);
    /// ```
    #[must_use]
    pub fn with_chips(mut self, chips: &[usize]) -> Self {
        self.chips = chips.to_vec();
        self
    }
}
