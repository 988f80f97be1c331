//! Round outcomes and payouts.

use core::fmt;

use crate::options::RoundingMode;

/// How the stake is paid back at settlement.
///
/// The stake is debited when the bet is placed, so the multiplier applies to
/// the full amount returned: 0 loses the stake, 1 returns it, 2 returns it
/// with equal winnings and 2.5 returns it with a 3:2 bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payout {
    /// Multiplier 0.
    Lose,
    /// Multiplier 1.
    Push,
    /// Multiplier 2.
    Win,
    /// Multiplier 2.5.
    Blackjack,
}

impl Payout {
    /// Returns the amount credited back to the balance for `bet`.
    ///
    /// Only the blackjack bonus can be fractional; `rounding` decides where
    /// odd stakes land.
    ///
    /// ```
    /// use popjack::{Payout, RoundingMode};
    ///
    /// assert_eq!(Payout::Blackjack.credit(100, RoundingMode::Down), 250);
    /// assert_eq!(Payout::Blackjack.credit(25, RoundingMode::Down), 62);
    /// assert_eq!(Payout::Blackjack.credit(25, RoundingMode::Up), 63);
    /// ```
    #[must_use]
    pub const fn credit(self, bet: usize, rounding: RoundingMode) -> usize {
        match self {
            Self::Lose => 0,
            Self::Push => bet,
            Self::Win => bet.saturating_mul(2),
            Self::Blackjack => bet.saturating_add(blackjack_bonus(bet, rounding)),
        }
    }
}

const fn blackjack_bonus(bet: usize, rounding: RoundingMode) -> usize {
    let half = bet / 2;
    let whole = bet.saturating_add(half);
    if bet % 2 == 0 {
        return whole;
    }
    match rounding {
        RoundingMode::Down => whole,
        RoundingMode::Up => whole.saturating_add(1),
    }
}

/// Outcome of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player was dealt a natural and the dealer was not.
    PlayerBlackjack,
    /// Both sides were dealt a natural.
    BothBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player finished with the higher total.
    PlayerWins,
    /// Dealer finished with the higher total.
    DealerWins,
    /// Totals were equal.
    Push,
}

impl Outcome {
    /// Returns the payout applied to the stake.
    #[must_use]
    pub const fn payout(self) -> Payout {
        match self {
            Self::PlayerBlackjack => Payout::Blackjack,
            Self::BothBlackjack | Self::Push => Payout::Push,
            Self::DealerBust | Self::PlayerWins => Payout::Win,
            Self::PlayerBust | Self::DealerWins => Payout::Lose,
        }
    }

    /// Returns the headline shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBlackjack => "Blackjack! Player Wins!",
            Self::BothBlackjack => "Push! Both have Blackjack!",
            Self::PlayerBust => "Player Busts! Dealer Wins!",
            Self::DealerBust => "Dealer Busts! Player Wins!",
            Self::PlayerWins => "Player Wins!",
            Self::DealerWins => "Dealer Wins!",
            Self::Push => "Push! It's a Tie!",
        }
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The stake for the round.
    pub bet: usize,
    /// Amount credited back to the balance.
    pub credited: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Balance after the credit.
    pub balance: usize,
}

impl RoundResult {
    /// Returns the payout applied to the stake.
    #[must_use]
    pub const fn payout(&self) -> Payout {
        self.outcome.payout()
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.outcome.message())?;
        match self.payout() {
            Payout::Blackjack => write!(
                f,
                " (Blackjack bonus: +${})",
                self.credited.saturating_sub(self.bet)
            ),
            Payout::Win => write!(f, " (+${})", self.bet),
            Payout::Push => write!(f, " (Bet returned: ${})", self.bet),
            Payout::Lose => Ok(()),
        }
    }
}
