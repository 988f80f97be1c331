use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::SettleError;
use crate::event::{Event, Seat};
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

/// The dealer draws below this total and stands on it or above, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

impl Game {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws while their total is below 17 and stands on any 17,
    /// including soft 17. Each draw is recorded as its own event so a front
    /// end can reveal them one at a time.
    ///
    /// Returns the cards drawn. Calling it again in the same round draws
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, SettleError> {
        if self.state != GameState::DealerTurn {
            return Err(SettleError::InvalidState);
        }

        let mut drawn_cards = Vec::new();
        if self.dealer_done {
            return Ok(drawn_cards);
        }

        while self.dealer.value() < DEALER_STANDS_ON {
            drawn_cards.push(self.draw_to(Seat::Dealer));
        }

        let value = self.dealer.value();
        self.dealer_done = true;
        self.events.push(Event::DealerStood { value });
        debug!(value, draws = drawn_cards.len(), "dealer done");

        Ok(drawn_cards)
    }

    /// Compares the final hands and pays out.
    ///
    /// Runs [`Game::dealer_play`] first if the dealer has not drawn yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn settle(&mut self) -> Result<RoundResult, SettleError> {
        if self.state != GameState::DealerTurn {
            return Err(SettleError::InvalidState);
        }

        self.dealer_play()?;

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();

        let outcome = if self.dealer.is_busted() {
            Outcome::DealerBust
        } else if player_value > dealer_value {
            Outcome::PlayerWins
        } else if dealer_value > player_value {
            Outcome::DealerWins
        } else {
            Outcome::Push
        };

        Ok(self.conclude(outcome))
    }

    /// Settles the round with the given outcome and credits the payout.
    pub(super) fn conclude(&mut self, outcome: Outcome) -> RoundResult {
        self.reveal_hole();

        let bet = self.bet;
        let credited = outcome
            .payout()
            .credit(bet, self.options.rounding_blackjack);
        self.balance = self.balance.saturating_add(credited);

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = credited as isize - bet as isize;

        let result = RoundResult {
            outcome,
            bet,
            credited,
            net,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            balance: self.balance,
        };

        self.state = GameState::Settled;
        self.rounds_played += 1;
        self.last_result = Some(result);
        self.events.push(Event::RoundSettled(result));
        info!(
            ?outcome,
            bet,
            credited,
            balance = self.balance,
            "round settled"
        );

        result
    }
}
