use tracing::debug;

use crate::error::{BetError, DealError};
use crate::event::{Event, Seat};
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Places the stake for the next round and debits it from the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero, the game is not waiting for a bet,
    /// the balance is exhausted, or the bet exceeds the balance. Nothing
    /// changes on error.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if self.state != GameState::AwaitingBet {
            return Err(BetError::InvalidState);
        }

        if self.balance == 0 {
            return Err(BetError::SessionOver);
        }

        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }

        self.balance -= amount;
        self.bet = amount;
        self.state = GameState::Dealing;
        self.events.push(Event::BetPlaced {
            amount,
            balance: self.balance,
        });
        debug!(amount, balance = self.balance, "bet placed");

        Ok(())
    }

    /// Deals the opening cards: player, dealer, player, dealer (face down).
    ///
    /// A natural settles the round immediately and its result is returned;
    /// otherwise the game moves to the player's turn and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed for this round.
    pub fn deal(&mut self) -> Result<Option<RoundResult>, DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        self.player.clear();
        self.dealer.clear();
        self.dealer_done = false;

        for seat in [Seat::Player, Seat::Dealer, Seat::Player, Seat::Dealer] {
            self.draw_to(seat);
        }

        if self.player.is_blackjack() {
            let outcome = if self.dealer.is_blackjack() {
                Outcome::BothBlackjack
            } else {
                Outcome::PlayerBlackjack
            };
            return Ok(Some(self.conclude(outcome)));
        }

        self.state = GameState::PlayerTurn;
        self.events.push(Event::PlayerTurn);
        debug!(player = self.player.value(), "player to act");

        Ok(None)
    }
}
