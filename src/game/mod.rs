//! Game engine and state management.

use alloc::vec::Vec;
use core::mem;

use tracing::{debug, info};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::event::{Event, Seat};
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;
use crate::result::RoundResult;

mod actions;
mod bet;
mod dealer;
pub mod state;
pub mod view;

pub use dealer::DEALER_STANDS_ON;
pub use state::GameState;
pub use view::{Controls, Status, TableView};

/// A single-player blackjack table against a scripted dealer.
///
/// The game owns the deck, both hands, the balance and the round state. Every
/// call runs to completion synchronously and records what happened in an
/// event queue that the front end drains at its own pace.
#[derive(Debug, Clone)]
pub struct Game {
    /// The deck cards are drawn from.
    deck: Deck,
    /// Table options.
    options: TableOptions,
    /// Current round state.
    state: GameState,
    /// The player's hand; cleared, never replaced, between rounds.
    player: Hand,
    /// The dealer's hand.
    dealer: DealerHand,
    /// Player money.
    balance: usize,
    /// Stake for the current round, 0 between rounds.
    bet: usize,
    /// Whether the dealer has finished drawing this round.
    dealer_done: bool,
    /// Most recent settlement.
    last_result: Option<RoundResult>,
    /// Rounds settled since the session started.
    rounds_played: usize,
    /// Pending notifications.
    events: Vec<Event>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use popjack::{Game, GameState, TableOptions};
    ///
    /// let game = Game::new(TableOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::AwaitingBet);
    /// assert_eq!(game.balance(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let balance = options.starting_balance;
        Self {
            deck: Deck::new(seed),
            options,
            state: GameState::AwaitingBet,
            player: Hand::new(),
            dealer: DealerHand::new(),
            balance,
            bet: 0,
            dealer_done: false,
            last_result: None,
            rounds_played: 0,
            events: Vec::new(),
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the stake for the current round (0 between rounds).
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether the current round has been settled.
    #[must_use]
    pub const fn is_round_over(&self) -> bool {
        matches!(self.state, GameState::Settled)
    }

    /// Returns whether the balance is exhausted and no bet can be placed.
    #[must_use]
    pub const fn is_session_over(&self) -> bool {
        self.balance == 0 && matches!(self.state, GameState::Settled | GameState::AwaitingBet)
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the deck mutably, e.g. to stack it for a replay.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the number of cards remaining before the next reshuffle.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the most recent settlement, if any.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the number of rounds settled this session.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Returns the pending events without consuming them.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Takes all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event> {
        mem::take(&mut self.events)
    }

    /// Clears the table for the next round.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] unless the round is settled, and
    /// [`RoundError::SessionOver`] if the balance is exhausted. A session-over
    /// call leaves the balance, hands and bet untouched.
    pub fn start_next_round(&mut self) -> Result<(), RoundError> {
        if self.state != GameState::Settled {
            return Err(RoundError::InvalidState);
        }

        if self.balance == 0 {
            info!(rounds = self.rounds_played, "out of money, session over");
            self.events.push(Event::SessionOver);
            return Err(RoundError::SessionOver);
        }

        self.clear_round();
        self.state = GameState::AwaitingBet;
        self.events.push(Event::RoundCleared {
            balance: self.balance,
        });
        debug!(balance = self.balance, "ready for next bet");

        Ok(())
    }

    /// Restarts the session with the starting balance and a fresh deck.
    ///
    /// Valid in any state; a stake still on the table is forfeited.
    pub fn reset_session(&mut self) {
        self.clear_round();
        self.deck.reset();
        self.balance = self.options.starting_balance;
        self.last_result = None;
        self.rounds_played = 0;
        self.state = GameState::AwaitingBet;
        self.events.push(Event::SessionReset {
            balance: self.balance,
        });
        info!(balance = self.balance, "session reset");
    }

    fn clear_round(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.bet = 0;
        self.dealer_done = false;
    }

    /// Draws a card into the given seat and records it.
    fn draw_to(&mut self, seat: Seat) -> Card {
        if self.deck.remaining() == 0 {
            self.events.push(Event::DeckReshuffled);
        }
        let card = self.deck.draw();

        let face_down = match seat {
            Seat::Player => {
                self.player.add_card(card);
                false
            }
            Seat::Dealer => {
                self.dealer.add_card(card);
                self.dealer.is_face_down(self.dealer.len() - 1)
            }
        };

        if face_down {
            debug!(?seat, "dealt face down");
        } else {
            debug!(?seat, %card, "dealt");
        }
        self.events.push(Event::CardDealt {
            seat,
            card,
            face_down,
        });

        card
    }

    /// Turns the hole card over if it is still hidden.
    fn reveal_hole(&mut self) {
        if !self.dealer.is_hole_hidden() {
            return;
        }
        self.dealer.reveal_hole();

        if let Some(&card) = self.dealer.cards().get(DealerHand::HOLE_INDEX) {
            let value = self.dealer.value();
            debug!(%card, value, "hole card revealed");
            self.events.push(Event::HoleRevealed { card, value });
        }
    }
}
