//! Notifications emitted by the engine.
//!
//! Every state-changing call appends events to the game's queue in the order
//! things happened. A front end drains the queue with
//! [`Game::drain_events`](crate::Game::drain_events) and decides how fast to
//! reveal each step; the engine itself never waits.

use crate::card::Card;
use crate::result::RoundResult;

/// Which side of the table a card went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// A single observable step of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A stake was debited.
    BetPlaced {
        /// The stake.
        amount: usize,
        /// Balance after the debit.
        balance: usize,
    },
    /// A card left the deck.
    CardDealt {
        /// Who received it.
        seat: Seat,
        /// The card.
        card: Card,
        /// Whether it is the dealer's face-down hole card.
        face_down: bool,
    },
    /// The deck ran out and was rebuilt before a draw.
    DeckReshuffled,
    /// Initial cards are out and the player may hit or stand.
    PlayerTurn,
    /// The dealer's hole card was turned over.
    HoleRevealed {
        /// The hole card.
        card: Card,
        /// Dealer total with the hole card counted.
        value: u8,
    },
    /// The dealer stopped drawing.
    DealerStood {
        /// Final dealer total.
        value: u8,
    },
    /// The round was settled and paid.
    RoundSettled(RoundResult),
    /// Hands were cleared and a new bet may be placed.
    RoundCleared {
        /// Current balance.
        balance: usize,
    },
    /// The balance is exhausted; no further bets are possible.
    SessionOver,
    /// The session was restarted with a fresh balance and deck.
    SessionReset {
        /// The restored balance.
        balance: usize,
    },
}
