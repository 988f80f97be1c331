//! Read-only snapshot of the table for front ends.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::result::RoundResult;

use super::{Game, GameState};

/// The status line shown above the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// First bet of the session.
    PlaceFirstBet,
    /// Bet for a later round.
    PlaceNextBet,
    /// Stake is down, cards are on their way.
    Dealing,
    /// Player decides.
    ChooseAction,
    /// Dealer is drawing.
    DealerTurn,
    /// Round has been paid out.
    Settled(RoundResult),
    /// Round is over but no result is on record.
    RoundOver,
    /// Balance is exhausted.
    SessionOver(Option<RoundResult>),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlaceFirstBet => f.write_str("Place your bet and click Deal to start!"),
            Self::PlaceNextBet => f.write_str("Place your bet and click Deal for next round!"),
            Self::Dealing => f.write_str("Dealing cards..."),
            Self::ChooseAction => f.write_str("Choose Hit or Stand"),
            Self::DealerTurn => f.write_str("Dealer's turn..."),
            Self::Settled(result) => write!(f, "{result}"),
            Self::RoundOver => f.write_str("Round over."),
            Self::SessionOver(Some(result)) => {
                write!(f, "{result} You're out of money! Game Over!")
            }
            Self::SessionOver(None) => f.write_str("You're out of money! Game Over!"),
        }
    }
}

/// Which inbound intents are currently accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    /// A bet may be placed.
    pub bet: bool,
    /// Opening cards may be dealt.
    pub deal: bool,
    /// The player may hit.
    pub hit: bool,
    /// The player may stand.
    pub stand: bool,
    /// The dealer may play out and the round be settled.
    pub settle: bool,
    /// The table may be cleared for another round.
    pub next_round: bool,
}

/// Everything a front end needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Current round state.
    pub state: GameState,
    /// Player cards in draw order.
    pub player_cards: Vec<Card>,
    /// Dealer cards in draw order; `None` marks the face-down hole card.
    pub dealer_cards: Vec<Option<Card>>,
    /// Player total.
    pub player_value: u8,
    /// Dealer total, `None` while the hole card is face down.
    pub dealer_value: Option<u8>,
    /// Current balance.
    pub balance: usize,
    /// Current stake.
    pub bet: usize,
    /// Status line.
    pub status: Status,
    /// Accepted intents.
    pub controls: Controls,
    /// Cards left before the next reshuffle.
    pub cards_remaining: usize,
}

impl Game {
    /// Returns the status line for the current state.
    #[must_use]
    pub fn status(&self) -> Status {
        if self.is_session_over() {
            return Status::SessionOver(self.last_result);
        }

        match self.state {
            GameState::AwaitingBet if self.rounds_played == 0 => Status::PlaceFirstBet,
            GameState::AwaitingBet => Status::PlaceNextBet,
            GameState::Dealing => Status::Dealing,
            GameState::PlayerTurn => Status::ChooseAction,
            GameState::DealerTurn => Status::DealerTurn,
            GameState::Settled => self.last_result.map_or(Status::RoundOver, Status::Settled),
        }
    }

    /// Returns which intents the current state accepts.
    #[must_use]
    pub const fn controls(&self) -> Controls {
        let session_over = self.is_session_over();
        Controls {
            bet: matches!(self.state, GameState::AwaitingBet) && !session_over,
            deal: matches!(self.state, GameState::Dealing),
            hit: matches!(self.state, GameState::PlayerTurn),
            stand: matches!(self.state, GameState::PlayerTurn),
            settle: matches!(self.state, GameState::DealerTurn),
            next_round: matches!(self.state, GameState::Settled) && !session_over,
        }
    }

    /// Returns a snapshot of the table with the hole card masked.
    #[must_use]
    pub fn view(&self) -> TableView {
        let dealer_cards = self
            .dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (!self.dealer.is_face_down(index)).then_some(*card))
            .collect();

        TableView {
            state: self.state,
            player_cards: self.player.cards().to_vec(),
            dealer_cards,
            player_value: self.player.value(),
            dealer_value: self.dealer.visible_value(),
            balance: self.balance,
            bet: self.bet,
            status: self.status(),
            controls: self.controls(),
            cards_remaining: self.deck.remaining(),
        }
    }
}
