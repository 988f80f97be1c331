//! The single 52-card deck used by the table.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered, shuffled deck that regenerates itself when exhausted.
///
/// Cards are drawn from the end of the shuffled sequence. A drawn card is not
/// seen again until the deck runs out and is rebuilt.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a fresh, shuffled deck from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Refills the deck with one card of every suit and rank, then shuffles.
    pub fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
        self.shuffle();
    }

    /// Shuffles the remaining cards in place.
    ///
    /// This is an unbiased Fisher-Yates shuffle: walking from the last index
    /// down, each slot is swapped with a uniformly chosen slot at or below it.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Draws a card, rebuilding and reshuffling the deck first if it is empty.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            debug!("deck exhausted, reshuffling");
            self.reset();
        }
    }

    /// Returns the number of cards left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the remaining cards, last element drawn first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Replaces the remaining cards so they are drawn in the given order.
    ///
    /// Useful for replaying a recorded round. Once these cards run out the
    /// deck reshuffles a full 52 as usual.
    pub fn set_draw_order(&mut self, draws: &[Card]) {
        self.cards.clear();
        self.cards.extend(draws.iter().rev().copied());
    }
}
