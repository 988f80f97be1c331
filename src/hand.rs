//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut hard: usize = 0;
    let mut has_ace = false;

    for card in cards {
        if card.is_ace() {
            has_ace = true;
            hard += 1;
        } else {
            hard += usize::from(card.value());
        }
    }

    // At most one Ace can count as 11 without busting.
    let is_soft = has_ace && hard + 10 <= usize::from(BLACKJACK);
    let total = if is_soft { hard + 10 } else { hard };
    (u8::try_from(total).unwrap_or(u8::MAX), is_soft)
}

/// A hand of cards, in the order they were drawn.
///
/// The score is recomputed from the cards on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    /// Totals past `u8::MAX` saturate, which still reads as bust.
    ///
    /// ```
    /// use popjack::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Rank::Ace, Suit::Spades));
    /// hand.add_card(Card::new(Rank::Six, Suit::Hearts));
    /// hand.add_card(Card::new(Rank::Five, Suit::Clubs));
    /// assert_eq!(hand.value(), 12);
    /// ```
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand in place.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The second card dealt is the hole card; it stays hidden until the player
/// stands or the round settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    hand: Hand,
    hole_hidden: bool,
}

impl DealerHand {
    /// Index of the hole card in the dealing order.
    pub const HOLE_INDEX: usize = 1;

    /// Creates a new empty dealer hand with the hole card hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_hidden: true,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns all cards in the hand, including a hidden hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the underlying hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the hole card is still hidden.
    #[must_use]
    pub const fn is_hole_hidden(&self) -> bool {
        self.hole_hidden
    }

    /// Returns whether the card at `index` is currently face down.
    #[must_use]
    pub fn is_face_down(&self, index: usize) -> bool {
        self.hole_hidden && index == Self::HOLE_INDEX
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_hidden = false;
    }

    /// Turns the hole card face down again.
    pub const fn hide_hole(&mut self) {
        self.hole_hidden = true;
    }

    /// Value shown to the player, or `None` while the hole card is face down.
    #[must_use]
    pub fn visible_value(&self) -> Option<u8> {
        if self.hole_hidden && self.hand.len() > Self::HOLE_INDEX {
            None
        } else {
            Some(self.hand.value())
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Clears the hand for a new round and hides the hole again.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.hide_hole();
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
