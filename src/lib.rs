//! A single-player blackjack engine for a browser-extension popup, with
//! optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one betting round at a time
//! against a dealer who stands on 17: bet, deal, hit or stand, dealer play
//! and settlement. Rendering is left to the caller, which reads a
//! [`TableView`] and drains [`Event`]s to pace card reveals.
//!
//! # Example
//!
//! ```
//! use popjack::{Game, GameState, TableOptions};
//!
//! let mut game = Game::new(TableOptions::default(), 42);
//! game.place_bet(100).unwrap();
//! if game.deal().unwrap().is_none() {
//!     game.stand().unwrap();
//!     game.settle().unwrap();
//! }
//! assert_eq!(game.state(), GameState::Settled);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod wager;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, ParseBetError, RoundError, SettleError};
pub use event::{Event, Seat};
pub use game::{Controls, DEALER_STANDS_ON, Game, GameState, Status, TableView};
pub use hand::{BLACKJACK, DealerHand, Hand};
pub use options::{RoundingMode, TableOptions};
pub use result::{Outcome, Payout, RoundResult};
pub use wager::{BetSlip, parse_bet};
