use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::event::Seat;
use crate::result::Outcome;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 settles the round as a loss; check
    /// [`Game::last_result`] or the event queue for the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn. Late or repeated
    /// input after settlement is rejected this way and changes nothing.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw_to(Seat::Player);

        if self.player.is_busted() {
            self.conclude(Outcome::PlayerBust);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the dealer's hole card and hands the turn to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!(player = self.player.value(), "player stands");
        self.reveal_hole();
        self.state = GameState::DealerTurn;

        Ok(())
    }
}
