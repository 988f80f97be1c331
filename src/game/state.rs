//! Game state types.

/// Round state.
///
/// A round moves `AwaitingBet -> Dealing -> PlayerTurn -> DealerTurn ->
/// Settled`, then back to `AwaitingBet` via
/// [`Game::start_next_round`](crate::Game::start_next_round). A natural or a
/// player bust settles straight from `Dealing` or `PlayerTurn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Accepting a bet for the next round.
    AwaitingBet,
    /// Stake is down; initial cards are about to be dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been paid out.
    Settled,
}

impl GameState {
    /// Returns a stable name for the state, suitable for front ends.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingBet => "AwaitingBet",
            Self::Dealing => "Dealing",
            Self::PlayerTurn => "PlayerTurn",
            Self::DealerTurn => "DealerTurn",
            Self::Settled => "Settled",
        }
    }
}
