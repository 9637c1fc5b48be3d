//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for a valid bet.
    Betting,
    /// Bet accepted; waiting for the initial deal.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the result can be settled.
    RoundOver,
}

/// A decision the player can make during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}
