use crate::card::Card;
use crate::error::ActionError;

use super::{Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching 21 ends the player's turn; going over 21 ends the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state or the deck
    /// is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw().ok_or(ActionError::DeckExhausted)?;
        self.player.add_card(card);
        log::debug!("player hits {card:?}, total {}", self.player.value());

        self.settle_player_total();

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        log::debug!("player stands on {}", self.player.value());
        self.state = RoundState::DealerTurn;

        Ok(())
    }
}
