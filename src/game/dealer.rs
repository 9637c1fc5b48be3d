extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::RoundResult;
use crate::rules::{self, dealer_must_draw};

use super::{Round, RoundState};

impl Round {
    /// Dealer plays their hand according to the house rules.
    ///
    /// The dealer draws until their total reaches 17 or more, or busts.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != RoundState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        while dealer_must_draw(self.dealer.value()) {
            let card = self.draw().ok_or(ShowdownError::DeckExhausted)?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        log::debug!(
            "dealer drew {} card(s), total {}",
            drawn_cards.len(),
            self.dealer.value()
        );

        self.dealer_played = true;
        self.state = RoundState::RoundOver;

        Ok(drawn_cards)
    }

    /// Compares the hands and settles the bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != RoundState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let outcome = rules::resolve(player_value, dealer_value);
        let balance_after = outcome.settle(self.balance, self.bet);

        log::info!(
            "round over: {outcome:?} (player {player_value}, dealer {dealer_value}), balance {} -> {balance_after}",
            self.balance
        );

        Ok(RoundResult {
            outcome,
            bet: self.bet,
            player_value,
            dealer_value,
            dealer_played: self.dealer_played,
            balance_before: self.balance,
            balance_after,
        })
    }
}
