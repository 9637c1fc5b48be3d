use crate::deck::Deck;
use crate::error::{BetError, DealError};

use super::{Round, RoundState};

impl Round {
    /// Places the bet for this round.
    ///
    /// The amount is signed so that raw user input can be validated here.
    /// A rejected bet changes nothing and the round stays in
    /// [`RoundState::Betting`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in betting state, the amount is
    /// zero or negative, or the amount exceeds the balance.
    pub fn bet(&mut self, amount: i64) -> Result<(), BetError> {
        if self.state != RoundState::Betting {
            return Err(BetError::InvalidState);
        }

        if amount <= 0 {
            log::warn!("rejected bet {amount}: not positive");
            return Err(BetError::NonPositive);
        }

        let amount = amount.unsigned_abs();
        if amount > self.balance {
            log::warn!("rejected bet {amount}: balance is {}", self.balance);
            return Err(BetError::InsufficientFunds);
        }

        self.bet = amount;
        self.state = RoundState::Dealing;
        log::debug!("bet {amount} accepted");

        Ok(())
    }

    /// Deals the initial cards from `deck`.
    ///
    /// Cards go to the player, the dealer, the player, then the dealer. If
    /// the player already holds 21 the turn passes straight to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for the deal or `deck`
    /// holds fewer than four cards.
    pub fn deal_from(&mut self, deck: Deck) -> Result<(), DealError> {
        if self.state != RoundState::Dealing {
            return Err(DealError::InvalidState);
        }

        if deck.len() < 4 {
            return Err(DealError::DeckExhausted);
        }

        self.deck = deck;

        for _ in 0..2 {
            let card = self.draw().ok_or(DealError::DeckExhausted)?;
            self.player.add_card(card);
            let card = self.draw().ok_or(DealError::DeckExhausted)?;
            self.dealer.add_card(card);
        }

        log::debug!(
            "dealt player {:?}, dealer {:?}",
            self.player.cards(),
            self.dealer.cards()
        );

        self.state = RoundState::PlayerTurn;
        self.settle_player_total();

        Ok(())
    }
}
