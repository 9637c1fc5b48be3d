//! Round engine and state management.

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;
use crate::rules::BLACKJACK;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{PlayerAction, RoundState};

/// A single betting round between the player and the dealer.
///
/// The round owns its deck and both hands. It moves through
/// [`RoundState`] in order: a bet is placed, four cards are dealt, the
/// player hits or stands, the dealer plays, and [`Round::showdown`]
/// reports the outcome. Calls made out of order fail with an
/// `InvalidState` error and leave the round untouched.
#[derive(Debug, Clone)]
pub struct Round {
    /// Player balance when the round started.
    balance: u64,
    /// Accepted bet, zero until [`Round::bet`] succeeds.
    bet: u64,
    /// Cards left for this round.
    deck: Deck,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand. The first card dealt to the dealer is the hole card.
    dealer: Hand,
    /// Current round state.
    state: RoundState,
    /// Whether the dealer played out their hand.
    dealer_played: bool,
}

/// What the table shows at a given moment.
#[derive(Debug, Clone, Copy)]
pub struct RoundView<'a> {
    /// The dealer's hand.
    pub dealer: &'a Hand,
    /// The player's hand.
    pub player: &'a Hand,
    /// Whether the dealer's first card must stay face down.
    pub hide_dealer_hole: bool,
    /// Current round state.
    pub state: RoundState,
}

impl Round {
    /// Starts a round for a player holding `balance`.
    #[must_use]
    pub const fn new(balance: u64) -> Self {
        Self {
            balance,
            bet: 0,
            deck: Deck::empty(),
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Betting,
            dealer_played: false,
        }
    }

    /// Draws a card from the round's deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.draw()
    }

    /// Ends the player's turn early on 21 or a bust.
    ///
    /// A bust skips the dealer's turn entirely.
    fn settle_player_total(&mut self) {
        let value = self.player.value();
        if value > BLACKJACK {
            log::debug!("player busts with {value}");
            self.state = RoundState::RoundOver;
        } else if value == BLACKJACK {
            log::debug!("player has 21, turn ends");
            self.state = RoundState::DealerTurn;
        }
    }

    /// Deals the initial cards from a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for the deal.
    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DealError> {
        if self.state != RoundState::Dealing {
            return Err(DealError::InvalidState);
        }
        self.deal_from(Deck::shuffled(rng))
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the balance the round started with.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns the accepted bet, or zero before betting.
    #[must_use]
    pub const fn current_bet(&self) -> u64 {
        self.bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards left in the round's deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the dealer played out their hand.
    #[must_use]
    pub const fn dealer_played(&self) -> bool {
        self.dealer_played
    }

    /// Returns what the table shows right now.
    ///
    /// The dealer's hole card stays hidden until the dealer plays. When the
    /// player busts the dealer never plays, so it is never revealed.
    #[must_use]
    pub const fn view(&self) -> RoundView<'_> {
        RoundView {
            dealer: &self.dealer,
            player: &self.player,
            hide_dealer_hole: !self.dealer_played,
            state: self.state,
        }
    }
}
