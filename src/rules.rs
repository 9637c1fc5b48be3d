//! House rules: the dealer's drawing policy and outcome resolution.

use crate::result::HandOutcome;

/// Best possible hand total.
pub const BLACKJACK: u8 = 21;

/// The dealer stands once their hand reaches this total.
pub const DEALER_STANDS_ON: u8 = 17;

/// Returns whether the dealer must draw another card at `score`.
///
/// The dealer draws on anything below 17 and stands on every 17, soft or
/// hard. A busted hand is above the threshold and so also stops drawing.
#[must_use]
pub const fn dealer_must_draw(score: u8) -> bool {
    score < DEALER_STANDS_ON
}

/// Compares final totals and returns the outcome from the player's side.
///
/// A player total over 21 is a bust regardless of the dealer's hand.
#[must_use]
pub const fn resolve(player: u8, dealer: u8) -> HandOutcome {
    if player > BLACKJACK {
        HandOutcome::Bust
    } else if dealer > BLACKJACK || player > dealer {
        HandOutcome::Win
    } else if dealer > player {
        HandOutcome::Lose
    } else {
        HandOutcome::Push
    }
}
