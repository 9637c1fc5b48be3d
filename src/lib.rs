//! A single-player blackjack game with optional `no_std` support.
//!
//! The engine is split into small pieces: [`Card`] and [`Deck`] model the
//! cards, [`score`] totals a hand, [`rules`] holds the dealer policy and
//! outcome table, and [`Round`] runs one betting round as a state machine.
//! [`Session`] repeats rounds against a shared balance, talking to the
//! player through the [`Input`] and [`Table`] traits.
//!
//! # Example
//!
//! ```
//! use bjterm::{Card, Deck, Rank, Round, RoundState, Suit};
//!
//! let mut round = Round::new(100);
//! round.bet(10).unwrap();
//! round
//!     .deal_from(Deck::from_draws(&[
//!         Card::new(Suit::Hearts, Rank::Ten),
//!         Card::new(Suit::Clubs, Rank::Nine),
//!         Card::new(Suit::Spades, Rank::Queen),
//!         Card::new(Suit::Diamonds, Rank::Eight),
//!     ]))
//!     .unwrap();
//! round.stand().unwrap();
//! round.dealer_play().unwrap();
//! assert_eq!(round.state(), RoundState::RoundOver);
//! assert_eq!(round.showdown().unwrap().balance_after, 110);
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
pub mod game;
pub mod hand;
pub mod options;
pub mod render;
pub mod result;
pub mod rules;
pub mod session;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod terminal;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, SessionError, ShowdownError};
pub use game::{PlayerAction, Round, RoundState, RoundView};
pub use hand::{Hand, score};
pub use options::{DEFAULT_STARTING_BALANCE, GameOptions, MAX_STARTING_BALANCE};
pub use result::{HandOutcome, RoundResult, SessionSummary};
pub use session::{Input, Session, Table};
#[cfg(feature = "std")]
pub use terminal::{InputError, TerminalInput};
