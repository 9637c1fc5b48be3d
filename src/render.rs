//! ASCII rendering of hands.
//!
//! Every card is drawn as a box eleven columns wide:
//!
//! ```text
//! ┌─────────┐
//! │ A       │
//! │    S    │
//! │       A │
//! └─────────┘
//! ```
//!
//! A hidden card shows `?` in place of its rank and suit.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

const HIDDEN: &str = "?";
const TOP: &str = "┌─────────┐";
const BOTTOM: &str = "└─────────┘";

fn faces(cards: &[Card], hide_first: bool) -> Vec<(&'static str, &'static str)> {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if hide_first && index == 0 {
                (HIDDEN, HIDDEN)
            } else {
                (card.rank.symbol(), card.suit.letter())
            }
        })
        .collect()
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>) {
    for cell in cells {
        out.push_str(&cell);
        out.push(' ');
    }
    out.push('\n');
}

/// Draws `cards` side by side as five lines of box art.
///
/// With `hide_first` set, the first card is drawn face down. Returns an
/// empty string for an empty hand.
#[must_use]
pub fn hand_art(cards: &[Card], hide_first: bool) -> String {
    if cards.is_empty() {
        return String::new();
    }

    let faces = faces(cards, hide_first);
    let mut out = String::new();

    push_row(&mut out, faces.iter().map(|_| String::from(TOP)));
    push_row(&mut out, faces.iter().map(|(rank, _)| format!("│ {rank:<8}│")));
    push_row(&mut out, faces.iter().map(|(_, suit)| format!("│    {suit}    │")));
    push_row(&mut out, faces.iter().map(|(rank, _)| format!("│{rank:>8} │")));
    push_row(&mut out, faces.iter().map(|_| String::from(BOTTOM)));

    out
}

/// Lists `cards` on one line, e.g. `[HIDDEN] [10 Spades]`.
#[must_use]
pub fn hand_log(cards: &[Card], hide_first: bool) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if hide_first && index == 0 {
                String::from("[HIDDEN]")
            } else {
                format!("[{} {}]", card.rank.symbol(), card.suit.name())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
