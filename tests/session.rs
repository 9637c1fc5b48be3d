//! Session loop and rendering tests.

use std::collections::VecDeque;

use bjterm::render::{hand_art, hand_log};
use bjterm::{
    BetError, Card, GameOptions, HandOutcome, Input, MAX_STARTING_BALANCE, PlayerAction, Rank, RoundResult, RoundState,
    RoundView, Session, SessionError, SessionSummary, Suit, Table,
};

#[derive(Debug, PartialEq, Eq)]
struct OutOfInput;

/// Bets come from a queue; `None` in the queue means "bet everything".
#[derive(Default)]
struct ScriptedInput {
    bets: VecDeque<Option<i64>>,
    actions: VecDeque<PlayerAction>,
    play_again: VecDeque<bool>,
    default_action: Option<PlayerAction>,
    bet_prompts: usize,
    play_again_prompts: usize,
}

impl Input for ScriptedInput {
    type Error = OutOfInput;

    fn next_bet(&mut self, balance: u64) -> Result<i64, OutOfInput> {
        self.bet_prompts += 1;
        let bet = self.bets.pop_front().ok_or(OutOfInput)?;
        Ok(bet.unwrap_or(balance as i64))
    }

    fn next_action(&mut self) -> Result<PlayerAction, OutOfInput> {
        self.actions
            .pop_front()
            .or(self.default_action)
            .ok_or(OutOfInput)
    }

    fn play_again(&mut self) -> Result<bool, OutOfInput> {
        self.play_again_prompts += 1;
        self.play_again.pop_front().ok_or(OutOfInput)
    }
}

#[derive(Default)]
struct RecordingTable {
    started_with: Option<u64>,
    rejected: Vec<(i64, BetError)>,
    tables_shown: usize,
    hole_hidden_while_deciding: bool,
    results: Vec<RoundResult>,
    game_over: bool,
    summary: Option<SessionSummary>,
}

impl Table for RecordingTable {
    fn session_started(&mut self, balance: u64) {
        self.started_with = Some(balance);
        self.hole_hidden_while_deciding = true;
    }

    fn show_table(&mut self, view: RoundView<'_>) {
        self.tables_shown += 1;
        if view.state == RoundState::PlayerTurn && !view.hide_dealer_hole {
            self.hole_hidden_while_deciding = false;
        }
    }

    fn bet_rejected(&mut self, amount: i64, error: BetError) {
        self.rejected.push((amount, error));
    }

    fn round_over(&mut self, _view: RoundView<'_>, result: &RoundResult) {
        self.results.push(*result);
    }

    fn game_over(&mut self) {
        self.game_over = true;
    }

    fn session_over(&mut self, summary: &SessionSummary) {
        self.summary = Some(*summary);
    }
}

#[test]
fn invalid_bets_are_reprompted() {
    let mut session = Session::new(GameOptions::default(), 5);
    let mut input = ScriptedInput {
        bets: VecDeque::from([Some(0), Some(-5), Some(1001), Some(100)]),
        play_again: VecDeque::from([false]),
        default_action: Some(PlayerAction::Stand),
        ..ScriptedInput::default()
    };
    let mut table = RecordingTable::default();

    let summary = session.run(&mut input, &mut table).unwrap();

    assert_eq!(
        table.rejected,
        vec![
            (0, BetError::NonPositive),
            (-5, BetError::NonPositive),
            (1001, BetError::InsufficientFunds),
        ]
    );
    assert_eq!(input.bet_prompts, 4);
    assert_eq!(summary.rounds, 1);
    assert_eq!(table.results.len(), 1);

    let result = table.results[0];
    assert_eq!(result.bet, 100);
    assert_eq!(result.balance_before, 1000);
    assert!([900, 1000, 1100].contains(&result.balance_after));
    assert_eq!(session.balance(), result.balance_after);
    assert_eq!(summary.final_balance, result.balance_after);
    assert_eq!(table.summary, Some(summary));
    assert_eq!(table.started_with, Some(1000));
}

#[test]
fn zero_balance_ends_session_without_more_prompts() {
    let mut session = Session::new(GameOptions::default().with_starting_balance(10), 99);
    let mut input = ScriptedInput {
        bets: core::iter::repeat_n(None, 500).collect(),
        play_again: core::iter::repeat_n(true, 500).collect(),
        default_action: Some(PlayerAction::Stand),
        ..ScriptedInput::default()
    };
    let mut table = RecordingTable::default();

    let summary = session.run(&mut input, &mut table).unwrap();

    assert_eq!(summary.final_balance, 0);
    assert_eq!(session.balance(), 0);
    assert!(table.game_over);
    assert_eq!(input.bet_prompts, summary.rounds as usize);
    assert_eq!(input.play_again_prompts, summary.rounds as usize - 1);
    assert_eq!(
        table.results.last().map(|result| result.outcome.is_win()),
        Some(false)
    );
    assert_eq!(summary.net(), -10);
    assert_eq!(
        summary.wins + summary.losses + summary.pushes,
        summary.rounds
    );
}

#[test]
fn declining_ends_session() {
    let mut session = Session::new(GameOptions::default(), 1);
    let mut input = ScriptedInput {
        bets: VecDeque::from([Some(10), Some(10)]),
        play_again: VecDeque::from([true, false]),
        default_action: Some(PlayerAction::Stand),
        ..ScriptedInput::default()
    };
    let mut table = RecordingTable::default();

    let summary = session.run(&mut input, &mut table).unwrap();

    assert_eq!(summary.rounds, 2);
    assert_eq!(input.play_again_prompts, 2);
    assert!(!table.game_over);
    assert!(table.hole_hidden_while_deciding);
    assert!(table.tables_shown >= 2);

    let expected: i64 = table.results.iter().map(RoundResult::net).sum();
    assert_eq!(summary.net(), expected);
}

#[test]
fn always_hitting_never_leaves_player_turn_open() {
    let mut session = Session::new(GameOptions::default(), 21);
    let mut input = ScriptedInput {
        bets: VecDeque::from([Some(50)]),
        play_again: VecDeque::from([false]),
        default_action: Some(PlayerAction::Hit),
        ..ScriptedInput::default()
    };
    let mut table = RecordingTable::default();

    session.run(&mut input, &mut table).unwrap();

    let result = table.results[0];
    assert!(result.player_value >= 21);
    if result.outcome == HandOutcome::Bust {
        assert!(!result.dealer_played);
        assert_eq!(result.balance_after, 950);
    } else {
        assert_eq!(result.player_value, 21);
        assert!(result.dealer_played);
    }
}

#[test]
fn input_failure_keeps_balance() {
    let mut session = Session::new(GameOptions::default().with_starting_balance(300), 8);
    let mut input = ScriptedInput::default();
    let mut table = RecordingTable::default();

    let err = session.run(&mut input, &mut table).unwrap_err();

    assert!(matches!(err, SessionError::Input(OutOfInput)));
    assert_eq!(session.balance(), 300);
    assert_eq!(session.summary().rounds, 0);
    assert_eq!(session.summary().final_balance, 300);
}

#[test]
fn empty_balance_plays_no_rounds() {
    let mut session = Session::new(GameOptions::default().with_starting_balance(0), 2);
    let mut input = ScriptedInput::default();
    let mut table = RecordingTable::default();

    let summary = session.run(&mut input, &mut table).unwrap();

    assert_eq!(summary.rounds, 0);
    assert_eq!(summary.final_balance, 0);
    assert_eq!(summary.net(), 0);
    assert_eq!(input.bet_prompts, 0);
    assert_eq!(input.play_again_prompts, 0);
    assert_eq!(table.tables_shown, 0);
    assert_eq!(table.summary, Some(summary));
}

#[test]
fn oversized_balance_is_capped() {
    let session = Session::new(GameOptions::default().with_starting_balance(u64::MAX), 2);

    assert_eq!(session.balance(), MAX_STARTING_BALANCE);
    assert_eq!(session.summary().net(), 0);
}

#[test]
fn hand_art_draws_boxes() {
    let cards = [
        Card::new(Suit::Spades, Rank::King),
        Card::new(Suit::Hearts, Rank::Ten),
    ];

    let art = hand_art(&cards, false);
    let lines: Vec<&str> = art.lines().collect();

    assert_eq!(
        lines,
        vec![
            "┌─────────┐ ┌─────────┐ ",
            "│ K       │ │ 10      │ ",
            "│    S    │ │    H    │ ",
            "│       K │ │      10 │ ",
            "└─────────┘ └─────────┘ ",
        ]
    );
    assert_eq!(hand_log(&cards, false), "[K Spades] [10 Hearts]");
}

#[test]
fn hidden_card_is_not_revealed() {
    let cards = [
        Card::new(Suit::Clubs, Rank::Ace),
        Card::new(Suit::Diamonds, Rank::Seven),
    ];

    let art = hand_art(&cards, true);
    assert!(!art.contains('A'));
    assert!(!art.contains('C'));
    assert!(art.contains("│ ?       │"));
    assert!(art.contains("│    D    │"));

    let log = hand_log(&cards, true);
    assert_eq!(log, "[HIDDEN] [7 Diamonds]");
    assert!(!log.contains("Clubs"));
}

#[test]
fn empty_hand_renders_nothing() {
    assert!(hand_art(&[], true).is_empty());
    assert!(hand_log(&[], false).is_empty());
}
