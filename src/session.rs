//! The session loop and its input/output collaborators.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{BetError, SessionError};
use crate::game::{PlayerAction, Round, RoundState, RoundView};
use crate::options::GameOptions;
use crate::result::{RoundResult, SessionSummary};

/// Source of player decisions.
///
/// Implementations block until the player answers. Malformed answers are
/// the implementation's business: it should ask again rather than return
/// garbage. An error ends the session.
pub trait Input {
    /// Error returned when no answer can be produced, e.g. input closed.
    type Error;

    /// Asks for the bet for the next round.
    ///
    /// The value is validated by the round; out-of-range amounts are
    /// reported through [`Table::bet_rejected`] and asked for again.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet can be read.
    fn next_bet(&mut self, balance: u64) -> Result<i64, Self::Error>;

    /// Asks whether to hit or stand.
    ///
    /// # Errors
    ///
    /// Returns an error if no action can be read.
    fn next_action(&mut self) -> Result<PlayerAction, Self::Error>;

    /// Asks whether to play another round.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be read.
    fn play_again(&mut self) -> Result<bool, Self::Error>;
}

/// Receives everything the player should see.
pub trait Table {
    /// Called once before the first round.
    fn session_started(&mut self, _balance: u64) {}

    /// Shows the hands during the player's turn. Called once per decision
    /// and once more when the turn ends.
    fn show_table(&mut self, view: RoundView<'_>);

    /// Reports a bet the round refused.
    fn bet_rejected(&mut self, amount: i64, error: BetError);

    /// Called before the dealer plays out their hand.
    fn dealer_turn(&mut self) {}

    /// Reports the settled round.
    fn round_over(&mut self, view: RoundView<'_>, result: &RoundResult);

    /// Called when the balance hits zero.
    fn game_over(&mut self) {}

    /// Reports the final state of the session.
    fn session_over(&mut self, summary: &SessionSummary);
}

/// A sequence of rounds against the dealer, sharing one balance.
pub struct Session<R = ChaCha8Rng> {
    /// Session options.
    pub options: GameOptions,
    balance: u64,
    summary: SessionSummary,
    rng: R,
}

impl Session<ChaCha8Rng> {
    /// Creates a new session whose shuffles are seeded by `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::{GameOptions, Session};
    ///
    /// let session = Session::new(GameOptions::default(), 42);
    /// assert_eq!(session.balance(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Creates a new session that shuffles with `rng`.
    #[must_use]
    pub const fn with_rng(options: GameOptions, rng: R) -> Self {
        Self {
            options,
            balance: options.starting_balance,
            summary: SessionSummary {
                rounds: 0,
                wins: 0,
                losses: 0,
                pushes: 0,
                starting_balance: options.starting_balance,
                final_balance: options.starting_balance,
            },
            rng,
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns the totals so far.
    #[must_use]
    pub const fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Plays rounds until the balance is gone or the player stops.
    ///
    /// The balance is never asked about again once it reaches zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the input fails or the round engine breaks an
    /// invariant. The balance and summary stay readable afterwards.
    pub fn run<I: Input, T: Table>(
        &mut self,
        input: &mut I,
        table: &mut T,
    ) -> Result<SessionSummary, SessionError<I::Error>> {
        table.session_started(self.balance);

        while self.balance > 0 {
            self.play_round(input, table)?;

            if self.balance == 0 {
                log::info!("balance exhausted");
                table.game_over();
                break;
            }

            if !input.play_again().map_err(SessionError::Input)? {
                break;
            }
        }

        let summary = self.summary;
        log::info!(
            "session over after {} round(s): final balance {} (net {})",
            summary.rounds,
            summary.final_balance,
            summary.net()
        );
        table.session_over(&summary);

        Ok(summary)
    }

    /// Plays a single round and applies its result to the balance. Only
    /// called while the balance is positive.
    fn play_round<I: Input, T: Table>(
        &mut self,
        input: &mut I,
        table: &mut T,
    ) -> Result<RoundResult, SessionError<I::Error>> {
        let mut round = Round::new(self.balance);

        loop {
            let amount = input.next_bet(self.balance).map_err(SessionError::Input)?;
            match round.bet(amount) {
                Ok(()) => break,
                Err(error) => table.bet_rejected(amount, error),
            }
        }

        round.deal(&mut self.rng)?;

        loop {
            table.show_table(round.view());
            if round.state() != RoundState::PlayerTurn {
                break;
            }

            match input.next_action().map_err(SessionError::Input)? {
                PlayerAction::Hit => {
                    round.hit()?;
                }
                PlayerAction::Stand => round.stand()?,
            }
        }

        if round.state() == RoundState::DealerTurn {
            table.dealer_turn();
            round.dealer_play()?;
        }

        let result = round.showdown()?;
        self.balance = result.balance_after;
        self.summary.record(&result);
        table.round_over(round.view(), &result);

        Ok(result)
    }
}
