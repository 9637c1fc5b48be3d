//! Round and session result types.

/// Result of the player's hand after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Dealer has higher value.
    Lose,
    /// Push (tie).
    Push,
    /// Player went over 21; the dealer never played.
    Bust,
}

impl HandOutcome {
    /// Signed balance change for a hand that staked `bet`.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "bets never exceed i64::MAX")]
    pub const fn delta(self, bet: u64) -> i64 {
        match self {
            Self::Win => bet as i64,
            Self::Lose | Self::Bust => -(bet as i64),
            Self::Push => 0,
        }
    }

    /// Applies the outcome of a `bet` to `balance`.
    ///
    /// Losses saturate at zero; a validated bet never exceeds the balance.
    #[must_use]
    pub const fn settle(self, balance: u64, bet: u64) -> u64 {
        match self {
            Self::Win => balance.saturating_add(bet),
            Self::Lose | Self::Bust => balance.saturating_sub(bet),
            Self::Push => balance,
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }
}

/// Result of a single round after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the player's hand.
    pub outcome: HandOutcome,
    /// The bet amount.
    pub bet: u64,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value. Only the initial two cards count when
    /// the player busted.
    pub dealer_value: u8,
    /// Whether the dealer played out their hand.
    pub dealer_played: bool,
    /// Balance before the round.
    pub balance_before: u64,
    /// Balance after settling the bet.
    pub balance_after: u64,
}

impl RoundResult {
    /// Net change to the player's balance.
    #[must_use]
    pub const fn net(&self) -> i64 {
        self.outcome.delta(self.bet)
    }
}

/// Totals for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Number of rounds resolved.
    pub rounds: u32,
    /// Rounds won by the player.
    pub wins: u32,
    /// Rounds lost to the dealer, busts included.
    pub losses: u32,
    /// Rounds pushed.
    pub pushes: u32,
    /// Balance at the start of the session.
    pub starting_balance: u64,
    /// Balance when the session ended.
    pub final_balance: u64,
}

impl SessionSummary {
    /// Records a resolved round.
    pub const fn record(&mut self, result: &RoundResult) {
        self.rounds += 1;
        match result.outcome {
            HandOutcome::Win => self.wins += 1,
            HandOutcome::Lose | HandOutcome::Bust => self.losses += 1,
            HandOutcome::Push => self.pushes += 1,
        }
        self.final_balance = result.balance_after;
    }

    /// Net result of the session (positive = profit).
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "starting balances are capped at i64::MAX")]
    pub const fn net(&self) -> i64 {
        self.final_balance as i64 - self.starting_balance as i64
    }
}
