//! Session configuration options.

/// Balance a new session starts with unless configured otherwise.
pub const DEFAULT_STARTING_BALANCE: u64 = 1000;

/// Largest starting balance a session accepts. Balances are reported as
/// signed net results, so they must fit in an `i64`.
pub const MAX_STARTING_BALANCE: u64 = i64::MAX as u64;

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjterm::GameOptions;
///
/// let options = GameOptions::default().with_starting_balance(250);
/// assert_eq!(options.starting_balance, 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Balance the player starts with.
    pub starting_balance: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
        }
    }
}

impl GameOptions {
    /// Sets the starting balance, capped at [`MAX_STARTING_BALANCE`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::GameOptions;
    ///
    /// use bjterm::MAX_STARTING_BALANCE;
    ///
    /// let options = GameOptions::default().with_starting_balance(500);
    /// assert_eq!(options.starting_balance, 500);
    ///
    /// let options = GameOptions::default().with_starting_balance(u64::MAX);
    /// assert_eq!(options.starting_balance, MAX_STARTING_BALANCE);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = if balance > MAX_STARTING_BALANCE {
            MAX_STARTING_BALANCE
        } else {
            balance
        };
        self
    }
}
