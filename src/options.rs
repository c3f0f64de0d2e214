//! Table configuration options.

/// Configuration options for a table.
///
/// The payout rules are fixed; these options cover the table limits and
/// shoe handling around them. Use the builder pattern to customize:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_min_bet(10)
///     .with_starting_balance(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Smallest accepted bet. A balance below this after settlement ends the game.
    pub min_bet: usize,
    /// The shoe is reshuffled before a deal when fewer cards than this remain.
    pub reshuffle_threshold: usize,
    /// Balance given to a player with no stored profile.
    pub starting_balance: usize,
    /// Bet suggested to the player before the first round.
    pub default_bet: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            min_bet: 5,
            reshuffle_threshold: 15,
            starting_balance: 100,
            default_bet: 10,
        }
    }
}

impl TableOptions {
    /// Sets the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_bet(25);
    /// assert_eq!(options.min_bet, 25);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_reshuffle_threshold(20);
    /// assert_eq!(options.reshuffle_threshold, 20);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the starting balance for new players.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_balance(1_000);
    /// assert_eq!(options.starting_balance, 1_000);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the suggested default bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_default_bet(20);
    /// assert_eq!(options.default_bet, 20);
    /// ```
    #[must_use]
    pub const fn with_default_bet(mut self, bet: usize) -> Self {
        self.default_bet = bet;
        self
    }

    /// Clamps a requested bet into `[min_bet, balance]`, as a bet slider would.
    ///
    /// Returns `min_bet` when the balance is below it.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default();
    /// assert_eq!(options.clamp_bet(500, 80), 80);
    /// assert_eq!(options.clamp_bet(1, 80), 5);
    /// ```
    #[must_use]
    pub fn clamp_bet(&self, requested: usize, balance: usize) -> usize {
        requested.min(balance).max(self.min_bet)
    }
}
