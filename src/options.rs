//! Table configuration options.

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// House rules and bankroll settings for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(4)
///     .with_min_bet(25)
///     .with_starting_chips(1_000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of 52-card decks in the shoe.
    pub decks: u8,
    /// Smallest accepted bet.
    pub min_bet: usize,
    /// Chips the player sits down with.
    pub starting_chips: usize,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Dealer draws while below this total.
    pub dealer_stands_on: u8,
    /// Fraction of the shoe dealt before it is rebuilt between rounds.
    /// 0 to never rebuild.
    pub penetration: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            min_bet: 100,
            starting_chips: 10_000,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            dealer_stands_on: 17,
            penetration: 0.0,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_bet(10);
    /// assert_eq!(options.min_bet, 10);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(500);
    /// assert_eq!(options.starting_chips, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::TableOptions;
    ///
    /// let options = TableOptions::default().with_penetration(0.75);
    /// assert_eq!(options.penetration, 0.75);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }
}
