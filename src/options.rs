//! Table configuration options.

use core::time::Duration;

use crate::error::OptionsError;

/// Rounding mode for blackjack winnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Pay the exact product, without rounding.
    Exact,
    /// Round up to the next cent.
    Up,
    /// Round down to the cent below.
    Down,
    /// Round to the nearest cent.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(8)
///     .with_reshuffle_threshold(0.2)
///     .with_stand_on_soft_17(false);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Remaining fraction of the shoe at or below which a draw reshuffles.
    pub reshuffle_threshold: f64,
    /// Starting bankroll.
    pub initial_balance: f64,
    /// Table minimum bet.
    pub min_bet: f64,
    /// Table maximum bet.
    pub max_bet: f64,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack winnings.
    pub rounding_blackjack: RoundingMode,
    /// Whether insurance is offered when the dealer shows an Ace.
    pub insurance: bool,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Pause after the dealer reveals the hole card.
    pub reveal_delay: Duration,
    /// Pause before each dealer draw.
    pub dealer_draw_delay: Duration,
    /// Pause while the outcome banner is shown.
    pub outcome_delay: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            reshuffle_threshold: 0.25,
            initial_balance: 1000.0,
            min_bet: 1.0,
            max_bet: 1000.0,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Exact,
            insurance: true,
            stand_on_soft_17: true,
            reveal_delay: Duration::from_millis(500),
            dealer_draw_delay: Duration::from_millis(1000),
            outcome_delay: Duration::from_millis(2500),
        }
    }
}

impl GameOptions {
    /// Checks that the options describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns the first [`OptionsError`] found.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameOptions, OptionsError};
    ///
    /// let options = GameOptions::default().with_decks(0);
    /// assert_eq!(options.validate(), Err(OptionsError::NoDecks));
    /// ```
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.decks == 0 {
            return Err(OptionsError::NoDecks);
        }
        if !(0.0..=1.0).contains(&self.reshuffle_threshold) {
            return Err(OptionsError::InvalidThreshold);
        }
        if !self.min_bet.is_finite()
            || !self.max_bet.is_finite()
            || self.min_bet <= 0.0
            || self.max_bet < self.min_bet
        {
            return Err(OptionsError::InvalidBetLimits);
        }
        if !self.initial_balance.is_finite() || self.initial_balance < 0.0 {
            return Err(OptionsError::InvalidBalance);
        }
        if !self.blackjack_pays.is_finite() || self.blackjack_pays < 0.0 {
            return Err(OptionsError::InvalidPayout);
        }
        Ok(())
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(0.5);
    /// assert_eq!(options.reshuffle_threshold, 0.5);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: f64) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_balance(250.0);
    /// assert_eq!(options.initial_balance, 250.0);
    /// ```
    #[must_use]
    pub const fn with_initial_balance(mut self, balance: f64) -> Self {
        self.initial_balance = balance;
        self
    }

    /// Sets the table limits.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_bet_limits(5.0, 500.0);
    /// assert_eq!((options.min_bet, options.max_bet), (5.0, 500.0));
    /// ```
    #[must_use]
    pub const fn with_bet_limits(mut self, min_bet: f64, max_bet: f64) -> Self {
        self.min_bet = min_bet;
        self.max_bet = max_bet;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack winnings.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets whether insurance is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_insurance(false);
    /// assert_eq!(options.insurance, false);
    /// ```
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.insurance = offered;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets all three presentation pauses at once.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_pacing(Duration::ZERO, Duration::ZERO, Duration::ZERO);
    /// assert_eq!(options.outcome_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_pacing(
        mut self,
        reveal_delay: Duration,
        dealer_draw_delay: Duration,
        outcome_delay: Duration,
    ) -> Self {
        self.reveal_delay = reveal_delay;
        self.dealer_draw_delay = dealer_draw_delay;
        self.outcome_delay = outcome_delay;
        self
    }
}
