//! Bankroll accounting.

use crate::error::LedgerError;

/// Snapshot of the ledger's balance and counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Current balance.
    pub balance: f64,
    /// Baseline the net profit is measured against.
    pub initial_balance: f64,
    /// `balance - initial_balance`.
    pub net_profit: f64,
    /// Sum of every stake placed (bets, doubles, insurance).
    pub total_bets_placed: f64,
    /// Sum of recorded winnings.
    pub total_winnings: f64,
    /// Sum of recorded losses.
    pub total_losses: f64,
    /// Hands settled.
    pub hands_played: u32,
    /// Hands won.
    pub hands_won: u32,
    /// Hands lost.
    pub hands_lost: u32,
    /// Hands pushed.
    pub hands_pushed: u32,
    /// Percentage of settled hands that were won.
    pub win_rate: f64,
}

/// The player's bankroll.
///
/// The balance only moves through [`place_bet`](Self::place_bet) and
/// [`credit`](Self::credit) (plus [`add_funds`](Self::add_funds) and
/// [`reset`](Self::reset) between games). Failed operations leave the ledger
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    balance: f64,
    initial_balance: f64,
    total_bets_placed: f64,
    total_winnings: f64,
    total_losses: f64,
    hands_played: u32,
    hands_won: u32,
    hands_lost: u32,
    hands_pushed: u32,
}

impl Ledger {
    /// Creates a ledger holding `initial_balance`.
    #[must_use]
    pub const fn new(initial_balance: f64) -> Self {
        Self {
            balance: initial_balance,
            initial_balance,
            total_bets_placed: 0.0,
            total_winnings: 0.0,
            total_losses: 0.0,
            hands_played: 0,
            hands_won: 0,
            hands_lost: 0,
            hands_pushed: 0,
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> f64 {
        self.balance
    }

    /// Debits a stake.
    ///
    /// Returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAmount`] if `amount` is not a positive
    /// finite number and [`LedgerError::InsufficientFunds`] if it exceeds the
    /// balance.
    pub fn place_bet(&mut self, amount: f64) -> Result<f64, LedgerError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds);
        }

        self.balance -= amount;
        self.total_bets_placed += amount;
        Ok(self.balance)
    }

    /// Credits a payout.
    ///
    /// Returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAmount`] if `amount` is negative or not
    /// finite.
    pub fn credit(&mut self, amount: f64) -> Result<f64, LedgerError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(LedgerError::InvalidAmount);
        }

        self.balance += amount;
        Ok(self.balance)
    }

    /// Tops up the bankroll, raising the profit baseline by the same amount.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAmount`] if `amount` is not a positive
    /// finite number.
    pub fn add_funds(&mut self, amount: f64) -> Result<f64, LedgerError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount);
        }

        self.balance += amount;
        self.initial_balance += amount;
        Ok(self.balance)
    }

    /// Records a won hand.
    pub fn record_win(&mut self, amount: f64) {
        self.total_winnings += amount;
        self.hands_won += 1;
        self.hands_played += 1;
    }

    /// Records a lost hand.
    pub fn record_loss(&mut self, amount: f64) {
        self.total_losses += amount;
        self.hands_lost += 1;
        self.hands_played += 1;
    }

    /// Records a pushed hand.
    pub const fn record_push(&mut self) {
        self.hands_pushed += 1;
        self.hands_played += 1;
    }

    /// Restores the balance to `new_balance`, or to the initial balance, and
    /// zeroes every counter.
    ///
    /// Returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAmount`] if `new_balance` is negative or
    /// not finite.
    pub fn reset(&mut self, new_balance: Option<f64>) -> Result<f64, LedgerError> {
        let balance = new_balance.unwrap_or(self.initial_balance);
        if !balance.is_finite() || balance < 0.0 {
            return Err(LedgerError::InvalidAmount);
        }

        *self = Self {
            initial_balance: self.initial_balance,
            ..Self::new(balance)
        };
        Ok(balance)
    }

    /// Returns whether `amount` can be staked.
    #[must_use]
    pub fn can_afford(&self, amount: f64) -> bool {
        self.balance >= amount
    }

    /// Returns whether the bankroll is exhausted.
    #[must_use]
    pub fn is_broke(&self) -> bool {
        self.balance <= 0.0
    }

    /// Returns `balance - initial_balance`.
    #[must_use]
    pub fn net_profit(&self) -> f64 {
        self.balance - self.initial_balance
    }

    /// Returns the percentage of settled hands that were won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.hands_played == 0 {
            return 0.0;
        }
        f64::from(self.hands_won) / f64::from(self.hands_played) * 100.0
    }

    /// Returns a snapshot of the balance and counters.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics {
            balance: self.balance,
            initial_balance: self.initial_balance,
            net_profit: self.net_profit(),
            total_bets_placed: self.total_bets_placed,
            total_winnings: self.total_winnings,
            total_losses: self.total_losses,
            hands_played: self.hands_played,
            hands_won: self.hands_won,
            hands_lost: self.hands_lost,
            hands_pushed: self.hands_pushed,
            win_rate: self.win_rate(),
        }
    }
}
