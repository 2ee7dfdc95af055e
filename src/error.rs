//! Error types for game operations.

use thiserror::Error;

/// Errors raised by the bankroll ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The amount is not a positive (or, for credits, non-negative) finite number.
    #[error("invalid amount")]
    InvalidAmount,
    /// The amount exceeds the available balance.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards are left, even after merging the discard pile.
    #[error("no cards left in the shoe")]
    Empty,
    /// Reshuffle threshold outside `0.0..=1.0`.
    #[error("reshuffle threshold must be between 0 and 1")]
    InvalidThreshold,
}

/// Errors reported by [`GameOptions::validate`](crate::GameOptions::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The shoe must hold at least one deck.
    #[error("at least one deck is required")]
    NoDecks,
    /// Reshuffle threshold outside `0.0..=1.0`.
    #[error("reshuffle threshold must be between 0 and 1")]
    InvalidThreshold,
    /// Minimum bet is not positive or exceeds the maximum.
    #[error("invalid table limits")]
    InvalidBetLimits,
    /// Initial balance is negative or not finite.
    #[error("invalid initial balance")]
    InvalidBalance,
    /// Blackjack payout ratio is negative or not finite.
    #[error("invalid blackjack payout ratio")]
    InvalidPayout,
    /// The shoe could not be built from the options.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet is below the table minimum.
    #[error("bet is below the table minimum")]
    BelowMinimum,
    /// Bet exceeds the table maximum.
    #[error("bet exceeds the table maximum")]
    AboveMaximum,
    /// Bet exceeds the available balance.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// There is no previous bet to repeat.
    #[error("no previous bet to repeat")]
    NoPreviousBet,
    /// The ledger rejected the bet.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    /// Dealing the repeated bet failed.
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
    /// The shoe failed while dealing.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur while deciding on insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// The ledger rejected the insurance stake.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Split hands are not supported at this table.
    #[error("split is not implemented")]
    Unimplemented,
    /// The ledger rejected the extra stake.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    /// The shoe ran dry; the round was voided.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}
