//! Round outcomes and the payout table.

use crate::options::RoundingMode;

/// Slack for binary representation error, in cents.
const CENT_EPSILON: f64 = 1e-9;

#[cfg(feature = "std")]
fn round_cents(amount: f64, mode: RoundingMode) -> f64 {
    let cents = amount * 100.0;
    match mode {
        RoundingMode::Exact => amount,
        RoundingMode::Up => (cents - CENT_EPSILON).ceil() / 100.0,
        RoundingMode::Down => (cents + CENT_EPSILON).floor() / 100.0,
        RoundingMode::Nearest => cents.round() / 100.0,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_cents(amount: f64, mode: RoundingMode) -> f64 {
    let cents = amount * 100.0;
    match mode {
        RoundingMode::Exact => amount,
        RoundingMode::Up => libm::ceil(cents - CENT_EPSILON) / 100.0,
        RoundingMode::Down => libm::floor(cents + CENT_EPSILON) / 100.0,
        RoundingMode::Nearest => libm::round(cents) / 100.0,
    }
}

/// How the player's hand finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Natural blackjack, paid at the blackjack ratio.
    Blackjack,
    /// Player beat the dealer or the dealer busted.
    Win,
    /// Tie; the stake is returned.
    Push,
    /// Player went over 21.
    Bust,
    /// Dealer beat the player.
    Loss,
}

/// Money moved by settling a hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settlement {
    /// Amount credited back to the ledger (stake included).
    pub credit: f64,
    /// `credit - bet`: winnings when positive, the lost stake when negative.
    pub net: f64,
}

impl Outcome {
    /// Settles a stake of `bet` for this outcome.
    ///
    /// `blackjack_pays` is the natural's win ratio; its winnings are rounded
    /// with `rounding` ([`RoundingMode::Exact`] leaves them as computed).
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Outcome, RoundingMode};
    ///
    /// let settlement = Outcome::Blackjack.settle(10.0, 1.5, RoundingMode::Down);
    /// assert_eq!(settlement.credit, 25.0);
    /// assert_eq!(settlement.net, 15.0);
    /// ```
    #[must_use]
    pub fn settle(self, bet: f64, blackjack_pays: f64, rounding: RoundingMode) -> Settlement {
        let credit = match self {
            Self::Blackjack => bet + round_cents(bet * blackjack_pays, rounding),
            Self::Win => bet * 2.0,
            Self::Push => bet,
            Self::Bust | Self::Loss => 0.0,
        };
        Settlement {
            credit,
            net: credit - bet,
        }
    }

    /// Banner title shown for the outcome.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Blackjack => "BLACKJACK!",
            Self::Win => "YOU WIN!",
            Self::Push => "PUSH",
            Self::Bust => "BUSTED!",
            Self::Loss => "DEALER WINS",
        }
    }
}

/// Summary of a finished round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundResult {
    /// How the hand finished.
    pub outcome: Outcome,
    /// Final stake, including any double.
    pub bet: f64,
    /// Amount credited for the hand (stake included).
    pub payout: f64,
    /// Insurance stake (0 if none was taken).
    pub insurance_bet: f64,
    /// Insurance credit (0 unless the dealer had blackjack).
    pub insurance_payout: f64,
    /// Net change in bankroll over the round.
    pub net: f64,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}
