//! Game state types.

/// Round lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Accepting a bet for the next round.
    WaitingForBet,
    /// Dealing the initial four cards.
    DealingCards,
    /// Dealer shows an Ace; waiting for the insurance decision.
    OfferingInsurance,
    /// Peeking for naturals on either side.
    CheckingBlackjack,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Settling the stake.
    ResolvingBets,
    /// Round settled; about to return to betting.
    RoundComplete,
    /// Bankroll exhausted; only a new game leaves this state.
    GameOver,
}

/// A player decision during [`GameState::PlayerTurn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the stake, draw exactly one card, then stand.
    Double,
    /// Split a pair.
    Split,
}
