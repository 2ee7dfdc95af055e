//! Hands and their blackjack evaluation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Best total and softness of `cards`.
///
/// Aces start at 1; each is then promoted to 11 while that does not push the
/// total past 21.
fn evaluate<'a>(cards: impl IntoIterator<Item = &'a Card>) -> (u8, bool) {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
            total = total.saturating_add(1);
        } else {
            total = total.saturating_add(card.value());
        }
    }

    let mut promoted = false;
    while aces > 0 && total <= 11 {
        total += 10;
        aces -= 1;
        promoted = true;
    }

    (total, promoted)
}

/// Who holds a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("player"),
            Self::Dealer => f.write_str("dealer"),
        }
    }
}

/// An ordered set of cards held by the player or the dealer.
///
/// All derived values (totals, soft, bust, blackjack, pair) are computed on
/// demand from the cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards` in deal order.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card (the dealer's up-card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Best total: the highest total not above 21 when one exists,
    /// otherwise the total with every Ace counted as 1.
    #[must_use]
    pub fn best_total(&self) -> u8 {
        evaluate(&self.cards).0
    }

    /// Best total over face-up cards only.
    #[must_use]
    pub fn visible_total(&self) -> u8 {
        evaluate(self.cards.iter().filter(|card| !card.face_down)).0
    }

    /// Returns whether an Ace is counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1
    }

    /// Returns whether the hand is a soft 17.
    #[must_use]
    pub fn is_soft_17(&self) -> bool {
        let (total, soft) = evaluate(&self.cards);
        soft && total == 17
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.best_total() > 21
    }

    /// Returns whether the hand is a natural: exactly two cards, one Ace and
    /// one ten-valued card.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2
            && self.cards.iter().any(Card::is_ace)
            && self.cards.iter().any(Card::is_ten_value)
    }

    /// Returns whether the hand is a pair of equal rank.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Turns every face-down card face up.
    pub fn reveal_hole(&mut self) {
        for card in &mut self.cards {
            card.reveal();
        }
    }

    /// Returns whether any card is face down.
    #[must_use]
    pub fn has_hole_card(&self) -> bool {
        self.cards.iter().any(|card| card.face_down)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns every card.
    pub fn take_cards(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
