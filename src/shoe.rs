//! The multi-deck shoe: shuffling, drawing, discarding and reshuffling.

extern crate alloc;

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::card::{Card, DECK_SIZE, KING, Suit};
use crate::error::ShoeError;
use crate::hand::Hand;

/// Shuffles `items` in place with the Fisher–Yates algorithm.
///
/// Walks from the last index down to 1, swapping each element with a
/// uniformly chosen element at an index in `0..=i`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

fn build_decks(decks: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);
    for _ in 0..decks {
        for suit in Suit::ALL {
            for rank in 1..=KING {
                cards.push(Card::new(suit, rank));
            }
        }
    }
    cards
}

/// A shoe of one or more decks with a discard pile.
///
/// Cards are drawn from the end of the shoe. The reshuffle check runs lazily
/// at the start of every draw: once the remaining fraction is at or below the
/// threshold, the discard pile is merged back and everything is reshuffled.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    discard: Vec<Card>,
    decks: u8,
    reshuffle_threshold: f64,
    reshuffles: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidThreshold`] if the threshold is not within
    /// `0.0..=1.0`.
    pub fn new(decks: u8, reshuffle_threshold: f64, seed: u64) -> Result<Self, ShoeError> {
        if !(0.0..=1.0).contains(&reshuffle_threshold) {
            return Err(ShoeError::InvalidThreshold);
        }

        let mut shoe = Self {
            cards: Vec::new(),
            discard: Vec::new(),
            decks,
            reshuffle_threshold,
            reshuffles: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.reset();
        Ok(shoe)
    }

    /// Rebuilds every deck, empties the discard pile and shuffles.
    pub fn reset(&mut self) {
        self.cards = build_decks(self.decks);
        self.discard.clear();
        self.shuffle();
    }

    /// Shuffles the cards currently in the shoe.
    pub fn shuffle(&mut self) {
        fisher_yates(&mut self.cards, &mut self.rng);
    }

    /// Returns whether the next draw will reshuffle first.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let remaining = self.cards.len() as f64 / self.total_cards() as f64;
        remaining <= self.reshuffle_threshold
    }

    /// Merges the discard pile back into the shoe and shuffles everything.
    pub fn reshuffle(&mut self) {
        let merged = self.discard.len();
        self.cards.append(&mut self.discard);
        self.shuffle();
        self.reshuffles += 1;
        info!(merged, remaining = self.cards.len(), "shoe reshuffled");
    }

    /// Draws the next card, reshuffling first if the threshold is reached.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no card is left even after the
    /// reshuffle.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        if self.needs_reshuffle() {
            self.reshuffle();
        }

        let card = self.cards.pop().ok_or(ShoeError::Empty)?;
        debug!(%card, remaining = self.cards.len(), "drew card");
        Ok(card)
    }

    /// Moves a spent card to the discard pile.
    pub fn discard(&mut self, mut card: Card) {
        card.reveal();
        self.discard.push(card);
    }

    /// Moves every card of `hand` to the discard pile, leaving it empty.
    pub fn discard_hand(&mut self, hand: &mut Hand) {
        for card in hand.take_cards() {
            self.discard(card);
        }
    }

    /// Replaces the shoe so the next draws return `draws` in order.
    ///
    /// The discard pile is emptied. Intended for tests and replays; the shoe
    /// no longer holds a full set of decks afterwards.
    pub fn stack(&mut self, draws: &[Card]) {
        self.cards = draws.iter().rev().copied().collect();
        self.discard.clear();
    }

    /// Updates the reshuffle threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::InvalidThreshold`] if the threshold is not within
    /// `0.0..=1.0`.
    pub fn set_reshuffle_threshold(&mut self, threshold: f64) -> Result<(), ShoeError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ShoeError::InvalidThreshold);
        }
        self.reshuffle_threshold = threshold;
        Ok(())
    }

    /// Returns the reshuffle threshold.
    #[must_use]
    pub const fn reshuffle_threshold(&self) -> f64 {
        self.reshuffle_threshold
    }

    /// Returns the cards still in the shoe, next draw last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the discard pile.
    #[must_use]
    pub fn discarded(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards that can still be drawn, counting the
    /// discard pile that a reshuffle would bring back.
    #[must_use]
    pub fn cards_available(&self) -> usize {
        self.cards.len() + self.discard.len()
    }

    /// Returns the size of a full shoe.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns the remaining cards as a percentage of a full shoe.
    #[must_use]
    pub fn percent_remaining(&self) -> f64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let percent = self.cards.len() as f64 / self.total_cards() as f64 * 100.0;
        percent
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns how many reshuffles have happened since creation.
    #[must_use]
    pub const fn reshuffle_count(&self) -> usize {
        self.reshuffles
    }
}
