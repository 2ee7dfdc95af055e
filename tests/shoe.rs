//! Shoe tests.

use std::collections::HashMap;

use bjtable::shoe::fisher_yates;
use bjtable::{Card, DECK_SIZE, Hand, Shoe, ShoeError, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn card_counts(cards: &[Card]) -> HashMap<(Suit, u8), usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry((card.suit, card.rank)).or_insert(0) += 1;
    }
    counts
}

#[test]
fn new_shoe_holds_every_card_of_every_deck() {
    let shoe = Shoe::new(6, 0.25, 1).unwrap();
    assert_eq!(shoe.total_cards(), 6 * DECK_SIZE);
    assert_eq!(shoe.cards_remaining(), 6 * DECK_SIZE);
    assert!(shoe.discarded().is_empty());

    let counts = card_counts(shoe.cards());
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&count| count == 6));
}

#[test]
fn shuffle_is_a_permutation() {
    let mut shoe = Shoe::new(2, 0.25, 9).unwrap();
    let before = card_counts(shoe.cards());
    let order_before = shoe.cards().to_vec();

    shoe.shuffle();

    assert_eq!(card_counts(shoe.cards()), before);
    assert_ne!(shoe.cards(), order_before.as_slice());
}

#[test]
fn fisher_yates_is_unbiased() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
    let trials = 60_000;

    for _ in 0..trials {
        let mut items = [0_u8, 1, 2];
        fisher_yates(&mut items, &mut rng);
        *counts.entry(items).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 6);
    let expected = trials / 6;
    for (permutation, count) in counts {
        assert!(
            count.abs_diff(expected) < 600,
            "{permutation:?} drawn {count} times"
        );
    }
}

#[test]
fn draws_and_discards_preserve_card_count() {
    let mut shoe = Shoe::new(1, 0.25, 3).unwrap();
    let mut hand = Hand::new();

    for round in 0..200 {
        for _ in 0..(round % 5 + 1) {
            hand.add_card(shoe.draw().unwrap());
        }
        assert_eq!(
            shoe.cards_remaining() + shoe.discarded().len() + hand.len(),
            DECK_SIZE
        );
        shoe.discard_hand(&mut hand);
        assert!(hand.is_empty());
        assert_eq!(shoe.cards_remaining() + shoe.discarded().len(), DECK_SIZE);
    }
    assert!(shoe.reshuffle_count() > 0);
}

#[test]
fn reshuffle_triggers_at_threshold() {
    let mut shoe = Shoe::new(1, 0.25, 5).unwrap();

    for _ in 0..39 {
        shoe.draw().unwrap();
    }
    assert_eq!(shoe.cards_remaining(), 13);
    assert_eq!(shoe.reshuffle_count(), 0);
    assert!(shoe.needs_reshuffle());

    shoe.draw().unwrap();
    assert_eq!(shoe.reshuffle_count(), 1);
    assert_eq!(shoe.cards_remaining(), 12);
}

#[test]
fn reshuffle_merges_discard_pile() {
    let mut shoe = Shoe::new(1, 0.25, 11).unwrap();
    let mut hand = Hand::new();
    for _ in 0..39 {
        hand.add_card(shoe.draw().unwrap());
    }
    shoe.discard_hand(&mut hand);
    assert_eq!(shoe.discarded().len(), 39);
    assert_eq!(shoe.cards_available(), DECK_SIZE);

    shoe.draw().unwrap();
    assert!(shoe.discarded().is_empty());
    assert_eq!(shoe.cards_remaining(), DECK_SIZE - 1);
}

#[test]
fn discarded_cards_are_face_up() {
    let mut shoe = Shoe::new(1, 0.25, 2).unwrap();
    let card = shoe.draw().unwrap().turned_down();
    shoe.discard(card);
    assert!(!shoe.discarded()[0].face_down);
}

#[test]
fn empty_shoe_errors() {
    let mut shoe = Shoe::new(1, 0.0, 1).unwrap();
    for _ in 0..DECK_SIZE {
        shoe.draw().unwrap();
    }
    assert_eq!(shoe.draw().unwrap_err(), ShoeError::Empty);
    assert_eq!(shoe.cards_remaining(), 0);
}

#[test]
fn stacked_shoe_draws_in_order() {
    let mut shoe = Shoe::new(1, 0.0, 1).unwrap();
    let draws = [
        Card::new(Suit::Hearts, 1),
        Card::new(Suit::Clubs, 13),
        Card::new(Suit::Spades, 5),
    ];
    shoe.stack(&draws);

    for expected in draws {
        assert_eq!(shoe.draw().unwrap(), expected);
    }
    assert_eq!(shoe.draw().unwrap_err(), ShoeError::Empty);
}

#[test]
fn reset_restores_full_shoe() {
    let mut shoe = Shoe::new(2, 0.25, 4).unwrap();
    shoe.stack(&[Card::new(Suit::Hearts, 2)]);
    shoe.reset();
    assert_eq!(shoe.cards_remaining(), 2 * DECK_SIZE);
    assert!((shoe.percent_remaining() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn threshold_must_be_a_fraction() {
    assert_eq!(
        Shoe::new(1, 1.5, 1).unwrap_err(),
        ShoeError::InvalidThreshold
    );
    assert_eq!(
        Shoe::new(1, -0.1, 1).unwrap_err(),
        ShoeError::InvalidThreshold
    );
    assert_eq!(
        Shoe::new(1, f64::NAN, 1).unwrap_err(),
        ShoeError::InvalidThreshold
    );

    let mut shoe = Shoe::new(1, 0.25, 1).unwrap();
    assert_eq!(
        shoe.set_reshuffle_threshold(2.0).unwrap_err(),
        ShoeError::InvalidThreshold
    );
    shoe.set_reshuffle_threshold(0.5).unwrap();
    assert!((shoe.reshuffle_threshold() - 0.5).abs() < f64::EPSILON);
}
