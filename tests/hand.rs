//! Hand evaluation tests.

use bjtable::card::{ACE, JACK, KING, QUEEN};
use bjtable::{Card, Hand, Suit};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn hand(ranks: &[u8]) -> Hand {
    let cards: Vec<Card> = ranks.iter().map(|&rank| card(Suit::Spades, rank)).collect();
    Hand::from_cards(&cards)
}

/// Best total by trying every Ace assignment.
fn brute_force_total(ranks: &[u8]) -> u8 {
    let aces = ranks.iter().filter(|&&rank| rank == ACE).count();
    let base: u8 = ranks
        .iter()
        .filter(|&&rank| rank != ACE)
        .map(|&rank| rank.min(10))
        .sum();

    let totals: Vec<u8> = (0..=aces)
        .map(|elevens| base + elevens as u8 * 11 + (aces - elevens) as u8)
        .collect();
    totals
        .iter()
        .copied()
        .filter(|&total| total <= 21)
        .max()
        .unwrap_or_else(|| *totals.iter().min().unwrap())
}

#[test]
fn best_total_matches_every_ace_assignment() {
    for a in 1..=KING {
        for b in 1..=KING {
            for c in 1..=KING {
                for d in 1..=KING {
                    let ranks = [a, b, c, d];
                    for len in 1..=4 {
                        let ranks = &ranks[..len];
                        assert_eq!(
                            hand(ranks).best_total(),
                            brute_force_total(ranks),
                            "ranks {ranks:?}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn soft_hands() {
    let soft_17 = hand(&[ACE, 6]);
    assert_eq!(soft_17.best_total(), 17);
    assert!(soft_17.is_soft());
    assert!(soft_17.is_soft_17());

    let hard_17 = hand(&[ACE, 6, 10]);
    assert_eq!(hard_17.best_total(), 17);
    assert!(!hard_17.is_soft());
    assert!(!hard_17.is_soft_17());

    let two_aces = hand(&[ACE, ACE]);
    assert_eq!(two_aces.best_total(), 12);
    assert!(two_aces.is_soft());

    let many_aces = hand(&[ACE, ACE, ACE, ACE, 7]);
    assert_eq!(many_aces.best_total(), 21);
    assert!(many_aces.is_soft());

    assert!(!hand(&[10, 7]).is_soft());
}

#[test]
fn bust_detection() {
    assert!(hand(&[10, 6, KING]).is_busted());
    assert!(!hand(&[10, ACE, KING]).is_busted());
    assert_eq!(hand(&[ACE, ACE, KING, QUEEN]).best_total(), 22);
}

#[test]
fn blackjack_needs_two_cards_with_ace_and_ten_value() {
    for ten in [10, JACK, QUEEN, KING] {
        for (ace_suit, ten_suit) in [(Suit::Hearts, Suit::Clubs), (Suit::Diamonds, Suit::Spades)] {
            let forward = Hand::from_cards(&[card(ace_suit, ACE), card(ten_suit, ten)]);
            let backward = Hand::from_cards(&[card(ten_suit, ten), card(ace_suit, ACE)]);
            assert!(forward.is_blackjack());
            assert!(backward.is_blackjack());
        }
    }

    assert!(!hand(&[ACE, ACE]).is_blackjack());
    assert!(!hand(&[KING, QUEEN]).is_blackjack());
    assert!(!hand(&[ACE, 9]).is_blackjack());

    let three_card_21 = hand(&[ACE, 5, 5]);
    assert_eq!(three_card_21.best_total(), 21);
    assert!(!three_card_21.is_blackjack());
}

#[test]
fn visible_total_ignores_face_down_cards() {
    let mut dealer = Hand::new();
    dealer.add_card(card(Suit::Hearts, ACE));
    dealer.add_card(card(Suit::Clubs, 6).turned_down());

    assert!(dealer.has_hole_card());
    assert_eq!(dealer.visible_total(), 11);
    assert_eq!(dealer.best_total(), 17);

    dealer.reveal_hole();
    assert!(!dealer.has_hole_card());
    assert_eq!(dealer.visible_total(), 17);
    assert!(dealer.is_soft());
}

#[test]
fn split_requires_pair_of_equal_rank() {
    assert!(hand(&[8, 8]).can_split());
    assert!(hand(&[ACE, ACE]).can_split());
    assert!(!hand(&[KING, QUEEN]).can_split());
    assert!(!hand(&[8, 8, 8]).can_split());
    assert!(!hand(&[8]).can_split());
}

#[test]
fn take_cards_empties_hand() {
    let mut hand = hand(&[2, 3, 4]);
    let cards = hand.take_cards();
    assert_eq!(cards.len(), 3);
    assert!(hand.is_empty());
    assert_eq!(hand.best_total(), 0);
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Spades, ACE).to_string(), "A♠");
    assert_eq!(card(Suit::Hearts, 10).to_string(), "10♥");
    assert_eq!(card(Suit::Diamonds, QUEEN).turned_down().to_string(), "??");
    assert_eq!(card(Suit::Clubs, KING).value(), 10);
    assert_eq!(card(Suit::Clubs, ACE).value(), 11);
}
