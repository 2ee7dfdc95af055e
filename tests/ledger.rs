//! Ledger tests.

#![allow(clippy::float_cmp)]

use bjtable::{Ledger, LedgerError};

#[test]
fn bet_then_credit_round_trips() {
    let mut ledger = Ledger::new(100.0);
    assert_eq!(ledger.place_bet(25.0), Ok(75.0));
    assert_eq!(ledger.credit(25.0), Ok(100.0));
    assert_eq!(ledger.balance(), 100.0);
    assert_eq!(ledger.statistics().total_bets_placed, 25.0);
}

#[test]
fn overdrawn_bet_fails_without_mutation() {
    let mut ledger = Ledger::new(50.0);
    let before = ledger.clone();

    assert_eq!(ledger.place_bet(50.01), Err(LedgerError::InsufficientFunds));
    assert_eq!(ledger, before);

    assert_eq!(ledger.place_bet(50.0), Ok(0.0));
    assert!(ledger.is_broke());
    assert_eq!(ledger.place_bet(1.0), Err(LedgerError::InsufficientFunds));
}

#[test]
fn invalid_amounts_are_rejected() {
    let mut ledger = Ledger::new(50.0);
    let before = ledger.clone();

    assert_eq!(ledger.place_bet(0.0), Err(LedgerError::InvalidAmount));
    assert_eq!(ledger.place_bet(-5.0), Err(LedgerError::InvalidAmount));
    assert_eq!(ledger.place_bet(f64::NAN), Err(LedgerError::InvalidAmount));
    assert_eq!(ledger.credit(-0.01), Err(LedgerError::InvalidAmount));
    assert_eq!(ledger.credit(f64::INFINITY), Err(LedgerError::InvalidAmount));
    assert_eq!(ledger.add_funds(0.0), Err(LedgerError::InvalidAmount));
    assert_eq!(ledger, before);

    assert_eq!(ledger.credit(0.0), Ok(50.0));
}

#[test]
fn counters_track_results_without_touching_balance() {
    let mut ledger = Ledger::new(100.0);
    ledger.record_win(15.0);
    ledger.record_win(10.0);
    ledger.record_loss(10.0);
    ledger.record_push();

    let stats = ledger.statistics();
    assert_eq!(stats.balance, 100.0);
    assert_eq!(stats.hands_played, 4);
    assert_eq!(stats.hands_won, 2);
    assert_eq!(stats.hands_lost, 1);
    assert_eq!(stats.hands_pushed, 1);
    assert_eq!(stats.total_winnings, 25.0);
    assert_eq!(stats.total_losses, 10.0);
    assert_eq!(stats.win_rate, 50.0);
}

#[test]
fn reset_restores_balance_and_zeroes_counters() {
    let mut ledger = Ledger::new(100.0);
    ledger.place_bet(40.0).unwrap();
    ledger.record_loss(40.0);

    assert_eq!(ledger.reset(None), Ok(100.0));
    assert_eq!(ledger.balance(), 100.0);
    assert_eq!(ledger.statistics().hands_played, 0);
    assert_eq!(ledger.statistics().total_bets_placed, 0.0);

    assert_eq!(ledger.reset(Some(250.0)), Ok(250.0));
    assert_eq!(ledger.balance(), 250.0);
    assert_eq!(ledger.net_profit(), 150.0);
}

#[test]
fn reset_rejects_invalid_balance() {
    let mut ledger = Ledger::new(100.0);
    ledger.place_bet(40.0).unwrap();
    ledger.record_loss(40.0);
    let before = ledger.clone();

    for balance in [-50.0, f64::NAN, f64::INFINITY] {
        assert_eq!(
            ledger.reset(Some(balance)),
            Err(LedgerError::InvalidAmount)
        );
        assert_eq!(ledger, before);
    }

    assert_eq!(ledger.reset(Some(0.0)), Ok(0.0));
    assert!(ledger.is_broke());
}

#[test]
fn add_funds_moves_the_baseline() {
    let mut ledger = Ledger::new(100.0);
    ledger.place_bet(30.0).unwrap();
    assert_eq!(ledger.add_funds(50.0), Ok(120.0));
    assert_eq!(ledger.net_profit(), -30.0);
    assert!(ledger.can_afford(120.0));
    assert!(!ledger.can_afford(120.5));
    assert_eq!(ledger.win_rate(), 0.0);
}
