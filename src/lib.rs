//! A single-seat blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full round lifecycle
//! against an automated dealer: betting, the deal, insurance, the blackjack
//! peek, player decisions, dealer play, payout and reset. Rendering is left
//! to a [`Presentation`] implementation that receives [`Command`]s, and
//! animation pauses go through a [`Pacer`].
//!
//! # Example
//!
//! ```
//! use bjtable::{Action, Game, GameOptions, GameState, Headless, NoDelay};
//!
//! let mut game = Game::new(GameOptions::default(), 42, Headless, NoDelay).unwrap();
//! game.place_bet(10.0).unwrap();
//! game.deal().unwrap();
//! if game.is_insurance_offered() {
//!     game.insurance_decision(false).unwrap();
//! }
//! if game.state() == GameState::PlayerTurn {
//!     game.player_action(Action::Stand).unwrap();
//! }
//! assert_eq!(game.state(), GameState::WaitingForBet);
//! assert!(game.last_result().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod pacing;
pub mod presentation;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{
    ActionError, BetError, DealError, InsuranceError, LedgerError, OptionsError, ShoeError,
};
pub use game::{Action, Game, GameState};
pub use hand::{Hand, Seat};
pub use ledger::{Ledger, Statistics};
pub use options::{GameOptions, RoundingMode};
#[cfg(feature = "std")]
pub use pacing::ThreadSleep;
pub use pacing::{NoDelay, Pacer};
pub use presentation::{AvailableActions, Command, Headless, Presentation};
pub use result::{Outcome, RoundResult, Settlement};
pub use shoe::Shoe;
