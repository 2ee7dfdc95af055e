//! Round state machine.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use tracing::{debug, error, warn};

use crate::card::Card;
use crate::error::{LedgerError, OptionsError, ShoeError};
use crate::hand::{Hand, Seat};
use crate::ledger::Ledger;
use crate::options::GameOptions;
use crate::pacing::{NoDelay, Pacer};
use crate::presentation::{Command, Headless, Presentation};
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use state::{Action, GameState};

pub(crate) fn dollars(amount: f64) -> String {
    format!("${amount:.2}")
}

/// A single-seat blackjack table.
///
/// The game owns the shoe, the ledger and both hands, and is the only thing
/// that mutates them. Display commands go to the [`Presentation`] `P`;
/// presentation pauses go to the [`Pacer`] `C`. Every inbound call runs to
/// completion before returning, so a round that ends inside a call is
/// already back in [`GameState::WaitingForBet`] (or
/// [`GameState::GameOver`]) when the call returns.
///
/// Inbound calls made in a state where they do not apply are ignored.
#[derive(Debug)]
pub struct Game<P = Headless, C = NoDelay> {
    options: GameOptions,
    state: GameState,
    shoe: Shoe,
    ledger: Ledger,
    player_hand: Hand,
    dealer_hand: Hand,
    current_bet: f64,
    last_bet: f64,
    insurance_bet: f64,
    has_insurance: bool,
    /// Insurance stake and credit settled this round.
    insurance_settled: (f64, f64),
    last_result: Option<RoundResult>,
    presentation: P,
    pacer: C,
}

impl<P: Presentation, C: Pacer> Game<P, C> {
    /// Creates a new game with the given shoe seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`] or the
    /// shoe rejects them. A game with an empty starting bankroll begins in
    /// [`GameState::GameOver`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, GameOptions, GameState, Headless, NoDelay};
    ///
    /// let game = Game::new(GameOptions::default(), 42, Headless, NoDelay).unwrap();
    /// assert_eq!(game.state(), GameState::WaitingForBet);
    /// assert_eq!(game.balance(), 1000.0);
    /// ```
    pub fn new(
        options: GameOptions,
        seed: u64,
        presentation: P,
        pacer: C,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        let shoe = Shoe::new(options.decks, options.reshuffle_threshold, seed)?;
        let state = if options.initial_balance > 0.0 {
            GameState::WaitingForBet
        } else {
            GameState::GameOver
        };

        let mut game = Self {
            ledger: Ledger::new(options.initial_balance),
            options,
            state,
            shoe,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            current_bet: 0.0,
            last_bet: 0.0,
            insurance_bet: 0.0,
            has_insurance: false,
            insurance_settled: (0.0, 0.0),
            last_result: None,
            presentation,
            pacer,
        };
        game.emit(Command::DisplayBankroll(game.ledger.balance()));
        Ok(game)
    }

    /// Starts over: fresh shoe, bankroll restored to its initial balance.
    ///
    /// Allowed in any state; a round in progress is abandoned. An empty
    /// bankroll goes straight to [`GameState::GameOver`].
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger rejects the initial balance; nothing
    /// is changed in that case.
    pub fn new_game(&mut self) -> Result<(), LedgerError> {
        self.restart(None)
    }

    /// Starts over with a specific bankroll.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAmount`] if `balance` is negative or not
    /// finite; nothing is changed in that case.
    pub fn reset_with_balance(&mut self, balance: f64) -> Result<(), LedgerError> {
        self.restart(Some(balance))
    }

    fn restart(&mut self, balance: Option<f64>) -> Result<(), LedgerError> {
        if let Err(err) = self.ledger.reset(balance) {
            self.message(format!("Cannot start a new game: {err}"));
            return Err(err);
        }
        self.shoe.reset();
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.current_bet = 0.0;
        self.last_bet = 0.0;
        self.clear_insurance();
        self.last_result = None;

        self.emit(Command::ClearHands);
        self.emit(Command::DisplayBankroll(self.ledger.balance()));
        self.emit(Command::DisplayBet(0.0));
        if self.ledger.is_broke() {
            self.message("Out of money! Game Over.");
            self.transition(GameState::GameOver);
            return Ok(());
        }

        self.message("New game started. Place your bet!");
        self.transition(GameState::WaitingForBet);
        self.emit(Command::EnableBetting);
        self.emit_repeat_bet();
        Ok(())
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the table options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current balance.
    pub const fn balance(&self) -> f64 {
        self.ledger.balance()
    }

    /// Returns the ledger.
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the shoe.
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe for direct manipulation, e.g. stacking a known
    /// sequence of draws.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the stake on the table for the current round.
    pub const fn current_bet(&self) -> f64 {
        self.current_bet
    }

    /// Returns the stake of the previous round.
    pub const fn last_bet(&self) -> f64 {
        self.last_bet
    }

    /// Returns the insurance stake, if insurance was taken and is unsettled.
    pub const fn insurance_bet(&self) -> Option<f64> {
        if self.has_insurance {
            Some(self.insurance_bet)
        } else {
            None
        }
    }

    /// Returns the summary of the most recently finished round.
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the presentation adapter.
    pub const fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Returns the presentation adapter mutably.
    pub const fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    fn emit(&mut self, command: Command) {
        self.presentation.apply(command);
    }

    fn message(&mut self, text: impl Into<String>) {
        self.emit(Command::DisplayMessage(text.into()));
    }

    fn transition(&mut self, state: GameState) {
        debug!(from = ?self.state, to = ?state, "state transition");
        self.state = state;
        self.emit(Command::UpdateGameState(state));
    }

    fn ignored(&self, input: &'static str) {
        debug!(input, state = ?self.state, "ignoring input outside its state");
    }

    fn render_hand(&mut self, seat: Seat) {
        let hand = match seat {
            Seat::Player => &self.player_hand,
            Seat::Dealer => &self.dealer_hand,
        };
        let command = Command::RenderHand {
            seat,
            cards: hand.cards().to_vec(),
            total: hand.visible_total(),
        };
        self.emit(command);
    }

    fn deal_card(&mut self, seat: Seat, card: Card) {
        let hand = match seat {
            Seat::Player => &mut self.player_hand,
            Seat::Dealer => &mut self.dealer_hand,
        };
        hand.add_card(card);
        let total = hand.visible_total();
        self.emit(Command::AddCard { seat, card });
        self.emit(Command::UpdateTotal { seat, total });
    }

    fn credit(&mut self, amount: f64) {
        if let Err(err) = self.ledger.credit(amount) {
            error!(amount, %err, "ledger rejected credit");
        }
    }

    fn clear_insurance(&mut self) {
        self.insurance_bet = 0.0;
        self.has_insurance = false;
        self.insurance_settled = (0.0, 0.0);
    }

    fn emit_repeat_bet(&mut self) {
        let enabled = self.can_repeat_bet();
        let amount = self.last_bet;
        self.emit(Command::UpdateRepeatBet { enabled, amount });
    }

    /// Abandons the round after the shoe ran dry: every stake still on the
    /// table goes back to the player and betting reopens.
    fn void_round(&mut self, err: ShoeError) {
        warn!(%err, bet = self.current_bet, "voiding round");
        let refund = self.current_bet + self.insurance_bet;
        if refund > 0.0 {
            self.credit(refund);
        }
        self.shoe.discard_hand(&mut self.player_hand);
        self.shoe.discard_hand(&mut self.dealer_hand);
        self.current_bet = 0.0;
        self.clear_insurance();

        self.message(format!("{err}. Round voided and bet returned."));
        self.emit(Command::ClearHands);
        self.emit(Command::DisplayBankroll(self.ledger.balance()));
        self.emit(Command::DisplayBet(0.0));
        self.transition(GameState::WaitingForBet);
        self.emit(Command::EnableBetting);
        self.emit_repeat_bet();
    }
}
