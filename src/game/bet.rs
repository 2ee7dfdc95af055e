use alloc::format;

use tracing::info;

use crate::error::{BetError, DealError};
use crate::hand::Seat;
use crate::pacing::Pacer;
use crate::presentation::{Command, Presentation};

use super::{Game, GameState, dollars};

impl<P: Presentation, C: Pacer> Game<P, C> {
    /// Places the stake for the next round.
    ///
    /// A bet placed while another is pending replaces it; the pending stake
    /// is credited back first. Ignored outside [`GameState::WaitingForBet`].
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is outside the table limits or exceeds
    /// the balance (counting a pending stake as available). Nothing is
    /// debited on error.
    pub fn place_bet(&mut self, amount: f64) -> Result<(), BetError> {
        if self.state != GameState::WaitingForBet {
            self.ignored("place_bet");
            return Ok(());
        }

        if let Err(err) = self.check_bet(amount) {
            self.message(match err {
                BetError::BelowMinimum => format!(
                    "Bet is below table minimum of {}",
                    dollars(self.options.min_bet)
                ),
                BetError::AboveMaximum => format!(
                    "Bet exceeds table maximum of {}",
                    dollars(self.options.max_bet)
                ),
                _ => format!("{err}"),
            });
            return Err(err);
        }

        let pending = core::mem::take(&mut self.current_bet);
        if pending > 0.0 {
            self.credit(pending);
        }
        if let Err(err) = self.ledger.place_bet(amount) {
            self.message(format!("{err}"));
            self.emit(Command::DisplayBet(0.0));
            self.emit(Command::DisplayBankroll(self.ledger.balance()));
            return Err(err.into());
        }

        self.current_bet = amount;
        info!(amount, balance = self.ledger.balance(), "bet placed");
        self.emit(Command::DisplayBet(amount));
        self.emit(Command::DisplayBankroll(self.ledger.balance()));
        self.emit(Command::EnableDeal);
        Ok(())
    }

    fn check_bet(&self, amount: f64) -> Result<(), BetError> {
        if amount.is_nan() || amount < self.options.min_bet {
            return Err(BetError::BelowMinimum);
        }
        if amount > self.options.max_bet {
            return Err(BetError::AboveMaximum);
        }
        if amount > self.ledger.balance() + self.current_bet {
            return Err(BetError::InsufficientFunds);
        }
        Ok(())
    }

    /// Withdraws a pending, undealt bet.
    ///
    /// Ignored outside [`GameState::WaitingForBet`] or when nothing is staked.
    pub fn clear_bet(&mut self) {
        if self.state != GameState::WaitingForBet || self.current_bet <= 0.0 {
            self.ignored("clear_bet");
            return;
        }

        let pending = self.current_bet;
        self.current_bet = 0.0;
        self.credit(pending);
        self.emit(Command::DisplayBet(0.0));
        self.emit(Command::DisplayBankroll(self.ledger.balance()));
    }

    /// Returns whether [`repeat_last_bet`](Self::repeat_last_bet) would be
    /// accepted right now.
    pub fn can_repeat_bet(&self) -> bool {
        self.last_bet > 0.0
            && self.state == GameState::WaitingForBet
            && self.last_bet <= self.ledger.balance() + self.current_bet
    }

    /// Places the previous round's stake again and deals immediately.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NoPreviousBet`] if no round has been played, or the
    /// error from placing the bet or dealing.
    pub fn repeat_last_bet(&mut self) -> Result<(), BetError> {
        if self.last_bet <= 0.0 {
            self.message("No previous bet to repeat");
            return Err(BetError::NoPreviousBet);
        }
        if self.state != GameState::WaitingForBet {
            self.message("Cannot place bet at this time");
            self.ignored("repeat_last_bet");
            return Ok(());
        }
        if self.last_bet > self.ledger.balance() + self.current_bet {
            self.message(format!(
                "Insufficient funds. Need {}, have {}",
                dollars(self.last_bet),
                dollars(self.ledger.balance())
            ));
            return Err(BetError::InsufficientFunds);
        }

        self.place_bet(self.last_bet)?;
        self.deal()?;
        Ok(())
    }

    /// Deals the opening four cards: player, dealer up-card, player, dealer
    /// hole card (face down).
    ///
    /// Moves on to the insurance offer when the dealer shows an Ace and
    /// insurance is offered, otherwise straight to the blackjack check.
    /// Ignored outside [`GameState::WaitingForBet`].
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NoBet`] if nothing is staked and
    /// [`DealError::NotEnoughCards`] if the shoe cannot supply four cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::WaitingForBet {
            self.ignored("deal");
            return Ok(());
        }
        if self.current_bet <= 0.0 {
            self.message("Please place a bet first");
            return Err(DealError::NoBet);
        }
        if self.shoe.cards_available() < 4 {
            self.message("Not enough cards in the shoe");
            return Err(DealError::NotEnoughCards);
        }

        self.transition(GameState::DealingCards);
        self.last_result = None;
        self.player_hand.clear();
        self.dealer_hand.clear();

        for (seat, face_down) in [
            (Seat::Player, false),
            (Seat::Dealer, false),
            (Seat::Player, false),
            (Seat::Dealer, true),
        ] {
            let card = match self.shoe.draw() {
                Ok(card) if face_down => card.turned_down(),
                Ok(card) => card,
                Err(err) => {
                    self.void_round(err);
                    return Err(err.into());
                }
            };
            let hand = match seat {
                Seat::Player => &mut self.player_hand,
                Seat::Dealer => &mut self.dealer_hand,
            };
            hand.add_card(card);
        }

        info!(
            player = %self.player_hand,
            dealer_up = ?self.dealer_hand.up_card(),
            bet = self.current_bet,
            "dealt"
        );
        self.render_hand(Seat::Player);
        self.render_hand(Seat::Dealer);

        let dealer_shows_ace = self.dealer_hand.up_card().is_some_and(|card| card.is_ace());
        if dealer_shows_ace && self.options.insurance {
            self.transition(GameState::OfferingInsurance);
            self.offer_insurance();
        } else {
            self.transition(GameState::CheckingBlackjack);
            self.check_blackjack();
        }

        Ok(())
    }
}
